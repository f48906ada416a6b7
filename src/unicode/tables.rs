// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.
//
// `BLOCK_INDEX[cp >> 7]` selects a 128-entry block of `BLOCKS`; each byte of a
// block indexes `RECORDS`. Decomposition mappings are single-level, as listed
// in UnicodeData.txt; Hangul syllables are decomposed algorithmically.

use super::Category::{self, *};
use super::Decomposition;
use phf::{Map, phf_map};

pub(super) const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub(super) const BLOCK_SHIFT: u32 = 7;
pub(super) const BLOCK_MASK: u32 = 0x7F;

/// `(category, combining class, full composition exclusion)`
pub(super) static RECORDS: [(Category, u8, bool); 100] = [
    (Cn, 0, false),
    (Cc, 0, false),
    (Zs, 0, false),
    (Po, 0, false),
    (Sc, 0, false),
    (Ps, 0, false),
    (Pe, 0, false),
    (Sm, 0, false),
    (Pd, 0, false),
    (Nd, 0, false),
    (Lu, 0, false),
    (Sk, 0, false),
    (Pc, 0, false),
    (Ll, 0, false),
    (So, 0, false),
    (Lo, 0, false),
    (Pi, 0, false),
    (Cf, 0, false),
    (No, 0, false),
    (Pf, 0, false),
    (Lt, 0, false),
    (Lm, 0, false),
    (Mn, 230, false),
    (Mn, 232, false),
    (Mn, 220, false),
    (Mn, 216, false),
    (Mn, 202, false),
    (Mn, 1, false),
    (Mn, 230, true),
    (Mn, 240, false),
    (Mn, 0, false),
    (Mn, 233, false),
    (Mn, 234, false),
    (Lm, 0, true),
    (Po, 0, true),
    (Me, 0, false),
    (Mn, 222, false),
    (Mn, 228, false),
    (Mn, 10, false),
    (Mn, 11, false),
    (Mn, 12, false),
    (Mn, 13, false),
    (Mn, 14, false),
    (Mn, 15, false),
    (Mn, 16, false),
    (Mn, 17, false),
    (Mn, 18, false),
    (Mn, 19, false),
    (Mn, 20, false),
    (Mn, 21, false),
    (Mn, 22, false),
    (Mn, 23, false),
    (Mn, 24, false),
    (Mn, 25, false),
    (Mn, 30, false),
    (Mn, 31, false),
    (Mn, 32, false),
    (Mn, 27, false),
    (Mn, 28, false),
    (Mn, 29, false),
    (Mn, 33, false),
    (Mn, 34, false),
    (Mn, 35, false),
    (Mn, 36, false),
    (Mc, 0, false),
    (Mn, 7, false),
    (Mn, 9, false),
    (Lo, 0, true),
    (Mn, 84, false),
    (Mn, 91, false),
    (Mn, 103, false),
    (Mn, 107, false),
    (Mn, 118, false),
    (Mn, 122, false),
    (Mn, 129, false),
    (Mn, 130, false),
    (Mn, 0, true),
    (Mn, 132, false),
    (Nl, 0, false),
    (Mc, 9, false),
    (Mn, 214, false),
    (Mn, 218, false),
    (Ll, 0, true),
    (Lu, 0, true),
    (Sk, 0, true),
    (Zs, 0, true),
    (Zl, 0, false),
    (Zp, 0, false),
    (Ps, 0, true),
    (Pe, 0, true),
    (Sm, 0, true),
    (Mc, 224, false),
    (Mn, 8, false),
    (Cs, 0, false),
    (Co, 0, false),
    (Mn, 26, false),
    (Mc, 6, false),
    (So, 0, true),
    (Mc, 216, false),
    (Mc, 226, false),
];

pub(super) static BLOCK_INDEX: [u8; 8704] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 34, 35, 36, 37, 38, 39, 34, 34, 34, 40, 41, 42, 43,
    44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 64, 65, 66,
    67, 68, 69, 70, 71, 69, 72, 73, 69, 69, 64, 74, 64, 75, 76, 77, 78, 79, 80, 81, 82, 83, 69, 84,
    85, 86, 87, 88, 89, 90, 69, 69, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 91, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 92, 34, 34, 34, 34, 34, 34, 34, 34, 93, 34, 34, 94, 95, 96, 97,
    98, 99, 100, 101, 102, 103, 104, 105, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 106,
    107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 107, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 109, 109, 110, 111, 112, 113,
    34, 34, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 34, 34, 132, 133,
    134, 135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 124, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 124,
    156, 157, 124, 158, 159, 160, 161, 124, 162, 163, 164, 165, 166, 167, 124, 124, 168, 169, 170, 171, 124, 172, 124, 173,
    34, 34, 34, 34, 34, 34, 34, 174, 175, 34, 176, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 177, 34, 34, 34, 34, 34, 34, 34, 34, 178, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    34, 34, 34, 34, 179, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    34, 34, 34, 34, 180, 181, 182, 183, 124, 124, 124, 124, 184, 185, 186, 187, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 188, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 189, 190, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 191,
    34, 34, 192, 34, 34, 193, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    194, 195, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 196, 197, 69, 198, 199, 200, 201, 202, 203, 124,
    204, 205, 206, 207, 208, 209, 210, 211, 69, 69, 69, 69, 212, 213, 124, 124, 124, 124, 124, 124, 124, 124, 214, 124,
    215, 124, 216, 124, 124, 217, 124, 124, 124, 124, 124, 124, 124, 124, 124, 218, 34, 219, 220, 124, 124, 124, 124, 124,
    221, 222, 223, 124, 224, 225, 124, 124, 226, 227, 228, 229, 230, 124, 69, 231, 69, 69, 69, 69, 69, 232, 233, 234,
    235, 236, 69, 69, 237, 238, 69, 239, 124, 124, 124, 124, 124, 124, 124, 124, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 240, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 241, 34,
    242, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 243, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 244, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 109, 109, 109, 109, 245, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34,
    34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 34, 246, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 247, 124, 248, 249, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124, 124,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 250, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108,
    108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 108, 250,
];

pub(super) static BLOCKS: [u8; 32128] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 3, 3, 3, 4, 3, 3, 3, 5, 6, 3, 7, 3, 8, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 7, 7, 7, 3,
    3, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 5, 3, 6, 11, 12,
    11, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 5, 7, 6, 7, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    2, 3, 4, 4, 4, 4, 14, 3, 11, 14, 15, 16, 7, 17, 14, 11, 14, 7, 18, 18, 11, 13, 3, 3, 11, 18, 15, 19, 18, 18, 18, 3,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 7, 10, 10, 10, 10, 10, 10, 10, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 7, 13, 13, 13, 13, 13, 13, 13, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 10, 13, 10, 13, 10, 13, 10,
    13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 10, 13, 10, 13, 10, 13, 13,
    13, 10, 10, 13, 10, 13, 10, 10, 13, 10, 10, 10, 13, 13, 10, 10, 10, 10, 13, 10, 10, 13, 10, 10, 10, 13, 13, 13, 10, 10, 13, 10,
    10, 13, 10, 13, 10, 13, 10, 10, 13, 10, 13, 13, 10, 13, 10, 10, 13, 10, 10, 10, 13, 10, 13, 10, 10, 13, 13, 15, 10, 13, 13, 13,
    15, 15, 15, 15, 10, 20, 13, 10, 20, 13, 10, 20, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 10, 20, 13, 10, 13, 10, 10, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 13, 13, 13, 13, 13, 10, 10, 13, 10, 10, 13,
    13, 10, 13, 10, 10, 10, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 15, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 11, 11, 11, 11, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
    21, 21, 21, 21, 21, 11, 11, 11, 11, 11, 11, 11, 21, 11, 21, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 23, 24, 24, 24, 24, 23, 25, 24, 24, 24, 24,
    24, 26, 26, 24, 24, 24, 24, 26, 26, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 27, 27, 27, 27, 27, 24, 24, 24, 24, 22, 22, 22,
    28, 28, 22, 28, 28, 29, 22, 24, 24, 24, 22, 22, 22, 24, 24, 30, 22, 22, 22, 24, 24, 24, 24, 22, 23, 24, 24, 22, 31, 32, 32, 31,
    32, 32, 31, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 10, 13, 10, 13, 33, 11, 10, 13, 0, 0, 21, 13, 13, 13, 34, 10,
    0, 0, 0, 0, 11, 11, 10, 34, 10, 10, 10, 0, 10, 0, 10, 10, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 13, 13, 10, 10, 10, 13, 13, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 13, 13, 13, 10, 13, 7, 10, 13, 10, 10, 13, 13, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 14, 22, 22, 22, 22, 22, 35, 35, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 0, 21, 3, 3, 3, 3, 3, 3,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 3, 8, 0, 0, 14, 14, 4, 0, 24, 22, 22, 22, 22, 24, 22, 22, 22, 36, 24, 22, 22, 22, 22,
    22, 22, 24, 24, 24, 24, 24, 24, 22, 22, 24, 22, 22, 36, 37, 22, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 47, 48, 49, 50, 8, 51,
    3, 52, 53, 3, 22, 24, 3, 46, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 15, 15, 15, 15, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    17, 17, 17, 17, 17, 17, 7, 7, 7, 3, 3, 4, 3, 3, 14, 14, 22, 22, 22, 22, 22, 22, 22, 22, 54, 55, 56, 3, 17, 3, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    21, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 57, 58, 59, 54, 55, 56, 60, 61, 22, 22, 24, 24, 22, 22, 22, 22, 22, 24, 22, 22, 24,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 3, 3, 15, 15, 62, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3, 15, 22, 22, 22, 22, 22, 22, 22, 17, 14, 22,
    22, 22, 22, 24, 22, 21, 21, 22, 22, 14, 24, 22, 22, 24, 15, 15, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 14, 14, 15,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 17, 15, 63, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 24, 22, 22, 24, 22, 22, 24, 24, 24, 22, 24, 24, 22, 24, 22,
    22, 22, 24, 22, 24, 22, 24, 22, 24, 22, 22, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 22, 22, 22, 22, 22, 22, 24, 22, 21, 21, 14, 3, 3, 3, 21, 0, 0, 24, 4, 4,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 22, 22, 22, 21, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 21, 22, 22, 22, 21, 22, 22, 22, 22, 22, 0, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 24, 24, 24, 0, 0, 3, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 11, 15, 15, 15, 15, 15, 15, 0, 17, 17, 0, 0, 0, 0, 0, 0, 22, 24, 24, 24, 22, 22, 22, 22,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 22, 22, 22, 22, 22, 24, 24, 24, 24, 24, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    22, 22, 17, 24, 22, 22, 24, 22, 22, 24, 22, 22, 22, 24, 24, 24, 57, 58, 59, 22, 22, 22, 24, 22, 22, 24, 24, 22, 22, 22, 22, 22,
    30, 30, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 64, 65, 15, 64, 64,
    64, 30, 30, 30, 30, 30, 30, 30, 30, 64, 64, 64, 64, 66, 64, 64, 15, 22, 24, 22, 22, 30, 30, 30, 67, 67, 67, 67, 67, 67, 67, 67,
    15, 15, 30, 30, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 21, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 30, 64, 64, 0, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 0, 0, 0, 15, 15, 15, 15, 0, 0, 65, 15, 64, 64,
    64, 30, 30, 30, 30, 0, 0, 64, 64, 0, 0, 64, 64, 66, 15, 0, 0, 0, 0, 0, 0, 0, 0, 64, 0, 0, 0, 0, 67, 67, 0, 67,
    15, 15, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 4, 4, 18, 18, 18, 18, 18, 18, 14, 4, 15, 3, 22, 0,
    0, 30, 30, 64, 0, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 67, 0, 15, 67, 0, 15, 15, 0, 0, 65, 0, 64, 64,
    64, 30, 30, 0, 0, 0, 0, 30, 30, 0, 0, 30, 30, 66, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 0, 67, 67, 67, 15, 0, 67, 0,
    0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 30, 30, 15, 15, 15, 30, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 30, 30, 64, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 0, 0, 65, 15, 64, 64,
    64, 30, 30, 30, 30, 30, 0, 30, 30, 64, 0, 64, 64, 66, 0, 0, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 4, 0, 0, 0, 0, 0, 0, 0, 15, 30, 30, 30, 30, 30, 30,
    0, 30, 64, 64, 0, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 0, 0, 65, 15, 64, 30,
    64, 30, 30, 30, 30, 0, 0, 64, 64, 0, 0, 64, 64, 66, 0, 0, 0, 0, 0, 0, 0, 30, 30, 64, 0, 0, 0, 0, 67, 67, 0, 15,
    15, 15, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 14, 15, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 30, 15, 0, 15, 15, 15, 15, 15, 15, 0, 0, 0, 15, 15, 15, 0, 15, 15, 15, 15, 0, 0, 0, 15, 15, 0, 15, 0, 15, 15,
    0, 0, 0, 15, 15, 0, 0, 0, 15, 15, 15, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 64, 64,
    30, 64, 64, 0, 0, 0, 64, 64, 64, 0, 64, 64, 64, 66, 0, 0, 15, 0, 0, 0, 0, 0, 0, 64, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 18, 18, 14, 14, 14, 14, 14, 14, 4, 14, 0, 0, 0, 0, 0,
    30, 64, 64, 64, 30, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 65, 15, 30, 30,
    30, 64, 64, 64, 64, 0, 30, 30, 30, 0, 30, 30, 30, 66, 0, 0, 0, 0, 0, 0, 0, 68, 69, 0, 15, 15, 15, 0, 0, 15, 0, 0,
    15, 15, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 0, 3, 18, 18, 18, 18, 18, 18, 18, 14,
    15, 30, 64, 64, 3, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 0, 0, 65, 15, 64, 30,
    64, 64, 64, 64, 64, 0, 30, 64, 64, 0, 64, 64, 30, 66, 0, 0, 0, 0, 0, 0, 0, 64, 64, 0, 0, 0, 0, 0, 0, 15, 15, 0,
    15, 15, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    30, 30, 64, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 66, 66, 15, 64, 64,
    64, 30, 30, 30, 30, 0, 64, 64, 64, 0, 64, 64, 64, 66, 15, 14, 0, 0, 0, 0, 15, 15, 15, 64, 18, 18, 18, 18, 18, 18, 18, 15,
    15, 15, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 15, 15, 15, 15, 15, 15,
    0, 30, 64, 64, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 66, 0, 0, 0, 0, 64, 64, 64, 30, 30, 30, 0, 30, 0, 64, 64, 64, 64, 64, 64, 64, 64,
    0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 64, 64, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 15, 15, 30, 30, 30, 30, 70, 70, 66, 0, 0, 0, 0, 4,
    15, 15, 15, 15, 15, 15, 21, 30, 71, 71, 71, 71, 30, 30, 30, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 15, 15, 0, 15, 0, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 0, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 15, 15, 30, 30, 30, 30, 72, 72, 66, 30, 30, 15, 0, 0,
    15, 15, 15, 15, 15, 0, 21, 0, 73, 73, 73, 73, 30, 30, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 15, 15, 15, 15,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 14, 14, 14, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 14, 3, 14, 14, 14, 24, 24, 14, 14, 14, 14, 14, 14,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 24, 14, 24, 14, 25, 5, 6, 5, 6, 64, 64,
    15, 15, 15, 67, 15, 15, 15, 15, 0, 15, 15, 15, 15, 67, 15, 15, 15, 15, 67, 15, 15, 15, 15, 67, 15, 15, 15, 15, 67, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 67, 15, 15, 15, 0, 0, 0, 0, 74, 75, 76, 77, 76, 76, 30, 76, 30, 75, 75, 75, 75, 30, 64,
    75, 76, 22, 22, 66, 3, 22, 22, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 76, 30, 30, 30, 30, 0, 30, 30, 30, 30, 76, 30, 30,
    30, 30, 76, 30, 30, 30, 30, 76, 30, 30, 30, 30, 76, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 76, 30, 30, 30, 0, 14, 14,
    14, 14, 14, 14, 14, 14, 24, 14, 14, 14, 14, 14, 14, 0, 14, 14, 3, 3, 3, 3, 3, 14, 14, 14, 14, 3, 3, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 30, 30, 30, 30, 64, 30, 30, 30, 30, 30, 65, 64, 66, 66, 64, 64, 30, 30, 15,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 3, 3, 3, 3, 15, 15, 15, 15, 15, 15, 64, 64, 30, 30, 15, 15, 15, 15, 30, 30,
    30, 15, 64, 64, 64, 15, 15, 64, 64, 64, 64, 64, 64, 64, 15, 15, 15, 30, 30, 30, 30, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 30, 64, 64, 30, 30, 64, 64, 64, 64, 64, 64, 24, 15, 64, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 64, 64, 64, 30, 14, 14,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 0, 10, 0, 0, 0, 0, 0, 10, 0, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 3, 21, 13, 13, 13,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 0, 15, 15, 15, 15, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 0,
    15, 0, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 22, 22, 22,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 0, 13, 13, 13, 13, 13, 13, 0, 0,
    8, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    2, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 5, 6, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3, 3, 3, 78, 78, 78, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 66, 79, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 79, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 0, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 64, 30, 30, 30, 30, 30, 30, 30, 64, 64,
    64, 64, 64, 64, 64, 64, 30, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30, 30, 66, 30, 3, 3, 3, 21, 3, 3, 3, 4, 15, 22, 0, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0,
    3, 3, 3, 3, 3, 3, 8, 3, 3, 3, 3, 30, 30, 30, 17, 30, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 21, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 30, 30, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 37, 15, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    30, 30, 30, 64, 64, 64, 64, 30, 30, 64, 64, 64, 0, 0, 0, 0, 64, 64, 30, 64, 64, 64, 64, 64, 64, 36, 22, 24, 0, 0, 0, 0,
    14, 0, 0, 0, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 0, 0, 0, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 24, 64, 64, 30, 0, 0, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 30, 64, 30, 30, 30, 30, 30, 30, 30, 0,
    66, 64, 30, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30, 64, 64, 64, 64, 64, 64, 30, 30, 22, 22, 22, 22, 22, 22, 22, 22, 0, 0, 24,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    3, 3, 3, 3, 3, 3, 3, 21, 3, 3, 3, 3, 3, 3, 0, 0, 22, 22, 22, 22, 22, 24, 24, 24, 24, 24, 24, 22, 22, 24, 35, 24,
    24, 22, 22, 24, 24, 22, 22, 22, 22, 22, 24, 22, 22, 22, 22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    30, 30, 30, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 65, 64, 30, 30, 30, 30, 30, 64, 30, 64, 64, 64,
    64, 64, 30, 64, 79, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 3, 3, 3, 3,
    3, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 22, 24, 22, 22, 22, 22, 22, 22, 22, 14, 14, 14, 14, 14, 14, 14, 14, 14, 3, 3, 0,
    30, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 64, 30, 30, 30, 30, 64, 64, 30, 30, 79, 66, 30, 30, 15, 15, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 65, 64, 30, 30, 64, 64, 64, 30, 64, 30, 30, 30, 79, 79, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 64, 64, 64, 64, 64, 64, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30, 64, 64, 30, 65, 0, 0, 0, 3, 3, 3, 3, 3,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 15, 15, 15, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 21, 21, 21, 21, 21, 3, 3,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 0, 0, 0, 0, 0, 0, 0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 0, 10, 10, 10,
    3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 22, 22, 22, 3, 27, 24, 24, 24, 24, 24, 22, 22, 24, 24, 24, 24,
    22, 64, 27, 27, 27, 27, 27, 27, 27, 15, 15, 15, 15, 24, 15, 15, 15, 15, 15, 15, 22, 15, 15, 64, 22, 22, 15, 0, 0, 0, 0, 0,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 21, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    22, 22, 24, 22, 22, 22, 22, 22, 22, 22, 24, 22, 22, 32, 80, 24, 26, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 23, 37, 37, 24, 81, 22, 31, 24, 22, 24,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 0, 0, 10, 10, 10, 10, 10, 10, 0, 0,
    13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10,
    13, 13, 13, 13, 13, 13, 0, 0, 10, 10, 10, 10, 10, 10, 0, 0, 13, 13, 13, 13, 13, 13, 13, 13, 0, 10, 0, 10, 0, 10, 0, 10,
    13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 13, 82, 13, 82, 13, 82, 13, 82, 13, 82, 13, 82, 13, 82, 0, 0,
    13, 13, 13, 13, 13, 13, 13, 13, 20, 20, 20, 20, 20, 20, 20, 20, 13, 13, 13, 13, 13, 13, 13, 13, 20, 20, 20, 20, 20, 20, 20, 20,
    13, 13, 13, 13, 13, 13, 13, 13, 20, 20, 20, 20, 20, 20, 20, 20, 13, 13, 13, 13, 13, 0, 13, 13, 10, 10, 10, 83, 20, 11, 82, 11,
    11, 11, 13, 13, 13, 0, 13, 13, 10, 83, 10, 83, 20, 11, 11, 11, 13, 13, 13, 82, 0, 0, 13, 13, 10, 10, 10, 83, 0, 11, 11, 11,
    13, 13, 13, 82, 13, 13, 13, 13, 10, 10, 10, 83, 10, 11, 84, 84, 0, 0, 13, 13, 13, 0, 13, 13, 10, 83, 10, 83, 20, 84, 11, 0,
    85, 85, 2, 2, 2, 2, 2, 2, 2, 2, 2, 17, 17, 17, 17, 17, 8, 8, 8, 8, 8, 8, 3, 3, 16, 19, 5, 16, 16, 19, 5, 16,
    3, 3, 3, 3, 3, 3, 3, 3, 86, 87, 17, 17, 17, 17, 17, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 16, 19, 3, 3, 3, 3, 12,
    12, 3, 3, 3, 7, 5, 6, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 7, 3, 12, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2,
    17, 17, 17, 17, 17, 0, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 18, 21, 0, 0, 18, 18, 18, 18, 18, 18, 7, 7, 7, 5, 6, 21,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 7, 7, 7, 5, 6, 0, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 0, 0, 0,
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 22, 22, 27, 27, 22, 22, 22, 22, 27, 27, 27, 22, 22, 35, 35, 35,
    35, 22, 35, 35, 35, 27, 27, 22, 24, 22, 27, 27, 24, 24, 24, 24, 22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 10, 14, 14, 14, 14, 10, 14, 14, 13, 10, 10, 10, 13, 13, 10, 10, 10, 13, 14, 10, 14, 14, 7, 10, 10, 10, 10, 10, 14, 14,
    14, 14, 14, 14, 10, 14, 83, 14, 10, 14, 83, 83, 10, 10, 14, 13, 10, 10, 10, 10, 13, 15, 15, 15, 15, 13, 14, 14, 13, 13, 10, 10,
    7, 7, 7, 7, 7, 10, 13, 13, 13, 13, 14, 7, 14, 14, 13, 14, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    78, 78, 78, 10, 13, 78, 78, 78, 78, 18, 14, 14, 0, 0, 0, 0, 7, 7, 7, 7, 7, 14, 14, 14, 14, 14, 7, 7, 14, 14, 14, 14,
    7, 14, 14, 7, 14, 14, 7, 14, 14, 14, 14, 14, 14, 14, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 7, 14, 14, 7, 14, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    14, 14, 14, 14, 14, 14, 14, 14, 5, 6, 5, 6, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    7, 7, 14, 14, 14, 14, 14, 14, 14, 88, 89, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 7, 7, 7,
    7, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 7, 7, 7, 7, 7, 7, 7,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    7, 7, 7, 7, 7, 5, 6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 5, 6, 5, 6, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 5, 6, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 90, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 14, 14, 7, 7, 7, 7, 7, 7, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    10, 13, 10, 10, 10, 13, 13, 10, 13, 10, 13, 10, 13, 10, 10, 10, 10, 13, 10, 13, 13, 10, 13, 13, 13, 13, 13, 13, 21, 21, 10, 10,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 13, 14, 14, 14, 14, 14, 14, 10, 13, 10, 13, 22, 22, 22, 10, 13, 0, 0, 0, 0, 0, 3, 3, 3, 3, 18, 3, 3,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 0, 13, 0, 0, 0, 0, 0, 13, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 21, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 66,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    3, 3, 16, 19, 16, 19, 3, 3, 3, 16, 19, 3, 16, 19, 3, 3, 3, 3, 3, 3, 3, 3, 3, 8, 3, 3, 8, 3, 16, 19, 3, 3,
    16, 19, 5, 6, 5, 6, 5, 6, 5, 6, 3, 3, 3, 3, 3, 21, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 8, 8, 3, 3, 3, 3,
    8, 3, 5, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 14, 14, 3, 3, 3, 5, 6, 5, 6, 5, 6, 5, 6, 8, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0,
    2, 3, 3, 3, 14, 21, 15, 78, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 14, 14, 5, 6, 5, 6, 5, 6, 5, 6, 8, 5, 6, 6,
    14, 78, 78, 78, 78, 78, 78, 78, 78, 78, 81, 37, 23, 36, 91, 91, 8, 21, 21, 21, 21, 21, 14, 14, 78, 78, 78, 21, 15, 3, 14, 14,
    0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 92, 92, 11, 11, 21, 21, 15,
    8, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3, 21, 21, 21, 15,
    0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 14, 14, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 18, 18, 18, 18, 18, 18, 18, 18, 14, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 21, 21, 21, 21, 21, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 3, 3, 3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 15, 22, 35, 35, 35, 3, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 3, 21,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 21, 21, 22, 22,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 22, 22, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0,
    11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    11, 11, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 13, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 21, 13, 13, 13, 13, 13, 13, 13, 13, 10, 13, 10, 13, 10, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 21, 11, 11, 10, 13, 10, 13, 15, 10, 13, 10, 13, 13, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 10, 10, 10, 10, 13, 10, 10, 10, 10, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13, 10, 13,
    10, 13, 10, 13, 10, 10, 10, 10, 13, 10, 13, 0, 0, 0, 0, 0, 10, 13, 0, 13, 0, 13, 10, 13, 10, 13, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 21, 21, 21, 10, 13, 15, 21, 21, 13, 15, 15, 15, 15, 15,
    15, 15, 30, 15, 15, 15, 66, 15, 15, 15, 15, 30, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 64, 64, 30, 30, 64, 14, 14, 14, 14, 66, 0, 0, 0, 18, 18, 18, 18, 18, 18, 14, 14, 4, 14, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0,
    64, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64,
    64, 64, 64, 64, 66, 30, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 15, 15, 15, 15, 15, 15, 3, 3, 3, 15, 3, 15, 15, 30,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 24, 24, 24, 3, 3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 64, 79, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0,
    30, 30, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 65, 64, 64, 30, 30, 30, 30, 64, 64, 30, 30, 64, 64,
    79, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 21, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 3, 3,
    15, 15, 15, 15, 15, 30, 21, 15, 15, 15, 15, 15, 15, 15, 15, 15, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 15, 15, 15, 15, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 64, 64, 30, 30, 64, 64, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 30, 15, 15, 15, 15, 15, 15, 15, 15, 30, 64, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 3, 3, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 15, 15, 15, 15, 15, 15, 14, 14, 14, 15, 64, 30, 64, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 15, 22, 22, 24, 15, 15, 22, 22, 15, 15, 15, 15, 15, 22, 22,
    15, 22, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 21, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 30, 30, 64, 64, 3, 3, 15, 21, 21, 64, 66, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 11, 21, 21, 21, 21,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 21, 11, 11, 0, 0, 0, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 64, 64, 30, 64, 64, 30, 64, 64, 3, 64, 66, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0,
    93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93,
    93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93,
    93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93,
    93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93, 93,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 15, 15, 67, 15, 67, 15, 15, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 15,
    67, 15, 67, 15, 15, 67, 67, 15, 15, 15, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 0, 0, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    13, 13, 13, 13, 13, 13, 13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 13, 13, 13, 13, 13, 0, 0, 0, 0, 0, 67, 95, 67,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 7, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 0, 67, 67, 67, 67, 67, 0, 67, 0,
    67, 67, 0, 67, 67, 0, 67, 67, 67, 67, 67, 67, 67, 67, 67, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
    11, 11, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 6, 5,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 4, 14, 14, 14,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 3, 3, 3, 3, 3, 3, 3, 5, 6, 3, 0, 0, 0, 0, 0, 0,
    22, 22, 22, 22, 22, 22, 22, 24, 24, 24, 24, 24, 24, 24, 22, 22, 3, 8, 8, 12, 12, 5, 6, 5, 6, 5, 6, 5, 6, 5, 6, 5,
    6, 5, 6, 5, 6, 3, 3, 5, 6, 3, 3, 3, 3, 12, 12, 12, 3, 3, 3, 0, 3, 3, 3, 3, 8, 5, 6, 5, 6, 5, 6, 3,
    3, 3, 7, 8, 7, 7, 7, 0, 3, 4, 3, 3, 0, 0, 0, 0, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 17,
    0, 3, 3, 3, 4, 3, 3, 3, 5, 6, 3, 7, 3, 8, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 7, 7, 7, 3,
    3, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 5, 3, 6, 11, 12,
    11, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 5, 7, 6, 7, 5,
    6, 3, 5, 6, 3, 3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 21, 21,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    0, 0, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 0, 0, 0,
    4, 4, 7, 11, 14, 4, 4, 0, 14, 7, 7, 7, 7, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 17, 17, 17, 14, 14, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0,
    3, 3, 3, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 18, 18, 14, 14, 14, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0,
    14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 24, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    24, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 78, 15, 15, 15, 15, 15, 15, 15, 15, 78, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 22, 22, 22, 22, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 3, 78, 78, 78, 78, 78, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 0, 0, 0, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 10, 10, 10, 10, 10, 10, 10, 0, 10, 10, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 0, 13, 13, 13, 13, 13, 13, 13, 0, 13, 13, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    21, 21, 21, 21, 21, 21, 0, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 0, 21, 21, 21, 21, 21, 21, 21, 21, 21, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 0, 0, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 0, 0, 15, 0, 0, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 3, 18, 18, 18, 18, 18, 18, 18, 18,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 18, 18, 18, 18, 18, 18, 18,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    0, 0, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 18, 18, 18, 18, 18, 18, 0, 0, 0, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 18, 18, 15, 15,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    15, 30, 30, 30, 0, 30, 30, 0, 0, 0, 0, 0, 30, 24, 30, 22, 15, 15, 15, 15, 0, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 22, 27, 24, 0, 0, 0, 0, 66,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 18, 18, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 18, 18, 18,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 14, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 22, 24, 0, 0, 0, 0, 18, 18, 18, 18, 18, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 0, 0, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 22, 22, 22, 22, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 22, 22, 8, 0, 0, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 15, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 24, 24, 22, 22, 22, 24, 22, 24, 24, 24, 24, 18, 18, 18, 18, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 22, 24, 22, 24, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    64, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 66, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 66, 15, 15, 30, 30, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 66,
    30, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 64, 64, 66, 65, 3, 3, 17, 3, 3,
    3, 3, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 17, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    22, 22, 22, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 64, 30, 30, 30, 30, 30, 30, 66, 66, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
    3, 3, 3, 3, 15, 64, 64, 15, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 65, 3, 3, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    30, 30, 64, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30, 30, 64,
    79, 15, 15, 15, 15, 3, 3, 3, 3, 30, 65, 30, 30, 3, 64, 30, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 15, 3, 15, 3, 3, 3,
    0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 64, 64, 30, 79, 65, 30, 3, 3, 3, 3, 3, 3, 30, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 0, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 3, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30,
    64, 64, 64, 30, 30, 30, 30, 30, 30, 65, 66, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    30, 30, 64, 64, 0, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 0, 65, 65, 15, 64, 64,
    30, 64, 64, 64, 64, 0, 0, 64, 64, 0, 0, 64, 64, 79, 0, 0, 15, 0, 0, 0, 0, 0, 0, 64, 0, 0, 0, 0, 0, 15, 15, 15,
    15, 15, 64, 64, 0, 0, 22, 22, 22, 22, 22, 22, 22, 0, 0, 0, 22, 22, 22, 22, 22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30,
    64, 64, 66, 30, 30, 64, 65, 15, 15, 15, 15, 3, 3, 3, 3, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 3, 3, 0, 3, 22, 15,
    15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 30, 30, 64, 30, 64, 64, 64, 64, 30,
    30, 64, 66, 65, 15, 15, 3, 15, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 0, 0, 64, 64, 64, 64, 30, 30, 64, 66,
    65, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 15, 15, 15, 15, 30, 30, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30, 64, 64, 30, 64, 66,
    30, 3, 3, 3, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 64, 30, 64, 64, 30, 30, 30, 30, 30, 30, 79, 65, 15, 3, 0, 0, 0, 0, 0, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 30, 30, 30,
    64, 64, 30, 30, 30, 30, 64, 30, 30, 30, 30, 66, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 18, 3, 3, 3, 14,
    15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 30, 30, 30, 30, 30, 64, 66, 65, 3, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15,
    15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 64, 64, 64, 0, 64, 64, 0, 0, 30, 30, 79, 66, 15,
    64, 15, 64, 65, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 30, 30, 30, 30, 0, 0, 30, 30, 64, 64, 64, 64,
    66, 15, 3, 15, 64, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 66, 30, 30, 30, 30, 64, 15, 30, 30, 30, 30, 3,
    3, 3, 3, 3, 3, 3, 3, 66, 0, 0, 0, 0, 0, 0, 0, 0, 15, 30, 30, 30, 30, 30, 30, 64, 64, 30, 30, 30, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 64, 30, 66, 3, 3, 3, 15, 3, 3,
    3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 30, 30, 30, 30, 30, 30, 30, 0, 30, 30, 30, 30, 30, 30, 64, 66,
    15, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 3, 3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 0, 64, 30, 30, 30, 30, 30, 30, 30, 64, 30, 30, 64, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 30, 30, 30, 30, 0, 0, 0, 30, 0, 30, 30, 0, 30,
    30, 30, 65, 30, 66, 66, 15, 30, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 64, 64, 64, 64, 64, 0, 30, 30, 0, 64, 64, 30, 64, 66, 15, 0, 0, 0, 0, 0, 0, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 30, 30, 64, 64, 3, 3, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14, 14, 4, 4, 4,
    4, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78,
    78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 78, 0, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 17, 17, 17, 17, 17, 17, 17, 17, 17, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 3, 3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 27, 27, 27, 27, 27, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 22, 22, 22, 22, 22, 22, 3, 3, 3, 3, 3, 14, 14, 14, 14,
    21, 21, 21, 21, 3, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 18, 18, 18, 18, 18,
    18, 18, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 3, 3, 3, 3, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 30, 15, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64,
    64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64, 64,
    64, 64, 64, 64, 64, 64, 64, 64, 0, 0, 0, 0, 0, 0, 0, 30, 30, 30, 30, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    21, 21, 3, 21, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 96, 96, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 21, 21, 21, 21, 0, 21, 21, 21, 21, 21, 21, 21, 0, 21, 21, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 14, 30, 27, 3,
    17, 17, 17, 17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 0, 0, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 97, 97,
    97, 97, 97, 97, 97, 98, 98, 27, 27, 27, 14, 14, 14, 99, 98, 98, 98, 98, 98, 17, 17, 17, 17, 17, 17, 17, 17, 24, 24, 24, 24, 24,
    24, 24, 24, 14, 14, 22, 22, 22, 22, 22, 24, 24, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 22, 22, 22, 22, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 97, 97, 97, 97, 97,
    97, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 22, 22, 22, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 0, 10, 10,
    0, 0, 10, 0, 0, 10, 10, 0, 0, 10, 10, 10, 10, 0, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 0, 13, 0, 13, 13, 13,
    13, 13, 13, 13, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 10, 10, 0, 10, 10, 10, 10, 0, 0, 10, 10, 10, 10, 10, 10, 10, 10, 0, 10, 10, 10, 10, 10, 10, 10, 0, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 0, 10, 10, 10, 10, 0,
    10, 10, 10, 10, 10, 0, 10, 0, 0, 0, 10, 10, 10, 10, 10, 10, 10, 0, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 0, 0, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 7, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 7, 13, 13, 13, 13,
    13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 7, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 7, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 7, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 7, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 7, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 7, 13, 13, 13, 13, 13, 13, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 7, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 7, 13, 13, 13, 13, 13, 13, 10, 13, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 14, 14, 14, 14, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 14, 14, 14, 14, 14, 14, 14, 14, 30, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 30, 14, 14, 3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 30, 30, 30, 30, 30,
    0, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 15, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    22, 22, 22, 22, 22, 22, 22, 0, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 0, 0, 22, 22, 22, 22, 22,
    22, 22, 0, 22, 22, 0, 22, 22, 22, 22, 22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 22, 22, 22, 22, 22, 22, 22, 21, 21, 21, 21, 21, 21, 21, 0, 0,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 15, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 22, 22, 22, 22, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 4,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 24, 24, 24, 24, 24, 24, 24, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    13, 13, 13, 13, 22, 22, 22, 22, 22, 22, 65, 21, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 3, 3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 18, 18, 18, 4, 18, 18, 18, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    0, 15, 15, 0, 15, 0, 0, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 15, 0, 15, 0, 0, 0, 0,
    0, 0, 15, 0, 0, 0, 0, 15, 0, 15, 0, 15, 0, 15, 15, 15, 0, 15, 15, 0, 15, 0, 0, 15, 0, 15, 0, 15, 0, 15, 0, 15,
    0, 15, 15, 0, 15, 0, 0, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 15, 15, 15, 15, 0, 15, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0,
    0, 15, 15, 15, 0, 15, 15, 15, 15, 15, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 11, 11, 11, 11, 11,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 14, 14, 14, 14, 14, 0, 0, 0, 14, 14, 14, 14, 14, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 67, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17,
    17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17,
    17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94,
    94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 94, 0, 0,
];

const fn canonical(mapping: &'static [u32]) -> Decomposition {
    Decomposition::canonical(mapping)
}

const fn compat(mapping: &'static [u32]) -> Decomposition {
    Decomposition::compatibility(mapping)
}

pub(super) static DECOMPOSITIONS: Map<u32, Decomposition> = phf_map! {
    0x00A0u32 => compat(&[0x0020]),
    0x00A8u32 => compat(&[0x0020, 0x0308]),
    0x00AAu32 => compat(&[0x0061]),
    0x00AFu32 => compat(&[0x0020, 0x0304]),
    0x00B2u32 => compat(&[0x0032]),
    0x00B3u32 => compat(&[0x0033]),
    0x00B4u32 => compat(&[0x0020, 0x0301]),
    0x00B5u32 => compat(&[0x03BC]),
    0x00B8u32 => compat(&[0x0020, 0x0327]),
    0x00B9u32 => compat(&[0x0031]),
    0x00BAu32 => compat(&[0x006F]),
    0x00BCu32 => compat(&[0x0031, 0x2044, 0x0034]),
    0x00BDu32 => compat(&[0x0031, 0x2044, 0x0032]),
    0x00BEu32 => compat(&[0x0033, 0x2044, 0x0034]),
    0x00C0u32 => canonical(&[0x0041, 0x0300]),
    0x00C1u32 => canonical(&[0x0041, 0x0301]),
    0x00C2u32 => canonical(&[0x0041, 0x0302]),
    0x00C3u32 => canonical(&[0x0041, 0x0303]),
    0x00C4u32 => canonical(&[0x0041, 0x0308]),
    0x00C5u32 => canonical(&[0x0041, 0x030A]),
    0x00C7u32 => canonical(&[0x0043, 0x0327]),
    0x00C8u32 => canonical(&[0x0045, 0x0300]),
    0x00C9u32 => canonical(&[0x0045, 0x0301]),
    0x00CAu32 => canonical(&[0x0045, 0x0302]),
    0x00CBu32 => canonical(&[0x0045, 0x0308]),
    0x00CCu32 => canonical(&[0x0049, 0x0300]),
    0x00CDu32 => canonical(&[0x0049, 0x0301]),
    0x00CEu32 => canonical(&[0x0049, 0x0302]),
    0x00CFu32 => canonical(&[0x0049, 0x0308]),
    0x00D1u32 => canonical(&[0x004E, 0x0303]),
    0x00D2u32 => canonical(&[0x004F, 0x0300]),
    0x00D3u32 => canonical(&[0x004F, 0x0301]),
    0x00D4u32 => canonical(&[0x004F, 0x0302]),
    0x00D5u32 => canonical(&[0x004F, 0x0303]),
    0x00D6u32 => canonical(&[0x004F, 0x0308]),
    0x00D9u32 => canonical(&[0x0055, 0x0300]),
    0x00DAu32 => canonical(&[0x0055, 0x0301]),
    0x00DBu32 => canonical(&[0x0055, 0x0302]),
    0x00DCu32 => canonical(&[0x0055, 0x0308]),
    0x00DDu32 => canonical(&[0x0059, 0x0301]),
    0x00E0u32 => canonical(&[0x0061, 0x0300]),
    0x00E1u32 => canonical(&[0x0061, 0x0301]),
    0x00E2u32 => canonical(&[0x0061, 0x0302]),
    0x00E3u32 => canonical(&[0x0061, 0x0303]),
    0x00E4u32 => canonical(&[0x0061, 0x0308]),
    0x00E5u32 => canonical(&[0x0061, 0x030A]),
    0x00E7u32 => canonical(&[0x0063, 0x0327]),
    0x00E8u32 => canonical(&[0x0065, 0x0300]),
    0x00E9u32 => canonical(&[0x0065, 0x0301]),
    0x00EAu32 => canonical(&[0x0065, 0x0302]),
    0x00EBu32 => canonical(&[0x0065, 0x0308]),
    0x00ECu32 => canonical(&[0x0069, 0x0300]),
    0x00EDu32 => canonical(&[0x0069, 0x0301]),
    0x00EEu32 => canonical(&[0x0069, 0x0302]),
    0x00EFu32 => canonical(&[0x0069, 0x0308]),
    0x00F1u32 => canonical(&[0x006E, 0x0303]),
    0x00F2u32 => canonical(&[0x006F, 0x0300]),
    0x00F3u32 => canonical(&[0x006F, 0x0301]),
    0x00F4u32 => canonical(&[0x006F, 0x0302]),
    0x00F5u32 => canonical(&[0x006F, 0x0303]),
    0x00F6u32 => canonical(&[0x006F, 0x0308]),
    0x00F9u32 => canonical(&[0x0075, 0x0300]),
    0x00FAu32 => canonical(&[0x0075, 0x0301]),
    0x00FBu32 => canonical(&[0x0075, 0x0302]),
    0x00FCu32 => canonical(&[0x0075, 0x0308]),
    0x00FDu32 => canonical(&[0x0079, 0x0301]),
    0x00FFu32 => canonical(&[0x0079, 0x0308]),
    0x0100u32 => canonical(&[0x0041, 0x0304]),
    0x0101u32 => canonical(&[0x0061, 0x0304]),
    0x0102u32 => canonical(&[0x0041, 0x0306]),
    0x0103u32 => canonical(&[0x0061, 0x0306]),
    0x0104u32 => canonical(&[0x0041, 0x0328]),
    0x0105u32 => canonical(&[0x0061, 0x0328]),
    0x0106u32 => canonical(&[0x0043, 0x0301]),
    0x0107u32 => canonical(&[0x0063, 0x0301]),
    0x0108u32 => canonical(&[0x0043, 0x0302]),
    0x0109u32 => canonical(&[0x0063, 0x0302]),
    0x010Au32 => canonical(&[0x0043, 0x0307]),
    0x010Bu32 => canonical(&[0x0063, 0x0307]),
    0x010Cu32 => canonical(&[0x0043, 0x030C]),
    0x010Du32 => canonical(&[0x0063, 0x030C]),
    0x010Eu32 => canonical(&[0x0044, 0x030C]),
    0x010Fu32 => canonical(&[0x0064, 0x030C]),
    0x0112u32 => canonical(&[0x0045, 0x0304]),
    0x0113u32 => canonical(&[0x0065, 0x0304]),
    0x0114u32 => canonical(&[0x0045, 0x0306]),
    0x0115u32 => canonical(&[0x0065, 0x0306]),
    0x0116u32 => canonical(&[0x0045, 0x0307]),
    0x0117u32 => canonical(&[0x0065, 0x0307]),
    0x0118u32 => canonical(&[0x0045, 0x0328]),
    0x0119u32 => canonical(&[0x0065, 0x0328]),
    0x011Au32 => canonical(&[0x0045, 0x030C]),
    0x011Bu32 => canonical(&[0x0065, 0x030C]),
    0x011Cu32 => canonical(&[0x0047, 0x0302]),
    0x011Du32 => canonical(&[0x0067, 0x0302]),
    0x011Eu32 => canonical(&[0x0047, 0x0306]),
    0x011Fu32 => canonical(&[0x0067, 0x0306]),
    0x0120u32 => canonical(&[0x0047, 0x0307]),
    0x0121u32 => canonical(&[0x0067, 0x0307]),
    0x0122u32 => canonical(&[0x0047, 0x0327]),
    0x0123u32 => canonical(&[0x0067, 0x0327]),
    0x0124u32 => canonical(&[0x0048, 0x0302]),
    0x0125u32 => canonical(&[0x0068, 0x0302]),
    0x0128u32 => canonical(&[0x0049, 0x0303]),
    0x0129u32 => canonical(&[0x0069, 0x0303]),
    0x012Au32 => canonical(&[0x0049, 0x0304]),
    0x012Bu32 => canonical(&[0x0069, 0x0304]),
    0x012Cu32 => canonical(&[0x0049, 0x0306]),
    0x012Du32 => canonical(&[0x0069, 0x0306]),
    0x012Eu32 => canonical(&[0x0049, 0x0328]),
    0x012Fu32 => canonical(&[0x0069, 0x0328]),
    0x0130u32 => canonical(&[0x0049, 0x0307]),
    0x0132u32 => compat(&[0x0049, 0x004A]),
    0x0133u32 => compat(&[0x0069, 0x006A]),
    0x0134u32 => canonical(&[0x004A, 0x0302]),
    0x0135u32 => canonical(&[0x006A, 0x0302]),
    0x0136u32 => canonical(&[0x004B, 0x0327]),
    0x0137u32 => canonical(&[0x006B, 0x0327]),
    0x0139u32 => canonical(&[0x004C, 0x0301]),
    0x013Au32 => canonical(&[0x006C, 0x0301]),
    0x013Bu32 => canonical(&[0x004C, 0x0327]),
    0x013Cu32 => canonical(&[0x006C, 0x0327]),
    0x013Du32 => canonical(&[0x004C, 0x030C]),
    0x013Eu32 => canonical(&[0x006C, 0x030C]),
    0x013Fu32 => compat(&[0x004C, 0x00B7]),
    0x0140u32 => compat(&[0x006C, 0x00B7]),
    0x0143u32 => canonical(&[0x004E, 0x0301]),
    0x0144u32 => canonical(&[0x006E, 0x0301]),
    0x0145u32 => canonical(&[0x004E, 0x0327]),
    0x0146u32 => canonical(&[0x006E, 0x0327]),
    0x0147u32 => canonical(&[0x004E, 0x030C]),
    0x0148u32 => canonical(&[0x006E, 0x030C]),
    0x0149u32 => compat(&[0x02BC, 0x006E]),
    0x014Cu32 => canonical(&[0x004F, 0x0304]),
    0x014Du32 => canonical(&[0x006F, 0x0304]),
    0x014Eu32 => canonical(&[0x004F, 0x0306]),
    0x014Fu32 => canonical(&[0x006F, 0x0306]),
    0x0150u32 => canonical(&[0x004F, 0x030B]),
    0x0151u32 => canonical(&[0x006F, 0x030B]),
    0x0154u32 => canonical(&[0x0052, 0x0301]),
    0x0155u32 => canonical(&[0x0072, 0x0301]),
    0x0156u32 => canonical(&[0x0052, 0x0327]),
    0x0157u32 => canonical(&[0x0072, 0x0327]),
    0x0158u32 => canonical(&[0x0052, 0x030C]),
    0x0159u32 => canonical(&[0x0072, 0x030C]),
    0x015Au32 => canonical(&[0x0053, 0x0301]),
    0x015Bu32 => canonical(&[0x0073, 0x0301]),
    0x015Cu32 => canonical(&[0x0053, 0x0302]),
    0x015Du32 => canonical(&[0x0073, 0x0302]),
    0x015Eu32 => canonical(&[0x0053, 0x0327]),
    0x015Fu32 => canonical(&[0x0073, 0x0327]),
    0x0160u32 => canonical(&[0x0053, 0x030C]),
    0x0161u32 => canonical(&[0x0073, 0x030C]),
    0x0162u32 => canonical(&[0x0054, 0x0327]),
    0x0163u32 => canonical(&[0x0074, 0x0327]),
    0x0164u32 => canonical(&[0x0054, 0x030C]),
    0x0165u32 => canonical(&[0x0074, 0x030C]),
    0x0168u32 => canonical(&[0x0055, 0x0303]),
    0x0169u32 => canonical(&[0x0075, 0x0303]),
    0x016Au32 => canonical(&[0x0055, 0x0304]),
    0x016Bu32 => canonical(&[0x0075, 0x0304]),
    0x016Cu32 => canonical(&[0x0055, 0x0306]),
    0x016Du32 => canonical(&[0x0075, 0x0306]),
    0x016Eu32 => canonical(&[0x0055, 0x030A]),
    0x016Fu32 => canonical(&[0x0075, 0x030A]),
    0x0170u32 => canonical(&[0x0055, 0x030B]),
    0x0171u32 => canonical(&[0x0075, 0x030B]),
    0x0172u32 => canonical(&[0x0055, 0x0328]),
    0x0173u32 => canonical(&[0x0075, 0x0328]),
    0x0174u32 => canonical(&[0x0057, 0x0302]),
    0x0175u32 => canonical(&[0x0077, 0x0302]),
    0x0176u32 => canonical(&[0x0059, 0x0302]),
    0x0177u32 => canonical(&[0x0079, 0x0302]),
    0x0178u32 => canonical(&[0x0059, 0x0308]),
    0x0179u32 => canonical(&[0x005A, 0x0301]),
    0x017Au32 => canonical(&[0x007A, 0x0301]),
    0x017Bu32 => canonical(&[0x005A, 0x0307]),
    0x017Cu32 => canonical(&[0x007A, 0x0307]),
    0x017Du32 => canonical(&[0x005A, 0x030C]),
    0x017Eu32 => canonical(&[0x007A, 0x030C]),
    0x017Fu32 => compat(&[0x0073]),
    0x01A0u32 => canonical(&[0x004F, 0x031B]),
    0x01A1u32 => canonical(&[0x006F, 0x031B]),
    0x01AFu32 => canonical(&[0x0055, 0x031B]),
    0x01B0u32 => canonical(&[0x0075, 0x031B]),
    0x01C4u32 => compat(&[0x0044, 0x017D]),
    0x01C5u32 => compat(&[0x0044, 0x017E]),
    0x01C6u32 => compat(&[0x0064, 0x017E]),
    0x01C7u32 => compat(&[0x004C, 0x004A]),
    0x01C8u32 => compat(&[0x004C, 0x006A]),
    0x01C9u32 => compat(&[0x006C, 0x006A]),
    0x01CAu32 => compat(&[0x004E, 0x004A]),
    0x01CBu32 => compat(&[0x004E, 0x006A]),
    0x01CCu32 => compat(&[0x006E, 0x006A]),
    0x01CDu32 => canonical(&[0x0041, 0x030C]),
    0x01CEu32 => canonical(&[0x0061, 0x030C]),
    0x01CFu32 => canonical(&[0x0049, 0x030C]),
    0x01D0u32 => canonical(&[0x0069, 0x030C]),
    0x01D1u32 => canonical(&[0x004F, 0x030C]),
    0x01D2u32 => canonical(&[0x006F, 0x030C]),
    0x01D3u32 => canonical(&[0x0055, 0x030C]),
    0x01D4u32 => canonical(&[0x0075, 0x030C]),
    0x01D5u32 => canonical(&[0x00DC, 0x0304]),
    0x01D6u32 => canonical(&[0x00FC, 0x0304]),
    0x01D7u32 => canonical(&[0x00DC, 0x0301]),
    0x01D8u32 => canonical(&[0x00FC, 0x0301]),
    0x01D9u32 => canonical(&[0x00DC, 0x030C]),
    0x01DAu32 => canonical(&[0x00FC, 0x030C]),
    0x01DBu32 => canonical(&[0x00DC, 0x0300]),
    0x01DCu32 => canonical(&[0x00FC, 0x0300]),
    0x01DEu32 => canonical(&[0x00C4, 0x0304]),
    0x01DFu32 => canonical(&[0x00E4, 0x0304]),
    0x01E0u32 => canonical(&[0x0226, 0x0304]),
    0x01E1u32 => canonical(&[0x0227, 0x0304]),
    0x01E2u32 => canonical(&[0x00C6, 0x0304]),
    0x01E3u32 => canonical(&[0x00E6, 0x0304]),
    0x01E6u32 => canonical(&[0x0047, 0x030C]),
    0x01E7u32 => canonical(&[0x0067, 0x030C]),
    0x01E8u32 => canonical(&[0x004B, 0x030C]),
    0x01E9u32 => canonical(&[0x006B, 0x030C]),
    0x01EAu32 => canonical(&[0x004F, 0x0328]),
    0x01EBu32 => canonical(&[0x006F, 0x0328]),
    0x01ECu32 => canonical(&[0x01EA, 0x0304]),
    0x01EDu32 => canonical(&[0x01EB, 0x0304]),
    0x01EEu32 => canonical(&[0x01B7, 0x030C]),
    0x01EFu32 => canonical(&[0x0292, 0x030C]),
    0x01F0u32 => canonical(&[0x006A, 0x030C]),
    0x01F1u32 => compat(&[0x0044, 0x005A]),
    0x01F2u32 => compat(&[0x0044, 0x007A]),
    0x01F3u32 => compat(&[0x0064, 0x007A]),
    0x01F4u32 => canonical(&[0x0047, 0x0301]),
    0x01F5u32 => canonical(&[0x0067, 0x0301]),
    0x01F8u32 => canonical(&[0x004E, 0x0300]),
    0x01F9u32 => canonical(&[0x006E, 0x0300]),
    0x01FAu32 => canonical(&[0x00C5, 0x0301]),
    0x01FBu32 => canonical(&[0x00E5, 0x0301]),
    0x01FCu32 => canonical(&[0x00C6, 0x0301]),
    0x01FDu32 => canonical(&[0x00E6, 0x0301]),
    0x01FEu32 => canonical(&[0x00D8, 0x0301]),
    0x01FFu32 => canonical(&[0x00F8, 0x0301]),
    0x0200u32 => canonical(&[0x0041, 0x030F]),
    0x0201u32 => canonical(&[0x0061, 0x030F]),
    0x0202u32 => canonical(&[0x0041, 0x0311]),
    0x0203u32 => canonical(&[0x0061, 0x0311]),
    0x0204u32 => canonical(&[0x0045, 0x030F]),
    0x0205u32 => canonical(&[0x0065, 0x030F]),
    0x0206u32 => canonical(&[0x0045, 0x0311]),
    0x0207u32 => canonical(&[0x0065, 0x0311]),
    0x0208u32 => canonical(&[0x0049, 0x030F]),
    0x0209u32 => canonical(&[0x0069, 0x030F]),
    0x020Au32 => canonical(&[0x0049, 0x0311]),
    0x020Bu32 => canonical(&[0x0069, 0x0311]),
    0x020Cu32 => canonical(&[0x004F, 0x030F]),
    0x020Du32 => canonical(&[0x006F, 0x030F]),
    0x020Eu32 => canonical(&[0x004F, 0x0311]),
    0x020Fu32 => canonical(&[0x006F, 0x0311]),
    0x0210u32 => canonical(&[0x0052, 0x030F]),
    0x0211u32 => canonical(&[0x0072, 0x030F]),
    0x0212u32 => canonical(&[0x0052, 0x0311]),
    0x0213u32 => canonical(&[0x0072, 0x0311]),
    0x0214u32 => canonical(&[0x0055, 0x030F]),
    0x0215u32 => canonical(&[0x0075, 0x030F]),
    0x0216u32 => canonical(&[0x0055, 0x0311]),
    0x0217u32 => canonical(&[0x0075, 0x0311]),
    0x0218u32 => canonical(&[0x0053, 0x0326]),
    0x0219u32 => canonical(&[0x0073, 0x0326]),
    0x021Au32 => canonical(&[0x0054, 0x0326]),
    0x021Bu32 => canonical(&[0x0074, 0x0326]),
    0x021Eu32 => canonical(&[0x0048, 0x030C]),
    0x021Fu32 => canonical(&[0x0068, 0x030C]),
    0x0226u32 => canonical(&[0x0041, 0x0307]),
    0x0227u32 => canonical(&[0x0061, 0x0307]),
    0x0228u32 => canonical(&[0x0045, 0x0327]),
    0x0229u32 => canonical(&[0x0065, 0x0327]),
    0x022Au32 => canonical(&[0x00D6, 0x0304]),
    0x022Bu32 => canonical(&[0x00F6, 0x0304]),
    0x022Cu32 => canonical(&[0x00D5, 0x0304]),
    0x022Du32 => canonical(&[0x00F5, 0x0304]),
    0x022Eu32 => canonical(&[0x004F, 0x0307]),
    0x022Fu32 => canonical(&[0x006F, 0x0307]),
    0x0230u32 => canonical(&[0x022E, 0x0304]),
    0x0231u32 => canonical(&[0x022F, 0x0304]),
    0x0232u32 => canonical(&[0x0059, 0x0304]),
    0x0233u32 => canonical(&[0x0079, 0x0304]),
    0x02B0u32 => compat(&[0x0068]),
    0x02B1u32 => compat(&[0x0266]),
    0x02B2u32 => compat(&[0x006A]),
    0x02B3u32 => compat(&[0x0072]),
    0x02B4u32 => compat(&[0x0279]),
    0x02B5u32 => compat(&[0x027B]),
    0x02B6u32 => compat(&[0x0281]),
    0x02B7u32 => compat(&[0x0077]),
    0x02B8u32 => compat(&[0x0079]),
    0x02D8u32 => compat(&[0x0020, 0x0306]),
    0x02D9u32 => compat(&[0x0020, 0x0307]),
    0x02DAu32 => compat(&[0x0020, 0x030A]),
    0x02DBu32 => compat(&[0x0020, 0x0328]),
    0x02DCu32 => compat(&[0x0020, 0x0303]),
    0x02DDu32 => compat(&[0x0020, 0x030B]),
    0x02E0u32 => compat(&[0x0263]),
    0x02E1u32 => compat(&[0x006C]),
    0x02E2u32 => compat(&[0x0073]),
    0x02E3u32 => compat(&[0x0078]),
    0x02E4u32 => compat(&[0x0295]),
    0x0340u32 => canonical(&[0x0300]),
    0x0341u32 => canonical(&[0x0301]),
    0x0343u32 => canonical(&[0x0313]),
    0x0344u32 => canonical(&[0x0308, 0x0301]),
    0x0374u32 => canonical(&[0x02B9]),
    0x037Au32 => compat(&[0x0020, 0x0345]),
    0x037Eu32 => canonical(&[0x003B]),
    0x0384u32 => compat(&[0x0020, 0x0301]),
    0x0385u32 => canonical(&[0x00A8, 0x0301]),
    0x0386u32 => canonical(&[0x0391, 0x0301]),
    0x0387u32 => canonical(&[0x00B7]),
    0x0388u32 => canonical(&[0x0395, 0x0301]),
    0x0389u32 => canonical(&[0x0397, 0x0301]),
    0x038Au32 => canonical(&[0x0399, 0x0301]),
    0x038Cu32 => canonical(&[0x039F, 0x0301]),
    0x038Eu32 => canonical(&[0x03A5, 0x0301]),
    0x038Fu32 => canonical(&[0x03A9, 0x0301]),
    0x0390u32 => canonical(&[0x03CA, 0x0301]),
    0x03AAu32 => canonical(&[0x0399, 0x0308]),
    0x03ABu32 => canonical(&[0x03A5, 0x0308]),
    0x03ACu32 => canonical(&[0x03B1, 0x0301]),
    0x03ADu32 => canonical(&[0x03B5, 0x0301]),
    0x03AEu32 => canonical(&[0x03B7, 0x0301]),
    0x03AFu32 => canonical(&[0x03B9, 0x0301]),
    0x03B0u32 => canonical(&[0x03CB, 0x0301]),
    0x03CAu32 => canonical(&[0x03B9, 0x0308]),
    0x03CBu32 => canonical(&[0x03C5, 0x0308]),
    0x03CCu32 => canonical(&[0x03BF, 0x0301]),
    0x03CDu32 => canonical(&[0x03C5, 0x0301]),
    0x03CEu32 => canonical(&[0x03C9, 0x0301]),
    0x03D0u32 => compat(&[0x03B2]),
    0x03D1u32 => compat(&[0x03B8]),
    0x03D2u32 => compat(&[0x03A5]),
    0x03D3u32 => canonical(&[0x03D2, 0x0301]),
    0x03D4u32 => canonical(&[0x03D2, 0x0308]),
    0x03D5u32 => compat(&[0x03C6]),
    0x03D6u32 => compat(&[0x03C0]),
    0x03F0u32 => compat(&[0x03BA]),
    0x03F1u32 => compat(&[0x03C1]),
    0x03F2u32 => compat(&[0x03C2]),
    0x03F4u32 => compat(&[0x0398]),
    0x03F5u32 => compat(&[0x03B5]),
    0x03F9u32 => compat(&[0x03A3]),
    0x0400u32 => canonical(&[0x0415, 0x0300]),
    0x0401u32 => canonical(&[0x0415, 0x0308]),
    0x0403u32 => canonical(&[0x0413, 0x0301]),
    0x0407u32 => canonical(&[0x0406, 0x0308]),
    0x040Cu32 => canonical(&[0x041A, 0x0301]),
    0x040Du32 => canonical(&[0x0418, 0x0300]),
    0x040Eu32 => canonical(&[0x0423, 0x0306]),
    0x0419u32 => canonical(&[0x0418, 0x0306]),
    0x0439u32 => canonical(&[0x0438, 0x0306]),
    0x0450u32 => canonical(&[0x0435, 0x0300]),
    0x0451u32 => canonical(&[0x0435, 0x0308]),
    0x0453u32 => canonical(&[0x0433, 0x0301]),
    0x0457u32 => canonical(&[0x0456, 0x0308]),
    0x045Cu32 => canonical(&[0x043A, 0x0301]),
    0x045Du32 => canonical(&[0x0438, 0x0300]),
    0x045Eu32 => canonical(&[0x0443, 0x0306]),
    0x0476u32 => canonical(&[0x0474, 0x030F]),
    0x0477u32 => canonical(&[0x0475, 0x030F]),
    0x04C1u32 => canonical(&[0x0416, 0x0306]),
    0x04C2u32 => canonical(&[0x0436, 0x0306]),
    0x04D0u32 => canonical(&[0x0410, 0x0306]),
    0x04D1u32 => canonical(&[0x0430, 0x0306]),
    0x04D2u32 => canonical(&[0x0410, 0x0308]),
    0x04D3u32 => canonical(&[0x0430, 0x0308]),
    0x04D6u32 => canonical(&[0x0415, 0x0306]),
    0x04D7u32 => canonical(&[0x0435, 0x0306]),
    0x04DAu32 => canonical(&[0x04D8, 0x0308]),
    0x04DBu32 => canonical(&[0x04D9, 0x0308]),
    0x04DCu32 => canonical(&[0x0416, 0x0308]),
    0x04DDu32 => canonical(&[0x0436, 0x0308]),
    0x04DEu32 => canonical(&[0x0417, 0x0308]),
    0x04DFu32 => canonical(&[0x0437, 0x0308]),
    0x04E2u32 => canonical(&[0x0418, 0x0304]),
    0x04E3u32 => canonical(&[0x0438, 0x0304]),
    0x04E4u32 => canonical(&[0x0418, 0x0308]),
    0x04E5u32 => canonical(&[0x0438, 0x0308]),
    0x04E6u32 => canonical(&[0x041E, 0x0308]),
    0x04E7u32 => canonical(&[0x043E, 0x0308]),
    0x04EAu32 => canonical(&[0x04E8, 0x0308]),
    0x04EBu32 => canonical(&[0x04E9, 0x0308]),
    0x04ECu32 => canonical(&[0x042D, 0x0308]),
    0x04EDu32 => canonical(&[0x044D, 0x0308]),
    0x04EEu32 => canonical(&[0x0423, 0x0304]),
    0x04EFu32 => canonical(&[0x0443, 0x0304]),
    0x04F0u32 => canonical(&[0x0423, 0x0308]),
    0x04F1u32 => canonical(&[0x0443, 0x0308]),
    0x04F2u32 => canonical(&[0x0423, 0x030B]),
    0x04F3u32 => canonical(&[0x0443, 0x030B]),
    0x04F4u32 => canonical(&[0x0427, 0x0308]),
    0x04F5u32 => canonical(&[0x0447, 0x0308]),
    0x04F8u32 => canonical(&[0x042B, 0x0308]),
    0x04F9u32 => canonical(&[0x044B, 0x0308]),
    0x0587u32 => compat(&[0x0565, 0x0582]),
    0x0622u32 => canonical(&[0x0627, 0x0653]),
    0x0623u32 => canonical(&[0x0627, 0x0654]),
    0x0624u32 => canonical(&[0x0648, 0x0654]),
    0x0625u32 => canonical(&[0x0627, 0x0655]),
    0x0626u32 => canonical(&[0x064A, 0x0654]),
    0x0675u32 => compat(&[0x0627, 0x0674]),
    0x0676u32 => compat(&[0x0648, 0x0674]),
    0x0677u32 => compat(&[0x06C7, 0x0674]),
    0x0678u32 => compat(&[0x064A, 0x0674]),
    0x06C0u32 => canonical(&[0x06D5, 0x0654]),
    0x06C2u32 => canonical(&[0x06C1, 0x0654]),
    0x06D3u32 => canonical(&[0x06D2, 0x0654]),
    0x0929u32 => canonical(&[0x0928, 0x093C]),
    0x0931u32 => canonical(&[0x0930, 0x093C]),
    0x0934u32 => canonical(&[0x0933, 0x093C]),
    0x0958u32 => canonical(&[0x0915, 0x093C]),
    0x0959u32 => canonical(&[0x0916, 0x093C]),
    0x095Au32 => canonical(&[0x0917, 0x093C]),
    0x095Bu32 => canonical(&[0x091C, 0x093C]),
    0x095Cu32 => canonical(&[0x0921, 0x093C]),
    0x095Du32 => canonical(&[0x0922, 0x093C]),
    0x095Eu32 => canonical(&[0x092B, 0x093C]),
    0x095Fu32 => canonical(&[0x092F, 0x093C]),
    0x09CBu32 => canonical(&[0x09C7, 0x09BE]),
    0x09CCu32 => canonical(&[0x09C7, 0x09D7]),
    0x09DCu32 => canonical(&[0x09A1, 0x09BC]),
    0x09DDu32 => canonical(&[0x09A2, 0x09BC]),
    0x09DFu32 => canonical(&[0x09AF, 0x09BC]),
    0x0A33u32 => canonical(&[0x0A32, 0x0A3C]),
    0x0A36u32 => canonical(&[0x0A38, 0x0A3C]),
    0x0A59u32 => canonical(&[0x0A16, 0x0A3C]),
    0x0A5Au32 => canonical(&[0x0A17, 0x0A3C]),
    0x0A5Bu32 => canonical(&[0x0A1C, 0x0A3C]),
    0x0A5Eu32 => canonical(&[0x0A2B, 0x0A3C]),
    0x0B48u32 => canonical(&[0x0B47, 0x0B56]),
    0x0B4Bu32 => canonical(&[0x0B47, 0x0B3E]),
    0x0B4Cu32 => canonical(&[0x0B47, 0x0B57]),
    0x0B5Cu32 => canonical(&[0x0B21, 0x0B3C]),
    0x0B5Du32 => canonical(&[0x0B22, 0x0B3C]),
    0x0B94u32 => canonical(&[0x0B92, 0x0BD7]),
    0x0BCAu32 => canonical(&[0x0BC6, 0x0BBE]),
    0x0BCBu32 => canonical(&[0x0BC7, 0x0BBE]),
    0x0BCCu32 => canonical(&[0x0BC6, 0x0BD7]),
    0x0C48u32 => canonical(&[0x0C46, 0x0C56]),
    0x0CC0u32 => canonical(&[0x0CBF, 0x0CD5]),
    0x0CC7u32 => canonical(&[0x0CC6, 0x0CD5]),
    0x0CC8u32 => canonical(&[0x0CC6, 0x0CD6]),
    0x0CCAu32 => canonical(&[0x0CC6, 0x0CC2]),
    0x0CCBu32 => canonical(&[0x0CCA, 0x0CD5]),
    0x0D4Au32 => canonical(&[0x0D46, 0x0D3E]),
    0x0D4Bu32 => canonical(&[0x0D47, 0x0D3E]),
    0x0D4Cu32 => canonical(&[0x0D46, 0x0D57]),
    0x0DDAu32 => canonical(&[0x0DD9, 0x0DCA]),
    0x0DDCu32 => canonical(&[0x0DD9, 0x0DCF]),
    0x0DDDu32 => canonical(&[0x0DDC, 0x0DCA]),
    0x0DDEu32 => canonical(&[0x0DD9, 0x0DDF]),
    0x0E33u32 => compat(&[0x0E4D, 0x0E32]),
    0x0EB3u32 => compat(&[0x0ECD, 0x0EB2]),
    0x0EDCu32 => compat(&[0x0EAB, 0x0E99]),
    0x0EDDu32 => compat(&[0x0EAB, 0x0EA1]),
    0x0F0Cu32 => compat(&[0x0F0B]),
    0x0F43u32 => canonical(&[0x0F42, 0x0FB7]),
    0x0F4Du32 => canonical(&[0x0F4C, 0x0FB7]),
    0x0F52u32 => canonical(&[0x0F51, 0x0FB7]),
    0x0F57u32 => canonical(&[0x0F56, 0x0FB7]),
    0x0F5Cu32 => canonical(&[0x0F5B, 0x0FB7]),
    0x0F69u32 => canonical(&[0x0F40, 0x0FB5]),
    0x0F73u32 => canonical(&[0x0F71, 0x0F72]),
    0x0F75u32 => canonical(&[0x0F71, 0x0F74]),
    0x0F76u32 => canonical(&[0x0FB2, 0x0F80]),
    0x0F77u32 => compat(&[0x0FB2, 0x0F81]),
    0x0F78u32 => canonical(&[0x0FB3, 0x0F80]),
    0x0F79u32 => compat(&[0x0FB3, 0x0F81]),
    0x0F81u32 => canonical(&[0x0F71, 0x0F80]),
    0x0F93u32 => canonical(&[0x0F92, 0x0FB7]),
    0x0F9Du32 => canonical(&[0x0F9C, 0x0FB7]),
    0x0FA2u32 => canonical(&[0x0FA1, 0x0FB7]),
    0x0FA7u32 => canonical(&[0x0FA6, 0x0FB7]),
    0x0FACu32 => canonical(&[0x0FAB, 0x0FB7]),
    0x0FB9u32 => canonical(&[0x0F90, 0x0FB5]),
    0x1026u32 => canonical(&[0x1025, 0x102E]),
    0x10FCu32 => compat(&[0x10DC]),
    0x1B06u32 => canonical(&[0x1B05, 0x1B35]),
    0x1B08u32 => canonical(&[0x1B07, 0x1B35]),
    0x1B0Au32 => canonical(&[0x1B09, 0x1B35]),
    0x1B0Cu32 => canonical(&[0x1B0B, 0x1B35]),
    0x1B0Eu32 => canonical(&[0x1B0D, 0x1B35]),
    0x1B12u32 => canonical(&[0x1B11, 0x1B35]),
    0x1B3Bu32 => canonical(&[0x1B3A, 0x1B35]),
    0x1B3Du32 => canonical(&[0x1B3C, 0x1B35]),
    0x1B40u32 => canonical(&[0x1B3E, 0x1B35]),
    0x1B41u32 => canonical(&[0x1B3F, 0x1B35]),
    0x1B43u32 => canonical(&[0x1B42, 0x1B35]),
    0x1D2Cu32 => compat(&[0x0041]),
    0x1D2Du32 => compat(&[0x00C6]),
    0x1D2Eu32 => compat(&[0x0042]),
    0x1D30u32 => compat(&[0x0044]),
    0x1D31u32 => compat(&[0x0045]),
    0x1D32u32 => compat(&[0x018E]),
    0x1D33u32 => compat(&[0x0047]),
    0x1D34u32 => compat(&[0x0048]),
    0x1D35u32 => compat(&[0x0049]),
    0x1D36u32 => compat(&[0x004A]),
    0x1D37u32 => compat(&[0x004B]),
    0x1D38u32 => compat(&[0x004C]),
    0x1D39u32 => compat(&[0x004D]),
    0x1D3Au32 => compat(&[0x004E]),
    0x1D3Cu32 => compat(&[0x004F]),
    0x1D3Du32 => compat(&[0x0222]),
    0x1D3Eu32 => compat(&[0x0050]),
    0x1D3Fu32 => compat(&[0x0052]),
    0x1D40u32 => compat(&[0x0054]),
    0x1D41u32 => compat(&[0x0055]),
    0x1D42u32 => compat(&[0x0057]),
    0x1D43u32 => compat(&[0x0061]),
    0x1D44u32 => compat(&[0x0250]),
    0x1D45u32 => compat(&[0x0251]),
    0x1D46u32 => compat(&[0x1D02]),
    0x1D47u32 => compat(&[0x0062]),
    0x1D48u32 => compat(&[0x0064]),
    0x1D49u32 => compat(&[0x0065]),
    0x1D4Au32 => compat(&[0x0259]),
    0x1D4Bu32 => compat(&[0x025B]),
    0x1D4Cu32 => compat(&[0x025C]),
    0x1D4Du32 => compat(&[0x0067]),
    0x1D4Fu32 => compat(&[0x006B]),
    0x1D50u32 => compat(&[0x006D]),
    0x1D51u32 => compat(&[0x014B]),
    0x1D52u32 => compat(&[0x006F]),
    0x1D53u32 => compat(&[0x0254]),
    0x1D54u32 => compat(&[0x1D16]),
    0x1D55u32 => compat(&[0x1D17]),
    0x1D56u32 => compat(&[0x0070]),
    0x1D57u32 => compat(&[0x0074]),
    0x1D58u32 => compat(&[0x0075]),
    0x1D59u32 => compat(&[0x1D1D]),
    0x1D5Au32 => compat(&[0x026F]),
    0x1D5Bu32 => compat(&[0x0076]),
    0x1D5Cu32 => compat(&[0x1D25]),
    0x1D5Du32 => compat(&[0x03B2]),
    0x1D5Eu32 => compat(&[0x03B3]),
    0x1D5Fu32 => compat(&[0x03B4]),
    0x1D60u32 => compat(&[0x03C6]),
    0x1D61u32 => compat(&[0x03C7]),
    0x1D62u32 => compat(&[0x0069]),
    0x1D63u32 => compat(&[0x0072]),
    0x1D64u32 => compat(&[0x0075]),
    0x1D65u32 => compat(&[0x0076]),
    0x1D66u32 => compat(&[0x03B2]),
    0x1D67u32 => compat(&[0x03B3]),
    0x1D68u32 => compat(&[0x03C1]),
    0x1D69u32 => compat(&[0x03C6]),
    0x1D6Au32 => compat(&[0x03C7]),
    0x1D78u32 => compat(&[0x043D]),
    0x1D9Bu32 => compat(&[0x0252]),
    0x1D9Cu32 => compat(&[0x0063]),
    0x1D9Du32 => compat(&[0x0255]),
    0x1D9Eu32 => compat(&[0x00F0]),
    0x1D9Fu32 => compat(&[0x025C]),
    0x1DA0u32 => compat(&[0x0066]),
    0x1DA1u32 => compat(&[0x025F]),
    0x1DA2u32 => compat(&[0x0261]),
    0x1DA3u32 => compat(&[0x0265]),
    0x1DA4u32 => compat(&[0x0268]),
    0x1DA5u32 => compat(&[0x0269]),
    0x1DA6u32 => compat(&[0x026A]),
    0x1DA7u32 => compat(&[0x1D7B]),
    0x1DA8u32 => compat(&[0x029D]),
    0x1DA9u32 => compat(&[0x026D]),
    0x1DAAu32 => compat(&[0x1D85]),
    0x1DABu32 => compat(&[0x029F]),
    0x1DACu32 => compat(&[0x0271]),
    0x1DADu32 => compat(&[0x0270]),
    0x1DAEu32 => compat(&[0x0272]),
    0x1DAFu32 => compat(&[0x0273]),
    0x1DB0u32 => compat(&[0x0274]),
    0x1DB1u32 => compat(&[0x0275]),
    0x1DB2u32 => compat(&[0x0278]),
    0x1DB3u32 => compat(&[0x0282]),
    0x1DB4u32 => compat(&[0x0283]),
    0x1DB5u32 => compat(&[0x01AB]),
    0x1DB6u32 => compat(&[0x0289]),
    0x1DB7u32 => compat(&[0x028A]),
    0x1DB8u32 => compat(&[0x1D1C]),
    0x1DB9u32 => compat(&[0x028B]),
    0x1DBAu32 => compat(&[0x028C]),
    0x1DBBu32 => compat(&[0x007A]),
    0x1DBCu32 => compat(&[0x0290]),
    0x1DBDu32 => compat(&[0x0291]),
    0x1DBEu32 => compat(&[0x0292]),
    0x1DBFu32 => compat(&[0x03B8]),
    0x1E00u32 => canonical(&[0x0041, 0x0325]),
    0x1E01u32 => canonical(&[0x0061, 0x0325]),
    0x1E02u32 => canonical(&[0x0042, 0x0307]),
    0x1E03u32 => canonical(&[0x0062, 0x0307]),
    0x1E04u32 => canonical(&[0x0042, 0x0323]),
    0x1E05u32 => canonical(&[0x0062, 0x0323]),
    0x1E06u32 => canonical(&[0x0042, 0x0331]),
    0x1E07u32 => canonical(&[0x0062, 0x0331]),
    0x1E08u32 => canonical(&[0x00C7, 0x0301]),
    0x1E09u32 => canonical(&[0x00E7, 0x0301]),
    0x1E0Au32 => canonical(&[0x0044, 0x0307]),
    0x1E0Bu32 => canonical(&[0x0064, 0x0307]),
    0x1E0Cu32 => canonical(&[0x0044, 0x0323]),
    0x1E0Du32 => canonical(&[0x0064, 0x0323]),
    0x1E0Eu32 => canonical(&[0x0044, 0x0331]),
    0x1E0Fu32 => canonical(&[0x0064, 0x0331]),
    0x1E10u32 => canonical(&[0x0044, 0x0327]),
    0x1E11u32 => canonical(&[0x0064, 0x0327]),
    0x1E12u32 => canonical(&[0x0044, 0x032D]),
    0x1E13u32 => canonical(&[0x0064, 0x032D]),
    0x1E14u32 => canonical(&[0x0112, 0x0300]),
    0x1E15u32 => canonical(&[0x0113, 0x0300]),
    0x1E16u32 => canonical(&[0x0112, 0x0301]),
    0x1E17u32 => canonical(&[0x0113, 0x0301]),
    0x1E18u32 => canonical(&[0x0045, 0x032D]),
    0x1E19u32 => canonical(&[0x0065, 0x032D]),
    0x1E1Au32 => canonical(&[0x0045, 0x0330]),
    0x1E1Bu32 => canonical(&[0x0065, 0x0330]),
    0x1E1Cu32 => canonical(&[0x0228, 0x0306]),
    0x1E1Du32 => canonical(&[0x0229, 0x0306]),
    0x1E1Eu32 => canonical(&[0x0046, 0x0307]),
    0x1E1Fu32 => canonical(&[0x0066, 0x0307]),
    0x1E20u32 => canonical(&[0x0047, 0x0304]),
    0x1E21u32 => canonical(&[0x0067, 0x0304]),
    0x1E22u32 => canonical(&[0x0048, 0x0307]),
    0x1E23u32 => canonical(&[0x0068, 0x0307]),
    0x1E24u32 => canonical(&[0x0048, 0x0323]),
    0x1E25u32 => canonical(&[0x0068, 0x0323]),
    0x1E26u32 => canonical(&[0x0048, 0x0308]),
    0x1E27u32 => canonical(&[0x0068, 0x0308]),
    0x1E28u32 => canonical(&[0x0048, 0x0327]),
    0x1E29u32 => canonical(&[0x0068, 0x0327]),
    0x1E2Au32 => canonical(&[0x0048, 0x032E]),
    0x1E2Bu32 => canonical(&[0x0068, 0x032E]),
    0x1E2Cu32 => canonical(&[0x0049, 0x0330]),
    0x1E2Du32 => canonical(&[0x0069, 0x0330]),
    0x1E2Eu32 => canonical(&[0x00CF, 0x0301]),
    0x1E2Fu32 => canonical(&[0x00EF, 0x0301]),
    0x1E30u32 => canonical(&[0x004B, 0x0301]),
    0x1E31u32 => canonical(&[0x006B, 0x0301]),
    0x1E32u32 => canonical(&[0x004B, 0x0323]),
    0x1E33u32 => canonical(&[0x006B, 0x0323]),
    0x1E34u32 => canonical(&[0x004B, 0x0331]),
    0x1E35u32 => canonical(&[0x006B, 0x0331]),
    0x1E36u32 => canonical(&[0x004C, 0x0323]),
    0x1E37u32 => canonical(&[0x006C, 0x0323]),
    0x1E38u32 => canonical(&[0x1E36, 0x0304]),
    0x1E39u32 => canonical(&[0x1E37, 0x0304]),
    0x1E3Au32 => canonical(&[0x004C, 0x0331]),
    0x1E3Bu32 => canonical(&[0x006C, 0x0331]),
    0x1E3Cu32 => canonical(&[0x004C, 0x032D]),
    0x1E3Du32 => canonical(&[0x006C, 0x032D]),
    0x1E3Eu32 => canonical(&[0x004D, 0x0301]),
    0x1E3Fu32 => canonical(&[0x006D, 0x0301]),
    0x1E40u32 => canonical(&[0x004D, 0x0307]),
    0x1E41u32 => canonical(&[0x006D, 0x0307]),
    0x1E42u32 => canonical(&[0x004D, 0x0323]),
    0x1E43u32 => canonical(&[0x006D, 0x0323]),
    0x1E44u32 => canonical(&[0x004E, 0x0307]),
    0x1E45u32 => canonical(&[0x006E, 0x0307]),
    0x1E46u32 => canonical(&[0x004E, 0x0323]),
    0x1E47u32 => canonical(&[0x006E, 0x0323]),
    0x1E48u32 => canonical(&[0x004E, 0x0331]),
    0x1E49u32 => canonical(&[0x006E, 0x0331]),
    0x1E4Au32 => canonical(&[0x004E, 0x032D]),
    0x1E4Bu32 => canonical(&[0x006E, 0x032D]),
    0x1E4Cu32 => canonical(&[0x00D5, 0x0301]),
    0x1E4Du32 => canonical(&[0x00F5, 0x0301]),
    0x1E4Eu32 => canonical(&[0x00D5, 0x0308]),
    0x1E4Fu32 => canonical(&[0x00F5, 0x0308]),
    0x1E50u32 => canonical(&[0x014C, 0x0300]),
    0x1E51u32 => canonical(&[0x014D, 0x0300]),
    0x1E52u32 => canonical(&[0x014C, 0x0301]),
    0x1E53u32 => canonical(&[0x014D, 0x0301]),
    0x1E54u32 => canonical(&[0x0050, 0x0301]),
    0x1E55u32 => canonical(&[0x0070, 0x0301]),
    0x1E56u32 => canonical(&[0x0050, 0x0307]),
    0x1E57u32 => canonical(&[0x0070, 0x0307]),
    0x1E58u32 => canonical(&[0x0052, 0x0307]),
    0x1E59u32 => canonical(&[0x0072, 0x0307]),
    0x1E5Au32 => canonical(&[0x0052, 0x0323]),
    0x1E5Bu32 => canonical(&[0x0072, 0x0323]),
    0x1E5Cu32 => canonical(&[0x1E5A, 0x0304]),
    0x1E5Du32 => canonical(&[0x1E5B, 0x0304]),
    0x1E5Eu32 => canonical(&[0x0052, 0x0331]),
    0x1E5Fu32 => canonical(&[0x0072, 0x0331]),
    0x1E60u32 => canonical(&[0x0053, 0x0307]),
    0x1E61u32 => canonical(&[0x0073, 0x0307]),
    0x1E62u32 => canonical(&[0x0053, 0x0323]),
    0x1E63u32 => canonical(&[0x0073, 0x0323]),
    0x1E64u32 => canonical(&[0x015A, 0x0307]),
    0x1E65u32 => canonical(&[0x015B, 0x0307]),
    0x1E66u32 => canonical(&[0x0160, 0x0307]),
    0x1E67u32 => canonical(&[0x0161, 0x0307]),
    0x1E68u32 => canonical(&[0x1E62, 0x0307]),
    0x1E69u32 => canonical(&[0x1E63, 0x0307]),
    0x1E6Au32 => canonical(&[0x0054, 0x0307]),
    0x1E6Bu32 => canonical(&[0x0074, 0x0307]),
    0x1E6Cu32 => canonical(&[0x0054, 0x0323]),
    0x1E6Du32 => canonical(&[0x0074, 0x0323]),
    0x1E6Eu32 => canonical(&[0x0054, 0x0331]),
    0x1E6Fu32 => canonical(&[0x0074, 0x0331]),
    0x1E70u32 => canonical(&[0x0054, 0x032D]),
    0x1E71u32 => canonical(&[0x0074, 0x032D]),
    0x1E72u32 => canonical(&[0x0055, 0x0324]),
    0x1E73u32 => canonical(&[0x0075, 0x0324]),
    0x1E74u32 => canonical(&[0x0055, 0x0330]),
    0x1E75u32 => canonical(&[0x0075, 0x0330]),
    0x1E76u32 => canonical(&[0x0055, 0x032D]),
    0x1E77u32 => canonical(&[0x0075, 0x032D]),
    0x1E78u32 => canonical(&[0x0168, 0x0301]),
    0x1E79u32 => canonical(&[0x0169, 0x0301]),
    0x1E7Au32 => canonical(&[0x016A, 0x0308]),
    0x1E7Bu32 => canonical(&[0x016B, 0x0308]),
    0x1E7Cu32 => canonical(&[0x0056, 0x0303]),
    0x1E7Du32 => canonical(&[0x0076, 0x0303]),
    0x1E7Eu32 => canonical(&[0x0056, 0x0323]),
    0x1E7Fu32 => canonical(&[0x0076, 0x0323]),
    0x1E80u32 => canonical(&[0x0057, 0x0300]),
    0x1E81u32 => canonical(&[0x0077, 0x0300]),
    0x1E82u32 => canonical(&[0x0057, 0x0301]),
    0x1E83u32 => canonical(&[0x0077, 0x0301]),
    0x1E84u32 => canonical(&[0x0057, 0x0308]),
    0x1E85u32 => canonical(&[0x0077, 0x0308]),
    0x1E86u32 => canonical(&[0x0057, 0x0307]),
    0x1E87u32 => canonical(&[0x0077, 0x0307]),
    0x1E88u32 => canonical(&[0x0057, 0x0323]),
    0x1E89u32 => canonical(&[0x0077, 0x0323]),
    0x1E8Au32 => canonical(&[0x0058, 0x0307]),
    0x1E8Bu32 => canonical(&[0x0078, 0x0307]),
    0x1E8Cu32 => canonical(&[0x0058, 0x0308]),
    0x1E8Du32 => canonical(&[0x0078, 0x0308]),
    0x1E8Eu32 => canonical(&[0x0059, 0x0307]),
    0x1E8Fu32 => canonical(&[0x0079, 0x0307]),
    0x1E90u32 => canonical(&[0x005A, 0x0302]),
    0x1E91u32 => canonical(&[0x007A, 0x0302]),
    0x1E92u32 => canonical(&[0x005A, 0x0323]),
    0x1E93u32 => canonical(&[0x007A, 0x0323]),
    0x1E94u32 => canonical(&[0x005A, 0x0331]),
    0x1E95u32 => canonical(&[0x007A, 0x0331]),
    0x1E96u32 => canonical(&[0x0068, 0x0331]),
    0x1E97u32 => canonical(&[0x0074, 0x0308]),
    0x1E98u32 => canonical(&[0x0077, 0x030A]),
    0x1E99u32 => canonical(&[0x0079, 0x030A]),
    0x1E9Au32 => compat(&[0x0061, 0x02BE]),
    0x1E9Bu32 => canonical(&[0x017F, 0x0307]),
    0x1EA0u32 => canonical(&[0x0041, 0x0323]),
    0x1EA1u32 => canonical(&[0x0061, 0x0323]),
    0x1EA2u32 => canonical(&[0x0041, 0x0309]),
    0x1EA3u32 => canonical(&[0x0061, 0x0309]),
    0x1EA4u32 => canonical(&[0x00C2, 0x0301]),
    0x1EA5u32 => canonical(&[0x00E2, 0x0301]),
    0x1EA6u32 => canonical(&[0x00C2, 0x0300]),
    0x1EA7u32 => canonical(&[0x00E2, 0x0300]),
    0x1EA8u32 => canonical(&[0x00C2, 0x0309]),
    0x1EA9u32 => canonical(&[0x00E2, 0x0309]),
    0x1EAAu32 => canonical(&[0x00C2, 0x0303]),
    0x1EABu32 => canonical(&[0x00E2, 0x0303]),
    0x1EACu32 => canonical(&[0x1EA0, 0x0302]),
    0x1EADu32 => canonical(&[0x1EA1, 0x0302]),
    0x1EAEu32 => canonical(&[0x0102, 0x0301]),
    0x1EAFu32 => canonical(&[0x0103, 0x0301]),
    0x1EB0u32 => canonical(&[0x0102, 0x0300]),
    0x1EB1u32 => canonical(&[0x0103, 0x0300]),
    0x1EB2u32 => canonical(&[0x0102, 0x0309]),
    0x1EB3u32 => canonical(&[0x0103, 0x0309]),
    0x1EB4u32 => canonical(&[0x0102, 0x0303]),
    0x1EB5u32 => canonical(&[0x0103, 0x0303]),
    0x1EB6u32 => canonical(&[0x1EA0, 0x0306]),
    0x1EB7u32 => canonical(&[0x1EA1, 0x0306]),
    0x1EB8u32 => canonical(&[0x0045, 0x0323]),
    0x1EB9u32 => canonical(&[0x0065, 0x0323]),
    0x1EBAu32 => canonical(&[0x0045, 0x0309]),
    0x1EBBu32 => canonical(&[0x0065, 0x0309]),
    0x1EBCu32 => canonical(&[0x0045, 0x0303]),
    0x1EBDu32 => canonical(&[0x0065, 0x0303]),
    0x1EBEu32 => canonical(&[0x00CA, 0x0301]),
    0x1EBFu32 => canonical(&[0x00EA, 0x0301]),
    0x1EC0u32 => canonical(&[0x00CA, 0x0300]),
    0x1EC1u32 => canonical(&[0x00EA, 0x0300]),
    0x1EC2u32 => canonical(&[0x00CA, 0x0309]),
    0x1EC3u32 => canonical(&[0x00EA, 0x0309]),
    0x1EC4u32 => canonical(&[0x00CA, 0x0303]),
    0x1EC5u32 => canonical(&[0x00EA, 0x0303]),
    0x1EC6u32 => canonical(&[0x1EB8, 0x0302]),
    0x1EC7u32 => canonical(&[0x1EB9, 0x0302]),
    0x1EC8u32 => canonical(&[0x0049, 0x0309]),
    0x1EC9u32 => canonical(&[0x0069, 0x0309]),
    0x1ECAu32 => canonical(&[0x0049, 0x0323]),
    0x1ECBu32 => canonical(&[0x0069, 0x0323]),
    0x1ECCu32 => canonical(&[0x004F, 0x0323]),
    0x1ECDu32 => canonical(&[0x006F, 0x0323]),
    0x1ECEu32 => canonical(&[0x004F, 0x0309]),
    0x1ECFu32 => canonical(&[0x006F, 0x0309]),
    0x1ED0u32 => canonical(&[0x00D4, 0x0301]),
    0x1ED1u32 => canonical(&[0x00F4, 0x0301]),
    0x1ED2u32 => canonical(&[0x00D4, 0x0300]),
    0x1ED3u32 => canonical(&[0x00F4, 0x0300]),
    0x1ED4u32 => canonical(&[0x00D4, 0x0309]),
    0x1ED5u32 => canonical(&[0x00F4, 0x0309]),
    0x1ED6u32 => canonical(&[0x00D4, 0x0303]),
    0x1ED7u32 => canonical(&[0x00F4, 0x0303]),
    0x1ED8u32 => canonical(&[0x1ECC, 0x0302]),
    0x1ED9u32 => canonical(&[0x1ECD, 0x0302]),
    0x1EDAu32 => canonical(&[0x01A0, 0x0301]),
    0x1EDBu32 => canonical(&[0x01A1, 0x0301]),
    0x1EDCu32 => canonical(&[0x01A0, 0x0300]),
    0x1EDDu32 => canonical(&[0x01A1, 0x0300]),
    0x1EDEu32 => canonical(&[0x01A0, 0x0309]),
    0x1EDFu32 => canonical(&[0x01A1, 0x0309]),
    0x1EE0u32 => canonical(&[0x01A0, 0x0303]),
    0x1EE1u32 => canonical(&[0x01A1, 0x0303]),
    0x1EE2u32 => canonical(&[0x01A0, 0x0323]),
    0x1EE3u32 => canonical(&[0x01A1, 0x0323]),
    0x1EE4u32 => canonical(&[0x0055, 0x0323]),
    0x1EE5u32 => canonical(&[0x0075, 0x0323]),
    0x1EE6u32 => canonical(&[0x0055, 0x0309]),
    0x1EE7u32 => canonical(&[0x0075, 0x0309]),
    0x1EE8u32 => canonical(&[0x01AF, 0x0301]),
    0x1EE9u32 => canonical(&[0x01B0, 0x0301]),
    0x1EEAu32 => canonical(&[0x01AF, 0x0300]),
    0x1EEBu32 => canonical(&[0x01B0, 0x0300]),
    0x1EECu32 => canonical(&[0x01AF, 0x0309]),
    0x1EEDu32 => canonical(&[0x01B0, 0x0309]),
    0x1EEEu32 => canonical(&[0x01AF, 0x0303]),
    0x1EEFu32 => canonical(&[0x01B0, 0x0303]),
    0x1EF0u32 => canonical(&[0x01AF, 0x0323]),
    0x1EF1u32 => canonical(&[0x01B0, 0x0323]),
    0x1EF2u32 => canonical(&[0x0059, 0x0300]),
    0x1EF3u32 => canonical(&[0x0079, 0x0300]),
    0x1EF4u32 => canonical(&[0x0059, 0x0323]),
    0x1EF5u32 => canonical(&[0x0079, 0x0323]),
    0x1EF6u32 => canonical(&[0x0059, 0x0309]),
    0x1EF7u32 => canonical(&[0x0079, 0x0309]),
    0x1EF8u32 => canonical(&[0x0059, 0x0303]),
    0x1EF9u32 => canonical(&[0x0079, 0x0303]),
    0x1F00u32 => canonical(&[0x03B1, 0x0313]),
    0x1F01u32 => canonical(&[0x03B1, 0x0314]),
    0x1F02u32 => canonical(&[0x1F00, 0x0300]),
    0x1F03u32 => canonical(&[0x1F01, 0x0300]),
    0x1F04u32 => canonical(&[0x1F00, 0x0301]),
    0x1F05u32 => canonical(&[0x1F01, 0x0301]),
    0x1F06u32 => canonical(&[0x1F00, 0x0342]),
    0x1F07u32 => canonical(&[0x1F01, 0x0342]),
    0x1F08u32 => canonical(&[0x0391, 0x0313]),
    0x1F09u32 => canonical(&[0x0391, 0x0314]),
    0x1F0Au32 => canonical(&[0x1F08, 0x0300]),
    0x1F0Bu32 => canonical(&[0x1F09, 0x0300]),
    0x1F0Cu32 => canonical(&[0x1F08, 0x0301]),
    0x1F0Du32 => canonical(&[0x1F09, 0x0301]),
    0x1F0Eu32 => canonical(&[0x1F08, 0x0342]),
    0x1F0Fu32 => canonical(&[0x1F09, 0x0342]),
    0x1F10u32 => canonical(&[0x03B5, 0x0313]),
    0x1F11u32 => canonical(&[0x03B5, 0x0314]),
    0x1F12u32 => canonical(&[0x1F10, 0x0300]),
    0x1F13u32 => canonical(&[0x1F11, 0x0300]),
    0x1F14u32 => canonical(&[0x1F10, 0x0301]),
    0x1F15u32 => canonical(&[0x1F11, 0x0301]),
    0x1F18u32 => canonical(&[0x0395, 0x0313]),
    0x1F19u32 => canonical(&[0x0395, 0x0314]),
    0x1F1Au32 => canonical(&[0x1F18, 0x0300]),
    0x1F1Bu32 => canonical(&[0x1F19, 0x0300]),
    0x1F1Cu32 => canonical(&[0x1F18, 0x0301]),
    0x1F1Du32 => canonical(&[0x1F19, 0x0301]),
    0x1F20u32 => canonical(&[0x03B7, 0x0313]),
    0x1F21u32 => canonical(&[0x03B7, 0x0314]),
    0x1F22u32 => canonical(&[0x1F20, 0x0300]),
    0x1F23u32 => canonical(&[0x1F21, 0x0300]),
    0x1F24u32 => canonical(&[0x1F20, 0x0301]),
    0x1F25u32 => canonical(&[0x1F21, 0x0301]),
    0x1F26u32 => canonical(&[0x1F20, 0x0342]),
    0x1F27u32 => canonical(&[0x1F21, 0x0342]),
    0x1F28u32 => canonical(&[0x0397, 0x0313]),
    0x1F29u32 => canonical(&[0x0397, 0x0314]),
    0x1F2Au32 => canonical(&[0x1F28, 0x0300]),
    0x1F2Bu32 => canonical(&[0x1F29, 0x0300]),
    0x1F2Cu32 => canonical(&[0x1F28, 0x0301]),
    0x1F2Du32 => canonical(&[0x1F29, 0x0301]),
    0x1F2Eu32 => canonical(&[0x1F28, 0x0342]),
    0x1F2Fu32 => canonical(&[0x1F29, 0x0342]),
    0x1F30u32 => canonical(&[0x03B9, 0x0313]),
    0x1F31u32 => canonical(&[0x03B9, 0x0314]),
    0x1F32u32 => canonical(&[0x1F30, 0x0300]),
    0x1F33u32 => canonical(&[0x1F31, 0x0300]),
    0x1F34u32 => canonical(&[0x1F30, 0x0301]),
    0x1F35u32 => canonical(&[0x1F31, 0x0301]),
    0x1F36u32 => canonical(&[0x1F30, 0x0342]),
    0x1F37u32 => canonical(&[0x1F31, 0x0342]),
    0x1F38u32 => canonical(&[0x0399, 0x0313]),
    0x1F39u32 => canonical(&[0x0399, 0x0314]),
    0x1F3Au32 => canonical(&[0x1F38, 0x0300]),
    0x1F3Bu32 => canonical(&[0x1F39, 0x0300]),
    0x1F3Cu32 => canonical(&[0x1F38, 0x0301]),
    0x1F3Du32 => canonical(&[0x1F39, 0x0301]),
    0x1F3Eu32 => canonical(&[0x1F38, 0x0342]),
    0x1F3Fu32 => canonical(&[0x1F39, 0x0342]),
    0x1F40u32 => canonical(&[0x03BF, 0x0313]),
    0x1F41u32 => canonical(&[0x03BF, 0x0314]),
    0x1F42u32 => canonical(&[0x1F40, 0x0300]),
    0x1F43u32 => canonical(&[0x1F41, 0x0300]),
    0x1F44u32 => canonical(&[0x1F40, 0x0301]),
    0x1F45u32 => canonical(&[0x1F41, 0x0301]),
    0x1F48u32 => canonical(&[0x039F, 0x0313]),
    0x1F49u32 => canonical(&[0x039F, 0x0314]),
    0x1F4Au32 => canonical(&[0x1F48, 0x0300]),
    0x1F4Bu32 => canonical(&[0x1F49, 0x0300]),
    0x1F4Cu32 => canonical(&[0x1F48, 0x0301]),
    0x1F4Du32 => canonical(&[0x1F49, 0x0301]),
    0x1F50u32 => canonical(&[0x03C5, 0x0313]),
    0x1F51u32 => canonical(&[0x03C5, 0x0314]),
    0x1F52u32 => canonical(&[0x1F50, 0x0300]),
    0x1F53u32 => canonical(&[0x1F51, 0x0300]),
    0x1F54u32 => canonical(&[0x1F50, 0x0301]),
    0x1F55u32 => canonical(&[0x1F51, 0x0301]),
    0x1F56u32 => canonical(&[0x1F50, 0x0342]),
    0x1F57u32 => canonical(&[0x1F51, 0x0342]),
    0x1F59u32 => canonical(&[0x03A5, 0x0314]),
    0x1F5Bu32 => canonical(&[0x1F59, 0x0300]),
    0x1F5Du32 => canonical(&[0x1F59, 0x0301]),
    0x1F5Fu32 => canonical(&[0x1F59, 0x0342]),
    0x1F60u32 => canonical(&[0x03C9, 0x0313]),
    0x1F61u32 => canonical(&[0x03C9, 0x0314]),
    0x1F62u32 => canonical(&[0x1F60, 0x0300]),
    0x1F63u32 => canonical(&[0x1F61, 0x0300]),
    0x1F64u32 => canonical(&[0x1F60, 0x0301]),
    0x1F65u32 => canonical(&[0x1F61, 0x0301]),
    0x1F66u32 => canonical(&[0x1F60, 0x0342]),
    0x1F67u32 => canonical(&[0x1F61, 0x0342]),
    0x1F68u32 => canonical(&[0x03A9, 0x0313]),
    0x1F69u32 => canonical(&[0x03A9, 0x0314]),
    0x1F6Au32 => canonical(&[0x1F68, 0x0300]),
    0x1F6Bu32 => canonical(&[0x1F69, 0x0300]),
    0x1F6Cu32 => canonical(&[0x1F68, 0x0301]),
    0x1F6Du32 => canonical(&[0x1F69, 0x0301]),
    0x1F6Eu32 => canonical(&[0x1F68, 0x0342]),
    0x1F6Fu32 => canonical(&[0x1F69, 0x0342]),
    0x1F70u32 => canonical(&[0x03B1, 0x0300]),
    0x1F71u32 => canonical(&[0x03AC]),
    0x1F72u32 => canonical(&[0x03B5, 0x0300]),
    0x1F73u32 => canonical(&[0x03AD]),
    0x1F74u32 => canonical(&[0x03B7, 0x0300]),
    0x1F75u32 => canonical(&[0x03AE]),
    0x1F76u32 => canonical(&[0x03B9, 0x0300]),
    0x1F77u32 => canonical(&[0x03AF]),
    0x1F78u32 => canonical(&[0x03BF, 0x0300]),
    0x1F79u32 => canonical(&[0x03CC]),
    0x1F7Au32 => canonical(&[0x03C5, 0x0300]),
    0x1F7Bu32 => canonical(&[0x03CD]),
    0x1F7Cu32 => canonical(&[0x03C9, 0x0300]),
    0x1F7Du32 => canonical(&[0x03CE]),
    0x1F80u32 => canonical(&[0x1F00, 0x0345]),
    0x1F81u32 => canonical(&[0x1F01, 0x0345]),
    0x1F82u32 => canonical(&[0x1F02, 0x0345]),
    0x1F83u32 => canonical(&[0x1F03, 0x0345]),
    0x1F84u32 => canonical(&[0x1F04, 0x0345]),
    0x1F85u32 => canonical(&[0x1F05, 0x0345]),
    0x1F86u32 => canonical(&[0x1F06, 0x0345]),
    0x1F87u32 => canonical(&[0x1F07, 0x0345]),
    0x1F88u32 => canonical(&[0x1F08, 0x0345]),
    0x1F89u32 => canonical(&[0x1F09, 0x0345]),
    0x1F8Au32 => canonical(&[0x1F0A, 0x0345]),
    0x1F8Bu32 => canonical(&[0x1F0B, 0x0345]),
    0x1F8Cu32 => canonical(&[0x1F0C, 0x0345]),
    0x1F8Du32 => canonical(&[0x1F0D, 0x0345]),
    0x1F8Eu32 => canonical(&[0x1F0E, 0x0345]),
    0x1F8Fu32 => canonical(&[0x1F0F, 0x0345]),
    0x1F90u32 => canonical(&[0x1F20, 0x0345]),
    0x1F91u32 => canonical(&[0x1F21, 0x0345]),
    0x1F92u32 => canonical(&[0x1F22, 0x0345]),
    0x1F93u32 => canonical(&[0x1F23, 0x0345]),
    0x1F94u32 => canonical(&[0x1F24, 0x0345]),
    0x1F95u32 => canonical(&[0x1F25, 0x0345]),
    0x1F96u32 => canonical(&[0x1F26, 0x0345]),
    0x1F97u32 => canonical(&[0x1F27, 0x0345]),
    0x1F98u32 => canonical(&[0x1F28, 0x0345]),
    0x1F99u32 => canonical(&[0x1F29, 0x0345]),
    0x1F9Au32 => canonical(&[0x1F2A, 0x0345]),
    0x1F9Bu32 => canonical(&[0x1F2B, 0x0345]),
    0x1F9Cu32 => canonical(&[0x1F2C, 0x0345]),
    0x1F9Du32 => canonical(&[0x1F2D, 0x0345]),
    0x1F9Eu32 => canonical(&[0x1F2E, 0x0345]),
    0x1F9Fu32 => canonical(&[0x1F2F, 0x0345]),
    0x1FA0u32 => canonical(&[0x1F60, 0x0345]),
    0x1FA1u32 => canonical(&[0x1F61, 0x0345]),
    0x1FA2u32 => canonical(&[0x1F62, 0x0345]),
    0x1FA3u32 => canonical(&[0x1F63, 0x0345]),
    0x1FA4u32 => canonical(&[0x1F64, 0x0345]),
    0x1FA5u32 => canonical(&[0x1F65, 0x0345]),
    0x1FA6u32 => canonical(&[0x1F66, 0x0345]),
    0x1FA7u32 => canonical(&[0x1F67, 0x0345]),
    0x1FA8u32 => canonical(&[0x1F68, 0x0345]),
    0x1FA9u32 => canonical(&[0x1F69, 0x0345]),
    0x1FAAu32 => canonical(&[0x1F6A, 0x0345]),
    0x1FABu32 => canonical(&[0x1F6B, 0x0345]),
    0x1FACu32 => canonical(&[0x1F6C, 0x0345]),
    0x1FADu32 => canonical(&[0x1F6D, 0x0345]),
    0x1FAEu32 => canonical(&[0x1F6E, 0x0345]),
    0x1FAFu32 => canonical(&[0x1F6F, 0x0345]),
    0x1FB0u32 => canonical(&[0x03B1, 0x0306]),
    0x1FB1u32 => canonical(&[0x03B1, 0x0304]),
    0x1FB2u32 => canonical(&[0x1F70, 0x0345]),
    0x1FB3u32 => canonical(&[0x03B1, 0x0345]),
    0x1FB4u32 => canonical(&[0x03AC, 0x0345]),
    0x1FB6u32 => canonical(&[0x03B1, 0x0342]),
    0x1FB7u32 => canonical(&[0x1FB6, 0x0345]),
    0x1FB8u32 => canonical(&[0x0391, 0x0306]),
    0x1FB9u32 => canonical(&[0x0391, 0x0304]),
    0x1FBAu32 => canonical(&[0x0391, 0x0300]),
    0x1FBBu32 => canonical(&[0x0386]),
    0x1FBCu32 => canonical(&[0x0391, 0x0345]),
    0x1FBDu32 => compat(&[0x0020, 0x0313]),
    0x1FBEu32 => canonical(&[0x03B9]),
    0x1FBFu32 => compat(&[0x0020, 0x0313]),
    0x1FC0u32 => compat(&[0x0020, 0x0342]),
    0x1FC1u32 => canonical(&[0x00A8, 0x0342]),
    0x1FC2u32 => canonical(&[0x1F74, 0x0345]),
    0x1FC3u32 => canonical(&[0x03B7, 0x0345]),
    0x1FC4u32 => canonical(&[0x03AE, 0x0345]),
    0x1FC6u32 => canonical(&[0x03B7, 0x0342]),
    0x1FC7u32 => canonical(&[0x1FC6, 0x0345]),
    0x1FC8u32 => canonical(&[0x0395, 0x0300]),
    0x1FC9u32 => canonical(&[0x0388]),
    0x1FCAu32 => canonical(&[0x0397, 0x0300]),
    0x1FCBu32 => canonical(&[0x0389]),
    0x1FCCu32 => canonical(&[0x0397, 0x0345]),
    0x1FCDu32 => canonical(&[0x1FBF, 0x0300]),
    0x1FCEu32 => canonical(&[0x1FBF, 0x0301]),
    0x1FCFu32 => canonical(&[0x1FBF, 0x0342]),
    0x1FD0u32 => canonical(&[0x03B9, 0x0306]),
    0x1FD1u32 => canonical(&[0x03B9, 0x0304]),
    0x1FD2u32 => canonical(&[0x03CA, 0x0300]),
    0x1FD3u32 => canonical(&[0x0390]),
    0x1FD6u32 => canonical(&[0x03B9, 0x0342]),
    0x1FD7u32 => canonical(&[0x03CA, 0x0342]),
    0x1FD8u32 => canonical(&[0x0399, 0x0306]),
    0x1FD9u32 => canonical(&[0x0399, 0x0304]),
    0x1FDAu32 => canonical(&[0x0399, 0x0300]),
    0x1FDBu32 => canonical(&[0x038A]),
    0x1FDDu32 => canonical(&[0x1FFE, 0x0300]),
    0x1FDEu32 => canonical(&[0x1FFE, 0x0301]),
    0x1FDFu32 => canonical(&[0x1FFE, 0x0342]),
    0x1FE0u32 => canonical(&[0x03C5, 0x0306]),
    0x1FE1u32 => canonical(&[0x03C5, 0x0304]),
    0x1FE2u32 => canonical(&[0x03CB, 0x0300]),
    0x1FE3u32 => canonical(&[0x03B0]),
    0x1FE4u32 => canonical(&[0x03C1, 0x0313]),
    0x1FE5u32 => canonical(&[0x03C1, 0x0314]),
    0x1FE6u32 => canonical(&[0x03C5, 0x0342]),
    0x1FE7u32 => canonical(&[0x03CB, 0x0342]),
    0x1FE8u32 => canonical(&[0x03A5, 0x0306]),
    0x1FE9u32 => canonical(&[0x03A5, 0x0304]),
    0x1FEAu32 => canonical(&[0x03A5, 0x0300]),
    0x1FEBu32 => canonical(&[0x038E]),
    0x1FECu32 => canonical(&[0x03A1, 0x0314]),
    0x1FEDu32 => canonical(&[0x00A8, 0x0300]),
    0x1FEEu32 => canonical(&[0x0385]),
    0x1FEFu32 => canonical(&[0x0060]),
    0x1FF2u32 => canonical(&[0x1F7C, 0x0345]),
    0x1FF3u32 => canonical(&[0x03C9, 0x0345]),
    0x1FF4u32 => canonical(&[0x03CE, 0x0345]),
    0x1FF6u32 => canonical(&[0x03C9, 0x0342]),
    0x1FF7u32 => canonical(&[0x1FF6, 0x0345]),
    0x1FF8u32 => canonical(&[0x039F, 0x0300]),
    0x1FF9u32 => canonical(&[0x038C]),
    0x1FFAu32 => canonical(&[0x03A9, 0x0300]),
    0x1FFBu32 => canonical(&[0x038F]),
    0x1FFCu32 => canonical(&[0x03A9, 0x0345]),
    0x1FFDu32 => canonical(&[0x00B4]),
    0x1FFEu32 => compat(&[0x0020, 0x0314]),
    0x2000u32 => canonical(&[0x2002]),
    0x2001u32 => canonical(&[0x2003]),
    0x2002u32 => compat(&[0x0020]),
    0x2003u32 => compat(&[0x0020]),
    0x2004u32 => compat(&[0x0020]),
    0x2005u32 => compat(&[0x0020]),
    0x2006u32 => compat(&[0x0020]),
    0x2007u32 => compat(&[0x0020]),
    0x2008u32 => compat(&[0x0020]),
    0x2009u32 => compat(&[0x0020]),
    0x200Au32 => compat(&[0x0020]),
    0x2011u32 => compat(&[0x2010]),
    0x2017u32 => compat(&[0x0020, 0x0333]),
    0x2024u32 => compat(&[0x002E]),
    0x2025u32 => compat(&[0x002E, 0x002E]),
    0x2026u32 => compat(&[0x002E, 0x002E, 0x002E]),
    0x202Fu32 => compat(&[0x0020]),
    0x2033u32 => compat(&[0x2032, 0x2032]),
    0x2034u32 => compat(&[0x2032, 0x2032, 0x2032]),
    0x2036u32 => compat(&[0x2035, 0x2035]),
    0x2037u32 => compat(&[0x2035, 0x2035, 0x2035]),
    0x203Cu32 => compat(&[0x0021, 0x0021]),
    0x203Eu32 => compat(&[0x0020, 0x0305]),
    0x2047u32 => compat(&[0x003F, 0x003F]),
    0x2048u32 => compat(&[0x003F, 0x0021]),
    0x2049u32 => compat(&[0x0021, 0x003F]),
    0x2057u32 => compat(&[0x2032, 0x2032, 0x2032, 0x2032]),
    0x205Fu32 => compat(&[0x0020]),
    0x2070u32 => compat(&[0x0030]),
    0x2071u32 => compat(&[0x0069]),
    0x2074u32 => compat(&[0x0034]),
    0x2075u32 => compat(&[0x0035]),
    0x2076u32 => compat(&[0x0036]),
    0x2077u32 => compat(&[0x0037]),
    0x2078u32 => compat(&[0x0038]),
    0x2079u32 => compat(&[0x0039]),
    0x207Au32 => compat(&[0x002B]),
    0x207Bu32 => compat(&[0x2212]),
    0x207Cu32 => compat(&[0x003D]),
    0x207Du32 => compat(&[0x0028]),
    0x207Eu32 => compat(&[0x0029]),
    0x207Fu32 => compat(&[0x006E]),
    0x2080u32 => compat(&[0x0030]),
    0x2081u32 => compat(&[0x0031]),
    0x2082u32 => compat(&[0x0032]),
    0x2083u32 => compat(&[0x0033]),
    0x2084u32 => compat(&[0x0034]),
    0x2085u32 => compat(&[0x0035]),
    0x2086u32 => compat(&[0x0036]),
    0x2087u32 => compat(&[0x0037]),
    0x2088u32 => compat(&[0x0038]),
    0x2089u32 => compat(&[0x0039]),
    0x208Au32 => compat(&[0x002B]),
    0x208Bu32 => compat(&[0x2212]),
    0x208Cu32 => compat(&[0x003D]),
    0x208Du32 => compat(&[0x0028]),
    0x208Eu32 => compat(&[0x0029]),
    0x2090u32 => compat(&[0x0061]),
    0x2091u32 => compat(&[0x0065]),
    0x2092u32 => compat(&[0x006F]),
    0x2093u32 => compat(&[0x0078]),
    0x2094u32 => compat(&[0x0259]),
    0x2095u32 => compat(&[0x0068]),
    0x2096u32 => compat(&[0x006B]),
    0x2097u32 => compat(&[0x006C]),
    0x2098u32 => compat(&[0x006D]),
    0x2099u32 => compat(&[0x006E]),
    0x209Au32 => compat(&[0x0070]),
    0x209Bu32 => compat(&[0x0073]),
    0x209Cu32 => compat(&[0x0074]),
    0x20A8u32 => compat(&[0x0052, 0x0073]),
    0x2100u32 => compat(&[0x0061, 0x002F, 0x0063]),
    0x2101u32 => compat(&[0x0061, 0x002F, 0x0073]),
    0x2102u32 => compat(&[0x0043]),
    0x2103u32 => compat(&[0x00B0, 0x0043]),
    0x2105u32 => compat(&[0x0063, 0x002F, 0x006F]),
    0x2106u32 => compat(&[0x0063, 0x002F, 0x0075]),
    0x2107u32 => compat(&[0x0190]),
    0x2109u32 => compat(&[0x00B0, 0x0046]),
    0x210Au32 => compat(&[0x0067]),
    0x210Bu32 => compat(&[0x0048]),
    0x210Cu32 => compat(&[0x0048]),
    0x210Du32 => compat(&[0x0048]),
    0x210Eu32 => compat(&[0x0068]),
    0x210Fu32 => compat(&[0x0127]),
    0x2110u32 => compat(&[0x0049]),
    0x2111u32 => compat(&[0x0049]),
    0x2112u32 => compat(&[0x004C]),
    0x2113u32 => compat(&[0x006C]),
    0x2115u32 => compat(&[0x004E]),
    0x2116u32 => compat(&[0x004E, 0x006F]),
    0x2119u32 => compat(&[0x0050]),
    0x211Au32 => compat(&[0x0051]),
    0x211Bu32 => compat(&[0x0052]),
    0x211Cu32 => compat(&[0x0052]),
    0x211Du32 => compat(&[0x0052]),
    0x2120u32 => compat(&[0x0053, 0x004D]),
    0x2121u32 => compat(&[0x0054, 0x0045, 0x004C]),
    0x2122u32 => compat(&[0x0054, 0x004D]),
    0x2124u32 => compat(&[0x005A]),
    0x2126u32 => canonical(&[0x03A9]),
    0x2128u32 => compat(&[0x005A]),
    0x212Au32 => canonical(&[0x004B]),
    0x212Bu32 => canonical(&[0x00C5]),
    0x212Cu32 => compat(&[0x0042]),
    0x212Du32 => compat(&[0x0043]),
    0x212Fu32 => compat(&[0x0065]),
    0x2130u32 => compat(&[0x0045]),
    0x2131u32 => compat(&[0x0046]),
    0x2133u32 => compat(&[0x004D]),
    0x2134u32 => compat(&[0x006F]),
    0x2135u32 => compat(&[0x05D0]),
    0x2136u32 => compat(&[0x05D1]),
    0x2137u32 => compat(&[0x05D2]),
    0x2138u32 => compat(&[0x05D3]),
    0x2139u32 => compat(&[0x0069]),
    0x213Bu32 => compat(&[0x0046, 0x0041, 0x0058]),
    0x213Cu32 => compat(&[0x03C0]),
    0x213Du32 => compat(&[0x03B3]),
    0x213Eu32 => compat(&[0x0393]),
    0x213Fu32 => compat(&[0x03A0]),
    0x2140u32 => compat(&[0x2211]),
    0x2145u32 => compat(&[0x0044]),
    0x2146u32 => compat(&[0x0064]),
    0x2147u32 => compat(&[0x0065]),
    0x2148u32 => compat(&[0x0069]),
    0x2149u32 => compat(&[0x006A]),
    0x2150u32 => compat(&[0x0031, 0x2044, 0x0037]),
    0x2151u32 => compat(&[0x0031, 0x2044, 0x0039]),
    0x2152u32 => compat(&[0x0031, 0x2044, 0x0031, 0x0030]),
    0x2153u32 => compat(&[0x0031, 0x2044, 0x0033]),
    0x2154u32 => compat(&[0x0032, 0x2044, 0x0033]),
    0x2155u32 => compat(&[0x0031, 0x2044, 0x0035]),
    0x2156u32 => compat(&[0x0032, 0x2044, 0x0035]),
    0x2157u32 => compat(&[0x0033, 0x2044, 0x0035]),
    0x2158u32 => compat(&[0x0034, 0x2044, 0x0035]),
    0x2159u32 => compat(&[0x0031, 0x2044, 0x0036]),
    0x215Au32 => compat(&[0x0035, 0x2044, 0x0036]),
    0x215Bu32 => compat(&[0x0031, 0x2044, 0x0038]),
    0x215Cu32 => compat(&[0x0033, 0x2044, 0x0038]),
    0x215Du32 => compat(&[0x0035, 0x2044, 0x0038]),
    0x215Eu32 => compat(&[0x0037, 0x2044, 0x0038]),
    0x215Fu32 => compat(&[0x0031, 0x2044]),
    0x2160u32 => compat(&[0x0049]),
    0x2161u32 => compat(&[0x0049, 0x0049]),
    0x2162u32 => compat(&[0x0049, 0x0049, 0x0049]),
    0x2163u32 => compat(&[0x0049, 0x0056]),
    0x2164u32 => compat(&[0x0056]),
    0x2165u32 => compat(&[0x0056, 0x0049]),
    0x2166u32 => compat(&[0x0056, 0x0049, 0x0049]),
    0x2167u32 => compat(&[0x0056, 0x0049, 0x0049, 0x0049]),
    0x2168u32 => compat(&[0x0049, 0x0058]),
    0x2169u32 => compat(&[0x0058]),
    0x216Au32 => compat(&[0x0058, 0x0049]),
    0x216Bu32 => compat(&[0x0058, 0x0049, 0x0049]),
    0x216Cu32 => compat(&[0x004C]),
    0x216Du32 => compat(&[0x0043]),
    0x216Eu32 => compat(&[0x0044]),
    0x216Fu32 => compat(&[0x004D]),
    0x2170u32 => compat(&[0x0069]),
    0x2171u32 => compat(&[0x0069, 0x0069]),
    0x2172u32 => compat(&[0x0069, 0x0069, 0x0069]),
    0x2173u32 => compat(&[0x0069, 0x0076]),
    0x2174u32 => compat(&[0x0076]),
    0x2175u32 => compat(&[0x0076, 0x0069]),
    0x2176u32 => compat(&[0x0076, 0x0069, 0x0069]),
    0x2177u32 => compat(&[0x0076, 0x0069, 0x0069, 0x0069]),
    0x2178u32 => compat(&[0x0069, 0x0078]),
    0x2179u32 => compat(&[0x0078]),
    0x217Au32 => compat(&[0x0078, 0x0069]),
    0x217Bu32 => compat(&[0x0078, 0x0069, 0x0069]),
    0x217Cu32 => compat(&[0x006C]),
    0x217Du32 => compat(&[0x0063]),
    0x217Eu32 => compat(&[0x0064]),
    0x217Fu32 => compat(&[0x006D]),
    0x2189u32 => compat(&[0x0030, 0x2044, 0x0033]),
    0x219Au32 => canonical(&[0x2190, 0x0338]),
    0x219Bu32 => canonical(&[0x2192, 0x0338]),
    0x21AEu32 => canonical(&[0x2194, 0x0338]),
    0x21CDu32 => canonical(&[0x21D0, 0x0338]),
    0x21CEu32 => canonical(&[0x21D4, 0x0338]),
    0x21CFu32 => canonical(&[0x21D2, 0x0338]),
    0x2204u32 => canonical(&[0x2203, 0x0338]),
    0x2209u32 => canonical(&[0x2208, 0x0338]),
    0x220Cu32 => canonical(&[0x220B, 0x0338]),
    0x2224u32 => canonical(&[0x2223, 0x0338]),
    0x2226u32 => canonical(&[0x2225, 0x0338]),
    0x222Cu32 => compat(&[0x222B, 0x222B]),
    0x222Du32 => compat(&[0x222B, 0x222B, 0x222B]),
    0x222Fu32 => compat(&[0x222E, 0x222E]),
    0x2230u32 => compat(&[0x222E, 0x222E, 0x222E]),
    0x2241u32 => canonical(&[0x223C, 0x0338]),
    0x2244u32 => canonical(&[0x2243, 0x0338]),
    0x2247u32 => canonical(&[0x2245, 0x0338]),
    0x2249u32 => canonical(&[0x2248, 0x0338]),
    0x2260u32 => canonical(&[0x003D, 0x0338]),
    0x2262u32 => canonical(&[0x2261, 0x0338]),
    0x226Du32 => canonical(&[0x224D, 0x0338]),
    0x226Eu32 => canonical(&[0x003C, 0x0338]),
    0x226Fu32 => canonical(&[0x003E, 0x0338]),
    0x2270u32 => canonical(&[0x2264, 0x0338]),
    0x2271u32 => canonical(&[0x2265, 0x0338]),
    0x2274u32 => canonical(&[0x2272, 0x0338]),
    0x2275u32 => canonical(&[0x2273, 0x0338]),
    0x2278u32 => canonical(&[0x2276, 0x0338]),
    0x2279u32 => canonical(&[0x2277, 0x0338]),
    0x2280u32 => canonical(&[0x227A, 0x0338]),
    0x2281u32 => canonical(&[0x227B, 0x0338]),
    0x2284u32 => canonical(&[0x2282, 0x0338]),
    0x2285u32 => canonical(&[0x2283, 0x0338]),
    0x2288u32 => canonical(&[0x2286, 0x0338]),
    0x2289u32 => canonical(&[0x2287, 0x0338]),
    0x22ACu32 => canonical(&[0x22A2, 0x0338]),
    0x22ADu32 => canonical(&[0x22A8, 0x0338]),
    0x22AEu32 => canonical(&[0x22A9, 0x0338]),
    0x22AFu32 => canonical(&[0x22AB, 0x0338]),
    0x22E0u32 => canonical(&[0x227C, 0x0338]),
    0x22E1u32 => canonical(&[0x227D, 0x0338]),
    0x22E2u32 => canonical(&[0x2291, 0x0338]),
    0x22E3u32 => canonical(&[0x2292, 0x0338]),
    0x22EAu32 => canonical(&[0x22B2, 0x0338]),
    0x22EBu32 => canonical(&[0x22B3, 0x0338]),
    0x22ECu32 => canonical(&[0x22B4, 0x0338]),
    0x22EDu32 => canonical(&[0x22B5, 0x0338]),
    0x2329u32 => canonical(&[0x3008]),
    0x232Au32 => canonical(&[0x3009]),
    0x2460u32 => compat(&[0x0031]),
    0x2461u32 => compat(&[0x0032]),
    0x2462u32 => compat(&[0x0033]),
    0x2463u32 => compat(&[0x0034]),
    0x2464u32 => compat(&[0x0035]),
    0x2465u32 => compat(&[0x0036]),
    0x2466u32 => compat(&[0x0037]),
    0x2467u32 => compat(&[0x0038]),
    0x2468u32 => compat(&[0x0039]),
    0x2469u32 => compat(&[0x0031, 0x0030]),
    0x246Au32 => compat(&[0x0031, 0x0031]),
    0x246Bu32 => compat(&[0x0031, 0x0032]),
    0x246Cu32 => compat(&[0x0031, 0x0033]),
    0x246Du32 => compat(&[0x0031, 0x0034]),
    0x246Eu32 => compat(&[0x0031, 0x0035]),
    0x246Fu32 => compat(&[0x0031, 0x0036]),
    0x2470u32 => compat(&[0x0031, 0x0037]),
    0x2471u32 => compat(&[0x0031, 0x0038]),
    0x2472u32 => compat(&[0x0031, 0x0039]),
    0x2473u32 => compat(&[0x0032, 0x0030]),
    0x2474u32 => compat(&[0x0028, 0x0031, 0x0029]),
    0x2475u32 => compat(&[0x0028, 0x0032, 0x0029]),
    0x2476u32 => compat(&[0x0028, 0x0033, 0x0029]),
    0x2477u32 => compat(&[0x0028, 0x0034, 0x0029]),
    0x2478u32 => compat(&[0x0028, 0x0035, 0x0029]),
    0x2479u32 => compat(&[0x0028, 0x0036, 0x0029]),
    0x247Au32 => compat(&[0x0028, 0x0037, 0x0029]),
    0x247Bu32 => compat(&[0x0028, 0x0038, 0x0029]),
    0x247Cu32 => compat(&[0x0028, 0x0039, 0x0029]),
    0x247Du32 => compat(&[0x0028, 0x0031, 0x0030, 0x0029]),
    0x247Eu32 => compat(&[0x0028, 0x0031, 0x0031, 0x0029]),
    0x247Fu32 => compat(&[0x0028, 0x0031, 0x0032, 0x0029]),
    0x2480u32 => compat(&[0x0028, 0x0031, 0x0033, 0x0029]),
    0x2481u32 => compat(&[0x0028, 0x0031, 0x0034, 0x0029]),
    0x2482u32 => compat(&[0x0028, 0x0031, 0x0035, 0x0029]),
    0x2483u32 => compat(&[0x0028, 0x0031, 0x0036, 0x0029]),
    0x2484u32 => compat(&[0x0028, 0x0031, 0x0037, 0x0029]),
    0x2485u32 => compat(&[0x0028, 0x0031, 0x0038, 0x0029]),
    0x2486u32 => compat(&[0x0028, 0x0031, 0x0039, 0x0029]),
    0x2487u32 => compat(&[0x0028, 0x0032, 0x0030, 0x0029]),
    0x2488u32 => compat(&[0x0031, 0x002E]),
    0x2489u32 => compat(&[0x0032, 0x002E]),
    0x248Au32 => compat(&[0x0033, 0x002E]),
    0x248Bu32 => compat(&[0x0034, 0x002E]),
    0x248Cu32 => compat(&[0x0035, 0x002E]),
    0x248Du32 => compat(&[0x0036, 0x002E]),
    0x248Eu32 => compat(&[0x0037, 0x002E]),
    0x248Fu32 => compat(&[0x0038, 0x002E]),
    0x2490u32 => compat(&[0x0039, 0x002E]),
    0x2491u32 => compat(&[0x0031, 0x0030, 0x002E]),
    0x2492u32 => compat(&[0x0031, 0x0031, 0x002E]),
    0x2493u32 => compat(&[0x0031, 0x0032, 0x002E]),
    0x2494u32 => compat(&[0x0031, 0x0033, 0x002E]),
    0x2495u32 => compat(&[0x0031, 0x0034, 0x002E]),
    0x2496u32 => compat(&[0x0031, 0x0035, 0x002E]),
    0x2497u32 => compat(&[0x0031, 0x0036, 0x002E]),
    0x2498u32 => compat(&[0x0031, 0x0037, 0x002E]),
    0x2499u32 => compat(&[0x0031, 0x0038, 0x002E]),
    0x249Au32 => compat(&[0x0031, 0x0039, 0x002E]),
    0x249Bu32 => compat(&[0x0032, 0x0030, 0x002E]),
    0x249Cu32 => compat(&[0x0028, 0x0061, 0x0029]),
    0x249Du32 => compat(&[0x0028, 0x0062, 0x0029]),
    0x249Eu32 => compat(&[0x0028, 0x0063, 0x0029]),
    0x249Fu32 => compat(&[0x0028, 0x0064, 0x0029]),
    0x24A0u32 => compat(&[0x0028, 0x0065, 0x0029]),
    0x24A1u32 => compat(&[0x0028, 0x0066, 0x0029]),
    0x24A2u32 => compat(&[0x0028, 0x0067, 0x0029]),
    0x24A3u32 => compat(&[0x0028, 0x0068, 0x0029]),
    0x24A4u32 => compat(&[0x0028, 0x0069, 0x0029]),
    0x24A5u32 => compat(&[0x0028, 0x006A, 0x0029]),
    0x24A6u32 => compat(&[0x0028, 0x006B, 0x0029]),
    0x24A7u32 => compat(&[0x0028, 0x006C, 0x0029]),
    0x24A8u32 => compat(&[0x0028, 0x006D, 0x0029]),
    0x24A9u32 => compat(&[0x0028, 0x006E, 0x0029]),
    0x24AAu32 => compat(&[0x0028, 0x006F, 0x0029]),
    0x24ABu32 => compat(&[0x0028, 0x0070, 0x0029]),
    0x24ACu32 => compat(&[0x0028, 0x0071, 0x0029]),
    0x24ADu32 => compat(&[0x0028, 0x0072, 0x0029]),
    0x24AEu32 => compat(&[0x0028, 0x0073, 0x0029]),
    0x24AFu32 => compat(&[0x0028, 0x0074, 0x0029]),
    0x24B0u32 => compat(&[0x0028, 0x0075, 0x0029]),
    0x24B1u32 => compat(&[0x0028, 0x0076, 0x0029]),
    0x24B2u32 => compat(&[0x0028, 0x0077, 0x0029]),
    0x24B3u32 => compat(&[0x0028, 0x0078, 0x0029]),
    0x24B4u32 => compat(&[0x0028, 0x0079, 0x0029]),
    0x24B5u32 => compat(&[0x0028, 0x007A, 0x0029]),
    0x24B6u32 => compat(&[0x0041]),
    0x24B7u32 => compat(&[0x0042]),
    0x24B8u32 => compat(&[0x0043]),
    0x24B9u32 => compat(&[0x0044]),
    0x24BAu32 => compat(&[0x0045]),
    0x24BBu32 => compat(&[0x0046]),
    0x24BCu32 => compat(&[0x0047]),
    0x24BDu32 => compat(&[0x0048]),
    0x24BEu32 => compat(&[0x0049]),
    0x24BFu32 => compat(&[0x004A]),
    0x24C0u32 => compat(&[0x004B]),
    0x24C1u32 => compat(&[0x004C]),
    0x24C2u32 => compat(&[0x004D]),
    0x24C3u32 => compat(&[0x004E]),
    0x24C4u32 => compat(&[0x004F]),
    0x24C5u32 => compat(&[0x0050]),
    0x24C6u32 => compat(&[0x0051]),
    0x24C7u32 => compat(&[0x0052]),
    0x24C8u32 => compat(&[0x0053]),
    0x24C9u32 => compat(&[0x0054]),
    0x24CAu32 => compat(&[0x0055]),
    0x24CBu32 => compat(&[0x0056]),
    0x24CCu32 => compat(&[0x0057]),
    0x24CDu32 => compat(&[0x0058]),
    0x24CEu32 => compat(&[0x0059]),
    0x24CFu32 => compat(&[0x005A]),
    0x24D0u32 => compat(&[0x0061]),
    0x24D1u32 => compat(&[0x0062]),
    0x24D2u32 => compat(&[0x0063]),
    0x24D3u32 => compat(&[0x0064]),
    0x24D4u32 => compat(&[0x0065]),
    0x24D5u32 => compat(&[0x0066]),
    0x24D6u32 => compat(&[0x0067]),
    0x24D7u32 => compat(&[0x0068]),
    0x24D8u32 => compat(&[0x0069]),
    0x24D9u32 => compat(&[0x006A]),
    0x24DAu32 => compat(&[0x006B]),
    0x24DBu32 => compat(&[0x006C]),
    0x24DCu32 => compat(&[0x006D]),
    0x24DDu32 => compat(&[0x006E]),
    0x24DEu32 => compat(&[0x006F]),
    0x24DFu32 => compat(&[0x0070]),
    0x24E0u32 => compat(&[0x0071]),
    0x24E1u32 => compat(&[0x0072]),
    0x24E2u32 => compat(&[0x0073]),
    0x24E3u32 => compat(&[0x0074]),
    0x24E4u32 => compat(&[0x0075]),
    0x24E5u32 => compat(&[0x0076]),
    0x24E6u32 => compat(&[0x0077]),
    0x24E7u32 => compat(&[0x0078]),
    0x24E8u32 => compat(&[0x0079]),
    0x24E9u32 => compat(&[0x007A]),
    0x24EAu32 => compat(&[0x0030]),
    0x2A0Cu32 => compat(&[0x222B, 0x222B, 0x222B, 0x222B]),
    0x2A74u32 => compat(&[0x003A, 0x003A, 0x003D]),
    0x2A75u32 => compat(&[0x003D, 0x003D]),
    0x2A76u32 => compat(&[0x003D, 0x003D, 0x003D]),
    0x2ADCu32 => canonical(&[0x2ADD, 0x0338]),
    0x2C7Cu32 => compat(&[0x006A]),
    0x2C7Du32 => compat(&[0x0056]),
    0x2D6Fu32 => compat(&[0x2D61]),
    0x2E9Fu32 => compat(&[0x6BCD]),
    0x2EF3u32 => compat(&[0x9F9F]),
    0x2F00u32 => compat(&[0x4E00]),
    0x2F01u32 => compat(&[0x4E28]),
    0x2F02u32 => compat(&[0x4E36]),
    0x2F03u32 => compat(&[0x4E3F]),
    0x2F04u32 => compat(&[0x4E59]),
    0x2F05u32 => compat(&[0x4E85]),
    0x2F06u32 => compat(&[0x4E8C]),
    0x2F07u32 => compat(&[0x4EA0]),
    0x2F08u32 => compat(&[0x4EBA]),
    0x2F09u32 => compat(&[0x513F]),
    0x2F0Au32 => compat(&[0x5165]),
    0x2F0Bu32 => compat(&[0x516B]),
    0x2F0Cu32 => compat(&[0x5182]),
    0x2F0Du32 => compat(&[0x5196]),
    0x2F0Eu32 => compat(&[0x51AB]),
    0x2F0Fu32 => compat(&[0x51E0]),
    0x2F10u32 => compat(&[0x51F5]),
    0x2F11u32 => compat(&[0x5200]),
    0x2F12u32 => compat(&[0x529B]),
    0x2F13u32 => compat(&[0x52F9]),
    0x2F14u32 => compat(&[0x5315]),
    0x2F15u32 => compat(&[0x531A]),
    0x2F16u32 => compat(&[0x5338]),
    0x2F17u32 => compat(&[0x5341]),
    0x2F18u32 => compat(&[0x535C]),
    0x2F19u32 => compat(&[0x5369]),
    0x2F1Au32 => compat(&[0x5382]),
    0x2F1Bu32 => compat(&[0x53B6]),
    0x2F1Cu32 => compat(&[0x53C8]),
    0x2F1Du32 => compat(&[0x53E3]),
    0x2F1Eu32 => compat(&[0x56D7]),
    0x2F1Fu32 => compat(&[0x571F]),
    0x2F20u32 => compat(&[0x58EB]),
    0x2F21u32 => compat(&[0x5902]),
    0x2F22u32 => compat(&[0x590A]),
    0x2F23u32 => compat(&[0x5915]),
    0x2F24u32 => compat(&[0x5927]),
    0x2F25u32 => compat(&[0x5973]),
    0x2F26u32 => compat(&[0x5B50]),
    0x2F27u32 => compat(&[0x5B80]),
    0x2F28u32 => compat(&[0x5BF8]),
    0x2F29u32 => compat(&[0x5C0F]),
    0x2F2Au32 => compat(&[0x5C22]),
    0x2F2Bu32 => compat(&[0x5C38]),
    0x2F2Cu32 => compat(&[0x5C6E]),
    0x2F2Du32 => compat(&[0x5C71]),
    0x2F2Eu32 => compat(&[0x5DDB]),
    0x2F2Fu32 => compat(&[0x5DE5]),
    0x2F30u32 => compat(&[0x5DF1]),
    0x2F31u32 => compat(&[0x5DFE]),
    0x2F32u32 => compat(&[0x5E72]),
    0x2F33u32 => compat(&[0x5E7A]),
    0x2F34u32 => compat(&[0x5E7F]),
    0x2F35u32 => compat(&[0x5EF4]),
    0x2F36u32 => compat(&[0x5EFE]),
    0x2F37u32 => compat(&[0x5F0B]),
    0x2F38u32 => compat(&[0x5F13]),
    0x2F39u32 => compat(&[0x5F50]),
    0x2F3Au32 => compat(&[0x5F61]),
    0x2F3Bu32 => compat(&[0x5F73]),
    0x2F3Cu32 => compat(&[0x5FC3]),
    0x2F3Du32 => compat(&[0x6208]),
    0x2F3Eu32 => compat(&[0x6236]),
    0x2F3Fu32 => compat(&[0x624B]),
    0x2F40u32 => compat(&[0x652F]),
    0x2F41u32 => compat(&[0x6534]),
    0x2F42u32 => compat(&[0x6587]),
    0x2F43u32 => compat(&[0x6597]),
    0x2F44u32 => compat(&[0x65A4]),
    0x2F45u32 => compat(&[0x65B9]),
    0x2F46u32 => compat(&[0x65E0]),
    0x2F47u32 => compat(&[0x65E5]),
    0x2F48u32 => compat(&[0x66F0]),
    0x2F49u32 => compat(&[0x6708]),
    0x2F4Au32 => compat(&[0x6728]),
    0x2F4Bu32 => compat(&[0x6B20]),
    0x2F4Cu32 => compat(&[0x6B62]),
    0x2F4Du32 => compat(&[0x6B79]),
    0x2F4Eu32 => compat(&[0x6BB3]),
    0x2F4Fu32 => compat(&[0x6BCB]),
    0x2F50u32 => compat(&[0x6BD4]),
    0x2F51u32 => compat(&[0x6BDB]),
    0x2F52u32 => compat(&[0x6C0F]),
    0x2F53u32 => compat(&[0x6C14]),
    0x2F54u32 => compat(&[0x6C34]),
    0x2F55u32 => compat(&[0x706B]),
    0x2F56u32 => compat(&[0x722A]),
    0x2F57u32 => compat(&[0x7236]),
    0x2F58u32 => compat(&[0x723B]),
    0x2F59u32 => compat(&[0x723F]),
    0x2F5Au32 => compat(&[0x7247]),
    0x2F5Bu32 => compat(&[0x7259]),
    0x2F5Cu32 => compat(&[0x725B]),
    0x2F5Du32 => compat(&[0x72AC]),
    0x2F5Eu32 => compat(&[0x7384]),
    0x2F5Fu32 => compat(&[0x7389]),
    0x2F60u32 => compat(&[0x74DC]),
    0x2F61u32 => compat(&[0x74E6]),
    0x2F62u32 => compat(&[0x7518]),
    0x2F63u32 => compat(&[0x751F]),
    0x2F64u32 => compat(&[0x7528]),
    0x2F65u32 => compat(&[0x7530]),
    0x2F66u32 => compat(&[0x758B]),
    0x2F67u32 => compat(&[0x7592]),
    0x2F68u32 => compat(&[0x7676]),
    0x2F69u32 => compat(&[0x767D]),
    0x2F6Au32 => compat(&[0x76AE]),
    0x2F6Bu32 => compat(&[0x76BF]),
    0x2F6Cu32 => compat(&[0x76EE]),
    0x2F6Du32 => compat(&[0x77DB]),
    0x2F6Eu32 => compat(&[0x77E2]),
    0x2F6Fu32 => compat(&[0x77F3]),
    0x2F70u32 => compat(&[0x793A]),
    0x2F71u32 => compat(&[0x79B8]),
    0x2F72u32 => compat(&[0x79BE]),
    0x2F73u32 => compat(&[0x7A74]),
    0x2F74u32 => compat(&[0x7ACB]),
    0x2F75u32 => compat(&[0x7AF9]),
    0x2F76u32 => compat(&[0x7C73]),
    0x2F77u32 => compat(&[0x7CF8]),
    0x2F78u32 => compat(&[0x7F36]),
    0x2F79u32 => compat(&[0x7F51]),
    0x2F7Au32 => compat(&[0x7F8A]),
    0x2F7Bu32 => compat(&[0x7FBD]),
    0x2F7Cu32 => compat(&[0x8001]),
    0x2F7Du32 => compat(&[0x800C]),
    0x2F7Eu32 => compat(&[0x8012]),
    0x2F7Fu32 => compat(&[0x8033]),
    0x2F80u32 => compat(&[0x807F]),
    0x2F81u32 => compat(&[0x8089]),
    0x2F82u32 => compat(&[0x81E3]),
    0x2F83u32 => compat(&[0x81EA]),
    0x2F84u32 => compat(&[0x81F3]),
    0x2F85u32 => compat(&[0x81FC]),
    0x2F86u32 => compat(&[0x820C]),
    0x2F87u32 => compat(&[0x821B]),
    0x2F88u32 => compat(&[0x821F]),
    0x2F89u32 => compat(&[0x826E]),
    0x2F8Au32 => compat(&[0x8272]),
    0x2F8Bu32 => compat(&[0x8278]),
    0x2F8Cu32 => compat(&[0x864D]),
    0x2F8Du32 => compat(&[0x866B]),
    0x2F8Eu32 => compat(&[0x8840]),
    0x2F8Fu32 => compat(&[0x884C]),
    0x2F90u32 => compat(&[0x8863]),
    0x2F91u32 => compat(&[0x897E]),
    0x2F92u32 => compat(&[0x898B]),
    0x2F93u32 => compat(&[0x89D2]),
    0x2F94u32 => compat(&[0x8A00]),
    0x2F95u32 => compat(&[0x8C37]),
    0x2F96u32 => compat(&[0x8C46]),
    0x2F97u32 => compat(&[0x8C55]),
    0x2F98u32 => compat(&[0x8C78]),
    0x2F99u32 => compat(&[0x8C9D]),
    0x2F9Au32 => compat(&[0x8D64]),
    0x2F9Bu32 => compat(&[0x8D70]),
    0x2F9Cu32 => compat(&[0x8DB3]),
    0x2F9Du32 => compat(&[0x8EAB]),
    0x2F9Eu32 => compat(&[0x8ECA]),
    0x2F9Fu32 => compat(&[0x8F9B]),
    0x2FA0u32 => compat(&[0x8FB0]),
    0x2FA1u32 => compat(&[0x8FB5]),
    0x2FA2u32 => compat(&[0x9091]),
    0x2FA3u32 => compat(&[0x9149]),
    0x2FA4u32 => compat(&[0x91C6]),
    0x2FA5u32 => compat(&[0x91CC]),
    0x2FA6u32 => compat(&[0x91D1]),
    0x2FA7u32 => compat(&[0x9577]),
    0x2FA8u32 => compat(&[0x9580]),
    0x2FA9u32 => compat(&[0x961C]),
    0x2FAAu32 => compat(&[0x96B6]),
    0x2FABu32 => compat(&[0x96B9]),
    0x2FACu32 => compat(&[0x96E8]),
    0x2FADu32 => compat(&[0x9751]),
    0x2FAEu32 => compat(&[0x975E]),
    0x2FAFu32 => compat(&[0x9762]),
    0x2FB0u32 => compat(&[0x9769]),
    0x2FB1u32 => compat(&[0x97CB]),
    0x2FB2u32 => compat(&[0x97ED]),
    0x2FB3u32 => compat(&[0x97F3]),
    0x2FB4u32 => compat(&[0x9801]),
    0x2FB5u32 => compat(&[0x98A8]),
    0x2FB6u32 => compat(&[0x98DB]),
    0x2FB7u32 => compat(&[0x98DF]),
    0x2FB8u32 => compat(&[0x9996]),
    0x2FB9u32 => compat(&[0x9999]),
    0x2FBAu32 => compat(&[0x99AC]),
    0x2FBBu32 => compat(&[0x9AA8]),
    0x2FBCu32 => compat(&[0x9AD8]),
    0x2FBDu32 => compat(&[0x9ADF]),
    0x2FBEu32 => compat(&[0x9B25]),
    0x2FBFu32 => compat(&[0x9B2F]),
    0x2FC0u32 => compat(&[0x9B32]),
    0x2FC1u32 => compat(&[0x9B3C]),
    0x2FC2u32 => compat(&[0x9B5A]),
    0x2FC3u32 => compat(&[0x9CE5]),
    0x2FC4u32 => compat(&[0x9E75]),
    0x2FC5u32 => compat(&[0x9E7F]),
    0x2FC6u32 => compat(&[0x9EA5]),
    0x2FC7u32 => compat(&[0x9EBB]),
    0x2FC8u32 => compat(&[0x9EC3]),
    0x2FC9u32 => compat(&[0x9ECD]),
    0x2FCAu32 => compat(&[0x9ED1]),
    0x2FCBu32 => compat(&[0x9EF9]),
    0x2FCCu32 => compat(&[0x9EFD]),
    0x2FCDu32 => compat(&[0x9F0E]),
    0x2FCEu32 => compat(&[0x9F13]),
    0x2FCFu32 => compat(&[0x9F20]),
    0x2FD0u32 => compat(&[0x9F3B]),
    0x2FD1u32 => compat(&[0x9F4A]),
    0x2FD2u32 => compat(&[0x9F52]),
    0x2FD3u32 => compat(&[0x9F8D]),
    0x2FD4u32 => compat(&[0x9F9C]),
    0x2FD5u32 => compat(&[0x9FA0]),
    0x3000u32 => compat(&[0x0020]),
    0x3036u32 => compat(&[0x3012]),
    0x3038u32 => compat(&[0x5341]),
    0x3039u32 => compat(&[0x5344]),
    0x303Au32 => compat(&[0x5345]),
    0x304Cu32 => canonical(&[0x304B, 0x3099]),
    0x304Eu32 => canonical(&[0x304D, 0x3099]),
    0x3050u32 => canonical(&[0x304F, 0x3099]),
    0x3052u32 => canonical(&[0x3051, 0x3099]),
    0x3054u32 => canonical(&[0x3053, 0x3099]),
    0x3056u32 => canonical(&[0x3055, 0x3099]),
    0x3058u32 => canonical(&[0x3057, 0x3099]),
    0x305Au32 => canonical(&[0x3059, 0x3099]),
    0x305Cu32 => canonical(&[0x305B, 0x3099]),
    0x305Eu32 => canonical(&[0x305D, 0x3099]),
    0x3060u32 => canonical(&[0x305F, 0x3099]),
    0x3062u32 => canonical(&[0x3061, 0x3099]),
    0x3065u32 => canonical(&[0x3064, 0x3099]),
    0x3067u32 => canonical(&[0x3066, 0x3099]),
    0x3069u32 => canonical(&[0x3068, 0x3099]),
    0x3070u32 => canonical(&[0x306F, 0x3099]),
    0x3071u32 => canonical(&[0x306F, 0x309A]),
    0x3073u32 => canonical(&[0x3072, 0x3099]),
    0x3074u32 => canonical(&[0x3072, 0x309A]),
    0x3076u32 => canonical(&[0x3075, 0x3099]),
    0x3077u32 => canonical(&[0x3075, 0x309A]),
    0x3079u32 => canonical(&[0x3078, 0x3099]),
    0x307Au32 => canonical(&[0x3078, 0x309A]),
    0x307Cu32 => canonical(&[0x307B, 0x3099]),
    0x307Du32 => canonical(&[0x307B, 0x309A]),
    0x3094u32 => canonical(&[0x3046, 0x3099]),
    0x309Bu32 => compat(&[0x0020, 0x3099]),
    0x309Cu32 => compat(&[0x0020, 0x309A]),
    0x309Eu32 => canonical(&[0x309D, 0x3099]),
    0x309Fu32 => compat(&[0x3088, 0x308A]),
    0x30ACu32 => canonical(&[0x30AB, 0x3099]),
    0x30AEu32 => canonical(&[0x30AD, 0x3099]),
    0x30B0u32 => canonical(&[0x30AF, 0x3099]),
    0x30B2u32 => canonical(&[0x30B1, 0x3099]),
    0x30B4u32 => canonical(&[0x30B3, 0x3099]),
    0x30B6u32 => canonical(&[0x30B5, 0x3099]),
    0x30B8u32 => canonical(&[0x30B7, 0x3099]),
    0x30BAu32 => canonical(&[0x30B9, 0x3099]),
    0x30BCu32 => canonical(&[0x30BB, 0x3099]),
    0x30BEu32 => canonical(&[0x30BD, 0x3099]),
    0x30C0u32 => canonical(&[0x30BF, 0x3099]),
    0x30C2u32 => canonical(&[0x30C1, 0x3099]),
    0x30C5u32 => canonical(&[0x30C4, 0x3099]),
    0x30C7u32 => canonical(&[0x30C6, 0x3099]),
    0x30C9u32 => canonical(&[0x30C8, 0x3099]),
    0x30D0u32 => canonical(&[0x30CF, 0x3099]),
    0x30D1u32 => canonical(&[0x30CF, 0x309A]),
    0x30D3u32 => canonical(&[0x30D2, 0x3099]),
    0x30D4u32 => canonical(&[0x30D2, 0x309A]),
    0x30D6u32 => canonical(&[0x30D5, 0x3099]),
    0x30D7u32 => canonical(&[0x30D5, 0x309A]),
    0x30D9u32 => canonical(&[0x30D8, 0x3099]),
    0x30DAu32 => canonical(&[0x30D8, 0x309A]),
    0x30DCu32 => canonical(&[0x30DB, 0x3099]),
    0x30DDu32 => canonical(&[0x30DB, 0x309A]),
    0x30F4u32 => canonical(&[0x30A6, 0x3099]),
    0x30F7u32 => canonical(&[0x30EF, 0x3099]),
    0x30F8u32 => canonical(&[0x30F0, 0x3099]),
    0x30F9u32 => canonical(&[0x30F1, 0x3099]),
    0x30FAu32 => canonical(&[0x30F2, 0x3099]),
    0x30FEu32 => canonical(&[0x30FD, 0x3099]),
    0x30FFu32 => compat(&[0x30B3, 0x30C8]),
    0x3131u32 => compat(&[0x1100]),
    0x3132u32 => compat(&[0x1101]),
    0x3133u32 => compat(&[0x11AA]),
    0x3134u32 => compat(&[0x1102]),
    0x3135u32 => compat(&[0x11AC]),
    0x3136u32 => compat(&[0x11AD]),
    0x3137u32 => compat(&[0x1103]),
    0x3138u32 => compat(&[0x1104]),
    0x3139u32 => compat(&[0x1105]),
    0x313Au32 => compat(&[0x11B0]),
    0x313Bu32 => compat(&[0x11B1]),
    0x313Cu32 => compat(&[0x11B2]),
    0x313Du32 => compat(&[0x11B3]),
    0x313Eu32 => compat(&[0x11B4]),
    0x313Fu32 => compat(&[0x11B5]),
    0x3140u32 => compat(&[0x111A]),
    0x3141u32 => compat(&[0x1106]),
    0x3142u32 => compat(&[0x1107]),
    0x3143u32 => compat(&[0x1108]),
    0x3144u32 => compat(&[0x1121]),
    0x3145u32 => compat(&[0x1109]),
    0x3146u32 => compat(&[0x110A]),
    0x3147u32 => compat(&[0x110B]),
    0x3148u32 => compat(&[0x110C]),
    0x3149u32 => compat(&[0x110D]),
    0x314Au32 => compat(&[0x110E]),
    0x314Bu32 => compat(&[0x110F]),
    0x314Cu32 => compat(&[0x1110]),
    0x314Du32 => compat(&[0x1111]),
    0x314Eu32 => compat(&[0x1112]),
    0x314Fu32 => compat(&[0x1161]),
    0x3150u32 => compat(&[0x1162]),
    0x3151u32 => compat(&[0x1163]),
    0x3152u32 => compat(&[0x1164]),
    0x3153u32 => compat(&[0x1165]),
    0x3154u32 => compat(&[0x1166]),
    0x3155u32 => compat(&[0x1167]),
    0x3156u32 => compat(&[0x1168]),
    0x3157u32 => compat(&[0x1169]),
    0x3158u32 => compat(&[0x116A]),
    0x3159u32 => compat(&[0x116B]),
    0x315Au32 => compat(&[0x116C]),
    0x315Bu32 => compat(&[0x116D]),
    0x315Cu32 => compat(&[0x116E]),
    0x315Du32 => compat(&[0x116F]),
    0x315Eu32 => compat(&[0x1170]),
    0x315Fu32 => compat(&[0x1171]),
    0x3160u32 => compat(&[0x1172]),
    0x3161u32 => compat(&[0x1173]),
    0x3162u32 => compat(&[0x1174]),
    0x3163u32 => compat(&[0x1175]),
    0x3164u32 => compat(&[0x1160]),
    0x3165u32 => compat(&[0x1114]),
    0x3166u32 => compat(&[0x1115]),
    0x3167u32 => compat(&[0x11C7]),
    0x3168u32 => compat(&[0x11C8]),
    0x3169u32 => compat(&[0x11CC]),
    0x316Au32 => compat(&[0x11CE]),
    0x316Bu32 => compat(&[0x11D3]),
    0x316Cu32 => compat(&[0x11D7]),
    0x316Du32 => compat(&[0x11D9]),
    0x316Eu32 => compat(&[0x111C]),
    0x316Fu32 => compat(&[0x11DD]),
    0x3170u32 => compat(&[0x11DF]),
    0x3171u32 => compat(&[0x111D]),
    0x3172u32 => compat(&[0x111E]),
    0x3173u32 => compat(&[0x1120]),
    0x3174u32 => compat(&[0x1122]),
    0x3175u32 => compat(&[0x1123]),
    0x3176u32 => compat(&[0x1127]),
    0x3177u32 => compat(&[0x1129]),
    0x3178u32 => compat(&[0x112B]),
    0x3179u32 => compat(&[0x112C]),
    0x317Au32 => compat(&[0x112D]),
    0x317Bu32 => compat(&[0x112E]),
    0x317Cu32 => compat(&[0x112F]),
    0x317Du32 => compat(&[0x1132]),
    0x317Eu32 => compat(&[0x1136]),
    0x317Fu32 => compat(&[0x1140]),
    0x3180u32 => compat(&[0x1147]),
    0x3181u32 => compat(&[0x114C]),
    0x3182u32 => compat(&[0x11F1]),
    0x3183u32 => compat(&[0x11F2]),
    0x3184u32 => compat(&[0x1157]),
    0x3185u32 => compat(&[0x1158]),
    0x3186u32 => compat(&[0x1159]),
    0x3187u32 => compat(&[0x1184]),
    0x3188u32 => compat(&[0x1185]),
    0x3189u32 => compat(&[0x1188]),
    0x318Au32 => compat(&[0x1191]),
    0x318Bu32 => compat(&[0x1192]),
    0x318Cu32 => compat(&[0x1194]),
    0x318Du32 => compat(&[0x119E]),
    0x318Eu32 => compat(&[0x11A1]),
    0x3192u32 => compat(&[0x4E00]),
    0x3193u32 => compat(&[0x4E8C]),
    0x3194u32 => compat(&[0x4E09]),
    0x3195u32 => compat(&[0x56DB]),
    0x3196u32 => compat(&[0x4E0A]),
    0x3197u32 => compat(&[0x4E2D]),
    0x3198u32 => compat(&[0x4E0B]),
    0x3199u32 => compat(&[0x7532]),
    0x319Au32 => compat(&[0x4E59]),
    0x319Bu32 => compat(&[0x4E19]),
    0x319Cu32 => compat(&[0x4E01]),
    0x319Du32 => compat(&[0x5929]),
    0x319Eu32 => compat(&[0x5730]),
    0x319Fu32 => compat(&[0x4EBA]),
    0x3200u32 => compat(&[0x0028, 0x1100, 0x0029]),
    0x3201u32 => compat(&[0x0028, 0x1102, 0x0029]),
    0x3202u32 => compat(&[0x0028, 0x1103, 0x0029]),
    0x3203u32 => compat(&[0x0028, 0x1105, 0x0029]),
    0x3204u32 => compat(&[0x0028, 0x1106, 0x0029]),
    0x3205u32 => compat(&[0x0028, 0x1107, 0x0029]),
    0x3206u32 => compat(&[0x0028, 0x1109, 0x0029]),
    0x3207u32 => compat(&[0x0028, 0x110B, 0x0029]),
    0x3208u32 => compat(&[0x0028, 0x110C, 0x0029]),
    0x3209u32 => compat(&[0x0028, 0x110E, 0x0029]),
    0x320Au32 => compat(&[0x0028, 0x110F, 0x0029]),
    0x320Bu32 => compat(&[0x0028, 0x1110, 0x0029]),
    0x320Cu32 => compat(&[0x0028, 0x1111, 0x0029]),
    0x320Du32 => compat(&[0x0028, 0x1112, 0x0029]),
    0x320Eu32 => compat(&[0x0028, 0x1100, 0x1161, 0x0029]),
    0x320Fu32 => compat(&[0x0028, 0x1102, 0x1161, 0x0029]),
    0x3210u32 => compat(&[0x0028, 0x1103, 0x1161, 0x0029]),
    0x3211u32 => compat(&[0x0028, 0x1105, 0x1161, 0x0029]),
    0x3212u32 => compat(&[0x0028, 0x1106, 0x1161, 0x0029]),
    0x3213u32 => compat(&[0x0028, 0x1107, 0x1161, 0x0029]),
    0x3214u32 => compat(&[0x0028, 0x1109, 0x1161, 0x0029]),
    0x3215u32 => compat(&[0x0028, 0x110B, 0x1161, 0x0029]),
    0x3216u32 => compat(&[0x0028, 0x110C, 0x1161, 0x0029]),
    0x3217u32 => compat(&[0x0028, 0x110E, 0x1161, 0x0029]),
    0x3218u32 => compat(&[0x0028, 0x110F, 0x1161, 0x0029]),
    0x3219u32 => compat(&[0x0028, 0x1110, 0x1161, 0x0029]),
    0x321Au32 => compat(&[0x0028, 0x1111, 0x1161, 0x0029]),
    0x321Bu32 => compat(&[0x0028, 0x1112, 0x1161, 0x0029]),
    0x321Cu32 => compat(&[0x0028, 0x110C, 0x116E, 0x0029]),
    0x321Du32 => compat(&[0x0028, 0x110B, 0x1169, 0x110C, 0x1165, 0x11AB, 0x0029]),
    0x321Eu32 => compat(&[0x0028, 0x110B, 0x1169, 0x1112, 0x116E, 0x0029]),
    0x3220u32 => compat(&[0x0028, 0x4E00, 0x0029]),
    0x3221u32 => compat(&[0x0028, 0x4E8C, 0x0029]),
    0x3222u32 => compat(&[0x0028, 0x4E09, 0x0029]),
    0x3223u32 => compat(&[0x0028, 0x56DB, 0x0029]),
    0x3224u32 => compat(&[0x0028, 0x4E94, 0x0029]),
    0x3225u32 => compat(&[0x0028, 0x516D, 0x0029]),
    0x3226u32 => compat(&[0x0028, 0x4E03, 0x0029]),
    0x3227u32 => compat(&[0x0028, 0x516B, 0x0029]),
    0x3228u32 => compat(&[0x0028, 0x4E5D, 0x0029]),
    0x3229u32 => compat(&[0x0028, 0x5341, 0x0029]),
    0x322Au32 => compat(&[0x0028, 0x6708, 0x0029]),
    0x322Bu32 => compat(&[0x0028, 0x706B, 0x0029]),
    0x322Cu32 => compat(&[0x0028, 0x6C34, 0x0029]),
    0x322Du32 => compat(&[0x0028, 0x6728, 0x0029]),
    0x322Eu32 => compat(&[0x0028, 0x91D1, 0x0029]),
    0x322Fu32 => compat(&[0x0028, 0x571F, 0x0029]),
    0x3230u32 => compat(&[0x0028, 0x65E5, 0x0029]),
    0x3231u32 => compat(&[0x0028, 0x682A, 0x0029]),
    0x3232u32 => compat(&[0x0028, 0x6709, 0x0029]),
    0x3233u32 => compat(&[0x0028, 0x793E, 0x0029]),
    0x3234u32 => compat(&[0x0028, 0x540D, 0x0029]),
    0x3235u32 => compat(&[0x0028, 0x7279, 0x0029]),
    0x3236u32 => compat(&[0x0028, 0x8CA1, 0x0029]),
    0x3237u32 => compat(&[0x0028, 0x795D, 0x0029]),
    0x3238u32 => compat(&[0x0028, 0x52B4, 0x0029]),
    0x3239u32 => compat(&[0x0028, 0x4EE3, 0x0029]),
    0x323Au32 => compat(&[0x0028, 0x547C, 0x0029]),
    0x323Bu32 => compat(&[0x0028, 0x5B66, 0x0029]),
    0x323Cu32 => compat(&[0x0028, 0x76E3, 0x0029]),
    0x323Du32 => compat(&[0x0028, 0x4F01, 0x0029]),
    0x323Eu32 => compat(&[0x0028, 0x8CC7, 0x0029]),
    0x323Fu32 => compat(&[0x0028, 0x5354, 0x0029]),
    0x3240u32 => compat(&[0x0028, 0x796D, 0x0029]),
    0x3241u32 => compat(&[0x0028, 0x4F11, 0x0029]),
    0x3242u32 => compat(&[0x0028, 0x81EA, 0x0029]),
    0x3243u32 => compat(&[0x0028, 0x81F3, 0x0029]),
    0x3244u32 => compat(&[0x554F]),
    0x3245u32 => compat(&[0x5E7C]),
    0x3246u32 => compat(&[0x6587]),
    0x3247u32 => compat(&[0x7B8F]),
    0x3250u32 => compat(&[0x0050, 0x0054, 0x0045]),
    0x3251u32 => compat(&[0x0032, 0x0031]),
    0x3252u32 => compat(&[0x0032, 0x0032]),
    0x3253u32 => compat(&[0x0032, 0x0033]),
    0x3254u32 => compat(&[0x0032, 0x0034]),
    0x3255u32 => compat(&[0x0032, 0x0035]),
    0x3256u32 => compat(&[0x0032, 0x0036]),
    0x3257u32 => compat(&[0x0032, 0x0037]),
    0x3258u32 => compat(&[0x0032, 0x0038]),
    0x3259u32 => compat(&[0x0032, 0x0039]),
    0x325Au32 => compat(&[0x0033, 0x0030]),
    0x325Bu32 => compat(&[0x0033, 0x0031]),
    0x325Cu32 => compat(&[0x0033, 0x0032]),
    0x325Du32 => compat(&[0x0033, 0x0033]),
    0x325Eu32 => compat(&[0x0033, 0x0034]),
    0x325Fu32 => compat(&[0x0033, 0x0035]),
    0x3260u32 => compat(&[0x1100]),
    0x3261u32 => compat(&[0x1102]),
    0x3262u32 => compat(&[0x1103]),
    0x3263u32 => compat(&[0x1105]),
    0x3264u32 => compat(&[0x1106]),
    0x3265u32 => compat(&[0x1107]),
    0x3266u32 => compat(&[0x1109]),
    0x3267u32 => compat(&[0x110B]),
    0x3268u32 => compat(&[0x110C]),
    0x3269u32 => compat(&[0x110E]),
    0x326Au32 => compat(&[0x110F]),
    0x326Bu32 => compat(&[0x1110]),
    0x326Cu32 => compat(&[0x1111]),
    0x326Du32 => compat(&[0x1112]),
    0x326Eu32 => compat(&[0x1100, 0x1161]),
    0x326Fu32 => compat(&[0x1102, 0x1161]),
    0x3270u32 => compat(&[0x1103, 0x1161]),
    0x3271u32 => compat(&[0x1105, 0x1161]),
    0x3272u32 => compat(&[0x1106, 0x1161]),
    0x3273u32 => compat(&[0x1107, 0x1161]),
    0x3274u32 => compat(&[0x1109, 0x1161]),
    0x3275u32 => compat(&[0x110B, 0x1161]),
    0x3276u32 => compat(&[0x110C, 0x1161]),
    0x3277u32 => compat(&[0x110E, 0x1161]),
    0x3278u32 => compat(&[0x110F, 0x1161]),
    0x3279u32 => compat(&[0x1110, 0x1161]),
    0x327Au32 => compat(&[0x1111, 0x1161]),
    0x327Bu32 => compat(&[0x1112, 0x1161]),
    0x327Cu32 => compat(&[0x110E, 0x1161, 0x11B7, 0x1100, 0x1169]),
    0x327Du32 => compat(&[0x110C, 0x116E, 0x110B, 0x1174]),
    0x327Eu32 => compat(&[0x110B, 0x116E]),
    0x3280u32 => compat(&[0x4E00]),
    0x3281u32 => compat(&[0x4E8C]),
    0x3282u32 => compat(&[0x4E09]),
    0x3283u32 => compat(&[0x56DB]),
    0x3284u32 => compat(&[0x4E94]),
    0x3285u32 => compat(&[0x516D]),
    0x3286u32 => compat(&[0x4E03]),
    0x3287u32 => compat(&[0x516B]),
    0x3288u32 => compat(&[0x4E5D]),
    0x3289u32 => compat(&[0x5341]),
    0x328Au32 => compat(&[0x6708]),
    0x328Bu32 => compat(&[0x706B]),
    0x328Cu32 => compat(&[0x6C34]),
    0x328Du32 => compat(&[0x6728]),
    0x328Eu32 => compat(&[0x91D1]),
    0x328Fu32 => compat(&[0x571F]),
    0x3290u32 => compat(&[0x65E5]),
    0x3291u32 => compat(&[0x682A]),
    0x3292u32 => compat(&[0x6709]),
    0x3293u32 => compat(&[0x793E]),
    0x3294u32 => compat(&[0x540D]),
    0x3295u32 => compat(&[0x7279]),
    0x3296u32 => compat(&[0x8CA1]),
    0x3297u32 => compat(&[0x795D]),
    0x3298u32 => compat(&[0x52B4]),
    0x3299u32 => compat(&[0x79D8]),
    0x329Au32 => compat(&[0x7537]),
    0x329Bu32 => compat(&[0x5973]),
    0x329Cu32 => compat(&[0x9069]),
    0x329Du32 => compat(&[0x512A]),
    0x329Eu32 => compat(&[0x5370]),
    0x329Fu32 => compat(&[0x6CE8]),
    0x32A0u32 => compat(&[0x9805]),
    0x32A1u32 => compat(&[0x4F11]),
    0x32A2u32 => compat(&[0x5199]),
    0x32A3u32 => compat(&[0x6B63]),
    0x32A4u32 => compat(&[0x4E0A]),
    0x32A5u32 => compat(&[0x4E2D]),
    0x32A6u32 => compat(&[0x4E0B]),
    0x32A7u32 => compat(&[0x5DE6]),
    0x32A8u32 => compat(&[0x53F3]),
    0x32A9u32 => compat(&[0x533B]),
    0x32AAu32 => compat(&[0x5B97]),
    0x32ABu32 => compat(&[0x5B66]),
    0x32ACu32 => compat(&[0x76E3]),
    0x32ADu32 => compat(&[0x4F01]),
    0x32AEu32 => compat(&[0x8CC7]),
    0x32AFu32 => compat(&[0x5354]),
    0x32B0u32 => compat(&[0x591C]),
    0x32B1u32 => compat(&[0x0033, 0x0036]),
    0x32B2u32 => compat(&[0x0033, 0x0037]),
    0x32B3u32 => compat(&[0x0033, 0x0038]),
    0x32B4u32 => compat(&[0x0033, 0x0039]),
    0x32B5u32 => compat(&[0x0034, 0x0030]),
    0x32B6u32 => compat(&[0x0034, 0x0031]),
    0x32B7u32 => compat(&[0x0034, 0x0032]),
    0x32B8u32 => compat(&[0x0034, 0x0033]),
    0x32B9u32 => compat(&[0x0034, 0x0034]),
    0x32BAu32 => compat(&[0x0034, 0x0035]),
    0x32BBu32 => compat(&[0x0034, 0x0036]),
    0x32BCu32 => compat(&[0x0034, 0x0037]),
    0x32BDu32 => compat(&[0x0034, 0x0038]),
    0x32BEu32 => compat(&[0x0034, 0x0039]),
    0x32BFu32 => compat(&[0x0035, 0x0030]),
    0x32C0u32 => compat(&[0x0031, 0x6708]),
    0x32C1u32 => compat(&[0x0032, 0x6708]),
    0x32C2u32 => compat(&[0x0033, 0x6708]),
    0x32C3u32 => compat(&[0x0034, 0x6708]),
    0x32C4u32 => compat(&[0x0035, 0x6708]),
    0x32C5u32 => compat(&[0x0036, 0x6708]),
    0x32C6u32 => compat(&[0x0037, 0x6708]),
    0x32C7u32 => compat(&[0x0038, 0x6708]),
    0x32C8u32 => compat(&[0x0039, 0x6708]),
    0x32C9u32 => compat(&[0x0031, 0x0030, 0x6708]),
    0x32CAu32 => compat(&[0x0031, 0x0031, 0x6708]),
    0x32CBu32 => compat(&[0x0031, 0x0032, 0x6708]),
    0x32CCu32 => compat(&[0x0048, 0x0067]),
    0x32CDu32 => compat(&[0x0065, 0x0072, 0x0067]),
    0x32CEu32 => compat(&[0x0065, 0x0056]),
    0x32CFu32 => compat(&[0x004C, 0x0054, 0x0044]),
    0x32D0u32 => compat(&[0x30A2]),
    0x32D1u32 => compat(&[0x30A4]),
    0x32D2u32 => compat(&[0x30A6]),
    0x32D3u32 => compat(&[0x30A8]),
    0x32D4u32 => compat(&[0x30AA]),
    0x32D5u32 => compat(&[0x30AB]),
    0x32D6u32 => compat(&[0x30AD]),
    0x32D7u32 => compat(&[0x30AF]),
    0x32D8u32 => compat(&[0x30B1]),
    0x32D9u32 => compat(&[0x30B3]),
    0x32DAu32 => compat(&[0x30B5]),
    0x32DBu32 => compat(&[0x30B7]),
    0x32DCu32 => compat(&[0x30B9]),
    0x32DDu32 => compat(&[0x30BB]),
    0x32DEu32 => compat(&[0x30BD]),
    0x32DFu32 => compat(&[0x30BF]),
    0x32E0u32 => compat(&[0x30C1]),
    0x32E1u32 => compat(&[0x30C4]),
    0x32E2u32 => compat(&[0x30C6]),
    0x32E3u32 => compat(&[0x30C8]),
    0x32E4u32 => compat(&[0x30CA]),
    0x32E5u32 => compat(&[0x30CB]),
    0x32E6u32 => compat(&[0x30CC]),
    0x32E7u32 => compat(&[0x30CD]),
    0x32E8u32 => compat(&[0x30CE]),
    0x32E9u32 => compat(&[0x30CF]),
    0x32EAu32 => compat(&[0x30D2]),
    0x32EBu32 => compat(&[0x30D5]),
    0x32ECu32 => compat(&[0x30D8]),
    0x32EDu32 => compat(&[0x30DB]),
    0x32EEu32 => compat(&[0x30DE]),
    0x32EFu32 => compat(&[0x30DF]),
    0x32F0u32 => compat(&[0x30E0]),
    0x32F1u32 => compat(&[0x30E1]),
    0x32F2u32 => compat(&[0x30E2]),
    0x32F3u32 => compat(&[0x30E4]),
    0x32F4u32 => compat(&[0x30E6]),
    0x32F5u32 => compat(&[0x30E8]),
    0x32F6u32 => compat(&[0x30E9]),
    0x32F7u32 => compat(&[0x30EA]),
    0x32F8u32 => compat(&[0x30EB]),
    0x32F9u32 => compat(&[0x30EC]),
    0x32FAu32 => compat(&[0x30ED]),
    0x32FBu32 => compat(&[0x30EF]),
    0x32FCu32 => compat(&[0x30F0]),
    0x32FDu32 => compat(&[0x30F1]),
    0x32FEu32 => compat(&[0x30F2]),
    0x32FFu32 => compat(&[0x4EE4, 0x548C]),
    0x3300u32 => compat(&[0x30A2, 0x30D1, 0x30FC, 0x30C8]),
    0x3301u32 => compat(&[0x30A2, 0x30EB, 0x30D5, 0x30A1]),
    0x3302u32 => compat(&[0x30A2, 0x30F3, 0x30DA, 0x30A2]),
    0x3303u32 => compat(&[0x30A2, 0x30FC, 0x30EB]),
    0x3304u32 => compat(&[0x30A4, 0x30CB, 0x30F3, 0x30B0]),
    0x3305u32 => compat(&[0x30A4, 0x30F3, 0x30C1]),
    0x3306u32 => compat(&[0x30A6, 0x30A9, 0x30F3]),
    0x3307u32 => compat(&[0x30A8, 0x30B9, 0x30AF, 0x30FC, 0x30C9]),
    0x3308u32 => compat(&[0x30A8, 0x30FC, 0x30AB, 0x30FC]),
    0x3309u32 => compat(&[0x30AA, 0x30F3, 0x30B9]),
    0x330Au32 => compat(&[0x30AA, 0x30FC, 0x30E0]),
    0x330Bu32 => compat(&[0x30AB, 0x30A4, 0x30EA]),
    0x330Cu32 => compat(&[0x30AB, 0x30E9, 0x30C3, 0x30C8]),
    0x330Du32 => compat(&[0x30AB, 0x30ED, 0x30EA, 0x30FC]),
    0x330Eu32 => compat(&[0x30AC, 0x30ED, 0x30F3]),
    0x330Fu32 => compat(&[0x30AC, 0x30F3, 0x30DE]),
    0x3310u32 => compat(&[0x30AE, 0x30AC]),
    0x3311u32 => compat(&[0x30AE, 0x30CB, 0x30FC]),
    0x3312u32 => compat(&[0x30AD, 0x30E5, 0x30EA, 0x30FC]),
    0x3313u32 => compat(&[0x30AE, 0x30EB, 0x30C0, 0x30FC]),
    0x3314u32 => compat(&[0x30AD, 0x30ED]),
    0x3315u32 => compat(&[0x30AD, 0x30ED, 0x30B0, 0x30E9, 0x30E0]),
    0x3316u32 => compat(&[0x30AD, 0x30ED, 0x30E1, 0x30FC, 0x30C8, 0x30EB]),
    0x3317u32 => compat(&[0x30AD, 0x30ED, 0x30EF, 0x30C3, 0x30C8]),
    0x3318u32 => compat(&[0x30B0, 0x30E9, 0x30E0]),
    0x3319u32 => compat(&[0x30B0, 0x30E9, 0x30E0, 0x30C8, 0x30F3]),
    0x331Au32 => compat(&[0x30AF, 0x30EB, 0x30BC, 0x30A4, 0x30ED]),
    0x331Bu32 => compat(&[0x30AF, 0x30ED, 0x30FC, 0x30CD]),
    0x331Cu32 => compat(&[0x30B1, 0x30FC, 0x30B9]),
    0x331Du32 => compat(&[0x30B3, 0x30EB, 0x30CA]),
    0x331Eu32 => compat(&[0x30B3, 0x30FC, 0x30DD]),
    0x331Fu32 => compat(&[0x30B5, 0x30A4, 0x30AF, 0x30EB]),
    0x3320u32 => compat(&[0x30B5, 0x30F3, 0x30C1, 0x30FC, 0x30E0]),
    0x3321u32 => compat(&[0x30B7, 0x30EA, 0x30F3, 0x30B0]),
    0x3322u32 => compat(&[0x30BB, 0x30F3, 0x30C1]),
    0x3323u32 => compat(&[0x30BB, 0x30F3, 0x30C8]),
    0x3324u32 => compat(&[0x30C0, 0x30FC, 0x30B9]),
    0x3325u32 => compat(&[0x30C7, 0x30B7]),
    0x3326u32 => compat(&[0x30C9, 0x30EB]),
    0x3327u32 => compat(&[0x30C8, 0x30F3]),
    0x3328u32 => compat(&[0x30CA, 0x30CE]),
    0x3329u32 => compat(&[0x30CE, 0x30C3, 0x30C8]),
    0x332Au32 => compat(&[0x30CF, 0x30A4, 0x30C4]),
    0x332Bu32 => compat(&[0x30D1, 0x30FC, 0x30BB, 0x30F3, 0x30C8]),
    0x332Cu32 => compat(&[0x30D1, 0x30FC, 0x30C4]),
    0x332Du32 => compat(&[0x30D0, 0x30FC, 0x30EC, 0x30EB]),
    0x332Eu32 => compat(&[0x30D4, 0x30A2, 0x30B9, 0x30C8, 0x30EB]),
    0x332Fu32 => compat(&[0x30D4, 0x30AF, 0x30EB]),
    0x3330u32 => compat(&[0x30D4, 0x30B3]),
    0x3331u32 => compat(&[0x30D3, 0x30EB]),
    0x3332u32 => compat(&[0x30D5, 0x30A1, 0x30E9, 0x30C3, 0x30C9]),
    0x3333u32 => compat(&[0x30D5, 0x30A3, 0x30FC, 0x30C8]),
    0x3334u32 => compat(&[0x30D6, 0x30C3, 0x30B7, 0x30A7, 0x30EB]),
    0x3335u32 => compat(&[0x30D5, 0x30E9, 0x30F3]),
    0x3336u32 => compat(&[0x30D8, 0x30AF, 0x30BF, 0x30FC, 0x30EB]),
    0x3337u32 => compat(&[0x30DA, 0x30BD]),
    0x3338u32 => compat(&[0x30DA, 0x30CB, 0x30D2]),
    0x3339u32 => compat(&[0x30D8, 0x30EB, 0x30C4]),
    0x333Au32 => compat(&[0x30DA, 0x30F3, 0x30B9]),
    0x333Bu32 => compat(&[0x30DA, 0x30FC, 0x30B8]),
    0x333Cu32 => compat(&[0x30D9, 0x30FC, 0x30BF]),
    0x333Du32 => compat(&[0x30DD, 0x30A4, 0x30F3, 0x30C8]),
    0x333Eu32 => compat(&[0x30DC, 0x30EB, 0x30C8]),
    0x333Fu32 => compat(&[0x30DB, 0x30F3]),
    0x3340u32 => compat(&[0x30DD, 0x30F3, 0x30C9]),
    0x3341u32 => compat(&[0x30DB, 0x30FC, 0x30EB]),
    0x3342u32 => compat(&[0x30DB, 0x30FC, 0x30F3]),
    0x3343u32 => compat(&[0x30DE, 0x30A4, 0x30AF, 0x30ED]),
    0x3344u32 => compat(&[0x30DE, 0x30A4, 0x30EB]),
    0x3345u32 => compat(&[0x30DE, 0x30C3, 0x30CF]),
    0x3346u32 => compat(&[0x30DE, 0x30EB, 0x30AF]),
    0x3347u32 => compat(&[0x30DE, 0x30F3, 0x30B7, 0x30E7, 0x30F3]),
    0x3348u32 => compat(&[0x30DF, 0x30AF, 0x30ED, 0x30F3]),
    0x3349u32 => compat(&[0x30DF, 0x30EA]),
    0x334Au32 => compat(&[0x30DF, 0x30EA, 0x30D0, 0x30FC, 0x30EB]),
    0x334Bu32 => compat(&[0x30E1, 0x30AC]),
    0x334Cu32 => compat(&[0x30E1, 0x30AC, 0x30C8, 0x30F3]),
    0x334Du32 => compat(&[0x30E1, 0x30FC, 0x30C8, 0x30EB]),
    0x334Eu32 => compat(&[0x30E4, 0x30FC, 0x30C9]),
    0x334Fu32 => compat(&[0x30E4, 0x30FC, 0x30EB]),
    0x3350u32 => compat(&[0x30E6, 0x30A2, 0x30F3]),
    0x3351u32 => compat(&[0x30EA, 0x30C3, 0x30C8, 0x30EB]),
    0x3352u32 => compat(&[0x30EA, 0x30E9]),
    0x3353u32 => compat(&[0x30EB, 0x30D4, 0x30FC]),
    0x3354u32 => compat(&[0x30EB, 0x30FC, 0x30D6, 0x30EB]),
    0x3355u32 => compat(&[0x30EC, 0x30E0]),
    0x3356u32 => compat(&[0x30EC, 0x30F3, 0x30C8, 0x30B2, 0x30F3]),
    0x3357u32 => compat(&[0x30EF, 0x30C3, 0x30C8]),
    0x3358u32 => compat(&[0x0030, 0x70B9]),
    0x3359u32 => compat(&[0x0031, 0x70B9]),
    0x335Au32 => compat(&[0x0032, 0x70B9]),
    0x335Bu32 => compat(&[0x0033, 0x70B9]),
    0x335Cu32 => compat(&[0x0034, 0x70B9]),
    0x335Du32 => compat(&[0x0035, 0x70B9]),
    0x335Eu32 => compat(&[0x0036, 0x70B9]),
    0x335Fu32 => compat(&[0x0037, 0x70B9]),
    0x3360u32 => compat(&[0x0038, 0x70B9]),
    0x3361u32 => compat(&[0x0039, 0x70B9]),
    0x3362u32 => compat(&[0x0031, 0x0030, 0x70B9]),
    0x3363u32 => compat(&[0x0031, 0x0031, 0x70B9]),
    0x3364u32 => compat(&[0x0031, 0x0032, 0x70B9]),
    0x3365u32 => compat(&[0x0031, 0x0033, 0x70B9]),
    0x3366u32 => compat(&[0x0031, 0x0034, 0x70B9]),
    0x3367u32 => compat(&[0x0031, 0x0035, 0x70B9]),
    0x3368u32 => compat(&[0x0031, 0x0036, 0x70B9]),
    0x3369u32 => compat(&[0x0031, 0x0037, 0x70B9]),
    0x336Au32 => compat(&[0x0031, 0x0038, 0x70B9]),
    0x336Bu32 => compat(&[0x0031, 0x0039, 0x70B9]),
    0x336Cu32 => compat(&[0x0032, 0x0030, 0x70B9]),
    0x336Du32 => compat(&[0x0032, 0x0031, 0x70B9]),
    0x336Eu32 => compat(&[0x0032, 0x0032, 0x70B9]),
    0x336Fu32 => compat(&[0x0032, 0x0033, 0x70B9]),
    0x3370u32 => compat(&[0x0032, 0x0034, 0x70B9]),
    0x3371u32 => compat(&[0x0068, 0x0050, 0x0061]),
    0x3372u32 => compat(&[0x0064, 0x0061]),
    0x3373u32 => compat(&[0x0041, 0x0055]),
    0x3374u32 => compat(&[0x0062, 0x0061, 0x0072]),
    0x3375u32 => compat(&[0x006F, 0x0056]),
    0x3376u32 => compat(&[0x0070, 0x0063]),
    0x3377u32 => compat(&[0x0064, 0x006D]),
    0x3378u32 => compat(&[0x0064, 0x006D, 0x00B2]),
    0x3379u32 => compat(&[0x0064, 0x006D, 0x00B3]),
    0x337Au32 => compat(&[0x0049, 0x0055]),
    0x337Bu32 => compat(&[0x5E73, 0x6210]),
    0x337Cu32 => compat(&[0x662D, 0x548C]),
    0x337Du32 => compat(&[0x5927, 0x6B63]),
    0x337Eu32 => compat(&[0x660E, 0x6CBB]),
    0x337Fu32 => compat(&[0x682A, 0x5F0F, 0x4F1A, 0x793E]),
    0x3380u32 => compat(&[0x0070, 0x0041]),
    0x3381u32 => compat(&[0x006E, 0x0041]),
    0x3382u32 => compat(&[0x03BC, 0x0041]),
    0x3383u32 => compat(&[0x006D, 0x0041]),
    0x3384u32 => compat(&[0x006B, 0x0041]),
    0x3385u32 => compat(&[0x004B, 0x0042]),
    0x3386u32 => compat(&[0x004D, 0x0042]),
    0x3387u32 => compat(&[0x0047, 0x0042]),
    0x3388u32 => compat(&[0x0063, 0x0061, 0x006C]),
    0x3389u32 => compat(&[0x006B, 0x0063, 0x0061, 0x006C]),
    0x338Au32 => compat(&[0x0070, 0x0046]),
    0x338Bu32 => compat(&[0x006E, 0x0046]),
    0x338Cu32 => compat(&[0x03BC, 0x0046]),
    0x338Du32 => compat(&[0x03BC, 0x0067]),
    0x338Eu32 => compat(&[0x006D, 0x0067]),
    0x338Fu32 => compat(&[0x006B, 0x0067]),
    0x3390u32 => compat(&[0x0048, 0x007A]),
    0x3391u32 => compat(&[0x006B, 0x0048, 0x007A]),
    0x3392u32 => compat(&[0x004D, 0x0048, 0x007A]),
    0x3393u32 => compat(&[0x0047, 0x0048, 0x007A]),
    0x3394u32 => compat(&[0x0054, 0x0048, 0x007A]),
    0x3395u32 => compat(&[0x03BC, 0x2113]),
    0x3396u32 => compat(&[0x006D, 0x2113]),
    0x3397u32 => compat(&[0x0064, 0x2113]),
    0x3398u32 => compat(&[0x006B, 0x2113]),
    0x3399u32 => compat(&[0x0066, 0x006D]),
    0x339Au32 => compat(&[0x006E, 0x006D]),
    0x339Bu32 => compat(&[0x03BC, 0x006D]),
    0x339Cu32 => compat(&[0x006D, 0x006D]),
    0x339Du32 => compat(&[0x0063, 0x006D]),
    0x339Eu32 => compat(&[0x006B, 0x006D]),
    0x339Fu32 => compat(&[0x006D, 0x006D, 0x00B2]),
    0x33A0u32 => compat(&[0x0063, 0x006D, 0x00B2]),
    0x33A1u32 => compat(&[0x006D, 0x00B2]),
    0x33A2u32 => compat(&[0x006B, 0x006D, 0x00B2]),
    0x33A3u32 => compat(&[0x006D, 0x006D, 0x00B3]),
    0x33A4u32 => compat(&[0x0063, 0x006D, 0x00B3]),
    0x33A5u32 => compat(&[0x006D, 0x00B3]),
    0x33A6u32 => compat(&[0x006B, 0x006D, 0x00B3]),
    0x33A7u32 => compat(&[0x006D, 0x2215, 0x0073]),
    0x33A8u32 => compat(&[0x006D, 0x2215, 0x0073, 0x00B2]),
    0x33A9u32 => compat(&[0x0050, 0x0061]),
    0x33AAu32 => compat(&[0x006B, 0x0050, 0x0061]),
    0x33ABu32 => compat(&[0x004D, 0x0050, 0x0061]),
    0x33ACu32 => compat(&[0x0047, 0x0050, 0x0061]),
    0x33ADu32 => compat(&[0x0072, 0x0061, 0x0064]),
    0x33AEu32 => compat(&[0x0072, 0x0061, 0x0064, 0x2215, 0x0073]),
    0x33AFu32 => compat(&[0x0072, 0x0061, 0x0064, 0x2215, 0x0073, 0x00B2]),
    0x33B0u32 => compat(&[0x0070, 0x0073]),
    0x33B1u32 => compat(&[0x006E, 0x0073]),
    0x33B2u32 => compat(&[0x03BC, 0x0073]),
    0x33B3u32 => compat(&[0x006D, 0x0073]),
    0x33B4u32 => compat(&[0x0070, 0x0056]),
    0x33B5u32 => compat(&[0x006E, 0x0056]),
    0x33B6u32 => compat(&[0x03BC, 0x0056]),
    0x33B7u32 => compat(&[0x006D, 0x0056]),
    0x33B8u32 => compat(&[0x006B, 0x0056]),
    0x33B9u32 => compat(&[0x004D, 0x0056]),
    0x33BAu32 => compat(&[0x0070, 0x0057]),
    0x33BBu32 => compat(&[0x006E, 0x0057]),
    0x33BCu32 => compat(&[0x03BC, 0x0057]),
    0x33BDu32 => compat(&[0x006D, 0x0057]),
    0x33BEu32 => compat(&[0x006B, 0x0057]),
    0x33BFu32 => compat(&[0x004D, 0x0057]),
    0x33C0u32 => compat(&[0x006B, 0x03A9]),
    0x33C1u32 => compat(&[0x004D, 0x03A9]),
    0x33C2u32 => compat(&[0x0061, 0x002E, 0x006D, 0x002E]),
    0x33C3u32 => compat(&[0x0042, 0x0071]),
    0x33C4u32 => compat(&[0x0063, 0x0063]),
    0x33C5u32 => compat(&[0x0063, 0x0064]),
    0x33C6u32 => compat(&[0x0043, 0x2215, 0x006B, 0x0067]),
    0x33C7u32 => compat(&[0x0043, 0x006F, 0x002E]),
    0x33C8u32 => compat(&[0x0064, 0x0042]),
    0x33C9u32 => compat(&[0x0047, 0x0079]),
    0x33CAu32 => compat(&[0x0068, 0x0061]),
    0x33CBu32 => compat(&[0x0048, 0x0050]),
    0x33CCu32 => compat(&[0x0069, 0x006E]),
    0x33CDu32 => compat(&[0x004B, 0x004B]),
    0x33CEu32 => compat(&[0x004B, 0x004D]),
    0x33CFu32 => compat(&[0x006B, 0x0074]),
    0x33D0u32 => compat(&[0x006C, 0x006D]),
    0x33D1u32 => compat(&[0x006C, 0x006E]),
    0x33D2u32 => compat(&[0x006C, 0x006F, 0x0067]),
    0x33D3u32 => compat(&[0x006C, 0x0078]),
    0x33D4u32 => compat(&[0x006D, 0x0062]),
    0x33D5u32 => compat(&[0x006D, 0x0069, 0x006C]),
    0x33D6u32 => compat(&[0x006D, 0x006F, 0x006C]),
    0x33D7u32 => compat(&[0x0050, 0x0048]),
    0x33D8u32 => compat(&[0x0070, 0x002E, 0x006D, 0x002E]),
    0x33D9u32 => compat(&[0x0050, 0x0050, 0x004D]),
    0x33DAu32 => compat(&[0x0050, 0x0052]),
    0x33DBu32 => compat(&[0x0073, 0x0072]),
    0x33DCu32 => compat(&[0x0053, 0x0076]),
    0x33DDu32 => compat(&[0x0057, 0x0062]),
    0x33DEu32 => compat(&[0x0056, 0x2215, 0x006D]),
    0x33DFu32 => compat(&[0x0041, 0x2215, 0x006D]),
    0x33E0u32 => compat(&[0x0031, 0x65E5]),
    0x33E1u32 => compat(&[0x0032, 0x65E5]),
    0x33E2u32 => compat(&[0x0033, 0x65E5]),
    0x33E3u32 => compat(&[0x0034, 0x65E5]),
    0x33E4u32 => compat(&[0x0035, 0x65E5]),
    0x33E5u32 => compat(&[0x0036, 0x65E5]),
    0x33E6u32 => compat(&[0x0037, 0x65E5]),
    0x33E7u32 => compat(&[0x0038, 0x65E5]),
    0x33E8u32 => compat(&[0x0039, 0x65E5]),
    0x33E9u32 => compat(&[0x0031, 0x0030, 0x65E5]),
    0x33EAu32 => compat(&[0x0031, 0x0031, 0x65E5]),
    0x33EBu32 => compat(&[0x0031, 0x0032, 0x65E5]),
    0x33ECu32 => compat(&[0x0031, 0x0033, 0x65E5]),
    0x33EDu32 => compat(&[0x0031, 0x0034, 0x65E5]),
    0x33EEu32 => compat(&[0x0031, 0x0035, 0x65E5]),
    0x33EFu32 => compat(&[0x0031, 0x0036, 0x65E5]),
    0x33F0u32 => compat(&[0x0031, 0x0037, 0x65E5]),
    0x33F1u32 => compat(&[0x0031, 0x0038, 0x65E5]),
    0x33F2u32 => compat(&[0x0031, 0x0039, 0x65E5]),
    0x33F3u32 => compat(&[0x0032, 0x0030, 0x65E5]),
    0x33F4u32 => compat(&[0x0032, 0x0031, 0x65E5]),
    0x33F5u32 => compat(&[0x0032, 0x0032, 0x65E5]),
    0x33F6u32 => compat(&[0x0032, 0x0033, 0x65E5]),
    0x33F7u32 => compat(&[0x0032, 0x0034, 0x65E5]),
    0x33F8u32 => compat(&[0x0032, 0x0035, 0x65E5]),
    0x33F9u32 => compat(&[0x0032, 0x0036, 0x65E5]),
    0x33FAu32 => compat(&[0x0032, 0x0037, 0x65E5]),
    0x33FBu32 => compat(&[0x0032, 0x0038, 0x65E5]),
    0x33FCu32 => compat(&[0x0032, 0x0039, 0x65E5]),
    0x33FDu32 => compat(&[0x0033, 0x0030, 0x65E5]),
    0x33FEu32 => compat(&[0x0033, 0x0031, 0x65E5]),
    0x33FFu32 => compat(&[0x0067, 0x0061, 0x006C]),
    0xA69Cu32 => compat(&[0x044A]),
    0xA69Du32 => compat(&[0x044C]),
    0xA770u32 => compat(&[0xA76F]),
    0xA7F2u32 => compat(&[0x0043]),
    0xA7F3u32 => compat(&[0x0046]),
    0xA7F4u32 => compat(&[0x0051]),
    0xA7F8u32 => compat(&[0x0126]),
    0xA7F9u32 => compat(&[0x0153]),
    0xAB5Cu32 => compat(&[0xA727]),
    0xAB5Du32 => compat(&[0xAB37]),
    0xAB5Eu32 => compat(&[0x026B]),
    0xAB5Fu32 => compat(&[0xAB52]),
    0xAB69u32 => compat(&[0x028D]),
    0xF900u32 => canonical(&[0x8C48]),
    0xF901u32 => canonical(&[0x66F4]),
    0xF902u32 => canonical(&[0x8ECA]),
    0xF903u32 => canonical(&[0x8CC8]),
    0xF904u32 => canonical(&[0x6ED1]),
    0xF905u32 => canonical(&[0x4E32]),
    0xF906u32 => canonical(&[0x53E5]),
    0xF907u32 => canonical(&[0x9F9C]),
    0xF908u32 => canonical(&[0x9F9C]),
    0xF909u32 => canonical(&[0x5951]),
    0xF90Au32 => canonical(&[0x91D1]),
    0xF90Bu32 => canonical(&[0x5587]),
    0xF90Cu32 => canonical(&[0x5948]),
    0xF90Du32 => canonical(&[0x61F6]),
    0xF90Eu32 => canonical(&[0x7669]),
    0xF90Fu32 => canonical(&[0x7F85]),
    0xF910u32 => canonical(&[0x863F]),
    0xF911u32 => canonical(&[0x87BA]),
    0xF912u32 => canonical(&[0x88F8]),
    0xF913u32 => canonical(&[0x908F]),
    0xF914u32 => canonical(&[0x6A02]),
    0xF915u32 => canonical(&[0x6D1B]),
    0xF916u32 => canonical(&[0x70D9]),
    0xF917u32 => canonical(&[0x73DE]),
    0xF918u32 => canonical(&[0x843D]),
    0xF919u32 => canonical(&[0x916A]),
    0xF91Au32 => canonical(&[0x99F1]),
    0xF91Bu32 => canonical(&[0x4E82]),
    0xF91Cu32 => canonical(&[0x5375]),
    0xF91Du32 => canonical(&[0x6B04]),
    0xF91Eu32 => canonical(&[0x721B]),
    0xF91Fu32 => canonical(&[0x862D]),
    0xF920u32 => canonical(&[0x9E1E]),
    0xF921u32 => canonical(&[0x5D50]),
    0xF922u32 => canonical(&[0x6FEB]),
    0xF923u32 => canonical(&[0x85CD]),
    0xF924u32 => canonical(&[0x8964]),
    0xF925u32 => canonical(&[0x62C9]),
    0xF926u32 => canonical(&[0x81D8]),
    0xF927u32 => canonical(&[0x881F]),
    0xF928u32 => canonical(&[0x5ECA]),
    0xF929u32 => canonical(&[0x6717]),
    0xF92Au32 => canonical(&[0x6D6A]),
    0xF92Bu32 => canonical(&[0x72FC]),
    0xF92Cu32 => canonical(&[0x90CE]),
    0xF92Du32 => canonical(&[0x4F86]),
    0xF92Eu32 => canonical(&[0x51B7]),
    0xF92Fu32 => canonical(&[0x52DE]),
    0xF930u32 => canonical(&[0x64C4]),
    0xF931u32 => canonical(&[0x6AD3]),
    0xF932u32 => canonical(&[0x7210]),
    0xF933u32 => canonical(&[0x76E7]),
    0xF934u32 => canonical(&[0x8001]),
    0xF935u32 => canonical(&[0x8606]),
    0xF936u32 => canonical(&[0x865C]),
    0xF937u32 => canonical(&[0x8DEF]),
    0xF938u32 => canonical(&[0x9732]),
    0xF939u32 => canonical(&[0x9B6F]),
    0xF93Au32 => canonical(&[0x9DFA]),
    0xF93Bu32 => canonical(&[0x788C]),
    0xF93Cu32 => canonical(&[0x797F]),
    0xF93Du32 => canonical(&[0x7DA0]),
    0xF93Eu32 => canonical(&[0x83C9]),
    0xF93Fu32 => canonical(&[0x9304]),
    0xF940u32 => canonical(&[0x9E7F]),
    0xF941u32 => canonical(&[0x8AD6]),
    0xF942u32 => canonical(&[0x58DF]),
    0xF943u32 => canonical(&[0x5F04]),
    0xF944u32 => canonical(&[0x7C60]),
    0xF945u32 => canonical(&[0x807E]),
    0xF946u32 => canonical(&[0x7262]),
    0xF947u32 => canonical(&[0x78CA]),
    0xF948u32 => canonical(&[0x8CC2]),
    0xF949u32 => canonical(&[0x96F7]),
    0xF94Au32 => canonical(&[0x58D8]),
    0xF94Bu32 => canonical(&[0x5C62]),
    0xF94Cu32 => canonical(&[0x6A13]),
    0xF94Du32 => canonical(&[0x6DDA]),
    0xF94Eu32 => canonical(&[0x6F0F]),
    0xF94Fu32 => canonical(&[0x7D2F]),
    0xF950u32 => canonical(&[0x7E37]),
    0xF951u32 => canonical(&[0x964B]),
    0xF952u32 => canonical(&[0x52D2]),
    0xF953u32 => canonical(&[0x808B]),
    0xF954u32 => canonical(&[0x51DC]),
    0xF955u32 => canonical(&[0x51CC]),
    0xF956u32 => canonical(&[0x7A1C]),
    0xF957u32 => canonical(&[0x7DBE]),
    0xF958u32 => canonical(&[0x83F1]),
    0xF959u32 => canonical(&[0x9675]),
    0xF95Au32 => canonical(&[0x8B80]),
    0xF95Bu32 => canonical(&[0x62CF]),
    0xF95Cu32 => canonical(&[0x6A02]),
    0xF95Du32 => canonical(&[0x8AFE]),
    0xF95Eu32 => canonical(&[0x4E39]),
    0xF95Fu32 => canonical(&[0x5BE7]),
    0xF960u32 => canonical(&[0x6012]),
    0xF961u32 => canonical(&[0x7387]),
    0xF962u32 => canonical(&[0x7570]),
    0xF963u32 => canonical(&[0x5317]),
    0xF964u32 => canonical(&[0x78FB]),
    0xF965u32 => canonical(&[0x4FBF]),
    0xF966u32 => canonical(&[0x5FA9]),
    0xF967u32 => canonical(&[0x4E0D]),
    0xF968u32 => canonical(&[0x6CCC]),
    0xF969u32 => canonical(&[0x6578]),
    0xF96Au32 => canonical(&[0x7D22]),
    0xF96Bu32 => canonical(&[0x53C3]),
    0xF96Cu32 => canonical(&[0x585E]),
    0xF96Du32 => canonical(&[0x7701]),
    0xF96Eu32 => canonical(&[0x8449]),
    0xF96Fu32 => canonical(&[0x8AAA]),
    0xF970u32 => canonical(&[0x6BBA]),
    0xF971u32 => canonical(&[0x8FB0]),
    0xF972u32 => canonical(&[0x6C88]),
    0xF973u32 => canonical(&[0x62FE]),
    0xF974u32 => canonical(&[0x82E5]),
    0xF975u32 => canonical(&[0x63A0]),
    0xF976u32 => canonical(&[0x7565]),
    0xF977u32 => canonical(&[0x4EAE]),
    0xF978u32 => canonical(&[0x5169]),
    0xF979u32 => canonical(&[0x51C9]),
    0xF97Au32 => canonical(&[0x6881]),
    0xF97Bu32 => canonical(&[0x7CE7]),
    0xF97Cu32 => canonical(&[0x826F]),
    0xF97Du32 => canonical(&[0x8AD2]),
    0xF97Eu32 => canonical(&[0x91CF]),
    0xF97Fu32 => canonical(&[0x52F5]),
    0xF980u32 => canonical(&[0x5442]),
    0xF981u32 => canonical(&[0x5973]),
    0xF982u32 => canonical(&[0x5EEC]),
    0xF983u32 => canonical(&[0x65C5]),
    0xF984u32 => canonical(&[0x6FFE]),
    0xF985u32 => canonical(&[0x792A]),
    0xF986u32 => canonical(&[0x95AD]),
    0xF987u32 => canonical(&[0x9A6A]),
    0xF988u32 => canonical(&[0x9E97]),
    0xF989u32 => canonical(&[0x9ECE]),
    0xF98Au32 => canonical(&[0x529B]),
    0xF98Bu32 => canonical(&[0x66C6]),
    0xF98Cu32 => canonical(&[0x6B77]),
    0xF98Du32 => canonical(&[0x8F62]),
    0xF98Eu32 => canonical(&[0x5E74]),
    0xF98Fu32 => canonical(&[0x6190]),
    0xF990u32 => canonical(&[0x6200]),
    0xF991u32 => canonical(&[0x649A]),
    0xF992u32 => canonical(&[0x6F23]),
    0xF993u32 => canonical(&[0x7149]),
    0xF994u32 => canonical(&[0x7489]),
    0xF995u32 => canonical(&[0x79CA]),
    0xF996u32 => canonical(&[0x7DF4]),
    0xF997u32 => canonical(&[0x806F]),
    0xF998u32 => canonical(&[0x8F26]),
    0xF999u32 => canonical(&[0x84EE]),
    0xF99Au32 => canonical(&[0x9023]),
    0xF99Bu32 => canonical(&[0x934A]),
    0xF99Cu32 => canonical(&[0x5217]),
    0xF99Du32 => canonical(&[0x52A3]),
    0xF99Eu32 => canonical(&[0x54BD]),
    0xF99Fu32 => canonical(&[0x70C8]),
    0xF9A0u32 => canonical(&[0x88C2]),
    0xF9A1u32 => canonical(&[0x8AAA]),
    0xF9A2u32 => canonical(&[0x5EC9]),
    0xF9A3u32 => canonical(&[0x5FF5]),
    0xF9A4u32 => canonical(&[0x637B]),
    0xF9A5u32 => canonical(&[0x6BAE]),
    0xF9A6u32 => canonical(&[0x7C3E]),
    0xF9A7u32 => canonical(&[0x7375]),
    0xF9A8u32 => canonical(&[0x4EE4]),
    0xF9A9u32 => canonical(&[0x56F9]),
    0xF9AAu32 => canonical(&[0x5BE7]),
    0xF9ABu32 => canonical(&[0x5DBA]),
    0xF9ACu32 => canonical(&[0x601C]),
    0xF9ADu32 => canonical(&[0x73B2]),
    0xF9AEu32 => canonical(&[0x7469]),
    0xF9AFu32 => canonical(&[0x7F9A]),
    0xF9B0u32 => canonical(&[0x8046]),
    0xF9B1u32 => canonical(&[0x9234]),
    0xF9B2u32 => canonical(&[0x96F6]),
    0xF9B3u32 => canonical(&[0x9748]),
    0xF9B4u32 => canonical(&[0x9818]),
    0xF9B5u32 => canonical(&[0x4F8B]),
    0xF9B6u32 => canonical(&[0x79AE]),
    0xF9B7u32 => canonical(&[0x91B4]),
    0xF9B8u32 => canonical(&[0x96B8]),
    0xF9B9u32 => canonical(&[0x60E1]),
    0xF9BAu32 => canonical(&[0x4E86]),
    0xF9BBu32 => canonical(&[0x50DA]),
    0xF9BCu32 => canonical(&[0x5BEE]),
    0xF9BDu32 => canonical(&[0x5C3F]),
    0xF9BEu32 => canonical(&[0x6599]),
    0xF9BFu32 => canonical(&[0x6A02]),
    0xF9C0u32 => canonical(&[0x71CE]),
    0xF9C1u32 => canonical(&[0x7642]),
    0xF9C2u32 => canonical(&[0x84FC]),
    0xF9C3u32 => canonical(&[0x907C]),
    0xF9C4u32 => canonical(&[0x9F8D]),
    0xF9C5u32 => canonical(&[0x6688]),
    0xF9C6u32 => canonical(&[0x962E]),
    0xF9C7u32 => canonical(&[0x5289]),
    0xF9C8u32 => canonical(&[0x677B]),
    0xF9C9u32 => canonical(&[0x67F3]),
    0xF9CAu32 => canonical(&[0x6D41]),
    0xF9CBu32 => canonical(&[0x6E9C]),
    0xF9CCu32 => canonical(&[0x7409]),
    0xF9CDu32 => canonical(&[0x7559]),
    0xF9CEu32 => canonical(&[0x786B]),
    0xF9CFu32 => canonical(&[0x7D10]),
    0xF9D0u32 => canonical(&[0x985E]),
    0xF9D1u32 => canonical(&[0x516D]),
    0xF9D2u32 => canonical(&[0x622E]),
    0xF9D3u32 => canonical(&[0x9678]),
    0xF9D4u32 => canonical(&[0x502B]),
    0xF9D5u32 => canonical(&[0x5D19]),
    0xF9D6u32 => canonical(&[0x6DEA]),
    0xF9D7u32 => canonical(&[0x8F2A]),
    0xF9D8u32 => canonical(&[0x5F8B]),
    0xF9D9u32 => canonical(&[0x6144]),
    0xF9DAu32 => canonical(&[0x6817]),
    0xF9DBu32 => canonical(&[0x7387]),
    0xF9DCu32 => canonical(&[0x9686]),
    0xF9DDu32 => canonical(&[0x5229]),
    0xF9DEu32 => canonical(&[0x540F]),
    0xF9DFu32 => canonical(&[0x5C65]),
    0xF9E0u32 => canonical(&[0x6613]),
    0xF9E1u32 => canonical(&[0x674E]),
    0xF9E2u32 => canonical(&[0x68A8]),
    0xF9E3u32 => canonical(&[0x6CE5]),
    0xF9E4u32 => canonical(&[0x7406]),
    0xF9E5u32 => canonical(&[0x75E2]),
    0xF9E6u32 => canonical(&[0x7F79]),
    0xF9E7u32 => canonical(&[0x88CF]),
    0xF9E8u32 => canonical(&[0x88E1]),
    0xF9E9u32 => canonical(&[0x91CC]),
    0xF9EAu32 => canonical(&[0x96E2]),
    0xF9EBu32 => canonical(&[0x533F]),
    0xF9ECu32 => canonical(&[0x6EBA]),
    0xF9EDu32 => canonical(&[0x541D]),
    0xF9EEu32 => canonical(&[0x71D0]),
    0xF9EFu32 => canonical(&[0x7498]),
    0xF9F0u32 => canonical(&[0x85FA]),
    0xF9F1u32 => canonical(&[0x96A3]),
    0xF9F2u32 => canonical(&[0x9C57]),
    0xF9F3u32 => canonical(&[0x9E9F]),
    0xF9F4u32 => canonical(&[0x6797]),
    0xF9F5u32 => canonical(&[0x6DCB]),
    0xF9F6u32 => canonical(&[0x81E8]),
    0xF9F7u32 => canonical(&[0x7ACB]),
    0xF9F8u32 => canonical(&[0x7B20]),
    0xF9F9u32 => canonical(&[0x7C92]),
    0xF9FAu32 => canonical(&[0x72C0]),
    0xF9FBu32 => canonical(&[0x7099]),
    0xF9FCu32 => canonical(&[0x8B58]),
    0xF9FDu32 => canonical(&[0x4EC0]),
    0xF9FEu32 => canonical(&[0x8336]),
    0xF9FFu32 => canonical(&[0x523A]),
    0xFA00u32 => canonical(&[0x5207]),
    0xFA01u32 => canonical(&[0x5EA6]),
    0xFA02u32 => canonical(&[0x62D3]),
    0xFA03u32 => canonical(&[0x7CD6]),
    0xFA04u32 => canonical(&[0x5B85]),
    0xFA05u32 => canonical(&[0x6D1E]),
    0xFA06u32 => canonical(&[0x66B4]),
    0xFA07u32 => canonical(&[0x8F3B]),
    0xFA08u32 => canonical(&[0x884C]),
    0xFA09u32 => canonical(&[0x964D]),
    0xFA0Au32 => canonical(&[0x898B]),
    0xFA0Bu32 => canonical(&[0x5ED3]),
    0xFA0Cu32 => canonical(&[0x5140]),
    0xFA0Du32 => canonical(&[0x55C0]),
    0xFA10u32 => canonical(&[0x585A]),
    0xFA12u32 => canonical(&[0x6674]),
    0xFA15u32 => canonical(&[0x51DE]),
    0xFA16u32 => canonical(&[0x732A]),
    0xFA17u32 => canonical(&[0x76CA]),
    0xFA18u32 => canonical(&[0x793C]),
    0xFA19u32 => canonical(&[0x795E]),
    0xFA1Au32 => canonical(&[0x7965]),
    0xFA1Bu32 => canonical(&[0x798F]),
    0xFA1Cu32 => canonical(&[0x9756]),
    0xFA1Du32 => canonical(&[0x7CBE]),
    0xFA1Eu32 => canonical(&[0x7FBD]),
    0xFA20u32 => canonical(&[0x8612]),
    0xFA22u32 => canonical(&[0x8AF8]),
    0xFA25u32 => canonical(&[0x9038]),
    0xFA26u32 => canonical(&[0x90FD]),
    0xFA2Au32 => canonical(&[0x98EF]),
    0xFA2Bu32 => canonical(&[0x98FC]),
    0xFA2Cu32 => canonical(&[0x9928]),
    0xFA2Du32 => canonical(&[0x9DB4]),
    0xFA2Eu32 => canonical(&[0x90DE]),
    0xFA2Fu32 => canonical(&[0x96B7]),
    0xFA30u32 => canonical(&[0x4FAE]),
    0xFA31u32 => canonical(&[0x50E7]),
    0xFA32u32 => canonical(&[0x514D]),
    0xFA33u32 => canonical(&[0x52C9]),
    0xFA34u32 => canonical(&[0x52E4]),
    0xFA35u32 => canonical(&[0x5351]),
    0xFA36u32 => canonical(&[0x559D]),
    0xFA37u32 => canonical(&[0x5606]),
    0xFA38u32 => canonical(&[0x5668]),
    0xFA39u32 => canonical(&[0x5840]),
    0xFA3Au32 => canonical(&[0x58A8]),
    0xFA3Bu32 => canonical(&[0x5C64]),
    0xFA3Cu32 => canonical(&[0x5C6E]),
    0xFA3Du32 => canonical(&[0x6094]),
    0xFA3Eu32 => canonical(&[0x6168]),
    0xFA3Fu32 => canonical(&[0x618E]),
    0xFA40u32 => canonical(&[0x61F2]),
    0xFA41u32 => canonical(&[0x654F]),
    0xFA42u32 => canonical(&[0x65E2]),
    0xFA43u32 => canonical(&[0x6691]),
    0xFA44u32 => canonical(&[0x6885]),
    0xFA45u32 => canonical(&[0x6D77]),
    0xFA46u32 => canonical(&[0x6E1A]),
    0xFA47u32 => canonical(&[0x6F22]),
    0xFA48u32 => canonical(&[0x716E]),
    0xFA49u32 => canonical(&[0x722B]),
    0xFA4Au32 => canonical(&[0x7422]),
    0xFA4Bu32 => canonical(&[0x7891]),
    0xFA4Cu32 => canonical(&[0x793E]),
    0xFA4Du32 => canonical(&[0x7949]),
    0xFA4Eu32 => canonical(&[0x7948]),
    0xFA4Fu32 => canonical(&[0x7950]),
    0xFA50u32 => canonical(&[0x7956]),
    0xFA51u32 => canonical(&[0x795D]),
    0xFA52u32 => canonical(&[0x798D]),
    0xFA53u32 => canonical(&[0x798E]),
    0xFA54u32 => canonical(&[0x7A40]),
    0xFA55u32 => canonical(&[0x7A81]),
    0xFA56u32 => canonical(&[0x7BC0]),
    0xFA57u32 => canonical(&[0x7DF4]),
    0xFA58u32 => canonical(&[0x7E09]),
    0xFA59u32 => canonical(&[0x7E41]),
    0xFA5Au32 => canonical(&[0x7F72]),
    0xFA5Bu32 => canonical(&[0x8005]),
    0xFA5Cu32 => canonical(&[0x81ED]),
    0xFA5Du32 => canonical(&[0x8279]),
    0xFA5Eu32 => canonical(&[0x8279]),
    0xFA5Fu32 => canonical(&[0x8457]),
    0xFA60u32 => canonical(&[0x8910]),
    0xFA61u32 => canonical(&[0x8996]),
    0xFA62u32 => canonical(&[0x8B01]),
    0xFA63u32 => canonical(&[0x8B39]),
    0xFA64u32 => canonical(&[0x8CD3]),
    0xFA65u32 => canonical(&[0x8D08]),
    0xFA66u32 => canonical(&[0x8FB6]),
    0xFA67u32 => canonical(&[0x9038]),
    0xFA68u32 => canonical(&[0x96E3]),
    0xFA69u32 => canonical(&[0x97FF]),
    0xFA6Au32 => canonical(&[0x983B]),
    0xFA6Bu32 => canonical(&[0x6075]),
    0xFA6Cu32 => canonical(&[0x242EE]),
    0xFA6Du32 => canonical(&[0x8218]),
    0xFA70u32 => canonical(&[0x4E26]),
    0xFA71u32 => canonical(&[0x51B5]),
    0xFA72u32 => canonical(&[0x5168]),
    0xFA73u32 => canonical(&[0x4F80]),
    0xFA74u32 => canonical(&[0x5145]),
    0xFA75u32 => canonical(&[0x5180]),
    0xFA76u32 => canonical(&[0x52C7]),
    0xFA77u32 => canonical(&[0x52FA]),
    0xFA78u32 => canonical(&[0x559D]),
    0xFA79u32 => canonical(&[0x5555]),
    0xFA7Au32 => canonical(&[0x5599]),
    0xFA7Bu32 => canonical(&[0x55E2]),
    0xFA7Cu32 => canonical(&[0x585A]),
    0xFA7Du32 => canonical(&[0x58B3]),
    0xFA7Eu32 => canonical(&[0x5944]),
    0xFA7Fu32 => canonical(&[0x5954]),
    0xFA80u32 => canonical(&[0x5A62]),
    0xFA81u32 => canonical(&[0x5B28]),
    0xFA82u32 => canonical(&[0x5ED2]),
    0xFA83u32 => canonical(&[0x5ED9]),
    0xFA84u32 => canonical(&[0x5F69]),
    0xFA85u32 => canonical(&[0x5FAD]),
    0xFA86u32 => canonical(&[0x60D8]),
    0xFA87u32 => canonical(&[0x614E]),
    0xFA88u32 => canonical(&[0x6108]),
    0xFA89u32 => canonical(&[0x618E]),
    0xFA8Au32 => canonical(&[0x6160]),
    0xFA8Bu32 => canonical(&[0x61F2]),
    0xFA8Cu32 => canonical(&[0x6234]),
    0xFA8Du32 => canonical(&[0x63C4]),
    0xFA8Eu32 => canonical(&[0x641C]),
    0xFA8Fu32 => canonical(&[0x6452]),
    0xFA90u32 => canonical(&[0x6556]),
    0xFA91u32 => canonical(&[0x6674]),
    0xFA92u32 => canonical(&[0x6717]),
    0xFA93u32 => canonical(&[0x671B]),
    0xFA94u32 => canonical(&[0x6756]),
    0xFA95u32 => canonical(&[0x6B79]),
    0xFA96u32 => canonical(&[0x6BBA]),
    0xFA97u32 => canonical(&[0x6D41]),
    0xFA98u32 => canonical(&[0x6EDB]),
    0xFA99u32 => canonical(&[0x6ECB]),
    0xFA9Au32 => canonical(&[0x6F22]),
    0xFA9Bu32 => canonical(&[0x701E]),
    0xFA9Cu32 => canonical(&[0x716E]),
    0xFA9Du32 => canonical(&[0x77A7]),
    0xFA9Eu32 => canonical(&[0x7235]),
    0xFA9Fu32 => canonical(&[0x72AF]),
    0xFAA0u32 => canonical(&[0x732A]),
    0xFAA1u32 => canonical(&[0x7471]),
    0xFAA2u32 => canonical(&[0x7506]),
    0xFAA3u32 => canonical(&[0x753B]),
    0xFAA4u32 => canonical(&[0x761D]),
    0xFAA5u32 => canonical(&[0x761F]),
    0xFAA6u32 => canonical(&[0x76CA]),
    0xFAA7u32 => canonical(&[0x76DB]),
    0xFAA8u32 => canonical(&[0x76F4]),
    0xFAA9u32 => canonical(&[0x774A]),
    0xFAAAu32 => canonical(&[0x7740]),
    0xFAABu32 => canonical(&[0x78CC]),
    0xFAACu32 => canonical(&[0x7AB1]),
    0xFAADu32 => canonical(&[0x7BC0]),
    0xFAAEu32 => canonical(&[0x7C7B]),
    0xFAAFu32 => canonical(&[0x7D5B]),
    0xFAB0u32 => canonical(&[0x7DF4]),
    0xFAB1u32 => canonical(&[0x7F3E]),
    0xFAB2u32 => canonical(&[0x8005]),
    0xFAB3u32 => canonical(&[0x8352]),
    0xFAB4u32 => canonical(&[0x83EF]),
    0xFAB5u32 => canonical(&[0x8779]),
    0xFAB6u32 => canonical(&[0x8941]),
    0xFAB7u32 => canonical(&[0x8986]),
    0xFAB8u32 => canonical(&[0x8996]),
    0xFAB9u32 => canonical(&[0x8ABF]),
    0xFABAu32 => canonical(&[0x8AF8]),
    0xFABBu32 => canonical(&[0x8ACB]),
    0xFABCu32 => canonical(&[0x8B01]),
    0xFABDu32 => canonical(&[0x8AFE]),
    0xFABEu32 => canonical(&[0x8AED]),
    0xFABFu32 => canonical(&[0x8B39]),
    0xFAC0u32 => canonical(&[0x8B8A]),
    0xFAC1u32 => canonical(&[0x8D08]),
    0xFAC2u32 => canonical(&[0x8F38]),
    0xFAC3u32 => canonical(&[0x9072]),
    0xFAC4u32 => canonical(&[0x9199]),
    0xFAC5u32 => canonical(&[0x9276]),
    0xFAC6u32 => canonical(&[0x967C]),
    0xFAC7u32 => canonical(&[0x96E3]),
    0xFAC8u32 => canonical(&[0x9756]),
    0xFAC9u32 => canonical(&[0x97DB]),
    0xFACAu32 => canonical(&[0x97FF]),
    0xFACBu32 => canonical(&[0x980B]),
    0xFACCu32 => canonical(&[0x983B]),
    0xFACDu32 => canonical(&[0x9B12]),
    0xFACEu32 => canonical(&[0x9F9C]),
    0xFACFu32 => canonical(&[0x2284A]),
    0xFAD0u32 => canonical(&[0x22844]),
    0xFAD1u32 => canonical(&[0x233D5]),
    0xFAD2u32 => canonical(&[0x3B9D]),
    0xFAD3u32 => canonical(&[0x4018]),
    0xFAD4u32 => canonical(&[0x4039]),
    0xFAD5u32 => canonical(&[0x25249]),
    0xFAD6u32 => canonical(&[0x25CD0]),
    0xFAD7u32 => canonical(&[0x27ED3]),
    0xFAD8u32 => canonical(&[0x9F43]),
    0xFAD9u32 => canonical(&[0x9F8E]),
    0xFB00u32 => compat(&[0x0066, 0x0066]),
    0xFB01u32 => compat(&[0x0066, 0x0069]),
    0xFB02u32 => compat(&[0x0066, 0x006C]),
    0xFB03u32 => compat(&[0x0066, 0x0066, 0x0069]),
    0xFB04u32 => compat(&[0x0066, 0x0066, 0x006C]),
    0xFB05u32 => compat(&[0x017F, 0x0074]),
    0xFB06u32 => compat(&[0x0073, 0x0074]),
    0xFB13u32 => compat(&[0x0574, 0x0576]),
    0xFB14u32 => compat(&[0x0574, 0x0565]),
    0xFB15u32 => compat(&[0x0574, 0x056B]),
    0xFB16u32 => compat(&[0x057E, 0x0576]),
    0xFB17u32 => compat(&[0x0574, 0x056D]),
    0xFB1Du32 => canonical(&[0x05D9, 0x05B4]),
    0xFB1Fu32 => canonical(&[0x05F2, 0x05B7]),
    0xFB20u32 => compat(&[0x05E2]),
    0xFB21u32 => compat(&[0x05D0]),
    0xFB22u32 => compat(&[0x05D3]),
    0xFB23u32 => compat(&[0x05D4]),
    0xFB24u32 => compat(&[0x05DB]),
    0xFB25u32 => compat(&[0x05DC]),
    0xFB26u32 => compat(&[0x05DD]),
    0xFB27u32 => compat(&[0x05E8]),
    0xFB28u32 => compat(&[0x05EA]),
    0xFB29u32 => compat(&[0x002B]),
    0xFB2Au32 => canonical(&[0x05E9, 0x05C1]),
    0xFB2Bu32 => canonical(&[0x05E9, 0x05C2]),
    0xFB2Cu32 => canonical(&[0xFB49, 0x05C1]),
    0xFB2Du32 => canonical(&[0xFB49, 0x05C2]),
    0xFB2Eu32 => canonical(&[0x05D0, 0x05B7]),
    0xFB2Fu32 => canonical(&[0x05D0, 0x05B8]),
    0xFB30u32 => canonical(&[0x05D0, 0x05BC]),
    0xFB31u32 => canonical(&[0x05D1, 0x05BC]),
    0xFB32u32 => canonical(&[0x05D2, 0x05BC]),
    0xFB33u32 => canonical(&[0x05D3, 0x05BC]),
    0xFB34u32 => canonical(&[0x05D4, 0x05BC]),
    0xFB35u32 => canonical(&[0x05D5, 0x05BC]),
    0xFB36u32 => canonical(&[0x05D6, 0x05BC]),
    0xFB38u32 => canonical(&[0x05D8, 0x05BC]),
    0xFB39u32 => canonical(&[0x05D9, 0x05BC]),
    0xFB3Au32 => canonical(&[0x05DA, 0x05BC]),
    0xFB3Bu32 => canonical(&[0x05DB, 0x05BC]),
    0xFB3Cu32 => canonical(&[0x05DC, 0x05BC]),
    0xFB3Eu32 => canonical(&[0x05DE, 0x05BC]),
    0xFB40u32 => canonical(&[0x05E0, 0x05BC]),
    0xFB41u32 => canonical(&[0x05E1, 0x05BC]),
    0xFB43u32 => canonical(&[0x05E3, 0x05BC]),
    0xFB44u32 => canonical(&[0x05E4, 0x05BC]),
    0xFB46u32 => canonical(&[0x05E6, 0x05BC]),
    0xFB47u32 => canonical(&[0x05E7, 0x05BC]),
    0xFB48u32 => canonical(&[0x05E8, 0x05BC]),
    0xFB49u32 => canonical(&[0x05E9, 0x05BC]),
    0xFB4Au32 => canonical(&[0x05EA, 0x05BC]),
    0xFB4Bu32 => canonical(&[0x05D5, 0x05B9]),
    0xFB4Cu32 => canonical(&[0x05D1, 0x05BF]),
    0xFB4Du32 => canonical(&[0x05DB, 0x05BF]),
    0xFB4Eu32 => canonical(&[0x05E4, 0x05BF]),
    0xFB4Fu32 => compat(&[0x05D0, 0x05DC]),
    0xFB50u32 => compat(&[0x0671]),
    0xFB51u32 => compat(&[0x0671]),
    0xFB52u32 => compat(&[0x067B]),
    0xFB53u32 => compat(&[0x067B]),
    0xFB54u32 => compat(&[0x067B]),
    0xFB55u32 => compat(&[0x067B]),
    0xFB56u32 => compat(&[0x067E]),
    0xFB57u32 => compat(&[0x067E]),
    0xFB58u32 => compat(&[0x067E]),
    0xFB59u32 => compat(&[0x067E]),
    0xFB5Au32 => compat(&[0x0680]),
    0xFB5Bu32 => compat(&[0x0680]),
    0xFB5Cu32 => compat(&[0x0680]),
    0xFB5Du32 => compat(&[0x0680]),
    0xFB5Eu32 => compat(&[0x067A]),
    0xFB5Fu32 => compat(&[0x067A]),
    0xFB60u32 => compat(&[0x067A]),
    0xFB61u32 => compat(&[0x067A]),
    0xFB62u32 => compat(&[0x067F]),
    0xFB63u32 => compat(&[0x067F]),
    0xFB64u32 => compat(&[0x067F]),
    0xFB65u32 => compat(&[0x067F]),
    0xFB66u32 => compat(&[0x0679]),
    0xFB67u32 => compat(&[0x0679]),
    0xFB68u32 => compat(&[0x0679]),
    0xFB69u32 => compat(&[0x0679]),
    0xFB6Au32 => compat(&[0x06A4]),
    0xFB6Bu32 => compat(&[0x06A4]),
    0xFB6Cu32 => compat(&[0x06A4]),
    0xFB6Du32 => compat(&[0x06A4]),
    0xFB6Eu32 => compat(&[0x06A6]),
    0xFB6Fu32 => compat(&[0x06A6]),
    0xFB70u32 => compat(&[0x06A6]),
    0xFB71u32 => compat(&[0x06A6]),
    0xFB72u32 => compat(&[0x0684]),
    0xFB73u32 => compat(&[0x0684]),
    0xFB74u32 => compat(&[0x0684]),
    0xFB75u32 => compat(&[0x0684]),
    0xFB76u32 => compat(&[0x0683]),
    0xFB77u32 => compat(&[0x0683]),
    0xFB78u32 => compat(&[0x0683]),
    0xFB79u32 => compat(&[0x0683]),
    0xFB7Au32 => compat(&[0x0686]),
    0xFB7Bu32 => compat(&[0x0686]),
    0xFB7Cu32 => compat(&[0x0686]),
    0xFB7Du32 => compat(&[0x0686]),
    0xFB7Eu32 => compat(&[0x0687]),
    0xFB7Fu32 => compat(&[0x0687]),
    0xFB80u32 => compat(&[0x0687]),
    0xFB81u32 => compat(&[0x0687]),
    0xFB82u32 => compat(&[0x068D]),
    0xFB83u32 => compat(&[0x068D]),
    0xFB84u32 => compat(&[0x068C]),
    0xFB85u32 => compat(&[0x068C]),
    0xFB86u32 => compat(&[0x068E]),
    0xFB87u32 => compat(&[0x068E]),
    0xFB88u32 => compat(&[0x0688]),
    0xFB89u32 => compat(&[0x0688]),
    0xFB8Au32 => compat(&[0x0698]),
    0xFB8Bu32 => compat(&[0x0698]),
    0xFB8Cu32 => compat(&[0x0691]),
    0xFB8Du32 => compat(&[0x0691]),
    0xFB8Eu32 => compat(&[0x06A9]),
    0xFB8Fu32 => compat(&[0x06A9]),
    0xFB90u32 => compat(&[0x06A9]),
    0xFB91u32 => compat(&[0x06A9]),
    0xFB92u32 => compat(&[0x06AF]),
    0xFB93u32 => compat(&[0x06AF]),
    0xFB94u32 => compat(&[0x06AF]),
    0xFB95u32 => compat(&[0x06AF]),
    0xFB96u32 => compat(&[0x06B3]),
    0xFB97u32 => compat(&[0x06B3]),
    0xFB98u32 => compat(&[0x06B3]),
    0xFB99u32 => compat(&[0x06B3]),
    0xFB9Au32 => compat(&[0x06B1]),
    0xFB9Bu32 => compat(&[0x06B1]),
    0xFB9Cu32 => compat(&[0x06B1]),
    0xFB9Du32 => compat(&[0x06B1]),
    0xFB9Eu32 => compat(&[0x06BA]),
    0xFB9Fu32 => compat(&[0x06BA]),
    0xFBA0u32 => compat(&[0x06BB]),
    0xFBA1u32 => compat(&[0x06BB]),
    0xFBA2u32 => compat(&[0x06BB]),
    0xFBA3u32 => compat(&[0x06BB]),
    0xFBA4u32 => compat(&[0x06C0]),
    0xFBA5u32 => compat(&[0x06C0]),
    0xFBA6u32 => compat(&[0x06C1]),
    0xFBA7u32 => compat(&[0x06C1]),
    0xFBA8u32 => compat(&[0x06C1]),
    0xFBA9u32 => compat(&[0x06C1]),
    0xFBAAu32 => compat(&[0x06BE]),
    0xFBABu32 => compat(&[0x06BE]),
    0xFBACu32 => compat(&[0x06BE]),
    0xFBADu32 => compat(&[0x06BE]),
    0xFBAEu32 => compat(&[0x06D2]),
    0xFBAFu32 => compat(&[0x06D2]),
    0xFBB0u32 => compat(&[0x06D3]),
    0xFBB1u32 => compat(&[0x06D3]),
    0xFBD3u32 => compat(&[0x06AD]),
    0xFBD4u32 => compat(&[0x06AD]),
    0xFBD5u32 => compat(&[0x06AD]),
    0xFBD6u32 => compat(&[0x06AD]),
    0xFBD7u32 => compat(&[0x06C7]),
    0xFBD8u32 => compat(&[0x06C7]),
    0xFBD9u32 => compat(&[0x06C6]),
    0xFBDAu32 => compat(&[0x06C6]),
    0xFBDBu32 => compat(&[0x06C8]),
    0xFBDCu32 => compat(&[0x06C8]),
    0xFBDDu32 => compat(&[0x0677]),
    0xFBDEu32 => compat(&[0x06CB]),
    0xFBDFu32 => compat(&[0x06CB]),
    0xFBE0u32 => compat(&[0x06C5]),
    0xFBE1u32 => compat(&[0x06C5]),
    0xFBE2u32 => compat(&[0x06C9]),
    0xFBE3u32 => compat(&[0x06C9]),
    0xFBE4u32 => compat(&[0x06D0]),
    0xFBE5u32 => compat(&[0x06D0]),
    0xFBE6u32 => compat(&[0x06D0]),
    0xFBE7u32 => compat(&[0x06D0]),
    0xFBE8u32 => compat(&[0x0649]),
    0xFBE9u32 => compat(&[0x0649]),
    0xFBEAu32 => compat(&[0x0626, 0x0627]),
    0xFBEBu32 => compat(&[0x0626, 0x0627]),
    0xFBECu32 => compat(&[0x0626, 0x06D5]),
    0xFBEDu32 => compat(&[0x0626, 0x06D5]),
    0xFBEEu32 => compat(&[0x0626, 0x0648]),
    0xFBEFu32 => compat(&[0x0626, 0x0648]),
    0xFBF0u32 => compat(&[0x0626, 0x06C7]),
    0xFBF1u32 => compat(&[0x0626, 0x06C7]),
    0xFBF2u32 => compat(&[0x0626, 0x06C6]),
    0xFBF3u32 => compat(&[0x0626, 0x06C6]),
    0xFBF4u32 => compat(&[0x0626, 0x06C8]),
    0xFBF5u32 => compat(&[0x0626, 0x06C8]),
    0xFBF6u32 => compat(&[0x0626, 0x06D0]),
    0xFBF7u32 => compat(&[0x0626, 0x06D0]),
    0xFBF8u32 => compat(&[0x0626, 0x06D0]),
    0xFBF9u32 => compat(&[0x0626, 0x0649]),
    0xFBFAu32 => compat(&[0x0626, 0x0649]),
    0xFBFBu32 => compat(&[0x0626, 0x0649]),
    0xFBFCu32 => compat(&[0x06CC]),
    0xFBFDu32 => compat(&[0x06CC]),
    0xFBFEu32 => compat(&[0x06CC]),
    0xFBFFu32 => compat(&[0x06CC]),
    0xFC00u32 => compat(&[0x0626, 0x062C]),
    0xFC01u32 => compat(&[0x0626, 0x062D]),
    0xFC02u32 => compat(&[0x0626, 0x0645]),
    0xFC03u32 => compat(&[0x0626, 0x0649]),
    0xFC04u32 => compat(&[0x0626, 0x064A]),
    0xFC05u32 => compat(&[0x0628, 0x062C]),
    0xFC06u32 => compat(&[0x0628, 0x062D]),
    0xFC07u32 => compat(&[0x0628, 0x062E]),
    0xFC08u32 => compat(&[0x0628, 0x0645]),
    0xFC09u32 => compat(&[0x0628, 0x0649]),
    0xFC0Au32 => compat(&[0x0628, 0x064A]),
    0xFC0Bu32 => compat(&[0x062A, 0x062C]),
    0xFC0Cu32 => compat(&[0x062A, 0x062D]),
    0xFC0Du32 => compat(&[0x062A, 0x062E]),
    0xFC0Eu32 => compat(&[0x062A, 0x0645]),
    0xFC0Fu32 => compat(&[0x062A, 0x0649]),
    0xFC10u32 => compat(&[0x062A, 0x064A]),
    0xFC11u32 => compat(&[0x062B, 0x062C]),
    0xFC12u32 => compat(&[0x062B, 0x0645]),
    0xFC13u32 => compat(&[0x062B, 0x0649]),
    0xFC14u32 => compat(&[0x062B, 0x064A]),
    0xFC15u32 => compat(&[0x062C, 0x062D]),
    0xFC16u32 => compat(&[0x062C, 0x0645]),
    0xFC17u32 => compat(&[0x062D, 0x062C]),
    0xFC18u32 => compat(&[0x062D, 0x0645]),
    0xFC19u32 => compat(&[0x062E, 0x062C]),
    0xFC1Au32 => compat(&[0x062E, 0x062D]),
    0xFC1Bu32 => compat(&[0x062E, 0x0645]),
    0xFC1Cu32 => compat(&[0x0633, 0x062C]),
    0xFC1Du32 => compat(&[0x0633, 0x062D]),
    0xFC1Eu32 => compat(&[0x0633, 0x062E]),
    0xFC1Fu32 => compat(&[0x0633, 0x0645]),
    0xFC20u32 => compat(&[0x0635, 0x062D]),
    0xFC21u32 => compat(&[0x0635, 0x0645]),
    0xFC22u32 => compat(&[0x0636, 0x062C]),
    0xFC23u32 => compat(&[0x0636, 0x062D]),
    0xFC24u32 => compat(&[0x0636, 0x062E]),
    0xFC25u32 => compat(&[0x0636, 0x0645]),
    0xFC26u32 => compat(&[0x0637, 0x062D]),
    0xFC27u32 => compat(&[0x0637, 0x0645]),
    0xFC28u32 => compat(&[0x0638, 0x0645]),
    0xFC29u32 => compat(&[0x0639, 0x062C]),
    0xFC2Au32 => compat(&[0x0639, 0x0645]),
    0xFC2Bu32 => compat(&[0x063A, 0x062C]),
    0xFC2Cu32 => compat(&[0x063A, 0x0645]),
    0xFC2Du32 => compat(&[0x0641, 0x062C]),
    0xFC2Eu32 => compat(&[0x0641, 0x062D]),
    0xFC2Fu32 => compat(&[0x0641, 0x062E]),
    0xFC30u32 => compat(&[0x0641, 0x0645]),
    0xFC31u32 => compat(&[0x0641, 0x0649]),
    0xFC32u32 => compat(&[0x0641, 0x064A]),
    0xFC33u32 => compat(&[0x0642, 0x062D]),
    0xFC34u32 => compat(&[0x0642, 0x0645]),
    0xFC35u32 => compat(&[0x0642, 0x0649]),
    0xFC36u32 => compat(&[0x0642, 0x064A]),
    0xFC37u32 => compat(&[0x0643, 0x0627]),
    0xFC38u32 => compat(&[0x0643, 0x062C]),
    0xFC39u32 => compat(&[0x0643, 0x062D]),
    0xFC3Au32 => compat(&[0x0643, 0x062E]),
    0xFC3Bu32 => compat(&[0x0643, 0x0644]),
    0xFC3Cu32 => compat(&[0x0643, 0x0645]),
    0xFC3Du32 => compat(&[0x0643, 0x0649]),
    0xFC3Eu32 => compat(&[0x0643, 0x064A]),
    0xFC3Fu32 => compat(&[0x0644, 0x062C]),
    0xFC40u32 => compat(&[0x0644, 0x062D]),
    0xFC41u32 => compat(&[0x0644, 0x062E]),
    0xFC42u32 => compat(&[0x0644, 0x0645]),
    0xFC43u32 => compat(&[0x0644, 0x0649]),
    0xFC44u32 => compat(&[0x0644, 0x064A]),
    0xFC45u32 => compat(&[0x0645, 0x062C]),
    0xFC46u32 => compat(&[0x0645, 0x062D]),
    0xFC47u32 => compat(&[0x0645, 0x062E]),
    0xFC48u32 => compat(&[0x0645, 0x0645]),
    0xFC49u32 => compat(&[0x0645, 0x0649]),
    0xFC4Au32 => compat(&[0x0645, 0x064A]),
    0xFC4Bu32 => compat(&[0x0646, 0x062C]),
    0xFC4Cu32 => compat(&[0x0646, 0x062D]),
    0xFC4Du32 => compat(&[0x0646, 0x062E]),
    0xFC4Eu32 => compat(&[0x0646, 0x0645]),
    0xFC4Fu32 => compat(&[0x0646, 0x0649]),
    0xFC50u32 => compat(&[0x0646, 0x064A]),
    0xFC51u32 => compat(&[0x0647, 0x062C]),
    0xFC52u32 => compat(&[0x0647, 0x0645]),
    0xFC53u32 => compat(&[0x0647, 0x0649]),
    0xFC54u32 => compat(&[0x0647, 0x064A]),
    0xFC55u32 => compat(&[0x064A, 0x062C]),
    0xFC56u32 => compat(&[0x064A, 0x062D]),
    0xFC57u32 => compat(&[0x064A, 0x062E]),
    0xFC58u32 => compat(&[0x064A, 0x0645]),
    0xFC59u32 => compat(&[0x064A, 0x0649]),
    0xFC5Au32 => compat(&[0x064A, 0x064A]),
    0xFC5Bu32 => compat(&[0x0630, 0x0670]),
    0xFC5Cu32 => compat(&[0x0631, 0x0670]),
    0xFC5Du32 => compat(&[0x0649, 0x0670]),
    0xFC5Eu32 => compat(&[0x0020, 0x064C, 0x0651]),
    0xFC5Fu32 => compat(&[0x0020, 0x064D, 0x0651]),
    0xFC60u32 => compat(&[0x0020, 0x064E, 0x0651]),
    0xFC61u32 => compat(&[0x0020, 0x064F, 0x0651]),
    0xFC62u32 => compat(&[0x0020, 0x0650, 0x0651]),
    0xFC63u32 => compat(&[0x0020, 0x0651, 0x0670]),
    0xFC64u32 => compat(&[0x0626, 0x0631]),
    0xFC65u32 => compat(&[0x0626, 0x0632]),
    0xFC66u32 => compat(&[0x0626, 0x0645]),
    0xFC67u32 => compat(&[0x0626, 0x0646]),
    0xFC68u32 => compat(&[0x0626, 0x0649]),
    0xFC69u32 => compat(&[0x0626, 0x064A]),
    0xFC6Au32 => compat(&[0x0628, 0x0631]),
    0xFC6Bu32 => compat(&[0x0628, 0x0632]),
    0xFC6Cu32 => compat(&[0x0628, 0x0645]),
    0xFC6Du32 => compat(&[0x0628, 0x0646]),
    0xFC6Eu32 => compat(&[0x0628, 0x0649]),
    0xFC6Fu32 => compat(&[0x0628, 0x064A]),
    0xFC70u32 => compat(&[0x062A, 0x0631]),
    0xFC71u32 => compat(&[0x062A, 0x0632]),
    0xFC72u32 => compat(&[0x062A, 0x0645]),
    0xFC73u32 => compat(&[0x062A, 0x0646]),
    0xFC74u32 => compat(&[0x062A, 0x0649]),
    0xFC75u32 => compat(&[0x062A, 0x064A]),
    0xFC76u32 => compat(&[0x062B, 0x0631]),
    0xFC77u32 => compat(&[0x062B, 0x0632]),
    0xFC78u32 => compat(&[0x062B, 0x0645]),
    0xFC79u32 => compat(&[0x062B, 0x0646]),
    0xFC7Au32 => compat(&[0x062B, 0x0649]),
    0xFC7Bu32 => compat(&[0x062B, 0x064A]),
    0xFC7Cu32 => compat(&[0x0641, 0x0649]),
    0xFC7Du32 => compat(&[0x0641, 0x064A]),
    0xFC7Eu32 => compat(&[0x0642, 0x0649]),
    0xFC7Fu32 => compat(&[0x0642, 0x064A]),
    0xFC80u32 => compat(&[0x0643, 0x0627]),
    0xFC81u32 => compat(&[0x0643, 0x0644]),
    0xFC82u32 => compat(&[0x0643, 0x0645]),
    0xFC83u32 => compat(&[0x0643, 0x0649]),
    0xFC84u32 => compat(&[0x0643, 0x064A]),
    0xFC85u32 => compat(&[0x0644, 0x0645]),
    0xFC86u32 => compat(&[0x0644, 0x0649]),
    0xFC87u32 => compat(&[0x0644, 0x064A]),
    0xFC88u32 => compat(&[0x0645, 0x0627]),
    0xFC89u32 => compat(&[0x0645, 0x0645]),
    0xFC8Au32 => compat(&[0x0646, 0x0631]),
    0xFC8Bu32 => compat(&[0x0646, 0x0632]),
    0xFC8Cu32 => compat(&[0x0646, 0x0645]),
    0xFC8Du32 => compat(&[0x0646, 0x0646]),
    0xFC8Eu32 => compat(&[0x0646, 0x0649]),
    0xFC8Fu32 => compat(&[0x0646, 0x064A]),
    0xFC90u32 => compat(&[0x0649, 0x0670]),
    0xFC91u32 => compat(&[0x064A, 0x0631]),
    0xFC92u32 => compat(&[0x064A, 0x0632]),
    0xFC93u32 => compat(&[0x064A, 0x0645]),
    0xFC94u32 => compat(&[0x064A, 0x0646]),
    0xFC95u32 => compat(&[0x064A, 0x0649]),
    0xFC96u32 => compat(&[0x064A, 0x064A]),
    0xFC97u32 => compat(&[0x0626, 0x062C]),
    0xFC98u32 => compat(&[0x0626, 0x062D]),
    0xFC99u32 => compat(&[0x0626, 0x062E]),
    0xFC9Au32 => compat(&[0x0626, 0x0645]),
    0xFC9Bu32 => compat(&[0x0626, 0x0647]),
    0xFC9Cu32 => compat(&[0x0628, 0x062C]),
    0xFC9Du32 => compat(&[0x0628, 0x062D]),
    0xFC9Eu32 => compat(&[0x0628, 0x062E]),
    0xFC9Fu32 => compat(&[0x0628, 0x0645]),
    0xFCA0u32 => compat(&[0x0628, 0x0647]),
    0xFCA1u32 => compat(&[0x062A, 0x062C]),
    0xFCA2u32 => compat(&[0x062A, 0x062D]),
    0xFCA3u32 => compat(&[0x062A, 0x062E]),
    0xFCA4u32 => compat(&[0x062A, 0x0645]),
    0xFCA5u32 => compat(&[0x062A, 0x0647]),
    0xFCA6u32 => compat(&[0x062B, 0x0645]),
    0xFCA7u32 => compat(&[0x062C, 0x062D]),
    0xFCA8u32 => compat(&[0x062C, 0x0645]),
    0xFCA9u32 => compat(&[0x062D, 0x062C]),
    0xFCAAu32 => compat(&[0x062D, 0x0645]),
    0xFCABu32 => compat(&[0x062E, 0x062C]),
    0xFCACu32 => compat(&[0x062E, 0x0645]),
    0xFCADu32 => compat(&[0x0633, 0x062C]),
    0xFCAEu32 => compat(&[0x0633, 0x062D]),
    0xFCAFu32 => compat(&[0x0633, 0x062E]),
    0xFCB0u32 => compat(&[0x0633, 0x0645]),
    0xFCB1u32 => compat(&[0x0635, 0x062D]),
    0xFCB2u32 => compat(&[0x0635, 0x062E]),
    0xFCB3u32 => compat(&[0x0635, 0x0645]),
    0xFCB4u32 => compat(&[0x0636, 0x062C]),
    0xFCB5u32 => compat(&[0x0636, 0x062D]),
    0xFCB6u32 => compat(&[0x0636, 0x062E]),
    0xFCB7u32 => compat(&[0x0636, 0x0645]),
    0xFCB8u32 => compat(&[0x0637, 0x062D]),
    0xFCB9u32 => compat(&[0x0638, 0x0645]),
    0xFCBAu32 => compat(&[0x0639, 0x062C]),
    0xFCBBu32 => compat(&[0x0639, 0x0645]),
    0xFCBCu32 => compat(&[0x063A, 0x062C]),
    0xFCBDu32 => compat(&[0x063A, 0x0645]),
    0xFCBEu32 => compat(&[0x0641, 0x062C]),
    0xFCBFu32 => compat(&[0x0641, 0x062D]),
    0xFCC0u32 => compat(&[0x0641, 0x062E]),
    0xFCC1u32 => compat(&[0x0641, 0x0645]),
    0xFCC2u32 => compat(&[0x0642, 0x062D]),
    0xFCC3u32 => compat(&[0x0642, 0x0645]),
    0xFCC4u32 => compat(&[0x0643, 0x062C]),
    0xFCC5u32 => compat(&[0x0643, 0x062D]),
    0xFCC6u32 => compat(&[0x0643, 0x062E]),
    0xFCC7u32 => compat(&[0x0643, 0x0644]),
    0xFCC8u32 => compat(&[0x0643, 0x0645]),
    0xFCC9u32 => compat(&[0x0644, 0x062C]),
    0xFCCAu32 => compat(&[0x0644, 0x062D]),
    0xFCCBu32 => compat(&[0x0644, 0x062E]),
    0xFCCCu32 => compat(&[0x0644, 0x0645]),
    0xFCCDu32 => compat(&[0x0644, 0x0647]),
    0xFCCEu32 => compat(&[0x0645, 0x062C]),
    0xFCCFu32 => compat(&[0x0645, 0x062D]),
    0xFCD0u32 => compat(&[0x0645, 0x062E]),
    0xFCD1u32 => compat(&[0x0645, 0x0645]),
    0xFCD2u32 => compat(&[0x0646, 0x062C]),
    0xFCD3u32 => compat(&[0x0646, 0x062D]),
    0xFCD4u32 => compat(&[0x0646, 0x062E]),
    0xFCD5u32 => compat(&[0x0646, 0x0645]),
    0xFCD6u32 => compat(&[0x0646, 0x0647]),
    0xFCD7u32 => compat(&[0x0647, 0x062C]),
    0xFCD8u32 => compat(&[0x0647, 0x0645]),
    0xFCD9u32 => compat(&[0x0647, 0x0670]),
    0xFCDAu32 => compat(&[0x064A, 0x062C]),
    0xFCDBu32 => compat(&[0x064A, 0x062D]),
    0xFCDCu32 => compat(&[0x064A, 0x062E]),
    0xFCDDu32 => compat(&[0x064A, 0x0645]),
    0xFCDEu32 => compat(&[0x064A, 0x0647]),
    0xFCDFu32 => compat(&[0x0626, 0x0645]),
    0xFCE0u32 => compat(&[0x0626, 0x0647]),
    0xFCE1u32 => compat(&[0x0628, 0x0645]),
    0xFCE2u32 => compat(&[0x0628, 0x0647]),
    0xFCE3u32 => compat(&[0x062A, 0x0645]),
    0xFCE4u32 => compat(&[0x062A, 0x0647]),
    0xFCE5u32 => compat(&[0x062B, 0x0645]),
    0xFCE6u32 => compat(&[0x062B, 0x0647]),
    0xFCE7u32 => compat(&[0x0633, 0x0645]),
    0xFCE8u32 => compat(&[0x0633, 0x0647]),
    0xFCE9u32 => compat(&[0x0634, 0x0645]),
    0xFCEAu32 => compat(&[0x0634, 0x0647]),
    0xFCEBu32 => compat(&[0x0643, 0x0644]),
    0xFCECu32 => compat(&[0x0643, 0x0645]),
    0xFCEDu32 => compat(&[0x0644, 0x0645]),
    0xFCEEu32 => compat(&[0x0646, 0x0645]),
    0xFCEFu32 => compat(&[0x0646, 0x0647]),
    0xFCF0u32 => compat(&[0x064A, 0x0645]),
    0xFCF1u32 => compat(&[0x064A, 0x0647]),
    0xFCF2u32 => compat(&[0x0640, 0x064E, 0x0651]),
    0xFCF3u32 => compat(&[0x0640, 0x064F, 0x0651]),
    0xFCF4u32 => compat(&[0x0640, 0x0650, 0x0651]),
    0xFCF5u32 => compat(&[0x0637, 0x0649]),
    0xFCF6u32 => compat(&[0x0637, 0x064A]),
    0xFCF7u32 => compat(&[0x0639, 0x0649]),
    0xFCF8u32 => compat(&[0x0639, 0x064A]),
    0xFCF9u32 => compat(&[0x063A, 0x0649]),
    0xFCFAu32 => compat(&[0x063A, 0x064A]),
    0xFCFBu32 => compat(&[0x0633, 0x0649]),
    0xFCFCu32 => compat(&[0x0633, 0x064A]),
    0xFCFDu32 => compat(&[0x0634, 0x0649]),
    0xFCFEu32 => compat(&[0x0634, 0x064A]),
    0xFCFFu32 => compat(&[0x062D, 0x0649]),
    0xFD00u32 => compat(&[0x062D, 0x064A]),
    0xFD01u32 => compat(&[0x062C, 0x0649]),
    0xFD02u32 => compat(&[0x062C, 0x064A]),
    0xFD03u32 => compat(&[0x062E, 0x0649]),
    0xFD04u32 => compat(&[0x062E, 0x064A]),
    0xFD05u32 => compat(&[0x0635, 0x0649]),
    0xFD06u32 => compat(&[0x0635, 0x064A]),
    0xFD07u32 => compat(&[0x0636, 0x0649]),
    0xFD08u32 => compat(&[0x0636, 0x064A]),
    0xFD09u32 => compat(&[0x0634, 0x062C]),
    0xFD0Au32 => compat(&[0x0634, 0x062D]),
    0xFD0Bu32 => compat(&[0x0634, 0x062E]),
    0xFD0Cu32 => compat(&[0x0634, 0x0645]),
    0xFD0Du32 => compat(&[0x0634, 0x0631]),
    0xFD0Eu32 => compat(&[0x0633, 0x0631]),
    0xFD0Fu32 => compat(&[0x0635, 0x0631]),
    0xFD10u32 => compat(&[0x0636, 0x0631]),
    0xFD11u32 => compat(&[0x0637, 0x0649]),
    0xFD12u32 => compat(&[0x0637, 0x064A]),
    0xFD13u32 => compat(&[0x0639, 0x0649]),
    0xFD14u32 => compat(&[0x0639, 0x064A]),
    0xFD15u32 => compat(&[0x063A, 0x0649]),
    0xFD16u32 => compat(&[0x063A, 0x064A]),
    0xFD17u32 => compat(&[0x0633, 0x0649]),
    0xFD18u32 => compat(&[0x0633, 0x064A]),
    0xFD19u32 => compat(&[0x0634, 0x0649]),
    0xFD1Au32 => compat(&[0x0634, 0x064A]),
    0xFD1Bu32 => compat(&[0x062D, 0x0649]),
    0xFD1Cu32 => compat(&[0x062D, 0x064A]),
    0xFD1Du32 => compat(&[0x062C, 0x0649]),
    0xFD1Eu32 => compat(&[0x062C, 0x064A]),
    0xFD1Fu32 => compat(&[0x062E, 0x0649]),
    0xFD20u32 => compat(&[0x062E, 0x064A]),
    0xFD21u32 => compat(&[0x0635, 0x0649]),
    0xFD22u32 => compat(&[0x0635, 0x064A]),
    0xFD23u32 => compat(&[0x0636, 0x0649]),
    0xFD24u32 => compat(&[0x0636, 0x064A]),
    0xFD25u32 => compat(&[0x0634, 0x062C]),
    0xFD26u32 => compat(&[0x0634, 0x062D]),
    0xFD27u32 => compat(&[0x0634, 0x062E]),
    0xFD28u32 => compat(&[0x0634, 0x0645]),
    0xFD29u32 => compat(&[0x0634, 0x0631]),
    0xFD2Au32 => compat(&[0x0633, 0x0631]),
    0xFD2Bu32 => compat(&[0x0635, 0x0631]),
    0xFD2Cu32 => compat(&[0x0636, 0x0631]),
    0xFD2Du32 => compat(&[0x0634, 0x062C]),
    0xFD2Eu32 => compat(&[0x0634, 0x062D]),
    0xFD2Fu32 => compat(&[0x0634, 0x062E]),
    0xFD30u32 => compat(&[0x0634, 0x0645]),
    0xFD31u32 => compat(&[0x0633, 0x0647]),
    0xFD32u32 => compat(&[0x0634, 0x0647]),
    0xFD33u32 => compat(&[0x0637, 0x0645]),
    0xFD34u32 => compat(&[0x0633, 0x062C]),
    0xFD35u32 => compat(&[0x0633, 0x062D]),
    0xFD36u32 => compat(&[0x0633, 0x062E]),
    0xFD37u32 => compat(&[0x0634, 0x062C]),
    0xFD38u32 => compat(&[0x0634, 0x062D]),
    0xFD39u32 => compat(&[0x0634, 0x062E]),
    0xFD3Au32 => compat(&[0x0637, 0x0645]),
    0xFD3Bu32 => compat(&[0x0638, 0x0645]),
    0xFD3Cu32 => compat(&[0x0627, 0x064B]),
    0xFD3Du32 => compat(&[0x0627, 0x064B]),
    0xFD50u32 => compat(&[0x062A, 0x062C, 0x0645]),
    0xFD51u32 => compat(&[0x062A, 0x062D, 0x062C]),
    0xFD52u32 => compat(&[0x062A, 0x062D, 0x062C]),
    0xFD53u32 => compat(&[0x062A, 0x062D, 0x0645]),
    0xFD54u32 => compat(&[0x062A, 0x062E, 0x0645]),
    0xFD55u32 => compat(&[0x062A, 0x0645, 0x062C]),
    0xFD56u32 => compat(&[0x062A, 0x0645, 0x062D]),
    0xFD57u32 => compat(&[0x062A, 0x0645, 0x062E]),
    0xFD58u32 => compat(&[0x062C, 0x0645, 0x062D]),
    0xFD59u32 => compat(&[0x062C, 0x0645, 0x062D]),
    0xFD5Au32 => compat(&[0x062D, 0x0645, 0x064A]),
    0xFD5Bu32 => compat(&[0x062D, 0x0645, 0x0649]),
    0xFD5Cu32 => compat(&[0x0633, 0x062D, 0x062C]),
    0xFD5Du32 => compat(&[0x0633, 0x062C, 0x062D]),
    0xFD5Eu32 => compat(&[0x0633, 0x062C, 0x0649]),
    0xFD5Fu32 => compat(&[0x0633, 0x0645, 0x062D]),
    0xFD60u32 => compat(&[0x0633, 0x0645, 0x062D]),
    0xFD61u32 => compat(&[0x0633, 0x0645, 0x062C]),
    0xFD62u32 => compat(&[0x0633, 0x0645, 0x0645]),
    0xFD63u32 => compat(&[0x0633, 0x0645, 0x0645]),
    0xFD64u32 => compat(&[0x0635, 0x062D, 0x062D]),
    0xFD65u32 => compat(&[0x0635, 0x062D, 0x062D]),
    0xFD66u32 => compat(&[0x0635, 0x0645, 0x0645]),
    0xFD67u32 => compat(&[0x0634, 0x062D, 0x0645]),
    0xFD68u32 => compat(&[0x0634, 0x062D, 0x0645]),
    0xFD69u32 => compat(&[0x0634, 0x062C, 0x064A]),
    0xFD6Au32 => compat(&[0x0634, 0x0645, 0x062E]),
    0xFD6Bu32 => compat(&[0x0634, 0x0645, 0x062E]),
    0xFD6Cu32 => compat(&[0x0634, 0x0645, 0x0645]),
    0xFD6Du32 => compat(&[0x0634, 0x0645, 0x0645]),
    0xFD6Eu32 => compat(&[0x0636, 0x062D, 0x0649]),
    0xFD6Fu32 => compat(&[0x0636, 0x062E, 0x0645]),
    0xFD70u32 => compat(&[0x0636, 0x062E, 0x0645]),
    0xFD71u32 => compat(&[0x0637, 0x0645, 0x062D]),
    0xFD72u32 => compat(&[0x0637, 0x0645, 0x062D]),
    0xFD73u32 => compat(&[0x0637, 0x0645, 0x0645]),
    0xFD74u32 => compat(&[0x0637, 0x0645, 0x064A]),
    0xFD75u32 => compat(&[0x0639, 0x062C, 0x0645]),
    0xFD76u32 => compat(&[0x0639, 0x0645, 0x0645]),
    0xFD77u32 => compat(&[0x0639, 0x0645, 0x0645]),
    0xFD78u32 => compat(&[0x0639, 0x0645, 0x0649]),
    0xFD79u32 => compat(&[0x063A, 0x0645, 0x0645]),
    0xFD7Au32 => compat(&[0x063A, 0x0645, 0x064A]),
    0xFD7Bu32 => compat(&[0x063A, 0x0645, 0x0649]),
    0xFD7Cu32 => compat(&[0x0641, 0x062E, 0x0645]),
    0xFD7Du32 => compat(&[0x0641, 0x062E, 0x0645]),
    0xFD7Eu32 => compat(&[0x0642, 0x0645, 0x062D]),
    0xFD7Fu32 => compat(&[0x0642, 0x0645, 0x0645]),
    0xFD80u32 => compat(&[0x0644, 0x062D, 0x0645]),
    0xFD81u32 => compat(&[0x0644, 0x062D, 0x064A]),
    0xFD82u32 => compat(&[0x0644, 0x062D, 0x0649]),
    0xFD83u32 => compat(&[0x0644, 0x062C, 0x062C]),
    0xFD84u32 => compat(&[0x0644, 0x062C, 0x062C]),
    0xFD85u32 => compat(&[0x0644, 0x062E, 0x0645]),
    0xFD86u32 => compat(&[0x0644, 0x062E, 0x0645]),
    0xFD87u32 => compat(&[0x0644, 0x0645, 0x062D]),
    0xFD88u32 => compat(&[0x0644, 0x0645, 0x062D]),
    0xFD89u32 => compat(&[0x0645, 0x062D, 0x062C]),
    0xFD8Au32 => compat(&[0x0645, 0x062D, 0x0645]),
    0xFD8Bu32 => compat(&[0x0645, 0x062D, 0x064A]),
    0xFD8Cu32 => compat(&[0x0645, 0x062C, 0x062D]),
    0xFD8Du32 => compat(&[0x0645, 0x062C, 0x0645]),
    0xFD8Eu32 => compat(&[0x0645, 0x062E, 0x062C]),
    0xFD8Fu32 => compat(&[0x0645, 0x062E, 0x0645]),
    0xFD92u32 => compat(&[0x0645, 0x062C, 0x062E]),
    0xFD93u32 => compat(&[0x0647, 0x0645, 0x062C]),
    0xFD94u32 => compat(&[0x0647, 0x0645, 0x0645]),
    0xFD95u32 => compat(&[0x0646, 0x062D, 0x0645]),
    0xFD96u32 => compat(&[0x0646, 0x062D, 0x0649]),
    0xFD97u32 => compat(&[0x0646, 0x062C, 0x0645]),
    0xFD98u32 => compat(&[0x0646, 0x062C, 0x0645]),
    0xFD99u32 => compat(&[0x0646, 0x062C, 0x0649]),
    0xFD9Au32 => compat(&[0x0646, 0x0645, 0x064A]),
    0xFD9Bu32 => compat(&[0x0646, 0x0645, 0x0649]),
    0xFD9Cu32 => compat(&[0x064A, 0x0645, 0x0645]),
    0xFD9Du32 => compat(&[0x064A, 0x0645, 0x0645]),
    0xFD9Eu32 => compat(&[0x0628, 0x062E, 0x064A]),
    0xFD9Fu32 => compat(&[0x062A, 0x062C, 0x064A]),
    0xFDA0u32 => compat(&[0x062A, 0x062C, 0x0649]),
    0xFDA1u32 => compat(&[0x062A, 0x062E, 0x064A]),
    0xFDA2u32 => compat(&[0x062A, 0x062E, 0x0649]),
    0xFDA3u32 => compat(&[0x062A, 0x0645, 0x064A]),
    0xFDA4u32 => compat(&[0x062A, 0x0645, 0x0649]),
    0xFDA5u32 => compat(&[0x062C, 0x0645, 0x064A]),
    0xFDA6u32 => compat(&[0x062C, 0x062D, 0x0649]),
    0xFDA7u32 => compat(&[0x062C, 0x0645, 0x0649]),
    0xFDA8u32 => compat(&[0x0633, 0x062E, 0x0649]),
    0xFDA9u32 => compat(&[0x0635, 0x062D, 0x064A]),
    0xFDAAu32 => compat(&[0x0634, 0x062D, 0x064A]),
    0xFDABu32 => compat(&[0x0636, 0x062D, 0x064A]),
    0xFDACu32 => compat(&[0x0644, 0x062C, 0x064A]),
    0xFDADu32 => compat(&[0x0644, 0x0645, 0x064A]),
    0xFDAEu32 => compat(&[0x064A, 0x062D, 0x064A]),
    0xFDAFu32 => compat(&[0x064A, 0x062C, 0x064A]),
    0xFDB0u32 => compat(&[0x064A, 0x0645, 0x064A]),
    0xFDB1u32 => compat(&[0x0645, 0x0645, 0x064A]),
    0xFDB2u32 => compat(&[0x0642, 0x0645, 0x064A]),
    0xFDB3u32 => compat(&[0x0646, 0x062D, 0x064A]),
    0xFDB4u32 => compat(&[0x0642, 0x0645, 0x062D]),
    0xFDB5u32 => compat(&[0x0644, 0x062D, 0x0645]),
    0xFDB6u32 => compat(&[0x0639, 0x0645, 0x064A]),
    0xFDB7u32 => compat(&[0x0643, 0x0645, 0x064A]),
    0xFDB8u32 => compat(&[0x0646, 0x062C, 0x062D]),
    0xFDB9u32 => compat(&[0x0645, 0x062E, 0x064A]),
    0xFDBAu32 => compat(&[0x0644, 0x062C, 0x0645]),
    0xFDBBu32 => compat(&[0x0643, 0x0645, 0x0645]),
    0xFDBCu32 => compat(&[0x0644, 0x062C, 0x0645]),
    0xFDBDu32 => compat(&[0x0646, 0x062C, 0x062D]),
    0xFDBEu32 => compat(&[0x062C, 0x062D, 0x064A]),
    0xFDBFu32 => compat(&[0x062D, 0x062C, 0x064A]),
    0xFDC0u32 => compat(&[0x0645, 0x062C, 0x064A]),
    0xFDC1u32 => compat(&[0x0641, 0x0645, 0x064A]),
    0xFDC2u32 => compat(&[0x0628, 0x062D, 0x064A]),
    0xFDC3u32 => compat(&[0x0643, 0x0645, 0x0645]),
    0xFDC4u32 => compat(&[0x0639, 0x062C, 0x0645]),
    0xFDC5u32 => compat(&[0x0635, 0x0645, 0x0645]),
    0xFDC6u32 => compat(&[0x0633, 0x062E, 0x064A]),
    0xFDC7u32 => compat(&[0x0646, 0x062C, 0x064A]),
    0xFDF0u32 => compat(&[0x0635, 0x0644, 0x06D2]),
    0xFDF1u32 => compat(&[0x0642, 0x0644, 0x06D2]),
    0xFDF2u32 => compat(&[0x0627, 0x0644, 0x0644, 0x0647]),
    0xFDF3u32 => compat(&[0x0627, 0x0643, 0x0628, 0x0631]),
    0xFDF4u32 => compat(&[0x0645, 0x062D, 0x0645, 0x062F]),
    0xFDF5u32 => compat(&[0x0635, 0x0644, 0x0639, 0x0645]),
    0xFDF6u32 => compat(&[0x0631, 0x0633, 0x0648, 0x0644]),
    0xFDF7u32 => compat(&[0x0639, 0x0644, 0x064A, 0x0647]),
    0xFDF8u32 => compat(&[0x0648, 0x0633, 0x0644, 0x0645]),
    0xFDF9u32 => compat(&[0x0635, 0x0644, 0x0649]),
    0xFDFAu32 => compat(&[0x0635, 0x0644, 0x0649, 0x0020, 0x0627, 0x0644, 0x0644, 0x0647, 0x0020, 0x0639, 0x0644, 0x064A, 0x0647, 0x0020, 0x0648, 0x0633, 0x0644, 0x0645]),
    0xFDFBu32 => compat(&[0x062C, 0x0644, 0x0020, 0x062C, 0x0644, 0x0627, 0x0644, 0x0647]),
    0xFDFCu32 => compat(&[0x0631, 0x06CC, 0x0627, 0x0644]),
    0xFE10u32 => compat(&[0x002C]),
    0xFE11u32 => compat(&[0x3001]),
    0xFE12u32 => compat(&[0x3002]),
    0xFE13u32 => compat(&[0x003A]),
    0xFE14u32 => compat(&[0x003B]),
    0xFE15u32 => compat(&[0x0021]),
    0xFE16u32 => compat(&[0x003F]),
    0xFE17u32 => compat(&[0x3016]),
    0xFE18u32 => compat(&[0x3017]),
    0xFE19u32 => compat(&[0x2026]),
    0xFE30u32 => compat(&[0x2025]),
    0xFE31u32 => compat(&[0x2014]),
    0xFE32u32 => compat(&[0x2013]),
    0xFE33u32 => compat(&[0x005F]),
    0xFE34u32 => compat(&[0x005F]),
    0xFE35u32 => compat(&[0x0028]),
    0xFE36u32 => compat(&[0x0029]),
    0xFE37u32 => compat(&[0x007B]),
    0xFE38u32 => compat(&[0x007D]),
    0xFE39u32 => compat(&[0x3014]),
    0xFE3Au32 => compat(&[0x3015]),
    0xFE3Bu32 => compat(&[0x3010]),
    0xFE3Cu32 => compat(&[0x3011]),
    0xFE3Du32 => compat(&[0x300A]),
    0xFE3Eu32 => compat(&[0x300B]),
    0xFE3Fu32 => compat(&[0x3008]),
    0xFE40u32 => compat(&[0x3009]),
    0xFE41u32 => compat(&[0x300C]),
    0xFE42u32 => compat(&[0x300D]),
    0xFE43u32 => compat(&[0x300E]),
    0xFE44u32 => compat(&[0x300F]),
    0xFE47u32 => compat(&[0x005B]),
    0xFE48u32 => compat(&[0x005D]),
    0xFE49u32 => compat(&[0x203E]),
    0xFE4Au32 => compat(&[0x203E]),
    0xFE4Bu32 => compat(&[0x203E]),
    0xFE4Cu32 => compat(&[0x203E]),
    0xFE4Du32 => compat(&[0x005F]),
    0xFE4Eu32 => compat(&[0x005F]),
    0xFE4Fu32 => compat(&[0x005F]),
    0xFE50u32 => compat(&[0x002C]),
    0xFE51u32 => compat(&[0x3001]),
    0xFE52u32 => compat(&[0x002E]),
    0xFE54u32 => compat(&[0x003B]),
    0xFE55u32 => compat(&[0x003A]),
    0xFE56u32 => compat(&[0x003F]),
    0xFE57u32 => compat(&[0x0021]),
    0xFE58u32 => compat(&[0x2014]),
    0xFE59u32 => compat(&[0x0028]),
    0xFE5Au32 => compat(&[0x0029]),
    0xFE5Bu32 => compat(&[0x007B]),
    0xFE5Cu32 => compat(&[0x007D]),
    0xFE5Du32 => compat(&[0x3014]),
    0xFE5Eu32 => compat(&[0x3015]),
    0xFE5Fu32 => compat(&[0x0023]),
    0xFE60u32 => compat(&[0x0026]),
    0xFE61u32 => compat(&[0x002A]),
    0xFE62u32 => compat(&[0x002B]),
    0xFE63u32 => compat(&[0x002D]),
    0xFE64u32 => compat(&[0x003C]),
    0xFE65u32 => compat(&[0x003E]),
    0xFE66u32 => compat(&[0x003D]),
    0xFE68u32 => compat(&[0x005C]),
    0xFE69u32 => compat(&[0x0024]),
    0xFE6Au32 => compat(&[0x0025]),
    0xFE6Bu32 => compat(&[0x0040]),
    0xFE70u32 => compat(&[0x0020, 0x064B]),
    0xFE71u32 => compat(&[0x0640, 0x064B]),
    0xFE72u32 => compat(&[0x0020, 0x064C]),
    0xFE74u32 => compat(&[0x0020, 0x064D]),
    0xFE76u32 => compat(&[0x0020, 0x064E]),
    0xFE77u32 => compat(&[0x0640, 0x064E]),
    0xFE78u32 => compat(&[0x0020, 0x064F]),
    0xFE79u32 => compat(&[0x0640, 0x064F]),
    0xFE7Au32 => compat(&[0x0020, 0x0650]),
    0xFE7Bu32 => compat(&[0x0640, 0x0650]),
    0xFE7Cu32 => compat(&[0x0020, 0x0651]),
    0xFE7Du32 => compat(&[0x0640, 0x0651]),
    0xFE7Eu32 => compat(&[0x0020, 0x0652]),
    0xFE7Fu32 => compat(&[0x0640, 0x0652]),
    0xFE80u32 => compat(&[0x0621]),
    0xFE81u32 => compat(&[0x0622]),
    0xFE82u32 => compat(&[0x0622]),
    0xFE83u32 => compat(&[0x0623]),
    0xFE84u32 => compat(&[0x0623]),
    0xFE85u32 => compat(&[0x0624]),
    0xFE86u32 => compat(&[0x0624]),
    0xFE87u32 => compat(&[0x0625]),
    0xFE88u32 => compat(&[0x0625]),
    0xFE89u32 => compat(&[0x0626]),
    0xFE8Au32 => compat(&[0x0626]),
    0xFE8Bu32 => compat(&[0x0626]),
    0xFE8Cu32 => compat(&[0x0626]),
    0xFE8Du32 => compat(&[0x0627]),
    0xFE8Eu32 => compat(&[0x0627]),
    0xFE8Fu32 => compat(&[0x0628]),
    0xFE90u32 => compat(&[0x0628]),
    0xFE91u32 => compat(&[0x0628]),
    0xFE92u32 => compat(&[0x0628]),
    0xFE93u32 => compat(&[0x0629]),
    0xFE94u32 => compat(&[0x0629]),
    0xFE95u32 => compat(&[0x062A]),
    0xFE96u32 => compat(&[0x062A]),
    0xFE97u32 => compat(&[0x062A]),
    0xFE98u32 => compat(&[0x062A]),
    0xFE99u32 => compat(&[0x062B]),
    0xFE9Au32 => compat(&[0x062B]),
    0xFE9Bu32 => compat(&[0x062B]),
    0xFE9Cu32 => compat(&[0x062B]),
    0xFE9Du32 => compat(&[0x062C]),
    0xFE9Eu32 => compat(&[0x062C]),
    0xFE9Fu32 => compat(&[0x062C]),
    0xFEA0u32 => compat(&[0x062C]),
    0xFEA1u32 => compat(&[0x062D]),
    0xFEA2u32 => compat(&[0x062D]),
    0xFEA3u32 => compat(&[0x062D]),
    0xFEA4u32 => compat(&[0x062D]),
    0xFEA5u32 => compat(&[0x062E]),
    0xFEA6u32 => compat(&[0x062E]),
    0xFEA7u32 => compat(&[0x062E]),
    0xFEA8u32 => compat(&[0x062E]),
    0xFEA9u32 => compat(&[0x062F]),
    0xFEAAu32 => compat(&[0x062F]),
    0xFEABu32 => compat(&[0x0630]),
    0xFEACu32 => compat(&[0x0630]),
    0xFEADu32 => compat(&[0x0631]),
    0xFEAEu32 => compat(&[0x0631]),
    0xFEAFu32 => compat(&[0x0632]),
    0xFEB0u32 => compat(&[0x0632]),
    0xFEB1u32 => compat(&[0x0633]),
    0xFEB2u32 => compat(&[0x0633]),
    0xFEB3u32 => compat(&[0x0633]),
    0xFEB4u32 => compat(&[0x0633]),
    0xFEB5u32 => compat(&[0x0634]),
    0xFEB6u32 => compat(&[0x0634]),
    0xFEB7u32 => compat(&[0x0634]),
    0xFEB8u32 => compat(&[0x0634]),
    0xFEB9u32 => compat(&[0x0635]),
    0xFEBAu32 => compat(&[0x0635]),
    0xFEBBu32 => compat(&[0x0635]),
    0xFEBCu32 => compat(&[0x0635]),
    0xFEBDu32 => compat(&[0x0636]),
    0xFEBEu32 => compat(&[0x0636]),
    0xFEBFu32 => compat(&[0x0636]),
    0xFEC0u32 => compat(&[0x0636]),
    0xFEC1u32 => compat(&[0x0637]),
    0xFEC2u32 => compat(&[0x0637]),
    0xFEC3u32 => compat(&[0x0637]),
    0xFEC4u32 => compat(&[0x0637]),
    0xFEC5u32 => compat(&[0x0638]),
    0xFEC6u32 => compat(&[0x0638]),
    0xFEC7u32 => compat(&[0x0638]),
    0xFEC8u32 => compat(&[0x0638]),
    0xFEC9u32 => compat(&[0x0639]),
    0xFECAu32 => compat(&[0x0639]),
    0xFECBu32 => compat(&[0x0639]),
    0xFECCu32 => compat(&[0x0639]),
    0xFECDu32 => compat(&[0x063A]),
    0xFECEu32 => compat(&[0x063A]),
    0xFECFu32 => compat(&[0x063A]),
    0xFED0u32 => compat(&[0x063A]),
    0xFED1u32 => compat(&[0x0641]),
    0xFED2u32 => compat(&[0x0641]),
    0xFED3u32 => compat(&[0x0641]),
    0xFED4u32 => compat(&[0x0641]),
    0xFED5u32 => compat(&[0x0642]),
    0xFED6u32 => compat(&[0x0642]),
    0xFED7u32 => compat(&[0x0642]),
    0xFED8u32 => compat(&[0x0642]),
    0xFED9u32 => compat(&[0x0643]),
    0xFEDAu32 => compat(&[0x0643]),
    0xFEDBu32 => compat(&[0x0643]),
    0xFEDCu32 => compat(&[0x0643]),
    0xFEDDu32 => compat(&[0x0644]),
    0xFEDEu32 => compat(&[0x0644]),
    0xFEDFu32 => compat(&[0x0644]),
    0xFEE0u32 => compat(&[0x0644]),
    0xFEE1u32 => compat(&[0x0645]),
    0xFEE2u32 => compat(&[0x0645]),
    0xFEE3u32 => compat(&[0x0645]),
    0xFEE4u32 => compat(&[0x0645]),
    0xFEE5u32 => compat(&[0x0646]),
    0xFEE6u32 => compat(&[0x0646]),
    0xFEE7u32 => compat(&[0x0646]),
    0xFEE8u32 => compat(&[0x0646]),
    0xFEE9u32 => compat(&[0x0647]),
    0xFEEAu32 => compat(&[0x0647]),
    0xFEEBu32 => compat(&[0x0647]),
    0xFEECu32 => compat(&[0x0647]),
    0xFEEDu32 => compat(&[0x0648]),
    0xFEEEu32 => compat(&[0x0648]),
    0xFEEFu32 => compat(&[0x0649]),
    0xFEF0u32 => compat(&[0x0649]),
    0xFEF1u32 => compat(&[0x064A]),
    0xFEF2u32 => compat(&[0x064A]),
    0xFEF3u32 => compat(&[0x064A]),
    0xFEF4u32 => compat(&[0x064A]),
    0xFEF5u32 => compat(&[0x0644, 0x0622]),
    0xFEF6u32 => compat(&[0x0644, 0x0622]),
    0xFEF7u32 => compat(&[0x0644, 0x0623]),
    0xFEF8u32 => compat(&[0x0644, 0x0623]),
    0xFEF9u32 => compat(&[0x0644, 0x0625]),
    0xFEFAu32 => compat(&[0x0644, 0x0625]),
    0xFEFBu32 => compat(&[0x0644, 0x0627]),
    0xFEFCu32 => compat(&[0x0644, 0x0627]),
    0xFF01u32 => compat(&[0x0021]),
    0xFF02u32 => compat(&[0x0022]),
    0xFF03u32 => compat(&[0x0023]),
    0xFF04u32 => compat(&[0x0024]),
    0xFF05u32 => compat(&[0x0025]),
    0xFF06u32 => compat(&[0x0026]),
    0xFF07u32 => compat(&[0x0027]),
    0xFF08u32 => compat(&[0x0028]),
    0xFF09u32 => compat(&[0x0029]),
    0xFF0Au32 => compat(&[0x002A]),
    0xFF0Bu32 => compat(&[0x002B]),
    0xFF0Cu32 => compat(&[0x002C]),
    0xFF0Du32 => compat(&[0x002D]),
    0xFF0Eu32 => compat(&[0x002E]),
    0xFF0Fu32 => compat(&[0x002F]),
    0xFF10u32 => compat(&[0x0030]),
    0xFF11u32 => compat(&[0x0031]),
    0xFF12u32 => compat(&[0x0032]),
    0xFF13u32 => compat(&[0x0033]),
    0xFF14u32 => compat(&[0x0034]),
    0xFF15u32 => compat(&[0x0035]),
    0xFF16u32 => compat(&[0x0036]),
    0xFF17u32 => compat(&[0x0037]),
    0xFF18u32 => compat(&[0x0038]),
    0xFF19u32 => compat(&[0x0039]),
    0xFF1Au32 => compat(&[0x003A]),
    0xFF1Bu32 => compat(&[0x003B]),
    0xFF1Cu32 => compat(&[0x003C]),
    0xFF1Du32 => compat(&[0x003D]),
    0xFF1Eu32 => compat(&[0x003E]),
    0xFF1Fu32 => compat(&[0x003F]),
    0xFF20u32 => compat(&[0x0040]),
    0xFF21u32 => compat(&[0x0041]),
    0xFF22u32 => compat(&[0x0042]),
    0xFF23u32 => compat(&[0x0043]),
    0xFF24u32 => compat(&[0x0044]),
    0xFF25u32 => compat(&[0x0045]),
    0xFF26u32 => compat(&[0x0046]),
    0xFF27u32 => compat(&[0x0047]),
    0xFF28u32 => compat(&[0x0048]),
    0xFF29u32 => compat(&[0x0049]),
    0xFF2Au32 => compat(&[0x004A]),
    0xFF2Bu32 => compat(&[0x004B]),
    0xFF2Cu32 => compat(&[0x004C]),
    0xFF2Du32 => compat(&[0x004D]),
    0xFF2Eu32 => compat(&[0x004E]),
    0xFF2Fu32 => compat(&[0x004F]),
    0xFF30u32 => compat(&[0x0050]),
    0xFF31u32 => compat(&[0x0051]),
    0xFF32u32 => compat(&[0x0052]),
    0xFF33u32 => compat(&[0x0053]),
    0xFF34u32 => compat(&[0x0054]),
    0xFF35u32 => compat(&[0x0055]),
    0xFF36u32 => compat(&[0x0056]),
    0xFF37u32 => compat(&[0x0057]),
    0xFF38u32 => compat(&[0x0058]),
    0xFF39u32 => compat(&[0x0059]),
    0xFF3Au32 => compat(&[0x005A]),
    0xFF3Bu32 => compat(&[0x005B]),
    0xFF3Cu32 => compat(&[0x005C]),
    0xFF3Du32 => compat(&[0x005D]),
    0xFF3Eu32 => compat(&[0x005E]),
    0xFF3Fu32 => compat(&[0x005F]),
    0xFF40u32 => compat(&[0x0060]),
    0xFF41u32 => compat(&[0x0061]),
    0xFF42u32 => compat(&[0x0062]),
    0xFF43u32 => compat(&[0x0063]),
    0xFF44u32 => compat(&[0x0064]),
    0xFF45u32 => compat(&[0x0065]),
    0xFF46u32 => compat(&[0x0066]),
    0xFF47u32 => compat(&[0x0067]),
    0xFF48u32 => compat(&[0x0068]),
    0xFF49u32 => compat(&[0x0069]),
    0xFF4Au32 => compat(&[0x006A]),
    0xFF4Bu32 => compat(&[0x006B]),
    0xFF4Cu32 => compat(&[0x006C]),
    0xFF4Du32 => compat(&[0x006D]),
    0xFF4Eu32 => compat(&[0x006E]),
    0xFF4Fu32 => compat(&[0x006F]),
    0xFF50u32 => compat(&[0x0070]),
    0xFF51u32 => compat(&[0x0071]),
    0xFF52u32 => compat(&[0x0072]),
    0xFF53u32 => compat(&[0x0073]),
    0xFF54u32 => compat(&[0x0074]),
    0xFF55u32 => compat(&[0x0075]),
    0xFF56u32 => compat(&[0x0076]),
    0xFF57u32 => compat(&[0x0077]),
    0xFF58u32 => compat(&[0x0078]),
    0xFF59u32 => compat(&[0x0079]),
    0xFF5Au32 => compat(&[0x007A]),
    0xFF5Bu32 => compat(&[0x007B]),
    0xFF5Cu32 => compat(&[0x007C]),
    0xFF5Du32 => compat(&[0x007D]),
    0xFF5Eu32 => compat(&[0x007E]),
    0xFF5Fu32 => compat(&[0x2985]),
    0xFF60u32 => compat(&[0x2986]),
    0xFF61u32 => compat(&[0x3002]),
    0xFF62u32 => compat(&[0x300C]),
    0xFF63u32 => compat(&[0x300D]),
    0xFF64u32 => compat(&[0x3001]),
    0xFF65u32 => compat(&[0x30FB]),
    0xFF66u32 => compat(&[0x30F2]),
    0xFF67u32 => compat(&[0x30A1]),
    0xFF68u32 => compat(&[0x30A3]),
    0xFF69u32 => compat(&[0x30A5]),
    0xFF6Au32 => compat(&[0x30A7]),
    0xFF6Bu32 => compat(&[0x30A9]),
    0xFF6Cu32 => compat(&[0x30E3]),
    0xFF6Du32 => compat(&[0x30E5]),
    0xFF6Eu32 => compat(&[0x30E7]),
    0xFF6Fu32 => compat(&[0x30C3]),
    0xFF70u32 => compat(&[0x30FC]),
    0xFF71u32 => compat(&[0x30A2]),
    0xFF72u32 => compat(&[0x30A4]),
    0xFF73u32 => compat(&[0x30A6]),
    0xFF74u32 => compat(&[0x30A8]),
    0xFF75u32 => compat(&[0x30AA]),
    0xFF76u32 => compat(&[0x30AB]),
    0xFF77u32 => compat(&[0x30AD]),
    0xFF78u32 => compat(&[0x30AF]),
    0xFF79u32 => compat(&[0x30B1]),
    0xFF7Au32 => compat(&[0x30B3]),
    0xFF7Bu32 => compat(&[0x30B5]),
    0xFF7Cu32 => compat(&[0x30B7]),
    0xFF7Du32 => compat(&[0x30B9]),
    0xFF7Eu32 => compat(&[0x30BB]),
    0xFF7Fu32 => compat(&[0x30BD]),
    0xFF80u32 => compat(&[0x30BF]),
    0xFF81u32 => compat(&[0x30C1]),
    0xFF82u32 => compat(&[0x30C4]),
    0xFF83u32 => compat(&[0x30C6]),
    0xFF84u32 => compat(&[0x30C8]),
    0xFF85u32 => compat(&[0x30CA]),
    0xFF86u32 => compat(&[0x30CB]),
    0xFF87u32 => compat(&[0x30CC]),
    0xFF88u32 => compat(&[0x30CD]),
    0xFF89u32 => compat(&[0x30CE]),
    0xFF8Au32 => compat(&[0x30CF]),
    0xFF8Bu32 => compat(&[0x30D2]),
    0xFF8Cu32 => compat(&[0x30D5]),
    0xFF8Du32 => compat(&[0x30D8]),
    0xFF8Eu32 => compat(&[0x30DB]),
    0xFF8Fu32 => compat(&[0x30DE]),
    0xFF90u32 => compat(&[0x30DF]),
    0xFF91u32 => compat(&[0x30E0]),
    0xFF92u32 => compat(&[0x30E1]),
    0xFF93u32 => compat(&[0x30E2]),
    0xFF94u32 => compat(&[0x30E4]),
    0xFF95u32 => compat(&[0x30E6]),
    0xFF96u32 => compat(&[0x30E8]),
    0xFF97u32 => compat(&[0x30E9]),
    0xFF98u32 => compat(&[0x30EA]),
    0xFF99u32 => compat(&[0x30EB]),
    0xFF9Au32 => compat(&[0x30EC]),
    0xFF9Bu32 => compat(&[0x30ED]),
    0xFF9Cu32 => compat(&[0x30EF]),
    0xFF9Du32 => compat(&[0x30F3]),
    0xFF9Eu32 => compat(&[0x3099]),
    0xFF9Fu32 => compat(&[0x309A]),
    0xFFA0u32 => compat(&[0x3164]),
    0xFFA1u32 => compat(&[0x3131]),
    0xFFA2u32 => compat(&[0x3132]),
    0xFFA3u32 => compat(&[0x3133]),
    0xFFA4u32 => compat(&[0x3134]),
    0xFFA5u32 => compat(&[0x3135]),
    0xFFA6u32 => compat(&[0x3136]),
    0xFFA7u32 => compat(&[0x3137]),
    0xFFA8u32 => compat(&[0x3138]),
    0xFFA9u32 => compat(&[0x3139]),
    0xFFAAu32 => compat(&[0x313A]),
    0xFFABu32 => compat(&[0x313B]),
    0xFFACu32 => compat(&[0x313C]),
    0xFFADu32 => compat(&[0x313D]),
    0xFFAEu32 => compat(&[0x313E]),
    0xFFAFu32 => compat(&[0x313F]),
    0xFFB0u32 => compat(&[0x3140]),
    0xFFB1u32 => compat(&[0x3141]),
    0xFFB2u32 => compat(&[0x3142]),
    0xFFB3u32 => compat(&[0x3143]),
    0xFFB4u32 => compat(&[0x3144]),
    0xFFB5u32 => compat(&[0x3145]),
    0xFFB6u32 => compat(&[0x3146]),
    0xFFB7u32 => compat(&[0x3147]),
    0xFFB8u32 => compat(&[0x3148]),
    0xFFB9u32 => compat(&[0x3149]),
    0xFFBAu32 => compat(&[0x314A]),
    0xFFBBu32 => compat(&[0x314B]),
    0xFFBCu32 => compat(&[0x314C]),
    0xFFBDu32 => compat(&[0x314D]),
    0xFFBEu32 => compat(&[0x314E]),
    0xFFC2u32 => compat(&[0x314F]),
    0xFFC3u32 => compat(&[0x3150]),
    0xFFC4u32 => compat(&[0x3151]),
    0xFFC5u32 => compat(&[0x3152]),
    0xFFC6u32 => compat(&[0x3153]),
    0xFFC7u32 => compat(&[0x3154]),
    0xFFCAu32 => compat(&[0x3155]),
    0xFFCBu32 => compat(&[0x3156]),
    0xFFCCu32 => compat(&[0x3157]),
    0xFFCDu32 => compat(&[0x3158]),
    0xFFCEu32 => compat(&[0x3159]),
    0xFFCFu32 => compat(&[0x315A]),
    0xFFD2u32 => compat(&[0x315B]),
    0xFFD3u32 => compat(&[0x315C]),
    0xFFD4u32 => compat(&[0x315D]),
    0xFFD5u32 => compat(&[0x315E]),
    0xFFD6u32 => compat(&[0x315F]),
    0xFFD7u32 => compat(&[0x3160]),
    0xFFDAu32 => compat(&[0x3161]),
    0xFFDBu32 => compat(&[0x3162]),
    0xFFDCu32 => compat(&[0x3163]),
    0xFFE0u32 => compat(&[0x00A2]),
    0xFFE1u32 => compat(&[0x00A3]),
    0xFFE2u32 => compat(&[0x00AC]),
    0xFFE3u32 => compat(&[0x00AF]),
    0xFFE4u32 => compat(&[0x00A6]),
    0xFFE5u32 => compat(&[0x00A5]),
    0xFFE6u32 => compat(&[0x20A9]),
    0xFFE8u32 => compat(&[0x2502]),
    0xFFE9u32 => compat(&[0x2190]),
    0xFFEAu32 => compat(&[0x2191]),
    0xFFEBu32 => compat(&[0x2192]),
    0xFFECu32 => compat(&[0x2193]),
    0xFFEDu32 => compat(&[0x25A0]),
    0xFFEEu32 => compat(&[0x25CB]),
    0x10781u32 => compat(&[0x02D0]),
    0x10782u32 => compat(&[0x02D1]),
    0x10783u32 => compat(&[0x00E6]),
    0x10784u32 => compat(&[0x0299]),
    0x10785u32 => compat(&[0x0253]),
    0x10787u32 => compat(&[0x02A3]),
    0x10788u32 => compat(&[0xAB66]),
    0x10789u32 => compat(&[0x02A5]),
    0x1078Au32 => compat(&[0x02A4]),
    0x1078Bu32 => compat(&[0x0256]),
    0x1078Cu32 => compat(&[0x0257]),
    0x1078Du32 => compat(&[0x1D91]),
    0x1078Eu32 => compat(&[0x0258]),
    0x1078Fu32 => compat(&[0x025E]),
    0x10790u32 => compat(&[0x02A9]),
    0x10791u32 => compat(&[0x0264]),
    0x10792u32 => compat(&[0x0262]),
    0x10793u32 => compat(&[0x0260]),
    0x10794u32 => compat(&[0x029B]),
    0x10795u32 => compat(&[0x0127]),
    0x10796u32 => compat(&[0x029C]),
    0x10797u32 => compat(&[0x0267]),
    0x10798u32 => compat(&[0x0284]),
    0x10799u32 => compat(&[0x02AA]),
    0x1079Au32 => compat(&[0x02AB]),
    0x1079Bu32 => compat(&[0x026C]),
    0x1079Cu32 => compat(&[0x1DF04]),
    0x1079Du32 => compat(&[0xA78E]),
    0x1079Eu32 => compat(&[0x026E]),
    0x1079Fu32 => compat(&[0x1DF05]),
    0x107A0u32 => compat(&[0x028E]),
    0x107A1u32 => compat(&[0x1DF06]),
    0x107A2u32 => compat(&[0x00F8]),
    0x107A3u32 => compat(&[0x0276]),
    0x107A4u32 => compat(&[0x0277]),
    0x107A5u32 => compat(&[0x0071]),
    0x107A6u32 => compat(&[0x027A]),
    0x107A7u32 => compat(&[0x1DF08]),
    0x107A8u32 => compat(&[0x027D]),
    0x107A9u32 => compat(&[0x027E]),
    0x107AAu32 => compat(&[0x0280]),
    0x107ABu32 => compat(&[0x02A8]),
    0x107ACu32 => compat(&[0x02A6]),
    0x107ADu32 => compat(&[0xAB67]),
    0x107AEu32 => compat(&[0x02A7]),
    0x107AFu32 => compat(&[0x0288]),
    0x107B0u32 => compat(&[0x2C71]),
    0x107B2u32 => compat(&[0x028F]),
    0x107B3u32 => compat(&[0x02A1]),
    0x107B4u32 => compat(&[0x02A2]),
    0x107B5u32 => compat(&[0x0298]),
    0x107B6u32 => compat(&[0x01C0]),
    0x107B7u32 => compat(&[0x01C1]),
    0x107B8u32 => compat(&[0x01C2]),
    0x107B9u32 => compat(&[0x1DF0A]),
    0x107BAu32 => compat(&[0x1DF1E]),
    0x1109Au32 => canonical(&[0x11099, 0x110BA]),
    0x1109Cu32 => canonical(&[0x1109B, 0x110BA]),
    0x110ABu32 => canonical(&[0x110A5, 0x110BA]),
    0x1112Eu32 => canonical(&[0x11131, 0x11127]),
    0x1112Fu32 => canonical(&[0x11132, 0x11127]),
    0x1134Bu32 => canonical(&[0x11347, 0x1133E]),
    0x1134Cu32 => canonical(&[0x11347, 0x11357]),
    0x114BBu32 => canonical(&[0x114B9, 0x114BA]),
    0x114BCu32 => canonical(&[0x114B9, 0x114B0]),
    0x114BEu32 => canonical(&[0x114B9, 0x114BD]),
    0x115BAu32 => canonical(&[0x115B8, 0x115AF]),
    0x115BBu32 => canonical(&[0x115B9, 0x115AF]),
    0x11938u32 => canonical(&[0x11935, 0x11930]),
    0x1D15Eu32 => canonical(&[0x1D157, 0x1D165]),
    0x1D15Fu32 => canonical(&[0x1D158, 0x1D165]),
    0x1D160u32 => canonical(&[0x1D15F, 0x1D16E]),
    0x1D161u32 => canonical(&[0x1D15F, 0x1D16F]),
    0x1D162u32 => canonical(&[0x1D15F, 0x1D170]),
    0x1D163u32 => canonical(&[0x1D15F, 0x1D171]),
    0x1D164u32 => canonical(&[0x1D15F, 0x1D172]),
    0x1D1BBu32 => canonical(&[0x1D1B9, 0x1D165]),
    0x1D1BCu32 => canonical(&[0x1D1BA, 0x1D165]),
    0x1D1BDu32 => canonical(&[0x1D1BB, 0x1D16E]),
    0x1D1BEu32 => canonical(&[0x1D1BC, 0x1D16E]),
    0x1D1BFu32 => canonical(&[0x1D1BB, 0x1D16F]),
    0x1D1C0u32 => canonical(&[0x1D1BC, 0x1D16F]),
    0x1D400u32 => compat(&[0x0041]),
    0x1D401u32 => compat(&[0x0042]),
    0x1D402u32 => compat(&[0x0043]),
    0x1D403u32 => compat(&[0x0044]),
    0x1D404u32 => compat(&[0x0045]),
    0x1D405u32 => compat(&[0x0046]),
    0x1D406u32 => compat(&[0x0047]),
    0x1D407u32 => compat(&[0x0048]),
    0x1D408u32 => compat(&[0x0049]),
    0x1D409u32 => compat(&[0x004A]),
    0x1D40Au32 => compat(&[0x004B]),
    0x1D40Bu32 => compat(&[0x004C]),
    0x1D40Cu32 => compat(&[0x004D]),
    0x1D40Du32 => compat(&[0x004E]),
    0x1D40Eu32 => compat(&[0x004F]),
    0x1D40Fu32 => compat(&[0x0050]),
    0x1D410u32 => compat(&[0x0051]),
    0x1D411u32 => compat(&[0x0052]),
    0x1D412u32 => compat(&[0x0053]),
    0x1D413u32 => compat(&[0x0054]),
    0x1D414u32 => compat(&[0x0055]),
    0x1D415u32 => compat(&[0x0056]),
    0x1D416u32 => compat(&[0x0057]),
    0x1D417u32 => compat(&[0x0058]),
    0x1D418u32 => compat(&[0x0059]),
    0x1D419u32 => compat(&[0x005A]),
    0x1D41Au32 => compat(&[0x0061]),
    0x1D41Bu32 => compat(&[0x0062]),
    0x1D41Cu32 => compat(&[0x0063]),
    0x1D41Du32 => compat(&[0x0064]),
    0x1D41Eu32 => compat(&[0x0065]),
    0x1D41Fu32 => compat(&[0x0066]),
    0x1D420u32 => compat(&[0x0067]),
    0x1D421u32 => compat(&[0x0068]),
    0x1D422u32 => compat(&[0x0069]),
    0x1D423u32 => compat(&[0x006A]),
    0x1D424u32 => compat(&[0x006B]),
    0x1D425u32 => compat(&[0x006C]),
    0x1D426u32 => compat(&[0x006D]),
    0x1D427u32 => compat(&[0x006E]),
    0x1D428u32 => compat(&[0x006F]),
    0x1D429u32 => compat(&[0x0070]),
    0x1D42Au32 => compat(&[0x0071]),
    0x1D42Bu32 => compat(&[0x0072]),
    0x1D42Cu32 => compat(&[0x0073]),
    0x1D42Du32 => compat(&[0x0074]),
    0x1D42Eu32 => compat(&[0x0075]),
    0x1D42Fu32 => compat(&[0x0076]),
    0x1D430u32 => compat(&[0x0077]),
    0x1D431u32 => compat(&[0x0078]),
    0x1D432u32 => compat(&[0x0079]),
    0x1D433u32 => compat(&[0x007A]),
    0x1D434u32 => compat(&[0x0041]),
    0x1D435u32 => compat(&[0x0042]),
    0x1D436u32 => compat(&[0x0043]),
    0x1D437u32 => compat(&[0x0044]),
    0x1D438u32 => compat(&[0x0045]),
    0x1D439u32 => compat(&[0x0046]),
    0x1D43Au32 => compat(&[0x0047]),
    0x1D43Bu32 => compat(&[0x0048]),
    0x1D43Cu32 => compat(&[0x0049]),
    0x1D43Du32 => compat(&[0x004A]),
    0x1D43Eu32 => compat(&[0x004B]),
    0x1D43Fu32 => compat(&[0x004C]),
    0x1D440u32 => compat(&[0x004D]),
    0x1D441u32 => compat(&[0x004E]),
    0x1D442u32 => compat(&[0x004F]),
    0x1D443u32 => compat(&[0x0050]),
    0x1D444u32 => compat(&[0x0051]),
    0x1D445u32 => compat(&[0x0052]),
    0x1D446u32 => compat(&[0x0053]),
    0x1D447u32 => compat(&[0x0054]),
    0x1D448u32 => compat(&[0x0055]),
    0x1D449u32 => compat(&[0x0056]),
    0x1D44Au32 => compat(&[0x0057]),
    0x1D44Bu32 => compat(&[0x0058]),
    0x1D44Cu32 => compat(&[0x0059]),
    0x1D44Du32 => compat(&[0x005A]),
    0x1D44Eu32 => compat(&[0x0061]),
    0x1D44Fu32 => compat(&[0x0062]),
    0x1D450u32 => compat(&[0x0063]),
    0x1D451u32 => compat(&[0x0064]),
    0x1D452u32 => compat(&[0x0065]),
    0x1D453u32 => compat(&[0x0066]),
    0x1D454u32 => compat(&[0x0067]),
    0x1D456u32 => compat(&[0x0069]),
    0x1D457u32 => compat(&[0x006A]),
    0x1D458u32 => compat(&[0x006B]),
    0x1D459u32 => compat(&[0x006C]),
    0x1D45Au32 => compat(&[0x006D]),
    0x1D45Bu32 => compat(&[0x006E]),
    0x1D45Cu32 => compat(&[0x006F]),
    0x1D45Du32 => compat(&[0x0070]),
    0x1D45Eu32 => compat(&[0x0071]),
    0x1D45Fu32 => compat(&[0x0072]),
    0x1D460u32 => compat(&[0x0073]),
    0x1D461u32 => compat(&[0x0074]),
    0x1D462u32 => compat(&[0x0075]),
    0x1D463u32 => compat(&[0x0076]),
    0x1D464u32 => compat(&[0x0077]),
    0x1D465u32 => compat(&[0x0078]),
    0x1D466u32 => compat(&[0x0079]),
    0x1D467u32 => compat(&[0x007A]),
    0x1D468u32 => compat(&[0x0041]),
    0x1D469u32 => compat(&[0x0042]),
    0x1D46Au32 => compat(&[0x0043]),
    0x1D46Bu32 => compat(&[0x0044]),
    0x1D46Cu32 => compat(&[0x0045]),
    0x1D46Du32 => compat(&[0x0046]),
    0x1D46Eu32 => compat(&[0x0047]),
    0x1D46Fu32 => compat(&[0x0048]),
    0x1D470u32 => compat(&[0x0049]),
    0x1D471u32 => compat(&[0x004A]),
    0x1D472u32 => compat(&[0x004B]),
    0x1D473u32 => compat(&[0x004C]),
    0x1D474u32 => compat(&[0x004D]),
    0x1D475u32 => compat(&[0x004E]),
    0x1D476u32 => compat(&[0x004F]),
    0x1D477u32 => compat(&[0x0050]),
    0x1D478u32 => compat(&[0x0051]),
    0x1D479u32 => compat(&[0x0052]),
    0x1D47Au32 => compat(&[0x0053]),
    0x1D47Bu32 => compat(&[0x0054]),
    0x1D47Cu32 => compat(&[0x0055]),
    0x1D47Du32 => compat(&[0x0056]),
    0x1D47Eu32 => compat(&[0x0057]),
    0x1D47Fu32 => compat(&[0x0058]),
    0x1D480u32 => compat(&[0x0059]),
    0x1D481u32 => compat(&[0x005A]),
    0x1D482u32 => compat(&[0x0061]),
    0x1D483u32 => compat(&[0x0062]),
    0x1D484u32 => compat(&[0x0063]),
    0x1D485u32 => compat(&[0x0064]),
    0x1D486u32 => compat(&[0x0065]),
    0x1D487u32 => compat(&[0x0066]),
    0x1D488u32 => compat(&[0x0067]),
    0x1D489u32 => compat(&[0x0068]),
    0x1D48Au32 => compat(&[0x0069]),
    0x1D48Bu32 => compat(&[0x006A]),
    0x1D48Cu32 => compat(&[0x006B]),
    0x1D48Du32 => compat(&[0x006C]),
    0x1D48Eu32 => compat(&[0x006D]),
    0x1D48Fu32 => compat(&[0x006E]),
    0x1D490u32 => compat(&[0x006F]),
    0x1D491u32 => compat(&[0x0070]),
    0x1D492u32 => compat(&[0x0071]),
    0x1D493u32 => compat(&[0x0072]),
    0x1D494u32 => compat(&[0x0073]),
    0x1D495u32 => compat(&[0x0074]),
    0x1D496u32 => compat(&[0x0075]),
    0x1D497u32 => compat(&[0x0076]),
    0x1D498u32 => compat(&[0x0077]),
    0x1D499u32 => compat(&[0x0078]),
    0x1D49Au32 => compat(&[0x0079]),
    0x1D49Bu32 => compat(&[0x007A]),
    0x1D49Cu32 => compat(&[0x0041]),
    0x1D49Eu32 => compat(&[0x0043]),
    0x1D49Fu32 => compat(&[0x0044]),
    0x1D4A2u32 => compat(&[0x0047]),
    0x1D4A5u32 => compat(&[0x004A]),
    0x1D4A6u32 => compat(&[0x004B]),
    0x1D4A9u32 => compat(&[0x004E]),
    0x1D4AAu32 => compat(&[0x004F]),
    0x1D4ABu32 => compat(&[0x0050]),
    0x1D4ACu32 => compat(&[0x0051]),
    0x1D4AEu32 => compat(&[0x0053]),
    0x1D4AFu32 => compat(&[0x0054]),
    0x1D4B0u32 => compat(&[0x0055]),
    0x1D4B1u32 => compat(&[0x0056]),
    0x1D4B2u32 => compat(&[0x0057]),
    0x1D4B3u32 => compat(&[0x0058]),
    0x1D4B4u32 => compat(&[0x0059]),
    0x1D4B5u32 => compat(&[0x005A]),
    0x1D4B6u32 => compat(&[0x0061]),
    0x1D4B7u32 => compat(&[0x0062]),
    0x1D4B8u32 => compat(&[0x0063]),
    0x1D4B9u32 => compat(&[0x0064]),
    0x1D4BBu32 => compat(&[0x0066]),
    0x1D4BDu32 => compat(&[0x0068]),
    0x1D4BEu32 => compat(&[0x0069]),
    0x1D4BFu32 => compat(&[0x006A]),
    0x1D4C0u32 => compat(&[0x006B]),
    0x1D4C1u32 => compat(&[0x006C]),
    0x1D4C2u32 => compat(&[0x006D]),
    0x1D4C3u32 => compat(&[0x006E]),
    0x1D4C5u32 => compat(&[0x0070]),
    0x1D4C6u32 => compat(&[0x0071]),
    0x1D4C7u32 => compat(&[0x0072]),
    0x1D4C8u32 => compat(&[0x0073]),
    0x1D4C9u32 => compat(&[0x0074]),
    0x1D4CAu32 => compat(&[0x0075]),
    0x1D4CBu32 => compat(&[0x0076]),
    0x1D4CCu32 => compat(&[0x0077]),
    0x1D4CDu32 => compat(&[0x0078]),
    0x1D4CEu32 => compat(&[0x0079]),
    0x1D4CFu32 => compat(&[0x007A]),
    0x1D4D0u32 => compat(&[0x0041]),
    0x1D4D1u32 => compat(&[0x0042]),
    0x1D4D2u32 => compat(&[0x0043]),
    0x1D4D3u32 => compat(&[0x0044]),
    0x1D4D4u32 => compat(&[0x0045]),
    0x1D4D5u32 => compat(&[0x0046]),
    0x1D4D6u32 => compat(&[0x0047]),
    0x1D4D7u32 => compat(&[0x0048]),
    0x1D4D8u32 => compat(&[0x0049]),
    0x1D4D9u32 => compat(&[0x004A]),
    0x1D4DAu32 => compat(&[0x004B]),
    0x1D4DBu32 => compat(&[0x004C]),
    0x1D4DCu32 => compat(&[0x004D]),
    0x1D4DDu32 => compat(&[0x004E]),
    0x1D4DEu32 => compat(&[0x004F]),
    0x1D4DFu32 => compat(&[0x0050]),
    0x1D4E0u32 => compat(&[0x0051]),
    0x1D4E1u32 => compat(&[0x0052]),
    0x1D4E2u32 => compat(&[0x0053]),
    0x1D4E3u32 => compat(&[0x0054]),
    0x1D4E4u32 => compat(&[0x0055]),
    0x1D4E5u32 => compat(&[0x0056]),
    0x1D4E6u32 => compat(&[0x0057]),
    0x1D4E7u32 => compat(&[0x0058]),
    0x1D4E8u32 => compat(&[0x0059]),
    0x1D4E9u32 => compat(&[0x005A]),
    0x1D4EAu32 => compat(&[0x0061]),
    0x1D4EBu32 => compat(&[0x0062]),
    0x1D4ECu32 => compat(&[0x0063]),
    0x1D4EDu32 => compat(&[0x0064]),
    0x1D4EEu32 => compat(&[0x0065]),
    0x1D4EFu32 => compat(&[0x0066]),
    0x1D4F0u32 => compat(&[0x0067]),
    0x1D4F1u32 => compat(&[0x0068]),
    0x1D4F2u32 => compat(&[0x0069]),
    0x1D4F3u32 => compat(&[0x006A]),
    0x1D4F4u32 => compat(&[0x006B]),
    0x1D4F5u32 => compat(&[0x006C]),
    0x1D4F6u32 => compat(&[0x006D]),
    0x1D4F7u32 => compat(&[0x006E]),
    0x1D4F8u32 => compat(&[0x006F]),
    0x1D4F9u32 => compat(&[0x0070]),
    0x1D4FAu32 => compat(&[0x0071]),
    0x1D4FBu32 => compat(&[0x0072]),
    0x1D4FCu32 => compat(&[0x0073]),
    0x1D4FDu32 => compat(&[0x0074]),
    0x1D4FEu32 => compat(&[0x0075]),
    0x1D4FFu32 => compat(&[0x0076]),
    0x1D500u32 => compat(&[0x0077]),
    0x1D501u32 => compat(&[0x0078]),
    0x1D502u32 => compat(&[0x0079]),
    0x1D503u32 => compat(&[0x007A]),
    0x1D504u32 => compat(&[0x0041]),
    0x1D505u32 => compat(&[0x0042]),
    0x1D507u32 => compat(&[0x0044]),
    0x1D508u32 => compat(&[0x0045]),
    0x1D509u32 => compat(&[0x0046]),
    0x1D50Au32 => compat(&[0x0047]),
    0x1D50Du32 => compat(&[0x004A]),
    0x1D50Eu32 => compat(&[0x004B]),
    0x1D50Fu32 => compat(&[0x004C]),
    0x1D510u32 => compat(&[0x004D]),
    0x1D511u32 => compat(&[0x004E]),
    0x1D512u32 => compat(&[0x004F]),
    0x1D513u32 => compat(&[0x0050]),
    0x1D514u32 => compat(&[0x0051]),
    0x1D516u32 => compat(&[0x0053]),
    0x1D517u32 => compat(&[0x0054]),
    0x1D518u32 => compat(&[0x0055]),
    0x1D519u32 => compat(&[0x0056]),
    0x1D51Au32 => compat(&[0x0057]),
    0x1D51Bu32 => compat(&[0x0058]),
    0x1D51Cu32 => compat(&[0x0059]),
    0x1D51Eu32 => compat(&[0x0061]),
    0x1D51Fu32 => compat(&[0x0062]),
    0x1D520u32 => compat(&[0x0063]),
    0x1D521u32 => compat(&[0x0064]),
    0x1D522u32 => compat(&[0x0065]),
    0x1D523u32 => compat(&[0x0066]),
    0x1D524u32 => compat(&[0x0067]),
    0x1D525u32 => compat(&[0x0068]),
    0x1D526u32 => compat(&[0x0069]),
    0x1D527u32 => compat(&[0x006A]),
    0x1D528u32 => compat(&[0x006B]),
    0x1D529u32 => compat(&[0x006C]),
    0x1D52Au32 => compat(&[0x006D]),
    0x1D52Bu32 => compat(&[0x006E]),
    0x1D52Cu32 => compat(&[0x006F]),
    0x1D52Du32 => compat(&[0x0070]),
    0x1D52Eu32 => compat(&[0x0071]),
    0x1D52Fu32 => compat(&[0x0072]),
    0x1D530u32 => compat(&[0x0073]),
    0x1D531u32 => compat(&[0x0074]),
    0x1D532u32 => compat(&[0x0075]),
    0x1D533u32 => compat(&[0x0076]),
    0x1D534u32 => compat(&[0x0077]),
    0x1D535u32 => compat(&[0x0078]),
    0x1D536u32 => compat(&[0x0079]),
    0x1D537u32 => compat(&[0x007A]),
    0x1D538u32 => compat(&[0x0041]),
    0x1D539u32 => compat(&[0x0042]),
    0x1D53Bu32 => compat(&[0x0044]),
    0x1D53Cu32 => compat(&[0x0045]),
    0x1D53Du32 => compat(&[0x0046]),
    0x1D53Eu32 => compat(&[0x0047]),
    0x1D540u32 => compat(&[0x0049]),
    0x1D541u32 => compat(&[0x004A]),
    0x1D542u32 => compat(&[0x004B]),
    0x1D543u32 => compat(&[0x004C]),
    0x1D544u32 => compat(&[0x004D]),
    0x1D546u32 => compat(&[0x004F]),
    0x1D54Au32 => compat(&[0x0053]),
    0x1D54Bu32 => compat(&[0x0054]),
    0x1D54Cu32 => compat(&[0x0055]),
    0x1D54Du32 => compat(&[0x0056]),
    0x1D54Eu32 => compat(&[0x0057]),
    0x1D54Fu32 => compat(&[0x0058]),
    0x1D550u32 => compat(&[0x0059]),
    0x1D552u32 => compat(&[0x0061]),
    0x1D553u32 => compat(&[0x0062]),
    0x1D554u32 => compat(&[0x0063]),
    0x1D555u32 => compat(&[0x0064]),
    0x1D556u32 => compat(&[0x0065]),
    0x1D557u32 => compat(&[0x0066]),
    0x1D558u32 => compat(&[0x0067]),
    0x1D559u32 => compat(&[0x0068]),
    0x1D55Au32 => compat(&[0x0069]),
    0x1D55Bu32 => compat(&[0x006A]),
    0x1D55Cu32 => compat(&[0x006B]),
    0x1D55Du32 => compat(&[0x006C]),
    0x1D55Eu32 => compat(&[0x006D]),
    0x1D55Fu32 => compat(&[0x006E]),
    0x1D560u32 => compat(&[0x006F]),
    0x1D561u32 => compat(&[0x0070]),
    0x1D562u32 => compat(&[0x0071]),
    0x1D563u32 => compat(&[0x0072]),
    0x1D564u32 => compat(&[0x0073]),
    0x1D565u32 => compat(&[0x0074]),
    0x1D566u32 => compat(&[0x0075]),
    0x1D567u32 => compat(&[0x0076]),
    0x1D568u32 => compat(&[0x0077]),
    0x1D569u32 => compat(&[0x0078]),
    0x1D56Au32 => compat(&[0x0079]),
    0x1D56Bu32 => compat(&[0x007A]),
    0x1D56Cu32 => compat(&[0x0041]),
    0x1D56Du32 => compat(&[0x0042]),
    0x1D56Eu32 => compat(&[0x0043]),
    0x1D56Fu32 => compat(&[0x0044]),
    0x1D570u32 => compat(&[0x0045]),
    0x1D571u32 => compat(&[0x0046]),
    0x1D572u32 => compat(&[0x0047]),
    0x1D573u32 => compat(&[0x0048]),
    0x1D574u32 => compat(&[0x0049]),
    0x1D575u32 => compat(&[0x004A]),
    0x1D576u32 => compat(&[0x004B]),
    0x1D577u32 => compat(&[0x004C]),
    0x1D578u32 => compat(&[0x004D]),
    0x1D579u32 => compat(&[0x004E]),
    0x1D57Au32 => compat(&[0x004F]),
    0x1D57Bu32 => compat(&[0x0050]),
    0x1D57Cu32 => compat(&[0x0051]),
    0x1D57Du32 => compat(&[0x0052]),
    0x1D57Eu32 => compat(&[0x0053]),
    0x1D57Fu32 => compat(&[0x0054]),
    0x1D580u32 => compat(&[0x0055]),
    0x1D581u32 => compat(&[0x0056]),
    0x1D582u32 => compat(&[0x0057]),
    0x1D583u32 => compat(&[0x0058]),
    0x1D584u32 => compat(&[0x0059]),
    0x1D585u32 => compat(&[0x005A]),
    0x1D586u32 => compat(&[0x0061]),
    0x1D587u32 => compat(&[0x0062]),
    0x1D588u32 => compat(&[0x0063]),
    0x1D589u32 => compat(&[0x0064]),
    0x1D58Au32 => compat(&[0x0065]),
    0x1D58Bu32 => compat(&[0x0066]),
    0x1D58Cu32 => compat(&[0x0067]),
    0x1D58Du32 => compat(&[0x0068]),
    0x1D58Eu32 => compat(&[0x0069]),
    0x1D58Fu32 => compat(&[0x006A]),
    0x1D590u32 => compat(&[0x006B]),
    0x1D591u32 => compat(&[0x006C]),
    0x1D592u32 => compat(&[0x006D]),
    0x1D593u32 => compat(&[0x006E]),
    0x1D594u32 => compat(&[0x006F]),
    0x1D595u32 => compat(&[0x0070]),
    0x1D596u32 => compat(&[0x0071]),
    0x1D597u32 => compat(&[0x0072]),
    0x1D598u32 => compat(&[0x0073]),
    0x1D599u32 => compat(&[0x0074]),
    0x1D59Au32 => compat(&[0x0075]),
    0x1D59Bu32 => compat(&[0x0076]),
    0x1D59Cu32 => compat(&[0x0077]),
    0x1D59Du32 => compat(&[0x0078]),
    0x1D59Eu32 => compat(&[0x0079]),
    0x1D59Fu32 => compat(&[0x007A]),
    0x1D5A0u32 => compat(&[0x0041]),
    0x1D5A1u32 => compat(&[0x0042]),
    0x1D5A2u32 => compat(&[0x0043]),
    0x1D5A3u32 => compat(&[0x0044]),
    0x1D5A4u32 => compat(&[0x0045]),
    0x1D5A5u32 => compat(&[0x0046]),
    0x1D5A6u32 => compat(&[0x0047]),
    0x1D5A7u32 => compat(&[0x0048]),
    0x1D5A8u32 => compat(&[0x0049]),
    0x1D5A9u32 => compat(&[0x004A]),
    0x1D5AAu32 => compat(&[0x004B]),
    0x1D5ABu32 => compat(&[0x004C]),
    0x1D5ACu32 => compat(&[0x004D]),
    0x1D5ADu32 => compat(&[0x004E]),
    0x1D5AEu32 => compat(&[0x004F]),
    0x1D5AFu32 => compat(&[0x0050]),
    0x1D5B0u32 => compat(&[0x0051]),
    0x1D5B1u32 => compat(&[0x0052]),
    0x1D5B2u32 => compat(&[0x0053]),
    0x1D5B3u32 => compat(&[0x0054]),
    0x1D5B4u32 => compat(&[0x0055]),
    0x1D5B5u32 => compat(&[0x0056]),
    0x1D5B6u32 => compat(&[0x0057]),
    0x1D5B7u32 => compat(&[0x0058]),
    0x1D5B8u32 => compat(&[0x0059]),
    0x1D5B9u32 => compat(&[0x005A]),
    0x1D5BAu32 => compat(&[0x0061]),
    0x1D5BBu32 => compat(&[0x0062]),
    0x1D5BCu32 => compat(&[0x0063]),
    0x1D5BDu32 => compat(&[0x0064]),
    0x1D5BEu32 => compat(&[0x0065]),
    0x1D5BFu32 => compat(&[0x0066]),
    0x1D5C0u32 => compat(&[0x0067]),
    0x1D5C1u32 => compat(&[0x0068]),
    0x1D5C2u32 => compat(&[0x0069]),
    0x1D5C3u32 => compat(&[0x006A]),
    0x1D5C4u32 => compat(&[0x006B]),
    0x1D5C5u32 => compat(&[0x006C]),
    0x1D5C6u32 => compat(&[0x006D]),
    0x1D5C7u32 => compat(&[0x006E]),
    0x1D5C8u32 => compat(&[0x006F]),
    0x1D5C9u32 => compat(&[0x0070]),
    0x1D5CAu32 => compat(&[0x0071]),
    0x1D5CBu32 => compat(&[0x0072]),
    0x1D5CCu32 => compat(&[0x0073]),
    0x1D5CDu32 => compat(&[0x0074]),
    0x1D5CEu32 => compat(&[0x0075]),
    0x1D5CFu32 => compat(&[0x0076]),
    0x1D5D0u32 => compat(&[0x0077]),
    0x1D5D1u32 => compat(&[0x0078]),
    0x1D5D2u32 => compat(&[0x0079]),
    0x1D5D3u32 => compat(&[0x007A]),
    0x1D5D4u32 => compat(&[0x0041]),
    0x1D5D5u32 => compat(&[0x0042]),
    0x1D5D6u32 => compat(&[0x0043]),
    0x1D5D7u32 => compat(&[0x0044]),
    0x1D5D8u32 => compat(&[0x0045]),
    0x1D5D9u32 => compat(&[0x0046]),
    0x1D5DAu32 => compat(&[0x0047]),
    0x1D5DBu32 => compat(&[0x0048]),
    0x1D5DCu32 => compat(&[0x0049]),
    0x1D5DDu32 => compat(&[0x004A]),
    0x1D5DEu32 => compat(&[0x004B]),
    0x1D5DFu32 => compat(&[0x004C]),
    0x1D5E0u32 => compat(&[0x004D]),
    0x1D5E1u32 => compat(&[0x004E]),
    0x1D5E2u32 => compat(&[0x004F]),
    0x1D5E3u32 => compat(&[0x0050]),
    0x1D5E4u32 => compat(&[0x0051]),
    0x1D5E5u32 => compat(&[0x0052]),
    0x1D5E6u32 => compat(&[0x0053]),
    0x1D5E7u32 => compat(&[0x0054]),
    0x1D5E8u32 => compat(&[0x0055]),
    0x1D5E9u32 => compat(&[0x0056]),
    0x1D5EAu32 => compat(&[0x0057]),
    0x1D5EBu32 => compat(&[0x0058]),
    0x1D5ECu32 => compat(&[0x0059]),
    0x1D5EDu32 => compat(&[0x005A]),
    0x1D5EEu32 => compat(&[0x0061]),
    0x1D5EFu32 => compat(&[0x0062]),
    0x1D5F0u32 => compat(&[0x0063]),
    0x1D5F1u32 => compat(&[0x0064]),
    0x1D5F2u32 => compat(&[0x0065]),
    0x1D5F3u32 => compat(&[0x0066]),
    0x1D5F4u32 => compat(&[0x0067]),
    0x1D5F5u32 => compat(&[0x0068]),
    0x1D5F6u32 => compat(&[0x0069]),
    0x1D5F7u32 => compat(&[0x006A]),
    0x1D5F8u32 => compat(&[0x006B]),
    0x1D5F9u32 => compat(&[0x006C]),
    0x1D5FAu32 => compat(&[0x006D]),
    0x1D5FBu32 => compat(&[0x006E]),
    0x1D5FCu32 => compat(&[0x006F]),
    0x1D5FDu32 => compat(&[0x0070]),
    0x1D5FEu32 => compat(&[0x0071]),
    0x1D5FFu32 => compat(&[0x0072]),
    0x1D600u32 => compat(&[0x0073]),
    0x1D601u32 => compat(&[0x0074]),
    0x1D602u32 => compat(&[0x0075]),
    0x1D603u32 => compat(&[0x0076]),
    0x1D604u32 => compat(&[0x0077]),
    0x1D605u32 => compat(&[0x0078]),
    0x1D606u32 => compat(&[0x0079]),
    0x1D607u32 => compat(&[0x007A]),
    0x1D608u32 => compat(&[0x0041]),
    0x1D609u32 => compat(&[0x0042]),
    0x1D60Au32 => compat(&[0x0043]),
    0x1D60Bu32 => compat(&[0x0044]),
    0x1D60Cu32 => compat(&[0x0045]),
    0x1D60Du32 => compat(&[0x0046]),
    0x1D60Eu32 => compat(&[0x0047]),
    0x1D60Fu32 => compat(&[0x0048]),
    0x1D610u32 => compat(&[0x0049]),
    0x1D611u32 => compat(&[0x004A]),
    0x1D612u32 => compat(&[0x004B]),
    0x1D613u32 => compat(&[0x004C]),
    0x1D614u32 => compat(&[0x004D]),
    0x1D615u32 => compat(&[0x004E]),
    0x1D616u32 => compat(&[0x004F]),
    0x1D617u32 => compat(&[0x0050]),
    0x1D618u32 => compat(&[0x0051]),
    0x1D619u32 => compat(&[0x0052]),
    0x1D61Au32 => compat(&[0x0053]),
    0x1D61Bu32 => compat(&[0x0054]),
    0x1D61Cu32 => compat(&[0x0055]),
    0x1D61Du32 => compat(&[0x0056]),
    0x1D61Eu32 => compat(&[0x0057]),
    0x1D61Fu32 => compat(&[0x0058]),
    0x1D620u32 => compat(&[0x0059]),
    0x1D621u32 => compat(&[0x005A]),
    0x1D622u32 => compat(&[0x0061]),
    0x1D623u32 => compat(&[0x0062]),
    0x1D624u32 => compat(&[0x0063]),
    0x1D625u32 => compat(&[0x0064]),
    0x1D626u32 => compat(&[0x0065]),
    0x1D627u32 => compat(&[0x0066]),
    0x1D628u32 => compat(&[0x0067]),
    0x1D629u32 => compat(&[0x0068]),
    0x1D62Au32 => compat(&[0x0069]),
    0x1D62Bu32 => compat(&[0x006A]),
    0x1D62Cu32 => compat(&[0x006B]),
    0x1D62Du32 => compat(&[0x006C]),
    0x1D62Eu32 => compat(&[0x006D]),
    0x1D62Fu32 => compat(&[0x006E]),
    0x1D630u32 => compat(&[0x006F]),
    0x1D631u32 => compat(&[0x0070]),
    0x1D632u32 => compat(&[0x0071]),
    0x1D633u32 => compat(&[0x0072]),
    0x1D634u32 => compat(&[0x0073]),
    0x1D635u32 => compat(&[0x0074]),
    0x1D636u32 => compat(&[0x0075]),
    0x1D637u32 => compat(&[0x0076]),
    0x1D638u32 => compat(&[0x0077]),
    0x1D639u32 => compat(&[0x0078]),
    0x1D63Au32 => compat(&[0x0079]),
    0x1D63Bu32 => compat(&[0x007A]),
    0x1D63Cu32 => compat(&[0x0041]),
    0x1D63Du32 => compat(&[0x0042]),
    0x1D63Eu32 => compat(&[0x0043]),
    0x1D63Fu32 => compat(&[0x0044]),
    0x1D640u32 => compat(&[0x0045]),
    0x1D641u32 => compat(&[0x0046]),
    0x1D642u32 => compat(&[0x0047]),
    0x1D643u32 => compat(&[0x0048]),
    0x1D644u32 => compat(&[0x0049]),
    0x1D645u32 => compat(&[0x004A]),
    0x1D646u32 => compat(&[0x004B]),
    0x1D647u32 => compat(&[0x004C]),
    0x1D648u32 => compat(&[0x004D]),
    0x1D649u32 => compat(&[0x004E]),
    0x1D64Au32 => compat(&[0x004F]),
    0x1D64Bu32 => compat(&[0x0050]),
    0x1D64Cu32 => compat(&[0x0051]),
    0x1D64Du32 => compat(&[0x0052]),
    0x1D64Eu32 => compat(&[0x0053]),
    0x1D64Fu32 => compat(&[0x0054]),
    0x1D650u32 => compat(&[0x0055]),
    0x1D651u32 => compat(&[0x0056]),
    0x1D652u32 => compat(&[0x0057]),
    0x1D653u32 => compat(&[0x0058]),
    0x1D654u32 => compat(&[0x0059]),
    0x1D655u32 => compat(&[0x005A]),
    0x1D656u32 => compat(&[0x0061]),
    0x1D657u32 => compat(&[0x0062]),
    0x1D658u32 => compat(&[0x0063]),
    0x1D659u32 => compat(&[0x0064]),
    0x1D65Au32 => compat(&[0x0065]),
    0x1D65Bu32 => compat(&[0x0066]),
    0x1D65Cu32 => compat(&[0x0067]),
    0x1D65Du32 => compat(&[0x0068]),
    0x1D65Eu32 => compat(&[0x0069]),
    0x1D65Fu32 => compat(&[0x006A]),
    0x1D660u32 => compat(&[0x006B]),
    0x1D661u32 => compat(&[0x006C]),
    0x1D662u32 => compat(&[0x006D]),
    0x1D663u32 => compat(&[0x006E]),
    0x1D664u32 => compat(&[0x006F]),
    0x1D665u32 => compat(&[0x0070]),
    0x1D666u32 => compat(&[0x0071]),
    0x1D667u32 => compat(&[0x0072]),
    0x1D668u32 => compat(&[0x0073]),
    0x1D669u32 => compat(&[0x0074]),
    0x1D66Au32 => compat(&[0x0075]),
    0x1D66Bu32 => compat(&[0x0076]),
    0x1D66Cu32 => compat(&[0x0077]),
    0x1D66Du32 => compat(&[0x0078]),
    0x1D66Eu32 => compat(&[0x0079]),
    0x1D66Fu32 => compat(&[0x007A]),
    0x1D670u32 => compat(&[0x0041]),
    0x1D671u32 => compat(&[0x0042]),
    0x1D672u32 => compat(&[0x0043]),
    0x1D673u32 => compat(&[0x0044]),
    0x1D674u32 => compat(&[0x0045]),
    0x1D675u32 => compat(&[0x0046]),
    0x1D676u32 => compat(&[0x0047]),
    0x1D677u32 => compat(&[0x0048]),
    0x1D678u32 => compat(&[0x0049]),
    0x1D679u32 => compat(&[0x004A]),
    0x1D67Au32 => compat(&[0x004B]),
    0x1D67Bu32 => compat(&[0x004C]),
    0x1D67Cu32 => compat(&[0x004D]),
    0x1D67Du32 => compat(&[0x004E]),
    0x1D67Eu32 => compat(&[0x004F]),
    0x1D67Fu32 => compat(&[0x0050]),
    0x1D680u32 => compat(&[0x0051]),
    0x1D681u32 => compat(&[0x0052]),
    0x1D682u32 => compat(&[0x0053]),
    0x1D683u32 => compat(&[0x0054]),
    0x1D684u32 => compat(&[0x0055]),
    0x1D685u32 => compat(&[0x0056]),
    0x1D686u32 => compat(&[0x0057]),
    0x1D687u32 => compat(&[0x0058]),
    0x1D688u32 => compat(&[0x0059]),
    0x1D689u32 => compat(&[0x005A]),
    0x1D68Au32 => compat(&[0x0061]),
    0x1D68Bu32 => compat(&[0x0062]),
    0x1D68Cu32 => compat(&[0x0063]),
    0x1D68Du32 => compat(&[0x0064]),
    0x1D68Eu32 => compat(&[0x0065]),
    0x1D68Fu32 => compat(&[0x0066]),
    0x1D690u32 => compat(&[0x0067]),
    0x1D691u32 => compat(&[0x0068]),
    0x1D692u32 => compat(&[0x0069]),
    0x1D693u32 => compat(&[0x006A]),
    0x1D694u32 => compat(&[0x006B]),
    0x1D695u32 => compat(&[0x006C]),
    0x1D696u32 => compat(&[0x006D]),
    0x1D697u32 => compat(&[0x006E]),
    0x1D698u32 => compat(&[0x006F]),
    0x1D699u32 => compat(&[0x0070]),
    0x1D69Au32 => compat(&[0x0071]),
    0x1D69Bu32 => compat(&[0x0072]),
    0x1D69Cu32 => compat(&[0x0073]),
    0x1D69Du32 => compat(&[0x0074]),
    0x1D69Eu32 => compat(&[0x0075]),
    0x1D69Fu32 => compat(&[0x0076]),
    0x1D6A0u32 => compat(&[0x0077]),
    0x1D6A1u32 => compat(&[0x0078]),
    0x1D6A2u32 => compat(&[0x0079]),
    0x1D6A3u32 => compat(&[0x007A]),
    0x1D6A4u32 => compat(&[0x0131]),
    0x1D6A5u32 => compat(&[0x0237]),
    0x1D6A8u32 => compat(&[0x0391]),
    0x1D6A9u32 => compat(&[0x0392]),
    0x1D6AAu32 => compat(&[0x0393]),
    0x1D6ABu32 => compat(&[0x0394]),
    0x1D6ACu32 => compat(&[0x0395]),
    0x1D6ADu32 => compat(&[0x0396]),
    0x1D6AEu32 => compat(&[0x0397]),
    0x1D6AFu32 => compat(&[0x0398]),
    0x1D6B0u32 => compat(&[0x0399]),
    0x1D6B1u32 => compat(&[0x039A]),
    0x1D6B2u32 => compat(&[0x039B]),
    0x1D6B3u32 => compat(&[0x039C]),
    0x1D6B4u32 => compat(&[0x039D]),
    0x1D6B5u32 => compat(&[0x039E]),
    0x1D6B6u32 => compat(&[0x039F]),
    0x1D6B7u32 => compat(&[0x03A0]),
    0x1D6B8u32 => compat(&[0x03A1]),
    0x1D6B9u32 => compat(&[0x03F4]),
    0x1D6BAu32 => compat(&[0x03A3]),
    0x1D6BBu32 => compat(&[0x03A4]),
    0x1D6BCu32 => compat(&[0x03A5]),
    0x1D6BDu32 => compat(&[0x03A6]),
    0x1D6BEu32 => compat(&[0x03A7]),
    0x1D6BFu32 => compat(&[0x03A8]),
    0x1D6C0u32 => compat(&[0x03A9]),
    0x1D6C1u32 => compat(&[0x2207]),
    0x1D6C2u32 => compat(&[0x03B1]),
    0x1D6C3u32 => compat(&[0x03B2]),
    0x1D6C4u32 => compat(&[0x03B3]),
    0x1D6C5u32 => compat(&[0x03B4]),
    0x1D6C6u32 => compat(&[0x03B5]),
    0x1D6C7u32 => compat(&[0x03B6]),
    0x1D6C8u32 => compat(&[0x03B7]),
    0x1D6C9u32 => compat(&[0x03B8]),
    0x1D6CAu32 => compat(&[0x03B9]),
    0x1D6CBu32 => compat(&[0x03BA]),
    0x1D6CCu32 => compat(&[0x03BB]),
    0x1D6CDu32 => compat(&[0x03BC]),
    0x1D6CEu32 => compat(&[0x03BD]),
    0x1D6CFu32 => compat(&[0x03BE]),
    0x1D6D0u32 => compat(&[0x03BF]),
    0x1D6D1u32 => compat(&[0x03C0]),
    0x1D6D2u32 => compat(&[0x03C1]),
    0x1D6D3u32 => compat(&[0x03C2]),
    0x1D6D4u32 => compat(&[0x03C3]),
    0x1D6D5u32 => compat(&[0x03C4]),
    0x1D6D6u32 => compat(&[0x03C5]),
    0x1D6D7u32 => compat(&[0x03C6]),
    0x1D6D8u32 => compat(&[0x03C7]),
    0x1D6D9u32 => compat(&[0x03C8]),
    0x1D6DAu32 => compat(&[0x03C9]),
    0x1D6DBu32 => compat(&[0x2202]),
    0x1D6DCu32 => compat(&[0x03F5]),
    0x1D6DDu32 => compat(&[0x03D1]),
    0x1D6DEu32 => compat(&[0x03F0]),
    0x1D6DFu32 => compat(&[0x03D5]),
    0x1D6E0u32 => compat(&[0x03F1]),
    0x1D6E1u32 => compat(&[0x03D6]),
    0x1D6E2u32 => compat(&[0x0391]),
    0x1D6E3u32 => compat(&[0x0392]),
    0x1D6E4u32 => compat(&[0x0393]),
    0x1D6E5u32 => compat(&[0x0394]),
    0x1D6E6u32 => compat(&[0x0395]),
    0x1D6E7u32 => compat(&[0x0396]),
    0x1D6E8u32 => compat(&[0x0397]),
    0x1D6E9u32 => compat(&[0x0398]),
    0x1D6EAu32 => compat(&[0x0399]),
    0x1D6EBu32 => compat(&[0x039A]),
    0x1D6ECu32 => compat(&[0x039B]),
    0x1D6EDu32 => compat(&[0x039C]),
    0x1D6EEu32 => compat(&[0x039D]),
    0x1D6EFu32 => compat(&[0x039E]),
    0x1D6F0u32 => compat(&[0x039F]),
    0x1D6F1u32 => compat(&[0x03A0]),
    0x1D6F2u32 => compat(&[0x03A1]),
    0x1D6F3u32 => compat(&[0x03F4]),
    0x1D6F4u32 => compat(&[0x03A3]),
    0x1D6F5u32 => compat(&[0x03A4]),
    0x1D6F6u32 => compat(&[0x03A5]),
    0x1D6F7u32 => compat(&[0x03A6]),
    0x1D6F8u32 => compat(&[0x03A7]),
    0x1D6F9u32 => compat(&[0x03A8]),
    0x1D6FAu32 => compat(&[0x03A9]),
    0x1D6FBu32 => compat(&[0x2207]),
    0x1D6FCu32 => compat(&[0x03B1]),
    0x1D6FDu32 => compat(&[0x03B2]),
    0x1D6FEu32 => compat(&[0x03B3]),
    0x1D6FFu32 => compat(&[0x03B4]),
    0x1D700u32 => compat(&[0x03B5]),
    0x1D701u32 => compat(&[0x03B6]),
    0x1D702u32 => compat(&[0x03B7]),
    0x1D703u32 => compat(&[0x03B8]),
    0x1D704u32 => compat(&[0x03B9]),
    0x1D705u32 => compat(&[0x03BA]),
    0x1D706u32 => compat(&[0x03BB]),
    0x1D707u32 => compat(&[0x03BC]),
    0x1D708u32 => compat(&[0x03BD]),
    0x1D709u32 => compat(&[0x03BE]),
    0x1D70Au32 => compat(&[0x03BF]),
    0x1D70Bu32 => compat(&[0x03C0]),
    0x1D70Cu32 => compat(&[0x03C1]),
    0x1D70Du32 => compat(&[0x03C2]),
    0x1D70Eu32 => compat(&[0x03C3]),
    0x1D70Fu32 => compat(&[0x03C4]),
    0x1D710u32 => compat(&[0x03C5]),
    0x1D711u32 => compat(&[0x03C6]),
    0x1D712u32 => compat(&[0x03C7]),
    0x1D713u32 => compat(&[0x03C8]),
    0x1D714u32 => compat(&[0x03C9]),
    0x1D715u32 => compat(&[0x2202]),
    0x1D716u32 => compat(&[0x03F5]),
    0x1D717u32 => compat(&[0x03D1]),
    0x1D718u32 => compat(&[0x03F0]),
    0x1D719u32 => compat(&[0x03D5]),
    0x1D71Au32 => compat(&[0x03F1]),
    0x1D71Bu32 => compat(&[0x03D6]),
    0x1D71Cu32 => compat(&[0x0391]),
    0x1D71Du32 => compat(&[0x0392]),
    0x1D71Eu32 => compat(&[0x0393]),
    0x1D71Fu32 => compat(&[0x0394]),
    0x1D720u32 => compat(&[0x0395]),
    0x1D721u32 => compat(&[0x0396]),
    0x1D722u32 => compat(&[0x0397]),
    0x1D723u32 => compat(&[0x0398]),
    0x1D724u32 => compat(&[0x0399]),
    0x1D725u32 => compat(&[0x039A]),
    0x1D726u32 => compat(&[0x039B]),
    0x1D727u32 => compat(&[0x039C]),
    0x1D728u32 => compat(&[0x039D]),
    0x1D729u32 => compat(&[0x039E]),
    0x1D72Au32 => compat(&[0x039F]),
    0x1D72Bu32 => compat(&[0x03A0]),
    0x1D72Cu32 => compat(&[0x03A1]),
    0x1D72Du32 => compat(&[0x03F4]),
    0x1D72Eu32 => compat(&[0x03A3]),
    0x1D72Fu32 => compat(&[0x03A4]),
    0x1D730u32 => compat(&[0x03A5]),
    0x1D731u32 => compat(&[0x03A6]),
    0x1D732u32 => compat(&[0x03A7]),
    0x1D733u32 => compat(&[0x03A8]),
    0x1D734u32 => compat(&[0x03A9]),
    0x1D735u32 => compat(&[0x2207]),
    0x1D736u32 => compat(&[0x03B1]),
    0x1D737u32 => compat(&[0x03B2]),
    0x1D738u32 => compat(&[0x03B3]),
    0x1D739u32 => compat(&[0x03B4]),
    0x1D73Au32 => compat(&[0x03B5]),
    0x1D73Bu32 => compat(&[0x03B6]),
    0x1D73Cu32 => compat(&[0x03B7]),
    0x1D73Du32 => compat(&[0x03B8]),
    0x1D73Eu32 => compat(&[0x03B9]),
    0x1D73Fu32 => compat(&[0x03BA]),
    0x1D740u32 => compat(&[0x03BB]),
    0x1D741u32 => compat(&[0x03BC]),
    0x1D742u32 => compat(&[0x03BD]),
    0x1D743u32 => compat(&[0x03BE]),
    0x1D744u32 => compat(&[0x03BF]),
    0x1D745u32 => compat(&[0x03C0]),
    0x1D746u32 => compat(&[0x03C1]),
    0x1D747u32 => compat(&[0x03C2]),
    0x1D748u32 => compat(&[0x03C3]),
    0x1D749u32 => compat(&[0x03C4]),
    0x1D74Au32 => compat(&[0x03C5]),
    0x1D74Bu32 => compat(&[0x03C6]),
    0x1D74Cu32 => compat(&[0x03C7]),
    0x1D74Du32 => compat(&[0x03C8]),
    0x1D74Eu32 => compat(&[0x03C9]),
    0x1D74Fu32 => compat(&[0x2202]),
    0x1D750u32 => compat(&[0x03F5]),
    0x1D751u32 => compat(&[0x03D1]),
    0x1D752u32 => compat(&[0x03F0]),
    0x1D753u32 => compat(&[0x03D5]),
    0x1D754u32 => compat(&[0x03F1]),
    0x1D755u32 => compat(&[0x03D6]),
    0x1D756u32 => compat(&[0x0391]),
    0x1D757u32 => compat(&[0x0392]),
    0x1D758u32 => compat(&[0x0393]),
    0x1D759u32 => compat(&[0x0394]),
    0x1D75Au32 => compat(&[0x0395]),
    0x1D75Bu32 => compat(&[0x0396]),
    0x1D75Cu32 => compat(&[0x0397]),
    0x1D75Du32 => compat(&[0x0398]),
    0x1D75Eu32 => compat(&[0x0399]),
    0x1D75Fu32 => compat(&[0x039A]),
    0x1D760u32 => compat(&[0x039B]),
    0x1D761u32 => compat(&[0x039C]),
    0x1D762u32 => compat(&[0x039D]),
    0x1D763u32 => compat(&[0x039E]),
    0x1D764u32 => compat(&[0x039F]),
    0x1D765u32 => compat(&[0x03A0]),
    0x1D766u32 => compat(&[0x03A1]),
    0x1D767u32 => compat(&[0x03F4]),
    0x1D768u32 => compat(&[0x03A3]),
    0x1D769u32 => compat(&[0x03A4]),
    0x1D76Au32 => compat(&[0x03A5]),
    0x1D76Bu32 => compat(&[0x03A6]),
    0x1D76Cu32 => compat(&[0x03A7]),
    0x1D76Du32 => compat(&[0x03A8]),
    0x1D76Eu32 => compat(&[0x03A9]),
    0x1D76Fu32 => compat(&[0x2207]),
    0x1D770u32 => compat(&[0x03B1]),
    0x1D771u32 => compat(&[0x03B2]),
    0x1D772u32 => compat(&[0x03B3]),
    0x1D773u32 => compat(&[0x03B4]),
    0x1D774u32 => compat(&[0x03B5]),
    0x1D775u32 => compat(&[0x03B6]),
    0x1D776u32 => compat(&[0x03B7]),
    0x1D777u32 => compat(&[0x03B8]),
    0x1D778u32 => compat(&[0x03B9]),
    0x1D779u32 => compat(&[0x03BA]),
    0x1D77Au32 => compat(&[0x03BB]),
    0x1D77Bu32 => compat(&[0x03BC]),
    0x1D77Cu32 => compat(&[0x03BD]),
    0x1D77Du32 => compat(&[0x03BE]),
    0x1D77Eu32 => compat(&[0x03BF]),
    0x1D77Fu32 => compat(&[0x03C0]),
    0x1D780u32 => compat(&[0x03C1]),
    0x1D781u32 => compat(&[0x03C2]),
    0x1D782u32 => compat(&[0x03C3]),
    0x1D783u32 => compat(&[0x03C4]),
    0x1D784u32 => compat(&[0x03C5]),
    0x1D785u32 => compat(&[0x03C6]),
    0x1D786u32 => compat(&[0x03C7]),
    0x1D787u32 => compat(&[0x03C8]),
    0x1D788u32 => compat(&[0x03C9]),
    0x1D789u32 => compat(&[0x2202]),
    0x1D78Au32 => compat(&[0x03F5]),
    0x1D78Bu32 => compat(&[0x03D1]),
    0x1D78Cu32 => compat(&[0x03F0]),
    0x1D78Du32 => compat(&[0x03D5]),
    0x1D78Eu32 => compat(&[0x03F1]),
    0x1D78Fu32 => compat(&[0x03D6]),
    0x1D790u32 => compat(&[0x0391]),
    0x1D791u32 => compat(&[0x0392]),
    0x1D792u32 => compat(&[0x0393]),
    0x1D793u32 => compat(&[0x0394]),
    0x1D794u32 => compat(&[0x0395]),
    0x1D795u32 => compat(&[0x0396]),
    0x1D796u32 => compat(&[0x0397]),
    0x1D797u32 => compat(&[0x0398]),
    0x1D798u32 => compat(&[0x0399]),
    0x1D799u32 => compat(&[0x039A]),
    0x1D79Au32 => compat(&[0x039B]),
    0x1D79Bu32 => compat(&[0x039C]),
    0x1D79Cu32 => compat(&[0x039D]),
    0x1D79Du32 => compat(&[0x039E]),
    0x1D79Eu32 => compat(&[0x039F]),
    0x1D79Fu32 => compat(&[0x03A0]),
    0x1D7A0u32 => compat(&[0x03A1]),
    0x1D7A1u32 => compat(&[0x03F4]),
    0x1D7A2u32 => compat(&[0x03A3]),
    0x1D7A3u32 => compat(&[0x03A4]),
    0x1D7A4u32 => compat(&[0x03A5]),
    0x1D7A5u32 => compat(&[0x03A6]),
    0x1D7A6u32 => compat(&[0x03A7]),
    0x1D7A7u32 => compat(&[0x03A8]),
    0x1D7A8u32 => compat(&[0x03A9]),
    0x1D7A9u32 => compat(&[0x2207]),
    0x1D7AAu32 => compat(&[0x03B1]),
    0x1D7ABu32 => compat(&[0x03B2]),
    0x1D7ACu32 => compat(&[0x03B3]),
    0x1D7ADu32 => compat(&[0x03B4]),
    0x1D7AEu32 => compat(&[0x03B5]),
    0x1D7AFu32 => compat(&[0x03B6]),
    0x1D7B0u32 => compat(&[0x03B7]),
    0x1D7B1u32 => compat(&[0x03B8]),
    0x1D7B2u32 => compat(&[0x03B9]),
    0x1D7B3u32 => compat(&[0x03BA]),
    0x1D7B4u32 => compat(&[0x03BB]),
    0x1D7B5u32 => compat(&[0x03BC]),
    0x1D7B6u32 => compat(&[0x03BD]),
    0x1D7B7u32 => compat(&[0x03BE]),
    0x1D7B8u32 => compat(&[0x03BF]),
    0x1D7B9u32 => compat(&[0x03C0]),
    0x1D7BAu32 => compat(&[0x03C1]),
    0x1D7BBu32 => compat(&[0x03C2]),
    0x1D7BCu32 => compat(&[0x03C3]),
    0x1D7BDu32 => compat(&[0x03C4]),
    0x1D7BEu32 => compat(&[0x03C5]),
    0x1D7BFu32 => compat(&[0x03C6]),
    0x1D7C0u32 => compat(&[0x03C7]),
    0x1D7C1u32 => compat(&[0x03C8]),
    0x1D7C2u32 => compat(&[0x03C9]),
    0x1D7C3u32 => compat(&[0x2202]),
    0x1D7C4u32 => compat(&[0x03F5]),
    0x1D7C5u32 => compat(&[0x03D1]),
    0x1D7C6u32 => compat(&[0x03F0]),
    0x1D7C7u32 => compat(&[0x03D5]),
    0x1D7C8u32 => compat(&[0x03F1]),
    0x1D7C9u32 => compat(&[0x03D6]),
    0x1D7CAu32 => compat(&[0x03DC]),
    0x1D7CBu32 => compat(&[0x03DD]),
    0x1D7CEu32 => compat(&[0x0030]),
    0x1D7CFu32 => compat(&[0x0031]),
    0x1D7D0u32 => compat(&[0x0032]),
    0x1D7D1u32 => compat(&[0x0033]),
    0x1D7D2u32 => compat(&[0x0034]),
    0x1D7D3u32 => compat(&[0x0035]),
    0x1D7D4u32 => compat(&[0x0036]),
    0x1D7D5u32 => compat(&[0x0037]),
    0x1D7D6u32 => compat(&[0x0038]),
    0x1D7D7u32 => compat(&[0x0039]),
    0x1D7D8u32 => compat(&[0x0030]),
    0x1D7D9u32 => compat(&[0x0031]),
    0x1D7DAu32 => compat(&[0x0032]),
    0x1D7DBu32 => compat(&[0x0033]),
    0x1D7DCu32 => compat(&[0x0034]),
    0x1D7DDu32 => compat(&[0x0035]),
    0x1D7DEu32 => compat(&[0x0036]),
    0x1D7DFu32 => compat(&[0x0037]),
    0x1D7E0u32 => compat(&[0x0038]),
    0x1D7E1u32 => compat(&[0x0039]),
    0x1D7E2u32 => compat(&[0x0030]),
    0x1D7E3u32 => compat(&[0x0031]),
    0x1D7E4u32 => compat(&[0x0032]),
    0x1D7E5u32 => compat(&[0x0033]),
    0x1D7E6u32 => compat(&[0x0034]),
    0x1D7E7u32 => compat(&[0x0035]),
    0x1D7E8u32 => compat(&[0x0036]),
    0x1D7E9u32 => compat(&[0x0037]),
    0x1D7EAu32 => compat(&[0x0038]),
    0x1D7EBu32 => compat(&[0x0039]),
    0x1D7ECu32 => compat(&[0x0030]),
    0x1D7EDu32 => compat(&[0x0031]),
    0x1D7EEu32 => compat(&[0x0032]),
    0x1D7EFu32 => compat(&[0x0033]),
    0x1D7F0u32 => compat(&[0x0034]),
    0x1D7F1u32 => compat(&[0x0035]),
    0x1D7F2u32 => compat(&[0x0036]),
    0x1D7F3u32 => compat(&[0x0037]),
    0x1D7F4u32 => compat(&[0x0038]),
    0x1D7F5u32 => compat(&[0x0039]),
    0x1D7F6u32 => compat(&[0x0030]),
    0x1D7F7u32 => compat(&[0x0031]),
    0x1D7F8u32 => compat(&[0x0032]),
    0x1D7F9u32 => compat(&[0x0033]),
    0x1D7FAu32 => compat(&[0x0034]),
    0x1D7FBu32 => compat(&[0x0035]),
    0x1D7FCu32 => compat(&[0x0036]),
    0x1D7FDu32 => compat(&[0x0037]),
    0x1D7FEu32 => compat(&[0x0038]),
    0x1D7FFu32 => compat(&[0x0039]),
    0x1EE00u32 => compat(&[0x0627]),
    0x1EE01u32 => compat(&[0x0628]),
    0x1EE02u32 => compat(&[0x062C]),
    0x1EE03u32 => compat(&[0x062F]),
    0x1EE05u32 => compat(&[0x0648]),
    0x1EE06u32 => compat(&[0x0632]),
    0x1EE07u32 => compat(&[0x062D]),
    0x1EE08u32 => compat(&[0x0637]),
    0x1EE09u32 => compat(&[0x064A]),
    0x1EE0Au32 => compat(&[0x0643]),
    0x1EE0Bu32 => compat(&[0x0644]),
    0x1EE0Cu32 => compat(&[0x0645]),
    0x1EE0Du32 => compat(&[0x0646]),
    0x1EE0Eu32 => compat(&[0x0633]),
    0x1EE0Fu32 => compat(&[0x0639]),
    0x1EE10u32 => compat(&[0x0641]),
    0x1EE11u32 => compat(&[0x0635]),
    0x1EE12u32 => compat(&[0x0642]),
    0x1EE13u32 => compat(&[0x0631]),
    0x1EE14u32 => compat(&[0x0634]),
    0x1EE15u32 => compat(&[0x062A]),
    0x1EE16u32 => compat(&[0x062B]),
    0x1EE17u32 => compat(&[0x062E]),
    0x1EE18u32 => compat(&[0x0630]),
    0x1EE19u32 => compat(&[0x0636]),
    0x1EE1Au32 => compat(&[0x0638]),
    0x1EE1Bu32 => compat(&[0x063A]),
    0x1EE1Cu32 => compat(&[0x066E]),
    0x1EE1Du32 => compat(&[0x06BA]),
    0x1EE1Eu32 => compat(&[0x06A1]),
    0x1EE1Fu32 => compat(&[0x066F]),
    0x1EE21u32 => compat(&[0x0628]),
    0x1EE22u32 => compat(&[0x062C]),
    0x1EE24u32 => compat(&[0x0647]),
    0x1EE27u32 => compat(&[0x062D]),
    0x1EE29u32 => compat(&[0x064A]),
    0x1EE2Au32 => compat(&[0x0643]),
    0x1EE2Bu32 => compat(&[0x0644]),
    0x1EE2Cu32 => compat(&[0x0645]),
    0x1EE2Du32 => compat(&[0x0646]),
    0x1EE2Eu32 => compat(&[0x0633]),
    0x1EE2Fu32 => compat(&[0x0639]),
    0x1EE30u32 => compat(&[0x0641]),
    0x1EE31u32 => compat(&[0x0635]),
    0x1EE32u32 => compat(&[0x0642]),
    0x1EE34u32 => compat(&[0x0634]),
    0x1EE35u32 => compat(&[0x062A]),
    0x1EE36u32 => compat(&[0x062B]),
    0x1EE37u32 => compat(&[0x062E]),
    0x1EE39u32 => compat(&[0x0636]),
    0x1EE3Bu32 => compat(&[0x063A]),
    0x1EE42u32 => compat(&[0x062C]),
    0x1EE47u32 => compat(&[0x062D]),
    0x1EE49u32 => compat(&[0x064A]),
    0x1EE4Bu32 => compat(&[0x0644]),
    0x1EE4Du32 => compat(&[0x0646]),
    0x1EE4Eu32 => compat(&[0x0633]),
    0x1EE4Fu32 => compat(&[0x0639]),
    0x1EE51u32 => compat(&[0x0635]),
    0x1EE52u32 => compat(&[0x0642]),
    0x1EE54u32 => compat(&[0x0634]),
    0x1EE57u32 => compat(&[0x062E]),
    0x1EE59u32 => compat(&[0x0636]),
    0x1EE5Bu32 => compat(&[0x063A]),
    0x1EE5Du32 => compat(&[0x06BA]),
    0x1EE5Fu32 => compat(&[0x066F]),
    0x1EE61u32 => compat(&[0x0628]),
    0x1EE62u32 => compat(&[0x062C]),
    0x1EE64u32 => compat(&[0x0647]),
    0x1EE67u32 => compat(&[0x062D]),
    0x1EE68u32 => compat(&[0x0637]),
    0x1EE69u32 => compat(&[0x064A]),
    0x1EE6Au32 => compat(&[0x0643]),
    0x1EE6Cu32 => compat(&[0x0645]),
    0x1EE6Du32 => compat(&[0x0646]),
    0x1EE6Eu32 => compat(&[0x0633]),
    0x1EE6Fu32 => compat(&[0x0639]),
    0x1EE70u32 => compat(&[0x0641]),
    0x1EE71u32 => compat(&[0x0635]),
    0x1EE72u32 => compat(&[0x0642]),
    0x1EE74u32 => compat(&[0x0634]),
    0x1EE75u32 => compat(&[0x062A]),
    0x1EE76u32 => compat(&[0x062B]),
    0x1EE77u32 => compat(&[0x062E]),
    0x1EE79u32 => compat(&[0x0636]),
    0x1EE7Au32 => compat(&[0x0638]),
    0x1EE7Bu32 => compat(&[0x063A]),
    0x1EE7Cu32 => compat(&[0x066E]),
    0x1EE7Eu32 => compat(&[0x06A1]),
    0x1EE80u32 => compat(&[0x0627]),
    0x1EE81u32 => compat(&[0x0628]),
    0x1EE82u32 => compat(&[0x062C]),
    0x1EE83u32 => compat(&[0x062F]),
    0x1EE84u32 => compat(&[0x0647]),
    0x1EE85u32 => compat(&[0x0648]),
    0x1EE86u32 => compat(&[0x0632]),
    0x1EE87u32 => compat(&[0x062D]),
    0x1EE88u32 => compat(&[0x0637]),
    0x1EE89u32 => compat(&[0x064A]),
    0x1EE8Bu32 => compat(&[0x0644]),
    0x1EE8Cu32 => compat(&[0x0645]),
    0x1EE8Du32 => compat(&[0x0646]),
    0x1EE8Eu32 => compat(&[0x0633]),
    0x1EE8Fu32 => compat(&[0x0639]),
    0x1EE90u32 => compat(&[0x0641]),
    0x1EE91u32 => compat(&[0x0635]),
    0x1EE92u32 => compat(&[0x0642]),
    0x1EE93u32 => compat(&[0x0631]),
    0x1EE94u32 => compat(&[0x0634]),
    0x1EE95u32 => compat(&[0x062A]),
    0x1EE96u32 => compat(&[0x062B]),
    0x1EE97u32 => compat(&[0x062E]),
    0x1EE98u32 => compat(&[0x0630]),
    0x1EE99u32 => compat(&[0x0636]),
    0x1EE9Au32 => compat(&[0x0638]),
    0x1EE9Bu32 => compat(&[0x063A]),
    0x1EEA1u32 => compat(&[0x0628]),
    0x1EEA2u32 => compat(&[0x062C]),
    0x1EEA3u32 => compat(&[0x062F]),
    0x1EEA5u32 => compat(&[0x0648]),
    0x1EEA6u32 => compat(&[0x0632]),
    0x1EEA7u32 => compat(&[0x062D]),
    0x1EEA8u32 => compat(&[0x0637]),
    0x1EEA9u32 => compat(&[0x064A]),
    0x1EEABu32 => compat(&[0x0644]),
    0x1EEACu32 => compat(&[0x0645]),
    0x1EEADu32 => compat(&[0x0646]),
    0x1EEAEu32 => compat(&[0x0633]),
    0x1EEAFu32 => compat(&[0x0639]),
    0x1EEB0u32 => compat(&[0x0641]),
    0x1EEB1u32 => compat(&[0x0635]),
    0x1EEB2u32 => compat(&[0x0642]),
    0x1EEB3u32 => compat(&[0x0631]),
    0x1EEB4u32 => compat(&[0x0634]),
    0x1EEB5u32 => compat(&[0x062A]),
    0x1EEB6u32 => compat(&[0x062B]),
    0x1EEB7u32 => compat(&[0x062E]),
    0x1EEB8u32 => compat(&[0x0630]),
    0x1EEB9u32 => compat(&[0x0636]),
    0x1EEBAu32 => compat(&[0x0638]),
    0x1EEBBu32 => compat(&[0x063A]),
    0x1F100u32 => compat(&[0x0030, 0x002E]),
    0x1F101u32 => compat(&[0x0030, 0x002C]),
    0x1F102u32 => compat(&[0x0031, 0x002C]),
    0x1F103u32 => compat(&[0x0032, 0x002C]),
    0x1F104u32 => compat(&[0x0033, 0x002C]),
    0x1F105u32 => compat(&[0x0034, 0x002C]),
    0x1F106u32 => compat(&[0x0035, 0x002C]),
    0x1F107u32 => compat(&[0x0036, 0x002C]),
    0x1F108u32 => compat(&[0x0037, 0x002C]),
    0x1F109u32 => compat(&[0x0038, 0x002C]),
    0x1F10Au32 => compat(&[0x0039, 0x002C]),
    0x1F110u32 => compat(&[0x0028, 0x0041, 0x0029]),
    0x1F111u32 => compat(&[0x0028, 0x0042, 0x0029]),
    0x1F112u32 => compat(&[0x0028, 0x0043, 0x0029]),
    0x1F113u32 => compat(&[0x0028, 0x0044, 0x0029]),
    0x1F114u32 => compat(&[0x0028, 0x0045, 0x0029]),
    0x1F115u32 => compat(&[0x0028, 0x0046, 0x0029]),
    0x1F116u32 => compat(&[0x0028, 0x0047, 0x0029]),
    0x1F117u32 => compat(&[0x0028, 0x0048, 0x0029]),
    0x1F118u32 => compat(&[0x0028, 0x0049, 0x0029]),
    0x1F119u32 => compat(&[0x0028, 0x004A, 0x0029]),
    0x1F11Au32 => compat(&[0x0028, 0x004B, 0x0029]),
    0x1F11Bu32 => compat(&[0x0028, 0x004C, 0x0029]),
    0x1F11Cu32 => compat(&[0x0028, 0x004D, 0x0029]),
    0x1F11Du32 => compat(&[0x0028, 0x004E, 0x0029]),
    0x1F11Eu32 => compat(&[0x0028, 0x004F, 0x0029]),
    0x1F11Fu32 => compat(&[0x0028, 0x0050, 0x0029]),
    0x1F120u32 => compat(&[0x0028, 0x0051, 0x0029]),
    0x1F121u32 => compat(&[0x0028, 0x0052, 0x0029]),
    0x1F122u32 => compat(&[0x0028, 0x0053, 0x0029]),
    0x1F123u32 => compat(&[0x0028, 0x0054, 0x0029]),
    0x1F124u32 => compat(&[0x0028, 0x0055, 0x0029]),
    0x1F125u32 => compat(&[0x0028, 0x0056, 0x0029]),
    0x1F126u32 => compat(&[0x0028, 0x0057, 0x0029]),
    0x1F127u32 => compat(&[0x0028, 0x0058, 0x0029]),
    0x1F128u32 => compat(&[0x0028, 0x0059, 0x0029]),
    0x1F129u32 => compat(&[0x0028, 0x005A, 0x0029]),
    0x1F12Au32 => compat(&[0x3014, 0x0053, 0x3015]),
    0x1F12Bu32 => compat(&[0x0043]),
    0x1F12Cu32 => compat(&[0x0052]),
    0x1F12Du32 => compat(&[0x0043, 0x0044]),
    0x1F12Eu32 => compat(&[0x0057, 0x005A]),
    0x1F130u32 => compat(&[0x0041]),
    0x1F131u32 => compat(&[0x0042]),
    0x1F132u32 => compat(&[0x0043]),
    0x1F133u32 => compat(&[0x0044]),
    0x1F134u32 => compat(&[0x0045]),
    0x1F135u32 => compat(&[0x0046]),
    0x1F136u32 => compat(&[0x0047]),
    0x1F137u32 => compat(&[0x0048]),
    0x1F138u32 => compat(&[0x0049]),
    0x1F139u32 => compat(&[0x004A]),
    0x1F13Au32 => compat(&[0x004B]),
    0x1F13Bu32 => compat(&[0x004C]),
    0x1F13Cu32 => compat(&[0x004D]),
    0x1F13Du32 => compat(&[0x004E]),
    0x1F13Eu32 => compat(&[0x004F]),
    0x1F13Fu32 => compat(&[0x0050]),
    0x1F140u32 => compat(&[0x0051]),
    0x1F141u32 => compat(&[0x0052]),
    0x1F142u32 => compat(&[0x0053]),
    0x1F143u32 => compat(&[0x0054]),
    0x1F144u32 => compat(&[0x0055]),
    0x1F145u32 => compat(&[0x0056]),
    0x1F146u32 => compat(&[0x0057]),
    0x1F147u32 => compat(&[0x0058]),
    0x1F148u32 => compat(&[0x0059]),
    0x1F149u32 => compat(&[0x005A]),
    0x1F14Au32 => compat(&[0x0048, 0x0056]),
    0x1F14Bu32 => compat(&[0x004D, 0x0056]),
    0x1F14Cu32 => compat(&[0x0053, 0x0044]),
    0x1F14Du32 => compat(&[0x0053, 0x0053]),
    0x1F14Eu32 => compat(&[0x0050, 0x0050, 0x0056]),
    0x1F14Fu32 => compat(&[0x0057, 0x0043]),
    0x1F16Au32 => compat(&[0x004D, 0x0043]),
    0x1F16Bu32 => compat(&[0x004D, 0x0044]),
    0x1F16Cu32 => compat(&[0x004D, 0x0052]),
    0x1F190u32 => compat(&[0x0044, 0x004A]),
    0x1F200u32 => compat(&[0x307B, 0x304B]),
    0x1F201u32 => compat(&[0x30B3, 0x30B3]),
    0x1F202u32 => compat(&[0x30B5]),
    0x1F210u32 => compat(&[0x624B]),
    0x1F211u32 => compat(&[0x5B57]),
    0x1F212u32 => compat(&[0x53CC]),
    0x1F213u32 => compat(&[0x30C7]),
    0x1F214u32 => compat(&[0x4E8C]),
    0x1F215u32 => compat(&[0x591A]),
    0x1F216u32 => compat(&[0x89E3]),
    0x1F217u32 => compat(&[0x5929]),
    0x1F218u32 => compat(&[0x4EA4]),
    0x1F219u32 => compat(&[0x6620]),
    0x1F21Au32 => compat(&[0x7121]),
    0x1F21Bu32 => compat(&[0x6599]),
    0x1F21Cu32 => compat(&[0x524D]),
    0x1F21Du32 => compat(&[0x5F8C]),
    0x1F21Eu32 => compat(&[0x518D]),
    0x1F21Fu32 => compat(&[0x65B0]),
    0x1F220u32 => compat(&[0x521D]),
    0x1F221u32 => compat(&[0x7D42]),
    0x1F222u32 => compat(&[0x751F]),
    0x1F223u32 => compat(&[0x8CA9]),
    0x1F224u32 => compat(&[0x58F0]),
    0x1F225u32 => compat(&[0x5439]),
    0x1F226u32 => compat(&[0x6F14]),
    0x1F227u32 => compat(&[0x6295]),
    0x1F228u32 => compat(&[0x6355]),
    0x1F229u32 => compat(&[0x4E00]),
    0x1F22Au32 => compat(&[0x4E09]),
    0x1F22Bu32 => compat(&[0x904A]),
    0x1F22Cu32 => compat(&[0x5DE6]),
    0x1F22Du32 => compat(&[0x4E2D]),
    0x1F22Eu32 => compat(&[0x53F3]),
    0x1F22Fu32 => compat(&[0x6307]),
    0x1F230u32 => compat(&[0x8D70]),
    0x1F231u32 => compat(&[0x6253]),
    0x1F232u32 => compat(&[0x7981]),
    0x1F233u32 => compat(&[0x7A7A]),
    0x1F234u32 => compat(&[0x5408]),
    0x1F235u32 => compat(&[0x6E80]),
    0x1F236u32 => compat(&[0x6709]),
    0x1F237u32 => compat(&[0x6708]),
    0x1F238u32 => compat(&[0x7533]),
    0x1F239u32 => compat(&[0x5272]),
    0x1F23Au32 => compat(&[0x55B6]),
    0x1F23Bu32 => compat(&[0x914D]),
    0x1F240u32 => compat(&[0x3014, 0x672C, 0x3015]),
    0x1F241u32 => compat(&[0x3014, 0x4E09, 0x3015]),
    0x1F242u32 => compat(&[0x3014, 0x4E8C, 0x3015]),
    0x1F243u32 => compat(&[0x3014, 0x5B89, 0x3015]),
    0x1F244u32 => compat(&[0x3014, 0x70B9, 0x3015]),
    0x1F245u32 => compat(&[0x3014, 0x6253, 0x3015]),
    0x1F246u32 => compat(&[0x3014, 0x76D7, 0x3015]),
    0x1F247u32 => compat(&[0x3014, 0x52DD, 0x3015]),
    0x1F248u32 => compat(&[0x3014, 0x6557, 0x3015]),
    0x1F250u32 => compat(&[0x5F97]),
    0x1F251u32 => compat(&[0x53EF]),
    0x1FBF0u32 => compat(&[0x0030]),
    0x1FBF1u32 => compat(&[0x0031]),
    0x1FBF2u32 => compat(&[0x0032]),
    0x1FBF3u32 => compat(&[0x0033]),
    0x1FBF4u32 => compat(&[0x0034]),
    0x1FBF5u32 => compat(&[0x0035]),
    0x1FBF6u32 => compat(&[0x0036]),
    0x1FBF7u32 => compat(&[0x0037]),
    0x1FBF8u32 => compat(&[0x0038]),
    0x1FBF9u32 => compat(&[0x0039]),
    0x2F800u32 => canonical(&[0x4E3D]),
    0x2F801u32 => canonical(&[0x4E38]),
    0x2F802u32 => canonical(&[0x4E41]),
    0x2F803u32 => canonical(&[0x20122]),
    0x2F804u32 => canonical(&[0x4F60]),
    0x2F805u32 => canonical(&[0x4FAE]),
    0x2F806u32 => canonical(&[0x4FBB]),
    0x2F807u32 => canonical(&[0x5002]),
    0x2F808u32 => canonical(&[0x507A]),
    0x2F809u32 => canonical(&[0x5099]),
    0x2F80Au32 => canonical(&[0x50E7]),
    0x2F80Bu32 => canonical(&[0x50CF]),
    0x2F80Cu32 => canonical(&[0x349E]),
    0x2F80Du32 => canonical(&[0x2063A]),
    0x2F80Eu32 => canonical(&[0x514D]),
    0x2F80Fu32 => canonical(&[0x5154]),
    0x2F810u32 => canonical(&[0x5164]),
    0x2F811u32 => canonical(&[0x5177]),
    0x2F812u32 => canonical(&[0x2051C]),
    0x2F813u32 => canonical(&[0x34B9]),
    0x2F814u32 => canonical(&[0x5167]),
    0x2F815u32 => canonical(&[0x518D]),
    0x2F816u32 => canonical(&[0x2054B]),
    0x2F817u32 => canonical(&[0x5197]),
    0x2F818u32 => canonical(&[0x51A4]),
    0x2F819u32 => canonical(&[0x4ECC]),
    0x2F81Au32 => canonical(&[0x51AC]),
    0x2F81Bu32 => canonical(&[0x51B5]),
    0x2F81Cu32 => canonical(&[0x291DF]),
    0x2F81Du32 => canonical(&[0x51F5]),
    0x2F81Eu32 => canonical(&[0x5203]),
    0x2F81Fu32 => canonical(&[0x34DF]),
    0x2F820u32 => canonical(&[0x523B]),
    0x2F821u32 => canonical(&[0x5246]),
    0x2F822u32 => canonical(&[0x5272]),
    0x2F823u32 => canonical(&[0x5277]),
    0x2F824u32 => canonical(&[0x3515]),
    0x2F825u32 => canonical(&[0x52C7]),
    0x2F826u32 => canonical(&[0x52C9]),
    0x2F827u32 => canonical(&[0x52E4]),
    0x2F828u32 => canonical(&[0x52FA]),
    0x2F829u32 => canonical(&[0x5305]),
    0x2F82Au32 => canonical(&[0x5306]),
    0x2F82Bu32 => canonical(&[0x5317]),
    0x2F82Cu32 => canonical(&[0x5349]),
    0x2F82Du32 => canonical(&[0x5351]),
    0x2F82Eu32 => canonical(&[0x535A]),
    0x2F82Fu32 => canonical(&[0x5373]),
    0x2F830u32 => canonical(&[0x537D]),
    0x2F831u32 => canonical(&[0x537F]),
    0x2F832u32 => canonical(&[0x537F]),
    0x2F833u32 => canonical(&[0x537F]),
    0x2F834u32 => canonical(&[0x20A2C]),
    0x2F835u32 => canonical(&[0x7070]),
    0x2F836u32 => canonical(&[0x53CA]),
    0x2F837u32 => canonical(&[0x53DF]),
    0x2F838u32 => canonical(&[0x20B63]),
    0x2F839u32 => canonical(&[0x53EB]),
    0x2F83Au32 => canonical(&[0x53F1]),
    0x2F83Bu32 => canonical(&[0x5406]),
    0x2F83Cu32 => canonical(&[0x549E]),
    0x2F83Du32 => canonical(&[0x5438]),
    0x2F83Eu32 => canonical(&[0x5448]),
    0x2F83Fu32 => canonical(&[0x5468]),
    0x2F840u32 => canonical(&[0x54A2]),
    0x2F841u32 => canonical(&[0x54F6]),
    0x2F842u32 => canonical(&[0x5510]),
    0x2F843u32 => canonical(&[0x5553]),
    0x2F844u32 => canonical(&[0x5563]),
    0x2F845u32 => canonical(&[0x5584]),
    0x2F846u32 => canonical(&[0x5584]),
    0x2F847u32 => canonical(&[0x5599]),
    0x2F848u32 => canonical(&[0x55AB]),
    0x2F849u32 => canonical(&[0x55B3]),
    0x2F84Au32 => canonical(&[0x55C2]),
    0x2F84Bu32 => canonical(&[0x5716]),
    0x2F84Cu32 => canonical(&[0x5606]),
    0x2F84Du32 => canonical(&[0x5717]),
    0x2F84Eu32 => canonical(&[0x5651]),
    0x2F84Fu32 => canonical(&[0x5674]),
    0x2F850u32 => canonical(&[0x5207]),
    0x2F851u32 => canonical(&[0x58EE]),
    0x2F852u32 => canonical(&[0x57CE]),
    0x2F853u32 => canonical(&[0x57F4]),
    0x2F854u32 => canonical(&[0x580D]),
    0x2F855u32 => canonical(&[0x578B]),
    0x2F856u32 => canonical(&[0x5832]),
    0x2F857u32 => canonical(&[0x5831]),
    0x2F858u32 => canonical(&[0x58AC]),
    0x2F859u32 => canonical(&[0x214E4]),
    0x2F85Au32 => canonical(&[0x58F2]),
    0x2F85Bu32 => canonical(&[0x58F7]),
    0x2F85Cu32 => canonical(&[0x5906]),
    0x2F85Du32 => canonical(&[0x591A]),
    0x2F85Eu32 => canonical(&[0x5922]),
    0x2F85Fu32 => canonical(&[0x5962]),
    0x2F860u32 => canonical(&[0x216A8]),
    0x2F861u32 => canonical(&[0x216EA]),
    0x2F862u32 => canonical(&[0x59EC]),
    0x2F863u32 => canonical(&[0x5A1B]),
    0x2F864u32 => canonical(&[0x5A27]),
    0x2F865u32 => canonical(&[0x59D8]),
    0x2F866u32 => canonical(&[0x5A66]),
    0x2F867u32 => canonical(&[0x36EE]),
    0x2F868u32 => canonical(&[0x36FC]),
    0x2F869u32 => canonical(&[0x5B08]),
    0x2F86Au32 => canonical(&[0x5B3E]),
    0x2F86Bu32 => canonical(&[0x5B3E]),
    0x2F86Cu32 => canonical(&[0x219C8]),
    0x2F86Du32 => canonical(&[0x5BC3]),
    0x2F86Eu32 => canonical(&[0x5BD8]),
    0x2F86Fu32 => canonical(&[0x5BE7]),
    0x2F870u32 => canonical(&[0x5BF3]),
    0x2F871u32 => canonical(&[0x21B18]),
    0x2F872u32 => canonical(&[0x5BFF]),
    0x2F873u32 => canonical(&[0x5C06]),
    0x2F874u32 => canonical(&[0x5F53]),
    0x2F875u32 => canonical(&[0x5C22]),
    0x2F876u32 => canonical(&[0x3781]),
    0x2F877u32 => canonical(&[0x5C60]),
    0x2F878u32 => canonical(&[0x5C6E]),
    0x2F879u32 => canonical(&[0x5CC0]),
    0x2F87Au32 => canonical(&[0x5C8D]),
    0x2F87Bu32 => canonical(&[0x21DE4]),
    0x2F87Cu32 => canonical(&[0x5D43]),
    0x2F87Du32 => canonical(&[0x21DE6]),
    0x2F87Eu32 => canonical(&[0x5D6E]),
    0x2F87Fu32 => canonical(&[0x5D6B]),
    0x2F880u32 => canonical(&[0x5D7C]),
    0x2F881u32 => canonical(&[0x5DE1]),
    0x2F882u32 => canonical(&[0x5DE2]),
    0x2F883u32 => canonical(&[0x382F]),
    0x2F884u32 => canonical(&[0x5DFD]),
    0x2F885u32 => canonical(&[0x5E28]),
    0x2F886u32 => canonical(&[0x5E3D]),
    0x2F887u32 => canonical(&[0x5E69]),
    0x2F888u32 => canonical(&[0x3862]),
    0x2F889u32 => canonical(&[0x22183]),
    0x2F88Au32 => canonical(&[0x387C]),
    0x2F88Bu32 => canonical(&[0x5EB0]),
    0x2F88Cu32 => canonical(&[0x5EB3]),
    0x2F88Du32 => canonical(&[0x5EB6]),
    0x2F88Eu32 => canonical(&[0x5ECA]),
    0x2F88Fu32 => canonical(&[0x2A392]),
    0x2F890u32 => canonical(&[0x5EFE]),
    0x2F891u32 => canonical(&[0x22331]),
    0x2F892u32 => canonical(&[0x22331]),
    0x2F893u32 => canonical(&[0x8201]),
    0x2F894u32 => canonical(&[0x5F22]),
    0x2F895u32 => canonical(&[0x5F22]),
    0x2F896u32 => canonical(&[0x38C7]),
    0x2F897u32 => canonical(&[0x232B8]),
    0x2F898u32 => canonical(&[0x261DA]),
    0x2F899u32 => canonical(&[0x5F62]),
    0x2F89Au32 => canonical(&[0x5F6B]),
    0x2F89Bu32 => canonical(&[0x38E3]),
    0x2F89Cu32 => canonical(&[0x5F9A]),
    0x2F89Du32 => canonical(&[0x5FCD]),
    0x2F89Eu32 => canonical(&[0x5FD7]),
    0x2F89Fu32 => canonical(&[0x5FF9]),
    0x2F8A0u32 => canonical(&[0x6081]),
    0x2F8A1u32 => canonical(&[0x393A]),
    0x2F8A2u32 => canonical(&[0x391C]),
    0x2F8A3u32 => canonical(&[0x6094]),
    0x2F8A4u32 => canonical(&[0x226D4]),
    0x2F8A5u32 => canonical(&[0x60C7]),
    0x2F8A6u32 => canonical(&[0x6148]),
    0x2F8A7u32 => canonical(&[0x614C]),
    0x2F8A8u32 => canonical(&[0x614E]),
    0x2F8A9u32 => canonical(&[0x614C]),
    0x2F8AAu32 => canonical(&[0x617A]),
    0x2F8ABu32 => canonical(&[0x618E]),
    0x2F8ACu32 => canonical(&[0x61B2]),
    0x2F8ADu32 => canonical(&[0x61A4]),
    0x2F8AEu32 => canonical(&[0x61AF]),
    0x2F8AFu32 => canonical(&[0x61DE]),
    0x2F8B0u32 => canonical(&[0x61F2]),
    0x2F8B1u32 => canonical(&[0x61F6]),
    0x2F8B2u32 => canonical(&[0x6210]),
    0x2F8B3u32 => canonical(&[0x621B]),
    0x2F8B4u32 => canonical(&[0x625D]),
    0x2F8B5u32 => canonical(&[0x62B1]),
    0x2F8B6u32 => canonical(&[0x62D4]),
    0x2F8B7u32 => canonical(&[0x6350]),
    0x2F8B8u32 => canonical(&[0x22B0C]),
    0x2F8B9u32 => canonical(&[0x633D]),
    0x2F8BAu32 => canonical(&[0x62FC]),
    0x2F8BBu32 => canonical(&[0x6368]),
    0x2F8BCu32 => canonical(&[0x6383]),
    0x2F8BDu32 => canonical(&[0x63E4]),
    0x2F8BEu32 => canonical(&[0x22BF1]),
    0x2F8BFu32 => canonical(&[0x6422]),
    0x2F8C0u32 => canonical(&[0x63C5]),
    0x2F8C1u32 => canonical(&[0x63A9]),
    0x2F8C2u32 => canonical(&[0x3A2E]),
    0x2F8C3u32 => canonical(&[0x6469]),
    0x2F8C4u32 => canonical(&[0x647E]),
    0x2F8C5u32 => canonical(&[0x649D]),
    0x2F8C6u32 => canonical(&[0x6477]),
    0x2F8C7u32 => canonical(&[0x3A6C]),
    0x2F8C8u32 => canonical(&[0x654F]),
    0x2F8C9u32 => canonical(&[0x656C]),
    0x2F8CAu32 => canonical(&[0x2300A]),
    0x2F8CBu32 => canonical(&[0x65E3]),
    0x2F8CCu32 => canonical(&[0x66F8]),
    0x2F8CDu32 => canonical(&[0x6649]),
    0x2F8CEu32 => canonical(&[0x3B19]),
    0x2F8CFu32 => canonical(&[0x6691]),
    0x2F8D0u32 => canonical(&[0x3B08]),
    0x2F8D1u32 => canonical(&[0x3AE4]),
    0x2F8D2u32 => canonical(&[0x5192]),
    0x2F8D3u32 => canonical(&[0x5195]),
    0x2F8D4u32 => canonical(&[0x6700]),
    0x2F8D5u32 => canonical(&[0x669C]),
    0x2F8D6u32 => canonical(&[0x80AD]),
    0x2F8D7u32 => canonical(&[0x43D9]),
    0x2F8D8u32 => canonical(&[0x6717]),
    0x2F8D9u32 => canonical(&[0x671B]),
    0x2F8DAu32 => canonical(&[0x6721]),
    0x2F8DBu32 => canonical(&[0x675E]),
    0x2F8DCu32 => canonical(&[0x6753]),
    0x2F8DDu32 => canonical(&[0x233C3]),
    0x2F8DEu32 => canonical(&[0x3B49]),
    0x2F8DFu32 => canonical(&[0x67FA]),
    0x2F8E0u32 => canonical(&[0x6785]),
    0x2F8E1u32 => canonical(&[0x6852]),
    0x2F8E2u32 => canonical(&[0x6885]),
    0x2F8E3u32 => canonical(&[0x2346D]),
    0x2F8E4u32 => canonical(&[0x688E]),
    0x2F8E5u32 => canonical(&[0x681F]),
    0x2F8E6u32 => canonical(&[0x6914]),
    0x2F8E7u32 => canonical(&[0x3B9D]),
    0x2F8E8u32 => canonical(&[0x6942]),
    0x2F8E9u32 => canonical(&[0x69A3]),
    0x2F8EAu32 => canonical(&[0x69EA]),
    0x2F8EBu32 => canonical(&[0x6AA8]),
    0x2F8ECu32 => canonical(&[0x236A3]),
    0x2F8EDu32 => canonical(&[0x6ADB]),
    0x2F8EEu32 => canonical(&[0x3C18]),
    0x2F8EFu32 => canonical(&[0x6B21]),
    0x2F8F0u32 => canonical(&[0x238A7]),
    0x2F8F1u32 => canonical(&[0x6B54]),
    0x2F8F2u32 => canonical(&[0x3C4E]),
    0x2F8F3u32 => canonical(&[0x6B72]),
    0x2F8F4u32 => canonical(&[0x6B9F]),
    0x2F8F5u32 => canonical(&[0x6BBA]),
    0x2F8F6u32 => canonical(&[0x6BBB]),
    0x2F8F7u32 => canonical(&[0x23A8D]),
    0x2F8F8u32 => canonical(&[0x21D0B]),
    0x2F8F9u32 => canonical(&[0x23AFA]),
    0x2F8FAu32 => canonical(&[0x6C4E]),
    0x2F8FBu32 => canonical(&[0x23CBC]),
    0x2F8FCu32 => canonical(&[0x6CBF]),
    0x2F8FDu32 => canonical(&[0x6CCD]),
    0x2F8FEu32 => canonical(&[0x6C67]),
    0x2F8FFu32 => canonical(&[0x6D16]),
    0x2F900u32 => canonical(&[0x6D3E]),
    0x2F901u32 => canonical(&[0x6D77]),
    0x2F902u32 => canonical(&[0x6D41]),
    0x2F903u32 => canonical(&[0x6D69]),
    0x2F904u32 => canonical(&[0x6D78]),
    0x2F905u32 => canonical(&[0x6D85]),
    0x2F906u32 => canonical(&[0x23D1E]),
    0x2F907u32 => canonical(&[0x6D34]),
    0x2F908u32 => canonical(&[0x6E2F]),
    0x2F909u32 => canonical(&[0x6E6E]),
    0x2F90Au32 => canonical(&[0x3D33]),
    0x2F90Bu32 => canonical(&[0x6ECB]),
    0x2F90Cu32 => canonical(&[0x6EC7]),
    0x2F90Du32 => canonical(&[0x23ED1]),
    0x2F90Eu32 => canonical(&[0x6DF9]),
    0x2F90Fu32 => canonical(&[0x6F6E]),
    0x2F910u32 => canonical(&[0x23F5E]),
    0x2F911u32 => canonical(&[0x23F8E]),
    0x2F912u32 => canonical(&[0x6FC6]),
    0x2F913u32 => canonical(&[0x7039]),
    0x2F914u32 => canonical(&[0x701E]),
    0x2F915u32 => canonical(&[0x701B]),
    0x2F916u32 => canonical(&[0x3D96]),
    0x2F917u32 => canonical(&[0x704A]),
    0x2F918u32 => canonical(&[0x707D]),
    0x2F919u32 => canonical(&[0x7077]),
    0x2F91Au32 => canonical(&[0x70AD]),
    0x2F91Bu32 => canonical(&[0x20525]),
    0x2F91Cu32 => canonical(&[0x7145]),
    0x2F91Du32 => canonical(&[0x24263]),
    0x2F91Eu32 => canonical(&[0x719C]),
    0x2F91Fu32 => canonical(&[0x243AB]),
    0x2F920u32 => canonical(&[0x7228]),
    0x2F921u32 => canonical(&[0x7235]),
    0x2F922u32 => canonical(&[0x7250]),
    0x2F923u32 => canonical(&[0x24608]),
    0x2F924u32 => canonical(&[0x7280]),
    0x2F925u32 => canonical(&[0x7295]),
    0x2F926u32 => canonical(&[0x24735]),
    0x2F927u32 => canonical(&[0x24814]),
    0x2F928u32 => canonical(&[0x737A]),
    0x2F929u32 => canonical(&[0x738B]),
    0x2F92Au32 => canonical(&[0x3EAC]),
    0x2F92Bu32 => canonical(&[0x73A5]),
    0x2F92Cu32 => canonical(&[0x3EB8]),
    0x2F92Du32 => canonical(&[0x3EB8]),
    0x2F92Eu32 => canonical(&[0x7447]),
    0x2F92Fu32 => canonical(&[0x745C]),
    0x2F930u32 => canonical(&[0x7471]),
    0x2F931u32 => canonical(&[0x7485]),
    0x2F932u32 => canonical(&[0x74CA]),
    0x2F933u32 => canonical(&[0x3F1B]),
    0x2F934u32 => canonical(&[0x7524]),
    0x2F935u32 => canonical(&[0x24C36]),
    0x2F936u32 => canonical(&[0x753E]),
    0x2F937u32 => canonical(&[0x24C92]),
    0x2F938u32 => canonical(&[0x7570]),
    0x2F939u32 => canonical(&[0x2219F]),
    0x2F93Au32 => canonical(&[0x7610]),
    0x2F93Bu32 => canonical(&[0x24FA1]),
    0x2F93Cu32 => canonical(&[0x24FB8]),
    0x2F93Du32 => canonical(&[0x25044]),
    0x2F93Eu32 => canonical(&[0x3FFC]),
    0x2F93Fu32 => canonical(&[0x4008]),
    0x2F940u32 => canonical(&[0x76F4]),
    0x2F941u32 => canonical(&[0x250F3]),
    0x2F942u32 => canonical(&[0x250F2]),
    0x2F943u32 => canonical(&[0x25119]),
    0x2F944u32 => canonical(&[0x25133]),
    0x2F945u32 => canonical(&[0x771E]),
    0x2F946u32 => canonical(&[0x771F]),
    0x2F947u32 => canonical(&[0x771F]),
    0x2F948u32 => canonical(&[0x774A]),
    0x2F949u32 => canonical(&[0x4039]),
    0x2F94Au32 => canonical(&[0x778B]),
    0x2F94Bu32 => canonical(&[0x4046]),
    0x2F94Cu32 => canonical(&[0x4096]),
    0x2F94Du32 => canonical(&[0x2541D]),
    0x2F94Eu32 => canonical(&[0x784E]),
    0x2F94Fu32 => canonical(&[0x788C]),
    0x2F950u32 => canonical(&[0x78CC]),
    0x2F951u32 => canonical(&[0x40E3]),
    0x2F952u32 => canonical(&[0x25626]),
    0x2F953u32 => canonical(&[0x7956]),
    0x2F954u32 => canonical(&[0x2569A]),
    0x2F955u32 => canonical(&[0x256C5]),
    0x2F956u32 => canonical(&[0x798F]),
    0x2F957u32 => canonical(&[0x79EB]),
    0x2F958u32 => canonical(&[0x412F]),
    0x2F959u32 => canonical(&[0x7A40]),
    0x2F95Au32 => canonical(&[0x7A4A]),
    0x2F95Bu32 => canonical(&[0x7A4F]),
    0x2F95Cu32 => canonical(&[0x2597C]),
    0x2F95Du32 => canonical(&[0x25AA7]),
    0x2F95Eu32 => canonical(&[0x25AA7]),
    0x2F95Fu32 => canonical(&[0x7AEE]),
    0x2F960u32 => canonical(&[0x4202]),
    0x2F961u32 => canonical(&[0x25BAB]),
    0x2F962u32 => canonical(&[0x7BC6]),
    0x2F963u32 => canonical(&[0x7BC9]),
    0x2F964u32 => canonical(&[0x4227]),
    0x2F965u32 => canonical(&[0x25C80]),
    0x2F966u32 => canonical(&[0x7CD2]),
    0x2F967u32 => canonical(&[0x42A0]),
    0x2F968u32 => canonical(&[0x7CE8]),
    0x2F969u32 => canonical(&[0x7CE3]),
    0x2F96Au32 => canonical(&[0x7D00]),
    0x2F96Bu32 => canonical(&[0x25F86]),
    0x2F96Cu32 => canonical(&[0x7D63]),
    0x2F96Du32 => canonical(&[0x4301]),
    0x2F96Eu32 => canonical(&[0x7DC7]),
    0x2F96Fu32 => canonical(&[0x7E02]),
    0x2F970u32 => canonical(&[0x7E45]),
    0x2F971u32 => canonical(&[0x4334]),
    0x2F972u32 => canonical(&[0x26228]),
    0x2F973u32 => canonical(&[0x26247]),
    0x2F974u32 => canonical(&[0x4359]),
    0x2F975u32 => canonical(&[0x262D9]),
    0x2F976u32 => canonical(&[0x7F7A]),
    0x2F977u32 => canonical(&[0x2633E]),
    0x2F978u32 => canonical(&[0x7F95]),
    0x2F979u32 => canonical(&[0x7FFA]),
    0x2F97Au32 => canonical(&[0x8005]),
    0x2F97Bu32 => canonical(&[0x264DA]),
    0x2F97Cu32 => canonical(&[0x26523]),
    0x2F97Du32 => canonical(&[0x8060]),
    0x2F97Eu32 => canonical(&[0x265A8]),
    0x2F97Fu32 => canonical(&[0x8070]),
    0x2F980u32 => canonical(&[0x2335F]),
    0x2F981u32 => canonical(&[0x43D5]),
    0x2F982u32 => canonical(&[0x80B2]),
    0x2F983u32 => canonical(&[0x8103]),
    0x2F984u32 => canonical(&[0x440B]),
    0x2F985u32 => canonical(&[0x813E]),
    0x2F986u32 => canonical(&[0x5AB5]),
    0x2F987u32 => canonical(&[0x267A7]),
    0x2F988u32 => canonical(&[0x267B5]),
    0x2F989u32 => canonical(&[0x23393]),
    0x2F98Au32 => canonical(&[0x2339C]),
    0x2F98Bu32 => canonical(&[0x8201]),
    0x2F98Cu32 => canonical(&[0x8204]),
    0x2F98Du32 => canonical(&[0x8F9E]),
    0x2F98Eu32 => canonical(&[0x446B]),
    0x2F98Fu32 => canonical(&[0x8291]),
    0x2F990u32 => canonical(&[0x828B]),
    0x2F991u32 => canonical(&[0x829D]),
    0x2F992u32 => canonical(&[0x52B3]),
    0x2F993u32 => canonical(&[0x82B1]),
    0x2F994u32 => canonical(&[0x82B3]),
    0x2F995u32 => canonical(&[0x82BD]),
    0x2F996u32 => canonical(&[0x82E6]),
    0x2F997u32 => canonical(&[0x26B3C]),
    0x2F998u32 => canonical(&[0x82E5]),
    0x2F999u32 => canonical(&[0x831D]),
    0x2F99Au32 => canonical(&[0x8363]),
    0x2F99Bu32 => canonical(&[0x83AD]),
    0x2F99Cu32 => canonical(&[0x8323]),
    0x2F99Du32 => canonical(&[0x83BD]),
    0x2F99Eu32 => canonical(&[0x83E7]),
    0x2F99Fu32 => canonical(&[0x8457]),
    0x2F9A0u32 => canonical(&[0x8353]),
    0x2F9A1u32 => canonical(&[0x83CA]),
    0x2F9A2u32 => canonical(&[0x83CC]),
    0x2F9A3u32 => canonical(&[0x83DC]),
    0x2F9A4u32 => canonical(&[0x26C36]),
    0x2F9A5u32 => canonical(&[0x26D6B]),
    0x2F9A6u32 => canonical(&[0x26CD5]),
    0x2F9A7u32 => canonical(&[0x452B]),
    0x2F9A8u32 => canonical(&[0x84F1]),
    0x2F9A9u32 => canonical(&[0x84F3]),
    0x2F9AAu32 => canonical(&[0x8516]),
    0x2F9ABu32 => canonical(&[0x273CA]),
    0x2F9ACu32 => canonical(&[0x8564]),
    0x2F9ADu32 => canonical(&[0x26F2C]),
    0x2F9AEu32 => canonical(&[0x455D]),
    0x2F9AFu32 => canonical(&[0x4561]),
    0x2F9B0u32 => canonical(&[0x26FB1]),
    0x2F9B1u32 => canonical(&[0x270D2]),
    0x2F9B2u32 => canonical(&[0x456B]),
    0x2F9B3u32 => canonical(&[0x8650]),
    0x2F9B4u32 => canonical(&[0x865C]),
    0x2F9B5u32 => canonical(&[0x8667]),
    0x2F9B6u32 => canonical(&[0x8669]),
    0x2F9B7u32 => canonical(&[0x86A9]),
    0x2F9B8u32 => canonical(&[0x8688]),
    0x2F9B9u32 => canonical(&[0x870E]),
    0x2F9BAu32 => canonical(&[0x86E2]),
    0x2F9BBu32 => canonical(&[0x8779]),
    0x2F9BCu32 => canonical(&[0x8728]),
    0x2F9BDu32 => canonical(&[0x876B]),
    0x2F9BEu32 => canonical(&[0x8786]),
    0x2F9BFu32 => canonical(&[0x45D7]),
    0x2F9C0u32 => canonical(&[0x87E1]),
    0x2F9C1u32 => canonical(&[0x8801]),
    0x2F9C2u32 => canonical(&[0x45F9]),
    0x2F9C3u32 => canonical(&[0x8860]),
    0x2F9C4u32 => canonical(&[0x8863]),
    0x2F9C5u32 => canonical(&[0x27667]),
    0x2F9C6u32 => canonical(&[0x88D7]),
    0x2F9C7u32 => canonical(&[0x88DE]),
    0x2F9C8u32 => canonical(&[0x4635]),
    0x2F9C9u32 => canonical(&[0x88FA]),
    0x2F9CAu32 => canonical(&[0x34BB]),
    0x2F9CBu32 => canonical(&[0x278AE]),
    0x2F9CCu32 => canonical(&[0x27966]),
    0x2F9CDu32 => canonical(&[0x46BE]),
    0x2F9CEu32 => canonical(&[0x46C7]),
    0x2F9CFu32 => canonical(&[0x8AA0]),
    0x2F9D0u32 => canonical(&[0x8AED]),
    0x2F9D1u32 => canonical(&[0x8B8A]),
    0x2F9D2u32 => canonical(&[0x8C55]),
    0x2F9D3u32 => canonical(&[0x27CA8]),
    0x2F9D4u32 => canonical(&[0x8CAB]),
    0x2F9D5u32 => canonical(&[0x8CC1]),
    0x2F9D6u32 => canonical(&[0x8D1B]),
    0x2F9D7u32 => canonical(&[0x8D77]),
    0x2F9D8u32 => canonical(&[0x27F2F]),
    0x2F9D9u32 => canonical(&[0x20804]),
    0x2F9DAu32 => canonical(&[0x8DCB]),
    0x2F9DBu32 => canonical(&[0x8DBC]),
    0x2F9DCu32 => canonical(&[0x8DF0]),
    0x2F9DDu32 => canonical(&[0x208DE]),
    0x2F9DEu32 => canonical(&[0x8ED4]),
    0x2F9DFu32 => canonical(&[0x8F38]),
    0x2F9E0u32 => canonical(&[0x285D2]),
    0x2F9E1u32 => canonical(&[0x285ED]),
    0x2F9E2u32 => canonical(&[0x9094]),
    0x2F9E3u32 => canonical(&[0x90F1]),
    0x2F9E4u32 => canonical(&[0x9111]),
    0x2F9E5u32 => canonical(&[0x2872E]),
    0x2F9E6u32 => canonical(&[0x911B]),
    0x2F9E7u32 => canonical(&[0x9238]),
    0x2F9E8u32 => canonical(&[0x92D7]),
    0x2F9E9u32 => canonical(&[0x92D8]),
    0x2F9EAu32 => canonical(&[0x927C]),
    0x2F9EBu32 => canonical(&[0x93F9]),
    0x2F9ECu32 => canonical(&[0x9415]),
    0x2F9EDu32 => canonical(&[0x28BFA]),
    0x2F9EEu32 => canonical(&[0x958B]),
    0x2F9EFu32 => canonical(&[0x4995]),
    0x2F9F0u32 => canonical(&[0x95B7]),
    0x2F9F1u32 => canonical(&[0x28D77]),
    0x2F9F2u32 => canonical(&[0x49E6]),
    0x2F9F3u32 => canonical(&[0x96C3]),
    0x2F9F4u32 => canonical(&[0x5DB2]),
    0x2F9F5u32 => canonical(&[0x9723]),
    0x2F9F6u32 => canonical(&[0x29145]),
    0x2F9F7u32 => canonical(&[0x2921A]),
    0x2F9F8u32 => canonical(&[0x4A6E]),
    0x2F9F9u32 => canonical(&[0x4A76]),
    0x2F9FAu32 => canonical(&[0x97E0]),
    0x2F9FBu32 => canonical(&[0x2940A]),
    0x2F9FCu32 => canonical(&[0x4AB2]),
    0x2F9FDu32 => canonical(&[0x29496]),
    0x2F9FEu32 => canonical(&[0x980B]),
    0x2F9FFu32 => canonical(&[0x980B]),
    0x2FA00u32 => canonical(&[0x9829]),
    0x2FA01u32 => canonical(&[0x295B6]),
    0x2FA02u32 => canonical(&[0x98E2]),
    0x2FA03u32 => canonical(&[0x4B33]),
    0x2FA04u32 => canonical(&[0x9929]),
    0x2FA05u32 => canonical(&[0x99A7]),
    0x2FA06u32 => canonical(&[0x99C2]),
    0x2FA07u32 => canonical(&[0x99FE]),
    0x2FA08u32 => canonical(&[0x4BCE]),
    0x2FA09u32 => canonical(&[0x29B30]),
    0x2FA0Au32 => canonical(&[0x9B12]),
    0x2FA0Bu32 => canonical(&[0x9C40]),
    0x2FA0Cu32 => canonical(&[0x9CFD]),
    0x2FA0Du32 => canonical(&[0x4CCE]),
    0x2FA0Eu32 => canonical(&[0x4CED]),
    0x2FA0Fu32 => canonical(&[0x9D67]),
    0x2FA10u32 => canonical(&[0x2A0CE]),
    0x2FA11u32 => canonical(&[0x4CF8]),
    0x2FA12u32 => canonical(&[0x2A105]),
    0x2FA13u32 => canonical(&[0x2A20E]),
    0x2FA14u32 => canonical(&[0x2A291]),
    0x2FA15u32 => canonical(&[0x9EBB]),
    0x2FA16u32 => canonical(&[0x4D56]),
    0x2FA17u32 => canonical(&[0x9EF9]),
    0x2FA18u32 => canonical(&[0x9EFE]),
    0x2FA19u32 => canonical(&[0x9F05]),
    0x2FA1Au32 => canonical(&[0x9F0F]),
    0x2FA1Bu32 => canonical(&[0x9F16]),
    0x2FA1Cu32 => canonical(&[0x9F3B]),
    0x2FA1Du32 => canonical(&[0x2A600]),
};
