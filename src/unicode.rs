//! Per-code-point property table compiled from the Unicode Character Database.
//!
//! Every record is resolved in O(1): a two-level block table yields the
//! general category, canonical combining class and composition-exclusion flag,
//! and a perfect-hash map yields the (single-level) decomposition mapping.
//! The composition pair index is derived from the decomposition map on first
//! use and never mutated afterwards.

pub mod category;
pub mod hangul;
mod tables;

pub use category::Category;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Surrogate block, never a valid scalar value.
pub const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// `(major, minor, update)` of the UCD the table was built from.
pub const UNICODE_VERSION: (u8, u8, u8) = tables::UNICODE_VERSION;

/// Unicode version string, e.g. `"14.0.0"`.
pub fn unicode_version() -> String {
    let (major, minor, update) = UNICODE_VERSION;
    format!("{major}.{minor}.{update}")
}

/// True for Unicode scalar values: `0..=0x10FFFF` without surrogates.
#[inline(always)]
pub const fn is_valid_code_point(cp: u32) -> bool {
    cp <= MAX_CODE_POINT && !(cp >= 0xD800 && cp <= 0xDFFF)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecompositionKind {
    Canonical,
    /// Tagged (`<font>`, `<compat>`, …) mapping, applied only by NFKC/NFKD.
    Compatibility,
}

/// One level of a decomposition mapping, as listed in UnicodeData.txt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition {
    pub kind: DecompositionKind,
    pub mapping: &'static [u32],
}

impl Decomposition {
    pub const fn canonical(mapping: &'static [u32]) -> Self {
        Self {
            kind: DecompositionKind::Canonical,
            mapping,
        }
    }

    pub const fn compatibility(mapping: &'static [u32]) -> Self {
        Self {
            kind: DecompositionKind::Compatibility,
            mapping,
        }
    }
}

/// Properties of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRecord {
    pub category: Category,
    /// 0 for starters; never reordered.
    pub combining_class: u8,
    pub decomposition: Option<Decomposition>,
    /// Full_Composition_Exclusion: never produced by composition.
    pub composition_excluded: bool,
}

impl PropertyRecord {
    /// Record of every unassigned code point.
    pub const UNASSIGNED: Self = Self {
        category: Category::Cn,
        combining_class: 0,
        decomposition: None,
        composition_excluded: false,
    };

    #[inline]
    pub fn canonical_decomposition(&self) -> Option<&'static [u32]> {
        self.decomposition
            .filter(|d| d.kind == DecompositionKind::Canonical)
            .map(|d| d.mapping)
    }

    #[inline]
    pub fn compatibility_decomposition(&self) -> Option<&'static [u32]> {
        self.decomposition
            .filter(|d| d.kind == DecompositionKind::Compatibility)
            .map(|d| d.mapping)
    }

    /// Mapping applied by one decomposition step: canonical only, or either
    /// kind when `compatibility` is set.
    #[inline]
    pub fn decomposition_for(&self, compatibility: bool) -> Option<&'static [u32]> {
        match self.decomposition {
            Some(d) if compatibility || d.kind == DecompositionKind::Canonical => Some(d.mapping),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_starter(&self) -> bool {
        self.combining_class == 0
    }
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

/// Read-only property source consumed by the normalization stages.
///
/// [`UnicodeTable`] is the only production implementation; the trait exists
/// so the stages can run against other tables.
pub trait PropertyLookup: Send + Sync {
    fn lookup(&self, cp: u32) -> PropertyRecord;

    /// Primary composite for `(starter, combining)` from the pair index.
    /// Hangul is handled algorithmically and is not part of the index.
    fn compose_pair(&self, starter: u32, combining: u32) -> Option<u32>;

    /// True when `cp` is the second element of any indexed pair.
    fn is_composition_second(&self, cp: u32) -> bool;

    #[inline]
    fn combining_class(&self, cp: u32) -> u8 {
        self.lookup(cp).combining_class
    }
}

/// The compiled UCD table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTable;

/// Process-wide table instance.
pub static UNICODE: UnicodeTable = UnicodeTable;

struct CompositionIndex {
    pairs: HashMap<(u32, u32), u32>,
    seconds: HashSet<u32>,
}

impl CompositionIndex {
    /// Inverse of every canonical, two-element, non-excluded mapping.
    fn build() -> Self {
        let mut pairs = HashMap::with_capacity(1024);
        let mut seconds = HashSet::with_capacity(128);
        for (&composite, decomposition) in tables::DECOMPOSITIONS.entries() {
            let &[starter, combining] = decomposition.mapping else {
                continue;
            };
            if decomposition.kind != DecompositionKind::Canonical
                || packed_record(composite).2
            {
                continue;
            }
            pairs.insert((starter, combining), composite);
            seconds.insert(combining);
        }
        tracing::debug!(pairs = pairs.len(), "built composition pair index");
        Self { pairs, seconds }
    }
}

static COMPOSITION_INDEX: LazyLock<CompositionIndex> = LazyLock::new(CompositionIndex::build);

#[inline(always)]
fn packed_record(cp: u32) -> (Category, u8, bool) {
    if cp > MAX_CODE_POINT {
        return (Category::Cn, 0, false);
    }
    let block = tables::BLOCK_INDEX[(cp >> tables::BLOCK_SHIFT) as usize] as usize;
    let slot = tables::BLOCKS[(block << tables::BLOCK_SHIFT) | (cp & tables::BLOCK_MASK) as usize];
    tables::RECORDS[slot as usize]
}

impl UnicodeTable {
    /// Full record for `cp`; values above `0x10FFFF` get [`PropertyRecord::UNASSIGNED`].
    #[inline]
    pub fn record(&self, cp: u32) -> PropertyRecord {
        let (category, combining_class, composition_excluded) = packed_record(cp);
        PropertyRecord {
            category,
            combining_class,
            decomposition: tables::DECOMPOSITIONS.get(&cp).copied(),
            composition_excluded,
        }
    }

    /// Category only; skips the decomposition map.
    #[inline(always)]
    pub fn category(&self, cp: u32) -> Category {
        packed_record(cp).0
    }
}

impl PropertyLookup for UnicodeTable {
    #[inline]
    fn lookup(&self, cp: u32) -> PropertyRecord {
        self.record(cp)
    }

    #[inline]
    fn compose_pair(&self, starter: u32, combining: u32) -> Option<u32> {
        COMPOSITION_INDEX.pairs.get(&(starter, combining)).copied()
    }

    #[inline]
    fn is_composition_second(&self, cp: u32) -> bool {
        COMPOSITION_INDEX.seconds.contains(&cp)
    }

    #[inline(always)]
    fn combining_class(&self, cp: u32) -> u8 {
        packed_record(cp).1
    }
}

/// Shorthand for `UNICODE.record(cp)`.
#[inline]
pub fn lookup(cp: u32) -> PropertyRecord {
    UNICODE.record(cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_records() {
        let a = lookup('A' as u32);
        assert_eq!(a.category, Category::Lu);
        assert!(a.is_starter());
        assert_eq!(a.decomposition, None);

        let e_acute = lookup(0x00E9);
        assert_eq!(e_acute.category, Category::Ll);
        assert_eq!(e_acute.canonical_decomposition(), Some(&[0x0065, 0x0301][..]));
        assert_eq!(e_acute.compatibility_decomposition(), None);
        assert!(!e_acute.composition_excluded);
    }

    #[test]
    fn combining_classes() {
        assert_eq!(UNICODE.combining_class(0x0301), 230);
        assert_eq!(UNICODE.combining_class(0x0323), 220);
        assert_eq!(UNICODE.combining_class(0x0345), 240);
        assert_eq!(UNICODE.combining_class(0x05B0), 10);
        assert_eq!(UNICODE.combining_class(0x0041), 0);
        assert_eq!(lookup(0x0301).category, Category::Mn);
    }

    #[test]
    fn compatibility_mappings_are_tagged() {
        let fi = lookup(0xFB01);
        assert_eq!(fi.canonical_decomposition(), None);
        assert_eq!(fi.compatibility_decomposition(), Some(&[0x0066, 0x0069][..]));
        assert_eq!(fi.decomposition_for(false), None);
        assert_eq!(fi.decomposition_for(true), Some(&[0x0066, 0x0069][..]));
    }

    #[test]
    fn exclusions() {
        // Script-specific exclusion.
        assert!(lookup(0x0958).composition_excluded);
        // Singleton (Angstrom sign → Å).
        assert!(lookup(0x212B).composition_excluded);
        // Non-starter decomposition.
        assert!(lookup(0x0344).composition_excluded);
        assert!(!lookup(0x00C5).composition_excluded);
    }

    #[test]
    fn unassigned_and_out_of_range() {
        assert_eq!(lookup(0x0378).category, Category::Cn);
        assert_eq!(lookup(0x110000), PropertyRecord::UNASSIGNED);
        assert_eq!(lookup(u32::MAX), PropertyRecord::UNASSIGNED);
        assert_eq!(lookup(0xE000).category, Category::Co);
        assert_eq!(lookup(0x10FFFD).category, Category::Co);
        assert_eq!(lookup(0xD800).category, Category::Cs);
    }

    #[test]
    fn hangul_syllables_have_no_table_mapping() {
        let ga = lookup(0xAC00);
        assert_eq!(ga.category, Category::Lo);
        assert_eq!(ga.decomposition, None);
    }

    #[test]
    fn pair_index_is_the_inverse_of_canonical_pairs() {
        assert_eq!(UNICODE.compose_pair(0x0065, 0x0301), Some(0x00E9));
        assert_eq!(UNICODE.compose_pair(0x0041, 0x030A), Some(0x00C5));
        // Excluded composite is left out of the index.
        assert_eq!(UNICODE.compose_pair(0x0915, 0x093C), None);
        assert!(UNICODE.is_composition_second(0x0301));
        assert!(!UNICODE.is_composition_second(0x0041));
    }

    #[test]
    fn validity() {
        assert!(is_valid_code_point(0));
        assert!(is_valid_code_point(0x10FFFF));
        assert!(is_valid_code_point(0xD7FF));
        assert!(!is_valid_code_point(0xD800));
        assert!(!is_valid_code_point(0xDFFF));
        assert!(is_valid_code_point(0xE000));
        assert!(!is_valid_code_point(0x110000));
        assert!(SURROGATES.contains(&0xDB80));
        assert_eq!(unicode_version(), "14.0.0");
    }
}
