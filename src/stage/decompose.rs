//! src/stage/decompose.rs
//!
//! Full (recursive) decomposition of every code point.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{PropertyLookup, hangul},
};
use smallvec::{SmallVec, smallvec};
use std::borrow::Cow;

/// Deepest mapping chain accepted from the table. UCD chains are at most
/// three levels deep.
pub const MAX_DECOMPOSITION_DEPTH: usize = 4;

/// Longest full decomposition accepted for one code point (U+FDFA expands to 18).
pub const MAX_DECOMPOSITION_LENGTH: usize = 32;

/// Replaces each code point by its full decomposition.
///
/// Canonical mappings only for NFC/NFD; both canonical and compatibility
/// mappings for NFKC/NFKD (the form is read from the [`Context`]). Hangul
/// syllables are split algorithmically into their jamo.
///
/// Output keeps the order of the input; the expansion of one code point is
/// inserted contiguously. The result is *not* canonically ordered yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decompose;

impl Stage for Decompose {
    fn name(&self) -> &'static str {
        "decompose"
    }

    #[inline]
    fn needs_apply(&self, text: &[u32], ctx: &Context<'_>) -> Result<bool, StageError> {
        let compat = ctx.form.is_compatibility();
        Ok(text
            .iter()
            .any(|&cp| cp >= 0x80 && decomposes(ctx.table, cp, compat)))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, [u32]>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let compat = ctx.form.is_compatibility();
        let mut out = Vec::with_capacity(text.len() + text.len() / 2);
        for &cp in text.iter() {
            decompose_code_point(ctx.table, cp, compat, &mut out)?;
        }
        Ok(Cow::Owned(out))
    }
}

#[inline(always)]
fn decomposes(table: &dyn PropertyLookup, cp: u32, compat: bool) -> bool {
    hangul::is_syllable(cp) || table.lookup(cp).decomposition_for(compat).is_some()
}

/// Appends the full decomposition of `cp` to `out`.
///
/// Expansion is iterative: `pending` holds code points still to be examined
/// together with their mapping depth, last element first.
pub fn decompose_code_point(
    table: &dyn PropertyLookup,
    cp: u32,
    compat: bool,
    out: &mut Vec<u32>,
) -> Result<(), StageError> {
    if cp < 0x80 {
        out.push(cp);
        return Ok(());
    }

    let start = out.len();
    let mut pending: SmallVec<[(u32, usize); 8]> = smallvec![(cp, 0)];

    while let Some((current, depth)) = pending.pop() {
        if let Some(jamo) = hangul::decompose(current) {
            out.extend_from_slice(&jamo);
        } else if let Some(mapping) = table.lookup(current).decomposition_for(compat) {
            if depth >= MAX_DECOMPOSITION_DEPTH || mapping.is_empty() {
                return Err(StageError::corruption(
                    "decompose",
                    format!(
                        "U+{cp:04X}: mapping of U+{current:04X} at depth {depth} does not terminate"
                    ),
                ));
            }
            pending.extend(mapping.iter().rev().map(|&part| (part, depth + 1)));
        } else {
            out.push(current);
        }

        if out.len() - start > MAX_DECOMPOSITION_LENGTH {
            return Err(StageError::corruption(
                "decompose",
                format!("U+{cp:04X} expands beyond {MAX_DECOMPOSITION_LENGTH} code points"),
            ));
        }
    }
    Ok(())
}

/// Convenience wrapper returning a fresh buffer.
pub fn decompose(
    table: &dyn PropertyLookup,
    text: &[u32],
    compat: bool,
) -> Result<Vec<u32>, StageError> {
    let mut out = Vec::with_capacity(text.len());
    for &cp in text {
        decompose_code_point(table, cp, compat, &mut out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, context::Form, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for Decompose {
        fn forms() -> &'static [Form] {
            &Form::ALL
        }

        fn samples(_form: Form) -> &'static [&'static str] {
            &["café", "Å", "가각", "ﬁle ①", "e\u{0301}", "Ω", ""]
        }

        fn should_pass_through(form: Form) -> &'static [&'static str] {
            if form.is_compatibility() {
                &["hello", "world123", "e\u{0301}\u{0323}", ""]
            } else {
                &["hello", "ﬁ ½ ①", "ᄀ\u{1161}", ""]
            }
        }

        fn should_transform(form: Form) -> &'static [(&'static str, &'static str)] {
            if form.is_compatibility() {
                &[("ﬁ", "fi"), ("ǆ", "dz\u{030C}"), ("ẛ", "s\u{0307}")]
            } else {
                &[("é", "e\u{0301}"), ("ẛ", "ſ\u{0307}"), ("각", "ᄀ\u{1161}\u{11A8}")]
            }
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Decompose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Form;
    use crate::unicode::{PropertyRecord, UNICODE};

    fn canonical(text: &[u32]) -> Vec<u32> {
        decompose(&UNICODE, text, false).unwrap()
    }

    fn compat(text: &[u32]) -> Vec<u32> {
        decompose(&UNICODE, text, true).unwrap()
    }

    #[test]
    fn recursive_canonical_chain() {
        // ǻ → å + ́ → a + ̊ + ́
        assert_eq!(canonical(&[0x01FB]), vec![0x0061, 0x030A, 0x0301]);
        // ẛ (long s with dot) keeps ſ canonically…
        assert_eq!(canonical(&[0x1E9B]), vec![0x017F, 0x0307]);
        // …and folds it to s under compatibility, through the canonical step.
        assert_eq!(compat(&[0x1E9B]), vec![0x0073, 0x0307]);
    }

    #[test]
    fn singletons() {
        assert_eq!(canonical(&[0x212B]), vec![0x0041, 0x030A]);
        assert_eq!(canonical(&[0x2126]), vec![0x03A9]);
    }

    #[test]
    fn compatibility_only_under_compat() {
        assert_eq!(canonical(&[0xFB01]), vec![0xFB01]);
        assert_eq!(compat(&[0xFB01]), vec![0x0066, 0x0069]);
        assert_eq!(compat(&[0x2460]), vec![0x0031]);
        assert_eq!(compat(&[0xFDFA]).len(), 18);
    }

    #[test]
    fn hangul() {
        assert_eq!(canonical(&[0xAC00]), vec![0x1100, 0x1161]);
        assert_eq!(canonical(&[0xD7A3]), vec![0x1112, 0x1175, 0x11C2]);
    }

    #[test]
    fn order_and_contiguity() {
        assert_eq!(
            canonical(&[0x0041, 0x00C0, 0x0042, 0x00E9]),
            vec![0x0041, 0x0041, 0x0300, 0x0042, 0x0065, 0x0301]
        );
    }

    #[test]
    fn zero_copy_when_nothing_decomposes() {
        let ctx = Context::new(Form::Nfd);
        let input = [0x0068, 0x0069, 0x0301];
        let out = Decompose.apply(Cow::Borrowed(&input[..]), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    /// Table whose every entry maps back onto itself.
    struct CyclicTable;

    impl PropertyLookup for CyclicTable {
        fn lookup(&self, cp: u32) -> PropertyRecord {
            static SELF_LOOP: [u32; 2] = [0x00C0, 0x0300];
            if cp == 0x00C0 {
                PropertyRecord {
                    decomposition: Some(crate::unicode::Decomposition::canonical(&SELF_LOOP)),
                    ..PropertyRecord::UNASSIGNED
                }
            } else {
                PropertyRecord::UNASSIGNED
            }
        }

        fn compose_pair(&self, _: u32, _: u32) -> Option<u32> {
            None
        }

        fn is_composition_second(&self, _: u32) -> bool {
            false
        }
    }

    #[test]
    fn cyclic_table_is_reported_not_looped() {
        let err = decompose(&CyclicTable, &[0x00C0], false).unwrap_err();
        let StageError::DataCorruption { stage, detail } = err;
        assert_eq!(stage, "decompose");
        assert!(detail.contains("U+00C0"), "{detail}");
    }

    /// Table whose mapping fans out past any real decomposition length.
    struct ExplodingTable;

    impl PropertyLookup for ExplodingTable {
        fn lookup(&self, cp: u32) -> PropertyRecord {
            static FAN_OUT: [u32; 6] = [0x0100, 0x0100, 0x0100, 0x0100, 0x0100, 0x0100];
            static LEAVES: [u32; 6] = [0x41; 6];
            let mapping: &'static [u32] = match cp {
                0x00FF => &FAN_OUT,
                0x0100 => &LEAVES,
                _ => return PropertyRecord::UNASSIGNED,
            };
            PropertyRecord {
                decomposition: Some(crate::unicode::Decomposition::canonical(mapping)),
                ..PropertyRecord::UNASSIGNED
            }
        }

        fn compose_pair(&self, _: u32, _: u32) -> Option<u32> {
            None
        }

        fn is_composition_second(&self, _: u32) -> bool {
            false
        }
    }

    #[test]
    fn oversized_expansion_is_reported() {
        let err = decompose(&ExplodingTable, &[0x00FF], false).unwrap_err();
        assert!(err.to_string().contains("expands beyond"), "{err}");
    }
}
