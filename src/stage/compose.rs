//! src/stage/compose.rs
//!
//! Canonical composition of a decomposed, canonically ordered sequence.
//!
//! The scan is a small state machine over the output buffer:
//!
//! * `starter` – index of the last starter that may still absorb marks;
//!   `None` until the first class-0 code point.
//! * `last_class` – class of the last code point emitted after that starter;
//!   `None` while nothing has been emitted since the starter.
//!
//! A candidate `C` of class `cc` is *blocked* from the starter when
//! `last_class` is `Some(lc)` with `lc == 0 || lc >= cc`. Unblocked candidates
//! are tried against the Hangul rule and then against the pair index; a
//! composite is written over the starter and `C` is dropped.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{PropertyLookup, hangul},
};
use std::borrow::Cow;

/// Canonical composition (the last step of NFC and NFKC).
///
/// Expects input produced by [`super::Decompose`] and [`super::Reorder`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Compose;

impl Stage for Compose {
    fn name(&self) -> &'static str {
        "compose"
    }

    /// Conservative: true whenever some code point could be the second half
    /// of a composition.
    #[inline]
    fn needs_apply(&self, text: &[u32], ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(text.iter().any(|&cp| {
            cp >= 0x300 && (hangul::is_composable_jamo(cp) || ctx.table.is_composition_second(cp))
        }))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, [u32]>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError> {
        let composed = compose(ctx.table, &text);
        if composed.len() == text.len() {
            // Composition only ever shortens the sequence.
            return Ok(text);
        }
        Ok(Cow::Owned(composed))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Composer {
    starter: Option<usize>,
    last_class: Option<u8>,
}

impl Composer {
    #[inline(always)]
    fn is_blocked(&self, class: u8) -> bool {
        matches!(self.last_class, Some(last) if last == 0 || last >= class)
    }

    /// Starter slot `cp` may be folded into, if any.
    #[inline(always)]
    fn candidate(&self, class: u8) -> Option<usize> {
        self.starter.filter(|_| !self.is_blocked(class))
    }

    /// Records that a code point of `class` was emitted at `index`.
    #[inline(always)]
    fn emitted(&mut self, index: usize, class: u8) {
        if class == 0 {
            self.starter = Some(index);
            self.last_class = None;
        } else {
            self.last_class = Some(class);
        }
    }
}

/// Primary composite of `starter + combining`, honouring exclusions.
#[inline]
pub fn compose_pair(table: &dyn PropertyLookup, starter: u32, combining: u32) -> Option<u32> {
    if let Some(syllable) = hangul::compose(starter, combining) {
        return Some(syllable);
    }
    table
        .compose_pair(starter, combining)
        .filter(|&composite| !table.lookup(composite).composition_excluded)
}

/// Composes `text`, which must already be decomposed and canonically ordered.
pub fn compose(table: &dyn PropertyLookup, text: &[u32]) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(text.len());
    let mut state = Composer::default();

    for &cp in text {
        let class = table.combining_class(cp);
        if let Some(index) = state.candidate(class) {
            if let Some(composite) = compose_pair(table, out[index], cp) {
                out[index] = composite;
                continue;
            }
        }
        out.push(cp);
        state.emitted(out.len() - 1, class);
    }
    out
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, context::Form, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for Compose {
        fn forms() -> &'static [Form] {
            &[Form::Nfc]
        }

        fn samples(_form: Form) -> &'static [&'static str] {
            &[
                "cafe\u{0301}",
                "ᄀ\u{1161}\u{11A8}",
                "a\u{0323}\u{0302}",
                "A\u{030A}",
                "\u{0301}e",
                "",
            ]
        }

        fn should_pass_through(_form: Form) -> &'static [&'static str] {
            &["hello", "café", "가", "x\u{0301}", ""]
        }

        fn should_transform(_form: Form) -> &'static [(&'static str, &'static str)] {
            &[
                ("e\u{0301}", "é"),
                ("ᄀ\u{1161}", "가"),
                ("a\u{0323}\u{0302}", "ậ"),
            ]
        }

        fn exact_needs_apply() -> bool {
            false
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Compose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::UNICODE;

    fn composed(text: &[u32]) -> Vec<u32> {
        compose(&UNICODE, text)
    }

    #[test]
    fn simple_pair() {
        assert_eq!(composed(&[0x0065, 0x0301]), vec![0x00E9]);
    }

    #[test]
    fn hangul_lv_and_lvt() {
        assert_eq!(composed(&[0x1100, 0x1161]), vec![0xAC00]);
        assert_eq!(composed(&[0x1100, 0x1161, 0x11A8]), vec![0xAC01]);
        // Precomposed LV + T
        assert_eq!(composed(&[0xAC00, 0x11A8]), vec![0xAC01]);
    }

    #[test]
    fn successive_marks_compose_in_turn() {
        // a + dot below + circumflex → ạ + ̂ → ậ
        assert_eq!(composed(&[0x0061, 0x0323, 0x0302]), vec![0x1EAD]);
    }

    #[test]
    fn lower_class_mark_does_not_block() {
        // ring below (220) has no pair with `e`; acute (230) still reaches it
        assert_eq!(composed(&[0x0065, 0x0325, 0x0301]), vec![0x00E9, 0x0325]);
    }

    #[test]
    fn same_class_mark_blocks() {
        // é + ̈ has no pair
        assert_eq!(
            composed(&[0x0065, 0x0301, 0x0308]),
            vec![0x00E9, 0x0308]
        );
        // ̽ (230) does not compose with `a` and blocks the later acute (230)
        assert_eq!(
            composed(&[0x0061, 0x033D, 0x0301]),
            vec![0x0061, 0x033D, 0x0301]
        );
    }

    #[test]
    fn starter_pairs_need_adjacency() {
        // ୋ = େ + ା (both class 0)
        assert_eq!(composed(&[0x0B47, 0x0B3E]), vec![0x0B4B]);
        // An intervening mark blocks the second starter.
        assert_eq!(
            composed(&[0x0B47, 0x0B3C, 0x0B3E]),
            vec![0x0B47, 0x0B3C, 0x0B3E]
        );
    }

    #[test]
    fn exclusions_are_never_produced() {
        // क + ़ would be क़ (U+0958), which is excluded.
        assert_eq!(composed(&[0x0915, 0x093C]), vec![0x0915, 0x093C]);
        assert_eq!(compose_pair(&UNICODE, 0x0915, 0x093C), None);
    }

    #[test]
    fn leading_non_starters_have_no_starter() {
        assert_eq!(composed(&[0x0301, 0x0065]), vec![0x0301, 0x0065]);
        assert_eq!(
            composed(&[0x0301, 0x0065, 0x0301]),
            vec![0x0301, 0x00E9]
        );
    }

    #[test]
    fn state_machine_transitions() {
        let mut state = Composer::default();
        assert_eq!(state.candidate(230), None);
        state.emitted(0, 0);
        assert_eq!(state.candidate(230), Some(0));
        state.emitted(1, 220);
        assert_eq!(state.candidate(230), Some(0));
        assert_eq!(state.candidate(220), None);
        assert_eq!(state.candidate(0), None);
        state.emitted(2, 0);
        assert_eq!(state, Composer { starter: Some(2), last_class: None });
    }
}
