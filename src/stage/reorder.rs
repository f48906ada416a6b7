//! src/stage/reorder.rs
//!
//! Canonical ordering of combining marks.

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::PropertyLookup,
};
use std::borrow::Cow;

/// Stable sort of every maximal run of non-starters by combining class.
///
/// Starters (class 0) delimit runs and never move. Marks with equal classes
/// keep their relative order, so `a + ̈ + ́` and `a + ́ + ̈` stay distinct.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reorder;

impl Stage for Reorder {
    fn name(&self) -> &'static str {
        "reorder"
    }

    #[inline]
    fn needs_apply(&self, text: &[u32], ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(!is_canonically_ordered(ctx.table, text))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, [u32]>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError> {
        if is_canonically_ordered(ctx.table, &text) {
            return Ok(text);
        }
        let mut out = text.into_owned();
        reorder_in_place(ctx.table, &mut out);
        Ok(Cow::Owned(out))
    }
}

/// No adjacent pair `a, b` with `ccc(a) > ccc(b) > 0`.
pub fn is_canonically_ordered(table: &dyn PropertyLookup, text: &[u32]) -> bool {
    let mut previous = 0u8;
    for &cp in text {
        let class = if cp < 0x300 { 0 } else { table.combining_class(cp) };
        if class != 0 && previous > class {
            return false;
        }
        previous = class;
    }
    true
}

pub fn reorder_in_place(table: &dyn PropertyLookup, text: &mut [u32]) {
    for run in text.split_mut(|&cp| table.combining_class(cp) == 0) {
        if run.len() > 1 {
            // `sort_by_key` is stable.
            run.sort_by_key(|&cp| table.combining_class(cp));
        }
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, context::Form, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for Reorder {
        fn forms() -> &'static [Form] {
            &[Form::Nfd]
        }

        fn samples(_form: Form) -> &'static [&'static str] {
            &[
                "a\u{0301}\u{0323}",
                "a\u{0323}\u{0301}",
                "a\u{0308}\u{0301}\u{0323}b\u{05AE}\u{0300}",
                "\u{0301}\u{0323}",
                "",
            ]
        }

        fn should_pass_through(_form: Form) -> &'static [&'static str] {
            &["hello", "a\u{0323}\u{0301}", "a\u{0301}\u{0308}", "é", ""]
        }

        fn should_transform(_form: Form) -> &'static [(&'static str, &'static str)] {
            &[
                ("a\u{0301}\u{0323}", "a\u{0323}\u{0301}"),
                ("\u{0345}\u{0301}x", "\u{0301}\u{0345}x"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Reorder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::UNICODE;

    fn reordered(text: &[u32]) -> Vec<u32> {
        let mut out = text.to_vec();
        reorder_in_place(&UNICODE, &mut out);
        out
    }

    #[test]
    fn sorts_by_class_within_a_run() {
        // acute (230) before dot below (220) → swapped
        assert_eq!(
            reordered(&[0x0061, 0x0301, 0x0323]),
            vec![0x0061, 0x0323, 0x0301]
        );
    }

    #[test]
    fn equal_classes_keep_their_order() {
        // diaeresis and acute are both 230
        assert_eq!(
            reordered(&[0x0061, 0x0308, 0x0301, 0x0323]),
            vec![0x0061, 0x0323, 0x0308, 0x0301]
        );
        assert_eq!(
            reordered(&[0x0061, 0x0301, 0x0308, 0x0323]),
            vec![0x0061, 0x0323, 0x0301, 0x0308]
        );
    }

    #[test]
    fn starters_are_run_boundaries() {
        // The starter `b` keeps the two runs apart.
        assert_eq!(
            reordered(&[0x0061, 0x0301, 0x0062, 0x0323]),
            vec![0x0061, 0x0301, 0x0062, 0x0323]
        );
        // Leading run without a starter is still sorted.
        assert_eq!(reordered(&[0x0301, 0x0323]), vec![0x0323, 0x0301]);
    }

    #[test]
    fn twice_equals_once() {
        let input = [0x0061, 0x0345, 0x05AE, 0x0301, 0x0323, 0x0334, 0x0062, 0x0301, 0x0315];
        let once = reordered(&input);
        assert_eq!(reordered(&once), once);
        assert!(is_canonically_ordered(&UNICODE, &once));
        assert!(!is_canonically_ordered(&UNICODE, &input));
    }
}
