use crate::{
    context::{Context, Form},
    stage::Stage,
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Forms under which the stage is exercised.
    fn forms() -> &'static [Form] {
        &Form::ALL
    }

    /// General samples (may or may not trigger changes).
    fn samples(_form: Form) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must come back unchanged and still borrowed.
    fn should_pass_through(_form: Form) -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs for known transformations.
    fn should_transform(_form: Form) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `needs_apply` answers exactly. A conservative quick check may
    /// return `true` for text `apply` leaves alone; it must never return
    /// `false` for text `apply` would change.
    fn exact_needs_apply() -> bool {
        true
    }
}

/// Runs every universal stage contract:
///
/// 1. `zero_copy_when_no_changes`: unchanged text keeps the caller's buffer
/// 2. `stage_is_idempotent`: applying twice equals applying once
/// 3. `needs_apply_is_accurate`: the quick check never misses a change
/// 4. `handles_empty_and_ascii`
/// 5. `no_panic_on_mixed_scripts`
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

fn code_points(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Quick check first, then `apply` if it asks for it; the way a process runs
/// a stage.
fn run<'a, S: Stage>(stage: &S, text: Cow<'a, [u32]>, ctx: &Context<'_>) -> Cow<'a, [u32]> {
    if stage.needs_apply(&text, ctx).unwrap() {
        stage.apply(text, ctx).unwrap()
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &form in S::forms() {
        let ctx = Context::new(form);

        for &input in S::samples(form) {
            let input = code_points(input);
            let text = run(&stage, Cow::Borrowed(&input[..]), &ctx);
            if text.as_ref() == input.as_slice() {
                assert!(
                    matches!(text, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                    "unchanged sample was copied ({form}, {input:X?})"
                );
            }

            // second pass must not allocate again
            let old_ptr = text.as_ptr();
            let again = run(&stage, text, &ctx);
            assert_eq!(
                old_ptr,
                again.as_ptr(),
                "zero-copy violated on second pass ({form}, {input:X?})"
            );
        }

        for &pass_through in S::should_pass_through(form) {
            let input = code_points(pass_through);
            let text = run(&stage, Cow::Borrowed(&input[..]), &ctx);
            assert_eq!(text.as_ref(), input.as_slice(), "{form}: `{pass_through}`");
            assert!(
                matches!(text, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()),
                "zero-copy violated on pass-through sample ({form}, `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(form) {
            let input = code_points(input);
            let text = run(&stage, Cow::Borrowed(&input[..]), &ctx);
            assert_eq!(text.as_ref(), code_points(expected).as_slice(), "{form}");
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &form in S::forms() {
        let ctx = Context::new(form);
        for &input in S::samples(form) {
            let input = code_points(input);
            let once = stage.apply(Cow::Borrowed(&input[..]), &ctx).unwrap();
            let twice = stage.apply(once.clone(), &ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent ({form}, {input:X?})");
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &form in S::forms() {
        let ctx = Context::new(form);
        let samples = S::samples(form)
            .iter()
            .chain(S::should_pass_through(form))
            .copied()
            .chain(S::should_transform(form).iter().map(|&(input, _)| input));
        for sample in samples {
            check_accuracy(&stage, &code_points(sample), &ctx);
        }
    }
}

fn check_accuracy<S: StageTestConfig>(stage: &S, input: &[u32], ctx: &Context<'_>) {
    let predicted = stage.needs_apply(input, ctx).unwrap();
    let changed = stage.apply(Cow::Borrowed(input), ctx).unwrap().as_ref() != input;
    if changed {
        assert!(
            predicted,
            "needs_apply missed a change in `{}` ({}, {input:X?})",
            stage.name(),
            ctx.form
        );
    } else if S::exact_needs_apply() {
        assert!(
            !predicted,
            "needs_apply false positive in `{}` ({}, {input:X?})",
            stage.name(),
            ctx.form
        );
    }
}

pub fn handles_empty_and_ascii<S: StageTestConfig>(stage: S) {
    for &form in S::forms() {
        let ctx = Context::new(form);

        let empty: [u32; 0] = [];
        assert!(!stage.needs_apply(&empty, &ctx).unwrap());
        assert!(stage.apply(Cow::Borrowed(&empty[..]), &ctx).unwrap().is_empty());

        let ascii = code_points("The quick brown fox, 0123456789 ~!@#$%^&*()");
        assert!(!stage.needs_apply(&ascii, &ctx).unwrap());
        let out = stage.apply(Cow::Borrowed(&ascii[..]), &ctx).unwrap();
        assert_eq!(out.as_ref(), ascii.as_slice());
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    const MIXED: &[&str] = &[
        "Ǆemal ﬁnal ẛ̣ ½ ① ㎒",
        "한국어 \u{1100}\u{1161}\u{11A8} 각",
        "العربية مَرْحَبًا",
        "עִבְרִית",
        "हिन्दी क़ ड़",
        "ไทย ภาษา",
        "日本語 ｶﾞ パ",
        "\u{0301}\u{0316} leading marks",
        "\u{1D15E}\u{1D160} 𝄞",
        "\u{0F73}\u{0F75}\u{0F81}",
        "👨\u{200D}👩\u{200D}👧 🇫🇷",
        "\u{FDFA}\u{FB2C}",
    ];
    for &form in S::forms() {
        let ctx = Context::new(form);
        for &text in MIXED {
            let input = code_points(text);
            let _ = stage.needs_apply(&input, &ctx).unwrap();
            let _ = stage.apply(Cow::Borrowed(&input[..]), &ctx).unwrap();
        }
    }
}
