//! Normalization driver: validates input and runs the process chain for the
//! requested [`Form`].

use crate::{
    context::{Context, Form},
    process::{COMPOSING, DECOMPOSING, Process},
    stage::StageError,
    unicode::is_valid_code_point,
};
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("invalid code point 0x{code_point:X} at index {index}")]
    InvalidInput { code_point: u32, index: usize },

    #[error(transparent)]
    DataCorruption(#[from] StageError),
}

/// Normalizes `code_points` to `form`.
///
/// Fails with [`NormalizeError::InvalidInput`] on the first value outside
/// `0..=0x10FFFF` or inside the surrogate block. Never returns partial output.
pub fn normalize(code_points: &[u32], form: Form) -> Result<Vec<u32>, NormalizeError> {
    normalize_with(&Context::new(form), code_points).map(Cow::into_owned)
}

/// Same as [`normalize`] with an explicit context; borrows the input when it
/// is already normalized.
pub fn normalize_with<'a>(
    ctx: &Context<'_>,
    code_points: &'a [u32],
) -> Result<Cow<'a, [u32]>, NormalizeError> {
    validate(code_points)?;
    match run(ctx, Cow::Borrowed(code_points))? {
        // composing forms decompose first, so unchanged text can come back owned
        Cow::Owned(normalized) if normalized == code_points => Ok(Cow::Borrowed(code_points)),
        normalized => Ok(normalized),
    }
}

/// Normalizes a Rust string. Input is valid by construction, so the only
/// possible error is [`NormalizeError::DataCorruption`].
pub fn normalize_str(text: &str, form: Form) -> Result<String, NormalizeError> {
    if text.is_ascii() {
        return Ok(text.to_owned());
    }
    let ctx = Context::new(form);
    let code_points: Vec<u32> = text.chars().map(u32::from).collect();
    let normalized = run(&ctx, Cow::Owned(code_points))?;
    to_string(&normalized)
}

/// True when normalizing `code_points` to `form` would leave them unchanged.
pub fn is_normalized(code_points: &[u32], form: Form) -> Result<bool, NormalizeError> {
    let normalized = normalize_with(&Context::new(form), code_points)?;
    Ok(normalized.as_ref() == code_points)
}

fn validate(code_points: &[u32]) -> Result<(), NormalizeError> {
    match code_points
        .iter()
        .position(|&cp| !is_valid_code_point(cp))
    {
        Some(index) => Err(NormalizeError::InvalidInput {
            code_point: code_points[index],
            index,
        }),
        None => Ok(()),
    }
}

fn run<'a>(ctx: &Context<'_>, text: Cow<'a, [u32]>) -> Result<Cow<'a, [u32]>, NormalizeError> {
    let result = if ctx.form.is_composing() {
        COMPOSING.process(text, ctx)
    } else {
        DECOMPOSING.process(text, ctx)
    };
    result.map_err(|err| {
        tracing::error!(form = %ctx.form, error = %err, "normalization aborted");
        NormalizeError::DataCorruption(err)
    })
}

pub(crate) fn to_string(code_points: &[u32]) -> Result<String, NormalizeError> {
    code_points
        .iter()
        .map(|&cp| {
            char::from_u32(cp).ok_or_else(|| {
                NormalizeError::DataCorruption(StageError::corruption(
                    "output",
                    format!("0x{cp:X} is not a Unicode scalar value"),
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{Decomposition, PropertyLookup, PropertyRecord};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn e_acute_both_ways() -> TestResult {
        assert_eq!(normalize(&[0x0065, 0x0301], Form::Nfc)?, vec![0x00E9]);
        assert_eq!(normalize(&[0x00E9], Form::Nfd)?, vec![0x0065, 0x0301]);
        Ok(())
    }

    #[test]
    fn hangul_both_ways() -> TestResult {
        assert_eq!(normalize(&[0x1100, 0x1161], Form::Nfc)?, vec![0xAC00]);
        assert_eq!(normalize(&[0xAC00], Form::Nfd)?, vec![0x1100, 0x1161]);
        Ok(())
    }

    #[test]
    fn compatibility_forms() -> TestResult {
        assert_eq!(normalize_str("ﬀﬁ ½ ①", Form::Nfkc)?, "fffi 1⁄2 1");
        assert_eq!(normalize_str("ﬀﬁ ½ ①", Form::Nfkd)?, "fffi 1⁄2 1");
        assert_eq!(normalize_str("ﬀﬁ ½ ①", Form::Nfc)?, "ﬀﬁ ½ ①");
        // ẛ̣ : canonical forms keep the long s, compatibility forms fold it
        assert_eq!(normalize_str("\u{1E9B}\u{0323}", Form::Nfc)?, "\u{1E9B}\u{0323}");
        assert_eq!(normalize_str("\u{1E9B}\u{0323}", Form::Nfd)?, "\u{017F}\u{0323}\u{0307}");
        assert_eq!(normalize_str("\u{1E9B}\u{0323}", Form::Nfkc)?, "\u{1E69}");
        assert_eq!(normalize_str("\u{1E9B}\u{0323}", Form::Nfkd)?, "s\u{0323}\u{0307}");
        Ok(())
    }

    #[test]
    fn invalid_input_is_rejected_with_its_position() {
        assert_eq!(
            normalize(&[0x0041, 0xD800], Form::Nfc),
            Err(NormalizeError::InvalidInput {
                code_point: 0xD800,
                index: 1
            })
        );
        assert_eq!(
            normalize(&[0x110000], Form::Nfd),
            Err(NormalizeError::InvalidInput {
                code_point: 0x110000,
                index: 0
            })
        );
        let err = normalize(&[u32::MAX], Form::Nfkc).unwrap_err();
        assert_eq!(err.to_string(), "invalid code point 0xFFFFFFFF at index 0");
    }

    #[test]
    fn empty_input() -> TestResult {
        for form in Form::ALL {
            assert!(normalize(&[], form)?.is_empty());
            assert_eq!(normalize_str("", form)?, "");
        }
        Ok(())
    }

    #[test]
    fn already_normalized_input_is_borrowed() -> TestResult {
        let input = [0x3042, 0x0041];
        let out = normalize_with(&Context::new(Form::Nfc), &input)?;
        assert!(matches!(out, Cow::Borrowed(_)));

        // é and 가 both decompose before recomposing to themselves
        let composed = [0x0063, 0x0061, 0x0066, 0x00E9, 0x0020, 0xAC00];
        for form in [Form::Nfc, Form::Nfkc] {
            let out = normalize_with(&Context::new(form), &composed)?;
            assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == composed.as_ptr()), "{form}");
        }
        let decomposed = [0x0065, 0x0301, 0x1100, 0x1161];
        let out = normalize_with(&Context::new(Form::Nfd), &decomposed)?;
        assert!(matches!(out, Cow::Borrowed(_)));
        let out = normalize_with(&Context::new(Form::Nfc), &decomposed)?;
        assert_eq!(&*out, &[0x00E9, 0xAC00]);

        let precomposed = [0x00E9, 0x0041];
        assert!(is_normalized(&precomposed, Form::Nfc)?);
        assert!(!is_normalized(&precomposed, Form::Nfd)?);
        Ok(())
    }

    struct SelfReferentialTable;

    impl PropertyLookup for SelfReferentialTable {
        fn lookup(&self, cp: u32) -> PropertyRecord {
            static LOOP: [u32; 1] = [0x00E9];
            if cp == 0x00E9 {
                PropertyRecord {
                    decomposition: Some(Decomposition::canonical(&LOOP)),
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
    fn corrupted_table_aborts_the_call() {
        let ctx = Context::with_table(Form::Nfc, &SelfReferentialTable);
        let err = normalize_with(&ctx, &[0x0041, 0x00E9]).unwrap_err();
        assert!(matches!(err, NormalizeError::DataCorruption(_)));
        assert!(err.to_string().starts_with("property table corrupted"));
    }
}
