use thiserror::Error;

use crate::{
    context::{Context, Form},
    normalize::{self, NormalizeError},
    profile::{EncodingError, Profile},
    unicode::{Category, UNICODE},
};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizerError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    #[error("normalization error: {0}")]
    Normalize(#[from] NormalizeError),
}

/// Byte-oriented entry point: decode under a [`Profile`], normalize to a
/// [`Form`], re-encode under the same profile.
///
/// Holds no state beyond its configuration; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    form: Form,
    profile: Profile,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn normalize_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, NormalizerError> {
        let text = self.profile.decode(bytes)?;
        let normalized = self.normalize_text(text)?;
        Ok(self.profile.encode(&normalized))
    }

    pub fn normalize_str<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, NormalizerError> {
        self.normalize_text(Cow::Borrowed(text))
    }

    /// Categories of the decoded text, one per code point.
    pub fn categorize_bytes(&self, bytes: &[u8]) -> Result<Vec<Category>, NormalizerError> {
        let text = self.profile.decode(bytes)?;
        Ok(text.chars().map(|c| UNICODE.category(u32::from(c))).collect())
    }

    pub fn is_normalized(&self, text: &str) -> Result<bool, NormalizerError> {
        Ok(self.normalize_str(text)? == text)
    }

    fn normalize_text<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, NormalizerError> {
        if text.is_ascii() {
            return Ok(text);
        }
        let code_points: Vec<u32> = text.chars().map(u32::from).collect();
        let ctx = Context::new(self.form);
        match normalize::normalize_with(&ctx, &code_points)? {
            Cow::Borrowed(_) => Ok(text),
            Cow::Owned(normalized) => Ok(Cow::Owned(normalize::to_string(&normalized)?)),
        }
    }
}

#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    form: Form,
    profile: Profile,
}

impl NormalizerBuilder {
    pub fn form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            form: self.form,
            profile: self.profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn defaults_are_nfc_strict() {
        let n = Normalizer::builder().build();
        assert_eq!(n.form(), Form::Nfc);
        assert_eq!(n.profile(), Profile::Strict);
    }

    #[test]
    fn bytes_round_trip() -> TestResult {
        let nfd = Normalizer::builder().form(Form::Nfd).build();
        assert_eq!(nfd.normalize_bytes("é".as_bytes())?, "e\u{0301}".as_bytes());
        let nfc = Normalizer::builder().build();
        assert_eq!(nfc.normalize_bytes("e\u{0301}".as_bytes())?, "é".as_bytes());
        Ok(())
    }

    #[test]
    fn unchanged_text_is_borrowed() -> TestResult {
        let n = Normalizer::builder().build();
        let input = "already normalized: café 가";
        let out = n.normalize_str(input)?;
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert!(n.is_normalized(input)?);

        let nfkc = Normalizer::builder().form(Form::Nfkc).build();
        let out = nfkc.normalize_str(input)?;
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert!(matches!(nfkc.normalize_str("ﬁ café")?, Cow::Owned(s) if s == "fi café"));
        Ok(())
    }

    #[test]
    fn strict_profile_rejects_malformed_bytes() {
        let n = Normalizer::builder().profile(Profile::Strict).build();
        let err = n.normalize_bytes(b"caf\xC3").unwrap_err();
        assert!(matches!(err, NormalizerError::Encoding(EncodingError { offset: 3, .. })));
    }

    #[test]
    fn replace_profile_repairs_and_stays_normalized() -> TestResult {
        for form in Form::ALL {
            let n = Normalizer::builder()
                .form(form)
                .profile(Profile::Replace)
                .build();
            let out = n.normalize_bytes(b"e\xCC\x81\xFFx")?;
            let text = String::from_utf8(out)?;
            assert!(text.contains('\u{FFFD}'));
            assert!(n.is_normalized(&text)?, "{form}: {text:?}");
        }
        Ok(())
    }

    #[test]
    fn categorize_bytes_uses_the_profile() -> TestResult {
        let strict = Normalizer::builder().build();
        assert!(strict.categorize_bytes(b"A\xFF").is_err());
        let replace = Normalizer::builder().profile(Profile::Replace).build();
        assert_eq!(
            replace.categorize_bytes(b"A\xFF")?,
            vec![Category::Lu, Category::So]
        );
        Ok(())
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Normalizer>();
    }
}
