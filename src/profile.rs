//! Encoding profiles: how external UTF-8 bytes become text and back.
//!
//! * `strict` – malformed input is an [`EncodingError`].
//! * `replace` – every maximal malformed subsequence becomes U+FFFD.
//!
//! With the `simd` feature, strict validation runs through `simdutf8`; the
//! scalar validator is only consulted to locate the offending byte.

use crate::context::UnsupportedOption;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Substituted for malformed input under [`Profile::Replace`].
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    #[default]
    Strict,
    Replace,
}

impl Profile {
    pub const NAMES: [&'static str; 2] = ["strict", "replace"];

    #[inline(always)]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Bytes → text under this profile. Valid input is borrowed.
    pub fn decode<'a>(self, bytes: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        match validate(bytes) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(offset) => match self {
                Profile::Strict => Err(EncodingError {
                    offset,
                    profile: self,
                }),
                Profile::Replace => Ok(String::from_utf8_lossy(bytes)),
            },
        }
    }

    /// Text → bytes. A `str` is always valid UTF-8, so this cannot fail under
    /// either profile.
    #[inline]
    pub fn encode(self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = UnsupportedOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Profile::Strict),
            "replace" => Ok(Profile::Replace),
            _ => Err(UnsupportedOption::new("profile", s, &Self::NAMES)),
        }
    }
}

/// Input bytes are not valid UTF-8 and the profile does not allow repair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected byte sequence at offset {offset} (profile \"{profile}\")")]
pub struct EncodingError {
    /// Offset of the first byte of the malformed sequence.
    pub offset: usize,
    pub profile: Profile,
}

/// `Ok(text)` or the offset of the first malformed byte.
#[inline]
fn validate(bytes: &[u8]) -> Result<&str, usize> {
    #[cfg(feature = "simd")]
    {
        if let Ok(text) = simdutf8::basic::from_utf8(bytes) {
            return Ok(text);
        }
    }
    std::str::from_utf8(bytes).map_err(|e| e.valid_up_to())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_borrowed_under_both_profiles() {
        let bytes = "héllo 世界".as_bytes();
        for profile in [Profile::Strict, Profile::Replace] {
            let text = profile.decode(bytes).unwrap();
            assert!(matches!(text, Cow::Borrowed(_)));
            assert_eq!(text, "héllo 世界");
        }
    }

    #[test]
    fn strict_reports_offset() {
        let err = Profile::Strict.decode(b"ab\xFFcd").unwrap_err();
        assert_eq!(err.offset, 2);
        assert_eq!(err.profile, Profile::Strict);
        assert_eq!(
            err.to_string(),
            "unexpected byte sequence at offset 2 (profile \"strict\")"
        );
    }

    #[test]
    fn strict_rejects_truncated_sequence() {
        // é cut after its lead byte
        let err = Profile::Strict.decode(b"caf\xC3").unwrap_err();
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn replace_substitutes_each_maximal_subsequence() {
        let text = Profile::Replace.decode(b"a\xFF\xFEb\xE2\x82").unwrap();
        assert_eq!(text, "a\u{FFFD}\u{FFFD}b\u{FFFD}");
    }

    #[test]
    fn names() {
        assert_eq!("strict".parse::<Profile>().unwrap(), Profile::Strict);
        assert_eq!("replace".parse::<Profile>().unwrap(), Profile::Replace);
        let err = "lossy".parse::<Profile>().unwrap_err();
        assert_eq!(err.to_string(), "bad profile \"lossy\": must be strict or replace");
        assert_eq!(Profile::default(), Profile::Strict);
        assert_eq!(Profile::Replace.encode("x"), b"x".to_vec());
    }
}
