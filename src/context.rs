// src/context.rs
// Runtime configuration shared by every stage of one normalization call.
// Tiny and Copy; the table reference points at immutable data.

use crate::unicode::{PropertyLookup, UNICODE};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Form {
    /// Canonical decomposition followed by canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl Form {
    pub const ALL: [Form; 4] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd];
    pub const NAMES: [&'static str; 4] = ["nfc", "nfd", "nfkc", "nfkd"];

    #[inline(always)]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// NFKC and NFKD apply compatibility mappings.
    #[inline(always)]
    pub const fn is_compatibility(self) -> bool {
        matches!(self, Form::Nfkc | Form::Nfkd)
    }

    /// NFC and NFKC recompose after reordering.
    #[inline(always)]
    pub const fn is_composing(self) -> bool {
        matches!(self, Form::Nfc | Form::Nfkc)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Form {
    type Err = UnsupportedOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .position(|&name| name == s)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| UnsupportedOption::new("normalization mode", s, &Self::NAMES))
    }
}

/// An option name or value outside its fixed set of accepted spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad {kind} \"{value}\": must be {}", one_of(.expected))]
pub struct UnsupportedOption {
    kind: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl UnsupportedOption {
    pub fn new(kind: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Accepted spellings, in the order they are listed to the user.
    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// `a`, `a or b`, `a, b, or c`
fn one_of(choices: &[&str]) -> String {
    match choices {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Runtime context passed to every normalization stage.
#[derive(Clone, Copy)]
pub struct Context<'t> {
    pub form: Form,
    pub table: &'t dyn PropertyLookup,
}

impl Default for Context<'static> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Form::default())
    }
}

impl Context<'static> {
    /// Context backed by the compiled UCD table.
    #[inline(always)]
    pub fn new(form: Form) -> Self {
        Self {
            form,
            table: &UNICODE,
        }
    }
}

impl<'t> Context<'t> {
    /// Context backed by an arbitrary property source.
    #[inline(always)]
    pub fn with_table(form: Form, table: &'t dyn PropertyLookup) -> Self {
        Self { form, table }
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_names_round_trip() {
        for form in Form::ALL {
            assert_eq!(form.name().parse::<Form>().unwrap(), form);
            assert_eq!(form.to_string(), form.name());
        }
        assert_eq!(Form::default(), Form::Nfc);
    }

    #[test]
    fn form_flags() {
        assert!(Form::Nfkc.is_compatibility() && Form::Nfkc.is_composing());
        assert!(Form::Nfkd.is_compatibility() && !Form::Nfkd.is_composing());
        assert!(!Form::Nfd.is_compatibility() && !Form::Nfd.is_composing());
    }

    #[test]
    fn bad_mode_lists_every_choice() {
        let err = "NFC".parse::<Form>().unwrap_err();
        assert_eq!(err.kind(), "normalization mode");
        assert_eq!(err.expected(), &Form::NAMES);
        assert_eq!(
            err.to_string(),
            "bad normalization mode \"NFC\": must be nfc, nfd, nfkc, or nfkd"
        );
    }

    #[test]
    fn two_choices_read_naturally() {
        let err = UnsupportedOption::new("profile", "lossy", &["strict", "replace"]);
        assert_eq!(
            err.to_string(),
            "bad profile \"lossy\": must be strict or replace"
        );
    }
}
