//! Tcl-style command surface: `normalize`, `categorize`, `version`,
//! `build-info` and `pkgconfig`, each taking a word list whose first element
//! names the command.
//!
//! Words are raw bytes so the string argument can be decoded under the
//! requested [`Profile`]. Option names and values must be UTF-8.

use crate::{
    build_info::{BuildInfo, BuildInfoValue, PACKAGE_VERSION},
    context::{Form, UnsupportedOption},
    normalize::NormalizeError,
    normalizer::{Normalizer, NormalizerError},
    profile::{EncodingError, Profile},
    unicode::unicode_version,
};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

const NORMALIZE_OPTIONS: [&str; 2] = ["-profile", "-mode"];
const CATEGORIZE_OPTIONS: [&str; 1] = ["-profile"];
const PKGCONFIG_KEYS: [&str; 2] = ["version", "unicode_version"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    UnsupportedOption(#[from] UnsupportedOption),

    #[error(
        "Invalid value \"{}\" supplied for option \"{option}\". Must be {}.",
        .source.value(),
        quoted_choices(.source.expected())
    )]
    InvalidValue {
        option: &'static str,
        source: UnsupportedOption,
    },

    #[error("Missing value for option {0}.")]
    MissingValue(String),

    #[error("wrong # args: should be \"{usage}\"")]
    WrongArgs { usage: &'static str },

    #[error("invalid command name \"{0}\"")]
    UnknownCommand(String),
}

impl From<NormalizerError> for CommandError {
    fn from(err: NormalizerError) -> Self {
        match err {
            NormalizerError::Encoding(e) => CommandError::Encoding(e),
            NormalizerError::Normalize(e) => CommandError::Normalize(e),
        }
    }
}

/// `"a" or "b"`
fn quoted_choices(choices: &[&str]) -> String {
    let quoted: Vec<String> = choices.iter().map(|c| format!("\"{c}\"")).collect();
    match quoted.as_slice() {
        [init @ .., last] if !init.is_empty() => format!("{} or {last}", init.join(", ")),
        _ => quoted.concat(),
    }
}

/// Profile values are reported against the option that carried them.
fn parse_profile(value: &str) -> Result<Profile, CommandError> {
    value
        .parse::<Profile>()
        .map_err(|source| CommandError::InvalidValue {
            option: "-profile",
            source,
        })
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    List(Vec<String>),
    Bool(bool),
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Text(text) => f.write_str(text),
            CommandOutput::Bool(value) => f.write_str(if *value { "1" } else { "0" }),
            CommandOutput::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write_list_element(f, item)?;
                }
                Ok(())
            }
        }
    }
}

/// Braces elements that would otherwise split or be substituted; falls back
/// to backslash escapes when the braces inside would not balance.
fn write_list_element(f: &mut fmt::Formatter<'_>, item: &str) -> fmt::Result {
    let special = |c: char| c.is_whitespace() || matches!(c, '{' | '}' | '[' | ']' | '$' | '"' | ';' | '\\');
    if item.is_empty() {
        return f.write_str("{}");
    }
    if !item.chars().any(special) {
        return f.write_str(item);
    }
    if braces_balance(item) && !item.ends_with('\\') {
        return write!(f, "{{{item}}}");
    }
    for c in item.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if special(c) => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

fn braces_balance(item: &str) -> bool {
    let mut depth = 0usize;
    for c in item.chars() {
        match c {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Runs the command named by `args[0]` with the remaining words.
pub fn dispatch<A: AsRef<[u8]>>(args: &[A]) -> Result<CommandOutput, CommandError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(CommandError::WrongArgs {
            usage: "command ?arg ...?",
        });
    };
    let name = String::from_utf8_lossy(name.as_ref());
    tracing::debug!(command = %name, argc = rest.len(), "dispatch");
    let rest: Vec<&[u8]> = rest.iter().map(|arg| arg.as_ref()).collect();

    match name.as_ref() {
        "normalize" => normalize(&rest),
        "categorize" => categorize(&rest),
        "version" => version(&rest),
        "build-info" => build_info(&rest),
        "pkgconfig" => pkgconfig(&rest),
        _ => Err(CommandError::UnknownCommand(name.into_owned())),
    }
}

fn normalize(args: &[&[u8]]) -> Result<CommandOutput, CommandError> {
    const USAGE: &str = "normalize ?-profile PROFILE? ?-mode MODE? STRING";
    let (options, text) = parse_options(args, &NORMALIZE_OPTIONS, USAGE)?;

    let mut builder = Normalizer::builder();
    for (option, value) in options {
        builder = match option {
            "-profile" => builder.profile(parse_profile(&value)?),
            _ => builder.form(value.parse::<Form>()?),
        };
    }
    let normalizer = builder.build();

    let decoded = normalizer.profile().decode(text)?;
    let normalized = normalizer.normalize_str(&decoded)?;
    Ok(CommandOutput::Text(normalized.into_owned()))
}

fn categorize(args: &[&[u8]]) -> Result<CommandOutput, CommandError> {
    const USAGE: &str = "categorize ?-profile PROFILE? STRING";
    let (options, text) = parse_options(args, &CATEGORIZE_OPTIONS, USAGE)?;

    let mut builder = Normalizer::builder();
    for (_, value) in options {
        builder = builder.profile(parse_profile(&value)?);
    }
    let categories = builder.build().categorize_bytes(text)?;
    Ok(CommandOutput::List(
        categories
            .into_iter()
            .map(|c| c.abbreviation().to_owned())
            .collect(),
    ))
}

fn version(args: &[&[u8]]) -> Result<CommandOutput, CommandError> {
    if !args.is_empty() {
        return Err(CommandError::WrongArgs { usage: "version" });
    }
    Ok(CommandOutput::Text(unicode_version()))
}

fn build_info(args: &[&[u8]]) -> Result<CommandOutput, CommandError> {
    let info = BuildInfo::current();
    match args {
        [] => Ok(CommandOutput::Text(info.to_string())),
        [option] => Ok(match info.query(&String::from_utf8_lossy(option)) {
            BuildInfoValue::Text(text) => CommandOutput::Text(text),
            BuildInfoValue::Present(flag) => CommandOutput::Bool(flag),
        }),
        _ => Err(CommandError::WrongArgs {
            usage: "build-info ?option?",
        }),
    }
}

fn pkgconfig(args: &[&[u8]]) -> Result<CommandOutput, CommandError> {
    match args {
        [] => Ok(CommandOutput::List(
            PKGCONFIG_KEYS.iter().map(|&k| k.to_owned()).collect(),
        )),
        [key] => match *key {
            b"version" => Ok(CommandOutput::Text(PACKAGE_VERSION.to_owned())),
            b"unicode_version" => Ok(CommandOutput::Text(unicode_version())),
            other => Err(UnsupportedOption::new(
                "key",
                &String::from_utf8_lossy(other),
                &PKGCONFIG_KEYS,
            )
            .into()),
        },
        _ => Err(CommandError::WrongArgs {
            usage: "pkgconfig ?key?",
        }),
    }
}

/// Splits `args` into `(option, value)` pairs and the trailing string.
///
/// Each option name is checked before its value is looked for, so an unknown
/// name wins over a missing value.
fn parse_options<'a>(
    args: &[&'a [u8]],
    accepted: &'static [&'static str],
    usage: &'static str,
) -> Result<(Vec<(&'static str, Cow<'a, str>)>, &'a [u8]), CommandError> {
    let Some((&text, words)) = args.split_last() else {
        return Err(CommandError::WrongArgs { usage });
    };

    let mut options = Vec::with_capacity(words.len() / 2);
    let mut words = words.iter();
    while let Some(word) = words.next() {
        let word = String::from_utf8_lossy(word);
        let option = accepted
            .iter()
            .copied()
            .find(|&name| name == word)
            .ok_or_else(|| UnsupportedOption::new("option", &word, accepted))?;
        let value = words
            .next()
            .ok_or_else(|| CommandError::MissingValue(option.to_owned()))?;
        options.push((option, String::from_utf8_lossy(value)));
    }
    Ok((options, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn text(out: CommandOutput) -> String {
        match out {
            CommandOutput::Text(text) => text,
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn normalize_defaults_to_nfc() -> TestResult {
        assert_eq!(text(dispatch(&["normalize", "e\u{0301}"])?), "é");
        Ok(())
    }

    #[test]
    fn normalize_with_options() -> TestResult {
        assert_eq!(
            text(dispatch(&["normalize", "-mode", "nfd", "é"])?),
            "e\u{0301}"
        );
        assert_eq!(
            text(dispatch(&["normalize", "-profile", "replace", "-mode", "nfkc", "ﬁ"])?),
            "fi"
        );
        Ok(())
    }

    #[test]
    fn later_options_override_earlier_ones() -> TestResult {
        assert_eq!(
            text(dispatch(&["normalize", "-mode", "nfd", "-mode", "nfc", "e\u{0301}"])?),
            "é"
        );
        Ok(())
    }

    #[test]
    fn missing_option_value() {
        let err = dispatch(&["normalize", "-mode", "nfd"]).unwrap_err();
        assert_eq!(err, CommandError::MissingValue("-mode".into()));
        assert_eq!(err.to_string(), "Missing value for option -mode.");
    }

    #[test]
    fn unknown_option_reported_before_missing_value() {
        let err = dispatch(&["normalize", "-form", "x"]).unwrap_err();
        assert_eq!(err.to_string(), "bad option \"-form\": must be -profile or -mode");
    }

    #[test]
    fn bad_option_values() {
        let err = dispatch(&["normalize", "-mode", "NFC", "x"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad normalization mode \"NFC\": must be nfc, nfd, nfkc, or nfkd"
        );
        let err = dispatch(&["normalize", "-profile", "tcl8", "x"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidValue { option: "-profile", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid value \"tcl8\" supplied for option \"-profile\". Must be \"strict\" or \"replace\"."
        );
        let err = dispatch(&["categorize", "-profile", "lossy", "x"]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid value \"lossy\" supplied for option \"-profile\""));
    }

    #[test]
    fn wrong_number_of_arguments() {
        let err = dispatch(&["normalize"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "wrong # args: should be \"normalize ?-profile PROFILE? ?-mode MODE? STRING\""
        );
        assert!(matches!(
            dispatch(&["version", "extra"]),
            Err(CommandError::WrongArgs { .. })
        ));
        assert!(matches!(
            dispatch::<&str>(&[]),
            Err(CommandError::WrongArgs { .. })
        ));
    }

    #[test]
    fn strict_and_replace_profiles_on_bytes() -> TestResult {
        let args: [&[u8]; 2] = [b"normalize", b"a\xFFb"];
        assert!(matches!(dispatch(&args), Err(CommandError::Encoding(_))));

        let args: [&[u8]; 4] = [b"normalize", b"-profile", b"replace", b"a\xFFb"];
        assert_eq!(text(dispatch(&args)?), "a\u{FFFD}b");
        Ok(())
    }

    #[test]
    fn categorize_lists_abbreviations() -> TestResult {
        let out = dispatch(&["categorize", "A1 "])?;
        assert_eq!(
            out,
            CommandOutput::List(vec!["Lu".into(), "Nd".into(), "Zs".into()])
        );
        assert_eq!(out.to_string(), "Lu Nd Zs");
        Ok(())
    }

    #[test]
    fn version_is_the_unicode_version() -> TestResult {
        assert_eq!(text(dispatch(&["version"])?), "14.0.0");
        Ok(())
    }

    #[test]
    fn build_info_queries() -> TestResult {
        let full = text(dispatch(&["build-info"])?);
        assert!(full.starts_with(PACKAGE_VERSION));
        assert_eq!(text(dispatch(&["build-info", "compiler"])?), "rustc");
        assert_eq!(
            dispatch(&["build-info", "no-such-tag"])?,
            CommandOutput::Bool(false)
        );
        assert_eq!(dispatch(&["build-info", "rustc"])?, CommandOutput::Bool(true));
        Ok(())
    }

    #[test]
    fn pkgconfig_keys() -> TestResult {
        assert_eq!(
            dispatch(&["pkgconfig"])?.to_string(),
            "version unicode_version"
        );
        assert_eq!(text(dispatch(&["pkgconfig", "unicode_version"])?), "14.0.0");
        assert_eq!(text(dispatch(&["pkgconfig", "version"])?), PACKAGE_VERSION);
        assert!(dispatch(&["pkgconfig", "libdir"]).is_err());
        Ok(())
    }

    #[test]
    fn unknown_command() {
        let err = dispatch(&["frobnicate"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid command name \"frobnicate\"");
    }

    #[test]
    fn list_display_braces_awkward_elements() {
        let out = CommandOutput::List(vec!["a".into(), String::new(), "b c".into()]);
        assert_eq!(out.to_string(), "a {} {b c}");
        assert_eq!(CommandOutput::Bool(true).to_string(), "1");
    }

    #[test]
    fn list_display_escapes_unbalanced_braces() {
        let out = CommandOutput::List(vec!["a{b".into(), "}{ x".into(), "{ok}".into()]);
        assert_eq!(out.to_string(), r"a\{b \}\{\ x {{ok}}");
        let out = CommandOutput::List(vec!["tail\\".into(), "line\nbreak".into(), "{\tx".into()]);
        assert_eq!(out.to_string(), "tail\\\\ {line\nbreak} \\{\\tx");
    }
}
