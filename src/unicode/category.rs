use crate::context::UnsupportedOption;
use std::fmt;
use std::str::FromStr;

/// Unicode General_Category, plus [`Category::Invalid`] for values that are
/// not Unicode scalar values.
///
/// Variants are named by their two-letter UCD abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// Unassigned
    Cn,
    /// Uppercase letter
    Lu,
    /// Lowercase letter
    Ll,
    /// Titlecase letter
    Lt,
    /// Modifier letter
    Lm,
    /// Other letter
    Lo,
    /// Nonspacing mark
    Mn,
    /// Spacing mark
    Mc,
    /// Enclosing mark
    Me,
    /// Decimal number
    Nd,
    /// Letter number
    Nl,
    /// Other number
    No,
    /// Connector punctuation
    Pc,
    /// Dash punctuation
    Pd,
    /// Open punctuation
    Ps,
    /// Close punctuation
    Pe,
    /// Initial quote punctuation
    Pi,
    /// Final quote punctuation
    Pf,
    /// Other punctuation
    Po,
    /// Math symbol
    Sm,
    /// Currency symbol
    Sc,
    /// Modifier symbol
    Sk,
    /// Other symbol
    So,
    /// Space separator
    Zs,
    /// Line separator
    Zl,
    /// Paragraph separator
    Zp,
    /// Control
    Cc,
    /// Format
    Cf,
    /// Surrogate
    Cs,
    /// Private use
    Co,
    /// Outside `0..=0x10FFFF` or a surrogate, never produced by the table.
    Invalid,
}

impl Category {
    /// Every category the property table can return, in UCD order.
    pub const GENERAL: [Category; 30] = [
        Category::Cn,
        Category::Lu,
        Category::Ll,
        Category::Lt,
        Category::Lm,
        Category::Lo,
        Category::Mn,
        Category::Mc,
        Category::Me,
        Category::Nd,
        Category::Nl,
        Category::No,
        Category::Pc,
        Category::Pd,
        Category::Ps,
        Category::Pe,
        Category::Pi,
        Category::Pf,
        Category::Po,
        Category::Sm,
        Category::Sc,
        Category::Sk,
        Category::So,
        Category::Zs,
        Category::Zl,
        Category::Zp,
        Category::Cc,
        Category::Cf,
        Category::Cs,
        Category::Co,
    ];

    const ABBREVIATIONS: [&'static str; 31] = [
        "Cn", "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Pc", "Pd", "Ps",
        "Pe", "Pi", "Pf", "Po", "Sm", "Sc", "Sk", "So", "Zs", "Zl", "Zp", "Cc", "Cf", "Cs", "Co",
        "Xx",
    ];

    /// Two-letter abbreviation, `Xx` for [`Category::Invalid`].
    #[inline(always)]
    pub const fn abbreviation(self) -> &'static str {
        Self::ABBREVIATIONS[self as usize]
    }

    pub const fn long_name(self) -> &'static str {
        match self {
            Category::Cn => "Unassigned",
            Category::Lu => "Uppercase_Letter",
            Category::Ll => "Lowercase_Letter",
            Category::Lt => "Titlecase_Letter",
            Category::Lm => "Modifier_Letter",
            Category::Lo => "Other_Letter",
            Category::Mn => "Nonspacing_Mark",
            Category::Mc => "Spacing_Mark",
            Category::Me => "Enclosing_Mark",
            Category::Nd => "Decimal_Number",
            Category::Nl => "Letter_Number",
            Category::No => "Other_Number",
            Category::Pc => "Connector_Punctuation",
            Category::Pd => "Dash_Punctuation",
            Category::Ps => "Open_Punctuation",
            Category::Pe => "Close_Punctuation",
            Category::Pi => "Initial_Punctuation",
            Category::Pf => "Final_Punctuation",
            Category::Po => "Other_Punctuation",
            Category::Sm => "Math_Symbol",
            Category::Sc => "Currency_Symbol",
            Category::Sk => "Modifier_Symbol",
            Category::So => "Other_Symbol",
            Category::Zs => "Space_Separator",
            Category::Zl => "Line_Separator",
            Category::Zp => "Paragraph_Separator",
            Category::Cc => "Control",
            Category::Cf => "Format",
            Category::Cs => "Surrogate",
            Category::Co => "Private_Use",
            Category::Invalid => "Invalid",
        }
    }

    #[inline]
    pub const fn is_letter(self) -> bool {
        matches!(
            self,
            Category::Lu | Category::Ll | Category::Lt | Category::Lm | Category::Lo
        )
    }

    #[inline]
    pub const fn is_mark(self) -> bool {
        matches!(self, Category::Mn | Category::Mc | Category::Me)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Category {
    type Err = UnsupportedOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ABBREVIATIONS
            .iter()
            .position(|&abbr| abbr == s)
            .map(|idx| {
                if idx < Self::GENERAL.len() {
                    Self::GENERAL[idx]
                } else {
                    Category::Invalid
                }
            })
            .ok_or_else(|| UnsupportedOption::new("category", s, &Self::ABBREVIATIONS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_line_up_with_discriminants() {
        for (idx, cat) in Category::GENERAL.iter().enumerate() {
            assert_eq!(*cat as usize, idx);
            assert_eq!(cat.abbreviation().parse::<Category>().unwrap(), *cat);
        }
        assert_eq!(Category::Invalid.abbreviation(), "Xx");
        assert_eq!("Xx".parse::<Category>().unwrap(), Category::Invalid);
    }

    #[test]
    fn unknown_abbreviation_is_rejected() {
        let err = "Qq".parse::<Category>().unwrap_err();
        assert_eq!(err.value(), "Qq");
    }

    #[test]
    fn groups() {
        assert!(Category::Lt.is_letter());
        assert!(!Category::Nd.is_letter());
        assert!(Category::Me.is_mark());
        assert_eq!(Category::Zs.long_name(), "Space_Separator");
    }
}
