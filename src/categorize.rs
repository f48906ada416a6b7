//! General-category lookup. Independent of the normalization pipeline; shares
//! the property table.

use crate::unicode::{Category, UNICODE, is_valid_code_point};

/// Category of a single value. Never fails: anything outside `0..=0x10FFFF`
/// or inside the surrogate block is [`Category::Invalid`].
#[inline]
pub fn categorize(cp: u32) -> Category {
    if !is_valid_code_point(cp) {
        return Category::Invalid;
    }
    UNICODE.category(cp)
}

/// One category per code point, in input order.
pub fn categorize_code_points(code_points: &[u32]) -> Vec<Category> {
    code_points.iter().map(|&cp| categorize(cp)).collect()
}

/// One category per `char`, in input order.
pub fn categorize_str(text: &str) -> Vec<Category> {
    text.chars().map(|c| UNICODE.category(u32::from(c))).collect()
}

/// Abbreviations of [`categorize_str`], e.g. `["Lu", "Nd", "Zs"]` for `"A1 "`.
pub fn category_names(text: &str) -> Vec<&'static str> {
    text.chars()
        .map(|c| UNICODE.category(u32::from(c)).abbreviation())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_digit_space() {
        assert_eq!(category_names("A1 "), vec!["Lu", "Nd", "Zs"]);
        assert_eq!(
            categorize_str("A1 "),
            vec![Category::Lu, Category::Nd, Category::Zs]
        );
    }

    #[test]
    fn sentinel_for_invalid_values() {
        assert_eq!(categorize(0xD800), Category::Invalid);
        assert_eq!(categorize(0xDFFF), Category::Invalid);
        assert_eq!(categorize(0x110000), Category::Invalid);
        assert_eq!(categorize(u32::MAX), Category::Invalid);
        assert_eq!(categorize(0x10FFFF), Category::Cn);
    }

    #[test]
    fn mixed_scripts() {
        assert_eq!(
            categorize_code_points(&[0x00E9, 0x0301, 0x4E16, 0x0660, 0x200D, 0x1F600, 0x0007]),
            vec![
                Category::Ll,
                Category::Mn,
                Category::Lo,
                Category::Nd,
                Category::Cf,
                Category::So,
                Category::Cc,
            ]
        );
    }

    #[test]
    fn total_over_every_value() {
        for cp in 0..=0x10FFFF {
            let cat = categorize(cp);
            if (0xD800..=0xDFFF).contains(&cp) {
                assert_eq!(cat, Category::Invalid);
            } else {
                assert_ne!(cat, Category::Invalid, "U+{cp:04X}");
            }
        }
    }
}
