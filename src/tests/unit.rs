#[cfg(test)]
mod unit_tests {

    use crate::{
        Category, Form, NormalizeError, Normalizer, categorize, category_names, is_normalized,
        normalize, normalize_str, unicode_version,
    };
    use std::borrow::Cow;

    #[test]
    fn e_acute() {
        assert_eq!(normalize(&[0x0065, 0x0301], Form::Nfc).unwrap(), vec![0x00E9]);
        assert_eq!(normalize(&[0x00E9], Form::Nfd).unwrap(), vec![0x0065, 0x0301]);
    }

    #[test]
    fn hangul_lv_and_lvt() {
        assert_eq!(normalize(&[0x1100, 0x1161], Form::Nfc).unwrap(), vec![0xAC00]);
        assert_eq!(normalize(&[0xAC00], Form::Nfd).unwrap(), vec![0x1100, 0x1161]);
        assert_eq!(
            normalize(&[0x1100, 0x1161, 0x11A8], Form::Nfc).unwrap(),
            vec![0xAC01]
        );
        assert_eq!(
            normalize(&[0xAC01], Form::Nfkd).unwrap(),
            vec![0x1100, 0x1161, 0x11A8]
        );
        // LV syllable + T jamo
        assert_eq!(normalize(&[0xAC00, 0x11A8], Form::Nfc).unwrap(), vec![0xAC01]);
    }

    #[test]
    fn singletons_never_recompose() {
        // ANGSTROM SIGN, OHM SIGN
        assert_eq!(normalize(&[0x212B], Form::Nfc).unwrap(), vec![0x00C5]);
        assert_eq!(normalize(&[0x2126], Form::Nfc).unwrap(), vec![0x03A9]);
        assert_eq!(normalize(&[0x212B], Form::Nfd).unwrap(), vec![0x0041, 0x030A]);
    }

    #[test]
    fn exclusions_stay_decomposed() {
        // DEVANAGARI LETTER QA
        assert_eq!(normalize(&[0x0958], Form::Nfc).unwrap(), vec![0x0915, 0x093C]);
        assert_eq!(normalize(&[0x0915, 0x093C], Form::Nfc).unwrap(), vec![0x0915, 0x093C]);
    }

    #[test]
    fn marks_are_reordered_then_composed() {
        // a + dot below (220) + circumflex (230) in either order → ậ
        assert_eq!(normalize(&[0x0061, 0x0302, 0x0323], Form::Nfc).unwrap(), vec![0x1EAD]);
        assert_eq!(normalize(&[0x0061, 0x0323, 0x0302], Form::Nfc).unwrap(), vec![0x1EAD]);
        assert_eq!(
            normalize(&[0x0061, 0x0302, 0x0323], Form::Nfd).unwrap(),
            vec![0x0061, 0x0323, 0x0302]
        );
    }

    #[test]
    fn blocked_by_equal_class() {
        assert_eq!(
            normalize(&[0x0061, 0x0301, 0x0301], Form::Nfc).unwrap(),
            vec![0x00E1, 0x0301]
        );
    }

    #[test]
    fn lower_class_mark_does_not_block() {
        // tilde overlay (1) sits between e and acute (230)
        assert_eq!(
            normalize(&[0x0065, 0x0334, 0x0301], Form::Nfc).unwrap(),
            vec![0x00E9, 0x0334]
        );
    }

    #[test]
    fn leading_non_starters_are_kept() {
        assert_eq!(
            normalize(&[0x0301, 0x0323, 0x0065], Form::Nfc).unwrap(),
            vec![0x0323, 0x0301, 0x0065]
        );
    }

    #[test]
    fn compatibility_only_in_k_forms() {
        assert_eq!(normalize_str("ﬁ", Form::Nfc).unwrap(), "ﬁ");
        assert_eq!(normalize_str("ﬁ", Form::Nfkc).unwrap(), "fi");
        assert_eq!(normalize_str("①", Form::Nfkd).unwrap(), "1");
        assert_eq!(normalize_str("㎒", Form::Nfkc).unwrap(), "MHz");
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            normalize(&[0x0061, 0xDC00], Form::Nfd),
            Err(NormalizeError::InvalidInput {
                code_point: 0xDC00,
                index: 1
            })
        );
        assert!(is_normalized(&[0x110000], Form::Nfc).is_err());
    }

    #[test]
    fn categories() {
        assert_eq!(category_names("A1 "), vec!["Lu", "Nd", "Zs"]);
        assert_eq!(categorize(0x0378), Category::Cn);
        assert_eq!(categorize(0xE000), Category::Co);
        assert_eq!(categorize(0xD800), Category::Invalid);
        assert_eq!(Category::Invalid.abbreviation(), "Xx");
    }

    #[test]
    fn version_string() {
        assert_eq!(unicode_version(), "14.0.0");
    }

    #[test]
    fn zero_copy_when_already_normalized() {
        let normalizer = Normalizer::builder().form(Form::Nfd).build();
        let input = "plain ascii and 日本語";
        let result = normalizer.normalize_str(input).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn form_names() {
        for form in Form::ALL {
            assert_eq!(form.name().parse::<Form>().unwrap(), form);
        }
        assert!("NFC".parse::<Form>().is_err());
        assert_eq!(Form::default(), Form::Nfc);
    }
}
