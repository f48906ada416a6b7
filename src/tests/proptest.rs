mod prop_tests {
    use crate::{
        Form, Normalizer, Profile, categorize_code_points, categorize_str, normalize, normalize_str,
        stage::reorder::is_canonically_ordered, unicode::UNICODE,
    };
    use proptest::prelude::*;
    use unicode_normalization::UnicodeNormalization;

    /// Characters whose normalization has not changed since Unicode 14, so the
    /// oracle crate agrees whatever UCD version it ships.
    const STABLE_ALPHABET: &str = "[a-zA-Z0-9 \u{00C0}-\u{00FF}\u{0300}-\u{034E}\u{0350}-\u{036F}\
        \u{0391}-\u{03A1}\u{03A3}-\u{03C9}\u{1E00}-\u{1EFF}\u{1100}-\u{1112}\u{1161}-\u{1175}\
        \u{11A8}-\u{11C2}\u{AC00}-\u{AC60}\u{0958}-\u{095F}\u{093C}\u{0915}-\u{0939}\
        \u{FB00}-\u{FB06}\u{2460}-\u{2473}\u{00BC}-\u{00BE}\u{3300}-\u{3357}\u{212A}\u{212B}\u{2126}]{0,48}";

    fn code_points(s: &str) -> Vec<u32> {
        s.chars().map(u32::from).collect()
    }

    proptest! {
        #[test]
        fn every_form_is_idempotent(s in ".{0,200}") {
            for form in Form::ALL {
                let once = normalize_str(&s, form).unwrap();
                let twice = normalize_str(&once, form).unwrap();
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn decomposed_output_is_ordered_and_fully_decomposed(s in ".{0,200}") {
            for form in [Form::Nfd, Form::Nfkd] {
                let out = normalize(&code_points(&s), form).unwrap();
                prop_assert!(is_canonically_ordered(&UNICODE, &out));
                let compat = form.is_compatibility();
                let fully_decomposed = out.iter().all(|&cp| {
                    UNICODE.record(cp).decomposition_for(compat).is_none()
                        && !crate::unicode::hangul::is_syllable(cp)
                });
                prop_assert!(fully_decomposed, "{} left a decomposable code point in {:04X?}", form, out);
            }
        }

        #[test]
        fn composed_forms_go_through_their_decomposed_forms(s in ".{0,200}") {
            let text = code_points(&s);
            let nfd = normalize(&text, Form::Nfd).unwrap();
            let nfkd = normalize(&text, Form::Nfkd).unwrap();
            prop_assert_eq!(normalize(&nfd, Form::Nfc).unwrap(), normalize(&text, Form::Nfc).unwrap());
            prop_assert_eq!(normalize(&nfkd, Form::Nfkc).unwrap(), normalize(&text, Form::Nfkc).unwrap());
        }

        #[test]
        fn decomposition_keeps_marks_and_composition_only_shrinks(s in ".{0,200}") {
            let text = code_points(&s);
            let marks = |seq: &[u32]| categorize_code_points(seq).iter().filter(|c| c.is_mark()).count();
            let nfd = normalize(&text, Form::Nfd).unwrap();
            let nfkd = normalize(&text, Form::Nfkd).unwrap();
            prop_assert!(marks(&nfd) >= marks(&text));
            prop_assert!(marks(&nfkd) >= marks(&text));
            prop_assert!(normalize(&text, Form::Nfc).unwrap().len() <= nfd.len());
            prop_assert!(normalize(&text, Form::Nfkc).unwrap().len() <= nfkd.len());
        }

        #[test]
        fn agrees_with_unicode_normalization(s in STABLE_ALPHABET) {
            prop_assert_eq!(normalize_str(&s, Form::Nfc).unwrap(), s.nfc().collect::<String>());
            prop_assert_eq!(normalize_str(&s, Form::Nfd).unwrap(), s.nfd().collect::<String>());
            prop_assert_eq!(normalize_str(&s, Form::Nfkc).unwrap(), s.nfkc().collect::<String>());
            prop_assert_eq!(normalize_str(&s, Form::Nfkd).unwrap(), s.nfkd().collect::<String>());
        }

        #[test]
        fn categorize_is_total_and_positional(s in ".{0,200}") {
            let categories = categorize_str(&s);
            prop_assert_eq!(categories.len(), s.chars().count());
            prop_assert!(categories.iter().all(|c| c.abbreviation().len() == 2));
        }

        #[test]
        fn replace_profile_accepts_any_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            for form in Form::ALL {
                let normalizer = Normalizer::builder().form(form).profile(Profile::Replace).build();
                let out = normalizer.normalize_bytes(&bytes).unwrap();
                let text = String::from_utf8(out).unwrap();
                prop_assert!(normalizer.is_normalized(&text).unwrap());
            }
        }

        #[test]
        fn strict_profile_matches_std_validation(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let normalizer = Normalizer::builder().build();
            match std::str::from_utf8(&bytes) {
                Ok(_) => prop_assert!(normalizer.normalize_bytes(&bytes).is_ok()),
                Err(e) => {
                    let err = normalizer.normalize_bytes(&bytes).unwrap_err();
                    prop_assert_eq!(
                        err,
                        crate::NormalizerError::Encoding(crate::EncodingError {
                            offset: e.valid_up_to(),
                            profile: Profile::Strict,
                        })
                    );
                }
            }
        }
    }
}
