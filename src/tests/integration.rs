#[cfg(test)]
mod integration_tests {

    use crate::{
        CommandError, CommandOutput, Context, Form, Normalizer, NormalizeError, Profile, dispatch,
        normalize, normalize_with,
        unicode::{Decomposition, PropertyLookup, PropertyRecord, UNICODE},
    };

    #[test]
    fn normalize_command_round_trip() {
        let nfd = dispatch(&["normalize", "-mode", "nfd", "Ångström"]).unwrap();
        let CommandOutput::Text(decomposed) = nfd else {
            panic!("normalize returns text");
        };
        assert_eq!(decomposed, "A\u{030A}ngstro\u{0308}m");

        let nfc = dispatch(&["normalize", "-mode", "nfc", decomposed.as_str()]).unwrap();
        assert_eq!(nfc, CommandOutput::Text("Ångström".into()));
    }

    #[test]
    fn profiles_through_the_command_layer() {
        let malformed: [&[u8]; 4] = [b"normalize", b"-profile", b"strict", b"x\xC0y"];
        let err = dispatch(&malformed).unwrap_err();
        assert!(matches!(err, CommandError::Encoding(ref e) if e.offset == 1));

        let repaired: [&[u8]; 4] = [b"normalize", b"-profile", b"replace", b"x\xC0y"];
        assert_eq!(
            dispatch(&repaired).unwrap(),
            CommandOutput::Text("x\u{FFFD}y".into())
        );
    }

    #[test]
    fn categorize_command_with_replacement() {
        let args: [&[u8]; 4] = [b"categorize", b"-profile", b"replace", b"A\xFF1"];
        assert_eq!(dispatch(&args).unwrap().to_string(), "Lu So Nd");
    }

    #[test]
    fn every_form_is_idempotent_on_a_mixed_corpus() {
        let corpus = "Ǆemal ﬁnal ẛ̣ ½ ① ㎒ 한국어 \u{1100}\u{1161}\u{11A8} \
                      क़ ড় ｶﾞ \u{0F73}\u{0F75} \u{1D15E}\u{1D160} \u{0301}x";
        for form in Form::ALL {
            let normalizer = Normalizer::builder().form(form).build();
            let once = normalizer.normalize_str(corpus).unwrap().into_owned();
            let twice = normalizer.normalize_str(&once).unwrap();
            assert_eq!(once, twice, "{form}");
        }
    }

    #[test]
    fn forms_relate_to_each_other() {
        let text: Vec<u32> = "ẛ̣ Å ﬃ 가 ǅ".chars().map(u32::from).collect();
        let nfd = normalize(&text, Form::Nfd).unwrap();
        let nfkd = normalize(&text, Form::Nfkd).unwrap();
        assert_eq!(normalize(&nfd, Form::Nfc).unwrap(), normalize(&text, Form::Nfc).unwrap());
        assert_eq!(normalize(&nfd, Form::Nfkd).unwrap(), nfkd);
        assert_eq!(
            normalize(&nfkd, Form::Nfkc).unwrap(),
            normalize(&text, Form::Nfkc).unwrap()
        );
    }

    #[test]
    fn shared_across_threads() {
        let normalizer = Normalizer::builder()
            .form(Form::Nfkc)
            .profile(Profile::Replace)
            .build();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let out = normalizer.normalize_bytes("ﬁ\u{0065}\u{0301}".as_bytes()).unwrap();
                        assert_eq!(out, "fié".as_bytes());
                    }
                });
            }
        });
    }

    /// Delegates to the real table but gives U+00C5 a dangling two-step loop.
    struct LoopingTable;

    impl PropertyLookup for LoopingTable {
        fn lookup(&self, cp: u32) -> PropertyRecord {
            static TO_B: [u32; 1] = [0x00C6];
            static TO_A: [u32; 1] = [0x00C5];
            match cp {
                0x00C5 => PropertyRecord {
                    decomposition: Some(Decomposition::canonical(&TO_B)),
                    ..UNICODE.record(cp)
                },
                0x00C6 => PropertyRecord {
                    decomposition: Some(Decomposition::canonical(&TO_A)),
                    ..UNICODE.record(cp)
                },
                _ => UNICODE.record(cp),
            }
        }

        fn compose_pair(&self, a: u32, b: u32) -> Option<u32> {
            UNICODE.compose_pair(a, b)
        }

        fn is_composition_second(&self, cp: u32) -> bool {
            UNICODE.is_composition_second(cp)
        }
    }

    #[test]
    fn looping_table_is_data_corruption_not_a_hang() {
        for form in Form::ALL {
            let ctx = Context::with_table(form, &LoopingTable);
            let err = normalize_with(&ctx, &[0x0061, 0x00C5]).unwrap_err();
            assert!(matches!(err, NormalizeError::DataCorruption(_)), "{form}");
            // untouched code points still normalize through the same table
            assert_eq!(
                normalize_with(&ctx, &[0x0065, 0x0301]).unwrap().as_ref(),
                normalize(&[0x0065, 0x0301], form).unwrap().as_slice()
            );
        }
    }
}
