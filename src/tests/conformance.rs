#[cfg(test)]
mod conformance_tests {

    use crate::{Category, Form, categorize, normalize, unicode::hangul};
    use std::collections::HashSet;

    const NORMALIZATION_DATA: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/normalization_conformance.txt"
    ));
    const CATEGORY_DATA: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/general_category.txt"));

    fn parse_sequence(field: &str) -> Vec<u32> {
        field
            .split_whitespace()
            .map(|hex| u32::from_str_radix(hex, 16).expect("hex code point"))
            .collect()
    }

    struct Case {
        line: usize,
        part: String,
        columns: [Vec<u32>; 5],
    }

    fn cases() -> Vec<Case> {
        let mut part = String::new();
        let mut cases = Vec::new();
        for (idx, raw) in NORMALIZATION_DATA.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if let Some(name) = line.strip_prefix('@') {
                part = name.to_owned();
                continue;
            }
            let fields: Vec<&str> = line.split(';').collect();
            assert!(fields.len() >= 5, "line {}: `{raw}`", idx + 1);
            cases.push(Case {
                line: idx + 1,
                part: part.clone(),
                columns: std::array::from_fn(|i| parse_sequence(fields[i])),
            });
        }
        cases
    }

    fn check(case: &Case, form: Form, sources: &[usize], expected: usize) {
        let want = &case.columns[expected];
        for &column in sources {
            let got = normalize(&case.columns[column], form).unwrap();
            assert_eq!(
                &got, want,
                "{} line {}: {form}(c{}) {:04X?}",
                case.part,
                case.line,
                column + 1,
                case.columns[column]
            );
        }
    }

    #[test]
    fn normalization_conformance() {
        let cases = cases();
        assert!(cases.len() > 10_000);
        for case in &cases {
            // c2 == NFC(c1..c3), c4 == NFC(c4..c5)
            check(case, Form::Nfc, &[0, 1, 2], 1);
            check(case, Form::Nfc, &[3, 4], 3);
            // c3 == NFD(c1..c3), c5 == NFD(c4..c5)
            check(case, Form::Nfd, &[0, 1, 2], 2);
            check(case, Form::Nfd, &[3, 4], 4);
            // c4 == NFKC(c1..c5), c5 == NFKD(c1..c5)
            check(case, Form::Nfkc, &[0, 1, 2, 3, 4], 3);
            check(case, Form::Nfkd, &[0, 1, 2, 3, 4], 4);
        }
    }

    #[test]
    fn unlisted_code_points_are_invariant() {
        let listed: HashSet<u32> = cases()
            .iter()
            .filter(|case| case.part == "Part1")
            .filter_map(|case| match case.columns[0].as_slice() {
                [cp] => Some(*cp),
                _ => None,
            })
            .collect();

        for cp in (0..=0x10FFFF).filter(|cp| !(0xD800..=0xDFFF).contains(cp)) {
            // Part 1 only samples the Hangul syllables
            if listed.contains(&cp) || hangul::is_syllable(cp) {
                continue;
            }
            for form in Form::ALL {
                assert_eq!(normalize(&[cp], form).unwrap(), vec![cp], "U+{cp:04X} {form}");
            }
        }
    }

    #[test]
    fn general_category_matches_the_ucd() {
        let mut expected = vec![Category::Cn; 0x110000];
        for raw in CATEGORY_DATA.lines() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let (range, category) = line.split_once(';').expect("`range ; category`");
            let category: Category = category.trim().parse().expect("category abbreviation");
            let (first, last) = match range.trim().split_once("..") {
                Some((first, last)) => (first, last),
                None => (range.trim(), range.trim()),
            };
            let first = u32::from_str_radix(first, 16).expect("hex");
            let last = u32::from_str_radix(last, 16).expect("hex");
            for cp in first..=last {
                expected[cp as usize] = category;
            }
        }

        for (cp, &want) in (0u32..).zip(expected.iter()) {
            let want = if (0xD800..=0xDFFF).contains(&cp) {
                Category::Invalid
            } else {
                want
            };
            assert_eq!(categorize(cp), want, "U+{cp:04X}");
        }
    }
}
