#![deny(unsafe_code)]
#![warn(clippy::all)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use icu_normalizer::{ComposingNormalizerBorrowed, DecomposingNormalizerBorrowed};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::borrow::Cow;
use std::{hint::black_box, sync::LazyLock};
use ucdnorm::{Form, Normalizer};
use unicode_normalization::UnicodeNormalization;

// ── Stress samples ──
static STRESS_POOL_CANONICAL: &[&str] = &[
    "Tiếng Việt Quốc ngữ Phở Hà Nội",
    "Sœur naïve à l'œuf ŒUF déjà-vu",
    "Fußball Straße Maßstab GRÜNE STRAẞE",
    "İSTANBUL İĞNE İĞDE ıiIİ",
    "¡España mañana José Peña!",
    "Łódź żółć ŻÓŁĆ Żubrówka",
    "Þetta er íslenska ÐðÞþ",
    "Ștefan Țară România",
    "Ἀρχιμήδης Ἑλλάς σοφός",
    "Ёлки-палки всё А́нна",
    "الْكِتَابُ مُحَمَّدٌ",
    "סֵפֶר עִבְרִית שׂ",
    "हिन्दी ज़िंदगी क़िला",
    "ภาษาไทย สวัสดีครับ ๑๒๓",
    "한글 한국어 \u{1112}\u{1161}\u{11AB}",
    "こんにちは ガギグ パピプ",
    "👨\u{200D}👩\u{200D}👧 👍🏼 ✨ 🚀",
];

static STRESS_POOL_COMPATIBILITY: &[&str] = &[
    "ﬀ ﬁ ﬂ ﬃ ﬄ ﬆ",
    "½ ⅓ ¼ ⅕ ⅙ ⅛ ⅔ ¾",
    "①②③④⑤ ⑩ ⑴⑵⑶ ⒈⒉⒊",
    "Ｈｅｌｌｏ　Ｗｏｒｌｄ　＆　＜＞",
    "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ ｶﾞｷﾞ",
    "㈱ ㈲ ㎏ ㎞ ㎡",
    "№ ℡ ™ ㍻",
];

fn realistic_corpus(seed: u64, size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_len = size_kb * 1024;
    let mut out = String::with_capacity(max_len);
    let pools = [STRESS_POOL_CANONICAL, STRESS_POOL_COMPATIBILITY];

    while out.len() < max_len {
        let pool = pools[rng.random_range(0..pools.len())];
        let text = pool[rng.random_range(0..pool.len())];
        for _ in 0..rng.random_range(1..=5) {
            out.push_str(text);
            out.push(' ');
        }
        if rng.random_bool(0.1) {
            let word: String = (0..rng.random_range(5..20))
                .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
                .collect();
            out.push_str(&word);
            out.push(' ');
        }
    }

    let mut truncate_at = max_len.min(out.len());
    while !out.is_char_boundary(truncate_at) {
        truncate_at -= 1;
    }
    out.truncate(truncate_at);
    out
}

/// Text that is already in `form`, and text that is in the opposite form.
fn corpora(form: Form, seed: u64) -> [(&'static str, String); 2] {
    let base = realistic_corpus(seed, 128);
    let (already, needs): (String, String) = match form {
        Form::Nfc => (base.nfc().collect(), base.nfd().collect()),
        Form::Nfd => (base.nfd().collect(), base.nfc().collect()),
        Form::Nfkc => (base.nfkc().collect(), base.nfd().collect()),
        Form::Nfkd => (base.nfkd().collect(), base.nfc().collect()),
    };
    [("Already", already), ("Needs", needs)]
}

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfc);
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfkc);
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);
static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

fn icu4x(form: Form, text: &str) -> Cow<'_, str> {
    match form {
        Form::Nfc => ICU4X_NFC.normalize(text),
        Form::Nfd => ICU4X_NFD.normalize(text),
        Form::Nfkc => ICU4X_NFKC.normalize(text),
        Form::Nfkd => ICU4X_NFKD.normalize(text),
    }
}

fn unicode_rs(form: Form, text: &str) -> String {
    match form {
        Form::Nfc => text.nfc().collect(),
        Form::Nfd => text.nfd().collect(),
        Form::Nfkc => text.nfkc().collect(),
        Form::Nfkd => text.nfkd().collect(),
    }
}

fn benches_normalization_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Normalization Forms");
    group.measurement_time(std::time::Duration::from_secs(10));

    let seeds = [0x517ea41e, 0xdeadbeef, 0x1337c0de, 0xcafef00d];
    for (form, seed) in Form::ALL.into_iter().zip(seeds) {
        let normalizer = Normalizer::builder().form(form).build();
        for (state, corpus) in corpora(form, seed) {
            let scenario = format!("{state} {form}");
            group.throughput(Throughput::Bytes(corpus.len() as u64));

            bench_with_cow("ucdnorm", &scenario, &mut group, &corpus, |s| {
                normalizer.normalize_str(s).unwrap_or(Cow::Borrowed(s))
            });
            bench_with_cow("ICU4X", &scenario, &mut group, &corpus, |s| icu4x(form, s));
            bench_no_cow("unicode-normalization", &scenario, &mut group, &corpus, |s| {
                unicode_rs(form, s)
            });
        }
    }

    group.finish();
}

fn bench_with_cow<F>(
    lib: &str,
    scenario: &str,
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    corpus: &str,
    mut func: F,
) where
    F: FnMut(&str) -> Cow<'_, str>,
{
    let mut zero_copy_count = 0u64;
    let mut total_count = 0u64;

    group.bench_function(BenchmarkId::new(lib, scenario), |b| {
        b.iter(|| {
            let result = func(black_box(corpus));
            total_count += 1;
            if matches!(result, Cow::Borrowed(s) if s.as_ptr() == corpus.as_ptr() && s.len() == corpus.len())
            {
                zero_copy_count += 1;
            }
            result
        })
    });

    let zero_copy_pct = if total_count > 0 {
        (zero_copy_count as f64 / total_count as f64) * 100.0
    } else {
        0.0
    };
    println!("  {lib} - {scenario}: Zero-Copy {zero_copy_pct:.1}% ({zero_copy_count}/{total_count})");
}

fn bench_no_cow<F>(
    lib: &str,
    scenario: &str,
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    corpus: &str,
    func: F,
) where
    F: Fn(&str) -> String,
{
    group.bench_function(BenchmarkId::new(lib, scenario), |b| {
        b.iter(|| func(black_box(corpus)))
    });
    println!("  {lib} - {scenario}: Always allocates");
}

criterion_group!(benches, benches_normalization_forms);
criterion_main!(benches);
