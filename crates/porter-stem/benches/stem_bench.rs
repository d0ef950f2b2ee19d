// Criterion benchmarks for porter-stem.
//
// Run:
//   cargo bench -p porter-stem

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use porter_stem::{PorterHandle, PorterStemmer, StemMode};

// ---------------------------------------------------------------------------
// Word list
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
struct GoldenEntry {
    word: String,
}

fn load_vocabulary() -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/vocabulary.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    serde_json::from_str::<Vec<GoldenEntry>>(&contents)
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.word)
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_stem_vocabulary(c: &mut Criterion) {
    let words = load_vocabulary();
    let stemmer = PorterStemmer::new();

    c.bench_function("stem_vocabulary_full", |b| {
        b.iter(|| {
            for w in &words {
                black_box(stemmer.stem_word(black_box(w), StemMode::Full).ok());
            }
        })
    });

    c.bench_function("stem_vocabulary_plurals_only", |b| {
        b.iter(|| {
            for w in &words {
                black_box(stemmer.stem_word(black_box(w), StemMode::PluralsOnly).ok());
            }
        })
    });
}

fn bench_handle_with_stopwords(c: &mut Criterion) {
    let words = load_vocabulary();
    let handle = PorterHandle::new();
    handle.set_stopwords(words.iter().step_by(4).map(String::as_str));

    c.bench_function("handle_stem_with_stopwords", |b| {
        b.iter(|| {
            for w in &words {
                black_box(handle.stem(black_box(w)).ok());
            }
        })
    });
}

fn bench_single_word(c: &mut Criterion) {
    let stemmer = PorterStemmer::new();
    c.bench_function("stem_generalizations", |b| {
        b.iter(|| stemmer.stem_word(black_box("generalizations"), StemMode::Full))
    });
}

criterion_group!(
    benches,
    bench_stem_vocabulary,
    bench_handle_with_stopwords,
    bench_single_word
);
criterion_main!(benches);
