use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nlascan::classifier::{classify_record, MatchMode};
use nlascan::corpus::{ApplicationRecord, FieldValue};
use nlascan::index::ReverseIndex;

fn sample_record() -> ApplicationRecord {
    ApplicationRecord::new(
        "BenchApp".to_string(),
        vec![
            (
                "nla-group-distributed-used".to_string(),
                FieldValue::List(vec![
                    "ScaLAPACK".to_string(),
                    "ELPA".to_string(),
                    "SLATE".to_string(),
                ]),
            ),
            (
                "libs-interest".to_string(),
                FieldValue::List(vec!["Ginkgo".to_string(), "DLA-Future".to_string()]),
            ),
            (
                "description".to_string(),
                FieldValue::Text(
                    "We currently use LAPACK with MKL as the backend and are \
                     considering MUMPS and SuperLU_DIST for sparse systems"
                        .to_string(),
                ),
            ),
            (
                "notes".to_string(),
                FieldValue::Text("PETSc, Trilinos and CP2K came up in the survey".to_string()),
            ),
        ],
    )
}

fn bench_classify_record(c: &mut Criterion) {
    let record = sample_record();

    c.bench_function("classify_record_substring", |b| {
        b.iter(|| black_box(classify_record(black_box(&record), MatchMode::Substring)));
    });

    c.bench_function("classify_record_word_boundary", |b| {
        b.iter(|| black_box(classify_record(black_box(&record), MatchMode::WordBoundary)));
    });
}

fn bench_index_fold(c: &mut Criterion) {
    let record = sample_record();
    let classification = classify_record(&record, MatchMode::Substring);
    let corpus: Vec<(String, _)> = (0..50)
        .map(|i| (format!("App{}", i), classification.clone()))
        .collect();

    c.bench_function("reverse_index_fold_50_records", |b| {
        b.iter(|| {
            black_box(ReverseIndex::from_classifications(
                corpus.iter().map(|(name, c)| (name.as_str(), c)),
            ))
        });
    });
}

criterion_group!(benches, bench_classify_record, bench_index_fold);
criterion_main!(benches);
