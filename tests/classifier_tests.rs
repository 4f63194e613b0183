use nlascan::classifier::{classify_record, MatchMode, RelationshipTier};
use nlascan::corpus::{ApplicationRecord, FieldValue};
use nlascan::index::ReverseIndex;

fn record(name: &str, fields: Vec<(&str, FieldValue)>) -> ApplicationRecord {
    ApplicationRecord::new(
        name.to_string(),
        fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
    )
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

#[test]
fn test_substring_matching_in_prose() {
    let rec = record(
        "SolverApp",
        vec![("description", text("We use LAPACK and ScaLAPACK for our solver"))],
    );
    let result = classify_record(&rec, MatchMode::Substring);

    assert!(result.used.contains("LAPACK"), "LAPACK should be Used");
    assert!(result.used.contains("ScaLAPACK"), "ScaLAPACK should be Used");
}

#[test]
fn test_field_name_override_beats_neutral_value() {
    let rec = record("App", vec![("libs-interest", text("MUMPS"))]);
    let result = classify_record(&rec, MatchMode::Substring);

    assert_eq!(result.tier_of("MUMPS"), Some(RelationshipTier::Interested));
}

#[test]
fn test_tier_priority_used_wins_over_interested() {
    let rec = record(
        "App",
        vec![
            ("libs-used", text("ELPA")),
            ("libs-interest", text("ELPA looks great")),
            ("notes", text("ELPA")),
        ],
    );
    let result = classify_record(&rec, MatchMode::Substring);

    assert!(result.used.contains("ELPA"));
    assert!(result.interested.is_empty());
    assert!(result.mentioned.is_empty());
}

#[test]
fn test_case_variants_share_one_canonical_identifier() {
    for spelling in ["MUMPS", "mumps", "Mumps"] {
        let rec = record("App", vec![("libs-used", text(spelling))]);
        let result = classify_record(&rec, MatchMode::Substring);
        assert!(
            result.used.contains("MUMPS"),
            "spelling {} should resolve to MUMPS",
            spelling
        );
    }
}

#[test]
fn test_index_determinism_under_record_reordering() {
    let records = vec![
        record("A", vec![("libs-used", text("LAPACK, BLAS"))]),
        record("B", vec![("libs-interest", text("LAPACK"))]),
        record("C", vec![("notes", text("BLAS appears here"))]),
    ];

    let classify_all = |records: &[ApplicationRecord]| {
        let classified: Vec<_> = records
            .iter()
            .map(|r| (r.name().to_string(), classify_record(r, MatchMode::Substring)))
            .collect();
        ReverseIndex::from_classifications(
            classified.iter().map(|(n, c)| (n.as_str(), c)),
        )
    };

    let forward = classify_all(&records);
    let reversed: Vec<_> = records.into_iter().rev().collect();
    let backward = classify_all(&reversed);

    assert_eq!(forward, backward);
}

#[test]
fn test_tier_exclusivity_in_index() {
    let records = vec![
        record("A", vec![("libs-used", text("PETSc")), ("notes", text("PETSc rocks"))]),
        record("B", vec![("libs-interest", text("PETSc"))]),
    ];
    let classified: Vec<_> = records
        .iter()
        .map(|r| (r.name().to_string(), classify_record(r, MatchMode::Substring)))
        .collect();
    let index =
        ReverseIndex::from_classifications(classified.iter().map(|(n, c)| (n.as_str(), c)));

    let entry = index.get("PETSc").unwrap();
    for app in &entry.used_by {
        assert!(!entry.interested_by.contains(app));
        assert!(!entry.mentioned_by.contains(app));
    }
    for app in &entry.interested_by {
        assert!(!entry.mentioned_by.contains(app));
    }
    assert!(entry.used_by.contains("A"));
    assert!(entry.interested_by.contains("B"));
}

#[test]
fn test_word_boundary_mode_is_stricter() {
    let rec = record("App", vec![("notes", text("the optimizer chases local minima"))]);

    let loose = classify_record(&rec, MatchMode::Substring);
    assert!(loose.mentioned.contains("ChASE"));

    let strict = classify_record(&rec, MatchMode::WordBoundary);
    assert!(strict.is_empty());
}

#[test]
fn test_value_content_signals_on_neutral_field() {
    let rec = record(
        "App",
        vec![
            ("summary", text("currently implemented on top of cuBLAS")),
            ("roadmap", text("planning a PARDISO backend")),
            ("related", text("PaStiX")),
        ],
    );
    let result = classify_record(&rec, MatchMode::Substring);

    assert!(result.used.contains("cuBLAS"));
    assert!(result.interested.contains("PARDISO"));
    assert!(result.mentioned.contains("PaStiX"));
}
