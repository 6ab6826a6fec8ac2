use gradechart::core::{FilterCriteria, Metric, RecordSet, StudentRecord};
use gradechart::error::ChartError;

fn record(id: &str, scores: &[(Metric, f64)]) -> StudentRecord {
    StudentRecord::new(id, scores.iter().copied()).expect("valid record")
}

fn sample_set() -> RecordSet {
    RecordSet::new(vec![
        record(
            "A",
            &[
                (Metric::Tbp, 90.0),
                (Metric::Tugas, 80.0),
                (Metric::Total, 85.0),
            ],
        ),
        record(
            "B",
            &[
                (Metric::Tbp, 40.0),
                (Metric::Tugas, 50.0),
                (Metric::Total, 45.0),
            ],
        ),
    ])
}

#[test]
fn filter_keeps_records_meeting_threshold_on_both_axes() {
    let records = sample_set();
    let criteria =
        FilterCriteria::new(Metric::Tbp, Metric::Tugas, Metric::Total, 50.0).expect("criteria");

    let filtered = records.filter(&criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "A");
}

#[test]
fn filter_threshold_is_inclusive() {
    let records = sample_set();
    // B has TUGAS exactly 50 but TBP 40; only the X-metric fails.
    let criteria =
        FilterCriteria::new(Metric::Tugas, Metric::Tugas, Metric::Total, 50.0).expect("criteria");

    let filtered = records.filter(&criteria);
    assert_eq!(filtered.len(), 2, "value equal to threshold passes");
}

#[test]
fn filter_of_everything_yields_empty_set() {
    let records = sample_set();
    let criteria =
        FilterCriteria::new(Metric::Tbp, Metric::Tugas, Metric::Total, 95.0).expect("criteria");
    assert!(records.filter(&criteria).is_empty());
}

#[test]
fn missing_metric_scores_as_zero() {
    let records = sample_set();
    // Neither record carries UAS; a zero threshold still admits them.
    let criteria =
        FilterCriteria::new(Metric::Uas, Metric::Tugas, Metric::Total, 0.0).expect("criteria");
    assert_eq!(records.filter(&criteria).len(), 2);

    let criteria =
        FilterCriteria::new(Metric::Uas, Metric::Tugas, Metric::Total, 1.0).expect("criteria");
    assert!(records.filter(&criteria).is_empty());
}

#[test]
fn record_rejects_out_of_domain_scores() {
    let err = StudentRecord::new("X", [(Metric::Tbp, 101.0)]).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = StudentRecord::new("X", [(Metric::Tbp, f64::NAN)]).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = StudentRecord::new("", [(Metric::Tbp, 50.0)]).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn metric_parse_rejects_unknown_names() {
    assert_eq!("TBP".parse::<Metric>().expect("known"), Metric::Tbp);
    assert_eq!(
        "CPMK072".parse::<Metric>().expect("known"),
        Metric::Cpmk072
    );

    let err = "GPA".parse::<Metric>().unwrap_err();
    assert!(matches!(err, ChartError::UnknownMetric(name) if name == "GPA"));
}

#[test]
fn record_set_loads_provider_json() {
    let input = r#"[
        {"ID": "12345", "TBP": 88.5, "TUGAS": 91.0, "UTS": 70.0, "UAS": 82.5, "TOTAL": 84.1, "CPMK012": 90.0},
        {"ID": "67890", "TBP": 55.0, "TUGAS": 48.0, "UTS": 60.0, "UAS": 65.0, "TOTAL": 57.2}
    ]"#;

    let records = RecordSet::from_json(input).expect("valid provider JSON");
    assert_eq!(records.len(), 2);

    let first = records.find("12345").expect("present");
    assert_eq!(first.score(Metric::Tbp), 88.5);
    assert_eq!(first.score(Metric::Cpmk031), 0.0, "absent metric reads 0");
    assert!(records.find("99999").is_none());
}

#[test]
fn record_set_json_rejects_unknown_metric_keys() {
    let input = r#"[{"ID": "1", "TBP": 50.0, "BONUS": 10.0}]"#;
    assert!(RecordSet::from_json(input).is_err());
}

#[test]
fn record_set_json_holds_records_to_construction_invariants() {
    // Same checks as StudentRecord::new: scores in [0, 100], non-empty id.
    let err = RecordSet::from_json(r#"[{"ID": "X", "TBP": 150.0}]"#).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = RecordSet::from_json(r#"[{"ID": "X", "TBP": -1.0}]"#).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = RecordSet::from_json(r#"[{"ID": "", "TBP": 50.0}]"#).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn record_preserves_metric_insertion_order() {
    let r = record(
        "A",
        &[
            (Metric::Uts, 1.0),
            (Metric::Tbp, 2.0),
            (Metric::Cpmk012, 3.0),
        ],
    );
    let order: Vec<Metric> = r.metrics().collect();
    assert_eq!(order, vec![Metric::Uts, Metric::Tbp, Metric::Cpmk012]);
}
