//! End-to-end tests for the outlier crate
//!
//! Load a dataset from disk, scan it, summarize it, using only this crate's API.

use std::io::Write;

use outlier::{
    box_summary, correlation_matrix, detect_anomalies_with, flag_anomalies, histogram, load_path,
    value_counts, CollectingReporter, HistogramConfig, Value,
};

fn stroke_csv() -> String {
    let mut csv = String::from(
        "id,gender,age,hypertension,heart_disease,ever_married,work_type,Residence_type,avg_glucose_level,bmi,smoking_status,stroke\n",
    );
    for i in 0..40 {
        let gender = if i % 2 == 0 { "Male" } else { "Female" };
        let age = 30 + (i * 7) % 50;
        let glucose = 85.0 + (i % 10) as f64 * 2.5;
        let bmi = if i % 13 == 5 { "N/A".to_string() } else { format!("{:.1}", 24.0 + (i % 8) as f64) };
        csv.push_str(&format!(
            "{},{},{},0,0,Yes,Private,Urban,{:.2},{},never smoked,0\n",
            1000 + i,
            gender,
            age,
            glucose,
            bmi
        ));
    }
    // injected outliers
    csv.push_str("2000,Female,45,1,0,Yes,Self-employed,Rural,271.74,31.0,smokes,1\n");
    csv.push_str("2001,Male,52,0,1,No,Govt_job,Urban,95.00,78.0,Unknown,1\n");
    csv
}

fn write_temp(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn e2e_detection_workflow() {
    let file = write_temp(&stroke_csv(), ".csv");
    let ds = load_path(file.path()).unwrap();
    assert_eq!(ds.row_count(), 42);

    let features = ["age", "avg_glucose_level", "bmi", "gender", "missing_col"];
    let mut reporter = CollectingReporter::new();
    let table = detect_anomalies_with(&ds, &features, &mut reporter);

    assert_eq!(table.row_indices(), vec![40, 41]);
    assert_eq!(table.columns, features.to_vec());
    assert_eq!(table.records[0].values[1], Value::Number(271.74));
    assert_eq!(table.records[1].values[2], Value::Number(78.0));
    assert_eq!(table.records[0].values[4], Value::Missing);

    let skipped = reporter.diagnostics().iter().filter(|d| d.is_skip()).count();
    assert_eq!(skipped, 2);
}

#[test]
fn e2e_flagging_workflow() {
    let file = write_temp(&stroke_csv(), ".csv");
    let ds = load_path(file.path()).unwrap();

    let mask = flag_anomalies(&ds, &["avg_glucose_level", "bmi"]).unwrap();
    assert_eq!(mask.len(), ds.row_count());
    assert_eq!(mask.iter().filter(|&&f| f).count(), 2);
    assert!(mask[40] && mask[41]);

    assert!(flag_anomalies(&ds, &["avg_glucose_level", "gender"]).is_err());
}

#[test]
fn e2e_json_records_workflow() {
    let json = r#"[
        {"age": 65, "avg_glucose_level": 100.0, "gender": "Female"},
        {"age": 66, "avg_glucose_level": 101.0, "gender": "Male"},
        {"age": 64, "avg_glucose_level": 99.0, "gender": "Female"},
        {"age": 65, "avg_glucose_level": 102.0, "gender": "Male"},
        {"age": 67, "avg_glucose_level": 300.0, "gender": "Female"}
    ]"#;
    let file = write_temp(json, ".json");
    let ds = load_path(file.path()).unwrap();

    let mask = flag_anomalies(&ds, &["avg_glucose_level"]).unwrap();
    assert_eq!(mask, vec![false, false, false, false, true]);
}

#[test]
fn e2e_summary_workflow() {
    let file = write_temp(&stroke_csv(), ".csv");
    let ds = load_path(file.path()).unwrap();

    let summary = box_summary(&ds, "bmi").unwrap();
    assert!(summary.count < ds.row_count());
    assert_eq!(summary.max, 78.0);

    let hist = histogram(&ds, "age", &HistogramConfig::default()).unwrap();
    assert_eq!(hist.bin_count(), 40);
    assert_eq!(hist.total(), 42);

    let counts = value_counts(&ds, "gender").unwrap();
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 42);

    let corr = correlation_matrix(&ds, &["age", "avg_glucose_level", "bmi"]).unwrap();
    assert_eq!(corr.values.len(), 3);
    assert_eq!(corr.get("bmi", "bmi"), Some(1.0));
}
