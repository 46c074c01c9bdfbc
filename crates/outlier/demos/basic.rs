//! Basic example demonstrating outlier detection
//!
//! Run with: cargo run --example basic -p outlier

use outlier::{
    compute_bounds, detect_anomalies_with, flag_anomalies, Column, CollectingReporter, Dataset,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== outlier Basic Examples ===\n");

    let ds = Dataset::new(vec![
        Column::from_f64("age", [67.0, 61.0, 80.0, 49.0, 79.0, 81.0, 74.0, 69.0]),
        Column::from_f64(
            "avg_glucose_level",
            [228.69, 105.92, 104.1, 98.4, 102.2, 95.1, 99.8, 101.3],
        ),
        Column::from_f64("bmi", [36.6, 32.5, 34.4, 24.0, 29.0, 27.4, 22.8, 71.9]),
        Column::from_strs(
            "gender",
            ["Male", "Male", "Female", "Female", "Male", "Female", "Male", "Female"],
        ),
    ])?;
    let features = ["age", "avg_glucose_level", "bmi", "gender"];

    // 1. Fences
    println!("1. Fences (multiplier=1.5)");
    for feature in &features[..3] {
        let b = compute_bounds(&ds, feature)?;
        println!(
            "   {:<18} q1={:.2} q3={:.2} fence=[{:.2}, {:.2}]",
            feature, b.q1, b.q3, b.lower, b.upper
        );
    }

    // 2. Detection
    println!("\n2. Detection (lenient)");
    let mut reporter = CollectingReporter::new();
    let table = detect_anomalies_with(&ds, &features, &mut reporter);
    for line in reporter.lines() {
        println!("   {}", line);
    }
    for record in &table.records {
        let cells: Vec<String> = record.values.iter().map(|v| v.to_string()).collect();
        println!("   row {}: {}", record.row, cells.join(", "));
    }

    // 3. Flagging
    println!("\n3. Flagging (strict)");
    let mask = flag_anomalies(&ds, &features[..3])?;
    println!("   Mask: {:?}", mask);
    match flag_anomalies(&ds, &features) {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   With 'gender': {}", e),
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
