//! IQR outlier scanner.

use std::collections::HashSet;

use outlier_api::{ScanConfig, ScanMode};
use outlier_spi::{
    AnomalyRecord, AnomalyTable, Bounds, Dataset, Diagnostic, OutlierError, OutlierScanner,
    Reporter, Result,
};

use crate::bounds::{compute_all_bounds, compute_bounds_with};
use crate::reporting::{skip_diagnostic, NullReporter, TracingReporter};

// ============================================================================
// IQR Scanner
// ============================================================================

/// Scans features with the `[Q1 - k*IQR, Q3 + k*IQR]` fence.
///
/// The scan mode decides what happens to features that are absent,
/// categorical or empty: strict scans fail with the feature's error,
/// lenient scans report a diagnostic and move on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrScanner {
    config: ScanConfig,
}

impl IqrScanner {
    /// Create a scanner from configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Strict scanner with the default multiplier.
    pub fn strict() -> Self {
        Self::new(ScanConfig::flagging())
    }

    /// Lenient scanner with the default multiplier.
    pub fn lenient() -> Self {
        Self::new(ScanConfig::detection())
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn mode(&self) -> ScanMode {
        self.config.mode
    }

    /// Turn a per-feature error into a skip, or propagate it.
    fn recover(&self, error: OutlierError, reporter: &mut dyn Reporter) -> Result<()> {
        if self.config.is_strict() {
            return Err(error);
        }
        match skip_diagnostic(&error) {
            Some(diagnostic) => {
                reporter.report(diagnostic);
                Ok(())
            }
            None => Err(error),
        }
    }
}

impl Default for IqrScanner {
    fn default() -> Self {
        Self::lenient()
    }
}

impl OutlierScanner for IqrScanner {
    fn bounds(&self, dataset: &Dataset, feature: &str) -> Result<Bounds> {
        compute_bounds_with(dataset, feature, &self.config.iqr)
    }

    fn detect(
        &self,
        dataset: &Dataset,
        features: &[&str],
        reporter: &mut dyn Reporter,
    ) -> Result<AnomalyTable> {
        self.config.iqr.validate()?;

        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for &feature in features {
            let bounds = match self.bounds(dataset, feature) {
                Ok(bounds) => bounds,
                Err(error) => {
                    self.recover(error, reporter)?;
                    continue;
                }
            };
            let values = dataset.numeric_column(feature)?;

            let outliers: Vec<(usize, f64)> = values
                .iter()
                .enumerate()
                .filter_map(|(row, v)| v.filter(|x| bounds.is_outlier(*x)).map(|x| (row, x)))
                .collect();

            for &(row, _) in &outliers {
                if seen.insert(row) {
                    rows.push(row);
                }
            }

            let diagnostic = if outliers.is_empty() {
                Diagnostic::NoAnomalies {
                    feature: feature.to_string(),
                    bounds,
                }
            } else {
                Diagnostic::AnomaliesFound {
                    feature: feature.to_string(),
                    bounds,
                    outliers,
                }
            };
            reporter.report(diagnostic);
        }

        let records = rows
            .into_iter()
            .map(|row| AnomalyRecord {
                row,
                values: dataset.project_row(row, features),
            })
            .collect();

        Ok(AnomalyTable {
            columns: features.iter().map(|f| f.to_string()).collect(),
            records,
        })
    }

    fn flag(
        &self,
        dataset: &Dataset,
        features: &[&str],
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<bool>> {
        self.config.iqr.validate()?;

        let mut mask = vec![false; dataset.row_count()];
        let all_bounds = compute_all_bounds(dataset, features, &self.config.iqr);

        for (&feature, result) in features.iter().zip(all_bounds) {
            let bounds = match result {
                Ok(bounds) => bounds,
                Err(error) => {
                    self.recover(error, reporter)?;
                    continue;
                }
            };
            let values = dataset.numeric_column(feature)?;
            for (flag, hit) in mask.iter_mut().zip(bounds.mask(values)) {
                *flag |= hit;
            }
        }

        Ok(mask)
    }
}

// ============================================================================
// Entry points
// ============================================================================

fn as_strs<S: AsRef<str>>(features: &[S]) -> Vec<&str> {
    features.iter().map(|f| f.as_ref()).collect()
}

/// Rows anomalous in at least one feature, reported through `tracing`.
///
/// Absent, categorical and empty features are skipped with a diagnostic.
/// The table's columns are exactly `features`, even when no row qualifies.
pub fn detect_anomalies<S: AsRef<str>>(dataset: &Dataset, features: &[S]) -> AnomalyTable {
    detect_anomalies_with(dataset, features, &mut TracingReporter::new())
}

/// Lenient detection with a caller-supplied reporter.
pub fn detect_anomalies_with<S: AsRef<str>>(
    dataset: &Dataset,
    features: &[S],
    reporter: &mut dyn Reporter,
) -> AnomalyTable {
    detect_or_empty(&IqrScanner::lenient(), dataset, features, reporter)
}

/// Run detection, logging any failure and falling back to an empty table.
fn detect_or_empty<S: AsRef<str>>(
    scanner: &IqrScanner,
    dataset: &Dataset,
    features: &[S],
    reporter: &mut dyn Reporter,
) -> AnomalyTable {
    match scanner.detect(dataset, &as_strs(features), reporter) {
        Ok(table) => table,
        Err(error) => {
            // lenient scans skip feature errors; anything else is a configuration fault
            tracing::error!(%error, "lenient detection failed; returning an empty table");
            AnomalyTable::empty(features)
        }
    }
}

/// Per-row anomaly mask, OR-combined across `features`.
///
/// Fails on the first absent, categorical or empty feature in selector order.
pub fn flag_anomalies<S: AsRef<str>>(dataset: &Dataset, features: &[S]) -> Result<Vec<bool>> {
    IqrScanner::strict().flag(dataset, &as_strs(features), &mut NullReporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::CollectingReporter;
    use outlier_api::ScanConfigBuilder;
    use outlier_spi::{Column, Value};

    fn reference() -> Dataset {
        Dataset::new(vec![Column::from_f64("v", [1.0, 2.0, 3.0, 4.0, 100.0])]).unwrap()
    }

    fn two_features() -> Dataset {
        Dataset::new(vec![
            Column::from_f64("a", [1.0, 2.0, 3.0, 4.0, 100.0, 2.0, 3.0]),
            Column::from_f64("b", [-50.0, 10.0, 11.0, 12.0, 11.0, 10.0, 12.0]),
            Column::from_strs("gender", ["M", "F", "M", "F", "M", "F", "M"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_detect_reference_scenario() {
        let mut reporter = CollectingReporter::new();
        let table = detect_anomalies_with(&reference(), &["v"], &mut reporter);

        assert_eq!(table.columns, vec!["v".to_string()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].row, 4);
        assert_eq!(table.records[0].values, vec![Value::Number(100.0)]);

        assert_eq!(reporter.diagnostics().len(), 1);
        assert!(matches!(
            &reporter.diagnostics()[0],
            Diagnostic::AnomaliesFound { outliers, .. } if outliers == &vec![(4, 100.0)]
        ));
    }

    #[test]
    fn test_flag_reference_scenario() {
        let mask = flag_anomalies(&reference(), &["v"]).unwrap();
        assert_eq!(mask, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_detect_skips_missing_feature() {
        let mut reporter = CollectingReporter::new();
        let table = detect_anomalies_with(&reference(), &["missing_col"], &mut reporter);

        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["missing_col".to_string()]);
        assert_eq!(reporter.lines(), vec!["Feature 'missing_col' not found in dataset."]);
    }

    #[test]
    fn test_flag_rejects_missing_feature() {
        let err = flag_anomalies(&reference(), &["missing_col"]).unwrap_err();
        assert_eq!(
            err,
            OutlierError::FeatureNotFound {
                feature: "missing_col".to_string()
            }
        );
    }

    #[test]
    fn test_flag_rejects_categorical_feature() {
        let err = flag_anomalies(&two_features(), &["a", "gender"]).unwrap_err();
        assert_eq!(err.feature(), Some("gender"));
    }

    #[test]
    fn test_flag_reports_first_bad_feature() {
        let err = flag_anomalies(&two_features(), &["nope", "gender"]).unwrap_err();
        assert_eq!(err.feature(), Some("nope"));
    }

    #[test]
    fn test_union_without_duplicates() {
        let ds = two_features();
        let mut reporter = CollectingReporter::new();
        let table = detect_anomalies_with(&ds, &["a", "b", "a"], &mut reporter);

        assert_eq!(table.row_indices(), vec![4, 0]);
        assert_eq!(table.columns.len(), 3);
        assert_eq!(reporter.diagnostics().len(), 3);

        let mask = flag_anomalies(&ds, &["a", "b"]).unwrap();
        assert_eq!(mask, vec![true, false, false, false, true, false, false]);
    }

    #[test]
    fn test_detect_reports_non_numeric_and_continues() {
        let mut reporter = CollectingReporter::new();
        let table = detect_anomalies_with(&two_features(), &["gender", "a"], &mut reporter);

        assert_eq!(table.row_indices(), vec![4]);
        assert_eq!(
            table.records[0].values,
            vec![Value::Text("M".to_string()), Value::Number(100.0)]
        );
        assert_eq!(
            reporter.lines()[0],
            "Feature 'gender' is not numerical and will be skipped."
        );
    }

    #[test]
    fn test_no_anomalies_diagnostic() {
        let ds = Dataset::new(vec![Column::from_f64("flat", [5.0, 5.0, 5.0, 5.0])]).unwrap();
        let mut reporter = CollectingReporter::new();
        let table = detect_anomalies_with(&ds, &["flat"], &mut reporter);

        assert!(table.is_empty());
        assert_eq!(reporter.lines(), vec!["No anomalies detected in feature 'flat'."]);
    }

    #[test]
    fn test_zero_iqr_flags_any_deviation() {
        let ds = Dataset::new(vec![Column::from_f64("flat", [5.0, 5.0, 5.0, 5.0, 5.0, 6.0])])
            .unwrap();
        let mask = flag_anomalies(&ds, &["flat"]).unwrap();
        assert_eq!(mask, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_missing_cells_are_not_flagged() {
        let ds = Dataset::new(vec![Column::numeric(
            "v",
            vec![Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(100.0)],
        )])
        .unwrap();
        let mask = flag_anomalies(&ds, &["v"]).unwrap();
        assert_eq!(mask, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_empty_feature_is_skipped_leniently() {
        let ds = Dataset::new(vec![
            Column::numeric("empty", vec![None, None]),
            Column::from_f64("v", [1.0, 2.0]),
        ])
        .unwrap();
        let mut reporter = CollectingReporter::new();
        let table = detect_anomalies_with(&ds, &["empty"], &mut reporter);
        assert!(table.is_empty());
        assert!(matches!(
            reporter.diagnostics()[0],
            Diagnostic::EmptyFeature { .. }
        ));

        let err = flag_anomalies(&ds, &["empty"]).unwrap_err();
        assert!(matches!(err, OutlierError::EmptyFeature { .. }));
    }

    #[test]
    fn test_strict_detect_fails() {
        let scanner = IqrScanner::strict();
        let result = scanner.detect(&reference(), &["v", "missing_col"], &mut NullReporter);
        assert!(matches!(result, Err(OutlierError::FeatureNotFound { .. })));
    }

    #[test]
    fn test_lenient_flag_skips() {
        let scanner = IqrScanner::lenient();
        let mut reporter = CollectingReporter::new();
        let mask = scanner
            .flag(&reference(), &["missing_col", "v"], &mut reporter)
            .unwrap();
        assert_eq!(mask, vec![false, false, false, false, true]);
        assert_eq!(reporter.diagnostics().len(), 1);
    }

    #[test]
    fn test_flag_with_no_features() {
        let mask = flag_anomalies::<&str>(&reference(), &[]).unwrap();
        assert_eq!(mask, vec![false; 5]);
    }

    #[test]
    fn test_wider_multiplier_finds_fewer() {
        let config = ScanConfigBuilder::new().multiplier(100.0).build().unwrap();
        let scanner = IqrScanner::new(config);
        let table = scanner
            .detect(&reference(), &["v"], &mut NullReporter)
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_multiplier_is_an_error_in_any_mode() {
        let config = ScanConfig::new(outlier_api::IqrConfig::new(-2.0), ScanMode::Lenient);
        let scanner = IqrScanner::new(config);
        assert!(scanner.detect(&reference(), &["v"], &mut NullReporter).is_err());
        assert!(scanner.flag(&reference(), &["v"], &mut NullReporter).is_err());
    }

    #[test]
    fn test_failed_lenient_detection_yields_empty_table() {
        let config = ScanConfig::new(outlier_api::IqrConfig::new(f64::NAN), ScanMode::Lenient);
        let mut reporter = CollectingReporter::new();
        let table = detect_or_empty(&IqrScanner::new(config), &reference(), &["v", "w"], &mut reporter);

        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["v".to_string(), "w".to_string()]);
        assert!(reporter.diagnostics().is_empty());
    }
}
