//! Per-feature diagnostics emitted by detection scans.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bounds::Bounds;

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// One line of scan output, describing what happened to a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    FeatureNotFound {
        feature: String,
    },
    NotNumeric {
        feature: String,
    },
    EmptyFeature {
        feature: String,
    },
    NoAnomalies {
        feature: String,
        bounds: Bounds,
    },
    AnomaliesFound {
        feature: String,
        bounds: Bounds,
        /// (row index, value) of every outlier, in row order.
        outliers: Vec<(usize, f64)>,
    },
}

impl Diagnostic {
    pub fn feature(&self) -> &str {
        match self {
            Diagnostic::FeatureNotFound { feature }
            | Diagnostic::NotNumeric { feature }
            | Diagnostic::EmptyFeature { feature }
            | Diagnostic::NoAnomalies { feature, .. }
            | Diagnostic::AnomaliesFound { feature, .. } => feature,
        }
    }

    pub fn level(&self) -> DiagnosticLevel {
        match self {
            Diagnostic::FeatureNotFound { .. }
            | Diagnostic::NotNumeric { .. }
            | Diagnostic::EmptyFeature { .. } => DiagnosticLevel::Warning,
            Diagnostic::NoAnomalies { .. } | Diagnostic::AnomaliesFound { .. } => {
                DiagnosticLevel::Info
            }
        }
    }

    /// True when the feature was skipped.
    pub fn is_skip(&self) -> bool {
        self.level() == DiagnosticLevel::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FeatureNotFound { feature } => {
                write!(f, "Feature '{}' not found in dataset.", feature)
            }
            Diagnostic::NotNumeric { feature } => {
                write!(f, "Feature '{}' is not numerical and will be skipped.", feature)
            }
            Diagnostic::EmptyFeature { feature } => write!(
                f,
                "Feature '{}' has no non-missing values and will be skipped.",
                feature
            ),
            Diagnostic::NoAnomalies { feature, .. } => {
                write!(f, "No anomalies detected in feature '{}'.", feature)
            }
            Diagnostic::AnomaliesFound {
                feature,
                bounds,
                outliers,
            } => {
                write!(
                    f,
                    "Anomalies detected in feature '{}' (bounds [{:.4}, {:.4}]):",
                    feature, bounds.lower, bounds.upper
                )?;
                for (row, value) in outliers {
                    write!(f, " row {}={}", row, value)?;
                }
                Ok(())
            }
        }
    }
}
