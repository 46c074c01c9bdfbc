//! Outlier detection error types.

use thiserror::Error;

/// Outlier detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlierError {
    /// Requested feature is not a column of the dataset.
    #[error("Feature '{feature}' not found in dataset")]
    FeatureNotFound { feature: String },

    /// Requested feature exists but holds categorical values.
    #[error("Feature '{feature}' is not numerical")]
    NonNumericFeature { feature: String },

    /// Quartiles are undefined for a column without observed values.
    #[error("Feature '{feature}' has no non-missing values; quartiles are undefined")]
    EmptyFeature { feature: String },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Column '{column}' has {got} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Load error: {0}")]
    Load(String),
}

impl OutlierError {
    /// Name of the feature the error is about, if any.
    pub fn feature(&self) -> Option<&str> {
        match self {
            OutlierError::FeatureNotFound { feature }
            | OutlierError::NonNumericFeature { feature }
            | OutlierError::EmptyFeature { feature } => Some(feature),
            _ => None,
        }
    }

    /// True for errors caused by a malformed feature selector.
    pub fn is_feature_error(&self) -> bool {
        self.feature().is_some()
    }
}

/// Result type for outlier detection operations.
pub type Result<T> = std::result::Result<T, OutlierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_not_found_display() {
        let error = OutlierError::FeatureNotFound {
            feature: "missing_col".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Feature 'missing_col' not found in dataset"
        );
    }

    #[test]
    fn test_non_numeric_display() {
        let error = OutlierError::NonNumericFeature {
            feature: "gender".to_string(),
        };
        assert_eq!(error.to_string(), "Feature 'gender' is not numerical");
    }

    #[test]
    fn test_empty_feature_display() {
        let error = OutlierError::EmptyFeature {
            feature: "bmi".to_string(),
        };
        assert!(error.to_string().contains("'bmi'"));
        assert!(error.to_string().contains("quartiles are undefined"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = OutlierError::InvalidParameter {
            name: "multiplier".to_string(),
            reason: "must be non-negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: multiplier - must be non-negative"
        );
    }

    #[test]
    fn test_column_length_mismatch_display() {
        let error = OutlierError::ColumnLengthMismatch {
            column: "age".to_string(),
            expected: 5,
            got: 4,
        };
        assert_eq!(error.to_string(), "Column 'age' has 4 values, expected 5");
    }

    #[test]
    fn test_feature_accessor() {
        let error = OutlierError::EmptyFeature {
            feature: "bmi".to_string(),
        };
        assert_eq!(error.feature(), Some("bmi"));
        assert!(error.is_feature_error());

        let error = OutlierError::Load("bad header".to_string());
        assert_eq!(error.feature(), None);
        assert!(!error.is_feature_error());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlierError>();
    }
}
