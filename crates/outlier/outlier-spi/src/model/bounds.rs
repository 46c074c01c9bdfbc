//! IQR fence types.

use serde::{Deserialize, Serialize};

/// Lower and upper fence of a single feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Feature the fence was computed for.
    pub feature: String,
    /// First quartile.
    pub q1: f64,
    /// Third quartile.
    pub q3: f64,
    /// `q1 - multiplier * iqr`.
    pub lower: f64,
    /// `q3 + multiplier * iqr`.
    pub upper: f64,
}

impl Bounds {
    /// Derive the fence from the quartiles.
    pub fn from_quartiles(feature: impl Into<String>, q1: f64, q3: f64, multiplier: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            feature: feature.into(),
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        }
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// True when `value` lies inside `[lower, upper]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// True when `value` lies strictly outside the fence. NaN is never an outlier.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Per-row outlier test over a column; missing cells are `false`.
    pub fn mask(&self, values: &[Option<f64>]) -> Vec<bool> {
        values
            .iter()
            .map(|v| v.map(|x| self.is_outlier(x)).unwrap_or(false))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_quartiles() {
        let bounds = Bounds::from_quartiles("v", 2.0, 4.0, 1.5);
        assert_eq!(bounds.iqr(), 2.0);
        assert_eq!(bounds.lower, -1.0);
        assert_eq!(bounds.upper, 7.0);
    }

    #[test]
    fn test_edges_are_inside() {
        let bounds = Bounds::from_quartiles("v", 2.0, 4.0, 1.5);
        assert!(bounds.contains(-1.0));
        assert!(bounds.contains(7.0));
        assert!(!bounds.is_outlier(7.0));
        assert!(bounds.is_outlier(7.0001));
        assert!(bounds.is_outlier(-1.5));
    }

    #[test]
    fn test_nan_is_not_an_outlier() {
        let bounds = Bounds::from_quartiles("v", 0.0, 1.0, 1.5);
        assert!(!bounds.is_outlier(f64::NAN));
    }

    #[test]
    fn test_zero_iqr_collapses() {
        let bounds = Bounds::from_quartiles("v", 5.0, 5.0, 1.5);
        assert_eq!((bounds.lower, bounds.upper), (5.0, 5.0));
        assert!(bounds.is_outlier(6.0));
        assert!(!bounds.is_outlier(5.0));
    }

    #[test]
    fn test_mask_skips_missing() {
        let bounds = Bounds::from_quartiles("v", 2.0, 4.0, 1.5);
        let mask = bounds.mask(&[Some(1.0), None, Some(100.0)]);
        assert_eq!(mask, vec![false, false, true]);
    }
}
