//! Outlier scanner trait definition.

use crate::contract::Reporter;
use crate::error::Result;
use crate::model::{AnomalyTable, Bounds, Dataset};

/// Outlier scanner trait.
///
/// Implementations compute per-feature fences and merge the per-feature
/// results across a feature selector.
pub trait OutlierScanner: Send + Sync {
    /// Compute the fence for a single numeric feature.
    fn bounds(&self, dataset: &Dataset, feature: &str) -> Result<Bounds>;

    /// Collect the rows anomalous in at least one feature.
    ///
    /// Diagnostics for every feature go to `reporter`.
    fn detect(
        &self,
        dataset: &Dataset,
        features: &[&str],
        reporter: &mut dyn Reporter,
    ) -> Result<AnomalyTable>;

    /// Per-row anomaly mask aligned with the dataset rows.
    fn flag(
        &self,
        dataset: &Dataset,
        features: &[&str],
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<bool>>;
}
