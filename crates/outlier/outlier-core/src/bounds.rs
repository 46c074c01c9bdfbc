//! Per-feature IQR fences.

use outlier_api::IqrConfig;
use outlier_spi::{Bounds, Dataset, OutlierError, Result};
use rayon::prelude::*;

use crate::quantile::quartiles;

/// Fence of `feature` with the default 1.5 multiplier.
pub fn compute_bounds(dataset: &Dataset, feature: &str) -> Result<Bounds> {
    compute_bounds_with(dataset, feature, &IqrConfig::default())
}

/// Fence of `feature` with a configured multiplier.
///
/// Missing and NaN cells are ignored. A column with no observed values
/// has undefined quartiles and fails with `EmptyFeature`.
pub fn compute_bounds_with(dataset: &Dataset, feature: &str, config: &IqrConfig) -> Result<Bounds> {
    config.validate()?;
    let column = dataset
        .column(feature)
        .ok_or_else(|| OutlierError::FeatureNotFound {
            feature: feature.to_string(),
        })?;
    if !column.is_numeric() {
        return Err(OutlierError::NonNumericFeature {
            feature: feature.to_string(),
        });
    }

    let (q1, q3) = quartiles(&column.observed()).ok_or_else(|| OutlierError::EmptyFeature {
        feature: feature.to_string(),
    })?;
    Ok(Bounds::from_quartiles(feature, q1, q3, config.multiplier))
}

/// Fences of several features, computed in parallel.
///
/// The result is aligned with `features`.
pub fn compute_all_bounds(
    dataset: &Dataset,
    features: &[&str],
    config: &IqrConfig,
) -> Vec<Result<Bounds>> {
    features
        .par_iter()
        .map(|feature| compute_bounds_with(dataset, feature, config))
        .collect()
}
