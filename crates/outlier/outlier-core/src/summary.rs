//! Chart-data summaries: box statistics, histograms, category counts and
//! correlation matrices. Numbers only; rendering is left to the caller.

use std::collections::HashMap;

use outlier_api::HistogramConfig;
use outlier_spi::{
    BoxSummary, ColumnData, CorrelationMatrix, Dataset, Histogram, OutlierError, Result,
};

use crate::quantile::{quantile_sorted, sorted};

/// Observed values of a numeric feature, failing like the bound calculator.
fn observed(dataset: &Dataset, feature: &str) -> Result<Vec<f64>> {
    dataset.numeric_column(feature)?;
    let values = dataset
        .column(feature)
        .map(|c| c.observed())
        .unwrap_or_default();
    if values.is_empty() {
        return Err(OutlierError::EmptyFeature {
            feature: feature.to_string(),
        });
    }
    Ok(values)
}

/// Box-plot statistics of a numeric feature.
pub fn box_summary(dataset: &Dataset, feature: &str) -> Result<BoxSummary> {
    let values = sorted(&observed(dataset, feature)?);
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };
    let q = |p| quantile_sorted(&values, p).unwrap_or(f64::NAN);

    Ok(BoxSummary {
        feature: feature.to_string(),
        count: n,
        min: values[0],
        q1: q(0.25),
        median: q(0.5),
        q3: q(0.75),
        max: values[n - 1],
        mean,
        std_dev,
    })
}

/// Equal-width histogram of a numeric feature over `[min, max]`.
///
/// The maximum falls into the last bin. A constant feature yields a single
/// bin holding every value.
pub fn histogram(dataset: &Dataset, feature: &str, config: &HistogramConfig) -> Result<Histogram> {
    config.validate()?;
    let values = observed(dataset, feature)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return Ok(Histogram {
            feature: feature.to_string(),
            edges: vec![min, max],
            counts: vec![values.len()],
        });
    }

    let bins = config.bins;
    let width = (max - min) / bins as f64;
    let edges = (0..=bins)
        .map(|i| if i == bins { max } else { min + width * i as f64 })
        .collect();

    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram {
        feature: feature.to_string(),
        edges,
        counts,
    })
}

/// Category frequencies of any feature, most frequent first.
///
/// Ties keep first-appearance order. Missing cells are not counted.
pub fn value_counts(dataset: &Dataset, feature: &str) -> Result<Vec<(String, usize)>> {
    let column = dataset
        .column(feature)
        .ok_or_else(|| OutlierError::FeatureNotFound {
            feature: feature.to_string(),
        })?;

    let labels: Vec<String> = match &column.data {
        ColumnData::Categorical(values) => values.iter().flatten().cloned().collect(),
        ColumnData::Numeric(_) => (0..column.len())
            .map(|row| column.value(row))
            .filter(|v| !v.is_missing())
            .map(|v| v.to_string())
            .collect(),
    };

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts)
}

fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }
    let (sx, sy) = pairs
        .iter()
        .fold((0.0_f64, 0.0_f64), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (mx, my) = (sx / n as f64, sy / n as f64);

    let mut cov = 0.0_f64;
    let mut vx = 0.0_f64;
    let mut vy = 0.0_f64;
    for (x, y) in pairs {
        cov += (x - mx) * (y - my);
        vx += (x - mx).powi(2);
        vy += (y - my).powi(2);
    }
    if vx == 0.0 || vy == 0.0 {
        return f64::NAN;
    }
    (cov / (vx.sqrt() * vy.sqrt())).clamp(-1.0, 1.0)
}

/// Pearson correlation over pairwise-complete rows.
///
/// Undefined entries (fewer than two complete pairs or zero variance) are
/// NaN; the diagonal is exactly 1.0 wherever it is defined.
pub fn correlation_matrix<S: AsRef<str>>(dataset: &Dataset, features: &[S]) -> Result<CorrelationMatrix> {
    let columns = features
        .iter()
        .map(|f| dataset.numeric_column(f.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let k = columns.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        for j in i..k {
            let pairs: Vec<(f64, f64)> = columns[i]
                .iter()
                .zip(columns[j].iter())
                .filter_map(|(x, y)| match (x, y) {
                    (Some(x), Some(y)) if !x.is_nan() && !y.is_nan() => Some((*x, *y)),
                    _ => None,
                })
                .collect();
            let mut r = pearson(&pairs);
            if i == j && !r.is_nan() {
                r = 1.0;
            }
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        features: features.iter().map(|f| f.as_ref().to_string()).collect(),
        values,
    })
}
