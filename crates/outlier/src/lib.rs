//! # outlier
//!
//! IQR outlier detection for tabular datasets.
//!
//! ```rust
//! use outlier::{detect_anomalies, flag_anomalies, Column, Dataset};
//!
//! let ds = Dataset::new(vec![Column::from_f64("v", [1.0, 2.0, 3.0, 4.0, 100.0])]).unwrap();
//!
//! let table = detect_anomalies(&ds, &["v"]);
//! assert_eq!(table.row_indices(), vec![4]);
//!
//! let mask = flag_anomalies(&ds, &["v"]).unwrap();
//! assert_eq!(mask, vec![false, false, false, false, true]);
//! ```

pub use outlier_facade::*;
