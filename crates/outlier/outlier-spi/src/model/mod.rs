//! Data models for outlier detection.
//!
//! This module contains data structures used throughout the outlier detection system.

mod anomaly_table;
mod bounds;
mod column;
mod dataset;
mod diagnostic;
mod summary;

pub use anomaly_table::{AnomalyRecord, AnomalyTable};
pub use bounds::Bounds;
pub use column::{Column, ColumnData, ColumnKind, Value};
pub use dataset::Dataset;
pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use summary::{BoxSummary, CorrelationMatrix, Histogram};
