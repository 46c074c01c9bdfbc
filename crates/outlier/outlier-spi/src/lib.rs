//! Outlier Detection Service Provider Interface
//!
//! Defines the dataset model, scanner contracts and error types.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{OutlierScanner, Reporter};
pub use error::{OutlierError, Result};
pub use model::{
    AnomalyRecord, AnomalyTable, Bounds, BoxSummary, Column, ColumnData, ColumnKind,
    CorrelationMatrix, Dataset, Diagnostic, DiagnosticLevel, Histogram, Value,
};
