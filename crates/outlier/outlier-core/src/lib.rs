//! Outlier Detection Core
//!
//! Implementations for fence computation, anomaly scanning, reporting,
//! dataset loading and chart-data summaries.

mod bounds;
mod loader;
mod reporting;
mod scanner;
mod summary;

pub mod quantile;

pub use bounds::*;
pub use loader::*;
pub use reporting::*;
pub use scanner::*;
pub use summary::*;
