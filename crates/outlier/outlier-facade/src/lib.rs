//! Outlier Detection Facade
//!
//! Unified re-exports for the outlier detection module.
//!
//! This facade provides a single entry point to all outlier detection functionality:
//! - `Dataset`, `Bounds`, `AnomalyTable`, the `OutlierScanner` and `Reporter` traits from SPI
//! - Configuration types from API
//! - `compute_bounds`, `detect_anomalies`, `flag_anomalies`, `IqrScanner`, loaders
//!   and summaries from Core

// Re-export everything from SPI
pub use outlier_spi::*;

// Re-export everything from API
pub use outlier_api::*;

// Re-export everything from Core
pub use outlier_core::*;
