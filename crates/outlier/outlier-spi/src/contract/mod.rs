//! Contract definitions for outlier detection.
//!
//! This module contains trait definitions that providers must implement.

mod outlier_scanner;
mod reporter;

pub use outlier_scanner::OutlierScanner;
pub use reporter::Reporter;
