//! Outlier Detection API
//!
//! Configuration types and builders for outlier detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use outlier_spi::{
    AnomalyRecord, AnomalyTable, Bounds, BoxSummary, Column, ColumnData, ColumnKind,
    CorrelationMatrix, Dataset, Diagnostic, DiagnosticLevel, Histogram, OutlierError, Result,
    Value,
};

// ============================================================================
// Fence Configuration
// ============================================================================

/// IQR fence configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrConfig {
    /// IQR multiplier for the fences (default: 1.5).
    pub multiplier: f64,
}

impl Default for IqrConfig {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl IqrConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Reject non-finite or negative multipliers.
    pub fn validate(&self) -> Result<()> {
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(OutlierError::InvalidParameter {
                name: "multiplier".to_string(),
                reason: format!("must be a finite non-negative number, got {}", self.multiplier),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Scan Configuration
// ============================================================================

/// How a scan treats features that are absent, categorical or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Abort with the feature's error.
    Strict,
    /// Report a diagnostic and skip the feature.
    Lenient,
}

/// Scanner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub iqr: IqrConfig,
    pub mode: ScanMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::detection()
    }
}

impl ScanConfig {
    pub fn new(iqr: IqrConfig, mode: ScanMode) -> Self {
        Self { iqr, mode }
    }

    /// Lenient scan with a 1.5 multiplier, the detection default.
    pub fn detection() -> Self {
        Self::new(IqrConfig::default(), ScanMode::Lenient)
    }

    /// Strict scan with a 1.5 multiplier, the flagging default.
    pub fn flagging() -> Self {
        Self::new(IqrConfig::default(), ScanMode::Strict)
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ScanMode::Strict
    }
}

/// Builder for ScanConfig.
#[derive(Debug, Default)]
pub struct ScanConfigBuilder {
    multiplier: Option<f64>,
    mode: Option<ScanMode>,
}

impl ScanConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IQR multiplier.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Set the scan mode.
    pub fn mode(mut self, mode: ScanMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn strict(self) -> Self {
        self.mode(ScanMode::Strict)
    }

    pub fn lenient(self) -> Self {
        self.mode(ScanMode::Lenient)
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ScanConfig> {
        let iqr = IqrConfig::new(self.multiplier.unwrap_or(1.5));
        iqr.validate()?;
        Ok(ScanConfig::new(iqr, self.mode.unwrap_or(ScanMode::Lenient)))
    }
}

// ============================================================================
// Summary Configuration
// ============================================================================

/// Histogram binning configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Number of equal-width bins (default: 40).
    pub bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { bins: 40 }
    }
}

impl HistogramConfig {
    pub fn new(bins: usize) -> Self {
        Self { bins }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(OutlierError::InvalidParameter {
                name: "bins".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
