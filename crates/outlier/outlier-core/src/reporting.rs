//! Diagnostic reporters.

use outlier_spi::{Diagnostic, DiagnosticLevel, OutlierError, Reporter};

/// Map a feature error to the diagnostic a lenient scan reports for it.
pub fn skip_diagnostic(error: &OutlierError) -> Option<Diagnostic> {
    match error {
        OutlierError::FeatureNotFound { feature } => Some(Diagnostic::FeatureNotFound {
            feature: feature.clone(),
        }),
        OutlierError::NonNumericFeature { feature } => Some(Diagnostic::NotNumeric {
            feature: feature.clone(),
        }),
        OutlierError::EmptyFeature { feature } => Some(Diagnostic::EmptyFeature {
            feature: feature.clone(),
        }),
        _ => None,
    }
}

/// Writes every diagnostic as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level() {
            DiagnosticLevel::Warning => {
                tracing::warn!(feature = diagnostic.feature(), "{}", diagnostic)
            }
            DiagnosticLevel::Info => {
                tracing::info!(feature = diagnostic.feature(), "{}", diagnostic)
            }
        }
    }
}

/// Keeps diagnostics in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Rendered diagnostic lines, in report order.
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
