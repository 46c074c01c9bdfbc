//! Diagnostic sink trait definition.

use crate::model::Diagnostic;

/// Receives one diagnostic per scanned feature.
///
/// Detection scans never print; callers decide where the lines go.
pub trait Reporter {
    /// Accept a diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}
