//! The key presence line is the only output the bootstrap writes itself.

use geotrace_config::KeyDiagnostic;
use tracing::info;

/// Destination for the start-up key diagnostic.
pub trait DiagnosticSink {
    /// Write one diagnostic line.
    fn emit(&mut self, diagnostic: &KeyDiagnostic);
}

/// Writes the diagnostic through `tracing`; used by native hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: &KeyDiagnostic) {
        info!(
            present = diagnostic.is_present(),
            maps_key = %diagnostic,
            "Google Maps key loaded"
        );
    }
}
