// crates/ports/src/diagnostics.rs

/// Sink for non-fatal validation diagnostics.
///
/// The registry's operations never fail; when validation rejects an input
/// they report here and degrade to a no-op.
pub trait DiagnosticsSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Swallows every diagnostic.
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn warn(&self, _message: &str) {}
}
