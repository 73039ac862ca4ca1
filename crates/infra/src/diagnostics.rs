// crates/infra/src/diagnostics.rs
use countable_ports::DiagnosticsSink;

/// Forwards registry diagnostics to the `log` facade.
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
