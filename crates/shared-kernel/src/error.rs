// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// The counter and the binding registry never surface these: their operations
/// degrade to warn-and-skip instead (the caller-facing API is infallible).
/// Infrastructure adapters and the CLI do.
#[derive(Debug, Error)]
pub enum CountableError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CountableError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, CountableError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read surface '{path}': {source}")]
    SurfaceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File watcher failed: {details}")]
    Watch { details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for CountableError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CountableError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CountableError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CountableError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
