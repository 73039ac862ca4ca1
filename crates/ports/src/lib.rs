//! # Ports
//!
//! Interface definitions for the host platform.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`surface`]: editable text elements with a change-notification signal
//! - [`resolver`]: selector → surface-collection resolution
//! - [`diagnostics`]: the warning sink for validation failures
//!
//! These ports keep the counting domain and the binding registry independent
//! of any concrete UI toolkit, file system, or logging backend.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod resolver;
pub mod surface;

pub use diagnostics::{DiagnosticsSink, NullSink};
pub use resolver::SurfaceResolver;
pub use surface::{ChangeHandler, SubscriptionId, Surface};
