// src/lib.rs
//! Facade for the countable workspace.
//!
//! One-shot counting is a single pure call:
//!
//! ```
//! use countable::{CountConfig, count};
//!
//! let result = count("Hello, world!", &CountConfig::default());
//! assert_eq!(result.words.value(), 2);
//! ```
//!
//! Live counting goes through a [`Registry`] built over a platform's
//! resolver, here the in-memory panel:
//!
//! ```
//! use std::sync::Arc;
//! use countable::{CountConfig, Registry, infra::MemoryPanel};
//!
//! let panel = Arc::new(MemoryPanel::new());
//! panel.insert("draft", "two words");
//!
//! let registry = Registry::new(Arc::clone(&panel) as _);
//! registry.live(
//!     "#draft",
//!     Arc::new(|surface, result| {
//!         println!("{}: {} words", surface.id(), result.words);
//!     }),
//!     CountConfig::default(),
//! );
//! assert!(registry.enabled(&"draft".into()));
//! registry.die("#draft");
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod presentation;

pub use countable_domain::{CodePoints, CountConfig, CountResult, count, count_utf16};
pub use countable_shared_kernel::{CharCount, ParagraphCount, SurfaceId, WordCount};
pub use countable_usecase::{CountCallback, Registry};

pub use countable_infra as infra;
pub use countable_ports as ports;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
