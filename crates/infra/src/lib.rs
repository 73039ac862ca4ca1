// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
pub mod fs;
pub mod memory;
pub mod watch;

pub use diagnostics::LogSink;
pub use fs::{FileResolver, FileSurface};
pub use memory::{MemoryField, MemoryPanel};
pub use watch::watch_loop;
