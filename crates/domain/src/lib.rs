// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod codepoints;
pub mod config;
pub mod counter;
pub mod model;

pub use codepoints::{CodePoints, count_utf16, decode_utf16_lossy};
pub use config::CountConfig;
pub use counter::count;
pub use model::CountResult;
