// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod registry;

pub use registry::{CountCallback, Registry};
