// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod surface_id;

pub use counts::{CharCount, ParagraphCount, WordCount};
pub use surface_id::SurfaceId;
