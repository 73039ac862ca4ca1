// crates/shared-kernel/src/value_objects/surface_id.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an editable text surface.
///
/// The binding registry keys its bindings on this, not on pointer identity,
/// so resolving the same selector twice refers to the same binding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SurfaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
