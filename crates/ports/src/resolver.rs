// crates/ports/src/resolver.rs
use std::sync::Arc;

use crate::surface::Surface;

/// Resolves a selector string to an ordered collection of surfaces.
///
/// Resolution is a black box to the registry. An invalid selector resolves to
/// the empty collection rather than an error; resolving the same selector
/// twice must yield surfaces with the same identities.
pub trait SurfaceResolver: Send + Sync {
    fn resolve(&self, selector: &str) -> Vec<Arc<dyn Surface>>;
}
