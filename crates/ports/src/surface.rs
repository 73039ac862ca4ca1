// crates/ports/src/surface.rs
use std::sync::Arc;

use countable_shared_kernel::SurfaceId;

/// Handler installed on a surface's "value changed" signal.
///
/// Handlers are `Fn` so the platform may fire the same handler for every
/// change event; they are shared (`Arc`) so a platform can clone them into
/// whatever dispatch structure it keeps.
pub type ChangeHandler = Arc<dyn Fn() + Send + Sync>;

/// Token identifying one installed change handler, scoped to the surface that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// An editable text surface.
///
/// The concrete change event (DOM `input`, file modification, test stub) is
/// the platform's concern; the registry only needs a readable current value
/// and attach/detach for one abstract changed signal.
pub trait Surface: Send + Sync {
    /// Stable identity; bindings are keyed on this.
    fn id(&self) -> SurfaceId;

    /// The surface's current text value.
    fn text(&self) -> String;

    /// Installs `handler` on the changed signal. Handlers fire synchronously
    /// and in installation order.
    fn subscribe(&self, handler: ChangeHandler) -> SubscriptionId;

    /// Detaches a previously installed handler. Unknown ids are ignored.
    fn unsubscribe(&self, subscription: SubscriptionId);
}
