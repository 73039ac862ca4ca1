// crates/usecase/src/registry.rs
//! The live-binding registry.
//!
//! Tracks which surfaces currently have live counting enabled. Per surface the
//! registry moves between two states, unbound and bound; enabling an already
//! bound surface replaces the prior binding so a handler never fires twice for
//! one change event.
//!
//! Every operation is infallible: invalid input degrades to a no-op reported
//! through the diagnostics sink, and the operations return `&Self` so calls
//! chain without error handling.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use countable_domain::{CountConfig, CountResult, count};
use countable_ports::{ChangeHandler, DiagnosticsSink, SubscriptionId, Surface, SurfaceResolver};
use countable_shared_kernel::SurfaceId;

/// Callback receiving the surface a count was taken from and the fresh result.
pub type CountCallback = Arc<dyn Fn(&dyn Surface, &CountResult) + Send + Sync>;

struct Binding {
    surface: Arc<dyn Surface>,
    subscription: SubscriptionId,
}

/// Registry of live (surface, handler) bindings.
///
/// Constructed by the caller and passed by reference; independent registries
/// do not share state.
pub struct Registry {
    resolver: Arc<dyn SurfaceResolver>,
    diagnostics: Option<Arc<dyn DiagnosticsSink>>,
    bindings: Mutex<Vec<Binding>>,
}

impl Registry {
    pub fn new(resolver: Arc<dyn SurfaceResolver>) -> Self {
        Self {
            resolver,
            diagnostics: None,
            bindings: Mutex::new(Vec::new()),
        }
    }

    pub fn with_diagnostics(
        resolver: Arc<dyn SurfaceResolver>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            resolver,
            diagnostics: Some(diagnostics),
            bindings: Mutex::new(Vec::new()),
        }
    }

    /// Enables live counting on every surface `selector` resolves to.
    ///
    /// Per surface: any prior binding is replaced, a change handler is
    /// installed, and the handler fires once synchronously so the initial
    /// count reaches `callback` before any user interaction.
    pub fn live(&self, selector: &str, callback: CountCallback, config: CountConfig) -> &Self {
        for surface in self.resolve_checked(selector, "live") {
            self.unbind(&surface.id());

            let handler = make_handler(&surface, Arc::clone(&callback), config);
            let subscription = surface.subscribe(Arc::clone(&handler));
            handler();

            self.lock_bindings().push(Binding {
                surface,
                subscription,
            });
        }
        self
    }

    /// Disables live counting on every surface `selector` resolves to.
    ///
    /// Resolved surfaces without a binding are silently skipped. Events
    /// already in flight complete; only future events are affected.
    pub fn die(&self, selector: &str) -> &Self {
        for surface in self.resolve_checked(selector, "die") {
            self.unbind(&surface.id());
        }
        self
    }

    /// Counts each resolved surface's current text exactly once and invokes
    /// `callback` synchronously. Installs nothing; the binding list is
    /// untouched.
    pub fn once(&self, selector: &str, callback: CountCallback, config: CountConfig) -> &Self {
        for surface in self.resolve_checked(selector, "once") {
            let result = count(&surface.text(), &config);
            callback(surface.as_ref(), &result);
        }
        self
    }

    /// Whether a live binding currently exists for `id`.
    pub fn enabled(&self, id: &SurfaceId) -> bool {
        self.lock_bindings().iter().any(|b| b.surface.id() == *id)
    }

    fn resolve_checked(&self, selector: &str, operation: &str) -> Vec<Arc<dyn Surface>> {
        if selector.trim().is_empty() {
            self.warn(&format!("{operation}: empty selector"));
            return Vec::new();
        }
        let surfaces = self.resolver.resolve(selector);
        if surfaces.is_empty() {
            self.warn(&format!(
                "{operation}: selector '{selector}' matched no surfaces"
            ));
        }
        surfaces
    }

    /// Removes the binding for `id`, detaching its handler. No-op when
    /// unbound. The lock is released before `unsubscribe` so a platform that
    /// dispatches synchronously cannot re-enter a held lock.
    fn unbind(&self, id: &SurfaceId) {
        let removed = {
            let mut bindings = self.lock_bindings();
            bindings
                .iter()
                .position(|b| b.surface.id() == *id)
                .map(|index| bindings.remove(index))
        };
        if let Some(binding) = removed {
            binding.surface.unsubscribe(binding.subscription);
        }
    }

    fn lock_bindings(&self) -> std::sync::MutexGuard<'_, Vec<Binding>> {
        self.bindings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn warn(&self, message: &str) {
        match &self.diagnostics {
            Some(sink) => sink.warn(message),
            None => log::warn!("{message}"),
        }
    }
}

/// Builds the change handler for one surface.
///
/// The handler holds the surface weakly: a surface discarded by the platform
/// while still bound must not be kept alive by its own handler.
fn make_handler(
    surface: &Arc<dyn Surface>,
    callback: CountCallback,
    config: CountConfig,
) -> ChangeHandler {
    let weak: Weak<dyn Surface> = Arc::downgrade(surface);
    Arc::new(move || {
        if let Some(surface) = weak.upgrade() {
            let result = count(&surface.text(), &config);
            callback(surface.as_ref(), &result);
        }
    })
}
