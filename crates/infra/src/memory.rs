// crates/infra/src/memory.rs
//! In-memory surface platform.
//!
//! A panel of named text fields with synchronous change dispatch. This is the
//! reference platform for driving the registry from tests and embedded
//! callers that have no UI toolkit underneath.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use countable_ports::{ChangeHandler, SubscriptionId, Surface, SurfaceResolver};
use countable_shared_kernel::SurfaceId;
use globset::Glob;

/// One in-memory editable text field.
pub struct MemoryField {
    id: SurfaceId,
    text: Mutex<String>,
    handlers: Mutex<Vec<(SubscriptionId, ChangeHandler)>>,
    next_subscription: AtomicU64,
}

impl MemoryField {
    fn new(name: &str, initial: &str) -> Arc<Self> {
        Arc::new(Self {
            id: SurfaceId::new(name),
            text: Mutex::new(initial.to_string()),
            handlers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        })
    }

    /// Replaces the field's text and fires every installed handler, in
    /// installation order, synchronously.
    pub fn set_text(&self, text: &str) {
        *lock(&self.text) = text.to_string();
        self.emit_changed();
    }

    /// Fires the changed signal without altering the text.
    ///
    /// Handlers run on a snapshot so one of them may subscribe or unsubscribe
    /// without deadlocking the dispatch.
    pub fn emit_changed(&self) {
        let snapshot: Vec<ChangeHandler> = lock(&self.handlers)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in snapshot {
            handler();
        }
    }

    pub fn handler_count(&self) -> usize {
        lock(&self.handlers).len()
    }
}

impl Surface for MemoryField {
    fn id(&self) -> SurfaceId {
        self.id.clone()
    }

    fn text(&self) -> String {
        lock(&self.text).clone()
    }

    fn subscribe(&self, handler: ChangeHandler) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        lock(&self.handlers).push((id, handler));
        id
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        lock(&self.handlers).retain(|(id, _)| *id != subscription);
    }
}

/// Ordered collection of named fields, resolvable by selector.
///
/// Selector grammar: `#name` is an exact lookup; anything else is a glob over
/// field names (`field-*`). An invalid glob resolves to the empty collection,
/// matching the resolver contract.
#[derive(Default)]
pub struct MemoryPanel {
    fields: Mutex<Vec<Arc<MemoryField>>>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, or replaces the text of an existing one with the same
    /// name without disturbing its handlers.
    pub fn insert(&self, name: &str, initial: &str) -> Arc<MemoryField> {
        let mut fields = lock(&self.fields);
        if let Some(existing) = fields.iter().find(|f| f.id.as_str() == name) {
            let existing = Arc::clone(existing);
            drop(fields);
            existing.set_text(initial);
            return existing;
        }
        let field = MemoryField::new(name, initial);
        fields.push(Arc::clone(&field));
        field
    }

    pub fn field(&self, name: &str) -> Option<Arc<MemoryField>> {
        lock(&self.fields)
            .iter()
            .find(|f| f.id.as_str() == name)
            .map(Arc::clone)
    }

    /// Convenience for tests and demos: update a field by name, firing its
    /// change handlers. Returns false when the field does not exist.
    pub fn set_text(&self, name: &str, text: &str) -> bool {
        match self.field(name) {
            Some(field) => {
                field.set_text(text);
                true
            }
            None => false,
        }
    }
}

impl SurfaceResolver for MemoryPanel {
    fn resolve(&self, selector: &str) -> Vec<Arc<dyn Surface>> {
        let fields = lock(&self.fields);

        if let Some(name) = selector.strip_prefix('#') {
            return fields
                .iter()
                .filter(|f| f.id.as_str() == name)
                .map(|f| Arc::clone(f) as Arc<dyn Surface>)
                .collect();
        }

        let Ok(glob) = Glob::new(selector) else {
            return Vec::new();
        };
        let matcher = glob.compile_matcher();
        fields
            .iter()
            .filter(|f| matcher.is_match(f.id.as_str()))
            .map(|f| Arc::clone(f) as Arc<dyn Surface>)
            .collect()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
