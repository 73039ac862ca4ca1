// crates/infra/src/watch.rs
use std::sync::mpsc::channel;
use std::time::Duration;

use countable_shared_kernel::{InfrastructureError, Result};
use notify::{RecursiveMode, Watcher, event::EventKind};

use crate::fs::FileResolver;

/// Watches the resolver's root and fires the changed signal on every cached
/// surface a file event touches.
///
/// Blocks until the watcher channel disconnects. Events are debounced the
/// simple way: sleep one interval after the first event, then drain whatever
/// queued up behind it.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the root cannot be
/// watched.
pub fn watch_loop(resolver: &FileResolver, debounce: Duration) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => log::warn!("watch error: {e}"),
    })
    .map_err(|err| InfrastructureError::Watch {
        details: err.to_string(),
    })?;

    let root = resolver.root();
    if root.exists() {
        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(|err| InfrastructureError::Watch {
                details: err.to_string(),
            })?;
    }

    while let Ok(event) = rx.recv() {
        std::thread::sleep(debounce);

        let mut paths = if is_relevant(event.kind) {
            event.paths
        } else {
            Vec::new()
        };
        // Drain everything that arrived during the debounce window.
        while let Ok(queued) = rx.try_recv() {
            if is_relevant(queued.kind) {
                paths.extend(queued.paths);
            }
        }
        paths.sort();
        paths.dedup();

        for path in paths {
            if let Some(surface) = resolver.cached(&path) {
                surface.emit_changed();
            }
        }
    }

    Ok(())
}

const fn is_relevant(kind: EventKind) -> bool {
    matches!(
        kind,
        EventKind::Any
            | EventKind::Create(_)
            | EventKind::Modify(_)
            | EventKind::Remove(_)
            | EventKind::Other
    )
}
