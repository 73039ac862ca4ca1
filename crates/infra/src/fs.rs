// crates/infra/src/fs.rs
//! File-backed surfaces.
//!
//! Treats files under a root directory as text surfaces: the selector is a
//! literal path or a glob over the tree, and the watch loop in [`crate::watch`]
//! delivers change events. Resolution is cached per path so the registry sees
//! a stable surface identity across repeated `resolve` calls.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use countable_ports::{ChangeHandler, SubscriptionId, Surface, SurfaceResolver};
use countable_shared_kernel::{InfraResult, InfrastructureError, SurfaceId};
use globset::Glob;
use ignore::WalkBuilder;

/// One file presented as an editable text surface.
pub struct FileSurface {
    id: SurfaceId,
    path: PathBuf,
    handlers: Mutex<Vec<(SubscriptionId, ChangeHandler)>>,
    next_subscription: AtomicU64,
}

impl FileSurface {
    fn new(path: PathBuf) -> Arc<Self> {
        Arc::new(Self {
            id: SurfaceId::new(path.to_string_lossy()),
            path,
            handlers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> InfraResult<String> {
        let bytes = fs::read(&self.path).map_err(|source| InfrastructureError::SurfaceRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Fires the changed signal; called by the watch loop.
    pub fn emit_changed(&self) {
        let snapshot: Vec<ChangeHandler> = lock(&self.handlers)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in snapshot {
            handler();
        }
    }
}

impl Surface for FileSurface {
    fn id(&self) -> SurfaceId {
        self.id.clone()
    }

    /// Reads the file's current content, lossily decoded. A read failure is
    /// reported through `log` and yields empty text, keeping the counter
    /// total.
    fn text(&self) -> String {
        match self.read_text() {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{err}");
                String::new()
            }
        }
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

/// Resolves selectors to file surfaces under one root directory.
///
/// The root is canonicalized once at construction and the surface cache is
/// keyed on root-relative paths, so watcher events route to the same entry
/// whether the file still exists or not.
pub struct FileResolver {
    root: PathBuf,
    cache: Mutex<BTreeMap<PathBuf, Arc<FileSurface>>>,
}

impl FileResolver {
    pub fn new(root: impl Into<PathBuf>) -> Arc<Self> {
        let root = root.into();
        let root = root.canonicalize().unwrap_or(root);
        Arc::new(Self {
            root,
            cache: Mutex::new(BTreeMap::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The cached surface for `path`, if any selector resolved it before.
    /// Used by the watch loop to route change events.
    pub fn cached(&self, path: &Path) -> Option<Arc<FileSurface>> {
        let key = self.relative_key(path)?;
        lock(&self.cache).get(&key).map(Arc::clone)
    }

    fn surface_for(&self, path: PathBuf) -> Arc<FileSurface> {
        let key = path
            .strip_prefix(&self.root)
            .map_or_else(|_| path.clone(), Path::to_path_buf);
        let mut cache = lock(&self.cache);
        if let Some(surface) = cache.get(&key) {
            return Arc::clone(surface);
        }
        let surface = FileSurface::new(path);
        cache.insert(key, Arc::clone(&surface));
        surface
    }

    /// Cache key for an incoming path. Strips the canonical root prefix;
    /// paths spelled through a different root alias are canonicalized first,
    /// which only works while the file still exists.
    fn relative_key(&self, path: &Path) -> Option<PathBuf> {
        if path.is_relative() {
            return Some(path.to_path_buf());
        }
        if let Ok(relative) = path.strip_prefix(&self.root) {
            return Some(relative.to_path_buf());
        }
        let resolved = path.canonicalize().ok()?;
        resolved
            .strip_prefix(&self.root)
            .ok()
            .map(Path::to_path_buf)
    }

    fn matched_paths(&self, selector: &str) -> Vec<PathBuf> {
        let literal = self.root.join(selector);
        if literal.is_file() {
            return vec![literal];
        }

        let Ok(glob) = Glob::new(selector) else {
            return Vec::new();
        };
        let matcher = glob.compile_matcher();

        let mut paths = Vec::new();
        for entry in WalkBuilder::new(&self.root).build().flatten() {
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path());
            if matcher.is_match(relative) {
                paths.push(entry.path().to_path_buf());
            }
        }
        paths.sort();
        paths
    }
}

impl SurfaceResolver for FileResolver {
    fn resolve(&self, selector: &str) -> Vec<Arc<dyn Surface>> {
        self.matched_paths(selector)
            .into_iter()
            .map(|path| self.surface_for(path) as Arc<dyn Surface>)
            .collect()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("create file");
        file.write_all(content.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn literal_path_resolves_one_surface() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "note.txt", "hello world");

        let resolver = FileResolver::new(dir.path());
        let resolved = resolver.resolve("note.txt");
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].text(), "hello world");
    }

    #[test]
    fn glob_resolves_sorted_matches() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "b.md", "");
        write_file(dir.path(), "a.md", "");
        write_file(dir.path(), "c.txt", "");

        let resolver = FileResolver::new(dir.path());
        let resolved = resolver.resolve("*.md");
        assert_eq!(resolved.len(), 2);
        let ids: Vec<String> = resolved.iter().map(|s| s.id().to_string()).collect();
        assert!(ids[0].ends_with("a.md") && ids[1].ends_with("b.md"));
    }

    #[test]
    fn repeated_resolution_keeps_identity() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(dir.path(), "note.txt", "x");

        let resolver = FileResolver::new(dir.path());
        let first = resolver.resolve("note.txt");
        let second = resolver.resolve("*.txt");
        assert_eq!(first[0].id(), second[0].id());
        assert!(resolver.cached(&path).is_some());
    }

    #[test]
    fn unknown_selector_resolves_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let resolver = FileResolver::new(dir.path());
        assert!(resolver.resolve("missing.txt").is_empty());
        assert!(resolver.resolve("[bad-glob").is_empty());
    }

    #[test]
    fn vanished_file_yields_empty_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(dir.path(), "gone.txt", "soon deleted");

        let resolver = FileResolver::new(dir.path());
        let resolved = resolver.resolve("gone.txt");
        fs::remove_file(&path).expect("remove");
        assert_eq!(resolved[0].text(), "");
    }

    #[cfg(unix)]
    #[test]
    fn cached_routes_deleted_files_under_symlinked_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let real = dir.path().join("real");
        fs::create_dir(&real).expect("create dir");
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).expect("symlink");
        let path = write_file(&real, "note.txt", "soon deleted");

        let resolver = FileResolver::new(&link);
        resolver.resolve("note.txt");

        // Watcher events carry the resolved path, not the symlinked spelling,
        // and a removed file can no longer be canonicalized.
        let event_path = path.canonicalize().expect("canonicalize");
        fs::remove_file(&path).expect("remove");
        assert!(resolver.cached(&event_path).is_some());
    }

    #[test]
    fn emit_changed_fires_subscribed_handlers() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "note.txt", "x");

        let resolver = FileResolver::new(dir.path());
        resolver.resolve("note.txt");
        let surface = resolver
            .cached(&dir.path().join("note.txt"))
            .expect("cached");

        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);
        surface.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));
        surface.emit_changed();
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }
}
