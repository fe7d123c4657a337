//! Shared server state.

use std::sync::{Arc, Mutex, PoisonError};

use depot_ops::{FileManager, StdFileSystem, WordListNameGenerator};

/// The production manager type served over HTTP.
pub type DepotManager = FileManager<StdFileSystem, WordListNameGenerator>;

/// One manager shared for the process lifetime.
///
/// The manager's selection is unsynchronized mutable state, so concurrent
/// requests are serialized through the mutex.
#[derive(Clone)]
pub struct AppState {
    manager: Arc<Mutex<DepotManager>>,
}

impl AppState {
    /// Wrap a manager for sharing across request handlers.
    pub fn new(manager: DepotManager) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
        }
    }

    /// Run `f` with exclusive access to the manager.
    pub fn with_manager<T>(&self, f: impl FnOnce(&mut DepotManager) -> T) -> T {
        let mut guard = self
            .manager
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
