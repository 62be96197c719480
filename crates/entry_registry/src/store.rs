//! Shared state container around the entry registry.
//!
//! [`EnsRegistryStore`] owns the registry behind a `RwLock`, making each
//! `set`/`delete`/`clear` call one atomic mutation unit, and notifies
//! subscribers with a fresh state snapshot after every operation that
//! actually changed state. No-op and failed operations never notify, so a
//! redundant resolution result cannot fan out as a spurious state-change
//! event.

use crate::errors::Result;
use crate::registry::EnsRegistry;
use crate::types::EnsEntry;
use parking_lot::RwLock;
use std::sync::Arc;

type Listener = Box<dyn Fn(&EnsRegistry) + Send + Sync>;

/// Shared, change-notifying wrapper around [`EnsRegistry`].
///
/// Clones share the same underlying state, like handles. The snapshot passed
/// to listeners is taken under the write lock, so it is exactly the state
/// the triggering mutation produced; listeners run after the lock is
/// released.
pub struct EnsRegistryStore {
    registry: Arc<RwLock<EnsRegistry>>,
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl EnsRegistryStore {
    /// Create a store holding an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(EnsRegistry::new())),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a listener invoked with the new state after each mutation.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&EnsRegistry) + Send + Sync + 'static,
    {
        self.listeners.write().push(Box::new(listener));
    }

    /// Look up the entry for `(chain_id, name)`, cloned out of the state.
    pub fn get(&self, chain_id: &str, name: &str) -> Option<EnsEntry> {
        self.registry.read().get(chain_id, name).cloned()
    }

    /// Record a resolution result. See [`EnsRegistry::set`].
    pub fn set(&self, chain_id: &str, name: &str, address: Option<&str>) -> Result<bool> {
        let snapshot = {
            let mut registry = self.registry.write();
            let changed = registry.set(chain_id, name, address)?;
            changed.then(|| registry.clone())
        };

        match snapshot {
            Some(state) => {
                tracing::debug!("stored ENS entry for {name} on chain {chain_id}");
                self.notify(&state);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the entry for `(chain_id, name)`. See [`EnsRegistry::delete`].
    pub fn delete(&self, chain_id: &str, name: &str) -> bool {
        let snapshot = {
            let mut registry = self.registry.write();
            registry.delete(chain_id, name).then(|| registry.clone())
        };

        match snapshot {
            Some(state) => {
                tracing::debug!("removed ENS entry for {name} on chain {chain_id}");
                self.notify(&state);
                true
            }
            None => false,
        }
    }

    /// Drop every stored entry. Notifies only when the registry was
    /// non-empty; clearing an empty registry is a no-op.
    pub fn clear(&self) {
        let snapshot = {
            let mut registry = self.registry.write();
            if registry.is_empty() {
                None
            } else {
                registry.clear();
                Some(registry.clone())
            }
        };

        if let Some(state) = snapshot {
            tracing::debug!("cleared all ENS entries");
            self.notify(&state);
        }
    }

    /// Clone the current registry state for display or persistence.
    pub fn snapshot(&self) -> EnsRegistry {
        self.registry.read().clone()
    }

    /// Replace the state wholesale from a persisted snapshot.
    ///
    /// Restoring is a load, not a mutation originated here, so listeners
    /// are not notified.
    pub fn restore(&self, state: EnsRegistry) {
        *self.registry.write() = state;
    }

    fn notify(&self, state: &EnsRegistry) {
        let listeners = self.listeners.read();
        for listener in listeners.iter() {
            listener(state);
        }
    }
}

impl Clone for EnsRegistryStore {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl Default for EnsRegistryStore {
    fn default() -> Self {
        Self::new()
    }
}
