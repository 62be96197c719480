//! The ENS entry store.
//!
//! Owns the two-level mapping from chain id to normalized name to entry and
//! implements the four operations with their validation and idempotency
//! rules. This is pure owned state: mutations go through `&mut self`, there
//! is no locking, and the whole struct is plain serializable data. Shared
//! access and change notification live in [`crate::store`].

use crate::errors::{RegistryError, Result};
use crate::types::{EnsEntry, EnsEntryMap};
use ens_types::{Address, ChainId, EnsName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// In-memory registry of ENS resolution results.
///
/// Invariants:
/// - Inner-map keys are always normalized names; raw names are never keys.
/// - A chain id key exists only while at least one entry exists for it;
///   an inner map is removed the moment it becomes empty.
/// - Each entry's `chain_id`/`ens_name` fields equal the keys locating it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsRegistry {
    /// Chain id → normalized name → entry.
    ens_entries: EnsEntryMap,
}

impl EnsRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            ens_entries: HashMap::new(),
        }
    }

    /// Look up the stored entry for `(chain_id, name)`.
    ///
    /// Returns `None` when the chain id or name is invalid, the chain has no
    /// entries, or the name was never stored. Invalid input and absence are
    /// deliberately indistinguishable on the read path.
    pub fn get(&self, chain_id: &str, name: &str) -> Option<&EnsEntry> {
        let chain = ChainId::new(chain_id).ok()?;
        let name = EnsName::normalize(name).ok()?;
        self.ens_entries.get(&chain)?.get(&name)
    }

    /// Record a resolution result for `(chain_id, name)`.
    ///
    /// `address` is `None` when resolution was attempted and found no
    /// address; that negative result is stored like any other entry. The
    /// address is canonicalized before storage and comparison.
    ///
    /// Returns whether the call actually changed state: writing a value
    /// identical to the stored one is a no-op and returns `Ok(false)`, so
    /// redundant resolution results produce no spurious change signals.
    ///
    /// Fails with [`RegistryError::InvalidEntry`], without touching state,
    /// when the chain id does not parse, the address is not valid hex, or
    /// the name does not normalize.
    pub fn set(&mut self, chain_id: &str, name: &str, address: Option<&str>) -> Result<bool> {
        let invalid = || RegistryError::InvalidEntry {
            chain_id: chain_id.to_string(),
            name: name.to_string(),
            address: address.map(str::to_string),
        };

        let chain = ChainId::new(chain_id).map_err(|_| invalid())?;
        let address = match address {
            Some(raw) => Some(Address::parse(raw).map_err(|_| invalid())?),
            None => None,
        };
        let ens_name = EnsName::normalize(name).map_err(|_| invalid())?;

        if let Some(existing) = self
            .ens_entries
            .get(&chain)
            .and_then(|entries| entries.get(&ens_name))
        {
            if existing.address == address {
                return Ok(false);
            }
        }

        let entry = EnsEntry {
            chain_id: chain.clone(),
            ens_name: ens_name.clone(),
            address,
        };
        self.ens_entries
            .entry(chain)
            .or_default()
            .insert(ens_name, entry);
        Ok(true)
    }

    /// Remove the entry for `(chain_id, name)`.
    ///
    /// Returns whether an entry was removed. Invalid input and absence both
    /// yield `false` with no mutation. Removing the last entry for a chain
    /// removes the chain key entirely.
    pub fn delete(&mut self, chain_id: &str, name: &str) -> bool {
        let Ok(chain) = ChainId::new(chain_id) else {
            return false;
        };
        let Ok(name) = EnsName::normalize(name) else {
            return false;
        };
        let Some(entries) = self.ens_entries.get_mut(&chain) else {
            return false;
        };
        if entries.remove(&name).is_none() {
            return false;
        }
        if entries.is_empty() {
            self.ens_entries.remove(&chain);
        }
        true
    }

    /// Drop every stored entry.
    pub fn clear(&mut self) {
        self.ens_entries.clear();
    }

    /// Read access to the full two-level map, for display and export.
    pub fn entries(&self) -> &EnsEntryMap {
        &self.ens_entries
    }

    /// Entries stored for one chain, if any exist.
    pub fn chain_entries(&self, chain_id: &str) -> Option<&HashMap<EnsName, EnsEntry>> {
        let chain = ChainId::new(chain_id).ok()?;
        self.ens_entries.get(&chain)
    }

    /// Total number of stored entries across all chains.
    pub fn len(&self) -> usize {
        self.ens_entries.values().map(HashMap::len).sum()
    }

    /// Whether the registry holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.ens_entries.is_empty()
    }
}
