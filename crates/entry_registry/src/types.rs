//! Stored value types for the ENS entry registry.

use ens_types::{Address, ChainId, EnsName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single stored resolution result.
///
/// `chain_id` and `ens_name` mirror the map keys the entry is stored under
/// (denormalized for convenient access); they never drift from those keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsEntry {
    /// Chain the name belongs to.
    pub chain_id: ChainId,
    /// Normalized name the entry is stored under.
    pub ens_name: EnsName,
    /// Resolved address in checksum form, or `None` when resolution was
    /// attempted and the name has no address.
    pub address: Option<Address>,
}

/// Two-level registry mapping: chain id → normalized name → entry.
pub type EnsEntryMap = HashMap<ChainId, HashMap<EnsName, EnsEntry>>;
