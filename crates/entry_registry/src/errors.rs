//! Error types for the ENS entry store.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Raised by `set` when its inputs fail validation. Carries the three
    /// offending values for diagnostics; the registry is never partially
    /// updated when this is returned.
    #[error("invalid ENS entry: chainId={chain_id:?} name={name:?} address={address:?}")]
    InvalidEntry {
        chain_id: String,
        name: String,
        address: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
