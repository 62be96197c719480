//! In-memory ENS entry registry.
//!
//! Stores the results of ENS-style name resolution: a human-readable name,
//! the chain it belongs to, and either the resolved account address or a
//! deliberate "this name has no address" marker. Resolution itself happens
//! elsewhere; only its results live here.
//!
//! [`EnsRegistry`] is the pure owned state with the four operations
//! (`set`, `get`, `delete`, `clear`) and their validation and idempotency
//! rules. [`EnsRegistryStore`] wraps it for shared use and notifies
//! subscribers only when an operation actually changed state.

pub mod errors;
pub mod registry;
pub mod store;
pub mod types;

pub use errors::*;
pub use registry::EnsRegistry;
pub use store::EnsRegistryStore;
pub use types::*;
