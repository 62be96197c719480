//! Value types for ENS entry storage.
//!
//! This crate defines the three validated inputs of the entry registry:
//! chain identifiers (`"1"`, `"137"`), human-readable names (`foo.eth`)
//! in their normalized storage form, and hex account addresses rendered
//! in EIP-55 checksum casing.

pub mod address;
pub mod chain;
pub mod name;

pub use address::*;
pub use chain::*;
pub use name::*;
