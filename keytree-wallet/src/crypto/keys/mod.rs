//! Key derivation and management
//!
//! This module provides the BIP32 node type and the purpose-derivation
//! profiles consumed by it.

pub mod node;
pub mod profile;

pub use node::*;
pub use profile::*;
