//! Keytree Core - Hierarchical deterministic key derivation SDK
//!
//! This library provides core functionality for deriving BIP32 key trees from
//! a seed phrase and encoding the results into the standard exchangeable
//! formats: extended private/public keys and the four Bitcoin address
//! families (legacy P2PKH, nested SegWit, native SegWit, Taproot).

pub mod error;
pub mod crypto;

// Re-export commonly used types for convenience
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
