//! Cryptographic primitives and operations
//!
//! This module provides functionality for seed derivation, BIP32 key
//! derivation, and address encoding.

pub mod address;
pub mod encoding;
pub mod hash;
pub mod keys;
pub mod seed;

pub use address::*;
pub use keys::*;
pub use seed::*;
