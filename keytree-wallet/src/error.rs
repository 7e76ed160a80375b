//! Error types for the keytree-wallet library

use thiserror::Error;

/// Custom error type for keytree-wallet operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Degenerate child derivation output (IL out of range or zero child
    /// key). Callers that want BIP32 semantics retry with the next index.
    #[error("Invalid child key: {0}")]
    InvalidChild(String),

    #[error("Cannot derive a hardened child from a public-only node")]
    HardenedFromPublic,

    #[error("Node holds no private key material")]
    NoPrivateKey,

    /// Defensive error kind for address encoding. [`ScriptType`] is a
    /// closed enum and dispatch over it is exhaustive, so this is not
    /// produced by any current call path.
    ///
    /// [`ScriptType`]: crate::crypto::keys::ScriptType
    #[error("Unsupported script type: {0}")]
    UnsupportedScriptType(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for keytree-wallet operations
pub type Result<T> = std::result::Result<T, Error>;
