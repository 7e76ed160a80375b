//! Seed derivation from a mnemonic-style phrase
//!
//! Stretches a phrase plus optional passphrase into a 512-bit seed with
//! PBKDF2-HMAC-SHA512 (2048 rounds, `"mnemonic"` salt prefix). The phrase is
//! taken as-is apart from whitespace normalization: wordlist membership and
//! checksum validity are a caller concern.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;

use crate::error::{Error, Result};

/// Number of PBKDF2 rounds for seed derivation.
const PBKDF2_ROUNDS: u32 = 2048;

/// A derivation seed.
///
/// [`derive_seed`] always produces the full 512 bits; raw seeds between 128
/// and 512 bits (e.g. published BIP32 test vectors) are accepted through
/// [`Seed::from_bytes`]. Immutable once created; all key trees for a session
/// grow from one value.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Wrap raw seed bytes. The length must be between 16 and 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 16 || bytes.len() > 64 {
            return Err(Error::InvalidSeed(format!(
                "seed must be 16..=64 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Get the raw seed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed([REDACTED])")
    }
}

/// Derive a seed from a phrase and optional passphrase.
///
/// Pure and deterministic: the same inputs always produce the same 64 bytes.
/// Fails only on an empty (or all-whitespace) phrase.
pub fn derive_seed(phrase: &str, passphrase: &str) -> Result<Seed> {
    let normalized = normalize_phrase(phrase);
    if normalized.is_empty() {
        return Err(Error::InvalidInput("empty mnemonic phrase".to_string()));
    }

    let salt = format!("mnemonic{}", passphrase);

    let mut seed = [0u8; 64];
    pbkdf2_hmac::<Sha512>(
        normalized.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );

    Ok(Seed(seed.to_vec()))
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize_phrase(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}
