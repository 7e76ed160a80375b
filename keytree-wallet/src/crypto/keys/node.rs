//! BIP32 hierarchical deterministic key tree nodes

use hmac::{Hmac, Mac};
use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};
use sha2::Sha512;

use crate::crypto::encoding::base58check_encode;
use crate::crypto::hash::hash160;
use crate::crypto::keys::profile::PurposeProfile;
use crate::crypto::seed::Seed;
use crate::error::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// Hardened index offset (2^31). Indices at or above this value derive
/// hardened children.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Key material held by a node: a private scalar or a compressed curve point.
#[derive(Clone, PartialEq, Eq)]
enum KeyMaterial {
    Private(SecretKey),
    Public(PublicKey),
}

/// A node in a BIP32 key tree.
///
/// Immutable value object: derivation produces new nodes and never mutates
/// the parent. A private node can produce its public counterpart via
/// [`HdNode::neuter`]; a public-only node can only derive non-hardened
/// children.
#[derive(Clone, PartialEq, Eq)]
pub struct HdNode {
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_index: u32,
    chain_code: [u8; 32],
    key: KeyMaterial,
}

impl HdNode {
    /// Create the master node from a seed.
    ///
    /// HMAC-SHA512 keyed with `"Bitcoin seed"`: the left half is the master
    /// private scalar, the right half the master chain code. Fails with
    /// [`Error::InvalidSeed`] if the scalar is zero or not below the curve
    /// order.
    pub fn master_from_seed(seed: &Seed) -> Result<Self> {
        let mut mac = HmacSha512::new_from_slice(b"Bitcoin seed")
            .map_err(|_| Error::InvalidSeed("HMAC initialization failed".to_string()))?;
        mac.update(seed.as_bytes());
        let digest = mac.finalize().into_bytes();

        let secret_key = SecretKey::from_slice(&digest[..32])
            .map_err(|e| Error::InvalidSeed(format!("master scalar out of range: {}", e)))?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&digest[32..]);

        Ok(Self {
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_index: 0,
            chain_code,
            key: KeyMaterial::Private(secret_key),
        })
    }

    /// Derive the child node at `index` (CKDpriv / CKDpub).
    ///
    /// Indices at or above [`HARDENED_OFFSET`] are hardened and require
    /// private key material; attempting one on a neutered node fails with
    /// [`Error::HardenedFromPublic`].
    ///
    /// The astronomically rare degenerate outputs (left HMAC half not below
    /// the curve order, or a zero child key) surface as
    /// [`Error::InvalidChild`]; per BIP32 the caller may skip to the next
    /// index.
    pub fn derive_child(&self, index: u32) -> Result<Self> {
        if self.depth == u8::MAX {
            return Err(Error::InvalidInput(
                "derivation depth exceeds 255".to_string(),
            ));
        }

        let hardened = index >= HARDENED_OFFSET;

        let mut mac = HmacSha512::new_from_slice(&self.chain_code)
            .map_err(|_| Error::InvalidChild("HMAC initialization failed".to_string()))?;

        match (&self.key, hardened) {
            (KeyMaterial::Private(secret_key), true) => {
                mac.update(&[0u8]);
                mac.update(&secret_key.secret_bytes());
            }
            (KeyMaterial::Private(_) | KeyMaterial::Public(_), false) => {
                mac.update(&self.public_key_bytes());
            }
            (KeyMaterial::Public(_), true) => {
                return Err(Error::HardenedFromPublic);
            }
        }
        mac.update(&index.to_be_bytes());
        let digest = mac.finalize().into_bytes();

        let mut il = [0u8; 32];
        il.copy_from_slice(&digest[..32]);
        let tweak = Scalar::from_be_bytes(il)
            .map_err(|_| Error::InvalidChild("tweak not below curve order".to_string()))?;

        let key = match &self.key {
            KeyMaterial::Private(secret_key) => {
                // child = (IL + parent) mod n
                let child = secret_key
                    .add_tweak(&tweak)
                    .map_err(|_| Error::InvalidChild("derived key is zero".to_string()))?;
                KeyMaterial::Private(child)
            }
            KeyMaterial::Public(public_key) => {
                // child = point(IL) + parent
                let secp = Secp256k1::new();
                let child = public_key
                    .add_exp_tweak(&secp, &tweak)
                    .map_err(|_| Error::InvalidChild("derived point at infinity".to_string()))?;
                KeyMaterial::Public(child)
            }
        };

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&digest[32..]);

        Ok(Self {
            depth: self.depth + 1,
            parent_fingerprint: self.fingerprint(),
            child_index: index,
            chain_code,
            key,
        })
    }

    /// Strip private key material, keeping the chain code and public key.
    ///
    /// The result derives the watch-only side of the tree: non-hardened
    /// children only.
    pub fn neuter(&self) -> Self {
        let key = match &self.key {
            KeyMaterial::Private(secret_key) => {
                let secp = Secp256k1::new();
                KeyMaterial::Public(PublicKey::from_secret_key(&secp, secret_key))
            }
            KeyMaterial::Public(public_key) => KeyMaterial::Public(*public_key),
        };

        Self {
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_index: self.child_index,
            chain_code: self.chain_code,
            key,
        }
    }

    /// Serialize as a Base58Check extended private key using the profile's
    /// version bytes.
    ///
    /// Fails with [`Error::NoPrivateKey`] on a neutered node.
    pub fn to_extended_private(&self, profile: &PurposeProfile) -> Result<String> {
        let KeyMaterial::Private(secret_key) = &self.key else {
            return Err(Error::NoPrivateKey);
        };

        let mut key_bytes = [0u8; 33];
        key_bytes[1..].copy_from_slice(&secret_key.secret_bytes());

        Ok(base58check_encode(
            &profile.private_version,
            &self.serialize_body(&key_bytes),
        ))
    }

    /// Serialize as a Base58Check extended public key using the profile's
    /// version bytes.
    pub fn to_extended_public(&self, profile: &PurposeProfile) -> String {
        base58check_encode(
            &profile.public_version,
            &self.serialize_body(&self.public_key_bytes()),
        )
    }

    /// Common tail of the 78-byte BIP32 serialization:
    /// depth || parent fingerprint || child index || chain code || key.
    fn serialize_body(&self, key_bytes: &[u8; 33]) -> Vec<u8> {
        let mut data = Vec::with_capacity(74);
        data.push(self.depth);
        data.extend_from_slice(&self.parent_fingerprint);
        data.extend_from_slice(&self.child_index.to_be_bytes());
        data.extend_from_slice(&self.chain_code);
        data.extend_from_slice(key_bytes);
        data
    }

    /// Compressed public key (33 bytes).
    pub fn public_key_bytes(&self) -> [u8; 33] {
        match &self.key {
            KeyMaterial::Private(secret_key) => {
                let secp = Secp256k1::new();
                PublicKey::from_secret_key(&secp, secret_key).serialize()
            }
            KeyMaterial::Public(public_key) => public_key.serialize(),
        }
    }

    /// First 4 bytes of HASH160 of the compressed public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        let hash = hash160(&self.public_key_bytes());
        let mut fingerprint = [0u8; 4];
        fingerprint.copy_from_slice(&hash[..4]);
        fingerprint
    }

    /// Whether this node holds only public key material.
    pub fn is_neutered(&self) -> bool {
        matches!(self.key, KeyMaterial::Public(_))
    }

    /// Depth in the tree (0 for the master node).
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Fingerprint of the parent node (zero for the master node).
    pub fn parent_fingerprint(&self) -> &[u8; 4] {
        &self.parent_fingerprint
    }

    /// Index this node was derived at (zero for the master node).
    pub fn child_index(&self) -> u32 {
        self.child_index
    }

    /// Chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

impl std::fmt::Debug for HdNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdNode")
            .field("depth", &self.depth)
            .field("child_index", &self.child_index)
            .field("neutered", &self.is_neutered())
            .field("key", &"[REDACTED]")
            .finish()
    }
}
