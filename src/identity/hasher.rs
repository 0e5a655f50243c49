//! Identity hasher
//!
//! bcrypt-backed implementation of the one-way address hash.

use crate::error::IdentityError;
use log::error;

/// Identity shown to peers when hashing failed
pub const UNKNOWN_IDENTITY: &str = "ERROR";

/// Cost range bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

/// One-way transform used to hide a secret (here: a peer address).
pub trait IdentityHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<String, IdentityError>;

    /// Returns `false` for a mismatch and for a digest that cannot be parsed.
    fn verify(&self, secret: &str, digest: &str) -> bool;
}

/// Salted bcrypt hasher with a fixed cost factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Result<Self, IdentityError> {
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
            return Err(IdentityError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }
}

impl IdentityHasher for BcryptHasher {
    fn hash(&self, secret: &str) -> Result<String, IdentityError> {
        Ok(bcrypt::hash(secret, self.cost)?)
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        bcrypt::verify(secret, digest).unwrap_or(false)
    }
}

/// Hash `address`, falling back to [`UNKNOWN_IDENTITY`] so a hasher failure
/// never blocks a connect.
pub fn anonymize(hasher: &dyn IdentityHasher, address: &str) -> String {
    match hasher.hash(address) {
        Ok(digest) => digest,
        Err(e) => {
            error!("Failed to anonymize peer address: {}", e);
            UNKNOWN_IDENTITY.to_string()
        }
    }
}
