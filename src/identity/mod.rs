//! Peer identity anonymization
//!
//! Peers never see each other's raw addresses. Each connection's address is
//! run through a slow salted one-way hash once, at connect time, and only the
//! digest is ever disclosed.

pub mod hasher;

pub use hasher::{
    BcryptHasher, IdentityHasher, MAX_HASH_COST, MIN_HASH_COST, UNKNOWN_IDENTITY, anonymize,
};
