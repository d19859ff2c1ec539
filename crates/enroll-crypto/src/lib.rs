//! # enroll-crypto
//!
//! Credential hashing primitives for the enroll portal.
//!
//! Passwords are hashed with Argon2id and stored as PHC-formatted strings;
//! nothing else about a credential secret is ever persisted.

#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod utils;

pub use errors::{CryptoError, Result};
pub use hashing::{generate_salt, hash_password, verify_password};
pub use utils::current_timestamp;
