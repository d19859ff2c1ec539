//! Password hashing using Argon2id.

use crate::errors::*;
use argon2::password_hash::SaltString;
use argon2::{Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier};

/// Argon2id memory cost in KiB (OWASP second recommended parameter set)
const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2id iteration count
const ARGON2_ITERATIONS: u32 = 2;

/// Argon2id lane count
const ARGON2_PARALLELISM: u32 = 1;

fn argon2_instance() -> Result<Argon2<'static>> {
    let params = Params::new(ARGON2_MEMORY_KIB, ARGON2_ITERATIONS, ARGON2_PARALLELISM, None)
        .map_err(|e| CryptoError::Argon2Failed(e.to_string()))?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a password using Argon2id
///
/// # Arguments
///
/// * `password` - The password to hash
/// * `salt` - Salt string (use `generate_salt()` to create)
///
/// # Returns
///
/// PHC-formatted hash string that includes algorithm, parameters, salt, and hash
pub fn hash_password(password: &[u8], salt: &SaltString) -> Result<String> {
    let argon2 = argon2_instance()?;

    let password_hash = argon2
        .hash_password(password, salt)
        .map_err(|e| CryptoError::Argon2Failed(e.to_string()))?;

    Ok(password_hash.to_string())
}

/// Verify a password against an Argon2id hash
///
/// # Arguments
///
/// * `password` - The password to verify
/// * `hash_str` - The PHC-formatted hash string from `hash_password`
///
/// # Returns
///
/// `Ok(())` if password matches, `Err` otherwise
pub fn verify_password(password: &[u8], hash_str: &str) -> Result<()> {
    let parsed_hash = PasswordHash::new(hash_str).map_err(|_| CryptoError::InvalidHashFormat)?;

    let argon2 = argon2_instance()?;

    argon2
        .verify_password(password, &parsed_hash)
        .map_err(|e| CryptoError::Argon2Failed(e.to_string()))
}

/// Generate a random salt for password hashing
pub fn generate_salt() -> SaltString {
    SaltString::generate(&mut rand::thread_rng())
}
