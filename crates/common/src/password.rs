//! Password hashing shared across Jokebox crates
//!
//! Thin wrapper over bcrypt so handlers never touch the hashing crate
//! directly and mismatches are a typed outcome rather than a `bool`.

use thiserror::Error;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password does not match")]
    Mismatch,

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password with the default bcrypt cost.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt hash.
pub fn check_password(password: &str, hashed_password: &str) -> Result<(), PasswordError> {
    if bcrypt::verify(password, hashed_password)? {
        Ok(())
    } else {
        Err(PasswordError::Mismatch)
    }
}
