use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppResult;

/// Hash a password using Argon2id with a fresh random salt
///
/// # Returns
/// * `AppResult<String>` - The PHC-formatted hash string or an error
///
/// # Example
/// ```ignore
/// let hashed = hash_password("my_secure_password")?;
/// ```
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("failed to hash password: {e}"))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a PHC-formatted hash
///
/// # Returns
/// * `AppResult<bool>` - True if password matches, false otherwise. A hash
///   that cannot be parsed is an error.
pub fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| anyhow!("malformed password hash: {e}"))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
