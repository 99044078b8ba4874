//! Password hashing and verification using Argon2

use crate::error::{MembershipError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a password using Argon2
///
/// The returned PHC string embeds the algorithm identifier, version,
/// parameters, and salt, so it is all [`verify_password`] needs later.
pub fn hash_password(password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(MembershipError::validation("password must not be empty"));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MembershipError::Crypto(format!("Failed to hash password: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verify a password against its hash
///
/// Returns `false` for a wrong password and for any malformed or
/// unrecognized hash string. Verification never fails with an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
