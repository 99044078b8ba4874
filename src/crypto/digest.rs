//! Named-algorithm digest helpers

use crate::error::{MembershipError, Result};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Algorithm used when callers do not name one
pub const DEFAULT_DIGEST_ALGORITHM: &str = "sha256";

/// Compute an unsalted digest of arbitrary input under a named algorithm
///
/// Algorithm names are matched case-insensitively; `sha256`, `sha384`,
/// and `sha512` are supported. The digest is returned as lowercase hex.
pub fn hash_digest(input: &[u8], algorithm: &str) -> Result<String> {
    match algorithm.to_ascii_lowercase().as_str() {
        "sha256" => Ok(digest_with::<Sha256>(input)),
        "sha384" => Ok(digest_with::<Sha384>(input)),
        "sha512" => Ok(digest_with::<Sha512>(input)),
        _ => Err(MembershipError::unsupported_algorithm(algorithm)),
    }
}

/// String convenience over [`hash_digest`]
pub fn hash_str(input: &str, algorithm: &str) -> Result<String> {
    hash_digest(input.as_bytes(), algorithm)
}

/// Compute the SHA-256 digest of a string as lowercase hex
pub fn sha256(input: &str) -> String {
    digest_with::<Sha256>(input.as_bytes())
}

/// Compute the SHA-512 digest of a string as lowercase hex
pub fn sha512(input: &str) -> String {
    digest_with::<Sha512>(input.as_bytes())
}

fn digest_with<D: Digest>(input: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}
