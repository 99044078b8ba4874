//! Cryptographic facade for the membership library
//!
//! This module provides password hashing and verification, generic
//! named-algorithm digests, and salt/token generation. All functions
//! are stateless; the only ambient input is the operating system's
//! secure random source.

pub mod digest;
pub mod password;
pub mod tokens;

pub use digest::{DEFAULT_DIGEST_ALGORITHM, hash_digest, hash_str, sha256, sha512};
pub use password::{hash_password, verify_password};
pub use tokens::{
    SALT_SIZE_BYTES, TOKEN_SIZE_BYTES, generate_confirmation_token,
    generate_confirmation_token_with, generate_salt,
};
