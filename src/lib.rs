//! # membership-rs
//!
//! Account confirmation and credential hashing for membership systems,
//! layered over an injectable relational store.
//!
//! ## Features
//!
//! - **Credential hashing facade**: Argon2 password hashing with
//!   self-contained digest strings, named-algorithm digests, and salt
//!   generation
//! - **Account confirmation**: matches user-submitted confirmation
//!   tokens against stored records and flips the confirmed flag on
//!   exactly one record
//! - **Store-agnostic**: the database is an injected trait; bring your
//!   own client
//! - **Collation-safe**: the store-level token lookup may be
//!   case-insensitive, so matches are re-checked with an exact
//!   comparison before any update
//!
//! ## Hashing and tokens
//!
//! ```rust
//! use membership_rs::crypto;
//!
//! # fn main() -> membership_rs::Result<()> {
//! let hash = crypto::hash_password("hunter2")?;
//! assert!(crypto::verify_password("hunter2", &hash));
//! assert!(!crypto::verify_password("hunter3", &hash));
//!
//! let digest = crypto::hash_str("payload", "sha256")?;
//! assert_eq!(digest.len(), 64);
//!
//! let token = crypto::generate_confirmation_token();
//! assert_eq!(token.len(), 24);
//! # Ok(())
//! # }
//! ```
//!
//! ## Confirming an account
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use membership_rs::{
//!     MembershipConfig, MembershipProvider, MembershipStore, Result, Row, SqlParam,
//! };
//!
//! // Wraps whatever database client the application uses.
//! struct PgStore;
//!
//! #[async_trait]
//! impl MembershipStore for PgStore {
//!     async fn query(&self, _sql: &str, _params: &[SqlParam]) -> Result<Vec<Row>> {
//!         unimplemented!()
//!     }
//!     async fn query_single(&self, _sql: &str, _params: &[SqlParam]) -> Result<Option<Row>> {
//!         unimplemented!()
//!     }
//!     async fn execute(&self, _sql: &str, _params: &[SqlParam]) -> Result<u64> {
//!         unimplemented!()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let provider = MembershipProvider::new(Arc::new(PgStore), MembershipConfig::default());
//!
//!     let confirmed = provider.confirm_account("AAECAwQFBgcICQoLDA0ODw==").await?;
//!     println!("confirmed: {}", confirmed);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod crypto;
pub mod error;
pub mod provider;
pub mod store;

// Re-export main types
pub use config::MembershipConfig;
pub use error::{MembershipError, Result};
pub use provider::{ConfirmationRecord, MembershipProvider, generate_confirmation_token};
pub use store::{MembershipStore, Row, SqlParam};
