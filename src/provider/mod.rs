//! Account confirmation over an injected membership store
//!
//! The matcher looks up candidate records through the store's own
//! equality filter, then applies an exact, case-sensitive comparison
//! in process before flipping the confirmed flag. The second filter is
//! deliberate: store collations are frequently case-insensitive, and a
//! token differing only in case must not confirm an account.

mod record;


pub use record::ConfirmationRecord;

pub use crate::crypto::tokens::{generate_confirmation_token, generate_confirmation_token_with};

use crate::config::MembershipConfig;
use crate::error::Result;
use crate::store::{MembershipStore, SqlParam};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub(crate) const MEMBERSHIP_TABLE: &str = "membership";
pub(crate) const USER_ID_COLUMN: &str = "user_id";
pub(crate) const CONFIRMATION_TOKEN_COLUMN: &str = "confirmation_token";
pub(crate) const IS_CONFIRMED_COLUMN: &str = "is_confirmed";

/// Membership provider handling account confirmation
#[derive(Clone)]
pub struct MembershipProvider {
    /// Store holding membership records
    store: Arc<dyn MembershipStore>,
    /// User table configuration for username-scoped lookups
    config: MembershipConfig,
}

impl MembershipProvider {
    /// Create a new membership provider over the given store
    pub fn new(store: Arc<dyn MembershipStore>, config: MembershipConfig) -> Self {
        Self { store, config }
    }

    /// Confirm the account matching a user-submitted token
    ///
    /// Returns `Ok(true)` and re-applies the confirmed flag when the
    /// token matches exactly one record by exact-case comparison.
    /// Returns `Ok(false)` when no record matches exactly, or when
    /// several case-variant records collide under the store's lookup;
    /// an ambiguous match never confirms a guessed record. Store
    /// failures surface as errors, distinct from the `false` result.
    pub async fn confirm_account(&self, token: &str) -> Result<bool> {
        debug!("Confirming account by token");

        let sql = format!(
            "SELECT {uid}, {tok} FROM {table} WHERE {tok} = $1",
            uid = USER_ID_COLUMN,
            tok = CONFIRMATION_TOKEN_COLUMN,
            table = MEMBERSHIP_TABLE,
        );
        let rows = self.store.query(&sql, &[SqlParam::from(token)]).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(ConfirmationRecord::from_row(row)?);
        }

        // The store filter may be case-insensitive; this comparison is
        // the source of truth.
        let mut exact = records
            .into_iter()
            .filter(|record| record.confirmation_token == token);

        let record = match (exact.next(), exact.next()) {
            (Some(record), None) => record,
            _ => {
                debug!("Token did not match exactly one record");
                return Ok(false);
            }
        };

        self.set_confirmed(record.user_id).await?;
        info!("Account confirmed for user: {}", record.user_id);
        Ok(true)
    }

    /// Confirm the account of a known user matching a submitted token
    ///
    /// Same protocol as [`confirm_account`](Self::confirm_account), but
    /// the lookup is scoped to a single record by joining against the
    /// configured user table.
    pub async fn confirm_account_for_user(&self, username: &str, token: &str) -> Result<bool> {
        debug!("Confirming account by token for user: {}", username);

        let sql = format!(
            "SELECT m.{uid}, m.{tok} FROM {table} m \
             JOIN {user_table} u ON m.{uid} = u.{user_id} \
             WHERE m.{tok} = $1 AND u.{user_name} = $2",
            uid = USER_ID_COLUMN,
            tok = CONFIRMATION_TOKEN_COLUMN,
            table = MEMBERSHIP_TABLE,
            user_table = self.config.user_table_name,
            user_id = self.config.user_id_column,
            user_name = self.config.user_name_column,
        );
        let row = self
            .store
            .query_single(&sql, &[SqlParam::from(token), SqlParam::from(username)])
            .await?;

        let record = match row {
            Some(row) => ConfirmationRecord::from_row(&row)?,
            None => {
                debug!("No membership record for user: {}", username);
                return Ok(false);
            }
        };

        if record.confirmation_token != token {
            debug!("Token did not match record for user: {}", username);
            return Ok(false);
        }

        self.set_confirmed(record.user_id).await?;
        info!("Account confirmed for user: {}", record.user_id);
        Ok(true)
    }

    /// Get the provider configuration
    pub fn config(&self) -> &MembershipConfig {
        &self.config
    }

    // Unconditionally re-applies the flag; a record confirmed earlier
    // stays confirmed and the caller still sees success.
    async fn set_confirmed(&self, user_id: Uuid) -> Result<()> {
        let sql = format!(
            "UPDATE {table} SET {confirmed} = TRUE WHERE {uid} = $1",
            table = MEMBERSHIP_TABLE,
            confirmed = IS_CONFIRMED_COLUMN,
            uid = USER_ID_COLUMN,
        );
        self.store.execute(&sql, &[SqlParam::Uuid(user_id)]).await?;
        Ok(())
    }
}
