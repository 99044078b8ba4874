//! Membership record decoding

use super::{CONFIRMATION_TOKEN_COLUMN, USER_ID_COLUMN};
use crate::error::Result;
use crate::store::Row;
use uuid::Uuid;

/// One candidate record returned by a confirmation lookup
///
/// Exists only for the duration of a single confirmation attempt; the
/// store remains the system of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRecord {
    /// Identifier of the user the record belongs to
    pub user_id: Uuid,
    /// Stored confirmation token
    pub confirmation_token: String,
}

impl ConfirmationRecord {
    /// Decode a record from a store row
    ///
    /// A row without the expected columns, or with a malformed user
    /// id, is a data error rather than an unmatched token.
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            user_id: row.get_uuid(USER_ID_COLUMN)?,
            confirmation_token: row.get_str(CONFIRMATION_TOKEN_COLUMN)?.to_string(),
        })
    }
}
