//! Store interface for membership data
//!
//! The relational store is an external collaborator. This module
//! defines the narrow capability surface the confirmation matcher
//! needs: an equality-filtered multi-row lookup, a single joined-row
//! lookup, and a single-row update. Implementations wrap whatever
//! database client the host application uses and are injected into
//! [`MembershipProvider`](crate::provider::MembershipProvider).

use crate::error::{MembershipError, Result};
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// SQL parameter value passed alongside a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    /// Text value
    Text(String),
    /// UUID value
    Uuid(Uuid),
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for SqlParam {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One row returned by a store query, keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: serde_json::Map<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column value, builder style
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    /// Get a raw column value
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Get a column as a string, failing with a data error otherwise
    pub fn get_str(&self, column: &str) -> Result<&str> {
        self.get(column)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                MembershipError::Data(format!("column {} is missing or not a string", column))
            })
    }

    /// Get a column as a UUID, failing with a data error otherwise
    pub fn get_uuid(&self, column: &str) -> Result<Uuid> {
        let raw = self.get_str(column)?;
        Uuid::parse_str(raw).map_err(|e| {
            MembershipError::Data(format!("column {} is not a valid UUID: {}", column, e))
        })
    }
}

/// Capability surface of the membership store
///
/// Store failures surface as [`MembershipError::Store`]; they are
/// never folded into the `false` result the matcher returns for an
/// unmatched token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Run an equality-filtered query returning any number of rows
    ///
    /// Equality collation is the store's own and is commonly
    /// case-insensitive; callers must not rely on it being exact.
    async fn query(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>>;

    /// Run a query expected to return at most one row
    async fn query_single(&self, sql: &str, params: &[SqlParam]) -> Result<Option<Row>>;

    /// Run an update, returning the number of rows affected
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64>;
}
