//! Audit columns shared by every persisted entity.

use alunos_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Surrogate key plus lifecycle timestamps.
///
/// Composed into entity structs with `#[sqlx(flatten)]` and
/// `#[serde(flatten)]`, so the columns and JSON keys sit at the top level.
/// Column names are snake_case; JSON keys keep the `ID`/`CreatedAt` casing
/// existing clients decode.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct AuditFields {
    #[serde(rename = "ID")]
    pub id: DbId,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: Timestamp,
    /// Non-null marks a soft-deleted row.
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<Timestamp>,
}

impl AuditFields {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
