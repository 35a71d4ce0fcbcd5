//! Calculation history model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starlus_core::types::{DbId, Timestamp};

/// A row from the `calculations` table.
///
/// `result` is server-derived from `expression`; on evaluation failure it
/// stays NULL and `error` carries the human-readable failure.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Calculation {
    pub id: DbId,
    pub user_id: DbId,
    pub expression: String,
    pub result: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub created_at: Timestamp,
}

/// Request body for `POST /calculations`. Only the expression is
/// client-suppliable.
#[derive(Debug, Deserialize)]
pub struct CreateCalculation {
    pub expression: String,
}

/// Insert DTO, built by the handler after evaluating the expression.
#[derive(Debug)]
pub struct NewCalculation {
    pub expression: String,
    pub status: String,
    pub result: Option<String>,
    pub error: Option<String>,
}
