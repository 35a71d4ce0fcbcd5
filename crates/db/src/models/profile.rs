//! User profile model and DTOs. One row per user, created alongside the
//! user inside the registration transaction.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starlus_core::types::{DbId, Timestamp};

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    /// Relative media path of the profile picture, served under `/media`.
    pub picture_path: Option<String>,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `PUT /profiles/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub bio: Option<String>,
}
