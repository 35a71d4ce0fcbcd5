//! Repository for the `handwritten_texts` table.

use sqlx::PgPool;
use starlus_core::types::DbId;

use crate::models::handwritten_text::{HandwrittenText, NewHandwrittenText};

/// Column list for handwritten_texts queries.
const COLUMNS: &str =
    "id, user_id, image_path, recognized_text, status, error, created_at, updated_at";

/// Provides owner-scoped persistence for handwritten captures. The derived
/// column is write-once: no update path touches it after insert.
pub struct HandwrittenRepo;

impl HandwrittenRepo {
    /// Insert a capture with its (already computed) recognition outcome.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &NewHandwrittenText,
    ) -> Result<HandwrittenText, sqlx::Error> {
        let query = format!(
            "INSERT INTO handwritten_texts
                (user_id, image_path, status, recognized_text, error)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HandwrittenText>(&query)
            .bind(user_id)
            .bind(&input.image_path)
            .bind(&input.status)
            .bind(&input.recognized_text)
            .bind(&input.error)
            .fetch_one(pool)
            .await
    }

    /// List a user's captures, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<HandwrittenText>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM handwritten_texts
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, HandwrittenText>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a capture by id, visible only to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<HandwrittenText>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM handwritten_texts WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, HandwrittenText>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's capture. Returns `true` if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM handwritten_texts WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
