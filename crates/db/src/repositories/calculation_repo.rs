//! Repository for the `calculations` table.

use sqlx::PgPool;
use starlus_core::types::DbId;

use crate::models::calculation::{Calculation, NewCalculation};

/// Column list for calculations queries.
const COLUMNS: &str = "id, user_id, expression, result, status, error, created_at";

/// Provides owner-scoped persistence for calculation history. Evaluation
/// happens before insert, so rows are born `done` or `failed`.
pub struct CalculationRepo;

impl CalculationRepo {
    /// Insert a calculation with its evaluation outcome.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &NewCalculation,
    ) -> Result<Calculation, sqlx::Error> {
        let query = format!(
            "INSERT INTO calculations (user_id, expression, status, result, error)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Calculation>(&query)
            .bind(user_id)
            .bind(&input.expression)
            .bind(&input.status)
            .bind(&input.result)
            .bind(&input.error)
            .fetch_one(pool)
            .await
    }

    /// List a user's calculations, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Calculation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calculations
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Calculation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a calculation by id, visible only to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Calculation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calculations WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, Calculation>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's calculation. Returns `true` if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
