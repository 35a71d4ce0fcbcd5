//! Repository for the `user_profiles` table.
//!
//! Profiles are 1:1 with users and created inside the registration
//! transaction (see `UserRepo::create_with_profile`), so there is no
//! standalone create here.

use sqlx::PgPool;
use starlus_core::types::DbId;

use crate::models::profile::Profile;

/// Column list for user_profiles queries.
const COLUMNS: &str = "id, user_id, picture_path, bio, created_at, updated_at";

/// Provides profile reads and updates, scoped to the owning user.
pub struct ProfileRepo;

impl ProfileRepo {
    /// List the caller's profiles. At most one row by the unique index;
    /// returned as a collection to match the other resource listings.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a profile by id, visible only to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_profiles WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the bio of the caller's profile.
    pub async fn update_bio(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        bio: Option<&str>,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET
                bio = COALESCE($3, bio),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(user_id)
            .bind(bio)
            .fetch_optional(pool)
            .await
    }

    /// Set the picture path of the caller's profile.
    pub async fn set_picture(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        picture_path: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET picture_path = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(user_id)
            .bind(picture_path)
            .fetch_optional(pool)
            .await
    }
}
