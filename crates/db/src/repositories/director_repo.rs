//! Repository for the `director` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{CreateDirector, Director};

const DIRECTOR_COLUMNS: &str = "id, name";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a director and return its generated id.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("INSERT INTO director (name) VALUES ($1) RETURNING id")
            .bind(input.name.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a director by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {DIRECTOR_COLUMNS} FROM director WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {DIRECTOR_COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Replace a director's `name`. A `None` name writes NULL.
    ///
    /// Returns `false` if no director with the given id exists.
    pub async fn update_name(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE director SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a director by id. Returns `true` if a row was deleted.
    ///
    /// Movies referencing the director are left untouched; their `director`
    /// display name resolves to NULL from then on.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
