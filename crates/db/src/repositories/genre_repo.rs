//! Repository for the `genre` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre};

const GENRE_COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a genre and return its generated id.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("INSERT INTO genre (name) VALUES ($1) RETURNING id")
            .bind(input.name.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a genre by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {GENRE_COLUMNS} FROM genre WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {GENRE_COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Replace a genre's `name`. A `None` name writes NULL.
    ///
    /// Returns `false` if no genre with the given id exists.
    pub async fn update_name(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE genre SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a genre by id. Returns `true` if a row was deleted.
    ///
    /// Movies referencing the genre are left untouched; their `genre`
    /// display name resolves to NULL from then on.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
