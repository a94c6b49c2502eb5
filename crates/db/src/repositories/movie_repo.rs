//! Repository for the `movie` table.
//!
//! Every read resolves the `genre` and `director` display names through a
//! LEFT JOIN, so a dangling reference surfaces as a NULL name rather than
//! an error.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieListParams};

/// Column list for `movie` reads, including the joined display names.
const MOVIE_COLUMNS: &str = "\
    m.id, m.title, m.description, m.trailer, m.year, m.rating, \
    m.genre_id, g.name AS genre, m.director_id, d.name AS director";

/// Shared FROM clause joining the referenced genre and director rows.
const MOVIE_FROM: &str = "\
    FROM movie m \
    LEFT JOIN genre g ON g.id = m.genre_id \
    LEFT JOIN director d ON d.id = m.director_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and return its generated id.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(input.title.as_deref())
        .bind(input.description.as_deref())
        .bind(input.trailer.as_deref())
        .bind(input.year)
        .bind(input.rating)
        .bind(input.genre_id)
        .bind(input.director_id)
        .fetch_one(pool)
        .await
    }

    /// Find a movie by its id, with display names resolved.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} {MOVIE_FROM} WHERE m.id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies, optionally filtered by exact `director_id` / `genre_id`
    /// match. Both filters combine with AND.
    pub async fn list(pool: &PgPool, params: &MovieListParams) -> Result<Vec<Movie>, sqlx::Error> {
        let mut query = format!("SELECT {MOVIE_COLUMNS} {MOVIE_FROM}");
        match (params.director_id, params.genre_id) {
            (Some(_), Some(_)) => {
                query.push_str(" WHERE m.director_id = $1 AND m.genre_id = $2");
            }
            (Some(_), None) => query.push_str(" WHERE m.director_id = $1"),
            (None, Some(_)) => query.push_str(" WHERE m.genre_id = $1"),
            (None, None) => {}
        }
        query.push_str(" ORDER BY m.id");

        let mut q = sqlx::query_as::<_, Movie>(&query);
        if let Some(director_id) = params.director_id {
            q = q.bind(director_id);
        }
        if let Some(genre_id) = params.genre_id {
            q = q.bind(genre_id);
        }
        q.fetch_all(pool).await
    }

    /// List all movies referencing a genre.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        Self::list(
            pool,
            &MovieListParams {
                director_id: None,
                genre_id: Some(genre_id),
            },
        )
        .await
    }

    /// Replace a movie's `title`. A `None` title writes NULL.
    ///
    /// Returns `false` if no movie with the given id exists.
    pub async fn update_title(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE movie SET title = $2 WHERE id = $1")
            .bind(id)
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a movie by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
