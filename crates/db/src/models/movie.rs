//! Movie entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie` table, with `genre` and `director` resolved to the
/// referenced row's display name via LEFT JOIN at query time.
///
/// Every payload column is nullable: a create request may omit any field and
/// the store persists NULL. A dangling `genre_id` / `director_id` resolves
/// the display name to `None`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub genre: Option<String>,
    pub director_id: Option<DbId>,
    pub director: Option<String>,
}

/// DTO for creating a new movie. All fields optional; missing fields persist
/// as NULL.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for `PUT /movies/{id}`.
///
/// The wire field is `name`; its value replaces the movie's `title` (the
/// movie's name-equivalent display field). An absent `name` writes NULL.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    pub name: Option<String>,
}

/// Query parameters for `GET /movies/`.
///
/// Both filters are exact matches, combined with AND when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}
