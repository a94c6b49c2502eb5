//! Handlers for the `/genres` resource.
//!
//! The detail endpoint has a deliberately asymmetric shape: a 1-or-2 element
//! JSON array whose first element is always the genre's `{id, name}` fields
//! (null-valued when the genre does not exist) and whose second element --
//! present only when non-empty -- is the array of movies referencing the
//! genre.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use marquee_db::models::movie::Movie;
use marquee_db::repositories::{GenreRepo, MovieRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// First element of the genre detail payload. Both fields are `null` when
/// the genre does not exist.
#[derive(Debug, Serialize)]
pub struct GenreFields {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

impl From<Option<Genre>> for GenreFields {
    fn from(genre: Option<Genre>) -> Self {
        match genre {
            Some(genre) => Self {
                id: Some(genre.id),
                name: genre.name,
            },
            None => Self {
                id: None,
                name: None,
            },
        }
    }
}

/// One element of the genre detail array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenreDetailPart {
    Genre(GenreFields),
    Movies(Vec<Movie>),
}

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list_all(&state.pool).await?;
    Ok(Json(genres))
}

/// POST /genres/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<StatusCode> {
    GenreRepo::create(&state.pool, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /genres/{id}
///
/// Returns `[genre]`, or `[genre, movies]` when at least one movie
/// references the genre.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<GenreDetailPart>>> {
    let genre = GenreRepo::find_by_id(&state.pool, id).await?;
    let movies = MovieRepo::list_by_genre(&state.pool, id).await?;

    let mut parts = vec![GenreDetailPart::Genre(GenreFields::from(genre))];
    if !movies.is_empty() {
        parts.push(GenreDetailPart::Movies(movies));
    }

    Ok(Json(parts))
}

/// PUT /genres/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<StatusCode> {
    let updated = GenreRepo::update_name(&state.pool, id, input.name.as_deref()).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))
    }
}

/// DELETE /genres/{id}
///
/// Referencing movies are left untouched (dangling references are allowed
/// by the data contract).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))
    }
}
