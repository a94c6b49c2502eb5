//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::movie::{CreateMovie, Movie, MovieListParams, UpdateMovie};
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies/
///
/// `director_id` and `genre_id` are exact-match filters, ANDed when both
/// are present.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool, &params).await?;
    Ok(Json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<StatusCode> {
    MovieRepo::create(&state.pool, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /movies/{id}
///
/// A missing movie yields 200 with a `null` body, not a 404; callers depend
/// on the empty-success shape.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// The payload's `name` field replaces the movie's `title`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    let updated = MovieRepo::update_title(&state.pool, id, input.name.as_deref()).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}
