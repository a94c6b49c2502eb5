//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::models::director::{CreateDirector, Director, UpdateDirector};
use marquee_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list_all(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /directors/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDirector>,
) -> AppResult<StatusCode> {
    DirectorRepo::create(&state.pool, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /directors/{id}
///
/// A missing director yields 200 with a `null` body, not a 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<Director>>> {
    let director = DirectorRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(director))
}

/// PUT /directors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<StatusCode> {
    let updated = DirectorRepo::update_name(&state.pool, id, input.name.as_deref()).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}

/// DELETE /directors/{id}
///
/// Referencing movies are left untouched (dangling references are allowed
/// by the data contract).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}
