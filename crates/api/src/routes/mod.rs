pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree, mounted at the application root.
///
/// ```text
/// /movies/          GET list (filters: director_id, genre_id), POST create
/// /movies/{id}      GET, PUT, DELETE
///
/// /directors/       GET list, POST create
/// /directors/{id}   GET, PUT, DELETE
///
/// /genres/          GET list, POST create
/// /genres/{id}      GET (genre plus referencing movies), PUT, DELETE
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/directors", directors::router())
        .nest("/genres", genres::router())
}
