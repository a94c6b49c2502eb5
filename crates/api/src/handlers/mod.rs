//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, delete) for a single resource. Handlers delegate to the
//! corresponding repository in `marquee_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod directors;
pub mod genres;
pub mod movies;
