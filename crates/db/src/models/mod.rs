//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for the name-replacement PUT endpoints
//!
//! Request DTOs use `#[serde(deny_unknown_fields)]` so an unrecognized
//! payload field fails extraction with a descriptive message instead of
//! surfacing as a storage fault at insert time.

pub mod director;
pub mod genre;
pub mod movie;
