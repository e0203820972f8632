//! Actor entity model and DTOs.
//!
//! Actors are linked to movies through the `actor_movie` junction table.
//! Responses embed the linked movies as `{id, title}` briefs.

use filmotheka_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub gender: String,
    pub birthdate: Option<Date>,
}

/// The `{id, title}` view of a movie embedded in actor responses.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MovieBrief {
    pub id: DbId,
    pub title: String,
}

/// An actor enriched with the movies it is linked to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorWithMovies {
    #[serde(flatten)]
    pub actor: Actor,
    pub movies: Vec<MovieBrief>,
}

/// Reference to a movie in an actor payload. A `title` sent alongside the id
/// is accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MovieRef {
    pub id: DbId,
}

/// DTO for creating a new actor together with its movie links.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, deserialize_with = "super::date::deserialize_opt")]
    pub birthdate: Option<Date>,
    #[serde(default)]
    pub movies: Vec<MovieRef>,
}

/// DTO for updating an actor. Only fields present in the payload are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub id: DbId,
    pub name: Option<String>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "super::date::deserialize_opt")]
    pub birthdate: Option<Date>,
    /// If `Some`, the links are reconciled against this list. If `None`,
    /// links are left unchanged.
    pub movies: Option<Vec<MovieRef>>,
}

pub(crate) fn ref_ids(refs: &[MovieRef]) -> Vec<DbId> {
    refs.iter().map(|m| m.id).collect()
}
