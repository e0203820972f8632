//! Movie entity model and DTOs.

use filmotheka_core::movie::MovieOrdering;
use filmotheka_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: Option<Date>,
    pub rating: f64,
}

/// DTO for creating a new movie. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "super::date::deserialize_opt")]
    pub release_date: Option<Date>,
    #[serde(default)]
    pub rating: f64,
}

/// DTO for updating a movie. Only fields present in the payload are applied,
/// so an explicit `"rating": 0` or `"description": ""` is honoured.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::date::deserialize_opt")]
    pub release_date: Option<Date>,
    pub rating: Option<f64>,
}

/// Filter and ordering for movie listings.
#[derive(Debug, Clone, Default)]
pub struct MovieListFilter {
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    pub ordering: MovieOrdering,
}
