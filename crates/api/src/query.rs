//! Query parameter types shared by the resource handlers.

use filmotheka_core::types::DbId;
use serde::Deserialize;

/// `?id=` on `DELETE /actors` and `DELETE /movies`.
///
/// Optional at the type level so a missing id produces a resource-specific
/// message rather than a generic decode error.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<DbId>,
}

/// `?search=&sortBy=&sortOrder=` on `GET /movies`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
