//! Handlers for the `/movies` resource.
//!
//! All four operations share one path; the update id travels in the body and
//! the delete id in the `id` query parameter.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use filmotheka_core::error::CoreError;
use filmotheka_core::movie::{
    validate_description, validate_rating, validate_title, MovieOrdering,
};
use filmotheka_db::models::movie::{CreateMovie, Movie, MovieListFilter, UpdateMovie};
use filmotheka_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{IdParams, MovieListParams};
use crate::state::AppState;

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    validate_title(&input.title)?;
    validate_description(&input.description)?;
    validate_rating(input.rating)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.user_id, movie_id = movie.id, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies?search=&sortBy=&sortOrder=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let filter = MovieListFilter {
        search: params.search,
        ordering: MovieOrdering::from_params(
            params.sort_by.as_deref(),
            params.sort_order.as_deref(),
        ),
    };

    let movies = MovieRepo::list(&state.pool, &filter).await?;
    if movies.is_empty() {
        return Err(AppError::NotFound("No movies found".into()));
    }
    Ok(Json(movies))
}

/// PUT /movies
///
/// Applies only the fields present in the body.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let movie = MovieRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.id,
        }))?;

    tracing::info!(user_id = user.user_id, movie_id = movie.id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movies?id=
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<IdParams>,
) -> AppResult<Json<&'static str>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Movie ID is required".into()))?;

    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    tracing::info!(user_id = user.user_id, movie_id = id, "Movie deleted");
    Ok(Json("Movie deleted"))
}
