//! Handlers for the `/actors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use filmotheka_core::actor::{validate_gender, validate_name};
use filmotheka_core::error::CoreError;
use filmotheka_db::models::actor::{ActorWithMovies, CreateActor, UpdateActor};
use filmotheka_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::IdParams;
use crate::state::AppState;

/// POST /actors
///
/// Creates the actor and links every listed movie in one transaction. An
/// unknown movie id fails the whole request with 400.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<CreateActor>,
) -> AppResult<(StatusCode, Json<ActorWithMovies>)> {
    validate_name(&input.name)?;
    validate_gender(&input.gender)?;

    let actor = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        actor_id = actor.actor.id,
        movie_count = actor.movies.len(),
        "Actor created"
    );
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ActorWithMovies>>> {
    let actors = ActorRepo::list_with_movies(&state.pool).await?;
    if actors.is_empty() {
        return Err(AppError::NotFound("No actors found".into()));
    }
    Ok(Json(actors))
}

/// PUT /actors
///
/// Applies the fields present in the body. When `movies` is present the
/// actor's links are reconciled against it using the configured link mode.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<UpdateActor>,
) -> AppResult<Json<ActorWithMovies>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    if let Some(gender) = &input.gender {
        validate_gender(gender)?;
    }

    let actor = ActorRepo::update(&state.pool, &input, state.config.link_mode)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: input.id,
        }))?;

    tracing::info!(
        user_id = user.user_id,
        actor_id = actor.actor.id,
        link_mode = ?state.config.link_mode,
        "Actor updated"
    );
    Ok(Json(actor))
}

/// DELETE /actors?id=
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<IdParams>,
) -> AppResult<Json<&'static str>> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Actor ID is required".into()))?;

    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }));
    }

    tracing::info!(user_id = user.user_id, actor_id = id, "Actor deleted");
    Ok(Json("Actor deleted"))
}
