//! Repository for the `actors` and `actor_movie` tables.

use filmotheka_core::links::{plan_link_changes, LinkMode, LinkPlan};
use filmotheka_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{
    ref_ids, Actor, ActorWithMovies, CreateActor, MovieBrief, UpdateActor,
};

/// Column list for the `actors` table.
const COLUMNS: &str = "id, name, gender, birthdate";

/// Provides CRUD operations for actors and their movie links.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor and link it to `input.movies`, all in one transaction.
    ///
    /// A movie id that does not exist fails the foreign key and rolls back the
    /// actor row as well.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<ActorWithMovies, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO actors (name, gender, birthdate) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Actor>(&insert_query)
            .bind(&input.name)
            .bind(&input.gender)
            .bind(input.birthdate)
            .fetch_one(&mut *tx)
            .await?;

        // Planning against an empty set dedupes the payload.
        let plan = plan_link_changes(&[], &ref_ids(&input.movies), LinkMode::Replace);
        Self::apply_plan_inner(&mut tx, actor.id, &plan).await?;

        let movies = Self::movies_for_actor_inner(&mut tx, actor.id).await?;
        tx.commit().await?;

        Ok(ActorWithMovies { actor, movies })
    }

    /// Find an actor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an actor by ID, enriched with its movies.
    pub async fn find_by_id_with_movies(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ActorWithMovies>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(actor) => {
                let movies = Self::movies_for_actor(pool, actor.id).await?;
                Ok(Some(ActorWithMovies { actor, movies }))
            }
            None => Ok(None),
        }
    }

    /// List all actors ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// List all actors with their movies.
    ///
    /// A failed movie lookup for one actor is logged and leaves that actor's
    /// movie list empty instead of failing the whole listing.
    pub async fn list_with_movies(pool: &PgPool) -> Result<Vec<ActorWithMovies>, sqlx::Error> {
        let actors = Self::list(pool).await?;
        let mut result = Vec::with_capacity(actors.len());

        for actor in actors {
            let movies = match Self::movies_for_actor(pool, actor.id).await {
                Ok(movies) => movies,
                Err(e) => {
                    tracing::warn!(actor_id = actor.id, error = %e, "Failed to load movies for actor");
                    Vec::new()
                }
            };
            result.push(ActorWithMovies { actor, movies });
        }

        Ok(result)
    }

    /// Update an actor. Only non-`None` fields are applied.
    ///
    /// If `input.movies` is `Some`, the actor's links are reconciled against
    /// it according to `mode`. The row update and link changes share one
    /// transaction; the `UPDATE` holds the actor's row lock until commit so
    /// concurrent updates of the same actor serialize.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateActor,
        mode: LinkMode,
    ) -> Result<Option<ActorWithMovies>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE actors SET \
                name = COALESCE($2, name), \
                gender = COALESCE($3, gender), \
                birthdate = COALESCE($4, birthdate) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Actor>(&update_query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.gender)
            .bind(input.birthdate)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(actor) = actor else {
            return Ok(None);
        };

        if let Some(ref refs) = input.movies {
            let existing = Self::movie_ids_inner(&mut tx, actor.id).await?;
            let plan = plan_link_changes(&existing, &ref_ids(refs), mode);
            if plan.is_empty() {
                tracing::debug!(actor_id = actor.id, "Movie links unchanged");
            } else {
                tracing::debug!(
                    actor_id = actor.id,
                    ?mode,
                    insert = ?plan.insert,
                    delete = ?plan.delete,
                    "Reconciling actor movie links"
                );
                Self::apply_plan_inner(&mut tx, actor.id, &plan).await?;
            }
        }

        let movies = Self::movies_for_actor_inner(&mut tx, actor.id).await?;
        tx.commit().await?;

        Ok(Some(ActorWithMovies { actor, movies }))
    }

    /// Delete an actor and every link referencing it, atomically.
    ///
    /// Returns `true` if the actor row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM actor_movie WHERE actor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Movie link helpers
    // -----------------------------------------------------------------------

    /// Get the `{id, title}` of every movie linked to an actor, ordered by title.
    pub async fn movies_for_actor(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<MovieBrief>, sqlx::Error> {
        sqlx::query_as::<_, MovieBrief>(MOVIES_FOR_ACTOR)
            .bind(actor_id)
            .fetch_all(pool)
            .await
    }

    /// Ids of the movies currently linked to an actor, ascending.
    pub async fn movie_ids(pool: &PgPool, actor_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(MOVIE_IDS_FOR_ACTOR)
            .bind(actor_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn movies_for_actor_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        actor_id: DbId,
    ) -> Result<Vec<MovieBrief>, sqlx::Error> {
        sqlx::query_as::<_, MovieBrief>(MOVIES_FOR_ACTOR)
            .bind(actor_id)
            .fetch_all(&mut **tx)
            .await
    }

    async fn movie_ids_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        actor_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(MOVIE_IDS_FOR_ACTOR)
            .bind(actor_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Execute a link plan within an existing transaction. Deletions run first.
    async fn apply_plan_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        actor_id: DbId,
        plan: &LinkPlan,
    ) -> Result<(), sqlx::Error> {
        for &movie_id in &plan.delete {
            sqlx::query("DELETE FROM actor_movie WHERE actor_id = $1 AND movie_id = $2")
                .bind(actor_id)
                .bind(movie_id)
                .execute(&mut **tx)
                .await?;
        }

        for &movie_id in &plan.insert {
            sqlx::query("INSERT INTO actor_movie (actor_id, movie_id) VALUES ($1, $2)")
                .bind(actor_id)
                .bind(movie_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

const MOVIES_FOR_ACTOR: &str = "SELECT m.id, m.title \
     FROM movies m \
     JOIN actor_movie am ON am.movie_id = m.id \
     WHERE am.actor_id = $1 \
     ORDER BY m.title, m.id";

const MOVIE_IDS_FOR_ACTOR: &str =
    "SELECT movie_id FROM actor_movie WHERE actor_id = $1 ORDER BY movie_id";
