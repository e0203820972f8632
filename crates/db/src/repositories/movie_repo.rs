//! Repository for the `movies` table.

use filmotheka_core::movie::title_search_pattern;
use filmotheka_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieListFilter, UpdateMovie};

/// Column list for the `movies` table.
const COLUMNS: &str = "id, title, description, release_date, rating";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, description, release_date, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching `filter`, in the requested order.
    ///
    /// The sort column comes from a fixed whitelist; the search term is
    /// always a bound parameter.
    pub async fn list(pool: &PgPool, filter: &MovieListFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let order_by = filter.ordering.to_sql();
        match filter.search.as_deref().filter(|s| !s.is_empty()) {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies \
                     WHERE title ILIKE $1 ESCAPE '\\' \
                     ORDER BY {order_by}"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(title_search_pattern(term))
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM movies ORDER BY {order_by}");
                sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a movie. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, input: &UpdateMovie) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                release_date = COALESCE($4, release_date), \
                rating = COALESCE($5, rating) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie and every link referencing it, atomically.
    ///
    /// Returns `true` if the movie row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM actor_movie WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
