//! Integration tests for the movie repository.
//!
//! Exercises `MovieRepo` against a real database:
//! - Create / find / partial update
//! - Title search and ordering
//! - Delete, including link cleanup and unknown ids

use chrono::NaiveDate;
use filmotheka_core::movie::MovieOrdering;
use filmotheka_db::models::actor::{CreateActor, MovieRef};
use filmotheka_db::models::movie::{CreateMovie, MovieListFilter, UpdateMovie};
use filmotheka_db::repositories::{ActorRepo, MovieRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, rating: f64) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        description: format!("About {title}"),
        release_date: NaiveDate::from_ymd_opt(1999, 3, 31),
        rating,
    }
}

fn titles(movies: &[filmotheka_db::models::movie::Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("The Matrix", 8.7))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "The Matrix");
    assert_eq!(created.release_date, NaiveDate::from_ymd_opt(1999, 3, 31));

    let found = MovieRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("movie should exist");
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_applies_only_present_fields(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Heat", 8.3)).await.unwrap();

    let updated = MovieRepo::update(
        &pool,
        &UpdateMovie {
            id: created.id,
            title: None,
            description: Some(String::new()),
            release_date: None,
            rating: Some(0.0),
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");

    assert_eq!(updated.title, "Heat"); // unchanged
    assert_eq!(updated.description, ""); // explicit empty honoured
    assert_eq!(updated.rating, 0.0); // explicit zero honoured
    assert_eq!(updated.release_date, created.release_date);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_id_returns_none(pool: PgPool) {
    let result = MovieRepo::update(
        &pool,
        &UpdateMovie {
            id: 999_999,
            title: Some("Ghost".to_string()),
            description: None,
            release_date: None,
            rating: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_default_order_is_rating_desc(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("Mid", 5.0)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Top", 9.0)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Low", 1.0)).await.unwrap();

    let movies = MovieRepo::list(&pool, &MovieListFilter::default())
        .await
        .unwrap();
    assert_eq!(titles(&movies), vec!["Top", "Mid", "Low"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_title_ascending(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("Casablanca", 8.5)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Alien", 8.4)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Brazil", 7.9)).await.unwrap();

    let filter = MovieListFilter {
        search: None,
        ordering: MovieOrdering::from_params(Some("title"), None),
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), vec!["Alien", "Brazil", "Casablanca"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("Star Wars", 8.6)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Lone STAR", 7.5)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Dune", 8.0)).await.unwrap();

    let filter = MovieListFilter {
        search: Some("star".to_string()),
        ordering: MovieOrdering::default(),
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), vec!["Star Wars", "Lone STAR"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("100% Wolf", 5.5)).await.unwrap();
    MovieRepo::create(&pool, &new_movie("1000 Years", 6.0)).await.unwrap();

    let filter = MovieListFilter {
        search: Some("100%".to_string()),
        ordering: MovieOrdering::default(),
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), vec!["100% Wolf"]);

    let filter = MovieListFilter {
        search: Some("nothing matches this".to_string()),
        ordering: MovieOrdering::default(),
    };
    assert!(MovieRepo::list(&pool, &filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_links(pool: PgPool) {
    let movie = MovieRepo::create(&pool, &new_movie("Ronin", 7.2)).await.unwrap();
    let actor = ActorRepo::create(
        &pool,
        &CreateActor {
            name: "Jean Reno".to_string(),
            gender: "male".to_string(),
            birthdate: None,
            movies: vec![MovieRef { id: movie.id }],
        },
    )
    .await
    .unwrap();
    assert_eq!(actor.movies.len(), 1);

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, movie.id).await.unwrap().is_none());
    assert!(ActorRepo::movie_ids(&pool, actor.actor.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unknown_id_returns_false(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("Keeper", 6.0)).await.unwrap();
    assert!(!MovieRepo::delete(&pool, 999_999).await.unwrap());

    let remaining = MovieRepo::list(&pool, &MovieListFilter::default())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_check_constraint(pool: PgPool) {
    let result = MovieRepo::create(&pool, &new_movie("Broken", 11.0)).await;
    assert!(result.is_err(), "ratings above 10 must be rejected by the schema");
}
