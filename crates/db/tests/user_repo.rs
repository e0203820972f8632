//! Integration tests for the user repository and the `users` constraints.

use filmotheka_core::roles::Role;
use filmotheka_db::models::user::CreateUser;
use filmotheka_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_user(username: &str, role: Role) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("projectionist", Role::ReadOnly))
        .await
        .unwrap();
    assert_eq!(created.role, 2);
    assert_eq!(created.role(), Some(Role::ReadOnly));

    let by_name = UserRepo::find_by_username(&pool, "projectionist")
        .await
        .unwrap()
        .expect("user should be found by username");
    assert_eq!(by_name.id, created.id);

    let by_id = UserRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("user should be found by id");
    assert_eq!(by_id.username, "projectionist");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_username_lookup_is_case_sensitive(pool: PgPool) {
    UserRepo::create(&pool, &new_user("Admin", Role::Admin))
        .await
        .unwrap();

    assert!(UserRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_is_a_unique_violation(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup", Role::Admin))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("dup", Role::ReadOnly))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_outside_known_codes_is_rejected(pool: PgPool) {
    let err = sqlx::query("INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3)")
        .bind("ghost")
        .bind("x")
        .bind(3_i16)
        .execute(&pool)
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}
