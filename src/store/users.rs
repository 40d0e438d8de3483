use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::User;

/// Inserts a new user row and returns the store-assigned id.
///
/// `password_hash` must already be hashed; this layer never sees plaintext.
/// A duplicate email violates the unique constraint and surfaces as
/// `AppError::DatabaseError`.
pub async fn insert(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO users (username, email, password) VALUES (?, ?, ?)")
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Exact-match lookup by email.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        db::init_schema(&pool).await.unwrap();
        pool
    }

    #[actix_rt::test]
    async fn test_insert_and_find_by_email() {
        let pool = test_pool().await;

        let id = insert(&pool, "a", "a@x.com", "hash1").await.unwrap();
        assert!(id > 0);

        let user = find_by_email(&pool, "a@x.com").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "a");
        assert_eq!(user.password, "hash1");

        assert!(find_by_email(&pool, "b@x.com").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_duplicate_email_fails_and_first_user_survives() {
        let pool = test_pool().await;

        let id = insert(&pool, "a", "a@x.com", "hash1").await.unwrap();

        match insert(&pool, "b", "a@x.com", "hash2").await {
            Err(AppError::DatabaseError(_)) => {}
            other => panic!("Expected DatabaseError, got {:?}", other),
        }

        // First registration remains retrievable.
        let user = find_by_email(&pool, "a@x.com").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "a");
    }

    #[actix_rt::test]
    async fn test_lookup_is_exact_match() {
        let pool = test_pool().await;
        insert(&pool, "a", "a@x.com", "hash1").await.unwrap();

        // No normalization is applied; the stored spelling is authoritative.
        assert!(find_by_email(&pool, "A@X.COM").await.unwrap().is_none());
    }
}
