use serde::Serialize;
use sqlx::FromRow;

/// A user record as stored in the `users` table.
///
/// The `password` column holds the bcrypt hash, never the plaintext, and is
/// excluded from serialization so it can never appear in a response body.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
