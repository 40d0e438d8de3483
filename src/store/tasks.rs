use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Task, TaskInput};

/// Inserts a new task and returns the store-assigned id.
/// `created_at` is filled in by the store's column default.
pub async fn insert(pool: &SqlitePool, input: &TaskInput) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO tasks (title, description) VALUES (?, ?)")
        .bind(&input.title)
        .bind(&input.description)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Returns the full task collection. Tasks are a shared list; no user scoping.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Task>, AppError> {
    let tasks =
        sqlx::query_as::<_, Task>("SELECT id, title, description, created_at FROM tasks")
            .fetch_all(pool)
            .await?;

    Ok(tasks)
}

/// Rewrites title and description of the given task, leaving `created_at`
/// untouched. A missing id affects zero rows; callers do not treat that as an
/// error.
pub async fn update(pool: &SqlitePool, id: i64, input: &TaskInput) -> Result<u64, AppError> {
    let result = sqlx::query("UPDATE tasks SET title = ?, description = ? WHERE id = ?")
        .bind(&input.title)
        .bind(&input.description)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Deletes the given task. A missing id affects zero rows; callers do not
/// treat that as an error.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
