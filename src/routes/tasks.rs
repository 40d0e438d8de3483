//! Task CRUD handlers.
//!
//! All routes here sit behind `AuthMiddleware`. The `AuthenticatedUserId`
//! argument requires a verified token context, but tasks are a shared list:
//! any authenticated user may read, modify, or delete any task, so the id is
//! not consulted further.

use crate::{auth::AuthenticatedUserId, error::AppError, models::TaskInput, store};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// Creates a new task.
///
/// ## Responses:
/// - `201 Created`: Plain text confirmation.
/// - `401 Unauthorized` / `403 Forbidden`: Missing or invalid token.
/// - `500 Internal Server Error`: Persistence failure.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    task_data: web::Json<TaskInput>,
    _user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    store::tasks::insert(&pool, &task_data).await?;

    Ok(HttpResponse::Created().body("Task created successfully"))
}

/// Returns the full task collection.
///
/// ## Responses:
/// - `200 OK`: JSON array of task records.
/// - `401 Unauthorized` / `403 Forbidden`: Missing or invalid token.
/// - `500 Internal Server Error`: Persistence failure.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<SqlitePool>,
    _user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = store::tasks::list_all(&pool).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Updates a task's title and description.
///
/// A non-existent id is a silent no-op: the store reports zero rows affected
/// and the response is still a success.
///
/// ## Responses:
/// - `200 OK`: Plain text confirmation.
/// - `401 Unauthorized` / `403 Forbidden`: Missing or invalid token.
/// - `500 Internal Server Error`: Persistence failure.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
    task_data: web::Json<TaskInput>,
    _user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    store::tasks::update(&pool, task_id.into_inner(), &task_data).await?;

    Ok(HttpResponse::Ok().body("Task updated successfully"))
}

/// Deletes a task.
///
/// Like update, deleting a non-existent id succeeds with zero rows affected.
///
/// ## Responses:
/// - `200 OK`: Plain text confirmation.
/// - `401 Unauthorized` / `403 Forbidden`: Missing or invalid token.
/// - `500 Internal Server Error`: Persistence failure.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
    _user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    store::tasks::delete(&pool, task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().body("Task deleted successfully"))
}
