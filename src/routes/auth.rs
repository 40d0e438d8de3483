use crate::{
    auth::{generate_token, hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest},
    error::AppError,
    store,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// Register a new user
///
/// Hashes the password and inserts the user row. A duplicate email violates
/// the store's unique constraint and surfaces as a 500.
#[post("/register")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    let password_hash = hash_password(&register_data.password)?;

    store::users::insert(
        &pool,
        &register_data.username,
        &register_data.email,
        &password_hash,
    )
    .await?;

    Ok(HttpResponse::Created().body("User registered successfully"))
}

/// Login user
///
/// Looks up the user by email, verifies the password against the stored hash,
/// and returns a signed session token. An unknown email yields 404 and a
/// password mismatch 400, keeping the two failure kinds distinguishable.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let user = store::users::find_by_email(&pool, &login_data.email).await?;

    match user {
        Some(user) => {
            if verify_password(&login_data.password, &user.password)? {
                let token = generate_token(user.id)?;
                Ok(HttpResponse::Ok().json(AuthResponse { token }))
            } else {
                Err(AppError::BadRequest("Invalid credentials".into()))
            }
        }
        None => Err(AppError::NotFound("User not found".into())),
    }
}
