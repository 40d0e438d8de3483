pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Payload for a user login request. Fields are trusted present; a missing
/// field is rejected at deserialization, nothing further is validated.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response structure after a successful login: the signed session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payloads_require_all_fields() {
        let missing_password = serde_json::json!({ "email": "a@x.com" });
        assert!(serde_json::from_value::<LoginRequest>(missing_password).is_err());

        let complete_login = serde_json::json!({ "email": "a@x.com", "password": "p1" });
        assert!(serde_json::from_value::<LoginRequest>(complete_login).is_ok());

        let missing_email = serde_json::json!({ "username": "a", "password": "p1" });
        assert!(serde_json::from_value::<RegisterRequest>(missing_email).is_err());

        let complete_register =
            serde_json::json!({ "username": "a", "email": "a@x.com", "password": "p1" });
        assert!(serde_json::from_value::<RegisterRequest>(complete_register).is_ok());
    }
}
