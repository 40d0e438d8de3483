use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Input payload for creating or updating a task.
///
/// Both fields are required; a missing field is rejected at deserialization.
/// Tasks are a shared list and carry no owner, so the input has no user field.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
}

/// A task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Store-assigned identifier.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Set once by the store at insert time; updates do not touch it.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_input_requires_both_fields() {
        let missing_description = serde_json::json!({ "title": "t1" });
        assert!(serde_json::from_value::<TaskInput>(missing_description).is_err());

        let missing_title = serde_json::json!({ "description": "d1" });
        assert!(serde_json::from_value::<TaskInput>(missing_title).is_err());

        let complete = serde_json::json!({ "title": "t1", "description": "d1" });
        let input: TaskInput = serde_json::from_value(complete).unwrap();
        assert_eq!(input.title, "t1");
        assert_eq!(input.description, "d1");
    }

    #[test]
    fn test_task_serializes_timestamp() {
        let task = Task {
            id: 1,
            title: "t1".to_string(),
            description: "d1".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json["created_at"].is_string());
    }
}
