use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: i64,
}

impl ContactMessage {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: None,
            name,
            email,
            message,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
