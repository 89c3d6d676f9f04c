use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;

/// A quiz and its questions live in one document so creating the two
/// together is a single atomic insert.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub owner_id: String, // immutable after creation
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        owner_id: &str,
        title: &str,
        description: &str,
        video_url: Option<String>,
        questions: Vec<Question>,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            video_url,
            questions,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }
}
