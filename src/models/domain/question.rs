use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Every question carries exactly this many answer options.
pub const QUESTION_OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question_title: String,
    pub question_options: Vec<String>,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Builds a question, rejecting inputs that break the option-count or
    /// answer-membership invariants before anything reaches the store.
    pub fn new(question_title: &str, question_options: Vec<String>, answer: &str) -> AppResult<Self> {
        Self::validate(&question_options, answer)?;

        Ok(Question {
            id: Uuid::new_v4().to_string(),
            question_title: question_title.to_string(),
            question_options,
            answer: answer.to_string(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        })
    }

    pub fn validate(question_options: &[String], answer: &str) -> AppResult<()> {
        if question_options.len() != QUESTION_OPTION_COUNT {
            return Err(AppError::ValidationError(format!(
                "A question must have exactly {} options, got {}",
                QUESTION_OPTION_COUNT,
                question_options.len()
            )));
        }

        if !question_options.iter().any(|option| option == answer) {
            return Err(AppError::ValidationError(
                "Answer must be one of the question options".to_string(),
            ));
        }

        Ok(())
    }
}
