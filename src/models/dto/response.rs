use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Question, Quiz, User};

/// Public projection of a user; the password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: &str) -> Self {
        DetailResponse {
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub detail: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub detail: String,
    pub access: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub question_title: String,
    pub question_options: Vec<String>,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            question_title: question.question_title,
            question_options: question.question_options,
            answer: question.answer,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub questions: Vec<QuestionDto>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            owner: quiz.owner_id,
            title: quiz.title,
            description: quiz.description,
            video_url: quiz.video_url,
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
            questions: quiz.questions.into_iter().map(QuestionDto::from).collect(),
        }
    }
}
