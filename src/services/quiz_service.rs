use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::guard::require_owner,
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz},
        dto::request::UpdateQuizRequest,
    },
    repositories::QuizRepository,
    services::generator::QuizGenerator,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    generator: Arc<dyn QuizGenerator>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>, generator: Arc<dyn QuizGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// List is owner-scoped at the query; no per-resource guard needed.
    pub async fn list_quizzes(&self, owner_id: &str) -> AppResult<Vec<Quiz>> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Single-resource fetch with the ownership guard applied on top of
    /// the lookup.
    pub async fn get_owned_quiz(&self, id: &str, owner_id: &str) -> AppResult<Quiz> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        require_owner(owner_id, &quiz)?;

        Ok(quiz)
    }

    /// Updates title and description only; every other field keeps its
    /// stored value.
    pub async fn update_quiz(
        &self,
        id: &str,
        owner_id: &str,
        request: UpdateQuizRequest,
    ) -> AppResult<Quiz> {
        request.validate()?;

        let mut quiz = self.get_owned_quiz(id, owner_id).await?;

        if let Some(title) = request.title {
            quiz.title = title;
        }
        if let Some(description) = request.description {
            quiz.description = description;
        }
        quiz.updated_at = Some(Utc::now());

        self.repository.update(quiz).await
    }

    pub async fn delete_quiz(&self, id: &str, owner_id: &str) -> AppResult<()> {
        let quiz = self.get_owned_quiz(id, owner_id).await?;
        self.repository.delete(&quiz.id).await
    }

    /// Generates a quiz from a video URL via the external collaborator and
    /// persists it, questions included, as one atomic unit. Generated
    /// content that breaks the question invariants is a generation failure,
    /// not a partial save.
    pub async fn generate_quiz(&self, owner_id: &str, video_url: &str) -> AppResult<Quiz> {
        let generated = self.generator.generate(video_url).await?;

        let mut questions = Vec::with_capacity(generated.questions.len());
        for generated_question in generated.questions {
            let question = Question::new(
                &generated_question.question_title,
                generated_question.question_options,
                &generated_question.answer,
            )
            .map_err(|e| AppError::GenerationFailed(format!("Generated question invalid: {}", e)))?;
            questions.push(question);
        }

        let quiz = Quiz::new(
            owner_id,
            &generated.title,
            &generated.description,
            Some(video_url.to_string()),
            questions,
        );

        let created = self.repository.create(quiz).await?;
        log::info!(
            "Generated quiz '{}' with {} questions for user {}",
            created.title,
            created.questions.len(),
            owner_id
        );

        Ok(created)
    }
}
