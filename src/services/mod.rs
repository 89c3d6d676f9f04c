pub mod generator;
pub mod quiz_service;
pub mod user_service;

pub use generator::{GeneratedQuestion, GeneratedQuiz, OpenAiQuizGenerator, QuizGenerator};
pub use quiz_service::QuizService;
pub use user_service::UserService;

#[cfg(test)]
pub use generator::MockQuizGenerator;
