#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use actix_web::cookie::Cookie;
use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use vidquiz_server::{
    app_state::AppState,
    auth::{auth_cookie, JwtService, ACCESS_TOKEN_COOKIE},
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    models::dto::request::RegisterRequest,
    repositories::{QuizRepository, UserRepository},
    services::{GeneratedQuestion, GeneratedQuiz, QuizGenerator, QuizService, UserService},
};

/// In-memory `UserRepository` backed by a `HashMap`, mirroring the unique
/// indexes the Mongo implementation relies on.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        let clash = users
            .values()
            .any(|u| u.username == user.username || u.email == user.email);
        if clash {
            return Err(AppError::DatabaseError("duplicate key".to_string()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

/// In-memory `QuizRepository` counterpart.
#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

impl InMemoryQuizRepository {
    pub async fn count(&self) -> usize {
        self.quizzes.read().await.len()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::DatabaseError("duplicate key".to_string()));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut owned: Vec<Quiz> = quizzes
            .values()
            .filter(|q| q.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(owned)
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if !quizzes.contains_key(&quiz.id) {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.remove(id).is_none() {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }
        Ok(())
    }
}

/// Generator stub that replays a fixed outcome instead of calling out.
pub struct StubQuizGenerator {
    result: AppResult<GeneratedQuiz>,
}

impl StubQuizGenerator {
    pub fn new(result: AppResult<GeneratedQuiz>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl QuizGenerator for StubQuizGenerator {
    async fn generate(&self, _video_url: &str) -> AppResult<GeneratedQuiz> {
        self.result.clone()
    }
}

pub fn two_question_quiz() -> GeneratedQuiz {
    GeneratedQuiz {
        title: "Rust Ownership Explained".to_string(),
        description: "Covers moves, borrows and lifetimes.".to_string(),
        questions: vec![
            GeneratedQuestion {
                question_title: "What happens when a value is moved?".to_string(),
                question_options: vec![
                    "It is copied".to_string(),
                    "The old binding is invalidated".to_string(),
                    "It is dropped".to_string(),
                    "Nothing".to_string(),
                ],
                answer: "The old binding is invalidated".to_string(),
            },
            GeneratedQuestion {
                question_title: "How many mutable borrows may coexist?".to_string(),
                question_options: vec![
                    "Zero".to_string(),
                    "One".to_string(),
                    "Two".to_string(),
                    "Unlimited".to_string(),
                ],
                answer: "One".to_string(),
            },
        ],
    }
}

fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "vidquiz_test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: "http://localhost:3000".to_string(),
        jwt_secret: SecretString::from("integration-test-secret"),
        access_token_expiration_hours: 1,
        refresh_token_expiration_hours: 168,
        generator_api_base: "http://localhost:9999/v1".to_string(),
        generator_api_key: SecretString::from("test-key"),
        generator_model: "gpt-4o-mini".to_string(),
    }
}

/// Fully wired application state over in-memory repositories, with handles
/// kept on the repositories so tests can assert on stored data directly.
pub struct TestContext {
    pub state: AppState,
    pub user_repository: Arc<InMemoryUserRepository>,
    pub quiz_repository: Arc<InMemoryQuizRepository>,
}

pub fn test_context(generator_result: AppResult<GeneratedQuiz>) -> TestContext {
    let config = test_config();
    let user_repository = Arc::new(InMemoryUserRepository::default());
    let quiz_repository = Arc::new(InMemoryQuizRepository::default());
    let generator = Arc::new(StubQuizGenerator::new(generator_result));

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt_secret,
        config.access_token_expiration_hours,
        config.refresh_token_expiration_hours,
    ));
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let quiz_service = Arc::new(QuizService::new(quiz_repository.clone(), generator));

    TestContext {
        state: AppState {
            user_service,
            quiz_service,
            jwt_service,
            config: Arc::new(config),
        },
        user_repository,
        quiz_repository,
    }
}

/// Registers a user through the service layer, bypassing the HTTP surface.
pub async fn create_user(ctx: &TestContext, username: &str, password: &str) -> User {
    ctx.state
        .user_service
        .register(RegisterRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: password.to_string(),
            confirmed_password: password.to_string(),
        })
        .await
        .expect("user registration failed")
}

/// Mints a valid access-token cookie for `user`, as /login would set it.
pub fn access_cookie(ctx: &TestContext, user: &User) -> Cookie<'static> {
    let token = ctx
        .state
        .jwt_service
        .create_token(user)
        .expect("token creation failed");
    auth_cookie(ACCESS_TOKEN_COOKIE, token)
}
