use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoUserRepository},
    services::{OpenAiQuizGenerator, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, db: &Database) -> AppResult<Self> {
        let user_repository = Arc::new(MongoUserRepository::new(db));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let quiz_repository = Arc::new(MongoQuizRepository::new(db));
        quiz_repository.ensure_indexes().await?;
        let generator = Arc::new(OpenAiQuizGenerator::new(&config));
        let quiz_service = Arc::new(QuizService::new(quiz_repository, generator));

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.access_token_expiration_hours,
            config.refresh_token_expiration_hours,
        ));

        Ok(Self {
            user_service,
            quiz_service,
            jwt_service,
            config: Arc::new(config),
        })
    }
}
