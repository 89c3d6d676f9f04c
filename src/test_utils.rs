#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        auth::JwtService,
        config::Config,
        models::domain::User,
        repositories::{MockQuizRepository, MockUserRepository},
        services::{MockQuizGenerator, QuizService, UserService},
    };

    /// App state whose user store yields the given user for any id lookup.
    pub fn state_with_user(user: User) -> AppState {
        let mut user_repository = MockUserRepository::new();
        user_repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        state_from_user_repository(user_repository)
    }

    /// App state whose user store is empty.
    pub fn state_without_users() -> AppState {
        let mut user_repository = MockUserRepository::new();
        user_repository.expect_find_by_id().returning(|_| Ok(None));

        state_from_user_repository(user_repository)
    }

    fn state_from_user_repository(user_repository: MockUserRepository) -> AppState {
        let config = Config::test_config();
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.access_token_expiration_hours,
            config.refresh_token_expiration_hours,
        ));

        AppState {
            user_service: Arc::new(UserService::new(Arc::new(user_repository))),
            quiz_service: Arc::new(QuizService::new(
                Arc::new(MockQuizRepository::new()),
                Arc::new(MockQuizGenerator::new()),
            )),
            jwt_service,
            config: Arc::new(config),
        }
    }
}
