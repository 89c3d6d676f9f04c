use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::password::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{domain::User, dto::request::RegisterRequest},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new user. Nothing is persisted unless the passwords
    /// match and both username and email are still free.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if request.password != request.confirmed_password {
            return Err(AppError::ValidationError(
                "Passwords do not match".to_string(),
            ));
        }

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ValidationError(
                "This email already exists".to_string(),
            ));
        }

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(
                "This username is already taken".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(&request.username, &request.email, &password_hash);

        let created = self.repository.create(user).await?;
        log::info!("Registered user {}", created.username);

        Ok(created)
    }

    /// Credential check. Unknown username and wrong password both map to
    /// the same `InvalidCredentials`, leaking nothing about which failed.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Resolves a token subject to its user record.
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }
}
