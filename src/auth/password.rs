use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{AppError, AppResult};

pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed: &str) -> AppResult<bool> {
    verify(password, hashed)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))
}
