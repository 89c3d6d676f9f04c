use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

/// Resource-level check, independent of any query filtering: only the
/// owner may act on a single quiz.
pub fn require_owner(user_id: &str, quiz: &Quiz) -> AppResult<()> {
    if quiz.owner_id != user_id {
        return Err(AppError::Forbidden(
            "You can only access your own quizzes".to_string(),
        ));
    }
    Ok(())
}
