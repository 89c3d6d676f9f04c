use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub confirmed_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(url(message = "Invalid URL"))]
    pub url: String,
}

/// Only title and description are writable on an existing quiz; absent
/// fields keep their current values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_register_request() {
        let request = RegisterRequest {
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            password: "correct horse".to_string(),
            confirmed_password: "correct horse".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let request = RegisterRequest {
            username: "johndoe".to_string(),
            email: "invalid-email".to_string(),
            password: "correct horse".to_string(),
            confirmed_password: "correct horse".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_username_too_short() {
        let request = RegisterRequest {
            username: "ab".to_string(),
            email: "john@example.com".to_string(),
            password: "correct horse".to_string(),
            confirmed_password: "correct horse".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_generate_request_rejects_non_url() {
        let request = GenerateQuizRequest {
            url: "not a url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_partial_fields() {
        let request = UpdateQuizRequest {
            title: Some("New title".to_string()),
            description: None,
        };
        assert!(request.validate().is_ok());
    }
}
