use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub jwt_secret: SecretString,
    pub access_token_expiration_hours: i64,
    pub refresh_token_expiration_hours: i64,
    pub generator_api_base: String,
    pub generator_api_key: SecretString,
    pub generator_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "vidquiz-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            access_token_expiration_hours: env::var("ACCESS_TOKEN_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(1),
            refresh_token_expiration_hours: env::var("REFRESH_TOKEN_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(168),
            generator_api_base: env::var("GENERATOR_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            generator_api_key: SecretString::from(
                env::var("GENERATOR_API_KEY").unwrap_or_else(|_| "generator_api_key".to_string()),
            ),
            generator_model: env::var("GENERATOR_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();
        let generator_key = self.generator_api_key.expose_secret();

        if jwt_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }

        if generator_key == "generator_api_key" {
            panic!(
                "FATAL: GENERATOR_API_KEY is using default value! Set GENERATOR_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "vidquiz-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            access_token_expiration_hours: 1,
            refresh_token_expiration_hours: 168,
            generator_api_base: "http://localhost:1234/v1".to_string(),
            generator_api_key: SecretString::from("test_api_key".to_string()),
            generator_model: "test-model".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(config.access_token_expiration_hours > 0);
        assert!(
            config.refresh_token_expiration_hours > config.access_token_expiration_hours,
            "refresh tokens must outlive access tokens"
        );
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_conn_string, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db_name, "vidquiz-test");
        assert_eq!(config.access_token_expiration_hours, 1);
        assert_eq!(config.refresh_token_expiration_hours, 168);
    }
}
