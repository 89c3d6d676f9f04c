use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::User;

fn timestamps(lifetime_hours: i64) -> (usize, usize) {
    let now = Utc::now();
    let expiry = now + Duration::hours(lifetime_hours);
    (now.timestamp() as usize, expiry.timestamp() as usize)
}

/// Access-token claims. Carries enough identity to serve most requests
/// without a user lookup, though the middleware still resolves the subject
/// so deleted accounts lose access immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(user: &User, lifetime_hours: i64) -> Self {
        let (iat, exp) = timestamps(lifetime_hours);

        Self {
            sub: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            exp,
            iat,
        }
    }
}

/// Refresh-token claims. Deliberately minimal: a subject and a type tag.
/// The tag is what stops an access token being replayed through the
/// refresh endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub token_type: String,
    pub exp: usize,
    pub iat: usize,
}

impl RefreshClaims {
    pub fn new(user_id: &str, lifetime_hours: i64) -> Self {
        let (iat, exp) = timestamps(lifetime_hours);

        Self {
            sub: user_id.to_string(),
            token_type: "refresh".to_string(),
            exp,
            iat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_carry_identity() {
        let user = User::test_user("johndoe", "john@example.com");
        let claims = Claims::new(&user, 1);

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "johndoe");
        assert_eq!(claims.email, "john@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_claims_are_type_tagged() {
        let claims = RefreshClaims::new("user-1", 168);

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.token_type, "refresh");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_longer_lifetime_expires_later() {
        let short = RefreshClaims::new("user-1", 1);
        let long = RefreshClaims::new("user-1", 168);
        assert!(long.exp > short.exp);
    }
}
