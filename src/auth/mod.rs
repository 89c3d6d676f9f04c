pub mod claims;
pub mod cookies;
pub mod guard;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::{Claims, RefreshClaims};
pub use cookies::{auth_cookie, removal_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
pub use guard::require_owner;
pub use jwt::JwtService;
pub use middleware::{AuthenticatedUser, CookieAuth, CurrentUser};
pub use password::{hash_password, verify_password};
