use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::cookies::{auth_cookie, removal_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::{DetailResponse, LoginResponse, RefreshResponse},
    },
};

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    state.user_service.register(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(DetailResponse::new("User created successfully!")))
}

/// Issues the access/refresh pair as HttpOnly cookies. The body carries a
/// public user projection, never the tokens themselves.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?;

    let access = state.jwt_service.create_token(&user)?;
    let refresh = state.jwt_service.create_refresh_token(&user.id)?;

    log::info!("User {} logged in", user.username);

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(ACCESS_TOKEN_COOKIE, access))
        .cookie(auth_cookie(REFRESH_TOKEN_COOKIE, refresh))
        .json(LoginResponse {
            detail: "Login successfully!".to_string(),
            user: user.into(),
        }))
}

/// Re-issues the access token from the refresh cookie. The refresh token
/// itself is not rotated. A missing cookie is a different failure than an
/// invalid one; both surface as 400 with distinct codes.
#[post("/token/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let cookie = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .ok_or(AppError::MissingRefreshToken)?;

    let claims = state.jwt_service.validate_refresh_token(cookie.value())?;

    let user = state
        .user_service
        .get_user_by_id(&claims.sub)
        .await
        .map_err(|_| AppError::InvalidRefreshToken)?;

    let access = state.jwt_service.create_token(&user)?;

    log::info!("Token refreshed for user {}", user.username);

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(ACCESS_TOKEN_COOKIE, access.clone()))
        .json(RefreshResponse {
            detail: "Token refreshed".to_string(),
            access,
        }))
}

/// Logout is idempotent and infallible: it deletes both token cookies no
/// matter what the request carried. Tokens already issued stay
/// cryptographically valid until they expire; there is no server-side
/// revocation list.
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie(ACCESS_TOKEN_COOKIE))
        .cookie(removal_cookie(REFRESH_TOKEN_COOKIE))
        .json(DetailResponse::new(
            "Log-out successful! Both token cookies have been deleted.",
        ))
}
