use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{claims::Claims, cookies::ACCESS_TOKEN_COOKIE},
    errors::AppError,
    models::domain::User,
};

/// The authenticated principal: set once the access token cookie has been
/// validated and its subject resolved to a stored user.
#[derive(Clone)]
pub struct CurrentUser {
    pub user: User,
    pub claims: Claims,
}

/// Passive cookie authentication. Reads the `access_token` cookie when
/// present and attaches the principal on success. Absent, expired or
/// otherwise invalid tokens leave the request anonymous; whether an
/// anonymous request is acceptable is each route's decision.
pub struct CookieAuth;

impl<S, B> Transform<S, ServiceRequest> for CookieAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CookieAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CookieAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct CookieAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CookieAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            attach_principal(&req).await;

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn attach_principal(req: &ServiceRequest) {
    let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) else {
        return;
    };
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        return;
    };

    let claims = match state.jwt_service.validate_token(cookie.value()) {
        Ok(claims) => claims,
        Err(_) => return, // failed validation stays anonymous
    };

    let user = match state.user_service.get_user_by_id(&claims.sub).await {
        Ok(user) => user,
        Err(_) => return, // subject no longer resolves to a user
    };

    req.extensions_mut().insert(CurrentUser { user, claims });
}

/// Extractor for routes that refuse anonymous access.
pub struct AuthenticatedUser(pub CurrentUser);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let principal = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()));

        ready(principal.map(AuthenticatedUser))
    }
}
