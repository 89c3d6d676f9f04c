use actix_web::{delete, get, post, route, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    db::Database,
    errors::AppError,
    models::dto::{
        request::{GenerateQuizRequest, UpdateQuizRequest},
        response::QuizDto,
    },
};

#[post("/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state
        .quiz_service
        .generate_quiz(&auth.0.user.id, &request.url)
        .await?;

    Ok(HttpResponse::Created().json(QuizDto::from(quiz)))
}

#[get("/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes(&auth.0.user.id).await?;

    let dtos: Vec<QuizDto> = quizzes.into_iter().map(QuizDto::from).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .get_owned_quiz(&id, &auth.0.user.id)
        .await?;

    Ok(HttpResponse::Ok().json(QuizDto::from(quiz)))
}

// PUT and PATCH share the partial-update semantics: only title and
// description are writable.
#[route("/quizzes/{id}", method = "PUT", method = "PATCH")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&id, &auth.0.user.id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(QuizDto::from(quiz)))
}

#[delete("/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .quiz_service
        .delete_quiz(&id, &auth.0.user.id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Liveness: answers as long as the process is up, no dependency checks.
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "alive"
    }))
}

/// Readiness: pings the database and reports 503 until it answers. The
/// handle is optional so a deployment without a registered database (or a
/// dropped connection at startup) degrades to not-ready instead of 500.
#[get("/health/ready")]
pub async fn health_check_ready(db: Option<web::Data<Database>>) -> HttpResponse {
    let mongo_ok = match db {
        Some(db) => db.health_check().await.is_ok(),
        None => false,
    };

    let body = serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": if mongo_ok { "ready" } else { "not_ready" },
        "dependencies": {
            "mongodb": if mongo_ok { "ok" } else { "error" }
        }
    });

    if mongo_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_liveness_names_the_service() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["service"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["status"], "alive");
    }

    #[actix_web::test]
    async fn test_readiness_reports_unavailable_without_database() {
        let app = test::init_service(App::new().service(health_check_ready)).await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["dependencies"]["mongodb"], "error");
    }
}
