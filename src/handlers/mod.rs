pub mod auth_handler;
pub mod quiz_handler;

use actix_web::web;

pub use auth_handler::{login, logout, refresh_token, register};
pub use quiz_handler::{
    delete_quiz, generate_quiz, get_quiz, health_check, health_check_ready, list_quizzes,
    update_quiz,
};

/// Registers every route; shared between the server and the test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(refresh_token)
        .service(logout)
        .service(generate_quiz)
        .service(list_quizzes)
        .service(get_quiz)
        .service(update_quiz)
        .service(delete_quiz)
        .service(health_check)
        .service(health_check_ready);
}
