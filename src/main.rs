use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use vidquiz_server::{
    app_state::AppState, auth::CookieAuth, config::Config, db::Database, handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    let db = Database::connect(&config)
        .await
        .expect("failed to connect to MongoDB");
    let state = AppState::new(config.clone(), &db)
        .await
        .expect("failed to initialise application state");

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        // Credentialed CORS: the browser only attaches the token cookies
        // when the allowed origin is explicit, not a wildcard.
        let cors = Cors::default()
            .allowed_origin(&config.cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(db.clone()))
            .wrap(CookieAuth)
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
