use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;

mod auth;
mod config;
mod controllers;
mod db;
mod models;
mod parser;
mod session;

use config::Config;
use db::Database;
use session::SessionStore;

pub struct AppState {
    pub db: Arc<Database>,
    pub sessions: Arc<SessionStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).expect("Failed to initialize database");
    let db = Arc::new(db);

    let sessions = Arc::new(SessionStore::new());

    log::info!("Starting AutoLearn JP server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                db: Arc::clone(&db),
                sessions: Arc::clone(&sessions),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::auth::config)
            .configure(controllers::words::config)
            .default_service(web::route().to(controllers::not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
