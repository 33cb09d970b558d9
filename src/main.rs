mod config;
mod db;
mod handlers;
mod middlewares;
mod models;
mod routes;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use dotenv::dotenv;
use env_logger::Env;
use mongodb::bson::doc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::db::contacts::ContactStore;
use crate::db::mongodb::get_database;
use crate::db::portfolio::PortfolioStore;
use crate::db::visitors::VisitorStore;
use crate::middlewares::rate_limit::{RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW, RateLimit};
use crate::routes::routes::init_routes;
use crate::state::app_state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let db = match get_database(&config.mongodb_uri).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("invalid MongoDB configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // The driver connects lazily; confirm connectivity up front but keep
    // serving if the database is down. Content and tracking endpoints fail
    // closed until it comes back.
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => log::info!("connected to MongoDB"),
        Err(e) => log::warn!("MongoDB unreachable at startup: {}", e),
    }

    let app_state = web::Data::new(AppState {
        visitors: VisitorStore::new(&db),
        contacts: ContactStore::new(&db),
        portfolio: PortfolioStore::new(&db),
        db,
        config: config.clone(),
        started_at: Instant::now(),
    });

    // One shared window map across all workers
    let rate_limit = RateLimit::new(RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW);

    let port = config.port;
    log::info!("server running on port {}", port);

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        let jwt_secret = config.jwt_secret.clone();
        App::new()
            .wrap(logger)
            .wrap(rate_limit.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(|cfg| init_routes(cfg, &jwt_secret))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
