use actix_web::{HttpResponse, web};

use crate::handlers::admin_handlers::{get_messages, get_visitors, login};
use crate::handlers::contact_handlers::submit_message;
use crate::handlers::health_handlers::health_page;
use crate::handlers::portfolio_handlers::{
    create_certificate, create_experience, create_project, delete_certificate, delete_experience,
    delete_project, get_portfolio, update_certificate, update_experience, update_project,
    update_user_info,
};
use crate::handlers::track_handlers::track_visit;
use crate::middlewares::authmw::JwtAuth;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig, jwt_secret: &str) {
    cfg.route("/health", web::get().to(health_page));
    cfg.service(
        web::scope("/api")
            // Public routes - no auth required
            .route("/track", web::post().to(track_visit))
            .route("/contact", web::post().to(submit_message))
            .service(
                web::scope("/admin")
                    .route("/login", web::post().to(login))
                    .service(
                        web::scope("")
                            .wrap(JwtAuth::new(jwt_secret))
                            .route("/visitors", web::get().to(get_visitors))
                            .route("/messages", web::get().to(get_messages)),
                    ),
            )
            .service(
                web::scope("/portfolio")
                    .route("", web::get().to(get_portfolio))
                    .service(
                        web::scope("")
                            .wrap(JwtAuth::new(jwt_secret))
                            .route("/user-info", web::put().to(update_user_info))
                            .route("/projects", web::post().to(create_project))
                            .route("/projects/{id}", web::put().to(update_project))
                            .route("/projects/{id}", web::delete().to(delete_project))
                            .route("/experiences", web::post().to(create_experience))
                            .route("/experiences/{id}", web::put().to(update_experience))
                            .route("/experiences/{id}", web::delete().to(delete_experience))
                            .route("/certificates", web::post().to(create_certificate))
                            .route("/certificates/{id}", web::put().to(update_certificate))
                            .route("/certificates/{id}", web::delete().to(delete_certificate)),
                    ),
            ),
    );
    // Catch-all so unmatched routes still answer JSON
    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}
