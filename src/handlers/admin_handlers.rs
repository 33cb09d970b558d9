use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::state::app_state::AppState;
use crate::utils::jwt::{ADMIN_SUBJECT, create_token};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Single-credential login. The caller learns nothing beyond pass/fail.
pub async fn login(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<LoginRequest>,
) -> HttpResponse {
    let password_matches =
        match bcrypt::verify(&req.password, &app_state.config.admin_password_hash) {
            Ok(matches) => matches,
            Err(e) => {
                log::error!("password verification failed: {}", e);
                return HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "Login failed" }));
            }
        };

    if !password_matches {
        return HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Invalid credentials" }));
    }

    match create_token(ADMIN_SUBJECT, &app_state.config.jwt_secret) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(e) => {
            log::error!("token generation failed: {:#}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Login failed" }))
        }
    }
}

pub async fn get_visitors(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.visitors.newest_first().await {
        Ok(visitors) => HttpResponse::Ok().json(visitors),
        Err(e) => {
            log::error!("failed to fetch visitors: {:#}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Error fetching visitors" }))
        }
    }
}

pub async fn get_messages(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.contacts.newest_first().await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => {
            log::error!("failed to fetch messages: {:#}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Error fetching messages" }))
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn stored_hash_round_trips() {
        let hash = bcrypt::hash("correct horse", bcrypt::DEFAULT_COST).unwrap();
        assert!(bcrypt::verify("correct horse", &hash).unwrap());
        assert!(!bcrypt::verify("wrong horse", &hash).unwrap());
    }
}
