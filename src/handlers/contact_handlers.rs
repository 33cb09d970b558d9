use actix_web::{HttpResponse, web};
use serde::Deserialize;
use validator::Validate;

use crate::state::app_state::AppState;

#[derive(Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

pub async fn submit_message(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<ContactRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match app_state
        .contacts
        .create(req.name, req.email, req.message)
        .await
    {
        Ok(contact) => HttpResponse::Created().json(contact),
        Err(e) => {
            log::error!("failed to store contact message: {:#}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Error sending message" }))
        }
    }
}
