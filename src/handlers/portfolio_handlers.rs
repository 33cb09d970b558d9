use actix_web::{HttpResponse, web};
use validator::Validate;

use crate::models::portfolio::{Certificate, Experience, Project, UserInfo};
use crate::state::app_state::AppState;

fn storage_error(context: &str, e: anyhow::Error) -> HttpResponse {
    log::error!("{}: {:#}", context, e);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": format!("Failed to {}", context)
    }))
}

/// Public content read. Materializes the default document on first access.
pub async fn get_portfolio(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.portfolio.get_or_create().await {
        Ok(portfolio) => HttpResponse::Ok().json(portfolio),
        Err(e) => storage_error("fetch portfolio data", e),
    }
}

pub async fn update_user_info(
    app_state: web::Data<AppState>,
    web::Json(user_info): web::Json<UserInfo>,
) -> HttpResponse {
    if let Err(errors) = user_info.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state.portfolio.update_user_info(user_info).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => storage_error("update user info", e),
    }
}

pub async fn create_project(
    app_state: web::Data<AppState>,
    web::Json(project): web::Json<Project>,
) -> HttpResponse {
    if let Err(errors) = project.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state.portfolio.add_project(project).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => storage_error("create project", e),
    }
}

pub async fn update_project(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    web::Json(project): web::Json<Project>,
) -> HttpResponse {
    if let Err(errors) = project.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state
        .portfolio
        .update_project(&path.into_inner(), project)
        .await
    {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Project not found" }))
        }
        Err(e) => storage_error("update project", e),
    }
}

pub async fn delete_project(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    match app_state.portfolio.remove_project(&path.into_inner()).await {
        Ok(true) => HttpResponse::Ok()
            .json(serde_json::json!({ "message": "Project deleted successfully" })),
        Ok(false) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Project not found" }))
        }
        Err(e) => storage_error("delete project", e),
    }
}

pub async fn create_experience(
    app_state: web::Data<AppState>,
    web::Json(experience): web::Json<Experience>,
) -> HttpResponse {
    if let Err(errors) = experience.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state.portfolio.add_experience(experience).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => storage_error("create experience", e),
    }
}

pub async fn update_experience(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    web::Json(experience): web::Json<Experience>,
) -> HttpResponse {
    if let Err(errors) = experience.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state
        .portfolio
        .update_experience(&path.into_inner(), experience)
        .await
    {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Experience not found" }))
        }
        Err(e) => storage_error("update experience", e),
    }
}

pub async fn delete_experience(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    match app_state
        .portfolio
        .remove_experience(&path.into_inner())
        .await
    {
        Ok(true) => HttpResponse::Ok()
            .json(serde_json::json!({ "message": "Experience deleted successfully" })),
        Ok(false) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Experience not found" }))
        }
        Err(e) => storage_error("delete experience", e),
    }
}

pub async fn create_certificate(
    app_state: web::Data<AppState>,
    web::Json(certificate): web::Json<Certificate>,
) -> HttpResponse {
    if let Err(errors) = certificate.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state.portfolio.add_certificate(certificate).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => storage_error("create certificate", e),
    }
}

pub async fn update_certificate(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    web::Json(certificate): web::Json<Certificate>,
) -> HttpResponse {
    if let Err(errors) = certificate.validate() {
        return HttpResponse::BadRequest().json(errors);
    }
    match app_state
        .portfolio
        .update_certificate(&path.into_inner(), certificate)
        .await
    {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Certificate not found" }))
        }
        Err(e) => storage_error("update certificate", e),
    }
}

pub async fn delete_certificate(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    match app_state
        .portfolio
        .remove_certificate(&path.into_inner())
        .await
    {
        Ok(true) => HttpResponse::Ok()
            .json(serde_json::json!({ "message": "Certificate deleted successfully" })),
        Ok(false) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Certificate not found" }))
        }
        Err(e) => storage_error("delete certificate", e),
    }
}
