use actix_web::{HttpRequest, HttpResponse, http, web};
use serde::Deserialize;

use crate::models::visitor::InteractionType;
use crate::state::app_state::AppState;
use crate::utils::client_ip::resolve_client_ip;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub path: String,
    pub interaction_type: Option<InteractionType>,
}

/// Record a page view. Always acknowledges with 200: the tracker runs in a
/// detached task whose outcome is logged and never reaches this response.
pub async fn track_visit(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    web::Json(body): web::Json<TrackRequest>,
) -> HttpResponse {
    let ip = resolve_client_ip(&req);
    let user_agent = req
        .headers()
        .get(http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let route_path = req.path().to_string();

    let store = app_state.visitors.clone();
    let tracked_path = body.path.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) = store
            .record_visit(&ip, user_agent.as_deref(), &route_path, &tracked_path)
            .await
        {
            log::error!("visitor tracking failed: {:#}", e);
        }
    });

    HttpResponse::Ok().json(serde_json::json!({
        "message": "ok",
        "tracked": {
            "path": body.path,
            "type": body.interaction_type.unwrap_or_default(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_request_accepts_camel_case_body() {
        let req: TrackRequest =
            serde_json::from_str(r#"{"path":"/","interactionType":"view"}"#).unwrap();
        assert_eq!(req.path, "/");
        assert_eq!(req.interaction_type, Some(InteractionType::View));
    }

    #[test]
    fn interaction_type_is_optional() {
        let req: TrackRequest = serde_json::from_str(r#"{"path":"/"}"#).unwrap();
        assert!(req.interaction_type.is_none());
    }
}
