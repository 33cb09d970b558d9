use std::future::{Ready, ready};

use actix_web::{
    Error, HttpMessage, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    error::InternalError,
    http::header,
};
use futures_util::future::LocalBoxFuture;

use crate::utils::jwt::validate_token;

/// Bearer-token gate for admin routes. The signing secret is injected at
/// construction; a request only passes with a validly signed, unexpired
/// token. Signature and expiry failures are indistinguishable to the caller.
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = JwtAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service,
            secret: self.secret.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: S,
    secret: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Get token from Authorization header
        let auth_header = match req.headers().get(header::AUTHORIZATION) {
            Some(header) => header,
            None => {
                return Box::pin(async move { Err(unauthorized("No token provided")) });
            }
        };

        let auth_header_str = match auth_header.to_str() {
            Ok(header_str) => header_str,
            Err(_) => {
                return Box::pin(async move { Err(unauthorized("Invalid token")) });
            }
        };

        let token = match auth_header_str.strip_prefix("Bearer ") {
            Some(token) => token,
            None => {
                return Box::pin(async move { Err(unauthorized("Invalid token")) });
            }
        };

        // Bad signature and expired tokens fail the same way on purpose.
        let claims = match validate_token(token, &self.secret) {
            Ok(claims) => claims,
            Err(_) => {
                return Box::pin(async move { Err(unauthorized("Invalid token")) });
            }
        };

        // Store the principal in request extensions for downstream handlers
        req.extensions_mut().insert(claims);

        Box::pin(self.service.call(req))
    }
}

fn unauthorized(message: &'static str) -> Error {
    let response = HttpResponse::Unauthorized().json(serde_json::json!({ "error": message }));
    InternalError::from_response(message, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::{ADMIN_SUBJECT, create_token};
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    const SECRET: &str = "middleware-test-secret";

    macro_rules! protected_app {
        () => {
            test::init_service(
                App::new().service(
                    web::scope("")
                        .wrap(JwtAuth::new(SECRET))
                        .route("/guarded", web::get().to(HttpResponse::Ok)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let app = protected_app!();
        let req = test::TestRequest::get().uri("/guarded").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_header_is_unauthorized() {
        let app = protected_app!();
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header((header::AUTHORIZATION, "Token abc"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn invalid_token_is_unauthorized() {
        let app = protected_app!();
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn valid_token_passes() {
        let app = protected_app!();
        let token = create_token(ADMIN_SUBJECT, SECRET).unwrap();
        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
