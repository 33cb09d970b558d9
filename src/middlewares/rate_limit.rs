use std::collections::{HashMap, VecDeque};
use std::future::{Ready, ready};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use actix_web::{
    Error, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    error::InternalError,
    http::header::{self, HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;

use crate::utils::client_ip::resolve_client_ip;

pub const RATE_LIMIT_MAX_REQUESTS: usize = 100;
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);

const RATE_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";

/// Sliding-window request limiter keyed by client IP, applied to public
/// `/api` routes. Admin routes bypass the limiter entirely; authenticated
/// admin traffic is never throttled by anonymous-traffic accounting.
///
/// One shared window map serves every worker; clone the handle into each
/// `App`.
#[derive(Clone)]
pub struct RateLimit {
    inner: Arc<LimiterInner>,
}

struct LimiterInner {
    max_requests: usize,
    window: Duration,
    hits: Mutex<HashMap<String, VecDeque<Instant>>>,
}

enum Decision {
    Allowed { remaining: usize, reset_secs: u64 },
    Limited { retry_secs: u64 },
}

impl RateLimit {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            inner: Arc::new(LimiterInner {
                max_requests,
                window,
                hits: Mutex::new(HashMap::new()),
            }),
        }
    }

    fn check(&self, key: &str) -> Decision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Decision {
        let mut hits = match self.inner.hits.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let log = hits.entry(key.to_string()).or_default();

        // Drop entries that have slid out of the window.
        while let Some(&oldest) = log.front() {
            if now.duration_since(oldest) >= self.inner.window {
                log.pop_front();
            } else {
                break;
            }
        }

        let secs_until_reset = |log: &VecDeque<Instant>| {
            log.front()
                .map(|&oldest| {
                    self.inner
                        .window
                        .saturating_sub(now.duration_since(oldest))
                        .as_secs()
                })
                .unwrap_or_else(|| self.inner.window.as_secs())
        };

        if log.len() >= self.inner.max_requests {
            Decision::Limited {
                retry_secs: secs_until_reset(log).max(1),
            }
        } else {
            log.push_back(now);
            Decision::Allowed {
                remaining: self.inner.max_requests - log.len(),
                reset_secs: secs_until_reset(log),
            }
        }
    }
}

/// Admin routes are exempted before any accounting happens.
fn is_limited_path(path: &str) -> bool {
    path.starts_with("/api") && !path.starts_with("/api/admin")
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RateLimitMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service,
            limiter: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: S,
    limiter: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        if !is_limited_path(req.path()) {
            return Box::pin(self.service.call(req));
        }

        let key = resolve_client_ip(req.request());
        let max_requests = self.limiter.inner.max_requests;

        match self.limiter.check(&key) {
            Decision::Limited { retry_secs } => {
                log::debug!("rate limit exceeded for {}", key);
                Box::pin(async move { Err(rate_limited(max_requests, retry_secs)) })
            }
            Decision::Allowed {
                remaining,
                reset_secs,
            } => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?;
                    let headers = res.headers_mut();
                    headers.insert(
                        HeaderName::from_static("ratelimit-limit"),
                        HeaderValue::from(max_requests),
                    );
                    headers.insert(
                        HeaderName::from_static("ratelimit-remaining"),
                        HeaderValue::from(remaining),
                    );
                    headers.insert(
                        HeaderName::from_static("ratelimit-reset"),
                        HeaderValue::from(reset_secs),
                    );
                    Ok(res)
                })
            }
        }
    }
}

fn rate_limited(max_requests: usize, retry_secs: u64) -> Error {
    let response = HttpResponse::TooManyRequests()
        .insert_header((header::RETRY_AFTER, retry_secs.to_string()))
        .insert_header(("ratelimit-limit", max_requests.to_string()))
        .insert_header(("ratelimit-remaining", "0"))
        .insert_header(("ratelimit-reset", retry_secs.to_string()))
        .json(serde_json::json!({ "error": RATE_LIMIT_MESSAGE }));
    InternalError::from_response(RATE_LIMIT_MESSAGE, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};

    #[test]
    fn limits_api_paths_only() {
        assert!(is_limited_path("/api/track"));
        assert!(is_limited_path("/api/portfolio"));
        assert!(!is_limited_path("/api/admin/login"));
        assert!(!is_limited_path("/api/admin/visitors"));
        assert!(!is_limited_path("/health"));
    }

    #[test]
    fn threshold_request_is_limited() {
        let limiter = RateLimit::new(100, RATE_LIMIT_WINDOW);
        let start = Instant::now();

        for _ in 0..100 {
            assert!(matches!(
                limiter.check_at("1.2.3.4", start),
                Decision::Allowed { .. }
            ));
        }
        assert!(matches!(
            limiter.check_at("1.2.3.4", start),
            Decision::Limited { .. }
        ));
    }

    #[test]
    fn window_slides() {
        let limiter = RateLimit::new(2, Duration::from_secs(60));
        let start = Instant::now();

        assert!(matches!(
            limiter.check_at("ip", start),
            Decision::Allowed { .. }
        ));
        assert!(matches!(
            limiter.check_at("ip", start + Duration::from_secs(30)),
            Decision::Allowed { .. }
        ));
        assert!(matches!(
            limiter.check_at("ip", start + Duration::from_secs(40)),
            Decision::Limited { .. }
        ));
        // First hit has left the window; one slot is free again.
        assert!(matches!(
            limiter.check_at("ip", start + Duration::from_secs(61)),
            Decision::Allowed { .. }
        ));
    }

    #[test]
    fn identities_are_independent() {
        let limiter = RateLimit::new(1, Duration::from_secs(60));
        let start = Instant::now();

        assert!(matches!(
            limiter.check_at("a", start),
            Decision::Allowed { .. }
        ));
        assert!(matches!(
            limiter.check_at("b", start),
            Decision::Allowed { .. }
        ));
        assert!(matches!(
            limiter.check_at("a", start),
            Decision::Limited { .. }
        ));
    }

    #[actix_web::test]
    async fn public_route_gets_headers_then_429() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RateLimit::new(3, Duration::from_secs(60)))
                .route("/api/echo", web::get().to(HttpResponse::Ok))
                .route("/api/admin/echo", web::get().to(HttpResponse::Ok)),
        )
        .await;

        for expected_remaining in ["2", "1", "0"] {
            let req = actix_test::TestRequest::get().uri("/api/echo").to_request();
            let res = actix_test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(
                res.headers().get("ratelimit-remaining").unwrap(),
                expected_remaining
            );
        }

        let req = actix_test::TestRequest::get().uri("/api/echo").to_request();
        let err = actix_test::try_call_service(&app, req).await.unwrap_err();
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(res.headers().contains_key(header::RETRY_AFTER));

        // Admin-prefixed routes are never limited.
        for _ in 0..10 {
            let req = actix_test::TestRequest::get().uri("/api/admin/echo").to_request();
            let res = actix_test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);
        }
    }
}
