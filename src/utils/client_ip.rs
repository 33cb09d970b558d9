use actix_web::HttpRequest;

/// Identity used when no address can be determined at all.
pub const UNKNOWN_IP: &str = "0.0.0.0";

/// Resolve the client identity for tracking and rate limiting.
///
/// Precedence, first non-empty wins: explicit `X-Forwarded-For` entry,
/// framework-detected real IP, socket peer address, then a literal fallback.
/// The header is consulted first because the service normally sits behind a
/// reverse proxy that rewrites the socket address.
pub fn resolve_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded
            .split(',')
            .map(str::trim)
            .find(|entry| !entry.is_empty())
        {
            return first.to_string();
        }
    }

    let connection_info = req.connection_info();
    if let Some(real_ip) = connection_info.realip_remote_addr() {
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }
    drop(connection_info);

    if let Some(peer) = req.peer_addr() {
        return peer.ip().to_string();
    }

    UNKNOWN_IP.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn forwarded_for_header_wins() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
            .peer_addr("192.0.2.1:4711".parse().unwrap())
            .to_http_request();
        assert_eq!(resolve_client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn empty_forwarded_for_falls_through() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", " , "))
            .peer_addr("192.0.2.1:4711".parse().unwrap())
            .to_http_request();
        assert!(resolve_client_ip(&req).contains("192.0.2.1"));
    }

    #[test]
    fn peer_address_used_without_header() {
        let req = TestRequest::default()
            .peer_addr("198.51.100.23:9000".parse().unwrap())
            .to_http_request();
        assert!(resolve_client_ip(&req).contains("198.51.100.23"));
    }

    #[test]
    fn falls_back_to_unknown() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(resolve_client_ip(&req), UNKNOWN_IP);
    }
}
