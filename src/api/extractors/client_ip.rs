//! Requester IP extraction.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

/// Best-known client IP, or `None` if it could not be determined.
///
/// Checks `X-Forwarded-For` (first hop), then `X-Real-IP`, then the
/// socket peer. Header values that are not IP addresses are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl ClientIp {
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    value.trim().parse().ok()
}

fn from_headers(headers: &HeaderMap) -> Option<IpAddr> {
    let forwarded = headers
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(parse_ip);

    forwarded.or_else(|| {
        headers
            .get("X-Real-IP")
            .and_then(|h| h.to_str().ok())
            .and_then(parse_ip)
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = from_headers(&parts.headers).or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        });

        Ok(ClientIp(ip.map(|ip| ip.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> ClientIp {
        let (mut parts, _) = request.into_parts();
        ClientIp::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_forwarded_for_first_hop_wins() {
        let request = Request::builder()
            .header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
            .header("X-Real-IP", "198.51.100.2")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.into_inner().as_deref(), Some("203.0.113.7"));
    }

    #[tokio::test]
    async fn test_real_ip_fallback() {
        let request = Request::builder()
            .header("X-Real-IP", "198.51.100.2")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.0.as_deref(), Some("198.51.100.2"));
    }

    #[tokio::test]
    async fn test_connect_info_fallback() {
        let mut request = Request::builder()
            .header("X-Forwarded-For", "not-an-ip")
            .body(())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));

        assert_eq!(extract(request).await.0.as_deref(), Some("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_no_source_yields_none() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, ClientIp(None));
    }
}
