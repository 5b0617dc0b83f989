//! HTTP request logging middleware
//!
//! Records request metadata at TRACE level before handing the request to the
//! rest of the chain. Nothing about the request or response is changed.
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use tenant_proxy_authz::middleware::log_request_details;
//!
//! let app: Router = Router::new()
//!     .route("/health", get(|| async { "ok" }))
//!     .layer(middleware::from_fn(log_request_details));
//! ```

use axum::{
    extract::{ConnectInfo, Request},
    http::header::{CONTENT_LENGTH, COOKIE, HOST, TRANSFER_ENCODING},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::{trace, Level};
use url::form_urlencoded;

/// Logs method, URL, host, headers, remote address, request URI, protocol,
/// content length, transfer encoding, cookies and query of every request
pub async fn log_request_details(request: Request, next: Next) -> Response {
    if tracing::enabled!(Level::TRACE) {
        let headers = request.headers();
        let uri = request.uri();

        let host = header_str(headers, HOST).or_else(|| uri.host());
        let remote_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let request_uri = uri.path_and_query().map_or("/", |pq| pq.as_str());
        let content_length = header_str(headers, CONTENT_LENGTH).and_then(|v| v.parse::<u64>().ok());
        let transfer_encoding: Vec<&str> = header_str(headers, TRANSFER_ENCODING)
            .map(|v| v.split(',').map(str::trim).collect())
            .unwrap_or_default();
        let cookies = parse_cookies(headers);
        let query = parse_query(uri.query());

        trace!(
            method = %request.method(),
            url = %uri,
            host = ?host,
            headers = ?headers,
            remote_addr = ?remote_addr,
            request_uri = %request_uri,
            proto = ?request.version(),
            content_length = ?content_length,
            transfer_encoding = ?transfer_encoding,
            cookies = ?cookies,
            query = ?query,
            "HTTP details"
        );
    }

    next.run(request).await
}

fn header_str(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Splits every `Cookie` header into its `name=value` pairs
fn parse_cookies(headers: &HeaderMap) -> Vec<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Decodes a raw query string into key/value pairs
fn parse_query(query: Option<&str>) -> Vec<(String, String)> {
    form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}
