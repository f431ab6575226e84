//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method and size checks, then the
//! resource mount, the `/` route, and 404 for everything else.

use hyper::header::{HeaderMap, HeaderValue, SERVER};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::handler::resources;
use crate::http::{self, Body};
use crate::logger::{self, AccessLogEntry};

/// Request headers the handlers care about
pub struct RequestContext {
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
}

impl RequestContext {
    fn from_parts(parts: &Parts) -> Self {
        Self {
            is_head: parts.method == Method::HEAD,
            if_none_match: header_string(&parts.headers, "if-none-match"),
            range: header_string(&parts.headers, "range"),
        }
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Main entry point for HTTP request handling
///
/// Request bodies are never read; only the declared length is checked.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Body>, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    drop(body);

    let mut response = dispatch(&parts, &state).await;

    if let Ok(value) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, value);
    }

    if state.access_log() {
        log_access(&parts, &response, remote_addr, started, &state);
    }

    Ok(response)
}

async fn dispatch(parts: &Parts, state: &AppState) -> Response<Body> {
    // 1. Only GET and HEAD reach handlers
    match parts.method {
        Method::GET | Method::HEAD => {}
        Method::OPTIONS => return http::build_options_response(),
        ref other => {
            logger::log_warning(&format!("Method not allowed: {other}"));
            return http::build_405_response();
        }
    }

    // 2. Declared body size
    if let Some(resp) = check_body_size(&parts.headers, state.config.http.max_body_size) {
        return resp;
    }

    let ctx = RequestContext::from_parts(parts);
    route_path(&ctx, parts.uri.path(), state).await
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Body>> {
    let value = headers.get("content-length")?;
    let size = value.to_str().ok()?.parse::<u64>().ok()?;
    if size > max_body_size {
        logger::log_warning(&format!(
            "Request body too large: {size} bytes (max: {max_body_size})"
        ));
        return Some(http::build_413_response());
    }
    None
}

async fn route_path(ctx: &RequestContext, path: &str, state: &AppState) -> Response<Body> {
    // `/` may stand in for another URL, served as if requested directly
    let path = match (path, state.config.routes.default_route.as_deref()) {
        ("/", Some(target)) => target.split('?').next().unwrap_or(target),
        _ => path,
    };

    if let Some(rest) = strip_mount(path, state.config.resources.mount_path()) {
        return resources::serve_resource(ctx, rest, state).await;
    }

    if path == "/" {
        return http::response::build_html_response(homepage(state), ctx.is_head);
    }

    http::build_404_response()
}

/// Part of `path` after `{mount}/`
fn strip_mount<'a>(path: &'a str, mount: &str) -> Option<&'a str> {
    path.strip_prefix(mount)?.strip_prefix('/')
}

fn homepage(state: &AppState) -> String {
    let mount = state.config.resources.mount_path();
    let items: String = state
        .resources
        .entries()
        .map(|(prefix, _)| {
            let prefix = escape_html(prefix);
            format!("<li><code>{}/{prefix}</code></li>", escape_html(mount))
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>adze</title></head>\n\
         <body>\n<h1>adze</h1>\n<p>Static resources are served under:</p>\n<ul>{items}</ul>\n</body>\n</html>\n"
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn log_access(
    parts: &Parts,
    response: &Response<Body>,
    remote_addr: SocketAddr,
    started: Instant,
    state: &AppState,
) {
    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = format!("{:?}", parts.version)
        .trim_start_matches("HTTP/")
        .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header_string(&parts.headers, "referer");
    entry.user_agent = header_string(&parts.headers, "user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
}
