use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header::ORIGIN},
    middleware::Next,
    response::Response,
};

use crate::{errors::HttpError, state::HttpState};

pub const CSRF_HEADER: &str = "x-fleet-token";

const LOOPBACK_HOSTS: [&str; 3] = ["127.0.0.1", "localhost", "[::1]"];

/// Rejects browser requests from foreign origins and any request without the
/// per-run token.
pub async fn require_csrf(
    State(state): State<HttpState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    check_origin(req.headers())?;

    let token = req
        .headers()
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok());
    if token != Some(state.csrf_token.as_str()) {
        return Err(HttpError::coded(
            StatusCode::UNAUTHORIZED,
            "missing or invalid CSRF token",
            "csrf_invalid",
        ));
    }

    Ok(next.run(req).await)
}

fn check_origin(headers: &HeaderMap) -> Result<(), HttpError> {
    let Some(origin) = headers.get(ORIGIN) else {
        return Ok(());
    };
    let origin = origin.to_str().map_err(|_| {
        HttpError::coded(StatusCode::BAD_REQUEST, "invalid Origin header", "invalid_origin")
    })?;
    if is_loopback_origin(origin) {
        Ok(())
    } else {
        Err(HttpError::coded(
            StatusCode::FORBIDDEN,
            "invalid origin",
            "invalid_origin",
        ))
    }
}

fn is_loopback_origin(origin: &str) -> bool {
    let Some(rest) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };
    LOOPBACK_HOSTS.iter().any(|host| {
        rest.strip_prefix(host)
            .is_some_and(|port| port.is_empty() || port.starts_with(':'))
    })
}
