//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::Request,
    http::{header::LOCATION, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, info, warn};

/// How a page request ended, as far as the log is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Rendered,
    Redirected,
    Rejected,
    Denied,
    Failed,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Denied
        } else if status.is_client_error() {
            Self::Rejected
        } else if status.is_redirection() {
            Self::Redirected
        } else {
            Self::Rendered
        }
    }
}

/// Log one line per request with its outcome and latency
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match Outcome::of(response.status()) {
        Outcome::Failed => error!(%method, %path, status, elapsed_ms, "Page failed"),
        Outcome::Denied => warn!(%method, %path, status, elapsed_ms, "Page access denied"),
        Outcome::Rejected => debug!(%method, %path, status, elapsed_ms, "Request rejected"),
        Outcome::Redirected => {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            info!(%method, %path, status, location, elapsed_ms, "Redirected");
        }
        Outcome::Rendered => info!(%method, %path, status, elapsed_ms, "Page rendered"),
    }

    response
}
