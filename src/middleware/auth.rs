//! Authentication middleware
//!
//! Identity is established upstream; requests carry a signed token either as
//! `Authorization: Bearer <token>` or in the session cookie.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{roles, AUTH_COOKIE_NAME},
    error::AppError,
    services::AuthService,
    state::AppState,
};

/// Authenticated user extracted from the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub name: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Pull the raw token from the Authorization header, falling back to the cookie
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(header) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        return header.strip_prefix("Bearer ");
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE_NAME)
        .map(|(_, value)| value)
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = extract_token(request.headers()) else {
        debug!(path = %path, "Auth failed: no token");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            debug!(path = %path, sub = %claims.sub, "Auth failed: invalid user ID in token");
            AppError::InvalidToken
        })?;

    let user = AuthenticatedUser {
        id: user_id,
        name: claims.name,
        role: claims.role,
    };

    debug!(path = %path, user_id, role = %user.role, "User authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Admin gate; must run after [`auth_middleware`]
pub async fn admin_middleware(
    user: AuthenticatedUser,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !user.is_admin() {
        debug!(user_id = user.id, path = %request.uri().path(), "Admin access denied");
        return Err(AppError::Forbidden("Nemate ovlasti".to_string()));
    }

    Ok(next.run(request).await)
}
