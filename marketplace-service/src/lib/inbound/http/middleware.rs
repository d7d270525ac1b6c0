use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Identity;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Access guard: validates the bearer token and attaches the caller's
/// identity to the request extensions for downstream authorization checks.
///
/// The attached `Identity` is request-scoped; concurrent requests never
/// share or race on it.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_bearer_token(&req)?;

    // Validate signature and expiry; all failure modes collapse into one
    // user-visible category.
    let claims: auth::SessionClaims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("session token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let username = Username::new(claims.sub).map_err(|e| {
        tracing::warn!("token carried an invalid subject: {}", e);
        ApiError::Unauthorized("Invalid token payload".to_string()).into_response()
    })?;

    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::warn!("token carried an invalid role: {}", e);
        ApiError::Unauthorized("Invalid token payload".to_string()).into_response()
    })?;

    req.extensions_mut().insert(Identity { username, role });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing authorization token".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
