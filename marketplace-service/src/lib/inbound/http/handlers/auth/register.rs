use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::RoleError;
use crate::user::errors::UsernameError;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|user| {
            ApiSuccess::new(
                StatusCode::OK,
                RegisterResponseData {
                    message: format!("user '{}' registered", user.username),
                },
            )
        })
}

/// HTTP request body for registration (raw JSON).
///
/// All fields are optional at the wire level so absence surfaces as a
/// domain-shaped 400 instead of a deserialization rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: Option<String>,
    password: Option<String>,
    role: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("username, password and role are required")]
    MissingField,

    #[error("invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("{0}")]
    Role(#[from] RoleError),
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        // Empty strings count as absent, matching the presence-check contract
        let username = self
            .username
            .filter(|s| !s.is_empty())
            .ok_or(ParseRegisterRequestError::MissingField)?;
        let password = self
            .password
            .filter(|s| !s.is_empty())
            .ok_or(ParseRegisterRequestError::MissingField)?;
        let role = self
            .role
            .filter(|s| !s.is_empty())
            .ok_or(ParseRegisterRequestError::MissingField)?;

        let username = Username::new(username)?;
        let role = Role::from_str(&role)?;

        Ok(RegisterUserCommand::new(username, password, role))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
}
