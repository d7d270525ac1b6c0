use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service for registration and login.
///
/// Orchestrates the credential store, password hasher, and session token
/// codec. Generic over the repository for testability.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<auth::Authenticator>,
    token_ttl_hours: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing + token signing
    /// * `token_ttl_hours` - Session lifetime stamped into issued tokens
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<auth::Authenticator>,
        token_ttl_hours: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let user = User {
            username: command.username,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        let created_user = self.repository.insert(user).await?;

        tracing::info!(
            username = %created_user.username,
            role = %created_user.role,
            "user registered"
        );

        Ok(created_user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, UserError> {
        // An unknown username falls through to the same error as a failed
        // password check.
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let claims = auth::SessionClaims::new(
            user.username.as_str(),
            user.role.as_str(),
            self.token_ttl_hours,
        );

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                auth::AuthenticationError::Password(err) => {
                    UserError::PasswordHash(err.to_string())
                }
                auth::AuthenticationError::Jwt(err) => UserError::TokenIssuance(err.to_string()),
            })?;

        tracing::info!(username = %user.username, "session issued");

        Ok(result.access_token)
    }
}
