use async_trait::async_trait;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user: hash the password and store the record.
    ///
    /// No token is issued on registration; a separate login is required.
    ///
    /// # Arguments
    /// * `command` - Validated command with username, password, and role
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `PasswordHash` - Hashing operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a signed session token.
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// `InvalidCredentials` value.
    ///
    /// # Arguments
    /// * `username` - Username as submitted
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// Signed session token embedding the user's identity and role
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `TokenIssuance` - Token signing failed
    async fn login(&self, username: &str, password: &str) -> Result<String, UserError>;
}

/// Persistence operations for the user aggregate (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// The duplicate check and the insert must be one atomic step.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    async fn insert(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
}
