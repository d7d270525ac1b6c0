use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown role: {0} (expected \"seller\" or \"buyer\")")]
    Unknown(String),
}

/// Top-level error for registration and login operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    // Domain-level errors
    #[error("username already exists: {0}")]
    UsernameAlreadyExists(String),

    // One error value for unknown usernames and wrong passwords, so a
    // caller cannot probe which usernames are registered.
    #[error("invalid username or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("token issuance failed: {0}")]
    TokenIssuance(String),
}
