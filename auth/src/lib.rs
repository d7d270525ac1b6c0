//! Authentication infrastructure library
//!
//! Provides the building blocks the marketplace service authenticates with:
//! - Password hashing (Argon2id, self-describing PHC output)
//! - Signed session tokens (HS256 JWT with mandatory expiry)
//! - An authenticator coordinating both for login flows
//!
//! The service keeps its own domain traits and adapts these implementations,
//! so this crate stays free of marketplace domain types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{JwtHandler, SessionClaims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = SessionClaims::new("alice", "seller", 1);
//! let token = handler.encode(&claims).unwrap();
//! let decoded: SessionClaims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, SessionClaims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a one-hour session token
//! let claims = SessionClaims::new("alice", "seller", 1);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Guard: validate the token on later requests
//! let decoded: SessionClaims = auth.validate_token(&result.access_token).unwrap();
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
