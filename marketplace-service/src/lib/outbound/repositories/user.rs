use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory implementation of UserRepository.
///
/// Credentials live for the lifetime of the process. Registration is a
/// read-check-then-write sequence, so the duplicate check and the insert
/// run under one write guard.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.username.as_str()) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.username.as_str().to_string(), user.clone());
        tracing::debug!(username = %user.username, "user stored");

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::Role;
    use crate::domain::user::models::Username;

    fn user(username: &str) -> User {
        User {
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: Role::Seller,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repository = InMemoryUserRepository::new();

        repository.insert(user("alice")).await.expect("Insert failed");

        let found = repository
            .find_by_username("alice")
            .await
            .expect("Find failed")
            .expect("User missing");
        assert_eq!(found.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_insert_duplicate_username() {
        let repository = InMemoryUserRepository::new();

        repository.insert(user("alice")).await.expect("Insert failed");

        let result = repository.insert(user("alice")).await;
        assert!(matches!(
            result,
            Err(UserError::UsernameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_find_unknown_username() {
        let repository = InMemoryUserRepository::new();

        let found = repository
            .find_by_username("nobody")
            .await
            .expect("Find failed");
        assert!(found.is_none());
    }
}
