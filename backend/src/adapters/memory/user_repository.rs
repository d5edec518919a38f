//! In-memory implementation of UserRepository for testing.
//!
//! # Panics
//!
//! Methods may panic if the internal lock is poisoned.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users
            .lock()
            .expect("InMemoryUserRepository: lock poisoned")
            .len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut users = self.users.lock().expect("InMemoryUserRepository: lock poisoned");
        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::new(ErrorCode::Conflict, "Username already taken")
                .with_detail("username", user.username.clone()));
        }

        let now = Timestamp::now();
        let created = User {
            id: UserId::new(users.len() as i64 + 1),
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .expect("InMemoryUserRepository: lock poisoned")
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}
