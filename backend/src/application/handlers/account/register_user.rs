//! RegisterUserHandler - Creates an account with a hashed password.

use std::sync::Arc;

use crate::domain::user::{Registration, User, UserError};
use crate::ports::{CredentialHasher, UserRepository};

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, UserError> {
        let registration = Registration::new(cmd.username, cmd.email, cmd.password)?;

        let password_hash = self.hasher.hash(registration.password()).await.map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            UserError::infrastructure(e.message)
        })?;

        let user = self
            .repository
            .create(&registration.into_new_user(password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}
