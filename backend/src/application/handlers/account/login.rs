//! LoginHandler - Exchanges username and password for a bearer token.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::domain::user::UserError;
use crate::ports::{CredentialHasher, TokenService, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Returns a signed token for the user.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`
    /// after one hashing round, so response time does not reveal which
    /// usernames exist.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<String, UserError> {
        let Some(user) = self.repository.find_by_username(cmd.username.trim()).await? else {
            tracing::debug!("Login for unknown username");
            // Same work factor as a verify against a stored digest
            if let Err(e) = self.hasher.hash(&cmd.password).await {
                tracing::warn!("Hashing for unknown username failed: {}", e);
            }
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = self
            .hasher
            .verify(&user.password_hash, &cmd.password)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, "Password verification failed: {}", e);
                UserError::infrastructure(e.message)
            })?;
        if !matches {
            tracing::debug!(user_id = %user.id, "Login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.tokens.issue(user.id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{JwtTokenService, SystemClock};
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::application::handlers::account::register_user::tests::PlainHasher;
    use crate::application::handlers::account::{RegisterUserCommand, RegisterUserHandler};
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;
    use chrono::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts every hash or verify call.
    #[derive(Default)]
    struct CountingHasher {
        rounds: AtomicUsize,
    }

    #[async_trait]
    impl CredentialHasher for CountingHasher {
        async fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
            self.rounds.fetch_add(1, Ordering::SeqCst);
            PlainHasher.hash(plaintext).await
        }

        async fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, DomainError> {
            self.rounds.fetch_add(1, Ordering::SeqCst);
            PlainHasher.verify(digest, plaintext).await
        }
    }

    struct Fixture {
        handler: LoginHandler,
        tokens: Arc<JwtTokenService>,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(PlainHasher);
        let tokens = Arc::new(JwtTokenService::new(
            b"login-test-secret-at-least-32-bytes!",
            Duration::hours(24),
            Arc::new(SystemClock),
        ));

        RegisterUserHandler::new(repo.clone(), hasher.clone())
            .handle(RegisterUserCommand {
                username: "lifter".to_string(),
                email: "lifter@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            handler: LoginHandler::new(repo, hasher, tokens.clone()),
            tokens,
        }
    }

    fn login(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn issues_token_for_valid_credentials() {
        let f = fixture().await;

        let token = f.handler.handle(login("lifter", "correct horse")).await.unwrap();

        let user_id = f.tokens.validate(&token).unwrap();
        assert_eq!(user_id.as_i64(), 1);
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let f = fixture().await;

        let result = f.handler.handle(login("lifter", "battery staple")).await;

        assert_eq!(result.unwrap_err(), UserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn rejects_unknown_user_the_same_way() {
        let f = fixture().await;

        let result = f.handler.handle(login("ghost", "correct horse")).await;

        assert_eq!(result.unwrap_err(), UserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn unknown_user_costs_one_hashing_round_like_a_wrong_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(CountingHasher::default());
        let tokens = Arc::new(JwtTokenService::new(
            b"login-test-secret-at-least-32-bytes!",
            Duration::hours(24),
            Arc::new(SystemClock),
        ));
        RegisterUserHandler::new(repo.clone(), Arc::new(PlainHasher))
            .handle(RegisterUserCommand {
                username: "lifter".to_string(),
                email: "lifter@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();
        let handler = LoginHandler::new(repo, hasher.clone(), tokens);

        let wrong_password = handler.handle(login("lifter", "battery staple")).await;
        assert_eq!(wrong_password.unwrap_err(), UserError::InvalidCredentials);
        assert_eq!(hasher.rounds.load(Ordering::SeqCst), 1);

        let unknown_user = handler.handle(login("ghost", "battery staple")).await;
        assert_eq!(unknown_user.unwrap_err(), UserError::InvalidCredentials);
        assert_eq!(hasher.rounds.load(Ordering::SeqCst), 2);
    }
}
