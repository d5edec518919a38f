//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// - `Conflict` (with a `username` detail) if the username exists
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Finds a user by exact username. Returns `None` if not found.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
