//! Registered user accounts.

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 64;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A persisted account. `password_hash` never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Registration input after the password has been hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Registration input as supplied by the client.
///
/// Only constructible through [`Registration::new`], so a value of this type
/// has already passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    username: String,
    email: String,
    password: String,
}

impl Registration {
    /// Validates raw registration fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `InvalidFormat` for `username` outside 3..=64 characters
    /// - `InvalidFormat` for an `email` without `@`
    /// - `InvalidFormat` for a `password` shorter than 8 characters
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into().trim().to_string();
        let email = email.into().trim().to_string();
        let password = password.into();

        if username.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        let length = username.chars().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
            return Err(ValidationError::invalid_format(
                "username",
                format!(
                    "must be between {} and {} characters",
                    MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
                ),
            ));
        }
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "must contain '@'"));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::invalid_format(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replaces the plaintext password with its digest.
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        NewUser {
            username: self.username,
            email: self.email,
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_accepts_valid_fields() {
        let reg = Registration::new(" lifter ", "lifter@example.com", "hunter2hunter2").unwrap();
        assert_eq!(reg.username(), "lifter");
        assert_eq!(reg.email(), "lifter@example.com");
    }

    #[test]
    fn registration_rejects_short_username() {
        let err = Registration::new("ab", "a@b.c", "longenough").unwrap_err();
        assert_eq!(err.field(), "username");
    }

    #[test]
    fn registration_rejects_blank_username() {
        let err = Registration::new("   ", "a@b.c", "longenough").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("username"));
    }

    #[test]
    fn registration_rejects_email_without_at() {
        let err = Registration::new("lifter", "example.com", "longenough").unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn registration_rejects_short_password() {
        let err = Registration::new("lifter", "a@b.c", "short").unwrap_err();
        assert_eq!(err.field(), "password");
    }

    #[test]
    fn into_new_user_drops_plaintext() {
        let user = Registration::new("lifter", "a@b.c", "longenough")
            .unwrap()
            .into_new_user("$2b$digest".to_string());
        assert_eq!(user.password_hash, "$2b$digest");
        assert_eq!(user.username, "lifter");
    }
}
