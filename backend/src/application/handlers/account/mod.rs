//! Account command handlers.

mod login;
pub(crate) mod register_user;

pub use login::{LoginCommand, LoginHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
