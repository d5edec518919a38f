//! User accounts: registration input, persisted users, and their errors.

mod account;
mod errors;

pub use account::{
    NewUser, Registration, User, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
pub use errors::UserError;
