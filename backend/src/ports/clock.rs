//! Clock port.
//!
//! Anything that compares against "now" (token expiry in particular) reads
//! time through this trait so tests can move it.

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
