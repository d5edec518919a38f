//! Strongly-typed identifier value objects.
//!
//! Every identifier is a 64-bit integer generated by the database on insert.
//! Values are never minted client-side; the only way to obtain one is from a
//! persisted row or a validated token subject.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a transparent `i64` identifier newtype with the shared impls.
macro_rules! database_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database identifier.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw value for binding into queries.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

database_id!(
    /// Identity of a registered user. Established at registration, immutable.
    UserId
);

database_id!(
    /// Identifier of a workout session (the aggregate root).
    WorkoutSessionId
);

database_id!(
    /// Identifier of a workout within a session.
    WorkoutId
);

database_id!(
    /// Identifier of a single set within a workout.
    WorkoutSetId
);

database_id!(
    /// Identifier of a catalog exercise.
    ExerciseId
);
