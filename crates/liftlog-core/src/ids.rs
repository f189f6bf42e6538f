//! Opaque identifiers.
//!
//! The remote store may hand out ids as JSON numbers or as strings. The id
//! types keep whichever representation arrived so it can be echoed back
//! unchanged in later requests. Equality and hashing go through the
//! textual form, so `4` and `"4"` name the same record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Raw wire representation of an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn matches(&self, other: &RawId) -> bool {
        match (self, other) {
            (RawId::Number(a), RawId::Number(b)) => a == b,
            (RawId::Text(a), RawId::Text(b)) => a == b,
            (RawId::Number(n), RawId::Text(s)) | (RawId::Text(s), RawId::Number(n)) => n.to_string() == *s,
        }
    }
}

impl PartialEq for RawId {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for RawId {}

impl Hash for RawId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            RawId::Number(n) => n.to_string().hash(state),
            RawId::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for RawId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => RawId::Number(n),
            Err(_) => RawId::Text(s.to_string()),
        })
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            pub fn raw(&self) -> &RawId {
                &self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(RawId::Number(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(RawId::Text(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(RawId::Text(value))
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<RawId>().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a workout (the server-side session record).
    WorkoutId
);
opaque_id!(
    /// Identifier of a catalog exercise.
    ExerciseId
);
opaque_id!(
    /// Identifier of a logged set.
    SetId
);
opaque_id!(
    /// Identifier of a user account.
    UserId
);
