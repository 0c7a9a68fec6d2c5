//! User record types and the validity invariant.
//!
//! `UserDraft` is the pre-creation shape: it carries no id, so a caller can
//! neither pick nor override one. `User` is what the store hands back, always
//! as an owned snapshot.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Violation;

/// Store-assigned identifier. Starts at 1, never reused.
pub type UserId = u64;

/// Exclusive bounds on a valid age.
pub const AGE_MIN_EXCLUSIVE: i32 = 0;
pub const AGE_MAX_EXCLUSIVE: i32 = 150;

/// Candidate record for create/update.
///
/// Every field defaults when absent or `null` in a request body so that it
/// is reported as a validation failure rather than a decode error.
/// Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i32,
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Check the validity invariant: non-empty name, email containing '@',
    /// and 0 < age < 150. Rules are checked in that order.
    pub fn validate(&self) -> Result<(), Violation> {
        if self.name.is_empty() {
            return Err(Violation::EmptyName);
        }
        if !self.email.contains('@') {
            return Err(Violation::EmailMissingAt);
        }
        if self.age <= AGE_MIN_EXCLUSIVE || self.age >= AGE_MAX_EXCLUSIVE {
            return Err(Violation::AgeOutOfRange(self.age));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: i32,
}
