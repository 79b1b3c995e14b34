//! User and session record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoplite_core::{Phone, UserId};

/// A registered user, as persisted in the `local_users` list.
///
/// The password is stored in plaintext. That is a placeholder credential
/// mechanism inherited from the storage model, not a pattern to build on: a
/// deployment that cares about security replaces this store outright rather
/// than hashing in place. `Debug` redacts the field so it never reaches logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    /// Timestamp-derived identifier, assigned at sign-up.
    pub id: UserId,
    /// Account phone number, unique across the list (checked at sign-up).
    pub phone: Phone,
    /// Plaintext password (placeholder, see type docs).
    pub password: String,
    /// Display name.
    pub name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for LocalUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalUser")
            .field("id", &self.id)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// The session snapshot persisted under `current_user`.
///
/// A subset of [`LocalUser`] - everything a signed-in view needs, nothing it
/// must not see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The signed-in user's ID.
    pub id: UserId,
    /// The signed-in user's phone number.
    pub phone: Phone,
    /// Profile fields carried alongside the identity.
    pub user_metadata: UserMetadata,
}

/// Profile fields nested inside the session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Display name.
    pub name: String,
}

impl From<&LocalUser> for CurrentUser {
    fn from(user: &LocalUser) -> Self {
        Self {
            id: user.id.clone(),
            phone: user.phone.clone(),
            user_metadata: UserMetadata {
                name: user.name.clone(),
            },
        }
    }
}
