//! Account entity as seen by the password reset flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account owned by the user directory
///
/// The reset flow only reads the email and display name and replaces the
/// password hash. The hash itself is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,

    pub email: String,

    /// Optional display name used to personalize the greeting
    pub name: Option<String>,

    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with the given email and password hash
    pub fn new(email: String, name: Option<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name, if one is set and not blank
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.updated_at = now;
    }
}
