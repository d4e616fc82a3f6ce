//! User accounts, roles, and profile payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authorisation role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including administration surfaces.
    Admin,
    /// Regular authenticated account (the role assigned on registration).
    User,
    /// Transient unauthenticated session with restricted access.
    Guest,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Guest => "Guest",
        };
        f.write_str(label)
    }
}

/// User account record.
///
/// The `password` field only exists on stored records; the copy held as the
/// current session user always has it stripped (see [`User::sanitized`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Store-unique identity.
    pub id: UserId,
    /// Full display name.
    pub name: String,
    /// Login email, compared case-sensitively.
    pub email: String,
    /// Demo credential; never present on the session copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Authorisation role.
    pub role: Role,
    /// Avatar reference.
    pub avatar_url: String,
}

impl User {
    /// Clone of this record with the credential stripped, suitable for
    /// holding as the current session user.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }
}

/// Derive the avatar reference for a display name.
///
/// Whitespace is squeezed out of the name so the seed stays URL-safe, which
/// also means distinct names can collide on the same placeholder image; that
/// is acceptable for generated avatars.
#[must_use]
pub fn derived_avatar_url(name: &str) -> String {
    let seed: String = name.split_whitespace().collect();
    format!("https://picsum.photos/seed/{seed}/100/100")
}

/// Registration form payload; role and avatar are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RegistrationDraft {
    /// Full display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Chosen credential, stored on the account record.
    pub password: String,
}

/// Partial profile edit; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ProfileUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement login email.
    pub email: Option<String>,
    /// Replacement avatar reference.
    pub avatar_url: Option<String>,
}
