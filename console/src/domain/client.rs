//! Client entity and submission payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable client identifier.
///
/// Generated with UUIDv4 so identity assignment never depends on wall-clock
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
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

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relationship stage of a client account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// Not yet signed; in the pipeline.
    Prospect,
    /// Currently under contract.
    Active,
    /// Past engagement, no open work.
    Former,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Prospect => "prospect",
            Self::Active => "active",
            Self::Former => "former",
        };
        f.write_str(label)
    }
}

/// Client record owned by the entity store.
///
/// ## Invariants
/// - `id` is unique within the store (enforced by construction: ids are only
///   minted by [`ClientId::random`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Client {
    /// Store-unique identity.
    pub id: ClientId,
    /// Company name.
    pub name: String,
    /// Primary contact person.
    pub contact_person: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// City or region.
    pub location: String,
    /// Industry sector label.
    pub industry: String,
    /// Relationship stage.
    pub status: ClientStatus,
    /// Aggregate engagement value.
    pub total_value: f64,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Avatar reference for the contact person.
    pub avatar_url: String,
}

impl Client {
    /// Materialise a record from a draft under a given identity.
    #[must_use]
    pub fn from_draft(id: ClientId, draft: ClientDraft) -> Self {
        let ClientDraft {
            name,
            contact_person,
            email,
            phone,
            location,
            industry,
            status,
            total_value,
            notes,
            avatar_url,
        } = draft;
        Self {
            id,
            name,
            contact_person,
            email,
            phone,
            location,
            industry,
            status,
            total_value,
            notes,
            avatar_url,
        }
    }
}

/// Form payload for a client that has not been assigned an identity yet.
///
/// No uniqueness is enforced on `name` or `email`; duplicate company entries
/// are an accepted data-entry outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ClientDraft {
    /// Company name.
    pub name: String,
    /// Primary contact person.
    pub contact_person: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// City or region.
    pub location: String,
    /// Industry sector label.
    pub industry: String,
    /// Relationship stage.
    pub status: ClientStatus,
    /// Aggregate engagement value.
    pub total_value: f64,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Avatar reference for the contact person.
    pub avatar_url: String,
}

/// Client form submission: either a brand-new draft or a full replacement
/// for an existing record.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientSubmission {
    /// Create a record; the store assigns the identity.
    New(ClientDraft),
    /// Replace the stored record matching the carried identity.
    Existing(Client),
}
