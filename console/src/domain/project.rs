//! Project entity, service catalogue, and the delivery checklist.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client::ClientId;

/// Stable project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
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

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Delivery state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Delivered and signed off.
    Completed,
    /// Paused by either party.
    #[serde(rename = "On Hold")]
    OnHold,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        };
        f.write_str(label)
    }
}

/// Catalogue of services the studio offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    /// Websites and web applications.
    #[serde(rename = "Web Development")]
    WebDevelopment,
    /// Native or cross-platform mobile applications.
    #[serde(rename = "Mobile App")]
    MobileApp,
    /// Interface and experience design.
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    /// Brand identity work.
    Branding,
    /// Paid and organic campaign management.
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    /// Advisory engagements.
    Consulting,
    /// Online shop builds.
    #[serde(rename = "E-commerce")]
    Ecommerce,
    /// Search engine optimisation.
    #[serde(rename = "SEO")]
    Seo,
    /// Copy, photo, and video production.
    #[serde(rename = "Content Creation")]
    ContentCreation,
    /// Social channel management.
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileApp => "Mobile App",
            Self::UiUxDesign => "UI/UX Design",
            Self::Branding => "Branding",
            Self::DigitalMarketing => "Digital Marketing",
            Self::Consulting => "Consulting",
            Self::Ecommerce => "E-commerce",
            Self::Seo => "SEO",
            Self::ContentCreation => "Content Creation",
            Self::SocialMedia => "Social Media",
        };
        f.write_str(label)
    }
}

/// Identifier of one checklist entry, unique within its project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistItemId(Uuid);

impl ChecklistItemId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ChecklistItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One step in a project's delivery checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ChecklistItem {
    /// Identity within the owning project.
    pub id: ChecklistItemId,
    /// Human-readable step description.
    pub label: String,
    /// Whether the step has been ticked off.
    pub completed: bool,
}

/// Step labels seeded into every new project's checklist.
const DEFAULT_CHECKLIST_LABELS: [&str; 6] = [
    "Kickoff call",
    "Requirements sign-off",
    "Design review",
    "Implementation",
    "Client review",
    "Launch",
];

/// Instantiate the default checklist template.
///
/// Every call mints fresh item identities, so two projects can never share
/// checklist state: ticking a step on one leaves the other untouched.
#[must_use]
pub fn default_checklist() -> Vec<ChecklistItem> {
    DEFAULT_CHECKLIST_LABELS
        .iter()
        .map(|label| ChecklistItem {
            id: ChecklistItemId::random(),
            label: (*label).to_owned(),
            completed: false,
        })
        .collect()
}

/// Project record owned by the entity store.
///
/// ## Invariants
/// - `id` is unique within the store.
/// - `client_id` references the owning client by identity; renaming a client
///   never detaches its projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Store-unique identity.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Owning client.
    pub client_id: ClientId,
    /// Delivery state.
    pub status: ProjectStatus,
    /// Service being delivered.
    pub service_type: ServiceType,
    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Ordered delivery checklist.
    pub checklist: Vec<ChecklistItem>,
    /// Ordered gallery of uploaded image references.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// Form payload for a project that has not been assigned an identity yet.
///
/// The checklist is not part of the draft: new projects always start from
/// the default template (see [`default_checklist`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ProjectDraft {
    /// Project name.
    pub name: String,
    /// Owning client.
    pub client_id: ClientId,
    /// Delivery state.
    pub status: ProjectStatus,
    /// Service being delivered.
    pub service_type: ServiceType,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl Project {
    /// Materialise a record from a draft, attaching a fresh checklist.
    #[must_use]
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        let ProjectDraft {
            name,
            client_id,
            status,
            service_type,
            notes,
        } = draft;
        Self {
            id,
            name,
            client_id,
            status,
            service_type,
            notes,
            checklist: default_checklist(),
            image_urls: Vec::new(),
        }
    }
}

/// Project form submission: a new draft or a full replacement (the
/// replacement carries its own checklist, which is preserved verbatim).
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectSubmission {
    /// Create a record; the store assigns identity and checklist.
    New(ProjectDraft),
    /// Replace the stored record matching the carried identity.
    Existing(Project),
}

#[cfg(test)]
mod tests {
    //! Checklist template behaviour.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn template_instances_never_share_item_identities() {
        let first = default_checklist();
        let second = default_checklist();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.label, b.label);
            assert_ne!(a.id, b.id);
        }
    }

    #[rstest]
    fn template_steps_start_unticked() {
        assert!(default_checklist().iter().all(|item| !item.completed));
    }

    #[rstest]
    #[case(ProjectStatus::InProgress, "\"In Progress\"")]
    #[case(ProjectStatus::Completed, "\"Completed\"")]
    #[case(ProjectStatus::OnHold, "\"On Hold\"")]
    fn status_serialises_with_display_labels(
        #[case] status: ProjectStatus,
        #[case] expected: &str,
    ) {
        let json = serde_json::to_string(&status).expect("status serialises");
        assert_eq!(json, expected);
    }

    #[rstest]
    #[case(ServiceType::UiUxDesign, "\"UI/UX Design\"")]
    #[case(ServiceType::Ecommerce, "\"E-commerce\"")]
    #[case(ServiceType::Seo, "\"SEO\"")]
    fn service_type_round_trips_catalogue_labels(
        #[case] service: ServiceType,
        #[case] expected: &str,
    ) {
        let json = serde_json::to_string(&service).expect("service serialises");
        assert_eq!(json, expected);
        let back: ServiceType = serde_json::from_str(&json).expect("service parses");
        assert_eq!(back, service);
    }
}
