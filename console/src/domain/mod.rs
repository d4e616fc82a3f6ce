//! Domain entities, payloads, and the entity store.
//!
//! Types here are serialization-ready (serde, camelCase field names) so the
//! backend adapter can exchange them unchanged. Collection ownership is
//! centralised in [`EntityStore`]; presentational code only ever sees
//! borrowed snapshots.

pub mod auth;
pub mod client;
pub mod invoice;
pub mod outcome;
pub mod ports;
pub mod project;
pub mod session;
pub mod store;
pub mod user;

pub use self::auth::{AuthError, CredentialsError, LoginCredentials};
pub use self::client::{Client, ClientDraft, ClientId, ClientStatus, ClientSubmission};
pub use self::invoice::{Invoice, InvoiceId, InvoiceStatus};
pub use self::outcome::{MutationOutcome, Submitted};
pub use self::project::{
    default_checklist, ChecklistItem, ChecklistItemId, Project, ProjectDraft, ProjectId,
    ProjectStatus, ProjectSubmission, ServiceType,
};
pub use self::store::EntityStore;
pub use self::user::{ProfileUpdate, RegistrationDraft, Role, User, UserId};
