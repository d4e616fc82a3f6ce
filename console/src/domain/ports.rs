//! Driven ports at the edge of the core.
//!
//! The backend port describes how the core expects to talk to the hosted
//! backend collaborator. No mutation handler calls it today; a deployment
//! that adopts persistence routes login, registration, and snapshot
//! reconciliation through an adapter implementing this trait, turning the
//! entity store into a cache in front of it.

use async_trait::async_trait;
use thiserror::Error;

use super::client::Client;
use super::invoice::Invoice;
use super::project::Project;
use super::user::User;

/// Errors surfaced by a backend adapter.
///
/// Adapters map their transport failures into these variants instead of
/// leaking transport error types across the port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Connectivity failure before a response was obtained.
    #[error("backend connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The backend answered outside the expected protocol.
    #[error("backend rejected the request: {message}")]
    Protocol {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl BackendError {
    /// Helper for connectivity failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for protocol-level rejections.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}

/// Full snapshot of the store's collections, the unit of reconciliation
/// with the backend.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPayload<'a> {
    /// Client collection at the time of the push.
    pub clients: &'a [Client],
    /// Project collection at the time of the push.
    pub projects: &'a [Project],
    /// Invoice collection at the time of the push.
    pub invoices: &'a [Invoice],
    /// User collection at the time of the push.
    pub users: &'a [User],
}

/// Driven port for the hosted backend collaborator.
#[async_trait]
pub trait BackendPort {
    /// Cheap reachability probe.
    async fn health(&self) -> Result<(), BackendError>;

    /// Push the whole in-memory snapshot for server-side persistence.
    async fn push_snapshot(&self, snapshot: SnapshotPayload<'_>) -> Result<(), BackendError>;
}
