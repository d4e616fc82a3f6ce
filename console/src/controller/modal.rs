//! Modal dialog state machine.

use crate::domain::{Client, Invoice, Project, User};

/// The single active dialog, if any.
///
/// Exactly one variant is live at a time, so "at most one open modal" is a
/// compile-time invariant rather than a runtime check. Edit and delete
/// variants carry a snapshot of their target entity: the form needs the
/// initial data and the confirmation dialog needs the display name, and a
/// snapshot keeps the dialog stable while the store changes underneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    /// No dialog open.
    #[default]
    Closed,
    /// Blank client form.
    AddClient,
    /// Client form pre-filled with the snapshot.
    EditClient(Client),
    /// Delete confirmation for the snapshot.
    DeleteClient(Client),
    /// Blank project form.
    AddProject,
    /// Project form pre-filled with the snapshot.
    EditProject(Project),
    /// Delete confirmation for the snapshot.
    DeleteProject(Project),
    /// Blank invoice form; the identity comes from the invoice sequence.
    AddInvoice,
    /// Invoice form pre-filled with the snapshot.
    EditInvoice(Invoice),
    /// Delete confirmation for the snapshot.
    DeleteInvoice(Invoice),
    /// Profile form for the current session user.
    EditProfile(User),
}

impl ModalState {
    /// `true` when any dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}
