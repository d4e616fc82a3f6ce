//! Top-level view selection and render-time access control.

use std::fmt;

use crate::domain::{Client, Invoice, Project};

/// Top-level section selected in the sidebar.
///
/// Navigation always succeeds regardless of role; authorisation is applied
/// when the section is resolved for rendering, not when it is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActiveView {
    /// Condensed overview composing clients and projects.
    #[default]
    Dashboard,
    /// Full client list.
    Clients,
    /// Full project list.
    Projects,
    /// Invoices and billing; gated to non-guest roles.
    Finance,
    /// Project reporting, image galleries, and notes.
    Reports,
    /// Application settings.
    Settings,
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Projects => "Projects",
            Self::Finance => "Finance",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        };
        f.write_str(label)
    }
}

/// What the shell should render for the current section and session.
///
/// Variants borrow read-only snapshots from the store; presentational
/// components never receive owning references.
#[derive(Debug, PartialEq)]
pub enum ViewContent<'a> {
    /// No session; render the authentication surface.
    SignedOut,
    /// Condensed client and project overviews side by side.
    Dashboard {
        /// Client collection snapshot.
        clients: &'a [Client],
        /// Project collection snapshot.
        projects: &'a [Project],
    },
    /// Full client list.
    Clients(&'a [Client]),
    /// Full project list.
    Projects(&'a [Project]),
    /// Billing view with invoices and the projects they can reference.
    Finance {
        /// Invoice collection snapshot.
        invoices: &'a [Invoice],
        /// Project collection snapshot.
        projects: &'a [Project],
    },
    /// The requested section exists but the session role may not see it.
    AccessDenied,
    /// Reporting view over the project collection.
    Reports(&'a [Project]),
    /// Settings surface; holds no entity data.
    Settings,
}
