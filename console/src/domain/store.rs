//! The entity store: sole owner of every business collection.
//!
//! All mutations run synchronously to completion on `&mut self`, so callers
//! observe each handler as an atomic snapshot replacement; there is no
//! interleaving and no partial state. Handlers never panic and never raise
//! across the store boundary: a mutation aimed at an absent record degrades
//! to a reported no-op (see [`MutationOutcome`] and [`Submitted`]).
//!
//! Session operations (login, registration, logout) live in the sibling
//! `session` module and share the same policy.

use tracing::{info, warn};

use super::client::{Client, ClientId, ClientSubmission};
use super::invoice::{Invoice, InvoiceId};
use super::outcome::{MutationOutcome, Submitted};
use super::project::{Project, ProjectId, ProjectSubmission};
use super::user::{ProfileUpdate, User, UserId};

/// Owning container of all mutable business records and the current
/// session identity.
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    pub(super) clients: Vec<Client>,
    pub(super) projects: Vec<Project>,
    pub(super) invoices: Vec<Invoice>,
    pub(super) users: Vec<User>,
    pub(super) current_user: Option<User>,
}

impl EntityStore {
    /// Create an empty store with no session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with collections, typically seed data.
    #[must_use]
    pub fn with_collections(
        clients: Vec<Client>,
        projects: Vec<Project>,
        invoices: Vec<Invoice>,
        users: Vec<User>,
    ) -> Self {
        Self {
            clients,
            projects,
            invoices,
            users,
            current_user: None,
        }
    }

    /// Read-only snapshot of the client collection.
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Read-only snapshot of the project collection.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Read-only snapshot of the invoice collection.
    #[must_use]
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Read-only snapshot of the user collection.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The authenticated session user, if any. The credential field is
    /// always stripped on this copy.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Look up a client by identity.
    #[must_use]
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    /// Look up a project by identity.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Look up an invoice by identity.
    #[must_use]
    pub fn invoice(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| &invoice.id == id)
    }

    /// Look up a stored user account by identity.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    // --- clients ---

    /// Create or replace a client record.
    ///
    /// New drafts receive a fresh identity and are appended; replacements
    /// are matched on identity and swapped wholesale. No uniqueness check
    /// is applied to name or email.
    pub fn submit_client(&mut self, submission: ClientSubmission) -> Submitted<ClientId> {
        match submission {
            ClientSubmission::New(draft) => {
                let id = ClientId::random();
                self.clients.push(Client::from_draft(id, draft));
                info!(client_id = %id, "client created");
                Submitted::Created(id)
            }
            ClientSubmission::Existing(client) => {
                let id = client.id;
                match self.clients.iter_mut().find(|stored| stored.id == id) {
                    Some(stored) => {
                        *stored = client;
                        info!(client_id = %id, "client replaced");
                        Submitted::Replaced(id)
                    }
                    None => {
                        warn!(client_id = %id, "client replacement targeted a missing record");
                        Submitted::MissingTarget
                    }
                }
            }
        }
    }

    /// Delete a client and cascade-delete every project it owns.
    ///
    /// The cascade matches on [`ClientId`], so renaming a client beforehand
    /// has no effect on which projects are removed.
    pub fn delete_client(&mut self, id: ClientId) -> MutationOutcome {
        let before = self.clients.len();
        self.clients.retain(|client| client.id != id);
        if self.clients.len() == before {
            warn!(client_id = %id, "client deletion targeted a missing record");
            return MutationOutcome::MissingTarget;
        }

        let orphaned = self.projects.len();
        self.projects.retain(|project| project.client_id != id);
        info!(
            client_id = %id,
            cascaded_projects = orphaned - self.projects.len(),
            "client deleted"
        );
        MutationOutcome::Applied
    }

    // --- projects ---

    /// Create or replace a project record.
    ///
    /// New drafts receive a fresh identity and a fresh instance of the
    /// default checklist template; replacements keep whatever checklist the
    /// submitted record carries.
    pub fn submit_project(&mut self, submission: ProjectSubmission) -> Submitted<ProjectId> {
        match submission {
            ProjectSubmission::New(draft) => {
                let id = ProjectId::random();
                self.projects.push(Project::from_draft(id, draft));
                info!(project_id = %id, "project created");
                Submitted::Created(id)
            }
            ProjectSubmission::Existing(project) => {
                let id = project.id;
                match self.projects.iter_mut().find(|stored| stored.id == id) {
                    Some(stored) => {
                        *stored = project;
                        info!(project_id = %id, "project replaced");
                        Submitted::Replaced(id)
                    }
                    None => {
                        warn!(project_id = %id, "project replacement targeted a missing record");
                        Submitted::MissingTarget
                    }
                }
            }
        }
    }

    /// Delete a project. No cascade.
    pub fn delete_project(&mut self, id: ProjectId) -> MutationOutcome {
        let before = self.projects.len();
        self.projects.retain(|project| project.id != id);
        if self.projects.len() == before {
            warn!(project_id = %id, "project deletion targeted a missing record");
            return MutationOutcome::MissingTarget;
        }
        info!(project_id = %id, "project deleted");
        MutationOutcome::Applied
    }

    /// Append an image reference to one project's gallery.
    pub fn add_project_image(
        &mut self,
        id: ProjectId,
        image_url: impl Into<String>,
    ) -> MutationOutcome {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) => {
                project.image_urls.push(image_url.into());
                info!(project_id = %id, "project image added");
                MutationOutcome::Applied
            }
            None => {
                warn!(project_id = %id, "image upload targeted a missing project");
                MutationOutcome::MissingTarget
            }
        }
    }

    /// Remove every occurrence of an image reference from one project's
    /// gallery. Removing a reference the gallery does not hold still counts
    /// as applied; only a missing project is reported.
    pub fn remove_project_image(&mut self, id: ProjectId, image_url: &str) -> MutationOutcome {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) => {
                project.image_urls.retain(|stored| stored != image_url);
                info!(project_id = %id, "project image removed");
                MutationOutcome::Applied
            }
            None => {
                warn!(project_id = %id, "image removal targeted a missing project");
                MutationOutcome::MissingTarget
            }
        }
    }

    /// Replace the notes field of one project.
    pub fn set_project_notes(
        &mut self,
        id: ProjectId,
        notes: impl Into<String>,
    ) -> MutationOutcome {
        match self.projects.iter_mut().find(|project| project.id == id) {
            Some(project) => {
                project.notes = Some(notes.into());
                MutationOutcome::Applied
            }
            None => {
                warn!(project_id = %id, "notes update targeted a missing project");
                MutationOutcome::MissingTarget
            }
        }
    }

    // --- invoices ---

    /// Next identity in the invoice sequence.
    ///
    /// Scans every stored invoice id, keeps the numeric suffixes that parse
    /// (malformed tokens are skipped, never an error), and renders the
    /// successor of the maximum. An empty store yields `BX0001`. A stored
    /// token already at the suffix ceiling saturates rather than wrapping.
    #[must_use]
    pub fn next_invoice_id(&self) -> InvoiceId {
        let highest = self
            .invoices
            .iter()
            .filter_map(|invoice| invoice.id.sequence())
            .max()
            .unwrap_or(0);
        InvoiceId::from_sequence(highest.saturating_add(1))
    }

    /// Create or replace an invoice record.
    ///
    /// The identity is always present on the payload; the caller assigns it
    /// via [`EntityStore::next_invoice_id`] before submission. A submission
    /// whose identity already exists replaces that record, otherwise it is
    /// appended.
    pub fn submit_invoice(&mut self, invoice: Invoice) -> Submitted<InvoiceId> {
        let id = invoice.id.clone();
        match self.invoices.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                *stored = invoice;
                info!(invoice_id = %id, "invoice replaced");
                Submitted::Replaced(id)
            }
            None => {
                self.invoices.push(invoice);
                info!(invoice_id = %id, "invoice created");
                Submitted::Created(id)
            }
        }
    }

    /// Delete an invoice.
    pub fn delete_invoice(&mut self, id: &InvoiceId) -> MutationOutcome {
        let before = self.invoices.len();
        self.invoices.retain(|invoice| &invoice.id != id);
        if self.invoices.len() == before {
            warn!(invoice_id = %id, "invoice deletion targeted a missing record");
            return MutationOutcome::MissingTarget;
        }
        info!(invoice_id = %id, "invoice deleted");
        MutationOutcome::Applied
    }

    // --- profile ---

    /// Merge a partial profile edit into the current session user and the
    /// matching stored account.
    ///
    /// Guest sessions have no stored account; the session copy alone is
    /// updated for them. Without a session user this is a reported no-op.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> MutationOutcome {
        let Some(current) = self.current_user.as_mut() else {
            warn!("profile update without a session user");
            return MutationOutcome::MissingTarget;
        };

        let ProfileUpdate {
            name,
            email,
            avatar_url,
        } = update;
        if let Some(name) = name {
            current.name = name;
        }
        if let Some(email) = email {
            current.email = email;
        }
        if let Some(avatar_url) = avatar_url {
            current.avatar_url = avatar_url;
        }

        let merged = current.clone();
        if let Some(stored) = self.users.iter_mut().find(|user| user.id == merged.id) {
            stored.name = merged.name.clone();
            stored.email = merged.email.clone();
            stored.avatar_url = merged.avatar_url.clone();
        }
        info!(user_id = %merged.id, "profile updated");
        MutationOutcome::Applied
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
