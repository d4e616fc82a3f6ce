//! The application controller: navigation, modal flow, and intent dispatch.
//!
//! [`AppController`] owns the [`EntityStore`] together with the two pieces
//! of navigation state layered on top of it (active section, open modal)
//! and the sidebar presentational flag. Every UI intent flows through here:
//! requests open a modal, submissions delegate to a store handler and close
//! the modal on completion, and deletes read their target from the active
//! modal variant.

pub mod modal;
pub mod view;

use tracing::info;

use crate::domain::{
    AuthError, Client, ClientId, ClientSubmission, EntityStore, Invoice, InvoiceId,
    LoginCredentials, MutationOutcome, ProfileUpdate, Project, ProjectId, ProjectSubmission,
    RegistrationDraft, Role, Submitted,
};

pub use self::modal::ModalState;
pub use self::view::{ActiveView, ViewContent};

/// Viewport width at which the collapsible mobile sidebar disappears.
const DESKTOP_BREAKPOINT_PX: u32 = 768;

/// Top-level application state and intent mediator.
#[derive(Debug, Default)]
pub struct AppController {
    store: EntityStore,
    modal: ModalState,
    view: ActiveView,
    sidebar_open: bool,
}

impl AppController {
    /// Start a controller over an existing store (typically seeded).
    #[must_use]
    pub fn new(store: EntityStore) -> Self {
        Self {
            store,
            modal: ModalState::Closed,
            view: ActiveView::Dashboard,
            sidebar_open: false,
        }
    }

    /// Read-only view of the entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// The currently open modal, if any.
    #[must_use]
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// The selected top-level section.
    #[must_use]
    pub fn active_view(&self) -> ActiveView {
        self.view
    }

    /// Whether the mobile sidebar is expanded.
    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    // --- navigation ---

    /// Select a top-level section. Always succeeds; authorisation is
    /// applied in [`AppController::resolve_view`].
    pub fn navigate(&mut self, view: ActiveView) {
        self.view = view;
    }

    /// Flip the mobile sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Viewport resize event; collapses the mobile sidebar on desktop
    /// widths. Has no effect on the data model.
    pub fn viewport_resized(&mut self, width_px: u32) {
        if width_px >= DESKTOP_BREAKPOINT_PX {
            self.sidebar_open = false;
        }
    }

    // --- modal intents ---

    /// Open the blank client form.
    pub fn request_add_client(&mut self) {
        self.modal = ModalState::AddClient;
    }

    /// Open the client form pre-filled with a snapshot.
    pub fn request_edit_client(&mut self, client: Client) {
        self.modal = ModalState::EditClient(client);
    }

    /// Open the delete confirmation for a client snapshot.
    pub fn request_delete_client(&mut self, client: Client) {
        self.modal = ModalState::DeleteClient(client);
    }

    /// Open the blank project form.
    pub fn request_add_project(&mut self) {
        self.modal = ModalState::AddProject;
    }

    /// Open the project form pre-filled with a snapshot.
    pub fn request_edit_project(&mut self, project: Project) {
        self.modal = ModalState::EditProject(project);
    }

    /// Open the delete confirmation for a project snapshot.
    pub fn request_delete_project(&mut self, project: Project) {
        self.modal = ModalState::DeleteProject(project);
    }

    /// Open the blank invoice form. The form obtains its identity from
    /// [`AppController::next_invoice_id`].
    pub fn request_add_invoice(&mut self) {
        self.modal = ModalState::AddInvoice;
    }

    /// Open the invoice form pre-filled with a snapshot.
    pub fn request_edit_invoice(&mut self, invoice: Invoice) {
        self.modal = ModalState::EditInvoice(invoice);
    }

    /// Open the delete confirmation for an invoice snapshot.
    pub fn request_delete_invoice(&mut self, invoice: Invoice) {
        self.modal = ModalState::DeleteInvoice(invoice);
    }

    /// Open the profile form for the session user. Without a session this
    /// is a no-op.
    pub fn request_edit_profile(&mut self) {
        if let Some(user) = self.store.current_user() {
            self.modal = ModalState::EditProfile(user.clone());
        }
    }

    /// Close whichever modal is open. Closing an already-closed modal is a
    /// no-op.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    // --- submissions ---

    /// Submit the client form and close the modal.
    pub fn submit_client(&mut self, submission: ClientSubmission) -> Submitted<ClientId> {
        let outcome = self.store.submit_client(submission);
        self.close_modal();
        outcome
    }

    /// Confirm the pending client deletion. Reads the target from the
    /// active modal; with no delete confirmation open this is a reported
    /// no-op.
    pub fn confirm_delete_client(&mut self) -> MutationOutcome {
        let ModalState::DeleteClient(target) = &self.modal else {
            return MutationOutcome::MissingTarget;
        };
        let outcome = self.store.delete_client(target.id);
        self.close_modal();
        outcome
    }

    /// Submit the project form and close the modal.
    pub fn submit_project(&mut self, submission: ProjectSubmission) -> Submitted<ProjectId> {
        let outcome = self.store.submit_project(submission);
        self.close_modal();
        outcome
    }

    /// Confirm the pending project deletion; same contract as
    /// [`AppController::confirm_delete_client`].
    pub fn confirm_delete_project(&mut self) -> MutationOutcome {
        let ModalState::DeleteProject(target) = &self.modal else {
            return MutationOutcome::MissingTarget;
        };
        let outcome = self.store.delete_project(target.id);
        self.close_modal();
        outcome
    }

    /// Identity the blank invoice form should use.
    #[must_use]
    pub fn next_invoice_id(&self) -> InvoiceId {
        self.store.next_invoice_id()
    }

    /// Submit the invoice form and close the modal.
    pub fn submit_invoice(&mut self, invoice: Invoice) -> Submitted<InvoiceId> {
        let outcome = self.store.submit_invoice(invoice);
        self.close_modal();
        outcome
    }

    /// Confirm the pending invoice deletion; same contract as
    /// [`AppController::confirm_delete_client`].
    pub fn confirm_delete_invoice(&mut self) -> MutationOutcome {
        let ModalState::DeleteInvoice(target) = &self.modal else {
            return MutationOutcome::MissingTarget;
        };
        let id = target.id.clone();
        let outcome = self.store.delete_invoice(&id);
        self.close_modal();
        outcome
    }

    /// Submit the profile form and close the modal.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> MutationOutcome {
        let outcome = self.store.update_profile(update);
        self.close_modal();
        outcome
    }

    // --- reports intents (modal-free) ---

    /// Append an uploaded image to a project's gallery.
    pub fn upload_project_image(
        &mut self,
        id: ProjectId,
        image_url: impl Into<String>,
    ) -> MutationOutcome {
        self.store.add_project_image(id, image_url)
    }

    /// Remove an image reference from a project's gallery.
    pub fn delete_project_image(&mut self, id: ProjectId, image_url: &str) -> MutationOutcome {
        self.store.remove_project_image(id, image_url)
    }

    /// Replace a project's notes.
    pub fn change_project_notes(
        &mut self,
        id: ProjectId,
        notes: impl Into<String>,
    ) -> MutationOutcome {
        self.store.set_project_notes(id, notes)
    }

    // --- session ---

    /// Sign in against the stored accounts.
    pub fn login(&mut self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        self.store.login(credentials).map(|_| ())
    }

    /// Start a transient guest session.
    pub fn guest_login(&mut self) {
        self.store.guest_login();
    }

    /// Register a new account and sign it in.
    pub fn register(&mut self, draft: RegistrationDraft) -> Result<(), AuthError> {
        self.store.register(draft).map(|_| ())
    }

    /// End the session and reset navigation to its initial state.
    pub fn logout(&mut self) {
        self.store.clear_session();
        self.view = ActiveView::Dashboard;
        self.modal = ModalState::Closed;
        self.sidebar_open = false;
        info!("signed out, navigation reset");
    }

    // --- rendering ---

    /// Resolve the selected section into renderable content.
    ///
    /// This is where the single authorisation rule lives: a `Guest` session
    /// asking for `Finance` gets [`ViewContent::AccessDenied`] even though
    /// the navigation itself succeeded.
    #[must_use]
    pub fn resolve_view(&self) -> ViewContent<'_> {
        let Some(user) = self.store.current_user() else {
            return ViewContent::SignedOut;
        };

        match self.view {
            ActiveView::Dashboard => ViewContent::Dashboard {
                clients: self.store.clients(),
                projects: self.store.projects(),
            },
            ActiveView::Clients => ViewContent::Clients(self.store.clients()),
            ActiveView::Projects => ViewContent::Projects(self.store.projects()),
            ActiveView::Finance => {
                if user.role == Role::Guest {
                    ViewContent::AccessDenied
                } else {
                    ViewContent::Finance {
                        invoices: self.store.invoices(),
                        projects: self.store.projects(),
                    }
                }
            }
            ActiveView::Reports => ViewContent::Reports(self.store.projects()),
            ActiveView::Settings => ViewContent::Settings,
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
