//! Tests for the entity store mutation handlers.

use std::collections::HashSet;

use chrono::NaiveDate;
use rstest::rstest;

use super::EntityStore;
use crate::domain::client::ClientStatus;
use crate::domain::invoice::InvoiceStatus;
use crate::domain::project::{ProjectDraft, ProjectStatus, ServiceType};
use crate::domain::user::ProfileUpdate;
use crate::domain::{
    Client, ClientDraft, ClientId, ClientSubmission, Invoice, InvoiceId, MutationOutcome,
    ProjectId, ProjectSubmission, Submitted,
};

fn client_draft(name: &str) -> ClientDraft {
    ClientDraft {
        name: name.to_owned(),
        contact_person: "Sam Contact".to_owned(),
        email: format!("contact@{}.example", name.to_lowercase()),
        phone: "+1 555 0100".to_owned(),
        location: "Lisbon".to_owned(),
        industry: "Retail".to_owned(),
        status: ClientStatus::Active,
        total_value: 12_500.0,
        notes: None,
        avatar_url: "https://picsum.photos/seed/sam/100/100".to_owned(),
    }
}

fn project_draft(name: &str, client_id: ClientId) -> ProjectDraft {
    ProjectDraft {
        name: name.to_owned(),
        client_id,
        status: ProjectStatus::InProgress,
        service_type: ServiceType::WebDevelopment,
        notes: None,
    }
}

fn invoice(id: InvoiceId, client_id: ClientId) -> Invoice {
    Invoice {
        id,
        client_id,
        project_ids: Vec::new(),
        description: "Milestone one".to_owned(),
        amount: 4_200.0,
        due_date: NaiveDate::from_ymd_opt(2026, 9, 30).expect("valid date"),
        status: InvoiceStatus::Pending,
    }
}

fn created_id<Id>(submitted: Submitted<Id>) -> Id {
    match submitted {
        Submitted::Created(id) => id,
        Submitted::Replaced(_) | Submitted::MissingTarget => panic!("expected a creation"),
    }
}

// --- identity assignment ---

#[rstest]
fn new_submissions_always_receive_distinct_identities() {
    let mut store = EntityStore::new();
    let mut client_ids = HashSet::new();
    let mut project_ids = HashSet::new();

    for n in 0..8 {
        let client_id = created_id(store.submit_client(ClientSubmission::New(client_draft(
            &format!("Client {n}"),
        ))));
        assert!(client_ids.insert(client_id));
        let project_id = created_id(store.submit_project(ProjectSubmission::New(project_draft(
            &format!("Project {n}"),
            client_id,
        ))));
        assert!(project_ids.insert(project_id));
    }

    assert_eq!(store.clients().len(), 8);
    assert_eq!(store.projects().len(), 8);
}

// --- clients ---

#[rstest]
fn client_replacement_swaps_the_whole_record() {
    let mut store = EntityStore::new();
    let id = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));

    let mut edited = store.client(id).expect("client exists").clone();
    edited.name = "Acme Industries".to_owned();
    edited.status = ClientStatus::Former;

    assert_eq!(
        store.submit_client(ClientSubmission::Existing(edited)),
        Submitted::Replaced(id)
    );
    let stored = store.client(id).expect("client still exists");
    assert_eq!(stored.name, "Acme Industries");
    assert_eq!(stored.status, ClientStatus::Former);
    assert_eq!(store.clients().len(), 1);
}

#[rstest]
fn replacing_a_missing_client_is_a_reported_no_op() {
    let mut store = EntityStore::new();
    created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));

    let phantom = Client::from_draft(ClientId::random(), client_draft("Phantom"));
    let before = store.clients().to_vec();

    assert_eq!(
        store.submit_client(ClientSubmission::Existing(phantom)),
        Submitted::MissingTarget
    );
    assert_eq!(store.clients(), before.as_slice());
}

#[rstest]
fn deleting_a_client_cascades_to_its_projects_and_no_others() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let globex = created_id(store.submit_client(ClientSubmission::New(client_draft("Globex"))));

    created_id(store.submit_project(ProjectSubmission::New(project_draft("Acme site", acme))));
    created_id(store.submit_project(ProjectSubmission::New(project_draft("Acme app", acme))));
    let kept =
        created_id(store.submit_project(ProjectSubmission::New(project_draft("Globex site", globex))));

    assert_eq!(store.delete_client(acme), MutationOutcome::Applied);

    assert!(store.client(acme).is_none());
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.projects().first().map(|p| p.id), Some(kept));
}

#[rstest]
fn deleting_a_missing_client_leaves_projects_alone() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    created_id(store.submit_project(ProjectSubmission::New(project_draft("Acme site", acme))));

    assert_eq!(
        store.delete_client(ClientId::random()),
        MutationOutcome::MissingTarget
    );
    assert_eq!(store.clients().len(), 1);
    assert_eq!(store.projects().len(), 1);
}

// --- projects ---

#[rstest]
fn new_projects_get_independent_checklists() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let first = created_id(store.submit_project(ProjectSubmission::New(project_draft("A", acme))));
    let second = created_id(store.submit_project(ProjectSubmission::New(project_draft("B", acme))));

    // Tick every step of the first project's checklist via full replacement.
    let mut edited = store.project(first).expect("project exists").clone();
    for item in &mut edited.checklist {
        item.completed = true;
    }
    assert_eq!(
        store.submit_project(ProjectSubmission::Existing(edited)),
        Submitted::Replaced(first)
    );

    let untouched = store.project(second).expect("other project exists");
    assert!(untouched.checklist.iter().all(|item| !item.completed));

    let ticked = store.project(first).expect("project exists");
    let shared: Vec<_> = ticked
        .checklist
        .iter()
        .filter(|item| untouched.checklist.iter().any(|other| other.id == item.id))
        .collect();
    assert!(shared.is_empty(), "checklist items must never be aliased");
}

#[rstest]
fn project_replacement_preserves_the_submitted_checklist() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let id = created_id(store.submit_project(ProjectSubmission::New(project_draft("A", acme))));

    let mut edited = store.project(id).expect("project exists").clone();
    edited.checklist.truncate(2);
    edited.status = ProjectStatus::Completed;
    store.submit_project(ProjectSubmission::Existing(edited.clone()));

    assert_eq!(store.project(id), Some(&edited));
}

#[rstest]
fn deleting_a_project_does_not_cascade() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let id = created_id(store.submit_project(ProjectSubmission::New(project_draft("A", acme))));

    assert_eq!(store.delete_project(id), MutationOutcome::Applied);
    assert_eq!(store.delete_project(id), MutationOutcome::MissingTarget);
    assert_eq!(store.clients().len(), 1);
}

#[rstest]
fn image_mutations_touch_only_the_target_project() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let first = created_id(store.submit_project(ProjectSubmission::New(project_draft("A", acme))));
    let second = created_id(store.submit_project(ProjectSubmission::New(project_draft("B", acme))));

    assert_eq!(
        store.add_project_image(first, "https://cdn.example/shot-1.png"),
        MutationOutcome::Applied
    );
    assert_eq!(
        store.add_project_image(first, "https://cdn.example/shot-1.png"),
        MutationOutcome::Applied
    );
    assert_eq!(
        store.add_project_image(first, "https://cdn.example/shot-2.png"),
        MutationOutcome::Applied
    );

    assert!(store
        .project(second)
        .expect("other project exists")
        .image_urls
        .is_empty());

    // Removal drops every occurrence of the reference.
    assert_eq!(
        store.remove_project_image(first, "https://cdn.example/shot-1.png"),
        MutationOutcome::Applied
    );
    assert_eq!(
        store.project(first).expect("project exists").image_urls,
        vec!["https://cdn.example/shot-2.png".to_owned()]
    );

    assert_eq!(
        store.add_project_image(ProjectId::random(), "https://cdn.example/x.png"),
        MutationOutcome::MissingTarget
    );
    assert_eq!(
        store.remove_project_image(ProjectId::random(), "https://cdn.example/x.png"),
        MutationOutcome::MissingTarget
    );
}

#[rstest]
fn notes_updates_replace_only_the_target_field() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let first = created_id(store.submit_project(ProjectSubmission::New(project_draft("A", acme))));
    let second = created_id(store.submit_project(ProjectSubmission::New(project_draft("B", acme))));

    assert_eq!(
        store.set_project_notes(first, "met the client on Friday"),
        MutationOutcome::Applied
    );
    assert_eq!(
        store.project(first).expect("project exists").notes.as_deref(),
        Some("met the client on Friday")
    );
    assert_eq!(store.project(second).expect("other project exists").notes, None);
    assert_eq!(
        store.set_project_notes(ProjectId::random(), "nobody home"),
        MutationOutcome::MissingTarget
    );
}

// --- invoices ---

#[rstest]
#[case(&[], "BX0001")]
#[case(&["BX0001", "BX0003"], "BX0004")]
#[case(&["BX0001", "garbage"], "BX0002")]
#[case(&["nonsense", "also-nonsense"], "BX0001")]
#[case(&["BX4294967295"], "BX4294967295")]
fn invoice_sequencing_skips_malformed_tokens(#[case] existing: &[&str], #[case] expected: &str) {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    for token in existing {
        store.submit_invoice(invoice(InvoiceId::new(*token), acme));
    }

    assert_eq!(store.next_invoice_id().as_str(), expected);
}

#[rstest]
fn invoice_submission_replaces_on_identity_match() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));

    let id = store.next_invoice_id();
    assert_eq!(
        store.submit_invoice(invoice(id.clone(), acme)),
        Submitted::Created(id.clone())
    );

    let mut edited = store.invoice(&id).expect("invoice exists").clone();
    edited.status = InvoiceStatus::Paid;
    assert_eq!(
        store.submit_invoice(edited),
        Submitted::Replaced(id.clone())
    );

    assert_eq!(store.invoices().len(), 1);
    assert_eq!(
        store.invoice(&id).map(|stored| stored.status),
        Some(InvoiceStatus::Paid)
    );
}

#[rstest]
fn invoice_deletion_reports_missing_targets() {
    let mut store = EntityStore::new();
    let acme = created_id(store.submit_client(ClientSubmission::New(client_draft("Acme"))));
    let id = store.next_invoice_id();
    store.submit_invoice(invoice(id.clone(), acme));

    assert_eq!(store.delete_invoice(&id), MutationOutcome::Applied);
    assert_eq!(store.delete_invoice(&id), MutationOutcome::MissingTarget);
    assert!(store.invoices().is_empty());
}

// --- profile ---

#[rstest]
fn profile_update_without_a_session_is_a_reported_no_op() {
    let mut store = EntityStore::new();
    assert_eq!(
        store.update_profile(ProfileUpdate {
            name: Some("Nobody".to_owned()),
            ..ProfileUpdate::default()
        }),
        MutationOutcome::MissingTarget
    );
}

#[rstest]
fn profile_update_merges_into_session_and_stored_account() {
    let mut store = EntityStore::new();
    store
        .register(crate::domain::RegistrationDraft {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            password: "hunter2".to_owned(),
        })
        .expect("registration succeeds");

    assert_eq!(
        store.update_profile(ProfileUpdate {
            name: Some("Jane Q. Doe".to_owned()),
            email: None,
            avatar_url: Some("https://cdn.example/jane.png".to_owned()),
        }),
        MutationOutcome::Applied
    );

    let session = store.current_user().expect("session user");
    assert_eq!(session.name, "Jane Q. Doe");
    assert_eq!(session.email, "jane@example.com");
    assert_eq!(session.avatar_url, "https://cdn.example/jane.png");
    assert_eq!(session.password, None);

    let stored = store
        .users()
        .iter()
        .find(|user| user.email == "jane@example.com")
        .expect("stored account");
    assert_eq!(stored.name, "Jane Q. Doe");
    assert_eq!(stored.avatar_url, "https://cdn.example/jane.png");
    // The stored credential survives a profile edit.
    assert_eq!(stored.password.as_deref(), Some("hunter2"));
}

#[rstest]
fn guest_profile_update_touches_only_the_session_copy() {
    let mut store = EntityStore::new();
    store.guest_login();

    assert_eq!(
        store.update_profile(ProfileUpdate {
            name: Some("Visiting Reviewer".to_owned()),
            ..ProfileUpdate::default()
        }),
        MutationOutcome::Applied
    );
    assert_eq!(
        store.current_user().map(|user| user.name.as_str()),
        Some("Visiting Reviewer")
    );
    assert!(store.users().is_empty());
}
