//! Seeded demo data set.
//!
//! A coherent small-studio snapshot: three clients, their projects, a
//! couple of invoices, and two login-able accounts. Cross-references are
//! built by identity at seed time so the set stays valid regardless of the
//! ids minted for it.

use chrono::NaiveDate;

use crate::domain::{
    default_checklist, Client, ClientDraft, ClientId, ClientStatus, EntityStore, Invoice,
    InvoiceId, InvoiceStatus, Project, ProjectDraft, ProjectId, ProjectStatus, Role, ServiceType,
    User, UserId,
};

/// Email of the seeded administrator account.
pub const ADMIN_EMAIL: &str = "alex@bx.studio";
/// Password of the seeded administrator account.
pub const ADMIN_PASSWORD: &str = "admin123";
/// Email of the seeded regular account.
pub const MEMBER_EMAIL: &str = "jamie@bx.studio";
/// Password of the seeded regular account.
pub const MEMBER_PASSWORD: &str = "jamie123";

fn client(name: &str, contact: &str, industry: &str, status: ClientStatus, value: f64) -> Client {
    Client::from_draft(
        ClientId::random(),
        ClientDraft {
            name: name.to_owned(),
            contact_person: contact.to_owned(),
            email: format!(
                "{}@{}.example",
                contact.split_whitespace().next().unwrap_or("contact").to_lowercase(),
                name.split_whitespace().next().unwrap_or("client").to_lowercase(),
            ),
            phone: "+1 555 0100".to_owned(),
            location: "Lisbon".to_owned(),
            industry: industry.to_owned(),
            status,
            total_value: value,
            notes: None,
            avatar_url: crate::domain::user::derived_avatar_url(contact),
        },
    )
}

fn project(
    name: &str,
    client_id: ClientId,
    status: ProjectStatus,
    service_type: ServiceType,
) -> Project {
    Project::from_draft(
        ProjectId::random(),
        ProjectDraft {
            name: name.to_owned(),
            client_id,
            status,
            service_type,
            notes: None,
        },
    )
}

fn user(name: &str, email: &str, password: &str, role: Role) -> User {
    User {
        id: UserId::random(),
        name: name.to_owned(),
        email: email.to_owned(),
        password: Some(password.to_owned()),
        role,
        avatar_url: crate::domain::user::derived_avatar_url(name),
    }
}

/// Build a store populated with the demo data set and no session.
#[must_use]
pub fn seed_store() -> EntityStore {
    let acme = client(
        "Acme Retail",
        "Rita Alvarez",
        "Retail",
        ClientStatus::Active,
        48_000.0,
    );
    let northwind = client(
        "Northwind Coffee",
        "Tom Petersen",
        "Hospitality",
        ClientStatus::Active,
        21_500.0,
    );
    let halcyon = client(
        "Halcyon Health",
        "Priya Nair",
        "Healthcare",
        ClientStatus::Prospect,
        0.0,
    );

    let storefront = project(
        "Storefront rebuild",
        acme.id,
        ProjectStatus::InProgress,
        ServiceType::Ecommerce,
    );
    let loyalty_app = project(
        "Loyalty app",
        northwind.id,
        ProjectStatus::InProgress,
        ServiceType::MobileApp,
    );
    let mut brand_refresh = project(
        "Brand refresh",
        northwind.id,
        ProjectStatus::Completed,
        ServiceType::Branding,
    );
    // The finished project ships with its checklist fully ticked.
    brand_refresh.checklist = default_checklist()
        .into_iter()
        .map(|mut item| {
            item.completed = true;
            item
        })
        .collect();

    let invoices = vec![
        Invoice {
            id: InvoiceId::from_sequence(1),
            client_id: northwind.id,
            project_ids: vec![brand_refresh.id],
            description: "Brand refresh, final milestone".to_owned(),
            amount: 6_800.0,
            due_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap_or_default(),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: InvoiceId::from_sequence(2),
            client_id: acme.id,
            project_ids: vec![storefront.id],
            description: "Storefront rebuild, discovery and design".to_owned(),
            amount: 12_400.0,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap_or_default(),
            status: InvoiceStatus::Pending,
        },
    ];

    let users = vec![
        user("Alex Morgan", ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin),
        user("Jamie Fox", MEMBER_EMAIL, MEMBER_PASSWORD, Role::User),
    ];

    EntityStore::with_collections(
        vec![acme, northwind, halcyon],
        vec![storefront, loyalty_app, brand_refresh],
        invoices,
        users,
    )
}
