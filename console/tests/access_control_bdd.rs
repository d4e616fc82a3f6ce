//! Behaviour tests for render-time Finance gating.

use std::cell::RefCell;

use console::controller::{ActiveView, AppController, ViewContent};
use console::domain::LoginCredentials;
use console::example_data::{self, ADMIN_EMAIL, ADMIN_PASSWORD};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct GatingWorld {
    controller: RefCell<AppController>,
}

#[fixture]
fn world() -> GatingWorld {
    GatingWorld {
        controller: RefCell::new(AppController::new(example_data::seed_store())),
    }
}

#[given("a console seeded with the demo data set")]
fn a_seeded_console(world: &GatingWorld) {
    assert!(!world.controller.borrow().store().invoices().is_empty());
}

#[given("a guest session")]
fn a_guest_session(world: &GatingWorld) {
    world.controller.borrow_mut().guest_login();
}

#[given("the administrator is signed in")]
fn the_administrator_is_signed_in(world: &GatingWorld) {
    let creds =
        LoginCredentials::try_from_parts(ADMIN_EMAIL, ADMIN_PASSWORD).expect("seeded credentials");
    world
        .controller
        .borrow_mut()
        .login(&creds)
        .expect("seeded login succeeds");
}

#[when("they navigate to the Finance section")]
fn they_navigate_to_finance(world: &GatingWorld) {
    world.controller.borrow_mut().navigate(ActiveView::Finance);
}

#[then("the Finance section is selected")]
fn the_finance_section_is_selected(world: &GatingWorld) {
    assert_eq!(world.controller.borrow().active_view(), ActiveView::Finance);
}

#[then("the access denied view is rendered")]
fn the_access_denied_view_is_rendered(world: &GatingWorld) {
    assert_eq!(
        world.controller.borrow().resolve_view(),
        ViewContent::AccessDenied
    );
}

#[then("the finance view is rendered")]
fn the_finance_view_is_rendered(world: &GatingWorld) {
    let controller = world.controller.borrow();
    match controller.resolve_view() {
        ViewContent::Finance { invoices, projects } => {
            assert!(!invoices.is_empty());
            assert!(!projects.is_empty());
        }
        other => panic!("expected the finance view, got {other:?}"),
    }
}

#[scenario(path = "tests/features/access_control.feature")]
fn access_control_scenarios(world: GatingWorld) {
    drop(world);
}
