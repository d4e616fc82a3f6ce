//! Application core for the BX admin console.
//!
//! The crate owns the in-memory entity store (clients, projects, invoices,
//! users), the mutation handlers that advance it, and the navigation state
//! (active view plus modal dialog) that a UI shell renders from. Rendering
//! itself lives outside this crate: presentational components consume
//! read-only snapshots via [`controller::ViewContent`] and raise intents on
//! [`controller::AppController`].
//!
//! Public surface:
//! - [`domain`] — entities, payload drafts, the [`domain::EntityStore`] and
//!   its session operations, and the driven backend port.
//! - [`controller`] — modal state machine, view selector with role gating,
//!   and the top-level [`controller::AppController`].
//! - [`config`] — fail-fast environment configuration for the backend
//!   collaborator.
//! - [`outbound`] — the REST backend adapter wired from configuration.
//! - [`telemetry`] — tracing subscriber bootstrap for embedding shells.

pub mod config;
pub mod controller;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod outbound;
pub mod telemetry;
