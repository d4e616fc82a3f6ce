//! Driven adapters for external collaborators.

pub mod remote;

pub use self::remote::RestBackend;
