//! Wiring and observability setup.
//!
//! - [`AccountSystem`] - builds the registration stack around a chosen logger
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod account_system;
pub mod tracing;

pub use account_system::*;
pub use self::tracing::*;
