//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. The output uses
//! the compact format without module paths (`with_target(false)`); structured
//! fields such as `username` or `shape` carry the context instead.
//!
//! ```bash
//! # Registration outcomes only
//! RUST_LOG=info cargo run
//!
//! # Areas, shipping costs, animal activities and store operations
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=solid_recipe::accounts=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run of the demo looks like:
//!
//! ```text
//! INFO registration:register_user:create_account: Account created username=alice
//! WARN registration:register_user:create_account: Rejected account with missing credentials
//! ```
//!
//! Passwords never appear in these fields: `register_user` skips them and
//! [`Account`](crate::model::Account) redacts its `Debug` output.

/// Initializes the global tracing subscriber.
///
/// Call once, at the start of `main`. Tests do not need it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
