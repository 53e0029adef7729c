#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # SOLID Recipe
//!
//! > **The five SOLID principles, one small module each.**
//!
//! Every module stands on its own: a couple of traits, two or three types
//! implementing them, and a test suite showing the principle at work.
//!
//! ## 🏗️ Design Philosophy
//!
//! Object-oriented examples of SOLID usually lean on class inheritance. In Rust
//! the same ideas are expressed with **traits** (capabilities) and
//! **constructor injection** (passing a trait object or generic parameter to
//! `new`). Where inheritance is the problem, as with squares and rectangles, the
//! types are simply kept apart.
//!
//! ## 🗺️ Module Tour
//!
//! | Principle | Module | Key items |
//! |-----------|--------|-----------|
//! | Single Responsibility | [`accounts`] | [`AccountCreator`](accounts::AccountCreator), [`DataAccess`](accounts::DataAccess) |
//! | Open/Closed | [`shapes`], [`shipping`] | [`Shape`](shapes::Shape), [`ShippingCalculator`](shipping::ShippingCalculator) |
//! | Liskov Substitution | [`shapes`] | [`Rectangle`](shapes::Rectangle), [`Square`](shapes::Square), [`AreaCalculator`](shapes::AreaCalculator) |
//! | Interface Segregation | [`animals`] | [`Animal`](animals::Animal), [`Flyable`](animals::Flyable), [`Swimmable`](animals::Swimmable) |
//! | Dependency Inversion | [`logging`], [`users`] | [`Logger`](logging::Logger), [`UserService`](users::UserService) |
//!
//! Supporting modules:
//! - [`model`]: plain data ([`Account`](model::Account), [`Product`](model::Product)).
//! - [`lifecycle`]: wiring ([`AccountSystem`](lifecycle::AccountSystem)) and [`setup_tracing`](lifecycle::setup_tracing).
//! - [`mock`]: test doubles for the injected capabilities.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Modules with a failure path define their own error type
//! ([`AccountError`](accounts::AccountError), [`LogError`](logging::LogError)).
//! The only domain error is an invalid argument when an account is created
//! without a username or password.
//!
//! ### 2. Async Persistence
//! [`DataAccess`](accounts::DataAccess) is an `async_trait`, so account creation
//! and registration are `async fn`s. Everything else is synchronous.
//!
//! ### 3. Observability
//! `tracing` is used throughout with structured fields. Passwords are never
//! recorded. See [`lifecycle::tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Send registration messages to a file instead of stdout
//! SOLID_LOG_FILE=registrations.log cargo run
//!
//! cargo test
//! ```

pub mod accounts;
pub mod animals;
pub mod lifecycle;
pub mod logging;
pub mod mock;
pub mod model;
pub mod shapes;
pub mod shipping;
pub mod users;
