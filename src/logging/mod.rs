//! Interchangeable log sinks.
//!
//! High-level code such as [`UserService`](crate::users::UserService) depends
//! on the [`Logger`] trait, never on a concrete sink. Swapping the console for a
//! file (or for the `tracing` pipeline) is a constructor argument, not a code
//! change.

pub mod error;
pub mod file;

pub use error::*;
pub use file::*;

/// A place log messages can be written to.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str) -> Result<(), LogError>;
}

/// Writes each message as a line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) -> Result<(), LogError> {
        println!("{message}");
        Ok(())
    }
}

/// Forwards messages to the structured `tracing` pipeline at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) -> Result<(), LogError> {
        tracing::info!("{}", message);
        Ok(())
    }
}
