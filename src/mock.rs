//! # Test Doubles
//!
//! Utilities for testing collaborators in isolation.
//!
//! - [`MockDataAccess`]: a [`DataAccess`] that answers from a queue of
//!   expectations and records every account it was asked to save.
//! - [`RecordingLogger`]: a [`Logger`] that keeps every message in memory.
//!
//! # Example
//! ```ignore
//! let mock = MockDataAccess::new();
//! mock.expect_save().return_ok();
//!
//! let creator = AccountCreator::new(mock.clone());
//! creator.create_account("alice", "pw123").await?;
//!
//! mock.verify(); // Ensures all expectations were met
//! ```

use crate::accounts::{AccountError, DataAccess};
use crate::logging::{LogError, Logger};
use crate::model::Account;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected `save_account` call and the response to give it.
struct SaveExpectation {
    response: Result<(), AccountError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<SaveExpectation>,
    saved: Vec<Account>,
}

/// A [`DataAccess`] with expectation tracking for fluent testing.
///
/// Clones share state, so keep one handle for assertions and give a clone to
/// the code under test. A `save_account` call with no matching expectation
/// panics.
#[derive(Clone, Default)]
pub struct MockDataAccess {
    state: Arc<Mutex<MockState>>,
}

impl MockDataAccess {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `save_account` call.
    pub fn expect_save(&self) -> SaveExpectationBuilder {
        SaveExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Accounts passed to `save_account`, in call order.
    pub fn saved(&self) -> Vec<Account> {
        self.state.lock().unwrap().saved.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
    }
}

#[async_trait]
impl DataAccess for MockDataAccess {
    async fn save_account(&self, account: &Account) -> Result<(), AccountError> {
        let mut state = self.state.lock().unwrap();
        let expectation = state
            .expectations
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected save_account call for {:?}", account));
        state.saved.push(account.clone());
        expectation.response
    }
}

/// Builder for `save_account` expectations.
pub struct SaveExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl SaveExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: AccountError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), AccountError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(SaveExpectation { response });
    }
}

// =============================================================================
// RECORDING LOGGER
// =============================================================================

/// A [`Logger`] that stores messages instead of writing them anywhere.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) -> Result<(), LogError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
