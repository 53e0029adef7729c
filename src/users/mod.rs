//! User registration depending only on abstractions.
//!
//! [`UserService`] needs somewhere to report failures, but it never names a
//! concrete sink: it takes any [`Logger`] at construction. Account validation
//! and persistence are likewise delegated to an
//! [`AccountCreator`](crate::accounts::AccountCreator) over some
//! [`DataAccess`](crate::accounts::DataAccess).

use crate::accounts::{AccountCreator, AccountError, DataAccess};
use crate::logging::Logger;
use crate::model::Account;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Registers users and reports the outcome through an injected logger.
pub struct UserService<D: DataAccess> {
    logger: Arc<dyn Logger>,
    creator: AccountCreator<D>,
}

impl<D: DataAccess> UserService<D> {
    pub fn new(logger: Arc<dyn Logger>, creator: AccountCreator<D>) -> Self {
        Self { logger, creator }
    }

    pub fn creator(&self) -> &AccountCreator<D> {
        &self.creator
    }

    /// Registers a user.
    ///
    /// Exactly one line is written to the logger per call: a confirmation on
    /// success, the error on failure. The error is then returned to the caller.
    #[instrument(skip(self, password))]
    pub async fn register_user(&self, username: &str, password: &str) -> Result<Account, AccountError> {
        debug!("Sending request");
        match self.creator.create_account(username, password).await {
            Ok(account) => {
                self.report(&format!("Registered user {}", account.username()));
                Ok(account)
            }
            Err(e) => {
                self.report(&format!("Error while registering user: {e}"));
                Err(e)
            }
        }
    }

    // A broken sink must not change the registration outcome.
    fn report(&self, message: &str) {
        if let Err(e) = self.logger.log(message) {
            warn!(error = %e, "Logger failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::InMemoryDataAccess;
    use crate::logging::{FileLogger, LogError};
    use crate::mock::RecordingLogger;

    fn service(logger: Arc<dyn Logger>) -> UserService<InMemoryDataAccess> {
        UserService::new(logger, AccountCreator::new(InMemoryDataAccess::new()))
    }

    #[tokio::test]
    async fn test_success_is_logged_once() {
        let logger = RecordingLogger::new();
        let service = service(Arc::new(logger.clone()));

        let account = service.register_user("alice", "pw123").await.unwrap();
        assert_eq!(account.username(), "alice");
        assert_eq!(logger.messages(), vec!["Registered user alice".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_is_logged_and_returned() {
        let logger = RecordingLogger::new();
        let service = service(Arc::new(logger.clone()));

        let result = service.register_user("", "pw123").await;
        assert!(matches!(result, Err(AccountError::InvalidArgument(_))));

        let messages = logger.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Error while registering user: Invalid argument"));
        assert!(service.creator().data_access().is_empty().await);
    }

    #[tokio::test]
    async fn test_logger_failure_does_not_mask_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let broken = FileLogger::new(dir.path().join("no-such-dir").join("app.log"));
        assert!(matches!(broken.log("probe"), Err(LogError::Io { .. })));

        let service = service(Arc::new(broken));
        let account = service.register_user("alice", "pw123").await.unwrap();
        assert_eq!(account.username(), "alice");
    }
}
