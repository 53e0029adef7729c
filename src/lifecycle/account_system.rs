use crate::accounts::{AccountCreator, InMemoryDataAccess};
use crate::logging::{ConsoleLogger, FileLogger, Logger};
use crate::users::UserService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Environment variable naming a file to log registrations to.
pub const LOG_FILE_ENV: &str = "SOLID_LOG_FILE";

/// Builds the user registration stack.
///
/// `AccountSystem` is the only place that chooses concrete types: it creates
/// the [`InMemoryDataAccess`], wraps it in an [`AccountCreator`], and hands
/// both the creator and the chosen [`Logger`] to a [`UserService`].
///
/// # Example
///
/// ```ignore
/// let system = AccountSystem::from_env();
/// system.user_service.register_user("alice", "pw123").await?;
/// assert_eq!(system.store.len().await, 1);
/// ```
pub struct AccountSystem {
    /// Entry point for registering users.
    pub user_service: UserService<InMemoryDataAccess>,

    /// Handle to the same store the service writes to.
    pub store: InMemoryDataAccess,
}

impl AccountSystem {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        let store = InMemoryDataAccess::new();
        let creator = AccountCreator::new(store.clone());
        let user_service = UserService::new(logger, creator);

        Self { user_service, store }
    }

    /// Logs to the file named by `SOLID_LOG_FILE` if set, otherwise to stdout.
    pub fn from_env() -> Self {
        let path = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from);
        Self::new(Self::logger_for(path))
    }

    fn logger_for(path: Option<PathBuf>) -> Arc<dyn Logger> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "Logging registrations to file");
                Arc::new(FileLogger::new(path))
            }
            None => Arc::new(ConsoleLogger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_logger_selected_for_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrations.log");
        let system = AccountSystem::new(AccountSystem::logger_for(Some(path.clone())));

        system.user_service.register_user("alice", "pw123").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Registered user alice\n");
    }

    #[tokio::test]
    async fn test_from_env_logs_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("from-env.log");
        std::env::set_var(LOG_FILE_ENV, &path);
        let system = AccountSystem::from_env();
        std::env::remove_var(LOG_FILE_ENV);

        system.user_service.register_user("carol", "pw").await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Registered user carol\n");
    }

    #[tokio::test]
    async fn test_service_and_store_share_state() {
        let system = AccountSystem::new(AccountSystem::logger_for(None));
        system.user_service.register_user("bob", "secret").await.unwrap();
        assert_eq!(system.store.len().await, 1);
    }
}
