use super::{AccountError, DataAccess};
use crate::model::{Account, AccountCreate};
use tracing::{debug, info, instrument, warn};

const CREDENTIALS_REQUIRED: &str = "Username and password are required";

/// Business logic for creating a new user account.
///
/// Validates the credentials, builds the [`Account`] and hands it to the
/// injected [`DataAccess`]. Nothing is saved when validation fails.
pub struct AccountCreator<D: DataAccess> {
    data_access: D,
}

impl<D: DataAccess> AccountCreator<D> {
    pub fn new(data_access: D) -> Self {
        Self { data_access }
    }

    /// The store this creator saves into.
    pub fn data_access(&self) -> &D {
        &self.data_access
    }

    /// Validates, builds and saves a new account.
    ///
    /// # Errors
    /// - [`AccountError::InvalidArgument`] if `username` or `password` is empty.
    /// - Any error returned by [`DataAccess::save_account`].
    #[instrument(skip(self, password))]
    pub async fn create_account(&self, username: &str, password: &str) -> Result<Account, AccountError> {
        self.create_from_params(AccountCreate::new(username, password)).await
    }

    /// Same as [`create_account`](Self::create_account), treating `None` as absent.
    pub async fn create_from_params(&self, params: AccountCreate) -> Result<Account, AccountError> {
        debug!(?params, "create_from_params called");
        let (username, password) = match (params.username, params.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                (username, password)
            }
            _ => {
                warn!("Rejected account with missing credentials");
                return Err(AccountError::InvalidArgument(CREDENTIALS_REQUIRED.to_string()));
            }
        };

        let account = Account::new(username, password);
        self.data_access.save_account(&account).await?;
        info!(username = %account.username(), "Account created");
        Ok(account)
    }
}
