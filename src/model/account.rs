use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a registered user account.
///
/// Fields are private and only ever set by [`Account::new`], so an account is
/// immutable once built. Creation goes through
/// [`AccountCreator`](crate::accounts::AccountCreator), which validates the
/// credentials first.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    username: String,
    #[serde(skip_serializing)]
    password: String,
}

impl Account {
    /// Creates a new Account instance.
    ///
    /// # Arguments
    /// * `username` - Unique login name
    /// * `password` - Account password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep passwords out of log output.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload for creating a new account.
///
/// Both fields are optional so that a missing value (e.g. from a submitted
/// form) can be told apart from an empty one; either way creation fails.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountCreate {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AccountCreate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for AccountCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCreate")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let account = Account::new("alice", "pw123");
        let rendered = format!("{:?}", account);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("pw123"));

        let params = AccountCreate::new("alice", "pw123");
        assert!(!format!("{:?}", params).contains("pw123"));
    }

    #[test]
    fn test_account_create_default_is_absent() {
        let params = AccountCreate::default();
        assert!(params.username.is_none());
        assert!(params.password.is_none());
    }

    #[test]
    fn test_serialized_account_omits_password() {
        let json = serde_json::to_string(&Account::new("alice", "pw123")).unwrap();
        assert_eq!(json, r#"{"username":"alice"}"#);
        assert!(!json.contains("pw123"));
    }

    #[tokio::test]
    async fn test_missing_field_deserializes_as_absent_and_is_rejected() {
        use crate::accounts::{AccountCreator, AccountError, InMemoryDataAccess};

        let params: AccountCreate = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(params.username.as_deref(), Some("alice"));
        assert!(params.password.is_none());

        let store = InMemoryDataAccess::new();
        let creator = AccountCreator::new(store.clone());
        let result = creator.create_from_params(params).await;
        assert!(matches!(result, Err(AccountError::InvalidArgument(_))));
        assert!(store.is_empty().await);
    }
}
