use super::{AccountError, DataAccess};
use crate::model::Account;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Keeps accounts in memory, keyed by username.
///
/// Clones share the same underlying map, so a clone can be handed to an
/// [`AccountCreator`](super::AccountCreator) while the original is kept for
/// inspection.
#[derive(Clone, Default)]
pub struct InMemoryDataAccess {
    store: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryDataAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_account(&self, username: &str) -> Option<Account> {
        self.store.read().await.get(username).cloned()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl DataAccess for InMemoryDataAccess {
    async fn save_account(&self, account: &Account) -> Result<(), AccountError> {
        let mut store = self.store.write().await;
        if store.contains_key(account.username()) {
            warn!(username = %account.username(), "Duplicate account");
            return Err(AccountError::AlreadyExists(account.username().to_string()));
        }
        store.insert(account.username().to_string(), account.clone());
        debug!(username = %account.username(), size = store.len(), "Saved");
        Ok(())
    }
}
