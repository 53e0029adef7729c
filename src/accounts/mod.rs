//! Account creation split by responsibility.
//!
//! [`AccountCreator`] owns validation and construction of an
//! [`Account`](crate::model::Account); persisting it is the job of whatever
//! [`DataAccess`] implementation is handed to the creator. Either side can
//! change without touching the other.

pub mod creator;
pub mod error;
pub mod store;

pub use creator::*;
pub use error::*;
pub use store::*;

use crate::model::Account;
use async_trait::async_trait;

/// Persistence capability for accounts.
///
/// Implementations decide where an account goes (memory, database, ...).
/// [`AccountCreator`] only ever talks to this trait.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Persists a freshly created account.
    async fn save_account(&self, account: &Account) -> Result<(), AccountError>;
}
