use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared, lock-protected access to one stored account.
///
/// Holding the write guard serializes every mutation of that account, so a
/// balance check and the append that follows it can't interleave with
/// another writer.
pub type AccountHandle = Arc<RwLock<Account>>;

/// Storage for accounts, keyed by identification number.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn exists(&self, identification_number: &str) -> Result<bool>;

    /// Fails with `AccountNotFound` when no account has that key.
    async fn find(&self, identification_number: &str) -> Result<AccountHandle>;

    /// Fails with `AlreadyExists` when the key is taken; the stored account is
    /// left as it was.
    async fn insert(&self, account: Account) -> Result<()>;

    /// Removes the account stored under the key and returns it.
    async fn remove(&self, identification_number: &str) -> Result<Account>;

    /// Snapshot of every stored account, ordered by identification number.
    async fn all(&self) -> Result<Vec<Account>>;
}

pub type AccountRepositoryBox = Box<dyn AccountRepository>;
