use crate::domain::account::Account;
use crate::domain::ports::{AccountHandle, AccountRepository};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory account repository.
///
/// The key space sits behind one `RwLock`; each account behind its own, so
/// writers on different accounts don't contend. Existence checks and the
/// insert/remove that depend on them happen under a single write guard.
#[derive(Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, AccountHandle>>>,
}

impl InMemoryAccountRepository {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn exists(&self, identification_number: &str) -> Result<bool> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(identification_number))
    }

    async fn find(&self, identification_number: &str) -> Result<AccountHandle> {
        let accounts = self.accounts.read().await;
        accounts
            .get(identification_number)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound(identification_number.to_string()))
    }

    async fn insert(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.identification_number().to_string()) {
            Entry::Occupied(entry) => Err(LedgerError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(RwLock::new(account)));
                Ok(())
            }
        }
    }

    async fn remove(&self, identification_number: &str) -> Result<Account> {
        let handle = {
            let mut accounts = self.accounts.write().await;
            accounts
                .remove(identification_number)
                .ok_or_else(|| LedgerError::AccountNotFound(identification_number.to_string()))?
        };
        let account = handle.read().await.clone();
        Ok(account)
    }

    async fn all(&self) -> Result<Vec<Account>> {
        let handles: Vec<AccountHandle> = {
            let accounts = self.accounts.read().await;
            accounts.values().cloned().collect()
        };

        let mut snapshot = Vec::with_capacity(handles.len());
        for handle in handles {
            snapshot.push(handle.read().await.clone());
        }
        snapshot.sort_by(|a, b| a.identification_number().cmp(b.identification_number()));
        Ok(snapshot)
    }
}
