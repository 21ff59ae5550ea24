use crate::config::LedgerConfig;
use crate::domain::account::{Account, Amount, Balance};
use crate::domain::accounting;
use crate::domain::operation::Operation;
use crate::domain::ports::{AccountHandle, AccountRepositoryBox};
use crate::error::{LedgerError, Result};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::OwnedRwLockWriteGuard;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Entry point for every account use case.
///
/// `AccountService` owns the repository for its whole lifetime. Each use case
/// resolves the account by identification number first, so a missing account
/// is reported as `AccountNotFound` before any other check runs.
pub struct AccountService {
    repository: AccountRepositoryBox,
    config: LedgerConfig,
}

impl AccountService {
    /// Creates a new `AccountService`.
    ///
    /// # Arguments
    ///
    /// * `repository` - Storage for the accounts.
    /// * `config` - Ledger settings (calendar-day offset).
    pub fn new(repository: AccountRepositoryBox, config: LedgerConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Looks up the account registered under `identification_number`.
    pub async fn resolve_account(&self, identification_number: &str) -> Result<AccountHandle> {
        self.repository.find(identification_number).await
    }

    /// Takes the write guard of a resolved account.
    ///
    /// Fails with `AccountNotFound` if the account was deleted while waiting
    /// for the guard, so a mutation never lands on a detached account.
    async fn lock_for_update(
        &self,
        identification_number: &str,
        handle: AccountHandle,
    ) -> Result<OwnedRwLockWriteGuard<Account>> {
        let guard = Arc::clone(&handle).write_owned().await;
        let current = self.resolve_account(identification_number).await?;
        if Arc::ptr_eq(&handle, &current) {
            Ok(guard)
        } else {
            Err(LedgerError::AccountNotFound(
                identification_number.to_string(),
            ))
        }
    }

    /// Registers a new account with an empty statement and returns its id.
    pub async fn register(&self, identification_number: &str, name: &str) -> Result<Uuid> {
        let account = Account::new(identification_number, name);
        let id = account.id();
        self.repository.insert(account).await?;
        info!(identification_number, %id, "account registered");
        Ok(id)
    }

    pub async fn get_statement(&self, identification_number: &str) -> Result<Vec<Operation>> {
        let handle = self.resolve_account(identification_number).await?;
        let account = handle.read().await;
        Ok(account.operations().to_vec())
    }

    /// Statement restricted to the operations created on `date` (`YYYY-MM-DD`).
    pub async fn get_statement_for_date(
        &self,
        identification_number: &str,
        date: &str,
    ) -> Result<Vec<Operation>> {
        let handle = self.resolve_account(identification_number).await?;
        let account = handle.read().await;
        accounting::statement_for_date(account.operations(), date, self.config.utc_offset)
    }

    pub async fn get_balance(&self, identification_number: &str) -> Result<Balance> {
        let handle = self.resolve_account(identification_number).await?;
        let account = handle.read().await;
        account.balance()
    }

    pub async fn get_account(&self, identification_number: &str) -> Result<Account> {
        let handle = self.resolve_account(identification_number).await?;
        let account = handle.read().await;
        Ok(account.clone())
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.all().await
    }

    pub async fn deposit(
        &self,
        identification_number: &str,
        description: &str,
        amount: Decimal,
    ) -> Result<()> {
        let handle = self.resolve_account(identification_number).await?;
        let amount = Amount::new(amount)?;

        let mut account = self.lock_for_update(identification_number, handle).await?;
        account.deposit(description, amount, Utc::now())?;
        debug!(identification_number, %amount, "deposit recorded");
        Ok(())
    }

    /// Records a debit if the balance covers it.
    ///
    /// The balance check and the append run under the account's write guard.
    pub async fn withdraw(
        &self,
        identification_number: &str,
        description: &str,
        amount: Decimal,
    ) -> Result<()> {
        let handle = self.resolve_account(identification_number).await?;
        let amount = Amount::new(amount)?;

        let mut account = self.lock_for_update(identification_number, handle).await?;
        match account.withdraw(description, amount, Utc::now()) {
            Ok(()) => {
                debug!(identification_number, %amount, "withdrawal recorded");
                Ok(())
            }
            Err(e) => {
                warn!(identification_number, %amount, error = %e, "withdrawal rejected");
                Err(e)
            }
        }
    }

    pub async fn rename_account(&self, identification_number: &str, name: &str) -> Result<()> {
        let handle = self.resolve_account(identification_number).await?;
        let mut account = self.lock_for_update(identification_number, handle).await?;
        account.rename(name);
        debug!(identification_number, name, "account renamed");
        Ok(())
    }

    /// Deletes the account and returns the accounts that remain.
    pub async fn delete_account(&self, identification_number: &str) -> Result<Vec<Account>> {
        let removed = self.repository.remove(identification_number).await?;
        info!(
            identification_number,
            id = %removed.id(),
            operations = removed.operations().len(),
            "account deleted"
        );
        self.repository.all().await
    }
}
