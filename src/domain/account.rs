use super::accounting;
use super::operation::Operation;
use crate::error::{LedgerError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use uuid::Uuid;

/// Signed net amount of an account's operations.
///
/// A thin wrapper around `rust_decimal::Decimal` so balances and amounts can't
/// be mixed up by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A strictly positive monetary amount carried by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidAmount(format!(
                "{value} (amount must be positive)"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A registered customer and their statement.
///
/// The identification number and `id` are fixed at registration. The
/// statement only grows; operations are never edited or reordered.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    identification_number: String,
    name: String,
    id: Uuid,
    #[serde(rename = "statement")]
    operations: Vec<Operation>,
}

impl Account {
    pub fn new(identification_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identification_number: identification_number.into(),
            name: name.into(),
            id: Uuid::new_v4(),
            operations: Vec::new(),
        }
    }

    pub fn identification_number(&self) -> &str {
        &self.identification_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn balance(&self) -> Result<Balance> {
        accounting::compute_balance(&self.operations)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a credit operation.
    ///
    /// Refused with `BalanceOverflow` when the new balance would not fit in a
    /// `Decimal`; the statement is left untouched.
    pub fn deposit(
        &mut self,
        description: impl Into<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let balance = self.balance()?;
        if balance.checked_add(amount.into()).is_none() {
            return Err(LedgerError::BalanceOverflow(format!(
                "{balance} + {amount}"
            )));
        }
        self.operations
            .push(Operation::credit(description, amount, at));
        Ok(())
    }

    /// Appends a debit operation if the current balance covers it.
    ///
    /// On failure the statement is left untouched.
    pub fn withdraw(
        &mut self,
        description: impl Into<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let balance = self.balance()?;
        if balance < Balance::from(amount) {
            return Err(LedgerError::InsufficientFunds {
                balance: balance.value(),
                requested: amount.value(),
            });
        }
        self.operations.push(Operation::debit(description, amount, at));
        Ok(())
    }
}
