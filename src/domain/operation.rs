use super::account::Amount;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Credit,
    Debit,
}

/// A single entry of an account statement.
///
/// Operations are appended to an account's log and never change afterwards;
/// callers only ever receive clones of them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Operation {
    pub description: String,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    pub fn new(
        kind: OperationKind,
        description: impl Into<String>,
        amount: Amount,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at,
            kind,
        }
    }

    pub fn credit(description: impl Into<String>, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self::new(OperationKind::Credit, description, amount, created_at)
    }

    pub fn debit(description: impl Into<String>, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self::new(OperationKind::Debit, description, amount, created_at)
    }

    /// Calendar day on which the operation was created, as seen from `offset`.
    pub fn calendar_day(&self, offset: FixedOffset) -> NaiveDate {
        self.created_at.with_timezone(&offset).date_naive()
    }
}
