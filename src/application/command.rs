use super::service::AccountService;
use crate::error::Result;
use rust_decimal::Decimal;

/// A single mutating request against the ledger, as read from a batch input.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Register {
        identification_number: String,
        name: String,
    },
    Deposit {
        identification_number: String,
        description: String,
        amount: Decimal,
    },
    Withdraw {
        identification_number: String,
        description: String,
        amount: Decimal,
    },
    Rename {
        identification_number: String,
        name: String,
    },
    Delete {
        identification_number: String,
    },
}

impl Command {
    pub fn identification_number(&self) -> &str {
        match self {
            Command::Register {
                identification_number,
                ..
            }
            | Command::Deposit {
                identification_number,
                ..
            }
            | Command::Withdraw {
                identification_number,
                ..
            }
            | Command::Rename {
                identification_number,
                ..
            }
            | Command::Delete {
                identification_number,
            } => identification_number,
        }
    }

    /// Runs the command against `service`.
    pub async fn execute(&self, service: &AccountService) -> Result<()> {
        match self {
            Command::Register {
                identification_number,
                name,
            } => service
                .register(identification_number, name)
                .await
                .map(|_| ()),
            Command::Deposit {
                identification_number,
                description,
                amount,
            } => {
                service
                    .deposit(identification_number, description, *amount)
                    .await
            }
            Command::Withdraw {
                identification_number,
                description,
                amount,
            } => {
                service
                    .withdraw(identification_number, description, *amount)
                    .await
            }
            Command::Rename {
                identification_number,
                name,
            } => service.rename_account(identification_number, name).await,
            Command::Delete {
                identification_number,
            } => service
                .delete_account(identification_number)
                .await
                .map(|_| ()),
        }
    }
}
