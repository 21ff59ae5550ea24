use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account already registered: {0}")]
    AlreadyExists(String),
    #[error("Account not registered: {0}")]
    AccountNotFound(String),
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Balance overflow: {0}")]
    BalanceOverflow(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing field `{field}` for command `{command}`")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
