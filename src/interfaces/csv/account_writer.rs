use crate::domain::account::Account;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    identification_number: &'a str,
    name: &'a str,
    id: Uuid,
    balance: Decimal,
    operations: usize,
}

/// Writes one summary row per account.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header and the given accounts, then flushes.
    ///
    /// Balances are normalized, so `150.00` is written as `150`.
    pub fn write_accounts(&mut self, accounts: &[Account]) -> Result<()> {
        if accounts.is_empty() {
            self.writer.write_record([
                "identification_number",
                "name",
                "id",
                "balance",
                "operations",
            ])?;
        }
        for account in accounts {
            self.writer.serialize(AccountRow {
                identification_number: account.identification_number(),
                name: account.name(),
                id: account.id(),
                balance: account.balance()?.value().normalize(),
                operations: account.operations().len(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
