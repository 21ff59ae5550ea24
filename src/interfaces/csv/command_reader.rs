use crate::application::command::Command;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One raw CSV row: `command,id,name,description,amount`.
///
/// Columns a command doesn't use may be left empty or omitted.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CommandRecord {
    pub command: String,
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl TryFrom<CommandRecord> for Command {
    type Error = LedgerError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        let identification_number = record.id;
        let description = record.description.unwrap_or_default();

        match record.command.to_lowercase().as_str() {
            "register" => Ok(Command::Register {
                identification_number,
                name: record.name.ok_or(LedgerError::MissingField {
                    command: "register",
                    field: "name",
                })?,
            }),
            "deposit" => Ok(Command::Deposit {
                identification_number,
                description,
                amount: record.amount.ok_or(LedgerError::MissingField {
                    command: "deposit",
                    field: "amount",
                })?,
            }),
            "withdraw" => Ok(Command::Withdraw {
                identification_number,
                description,
                amount: record.amount.ok_or(LedgerError::MissingField {
                    command: "withdraw",
                    field: "amount",
                })?,
            }),
            "rename" => Ok(Command::Rename {
                identification_number,
                name: record.name.ok_or(LedgerError::MissingField {
                    command: "rename",
                    field: "name",
                })?,
            }),
            "delete" => Ok(Command::Delete {
                identification_number,
            }),
            _ => Err(LedgerError::UnknownCommand(record.command)),
        }
    }
}

/// Reads ledger commands from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting short records, and
/// yields one `Result<Command>` per row so a bad row doesn't stop the batch.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize::<CommandRecord>()
            .map(|result| result.map_err(LedgerError::from).and_then(Command::try_from))
    }
}
