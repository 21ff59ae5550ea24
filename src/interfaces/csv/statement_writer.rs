use crate::domain::operation::{Operation, OperationKind};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OperationRow<'a> {
    created_at: String,
    kind: OperationKind,
    description: &'a str,
    amount: Decimal,
}

/// Writes an account statement, one row per operation, in statement order.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_operations(&mut self, operations: &[Operation]) -> Result<()> {
        if operations.is_empty() {
            self.writer
                .write_record(["created_at", "kind", "description", "amount"])?;
        }
        for op in operations {
            self.writer.serialize(OperationRow {
                created_at: op.created_at.to_rfc3339(),
                kind: op.kind,
                description: &op.description,
                amount: op.amount.value().normalize(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Amount;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_operations() {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let ops = vec![
            Operation::credit("salary", Amount::new(dec!(100.0)).unwrap(), created_at),
            Operation::debit("rent, May", Amount::new(dec!(40.25)).unwrap(), created_at),
        ];

        let mut buffer = Vec::new();
        StatementWriter::new(&mut buffer)
            .write_operations(&ops)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "created_at,kind,description,amount");
        assert_eq!(lines[1], "2024-05-01T09:30:00+00:00,credit,salary,100");
        assert_eq!(lines[2], "2024-05-01T09:30:00+00:00,debit,\"rent, May\",40.25");
    }

    #[test]
    fn test_write_empty_statement() {
        let mut buffer = Vec::new();
        StatementWriter::new(&mut buffer).write_operations(&[]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap().trim_end(),
            "created_at,kind,description,amount"
        );
    }
}
