//! Pure reductions over an account statement.
//!
//! Nothing in here touches storage or the clock: every function takes the
//! operations it works on and returns a derived view of them.

use super::account::Balance;
use super::operation::{Operation, OperationKind};
use crate::error::{LedgerError, Result};
use chrono::{FixedOffset, NaiveDate};

/// Date format accepted for statement filtering.
pub const CALENDAR_DAY_FORMAT: &str = "%Y-%m-%d";

/// Net balance of `operations`: credits added, debits subtracted, from zero.
///
/// The result is not clamped; a log that was built without the withdrawal
/// guard can produce a negative balance. Fails with `BalanceOverflow` when a
/// running total leaves the range of `Decimal`.
pub fn compute_balance(operations: &[Operation]) -> Result<Balance> {
    operations.iter().try_fold(Balance::ZERO, |acc, op| {
        let next = match op.kind {
            OperationKind::Credit => acc.checked_add(op.amount.into()),
            OperationKind::Debit => acc.checked_sub(op.amount.into()),
        };
        next.ok_or_else(|| {
            LedgerError::BalanceOverflow(format!("{acc} {:?} {}", op.kind, op.amount))
        })
    })
}

/// Parses a `YYYY-MM-DD` calendar day.
pub fn parse_calendar_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), CALENDAR_DAY_FORMAT)
        .map_err(|e| LedgerError::InvalidDate(format!("{input:?}: {e}")))
}

/// Keeps the operations created on `day`, as seen from `offset`.
///
/// Statement order is preserved.
pub fn filter_by_calendar_day(
    operations: &[Operation],
    day: NaiveDate,
    offset: FixedOffset,
) -> Vec<Operation> {
    operations
        .iter()
        .filter(|op| op.calendar_day(offset) == day)
        .cloned()
        .collect()
}

/// Parses `date` and filters `operations` down to that day.
pub fn statement_for_date(
    operations: &[Operation],
    date: &str,
    offset: FixedOffset,
) -> Result<Vec<Operation>> {
    let day = parse_calendar_day(date)?;
    Ok(filter_by_calendar_day(operations, day, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Amount;
    use chrono::{DateTime, TimeZone, Utc};
    use rand::seq::SliceRandom;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    fn credit(value: Decimal, created_at: DateTime<Utc>) -> Operation {
        Operation::credit("credit", Amount::new(value).unwrap(), created_at)
    }

    fn debit(value: Decimal, created_at: DateTime<Utc>) -> Operation {
        Operation::debit("debit", Amount::new(value).unwrap(), created_at)
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_empty_statement_has_zero_balance() {
        assert_eq!(compute_balance(&[]).unwrap(), Balance::ZERO);
    }

    #[test]
    fn test_compute_balance() {
        let ops = vec![
            credit(dec!(100), at(1, 9)),
            credit(dec!(50), at(1, 10)),
            debit(dec!(30.25), at(2, 9)),
        ];
        assert_eq!(compute_balance(&ops).unwrap(), Balance::new(dec!(119.75)));
    }

    #[test]
    fn test_compute_balance_can_go_negative() {
        let ops = vec![credit(dec!(10), at(1, 9)), debit(dec!(25), at(1, 10))];
        assert_eq!(compute_balance(&ops).unwrap(), Balance::new(dec!(-15)));
    }

    #[test]
    fn test_compute_balance_ignores_ordering() {
        let mut rng = rand::thread_rng();
        let mut ops: Vec<Operation> = (1..=40)
            .map(|i| {
                let value = Decimal::new(i * 125, 2);
                if i % 3 == 0 {
                    debit(value, at(1, 9))
                } else {
                    credit(value, at(1, 9))
                }
            })
            .collect();

        let credits: Decimal = ops
            .iter()
            .filter(|op| op.kind == OperationKind::Credit)
            .map(|op| op.amount.value())
            .sum();
        let debits: Decimal = ops
            .iter()
            .filter(|op| op.kind == OperationKind::Debit)
            .map(|op| op.amount.value())
            .sum();
        let expected = Balance::new(credits - debits);

        for _ in 0..20 {
            ops.shuffle(&mut rng);
            assert_eq!(compute_balance(&ops).unwrap(), expected);
        }
    }

    #[test]
    fn test_compute_balance_reports_overflow() {
        let ops = vec![credit(Decimal::MAX, at(1, 9)), credit(Decimal::MAX, at(1, 10))];
        assert!(matches!(
            compute_balance(&ops),
            Err(LedgerError::BalanceOverflow(_))
        ));

        let ops = vec![debit(Decimal::MAX, at(1, 9)), debit(dec!(1), at(1, 10))];
        assert!(matches!(
            compute_balance(&ops),
            Err(LedgerError::BalanceOverflow(_))
        ));
    }

    #[test]
    fn test_parse_calendar_day() {
        assert_eq!(
            parse_calendar_day("2024-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(
            parse_calendar_day(" 2024-05-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_calendar_day_rejects_garbage() {
        for input in ["", "yesterday", "2024-02-30", "2024-13-01", "01/05/2024"] {
            assert!(
                matches!(parse_calendar_day(input), Err(LedgerError::InvalidDate(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_filter_partitions_adjacent_days() {
        let ops = vec![
            credit(dec!(1), at(1, 8)),
            credit(dec!(2), at(2, 8)),
            debit(dec!(1), at(1, 20)),
            credit(dec!(3), at(2, 23)),
        ];
        let day_one = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

        let first = filter_by_calendar_day(&ops, day_one, utc());
        assert_eq!(first, vec![ops[0].clone(), ops[2].clone()]);

        let second = filter_by_calendar_day(&ops, day_two, utc());
        assert_eq!(second, vec![ops[1].clone(), ops[3].clone()]);

        let none = filter_by_calendar_day(&ops, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(), utc());
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_uses_given_offset() {
        // 22:00 UTC on the 1st is the 2nd at UTC+3.
        let ops = vec![credit(dec!(1), at(1, 22))];
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();

        let day_one = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert!(filter_by_calendar_day(&ops, day_one, plus_three).is_empty());
        assert_eq!(filter_by_calendar_day(&ops, day_two, plus_three).len(), 1);
    }

    #[test]
    fn test_statement_for_date() {
        let ops = vec![credit(dec!(1), at(1, 8)), credit(dec!(2), at(2, 8))];

        let filtered = statement_for_date(&ops, "2024-05-02", utc()).unwrap();
        assert_eq!(filtered, vec![ops[1].clone()]);

        assert!(matches!(
            statement_for_date(&ops, "not-a-date", utc()),
            Err(LedgerError::InvalidDate(_))
        ));
    }
}
