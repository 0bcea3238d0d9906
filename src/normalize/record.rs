use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;

use super::{Category, Direction, NormalizeError};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// A single normalized transaction.
///
/// `category` and `direction` stay `None` when the export carried a code we
/// don't recognize; the row is still kept (see [`Expense::new`] callers).
#[derive(Debug)]
pub struct Expense {
    pub date: NaiveDate,
    pub label: String,
    pub amount: Decimal,
    pub category: Option<Category>,
    pub direction: Option<Direction>,
}

impl Expense {
    pub fn new(
        timestamp_ms: i64,
        label: String,
        amount: Decimal,
        category: Option<Category>,
        direction: Option<Direction>,
    ) -> Result<Expense, NormalizeError> {
        // The export timestamps are UTC; only the calendar date survives.
        let date = DateTime::from_timestamp_millis(timestamp_ms)
            .ok_or(NormalizeError::TimestampOutOfRange(timestamp_ms))?
            .date_naive();

        Ok(Expense {
            date,
            label,
            amount,
            category,
            direction,
        })
    }

    /// Date rendered the way the output file expects it, `MM/DD/YYYY`.
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
