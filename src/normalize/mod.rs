use thiserror::Error;

pub mod category;
pub mod direction;
pub mod record;

#[cfg(test)]
mod record_tests;

pub use category::Category;
pub use direction::Direction;
pub use record::Expense;

#[derive(Debug, PartialEq, Error)]
pub enum NormalizeError {
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
    #[error("unknown transaction type '{0}'")]
    UnknownDirection(String),
    #[error("unknown category code '{0}'")]
    UnknownCategory(String),
}
