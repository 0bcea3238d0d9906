use std::str::FromStr;

use super::NormalizeError;

/// Whether a transaction takes money out of the account or brings it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Expense,
    Income,
}

impl Direction {
    /// Sign written to the `Revenu/Dépense` column.
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Expense => -1,
            Direction::Income => 1,
        }
    }
}

impl FromStr for Direction {
    type Err = NormalizeError;

    fn from_str(code: &str) -> Result<Direction, Self::Err> {
        match code {
            "expense" => Ok(Direction::Expense),
            "income" => Ok(Direction::Income),
            _ => Err(NormalizeError::UnknownDirection(code.to_string())),
        }
    }
}
