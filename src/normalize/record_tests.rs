use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use super::*;

fn expense_at(timestamp_ms: i64) -> Result<Expense, NormalizeError> {
    Expense::new(
        timestamp_ms,
        "Milk".to_string(),
        dec!(3.50),
        Some(Category::Grocery),
        Some(Direction::Expense),
    )
}

#[test]
fn test_date_at_epoch_start() -> Result<()> {
    assert_eq!(expense_at(0)?.formatted_date(), "01/01/1970");

    Ok(())
}

#[test]
fn test_date_formatting() -> Result<()> {
    assert_eq!(expense_at(1000000000000)?.formatted_date(), "09/09/2001");
    assert_eq!(expense_at(1609459200000)?.formatted_date(), "01/01/2021");

    Ok(())
}

#[test]
fn test_timestamp_out_of_range() -> Result<()> {
    if let Err(err) = expense_at(i64::MAX) {
        assert_eq!(err, NormalizeError::TimestampOutOfRange(i64::MAX));
    } else {
        bail!("a timestamp past the representable range should be rejected");
    }

    Ok(())
}

#[test]
fn test_direction_signs() -> Result<()> {
    assert_eq!("expense".parse::<Direction>()?.sign(), -1);
    assert_eq!("income".parse::<Direction>()?.sign(), 1);

    Ok(())
}

#[test]
fn test_direction_unknown_code() -> Result<()> {
    if let Err(err) = "transfer".parse::<Direction>() {
        assert_eq!(err, NormalizeError::UnknownDirection("transfer".to_string()));
    } else {
        bail!("'transfer' is not a known transaction type");
    }

    Ok(())
}

#[test]
fn test_category_labels() -> Result<()> {
    let expected = [
        ("alcohol", "Alcool"),
        ("exceptional", "Exceptionnelle"),
        ("grocery", "Course"),
        ("health", "Santé"),
        ("leisure", "Plaisir"),
        ("regular", "Régulier"),
        ("restaurant", "Restaurant"),
        ("trip", "Voyage"),
    ];

    for (code, label) in expected {
        assert_eq!(code.parse::<Category>()?.label(), label);
    }

    Ok(())
}

#[test]
fn test_category_unknown_code() -> Result<()> {
    if let Err(err) = "salary".parse::<Category>() {
        assert_eq!(err, NormalizeError::UnknownCategory("salary".to_string()));
    } else {
        bail!("'salary' is not a known category code");
    }

    Ok(())
}
