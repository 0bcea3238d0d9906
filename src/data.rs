use std::fs::File;

use anyhow::Result;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize::{Category, Direction, Expense};

/// One row of the exported database, as written by the tracking app.
///
/// Every column is required, including the two we discard; an export missing
/// any of them is malformed and fails the whole run.
#[derive(Debug, Deserialize)]
pub struct ExportRecord {
    pub id: i64,
    #[serde(rename = "millisSinceEpochStart")]
    pub start_ms: i64,
    #[serde(rename = "millisSinceEpochEnd")]
    pub end_ms: i64,
    #[serde(rename = "type")]
    pub type_: String,
    pub category: String,
    pub label: String,
    // Read as the literal string so `3.50` keeps its written scale; the csv
    // deserializer would otherwise infer a float and collapse it to `3.5`.
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

/// One row of the normalized expenses file. Field order is the column order.
#[derive(Debug, Serialize)]
pub struct ExpenseRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Intitulé")]
    pub label: String,
    #[serde(rename = "Montant")]
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "Type")]
    pub category: Option<&'static str>,
    #[serde(rename = "Revenu/Dépense")]
    pub sign: Option<i32>,
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        ExpenseRecord {
            date: expense.formatted_date(),
            label: expense.label.clone(),
            amount: expense.amount,
            category: expense.category.map(|category| category.label()),
            sign: expense.direction.map(|direction| direction.sign()),
        }
    }
}

impl TryFrom<ExportRecord> for Expense {
    type Error = crate::normalize::NormalizeError;

    fn try_from(record: ExportRecord) -> Result<Self, Self::Error> {
        // Unrecognized codes are a data-quality issue, not a hard failure:
        // the row is kept and the corresponding output field stays empty.
        let direction = match record.type_.parse::<Direction>() {
            Ok(direction) => Some(direction),
            Err(err) => {
                warn!("{}, leaving Revenu/Dépense empty", err);
                None
            },
        };

        let category = match record.category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(err) => {
                warn!("{}, leaving Type empty", err);
                None
            },
        };

        Expense::new(record.start_ms, record.label, record.value, category, direction)
    }
}

pub fn process_csv(file_path: &str) -> Result<Vec<Expense>> {
    let file = File::open(file_path)?;
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut expenses = Vec::new();
    for record in csv_reader.deserialize::<ExportRecord>() {
        let expense: Expense = record?.try_into()?;
        debug!("normalized transaction dated {}", expense.formatted_date());
        expenses.push(expense);
    }

    Ok(expenses)
}

const OUTPUT_COLUMNS: [&str; 5] = ["Date", "Intitulé", "Montant", "Type", "Revenu/Dépense"];

pub fn export_csv(file_path: &str, expenses: &[Expense]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_path(file_path)?;

    // Written explicitly so a header-only export still produces the header.
    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for expense in expenses {
        let record: ExpenseRecord = expense.into();
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;

    Ok(())
}
