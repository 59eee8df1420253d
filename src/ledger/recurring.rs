use chrono::{Datelike, NaiveDate};

use super::{
    calendar::YearMonth,
    category::Category,
    transaction::{generate_id, Frequency, Transaction, TransactionType},
};
use crate::errors::ForecastError;

/// Flat weeks-per-month used for weekly recurrence. Actual calendar months
/// span four or five week boundaries; the projection does not count them.
pub const WEEKS_PER_MONTH: u32 = 4;

/// A transaction admitted into the forecast, with its frequency resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringTransaction {
    pub id: String,
    pub kind: TransactionType,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Category,
    pub frequency: Frequency,
}

impl RecurringTransaction {
    /// Builds a recurring record with a fresh id. Negative amounts are rejected.
    pub fn new(
        kind: TransactionType,
        amount: f64,
        date: NaiveDate,
        category: Category,
        frequency: Frequency,
    ) -> Result<Self, ForecastError> {
        let id = generate_id();
        if amount < 0.0 {
            return Err(ForecastError::NegativeAmount(id));
        }
        Ok(Self {
            id,
            kind,
            amount,
            date,
            category,
            frequency,
        })
    }

    /// How many times this transaction lands in the given forecast month.
    pub fn occurrences_in(&self, month: YearMonth) -> u32 {
        occurrences_in_month(self, month)
    }
}

impl TryFrom<&Transaction> for RecurringTransaction {
    type Error = ForecastError;

    fn try_from(txn: &Transaction) -> Result<Self, Self::Error> {
        if !txn.is_recurring {
            return Err(ForecastError::NotRecurring(txn.id.clone()));
        }
        if txn.amount < 0.0 {
            return Err(ForecastError::NegativeAmount(txn.id.clone()));
        }
        Ok(Self {
            id: txn.id.clone(),
            kind: txn.kind,
            amount: txn.amount,
            date: txn.date,
            category: txn.category,
            frequency: txn.frequency.unwrap_or_default(),
        })
    }
}

pub fn occurrences_in_month(txn: &RecurringTransaction, month: YearMonth) -> u32 {
    match txn.frequency {
        Frequency::Monthly => 1,
        Frequency::Weekly => WEEKS_PER_MONTH,
        Frequency::Yearly => u32::from(txn.date.month() == month.month()),
    }
}

/// Picks the recurring records out of a transaction list. Records that are
/// flagged recurring but cannot enter the forecast are skipped and logged.
pub fn select_recurring(transactions: &[Transaction]) -> Vec<RecurringTransaction> {
    transactions
        .iter()
        .filter(|txn| txn.is_recurring)
        .filter_map(|txn| match RecurringTransaction::try_from(txn) {
            Ok(recurring) => Some(recurring),
            Err(err) => {
                tracing::warn!(transaction = %txn.id, error = %err, "skipping recurring transaction");
                None
            }
        })
        .collect()
}

/// Strict variant of [`select_recurring`] that stops at the first invalid record.
pub fn try_select_recurring(
    transactions: &[Transaction],
) -> Result<Vec<RecurringTransaction>, ForecastError> {
    transactions
        .iter()
        .filter(|txn| txn.is_recurring)
        .map(RecurringTransaction::try_from)
        .collect()
}
