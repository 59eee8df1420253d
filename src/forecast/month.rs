use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::metrics::savings_rate;
use crate::ledger::{Category, CategoryTotals, TransactionType, YearMonth};

/// Projected cash flow for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMonth {
    pub month: YearMonth,
    pub income: f64,
    pub expense: f64,
    /// Net of this month alone: `income - expense`.
    pub balance: f64,
    /// Running total of `balance` from the first projected month up to this one.
    pub cumulative_balance: f64,
    pub categories: CategoryTotals,
}

impl ForecastMonth {
    /// Zeroed month keyed by the calendar month containing `date`.
    pub fn initialize(date: NaiveDate) -> Self {
        Self {
            month: YearMonth::from_date(date),
            income: 0.0,
            expense: 0.0,
            balance: 0.0,
            cumulative_balance: 0.0,
            categories: CategoryTotals::zeroed(),
        }
    }

    /// Adds one application of a transaction amount.
    ///
    /// The category total grows by `amount` whatever the direction.
    pub fn apply(&mut self, kind: TransactionType, amount: f64, category: Category) {
        match kind {
            TransactionType::Income => self.income += amount,
            TransactionType::Expense => self.expense += amount,
        }
        self.categories.add(category, amount);
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    /// Share of income kept this month, as a rounded percentage.
    pub fn savings_rate(&self) -> f64 {
        savings_rate(self.income, self.expense)
    }
}
