//! Read-only figures derived from a finished forecast.

use serde::Serialize;

use super::month::ForecastMonth;
use crate::ledger::{Category, CategoryTotals};

pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Percentage of `income` left after `expense`, rounded to a whole number.
/// Zero income always yields zero.
pub fn savings_rate(income: f64, expense: f64) -> f64 {
    if income > 0.0 {
        ((income - expense) / income * 100.0).round()
    } else {
        0.0
    }
}

/// Savings rate of every month in the forecast, in order.
pub fn calculate_savings_rate(forecast: &[ForecastMonth]) -> Vec<f64> {
    forecast.iter().map(ForecastMonth::savings_rate).collect()
}

/// Categories with the largest totals across the whole forecast, largest first.
/// Equal totals keep the canonical category order.
pub fn get_top_expense_categories(forecast: &[ForecastMonth], limit: usize) -> Vec<Category> {
    if forecast.is_empty() {
        return Vec::new();
    }
    let totals = category_totals(forecast);
    let mut ranked: Vec<(Category, f64)> = totals.iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked
        .into_iter()
        .take(limit)
        .map(|(category, _)| category)
        .collect()
}

/// Sums every category across all months.
pub fn category_totals(forecast: &[ForecastMonth]) -> CategoryTotals {
    let mut totals = CategoryTotals::zeroed();
    for month in forecast {
        for (category, amount) in month.categories.iter() {
            totals.add(category, amount);
        }
    }
    totals
}

/// Change from `previous` to `current` as a rounded percentage.
pub fn calculate_percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    ((current - previous) / previous.abs() * 100.0).round()
}

/// Headline numbers for a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub months: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    pub average_balance: f64,
    pub closing_balance: f64,
    pub savings_rate: f64,
}

impl ForecastSummary {
    pub fn from_forecast(forecast: &[ForecastMonth]) -> Self {
        if forecast.is_empty() {
            return Self::default();
        }
        let total_income: f64 = forecast.iter().map(|month| month.income).sum();
        let total_expense: f64 = forecast.iter().map(|month| month.expense).sum();
        let net = total_income - total_expense;
        Self {
            months: forecast.len(),
            total_income,
            total_expense,
            net,
            average_balance: net / forecast.len() as f64,
            closing_balance: forecast
                .last()
                .map(|month| month.cumulative_balance)
                .unwrap_or_default(),
            savings_rate: savings_rate(total_income, total_expense),
        }
    }
}
