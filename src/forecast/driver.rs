use chrono::NaiveDate;

use super::{
    clock::{Clock, SystemClock},
    month::ForecastMonth,
};
use crate::ledger::{calendar::shift_month, recurring::occurrences_in_month, RecurringTransaction};

/// Projects `months` months of cash flow starting at the current month.
///
/// A non-positive horizon yields an empty forecast.
pub fn generate_forecast(months: i32, transactions: &[RecurringTransaction]) -> Vec<ForecastMonth> {
    generate_forecast_with_clock(months, transactions, &SystemClock)
}

/// Same as [`generate_forecast`], reading "today" from `clock` exactly once.
pub fn generate_forecast_with_clock(
    months: i32,
    transactions: &[RecurringTransaction],
    clock: &dyn Clock,
) -> Vec<ForecastMonth> {
    generate_forecast_from(clock.today(), months, transactions)
}

/// Projects `months` months starting at the month containing `start`.
pub fn generate_forecast_from(
    start: NaiveDate,
    months: i32,
    transactions: &[RecurringTransaction],
) -> Vec<ForecastMonth> {
    if months <= 0 {
        return Vec::new();
    }

    let mut forecast: Vec<ForecastMonth> = (0..months)
        .map(|offset| ForecastMonth::initialize(shift_month(start, offset)))
        .collect();

    for txn in transactions {
        for month in forecast.iter_mut() {
            for _ in 0..occurrences_in_month(txn, month.month) {
                month.apply(txn.kind, txn.amount, txn.category);
            }
        }
    }

    let mut running = 0.0;
    for month in forecast.iter_mut() {
        month.balance = month.net();
        running += month.balance;
        month.cumulative_balance = running;
    }

    tracing::debug!(
        start = %start,
        months,
        transactions = transactions.len(),
        "generated forecast"
    );
    forecast
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::FixedClock;
    use crate::ledger::{Category, Frequency, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn months_start_at_the_current_month_and_roll_over() {
        let forecast = generate_forecast_from(date(2025, 11, 30), 4, &[]);
        let keys: Vec<String> = forecast.iter().map(|m| m.month.to_string()).collect();
        assert_eq!(keys, vec!["2025-11", "2025-12", "2026-01", "2026-02"]);
    }

    #[test]
    fn non_positive_horizon_is_empty() {
        assert!(generate_forecast_from(date(2025, 1, 1), 0, &[]).is_empty());
        assert!(generate_forecast_from(date(2025, 1, 1), -3, &[]).is_empty());
    }

    #[test]
    fn balances_are_net_and_cumulative() {
        let transactions = vec![
            RecurringTransaction::new(
                TransactionType::Income,
                1000.0,
                date(2024, 1, 1),
                Category::Salary,
                Frequency::Monthly,
            )
            .unwrap(),
            RecurringTransaction::new(
                TransactionType::Expense,
                100.0,
                date(2024, 1, 1),
                Category::Food,
                Frequency::Weekly,
            )
            .unwrap(),
        ];
        let forecast = generate_forecast_from(date(2025, 1, 15), 3, &transactions);
        for (position, month) in forecast.iter().enumerate() {
            assert_eq!(month.balance, 600.0);
            assert_eq!(month.cumulative_balance, 600.0 * (position as f64 + 1.0));
        }
    }

    #[test]
    fn clock_is_read_for_the_start_month() {
        let clock = FixedClock::on(date(2026, 10, 18));
        let forecast = generate_forecast_with_clock(2, &[], &clock);
        assert_eq!(forecast[0].month.to_string(), "2026-10");
        assert_eq!(forecast[1].month.to_string(), "2026-11");
    }
}
