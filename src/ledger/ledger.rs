use serde::{Deserialize, Serialize};

use super::{
    recurring::{select_recurring, RecurringTransaction},
    transaction::Transaction,
};
use crate::forecast::{generate_forecast_with_clock, Clock, ForecastMonth};

/// In-memory snapshot of a household's transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> String {
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn recurring_transactions(&self) -> Vec<RecurringTransaction> {
        select_recurring(&self.transactions)
    }

    /// Projects the ledger's recurring transactions over the next `months` months.
    pub fn forecast(&self, months: i32, clock: &dyn Clock) -> Vec<ForecastMonth> {
        generate_forecast_with_clock(months, &self.recurring_transactions(), clock)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::forecast::FixedClock;
    use crate::ledger::{Category, Frequency};

    #[test]
    fn forecast_ignores_one_off_transactions() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut ledger = Ledger::new();
        ledger.add_transaction(
            Transaction::income(3000.0, day, Category::Salary).recurring(Some(Frequency::Monthly)),
        );
        ledger.add_transaction(Transaction::expense(250.0, day, Category::Leisure));
        assert_eq!(ledger.transaction_count(), 2);
        assert_eq!(ledger.recurring_transactions().len(), 1);

        let forecast = ledger.forecast(2, &FixedClock::on(day));
        assert!(forecast.iter().all(|month| month.expense == 0.0));
        assert!(forecast.iter().all(|month| month.income == 3000.0));
    }

    #[test]
    fn loads_records_exported_by_the_web_app() {
        let json = r#"[
            {"id":"t1","type":"income","amount":5000,"date":"2025-05-01","category":"salary","description":"Salário","isRecurring":true,"frequency":"monthly"},
            {"id":"k3x9a0q2lm","type":"expense","amount":120,"date":"2025-05-03","category":"food","description":"Mercado"}
        ]"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        let recurring = ledger.recurring_transactions();
        assert_eq!(recurring.len(), 1);
        assert_eq!(recurring[0].id, "t1");
    }

    #[test]
    fn deserializes_from_plain_array() {
        let json = r#"[{"type":"expense","amount":10,"date":"2025-01-01","category":"food"}]"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.transaction_count(), 1);
    }
}
