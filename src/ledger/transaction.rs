use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::errors::ForecastError;

/// A single cash-flow record as supplied by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default = "generate_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl Transaction {
    pub fn new(kind: TransactionType, amount: f64, date: NaiveDate, category: Category) -> Self {
        Self {
            id: generate_id(),
            kind,
            amount,
            date,
            category,
            description: String::new(),
            tags: Vec::new(),
            is_recurring: false,
            frequency: None,
        }
    }

    pub fn income(amount: f64, date: NaiveDate, category: Category) -> Self {
        Self::new(TransactionType::Income, amount, date, category)
    }

    pub fn expense(amount: f64, date: NaiveDate, category: Category) -> Self {
        Self::new(TransactionType::Expense, amount, date, category)
    }

    /// Marks the transaction as recurring. `None` leaves the frequency to the
    /// default applied when the record enters the forecast.
    pub fn recurring(mut self, frequency: Option<Frequency>) -> Self {
        self.is_recurring = true;
        self.frequency = frequency;
        self
    }
}

/// Fresh identifier for records that arrive without one. Existing ids are
/// free-form strings and are kept as given.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => f.write_str("income"),
            TransactionType::Expense => f.write_str("expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = ForecastError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ForecastError::UnknownTransactionType(value.to_string())),
        }
    }
}

/// How often a recurring transaction repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Monthly => f.write_str("monthly"),
            Frequency::Weekly => f.write_str("weekly"),
            Frequency::Yearly => f.write_str("yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = ForecastError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(ForecastError::UnknownFrequency(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_records() {
        let json = r#"{
            "id": "3f2c7c52-8a43-4a4e-9d1b-7f6d0d7f1a10",
            "type": "expense",
            "amount": 1200.0,
            "date": "2025-03-05",
            "category": "housing",
            "description": "Rent",
            "isRecurring": true,
            "frequency": "monthly"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, Category::Housing);
        assert!(txn.is_recurring);
        assert_eq!(txn.frequency, Some(Frequency::Monthly));
        assert!(txn.tags.is_empty());
    }

    #[test]
    fn accepts_free_form_ids_from_exported_records() {
        let json = r#"{
            "id": "t1",
            "type": "income",
            "amount": 5000,
            "date": "2025-05-01",
            "category": "salary",
            "description": "Salário",
            "tags": ["trabalho"],
            "isRecurring": true,
            "frequency": "monthly"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.id, "t1");
        assert_eq!(txn.tags, vec!["trabalho".to_string()]);
        assert_eq!(serde_json::to_value(&txn).unwrap()["id"], "t1");
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"type":"income","amount":50,"date":"2025-01-10","category":"gifts"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(!txn.is_recurring);
        assert_eq!(txn.frequency, None);
        assert_eq!(txn.description, "");
        assert!(!txn.id.is_empty());
    }

    #[test]
    fn unknown_enums_fail_loudly() {
        let bad_category =
            r#"{"type":"income","amount":1,"date":"2025-01-10","category":"pets"}"#;
        assert!(serde_json::from_str::<Transaction>(bad_category).is_err());

        let bad_frequency = r#"{"type":"income","amount":1,"date":"2025-01-10","category":"gifts","isRecurring":true,"frequency":"daily"}"#;
        assert!(serde_json::from_str::<Transaction>(bad_frequency).is_err());

        assert!(matches!(
            "fortnightly".parse::<Frequency>(),
            Err(ForecastError::UnknownFrequency(_))
        ));
        assert!(matches!(
            "transfer".parse::<TransactionType>(),
            Err(ForecastError::UnknownTransactionType(_))
        ));
    }

    #[test]
    fn frequency_defaults_to_monthly() {
        assert_eq!(Frequency::default(), Frequency::Monthly);
    }
}
