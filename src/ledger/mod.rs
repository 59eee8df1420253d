//! Transaction records, the closed category set, and recurrence rules.

pub mod calendar;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod recurring;
pub mod transaction;

pub use calendar::{generate_future_months, YearMonth};
pub use category::{Category, CategoryKind, CategoryTotals};
pub use ledger::Ledger;
pub use recurring::{
    occurrences_in_month, select_recurring, try_select_recurring, RecurringTransaction,
    WEEKS_PER_MONTH,
};
pub use transaction::{Frequency, Transaction, TransactionType};
