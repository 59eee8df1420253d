//! Month-by-month cash-flow projection from recurring transactions.

pub mod clock;
pub mod driver;
pub mod metrics;
pub mod month;

pub use clock::{Clock, FixedClock, SystemClock};
pub use driver::{generate_forecast, generate_forecast_from, generate_forecast_with_clock};
pub use metrics::{
    calculate_percentage_change, calculate_savings_rate, category_totals,
    get_top_expense_categories, savings_rate, ForecastSummary, DEFAULT_TOP_CATEGORIES,
};
pub use month::ForecastMonth;
