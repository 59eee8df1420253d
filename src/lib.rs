#![doc(test(attr(deny(warnings))))]

//! Forecast Core projects future months of household cash flow from recurring
//! transactions and derives savings and category figures from the projection.

pub mod cli;
pub mod config;
pub mod errors;
pub mod forecast;
pub mod ledger;
pub mod utils;

use std::sync::Once;

pub use errors::ForecastError;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Forecast Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
