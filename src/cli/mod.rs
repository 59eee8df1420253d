//! Command-line front end: reads transactions from JSON and prints a forecast.

pub mod output;

use std::{
    env,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{ConfigManager, ForecastConfig},
    forecast::{
        calculate_savings_rate, category_totals, generate_forecast, get_top_expense_categories,
        ForecastMonth, ForecastSummary,
    },
    ledger::Ledger,
};

const USAGE: &str = "Usage: forecast_cli <command>\n\
     Commands:\n  \
     forecast <transactions.json> [months]\n  \
     summary <transactions.json> [months]\n  \
     version";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Forecast { path: PathBuf, months: Option<i32> },
    Summary { path: PathBuf, months: Option<i32> },
    Version,
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or_else(|| USAGE.to_string())?;
        match name.as_str() {
            "forecast" | "summary" => {
                let path = args.next().map(PathBuf::from).ok_or_else(|| USAGE.to_string())?;
                let months = args
                    .next()
                    .map(|raw| {
                        raw.parse::<i32>()
                            .map_err(|_| format!("invalid month count `{raw}`"))
                    })
                    .transpose()?;
                if name == "forecast" {
                    Ok(Command::Forecast { path, months })
                } else {
                    Ok(Command::Summary { path, months })
                }
            }
            "version" => Ok(Command::Version),
            _ => Err(USAGE.to_string()),
        }
    }
}

pub fn run_cli() -> Result<(), Box<dyn Error>> {
    let command = match Command::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            output::error(&message);
            std::process::exit(1);
        }
    };
    let config = ConfigManager::from_env().load()?;
    run(command, &config)
}

pub fn run(command: Command, config: &ForecastConfig) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Forecast { path, months } => {
            let forecast = load_forecast(&path, months.unwrap_or(config.horizon_months))?;
            println!("{}", serde_json::to_string_pretty(&forecast)?);
        }
        Command::Summary { path, months } => {
            let forecast = load_forecast(&path, months.unwrap_or(config.horizon_months))?;
            print_summary(&forecast, config);
        }
        Command::Version => {
            println!(
                "forecast_cli {} ({} {}, built {} for {})",
                env!("CARGO_PKG_VERSION"),
                env!("FORECAST_CORE_BUILD_HASH"),
                env!("FORECAST_CORE_BUILD_PROFILE"),
                env!("FORECAST_CORE_BUILD_TIMESTAMP"),
                env!("FORECAST_CORE_BUILD_TARGET"),
            );
        }
    }
    Ok(())
}

fn load_forecast(path: &Path, months: i32) -> Result<Vec<ForecastMonth>, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    let recurring = ledger.recurring_transactions();
    tracing::info!(
        path = %path.display(),
        transactions = ledger.transaction_count(),
        recurring = recurring.len(),
        "loaded transactions"
    );
    Ok(generate_forecast(months, &recurring))
}

fn print_summary(forecast: &[ForecastMonth], config: &ForecastConfig) {
    if forecast.is_empty() {
        output::warning("No months to forecast.");
        return;
    }
    let rates = calculate_savings_rate(forecast);
    output::section("Forecast");
    println!("{}", output::forecast_table(forecast, &rates, &config.currency, &config.locale));

    let totals = category_totals(forecast);
    let top: Vec<_> = get_top_expense_categories(forecast, config.top_categories)
        .into_iter()
        .map(|category| (category, totals[category]))
        .collect();
    output::section("Top categories");
    println!("{}", output::category_list(&top));

    let summary = ForecastSummary::from_forecast(forecast);
    output::section("Totals");
    output::info(format!(
        "income {:.2} | expense {:.2} | net {:.2} | closing {:.2} | savings {:.0}%",
        summary.total_income,
        summary.total_expense,
        summary.net,
        summary.closing_balance,
        summary.savings_rate
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse(args(&["forecast", "tx.json", "12"])).unwrap(),
            Command::Forecast {
                path: PathBuf::from("tx.json"),
                months: Some(12)
            }
        );
        assert_eq!(
            Command::parse(args(&["summary", "tx.json"])).unwrap(),
            Command::Summary {
                path: PathBuf::from("tx.json"),
                months: None
            }
        );
        assert_eq!(Command::parse(args(&["version"])).unwrap(), Command::Version);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse(args(&[])).is_err());
        assert!(Command::parse(args(&["forecast"])).is_err());
        assert!(Command::parse(args(&["forecast", "tx.json", "six"])).is_err());
        assert!(Command::parse(args(&["export"])).is_err());
    }
}
