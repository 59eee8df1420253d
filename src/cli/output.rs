use colored::Colorize;
use std::fmt;

use crate::forecast::ForecastMonth;
use crate::ledger::Category;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Info => format!("INFO: {text}"),
        MessageKind::Warning => format!("WARNING: [!] {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("ERROR: [x] {text}").bright_red().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        MessageKind::Error => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

fn signed(amount: f64) -> String {
    let text = format!("{amount:>12.2}");
    if amount < 0.0 {
        text.bright_red().to_string()
    } else {
        text.bright_green().to_string()
    }
}

/// Renders one row per month: income, expense, balance, running balance, savings rate.
pub fn forecast_table(
    forecast: &[ForecastMonth],
    rates: &[f64],
    currency: &str,
    locale: &str,
) -> String {
    let mut lines = vec![format!(
        "{:<16}{:>12}{:>12}{:>12}{:>12}{:>8}",
        "Month",
        format!("Income {currency}"),
        "Expense",
        "Balance",
        "Running",
        "Save %"
    )
    .bold()
    .to_string()];
    for (month, rate) in forecast.iter().zip(rates) {
        lines.push(format!(
            "{:<16}{:>12.2}{:>12.2}{}{}{:>8}",
            month.month.label_for(locale),
            month.income,
            month.expense,
            signed(month.balance),
            signed(month.cumulative_balance),
            format!("{rate:.0}%"),
        ));
    }
    lines.join("\n")
}

pub fn category_list(categories: &[(Category, f64)]) -> String {
    categories
        .iter()
        .enumerate()
        .map(|(position, (category, amount))| {
            format!("{:>2}. {:<20}{:>12.2}", position + 1, category.label(), amount)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
