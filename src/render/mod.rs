//! View-model rows handed to the rendering collaborator.
//!
//! The core emits structured, pre-formatted fields; mapping them onto a
//! template (HTML, TUI table, anything) is the view layer's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::domain::Entry;
use crate::metrics::AccountSummary;

/// One account line of the summary list, formatted for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub allocation: String,
    pub total_expense: String,
    pub balance: String,
    pub usage_percentage: String,
    pub color: String,
    pub overflow_class: String,
}

impl AccountRow {
    pub fn from_summary(summary: &AccountSummary, config: &DisplayConfig) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name.clone(),
            description: summary.description.clone(),
            allocation: format_amount(summary.allocation, config),
            total_expense: format_amount(summary.total_expense, config),
            balance: format_amount(summary.balance(), config),
            usage_percentage: format!("{:.0}", summary.progress.percentage),
            color: summary.progress.color.as_str().into(),
            overflow_class: summary.progress.overflow_class.as_str().into(),
        }
    }
}

/// One entry line of the account detail list, formatted for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryRow {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub date_used: String,
}

impl EntryRow {
    pub fn from_entry(entry: &Entry, config: &DisplayConfig) -> Self {
        Self {
            id: entry.id.to_string(),
            description: entry.description.clone(),
            amount: format_amount(entry.amount, config),
            date_used: format_date(entry.date_used, config),
        }
    }
}

/// Rendering collaborator consuming the structured rows.
pub trait Renderer {
    fn render_accounts(&self, rows: &[AccountRow]) -> String;
    fn render_entries(&self, rows: &[EntryRow]) -> String;
}

/// Minimal line-oriented renderer, mostly useful for logs and tests.
#[derive(Debug, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render_accounts(&self, rows: &[AccountRow]) -> String {
        rows.iter()
            .map(|row| {
                format!(
                    "{} {} / {} ({}%, {})\n",
                    row.name, row.total_expense, row.allocation, row.usage_percentage, row.color
                )
            })
            .collect()
    }

    fn render_entries(&self, rows: &[EntryRow]) -> String {
        rows.iter()
            .map(|row| format!("{} {} {}\n", row.date_used, row.description, row.amount))
            .collect()
    }
}

/// Formats a whole-unit amount with grouped thousands and the configured
/// number of decimal places, e.g. `1234` as `1,234.00`.
pub fn format_amount(amount: i64, config: &DisplayConfig) -> String {
    let negative = amount < 0;
    let grouped = group_digits(&amount.unsigned_abs().to_string(), config.grouping_separator);
    let sign = if negative { "-" } else { "" };
    if config.decimal_places == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{}", "0".repeat(config.decimal_places))
    }
}

pub fn format_date(date: NaiveDate, config: &DisplayConfig) -> String {
    date.format(&config.date_format).to_string()
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
