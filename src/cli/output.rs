//! Plain-text rendering of a dashboard report.

use std::fmt::Write;

use colored::{Color, Colorize};

use crate::config::Config;
use crate::domain::{DashboardReport, HealthBands, StatusColor};

/// Digit grouping and decimal separators for a locale tag.
fn separators_for(locale: &str) -> (char, char) {
    match locale.split(['-', '_']).next().unwrap_or_default() {
        "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" => ('.', ','),
        "fr" | "pl" | "cs" | "sv" | "nb" | "fi" => (' ', ','),
        _ => (',', '.'),
    }
}

/// Formats an amount with the configured precision, grouping and currency code.
pub fn format_money(config: &Config, value: f64) -> String {
    let (grouping, decimal) = separators_for(&config.locale);
    let body = format!("{:.*}", config.currency_precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push(decimal);
        out.push_str(frac);
    }
    out.push(' ');
    out.push_str(&config.currency);
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(len + len / 3), |mut grouped, (idx, ch)| {
            if idx != 0 && (len - idx) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
            grouped
        })
}

/// One-line score and status summary, e.g. `Health 75/100 (B), Getting Started`.
pub fn headline(report: &DashboardReport) -> String {
    format!(
        "Health {}/100 ({}), {}",
        report.health.score, report.health.grade, report.status.label
    )
}

fn terminal_color(color: StatusColor) -> Color {
    match color {
        StatusColor::Green => Color::Green,
        StatusColor::Blue => Color::Blue,
        StatusColor::Yellow => Color::Yellow,
        StatusColor::Gray => Color::BrightBlack,
    }
}

fn band_lines(bands: &HealthBands) -> Vec<(&'static str, Option<u8>)> {
    vec![
        ("Debt service", bands.debt_service),
        ("Savings rate", bands.savings_rate),
        ("Passive income", bands.passive_income),
        ("No income", bands.no_income),
        ("Liquidity", Some(bands.liquidity)),
    ]
}

pub fn render_text(report: &DashboardReport, config: &Config) -> String {
    let summary = &report.summary;
    let money = |value: f64| format_money(config, value);
    let mut out = String::new();

    let _ = writeln!(out, "Financial dashboard {}", report.period.label());
    let rows = [
        ("Income", summary.income),
        ("Passive income", summary.passive_income),
        ("Expense", summary.expense),
        ("Net", summary.net),
        ("Total balance", summary.total_balance),
        ("Loan payments", summary.passive_expense),
        ("Assets", summary.total_assets),
        ("Liabilities", summary.total_liabilities),
        ("Net worth", summary.items_net_worth),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<16}{:>24}", money(value));
    }

    let _ = writeln!(
        out,
        "Health score {}/100, grade {}",
        report.health.score, report.health.grade
    );
    for (label, points) in band_lines(&report.health.bands) {
        if let Some(points) = points {
            let _ = writeln!(out, "  {label:<16}{points:>3}");
        }
    }

    let status = if config.color_enabled {
        report
            .status
            .label
            .color(terminal_color(report.status.color))
            .bold()
            .to_string()
    } else {
        report.status.label.to_string()
    };
    let _ = writeln!(out, "Status: {status}");
    let _ = writeln!(
        out,
        "Records: {} accounts, {} transactions, {} active loans, {} items",
        report.accounts.len(),
        report.transactions.len(),
        report.loans.len(),
        report.items.len()
    );
    out
}
