//! Locale-aware display helpers for amounts, dates and month labels.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::clock::YearMonth;

/// Display locale. Amounts are always euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Italian,
    English,
}

impl Locale {
    fn separators(&self) -> (char, char) {
        match self {
            Locale::Italian => ('.', ','),
            Locale::English => (',', '.'),
        }
    }

    pub fn collecting_data(&self) -> &'static str {
        match self {
            Locale::Italian => "Raccogliendo dati...",
            Locale::English => "Collecting data...",
        }
    }

    pub fn no_data(&self) -> &'static str {
        match self {
            Locale::Italian => "Nessun dato disponibile",
            Locale::English => "No data available",
        }
    }

    pub fn income_label(&self) -> &'static str {
        match self {
            Locale::Italian => "Entrate",
            Locale::English => "Income",
        }
    }

    pub fn expense_label(&self) -> &'static str {
        match self {
            Locale::Italian => "Uscite",
            Locale::English => "Expenses",
        }
    }
}

const MONTHS_IT: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Euro amount rounded to cents, e.g. `1.234,56 €` or `€1,234.56`
pub fn format_currency(amount: Decimal, locale: Locale) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (units, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let (group_sep, decimal_sep) = locale.separators();
    let body = format!("{}{}{}", group_thousands(units, group_sep), decimal_sep, cents);
    let sign = if negative { "-" } else { "" };

    match locale {
        Locale::Italian => format!("{}{} €", sign, body),
        Locale::English => format!("{}€{}", sign, body),
    }
}

/// Currency with an explicit `+` for non-negative amounts, as used for deltas
pub fn format_signed_currency(amount: Decimal, locale: Locale) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format_currency(amount, locale)
    } else {
        format!("+{}", format_currency(amount, locale))
    }
}

fn group_thousands(units: &str, separator: char) -> String {
    let len = units.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Short date, e.g. `15 feb 2024` or `Feb 15, 2024`
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = month_short(date.month(), locale);
    match locale {
        Locale::Italian => format!("{} {} {}", date.day(), month, date.year()),
        Locale::English => format!("{} {}, {}", month, date.day(), date.year()),
    }
}

/// Three-letter month name for a 1-based month number
pub fn month_short(month: u32, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::Italian => &MONTHS_IT,
        Locale::English => &MONTHS_EN,
    };
    let index = (month.clamp(1, 12) - 1) as usize;
    names[index]
}

/// Month and year, e.g. `set 2023`
pub fn format_year_month(month: YearMonth, locale: Locale) -> String {
    format!("{} {}", month_short(month.month(), locale), month.year())
}

/// Percentage with two decimals, or `N/A` when undefined
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => "N/A".to_string(),
    }
}

/// Axis label in thousands of euros, e.g. `€1.235k`
pub fn format_compact_thousands(value: f64) -> String {
    format!("€{:.3}k", value / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_format_currency_italian() {
        assert_eq!(format_currency(dec("1234.56"), Locale::Italian), "1.234,56 €");
        assert_eq!(format_currency(dec("0"), Locale::Italian), "0,00 €");
        assert_eq!(format_currency(dec("-20"), Locale::Italian), "-20,00 €");
        assert_eq!(format_currency(dec("1234567.8"), Locale::Italian), "1.234.567,80 €");
    }

    #[test]
    fn test_format_currency_english() {
        assert_eq!(format_currency(dec("1234.56"), Locale::English), "€1,234.56");
        assert_eq!(format_currency(dec("-999.999"), Locale::English), "-€1,000.00");
        assert_eq!(format_currency(dec("100"), Locale::English), "€100.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("0.005"), Locale::English), "€0.01");
        assert_eq!(format_currency(dec("-0.005"), Locale::English), "-€0.01");
        assert_eq!(format_currency(dec("-0.004"), Locale::English), "€0.00");
    }

    #[test]
    fn test_format_currency_preserves_cents_exactly() {
        // 0.1 + 0.2 drifts in binary floating point but not in Decimal
        let sum = dec("0.1") + dec("0.2");
        assert_eq!(format_currency(sum, Locale::English), "€0.30");
        assert_eq!(format_currency(dec("19999999.99"), Locale::English), "€19,999,999.99");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(dec("20"), Locale::Italian), "+20,00 €");
        assert_eq!(format_signed_currency(dec("0"), Locale::Italian), "+0,00 €");
        assert_eq!(format_signed_currency(dec("-20"), Locale::Italian), "-20,00 €");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(format_date(date, Locale::Italian), "15 feb 2024");
        assert_eq!(format_date(date, Locale::English), "Feb 15, 2024");
    }

    #[test]
    fn test_month_short_clamps_out_of_range() {
        assert_eq!(month_short(9, Locale::Italian), "set");
        assert_eq!(month_short(9, Locale::English), "Sep");
        assert_eq!(month_short(0, Locale::English), "Jan");
        assert_eq!(month_short(13, Locale::English), "Dec");
    }

    #[test]
    fn test_format_percent_guards_undefined() {
        assert_eq!(format_percent(Some(12.5)), "12.50%");
        assert_eq!(format_percent(None), "N/A");
        assert_eq!(format_percent(Some(f64::INFINITY)), "N/A");
        assert_eq!(format_percent(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_format_compact_thousands() {
        assert_eq!(format_compact_thousands(1234.0), "€1.234k");
        assert_eq!(format_compact_thousands(-500.0), "€-0.500k");
        assert_eq!(format_compact_thousands(0.0), "€0.000k");
    }
}
