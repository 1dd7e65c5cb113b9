//! Error taxonomy for dashboard operations.
//!
//! Two families: backend failures (connectivity, non-2xx, undecodable body)
//! and validation failures caught before any request is made. Neither is
//! fatal; callers turn them into notifications.

use std::fmt;

use thiserror::Error;

use crate::format::Locale;
use crate::messages::Text;

/// Anything that can go wrong while talking to the backend or validating input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {}", detail),
        None => String::new(),
    }
}

impl DashboardError {
    /// Message to show the user. Backend `detail` text wins when present,
    /// otherwise the caller's fallback is used for network-level failures.
    pub fn user_message(&self, fallback: &str, locale: Locale) -> String {
        match self {
            DashboardError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            DashboardError::Validation(err) => err.message(locale),
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }
}

/// Form field named in a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Type,
    Category,
    Title,
    CurrentValue,
    CurrentAmount,
}

impl Field {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Field::Name, Locale::Italian) => "Nome",
            (Field::Name, Locale::English) => "Name",
            (Field::Type, Locale::Italian) => "Tipo",
            (Field::Type, Locale::English) => "Type",
            (Field::Category, Locale::Italian) => "Categoria",
            (Field::Category, Locale::English) => "Category",
            (Field::Title, Locale::Italian) => "Titolo",
            (Field::Title, Locale::English) => "Title",
            (Field::CurrentValue, Locale::Italian) => "Valore attuale",
            (Field::CurrentValue, Locale::English) => "Current value",
            (Field::CurrentAmount, Locale::Italian) => "Importo attuale",
            (Field::CurrentAmount, Locale::English) => "Current amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}

/// Input rejected before contacting the backend. `Display` is the English
/// log form; [`ValidationError::message`] is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("'{0}' is not a valid amount")]
    NotANumber(String),

    #[error("Enter an amount greater than zero")]
    NotPositive,

    #[error("{0} cannot be negative")]
    Negative(Field),

    #[error("Select an account")]
    NoAccount,

    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
}

impl ValidationError {
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (ValidationError::Missing(field), Locale::Italian) => {
                format!("{} è obbligatorio", field.label(locale))
            }
            (ValidationError::NotANumber(input), Locale::Italian) => {
                format!("'{}' non è un importo valido", input)
            }
            (ValidationError::Negative(field), Locale::Italian) => {
                format!("{} non può essere negativo", field.label(locale))
            }
            (ValidationError::InvalidDate(input), Locale::Italian) => {
                format!("'{}' non è una data valida", input)
            }
            (ValidationError::NotPositive, _) => locale.text(Text::AmountNotPositive).to_string(),
            (ValidationError::NoAccount, _) => locale.text(Text::SelectAccount).to_string(),
            (_, Locale::English) => self.to_string(),
        }
    }
}
