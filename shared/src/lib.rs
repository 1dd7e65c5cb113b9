use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend-assigned identifier. The finance-hub backend hands out SQLite row
/// ids, but the client treats ids as opaque and never generates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) => EntityId::Number(n),
            Err(_) => EntityId::Text(value.to_string()),
        }
    }
}

/// A named money container (`/conti`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Free-text category such as "Conto corrente" or "Risparmio"
    #[serde(rename = "tipo")]
    pub account_type: String,
    #[serde(rename = "saldo", with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Direction of a transaction. The backend spells these in Italian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "entrata")]
    Income,
    #[serde(rename = "uscita")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "entrata",
            TransactionKind::Expense => "uscita",
        }
    }
}

/// A dated movement of money against an account (`/transazioni`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    #[serde(rename = "conto_id")]
    pub account_id: EntityId,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "categoria")]
    pub category: String,
    /// Signed amount. Expenses are normally stored negative, but callers
    /// must derive direction from `kind`.
    #[serde(rename = "importo", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "descrizione", default)]
    pub description: Option<String>,
    /// Calendar date. The backend may send a full ISO timestamp; only the
    /// date part is kept.
    #[serde(rename = "data", with = "date_only")]
    pub date: NaiveDate,
}

impl Transaction {
    /// Magnitude of the movement regardless of how the sign was stored
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }

    /// Amount with the sign implied by `kind`
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount.abs(),
            TransactionKind::Expense => -self.amount.abs(),
        }
    }

    /// Text shown in lists: the description, or the category when there is none
    pub fn title(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => &self.category,
        }
    }
}

/// A tracked asset position (`/investimenti`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: EntityId,
    #[serde(rename = "conto_id")]
    pub account_id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub investment_type: String,
    #[serde(rename = "importo_iniziale", with = "rust_decimal::serde::float")]
    pub initial_amount: Decimal,
    #[serde(rename = "valore_attuale", with = "rust_decimal::serde::float")]
    pub current_value: Decimal,
}

impl Investment {
    pub fn gain(&self) -> Decimal {
        self.current_value.saturating_sub(self.initial_amount)
    }

    /// Gain as a percentage of the initial amount, `None` when nothing was invested
    pub fn gain_percent(&self) -> Option<f64> {
        percent_of(self.gain(), self.initial_amount)
    }
}

/// A savings target (`/obiettivi`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: EntityId,
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "descrizione", default)]
    pub description: Option<String>,
    #[serde(rename = "importo_target", with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(rename = "importo_attuale", with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    #[serde(rename = "completato", default)]
    pub completed: bool,
    /// Percentage computed by the backend, when it sends one
    #[serde(rename = "progresso", default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl Goal {
    /// Progress in percent, always within 0..=100
    pub fn progress_percent(&self) -> f64 {
        let raw = match self.progress {
            Some(stored) if stored.is_finite() => stored,
            _ => percent_of(self.current_amount, self.target_amount).unwrap_or(0.0),
        };
        raw.clamp(0.0, 100.0)
    }
}

/// `part / whole * 100`, or `None` when `whole` is zero or the ratio does
/// not fit in a `Decimal`
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<f64> {
    use rust_decimal::prelude::ToPrimitive;

    if whole.is_zero() {
        return None;
    }
    part.checked_div(whole)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_f64()
}

/// Body of `POST /conti`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub account_type: String,
    #[serde(rename = "saldo", with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Body of `POST /transazioni`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "conto_id")]
    pub account_id: EntityId,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "importo", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "descrizione")]
    pub description: String,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Body of `POST /investimenti`. The backend debits the linked account by
/// the initial amount and may refuse with "insufficient funds".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvestment {
    #[serde(rename = "conto_id")]
    pub account_id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub investment_type: String,
    #[serde(rename = "importo_iniziale", with = "rust_decimal::serde::float")]
    pub initial_amount: Decimal,
    #[serde(rename = "valore_attuale", with = "rust_decimal::serde::float")]
    pub current_value: Decimal,
}

/// Body of `POST /obiettivi`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    #[serde(rename = "titolo")]
    pub title: String,
    #[serde(rename = "descrizione")]
    pub description: String,
    #[serde(rename = "importo_target", with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(rename = "importo_attuale", with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
}

/// Body of `PUT /obiettivi/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdate {
    #[serde(rename = "importo_attuale", with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
}

/// Response to a successful `POST`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Created {
    pub id: EntityId,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body sent with non-2xx responses. FastAPI puts a plain string in
/// `detail` for handled errors and a list of objects for validation errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable form of `detail`, if there is one
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item.get("msg").and_then(|m| m.as_str()) {
                        Some(msg) => msg.to_string(),
                        None => item.to_string(),
                    })
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

/// The five views of the dashboard. The string forms are what gets stored
/// under the `currentPage` key and match the backend's collection names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    #[serde(rename = "conti")]
    Accounts,
    #[serde(rename = "transazioni")]
    Transactions,
    #[serde(rename = "investimenti")]
    Investments,
    #[serde(rename = "obiettivi")]
    Goals,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Accounts,
        Page::Transactions,
        Page::Investments,
        Page::Goals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Accounts => "conti",
            Page::Transactions => "transazioni",
            Page::Investments => "investimenti",
            Page::Goals => "obiettivi",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Accounts => "Conti",
            Page::Transactions => "Transazioni",
            Page::Investments => "Investimenti",
            Page::Goals => "Obiettivi",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageParseError(pub String);

impl fmt::Display for PageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown page: {}", self.0)
    }
}

impl std::error::Error for PageParseError {}

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.as_str() == s.trim())
            .ok_or_else(|| PageParseError(s.to_string()))
    }
}

/// Serde helpers for the transaction date. Accepts `YYYY-MM-DD` with or
/// without a trailing time component and writes plain `YYYY-MM-DD`.
pub mod date_only {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<NaiveDate, String> {
        let date_part = raw
            .trim()
            .split(|c| c == 'T' || c == ' ')
            .next()
            .unwrap_or_default();
        NaiveDate::parse_from_str(date_part, FORMAT)
            .map_err(|e| format!("invalid date '{}': {}", raw, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_account_from_backend_json() {
        let json = r#"{"id": 3, "nome": "Conto corrente", "tipo": "Corrente", "saldo": 1250.75, "created_at": "2024-01-02T10:00:00"}"#;
        let account: Account = serde_json::from_str(json).unwrap();

        assert_eq!(account.id, EntityId::Number(3));
        assert_eq!(account.name, "Conto corrente");
        assert_eq!(account.balance, dec("1250.75"));
    }

    #[test]
    fn test_transaction_date_drops_time_component() {
        let json = r#"{"id": 1, "conto_id": 2, "tipo": "uscita", "categoria": "Cibo",
            "importo": -30.5, "descrizione": null, "data": "2024-02-15T18:22:01.123456"}"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(transaction.title(), "Cibo");
    }

    #[test]
    fn test_signed_amount_follows_kind() {
        let mut transaction = Transaction {
            id: EntityId::Number(1),
            account_id: EntityId::Number(1),
            kind: TransactionKind::Expense,
            category: "Casa".to_string(),
            amount: dec("40"),
            description: Some("Affitto".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(transaction.signed_amount(), dec("-40"));
        assert_eq!(transaction.magnitude(), dec("40"));

        transaction.kind = TransactionKind::Income;
        transaction.amount = dec("-40");
        assert_eq!(transaction.signed_amount(), dec("40"));
    }

    #[test]
    fn test_new_transaction_serializes_numbers() {
        let request = NewTransaction {
            account_id: EntityId::Number(7),
            kind: TransactionKind::Expense,
            category: "Trasporti".to_string(),
            amount: dec("-12.5"),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["conto_id"], serde_json::json!(7));
        assert_eq!(value["tipo"], serde_json::json!("uscita"));
        assert_eq!(value["importo"], serde_json::json!(-12.5));
        assert_eq!(value["data"], serde_json::json!("2024-03-01"));
    }

    #[test]
    fn test_investment_gain_percent_guarded() {
        let investment = Investment {
            id: EntityId::Number(1),
            account_id: EntityId::Number(1),
            name: "ETF".to_string(),
            investment_type: "ETF".to_string(),
            initial_amount: Decimal::ZERO,
            current_value: dec("100"),
        };
        assert_eq!(investment.gain(), dec("100"));
        assert_eq!(investment.gain_percent(), None);
    }

    #[test]
    fn test_percent_of_overflow_is_none() {
        let huge = dec("100000000000000000000");
        let tiny = dec("0.0000000001");

        assert_eq!(percent_of(huge, tiny), None);
        assert_eq!(percent_of(Decimal::MAX, Decimal::ONE), None);
        assert_eq!(percent_of(Decimal::ONE, Decimal::TWO), Some(50.0));
    }

    #[test]
    fn test_goal_progress_is_clamped() {
        let mut goal = Goal {
            id: EntityId::Number(1),
            title: "Vacanza".to_string(),
            description: None,
            target_amount: dec("1000"),
            current_amount: dec("1500"),
            completed: true,
            progress: None,
        };
        assert_eq!(goal.progress_percent(), 100.0);

        goal.current_amount = dec("250");
        assert_eq!(goal.progress_percent(), 25.0);

        goal.target_amount = Decimal::ZERO;
        assert_eq!(goal.progress_percent(), 0.0);

        goal.progress = Some(-5.0);
        assert_eq!(goal.progress_percent(), 0.0);
    }

    #[test]
    fn test_error_body_messages() {
        let plain: ErrorBody =
            serde_json::from_str(r#"{"detail": "Fondi insufficienti. Saldo disponibile: €10.00"}"#).unwrap();
        assert_eq!(plain.message().unwrap(), "Fondi insufficienti. Saldo disponibile: €10.00");

        let structured: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "importo"], "msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(structured.message().unwrap(), "field required");

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message(), None);
    }

    #[test]
    fn test_page_round_trip_through_storage_names() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn test_entity_id_from_str() {
        assert_eq!(EntityId::from("42"), EntityId::Number(42));
        assert_eq!(EntityId::from("abc"), EntityId::Text("abc".to_string()));
        assert_eq!(EntityId::Number(42).to_string(), "42");
    }
}
