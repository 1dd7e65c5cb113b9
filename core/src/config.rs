use serde::{Deserialize, Serialize};

use crate::format::Locale;

/// Settings for the dashboard pipeline. Every field has a default so a
/// partial JSON document is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    /// Sent as `?limit=` on `GET /transazioni`; the backend caps at 50 when absent
    pub transaction_fetch_limit: Option<u32>,
    pub locale: Locale,
    pub animation: AnimationConfig,
    pub chart: ChartConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            transaction_fetch_limit: None,
            locale: Locale::default(),
            animation: AnimationConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Base URL with any trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Behaviour of the simulated investment ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub interval_ms: u32,
    /// Largest relative move per tick; samples are drawn from `[-v, v)`
    pub volatility: f64,
    pub history_capacity: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 4000,
            volatility: 0.02,
            history_capacity: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub padding: f64,
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 50.0,
            height: 220.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.transaction_fetch_limit, None);
        assert_eq!(config.animation.interval_ms, 4000);
        assert_eq!(config.animation.volatility, 0.02);
        assert_eq!(config.animation.history_capacity, 20);
        assert_eq!(config.chart.padding, 50.0);
        assert_eq!(config.locale, Locale::Italian);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"api_base_url": "https://finance.example/api/", "animation": {"interval_ms": 1000}}"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://finance.example/api");
        assert_eq!(config.animation.interval_ms, 1000);
        assert_eq!(config.animation.history_capacity, 20);
        assert_eq!(config.chart.height, 220.0);
    }

    #[test]
    fn test_locale_by_name() {
        let config = DashboardConfig::from_json(r#"{"locale": "english"}"#).unwrap();
        assert_eq!(config.locale, Locale::English);
    }
}
