use anyhow::{anyhow, Context, Result};
use finance_hub_core::DashboardConfig;

use super::logging::Logger;

/// Element holding optional JSON overrides in `index.html`
const CONFIG_ELEMENT_ID: &str = "finance-hub-config";

/// Reads the page's embedded config, falling back to defaults when it is
/// missing or malformed
pub fn load_config() -> DashboardConfig {
    match read_embedded_config() {
        Ok(Some(config)) => config,
        Ok(None) => DashboardConfig::default(),
        Err(e) => {
            Logger::warn_with_component("config", &format!("Using default config: {:#}", e));
            DashboardConfig::default()
        }
    }
}

fn read_embedded_config() -> Result<Option<DashboardConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document available"))?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let config = DashboardConfig::from_json(&raw)
        .with_context(|| format!("invalid JSON in #{}", CONFIG_ELEMENT_ID))?;
    Ok(Some(config))
}
