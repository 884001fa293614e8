//! Host-page configuration loading for the app shell.

use gloo::console;
use gloo::utils::document;

use crate::core::config::{CONFIG_ELEMENT_ID, DashboardConfig};
use crate::core::view::ViewId;

/// Read `#dashboard-config`, falling back to defaults when absent or invalid.
pub(crate) fn load_config() -> DashboardConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return DashboardConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match DashboardConfig::from_json(&raw) {
        Ok(config) => {
            if ViewId::from_slug(&config.initial_view).is_none() {
                console::warn!(
                    "unknown initial_view in dashboard config; using overview",
                    config.initial_view.clone()
                );
            }
            config
        }
        Err(err) => {
            console::error!("dashboard config rejected; using defaults", err.to_string());
            DashboardConfig::default()
        }
    }
}
