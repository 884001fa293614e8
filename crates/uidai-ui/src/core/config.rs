//! Host-page configuration for the dashboard.
//!
//! The page may embed a JSON object in
//! `<script type="application/json" id="dashboard-config">`. Every field is
//! optional; the wasm shell falls back to [`DashboardConfig::default`] when the
//! element is missing or rejected.

use serde::Deserialize;
use thiserror::Error;

use crate::core::assets::ChartAsset;
use crate::core::view::ViewId;

/// Id of the element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Default URL prefix for chart images.
pub const DEFAULT_ASSET_BASE: &str = "/outputs";

/// Errors raised while reading the embedded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The element did not hold a valid configuration object.
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `asset_base` was blank.
    #[error("dashboard config asset_base must not be empty")]
    EmptyAssetBase,
}

/// Runtime settings read from the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// URL prefix chart images are served from.
    pub asset_base: String,
    /// Slug of the view shown on first load.
    pub initial_view: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            initial_view: ViewId::default().slug().to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse the embedded JSON. Blank input yields the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::EmptyAssetBase`] when `asset_base` is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        if config.asset_base.trim().is_empty() {
            return Err(ConfigError::EmptyAssetBase);
        }
        Ok(config)
    }

    /// View to show first; unknown slugs resolve to the default view.
    #[must_use]
    pub fn initial_view(&self) -> ViewId {
        ViewId::from_slug_or_default(&self.initial_view)
    }

    /// URL for a chart image under `asset_base`.
    #[must_use]
    pub fn asset_url(&self, asset: ChartAsset) -> String {
        let base = self.asset_base.trim().trim_end_matches('/');
        format!("{base}/{}", asset.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_uses_defaults() -> Result<(), ConfigError> {
        assert_eq!(DashboardConfig::from_json("")?, DashboardConfig::default());
        assert_eq!(DashboardConfig::from_json(" \n")?, DashboardConfig::default());
        assert_eq!(DashboardConfig::from_json("{}")?, DashboardConfig::default());
        Ok(())
    }

    #[test]
    fn fields_override_defaults() -> Result<(), ConfigError> {
        let config = DashboardConfig::from_json(
            r#"{"asset_base": "https://cdn.example.org/charts/", "initial_view": "forecast"}"#,
        )?;
        assert_eq!(config.initial_view(), ViewId::Forecast);
        assert_eq!(
            config.asset_url(ChartAsset::GrowthByState),
            "https://cdn.example.org/charts/08_trivariate_growth_by_state.png"
        );
        Ok(())
    }

    #[test]
    fn default_asset_urls_match_pipeline_paths() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.asset_url(ChartAsset::TimeTrend),
            "/outputs/01_univariate_time_trend.png"
        );
        assert_eq!(config.initial_view(), ViewId::Overview);
    }

    #[test]
    fn unknown_initial_view_falls_back_to_overview() -> Result<(), ConfigError> {
        let config = DashboardConfig::from_json(r#"{"initial_view": "reports"}"#)?;
        assert_eq!(config.initial_view(), ViewId::Overview);
        Ok(())
    }

    #[test]
    fn rejects_malformed_and_unknown_fields() {
        assert!(matches!(
            DashboardConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"theme": "dark"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{"asset_base": "  "}"#),
            Err(ConfigError::EmptyAssetBase)
        ));
    }
}
