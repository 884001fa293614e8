//! View identifiers and the fixed navigation menu.

/// Brand shown at the start of the navigation bar.
pub const BRAND: &str = "📊 UIDAI Intelligence";

/// Copyright line rendered in the page footer.
pub const FOOTER_NOTICE: &str =
    "© 2026 UIDAI Aadhaar Enrolment Intelligence System. All rights reserved.";

/// Closed set of dashboard views. Defaults to [`ViewId::Overview`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// KPIs and executive summary.
    #[default]
    Overview,
    /// The five-step data pipeline.
    Pipeline,
    /// Historical trends and seasonality.
    Trends,
    /// Geographic hotspots and flagged areas.
    Hotspots,
    /// Forecasting, risk matrix and anomalies.
    Forecast,
    /// Findings and recommendations.
    Insights,
}

impl ViewId {
    /// All views in menu order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Overview,
            Self::Pipeline,
            Self::Trends,
            Self::Hotspots,
            Self::Forecast,
            Self::Insights,
        ]
    }

    /// Stable lowercase identifier used in markup and configuration.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Pipeline => "pipeline",
            Self::Trends => "trends",
            Self::Hotspots => "hotspots",
            Self::Forecast => "forecast",
            Self::Insights => "insights",
        }
    }

    /// Menu label for the view.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Pipeline => "Data Pipeline",
            Self::Trends => "Trends",
            Self::Hotspots => "Hotspots",
            Self::Forecast => "Forecast & Risk",
            Self::Insights => "Insights",
        }
    }

    /// Parse a slug, ignoring surrounding whitespace and ASCII case.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        let wanted = slug.trim();
        Self::all()
            .into_iter()
            .find(|view| view.slug().eq_ignore_ascii_case(wanted))
    }

    /// Parse a slug, falling back to the default view for anything unknown.
    #[must_use]
    pub fn from_slug_or_default(slug: &str) -> Self {
        Self::from_slug(slug).unwrap_or_default()
    }
}

/// One navigation menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// View selected by the entry.
    pub id: ViewId,
    /// Button label.
    pub label: &'static str,
}

/// Navigation menu, in display order.
pub const NAV_ENTRIES: [NavEntry; 6] = [
    entry(ViewId::Overview),
    entry(ViewId::Pipeline),
    entry(ViewId::Trends),
    entry(ViewId::Hotspots),
    entry(ViewId::Forecast),
    entry(ViewId::Insights),
];

const fn entry(id: ViewId) -> NavEntry {
    NavEntry {
        id,
        label: id.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_six_entries_in_fixed_order() {
        let ids: Vec<ViewId> = NAV_ENTRIES.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, ViewId::all().to_vec());
        let labels: Vec<&str> = NAV_ENTRIES.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            [
                "Overview",
                "Data Pipeline",
                "Trends",
                "Hotspots",
                "Forecast & Risk",
                "Insights"
            ]
        );
    }

    #[test]
    fn slugs_round_trip_through_parser() {
        for view in ViewId::all() {
            assert_eq!(ViewId::from_slug(view.slug()), Some(view));
        }
        assert_eq!(ViewId::from_slug("  HotSpots "), Some(ViewId::Hotspots));
    }

    #[test]
    fn unknown_slugs_fall_back_to_overview() {
        assert_eq!(ViewId::from_slug("dashboard"), None);
        assert_eq!(ViewId::from_slug_or_default("dashboard"), ViewId::Overview);
        assert_eq!(ViewId::from_slug_or_default(""), ViewId::Overview);
        assert_eq!(ViewId::default(), ViewId::Overview);
    }
}
