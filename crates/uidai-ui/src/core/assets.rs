//! Chart artifacts produced by the external analysis pipeline.
//!
//! The dashboard only references these files by name; nothing here checks that
//! they exist. The `asset_sync` tool uses the same list when copying them.

/// One of the eight PNG charts written by the analysis step of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartAsset {
    /// Monthly enrolment totals.
    TimeTrend,
    /// Histograms and box plots of the engineered features.
    Distributions,
    /// States ranked by total enrolment.
    StateTotals,
    /// Rolling average against total enrolment.
    Scatter,
    /// State by month enrolment heatmap.
    StateHeatmap,
    /// Trend lines for the five largest states.
    TopStatesTrend,
    /// District by month intensity for the busiest districts.
    DistrictHotspots,
    /// Month-over-month growth per state.
    GrowthByState,
}

impl ChartAsset {
    /// All charts in pipeline output order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::TimeTrend,
            Self::Distributions,
            Self::StateTotals,
            Self::Scatter,
            Self::StateHeatmap,
            Self::TopStatesTrend,
            Self::DistrictHotspots,
            Self::GrowthByState,
        ]
    }

    /// File name the pipeline writes the chart under.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::TimeTrend => "01_univariate_time_trend.png",
            Self::Distributions => "02_univariate_distributions.png",
            Self::StateTotals => "03_univariate_state_totals.png",
            Self::Scatter => "04_bivariate_scatter.png",
            Self::StateHeatmap => "05_bivariate_state_heatmap.png",
            Self::TopStatesTrend => "06_bivariate_top_states_trend.png",
            Self::DistrictHotspots => "07_trivariate_district_hotspots.png",
            Self::GrowthByState => "08_trivariate_growth_by_state.png",
        }
    }

    /// Look up a chart by its file name.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|asset| asset.file_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartAsset;
    use std::collections::HashSet;

    #[test]
    fn file_names_are_unique_and_numbered_in_order() {
        let names: Vec<&str> = ChartAsset::all().iter().map(|a| a.file_name()).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        for (idx, name) in names.iter().enumerate() {
            assert!(name.starts_with(&format!("{:02}_", idx + 1)), "{name}");
            assert!(name.ends_with(".png"));
        }
    }

    #[test]
    fn lookup_by_file_name() {
        assert_eq!(
            ChartAsset::from_file_name("05_bivariate_state_heatmap.png"),
            Some(ChartAsset::StateHeatmap)
        );
        assert_eq!(ChartAsset::from_file_name("09_extra.png"), None);
    }
}
