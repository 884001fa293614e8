//! Headline statistics shared by several views.
//!
//! The pipeline publishes these numbers once per refresh; views format them
//! from here so a refresh only touches this file. Figures that appear in a
//! single view stay inline in that view.

/// Valid enrolment records after cleaning.
pub const RECORDS_ANALYZED: u32 = 3_967;
/// Month-state-district-pincode rows after aggregation.
pub const AGGREGATED_RECORDS: u32 = 478;
/// Columns in the engineered feature table.
pub const FEATURE_COLUMNS: u32 = 9;
/// Months covered by the dataset.
pub const MONTHS_COVERED: u32 = 7;
/// Human-readable span of the dataset.
pub const PERIOD_LABEL: &str = "Jun 2025 - Jan 2026";
/// Distinct pincodes in the dataset.
pub const UNIQUE_PINCODES: u32 = 90;
/// Records flagged for operational attention.
pub const FLAGGED_RECORDS: u32 = 228;
/// Share of aggregated records that were flagged, in percent.
pub const FLAGGED_SHARE_PCT: f64 = 47.7;
/// Areas flagged as high demand.
pub const HIGH_DEMAND_AREAS: u32 = 176;
/// Areas flagged as high risk (volatile and high demand).
pub const HIGH_RISK_AREAS: u32 = 58;
/// Isolation Forest anomalies.
pub const ANOMALIES: u32 = 24;
/// Z-score threshold used for outlier detection.
pub const Z_SCORE_THRESHOLD: f64 = 2.5;
/// Mean absolute error of the rolling-average forecast.
pub const FORECAST_MAE: f64 = 15.43;
/// Mean absolute percentage error of the rolling-average forecast.
pub const FORECAST_MAPE_PCT: f64 = 66.6;
/// Number of charts produced by the analysis step.
pub const CHART_COUNT: u32 = 8;
/// Enrolments in the peak month (September).
pub const PEAK_MONTH_ENROLMENTS: u32 = 3_156;
/// Enrolments in the lowest month (January).
pub const LOWEST_MONTH_ENROLMENTS: u32 = 659;
/// Number of operational recommendations.
pub const RECOMMENDATIONS: u32 = 4;

/// Format an integer with comma thousands separators (`3967` → `3,967`).
#[must_use]
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Forecast MAE with two decimals.
#[must_use]
pub fn mae() -> String {
    format!("{FORECAST_MAE:.2}")
}

/// Flagged share with one decimal and a percent sign.
#[must_use]
pub fn flagged_share() -> String {
    format!("{FLAGGED_SHARE_PCT:.1}%")
}

/// Forecast MAPE with one decimal and a percent sign.
#[must_use]
pub fn mape() -> String {
    format!("{FORECAST_MAPE_PCT:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_inserts_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(659), "659");
        assert_eq!(thousands(3_967), "3,967");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formatted_metrics_match_published_values() {
        assert_eq!(mae(), "15.43");
        assert_eq!(flagged_share(), "47.7%");
        assert_eq!(mape(), "66.6%");
    }
}
