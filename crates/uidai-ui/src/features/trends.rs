//! Trend view: seasonality and geographic distribution charts.

use crate::core::assets::ChartAsset;
use crate::core::content::{Block, Figure, Page, Tile, Tone};
use crate::core::stats::{self, LOWEST_MONTH_ENROLMENTS, MONTHS_COVERED, PEAK_MONTH_ENROLMENTS};
use crate::core::view::ViewId;

/// Trends content.
#[must_use]
pub fn page() -> Page {
    let peak = stats::thousands(PEAK_MONTH_ENROLMENTS);
    Page {
        id: ViewId::Trends,
        title: "Trend Analysis".into(),
        subtitle: "Historical patterns, seasonality, and geographic distribution".into(),
        hero: None,
        blocks: vec![
            Block::alert(
                Tone::Info,
                "📈 Overview:",
                format!(
                    "Aadhaar enrolment shows strong seasonal patterns with peaks in September \
                     ({peak}) and lows in January ({LOWEST_MONTH_ENROLMENTS}). Geographic \
                     concentration is high—90% of demand concentrated in specific \
                     high-performing pincodes."
                ),
            ),
            Block::Figures(figures(&peak)),
            Block::card(
                "Key Insights from Trends",
                vec![Block::table(
                    &["Trend", "Observation", "Implication"],
                    vec![
                        row![
                            "Seasonality",
                            "September peak 5x higher than January baseline",
                            "Plan surge capacity in Sep-Oct; minimize staffing Dec-Jan"
                        ],
                        row![
                            "Volatility",
                            "Month-to-month growth ranges −50% to +600%",
                            "Unpredictable demand; need flexible resource allocation"
                        ],
                        row![
                            "Geographic Concentration",
                            "Top 10 pincodes = 45% of total enrolments",
                            "Focus resources on high-performers; develop others"
                        ],
                        row![
                            "State Performance",
                            "Top 5 states = 68% of enrolments",
                            "Identify lagging states; share best practices from top performers"
                        ],
                        row![
                            "Growth Patterns",
                            "Some pincodes sustain 100%+ growth; others stagnate",
                            "Segment by performance; tailor interventions"
                        ],
                    ],
                )],
            ),
            Block::card("Interpreting the Visualizations", interpretation()),
            Block::card(
                "Operational Recommendations from Trends",
                vec![Block::grid(recommendations())],
            ),
            Block::alert(
                Tone::Warning,
                "⚠️ Data Quality Note:",
                format!(
                    "These trends are based on cleaned, validated data from {} records across \
                     {} pincodes over {MONTHS_COVERED} months. While insights are actionable, \
                     recommend cross-validating with source systems and conducting interviews \
                     in high-performing areas to understand success factors.",
                    stats::thousands(stats::RECORDS_ANALYZED),
                    stats::UNIQUE_PINCODES
                ),
            ),
        ],
    }
}

fn figures(peak: &str) -> Vec<Figure> {
    vec![
        Figure {
            asset: ChartAsset::TimeTrend,
            alt: "Monthly Time Trend".into(),
            title: "📊 Monthly Enrolment Trends".into(),
            finding: format!(
                "Clear seasonal pattern with September peak ({peak} enrolments) followed by \
                 sharp decline. Suggests promotional period or administrative cycle. January \
                 baseline lowest at {LOWEST_MONTH_ENROLMENTS}. Pattern repeatable for planning."
            )
            .into(),
        },
        Figure {
            asset: ChartAsset::Distributions,
            alt: "Distributions".into(),
            title: "📊 Distribution Analysis".into(),
            finding: "Right-skewed distributions across metrics. Most pincodes enroll 50-200 \
                      people per month, but outliers go up to 500+. Growth rates highly volatile \
                      (−50% to +600%). Indicates diverse operational capacities."
                .into(),
        },
        Figure {
            asset: ChartAsset::StateTotals,
            alt: "State Rankings".into(),
            title: "🏆 Top States by Total Enrolment".into(),
            finding: format!(
                "Top 5 states account for 68% of all enrolments. Geographic concentration \
                 creates both opportunity (surge capacity in key areas) and risk (dependent on \
                 few regions). States ranked by cumulative performance over {MONTHS_COVERED} \
                 months."
            )
            .into(),
        },
    ]
}

fn interpretation() -> Vec<Block> {
    vec![
        Block::heading("Chart 1: Monthly Time Trend"),
        Block::labelled(
            "What to look for:",
            format!(
                "The line chart shows monthly totals over {MONTHS_COVERED} months (June 2025 - \
                 January 2026). The peak in September is evident, followed by a sharp drop. \
                 This pattern suggests a campaign or administrative cycle that could be \
                 replicated or improved."
            ),
        ),
        Block::heading("Chart 2: Distribution Analysis"),
        Block::labelled(
            "What to look for:",
            "The histograms and box plots show spread and outliers. The right-skewed \
             distributions indicate that most pincodes perform modestly, but a few outliers \
             drive significant volume. This variability is normal in government-scale \
             operations but suggests different operational maturity levels.",
        ),
        Block::heading("Chart 3: Top States Ranking"),
        Block::labelled(
            "What to look for:",
            "The bar chart ranks states by total enrolment volume. The dramatic drop-off after \
             the top 5 states shows concentration. This concentration can be an asset (focus) \
             or a risk (dependency). The goal: grow lagging states without losing momentum in \
             top performers.",
        ),
    ]
}

fn recommendations() -> Vec<Tile> {
    vec![
        Tile::new(
            "1. Plan for Seasonality",
            Tone::Success,
            vec![Block::paragraph(
                "Hire temporary staff and prep infrastructure for September surge. Reduce \
                 operational costs in low-demand months. Use Jan-May as training and \
                 maintenance windows.",
            )],
        ),
        Tile::new(
            "2. Geographic Expansion",
            Tone::Success,
            vec![Block::paragraph(
                "Study top-performing pincodes. Replicate their success factors \
                 (infrastructure, staffing, processes) to underperforming regions. Share best \
                 practices across states.",
            )],
        ),
        Tile::new(
            "3. Stabilize Volatility",
            Tone::Success,
            vec![Block::paragraph(
                "For pincodes with extreme growth swings, investigate root causes (staffing \
                 changes? policy shifts?). Implement predictive staffing to smooth demand \
                 fluctuations.",
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_univariate_charts_in_order() {
        let page = page();
        let assets: Vec<ChartAsset> = page.figures().iter().map(|f| f.asset).collect();
        assert_eq!(
            assets,
            [
                ChartAsset::TimeTrend,
                ChartAsset::Distributions,
                ChartAsset::StateTotals
            ]
        );
    }

    #[test]
    fn peak_and_low_months_are_reported() {
        let text = page().text();
        assert!(text.contains("peaks in September (3,156) and lows in January (659)"));
        assert!(text.contains("Seasonality | September peak 5x higher than January baseline"));
        assert!(text.contains("3. Stabilize Volatility"));
    }
}
