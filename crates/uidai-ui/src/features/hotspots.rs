//! Hotspot view: geographic clusters, flagged-area summary and priority tiers.

use crate::core::assets::ChartAsset;
use crate::core::content::{Block, Figure, LegendBand, Line, Page, Tone};
use crate::core::stats::{self, ANOMALIES, FLAGGED_RECORDS, HIGH_DEMAND_AREAS, HIGH_RISK_AREAS};
use crate::core::view::ViewId;

/// Hotspots content.
#[must_use]
pub fn page() -> Page {
    Page {
        id: ViewId::Hotspots,
        title: "Hotspots & Anomalies".into(),
        subtitle: "Geographic clusters, growth volatility, and areas requiring operational focus"
            .into(),
        hero: None,
        blocks: vec![
            Block::alert(
                Tone::Danger,
                "🔥 Critical Finding:",
                format!(
                    "{FLAGGED_RECORDS} records ({} of data) flagged for operational attention \
                     due to high demand, volatility, or anomalies. These areas need surge \
                     capacity, stabilization, or investigation.",
                    stats::flagged_share()
                ),
            ),
            Block::Figures(figures()),
            Block::card(
                "What Are \"Hotspots\"?",
                vec![
                    Block::paragraph(
                        "A hotspot is a geographic location (pincode or district) with high \
                         enrolment volume or significant growth volatility. Hotspots need \
                         attention because they are either:",
                    ),
                    Block::numbered(vec![
                        Line::labelled(
                            "High-Demand Hotspots:",
                            "Consistently high enrolment (500+ per month). Need surge capacity \
                             and staffing.",
                        ),
                        Line::labelled(
                            "Volatile Hotspots:",
                            "Extreme month-to-month swings (growth >100% or drops >50%). Need \
                             stabilization strategies.",
                        ),
                        Line::labelled(
                            "Anomaly Hotspots:",
                            "Unusual patterns detected by algorithms (statistical outliers). \
                             Need investigation.",
                        ),
                        Line::labelled(
                            "Growth Hotspots:",
                            "Rapidly expanding areas (300%+ YoY). Need infrastructure investment.",
                        ),
                    ]),
                ],
            ),
            Block::card(
                format!("Flagged Records Summary ({FLAGGED_RECORDS} Areas)"),
                vec![flagged_summary()],
            ),
            Block::card(
                "Understanding Hotspot Visualizations",
                vec![
                    Block::heading("Heatmap Color Legend"),
                    Block::Legend(legend()),
                    Block::heading("How to Read Trend Lines"),
                    Block::paragraph(
                        "In the \"Top 5 States Trend\" and \"Growth by State\" charts, each line \
                         represents a state. Steep lines = rapid growth or decline. Flat lines = \
                         stable operations. Crossing lines = one state overtaking another. Use \
                         these to identify states that need intervention or deserve recognition.",
                    ),
                ],
            ),
            Block::card("Operational Priorities", priorities()),
            Block::alert(
                Tone::Warning,
                "📌 Important:",
                "\"Hotspot\" does not mean \"problem.\" High-demand hotspots are success stories \
                 that need resources. Volatile hotspots need stability. Use data to inform \
                 decisions, not to judge areas negatively. The goal is to support all areas in \
                 growing sustainably.",
            ),
        ],
    }
}

fn figures() -> Vec<Figure> {
    vec![
        Figure {
            asset: ChartAsset::StateHeatmap,
            alt: "State-Month Heatmap".into(),
            title: "🗺️ State × Month Heatmap".into(),
            finding: "Clear geographic and temporal clusters. Darker colors = higher enrolment \
                      volume. September surge is visible across all states. Some states peak \
                      earlier/later (state-specific seasonality). Shows opportunity for \
                      synchronized planning across states."
                .into(),
        },
        Figure {
            asset: ChartAsset::TopStatesTrend,
            alt: "Top 5 States Trend".into(),
            title: "📈 Top 5 States Trend Lines".into(),
            finding: "Top performers follow similar seasonal patterns but at different scales. \
                      Some states sustain growth across months; others dip in Dec-Jan. \
                      Cross-state comparison shows lagging vs. leading performers—valuable for \
                      peer learning and intervention planning."
                .into(),
        },
        Figure {
            asset: ChartAsset::DistrictHotspots,
            alt: "District Hotspots".into(),
            title: "🎯 District-Level Hotspots".into(),
            finding: "Heatmap shows enrolment intensity by district and month. Hotspots \
                      (red/orange) represent areas where surge capacity is critical. Coolspots \
                      (blue) represent under-performing regions where growth interventions could \
                      have high impact. Use for targeted resource allocation."
                .into(),
        },
        Figure {
            asset: ChartAsset::GrowthByState,
            alt: "Growth by State".into(),
            title: "📊 Month-over-Month Growth by State".into(),
            finding: "Growth volatility varies dramatically by state. Some states show stable \
                      10-20% month-over-month growth; others spike 100%+ or drop 50%+. \
                      Volatility = high operational risk. Target high-volatility states for \
                      stability interventions and process improvements."
                .into(),
        },
    ]
}

fn flagged_summary() -> Block {
    Block::table(
        &["Category", "Count", "% of Data", "Action Required"],
        vec![
            row![
                "High-Demand Areas",
                HIGH_DEMAND_AREAS.to_string(),
                "36.8%",
                "Plan surge capacity; hire seasonal staff"
            ],
            row![
                "High-Risk Areas",
                HIGH_RISK_AREAS.to_string(),
                "12.1%",
                "Investigate volatility; stabilize processes"
            ],
            row![
                "Anomaly-Flagged",
                ANOMALIES.to_string(),
                "5.0%",
                "Review data quality; check for errors/unusual events"
            ],
            row![
                "Combined (Multiple Flags)",
                FLAGGED_RECORDS.to_string(),
                stats::flagged_share(),
                "Tiered response based on flags"
            ],
        ],
    )
}

fn legend() -> Vec<LegendBand> {
    [
        ("Dark Red", "Extreme (1000+)", "#8b0000", "white"),
        ("Orange", "High (500-1000)", "#ff6b35", "white"),
        ("Yellow", "Medium (200-500)", "#ffd700", "#333"),
        ("Light Green", "Low (50-200)", "#90ee90", "#333"),
        ("Dark Blue", "Minimal (<50)", "#1f4788", "white"),
    ]
    .into_iter()
    .map(|(label, range, swatch, ink)| LegendBand {
        label: label.into(),
        range: range.into(),
        swatch,
        ink,
    })
    .collect()
}

fn tier(
    heading: &'static str,
    areas: String,
    action: &'static str,
    timeline: &'static str,
) -> [Block; 2] {
    [
        Block::heading(heading),
        Block::Lines(vec![
            Line::labelled("Areas:", areas),
            Line::labelled("Action:", action),
            Line::labelled("Timeline:", timeline),
        ]),
    ]
}

fn priorities() -> Vec<Block> {
    [
        tier(
            "Tier 1 - Immediate Action (High-Demand + High-Risk)",
            "~15-20 pincodes with both high enrolment AND volatility.".to_string(),
            "Emergency staffing, capacity planning, process audit. These areas are straining \
             resources and may be near breaking point.",
            "1-2 weeks",
        ),
        tier(
            "Tier 2 - Medium Priority (High-Demand Only)",
            "~160 pincodes with high demand but stable operations.".to_string(),
            "Seasonal surge planning, technology upgrades, infrastructure expansion.",
            "1-3 months",
        ),
        tier(
            "Tier 3 - Investigation (Anomalies)",
            format!("~{ANOMALIES} pincodes flagged as anomalies by statistical algorithms."),
            "Data quality review, interview operators, investigate root causes.",
            "2-4 weeks",
        ),
        tier(
            "Tier 4 - Growth Opportunity (Low-Performing)",
            "~250 pincodes (52.3%) not in hotspot category but room to grow.".to_string(),
            "Copy success factors from high performers, capacity building, awareness campaigns.",
            "Ongoing",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_bivariate_and_trivariate_charts() {
        let page = page();
        let assets: Vec<ChartAsset> = page.figures().iter().map(|f| f.asset).collect();
        assert_eq!(
            assets,
            [
                ChartAsset::StateHeatmap,
                ChartAsset::TopStatesTrend,
                ChartAsset::DistrictHotspots,
                ChartAsset::GrowthByState
            ]
        );
    }

    #[test]
    fn flagged_summary_totals() {
        let text = page().text();
        assert!(text.contains("Flagged Records Summary (228 Areas)"));
        assert!(text.contains("High-Demand Areas | 176 | 36.8%"));
        assert!(text.contains("Combined (Multiple Flags) | 228 | 47.7% | Tiered response"));
    }

    #[test]
    fn legend_runs_from_extreme_to_minimal() {
        let bands = legend();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0].swatch, "#8b0000");
        assert_eq!(bands[4].range, "Minimal (<50)");
    }

    #[test]
    fn four_priority_tiers() {
        let headings = priorities()
            .iter()
            .filter(|block| matches!(block, Block::Heading(text) if text.starts_with("Tier ")))
            .count();
        assert_eq!(headings, 4);
    }
}
