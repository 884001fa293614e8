//! Landing view: hero banner, headline KPIs and the executive summary.

use crate::core::content::{Block, Hero, HeroAction, Kpi, Line, Page, Table, Tile, Tone};
use crate::core::stats::{
    self, FLAGGED_RECORDS, HIGH_RISK_AREAS, LOWEST_MONTH_ENROLMENTS, MONTHS_COVERED,
    PEAK_MONTH_ENROLMENTS, PERIOD_LABEL, RECORDS_ANALYZED, UNIQUE_PINCODES,
};
use crate::core::view::ViewId;

/// Overview content.
#[must_use]
pub fn page() -> Page {
    Page {
        id: ViewId::Overview,
        title: "System Overview".into(),
        subtitle: "Key Performance Indicators & Executive Summary".into(),
        hero: Some(hero()),
        blocks: vec![
            Block::Kpis(kpis()),
            Block::card(
                "What is this system?",
                vec![Block::paragraph(
                    "The UIDAI Aadhaar Enrolment Intelligence System transforms raw enrolment \
                     data into actionable insights for policy makers and operations teams. Our \
                     5-step data pipeline processes over 3,900 records, identifies geographic \
                     hotspots, forecasts demand, and detects operational anomalies—all with \
                     transparent, interpretable methodology.",
                )],
            ),
            Block::card("Key Features", vec![Block::bullets(features())]),
            Block::alert(
                Tone::Info,
                "💡 System Status:",
                "All data processed and validated. Ready for operational deployment.",
            ),
            Block::card(
                "Who is this for?",
                vec![Block::table(
                    &["User Role", "Key Focus Areas", "Time Investment"],
                    vec![
                        row![
                            "Executives",
                            "Overview → Insights (KPIs, recommendations, strategic impact)",
                            "10 mins"
                        ],
                        row![
                            "Operations Teams",
                            "Hotspots & Forecast & Risk (specific areas, intervention priorities)",
                            "20 mins"
                        ],
                        row![
                            "Data Analysts",
                            "Pipeline + Trends (methodology, code, detailed analysis)",
                            "45 mins"
                        ],
                        row![
                            "Policy Makers",
                            "Full Dashboard (all pages for comprehensive understanding)",
                            "30 mins"
                        ],
                    ],
                )],
            ),
            Block::card("Quick Stats", vec![quick_stats()]),
            Block::card("Next Steps", vec![Block::grid(next_steps())]),
        ],
    }
}

fn hero() -> Hero {
    Hero {
        title: "🎯 UIDAI Aadhaar Enrolment Intelligence System".into(),
        tagline: "Real-time analytics and forecasting for government-scale identity \
                  enrollment operations"
            .into(),
        actions: vec![
            HeroAction {
                label: "View Full Pipeline".into(),
                target: Some(ViewId::Pipeline),
                primary: true,
            },
            HeroAction {
                label: "Download Report".into(),
                target: None,
                primary: false,
            },
        ],
    }
}

fn kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            label: "Total Enrolments".into(),
            value: stats::thousands(RECORDS_ANALYZED).into(),
            caption: "Records Analyzed".into(),
        },
        Kpi {
            label: "Time Period".into(),
            value: MONTHS_COVERED.to_string().into(),
            caption: format!("Months ({PERIOD_LABEL})").into(),
        },
        Kpi {
            label: "Geographic Coverage".into(),
            value: UNIQUE_PINCODES.to_string().into(),
            caption: "Unique Pincodes".into(),
        },
        Kpi {
            label: "Flagged Areas".into(),
            value: FLAGGED_RECORDS.to_string().into(),
            caption: "Requiring Intervention".into(),
        },
    ]
}

fn features() -> Vec<Line> {
    vec![
        Line::labelled(
            "📈 Trend Analysis:",
            "Monthly patterns, seasonal peaks, geographic distribution",
        ),
        Line::labelled(
            "🔥 Hotspot Detection:",
            "Identify high-demand areas with growth volatility",
        ),
        Line::labelled(
            "🔮 Demand Forecasting:",
            format!("3-month rolling average predictions (MAE: {})", stats::mae()),
        ),
        Line::labelled(
            "⚠️ Anomaly Detection:",
            "Z-score and Isolation Forest methods",
        ),
        Line::labelled(
            "🎯 Risk Classification:",
            "2D matrix (Demand × Risk) for operational prioritization",
        ),
        Line::labelled(
            format!("📊 {} Publication-Quality Visualizations:", stats::CHART_COUNT),
            "Professional charts for presentations",
        ),
    ]
}

fn quick_stats() -> Block {
    Block::Table(Table {
        headers: vec!["Metric".into(), "Value".into(), "Insight".into()],
        rows: vec![
            row![
                "Peak Month",
                "September",
                format!(
                    "{} enrolments (79% of average monthly)",
                    stats::thousands(PEAK_MONTH_ENROLMENTS)
                )
            ],
            row![
                "Lowest Month",
                "January",
                format!("{LOWEST_MONTH_ENROLMENTS} enrolments (baseline period)")
            ],
            row![
                "Geographic Concentration",
                "High",
                "Top 10 pincodes account for 45% of demand"
            ],
            row![
                "Growth Volatility",
                "Extreme",
                "Some areas spike 1,100%, others drop 50%+"
            ],
            row![
                "High-Risk Areas",
                HIGH_RISK_AREAS.to_string(),
                "Volatile + high-demand (need stabilization)"
            ],
            row![
                "Forecast Accuracy",
                format!("MAE: {}", stats::mae()),
                "±15 enrolments average prediction error"
            ],
        ],
        emphasize_first: false,
    })
}

fn next_steps() -> Vec<Tile> {
    vec![
        Tile::new(
            "📊 Explore Data",
            Tone::Neutral,
            vec![Block::paragraph(
                "Navigate through Trends, Hotspots, and Forecast pages to understand patterns \
                 and operational insights.",
            )],
        ),
        Tile::new(
            "🔍 Understand Methods",
            Tone::Neutral,
            vec![Block::paragraph(
                "Visit Data Pipeline page to see how raw data is cleaned, aggregated, and \
                 analyzed using transparent methods.",
            )],
        ),
        Tile::new(
            "💡 Get Insights",
            Tone::Neutral,
            vec![Block::paragraph(
                "Read Insights page for key findings and 4 operational recommendations ready \
                 for immediate action.",
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_links_to_pipeline() {
        let hero = page().hero.unwrap_or_else(|| panic!("overview has a hero"));
        assert_eq!(hero.actions[0].target, Some(ViewId::Pipeline));
        assert!(hero.actions[0].primary);
        assert_eq!(hero.actions[1].target, None);
    }

    #[test]
    fn kpis_show_headline_numbers() {
        let Block::Kpis(kpis) = &page().blocks[0] else {
            panic!("first block is the KPI row");
        };
        let values: Vec<&str> = kpis.iter().map(|kpi| kpi.value.as_ref()).collect();
        assert_eq!(values, ["3,967", "7", "90", "228"]);
        assert_eq!(kpis[1].caption, "Months (Jun 2025 - Jan 2026)");
    }

    #[test]
    fn quick_stats_formats_shared_figures() {
        let text = page().text();
        assert!(text.contains("Peak Month | September | 3,156 enrolments"));
        assert!(text.contains("Forecast Accuracy | MAE: 15.43"));
        assert!(text.contains("🔮 Demand Forecasting: 3-month rolling average predictions (MAE: 15.43)"));
    }
}
