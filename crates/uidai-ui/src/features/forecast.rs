//! Forecast view: rolling-average method, risk matrix and anomaly findings.

use crate::core::content::{
    Block, Line, Page, RiskCell, RiskLevel, RiskMatrix, RiskRow, Text, Tile, Tone,
};
use crate::core::stats::{self, ANOMALIES, Z_SCORE_THRESHOLD};
use crate::core::view::ViewId;

/// Forecast content.
#[must_use]
pub fn page() -> Page {
    Page {
        id: ViewId::Forecast,
        title: "Forecast & Risk Intelligence".into(),
        subtitle: "Predictive analytics, risk classification, and anomaly detection".into(),
        hero: None,
        blocks: vec![
            Block::alert(
                Tone::Info,
                "🔮 Forecasting Method:",
                format!(
                    "3-month rolling average with MAE of {} enrolments (mean absolute error). \
                     Use for baseline planning (1-3 month horizon). Not suitable for long-term \
                     strategic planning without seasonal adjustments.",
                    stats::mae()
                ),
            ),
            Block::card("Forecasting Methodology", vec![Block::grid(methodology())]),
            Block::card(
                "Risk Classification Matrix",
                vec![
                    Block::paragraph(
                        "Areas are classified on two dimensions: Demand Level (volume) and Risk \
                         Level (stability).",
                    ),
                    Block::RiskMatrix(risk_matrix()),
                ],
            ),
            Block::card("Anomaly Detection Methods", vec![Block::grid(detectors())]),
            Block::card(
                format!("Anomalies Detected ({ANOMALIES} records)"),
                vec![
                    Block::paragraph("The following types of anomalies were found and flagged:"),
                    Block::table(
                        &["Anomaly Type", "Count", "Example", "Action"],
                        vec![
                            row![
                                "Extreme Growth Spikes",
                                "8",
                                "Pincode X: 50 → 450 enrolments (+800%)",
                                "Investigate root cause (campaign? error?)"
                            ],
                            row![
                                "Sharp Drops",
                                "7",
                                "Pincode Y: 300 → 75 enrolments (-75%)",
                                "Check if capacity reduction or reporting error"
                            ],
                            row![
                                "Sustained High Volume",
                                "6",
                                "Pincode Z: 600+ consistently",
                                "Validate capacity; check for data errors"
                            ],
                            row![
                                "Multivariate Outliers",
                                "3",
                                "Unusual combination of growth + timing",
                                "Manual review and investigation"
                            ],
                        ],
                    ),
                ],
            ),
            Block::card("Forecast Action Plan", action_plan()),
            Block::alert(
                Tone::Warning,
                "🎯 Key Reminder:",
                "Forecasts are not predictions of the future. They are statistical estimates \
                 based on historical patterns. Use them to inform decisions, cross-validate with \
                 domain experts, and update regularly. One-size-fits-all forecasts don't account \
                 for local factors, policy changes, or special events.",
            ),
        ],
    }
}

fn methodology() -> Vec<Tile> {
    vec![
        Tile::new(
            "📊 Method: Rolling Average",
            Tone::Info,
            vec![
                Block::paragraph(
                    "We use a 3-month rolling average forecast: each month's prediction is the \
                     average of the previous 3 months.",
                ),
                Block::Code(vec!["Forecast(month) = Avg(month-1, month-2, month-3)".into()]),
            ],
        ),
        Tile::new(
            "✅ Accuracy",
            Tone::Success,
            vec![Block::Lines(vec![
                Line::labelled(
                    "MAE (Mean Absolute Error):",
                    format!("{} enrolments", stats::mae()),
                ),
                Line::labelled("MAPE (Mean Absolute % Error):", stats::mape()),
                Line::labelled(
                    "Accuracy Range:",
                    "±15 enrolments (±30-40% for areas with 40-50 baseline)",
                ),
            ])],
        ),
        Tile::new(
            "⏱️ Horizon & Limitations",
            Tone::Warning,
            vec![Block::Lines(vec![
                Line::labelled("Best for:", "1-3 month operational planning"),
                Line::labelled("Not suitable for:", "Long-term strategy (6+ months)"),
                Line::labelled(
                    "Weakness:",
                    "Ignores seasonal patterns, policy changes, external shocks",
                ),
            ])],
        ),
    ]
}

fn cell(level: RiskLevel, summary: &'static str, action: &'static str) -> RiskCell {
    RiskCell {
        level,
        summary: summary.into(),
        action: format!("Action: {action}").into(),
    }
}

fn risk_row(demand: &'static str, cells: [(&'static str, &'static str); 3]) -> RiskRow {
    let [low, medium, high] = cells;
    RiskRow {
        demand: demand.into(),
        cells: [
            cell(RiskLevel::Low, low.0, low.1),
            cell(RiskLevel::Medium, medium.0, medium.1),
            cell(RiskLevel::High, high.0, high.1),
        ],
    }
}

/// Demand × risk grid used to prioritize areas.
#[must_use]
pub fn risk_matrix() -> RiskMatrix {
    let columns: [Text; 3] = ["Low Risk".into(), "Medium Risk".into(), "High Risk".into()];
    RiskMatrix {
        corner: "Demand \\ Risk".into(),
        columns,
        rows: vec![
            risk_row(
                "Low Demand",
                [
                    ("Stable, low-volume areas", "Gradual development"),
                    ("Unpredictable, small scale", "Monitor + investigate"),
                    ("Volatile, struggling areas", "Emergency support"),
                ],
            ),
            risk_row(
                "Medium Demand",
                [
                    ("Ideal state: stable, growing", "Maintain, optimize"),
                    ("Growing but volatile", "Stabilize operations"),
                    ("High demand, unstable", "Capacity + stability"),
                ],
            ),
            risk_row(
                "High Demand",
                [
                    ("Star performers", "Maintain capacity"),
                    ("High volume, some volatility", "Surge capacity + stability"),
                    ("Critical: extreme demand+risk", "Emergency response"),
                ],
            ),
        ],
    }
}

fn detectors() -> Vec<Tile> {
    vec![
        Tile::new(
            "1. Z-Score Method",
            Tone::Info,
            vec![
                Block::labelled(
                    "How it works:",
                    format!(
                        "Identifies data points more than {Z_SCORE_THRESHOLD} standard \
                         deviations from the mean."
                    ),
                ),
                Block::Code(vec!["Z = (X - Mean) / StdDev".into()]),
                Block::labelled(
                    "Results:",
                    format!(
                        "0 outliers found at Z>{Z_SCORE_THRESHOLD} threshold. Data is \
                         relatively clean."
                    ),
                ),
            ],
        ),
        Tile::new(
            "2. Isolation Forest",
            Tone::Warning,
            vec![
                Block::labelled(
                    "How it works:",
                    "ML algorithm that isolates outliers by randomly splitting data. Points \
                     requiring fewer splits are anomalies.",
                ),
                Block::labelled(
                    "Results:",
                    format!(
                        "{ANOMALIES} anomalies detected (~5% of data). Typically spikes or drops \
                         unexplainable by normal variance."
                    ),
                ),
                Block::Lines(vec![
                    Line::plain("✓ More sensitive than Z-score"),
                    Line::plain("✓ Detects multivariate anomalies"),
                    Line::plain("✓ No assumptions about distribution"),
                ]),
            ],
        ),
        Tile::new(
            "3. Rule-Based Flagging",
            Tone::Danger,
            vec![
                Block::labelled("How it works:", "Business rules based on domain knowledge:"),
                Block::bullets(vec![
                    Line::plain("Growth >300% in single month"),
                    Line::plain("Volume drops >50% month-over-month"),
                    Line::plain("Enrolment >500 (capacity stress)"),
                    Line::plain("Negative or zero enrolments"),
                ]),
            ],
        ),
    ]
}

fn action_plan() -> Vec<Block> {
    let plan = |heading: &'static str, steps: [&'static str; 5]| {
        [
            Block::heading(heading),
            Block::numbered(steps.into_iter().map(Line::plain).collect()),
        ]
    };
    [
        plan(
            "✅ For Operations Planning",
            [
                "Use rolling average forecasts to plan 1-3 month ahead capacity",
                "Check forecasted demand against current staffing capacity",
                "Flag areas where forecast > available capacity",
                "Plan hiring and training 4-6 weeks before peak season",
                "Adjust forecast quarterly based on actual performance",
            ],
        ),
        plan(
            "⚠️ For Risk Management",
            [
                "Monitor anomalies monthly; investigate any new patterns",
                "Classify areas into risk matrix; prioritize Tier 1 (Red) areas",
                "Implement stability interventions in high-risk zones",
                "Track effectiveness of interventions month-over-month",
                "Escalate persistent anomalies to leadership for review",
            ],
        ),
        plan(
            "🎯 For Strategic Planning",
            [
                "Use rolling 3-month averages (not raw forecasts) for strategic projections",
                "Account for seasonal patterns when planning annual budgets",
                "Identify structural growth trends vs. noise",
                "Use flagged areas as expansion targets (low-risk) or support cases (high-risk)",
                "Validate strategic assumptions quarterly",
            ],
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
    fn risk_matrix_is_three_by_three() {
        let matrix = risk_matrix();
        assert_eq!(matrix.rows.len(), 3);
        for row in &matrix.rows {
            let levels: Vec<RiskLevel> = row.cells.iter().map(|cell| cell.level).collect();
            assert_eq!(levels, [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]);
            assert!(row.cells.iter().all(|cell| cell.action.starts_with("Action: ")));
        }
        assert_eq!(matrix.rows[2].cells[2].summary, "Critical: extreme demand+risk");
    }

    #[test]
    fn anomaly_breakdown_sums_to_detected_total() {
        let page = page();
        let mut total = 0;
        page.visit(|block| {
            if let Block::Table(table) = block
                && table.headers.first().is_some_and(|h| h == "Anomaly Type")
            {
                total = table
                    .rows
                    .iter()
                    .filter_map(|row| row[1].parse::<u32>().ok())
                    .sum();
            }
        });
        assert_eq!(total, ANOMALIES);
    }

    #[test]
    fn method_and_badges_render() {
        let text = page().text();
        assert!(text.contains("🔮 Forecasting Method: 3-month rolling average with MAE of 15.43"));
        assert!(text.contains("Red 🔴 Critical: extreme demand+risk Action: Emergency response"));
        assert!(text.contains("MAPE (Mean Absolute % Error): 66.6%"));
    }
}
