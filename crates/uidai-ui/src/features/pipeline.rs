//! Data pipeline view: the five external processing stages and their artifacts.

use crate::core::content::{Block, Line, Page, PipelineStep, Text, Tile, Tone};
use crate::core::stats::{
    self, AGGREGATED_RECORDS, CHART_COUNT, FEATURE_COLUMNS, FLAGGED_RECORDS, RECORDS_ANALYZED,
    Z_SCORE_THRESHOLD,
};
use crate::core::view::ViewId;

/// Pipeline content.
#[must_use]
pub fn page() -> Page {
    let steps = steps();
    let details = steps.iter().flat_map(step_details).collect();
    Page {
        id: ViewId::Pipeline,
        title: "Data Pipeline Architecture".into(),
        subtitle: "Transparent, reproducible, 5-step data transformation process".into(),
        hero: None,
        blocks: vec![
            Block::alert(
                Tone::Info,
                "🔍 Transparency First:",
                "Every step is documented, reproducible, and uses interpretable methods. No \
                 black-box ML—all algorithms are explained. All code is commented.",
            ),
            Block::Steps(steps),
            Block::card("Step-by-Step Details", details),
            Block::card("Data Flow Diagram", vec![Block::Code(flow_diagram())]),
            Block::card("Analysis Methods", vec![Block::grid(methods())]),
            Block::alert(
                Tone::Success,
                "✅ Reproducibility:",
                "All 5 scripts can be re-run monthly. New data → Run pipeline → Updated \
                 insights. Code is modular, documented, and designed for production use.",
            ),
        ],
    }
}

/// The five stages, in execution order.
#[must_use]
pub fn steps() -> Vec<PipelineStep> {
    vec![
        PipelineStep {
            number: 1,
            title: "Load & Clean".into(),
            script: "01_load_and_clean.py".into(),
            input: "enrolment.csv".into(),
            output: "enrolment_cleaned.csv".into(),
            description: "Load raw data, standardize columns, convert dates (DD-MM-YYYY \
                          format), calculate total enrolments from age groups, remove invalid \
                          records."
                .into(),
            records: format!("{} valid records", stats::thousands(RECORDS_ANALYZED)).into(),
        },
        PipelineStep {
            number: 2,
            title: "Aggregate".into(),
            script: "02_merge_datasets.py".into(),
            input: "enrolment_cleaned.csv".into(),
            output: "enrolment_monthly.csv".into(),
            description: format!(
                "Group by month-state-district-pincode, sum total enrolments, create monthly \
                 time series across {} months.",
                stats::MONTHS_COVERED
            )
            .into(),
            records: format!("{AGGREGATED_RECORDS} aggregated records").into(),
        },
        PipelineStep {
            number: 3,
            title: "Engineer Features".into(),
            script: "03_feature_engineering.py".into(),
            input: "enrolment_monthly.csv".into(),
            output: "enrolment_features.csv".into(),
            description: "Calculate month-over-month growth (%), 3-month rolling average, \
                          enrolment share by district/state, create analysis-ready dataset."
                .into(),
            records: format!("{AGGREGATED_RECORDS} rows with {FEATURE_COLUMNS} columns").into(),
        },
        PipelineStep {
            number: 4,
            title: "Analyze".into(),
            script: "04_analysis.py".into(),
            input: "enrolment_features.csv".into(),
            output: format!("{CHART_COUNT} PNG visualizations").into(),
            description: "Univariate (time trends, distributions), bivariate (correlations, \
                          heatmaps), trivariate (hotspots, growth patterns) analysis."
                .into(),
            records: format!("{CHART_COUNT} publication-quality charts").into(),
        },
        PipelineStep {
            number: 5,
            title: "Predict & Detect".into(),
            script: "05_ml_analysis.py".into(),
            input: "enrolment_features.csv".into(),
            output: "flagged_records.csv".into(),
            description: format!(
                "Implement 3-month rolling average forecasting (MAE: {}), Z-score anomaly \
                 detection, Isolation Forest clustering, risk classification.",
                stats::mae()
            )
            .into(),
            records: format!("{FLAGGED_RECORDS} flagged records").into(),
        },
    ]
}

fn step_details(step: &PipelineStep) -> [Block; 4] {
    [
        Block::heading(format!("Step {}: {}", step.number, step.title)),
        Block::labelled("Script:", step.script.clone()),
        Block::paragraph(step.description.clone()),
        Block::facts(vec![
            row!["Input", step.input.clone()],
            row!["Output", step.output.clone()],
            row!["Records", step.records.clone()],
        ]),
    ]
}

fn flow_diagram() -> Vec<Text> {
    vec![
        format!(
            "Raw Data (enrolment.csv - {} records)",
            stats::thousands(RECORDS_ANALYZED)
        )
        .into(),
        "↓".into(),
        "1️⃣ CLEAN (01_load_and_clean.py)".into(),
        "↓ enrolment_cleaned.csv".into(),
        "2️⃣ AGGREGATE (02_merge_datasets.py)".into(),
        format!("↓ enrolment_monthly.csv ({AGGREGATED_RECORDS} rows)").into(),
        "3️⃣ ENGINEER (03_feature_engineering.py)".into(),
        format!("↓ enrolment_features.csv ({FEATURE_COLUMNS} columns)").into(),
        "4️⃣ ANALYZE (04_analysis.py)".into(),
        format!("↓ {CHART_COUNT} PNG visualizations").into(),
        "5️⃣ PREDICT & DETECT (05_ml_analysis.py)".into(),
        format!("↓ flagged_records.csv ({FLAGGED_RECORDS} records)").into(),
        "✅ INSIGHTS & RECOMMENDATIONS".into(),
    ]
}

fn methods() -> Vec<Tile> {
    vec![
        Tile::new(
            "📊 Visualization",
            Tone::Info,
            vec![Block::bullets(vec![
                Line::plain("Univariate: Time series, histograms, rankings"),
                Line::plain("Bivariate: Scatter plots, heatmaps, trends"),
                Line::plain("Trivariate: Multi-dimensional hotspot analysis"),
            ])],
        ),
        Tile::new(
            "🔮 Forecasting",
            Tone::Warning,
            vec![Block::bullets(vec![
                Line::plain("3-month rolling average"),
                Line::plain(format!("Mean Absolute Error: {}", stats::mae())),
                Line::plain(format!("MAPE: {} (baseline)", stats::mape())),
            ])],
        ),
        Tile::new(
            "⚠️ Anomaly Detection",
            Tone::Danger,
            vec![Block::bullets(vec![
                Line::plain(format!("Z-score (threshold: Z > {Z_SCORE_THRESHOLD})")),
                Line::plain("Isolation Forest clustering"),
                Line::plain(format!("{FLAGGED_RECORDS} anomalies flagged (5.7%)")),
            ])],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_chain_outputs_into_inputs() {
        let steps = steps();
        assert_eq!(steps.len(), 5);
        for pair in steps.windows(2) {
            assert_eq!(pair[1].number, pair[0].number + 1);
        }
        assert_eq!(steps[1].input, steps[0].output);
        assert_eq!(steps[2].input, steps[1].output);
        assert_eq!(steps[4].input, steps[2].output);
    }

    #[test]
    fn step_records_use_pipeline_counts() {
        let records: Vec<String> = steps().iter().map(|s| s.records.to_string()).collect();
        assert_eq!(
            records,
            [
                "3,967 valid records",
                "478 aggregated records",
                "478 rows with 9 columns",
                "8 publication-quality charts",
                "228 flagged records",
            ]
        );
    }

    #[test]
    fn details_and_methods_render() {
        let text = page().text();
        assert!(text.contains("Step 3: Engineer Features"));
        assert!(text.contains("Script: 05_ml_analysis.py"));
        assert!(text.contains("Input | enrolment_monthly.csv"));
        assert!(text.contains("Z-score (threshold: Z > 2.5)"));
        assert!(text.contains("MAPE: 66.6% (baseline)"));
        assert!(text.contains("Raw Data (enrolment.csv - 3,967 records)"));
    }
}
