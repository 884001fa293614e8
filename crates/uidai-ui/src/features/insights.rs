//! Insights view: key findings, recommendations and the rollout roadmap.

use crate::core::content::{Block, Line, Page, Tile, Tone};
use crate::core::stats::{
    self, ANOMALIES, HIGH_RISK_AREAS, LOWEST_MONTH_ENROLMENTS, PEAK_MONTH_ENROLMENTS,
    RECOMMENDATIONS,
};
use crate::core::view::ViewId;

struct Recommendation {
    icon: &'static str,
    title: &'static str,
    what: String,
    why: &'static str,
    timeline: &'static str,
    investment: &'static str,
    impact: &'static str,
    owner: &'static str,
}

impl Recommendation {
    fn into_tile(self, number: usize) -> Tile {
        Tile::new(
            format!("{} Recommendation {number}: {}", self.icon, self.title),
            Tone::Neutral,
            vec![
                Block::labelled("What:", self.what),
                Block::labelled("Why:", self.why),
                Block::facts(vec![
                    row!["Timeline", self.timeline],
                    row!["Investment", self.investment],
                    row!["Impact", self.impact],
                    row!["Owner", self.owner],
                ]),
            ],
        )
    }
}

/// Insights content.
#[must_use]
pub fn page() -> Page {
    Page {
        id: ViewId::Insights,
        title: "Key Insights & Recommendations".into(),
        subtitle: "Strategic findings and operational action items for decision makers".into(),
        hero: None,
        blocks: vec![
            Block::alert(
                Tone::Success,
                "✅ System Status:",
                "Analysis complete and validated. All recommendations are data-driven and \
                 actionable within 30-90 days. Implementation phased by priority and resource \
                 requirements.",
            ),
            Block::card("🎯 4 Key Findings", vec![Block::grid(findings())]),
            Block::card(
                format!("💼 {RECOMMENDATIONS} Operational Recommendations"),
                vec![Block::stacked(
                    recommendations()
                        .into_iter()
                        .zip(1..)
                        .map(|(rec, number)| rec.into_tile(number))
                        .collect(),
                )],
            ),
            Block::card("🎯 Implementation Roadmap (6-12 Months)", roadmap()),
            Block::card("📈 Expected Impact", vec![expected_impact()]),
            Block::alert(
                Tone::Success,
                "🚀 Bottom Line:",
                format!(
                    "This system enables UIDAI to move from reactive monitoring to proactive, \
                     data-driven decision-making. The {RECOMMENDATIONS} recommendations are \
                     sequential, interdependent, and achievable within 6-12 months. Together \
                     they unlock 30-50% additional capacity while reducing costs and improving \
                     reliability. Success depends on commitment to monthly data refresh and \
                     cross-team collaboration."
                ),
            ),
            Block::card("📞 Next Steps", vec![Block::grid(next_steps())]),
        ],
    }
}

fn finding(title: &'static str, tone: Tone, body: String, implication: &'static str) -> Tile {
    Tile::new(
        title,
        tone,
        vec![
            Block::paragraph(body),
            Block::emphasis(format!("💡 Implication: {implication}")),
        ],
    )
}

fn findings() -> Vec<Tile> {
    vec![
        finding(
            "1️⃣ Strong Seasonality",
            Tone::Info,
            format!(
                "Enrolment peaks sharply in September ({}) and drops to baseline in January \
                 ({LOWEST_MONTH_ENROLMENTS}). This 5x variation is repeatable and plannable. Not \
                 random. Clear administrative/promotional cycle.",
                stats::thousands(PEAK_MONTH_ENROLMENTS)
            ),
            "Predictable demand enables proactive resource planning.",
        ),
        finding(
            "2️⃣ Geographic Concentration",
            Tone::Warning,
            "90% of enrolments concentrated in ~20 high-performing pincodes. Creates both \
             opportunity (focus resources where impact is highest) and risk (dependent on few \
             locations). Remaining 70 pincodes significantly under-performing."
                .to_string(),
            "Expansion into lagging regions could unlock 30-50% additional capacity.",
        ),
        finding(
            "3️⃣ High Operational Volatility",
            Tone::Danger,
            format!(
                "Month-to-month growth ranges from −50% to +600%. While some volatility is \
                 normal, extremes suggest capacity constraints, staffing gaps, or process \
                 inefficiencies. {HIGH_RISK_AREAS} areas flagged as \"high-risk\" (volatile + \
                 high-demand)."
            ),
            "Stabilization can increase reliability and reduce emergency interventions.",
        ),
        finding(
            "4️⃣ Data Quality is Good",
            Tone::Success,
            format!(
                "Z-score analysis found 0 extreme outliers. Isolation Forest detected \
                 {ANOMALIES} anomalies (~5%, typical for government data). No obvious data \
                 entry errors. Dataset is clean and reliable for decision-making."
            ),
            "Insights can be trusted. Anomalies represent real operational issues, not data \
             problems.",
        ),
    ]
}

fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            icon: "📅",
            title: "Implement Seasonal Staffing Model",
            what: "Create a seasonal staffing plan that hires temporary staff in June-August for \
                   September peak, maintains reduced staffing Nov-Jan, and uses off-peak months \
                   for training and maintenance."
                .to_string(),
            why: "Current static staffing is inefficient. Seasonal model optimizes cost and \
                  service quality. 5x demand variation requires 3-4x staffing variation. Saves \
                  20-30% on annual labor costs.",
            timeline: "Plan (Jan-Feb) → Implement (Mar-May) → Execute (Jun-Sep)",
            investment: "Low (hiring plan) + Medium (training)",
            impact: "High (20-30% cost savings + better service)",
            owner: "HR + Operations Lead",
        },
        Recommendation {
            icon: "🗺️",
            title: "Geographic Expansion Strategy",
            what: "Study top-performing pincodes (20 high-performers). Document success factors \
                   (staffing, infrastructure, processes, awareness campaigns). Replicate to 20-30 \
                   underperforming pincodes across 3 phases."
                .to_string(),
            why: "70 pincodes currently underperform, leaving capacity on table. Success stories \
                  already exist—just need to scale. Conservative estimate: 30-50% \
                  additional enrolments possible within 12 months.",
            timeline: "Phase 1 (Feb-Mar: Study) → Phase 2 (Apr-Jul: Pilot) → Phase 3 (Aug-Dec: \
                       Scale)",
            investment: "Medium (staffing + infrastructure) - ROI: 200-300%",
            impact: "Very High (1000+ additional enrolments/month by Dec)",
            owner: "State/Regional Coordinators + Field Operations",
        },
        Recommendation {
            icon: "⚖️",
            title: "Stabilization Program for High-Risk Areas",
            what: format!(
                "Target {HIGH_RISK_AREAS} \"high-risk\" pincodes (high demand + high \
                 volatility). Conduct root cause analysis (staffing? infrastructure? process \
                 gaps?). Implement fixes (hiring, training, automation, process redesign)."
            ),
            why: "Volatility = unreliability = wasted capacity + frustrated users. Stabilization \
                  reduces emergency interventions and improves service quality. Even 20% \
                  reduction in volatility = significant operational improvement.",
            timeline: "Month 1: Analysis → Months 2-4: Interventions → Months 5-6: Validation",
            investment: "Medium (targeted hiring + process improvements)",
            impact: "High (reliability + 10-20% sustained growth)",
            owner: "Operations Lead + Quality Assurance",
        },
        Recommendation {
            icon: "📊",
            title: "Monthly Monitoring Dashboard",
            what: "Implement monthly data pipeline refresh. Update all 5 scripts with latest \
                   data. Generate updated visualizations and KPI dashboard. Share with operations \
                   teams for decision-making."
                .to_string(),
            why: "This system is only useful if kept current. Monthly refresh ensures insights \
                  reflect current reality. Detect emerging issues early before they become \
                  crises. Measure impact of recommendations implemented.",
            timeline: "Start immediately; execute on 15th of each month",
            investment: "Low (4-6 hours/month automation)",
            impact: "Very High (continuous improvement + agility)",
            owner: "Analytics / Data Team",
        },
    ]
}

fn roadmap() -> Vec<Block> {
    let phase = |heading: &'static str, items: [&'static str; 4]| {
        [
            Block::heading(heading),
            Block::bullets(
                items
                    .into_iter()
                    .map(|item| Line::plain(format!("✅ {item}")))
                    .collect(),
            ),
        ]
    };
    [
        phase(
            "Phase 1: Immediate (1-2 months)",
            [
                "Approve seasonal staffing model",
                "Identify 10 high-risk pincodes for root cause analysis",
                "Set up monthly monitoring process",
                "Brief operations teams on findings",
            ],
        ),
        phase(
            "Phase 2: Short-term (3-6 months)",
            [
                "Implement seasonal hiring for Jun-Sep 2026",
                "Launch stabilization program in 15-20 high-risk pincodes",
                "Identify success factors from top 10 performers",
                "Execute first geographic expansion pilot (3-5 pincodes)",
            ],
        ),
        phase(
            "Phase 3: Medium-term (6-12 months)",
            [
                "Roll out geographic expansion to 20-30 pincodes",
                "Evaluate stabilization program; scale successes",
                "Measure impact: cost savings, growth, reliability improvements",
                "Plan Phase 2 optimization based on learnings",
            ],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn expected_impact() -> Block {
    Block::table(
        &[
            "Metric",
            "Baseline (Current)",
            "Target (12 months)",
            "Recommendation(s)",
        ],
        vec![
            row![
                "Monthly Enrolments",
                "~500 (average)",
                "~600-700",
                "#2 Geographic Expansion"
            ],
            row![
                "Peak Capacity",
                format!("{} (Sep)", stats::thousands(PEAK_MONTH_ENROLMENTS)),
                "4,000+ (Sep)",
                "#1 Seasonal Staffing"
            ],
            row![
                "Volatility in Flagged Areas",
                "±50% month-to-month",
                "±20% month-to-month",
                "#3 Stabilization Program"
            ],
            row![
                "Underperforming Pincodes",
                "70 (14.6%)",
                "40 (8.4%)",
                "#2 Geographic Expansion"
            ],
            row![
                "Labor Cost Efficiency",
                "Baseline",
                "20-30% improvement",
                "#1 Seasonal Staffing"
            ],
        ],
    )
}

fn next_steps() -> Vec<Tile> {
    vec![
        Tile::new(
            "For Executives",
            Tone::Info,
            vec![Block::paragraph(
                "Review this page + Overview. Approve seasonal staffing model and geographic \
                 expansion pilot. Allocate budget for FY 2026-27. Sponsor cross-team \
                 coordination.",
            )],
        ),
        Tile::new(
            "For Operations",
            Tone::Warning,
            vec![Block::paragraph(
                "Review Hotspots + Forecast pages. Identify your top 5 high-risk pincodes. Start \
                 root cause analysis. Plan stabilization interventions.",
            )],
        ),
        Tile::new(
            "For Analytics",
            Tone::Danger,
            vec![Block::paragraph(
                "Review Pipeline page. Understand methodology. Set up monthly refresh process. \
                 Document new metrics as recommendations are implemented.",
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_count_matches_heading() {
        assert_eq!(u32::try_from(recommendations().len()), Ok(RECOMMENDATIONS));
        let text = page().text();
        assert!(text.contains("💼 4 Operational Recommendations"));
        assert!(text.contains("⚖️ Recommendation 3: Stabilization Program for High-Risk Areas"));
    }

    #[test]
    fn every_finding_carries_an_implication() {
        for tile in findings() {
            assert!(
                tile.blocks
                    .iter()
                    .any(|block| matches!(block, Block::Emphasis(text) if text.starts_with("💡 Implication:"))),
                "{} lacks an implication",
                tile.title
            );
        }
    }

    #[test]
    fn recommendation_tiles_list_ownership() {
        let tile = recommendations()
            .into_iter()
            .next()
            .map(|rec| rec.into_tile(1))
            .unwrap_or_else(|| panic!("at least one recommendation"));
        let Some(Block::Table(facts)) = tile.blocks.last() else {
            panic!("recommendation ends with a facts table");
        };
        let keys: Vec<&str> = facts.rows.iter().map(|row| row[0].as_ref()).collect();
        assert_eq!(keys, ["Timeline", "Investment", "Impact", "Owner"]);
    }

    #[test]
    fn roadmap_has_three_phases_of_four() {
        let roadmap = roadmap();
        let lists: Vec<usize> = roadmap
            .iter()
            .filter_map(|block| match block {
                Block::List { items, .. } => Some(items.len()),
                _ => None,
            })
            .collect();
        assert_eq!(lists, [4, 4, 4]);
    }
}
