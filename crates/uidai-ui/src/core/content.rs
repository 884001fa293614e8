//! Document model produced by the dashboard views.
//!
//! # Design
//! - Views build plain data; the wasm components own all markup and classes.
//! - Every string is `'static` or formatted once from [`crate::core::stats`].
//! - [`Page::text`] flattens visible text so fixtures can be checked natively.

use std::borrow::Cow;

use crate::core::assets::ChartAsset;
use crate::core::view::ViewId;

/// Text carried by the content model.
pub type Text = Cow<'static, str>;

/// Colour family for alerts and tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    /// Plain panel.
    #[default]
    Neutral,
    /// Blue, informational.
    Info,
    /// Green, positive.
    Success,
    /// Amber, caution.
    Warning,
    /// Red, critical.
    Danger,
}

impl Tone {
    /// Class suffix for the tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A run of text with an optional bold lead-in (`Label: text`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Bold lead-in, rendered before the text.
    pub label: Option<Text>,
    /// Body text.
    pub text: Text,
}

impl Line {
    /// Line without a lead-in.
    #[must_use]
    pub fn plain(text: impl Into<Text>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    /// Line with a bold lead-in.
    #[must_use]
    pub fn labelled(label: impl Into<Text>, text: impl Into<Text>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// Headline metric card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kpi {
    /// Metric name.
    pub label: Text,
    /// Displayed value.
    pub value: Text,
    /// Caption under the value.
    pub caption: Text,
}

/// Call-to-action button in a hero banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroAction {
    /// Button label.
    pub label: Text,
    /// View opened by the button, if any.
    pub target: Option<ViewId>,
    /// Primary (filled) or secondary styling.
    pub primary: bool,
}

/// Banner shown above a page header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    /// Banner heading.
    pub title: Text,
    /// One-line description.
    pub tagline: Text,
    /// Buttons, in display order.
    pub actions: Vec<HeroAction>,
}

/// Literal statistics table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    /// Column headings; empty for key/value tables.
    pub headers: Vec<Text>,
    /// Cell text, row by row.
    pub rows: Vec<Vec<Text>>,
    /// Render the first cell of each row in bold.
    pub emphasize_first: bool,
}

/// Reference to an externally produced chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Figure {
    /// Chart file.
    pub asset: ChartAsset,
    /// Image alt text.
    pub alt: Text,
    /// Caption heading.
    pub title: Text,
    /// What the chart shows.
    pub finding: Text,
}

/// One stage of the external data pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineStep {
    /// 1-based position.
    pub number: u8,
    /// Stage name.
    pub title: Text,
    /// Script implementing the stage.
    pub script: Text,
    /// Input artifact.
    pub input: Text,
    /// Output artifact.
    pub output: Text,
    /// What the stage does.
    pub description: Text,
    /// Size of the stage's output.
    pub records: Text,
}

/// Titled panel inside a tile group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Panel heading.
    pub title: Text,
    /// Accent colour.
    pub tone: Tone,
    /// Panel body.
    pub blocks: Vec<Block>,
}

impl Tile {
    /// Panel with the given accent.
    #[must_use]
    pub fn new(title: impl Into<Text>, tone: Tone, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            tone,
            blocks,
        }
    }
}

/// How a tile group is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileLayout {
    /// Responsive grid of equal-width tiles.
    Grid,
    /// Full-width panels stacked vertically.
    Stacked,
}

/// One colour band of a heatmap legend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendBand {
    /// Colour name.
    pub label: Text,
    /// Value range the colour covers.
    pub range: Text,
    /// CSS background colour.
    pub swatch: &'static str,
    /// CSS text colour readable on the swatch.
    pub ink: &'static str,
}

/// Risk column of the classification matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    /// Stable.
    Low,
    /// Somewhat volatile.
    Medium,
    /// Volatile.
    High,
}

impl RiskLevel {
    /// Traffic-light badge for the level.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Low => "Green ✅",
            Self::Medium => "Yellow ⚠️",
            Self::High => "Red 🔴",
        }
    }

    /// Class suffix for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One cell of the risk matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskCell {
    /// Risk column.
    pub level: RiskLevel,
    /// Short description of areas in the cell.
    pub summary: Text,
    /// Recommended action.
    pub action: Text,
}

/// One demand row of the risk matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskRow {
    /// Demand level heading.
    pub demand: Text,
    /// Low, medium and high risk cells.
    pub cells: [RiskCell; 3],
}

/// Demand × risk classification grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskMatrix {
    /// Top-left heading.
    pub corner: Text,
    /// Risk column headings.
    pub columns: [Text; 3],
    /// Demand rows, low to high.
    pub rows: Vec<RiskRow>,
}

/// A unit of page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Coloured banner with a bold heading.
    Alert {
        /// Colour.
        tone: Tone,
        /// Bold lead-in.
        heading: Text,
        /// Message.
        body: Text,
    },
    /// Row of KPI cards.
    Kpis(Vec<Kpi>),
    /// Titled card wrapping nested blocks.
    Card {
        /// Card heading.
        title: Text,
        /// Card body.
        blocks: Vec<Block>,
    },
    /// Sub-heading inside a card.
    Heading(Text),
    /// Paragraph with an optional bold lead-in.
    Paragraph(Line),
    /// Lines separated by line breaks within one paragraph.
    Lines(Vec<Line>),
    /// Highlighted one-line takeaway.
    Emphasis(Text),
    /// Bulleted or numbered list.
    List {
        /// Numbered when `true`.
        ordered: bool,
        /// List items.
        items: Vec<Line>,
    },
    /// Monospace lines (formulas, flow diagrams).
    Code(Vec<Text>),
    /// Statistics table.
    Table(Table),
    /// Chart grid.
    Figures(Vec<Figure>),
    /// Pipeline step cards.
    Steps(Vec<PipelineStep>),
    /// Group of titled panels.
    Tiles {
        /// Grid or stacked.
        layout: TileLayout,
        /// Panels.
        tiles: Vec<Tile>,
    },
    /// Heatmap colour legend.
    Legend(Vec<LegendBand>),
    /// Demand × risk grid.
    RiskMatrix(RiskMatrix),
}

impl Block {
    /// Alert banner.
    #[must_use]
    pub fn alert(tone: Tone, heading: impl Into<Text>, body: impl Into<Text>) -> Self {
        Self::Alert {
            tone,
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// Titled card.
    #[must_use]
    pub fn card(title: impl Into<Text>, blocks: Vec<Self>) -> Self {
        Self::Card {
            title: title.into(),
            blocks,
        }
    }

    /// Sub-heading.
    #[must_use]
    pub fn heading(text: impl Into<Text>) -> Self {
        Self::Heading(text.into())
    }

    /// Plain paragraph.
    #[must_use]
    pub fn paragraph(text: impl Into<Text>) -> Self {
        Self::Paragraph(Line::plain(text))
    }

    /// Paragraph starting with a bold label.
    #[must_use]
    pub fn labelled(label: impl Into<Text>, text: impl Into<Text>) -> Self {
        Self::Paragraph(Line::labelled(label, text))
    }

    /// Highlighted takeaway.
    #[must_use]
    pub fn emphasis(text: impl Into<Text>) -> Self {
        Self::Emphasis(text.into())
    }

    /// Bulleted list.
    #[must_use]
    pub const fn bullets(items: Vec<Line>) -> Self {
        Self::List {
            ordered: false,
            items,
        }
    }

    /// Numbered list.
    #[must_use]
    pub const fn numbered(items: Vec<Line>) -> Self {
        Self::List {
            ordered: true,
            items,
        }
    }

    /// Table with headings and a bold first column.
    #[must_use]
    pub fn table(headers: &[&'static str], rows: Vec<Vec<Text>>) -> Self {
        Self::Table(Table {
            headers: headers.iter().copied().map(Text::Borrowed).collect(),
            rows,
            emphasize_first: true,
        })
    }

    /// Headerless key/value table.
    #[must_use]
    pub fn facts(rows: Vec<Vec<Text>>) -> Self {
        Self::Table(Table {
            headers: Vec::new(),
            rows,
            emphasize_first: true,
        })
    }

    /// Grid of tiles.
    #[must_use]
    pub const fn grid(tiles: Vec<Tile>) -> Self {
        Self::Tiles {
            layout: TileLayout::Grid,
            tiles,
        }
    }

    /// Stack of full-width panels.
    #[must_use]
    pub const fn stacked(tiles: Vec<Tile>) -> Self {
        Self::Tiles {
            layout: TileLayout::Stacked,
            tiles,
        }
    }

    fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a Self)) {
        visitor(self);
        match self {
            Self::Card { blocks, .. } => {
                for block in blocks {
                    block.visit(visitor);
                }
            }
            Self::Tiles { tiles, .. } => {
                for block in tiles.iter().flat_map(|tile| &tile.blocks) {
                    block.visit(visitor);
                }
            }
            _ => {}
        }
    }

    fn push_text(&self, out: &mut Vec<String>) {
        match self {
            Self::Alert { heading, body, .. } => out.push(format!("{heading} {body}")),
            Self::Kpis(kpis) => {
                for kpi in kpis {
                    out.extend([kpi.label.to_string(), kpi.value.to_string()]);
                    out.push(kpi.caption.to_string());
                }
            }
            Self::Card { title, .. } => out.push(title.to_string()),
            Self::Heading(text) | Self::Emphasis(text) => out.push(text.to_string()),
            Self::Paragraph(line) => out.push(line_text(line)),
            Self::Lines(lines) | Self::List { items: lines, .. } => {
                out.extend(lines.iter().map(line_text));
            }
            Self::Code(lines) => out.extend(lines.iter().map(ToString::to_string)),
            Self::Table(table) => {
                out.push(join(&table.headers, " | "));
                out.extend(table.rows.iter().map(|row| join(row, " | ")));
            }
            Self::Figures(figures) => {
                for figure in figures {
                    out.push(figure.asset.file_name().to_string());
                    out.extend([figure.alt.to_string(), figure.title.to_string()]);
                    out.push(figure.finding.to_string());
                }
            }
            Self::Steps(steps) => {
                for step in steps {
                    out.push(format!("{} {}", step.number, step.title));
                    out.extend([step.script.to_string(), step.description.to_string()]);
                    out.push(step.records.to_string());
                }
            }
            Self::Tiles { tiles, .. } => {
                out.extend(tiles.iter().map(|tile| tile.title.to_string()));
            }
            Self::Legend(bands) => {
                out.extend(bands.iter().map(|band| format!("{} {}", band.label, band.range)));
            }
            Self::RiskMatrix(matrix) => {
                out.push(format!("{} | {}", matrix.corner, join(&matrix.columns, " | ")));
                for row in &matrix.rows {
                    out.push(row.demand.to_string());
                    for cell in &row.cells {
                        out.push(format!(
                            "{} {} {}",
                            cell.level.badge(),
                            cell.summary,
                            cell.action
                        ));
                    }
                }
            }
        }
    }
}

fn line_text(line: &Line) -> String {
    match &line.label {
        Some(label) => format!("{label} {}", line.text),
        None => line.text.to_string(),
    }
}

fn join(cells: &[Text], separator: &str) -> String {
    cells
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Fully composed content of one view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// View the page belongs to.
    pub id: ViewId,
    /// Page heading.
    pub title: Text,
    /// Line under the heading.
    pub subtitle: Text,
    /// Optional banner above the heading.
    pub hero: Option<Hero>,
    /// Body, top to bottom.
    pub blocks: Vec<Block>,
}

impl Page {
    /// Call `visitor` for every block, depth first, including nested ones.
    pub fn visit<'a>(&'a self, mut visitor: impl FnMut(&'a Block)) {
        for block in &self.blocks {
            block.visit(&mut visitor);
        }
    }

    /// Every chart the page references, in document order.
    #[must_use]
    pub fn figures(&self) -> Vec<&Figure> {
        let mut figures = Vec::new();
        self.visit(|block| {
            if let Block::Figures(items) = block {
                figures.extend(items);
            }
        });
        figures
    }

    /// Pipeline steps shown on the page, in document order.
    #[must_use]
    pub fn steps(&self) -> Vec<&PipelineStep> {
        let mut steps = Vec::new();
        self.visit(|block| {
            if let Block::Steps(items) = block {
                steps.extend(items);
            }
        });
        steps
    }

    /// All visible text, one block fragment per line.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = Vec::new();
        if let Some(hero) = &self.hero {
            out.extend([hero.title.to_string(), hero.tagline.to_string()]);
            out.extend(hero.actions.iter().map(|action| action.label.to_string()));
        }
        out.extend([self.title.to_string(), self.subtitle.to_string()]);
        self.visit(|block| block.push_text(&mut out));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Page {
        Page {
            id: ViewId::Trends,
            title: "Title".into(),
            subtitle: "Subtitle".into(),
            hero: None,
            blocks: vec![
                Block::alert(Tone::Info, "Heads up:", "body"),
                Block::card(
                    "Card",
                    vec![
                        Block::labelled("Finding:", "nested"),
                        Block::grid(vec![Tile {
                            title: "Tile".into(),
                            tone: Tone::Success,
                            blocks: vec![Block::Figures(vec![Figure {
                                asset: ChartAsset::TimeTrend,
                                alt: "Alt".into(),
                                title: "Chart".into(),
                                finding: "Rising".into(),
                            }])],
                        }]),
                    ],
                ),
            ],
        }
    }

    #[test]
    fn text_includes_nested_blocks() {
        let text = sample().text();
        assert!(text.contains("Heads up: body"));
        assert!(text.contains("Finding: nested"));
        assert!(text.contains("Tile"));
        assert!(text.contains("01_univariate_time_trend.png"));
    }

    #[test]
    fn figures_are_found_inside_tiles() {
        let page = sample();
        let figures = page.figures();
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].asset, ChartAsset::TimeTrend);
        assert!(page.steps().is_empty());
    }

    #[test]
    fn table_helper_emphasizes_first_column() {
        let Block::Table(table) = Block::table(&["A", "B"], vec![vec!["1".into(), "2".into()]])
        else {
            panic!("expected table block");
        };
        assert!(table.emphasize_first);
        assert_eq!(table.headers.len(), 2);
        let Block::Table(facts) = Block::facts(Vec::new()) else {
            panic!("expected table block");
        };
        assert!(facts.headers.is_empty());
    }
}
