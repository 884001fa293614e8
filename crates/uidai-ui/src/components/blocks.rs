//! Markup for the content model.
//!
//! Class names mirror the stylesheet in `static/app.css`; blocks carry no
//! styling of their own beyond a tone or layout modifier.

use crate::core::config::DashboardConfig;
use crate::core::content::{
    Block, Figure, Kpi, LegendBand, Line, PipelineStep, RiskMatrix, Table, Tile, TileLayout,
};
use yew::prelude::*;

pub(crate) fn render_block(block: &Block, config: &DashboardConfig) -> Html {
    match block {
        Block::Alert {
            tone,
            heading,
            body,
        } => html! {
            <div class={classes!("alert", format!("alert-{}", tone.as_str()))}>
                <strong>{heading}</strong>{" "}{body}
            </div>
        },
        Block::Kpis(kpis) => html! {
            <div class="kpi-grid">{for kpis.iter().map(kpi_card)}</div>
        },
        Block::Card { title, blocks } => html! {
            <div class="card">
                <h3>{title}</h3>
                {for blocks.iter().map(|inner| render_block(inner, config))}
            </div>
        },
        Block::Heading(text) => html! { <h4 class="section-heading">{text}</h4> },
        Block::Paragraph(line) => html! { <p class="body-text">{line_html(line)}</p> },
        Block::Lines(lines) => html! {
            <p class="body-text">
                {for lines.iter().enumerate().map(|(idx, line)| html! {
                    <>
                        if idx > 0 { <br /> }
                        {line_html(line)}
                    </>
                })}
            </p>
        },
        Block::Emphasis(text) => html! { <p class="emphasis">{text}</p> },
        Block::List { ordered, items } => {
            let items = items
                .iter()
                .map(|item| html! { <li>{line_html(item)}</li> });
            if *ordered {
                html! { <ol class="content-list">{for items}</ol> }
            } else {
                html! { <ul class="content-list">{for items}</ul> }
            }
        }
        Block::Code(lines) => html! {
            <pre class="code-block">
                {for lines.iter().map(|line| html! { <div>{line}</div> })}
            </pre>
        },
        Block::Table(table) => render_table(table),
        Block::Figures(figures) => html! {
            <div class="viz-grid">
                {for figures.iter().map(|figure| figure_card(figure, config))}
            </div>
        },
        Block::Steps(steps) => html! {
            <div class="pipeline-steps">{for steps.iter().map(step_card)}</div>
        },
        Block::Tiles { layout, tiles } => {
            let layout = match layout {
                TileLayout::Grid => "tile-grid",
                TileLayout::Stacked => "tile-stack",
            };
            html! {
                <div class={layout}>
                    {for tiles.iter().map(|tile| tile_panel(tile, config))}
                </div>
            }
        }
        Block::Legend(bands) => html! {
            <div class="legend-grid">{for bands.iter().map(legend_band)}</div>
        },
        Block::RiskMatrix(matrix) => render_risk_matrix(matrix),
    }
}

fn line_html(line: &Line) -> Html {
    match &line.label {
        Some(label) => html! { <><strong>{label}</strong>{" "}{&line.text}</> },
        None => html! { {&line.text} },
    }
}

fn kpi_card(kpi: &Kpi) -> Html {
    html! {
        <div class="kpi-card">
            <div class="kpi-label">{&kpi.label}</div>
            <div class="kpi-value">{&kpi.value}</div>
            <div class="kpi-label">{&kpi.caption}</div>
        </div>
    }
}

fn render_table(table: &Table) -> Html {
    let class = if table.headers.is_empty() {
        "facts-table"
    } else {
        "stats-table"
    };
    html! {
        <table {class}>
            if !table.headers.is_empty() {
                <thead>
                    <tr>{for table.headers.iter().map(|head| html! { <th>{head}</th> })}</tr>
                </thead>
            }
            <tbody>
                {for table.rows.iter().map(|row| html! {
                    <tr>
                        {for row.iter().enumerate().map(|(idx, cell)| {
                            if idx == 0 && table.emphasize_first {
                                html! { <td><strong>{cell}</strong></td> }
                            } else {
                                html! { <td>{cell}</td> }
                            }
                        })}
                    </tr>
                })}
            </tbody>
        </table>
    }
}

fn figure_card(figure: &Figure, config: &DashboardConfig) -> Html {
    html! {
        <div class="viz-card">
            <img
                src={config.asset_url(figure.asset)}
                alt={figure.alt.to_string()}
                loading="lazy"
            />
            <div class="viz-title">{&figure.title}</div>
            <div class="viz-description">
                <strong>{"Finding:"}</strong>{" "}{&figure.finding}
            </div>
        </div>
    }
}

fn step_card(step: &PipelineStep) -> Html {
    html! {
        <div class="step-card">
            <div class="step-number">{step.number}</div>
            <div class="step-title">{&step.title}</div>
            <div class="step-script"><code>{&step.script}</code></div>
            <div class="step-description">{&step.description}</div>
            <div class="step-records">{format!("📦 {}", step.records)}</div>
        </div>
    }
}

fn tile_panel(tile: &Tile, config: &DashboardConfig) -> Html {
    html! {
        <div class={classes!("tile", format!("tile-{}", tile.tone.as_str()))}>
            <h4>{&tile.title}</h4>
            {for tile.blocks.iter().map(|block| render_block(block, config))}
        </div>
    }
}

fn legend_band(band: &LegendBand) -> Html {
    let style = format!("background: {}; color: {};", band.swatch, band.ink);
    html! {
        <div class="legend-band" {style}>
            <strong>{&band.label}</strong>
            <br />
            {&band.range}
        </div>
    }
}

fn render_risk_matrix(matrix: &RiskMatrix) -> Html {
    html! {
        <div class="risk-matrix">
            <table class="risk-table">
                <thead>
                    <tr>
                        <th>{&matrix.corner}</th>
                        {for matrix.columns.iter().map(|column| html! { <th>{column}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for matrix.rows.iter().map(|row| html! {
                        <tr>
                            <td class="risk-demand">{&row.demand}</td>
                            {for row.cells.iter().map(|cell| html! {
                                <td class={format!("risk-{}", cell.level.as_str())}>
                                    <strong>{cell.level.badge()}</strong>
                                    <br />
                                    <small>{&cell.summary}</small>
                                    <br />
                                    <small class="risk-action">{&cell.action}</small>
                                </td>
                            })}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
