//! Bar Chart Component
//!
//! Inline SVG rendering of the pipeline's chart projection. The chart only
//! consumes the `ChartData` handed to it; it never reaches back into the
//! record collections.

use leptos::prelude::*;

use crate::pipeline::ChartData;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 220.0;
const BAR_GAP: f64 = 8.0;
const CAPTION_HEIGHT: f64 = 18.0;
const LABEL_CHARS: usize = 14;

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

/// Bar chart fed by `project_for_chart`; labels and values are index-aligned
#[component]
pub fn BarChart(#[prop(into)] data: Signal<ChartData>) -> impl IntoView {
    let bars = move || {
        let d = data.get();
        let max = d.values.iter().copied().max().unwrap_or(0).max(1) as f64;
        let slot = CHART_WIDTH / d.values.len().max(1) as f64;
        let bar_w = (slot - BAR_GAP).max(2.0);
        let plot_h = CHART_HEIGHT - 2.0 * CAPTION_HEIGHT;

        d.values
            .iter()
            .zip(&d.labels)
            .enumerate()
            .map(|(i, (&value, label))| {
                let h = value as f64 / max * plot_h;
                let x = i as f64 * slot + BAR_GAP / 2.0;
                let y = CAPTION_HEIGHT + (plot_h - h);
                let mid = x + bar_w / 2.0;
                let value_y = y - 4.0;
                let label_y = CHART_HEIGHT - 4.0;
                let caption = truncate_label(label, LABEL_CHARS);

                view! {
                    <g>
                        <rect class="chart-bar" x=x y=y width=bar_w height=h />
                        <text class="chart-value" x=mid y=value_y>
                            {value}
                        </text>
                        <text class="chart-label" x=mid y=label_y>
                            {caption}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="bar-chart">
            <p class="chart-title">"Vote Results"</p>
            <svg viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")>{bars}</svg>
        </div>
    }
}
