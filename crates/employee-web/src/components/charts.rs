//! SVG charts for the analytics page
//!
//! Layout math lives in [`employee_core::analytics`]; these components only
//! turn the computed shapes into SVG elements.

use employee_core::analytics::{
    Datum, EmploymentShare, PlotArea, SERIES_COLOR, ValueScale, bar_layout, line_layout,
    pie_slices, polyline,
};
use leptos::prelude::*;

/// Ticks requested on every value axis
const TICK_COUNT: usize = 5;

/// Outer radius of the pie
const PIE_RADIUS: f64 = 80.0;

/// Coordinate formatted for an SVG attribute
fn num(value: f64) -> String {
    format!("{value:.1}")
}

/// Horizontal grid lines with value labels on the left axis
#[component]
fn ValueGrid(area: PlotArea, scale: ValueScale) -> impl IntoView {
    let x1 = num(area.left);
    let x2 = num(area.width - area.right);
    let label_x = num(area.left - 8.0);

    view! {
        <g class="grid">
            {scale
                .ticks()
                .into_iter()
                .map(|tick| {
                    let y = area.y_for(&scale, tick);
                    view! {
                        <line
                            x1=x1.clone()
                            x2=x2.clone()
                            y1=num(y)
                            y2=num(y)
                            stroke-dasharray="3 3"
                        />
                        <text class="axis-label" x=label_x.clone() y=num(y + 4.0) text-anchor="end">
                            {format!("{tick:.0}")}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}

/// Vertical bar chart, one bar per datum
#[component]
pub fn BarChart(
    /// Categories in display order
    data: Vec<Datum>,
    /// Accessible description
    label: &'static str,
) -> impl IntoView {
    let area = PlotArea::default();
    let scale = ValueScale::covering(data.iter().map(|d| d.value), TICK_COUNT);
    let bars = bar_layout(&data, &area, &scale);
    let label_y = num(area.baseline() + 18.0);

    view! {
        <svg class="chart" viewBox=area.view_box() role="img" aria-label=label>
            <ValueGrid area scale />
            {bars
                .into_iter()
                .map(|bar| {
                    view! {
                        <g class="bar">
                            <rect
                                x=num(bar.x)
                                y=num(bar.y)
                                width=num(bar.width)
                                height=num(bar.height)
                                fill=SERIES_COLOR
                            />
                            <text class="value-label" x=num(bar.center_x()) y=num(bar.y - 6.0) text-anchor="middle">
                                {bar.value}
                            </text>
                            <text class="axis-label" x=num(bar.center_x()) y=label_y.clone() text-anchor="middle">
                                {bar.label}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Line chart through the data in order
#[component]
pub fn LineChart(
    /// Points in display order
    data: Vec<Datum>,
    /// Accessible description
    label: &'static str,
) -> impl IntoView {
    let area = PlotArea {
        width: 1000.0,
        ..PlotArea::default()
    };
    let scale = ValueScale::covering(data.iter().map(|d| d.value), TICK_COUNT);
    let points = line_layout(&data, &area, &scale);
    let path = polyline(&points);
    let label_y = num(area.baseline() + 18.0);

    view! {
        <svg class="chart" viewBox=area.view_box() role="img" aria-label=label>
            <ValueGrid area scale />
            <polyline points=path fill="none" stroke=SERIES_COLOR stroke-width="2" />
            {points
                .into_iter()
                .map(|point| {
                    view! {
                        <g class="point">
                            <circle cx=num(point.x) cy=num(point.y) r="4" fill=SERIES_COLOR />
                            <text class="axis-label" x=num(point.x) y=label_y.clone() text-anchor="middle">
                                {point.label}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Pie chart with percentage labels outside each slice
#[component]
pub fn PieChart(
    /// Slices in drawing order
    data: &'static [EmploymentShare],
    /// Accessible description
    label: &'static str,
) -> impl IntoView {
    let area = PlotArea::default();
    let (cx, cy) = (area.width / 2.0, area.height / 2.0);

    view! {
        <svg class="chart" viewBox=area.view_box() role="img" aria-label=label>
            {pie_slices(data)
                .into_iter()
                .map(|slice| {
                    let (lx, ly) = slice.label_anchor(cx, cy, PIE_RADIUS, 24.0);
                    let anchor = if lx >= cx { "start" } else { "end" };
                    view! {
                        <g class="slice">
                            <path d=slice.path(cx, cy, PIE_RADIUS) fill=slice.color stroke="#fff" />
                            <text class="slice-label" x=num(lx) y=num(ly) text-anchor=anchor fill=slice.color>
                                {slice.percent_label()}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}
