//! Analytics datasets and the SVG geometry used to chart them
//!
//! The three datasets are fixed aggregates; they are not derived from the
//! employee records. Geometry is computed here so the view layer only has to
//! emit SVG elements.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Bar of the department distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentHeadcount {
    /// Department label
    pub name: &'static str,
    /// Headcount
    pub employees: u32,
    /// Growth, in percent
    pub growth: u32,
}

/// Slice of the employment type pie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmploymentShare {
    /// Employment type
    pub name: &'static str,
    /// Headcount
    pub value: u32,
    /// Fill colour
    pub color: &'static str,
}

/// Point of the growth trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthPoint {
    /// Month abbreviation
    pub month: &'static str,
    /// Headcount at month end
    pub employees: u32,
}

const DEPARTMENT_HEADCOUNTS: [DepartmentHeadcount; 5] = [
    DepartmentHeadcount { name: "Engineering", employees: 450, growth: 12 },
    DepartmentHeadcount { name: "Marketing", employees: 250, growth: 8 },
    DepartmentHeadcount { name: "Sales", employees: 200, growth: 15 },
    DepartmentHeadcount { name: "HR", employees: 100, growth: 5 },
    DepartmentHeadcount { name: "Finance", employees: 75, growth: 3 },
];

const EMPLOYMENT_TYPES: [EmploymentShare; 4] = [
    EmploymentShare { name: "Full-time", value: 850, color: "#3B82F6" },
    EmploymentShare { name: "Part-time", value: 200, color: "#10B981" },
    EmploymentShare { name: "Contract", value: 150, color: "#F59E0B" },
    EmploymentShare { name: "Intern", value: 50, color: "#EF4444" },
];

const GROWTH_TREND: [GrowthPoint; 6] = [
    GrowthPoint { month: "Jan", employees: 1000 },
    GrowthPoint { month: "Feb", employees: 1050 },
    GrowthPoint { month: "Mar", employees: 1120 },
    GrowthPoint { month: "Apr", employees: 1180 },
    GrowthPoint { month: "May", employees: 1200 },
    GrowthPoint { month: "Jun", employees: 1250 },
];

/// Department distribution dataset
#[must_use]
pub const fn department_headcounts() -> &'static [DepartmentHeadcount] {
    &DEPARTMENT_HEADCOUNTS
}

/// Employment type dataset
#[must_use]
pub const fn employment_types() -> &'static [EmploymentShare] {
    &EMPLOYMENT_TYPES
}

/// Growth trend dataset
#[must_use]
pub const fn growth_trend() -> &'static [GrowthPoint] {
    &GROWTH_TREND
}

/// Colour shared by the bar and line series
pub const SERIES_COLOR: &str = "#3B82F6";

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0]
        .into_iter()
        .find(|f| normalized <= *f)
        .unwrap_or(10.0);
    factor * magnitude
}

/// Linear value axis starting at zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueScale {
    /// Top of the axis
    pub max: f64,
    /// Distance between ticks
    pub step: f64,
}

impl ValueScale {
    /// Axis covering `values` with roughly `tick_count` ticks
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn covering(values: impl IntoIterator<Item = u32>, tick_count: usize) -> Self {
        let peak = values.into_iter().max().map_or(0.0, f64::from);
        let intervals = tick_count.saturating_sub(1).max(1) as f64;
        let step = nice_step(peak / intervals);
        let max = ((peak / step).ceil() * step).max(step);
        Self { max, step }
    }

    /// Tick values from zero to `max` inclusive
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut tick = 0.0;
        while tick <= self.max + self.step / 2.0 {
            ticks.push(tick);
            tick += self.step;
        }
        ticks
    }

    /// Position of `value` on the axis, 0.0 at the bottom and 1.0 at the top
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (value / self.max).clamp(0.0, 1.0)
        }
    }
}

/// Drawing area inside an SVG view box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    /// View box width
    pub width: f64,
    /// View box height
    pub height: f64,
    /// Space for the value axis
    pub left: f64,
    /// Right padding
    pub right: f64,
    /// Top padding
    pub top: f64,
    /// Space for the category axis
    pub bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            left: 48.0,
            right: 16.0,
            top: 16.0,
            bottom: 32.0,
        }
    }
}

impl PlotArea {
    /// SVG `viewBox` attribute
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Width between the axes
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    /// Height between the axes
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Y of the baseline
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    /// Y coordinate of `value` on `scale`
    #[must_use]
    pub fn y_for(&self, scale: &ValueScale, value: f64) -> f64 {
        self.baseline() - scale.ratio(value) * self.inner_height()
    }
}

/// One labelled value of a category chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Datum {
    /// Category label
    pub label: &'static str,
    /// Value
    pub value: u32,
}

impl From<&DepartmentHeadcount> for Datum {
    fn from(row: &DepartmentHeadcount) -> Self {
        Self { label: row.name, value: row.employees }
    }
}

impl From<&GrowthPoint> for Datum {
    fn from(point: &GrowthPoint) -> Self {
        Self { label: point.month, value: point.employees }
    }
}

/// Rectangle of a bar chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Category label
    pub label: &'static str,
    /// Value drawn
    pub value: u32,
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Bar {
    /// Horizontal centre, where the category label goes
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Bar rectangles for `data`, one band per category
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(data: &[Datum], area: &PlotArea, scale: &ValueScale) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let band = area.inner_width() / data.len() as f64;
    let width = band * 0.7;

    data.iter()
        .enumerate()
        .map(|(i, datum)| {
            let y = area.y_for(scale, f64::from(datum.value));
            Bar {
                label: datum.label,
                value: datum.value,
                x: area.left + band * i as f64 + (band - width) / 2.0,
                y,
                width,
                height: area.baseline() - y,
            }
        })
        .collect()
}

/// Vertex of a line chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    /// Category label
    pub label: &'static str,
    /// Value drawn
    pub value: u32,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

/// Vertices for `data`, spread edge to edge across the plot
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn line_layout(data: &[Datum], area: &PlotArea, scale: &ValueScale) -> Vec<LinePoint> {
    let gaps = data.len().saturating_sub(1);
    data.iter()
        .enumerate()
        .map(|(i, datum)| {
            let x = if gaps == 0 {
                area.left + area.inner_width() / 2.0
            } else {
                area.left + area.inner_width() * i as f64 / gaps as f64
            };
            LinePoint {
                label: datum.label,
                value: datum.value,
                x,
                y: area.y_for(scale, f64::from(datum.value)),
            }
        })
        .collect()
}

/// SVG `points` attribute for a polyline through `points`
#[must_use]
pub fn polyline(points: &[LinePoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sector of a pie chart, angles in radians clockwise from twelve o'clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieSlice {
    /// Category label
    pub label: &'static str,
    /// Fill colour
    pub color: &'static str,
    /// Share of the total, 0.0 to 1.0
    pub fraction: f64,
    /// Start angle
    pub start: f64,
    /// End angle
    pub end: f64,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (r.mul_add(theta.cos(), cx), r.mul_add(theta.sin(), cy))
}

impl PieSlice {
    /// Label drawn next to the slice, e.g. `"Full-time 68%"`
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{} {:.0}%", self.label, (self.fraction * 100.0).round())
    }

    /// SVG path `d` attribute for the sector
    #[must_use]
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        let (x0, y0) = polar(cx, cy, r, self.start);
        if self.end - self.start >= TAU - 1e-9 {
            let (xm, ym) = polar(cx, cy, r, self.start + TAU / 2.0);
            return format!(
                "M {x0:.2} {y0:.2} A {r} {r} 0 1 1 {xm:.2} {ym:.2} A {r} {r} 0 1 1 {x0:.2} {y0:.2} Z"
            );
        }
        let (x1, y1) = polar(cx, cy, r, self.end);
        let large_arc = u8::from(self.end - self.start > TAU / 2.0);
        format!("M {cx} {cy} L {x0:.2} {y0:.2} A {r} {r} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
    }

    /// Anchor for the outside label, `offset` beyond the rim
    #[must_use]
    pub fn label_anchor(&self, cx: f64, cy: f64, r: f64, offset: f64) -> (f64, f64) {
        polar(cx, cy, r + offset, (self.start + self.end) / 2.0)
    }
}

/// Sectors for `data` in order; zero totals yield no slices
#[must_use]
pub fn pie_slices(data: &[EmploymentShare]) -> Vec<PieSlice> {
    let total: u32 = data.iter().map(|d| d.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let total = f64::from(total);

    let mut angle = 0.0;
    data.iter()
        .map(|share| {
            let fraction = f64::from(share.value) / total;
            let start = angle;
            angle += fraction * TAU;
            PieSlice {
                label: share.name,
                color: share.color,
                fraction,
                start,
                end: angle,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn headcount_data() -> Vec<Datum> {
        department_headcounts().iter().map(Datum::from).collect()
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(1.0, 1.0)]
    #[case(112.5, 200.0)]
    #[case(250.0, 250.0)]
    #[case(312.5, 500.0)]
    #[case(0.3, 0.5)]
    #[case(7.0, 10.0)]
    fn test_nice_step(#[case] raw: f64, #[case] expected: f64) {
        assert!((nice_step(raw) - expected).abs() < 1e-9, "{raw} -> {}", nice_step(raw));
    }

    #[test]
    fn test_scale_covers_peak() {
        let scale = ValueScale::covering(department_headcounts().iter().map(|d| d.employees), 5);
        assert_eq!(scale.step, 200.0);
        assert_eq!(scale.max, 600.0);
        assert_eq!(scale.ticks(), vec![0.0, 200.0, 400.0, 600.0]);

        let scale = ValueScale::covering(growth_trend().iter().map(|p| p.employees), 5);
        assert_eq!(scale.max, 1500.0);
    }

    #[test]
    fn test_scale_of_nothing() {
        let scale = ValueScale::covering(Vec::new(), 5);
        assert_eq!(scale.max, 1.0);
        assert_eq!(scale.ratio(0.0), 0.0);
    }

    #[test]
    fn test_bars_sit_on_baseline_in_order() {
        let area = PlotArea::default();
        let data = headcount_data();
        let scale = ValueScale::covering(data.iter().map(|d| d.value), 5);
        let bars = bar_layout(&data, &area, &scale);

        assert_eq!(bars.len(), 5);
        for bar in &bars {
            assert!((bar.y + bar.height - area.baseline()).abs() < 1e-9);
            assert!(bar.x >= area.left);
            assert!(bar.x + bar.width <= area.width - area.right + 1e-9);
        }
        for pair in bars.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert!(pair[0].height >= pair[1].height);
        }
        assert_eq!(bars[0].label, "Engineering");
        assert!((bars[0].height - area.inner_height() * 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_line_spans_the_plot() {
        let area = PlotArea::default();
        let data: Vec<Datum> = growth_trend().iter().map(Datum::from).collect();
        let scale = ValueScale::covering(data.iter().map(|d| d.value), 5);
        let points = line_layout(&data, &area, &scale);

        assert_eq!(points.first().unwrap().x, area.left);
        assert!((points.last().unwrap().x - (area.width - area.right)).abs() < 1e-9);
        for pair in points.windows(2) {
            assert!(pair[1].y <= pair[0].y, "headcount only grows");
        }
        assert_eq!(polyline(&points).split(' ').count(), 6);
    }

    #[test]
    fn test_single_point_line_is_centered() {
        let area = PlotArea::default();
        let data = [Datum { label: "Jan", value: 3 }];
        let scale = ValueScale::covering([3], 5);
        let points = line_layout(&data, &area, &scale);
        assert_eq!(points[0].x, area.left + area.inner_width() / 2.0);
    }

    #[test]
    fn test_pie_labels_and_coverage() {
        let slices = pie_slices(employment_types());

        let labels: Vec<_> = slices.iter().map(PieSlice::percent_label).collect();
        assert_eq!(
            labels,
            vec!["Full-time 68%", "Part-time 16%", "Contract 12%", "Intern 4%"]
        );

        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[3].end - TAU).abs() < 1e-9);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_pie_paths() {
        let slices = pie_slices(employment_types());
        // Full-time covers more than half the circle.
        assert!(slices[0].path(100.0, 100.0, 80.0).contains(" 0 1 1 "));
        assert!(slices[1].path(100.0, 100.0, 80.0).contains(" 0 0 1 "));

        let whole = pie_slices(&[EmploymentShare { name: "All", value: 1, color: "#000" }]);
        let d = whole[0].path(100.0, 100.0, 80.0);
        assert_eq!(d.matches(" A ").count(), 2);
    }

    #[test]
    fn test_pie_of_zero_total() {
        assert!(pie_slices(&[EmploymentShare { name: "None", value: 0, color: "#000" }]).is_empty());
    }

    #[test]
    fn test_first_slice_starts_at_twelve_o_clock() {
        let slices = pie_slices(employment_types());
        let (x, y) = polar(100.0, 100.0, 80.0, slices[0].start);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }
}
