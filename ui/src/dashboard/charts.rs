//! SVG chart cards. Geometry is computed by plain functions so the scaling
//! math stays testable without a renderer.

use dioxus::prelude::*;

use crate::core::format;
use crate::data::aggregate::HistogramBin;

const BAR_CHART_WIDTH: f64 = 640.0;
const BAR_LABEL_SPAN: f64 = 190.0;
const BAR_VALUE_SPAN: f64 = 90.0;
const BAR_SPAN: f64 = BAR_CHART_WIDTH - BAR_LABEL_SPAN - BAR_VALUE_SPAN;
const BAR_ROW_HEIGHT: f64 = 30.0;
const BAR_HEIGHT: f64 = 20.0;
const BAR_LABEL_CHARS: usize = 26;

const HIST_WIDTH: f64 = 640.0;
const HIST_HEIGHT: f64 = 300.0;
const HIST_PLOT_TOP: f64 = 16.0;
const HIST_PLOT_BOTTOM: f64 = 260.0;
const HIST_PLOT_LEFT: f64 = 10.0;
const HIST_PLOT_RIGHT: f64 = 630.0;

const DONUT_RADIUS: f64 = 60.0;
const DONUT_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * DONUT_RADIUS;

const PALETTE: [&str; 6] = [
    "#5b8def", "#f2a65a", "#67c587", "#e36a6a", "#9b7ede", "#58b7c9",
];

/// Mean salary of the ten best-paid job titles, ranked bars.
#[component]
pub fn TopTitlesChart(entries: Vec<(String, f64)>) -> Element {
    rsx! {
        div { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h3 { "Top 10 job titles by mean salary" }
            }
            if entries.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                {ranked_bar_svg(&entries)}
            }
        }
    }
}

/// Mean Data-Scientist salary per residence country. Bars replace the
/// upstream choropleth; the aggregation underneath is the same.
#[component]
pub fn CountryChart(entries: Vec<(String, f64)>) -> Element {
    rsx! {
        div { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h3 { "Mean Data Scientist salary by country" }
            }
            if entries.is_empty() {
                p { class: "dashboard-card__warning",
                    "No Data Scientist rows in the current filter."
                }
            } else {
                {ranked_bar_svg(&entries)}
            }
        }
    }
}

#[component]
pub fn SalaryHistogram(bins: Vec<HistogramBin>) -> Element {
    let populated = bins.iter().any(|bin| bin.count > 0);

    rsx! {
        div { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h3 { "Salary distribution" }
            }
            if !populated {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                {histogram_svg(&bins)}
            }
        }
    }
}

#[component]
pub fn RemoteShareChart(breakdown: Vec<(String, usize)>) -> Element {
    let total: usize = breakdown.iter().map(|(_, count)| count).sum();

    rsx! {
        div { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h3 { "Remote-work share" }
            }
            if breakdown.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                {donut_svg(&breakdown, total)}
            }
        }
    }
}

fn ranked_bar_svg(entries: &[(String, f64)]) -> Element {
    let rows = bar_rows(entries);
    let height = entries.len() as f64 * BAR_ROW_HEIGHT + 10.0;
    let label_x = BAR_LABEL_SPAN - 8.0;

    rsx! {
        svg { class: "chart", view_box: "0 0 {BAR_CHART_WIDTH} {height}",
            for row in rows.into_iter() {
                rect {
                    class: "chart__bar",
                    x: "{BAR_LABEL_SPAN}",
                    y: "{row.y}",
                    width: "{row.width}",
                    height: "{BAR_HEIGHT}",
                    rx: "4",
                }
                text {
                    class: "chart__label",
                    x: "{label_x}",
                    y: "{row.text_y}",
                    text_anchor: "end",
                    "{row.label}"
                }
                text {
                    class: "chart__value",
                    x: "{row.value_x}",
                    y: "{row.text_y}",
                    "{row.value_label}"
                }
            }
        }
    }
}

fn histogram_svg(bins: &[HistogramBin]) -> Element {
    let bars = histogram_bars(bins);
    let low_label = bins
        .first()
        .map(|bin| format::format_usd_compact(bin.lower))
        .unwrap_or_default();
    let high_label = bins
        .last()
        .map(|bin| format::format_usd_compact(bin.upper))
        .unwrap_or_default();
    let peak = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    let tick_y = HIST_PLOT_BOTTOM + 24.0;
    let peak_y = HIST_PLOT_TOP - 2.0;

    rsx! {
        svg { class: "chart", view_box: "0 0 {HIST_WIDTH} {HIST_HEIGHT}",
            for bar in bars.into_iter() {
                rect {
                    class: "chart__bar",
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                }
            }
            line {
                class: "chart__axis",
                x1: "{HIST_PLOT_LEFT}",
                y1: "{HIST_PLOT_BOTTOM}",
                x2: "{HIST_PLOT_RIGHT}",
                y2: "{HIST_PLOT_BOTTOM}",
            }
            text { class: "chart__tick", x: "{HIST_PLOT_LEFT}", y: "{tick_y}", "{low_label}" }
            text {
                class: "chart__tick",
                x: "{HIST_PLOT_RIGHT}",
                y: "{tick_y}",
                text_anchor: "end",
                "{high_label}"
            }
            text { class: "chart__tick", x: "{HIST_PLOT_LEFT}", y: "{peak_y}", "peak {peak}" }
        }
    }
}

fn donut_svg(breakdown: &[(String, usize)], total: usize) -> Element {
    let segments = donut_segments(breakdown);
    let legend = segments.clone();

    rsx! {
        div { class: "chart-donut",
            svg { class: "chart chart-donut__svg", view_box: "0 0 200 200",
                for segment in segments.into_iter() {
                    circle {
                        class: "chart-donut__segment",
                        cx: "100",
                        cy: "100",
                        r: "{DONUT_RADIUS}",
                        fill: "none",
                        stroke: "{segment.color}",
                        stroke_width: "28",
                        stroke_dasharray: "{segment.dash_array}",
                        stroke_dashoffset: "{segment.dash_offset}",
                    }
                }
                text {
                    class: "chart-donut__total",
                    x: "100",
                    y: "96",
                    text_anchor: "middle",
                    "{format::format_count(total)}"
                }
                text {
                    class: "chart-donut__caption",
                    x: "100",
                    y: "116",
                    text_anchor: "middle",
                    "records"
                }
            }
            ul { class: "chart-donut__legend",
                for segment in legend.into_iter() {
                    li { class: "chart-donut__legend-item",
                        span {
                            class: "chart-donut__swatch",
                            style: "background: {segment.color}",
                        }
                        span { "{segment.label}" }
                        span { class: "chart-donut__share",
                            "{format::format_percent(segment.share)} ({format::format_count(segment.count)})"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarRow {
    label: String,
    value_label: String,
    y: f64,
    text_y: f64,
    width: f64,
    value_x: f64,
}

fn bar_rows(entries: &[(String, f64)]) -> Vec<BarRow> {
    let max = entries.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    entries
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let y = i as f64 * BAR_ROW_HEIGHT + 5.0;
            let width = if max > 0.0 { value / max * BAR_SPAN } else { 0.0 };
            BarRow {
                label: truncate_label(label),
                value_label: format::format_usd_compact(*value),
                y,
                text_y: y + BAR_HEIGHT - 5.0,
                width,
                value_x: BAR_LABEL_SPAN + width + 8.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct HistogramBar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn histogram_bars(bins: &[HistogramBin]) -> Vec<HistogramBar> {
    let peak = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    if peak == 0 {
        return Vec::new();
    }

    let span = HIST_PLOT_RIGHT - HIST_PLOT_LEFT;
    let slot = span / bins.len() as f64;
    let plot_height = HIST_PLOT_BOTTOM - HIST_PLOT_TOP;

    bins.iter()
        .enumerate()
        .map(|(i, bin)| {
            let height = bin.count as f64 / peak as f64 * plot_height;
            HistogramBar {
                x: HIST_PLOT_LEFT + i as f64 * slot + 1.0,
                y: HIST_PLOT_BOTTOM - height,
                width: (slot - 2.0).max(1.0),
                height,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct DonutSegment {
    label: String,
    count: usize,
    share: f64,
    color: &'static str,
    dash_array: String,
    dash_offset: String,
}

fn donut_segments(breakdown: &[(String, usize)]) -> Vec<DonutSegment> {
    let total: usize = breakdown.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0_f64;
    breakdown
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let share = *count as f64 / total as f64;
            let filled = share * DONUT_CIRCUMFERENCE;
            // Rotate each segment so the ring starts at 12 o'clock and
            // segments follow each other clockwise.
            let offset = DONUT_CIRCUMFERENCE * 0.25 - start * DONUT_CIRCUMFERENCE;
            start += share;

            DonutSegment {
                label: label.clone(),
                count: *count,
                share,
                color: PALETTE[i % PALETTE.len()],
                dash_array: format!("{filled:.3} {:.3}", DONUT_CIRCUMFERENCE - filled),
                dash_offset: format!("{offset:.3}"),
            }
        })
        .collect()
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= BAR_LABEL_CHARS {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(BAR_LABEL_CHARS - 1).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_rows_scale_to_the_maximum() {
        let entries = vec![
            ("A".to_string(), 200.0),
            ("B".to_string(), 100.0),
            ("C".to_string(), 0.0),
        ];
        let rows = bar_rows(&entries);
        assert_eq!(rows[0].width, BAR_SPAN);
        assert_eq!(rows[1].width, BAR_SPAN / 2.0);
        assert_eq!(rows[2].width, 0.0);
    }

    #[test]
    fn bar_rows_survive_an_all_zero_series() {
        let entries = vec![("A".to_string(), 0.0)];
        let rows = bar_rows(&entries);
        assert_eq!(rows[0].width, 0.0);
    }

    #[test]
    fn histogram_bars_fit_the_plot_area() {
        let bins = vec![
            HistogramBin { lower: 0.0, upper: 10.0, count: 4 },
            HistogramBin { lower: 10.0, upper: 20.0, count: 2 },
            HistogramBin { lower: 20.0, upper: 30.0, count: 0 },
        ];
        let bars = histogram_bars(&bins);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].y, HIST_PLOT_TOP);
        assert_eq!(bars[2].height, 0.0);
        assert!(bars.iter().all(|bar| bar.x >= HIST_PLOT_LEFT));
        assert!(bars
            .iter()
            .all(|bar| bar.x + bar.width <= HIST_PLOT_RIGHT + f64::EPSILON));
    }

    #[test]
    fn donut_segments_cover_the_whole_ring() {
        let breakdown = vec![
            ("remoto".to_string(), 6),
            ("presencial".to_string(), 3),
            ("hibrido".to_string(), 1),
        ];
        let segments = donut_segments(&breakdown);
        let total_share: f64 = segments.iter().map(|s| s.share).sum();
        assert!((total_share - 1.0).abs() < 1e-9);
        assert_eq!(segments[0].color, PALETTE[0]);
    }

    #[test]
    fn donut_of_nothing_is_empty() {
        assert!(donut_segments(&[]).is_empty());
    }

    #[test]
    fn long_labels_are_truncated_with_an_ellipsis() {
        let long = "Principal Machine Learning Research Engineer";
        let short = truncate_label(long);
        assert!(short.chars().count() <= BAR_LABEL_CHARS);
        assert!(short.ends_with('…'));
        assert_eq!(truncate_label("Data Scientist"), "Data Scientist");
    }
}
