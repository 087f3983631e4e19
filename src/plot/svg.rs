// svg.rs - Minimal SVG line chart for mean signal curves

use std::fmt::Write;

/// Line colours, one per series
const COLORS: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;

/// One curve to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl PlotSeries {
    pub fn new(label: &str, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.to_string(),
            points,
        }
    }
}

/// Chart layout and labels
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 540,
            title: None,
            x_label: "position".to_string(),
            y_label: "signal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn of(series: &[PlotSeries]) -> Self {
        let mut bounds = Bounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for &(x, y) in series.iter().flat_map(|s| s.points.iter()) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            bounds.x_min = bounds.x_min.min(x);
            bounds.x_max = bounds.x_max.max(x);
            bounds.y_min = bounds.y_min.min(y);
            bounds.y_max = bounds.y_max.max(y);
        }

        if !bounds.x_min.is_finite() {
            return Bounds { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if bounds.x_max == bounds.x_min {
            bounds.x_min -= 0.5;
            bounds.x_max += 0.5;
        }
        // Pad flat curves so they sit mid-chart
        let pad = if bounds.y_max == bounds.y_min {
            bounds.y_max.abs().max(1.0) * 0.5
        } else {
            (bounds.y_max - bounds.y_min) * 0.05
        };
        bounds.y_min -= pad;
        bounds.y_max += pad;
        bounds
    }
}

/// Escape text for inclusion in SVG markup
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn tick_label(value: f64) -> String {
    if value.abs() >= 100.0 || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Render the series as a standalone SVG document
pub fn render_svg(series: &[PlotSeries], options: &PlotOptions) -> String {
    let width = options.width as f64;
    let height = options.height as f64;
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let bounds = Bounds::of(series);

    let sx = |x: f64| MARGIN_LEFT + (x - bounds.x_min) / (bounds.x_max - bounds.x_min) * plot_w;
    let sy = |y: f64| MARGIN_TOP + (bounds.y_max - y) / (bounds.y_max - bounds.y_min) * plot_h;

    // Writing into a String never fails
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
        w = options.width,
        h = options.height
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    if let Some(title) = &options.title {
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
            width / 2.0,
            MARGIN_TOP / 2.0 + 6.0,
            escape(title)
        );
    }

    // Axes
    let _ = writeln!(
        svg,
        r#"<g class="axes" stroke="black" stroke-width="1"><line x1="{x0:.1}" y1="{y1:.1}" x2="{x1:.1}" y2="{y1:.1}"/><line x1="{x0:.1}" y1="{y0:.1}" x2="{x0:.1}" y2="{y1:.1}"/></g>"#,
        x0 = MARGIN_LEFT,
        x1 = MARGIN_LEFT + plot_w,
        y0 = MARGIN_TOP,
        y1 = MARGIN_TOP + plot_h
    );

    // Ticks
    for i in 0..TICKS {
        let frac = i as f64 / (TICKS - 1) as f64;
        let xv = bounds.x_min + frac * (bounds.x_max - bounds.x_min);
        let yv = bounds.y_min + frac * (bounds.y_max - bounds.y_min);
        let (px, py) = (sx(xv), sy(yv));
        let base = MARGIN_TOP + plot_h;
        let _ = writeln!(
            svg,
            r#"<line class="tick" x1="{px:.1}" y1="{base:.1}" x2="{px:.1}" y2="{:.1}" stroke="black"/><text x="{px:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            base + 5.0,
            base + 20.0,
            tick_label(xv)
        );
        let _ = writeln!(
            svg,
            r#"<line class="tick" x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}" stroke="black"/><text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 5.0,
            MARGIN_LEFT,
            MARGIN_LEFT - 8.0,
            py + 4.0,
            tick_label(yv)
        );
    }

    // Axis labels
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        height - 15.0,
        escape(&options.x_label)
    );
    let _ = writeln!(
        svg,
        r#"<text x="15" y="{y:.1}" text-anchor="middle" transform="rotate(-90 15 {y:.1})">{}</text>"#,
        escape(&options.y_label),
        y = MARGIN_TOP + plot_h / 2.0
    );

    // Curves
    for (idx, s) in series.iter().enumerate() {
        let color = COLORS[idx % COLORS.len()];
        let coords: Vec<String> = s
            .points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| format!("{:.2},{:.2}", sx(x), sy(y)))
            .collect();
        let _ = writeln!(
            svg,
            r#"<polyline fill="none" stroke="{}" stroke-width="1.5" points="{}"/>"#,
            color,
            coords.join(" ")
        );
    }

    // Legend
    let legend_x = MARGIN_LEFT + plot_w - 10.0;
    for (idx, s) in series.iter().enumerate() {
        let color = COLORS[idx % COLORS.len()];
        let y = MARGIN_TOP + 15.0 + idx as f64 * 18.0;
        let _ = writeln!(
            svg,
            r#"<g class="legend"><line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"/><text x="{:.1}" y="{:.1}" text-anchor="end">{}</text></g>"#,
            legend_x - 20.0,
            legend_x,
            legend_x - 25.0,
            y + 4.0,
            escape(&s.label)
        );
    }

    svg.push_str("</svg>\n");
    svg
}
