//! A minimal SVG line chart for daily closing prices.

#![allow(non_snake_case)]

use dioxus::prelude::*;

const WIDTH: f64 = 440.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 8.0;

const STROKE: &str = "#0fbcf9";

/// One plotted sample: unix seconds and the closing price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub timestamp: i64,
    pub close: f64,
}

/// Maps the samples into `x,y` pairs for an SVG polyline.
///
/// X follows the timestamps, Y is flipped so higher prices sit higher on
/// screen. Degenerate spans (one sample, or a flat series) collapse to the
/// middle of the drawing area instead of dividing by zero.
fn polyline_points(points: &[PricePoint], width: f64, height: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let min_ts = points.iter().map(|p| p.timestamp).min().unwrap_or_default();
    let max_ts = points.iter().map(|p| p.timestamp).max().unwrap_or_default();
    let min_price = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max_price = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);

    let x_span = (max_ts - min_ts) as f64;
    let y_span = max_price - min_price;

    points
        .iter()
        .map(|p| {
            let x = if x_span == 0.0 {
                width / 2.0
            } else {
                PAD + (p.timestamp - min_ts) as f64 / x_span * (width - 2.0 * PAD)
            };
            let y = if y_span == 0.0 {
                height / 2.0
            } else {
                height - PAD - (p.close - min_price) / y_span * (height - 2.0 * PAD)
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn date_label(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Renders the closing-price series as a smooth accent-colored line.
#[component]
pub fn LineChart(points: Vec<PricePoint>, dark: bool) -> Element {
    if points.is_empty() {
        return rsx! {
            p { style: "text-align: center;", "No price history available." }
        };
    }

    let path = polyline_points(&points, WIDTH, HEIGHT);
    let label_color = if dark { "#cccccc" } else { "#444444" };

    let first_date = date_label(points.first().map(|p| p.timestamp).unwrap_or_default());
    let last_date = date_label(points.last().map(|p| p.timestamp).unwrap_or_default());
    let high = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);
    let low = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let range = format!("High ${high:.2} / Low ${low:.2}");

    rsx! {
        div { style: "font-size: 11px; color: {label_color}; text-align: right;", "{range}" }
        svg {
            view_box: "0 0 {WIDTH} {HEIGHT}",
            width: "100%",
            polyline {
                points: "{path}",
                fill: "none",
                stroke: STROKE,
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
        div {
            style: "display: flex; justify-content: space-between; font-size: 11px; color: {label_color};",
            span { "{first_date}" }
            span { "{last_date}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_extremes_to_the_padded_corners() {
        let points = [
            PricePoint { timestamp: 0, close: 10.0 },
            PricePoint { timestamp: 100, close: 20.0 },
        ];
        let path = polyline_points(&points, 100.0, 50.0);
        // Lowest price at the left edge sits at the bottom padding line,
        // highest at the right edge sits at the top padding line.
        assert_eq!(path, "8.0,42.0 92.0,8.0");
    }

    #[test]
    fn flat_series_stays_vertically_centered() {
        let points = [
            PricePoint { timestamp: 0, close: 5.0 },
            PricePoint { timestamp: 10, close: 5.0 },
        ];
        let path = polyline_points(&points, 100.0, 50.0);
        for pair in path.split(' ') {
            let y = pair.split(',').nth(1).unwrap();
            assert_eq!(y, "25.0");
        }
    }

    #[test]
    fn single_sample_collapses_to_the_center() {
        let points = [PricePoint { timestamp: 42, close: 1.0 }];
        assert_eq!(polyline_points(&points, 100.0, 50.0), "50.0,25.0");
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert_eq!(polyline_points(&[], 100.0, 50.0), "");
    }

    #[test]
    fn date_labels_are_calendar_days() {
        assert_eq!(date_label(0), "1970-01-01");
        assert_eq!(date_label(1712966399), "2024-04-12");
    }
}
