//! History line chart
//!
//! Pure projection from an ordered history series to a ratatui `Chart`.
//! Values are plotted by position; the `date` labels never reach the axes
//! (both axes render without labels, as in the web original). An empty
//! series yields an empty chart area and a single point renders as a
//! degenerate flat line, neither is an error.

use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

use crate::types::HistoryPoint;

const DEFAULT_COLOR: Color = Color::Blue;

/// Project a history series onto `(position, value)` points, in input order.
pub fn series_points(series: &[HistoryPoint]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect()
}

/// Build the line chart for one product's history.
///
/// `points` must come from [`series_points`]; the caller keeps them alive
/// for the lifetime of the returned widget.
pub fn trend_chart(points: &[(f64, f64)], color: Option<Color>) -> Chart<'_> {
    let color = color.unwrap_or(DEFAULT_COLOR);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    let (x_bounds, y_bounds) = chart_bounds(points);

    Chart::new(vec![dataset])
        .x_axis(Axis::default().bounds(x_bounds))
        .y_axis(Axis::default().bounds(y_bounds))
}

/// Axis bounds covering all points, padded so a flat or single-point series
/// still has a non-zero value range to draw in.
fn chart_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    if points.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let x_max = (points.len() as f64 - 1.0).max(1.0);
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, y) in points {
        y_min = y_min.min(*y);
        y_max = y_max.max(*y);
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }

    ([0.0, x_max], [y_min, y_max])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn point(date: &str, value: f64) -> HistoryPoint {
        HistoryPoint {
            date: date.to_string(),
            value,
        }
    }

    fn render(points: &[(f64, f64)]) {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(trend_chart(points, None), frame.area());
            })
            .unwrap();
    }

    #[test]
    fn test_points_preserve_input_order() {
        let series = vec![point("d1", 10.0), point("d2", 14.0), point("d3", 7.0)];
        let points = series_points(&series);
        assert_eq!(points, vec![(0.0, 10.0), (1.0, 14.0), (2.0, 7.0)]);
    }

    #[test]
    fn test_empty_series_has_no_points() {
        assert!(series_points(&[]).is_empty());
    }

    #[test]
    fn test_empty_series_renders_without_panic() {
        render(&[]);
    }

    #[test]
    fn test_single_point_renders_without_panic() {
        render(&series_points(&[point("d1", 42.0)]));
    }

    #[test]
    fn test_flat_series_gets_padded_bounds() {
        let points = vec![(0.0, 5.0), (1.0, 5.0)];
        let (_, y_bounds) = chart_bounds(&points);
        assert!(y_bounds[0] < 5.0 && y_bounds[1] > 5.0);
        render(&points);
    }

    #[test]
    fn test_bounds_cover_value_range() {
        let points = vec![(0.0, -3.0), (1.0, 12.0), (2.0, 4.0)];
        let (x_bounds, y_bounds) = chart_bounds(&points);
        assert_eq!(x_bounds, [0.0, 2.0]);
        assert_eq!(y_bounds, [-3.0, 12.0]);
    }
}
