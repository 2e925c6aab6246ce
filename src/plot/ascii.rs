//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each series in the sweep gets its own marker character; segments between
//! consecutive points are drawn with integer line stepping.

use crate::domain::SweepSeries;

const SERIES_MARKERS: [char; 4] = ['*', '+', 'x', '.'];

/// Render a sweep series as a fixed-grid ASCII chart.
pub fn render_sweep_plot(series: &SweepSeries, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw later series first so the primary series overlays reference lines.
    for idx in (0..series.y_labels.len()).rev() {
        let marker = SERIES_MARKERS[idx % SERIES_MARKERS.len()];
        draw_series(&mut grid, series, idx, marker, x_min, x_max, y_min, y_max);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {}=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n",
        series.x_label
    ));
    out.push_str("Series:");
    for (label, marker) in series.y_labels.iter().zip(markers(series.y_labels.len())) {
        out.push_str(&format!(" {marker}={label}"));
    }
    out.push('\n');

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn markers(n: usize) -> impl Iterator<Item = char> {
    (0..n).map(|i| SERIES_MARKERS[i % SERIES_MARKERS.len()])
}

#[allow(clippy::too_many_arguments)]
fn draw_series(
    grid: &mut [Vec<char>],
    series: &SweepSeries,
    idx: usize,
    marker: char,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for point in &series.points {
        let x = map_x(point.x, x_min, x_max, width);
        let y = map_y(point.y[idx], y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, marker);
        } else {
            grid[y][x] = marker;
        }
        prev = Some((x, y));
    }
}

fn x_range(series: &SweepSeries) -> Option<(f64, f64)> {
    let first = series.points.first()?.x;
    let last = series.points.last()?.x;
    if first.is_finite() && last.is_finite() && last > first {
        Some((first, last))
    } else {
        None
    }
}

fn y_range(series: &SweepSeries) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in &series.points {
        for &y in &point.y {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SweepPoint;

    #[test]
    fn plot_golden_snapshot_small() {
        let series = SweepSeries {
            x_label: "x",
            y_labels: vec!["a"],
            points: vec![
                SweepPoint { x: 0.0, y: vec![0.0] },
                SweepPoint { x: 1.0, y: vec![1.0] },
            ],
        };

        let txt = render_sweep_plot(&series, 10, 5);
        let expected = concat!(
            "Plot: x=[0.000, 1.000] | y=[-0.05, 1.05]\n",
            "Series: *=a\n",
            "         *\n",
            "       ** \n",
            "    ***   \n",
            "  **      \n",
            "**        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn second_series_gets_its_own_marker() {
        let series = SweepSeries {
            x_label: "x",
            y_labels: vec!["a", "b"],
            points: vec![
                SweepPoint { x: 0.0, y: vec![0.0, 1.0] },
                SweepPoint { x: 1.0, y: vec![1.0, 1.0] },
            ],
        };
        let txt = render_sweep_plot(&series, 10, 5);
        assert!(txt.contains("*=a +=b"));
        assert!(txt.contains('+'));
        assert!(txt.contains('*'));
    }
}
