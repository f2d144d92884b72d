use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::data::model::AveragedSeries;

/// Vertical padding around the data, as a fraction of its span.
const Y_MARGIN: f64 = 0.05;

// ---------------------------------------------------------------------------
// Averaged spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the averaged amplitude against frequency.
///
/// The x axis is pinned to `x_range` every frame, so panning and zooming are
/// switched off; hovering still reports coordinates.
pub fn averaged_plot(ui: &mut Ui, series: &AveragedSeries, x_range: [f64; 2]) {
    let (min, max) = view_bounds(series, x_range);

    Plot::new("averaged_plot")
        .x_axis_label(series.frequency_label.as_str())
        .y_axis_label(series.amplitude_label.as_str())
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));

            let points: PlotPoints = series.points().collect();
            let line = Line::new(points)
                .name(&series.amplitude_label)
                .color(Color32::LIGHT_BLUE)
                .width(1.5);

            plot_ui.line(line);
        });
}

/// Plot window for `series`: x is always `x_range`, y fits the finite
/// amplitudes whose frequency falls inside it.
pub fn view_bounds(series: &AveragedSeries, x_range: [f64; 2]) -> ([f64; 2], [f64; 2]) {
    let [x_min, x_max] = x_range;

    let (y_min, y_max) = series
        .points()
        .filter(|&[x, y]| x >= x_min && x <= x_max && y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), [_, y]| {
            (lo.min(y), hi.max(y))
        });

    let (y_min, y_max) = if y_min > y_max {
        (0.0, 1.0)
    } else if (y_max - y_min).abs() < f64::EPSILON {
        (y_min - 0.5, y_max + 0.5)
    } else {
        let pad = (y_max - y_min) * Y_MARGIN;
        (y_min - pad, y_max + pad)
    };

    ([x_min, y_min], [x_max, y_max])
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: [f64; 2] = [0.0, 5000.0];

    fn series(frequency: &[f64], amplitude: &[f64]) -> AveragedSeries {
        AveragedSeries {
            frequency_label: "Frequency".to_string(),
            amplitude_label: "Amplitude".to_string(),
            frequency: frequency.to_vec(),
            amplitude: amplitude.to_vec(),
            table_count: 5,
        }
    }

    #[test]
    fn x_is_clamped_whatever_the_data() {
        for s in [
            series(&[0.0, 100.0, 200.0], &[1.0, 2.0, 3.0]),
            series(&[-50.0, 12_000.0, 48_000.0], &[1.0, 2.0, 3.0]),
            series(&[], &[]),
        ] {
            let (min, max) = view_bounds(&s, RANGE);
            assert_eq!(min[0], 0.0);
            assert_eq!(max[0], 5000.0);
        }
    }

    #[test]
    fn y_fits_points_inside_x_range_with_margin() {
        let s = series(&[10.0, 20.0, 9000.0], &[2.0, 4.0, 100.0]);
        let (min, max) = view_bounds(&s, RANGE);
        assert!((min[1] - 1.9).abs() < 1e-12);
        assert!((max[1] - 4.1).abs() < 1e-12);
    }

    #[test]
    fn y_ignores_nan() {
        let s = series(&[10.0, 20.0, 30.0], &[f64::NAN, 1.0, 3.0]);
        let (min, max) = view_bounds(&s, RANGE);
        assert!(min[1].is_finite() && max[1].is_finite());
        assert!(min[1] < 1.0 && max[1] > 3.0);
    }

    #[test]
    fn flat_or_empty_series_gets_unit_span() {
        let (min, max) = view_bounds(&series(&[1.0, 2.0], &[10.0, 10.0]), RANGE);
        assert_eq!((min[1], max[1]), (9.5, 10.5));

        let (min, max) = view_bounds(&series(&[], &[]), RANGE);
        assert_eq!((min[1], max[1]), (0.0, 1.0));
    }
}
