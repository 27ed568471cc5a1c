use std::error::Error;
use std::ops::Range;

use druid::{AppLauncher, Widget, WindowDesc};
use plotters::prelude::*;
use plotters_druid::Plot;

use crate::sample_reader::Samples;

/// Opens the chart window and blocks until the user closes it.
pub fn render_plot(samples: Samples) -> Result<(), Box<dyn Error>> {
    let main_window = WindowDesc::new(move || chart_widget(samples))
        .title("iteration x time")
        .window_size((800.0, 600.0))
        .resizable(true);

    AppLauncher::with_window(main_window).launch(())?;
    Ok(())
}

fn chart_widget(samples: Samples) -> impl Widget<()> {
    let (x_range, y_range) = axis_bounds(&samples);
    let points: Vec<(f64, f64)> = samples
        .iterations
        .iter()
        .zip(&samples.times)
        .map(|(&x, &y)| (x as f64, y as f64))
        .collect();

    Plot::new(move |_size, _data, root| {
        root.fill(&WHITE).unwrap();

        //The chart will be put on the window
        let mut chart = ChartBuilder::on(root);

        //Shifting the chart away from the window borders
        chart.margin(20).set_left_and_bottom_label_area_size(45);

        let mut chart_context = chart
            .build_cartesian_2d(x_range.clone(), y_range.clone())
            .unwrap();

        //Background grid
        chart_context.configure_mesh().draw().unwrap();

        //Samples are connected in file order, not sorted
        chart_context
            .draw_series(LineSeries::new(points.iter().copied(), BLUE.filled()).point_size(3))
            .unwrap();
    })
}

/// Chart ranges covering every sample, with headroom above the tallest
/// time. Empty input falls back to unit ranges so the window still opens
/// on blank axes.
fn axis_bounds(samples: &Samples) -> (Range<f64>, Range<f64>) {
    if samples.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }

    let (x_lo, x_hi) = min_max(&samples.iterations);
    let (y_lo, y_hi) = min_max(&samples.times);

    let x = padded(x_lo as f64, x_hi as f64);
    let y = padded(y_lo.min(0) as f64, y_hi as f64 * 1.25);
    (x, y)
}

fn min_max(values: &[i64]) -> (i64, i64) {
    values
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo {
        lo..hi
    } else {
        lo..lo + 1.0
    }
}
