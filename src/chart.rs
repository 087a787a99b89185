//! SVG rendering of the trips-over-time chart.
//!
//! A one-way side effect: the statistics engine hands over two series and
//! labels, nothing flows back.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use tracing::info;

use crate::stats::series::ChartDimension;
use crate::stats::types::TripSeries;

const CHART_SIZE: (u32, u32) = (1024, 640);

/// Draws a two-line time-series chart of the per-date trip counts to an
/// SVG file at `path`, titled `Trips by <Dimension>` with `Date` and
/// `Number of trips` axes and one legend entry per category.
///
/// # Errors
///
/// Fails if both series are empty (no date range to plot) or the SVG
/// cannot be written.
pub fn render(path: &Path, dimension: ChartDimension, series: &[TripSeries; 2]) -> Result<()> {
    let dates = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(date, _)| *date));
    let (min_date, max_date) = match (dates.clone().min(), dates.max()) {
        (Some(min), Some(max)) => (min, max),
        _ => anyhow::bail!("no data points to chart for {}", dimension.label()),
    };
    // A single-day range degenerates; pad it out to one day.
    let max_date = if min_date == max_date {
        max_date.succ_opt().unwrap_or(max_date)
    } else {
        max_date
    };
    let max_count = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, count)| *count))
        .max()
        .unwrap_or(0);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Trips by {}", dimension.label()), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(min_date..max_date, 0u64..max_count + 1)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Number of trips")
        .draw()?;

    for (index, line) in series.iter().enumerate() {
        let color: &RGBColor = if index == 0 { &BLUE } else { &RED };
        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), color))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()?;

    info!(path = %path.display(), "Chart written");
    Ok(())
}
