use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::models::{ChartSpec, HistoricalSeries};
use crate::utils::format_es_cl;

const LINE_COLOR: RGBColor = RGBColor(0, 170, 170);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to dispose chart: {0}")]
    Dispose(String),
}

/// A rendered chart that must be disposed before the next one is drawn
pub trait ChartHandle {
    fn destroy(self) -> Result<(), ChartError>;
}

/// Draws a [`ChartSpec`] somewhere the user can see it
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn render(&mut self, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;
}

/// Title shown above the plotted series
pub fn chart_title(currency_code: &str, points: usize) -> String {
    format!("Valor de {} en los ultimos {} periodos", currency_code, points)
}

/// Labels, values and title for one currency's series
pub fn build_chart_spec(currency_code: &str, series: &HistoricalSeries) -> ChartSpec {
    ChartSpec {
        labels: series.dates(),
        series: series.values(),
        title: chart_title(currency_code, series.len()),
    }
}

/// Y axis bounds with 10% padding, never below zero
fn value_range(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 1.0);
    }

    let min_value = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let range = max_value - min_value;
    let padding = if range > 0.0 {
        range * 0.1
    } else {
        (max_value.abs() * 0.05).max(1.0)
    };

    ((min_value - padding).max(0.0), max_value + padding)
}

/// Draw `spec` as a line chart into a PNG file at `path`
pub fn draw_line_chart(
    spec: &ChartSpec,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    let backend = BitMapBackend::new(path, (width, height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

    let (y_min, y_max) = value_range(&spec.series);
    let x_max = spec.series.len().saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0usize..x_max, y_min..y_max)
        .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_labels(spec.labels.len().max(2))
        .x_label_formatter(&|idx: &usize| spec.labels.get(*idx).cloned().unwrap_or_default())
        .y_label_formatter(&|value: &f64| format_es_cl(*value))
        .x_desc("Fecha")
        .y_desc("CLP")
        .draw()
        .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

    let points: Vec<(usize, f64)> = spec
        .series
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| value.is_finite())
        .collect();

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &LINE_COLOR))
        .map_err(|e| ChartError::Render(format!("Failed to draw line: {}", e)))?;

    chart
        .draw_series(points.iter().map(|point| Circle::new(*point, 3, LINE_COLOR.filled())))
        .map_err(|e| ChartError::Render(format!("Failed to draw points: {}", e)))?;

    root.present()
        .map_err(|e| ChartError::Render(format!("Failed to write chart: {}", e)))?;

    Ok(())
}

/// Renders charts into a single PNG file that is replaced on every redraw
pub struct PngChartRenderer {
    output_path: PathBuf,
    width: u32,
    height: u32,
}

impl PngChartRenderer {
    pub fn new(output_path: PathBuf, width: u32, height: u32) -> Self {
        Self {
            output_path,
            width,
            height,
        }
    }
}

/// PNG written by [`PngChartRenderer`]; destroying it removes the file
#[derive(Debug)]
pub struct RenderedChart {
    pub path: PathBuf,
}

impl ChartHandle for RenderedChart {
    fn destroy(self) -> Result<(), ChartError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed chart {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ChartError::Dispose(format!("{}: {}", self.path.display(), e))),
        }
    }
}

impl ChartRenderer for PngChartRenderer {
    type Handle = RenderedChart;

    fn render(&mut self, spec: &ChartSpec) -> Result<RenderedChart, ChartError> {
        draw_line_chart(spec, &self.output_path, self.width, self.height)?;

        Ok(RenderedChart {
            path: self.output_path.clone(),
        })
    }
}
