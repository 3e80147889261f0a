// src/core/plotter.rs

use crate::{
    core::layout::{self, BAR_HEIGHT, ChartLayout},
    models::{PlotStyle, PresentationOrder, Rgb, Timings},
};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

/// Width of the generated image in pixels.
const CHART_WIDTH: u32 = 960;
/// Height reserved for title, margins and the time axis.
const CHART_BASE_HEIGHT: u32 = 160;
/// Height of each rendered row.
const ROW_HEIGHT: u32 = 48;
/// Opacity of both bar segments.
const BAR_OPACITY: f64 = 0.6;
const FONT_FAMILY: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Output directory '{0}' does not exist.")]
    MissingDirectory(String),
    #[error("Failed to render chart to '{path}': {message}")]
    Render { path: String, message: String },
}

/// Lays out `timings` in `order` and writes the chart to `output` as SVG,
/// overwriting any existing file.
pub fn plot_timings(
    timings: &Timings,
    order: &PresentationOrder,
    style: &PlotStyle,
    output: &Path,
) -> Result<ChartLayout, PlotError> {
    let chart_layout = layout::compute(timings, order);
    render(&chart_layout, style, output)?;
    Ok(chart_layout)
}

/// Draws an already computed layout to `output`.
pub fn render(chart_layout: &ChartLayout, style: &PlotStyle, output: &Path) -> Result<(), PlotError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(PlotError::MissingDirectory(parent.display().to_string()));
        }
    }

    let render_err = |e: &dyn std::fmt::Display| PlotError::Render {
        path: output.display().to_string(),
        message: e.to_string(),
    };

    let rows = u32::try_from(chart_layout.rows()).unwrap_or(u32::MAX);
    let height = CHART_BASE_HEIGHT.saturating_add(rows.saturating_mul(ROW_HEIGHT));
    log::debug!(
        "Rendering {} rows to {} ({}x{})",
        chart_layout.rows(),
        output.display(),
        CHART_WIDTH,
        height
    );

    let root = SVGBackend::new(output, (CHART_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(&e))?;

    let y_max = chart_layout.rows().max(1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, (FONT_FAMILY, 24.0).into_font())
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(8)
        .build_cartesian_2d(0.0..chart_layout.x_max, 0.0..y_max)
        .map_err(|e| render_err(&e))?;

    // Rows are identified by color, position and annotation only.
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_label_formatter(&|_| String::new())
        .x_desc("Time (s)")
        .draw()
        .map_err(|e| render_err(&e))?;

    let total_color = to_plotters(style.total_color);
    let metadata_color = to_plotters(style.metadata_color);
    let half_height = BAR_HEIGHT / 2.0;

    for bar in &chart_layout.bars {
        let center = chart_layout.row_center(bar.row);
        let (bottom, top) = (center - half_height, center + half_height);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(bar.total.start, bottom), (bar.total.end(), top)],
                total_color.mix(BAR_OPACITY).filled(),
            )))
            .map_err(|e| render_err(&e))?;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(bar.metadata.start, bottom), (bar.metadata.end(), top)],
                metadata_color.mix(BAR_OPACITY).filled(),
            )))
            .map_err(|e| render_err(&e))?;

        let label_style =
            TextStyle::from((FONT_FAMILY, 14.0).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
        chart
            .draw_series(std::iter::once(Text::new(
                bar.label.clone(),
                (bar.label_x, center),
                label_style,
            )))
            .map_err(|e| render_err(&e))?;
    }

    root.present().map_err(|e| render_err(&e))?;
    Ok(())
}

fn to_plotters(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimingRecord;
    use std::fs;
    use tempfile::TempDir;

    fn style() -> PlotStyle {
        PlotStyle {
            title: "Build Timings".to_string(),
            total_color: Rgb(135, 206, 250),
            metadata_color: Rgb(153, 50, 204),
        }
    }

    fn lexical_order() -> PresentationOrder {
        PresentationOrder {
            tiers: vec![vec!["minimal-lexical".to_string()]],
        }
    }

    #[test]
    fn test_plot_writes_svg_with_label() {
        // --- Setup ---
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("timings.svg");
        let mut timings = Timings::new();
        timings.insert(
            "minimal-lexical".to_string(),
            TimingRecord::new(3.456, 1.2).unwrap(),
        );

        // --- Execute ---
        let chart_layout = plot_timings(&timings, &lexical_order(), &style(), &output).unwrap();

        // --- Assert ---
        assert_eq!(chart_layout.rows(), 1);
        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("minimal-lexical 3.46s"));
        assert!(svg.contains("Build Timings"));
        assert!(svg.contains("Time (s)"));
    }

    #[test]
    fn test_plot_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("timings.svg");
        fs::write(&output, "stale").unwrap();

        plot_timings(&Timings::new(), &lexical_order(), &style(), &output).unwrap();

        let svg = fs::read_to_string(&output).unwrap();
        assert!(!svg.starts_with("stale"));
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_plot_skips_absent_targets() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("timings.svg");
        let mut timings = Timings::new();
        timings.insert("core".to_string(), TimingRecord::new(1.0, 0.25).unwrap());
        let order = PresentationOrder {
            tiers: vec![vec!["minimal-lexical".to_string()], vec!["core".to_string()]],
        };

        let chart_layout = plot_timings(&timings, &order, &style(), &output).unwrap();

        assert_eq!(chart_layout.rows(), 1);
        assert_eq!(chart_layout.bars[0].row, 0);
        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.contains("core 1.00s"));
        assert!(!svg.contains("minimal-lexical"));
    }

    #[test]
    fn test_missing_output_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("assets").join("timings.svg");

        let result = plot_timings(&Timings::new(), &lexical_order(), &style(), &output);

        assert!(matches!(result, Err(PlotError::MissingDirectory(_))));
        assert!(!output.exists());
    }
}
