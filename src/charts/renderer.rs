//! Static Chart Renderer
//! Renders the monthly revenue line chart to PNG bytes with plotters.
//!
//! Layout:
//! 1. Title: "Revenue Trend for {year}" centered
//! 2. Blue line with circle markers, one point per month
//! 3. X axis "Months" (Jan..Dec), Y axis "Revenue ($)"
//! 4. Legend box: "Year {year}"

use crate::charts::plotter::RevenueChartPlotter;
use crate::revenue::ChartSeries;
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Canvas size {width}x{height} is empty")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Pixel buffer does not match canvas size")]
    Buffer,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

fn draw_err<E>(e: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Draw(e.to_string())
}

pub struct LineChartRenderer;

impl LineChartRenderer {
    /// Render the chart and encode it as PNG.
    pub fn render_png(series: &ChartSeries, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }

        let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw_chart(&root, series)?;
        }

        let img = RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer)?;
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    /// Render at the default size and write to `path`.
    pub fn save_png(series: &ChartSeries, path: &Path) -> Result<(), RenderError> {
        let png = Self::render_png(series, DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
        std::fs::write(path, png)?;
        Ok(())
    }

    fn draw_chart(root: &DrawingArea<BitMapBackend<'_>, Shift>, series: &ChartSeries) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let (y_min, y_max) = series.value_range();
        let mut chart = ChartBuilder::on(root)
            .caption(series.title(), ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(0f64..11f64, y_min..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_labels(12)
            .x_label_formatter(&|x: &f64| RevenueChartPlotter::month_label(*x))
            .x_desc("Months")
            .y_desc("Revenue ($)")
            .draw()
            .map_err(draw_err)?;

        let points: Vec<(f64, f64)> = series.xy().into_iter().map(|[x, y]| (x, y)).collect();

        chart
            .draw_series(LineSeries::new(points.clone(), BLUE.stroke_width(2)))
            .map_err(draw_err)?
            .label(series.legend_label())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
            )
            .map_err(draw_err)?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}
