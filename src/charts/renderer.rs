//! Static Chart Renderer
//! Draws the trend chart into an RGB buffer with plotters and saves it as PNG.
//!
//! Layout:
//! 1. Title centered on top
//! 2. One marked line per country, year on x, score on y
//! 3. Legend in the upper right corner

use crate::charts::ChartData;
use image::RgbImage;
use plotters::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const FONT: &str = "sans-serif";
const METERS_PER_INCH: f64 = 0.0254;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
    #[error("Chart buffer does not match {0}x{1} image")]
    Buffer(u32, u32),
    #[error("Failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
    #[error("Chart file or viewer I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn drawing_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

pub struct TrendChartRenderer;

impl TrendChartRenderer {
    /// Render the chart to `path` as a `width` x `height` PNG tagged with
    /// `dpi`, overwriting it.
    pub fn render_png(
        data: &ChartData,
        path: &Path,
        width: u32,
        height: u32,
        dpi: u32,
    ) -> Result<(), RenderError> {
        let img = Self::draw_rgb(data, width, height)?;
        Self::save_png(&img, path, dpi)?;
        info!(path = %path.display(), width, height, dpi, "chart saved");
        Ok(())
    }

    /// Open a saved chart in the system image viewer.
    pub fn show(path: &Path) -> Result<(), RenderError> {
        open::that(path)?;
        Ok(())
    }

    /// Draw the chart into an RGB image.
    pub fn draw_rgb(data: &ChartData, width: u32, height: u32) -> Result<RgbImage, RenderError> {
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        {
            // Font sizes scale with the 1600px wide default figure
            let scale = width as f64 / 1600.0;
            let px = |size: f64| (size * scale).round().max(1.0) as u32;
            let pt = |size: f64| (size * scale).max(1.0);

            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_err)?;

            let (x_min, x_max) = data.x_range;
            let (y_min, y_max) = data.y_range;

            let mut chart = ChartBuilder::on(&root)
                .caption(&data.title, (FONT, pt(44.0)))
                .margin(px(30.0))
                .x_label_area_size(px(80.0))
                .y_label_area_size(px(100.0))
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(drawing_err)?;

            chart
                .configure_mesh()
                .x_desc("Year")
                .y_desc("Happiness score (0-10)")
                .x_label_formatter(&|x| format!("{:.0}", x))
                .y_label_formatter(&|y| format!("{:.2}", y))
                .label_style((FONT, pt(26.0)))
                .axis_desc_style((FONT, pt(30.0)))
                .draw()
                .map_err(drawing_err)?;

            let stroke = px(4.0);
            let marker = px(8.0);

            for series in &data.series {
                let color = series.color;
                let points: Vec<(f64, f64)> = series
                    .points
                    .iter()
                    .filter(|(_, score)| !score.is_nan())
                    .map(|&(year, score)| (year as f64, score))
                    .collect();

                chart
                    .draw_series(LineSeries::new(points.clone(), color.stroke_width(stroke)))
                    .map_err(drawing_err)?
                    .label(series.country.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(stroke))
                    });

                chart
                    .draw_series(
                        points
                            .into_iter()
                            .map(|p| Circle::new(p, marker, color.filled())),
                    )
                    .map_err(drawing_err)?;
            }

            if !data.is_empty() {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .label_font((FONT, pt(26.0)))
                    .draw()
                    .map_err(drawing_err)?;
            }

            root.present().map_err(drawing_err)?;
        }

        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer(width, height))
    }

    /// Encode `img` as PNG at `path`, recording `dpi` in the pHYs chunk.
    pub fn save_png(img: &RgbImage, path: &Path, dpi: u32) -> Result<(), RenderError> {
        let pixels_per_meter = (dpi as f64 / METERS_PER_INCH).round() as u32;

        let writer = BufWriter::new(File::create(path)?);
        let mut encoder = png::Encoder::new(writer, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: pixels_per_meter,
            yppu: pixels_per_meter,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder.write_header()?;
        writer.write_image_data(img.as_raw())?;
        writer.finish()?;
        Ok(())
    }
}
