//! Run Configuration
//! Fixed settings for a single report run. Nothing here is read from the
//! command line or the environment.

use crate::data::Selection;
use std::path::PathBuf;

/// Our World in Data grapher export of the Cantril ladder score.
pub const DATA_URL: &str = "https://ourworldindata.org/grapher/happiness-cantril-ladder.csv";

/// Settings for one fetch → filter → summarize → plot run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_url: String,
    pub selection: Selection,
    pub output_path: PathBuf,
    /// Figure size in inches (width, height)
    pub figure_size: (f64, f64),
    pub dpi: u32,
    /// Open the saved chart in the system image viewer
    pub show_chart: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_url: DATA_URL.to_string(),
            selection: Selection::default(),
            output_path: PathBuf::from("happiness_trend.png"),
            figure_size: (8.0, 5.0),
            dpi: 200,
            show_chart: true,
        }
    }
}

impl RunConfig {
    /// Pixel dimensions of the saved chart.
    pub fn image_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_size;
        (
            (w * self.dpi as f64).round() as u32,
            (h * self.dpi as f64).round() as u32,
        )
    }
}
