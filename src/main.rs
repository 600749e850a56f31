//! Happiness Trend - Life Satisfaction Report & Chart
//!
//! Fetches the Cantril ladder dataset, narrows it to a few countries and years,
//! prints a first-vs-last year summary and saves a line chart.

mod charts;
mod config;
mod data;
mod report;
mod stats;

use anyhow::{Context, Result};
use charts::{ChartData, TrendChartRenderer};
use config::RunConfig;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout only carries the report
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::default();
    run(&config)
}

fn run(config: &RunConfig) -> Result<()> {
    println!("=== Happiness Open Data Project ===");
    println!("Loading data from:");
    println!("{}", config.data_url);

    let df_full = data::fetch_dataset(&config.data_url).context("loading dataset")?;
    let (rows, cols) = data::frame_shape(&df_full);
    println!("Full data shape: ({}, {})", rows, cols);

    let df_small = data::select_entities_and_years(&df_full, &config.selection)
        .context("filtering dataset")?;
    let (rows, cols) = data::frame_shape(&df_small);
    println!("Filtered data shape: ({}, {})", rows, cols);

    let observations = data::observations(&df_small).context("reading filtered rows")?;
    let summary = stats::summarize(&observations);
    info!(countries = summary.len(), "summary computed");
    if tracing::enabled!(Level::DEBUG) {
        let summary_json = serde_json::to_string(&summary)?;
        debug!(summary = %summary_json, "summary records");
    }

    println!();
    println!("Summary table (first vs last year, rounded to 2 decimals):");
    print!("{}", report::render_summary_table(&summary));

    let chart = ChartData::from_observations(&observations, &config.selection);
    let (width, height) = config.image_size();
    TrendChartRenderer::render_png(&chart, &config.output_path, width, height, config.dpi)
        .with_context(|| format!("saving chart to {}", config.output_path.display()))?;

    if config.show_chart {
        TrendChartRenderer::show(&config.output_path).context("displaying chart")?;
    }

    println!();
    println!("Program finished.");
    Ok(())
}
