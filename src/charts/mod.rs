//! Charts module - Trend chart rendering

mod plotter;
mod renderer;

pub use plotter::ChartData;
pub use renderer::TrendChartRenderer;
