//! Chart Data Module
//! Groups observations into per-country line series and works out axis ranges.

use crate::data::{countries, Observation, Selection};
use crate::stats::country_series;
use plotters::style::RGBColor;

/// Color palette for countries
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(121, 85, 72),   // Brown
    RGBColor(96, 125, 139),  // Blue Grey
];

/// Fallback y range for an empty chart (Cantril ladder bounds)
const SCORE_RANGE: (f64, f64) = (0.0, 10.0);

/// One country's line: (year, score) points sorted by year.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub country: String,
    pub points: Vec<(i64, f64)>,
    pub color: RGBColor,
}

/// Everything needed to draw the trend chart.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub series: Vec<TrendSeries>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl ChartData {
    /// Build one series per country, alphabetically.
    pub fn from_observations(observations: &[Observation], selection: &Selection) -> Self {
        let series: Vec<TrendSeries> = countries(observations)
            .into_iter()
            .enumerate()
            .map(|(idx, country)| TrendSeries {
                points: country_series(observations, &country),
                color: PALETTE[idx % PALETTE.len()],
                country,
            })
            .collect();

        let (x_range, y_range) = Self::axis_ranges(&series, selection);

        Self {
            title: format!(
                "Self-reported life satisfaction ({}-{})",
                selection.first_year, selection.last_year
            ),
            series,
            x_range,
            y_range,
        }
    }

    fn axis_ranges(series: &[TrendSeries], selection: &Selection) -> ((f64, f64), (f64, f64)) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for &(year, score) in series.iter().flat_map(|s| s.points.iter()) {
            x_min = x_min.min(year as f64);
            x_max = x_max.max(year as f64);
            if !score.is_nan() {
                y_min = y_min.min(score);
                y_max = y_max.max(score);
            }
        }

        if x_min.is_infinite() {
            x_min = selection.first_year as f64;
            x_max = selection.last_year as f64;
        }
        if y_min.is_infinite() {
            (y_min, y_max) = SCORE_RANGE;
        }

        let x_pad = ((x_max - x_min) * 0.05).max(0.5);
        let y_pad = ((y_max - y_min) * 0.1).max(0.1);

        (
            (x_min - x_pad, x_max + x_pad),
            (y_min - y_pad, y_max + y_pad),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(country: &str, year: i64, score: f64) -> Observation {
        Observation {
            country: country.to_string(),
            year,
            happiness_score: score,
        }
    }

    #[test]
    fn one_series_per_country_in_alphabetical_order() {
        let rows = vec![
            obs("World", 2012, 5.3),
            obs("Turkey", 2011, 5.0),
            obs("World", 2011, 5.2),
        ];
        let chart = ChartData::from_observations(&rows, &Selection::default());

        let names: Vec<&str> = chart.series.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(names, vec!["Turkey", "World"]);
        assert_eq!(chart.series[1].points, vec![(2011, 5.2), (2012, 5.3)]);
        assert_ne!(chart.series[0].color, chart.series[1].color);
        assert_eq!(chart.title, "Self-reported life satisfaction (2011-2024)");
    }

    #[test]
    fn single_observation_countries_are_still_plotted() {
        let rows = vec![obs("World", 2011, 5.2)];
        let chart = ChartData::from_observations(&rows, &Selection::default());
        assert_eq!(chart.series.len(), 1);
    }

    #[test]
    fn ranges_cover_all_points() {
        let rows = vec![obs("Turkey", 2011, 5.0), obs("Turkey", 2024, 4.5)];
        let chart = ChartData::from_observations(&rows, &Selection::default());

        assert!(chart.x_range.0 < 2011.0 && chart.x_range.1 > 2024.0);
        assert!(chart.y_range.0 < 4.5 && chart.y_range.1 > 5.0);
    }

    #[test]
    fn empty_chart_falls_back_to_selection_and_score_bounds() {
        let chart = ChartData::from_observations(&[], &Selection::default());

        assert!(chart.is_empty());
        assert!(chart.x_range.0 < 2011.0 && chart.x_range.1 > 2024.0);
        assert!(chart.y_range.0 < 0.0 && chart.y_range.1 > 10.0);
    }
}
