//! Summary Calculator Module
//! First-year vs last-year comparison per country.

use crate::data::{countries, Observation};
use serde::Serialize;
use tracing::debug;

/// Minimum observations a country needs to be summarized.
pub const MIN_OBSERVATIONS: usize = 2;

/// First-vs-last comparison for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub country: String,
    pub first_year: i64,
    pub last_year: i64,
    pub score_first_year: f64,
    pub score_last_year: f64,
    pub absolute_change: f64,
    /// `None` when the first-year score is exactly zero
    pub percent_change: Option<f64>,
}

/// Points for one country, stably sorted by year.
pub fn country_series(observations: &[Observation], country: &str) -> Vec<(i64, f64)> {
    let mut points: Vec<(i64, f64)> = observations
        .iter()
        .filter(|o| o.country == country)
        .map(|o| (o.year, o.happiness_score))
        .collect();
    points.sort_by_key(|&(year, _)| year);
    points
}

/// Percent change relative to `first`, undefined when `first` is zero.
pub fn percent_change(first: f64, absolute_change: f64) -> Option<f64> {
    if first == 0.0 {
        None
    } else {
        Some(absolute_change / first * 100.0)
    }
}

/// Summarize every country with at least two observations, alphabetically.
pub fn summarize(observations: &[Observation]) -> Vec<SummaryRecord> {
    let mut summary = Vec::new();

    for country in countries(observations) {
        let points = country_series(observations, &country);
        if points.len() < MIN_OBSERVATIONS {
            debug!(%country, observations = points.len(), "skipping sparse country");
            continue;
        }

        let (first_year, first_value) = points[0];
        let (last_year, last_value) = points[points.len() - 1];
        let absolute_change = last_value - first_value;

        summary.push(SummaryRecord {
            country,
            first_year,
            last_year,
            score_first_year: first_value,
            score_last_year: last_value,
            absolute_change,
            percent_change: percent_change(first_value, absolute_change),
        });
    }

    summary
}
