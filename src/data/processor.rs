//! Data Processor Module
//! Narrows the raw dataset to the selected entities and years and turns the
//! result into plain records.

use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Expected entity, code, year and score columns, found {0} columns")]
    TooFewColumns(usize),
}

/// Entities and inclusive year range to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub entities: Vec<String>,
    pub first_year: i64,
    pub last_year: i64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            entities: ["Turkey", "Lithuania", "World"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            first_year: 2011,
            last_year: 2024,
        }
    }
}

/// One row of the filtered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub country: String,
    pub year: i64,
    pub happiness_score: f64,
}

/// Keep rows whose entity is selected and whose year is in range.
///
/// Columns are taken by position (0: entity, 2: year, 3: score) and renamed to
/// `country`, `year`, `happiness_score`. Row order is preserved.
pub fn select_entities_and_years(
    df: &DataFrame,
    selection: &Selection,
) -> Result<DataFrame, ProcessorError> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    if names.len() < 4 {
        return Err(ProcessorError::TooFewColumns(names.len()));
    }
    let (entity_col, year_col, score_col) = (&names[0], &names[2], &names[3]);

    let entity_mask = selection
        .entities
        .iter()
        .map(|e| col("country").eq(lit(e.as_str())))
        .reduce(|acc, expr| acc.or(expr))
        .unwrap_or_else(|| lit(false));
    let year_mask = col("year")
        .gt_eq(lit(selection.first_year))
        .and(col("year").lt_eq(lit(selection.last_year)));

    let filtered = df
        .clone()
        .lazy()
        .select([
            col(entity_col.as_str())
                .cast(DataType::String)
                .alias("country"),
            col(year_col.as_str()).cast(DataType::Int64).alias("year"),
            col(score_col.as_str())
                .cast(DataType::Float64)
                .alias("happiness_score"),
        ])
        .filter(entity_mask.and(year_mask))
        .collect()?;

    debug!(
        rows_in = df.height(),
        rows_out = filtered.height(),
        "filtered dataset"
    );
    Ok(filtered)
}

/// Convert a filtered table into records.
///
/// Rows without a country or year are skipped; a missing score is read as NaN
/// so the row still counts toward its country's observations.
pub fn observations(df: &DataFrame) -> Result<Vec<Observation>, ProcessorError> {
    let countries = df.column("country")?.str()?;
    let years = df.column("year")?.i64()?;
    let scores = df.column("happiness_score")?.f64()?;

    let records: Vec<Observation> = countries
        .into_iter()
        .zip(years.into_iter())
        .zip(scores.into_iter())
        .filter_map(|((c, y), s)| match (c, y) {
            (Some(country), Some(year)) => Some(Observation {
                country: country.to_string(),
                year,
                happiness_score: s.unwrap_or(f64::NAN),
            }),
            _ => None,
        })
        .collect();

    let skipped = df.height() - records.len();
    if skipped > 0 {
        debug!(skipped, "dropped rows without country or year");
    }
    Ok(records)
}

/// Distinct countries, sorted.
pub fn countries(observations: &[Observation]) -> Vec<String> {
    observations
        .iter()
        .map(|o| o.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
