//! Dataset Loader Module
//! Fetches the remote CSV over HTTP and parses it with Polars.

use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, info};

/// Entity name, entity code, year, score.
pub const MIN_COLUMNS: usize = 4;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch dataset: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Expected at least {MIN_COLUMNS} columns, found {0}")]
    TooFewColumns(usize),
}

/// Download the dataset at `url` and parse it into a DataFrame.
pub fn fetch_dataset(url: &str) -> Result<DataFrame, LoaderError> {
    info!(url, "fetching dataset");

    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body = response.bytes()?;
    debug!(bytes = body.len(), "download complete");

    parse_csv(body.to_vec())
}

/// Parse CSV text (with a header row) into a DataFrame.
///
/// Columns are later addressed by position, so only the column count is checked.
pub fn parse_csv(bytes: Vec<u8>) -> Result<DataFrame, LoaderError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10000))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    if df.width() < MIN_COLUMNS {
        return Err(LoaderError::TooFewColumns(df.width()));
    }

    Ok(df)
}

/// (rows, columns) of a DataFrame.
pub fn frame_shape(df: &DataFrame) -> (usize, usize) {
    df.shape()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Entity,Code,Year,Cantril ladder score
Lithuania,LTU,2011,5.37
Lithuania,LTU,2024,6.82
Turkey,TUR,2011,5.27
World,OWID_WRL,2011,5.21
";

    #[test]
    fn parses_four_column_csv() {
        let df = parse_csv(SAMPLE.as_bytes().to_vec()).unwrap();
        assert_eq!(frame_shape(&df), (4, 4));

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names[0], "Entity");
        assert_eq!(names[2], "Year");
        assert_eq!(names[3], "Cantril ladder score");
    }

    #[test]
    fn header_only_csv_yields_zero_rows() {
        let df = parse_csv(b"Entity,Code,Year,Score\n".to_vec()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn rejects_tables_with_too_few_columns() {
        let err = parse_csv(b"Entity,Year\nTurkey,2011\n".to_vec()).unwrap_err();
        assert!(matches!(err, LoaderError::TooFewColumns(2)));
    }
}
