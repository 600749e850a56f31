//! Summary Table Report
//! Plain-text rendering of the per-country summary, floats rounded to 2 decimals.

use crate::stats::SummaryRecord;
use std::fmt::{self, Write};

const HEADERS: [&str; 7] = [
    "country",
    "first_year",
    "last_year",
    "score_first_year",
    "score_last_year",
    "absolute_change",
    "percent_change",
];

fn round2(value: f64) -> String {
    format!("{:.2}", value)
}

fn cells(record: &SummaryRecord) -> [String; 7] {
    [
        record.country.clone(),
        record.first_year.to_string(),
        record.last_year.to_string(),
        round2(record.score_first_year),
        round2(record.score_last_year),
        round2(record.absolute_change),
        record
            .percent_change
            .map(round2)
            .unwrap_or_else(|| "NaN".to_string()),
    ]
}

/// Render the summary as an indexed, right-aligned table.
pub fn render_summary_table(summary: &[SummaryRecord]) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail
    write_summary_table(&mut output, summary).ok();
    output
}

fn write_summary_table(out: &mut impl Write, summary: &[SummaryRecord]) -> fmt::Result {
    if summary.is_empty() {
        return writeln!(out, "Empty summary (no country has two or more observations)");
    }

    let rows: Vec<[String; 7]> = summary.iter().map(cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    let index_width = (rows.len() - 1).to_string().len();

    write!(out, "{:index_width$}", "")?;
    for (header, w) in HEADERS.iter().zip(widths.iter().copied()) {
        write!(out, "  {:>w$}", header)?;
    }
    writeln!(out)?;

    for (i, row) in rows.iter().enumerate() {
        write!(out, "{:<index_width$}", i)?;
        for (cell, w) in row.iter().zip(widths.iter().copied()) {
            write!(out, "  {:>w$}", cell)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
