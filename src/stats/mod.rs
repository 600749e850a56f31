//! Stats module - per-country trend summary

mod calculator;

pub use calculator::{country_series, summarize, SummaryRecord};
