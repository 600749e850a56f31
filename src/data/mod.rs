//! Data module - dataset fetching and filtering

mod loader;
mod processor;

pub use loader::{fetch_dataset, frame_shape};
pub use processor::{countries, observations, select_entities_and_years, Observation, Selection};
