//! Common types and utilities shared across the climate-api services.

pub mod error;
pub mod time;

pub use error::{ClimateError, ClimateResult};
pub use time::{trailing_year_start, DATASET_LAST_DATE, DATE_FORMAT};
