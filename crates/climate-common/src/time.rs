//! Time handling for the climate snapshot.
//!
//! Observation dates travel as fixed-width `YYYY-MM-DD` text and are
//! compared lexicographically in SQL, which only works because the format
//! is zero-padded. Window arithmetic is done on `NaiveDate` and formatted
//! back to text before it reaches a query.

use chrono::{Duration, NaiveDate};

/// Last observation date present in the dataset snapshot.
///
/// The trailing-year routes are anchored to this constant, not to the
/// current date.
pub const DATASET_LAST_DATE: &str = "2017-08-23";

/// Wire format for observation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start of the 365-day window ending at [`DATASET_LAST_DATE`].
pub fn trailing_year_start() -> String {
    let last = NaiveDate::parse_from_str(DATASET_LAST_DATE, DATE_FORMAT)
        .expect("dataset last date is a valid calendar date");
    (last - Duration::days(365)).format(DATE_FORMAT).to_string()
}
