//! Storage abstractions for the climate-api services.
//!
//! Provides the read-only data access layer over the SQLite climate
//! snapshot (station metadata and daily measurements).

pub mod climate;

pub use climate::{ClimateStore, PrecipitationRow, StationRow, TemperatureStats, TobsRow};
