//! Module: time
//! Responsibility: conversion between the NASA `cd` wire timestamp and UTC.
//! Does not own: entity construction or display formatting of whole rows.
//! Boundary: `CloseApproach` construction calls the forward conversion; the
//! inverse is produced on demand for display and never stored.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error as ThisError;

/// Wire format used by the close-approach data set, e.g. `2020-Jan-01 12:30`.
const CD_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Minute-precision display format. The input data carries no seconds, so
/// the formatted form must not invent them.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

///
/// TimeError
///

#[derive(Debug, ThisError)]
pub enum TimeError {
    #[error("invalid cd timestamp: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Parse a `cd`-format timestamp into a UTC datetime.
pub fn parse_cd_timestamp(value: &str) -> Result<DateTime<Utc>, TimeError> {
    NaiveDateTime::parse_from_str(value.trim(), CD_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimeError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Format a UTC datetime at minute precision for human-readable output.
#[must_use]
pub fn format_approach_time(time: &DateTime<Utc>) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}
