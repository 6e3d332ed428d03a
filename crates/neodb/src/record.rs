//! Module: record
//! Responsibility: loosely-typed loader rows and their coercion into entities.
//! Does not own: file or network I/O; the loaders themselves live upstream.
//! Boundary: the only place raw string-shaped field values are interpreted.

use crate::{
    model::{CloseApproach, NearEarthObject},
    time::TimeError,
};
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// RecordError
///
/// Coercion failures for raw loader rows. Only numeric coercion and the
/// required designation can fail; every other quirk of the source data is
/// absorbed by normalization.
///

#[derive(Debug, ThisError)]
pub enum RecordError {
    #[error("record has an empty designation")]
    MissingDesignation,

    #[error("invalid diameter for '{designation}': '{value}'")]
    InvalidDiameter { designation: String, value: String },

    #[error("invalid distance for '{designation}': '{value}'")]
    InvalidDistance { designation: String, value: String },

    #[error("invalid velocity for '{designation}': '{value}'")]
    InvalidVelocity { designation: String, value: String },

    #[error(transparent)]
    Time(#[from] TimeError),
}

///
/// NeoRecord
///
/// One raw NEO row as the loaders hand it over. All optional fields arrive
/// string-shaped; unknown extra fields are ignored by deserialization.
///
/// Normalization contract:
/// - empty name    -> no name
/// - empty diameter-> NaN (unknown, distinct from zero)
/// - hazard "Y"    -> true, "N" -> false, empty/absent -> false,
///   any other non-empty value -> true
///

#[derive(Clone, Debug, Deserialize)]
pub struct NeoRecord {
    #[serde(alias = "pdes")]
    pub designation: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub diameter: Option<String>,
    #[serde(default, alias = "pha")]
    pub hazardous: Option<String>,
}

impl TryFrom<NeoRecord> for NearEarthObject {
    type Error = RecordError;

    fn try_from(record: NeoRecord) -> Result<Self, Self::Error> {
        if record.designation.is_empty() {
            return Err(RecordError::MissingDesignation);
        }

        let diameter = coerce_float(record.diameter.as_deref()).ok_or_else(|| {
            RecordError::InvalidDiameter {
                designation: record.designation.clone(),
                value: record.diameter.clone().unwrap_or_default(),
            }
        })?;

        Ok(Self::new(
            record.designation,
            record.name,
            diameter,
            coerce_hazard(record.hazardous.as_deref()),
        ))
    }
}

///
/// ApproachRecord
///
/// One raw close-approach row: the foreign-key designation, the `cd`
/// wire-format timestamp, and string-shaped distance and velocity.
///

#[derive(Clone, Debug, Deserialize)]
pub struct ApproachRecord {
    #[serde(alias = "des")]
    pub designation: String,
    #[serde(alias = "cd")]
    pub cd_time: String,
    #[serde(default, alias = "dist")]
    pub distance: Option<String>,
    #[serde(default, alias = "v_rel")]
    pub velocity: Option<String>,
}

impl TryFrom<ApproachRecord> for CloseApproach {
    type Error = RecordError;

    fn try_from(record: ApproachRecord) -> Result<Self, Self::Error> {
        if record.designation.is_empty() {
            return Err(RecordError::MissingDesignation);
        }

        let distance = coerce_float(record.distance.as_deref()).ok_or_else(|| {
            RecordError::InvalidDistance {
                designation: record.designation.clone(),
                value: record.distance.clone().unwrap_or_default(),
            }
        })?;
        let velocity = coerce_float(record.velocity.as_deref()).ok_or_else(|| {
            RecordError::InvalidVelocity {
                designation: record.designation.clone(),
                value: record.velocity.clone().unwrap_or_default(),
            }
        })?;

        Ok(Self::new(
            record.designation,
            &record.cd_time,
            Some(distance),
            Some(velocity),
        )?)
    }
}

/// Coerce a raw numeric field. Absent or empty means unknown (NaN); a
/// present, non-numeric value is the one thing coercion rejects.
fn coerce_float(raw: Option<&str>) -> Option<f64> {
    match raw {
        None => Some(f64::NAN),
        Some(s) if s.is_empty() => Some(f64::NAN),
        Some(s) => s.trim().parse::<f64>().ok(),
    }
}

/// Coerce the categorical hazard flag. Anything non-empty other than the
/// explicit "N" marks the object hazardous, matching the source data's
/// truthiness semantics.
fn coerce_hazard(raw: Option<&str>) -> bool {
    match raw {
        None | Some("") | Some("N") => false,
        Some(_) => true,
    }
}
