use crate::{
    model::{NearEarthObject, NeoId},
    time::{TimeError, format_approach_time, parse_cd_timestamp},
};
use chrono::{DateTime, Utc};
use derive_more::Deref;
use serde::Serialize;
use std::fmt;

///
/// CloseApproach
///
/// A single recorded event of a NEO passing near Earth: the UTC time of
/// closest approach, the nominal approach distance in astronomical units,
/// and the relative approach velocity in kilometers per second.
///
/// This is the unlinked state as the loaders hand it over; the foreign-key
/// designation has not yet been resolved against the NEO collection.
/// Database construction lifts it into a [`LinkedApproach`].
///

#[derive(Clone, Debug, Serialize)]
pub struct CloseApproach {
    designation: String,
    time: DateTime<Utc>,
    distance: f64,
    velocity: f64,
}

impl CloseApproach {
    /// Construct an approach from a `cd`-format wire timestamp.
    /// Absent distance or velocity defaults to NaN.
    pub fn new(
        designation: impl Into<String>,
        cd_time: &str,
        distance: Option<f64>,
        velocity: Option<f64>,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            designation: designation.into(),
            time: parse_cd_timestamp(cd_time)?,
            distance: distance.unwrap_or(f64::NAN),
            velocity: velocity.unwrap_or(f64::NAN),
        })
    }

    /// Designation of the NEO this approach belongs to.
    #[must_use]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// UTC time of closest approach, minute precision.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Nominal approach distance in astronomical units; NaN when absent.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s; NaN when absent.
    #[must_use]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Minute-precision human-readable approach time, computed on demand.
    #[must_use]
    pub fn time_str(&self) -> String {
        format_approach_time(&self.time)
    }
}

///
/// LinkedApproach
///
/// The linked state of a close approach, produced only by database
/// construction. `neo` is never optional: the type itself is the proof that
/// the foreign key resolved. Carries denormalized copies of the owning
/// NEO's name, diameter, and hazard flag so filter evaluation never has to
/// chase the back-reference.
///

#[derive(Clone, Debug, Deref, Serialize)]
pub struct LinkedApproach {
    #[deref]
    #[serde(flatten)]
    approach: CloseApproach,
    neo: NeoId,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
}

impl LinkedApproach {
    /// Link an approach to its resolved NEO, copying the filterable fields.
    /// Callers must have resolved `neo` from `approach.designation()`.
    pub(crate) fn link(approach: CloseApproach, neo: NeoId, owner: &NearEarthObject) -> Self {
        Self {
            approach,
            neo,
            name: owner.name().map(str::to_string),
            diameter: owner.diameter(),
            hazardous: owner.is_hazardous(),
        }
    }

    /// Handle to the owning NEO.
    #[must_use]
    pub const fn neo(&self) -> NeoId {
        self.neo
    }

    /// Owning NEO's name at link time.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Owning NEO's diameter at link time; NaN when unknown.
    #[must_use]
    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Owning NEO's hazard flag at link time.
    #[must_use]
    pub const fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    /// The designation alone, or "designation name" when the owner is named.
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {name}", self.designation()),
            None => self.designation().to_string(),
        }
    }
}

impl fmt::Display for LinkedApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approached earth at a distance of {:.4} au with a velocity of {:.4} km/s",
            self.time_str(),
            self.fullname(),
            self.distance(),
            self.velocity()
        )
    }
}
