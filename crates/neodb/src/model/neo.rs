use serde::Serialize;
use std::fmt;

///
/// NearEarthObject
///
/// A near-Earth object as extracted from NASA's small-body data set. Each
/// has a unique primary designation, an optional IAU name, an optional
/// diameter in kilometers, and a flag for whether the object is potentially
/// hazardous.
///
/// Construction absorbs the known quirks of the source data: an empty name
/// is the same as no name, and an unknown diameter is stored as NaN,
/// distinct from zero.
///

#[derive(Clone, Debug, Serialize)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
}

impl NearEarthObject {
    /// Construct a NEO, normalizing an empty name to `None`.
    #[must_use]
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
        }
    }

    /// NASA's unique identifier for the object; the primary key.
    #[must_use]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name, if the object has been named.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers; NaN when unknown.
    #[must_use]
    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub const fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    /// The designation alone, or "designation name" when a name exists.
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {name}", self.designation),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard_desc = if self.hazardous { "is" } else { "is not" };

        if self.diameter.is_nan() {
            write!(
                f,
                "NEO {} has an unknown diameter and {hazard_desc} potentially hazardous",
                self.fullname()
            )
        } else {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {hazard_desc} potentially hazardous",
                self.fullname(),
                self.diameter
            )
        }
    }
}
