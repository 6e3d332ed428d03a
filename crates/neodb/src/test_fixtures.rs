//! Shared fixtures for database-level tests: the two-NEO scenario used
//! throughout, one named hazardous object with a known diameter and one
//! unnamed non-hazardous object with an unknown diameter.

use crate::{
    db::NeoDatabase,
    model::{CloseApproach, NearEarthObject},
};

pub(crate) const APOPHIS_DES: &str = "2000 AB";
pub(crate) const UNNAMED_DES: &str = "2001 XY";

pub(crate) fn fixture_neos() -> Vec<NearEarthObject> {
    vec![
        NearEarthObject::new(APOPHIS_DES, Some("Apophis".to_string()), 0.5, true),
        NearEarthObject::new(UNNAMED_DES, None, f64::NAN, false),
    ]
}

pub(crate) fn fixture_approaches() -> Vec<CloseApproach> {
    vec![
        CloseApproach::new(APOPHIS_DES, "2020-Jan-01 12:30", Some(0.1), Some(5.0)).unwrap(),
        CloseApproach::new(UNNAMED_DES, "2021-Jun-15 03:00", Some(0.2), Some(6.0)).unwrap(),
    ]
}

pub(crate) fn fixture_db() -> NeoDatabase {
    NeoDatabase::build(fixture_neos(), fixture_approaches()).unwrap()
}
