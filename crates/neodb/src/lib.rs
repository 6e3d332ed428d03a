//! Core runtime for neodb: entity models, the linked database, filter
//! predicates, and the ergonomics exported via the `prelude`.
//!
//! The crate indexes a static collection of near-Earth objects (NEOs) and
//! their recorded close approaches. Construction cross-links both
//! collections exactly once; afterwards everything is read-only and queries
//! are pure lazy scans.
#![warn(unreachable_pub)]

pub mod db;
pub mod error;
pub mod model;
pub mod record;
pub mod time;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, records, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{NeoDatabase, QueryFilters},
        model::{CloseApproach, LinkedApproach, NearEarthObject},
    };
}
