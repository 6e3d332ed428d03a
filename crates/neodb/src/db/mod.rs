mod filter;
mod query;

#[cfg(test)]
mod tests;

pub use filter::{ApproachPredicate, DateRange, QueryFilters, ValueRange};
pub use query::Query;

use crate::model::{CloseApproach, LinkedApproach, NearEarthObject, NeoId};
use std::collections::HashMap;
use thiserror::Error as ThisError;
use tracing::{debug, warn};

///
/// BuildError
///
/// Construction-time failures. Consistency of the data set is a
/// precondition: a dangling foreign key or a duplicated primary key aborts
/// the build rather than producing a partially-linked database.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("close approach references unknown designation: '{designation}'")]
    UnknownDesignation { designation: String },

    #[error("duplicate NEO designation: '{designation}'")]
    DuplicateDesignation { designation: String },
}

///
/// NeoDatabase
///
/// The linked, read-only view over both collections. Built exactly once;
/// afterwards every entity and index is immutable and lookups and queries
/// are pure reads. One NEO owns many approaches (shared designation), and
/// the relationship is navigable in both directions.
///

#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<LinkedApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
    /// Per-NEO approach positions, aligned with `neos`, input-order.
    links: Vec<Vec<usize>>,
}

impl NeoDatabase {
    /// Build the cross-linked database from the two loader collections.
    ///
    /// Builds the designation and name indices, resolves every approach's
    /// foreign key (fatal if it dangles), and groups approaches per NEO in
    /// a single pass over the approach collection.
    pub fn build(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
    ) -> Result<Self, BuildError> {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();

        for (index, neo) in neos.iter().enumerate() {
            let id = NeoId::new(index);

            if by_designation
                .insert(neo.designation().to_string(), id)
                .is_some()
            {
                return Err(BuildError::DuplicateDesignation {
                    designation: neo.designation().to_string(),
                });
            }

            // Unnamed NEOs never enter the name index; empty names were
            // already normalized away at entity construction.
            if let Some(name) = neo.name() {
                if let Some(shadowed) = by_name.insert(name.to_string(), id) {
                    warn!(name, shadowed = %shadowed, "duplicate NEO name shadows earlier entry");
                }
            }
        }

        let mut links: Vec<Vec<usize>> = vec![Vec::new(); neos.len()];
        let mut linked = Vec::with_capacity(approaches.len());

        for (position, approach) in approaches.into_iter().enumerate() {
            let Some(&id) = by_designation.get(approach.designation()) else {
                return Err(BuildError::UnknownDesignation {
                    designation: approach.designation().to_string(),
                });
            };

            links[id.index()].push(position);
            linked.push(LinkedApproach::link(approach, id, &neos[id.index()]));
        }

        debug!(
            neos = neos.len(),
            approaches = linked.len(),
            named = by_name.len(),
            "database built"
        );

        Ok(Self {
            neos,
            approaches: linked,
            by_designation,
            by_name,
            links,
        })
    }

    /// Find a NEO by its primary designation; exact match, `None` when
    /// absent.
    #[must_use]
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|id| &self.neos[id.index()])
    }

    /// Find a NEO by its IAU name; exact match. The empty string matches
    /// nothing, and unnamed NEOs are never returned.
    #[must_use]
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        if name.is_empty() {
            return None;
        }

        self.by_name.get(name).map(|id| &self.neos[id.index()])
    }

    /// The NEO a linked approach belongs to.
    #[must_use]
    pub fn neo_of(&self, approach: &LinkedApproach) -> &NearEarthObject {
        &self.neos[approach.neo().index()]
    }

    /// A NEO's approaches, in the order the approach collection listed them.
    /// Empty when the designation is unknown.
    pub fn approaches_of<'a>(
        &'a self,
        designation: &str,
    ) -> impl Iterator<Item = &'a LinkedApproach> {
        self.by_designation
            .get(designation)
            .into_iter()
            .flat_map(|id| self.links[id.index()].iter())
            .map(|&position| &self.approaches[position])
    }

    /// All NEOs, in loader order.
    #[must_use]
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All linked approaches, in loader order.
    #[must_use]
    pub fn approaches(&self) -> &[LinkedApproach] {
        &self.approaches
    }

    /// Lazily scan the approach collection, yielding every approach that
    /// satisfies all present filter categories. Each call starts a fresh
    /// scan; the result is in input order and never materialized up front.
    #[must_use]
    pub fn query(&self, filters: &QueryFilters) -> Query<'_> {
        Query::new(&self.approaches, filters.compile())
    }
}
