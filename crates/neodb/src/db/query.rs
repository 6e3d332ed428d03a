//! Module: db::query
//! Responsibility: the lazy AND-composed scan over linked approaches.
//! Does not own: filter compilation; `db::filter` hands over predicates.
//! Boundary: a fresh `Query` per invocation; no cross-call state.

use crate::{db::filter::ApproachPredicate, model::LinkedApproach};

///
/// Query
///
/// One scan over the approach collection. Yields each approach that passes
/// every compiled predicate, one at a time, in input order. With no
/// predicates every approach passes. Exhausting the iterator ends the scan;
/// a new scan requires a new `Query`.
///

pub struct Query<'a> {
    approaches: std::slice::Iter<'a, LinkedApproach>,
    predicates: Vec<ApproachPredicate>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(approaches: &'a [LinkedApproach], predicates: Vec<ApproachPredicate>) -> Self {
        Self {
            approaches: approaches.iter(),
            predicates,
        }
    }
}

impl<'a> Iterator for Query<'a> {
    type Item = &'a LinkedApproach;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            approaches,
            predicates,
        } = self;

        approaches.find(|approach| predicates.iter().all(|p| p.matches(approach)))
    }
}
