//! Module: db::filter
//! Responsibility: the closed filter specification and its compiled
//! per-category predicates.
//! Does not own: the scan itself; `db::query` drives evaluation.
//! Boundary: predicates are pure functions of a single [`LinkedApproach`].

use crate::model::LinkedApproach;
use chrono::NaiveDate;

///
/// ValueRange
///
/// Inclusive `[lo, hi]` bounds over one numeric attribute. Either side may
/// be unset, meaning unconstrained on that side. A NaN attribute value
/// never satisfies a set bound, so unknown diameters fall outside every
/// diameter filter.
///

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueRange {
    pub lo: Option<f64>,
    pub hi: Option<f64>,
}

impl ValueRange {
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.lo.is_none() && self.hi.is_none()
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lo.is_none_or(|lo| value >= lo) && self.hi.is_none_or(|hi| value <= hi)
    }
}

///
/// DateRange
///
/// Inclusive calendar-date window; time-of-day is ignored. An exact-date
/// filter is a window whose two bounds are the same date.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DateRange {
    pub lo: Option<NaiveDate>,
    pub hi: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.lo.is_none() && self.hi.is_none()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lo.is_none_or(|lo| date >= lo) && self.hi.is_none_or(|hi| date <= hi)
    }
}

///
/// QueryFilters
///
/// Closed set of filter categories. Every field is optional; an absent
/// category imposes no constraint, so the default value matches every
/// approach. Built fluently:
///
/// ```text
/// QueryFilters::new().hazardous(true).distance_max(0.2)
/// ```
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryFilters {
    pub date: DateRange,
    pub distance: ValueRange,
    pub velocity: ValueRange,
    pub diameter: ValueRange,
    pub hazardous: Option<bool>,
}

impl QueryFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to a single calendar date (both window bounds equal).
    #[must_use]
    pub const fn on_date(mut self, date: NaiveDate) -> Self {
        self.date.lo = Some(date);
        self.date.hi = Some(date);
        self
    }

    /// Approach date on or after `date`.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.date.lo = Some(date);
        self
    }

    /// Approach date on or before `date`.
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.date.hi = Some(date);
        self
    }

    /// Approach date inside the inclusive `[start, end]` window.
    #[must_use]
    pub const fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    #[must_use]
    pub const fn distance_min(mut self, value: f64) -> Self {
        self.distance.lo = Some(value);
        self
    }

    #[must_use]
    pub const fn distance_max(mut self, value: f64) -> Self {
        self.distance.hi = Some(value);
        self
    }

    #[must_use]
    pub const fn velocity_min(mut self, value: f64) -> Self {
        self.velocity.lo = Some(value);
        self
    }

    #[must_use]
    pub const fn velocity_max(mut self, value: f64) -> Self {
        self.velocity.hi = Some(value);
        self
    }

    #[must_use]
    pub const fn diameter_min(mut self, value: f64) -> Self {
        self.diameter.lo = Some(value);
        self
    }

    #[must_use]
    pub const fn diameter_max(mut self, value: f64) -> Self {
        self.diameter.hi = Some(value);
        self
    }

    #[must_use]
    pub const fn hazardous(mut self, value: bool) -> Self {
        self.hazardous = Some(value);
        self
    }

    /// Compile one predicate per present category. An empty specification
    /// compiles to no predicates at all.
    #[must_use]
    pub fn compile(&self) -> Vec<ApproachPredicate> {
        let mut predicates = Vec::new();

        if !self.date.is_unconstrained() {
            predicates.push(ApproachPredicate::Date(self.date));
        }
        if !self.distance.is_unconstrained() {
            predicates.push(ApproachPredicate::Distance(self.distance));
        }
        if !self.velocity.is_unconstrained() {
            predicates.push(ApproachPredicate::Velocity(self.velocity));
        }
        if !self.diameter.is_unconstrained() {
            predicates.push(ApproachPredicate::Diameter(self.diameter));
        }
        if let Some(expected) = self.hazardous {
            predicates.push(ApproachPredicate::Hazardous(expected));
        }

        predicates
    }
}

///
/// ApproachPredicate
///
/// One compiled filter category, evaluated against a single linked
/// approach. Categories combine with logical AND in the query scan; every
/// variant is pure and side-effect-free, so evaluation order is free.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ApproachPredicate {
    Date(DateRange),
    Distance(ValueRange),
    Velocity(ValueRange),
    Diameter(ValueRange),
    Hazardous(bool),
}

impl ApproachPredicate {
    #[must_use]
    pub fn matches(&self, approach: &LinkedApproach) -> bool {
        match self {
            Self::Date(range) => range.contains(approach.time().date_naive()),
            Self::Distance(range) => range.contains(approach.distance()),
            Self::Velocity(range) => range.contains(approach.velocity()),
            Self::Diameter(range) => range.contains(approach.diameter()),
            Self::Hazardous(expected) => approach.is_hazardous() == *expected,
        }
    }
}
