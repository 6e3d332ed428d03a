use crate::{
    db::{BuildError, NeoDatabase, QueryFilters},
    model::{CloseApproach, NearEarthObject},
    test_fixtures::{APOPHIS_DES, UNNAMED_DES, fixture_db, fixture_neos},
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ------------------------------------------------------------------
// Construction & linking
// ------------------------------------------------------------------

#[test]
fn every_approach_links_to_its_neo() {
    let db = fixture_db();

    for approach in db.approaches() {
        let neo = db.neo_of(approach);
        assert_eq!(neo.designation(), approach.designation());
    }
}

#[test]
fn denormalized_fields_match_the_owner() {
    let db = fixture_db();

    for approach in db.approaches() {
        let neo = db.neo_of(approach);
        assert_eq!(approach.name(), neo.name());
        assert_eq!(approach.is_hazardous(), neo.is_hazardous());
        assert!(
            approach.diameter() == neo.diameter()
                || (approach.diameter().is_nan() && neo.diameter().is_nan())
        );
    }
}

#[test]
fn approaches_of_groups_exactly_by_designation_in_order() {
    let db = fixture_db();

    let apophis: Vec<_> = db.approaches_of(APOPHIS_DES).collect();
    assert_eq!(apophis.len(), 1);
    assert_eq!(apophis[0].distance(), 0.1);

    let unnamed: Vec<_> = db.approaches_of(UNNAMED_DES).collect();
    assert_eq!(unnamed.len(), 1);
    assert_eq!(unnamed[0].distance(), 0.2);
}

#[test]
fn approaches_of_preserves_input_order_for_many() {
    let neos = vec![NearEarthObject::new("2000 AB", None, f64::NAN, false)];
    let approaches = vec![
        CloseApproach::new("2000 AB", "2020-Jan-01 00:00", Some(0.3), Some(1.0)).unwrap(),
        CloseApproach::new("2000 AB", "2019-Dec-31 00:00", Some(0.1), Some(2.0)).unwrap(),
        CloseApproach::new("2000 AB", "2021-Feb-02 00:00", Some(0.2), Some(3.0)).unwrap(),
    ];
    let db = NeoDatabase::build(neos, approaches).unwrap();

    let distances: Vec<_> = db.approaches_of("2000 AB").map(|a| a.distance()).collect();
    assert_eq!(distances, vec![0.3, 0.1, 0.2]);
}

#[test]
fn unknown_designation_aborts_the_build() {
    let approaches =
        vec![CloseApproach::new("9999 ZZ", "2020-Jan-01 00:00", None, None).unwrap()];
    let err = NeoDatabase::build(fixture_neos(), approaches).unwrap_err();

    assert!(matches!(
        err,
        BuildError::UnknownDesignation { designation } if designation == "9999 ZZ"
    ));
}

#[test]
fn duplicate_designation_is_rejected() {
    let neos = vec![
        NearEarthObject::new("2000 AB", None, 1.0, false),
        NearEarthObject::new("2000 AB", Some("Twin".to_string()), 2.0, true),
    ];
    let err = NeoDatabase::build(neos, Vec::new()).unwrap_err();

    assert!(matches!(
        err,
        BuildError::DuplicateDesignation { designation } if designation == "2000 AB"
    ));
}

#[test]
fn empty_collections_build_an_empty_database() {
    let db = NeoDatabase::build(Vec::new(), Vec::new()).unwrap();
    assert!(db.neos().is_empty());
    assert!(db.approaches().is_empty());
    assert_eq!(db.query(&QueryFilters::new()).count(), 0);
}

// ------------------------------------------------------------------
// Point lookups
// ------------------------------------------------------------------

#[test]
fn designation_lookup_is_exact() {
    let db = fixture_db();

    assert!(db.get_neo_by_designation(APOPHIS_DES).is_some());
    assert!(db.get_neo_by_designation("2000 ab").is_none());
    assert!(db.get_neo_by_designation(" 2000 AB").is_none());
    assert!(db.get_neo_by_designation("missing").is_none());
}

#[test]
fn name_lookup_is_exact() {
    let db = fixture_db();

    let neo = db.get_neo_by_name("Apophis").unwrap();
    assert_eq!(neo.designation(), APOPHIS_DES);
    assert!(db.get_neo_by_name("apophis").is_none());
}

#[test]
fn empty_name_never_matches() {
    let db = fixture_db();
    assert!(db.get_neo_by_name("").is_none());
}

#[test]
fn unnamed_neo_is_absent_from_the_name_index() {
    let db = fixture_db();

    // The unnamed NEO exists by designation but matches no name at all.
    assert!(db.get_neo_by_designation(UNNAMED_DES).is_some());
    for candidate in ["", "None", UNNAMED_DES] {
        assert!(db.get_neo_by_name(candidate).is_none());
    }
}

// ------------------------------------------------------------------
// Query composition
// ------------------------------------------------------------------

#[test]
fn no_filters_yields_everything_in_input_order() {
    let db = fixture_db();

    let all: Vec<_> = db.query(&QueryFilters::new()).collect();
    assert_eq!(all.len(), db.approaches().len());
    assert_eq!(all[0].designation(), APOPHIS_DES);
    assert_eq!(all[1].designation(), UNNAMED_DES);
}

#[test]
fn each_query_call_starts_a_fresh_scan() {
    let db = fixture_db();
    let filters = QueryFilters::new();

    let mut first = db.query(&filters);
    assert_eq!(first.by_ref().count(), 2);
    assert!(first.next().is_none());

    // A consumed scan stays consumed; a new call scans from the start.
    assert_eq!(db.query(&filters).count(), 2);
}

#[test]
fn hazardous_filter_selects_only_the_hazardous_owner() {
    let db = fixture_db();

    let hits: Vec<_> = db.query(&QueryFilters::new().hazardous(true)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), APOPHIS_DES);

    let misses: Vec<_> = db.query(&QueryFilters::new().hazardous(false)).collect();
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0].designation(), UNNAMED_DES);
}

#[test]
fn distance_ceiling_excludes_farther_approaches() {
    let db = fixture_db();

    let hits: Vec<_> = db.query(&QueryFilters::new().distance_max(0.15)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), APOPHIS_DES);
}

#[test]
fn distance_floor_and_ceiling_compose_inclusively() {
    let db = fixture_db();

    let filters = QueryFilters::new().distance_min(0.1).distance_max(0.2);
    assert_eq!(db.query(&filters).count(), 2);
}

#[test]
fn velocity_bounds_select_by_speed() {
    let db = fixture_db();

    let fast: Vec<_> = db.query(&QueryFilters::new().velocity_min(5.5)).collect();
    assert_eq!(fast.len(), 1);
    assert_eq!(fast[0].designation(), UNNAMED_DES);
}

#[test]
fn mutually_exclusive_bounds_yield_nothing() {
    let db = fixture_db();

    let impossible = QueryFilters::new().distance_min(10.0);
    assert_eq!(db.query(&impossible).count(), 0);

    let inverted = QueryFilters::new().velocity_min(6.0).velocity_max(5.0);
    assert_eq!(db.query(&inverted).count(), 0);
}

#[test]
fn unknown_diameter_never_matches_a_diameter_bound() {
    let db = fixture_db();

    // Only Apophis has a known diameter; any diameter bound, however wide,
    // excludes the NaN-diameter NEO's approaches.
    let wide = QueryFilters::new().diameter_min(0.0);
    let hits: Vec<_> = db.query(&wide).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), APOPHIS_DES);
}

#[test]
fn exact_date_matches_the_date_portion_only() {
    let db = fixture_db();

    // The Apophis approach is at 12:30; the exact-date filter ignores
    // time-of-day.
    let filters = QueryFilters::new().on_date(date(2020, 1, 1));
    let hits: Vec<_> = db.query(&filters).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), APOPHIS_DES);
}

#[test]
fn date_window_is_inclusive_on_both_ends() {
    let db = fixture_db();

    let filters = QueryFilters::new().between(date(2020, 1, 1), date(2021, 6, 15));
    assert_eq!(db.query(&filters).count(), 2);

    let filters = QueryFilters::new().start_date(date(2020, 1, 2));
    let hits: Vec<_> = db.query(&filters).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), UNNAMED_DES);

    let filters = QueryFilters::new().end_date(date(2020, 12, 31));
    let hits: Vec<_> = db.query(&filters).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), APOPHIS_DES);
}

#[test]
fn heterogeneous_filters_and_together() {
    let db = fixture_db();

    let filters = QueryFilters::new()
        .start_date(date(2019, 1, 1))
        .distance_max(0.3)
        .velocity_min(4.0)
        .hazardous(true);
    let hits: Vec<_> = db.query(&filters).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].designation(), APOPHIS_DES);

    // Flipping one category flips which approach survives the conjunction.
    let flipped = QueryFilters::new()
        .start_date(date(2019, 1, 1))
        .distance_max(0.3)
        .velocity_min(4.0)
        .hazardous(false);
    let survivors: Vec<_> = db.query(&flipped).collect();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].designation(), UNNAMED_DES);
}
