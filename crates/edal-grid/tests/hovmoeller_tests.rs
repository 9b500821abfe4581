//! Tests for Hovmoeller domains, features and strip layout.

use chrono::{Duration, TimeZone, Utc};
use edal_common::{CrsCode, GeoPosition, HorizontalPosition};
use edal_grid::hovmoeller::layout::{pad_values, strip_layout, time_step};
use edal_grid::{Array2D, HovmoellerDomain, HovmoellerFeature, Parameter, ReferenceableAxis, TimeAxis};
use std::collections::BTreeMap;
use test_utils::{create_grid_with_gaps, fixtures, hovmoeller_times};

fn path_points() -> Vec<HorizontalPosition> {
    fixtures::path::LATITUDE_30
        .iter()
        .map(|&(lon, lat)| HorizontalPosition::wgs84(lon, lat))
        .collect()
}

fn reference_domain() -> HovmoellerDomain {
    HovmoellerDomain::from_times(path_points(), "time", hovmoeller_times()).unwrap()
}

// ============================================================================
// Domain construction
// ============================================================================

#[test]
fn test_domain_has_points_times_cells() {
    let domain = reference_domain();
    assert_eq!(domain.number_of_points(), 3);
    assert_eq!(domain.number_of_times(), 21);
    assert_eq!(domain.domain_objects().len(), 3 * 21);
    assert_eq!(domain.crs(), Some(CrsCode::Epsg4326));
    assert_eq!(domain.points(), path_points().as_slice());
}

#[test]
fn test_cells_use_time_axis_bounds() {
    let domain = reference_domain();
    let axis = domain.time_axis().unwrap();
    for ((t, p), cell) in domain.domain_objects().indexed_iter() {
        assert_eq!(cell.position, path_points()[p]);
        assert_eq!(cell.time_extent, axis.coordinate_bounds(t).unwrap());
    }
}

#[test]
fn test_new_matches_from_times() {
    let axis = TimeAxis::new("time", hovmoeller_times()).unwrap();
    let domain = HovmoellerDomain::new(path_points(), axis).unwrap();
    assert_eq!(domain, reference_domain());
}

#[test]
fn test_domain_at_end_of_time_range() {
    let max = chrono::DateTime::<Utc>::MAX_UTC;
    let times = vec![max - Duration::days(2), max - Duration::days(1), max];
    let domain = HovmoellerDomain::from_times(path_points(), "time", times).unwrap();

    assert_eq!(domain.number_of_times(), 3);
    let point = path_points()[0];
    assert!(domain.contains(&GeoPosition::new(point, max)));
    assert!(domain.contains(&GeoPosition::new(point, max - Duration::hours(60))));
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_contains_sample_points_within_time_extent() {
    let domain = reference_domain();
    let times = hovmoeller_times();

    for point in path_points() {
        for t in &times {
            assert!(domain.contains(&GeoPosition::new(point, *t)));
            assert!(domain.contains(&GeoPosition::new(point, *t + Duration::hours(11))));
        }
        // Half a day either side of the series is still in the outer cells
        assert!(domain.contains(&GeoPosition::new(point, times[0] - Duration::hours(12))));
        assert!(domain.contains(&GeoPosition::new(point, times[20] + Duration::hours(12))));
        assert!(!domain.contains(&GeoPosition::new(point, times[20] + Duration::hours(13))));
    }
}

#[test]
fn test_contains_requires_exact_position() {
    let domain = reference_domain();
    let t = hovmoeller_times()[3];

    let between = HorizontalPosition::wgs84(101.0, 30.0);
    assert!(!domain.contains(&GeoPosition::new(between, t)));

    let other_crs = HorizontalPosition::new(100.0, 30.0, CrsCode::Epsg4269);
    assert!(!domain.contains(&GeoPosition::new(other_crs, t)));
}

#[test]
fn test_empty_domain_contains_nothing() {
    let t = Utc.with_ymd_and_hms(1994, 2, 5, 0, 0, 0).unwrap();
    let domains = [
        HovmoellerDomain::from_times(vec![], "time", hovmoeller_times()).unwrap(),
        HovmoellerDomain::from_times(path_points(), "time", vec![]).unwrap(),
        HovmoellerDomain::empty(),
    ];
    for domain in domains {
        assert!(domain.is_empty());
        assert_eq!(domain.domain_objects().len(), 0);
        for point in path_points() {
            assert!(!domain.contains(&GeoPosition::new(point, t)));
        }
    }
}

// ============================================================================
// Features and strip layout
// ============================================================================

#[test]
fn test_feature_layout_end_to_end() {
    let domain = reference_domain();
    let (nt, np) = (domain.number_of_times(), domain.number_of_points());

    // Value at (time t, point p) = p * 1000 + t, with one gap
    let values = Array2D::from_vec(nt, np, create_grid_with_gaps(np, nt, &[(1, 4)])).unwrap();
    let feature = HovmoellerFeature::new(
        "transect-1",
        "SST transect",
        "Sea surface temperature along latitude 30",
        domain,
        BTreeMap::from([("sst".to_string(), Parameter::new("sst", "SST", "K"))]),
        BTreeMap::from([("sst".to_string(), values)]),
    )
    .unwrap();

    let range = feature.value_range("sst").unwrap();
    assert_eq!((range.low(), range.high()), (0.0, 2020.0));
    assert_eq!(*feature.values("sst").unwrap().get(4, 1).unwrap(), None);

    let line = feature.domain().line_string().unwrap();
    let layout = strip_layout(&line);
    assert_eq!(layout.widths, vec![20, 50, 30]);

    let padded = pad_values(feature.values("sst").unwrap(), &layout.widths).unwrap();
    assert_eq!(padded.shape(), [21, 100]);
    assert_eq!(*padded.get(0, 19).unwrap(), Some(0.0));
    assert_eq!(*padded.get(0, 20).unwrap(), Some(1000.0));
    assert_eq!(*padded.get(0, 70).unwrap(), Some(2000.0));

    let axis = feature.domain().time_axis().unwrap();
    assert_eq!(time_step(axis), Duration::days(1));
}
