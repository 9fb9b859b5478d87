use geolayout::graph::Point;
use geolayout::{Error, ProjectionKind, ReferenceLines};

const S: f64 = 1000.0;

fn assert_close(actual: Point, expected: (f64, f64)) {
    let eps = 1e-9;
    assert!(
        (actual.x - expected.0).abs() < eps && (actual.y - expected.1).abs() < eps,
        "expected {expected:?}, got {actual:?}"
    );
}

fn project(kind: ProjectionKind, lat: f64, lon: f64, reference: &ReferenceLines) -> Point {
    kind.project(lat.to_radians(), lon.to_radians(), S, reference)
}

#[test]
fn origin_maps_to_origin_for_every_projection() {
    for kind in ProjectionKind::ALL {
        let reference = ReferenceLines::mean_of([(0.0, 0.0)]).unwrap();
        assert_close(project(kind, 0.0, 0.0, &reference), (0.0, 0.0));
    }
}

#[test]
fn equirectangular_is_linear_in_radians() {
    let reference = ReferenceLines::default();
    for lat in [-90.0, -89.9, -45.5, -1.0, 0.0, 12.25, 60.0, 89.9, 90.0] {
        for lon in [-180.0, -179.9, -90.0, -0.5, 0.0, 33.3, 120.0, 179.9, 180.0] {
            let p = project(ProjectionKind::Equirectangular, lat, lon, &reference);
            assert_eq!(p, Point::new(S * lon.to_radians(), S * lat.to_radians()));
        }
    }
}

#[test]
fn mercator_subtracts_the_reference_meridian() {
    let reference = ReferenceLines {
        lambda0: 20f64.to_radians(),
        phi0: 0.0,
    };
    let p = project(ProjectionKind::Mercator, 45.0, 30.0, &reference);
    assert_close(p, (S * 10f64.to_radians(), S * 0.8813735870195429));
}

#[test]
fn transverse_mercator_uses_the_inverse_gudermannian() {
    let p = project(
        ProjectionKind::TransverseMercator,
        30.0,
        -15.0,
        &ReferenceLines::default(),
    );
    assert_close(p, (S * (-15f64).to_radians(), S * 0.5493061443340549));
}

#[test]
fn transverse_mercator_diverges_at_the_pole() {
    let p = project(
        ProjectionKind::TransverseMercator,
        90.0,
        0.0,
        &ReferenceLines::default(),
    );
    assert!(!p.is_finite());
}

#[test]
fn miller_cylindrical_scales_latitude_by_four_fifths() {
    let p = project(
        ProjectionKind::MillerCylindrical,
        45.0,
        90.0,
        &ReferenceLines::default(),
    );
    assert_close(p, (S * 90f64.to_radians(), S * 0.8428443470335206));
}

#[test]
fn gall_peters_uses_twice_the_sine() {
    let p = project(
        ProjectionKind::GallPeters,
        30.0,
        45.0,
        &ReferenceLines::default(),
    );
    assert_close(p, (S * 45f64.to_radians(), 2.0 * S * 0.5));
}

#[test]
fn sinusoidal_shrinks_longitude_with_latitude() {
    let reference = ReferenceLines {
        lambda0: 10f64.to_radians(),
        phi0: 0.0,
    };
    let p = project(ProjectionKind::Sinusoidal, 60.0, 40.0, &reference);
    assert_close(p, (S * 30f64.to_radians() * 0.5, S * 60f64.to_radians()));
}

#[test]
fn lambert_cylindrical_uses_the_reference_parallel() {
    let reference = ReferenceLines {
        lambda0: 0.0,
        phi0: 60f64.to_radians(),
    };
    let p = project(ProjectionKind::LambertCylindrical, 30.0, 20.0, &reference);
    assert_close(p, (S * 20f64.to_radians() * 0.5, S * 0.5 / 0.5));
}

#[test]
fn winkel_tripel_matches_reference_values() {
    let reference = ReferenceLines::default();
    let on_equator = project(ProjectionKind::WinkelTripel, 0.0, 90.0, &reference);
    assert_close(on_equator, (S * 2.7482357910046886, 0.0));

    let on_meridian = project(ProjectionKind::WinkelTripel, 45.0, 0.0, &reference);
    assert_close(on_meridian, (0.0, S * 1.5929179024440876));
}

#[test]
fn winkel_tripel_is_finite_across_the_globe() {
    let reference = ReferenceLines::default();
    for lat in [-90.0, -45.0, 0.0, 45.0, 90.0] {
        for lon in [-180.0, -90.0, 0.0, 90.0, 180.0] {
            assert!(project(ProjectionKind::WinkelTripel, lat, lon, &reference).is_finite());
        }
    }
}

#[test]
fn reference_lines_are_the_mean_coordinates() {
    assert_eq!(ReferenceLines::mean_of(std::iter::empty()), None);
    let r = ReferenceLines::mean_of([(0.2, 1.0), (0.4, -3.0)]).unwrap();
    assert!((r.phi0 - 0.3).abs() < 1e-12);
    assert!((r.lambda0 + 1.0).abs() < 1e-12);
}

#[test]
fn only_some_projections_need_reference_lines() {
    let meridian: Vec<_> = ProjectionKind::ALL
        .into_iter()
        .filter(|k| k.needs_reference_meridian())
        .collect();
    assert_eq!(
        meridian,
        vec![
            ProjectionKind::Mercator,
            ProjectionKind::Sinusoidal,
            ProjectionKind::LambertCylindrical
        ]
    );
    let parallel: Vec<_> = ProjectionKind::ALL
        .into_iter()
        .filter(|k| k.needs_reference_parallel())
        .collect();
    assert_eq!(parallel, vec![ProjectionKind::LambertCylindrical]);
}

#[test]
fn names_round_trip() {
    for kind in ProjectionKind::ALL {
        assert_eq!(ProjectionKind::from_name(kind.name()), Some(kind));
        assert_eq!(kind.to_string().parse::<ProjectionKind>().unwrap(), kind);
    }
    assert_eq!(ProjectionKind::names()[3], "Gall–Peters");
}

#[test]
fn name_lookup_ignores_case_and_dash_style() {
    assert_eq!(
        ProjectionKind::from_name("gall-peters"),
        Some(ProjectionKind::GallPeters)
    );
    assert_eq!(
        ProjectionKind::from_name(" WINKEL TRIPEL "),
        Some(ProjectionKind::WinkelTripel)
    );
    assert_eq!(ProjectionKind::from_name("Robinson"), None);
}

#[test]
fn strict_parsing_rejects_unknown_names() {
    let err = "Robinson".parse::<ProjectionKind>().unwrap_err();
    assert!(matches!(err, Error::UnknownProjection { name } if name == "Robinson"));
}
