/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate flo_geom;

use flo_geom::arc::*;
use flo_geom::geo::*;
use flo_geom::path::*;
use flo_geom::GeomError;

use std::f64::consts::PI;

#[test]
fn endpoint_form_matches_the_svg_example() {
    // A quarter turn of the unit circle from (1, 0) to (0, 1), sweeping anticlockwise
    let arc = EllipticalArc::from_endpoints(Coord2(1.0, 0.0), (1.0, 1.0), 0.0, false, true, Coord2(0.0, 1.0)).unwrap();

    assert!(arc.center().distance_to(&Coord2(0.0, 0.0)) < 1e-10);
    assert!((arc.sweep_angle() - PI / 2.0).abs() < 1e-10);
    assert!(arc.point_at_pos(0.0).distance_to(&Coord2(1.0, 0.0)) < 1e-10);
    assert!(arc.point_at_pos(1.0).distance_to(&Coord2(0.0, 1.0)) < 1e-10);
}

#[test]
fn large_arc_flag_selects_the_long_way_round() {
    let small = EllipticalArc::from_endpoints(Coord2(1.0, 0.0), (1.0, 1.0), 0.0, false, true, Coord2(0.0, 1.0)).unwrap();
    let large = EllipticalArc::from_endpoints(Coord2(1.0, 0.0), (1.0, 1.0), 0.0, true, true, Coord2(0.0, 1.0)).unwrap();

    assert!(small.sweep_angle().abs() < PI);
    assert!(large.sweep_angle().abs() > PI);

    // Same endpoints either way
    assert!(large.point_at_pos(1.0).distance_to(&Coord2(0.0, 1.0)) < 1e-10);
}

#[test]
fn undersized_radii_scale_up_to_reach_the_endpoints() {
    // Radius 1 cannot span points 4 apart; the conversion scales the radii to fit
    let arc = EllipticalArc::from_endpoints(Coord2(0.0, 0.0), (1.0, 1.0), 0.0, false, true, Coord2(4.0, 0.0)).unwrap();

    assert!(arc.point_at_pos(0.0).distance_to(&Coord2(0.0, 0.0)) < 1e-9);
    assert!(arc.point_at_pos(1.0).distance_to(&Coord2(4.0, 0.0)) < 1e-9);
    assert!(arc.radii().0 >= 2.0 - 1e-9);
}

#[test]
fn degenerate_radii_are_rejected() {
    assert!(matches!(
        EllipticalArc::new(Coord2(0.0, 0.0), (0.0, 1.0), 0.0, 0.0, PI),
        Err(GeomError::DegenerateArc)
    ));
    assert!(matches!(
        EllipticalArc::new(Coord2(0.0, 0.0), (f64::NAN, 1.0), 0.0, 0.0, PI),
        Err(GeomError::DegenerateArc)
    ));
}

#[test]
fn subdivision_agrees_with_the_whole_arc() {
    let arc = EllipticalArc::new(Coord2(2.0, 1.0), (3.0, 1.5), 0.4, 0.3, 2.0).unwrap();
    let (left, right) = arc.subdivide(0.25);

    for i in 0..=10 {
        let t = (i as f64) / 10.0;
        assert!(left.point_at_pos(t).distance_to(&arc.point_at_pos(t * 0.25)) < 1e-10);
        assert!(right.point_at_pos(t).distance_to(&arc.point_at_pos(0.25 + t * 0.75)) < 1e-10);
    }
}

#[test]
fn reverse_traces_the_same_ellipse_backwards() {
    let arc = EllipticalArc::new(Coord2(0.0, 0.0), (2.0, 1.0), 0.2, 0.5, 1.5).unwrap();
    let reversed = arc.reverse();

    for i in 0..=10 {
        let t = (i as f64) / 10.0;
        assert!(reversed.point_at_pos(t).distance_to(&arc.point_at_pos(1.0 - t)) < 1e-10);
    }
}

#[test]
fn sbasis_approximation_is_accurate() {
    let arc = EllipticalArc::new(Coord2(1.0, -1.0), (2.0, 1.0), 0.3, 0.2, PI).unwrap();
    let (x, y) = arc.to_sbasis().unwrap();

    for i in 0..=50 {
        let t = (i as f64) / 50.0;
        let exact = arc.point_at_pos(t);
        let approx = Coord2(x.point_at_pos(t), y.point_at_pos(t));
        assert!(exact.distance_to(&approx) < 1e-7, "error {} at t={}", exact.distance_to(&approx), t);
    }
}

#[test]
fn cubic_spans_stay_close_to_the_arc() {
    let arc = EllipticalArc::new(Coord2(0.0, 0.0), (1.0, 1.0), 0.0, 0.0, 2.0 * PI).unwrap();
    let spans = arc.to_cubic_spans();

    assert!(spans.len() == 4);

    for (points, range) in spans {
        let cubic = flo_geom::segment::CubicBezier::new(points[0], points[1], points[2], points[3]);
        let segment = flo_geom::segment::Segment::Cubic(cubic);

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            let on_arc = arc.point_at_pos(range.point_at_pos(t));
            // The quarter-circle cubic approximation is good to about 3 parts in 10^4
            assert!(segment.point_at_pos(t).distance_to(&on_arc) < 5e-4);
        }
    }
}

#[test]
fn circle_to_path_is_closed_and_round() {
    let circle = Circle::new(Coord2(5.0, 5.0), 2.0).unwrap();
    let path = circle.to_path().unwrap();

    assert!(path.is_closed());
    assert!(path.segments().len() == 4);

    let paths = PathVector::from_paths([path.clone()]);
    assert!((path_area(&path).unwrap().abs() - PI * 4.0).abs() < 1e-6);
    assert!(winding(&paths, &Coord2(5.0, 5.0)) != 0);
    assert!(winding(&paths, &Coord2(8.0, 5.0)) == 0);

    for segment in path.segments() {
        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            let point = segment.point_at_pos(t);
            assert!((point.distance_to(&Coord2(5.0, 5.0)) - 2.0).abs() < 1e-10);
        }
    }
}

#[test]
fn bounding_box_of_a_rotated_ellipse_arc() {
    // A full unrotated ellipse: the box is exactly the radii
    let arc = EllipticalArc::new(Coord2(0.0, 0.0), (3.0, 1.0), 0.0, 0.0, 2.0 * PI).unwrap();
    let bounds: Bounds<Coord2> = arc.bounding_box();

    assert!(bounds.min().distance_to(&Coord2(-3.0, -1.0)) < 1e-9);
    assert!(bounds.max().distance_to(&Coord2(3.0, 1.0)) < 1e-9);
}
