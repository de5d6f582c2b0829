/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate flo_geom;

use flo_geom::bezier::{fit_curve, offset};
use flo_geom::geo::*;
use flo_geom::segment::*;

use std::f64::consts::PI;

///
/// The distance from a point to the nearest of many sampled points on a list of curves
///
fn distance_to_curves(point: &Coord2, curves: &[CubicBezier]) -> f64 {
    let mut nearest = f64::MAX;
    for curve in curves {
        let segment = Segment::Cubic(curve.clone());
        for i in 0..=100 {
            let t = (i as f64) / 100.0;
            nearest = nearest.min(point.distance_to(&segment.point_at_pos(t)));
        }
    }
    nearest
}

#[test]
fn fits_points_sampled_from_a_cubic() {
    let source = Segment::Cubic(CubicBezier::new(
        Coord2(10.0, 10.0),
        Coord2(30.0, 40.0),
        Coord2(70.0, 40.0),
        Coord2(90.0, 10.0),
    ));

    let points: Vec<Coord2> = (0..=30).map(|i| source.point_at_pos((i as f64) / 30.0)).collect();
    let fitted = fit_curve(&points, 0.5).unwrap();

    for point in &points {
        assert!(distance_to_curves(point, &fitted) < 0.5);
    }

    assert!(fitted[0].points[0].distance_to(&points[0]) < 1e-9);
    assert!(fitted[fitted.len() - 1].points[3].distance_to(&points[points.len() - 1]) < 1e-9);
}

#[test]
fn fits_a_sampled_semicircle() {
    let points: Vec<Coord2> = (0..=40)
        .map(|i| {
            let angle = PI * (i as f64) / 40.0;
            Coord2(angle.cos() * 50.0, angle.sin() * 50.0)
        })
        .collect();

    let fitted = fit_curve(&points, 0.25).unwrap();

    // A semicircle needs more than one cubic at this tolerance
    assert!(fitted.len() >= 2);

    for point in &points {
        assert!(distance_to_curves(point, &fitted) < 0.25);
    }
}

#[test]
fn too_few_points_do_not_fit() {
    assert!(fit_curve(&[Coord2(0.0, 0.0)], 0.1).is_none());
    assert!(fit_curve(&[], 0.1).is_none());
}

#[test]
fn offset_curve_keeps_its_distance() {
    let source = Segment::Cubic(CubicBezier::new(
        Coord2(0.0, 0.0),
        Coord2(10.0, 20.0),
        Coord2(30.0, 20.0),
        Coord2(40.0, 0.0),
    ));

    let offset_curves = offset(&source, 3.0, 3.0, 0.1).unwrap();
    assert!(!offset_curves.is_empty());

    // Each offset point should be close to 3 units from the source curve
    for curve in &offset_curves {
        let segment = Segment::Cubic(curve.clone());
        for i in 1..10 {
            let t = (i as f64) / 10.0;
            let point = segment.point_at_pos(t);

            let mut nearest = f64::MAX;
            for j in 0..=200 {
                let s = (j as f64) / 200.0;
                nearest = nearest.min(point.distance_to(&source.point_at_pos(s)));
            }

            assert!((nearest - 3.0).abs() < 0.3, "offset distance {}", nearest);
        }
    }
}

#[test]
fn tapered_offset_interpolates_the_distance() {
    let source = Segment::line(Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    let offset_curves = offset(&source, 1.0, 3.0, 0.05).unwrap();

    let start = offset_curves[0].points[0];
    let end = offset_curves[offset_curves.len() - 1].points[3];

    assert!((start.distance_to(&Coord2(0.0, 0.0)) - 1.0).abs() < 0.1);
    assert!((end.distance_to(&Coord2(10.0, 0.0)) - 3.0).abs() < 0.1);
}

#[test]
fn offset_of_a_zero_length_curve_fails() {
    let degenerate = Segment::line(Coord2(1.0, 1.0), Coord2(1.0, 1.0));
    assert!(offset(&degenerate, 1.0, 1.0, 0.1).is_err());
}
