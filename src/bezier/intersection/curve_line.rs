/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;
use crate::line::*;
use crate::sbasis::*;
use crate::segment::*;

use super::super::roots::*;

///
/// Finds where a curve segment crosses an infinite line
///
/// Returns pairs of (t on the curve, position along the line), where the line position is 0 at
/// the line's first point and 1 at its second, extending beyond that range where the crossing
/// lies outside the given span. Substitutes the curve into the line's implicit equation and
/// finds the roots of the resulting scalar function.
///
pub fn curve_intersects_line<L>(curve: &Segment, line: &L, accuracy: f64) -> Result<Vec<(f64, f64)>, GeomError>
where
    L: Line<Point = Coord2>,
{
    let (a, b, c) = match line_coefficients_2d(line) {
        Some(coefficients) => coefficients,
        None => return Ok(vec![]),
    };

    let (x, y) = curve.to_sbasis()?;
    let distance = &(&(&x * a) + &(&y * b)) + &SBasis::constant(c);

    let roots = match find_roots(&distance, accuracy, RootStrategy::BezierClip) {
        Ok(roots) => roots,
        // A curve lying exactly along the line crosses it everywhere; report nothing here and
        // leave overlap handling to the caller
        Err(GeomError::IndeterminateRoots) => return Ok(vec![]),
        Err(err) => return Err(err),
    };

    let (start, end) = line.points();
    let direction = end - start;
    let length_squared = direction.dot(&direction);

    let mut crossings = vec![];
    for t in roots {
        let t = refine_against_line(curve, a, b, c, t, accuracy);
        let point = curve.point_at_pos(t);
        let line_pos = (point - start).dot(&direction) / length_squared;
        crossings.push((t, line_pos));
    }

    Ok(crossings)
}

///
/// A Newton step or two against the analytic curve, for segments whose S-basis form is an
/// approximation
///
fn refine_against_line(curve: &Segment, a: f64, b: f64, c: f64, t: f64, accuracy: f64) -> f64 {
    let mut t = t;

    for _ in 0..4 {
        let point = curve.point_at_pos(t);
        let distance = a * point.x() + b * point.y() + c;
        if distance.abs() <= accuracy * 0.01 {
            break;
        }

        let derivative = curve.derivative_at_pos(t);
        let slope = a * derivative.x() + b * derivative.y();
        if 1.0 + slope == 1.0 {
            break;
        }

        t = (t - distance / slope).clamp(0.0, 1.0);
    }

    t
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arc::EllipticalArc;
    use crate::segment::CubicBezier;
    use std::f64::consts::PI;

    #[test]
    fn arch_crosses_horizontal_line() {
        let arch = Segment::Cubic(CubicBezier::new(
            Coord2(0.0, 0.0),
            Coord2(1.0, 2.0),
            Coord2(3.0, 2.0),
            Coord2(4.0, 0.0),
        ));
        let line = (Coord2(0.0, 1.0), Coord2(4.0, 1.0));

        let crossings = curve_intersects_line(&arch, &line, 1e-8).unwrap();
        assert!(crossings.len() == 2, "{:?}", crossings);

        for (t, line_pos) in crossings {
            let point = arch.point_at_pos(t);
            assert!((point.y() - 1.0).abs() < 1e-6);
            assert!((point.x() / 4.0 - line_pos).abs() < 1e-6);
        }
    }

    #[test]
    fn circle_crosses_diameter_line() {
        let arc = Segment::Arc(EllipticalArc::new(Coord2(0.0, 0.0), (1.0, 1.0), 0.0, -PI / 2.0, PI).unwrap());
        let line = (Coord2(-2.0, 0.0), Coord2(2.0, 0.0));

        let crossings = curve_intersects_line(&arc, &line, 1e-8).unwrap();
        assert!(crossings.len() == 1, "{:?}", crossings);

        let (t, _) = crossings[0];
        assert!(arc.point_at_pos(t).distance_to(&Coord2(1.0, 0.0)) < 1e-7);
    }

    #[test]
    fn missed_line_gives_no_crossings() {
        let arch = Segment::Cubic(CubicBezier::new(
            Coord2(0.0, 0.0),
            Coord2(1.0, 2.0),
            Coord2(3.0, 2.0),
            Coord2(4.0, 0.0),
        ));
        let line = (Coord2(0.0, 3.0), Coord2(4.0, 3.0));

        assert!(curve_intersects_line(&arch, &line, 1e-8).unwrap().is_empty());
    }

    #[test]
    fn degenerate_line_gives_no_crossings() {
        let arch = Segment::line(Coord2(0.0, 0.0), Coord2(1.0, 1.0));
        let line = (Coord2(0.5, 0.5), Coord2(0.5, 0.5));

        assert!(curve_intersects_line(&arch, &line, 1e-8).unwrap().is_empty());
    }
}
