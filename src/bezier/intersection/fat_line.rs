/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::geo::*;
use crate::line::*;

///
/// A 'fat line': the region between two lines parallel to the chord of a curve
///
/// Every point of the curve lies within the band `d_min <= signed_distance(p) <= d_max`, which
/// follows from the convex hull property applied to the control points' distances.
///
#[derive(Clone, Copy, Debug)]
pub(crate) struct FatLine {
    // Implicit line coefficients, normalized so that distances are geometric
    a: f64,
    b: f64,
    c: f64,

    d_min: f64,
    d_max: f64,
}

impl FatLine {
    ///
    /// The fat line along the chord of a curve given by its control points
    ///
    /// Returns `None` when the chord has no length (the curve starts and ends at the same
    /// point), in which case there is no direction to thicken.
    ///
    pub fn from_chord(control_points: &[Coord2]) -> Option<FatLine> {
        let chord = (control_points[0], control_points[control_points.len() - 1]);
        let (a, b, c) = line_coefficients_2d(&chord)?;

        Some(Self::from_coefficients(a, b, c, control_points))
    }

    ///
    /// The fat line perpendicular to the chord, through its midpoint
    ///
    /// Clipping against this second band as well handles curves that double back along their
    /// own chord, where the chord band alone rejects nothing.
    ///
    pub fn perpendicular_to_chord(control_points: &[Coord2]) -> Option<FatLine> {
        let start = control_points[0];
        let end = control_points[control_points.len() - 1];
        let direction = (end - start).to_unit_vector();

        if direction.magnitude() == 0.0 {
            return None;
        }

        // Rotating the implicit form a quarter turn: the chord direction becomes the normal
        let (a, b) = (direction.x(), direction.y());
        let mid = (start + end) * 0.5;
        let c = -(a * mid.x() + b * mid.y());

        Some(Self::from_coefficients(a, b, c, control_points))
    }

    fn from_coefficients(a: f64, b: f64, c: f64, control_points: &[Coord2]) -> FatLine {
        let mut d_min = 0.0_f64;
        let mut d_max = 0.0_f64;

        for point in control_points {
            let d = a * point.x() + b * point.y() + c;
            d_min = d_min.min(d);
            d_max = d_max.max(d);
        }

        FatLine { a, b, c, d_min, d_max }
    }

    #[inline]
    pub fn signed_distance(&self, point: &Coord2) -> f64 {
        self.a * point.x() + self.b * point.y() + self.c
    }

    ///
    /// Clips another curve against this fat line
    ///
    /// Returns the t range of the other curve that might lie within the band, or `None` if the
    /// curve is certainly outside it. The result uses the convex hull of the other curve's
    /// distance polygon, so it never discards a true intersection.
    ///
    pub fn clip(&self, other_control_points: &[Coord2]) -> Option<Space1> {
        let n = other_control_points.len();
        debug_assert!(n >= 2);

        let distance_polygon: SmallVec<[Coord2; 8]> = other_control_points
            .iter()
            .enumerate()
            .map(|(i, p)| Coord2((i as f64) / ((n - 1) as f64), self.signed_distance(p)))
            .collect();

        let hull = convex_hull(&distance_polygon);
        band_range(&hull, self.d_min, self.d_max)
    }
}

///
/// The convex hull of a small point set, as a counter-clockwise polygon (monotone chain)
///
pub(crate) fn convex_hull(points: &[Coord2]) -> SmallVec<[Coord2; 16]> {
    let mut sorted: SmallVec<[Coord2; 16]> = points.iter().copied().collect();
    sorted.sort_by(|p1, p2| p1.x().partial_cmp(&p2.x()).unwrap().then(p1.y().partial_cmp(&p2.y()).unwrap()));

    if sorted.len() <= 2 {
        return sorted;
    }

    let turns_right = |o: &Coord2, a: &Coord2, b: &Coord2| (*a - *o).cross(&(*b - *o)) <= 0.0;

    let mut hull: SmallVec<[Coord2; 16]> = SmallVec::new();

    for &point in sorted.iter() {
        while hull.len() >= 2 && turns_right(&hull[hull.len() - 2], &hull[hull.len() - 1], &point) {
            hull.pop();
        }
        hull.push(point);
    }

    let lower_len = hull.len() + 1;
    for &point in sorted.iter().rev() {
        while hull.len() >= lower_len && turns_right(&hull[hull.len() - 2], &hull[hull.len() - 1], &point) {
            hull.pop();
        }
        hull.push(point);
    }

    hull.pop();
    hull
}

///
/// The x range over which a convex polygon intersects the horizontal band `[y_min, y_max]`
///
fn band_range(hull: &[Coord2], y_min: f64, y_max: f64) -> Option<Space1> {
    let mut x_min = f64::MAX;
    let mut x_max = f64::MIN;
    let mut found = false;

    let mut include = |x: f64| {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        found = true;
    };

    for (i, p1) in hull.iter().enumerate() {
        if p1.y() >= y_min && p1.y() <= y_max {
            include(p1.x());
        }

        let p2 = hull[(i + 1) % hull.len()];
        for boundary in [y_min, y_max] {
            let d1 = p1.y() - boundary;
            let d2 = p2.y() - boundary;
            if (d1 < 0.0 && d2 > 0.0) || (d1 > 0.0 && d2 < 0.0) {
                let ratio = d1 / (d1 - d2);
                include(p1.x() + ratio * (p2.x() - p1.x()));
            }
        }
    }

    if found {
        Some(Space1::new(x_min.max(0.0), x_max.min(1.0)))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hull_of_a_square_with_interior_point() {
        let points = [
            Coord2(0.0, 0.0),
            Coord2(1.0, 0.0),
            Coord2(1.0, 1.0),
            Coord2(0.0, 1.0),
            Coord2(0.5, 0.5),
        ];

        let hull = convex_hull(&points);
        assert!(hull.len() == 4);
        assert!(!hull.iter().any(|p| *p == Coord2(0.5, 0.5)));
    }

    #[test]
    fn fat_line_contains_its_curve() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];
        let fat_line = FatLine::from_chord(&points).unwrap();

        for i in 0..=20 {
            let t = (i as f64) / 20.0;
            let point = crate::bezier::de_casteljau(&points, t);
            let d = fat_line.signed_distance(&point);
            assert!(d >= fat_line.d_min - 1e-12 && d <= fat_line.d_max + 1e-12);
        }
    }

    #[test]
    fn clip_keeps_the_crossing() {
        // A curve crossing the x axis at t = 0.5
        let crossing = [Coord2(0.0, -1.0), Coord2(1.0, -1.0), Coord2(2.0, 1.0), Coord2(3.0, 1.0)];
        let axis = [Coord2(-10.0, 0.0), Coord2(10.0, 0.0)];

        let fat_line = FatLine::from_chord(&axis).unwrap();
        let range = fat_line.clip(&crossing).unwrap();

        assert!(range.min() <= 0.5 && range.max() >= 0.5);
        assert!(range.extent() < 1.0);
    }

    #[test]
    fn clip_rejects_a_distant_curve() {
        let far_away = [Coord2(0.0, 5.0), Coord2(1.0, 6.0), Coord2(2.0, 5.0)];
        let axis = [Coord2(-10.0, 0.0), Coord2(10.0, 0.0)];

        let fat_line = FatLine::from_chord(&axis).unwrap();
        assert!(fat_line.clip(&far_away).is_none());
    }

    #[test]
    fn zero_length_chord_has_no_fat_line() {
        let degenerate = [Coord2(1.0, 1.0), Coord2(2.0, 3.0), Coord2(1.0, 1.0)];
        assert!(FatLine::from_chord(&degenerate).is_none());
    }
}
