/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::sbasis::*;

use super::path::*;

///
/// Which way a closed path is wound
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathDirection {
    /// Positive signed area (anticlockwise in a y-up coordinate system)
    Anticlockwise,

    /// Negative signed area
    Clockwise,
}

///
/// The signed area enclosed by a closed path, by Green's theorem
///
/// `area = 1/2 * integral of (x dy - y dx)` around the contour. Anticlockwise contours have
/// positive area; a hole wound the other way contributes negatively to its path vector's total.
///
pub fn path_area(path: &Path) -> Result<f64, GeomError> {
    let mut area = 0.0;

    for segment in path.segments() {
        let (x, y) = segment.to_sbasis()?;
        let integrand = &multiply(&x, &derivative(&y))? - &multiply(&y, &derivative(&x))?;
        let antiderivative = integral(&integrand);

        area += 0.5 * (antiderivative.point_at_pos(1.0) - antiderivative.point_at_pos(0.0));
    }

    Ok(area)
}

///
/// The total signed area of a path vector (holes subtract)
///
pub fn path_vector_area(paths: &PathVector) -> Result<f64, GeomError> {
    let mut total = 0.0;
    for path in paths.paths() {
        total += path_area(path)?;
    }
    Ok(total)
}

///
/// The direction a closed path is wound in
///
/// A path enclosing no area at all has no direction.
///
pub fn path_direction(path: &Path) -> Result<PathDirection, GeomError> {
    let area = path_area(path)?;

    if area == 0.0 {
        return Err(GeomError::ZeroLengthCurve);
    }

    if area > 0.0 {
        Ok(PathDirection::Anticlockwise)
    } else {
        Ok(PathDirection::Clockwise)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo::*;

    #[test]
    fn area_of_a_square() {
        let square = PathBuilder::start(Coord2(0.0, 0.0))
            .line_to(Coord2(2.0, 0.0))
            .line_to(Coord2(2.0, 2.0))
            .line_to(Coord2(0.0, 2.0))
            .build_closed()
            .unwrap();

        assert!((path_area(&square).unwrap() - 4.0).abs() < 1e-10);
        assert!(path_direction(&square).unwrap() == PathDirection::Anticlockwise);
    }

    #[test]
    fn reversed_square_has_negative_area() {
        let square = PathBuilder::start(Coord2(0.0, 0.0))
            .line_to(Coord2(0.0, 2.0))
            .line_to(Coord2(2.0, 2.0))
            .line_to(Coord2(2.0, 0.0))
            .build_closed()
            .unwrap();

        assert!((path_area(&square).unwrap() + 4.0).abs() < 1e-10);
        assert!(path_direction(&square).unwrap() == PathDirection::Clockwise);
    }

    #[test]
    fn area_of_a_circle() {
        use crate::arc::Circle;
        use std::f64::consts::PI;

        let circle = Circle::new(Coord2(3.0, -2.0), 1.5).unwrap();
        let area = path_area(&circle.to_path().unwrap()).unwrap();

        assert!((area - PI * 1.5 * 1.5).abs() < 1e-6);
    }

    #[test]
    fn holes_subtract_from_the_total() {
        let outer = PathBuilder::start(Coord2(0.0, 0.0))
            .line_to(Coord2(4.0, 0.0))
            .line_to(Coord2(4.0, 4.0))
            .line_to(Coord2(0.0, 4.0))
            .build_closed()
            .unwrap();

        let hole = PathBuilder::start(Coord2(1.0, 1.0))
            .line_to(Coord2(1.0, 3.0))
            .line_to(Coord2(3.0, 3.0))
            .line_to(Coord2(3.0, 1.0))
            .build_closed()
            .unwrap();

        let paths = PathVector::from_paths([outer, hole]);
        assert!((path_vector_area(&paths).unwrap() - 12.0).abs() < 1e-10);
    }
}
