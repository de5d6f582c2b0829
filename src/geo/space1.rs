/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// A 1-dimensional range, usually a range of parameter values
///
/// The invariant `min <= max` always holds: the constructor orders its arguments. An empty
/// intersection is represented as `None` rather than as a reversed or degenerate range.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Space1 {
    min: f64,
    max: f64,
}

impl Space1 {
    ///
    /// Creates a new range covering both of the supplied values
    ///
    #[inline]
    pub fn new(a: f64, b: f64) -> Space1 {
        if a <= b {
            Space1 { min: a, max: b }
        } else {
            Space1 { min: b, max: a }
        }
    }

    /// The unit range, 0 to 1
    #[inline]
    pub fn unit() -> Space1 {
        Space1 { min: 0.0, max: 1.0 }
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The length of this range
    #[inline]
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// The value half-way along this range
    #[inline]
    pub fn mid(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    ///
    /// Maps a value in [0, 1] to the corresponding value in this range
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }

    ///
    /// The sub-range of this range covered by `t_min..t_max` (both in [0, 1])
    ///
    #[inline]
    pub fn subrange(&self, t_min: f64, t_max: f64) -> Space1 {
        Space1::new(self.point_at_pos(t_min), self.point_at_pos(t_max))
    }

    ///
    /// Returns the overlap between this range and another, if they overlap
    ///
    pub fn intersect(&self, target: &Space1) -> Option<Space1> {
        let min = f64::max(self.min, target.min);
        let max = f64::min(self.max, target.max);

        if min <= max {
            Some(Space1 { min, max })
        } else {
            None
        }
    }

    ///
    /// The smallest range covering both this range and another
    ///
    pub fn union(&self, target: &Space1) -> Space1 {
        Space1 {
            min: f64::min(self.min, target.min),
            max: f64::max(self.max, target.max),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_orders_its_arguments() {
        let range = Space1::new(0.75, 0.25);
        assert!(range.min() == 0.25 && range.max() == 0.75);
    }

    #[test]
    fn intersect_overlapping_ranges() {
        let overlap = Space1::new(0.0, 0.5).intersect(&Space1::new(0.25, 1.0)).unwrap();
        assert!(overlap == Space1::new(0.25, 0.5));
    }

    #[test]
    fn intersect_disjoint_ranges_is_none() {
        assert!(Space1::new(0.0, 0.25).intersect(&Space1::new(0.5, 1.0)).is_none());
    }

    #[test]
    fn touching_ranges_intersect_in_a_point() {
        let touch = Space1::new(0.0, 0.5).intersect(&Space1::new(0.5, 1.0)).unwrap();
        assert!(touch.extent() == 0.0 && touch.min() == 0.5);
    }

    #[test]
    fn union_covers_both_ranges() {
        let union = Space1::new(0.0, 0.25).union(&Space1::new(0.5, 1.0));
        assert!(union == Space1::new(0.0, 1.0));
    }

    #[test]
    fn subrange_remaps_the_unit_interval() {
        let range = Space1::new(2.0, 4.0).subrange(0.25, 0.75);
        assert!(range == Space1::new(2.5, 3.5));
    }
}
