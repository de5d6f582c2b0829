/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

///
/// A linear function on [0, 1], stored by its values at 0 and 1
///
/// These are the coefficients of the S-basis: an `SBasis` is a list of `Linear` values.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Linear {
    /// The value at t = 0
    pub a0: f64,

    /// The value at t = 1
    pub a1: f64,
}

impl Linear {
    #[inline]
    pub fn new(a0: f64, a1: f64) -> Linear {
        Linear { a0, a1 }
    }

    ///
    /// A linear function with the same value everywhere
    ///
    #[inline]
    pub fn constant(value: f64) -> Linear {
        Linear { a0: value, a1: value }
    }

    #[inline]
    pub fn point_at_pos(&self, t: f64) -> f64 {
        self.a0 * (1.0 - t) + self.a1 * t
    }

    /// The difference between the endpoint values (the 'tri' component)
    #[inline]
    pub fn tri(&self) -> f64 {
        self.a1 - self.a0
    }

    /// The average of the endpoint values (the 'hat' component)
    #[inline]
    pub fn hat(&self) -> f64 {
        (self.a0 + self.a1) * 0.5
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.a0 == 0.0 && self.a1 == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a0.is_finite() && self.a1.is_finite()
    }

    /// This function with the parameter direction reversed
    #[inline]
    pub fn reverse(&self) -> Linear {
        Linear { a0: self.a1, a1: self.a0 }
    }
}

impl Add<Linear> for Linear {
    type Output = Linear;

    #[inline]
    fn add(self, rhs: Linear) -> Linear {
        Linear::new(self.a0 + rhs.a0, self.a1 + rhs.a1)
    }
}

impl Sub<Linear> for Linear {
    type Output = Linear;

    #[inline]
    fn sub(self, rhs: Linear) -> Linear {
        Linear::new(self.a0 - rhs.a0, self.a1 - rhs.a1)
    }
}

impl Mul<f64> for Linear {
    type Output = Linear;

    #[inline]
    fn mul(self, rhs: f64) -> Linear {
        Linear::new(self.a0 * rhs, self.a1 * rhs)
    }
}

impl Neg for Linear {
    type Output = Linear;

    #[inline]
    fn neg(self) -> Linear {
        Linear::new(-self.a0, -self.a1)
    }
}
