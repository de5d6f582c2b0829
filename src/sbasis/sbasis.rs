/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::{smallvec, SmallVec};

use super::linear::*;

///
/// A scalar function on [0, 1] in the symmetric power basis
///
/// `f(t) = sum_k coeffs[k].point_at_pos(t) * (t*(1-t))^k`
///
/// An empty coefficient list is identically zero.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SBasis {
    pub(crate) coeffs: SmallVec<[Linear; 4]>,
}

impl SBasis {
    ///
    /// The function that is zero everywhere
    ///
    pub fn zero() -> SBasis {
        SBasis { coeffs: smallvec![] }
    }

    ///
    /// The constant function with the specified value
    ///
    pub fn constant(value: f64) -> SBasis {
        SBasis {
            coeffs: smallvec![Linear::constant(value)],
        }
    }

    ///
    /// Creates the S-basis representation of a linear function
    ///
    pub fn from_linear(linear: Linear) -> SBasis {
        SBasis {
            coeffs: smallvec![linear],
        }
    }

    ///
    /// Creates an S-basis function directly from its coefficients
    ///
    pub fn from_coefficients(coeffs: impl IntoIterator<Item = Linear>) -> SBasis {
        SBasis {
            coeffs: coeffs.into_iter().collect(),
        }
    }

    ///
    /// The number of coefficients (the degree in `s = t*(1-t)` plus one, or 0 for the zero function)
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    #[inline]
    pub fn coefficient(&self, index: usize) -> Linear {
        self.coeffs.get(index).copied().unwrap_or_default()
    }

    #[inline]
    pub fn coefficients(&self) -> impl Iterator<Item = Linear> + '_ {
        self.coeffs.iter().copied()
    }

    ///
    /// True if every coefficient is exactly zero
    ///
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    ///
    /// Evaluates this function at the specified position
    ///
    pub fn point_at_pos(&self, t: f64) -> f64 {
        let s = t * (1.0 - t);

        let mut p0 = 0.0;
        let mut p1 = 0.0;
        let mut sk = 1.0;

        for coeff in self.coeffs.iter() {
            p0 += sk * coeff.a0;
            p1 += sk * coeff.a1;
            sk *= s;
        }

        (1.0 - t) * p0 + t * p1
    }

    ///
    /// Removes trailing zero coefficients
    ///
    pub fn normalize(&mut self) {
        while let Some(last) = self.coeffs.last() {
            if last.is_zero() {
                self.coeffs.pop();
            } else {
                break;
            }
        }
    }

    ///
    /// Discards all coefficients from index `k` onwards
    ///
    pub fn truncate(&mut self, k: usize) {
        self.coeffs.truncate(k);
    }

    ///
    /// This function with the parameter direction reversed (`f(1-t)`)
    ///
    pub fn reverse(&self) -> SBasis {
        SBasis {
            coeffs: self.coeffs.iter().map(|c| c.reverse()).collect(),
        }
    }

    ///
    /// Bounds the error made by discarding the coefficients from index `tail` onwards
    ///
    pub fn tail_error(&self, tail: usize) -> f64 {
        if tail >= self.coeffs.len() {
            return 0.0;
        }

        let (lo, hi) = bounds_from(self, tail);
        f64::max(lo.abs(), hi.abs()) * 0.25_f64.powi(tail as i32)
    }

    ///
    /// Returns `(lo, hi)` such that `lo <= f(t) <= hi` for every t in [0, 1]
    ///
    /// This is a fast, conservative estimate rather than a tight bound.
    ///
    pub fn bounds(&self) -> (f64, f64) {
        bounds_from(self, 0)
    }
}

///
/// Bounds the partial function `sum_{k >= order} coeffs[k] * s^(k-order)` over [0, 1]
///
/// Works down from the highest coefficient, at each step folding the accumulated bound through
/// the quadratic envelope of `linear + bound * t * (1-t)`.
///
pub(crate) fn bounds_from(sb: &SBasis, order: usize) -> (f64, f64) {
    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;

    for index in (order..sb.coeffs.len()).rev() {
        let a = sb.coeffs[index].a0;
        let b = sb.coeffs[index].a1;

        if hi > 0.0 {
            let t = ((b - a) + hi) / 2.0 / hi;
            if (0.0..=1.0).contains(&t) {
                hi = a * (1.0 - t) + b * t + hi * t * (1.0 - t);
            } else {
                hi = f64::max(a, b);
            }
        } else {
            hi = f64::max(a, b);
        }

        if lo < 0.0 {
            let t = ((b - a) + lo) / 2.0 / lo;
            if (0.0..=1.0).contains(&t) {
                lo = a * (1.0 - t) + b * t + lo * t * (1.0 - t);
            } else {
                lo = f64::min(a, b);
            }
        } else {
            lo = f64::min(a, b);
        }
    }

    (lo, hi)
}
