/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

use smallvec::{smallvec, SmallVec};

use crate::consts::*;
use crate::error::*;
use crate::geo::*;

use super::linear::*;
use super::sbasis::*;

impl Add<&SBasis> for &SBasis {
    type Output = SBasis;

    fn add(self, rhs: &SBasis) -> SBasis {
        let len = usize::max(self.len(), rhs.len());
        let mut result = SBasis::from_coefficients((0..len).map(|i| self.coefficient(i) + rhs.coefficient(i)));
        result.normalize();
        result
    }
}

impl Sub<&SBasis> for &SBasis {
    type Output = SBasis;

    fn sub(self, rhs: &SBasis) -> SBasis {
        let len = usize::max(self.len(), rhs.len());
        let mut result = SBasis::from_coefficients((0..len).map(|i| self.coefficient(i) - rhs.coefficient(i)));
        result.normalize();
        result
    }
}

impl Mul<f64> for &SBasis {
    type Output = SBasis;

    fn mul(self, rhs: f64) -> SBasis {
        SBasis::from_coefficients(self.coefficients().map(|c| c * rhs))
    }
}

impl Neg for &SBasis {
    type Output = SBasis;

    fn neg(self) -> SBasis {
        SBasis::from_coefficients(self.coefficients().map(|c| -c))
    }
}

///
/// The product of two S-basis functions
///
/// The product of functions with `m` and `n` coefficients has `m + n` coefficients: returns
/// `GeomError::DegreeOverflow` when this exceeds the degree cap rather than allocating without
/// bound (repeated multiplication inside iterative algorithms is where degrees escalate).
///
pub fn multiply(a: &SBasis, b: &SBasis) -> Result<SBasis, GeomError> {
    if a.is_zero() || b.is_zero() {
        return Ok(SBasis::zero());
    }

    let len = a.len() + b.len();
    if len > MAX_DEGREE {
        return Err(GeomError::DegreeOverflow(len));
    }

    let mut coeffs: SmallVec<[Linear; 4]> = smallvec![Linear::default(); len];

    // s^(j+k+1) terms generated by the cross products of the linear parts
    for j in 0..b.len() {
        for i in j..(a.len() + j) {
            let tri = b.coefficient(j).tri() * a.coefficient(i - j).tri();
            coeffs[i + 1] = coeffs[i + 1] + Linear::constant(-tri);
        }
    }

    // s^(j+k) terms from the endpoint products
    for j in 0..b.len() {
        for i in j..(a.len() + j) {
            let bj = b.coefficient(j);
            let aij = a.coefficient(i - j);
            coeffs[i].a0 += bj.a0 * aij.a0;
            coeffs[i].a1 += bj.a1 * aij.a1;
        }
    }

    let mut result = SBasis { coeffs };
    result.normalize();
    Ok(result)
}

///
/// Composes two S-basis functions, evaluating `a(b(t))`
///
/// Runs Horner's scheme over the coefficients of `a`: each step substitutes `b` into one linear
/// coefficient and multiplies the accumulator by `s(b) = b*(1-b)`.
///
pub fn compose(a: &SBasis, b: &SBasis) -> Result<SBasis, GeomError> {
    let one_minus_b = &SBasis::constant(1.0) - b;
    let s = multiply(&one_minus_b, b)?;

    let mut r = SBasis::zero();
    for i in (0..a.len()).rev() {
        let coeff = a.coefficient(i);
        let linear_term = &(b * coeff.tri()) + &SBasis::constant(coeff.a0);
        r = &multiply(&r, &s)? + &linear_term;
    }

    r.normalize();
    Ok(r)
}

///
/// Restricts an S-basis function to a subrange of [0, 1], reparameterised back onto [0, 1]
///
pub fn portion(f: &SBasis, range: Space1) -> Result<SBasis, GeomError> {
    compose(f, &SBasis::from_linear(Linear::new(range.min(), range.max())))
}

///
/// The derivative of an S-basis function
///
pub fn derivative(a: &SBasis) -> SBasis {
    if a.is_empty() {
        return SBasis::zero();
    }

    let mut coeffs: SmallVec<[Linear; 4]> = smallvec![Linear::default(); a.len()];

    for k in 0..(a.len() - 1) {
        let d = (2 * k + 1) as f64 * a.coefficient(k).tri();
        let next = a.coefficient(k + 1);
        coeffs[k].a0 = d + (k + 1) as f64 * next.a0;
        coeffs[k].a1 = d - (k + 1) as f64 * next.a1;
    }

    let k = a.len() - 1;
    let d = (2 * k + 1) as f64 * a.coefficient(k).tri();
    coeffs[k] = Linear::constant(d);

    let mut result = SBasis { coeffs };
    result.normalize();
    result
}

///
/// An antiderivative of an S-basis function, with the constant chosen so the result is 0 at t = 0
///
pub fn integral(c: &SBasis) -> SBasis {
    let mut coeffs: SmallVec<[Linear; 4]> = smallvec![Linear::default(); c.len() + 1];

    for k in 1..=c.len() {
        let ahat = -c.coefficient(k - 1).tri() / (2 * k) as f64;
        coeffs[k] = Linear::constant(ahat);
    }

    let mut a_tri = 0.0;
    for k in (0..c.len()).rev() {
        a_tri = (c.coefficient(k).hat() + (k + 1) as f64 * a_tri / 2.0) / (2 * k + 1) as f64;
        coeffs[k].a0 -= a_tri / 2.0;
        coeffs[k].a1 += a_tri / 2.0;
    }

    let mut result = SBasis { coeffs };
    let at_zero = result.point_at_pos(0.0);
    result = &result - &SBasis::constant(at_zero);
    result.normalize();
    result
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn multiply_matches_pointwise_product() {
        let a = SBasis::from_coefficients([Linear::new(1.0, 3.0), Linear::new(-2.0, 0.5)]);
        let b = SBasis::from_coefficients([Linear::new(0.0, 2.0)]);
        let c = multiply(&a, &b).unwrap();

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(close(c.point_at_pos(t), a.point_at_pos(t) * b.point_at_pos(t)));
        }
    }

    #[test]
    fn multiply_overflow_is_an_error() {
        let mut a = SBasis::from_linear(Linear::new(0.0, 1.0));
        loop {
            match multiply(&a, &a) {
                Ok(next) => {
                    assert!(next.len() <= crate::consts::MAX_DEGREE);
                    a = &next + &SBasis::constant(1.0);
                }
                Err(GeomError::DegreeOverflow(_)) => break,
                Err(err) => panic!("unexpected error {:?}", err),
            }
        }
    }

    #[test]
    fn compose_matches_pointwise() {
        let a = SBasis::from_coefficients([Linear::new(1.0, -1.0), Linear::new(0.5, 2.0)]);
        let b = SBasis::from_coefficients([Linear::new(0.25, 0.75)]);
        let c = compose(&a, &b).unwrap();

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(close(c.point_at_pos(t), a.point_at_pos(b.point_at_pos(t))));
        }
    }

    #[test]
    fn portion_remaps_subrange() {
        let f = SBasis::from_coefficients([Linear::new(0.0, 4.0), Linear::new(1.0, -1.0)]);
        let part = portion(&f, Space1::new(0.25, 0.75)).unwrap();

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(close(part.point_at_pos(t), f.point_at_pos(0.25 + 0.5 * t)));
        }
    }

    #[test]
    fn derivative_of_integral_round_trips() {
        let f = SBasis::from_coefficients([Linear::new(2.0, -1.0), Linear::new(0.5, 0.25)]);
        let back = derivative(&integral(&f));

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(close(back.point_at_pos(t), f.point_at_pos(t)));
        }
    }

    #[test]
    fn integral_is_zero_at_start() {
        let f = SBasis::from_coefficients([Linear::new(3.0, 7.0), Linear::new(-1.0, 2.0)]);
        assert!(close(integral(&f).point_at_pos(0.0), 0.0));
    }

    #[test]
    fn derivative_of_linear_is_constant() {
        let f = SBasis::from_linear(Linear::new(1.0, 5.0));
        let df = derivative(&f);
        assert!(close(df.point_at_pos(0.3), 4.0));
    }
}
