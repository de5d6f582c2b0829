/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::*;
use crate::sbasis::*;

///
/// A polynomial in the power basis, with coefficients stored in ascending order
///
/// `coeffs[k]` is the coefficient of `t^k`. An empty coefficient list is the zero polynomial.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Poly {
    pub(crate) coeffs: Vec<f64>,
}

impl Poly {
    pub fn zero() -> Poly {
        Poly { coeffs: vec![] }
    }

    pub fn constant(value: f64) -> Poly {
        Poly { coeffs: vec![value] }
    }

    pub fn from_coefficients(coeffs: impl IntoIterator<Item = f64>) -> Poly {
        Poly {
            coeffs: coeffs.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    ///
    /// The degree of this polynomial, or `None` for the zero polynomial
    ///
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    #[inline]
    pub fn coefficient(&self, k: usize) -> f64 {
        self.coeffs.get(k).copied().unwrap_or(0.0)
    }

    ///
    /// The coefficient of the highest power of t
    ///
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs.last().copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    ///
    /// Evaluates this polynomial at `t` by Horner's scheme
    ///
    pub fn eval(&self, t: f64) -> f64 {
        let mut result = 0.0;
        for &coeff in self.coeffs.iter().rev() {
            result = result * t + coeff;
        }
        result
    }

    ///
    /// Removes trailing coefficients that are zero
    ///
    pub fn normalize(&mut self) {
        while let Some(&last) = self.coeffs.last() {
            if last == 0.0 {
                self.coeffs.pop();
            } else {
                break;
            }
        }
    }

    ///
    /// Scales this polynomial so its leading coefficient is 1
    ///
    pub fn monic(&self) -> Poly {
        let lead = self.leading_coefficient();
        if lead == 0.0 {
            self.clone()
        } else {
            self * (1.0 / lead)
        }
    }

    ///
    /// The derivative of this polynomial
    ///
    pub fn derivative(&self) -> Poly {
        if self.coeffs.len() <= 1 {
            return Poly::zero();
        }

        Poly {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, &c)| c * (k as f64))
                .collect(),
        }
    }

    ///
    /// The antiderivative of this polynomial that is 0 at t = 0
    ///
    pub fn integral(&self) -> Poly {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        coeffs.extend(self.coeffs.iter().enumerate().map(|(k, &c)| c / ((k + 1) as f64)));

        let mut result = Poly { coeffs };
        result.normalize();
        result
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let len = usize::max(self.len(), rhs.len());
        let mut result = Poly::from_coefficients((0..len).map(|k| self.coefficient(k) + rhs.coefficient(k)));
        result.normalize();
        result
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        let len = usize::max(self.len(), rhs.len());
        let mut result = Poly::from_coefficients((0..len).map(|k| self.coefficient(k) - rhs.coefficient(k)));
        result.normalize();
        result
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        if self.is_empty() || rhs.is_empty() {
            return Poly::zero();
        }

        let mut coeffs = vec![0.0; self.len() + rhs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        let mut result = Poly { coeffs };
        result.normalize();
        result
    }
}

impl Mul<f64> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: f64) -> Poly {
        Poly::from_coefficients(self.coeffs.iter().map(|&c| c * rhs))
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly::from_coefficients(self.coeffs.iter().map(|&c| -c))
    }
}

///
/// Polynomial long division: returns `(quotient, remainder)` with `a = quotient*b + remainder`
/// and `degree(remainder) < degree(b)`
///
/// Returns `None` when `b` is zero.
///
pub fn divide(a: &Poly, b: &Poly) -> Option<(Poly, Poly)> {
    let mut b = b.clone();
    b.normalize();
    if b.is_empty() {
        return None;
    }

    let mut remainder = a.clone();
    remainder.normalize();

    if remainder.len() < b.len() {
        return Some((Poly::zero(), remainder));
    }

    let lead = b.leading_coefficient();
    let mut quotient = vec![0.0; remainder.len() - b.len() + 1];

    for k in (0..quotient.len()).rev() {
        let factor = remainder.coefficient(k + b.len() - 1) / lead;
        quotient[k] = factor;
        for (j, &bc) in b.coeffs.iter().enumerate() {
            remainder.coeffs[k + j] -= factor * bc;
        }
    }

    remainder.coeffs.truncate(b.len() - 1);
    remainder.normalize();

    let mut quotient = Poly { coeffs: quotient };
    quotient.normalize();
    Some((quotient, remainder))
}

///
/// Greatest common divisor of two polynomials by Euclid's algorithm
///
/// `tolerance` decides when a remainder counts as zero relative to the operand size; exact
/// arithmetic would make repeated roots vanish in the remainder, floating point only makes them
/// small.
///
pub fn gcd(a: &Poly, b: &Poly, tolerance: f64) -> Poly {
    let mut a = a.monic();
    let mut b = b.monic();

    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }

    loop {
        if b.is_empty() {
            return a;
        }

        let (_, mut remainder) = match divide(&a, &b) {
            Some(result) => result,
            None => return a,
        };

        if remainder.coeffs.iter().all(|c| c.abs() <= tolerance) {
            return b;
        }

        remainder = remainder.monic();
        a = b;
        b = remainder;
    }
}

///
/// Converts an S-basis function to the power basis
///
/// Exact in exact arithmetic but numerically lossy at high degree; callers that can stay in the
/// S-basis should.
///
pub fn sbasis_to_poly(sb: &SBasis) -> Poly {
    if sb.is_zero() {
        return Poly::zero();
    }

    // A = 1-t, B = t, S = A*B
    let a = Poly::from_coefficients([1.0, -1.0]);
    let b = Poly::from_coefficients([0.0, 1.0]);
    let s = &a * &b;

    let mut result = Poly::zero();
    for coeff in sbasis_coefficients_descending(sb) {
        result = &(&s * &result) + &(&(&a * coeff.a0) + &(&b * coeff.a1));
    }

    result.normalize();
    result
}

fn sbasis_coefficients_descending(sb: &SBasis) -> impl Iterator<Item = Linear> + '_ {
    (0..sb.len()).rev().map(move |k| sb.coefficient(k))
}

///
/// Converts a power-basis polynomial to the S-basis
///
pub fn poly_to_sbasis(p: &Poly) -> Result<SBasis, GeomError> {
    let x = SBasis::from_linear(Linear::new(0.0, 1.0));

    let mut result = SBasis::zero();
    for k in (0..p.len()).rev() {
        result = &multiply(&x, &result)? + &SBasis::constant(p.coefficient(k));
    }

    result.normalize();
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn eval_by_horner() {
        // 2 - 3t + t^2
        let p = Poly::from_coefficients([2.0, -3.0, 1.0]);
        assert!(close(p.eval(0.0), 2.0));
        assert!(close(p.eval(1.0), 0.0));
        assert!(close(p.eval(2.0), 0.0));
        assert!(close(p.eval(3.0), 2.0));
    }

    #[test]
    fn divide_recovers_factors() {
        let a = Poly::from_coefficients([1.0, 1.0]);
        let b = Poly::from_coefficients([-2.0, 1.0]);
        let product = &a * &b;

        let (q, r) = divide(&product, &a).unwrap();
        assert!(r.is_empty());
        assert!(close(q.coefficient(0), -2.0));
        assert!(close(q.coefficient(1), 1.0));
    }

    #[test]
    fn divide_with_remainder() {
        // (t^2 + 1) / (t - 1) = (t + 1) remainder 2
        let a = Poly::from_coefficients([1.0, 0.0, 1.0]);
        let b = Poly::from_coefficients([-1.0, 1.0]);

        let (q, r) = divide(&a, &b).unwrap();
        assert!(close(q.coefficient(0), 1.0));
        assert!(close(q.coefficient(1), 1.0));
        assert!(close(r.coefficient(0), 2.0));
    }

    #[test]
    fn gcd_finds_shared_root() {
        let shared = Poly::from_coefficients([-0.5, 1.0]);
        let a = &shared * &Poly::from_coefficients([1.0, 1.0]);
        let b = &shared * &Poly::from_coefficients([-3.0, 1.0]);

        let g = gcd(&a, &b, 1e-10);
        assert!(g.degree() == Some(1));
        assert!(close(g.eval(0.5), 0.0));
    }

    #[test]
    fn sbasis_round_trip() {
        let sb = SBasis::from_coefficients([Linear::new(1.0, -2.0), Linear::new(0.5, 3.0)]);
        let p = sbasis_to_poly(&sb);
        let back = poly_to_sbasis(&p).unwrap();

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(close(p.eval(t), sb.point_at_pos(t)));
            assert!(close(back.point_at_pos(t), sb.point_at_pos(t)));
        }
    }

    #[test]
    fn derivative_and_integral() {
        let p = Poly::from_coefficients([1.0, 2.0, 3.0]);
        let dp = p.derivative();
        assert!(close(dp.coefficient(0), 2.0));
        assert!(close(dp.coefficient(1), 6.0));

        let ip = dp.integral();
        assert!(close(ip.eval(0.0), 0.0));
        assert!(close(ip.eval(1.0), p.eval(1.0) - p.eval(0.0)));
    }
}
