/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;

use super::poly::*;

///
/// A Sturm chain for a polynomial
///
/// The chain starts with the polynomial and its derivative and continues with negated remainders
/// of successive polynomial divisions. The difference in sign-change counts between two points
/// gives the exact number of distinct real roots between them, which makes Sturm chains a root
/// counter first and a root finder second.
///
#[derive(Clone, Debug)]
pub struct Sturm {
    chain: Vec<Poly>,
}

impl Sturm {
    ///
    /// Builds the Sturm chain for a polynomial
    ///
    /// Returns `GeomError::IndeterminateRoots` for the zero polynomial, which is zero everywhere
    /// and has no meaningful root count.
    ///
    pub fn new(p: &Poly) -> Result<Sturm, GeomError> {
        let mut p = p.clone();
        p.normalize();
        if p.is_empty() {
            return Err(GeomError::IndeterminateRoots);
        }

        let mut chain = vec![p.clone()];

        let mut prev = p;
        let mut cur = chain[0].derivative();

        while !cur.is_empty() {
            chain.push(cur.clone());

            let next = match divide(&prev, &cur) {
                Some((_, remainder)) => -&remainder,
                None => break,
            };

            prev = cur;
            cur = next;
        }

        Ok(Sturm { chain })
    }

    ///
    /// Counts the sign changes along the chain evaluated at `t`
    ///
    pub fn count_signs(&self, t: f64) -> usize {
        let mut changes = 0;
        let mut last_sign = 0.0_f64;

        for p in self.chain.iter() {
            let value = p.eval(t);
            if value != 0.0 {
                if last_sign != 0.0 && value.signum() != last_sign {
                    changes += 1;
                }
                last_sign = value.signum();
            }
        }

        changes
    }

    ///
    /// The exact number of distinct real roots in the half-open interval `(left, right]`
    ///
    pub fn n_roots_between(&self, left: f64, right: f64) -> usize {
        self.count_signs(left).saturating_sub(self.count_signs(right))
    }
}

///
/// Finds the distinct real roots of a polynomial in a range, to within `accuracy`
///
/// The polynomial is first deflated to its square-free part (dividing out the GCD with its
/// derivative), so repeated roots are reported once rather than missed: a double root produces no
/// sign change, which defeats plain bisection, but its deflated counterpart is a simple root.
///
pub fn find_roots_sturm(p: &Poly, range: Space1, accuracy: f64) -> Result<Vec<f64>, GeomError> {
    let mut p = p.clone();
    p.normalize();
    if p.is_empty() {
        return Err(GeomError::IndeterminateRoots);
    }
    if p.degree() == Some(0) {
        return Ok(vec![]);
    }

    let deflated = square_free(&p);
    let sturm = Sturm::new(&deflated)?;

    // The chain counts roots in half-open intervals, so a root exactly at the left end of the
    // range needs its own check
    let mut roots = vec![];
    let left = range.min();
    if deflated.eval(left).abs() <= accuracy && deflated.eval(left - accuracy) * deflated.eval(left + accuracy) <= 0.0 {
        roots.push(left);
    }

    subdivide_roots(&sturm, &deflated, range, accuracy, &mut roots);

    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    roots.dedup_by(|a, b| (*a - *b).abs() < accuracy);
    Ok(roots)
}

fn square_free(p: &Poly) -> Poly {
    let g = gcd(p, &p.derivative(), 1e-10);
    if g.degree().unwrap_or(0) == 0 {
        return p.clone();
    }

    match divide(p, &g) {
        Some((quotient, _)) if !quotient.is_empty() => quotient,
        _ => p.clone(),
    }
}

fn subdivide_roots(sturm: &Sturm, p: &Poly, range: Space1, accuracy: f64, roots: &mut Vec<f64>) {
    let count = sturm.n_roots_between(range.min(), range.max());
    if count == 0 {
        return;
    }

    if count == 1 {
        roots.push(isolated_root(p, range, accuracy));
        return;
    }

    if range.extent() <= accuracy {
        // Roots closer together than the requested accuracy collapse into one
        roots.push(range.mid());
        return;
    }

    let mid = range.mid();
    subdivide_roots(sturm, p, Space1::new(range.min(), mid), accuracy, roots);
    subdivide_roots(sturm, p, Space1::new(mid, range.max()), accuracy, roots);
}

///
/// Bisects towards the single root known to lie in `range`
///
fn isolated_root(p: &Poly, range: Space1, accuracy: f64) -> f64 {
    let mut lo = range.min();
    let mut hi = range.max();

    let mut value_lo = p.eval(lo);
    if value_lo == 0.0 {
        return lo;
    }

    while hi - lo > accuracy {
        let mid = (lo + hi) * 0.5;
        let value_mid = p.eval(mid);

        if value_mid == 0.0 {
            return mid;
        }

        if value_mid.signum() == value_lo.signum() {
            lo = mid;
            value_lo = value_mid;
        } else {
            hi = mid;
        }
    }

    (lo + hi) * 0.5
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64, accuracy: f64) -> bool {
        (a - b).abs() <= accuracy
    }

    #[test]
    fn counts_roots_of_cubic() {
        // (t - 0.2)(t - 0.5)(t - 0.9)
        let p = &(&Poly::from_coefficients([-0.2, 1.0]) * &Poly::from_coefficients([-0.5, 1.0]))
            * &Poly::from_coefficients([-0.9, 1.0]);

        let sturm = Sturm::new(&p).unwrap();
        assert!(sturm.n_roots_between(0.0, 1.0) == 3);
        assert!(sturm.n_roots_between(0.0, 0.35) == 1);
        assert!(sturm.n_roots_between(0.35, 0.7) == 1);
        assert!(sturm.n_roots_between(0.6, 0.8) == 0);
    }

    #[test]
    fn finds_simple_roots() {
        let p = &(&Poly::from_coefficients([-0.25, 1.0]) * &Poly::from_coefficients([-0.75, 1.0]))
            * &Poly::from_coefficients([-0.5, 1.0]);

        let roots = find_roots_sturm(&p, Space1::unit(), 1e-9).unwrap();
        assert!(roots.len() == 3);
        assert!(close(roots[0], 0.25, 1e-8));
        assert!(close(roots[1], 0.5, 1e-8));
        assert!(close(roots[2], 0.75, 1e-8));
    }

    #[test]
    fn reports_double_root_once() {
        // (t - 0.5)^2 * (t - 0.8)
        let half = Poly::from_coefficients([-0.5, 1.0]);
        let p = &(&half * &half) * &Poly::from_coefficients([-0.8, 1.0]);

        let roots = find_roots_sturm(&p, Space1::unit(), 1e-9).unwrap();
        assert!(roots.len() == 2);
        assert!(close(roots[0], 0.5, 1e-6));
        assert!(close(roots[1], 0.8, 1e-8));
    }

    #[test]
    fn zero_polynomial_is_indeterminate() {
        assert!(matches!(find_roots_sturm(&Poly::zero(), Space1::unit(), 1e-9), Err(GeomError::IndeterminateRoots)));
    }

    #[test]
    fn no_roots_outside_range() {
        let p = Poly::from_coefficients([-2.0, 1.0]);
        let roots = find_roots_sturm(&p, Space1::unit(), 1e-9).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn root_at_range_start_is_found() {
        let p = &Poly::from_coefficients([0.0, 1.0]) * &Poly::from_coefficients([-0.5, 1.0]);
        let roots = find_roots_sturm(&p, Space1::unit(), 1e-9).unwrap();
        assert!(roots.len() == 2);
        assert!(close(roots[0], 0.0, 1e-8));
        assert!(close(roots[1], 0.5, 1e-8));
    }
}
