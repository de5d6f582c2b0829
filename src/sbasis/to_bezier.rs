/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::{smallvec, SmallVec};

use super::linear::*;
use super::sbasis::*;

///
/// Binomial coefficient `n choose k`, computed in floating point
///
/// Exact for the sizes used by the basis conversions (the largest intermediate stays well inside
/// the 53-bit mantissa).
///
pub(crate) fn choose(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let k = usize::min(k, n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * ((n - i) as f64) / ((i + 1) as f64);
    }
    result
}

///
/// Converts an S-basis function to Bernstein-Bezier weights
///
/// Returns the control values of the lowest-degree Bezier representation that reproduces the
/// function exactly (degree `2q-1` for `q` coefficients, one less when the top coefficient is
/// symmetric). The weights at the ends equal the function values at t = 0 and t = 1.
///
pub fn sbasis_to_bezier(sb: &SBasis) -> SmallVec<[f64; 8]> {
    if sb.is_empty() || sb.is_zero() {
        return smallvec![0.0, 0.0];
    }

    let mut q = sb.len();
    let n = {
        let top = sb.coefficient(q - 1);
        if top.a0 == top.a1 {
            q -= 1;
            2 * q
        } else {
            2 * q - 1
        }
    };

    let mut bz: SmallVec<[f64; 8]> = smallvec![0.0; n + 1];

    for k in 0..q {
        for j in k..(n - k) {
            let t_jk = choose(n - 2 * k - 1, j - k);
            bz[j] += t_jk * sb.coefficient(k).a0;
            bz[n - j] += t_jk * sb.coefficient(k).a1;
        }
    }

    // The weights so far are in the scaled Bernstein basis
    for (j, weight) in bz.iter_mut().enumerate().take(n).skip(1) {
        *weight /= choose(n, j);
    }

    bz[0] = sb.coefficient(0).a0;
    bz[n] = sb.coefficient(0).a1;

    bz
}

///
/// Converts Bernstein-Bezier weights to the S-basis representation of the same function
///
/// The conversion is exact: a degree-n Bezier becomes an S-basis function with `ceil((n+1)/2)`
/// coefficients (one more for even degree) whose values and derivatives agree everywhere.
///
pub fn bezier_to_sbasis(bz: &[f64]) -> SBasis {
    debug_assert!(!bz.is_empty());

    if bz.len() == 1 {
        return SBasis::constant(bz[0]);
    }

    let n = bz.len() - 1;
    let q = (n + 1) / 2;
    let even = (n & 1) == 0;

    let mut coeffs: SmallVec<[Linear; 4]> = smallvec![Linear::default(); q + if even { 1 } else { 0 }];

    let sgn = |j: usize, k: usize| if (j - k) & 1 == 1 { -1.0 } else { 1.0 };

    for k in 0..q {
        for j in k..q {
            let t_jk = sgn(j, k) * choose(n - j - k, j - k) * choose(n, k);
            coeffs[j].a0 += t_jk * bz[k];
            coeffs[j].a1 += t_jk * bz[n - k];
        }
        for j in (k + 1)..q {
            let t_jk = sgn(j, k) * choose(n - j - k - 1, j - k - 1) * choose(n, k);
            coeffs[j].a0 += t_jk * bz[n - k];
            coeffs[j].a1 += t_jk * bz[k];
        }
    }

    if even {
        for k in 0..q {
            let t_qk = sgn(q, k) * choose(n, k);
            coeffs[q].a0 += t_qk * (bz[k] + bz[n - k]);
        }
        coeffs[q].a0 += choose(n, q) * bz[q];
        coeffs[q].a1 = coeffs[q].a0;
    }

    coeffs[0].a0 = bz[0];
    coeffs[0].a1 = bz[n];

    let mut result = SBasis::from_coefficients(coeffs);
    result.normalize();
    result
}
