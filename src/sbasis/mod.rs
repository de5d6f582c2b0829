/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Scalar functions on [0, 1] in the symmetric power basis
//!
//! The S-basis writes a function as `f(t) = sum_k (a_k*(1-t) + b_k*t) * (t*(1-t))^k`. It behaves
//! like a Bezier representation for the purposes of subdivision and evaluation but multiplies and
//! composes without the catastrophic cancellation the raw power basis suffers from, which makes
//! it the default representation for curve coordinate functions throughout this crate.
//!
//! Conversion to the power basis (see the `poly` module) is available for algorithms that need
//! it, such as Sturm sequences, but the round trip is lossy at high degree: above roughly degree
//! 10 the binomial weights involved stop being exactly representable and the reconstructed
//! function can differ by a few units in the last place per extra degree.
//!

mod linear;
mod ops;
mod sbasis;
mod to_bezier;

pub use self::linear::*;
pub use self::ops::*;
pub use self::sbasis::*;
pub use self::to_bezier::*;
