/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Polynomials in the power basis
//!
//! The power basis is numerically the worst way to store a curve coordinate function, but some
//! algorithms want it anyway: Sturm sequences count real roots exactly, which the Bernstein-form
//! root finder cannot do. The `sturm` module builds on `Poly` to provide root counting and a
//! bisection root finder for the S-basis functions used elsewhere in this crate.
//!

mod poly;
mod sturm;

pub use self::poly::*;
pub use self::sturm::*;
