/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::math::common::f_fmla;
use crate::math::constants::ReductionModulus;
use crate::math::dekker::Dekker;
use crate::math::float::TrigFloat;
use crate::math::reduce::{ReductionResult, shift_remainder};
use num_traits::One;

/// Boldo-Daumas-Li reduction of `x` by `C`.
///
/// The quotient is read off a single FMA against the reciprocal, where the
/// added bias keeps it within two of `trunc(x / C)`. The remainder comes out of
/// one FMA per modulus limb, and the rounding error of the second step is recovered
/// through an exact product and an exact sum.
///
/// A quotient that is off is fixed by at most two single modulus steps. The comparison
/// against `±C` runs limb by limb, a remainder just past `C` would otherwise
/// round onto it.
///
/// Exact quotients are guaranteed for `|x|` up to [TrigFloat::MAX_REDUCIBLE].
#[inline]
pub fn boldo_daumas_li_reduce<T: TrigFloat>(
    modulus: &ReductionModulus<T>,
    x: T,
) -> ReductionResult<T> {
    let bdl = &modulus.boldo_daumas_li;

    let mut quotient = (f_fmla(x, bdl.r, bdl.bias) - bdl.bias).to_quotient();
    let z = T::from_quotient(quotient);

    let u = f_fmla(-z, bdl.c1, x);
    let mut v1 = f_fmla(-z, bdl.c2, u);
    let p = Dekker::from_exact_mult(z, bdl.c2);
    let t = Dekker::from_sorted_exact_add(u, -p.hi);
    let mut v2 = ((t.hi - v1) + t.lo) - p.lo;

    let one = T::Quotient::one();
    if x < T::zero() {
        if (v1 + bdl.c1) + (v2 + bdl.c2) < T::zero() {
            (v1, v2) = shift_remainder(v1, v2, bdl.c1, bdl.c2);
            quotient = quotient - one;
        }
        if v1 + v2 > T::zero() {
            (v1, v2) = shift_remainder(v1, v2, -bdl.c1, -bdl.c2);
            quotient = quotient + one;
        }
    } else {
        if v1 + v2 < T::zero() {
            (v1, v2) = shift_remainder(v1, v2, bdl.c1, bdl.c2);
            quotient = quotient - one;
        }
        if (v1 - bdl.c1) + (v2 - bdl.c2) > T::zero() {
            (v1, v2) = shift_remainder(v1, v2, -bdl.c1, -bdl.c2);
            quotient = quotient + one;
        }
    }

    debug_assert!(
        x.abs() > T::MAX_REDUCIBLE || (v1 + v2).abs() <= modulus.c,
        "Boldo-Daumas-Li remainder of {x:?} is out of bounds: {v1:?} + {v2:?}"
    );

    ReductionResult::new(quotient, v1, v2)
}
