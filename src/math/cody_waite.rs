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

/// Cody-Waite reduction of `x` by `C`.
///
/// The quotient comes from `x` times the three limb reciprocal, truncated.
/// `q * C` is then removed one limb at a time, each step an `exactFma` whose
/// error terms sum into `v2`. A final step fixes a quotient that came out one
/// too large, so the remainder takes the sign of `x`.
///
/// Exact quotients are guaranteed for `|x|` up to [TrigFloat::MAX_REDUCIBLE].
#[inline]
pub fn cody_waite_reduce<T: TrigFloat>(modulus: &ReductionModulus<T>, x: T) -> ReductionResult<T> {
    let cw = &modulus.cody_waite;

    let t = f_fmla(x, cw.r1, f_fmla(x, cw.r2, x * cw.r3));
    let mut quotient = t.to_quotient();
    let q = -T::from_quotient(quotient);

    let r1 = Dekker::from_exact_fma(q, cw.c1, x);
    let r2 = Dekker::from_exact_fma(q, cw.c2, r1.hi);
    let r3 = Dekker::from_exact_fma(q, cw.c3, r2.hi);

    let mut v1 = r3.hi;
    let mut v2 = r1.lo + r2.lo + r3.lo;

    let r = v1 + v2;
    if x >= T::zero() && r < T::zero() {
        (v1, v2) = shift_remainder(v1, v2, cw.c1, cw.c2);
        quotient = quotient - T::Quotient::one();
    } else if x < T::zero() && r > T::zero() {
        (v1, v2) = shift_remainder(v1, v2, -cw.c1, -cw.c2);
        quotient = quotient + T::Quotient::one();
    }

    debug_assert!(
        x.abs() > T::MAX_REDUCIBLE || (v1 + v2).abs() <= modulus.c,
        "Cody-Waite remainder of {x:?} is out of bounds: {v1:?} + {v2:?}"
    );

    ReductionResult::new(quotient, v1, v2)
}
