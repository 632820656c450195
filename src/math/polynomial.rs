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
use crate::math::dekker::Dekker;
use crate::math::float::TrigFloat;

/// Evaluates a polynomial by plain Horner scheme, one FMA per coefficient.
///
/// Coefficients are ordered constant term first. Kept as the baseline the
/// compensated scheme is measured against.
#[inline]
pub fn horner<T: TrigFloat>(coefficients: &[T], x: T) -> T {
    let Some((&last, rest)) = coefficients.split_last() else {
        return T::zero();
    };
    rest.iter().rev().fold(last, |acc, &c| f_fmla(acc, x, c))
}

/// Compensated Horner scheme of Graillat, Langlois and Louvet.
///
/// Every product and sum goes through an error-free transform, the two errors are
/// accumulated in a second Horner recurrence `e = e * x + (pe + se)` and added back at the end.
/// The result is as accurate as plain Horner in twice the working precision,
/// rounded once.
///
/// Coefficients are ordered constant term first.
#[inline]
pub fn compensated_horner<T: TrigFloat>(coefficients: &[T], x: T) -> T {
    let Some((&last, rest)) = coefficients.split_last() else {
        return T::zero();
    };
    let mut r = last;
    let mut e = T::zero();
    for &c in rest.iter().rev() {
        let p = Dekker::from_exact_mult(r, x);
        let s = Dekker::from_full_exact_add(p.hi, c);
        r = s.hi;
        e = f_fmla(e, x, p.lo + s.lo);
    }
    r + e
}
