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
#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "fma"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
use crate::math::common::f_fmla;
use crate::math::float::TrigFloat;

/// Unevaluated sum `hi + lo` produced by an error-free transform.
///
/// `hi` is the rounded result of the operation and `lo` its exact rounding error.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Dekker<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: TrigFloat> Dekker<T> {
    #[inline]
    pub const fn new(lo: T, hi: T) -> Self {
        Dekker { lo, hi }
    }

    // Non FMA helper
    #[allow(dead_code)]
    #[inline]
    fn split(a: T) -> Dekker<T> {
        let t1 = T::SPLITTER * a;
        let t2 = a - t1;
        let r_hi = t1 + t2;
        let r_lo = a - r_hi;
        Dekker::new(r_lo, r_hi)
    }

    // Non FMA helper
    #[allow(dead_code)]
    #[inline]
    fn from_exact_mult_impl_non_fma(asz: Dekker<T>, a: T, b: T) -> Self {
        let bs = Dekker::split(b);

        let r_hi = a * b;
        let t1 = asz.hi * bs.hi - r_hi;
        let t2 = asz.hi * bs.lo + t1;
        let t3 = asz.lo * bs.hi + t2;
        let r_lo = asz.lo * bs.lo + t3;
        Dekker::new(r_lo, r_hi)
    }

    /// Fast2Sum, exact only when `|a| >= |b|` or `a` is zero.
    #[inline]
    pub fn from_exact_add(a: T, b: T) -> Dekker<T> {
        let r_hi = a + b;
        let t = r_hi - a;
        let r_lo = b - t;
        Dekker::new(r_lo, r_hi)
    }

    /// Branch-free TwoSum, exact for any ordering of the operands.
    #[inline]
    pub fn from_full_exact_add(a: T, b: T) -> Dekker<T> {
        let r_hi = a + b;
        let t1 = r_hi - a;
        let t2 = r_hi - t1;
        let t3 = b - t1;
        let t4 = a - t2;
        let r_lo = t3 + t4;
        Dekker::new(r_lo, r_hi)
    }

    /// Orders operands by magnitude and then runs Fast2Sum.
    #[inline]
    pub fn from_sorted_exact_add(a: T, b: T) -> Dekker<T> {
        if a.abs() >= b.abs() {
            Dekker::from_exact_add(a, b)
        } else {
            Dekker::from_exact_add(b, a)
        }
    }

    /// Exact product, `hi = a * b` rounded.
    #[inline]
    pub fn from_exact_mult(a: T, b: T) -> Self {
        #[cfg(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "fma"
            ),
            all(target_arch = "aarch64", target_feature = "neon")
        ))]
        {
            let r_hi = a * b;
            let r_lo = f_fmla(a, b, -r_hi);
            Dekker::new(r_lo, r_hi)
        }
        #[cfg(not(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "fma"
            ),
            all(target_arch = "aarch64", target_feature = "neon")
        )))]
        {
            let splat = Dekker::split(a);
            Dekker::from_exact_mult_impl_non_fma(splat, a, b)
        }
    }

    /// `a * b + c` in doubled precision.
    ///
    /// Built from one exact product and two exact sums. Both sum errors are
    /// folded into `lo` with a plain addition, so the pair is accurate to about
    /// 1.5 ulp of twice the working precision rather than exact.
    #[inline]
    pub fn from_exact_fma(a: T, b: T, c: T) -> Self {
        let p = Dekker::from_exact_mult(a, b);
        let s1 = Dekker::from_full_exact_add(c, p.hi);
        let s2 = Dekker::from_full_exact_add(s1.hi, p.lo);
        Dekker::new(s1.lo + s2.lo, s2.hi)
    }

    #[inline]
    pub fn to_f(self) -> T {
        self.lo + self.hi
    }
}
