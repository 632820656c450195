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
use crate::math::bdl::boldo_daumas_li_reduce;
use crate::math::cody_waite::cody_waite_reduce;
use crate::math::constants::ReductionModulus;
use crate::math::dekker::Dekker;
use crate::math::float::TrigFloat;

/// Outcome of reducing `x` by a modulus `C`.
///
/// `x = quotient * C + v1 + v2`, where `v1 + v2` is the remainder kept
/// as an unevaluated pair. The quotient truncates toward zero, so the remainder
/// carries the sign of `x`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReductionResult<T: TrigFloat> {
    pub quotient: T::Quotient,
    pub v1: T,
    pub v2: T,
}

impl<T: TrigFloat> ReductionResult<T> {
    #[inline]
    pub fn new(quotient: T::Quotient, v1: T, v2: T) -> Self {
        ReductionResult { quotient, v1, v2 }
    }

    /// `v1 + v2` rounded.
    #[inline]
    pub fn remainder(&self) -> T {
        self.v1 + self.v2
    }

    /// `quotient mod 4` in `0..4`.
    #[inline]
    pub fn quadrant(&self) -> usize {
        T::quadrant(self.quotient)
    }
}

/// Argument reduction strategy.
///
/// Implementors are zero sized so the strategy is picked at compile time
/// and inlined into the callers.
pub trait ArgumentReduction<T: TrigFloat> {
    fn reduce(modulus: &ReductionModulus<T>, x: T) -> ReductionResult<T>;
}

/// Single division and subtraction, accuracy baseline only.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct NaiveReduction;

/// Three limb Cody-Waite reduction.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct CodyWaite;

/// FMA based Boldo-Daumas-Li reduction.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct BoldoDaumasLi;

impl<T: TrigFloat> ArgumentReduction<T> for NaiveReduction {
    #[inline(always)]
    fn reduce(modulus: &ReductionModulus<T>, x: T) -> ReductionResult<T> {
        naive_reduce(modulus, x)
    }
}

impl<T: TrigFloat> ArgumentReduction<T> for CodyWaite {
    #[inline(always)]
    fn reduce(modulus: &ReductionModulus<T>, x: T) -> ReductionResult<T> {
        cody_waite_reduce(modulus, x)
    }
}

impl<T: TrigFloat> ArgumentReduction<T> for BoldoDaumasLi {
    #[inline(always)]
    fn reduce(modulus: &ReductionModulus<T>, x: T) -> ReductionResult<T> {
        boldo_daumas_li_reduce(modulus, x)
    }
}

/// Adds `c1 + c2` to the remainder pair `v1 + v2`.
///
/// Used when a quotient is corrected by one. The rounding error of the
/// leading limb goes into the trailing one, a remainder next to `±C` keeps its
/// low bits.
#[inline(always)]
pub(crate) fn shift_remainder<T: TrigFloat>(v1: T, v2: T, c1: T, c2: T) -> (T, T) {
    let s = Dekker::from_sorted_exact_add(v1, c1);
    (s.hi, (v2 + c2) + s.lo)
}

/// Reduces `x` by `C` with a single division and a single subtraction.
///
/// The remainder error grows with `|x|` since nothing compensates the
/// cancellation in `x - q * C`. `v2` is always zero.
#[inline]
pub fn naive_reduce<T: TrigFloat>(modulus: &ReductionModulus<T>, x: T) -> ReductionResult<T> {
    let quotient = (x / modulus.c).to_quotient();
    let v1 = x - T::from_quotient(quotient) * modulus.c;
    ReductionResult::new(quotient, v1, T::zero())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::math::constants::Modulus;
    use rand::Rng;

    /// π, π/2 and 2π in three limbs of double precision.
    pub(crate) fn modulus_limbs(modulus: Modulus) -> [f64; 3] {
        let pi = [
            3.141592653589793,
            1.2246467991473532e-16,
            -2.9947698097183397e-33,
        ];
        let scale = match modulus {
            Modulus::Pi => 1.0,
            Modulus::TwoPi => 2.0,
            Modulus::FracPi2 => 0.5,
        };
        pi.map(|limb| limb * scale)
    }

    /// `x - q * C` to about twice double precision, independent of the reducers.
    pub(crate) fn reference_remainder(x: f64, quotient: i64, modulus: Modulus) -> f64 {
        fn two_sum(a: f64, b: f64) -> (f64, f64) {
            let s = a + b;
            let t = s - a;
            (s, (a - (s - t)) + (b - t))
        }
        let q = quotient as f64;
        let mut hi = x;
        let mut lo = 0f64;
        for limb in modulus_limbs(modulus) {
            let p = q * limb;
            let pe = q.mul_add(limb, -p);
            for term in [-p, -pe] {
                let (s, e) = two_sum(hi, term);
                hi = s;
                lo += e;
            }
        }
        hi + lo
    }

    /// Checks the quotient is `trunc(x / C)` through the sign of the exact remainder.
    ///
    /// The next quotient away from zero has to flip the sign, which bounds the
    /// remainder by the three limb modulus rather than by rounded `C`.
    pub(crate) fn assert_quotient(x: f64, quotient: i64, modulus: Modulus) {
        let r = reference_remainder(x, quotient, modulus);
        if x >= 0. {
            let next = reference_remainder(x, quotient + 1, modulus);
            assert!(r >= 0. && next <= 0., "x = {x}, q = {quotient}, r = {r}, next = {next}");
        } else {
            let next = reference_remainder(x, quotient - 1, modulus);
            assert!(r <= 0. && next >= 0., "x = {x}, q = {quotient}, r = {r}, next = {next}");
        }
    }

    #[test]
    fn quotient_check_uses_exact_modulus() {
        // PI is below π, its remainder equals rounded C
        assert_quotient(std::f64::consts::PI, 0, Modulus::Pi);
        assert_quotient(-std::f64::consts::PI, 0, Modulus::Pi);
        assert_quotient(std::f64::consts::TAU, 0, Modulus::TwoPi);
        assert_quotient(std::f64::consts::FRAC_PI_2, 0, Modulus::FracPi2);
        let above = std::f64::consts::PI + std::f64::consts::PI.ulp();
        assert_quotient(above, 1, Modulus::Pi);
        assert_quotient(-above, -1, Modulus::Pi);
    }

    #[test]
    #[should_panic]
    fn quotient_check_rejects_short_quotient() {
        assert_quotient(10.0, 2, Modulus::Pi);
    }

    #[test]
    fn naive_reduction_small_arguments() {
        let m = f64::modulus(Modulus::Pi);
        let r = naive_reduce(m, 10.0);
        assert_eq!(r.quotient, 3);
        assert_eq!(r.v1, 10.0 - 3.0 * std::f64::consts::PI);
        assert_eq!(r.v2, 0.);
        let r = naive_reduce(m, -10.0);
        assert_eq!(r.quotient, -3);
        assert!(r.v1 < 0.);
        assert_eq!(r.quadrant(), 1);
    }

    #[test]
    fn naive_reduction_is_approximate() {
        let mut rng = rand::rng();
        for modulus in [Modulus::Pi, Modulus::TwoPi, Modulus::FracPi2] {
            let m = f64::modulus(modulus);
            for _ in 0..10000 {
                let x = rng.random_range(-1000f64..1000.);
                let r = naive_reduce(m, x);
                let reconstructed = reference_remainder(x, r.quotient, modulus);
                assert!((r.remainder() - reconstructed).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn strategies_dispatch_to_free_functions() {
        let m = f32::modulus(Modulus::FracPi2);
        let x = 123.456f32;
        assert_eq!(NaiveReduction::reduce(m, x), naive_reduce(m, x));
        assert_eq!(CodyWaite::reduce(m, x), cody_waite_reduce(m, x));
        assert_eq!(BoldoDaumasLi::reduce(m, x), boldo_daumas_li_reduce(m, x));
    }
}
