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
use crate::math::constants::{
    FRAC_PI_2_F32, FRAC_PI_2_F64, Modulus, PI_F32, PI_F64, ReductionModulus, TWO_PI_F32,
    TWO_PI_F64,
};
use crate::math::kernel::{COS_COEFFS_F32, COS_COEFFS_F64, SIN_COEFFS_F32, SIN_COEFFS_F64};
use num_traits::{Float, MulAdd, PrimInt, Signed};
use std::fmt::Debug;

/// Floating point width the trigonometric pipeline is instantiated for.
///
/// Implemented for `f32` and `f64`.
pub trait TrigFloat:
    Float + MulAdd<Self, Output = Self> + Debug + Default + Send + Sync + 'static
{
    /// Signed integer holding reduction quotients, `i32` for `f32` and `i64` for `f64`.
    type Quotient: PrimInt + Signed + Debug + Send + Sync + 'static;

    /// Significand width including the implicit bit.
    const PRECISION: i32;
    /// Below this magnitude `sin(x)` rounds to `x`.
    const SIN_SMALL_ANGLE: Self;
    /// Magnitude up to which the reducers return exact quotients and bounded remainders.
    const MAX_REDUCIBLE: Self;
    /// Veltkamp splitting constant.
    const SPLITTER: Self;
    /// Minimax sine on [0, π/2], constant term first.
    const SIN_COEFFICIENTS: [Self; 23];
    /// Minimax cosine on [0, π/2], constant term first.
    const COS_COEFFICIENTS: [Self; 23];

    /// Reduction parameters for `modulus` at this precision.
    fn modulus(modulus: Modulus) -> &'static ReductionModulus<Self>;

    /// Truncates toward zero, saturating at the quotient type bounds.
    fn to_quotient(self) -> Self::Quotient;

    fn from_quotient(quotient: Self::Quotient) -> Self;

    /// `quotient mod 4`, always in `0..4`.
    fn quadrant(quotient: Self::Quotient) -> usize;

    /// Distance from `|self|` to the next representable value away from zero.
    fn ulp(self) -> Self;
}

macro_rules! impl_trig_float {
    (
        $float:ty,
        $quotient:ty,
        small_angle: $small:expr,
        max_reducible: $max_reducible:expr,
        splitter: $splitter:expr,
        sin: $sin:expr,
        cos: $cos:expr,
        pi: $pi:expr,
        two_pi: $two_pi:expr,
        frac_pi_2: $frac_pi_2:expr
    ) => {
        impl TrigFloat for $float {
            type Quotient = $quotient;

            const PRECISION: i32 = <$float>::MANTISSA_DIGITS as i32;
            const SIN_SMALL_ANGLE: Self = $small;
            const MAX_REDUCIBLE: Self = $max_reducible;
            const SPLITTER: Self = $splitter;
            const SIN_COEFFICIENTS: [Self; 23] = $sin;
            const COS_COEFFICIENTS: [Self; 23] = $cos;

            #[inline(always)]
            fn modulus(modulus: Modulus) -> &'static ReductionModulus<Self> {
                match modulus {
                    Modulus::Pi => &$pi,
                    Modulus::TwoPi => &$two_pi,
                    Modulus::FracPi2 => &$frac_pi_2,
                }
            }

            #[inline(always)]
            fn to_quotient(self) -> $quotient {
                self as $quotient
            }

            #[inline(always)]
            fn from_quotient(quotient: $quotient) -> Self {
                quotient as $float
            }

            #[inline(always)]
            fn quadrant(quotient: $quotient) -> usize {
                quotient.rem_euclid(4) as usize
            }

            #[inline]
            fn ulp(self) -> Self {
                let a = self.abs();
                if !a.is_finite() {
                    return <$float>::NAN;
                }
                if a == <$float>::MAX {
                    return a - <$float>::from_bits(a.to_bits() - 1);
                }
                <$float>::from_bits(a.to_bits() + 1) - a
            }
        }
    };
}

impl_trig_float!(
    f32,
    i32,
    small_angle: 2.7e-4,
    max_reducible: 8388608.,
    splitter: 4097.,
    sin: SIN_COEFFS_F32,
    cos: COS_COEFFS_F32,
    pi: PI_F32,
    two_pi: TWO_PI_F32,
    frac_pi_2: FRAC_PI_2_F32
);

impl_trig_float!(
    f64,
    i64,
    small_angle: 2.1e-8,
    max_reducible: 4503599627370496.,
    splitter: 134217729.,
    sin: SIN_COEFFS_F64,
    cos: COS_COEFFS_F64,
    pi: PI_F64,
    two_pi: TWO_PI_F64,
    frac_pi_2: FRAC_PI_2_F64
);
