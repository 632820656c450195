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
use crate::err::TrigError;
use crate::math::common::f_fmla;
use crate::math::constants::Modulus;
use crate::math::float::TrigFloat;
use crate::math::kernel::{cos_kernel, sin_kernel};
use crate::math::reduce::{ArgumentReduction, CodyWaite};
use crate::math::rounding::init;

/// Reduces `|x|` by π/2, arguments already in [0, π/2] pass through.
#[inline(always)]
fn reduce_frac_pi_2<T: TrigFloat, R: ArgumentReduction<T>>(x: T) -> (usize, T, T) {
    debug_assert!(
        x <= T::MAX_REDUCIBLE,
        "argument {x:?} is outside the reducible range"
    );
    let frac_pi_2 = T::modulus(Modulus::FracPi2);
    if x <= frac_pi_2.c {
        (0, x, T::zero())
    } else {
        let r = R::reduce(frac_pi_2, x);
        (r.quadrant(), r.v1, r.v2)
    }
}

/// `sin(quadrant * π/2 + v1 + v2)` from the kernel values at `v1`.
///
/// Odd quadrants swap sine and cosine, quadrants 2 and 3 flip the sign.
/// `v2` enters through one Newton step along the derivative.
#[inline(always)]
fn combine<T: TrigFloat>(quadrant: usize, sin_v1: T, cos_v1: T, v2: T) -> T {
    let (base, slope) = if quadrant & 1 == 0 {
        (sin_v1, cos_v1)
    } else {
        (cos_v1, -sin_v1)
    };
    let r = if v2 != T::zero() {
        f_fmla(slope, v2, base)
    } else {
        base
    };
    if quadrant & 2 != 0 { -r } else { r }
}

/// Same as [combine], evaluating the second kernel only when `v2` needs it.
#[inline(always)]
fn rotate<T: TrigFloat>(quadrant: usize, v1: T, v2: T) -> T {
    if quadrant & 1 == 0 {
        let s = sin_kernel(v1);
        let c = if v2 != T::zero() { cos_kernel(v1) } else { T::zero() };
        combine(quadrant, s, c, v2)
    } else {
        let c = cos_kernel(v1);
        let s = if v2 != T::zero() { sin_kernel(v1) } else { T::zero() };
        combine(quadrant, s, c, v2)
    }
}

#[inline(always)]
fn check_environment() {
    if cfg!(debug_assertions) {
        init();
    }
}

/// Sine using reduction strategy `R`.
#[inline]
pub fn sin_with<T: TrigFloat, R: ArgumentReduction<T>>(x: T) -> T {
    check_environment();
    if !x.is_finite() {
        return T::nan();
    }
    let ax = x.abs();
    if ax <= T::SIN_SMALL_ANGLE {
        return x;
    }
    let (quadrant, v1, v2) = reduce_frac_pi_2::<T, R>(ax);
    let s = rotate(quadrant, v1, v2);
    if x < T::zero() { -s } else { s }
}

/// Cosine using reduction strategy `R`.
#[inline]
pub fn cos_with<T: TrigFloat, R: ArgumentReduction<T>>(x: T) -> T {
    check_environment();
    if !x.is_finite() {
        return T::nan();
    }
    let (quadrant, v1, v2) = reduce_frac_pi_2::<T, R>(x.abs());
    rotate(quadrant + 1, v1, v2)
}

/// Sine and cosine sharing one reduction, returns `(sin(x), cos(x))`.
///
/// Both values are bit identical to [sin_with] and [cos_with].
#[inline]
pub fn sincos_with<T: TrigFloat, R: ArgumentReduction<T>>(x: T) -> (T, T) {
    check_environment();
    if !x.is_finite() {
        return (T::nan(), T::nan());
    }
    let ax = x.abs();
    let (quadrant, v1, v2) = reduce_frac_pi_2::<T, R>(ax);
    let sin_v1 = sin_kernel(v1);
    let cos_v1 = cos_kernel(v1);
    let c = combine(quadrant + 1, sin_v1, cos_v1, v2);
    if ax <= T::SIN_SMALL_ANGLE {
        return (x, c);
    }
    let s = combine(quadrant, sin_v1, cos_v1, v2);
    (if x < T::zero() { -s } else { s }, c)
}

/// Sine, reduced with Cody-Waite.
///
/// Working argument range is `|x| <= T::MAX_REDUCIBLE`, quotients are
/// not exact past it.
#[inline]
pub fn sin<T: TrigFloat>(x: T) -> T {
    sin_with::<T, CodyWaite>(x)
}

/// Cosine, reduced with Cody-Waite.
#[inline]
pub fn cos<T: TrigFloat>(x: T) -> T {
    cos_with::<T, CodyWaite>(x)
}

/// Sine and cosine, reduced with Cody-Waite.
#[inline]
pub fn sincos<T: TrigFloat>(x: T) -> (T, T) {
    sincos_with::<T, CodyWaite>(x)
}

/// Sine for double precision
///
/// Max found ULP 1.33
#[inline]
pub fn f_sin(x: f64) -> f64 {
    sin(x)
}

/// Cosine for double precision
///
/// Max found ULP 1.33
#[inline]
pub fn f_cos(x: f64) -> f64 {
    cos(x)
}

/// Sine and cosine for double precision
#[inline]
pub fn f_sincos(x: f64) -> (f64, f64) {
    sincos(x)
}

/// Sine for single precision
///
/// Max found ULP 1.33
#[inline]
pub fn f_sinf(x: f32) -> f32 {
    sin(x)
}

/// Cosine for single precision
///
/// Max found ULP 1.33
#[inline]
pub fn f_cosf(x: f32) -> f32 {
    cos(x)
}

/// Sine and cosine for single precision
#[inline]
pub fn f_sincosf(x: f32) -> (f32, f32) {
    sincos(x)
}

/// Writes `sin(src[i])` to `dst[i]` using reduction strategy `R`.
///
/// Lengths always must match.
pub fn sin_array_with<T: TrigFloat, R: ArgumentReduction<T>>(
    src: &[T],
    dst: &mut [T],
) -> Result<(), TrigError> {
    init();
    if src.len() != dst.len() {
        return Err(TrigError::LaneSizeMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    for (dst, &src) in dst.iter_mut().zip(src.iter()) {
        *dst = sin_with::<T, R>(src);
    }
    Ok(())
}

/// Writes `cos(src[i])` to `dst[i]` using reduction strategy `R`.
///
/// Lengths always must match.
pub fn cos_array_with<T: TrigFloat, R: ArgumentReduction<T>>(
    src: &[T],
    dst: &mut [T],
) -> Result<(), TrigError> {
    init();
    if src.len() != dst.len() {
        return Err(TrigError::LaneSizeMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    for (dst, &src) in dst.iter_mut().zip(src.iter()) {
        *dst = cos_with::<T, R>(src);
    }
    Ok(())
}

/// Element wise sine, reduced with Cody-Waite.
pub fn sin_array<T: TrigFloat>(src: &[T], dst: &mut [T]) -> Result<(), TrigError> {
    sin_array_with::<T, CodyWaite>(src, dst)
}

/// Element wise cosine, reduced with Cody-Waite.
pub fn cos_array<T: TrigFloat>(src: &[T], dst: &mut [T]) -> Result<(), TrigError> {
    cos_array_with::<T, CodyWaite>(src, dst)
}
