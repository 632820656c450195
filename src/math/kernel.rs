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
use crate::math::constants::Modulus;
use crate::math::float::TrigFloat;
use crate::math::polynomial::compensated_horner;

pub(crate) const SIN_COEFFS_F32: [f32; 23] = [
    -3.1513280585027375e-15,
    1.0,
    1.9950128354873087e-11,
    -0.1666666716337204,
    2.4357765582294633e-08,
    0.008334207348525524,
    -9.616296665626578e-06,
    -0.00019375116971787065,
    0.0005109433550387621,
    -0.004382471088320017,
    0.02023240737617016,
    -0.06232820823788643,
    0.13840991258621216,
    -0.2299337536096573,
    0.29131436347961426,
    -0.28387677669525146,
    0.21279233694076538,
    -0.12171296030282974,
    0.05217766389250755,
    -0.01623234525322914,
    0.0034605867695063353,
    -0.00045222308835946023,
    2.7316056730342098e-05,
];

pub(crate) const SIN_COEFFS_F64: [f64; 23] = [
    6.043787009651245e-24,
    1.0,
    -3.8476051657630597e-20,
    -0.16666666666666666,
    -4.560220434818188e-17,
    0.008333333333331708,
    1.7932328717674466e-14,
    -0.00019841269842175437,
    -9.496433393698673e-13,
    2.75574008558096e-06,
    -3.7687566443477193e-11,
    -2.49359603476905e-08,
    -2.5800492027669335e-10,
    5.893141042766951e-10,
    -5.433041056837119e-10,
    5.287967272010351e-10,
    -3.970551101455e-10,
    2.271697426732926e-10,
    -9.741207870774355e-11,
    3.0313510689886855e-11,
    -6.464558935029198e-12,
    8.45051197920576e-13,
    -5.10618043509081e-14,
];

pub(crate) const COS_COEFFS_F32: [f32; 23] = [
    1.0,
    6.759776657698502e-13,
    -0.5,
    -1.9783012727980775e-10,
    0.0416666679084301,
    1.084509992921312e-08,
    -0.0013890363043174148,
    4.3343567313058884e-07,
    2.706554369069636e-05,
    -2.5627790819271468e-05,
    0.00011755149898817763,
    -0.00034594471799209714,
    0.0007237704703584313,
    -0.0011300748446956277,
    0.0013468097895383835,
    -0.0012371520278975368,
    0.000876404985319823,
    -0.00047500297660008073,
    0.00019345934560988098,
    -5.732126737711951e-05,
    1.1666309546853881e-05,
    -1.4586045153919258e-06,
    8.446725274779965e-08,
];

pub(crate) const COS_COEFFS_F64: [f64; 23] = [
    1.0,
    -1.1399247575174607e-21,
    -0.5,
    3.7724774820191193e-19,
    0.041666666666666664,
    -2.3875436436542907e-17,
    -0.0013888888888885747,
    -9.678259018392463e-16,
    2.4801587297486778e-05,
    4.924141452473386e-14,
    -2.755734187130068e-07,
    6.595923551445847e-13,
    2.0863109038375228e-09,
    2.1045225666463804e-12,
    -1.3945869728049475e-11,
    2.242711520404441e-12,
    -1.5190267372248051e-12,
    8.374108806832156e-13,
    -3.364846344502883e-13,
    9.827771930895603e-14,
    -1.9728105301385762e-14,
    2.4332891569700873e-15,
    -1.3903679550728462e-16,
];

/// Rounded π/2 widened by the leading limb offset of the reducers.
#[inline(always)]
fn kernel_bound<T: TrigFloat>() -> T {
    T::modulus(Modulus::FracPi2).c + T::epsilon() + T::epsilon()
}

/// Sine on [0, π/2].
///
/// Arguments below the small angle threshold return unchanged, the polynomial's
/// constant term would otherwise dominate there.
#[inline]
pub fn sin_kernel<T: TrigFloat>(x: T) -> T {
    debug_assert!(
        x >= -T::SIN_SMALL_ANGLE && x <= kernel_bound::<T>(),
        "sine kernel argument {x:?} is outside [0, π/2]"
    );
    if x <= T::SIN_SMALL_ANGLE {
        return x;
    }
    compensated_horner(&T::SIN_COEFFICIENTS, x)
}

/// Cosine on [0, π/2].
#[inline]
pub fn cos_kernel<T: TrigFloat>(x: T) -> T {
    debug_assert!(
        x >= -T::SIN_SMALL_ANGLE && x <= kernel_bound::<T>(),
        "cosine kernel argument {x:?} is outside [0, π/2]"
    );
    compensated_horner(&T::COS_COEFFICIENTS, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polynomial::horner;
    use rand::Rng;

    #[test]
    fn kernel_endpoints() {
        assert_eq!(sin_kernel(0f64), 0.);
        assert_eq!(cos_kernel(0f64), 1.);
        assert_eq!(cos_kernel(0f32), 1.);
        assert_eq!(sin_kernel(1e-9f64), 1e-9);
        let edge = std::f64::consts::FRAC_PI_2;
        assert!((cos_kernel(edge) - 6.123233995736766e-17).abs() < 1e-30);
        assert!((sin_kernel(edge) - 1.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn double_kernels_accuracy() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x = rng.random_range(0f64..1.5);
            let s = sin_kernel(x);
            let c = cos_kernel(x);
            assert!((s - x.sin()).abs() <= x.sin().ulp(), "sin({x}) = {s}");
            assert!((c - x.cos()).abs() <= x.cos().ulp(), "cos({x}) = {c}");
        }
    }

    #[test]
    fn single_kernels_accuracy() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x = rng.random_range(0f32..1.5);
            let s = sin_kernel(x) as f64;
            let c = cos_kernel(x) as f64;
            let es = (x as f64).sin();
            let ec = (x as f64).cos();
            assert!((s - es).abs() <= (es as f32).ulp() as f64, "sinf({x}) = {s}");
            assert!((c - ec).abs() <= (ec as f32).ulp() as f64, "cosf({x}) = {c}");
        }
    }

    #[test]
    fn compensation_beats_plain_horner() {
        let mut worst_plain = 0f64;
        let mut worst_compensated = 0f64;
        for i in 1..2000 {
            let x = i as f64 / 2000.0 * std::f64::consts::FRAC_PI_2;
            let expected = x.cos();
            let ulp = expected.ulp();
            worst_plain = worst_plain.max((horner(&f64::COS_COEFFICIENTS, x) - expected).abs() / ulp);
            worst_compensated = worst_compensated.max((cos_kernel(x) - expected).abs() / ulp);
        }
        assert!(worst_compensated <= 1.0);
        assert!(worst_plain > worst_compensated);
    }
}
