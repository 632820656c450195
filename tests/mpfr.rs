#![cfg(feature = "mpfr")]
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
use moxtrig::{
    BoldoDaumasLi, CodyWaite, Modulus, ReductionResult, TrigFloat, boldo_daumas_li_reduce,
    cody_waite_reduce, cos_with, sin_with,
};
use rand::Rng;
use rug::Float;
use rug::float::Constant;

const MPFR_PREC: u32 = 256;

const MODULI: [Modulus; 3] = [Modulus::Pi, Modulus::TwoPi, Modulus::FracPi2];

fn mpfr_modulus(modulus: Modulus) -> Float {
    let pi = Float::with_val(MPFR_PREC, Constant::Pi);
    match modulus {
        Modulus::Pi => pi,
        Modulus::TwoPi => pi * 2u32,
        Modulus::FracPi2 => pi / 2u32,
    }
}

fn mpfr_quotient(x: f64, modulus: &Float) -> i64 {
    let q = (Float::with_val(MPFR_PREC, x) / modulus).trunc();
    q.to_integer()
        .and_then(|q| q.to_i64())
        .expect("quotient must fit i64")
}

fn ulp_error(actual: f64, expected: &Float) -> f64 {
    let rounded = expected.to_f64();
    let diff = Float::with_val(MPFR_PREC, actual) - expected;
    let diff = diff.abs().to_f64();
    if diff == 0.0 {
        return 0.0;
    }
    diff / rounded.ulp()
}

fn ulp_error_f32(actual: f32, expected: &Float) -> f64 {
    let rounded = expected.to_f32();
    let diff = Float::with_val(MPFR_PREC, actual) - expected;
    diff.abs().to_f64() / rounded.ulp() as f64
}

fn random_magnitude<R: Rng>(rng: &mut R, max_exponent: i32) -> f64 {
    let exponent = rng.random_range(0..max_exponent);
    let x = rng.random_range(2f64.powi(exponent)..2f64.powi(exponent + 1));
    if rng.random_bool(0.5) { -x } else { x }
}

/// `x - (q * C + v1 + v2)` relative to `|x|`.
fn identity_residual(x: f64, r: ReductionResult<f64>, quotient: i64, modulus: &Float) -> f64 {
    let reconstructed = Float::with_val(MPFR_PREC, quotient) * modulus + r.v1 + r.v2;
    let residual = Float::with_val(MPFR_PREC, x) - reconstructed;
    residual.abs().to_f64()
}

#[test]
fn double_quotients_match_mpfr() {
    let mut rng = rand::rng();
    for modulus in MODULI {
        let c = mpfr_modulus(modulus);
        let m = f64::modulus(modulus);
        for _ in 0..20000 {
            let x = random_magnitude(&mut rng, 52);
            let expected = mpfr_quotient(x, &c);
            let cw = cody_waite_reduce(m, x);
            assert_eq!(cw.quotient, expected, "Cody-Waite x = {x}, {modulus:?}");
            let bdl = boldo_daumas_li_reduce(m, x);
            assert_eq!(bdl.quotient, expected, "Boldo-Daumas-Li x = {x}, {modulus:?}");
        }
    }
}

#[test]
fn single_quotients_match_mpfr() {
    let mut rng = rand::rng();
    for modulus in MODULI {
        let c = mpfr_modulus(modulus);
        let m = f32::modulus(modulus);
        for _ in 0..20000 {
            let x = random_magnitude(&mut rng, 23) as f32;
            let expected = mpfr_quotient(x as f64, &c);
            let cw = cody_waite_reduce(m, x);
            assert_eq!(cw.quotient as i64, expected, "Cody-Waite x = {x}, {modulus:?}");
            let bdl = boldo_daumas_li_reduce(m, x);
            assert_eq!(bdl.quotient as i64, expected, "Boldo-Daumas-Li x = {x}, {modulus:?}");
        }
    }
}

#[test]
fn reduction_identity_holds() {
    let mut rng = rand::rng();
    for modulus in MODULI {
        let c = mpfr_modulus(modulus);
        let m = f64::modulus(modulus);
        for _ in 0..20000 {
            let x = random_magnitude(&mut rng, 52);
            let cw = cody_waite_reduce(m, x);
            let residual = identity_residual(x, cw, cw.quotient, &c);
            assert!(
                residual <= 2.0 * cw.v1.ulp() + x.abs() * 2f64.powi(-104),
                "Cody-Waite x = {x}, residual {residual}"
            );
            let bdl = boldo_daumas_li_reduce(m, x);
            let residual = identity_residual(x, bdl, bdl.quotient, &c);
            assert!(
                residual <= 2.0 * bdl.v1.ulp() + x.abs() * 2f64.powi(-90),
                "Boldo-Daumas-Li x = {x}, residual {residual}"
            );
        }
    }
}

#[test]
fn double_accuracy_over_reducible_range() {
    let mut rng = rand::rng();
    let mut above_one = 0usize;
    let samples = 50000;
    for i in 0..samples {
        let x = if i % 2 == 0 {
            rng.random_range(-std::f64::consts::TAU..std::f64::consts::TAU)
        } else {
            random_magnitude(&mut rng, 52)
        };
        let mx = Float::with_val(MPFR_PREC, x);
        let sin_error = ulp_error(sin_with::<f64, CodyWaite>(x), &mx.clone().sin());
        let cos_error = ulp_error(cos_with::<f64, CodyWaite>(x), &mx.cos());
        assert!(sin_error < 3.0, "sin({x}) is off by {sin_error} ULP");
        assert!(cos_error < 3.0, "cos({x}) is off by {cos_error} ULP");
        above_one += (sin_error > 1.0) as usize + (cos_error > 1.0) as usize;
    }
    assert!(above_one * 20 < samples * 2, "{above_one} results above 1 ULP");
}

#[test]
fn single_accuracy_over_reducible_range() {
    let mut rng = rand::rng();
    for _ in 0..50000 {
        let x = random_magnitude(&mut rng, 23) as f32;
        let mx = Float::with_val(MPFR_PREC, x);
        let sin_error = ulp_error_f32(sin_with::<f32, CodyWaite>(x), &mx.clone().sin());
        let cos_error = ulp_error_f32(cos_with::<f32, CodyWaite>(x), &mx.cos());
        assert!(sin_error < 3.0, "sinf({x}) is off by {sin_error} ULP");
        assert!(cos_error < 3.0, "cosf({x}) is off by {cos_error} ULP");
    }
}

#[test]
fn boldo_daumas_li_accuracy_near_zero() {
    let mut rng = rand::rng();
    for _ in 0..50000 {
        let x = rng.random_range(-std::f64::consts::TAU..std::f64::consts::TAU);
        let mx = Float::with_val(MPFR_PREC, x);
        let expected = mx.sin();
        let got = sin_with::<f64, BoldoDaumasLi>(x);
        let error = ulp_error(got, &expected);
        let absolute = (Float::with_val(MPFR_PREC, got) - &expected).abs().to_f64();
        assert!(error < 3.0 || absolute < 1e-28, "sin({x}) is off by {error} ULP");
    }
}
