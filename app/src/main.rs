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
    ArgumentReduction, BoldoDaumasLi, CodyWaite, Modulus, NaiveReduction, ReductionMethod,
    TrigFloat, cos_with, sin_with,
};
use rand::Rng;
use rug::Float;
use rug::float::Constant;
use std::env;

const MPFR_PREC: u32 = 256;

#[derive(Default)]
struct ErrorHistogram {
    buckets: [usize; 4],
    max_by_magnitude: Vec<(f64, f64, f64)>,
    quotient_mismatches: usize,
}

impl ErrorHistogram {
    fn push(&mut self, ulp_error: f64) {
        let bucket = if ulp_error >= 3.0 {
            3
        } else if ulp_error >= 2.0 {
            2
        } else if ulp_error >= 1.0 {
            1
        } else {
            0
        };
        self.buckets[bucket] += 1;
    }

    fn print(&self, title: &str) {
        let total = self.buckets.iter().sum::<usize>().max(1);
        println!("  {title}");
        if self.quotient_mismatches != 0 {
            println!("  quotient mismatches {}", self.quotient_mismatches);
        }
        for (i, label) in [" 0 ulp", " 1 ulp", " 2 ulp", "≥3 ulp"].iter().enumerate() {
            println!(
                "  {label} {} ({:.2}%)",
                self.buckets[i],
                self.buckets[i] as f64 / total as f64 * 100.0
            );
        }
        if !self.max_by_magnitude.is_empty() {
            println!(
                "  {:>24}  {:>24}  {:>24}",
                "magnitude of x", "absolute error", "relative error (ulp)"
            );
            for (magnitude, abs_error, rel_error) in self.max_by_magnitude.iter() {
                println!("  {magnitude:>24e}  {abs_error:>24.12e}  {rel_error:>24.1}");
            }
        }
        println!();
    }
}

fn mpfr_modulus(modulus: Modulus) -> Float {
    let pi = Float::with_val(MPFR_PREC, Constant::Pi);
    match modulus {
        Modulus::Pi => pi,
        Modulus::TwoPi => pi * 2u32,
        Modulus::FracPi2 => pi / 2u32,
    }
}

fn ulp_of<T: TrigFloat>(value: f64) -> f64 {
    T::from(value).unwrap().ulp().to_f64().unwrap()
}

fn check_reduction<T: TrigFloat, R: ArgumentReduction<T>>(
    magnitudes: &[f64],
    samples: usize,
) where
    Float: rug::Assign<T>,
{
    let mut rng = rand::rng();
    for modulus in [Modulus::Pi, Modulus::TwoPi, Modulus::FracPi2] {
        let divisor = mpfr_modulus(modulus);
        let m = T::modulus(modulus);
        let mut histogram = ErrorHistogram::default();
        for &magnitude in magnitudes.iter() {
            let mut max_abs = 0f64;
            let mut max_rel = 0f64;
            for _ in 0..samples {
                let x = T::from(rng.random_range(-magnitude..magnitude)).unwrap();
                let mx = Float::with_val(MPFR_PREC, x);
                let r = R::reduce(m, x);
                let mq = Float::with_val(MPFR_PREC, &mx / &divisor).trunc();
                let expected_quotient = mq.to_integer().and_then(|q| q.to_i64());
                if expected_quotient != r.quotient.to_i64() {
                    histogram.quotient_mismatches += 1;
                    log::warn!(
                        "x = {x:?}: expected quotient {expected_quotient:?}, got {:?}",
                        r.quotient
                    );
                }
                let expected = (mx - mq * &divisor).to_f64();
                let got = r.remainder().to_f64().unwrap();
                let abs_error = (got - expected).abs();
                let rel_error = abs_error / ulp_of::<T>(expected);
                if rel_error >= 3.0 {
                    log::debug!("x = {x:?}: expected remainder {expected}, got {got}");
                }
                max_abs = max_abs.max(abs_error);
                max_rel = max_rel.max(rel_error);
                histogram.push(rel_error);
            }
            histogram
                .max_by_magnitude
                .push((magnitude, max_abs, max_rel));
        }
        histogram.print(&format!(
            "{} by {modulus:?}",
            std::any::type_name::<T>()
        ));
    }
}

fn check_function<T: TrigFloat>(
    name: &str,
    function: impl Fn(T) -> T,
    reference: impl Fn(Float) -> Float,
    samples: usize,
) where
    Float: rug::Assign<T>,
{
    let mut rng = rand::rng();
    let mut histogram = ErrorHistogram::default();
    let domain = std::f64::consts::TAU;
    for _ in 0..samples {
        let x = T::from(rng.random_range(-domain..domain)).unwrap();
        let expected = reference(Float::with_val(MPFR_PREC, x)).to_f64();
        let got = function(x).to_f64().unwrap();
        let ulp_error = (got - expected).abs() / ulp_of::<T>(expected);
        if ulp_error >= 3.0 {
            log::warn!("{name}({x:?}): expected {expected}, got {got}");
        }
        histogram.push(ulp_error);
    }
    histogram.print(&format!("{} {name} on [-2π, 2π]", std::any::type_name::<T>()));
}

fn run<R: ArgumentReduction<f32> + ArgumentReduction<f64>>(samples: usize) {
    let single_magnitudes = [1., 2., 4., 16., 256., 65536., 1048576., 8388608.];
    let double_magnitudes = [
        1.,
        2.,
        4.,
        16.,
        256.,
        65536.,
        4294967296.,
        281474976710656.,
        4503599627370496.,
    ];
    check_reduction::<f32, R>(&single_magnitudes, samples);
    check_reduction::<f64, R>(&double_magnitudes, samples);
    check_function::<f32>("sin", sin_with::<f32, R>, |x| x.sin(), samples);
    check_function::<f32>("cos", cos_with::<f32, R>, |x| x.cos(), samples);
    check_function::<f64>("sin", sin_with::<f64, R>, |x| x.sin(), samples);
    check_function::<f64>("cos", cos_with::<f64, R>, |x| x.cos(), samples);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = env::args().collect::<Vec<_>>();
    let method = args
        .get(1)
        .map(|name| name.parse::<ReductionMethod>())
        .transpose()
        .unwrap_or_else(|e| {
            log::error!("{e}");
            std::process::exit(1);
        })
        .unwrap_or(ReductionMethod::BoldoDaumasLi);
    let samples = args
        .get(2)
        .and_then(|count| count.parse::<usize>().ok())
        .unwrap_or(100000);

    moxtrig::init();
    log::info!("Checking {method} reduction with {samples} samples per magnitude");

    match method {
        ReductionMethod::Naive => run::<NaiveReduction>(samples),
        ReductionMethod::CodyWaite => run::<CodyWaite>(samples),
        ReductionMethod::BoldoDaumasLi => run::<BoldoDaumasLi>(samples),
    }
}
