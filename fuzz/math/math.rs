#![no_main]

use libfuzzer_sys::fuzz_target;
use moxtrig::{
    Modulus, TrigFloat, boldo_daumas_li_reduce, cody_waite_reduce, f_cos, f_cosf, f_sin,
    f_sincos, f_sincosf, f_sinf,
};

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let z_f32 = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let z_f64 = f64::from_bits(data);

    if z_f32.is_finite() && z_f32.abs() <= f32::MAX_REDUCIBLE {
        let s = f_sinf(z_f32);
        let c = f_cosf(z_f32);
        assert!(s.abs() <= 1. + f32::EPSILON, "sinf({z_f32}) = {s}");
        assert!(c.abs() <= 1. + f32::EPSILON, "cosf({z_f32}) = {c}");
        assert_eq!(f_sinf(-z_f32).to_bits(), (-s).to_bits());
        assert_eq!(f_cosf(-z_f32).to_bits(), c.to_bits());
        assert_eq!(f_sincosf(z_f32), (s, c));
        for modulus in [Modulus::Pi, Modulus::TwoPi, Modulus::FracPi2] {
            let m = f32::modulus(modulus);
            let cw = cody_waite_reduce(m, z_f32);
            assert!(cw.remainder().abs() <= m.c, "{z_f32} by {modulus:?}");
            let bdl = boldo_daumas_li_reduce(m, z_f32);
            assert!(bdl.remainder().abs() <= m.c, "{z_f32} by {modulus:?}");
        }
    } else if !z_f32.is_finite() {
        assert!(f_sinf(z_f32).is_nan());
        assert!(f_cosf(z_f32).is_nan());
    }

    if z_f64.is_finite() && z_f64.abs() <= f64::MAX_REDUCIBLE {
        let s = f_sin(z_f64);
        let c = f_cos(z_f64);
        assert!(s.abs() <= 1. + f64::EPSILON, "sin({z_f64}) = {s}");
        assert!(c.abs() <= 1. + f64::EPSILON, "cos({z_f64}) = {c}");
        assert_eq!(f_sin(-z_f64).to_bits(), (-s).to_bits());
        assert_eq!(f_cos(-z_f64).to_bits(), c.to_bits());
        assert_eq!(f_sincos(z_f64), (s, c));
        for modulus in [Modulus::Pi, Modulus::TwoPi, Modulus::FracPi2] {
            let m = f64::modulus(modulus);
            let cw = cody_waite_reduce(m, z_f64);
            assert!(cw.remainder().abs() <= m.c, "{z_f64} by {modulus:?}");
            let bdl = boldo_daumas_li_reduce(m, z_f64);
            assert!(bdl.remainder().abs() <= m.c, "{z_f64} by {modulus:?}");
        }
    } else if !z_f64.is_finite() {
        assert!(f_sin(z_f64).is_nan());
        assert!(f_cos(z_f64).is_nan());
    }
});
