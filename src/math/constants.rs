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

/// Period a reduction is performed against.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Modulus {
    /// π
    Pi,
    /// 2π
    TwoPi,
    /// π/2, the modulus used by sine and cosine.
    FracPi2,
}

/// Multi-word split of a modulus `C` and of its reciprocal.
///
/// Every limb is the working precision rounding of what the previous limbs left out,
/// so that `c1 + c2 + c3` approximates `C` to roughly three times the working precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CodyWaiteSplit<T> {
    pub c1: T,
    pub c2: T,
    pub c3: T,
    pub r1: T,
    pub r2: T,
    pub r3: T,
}

/// Two-limb modulus and rounding bias for the Boldo-Daumas-Li reduction.
///
/// `c1` carries trailing zero bits so that `z * c1` is exact for any quotient
/// `z` the reduction produces in its valid range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoldoDaumasLiSplit<T> {
    pub c1: T,
    pub c2: T,
    /// Reciprocal of `C` accurate to `n` bits.
    pub r: T,
    pub n: i32,
    /// `3 * 2^(p - n - 2)` for a `p` bits significand.
    pub bias: T,
}

/// Precomputed reduction parameters for one modulus at one precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReductionModulus<T> {
    /// `C` rounded to nearest.
    pub c: T,
    pub cody_waite: CodyWaiteSplit<T>,
    pub boldo_daumas_li: BoldoDaumasLiSplit<T>,
}

pub(crate) static PI_F32: ReductionModulus<f32> = ReductionModulus {
    c: f32::from_bits(0x40490fdb),
    cody_waite: CodyWaiteSplit {
        c1: f32::from_bits(0x40490fdb),
        c2: f32::from_bits(0xb3bbbd2e),
        c3: f32::from_bits(0xa7772ced),
        r1: f32::from_bits(0x3ea2f983),
        r2: f32::from_bits(0x325c9c88),
        r3: f32::from_bits(0x25294fe1),
    },
    boldo_daumas_li: BoldoDaumasLiSplit {
        c1: f32::from_bits(0x40490fdc),
        c2: f32::from_bits(0xb4aeef48),
        r: f32::from_bits(0x3ea2f983),
        n: 25,
        bias: 0.375,
    },
};

pub(crate) static TWO_PI_F32: ReductionModulus<f32> = ReductionModulus {
    c: f32::from_bits(0x40c90fdb),
    cody_waite: CodyWaiteSplit {
        c1: f32::from_bits(0x40c90fdb),
        c2: f32::from_bits(0xb43bbd2e),
        c3: f32::from_bits(0xa7f72ced),
        r1: f32::from_bits(0x3e22f983),
        r2: f32::from_bits(0x31dc9c88),
        r3: f32::from_bits(0x24a94fe1),
    },
    boldo_daumas_li: BoldoDaumasLiSplit {
        c1: f32::from_bits(0x40c90fdc),
        c2: f32::from_bits(0xb52eef48),
        r: f32::from_bits(0x3e22f983),
        n: 25,
        bias: 0.375,
    },
};

pub(crate) static FRAC_PI_2_F32: ReductionModulus<f32> = ReductionModulus {
    c: f32::from_bits(0x3fc90fdb),
    cody_waite: CodyWaiteSplit {
        c1: f32::from_bits(0x3fc90fdb),
        c2: f32::from_bits(0xb33bbd2e),
        c3: f32::from_bits(0xa6f72ced),
        r1: f32::from_bits(0x3f22f983),
        r2: f32::from_bits(0x32dc9c88),
        r3: f32::from_bits(0x25a94fe1),
    },
    boldo_daumas_li: BoldoDaumasLiSplit {
        c1: f32::from_bits(0x3fc90fdc),
        c2: f32::from_bits(0xb42eef48),
        r: f32::from_bits(0x3f22f983),
        n: 25,
        bias: 0.375,
    },
};

pub(crate) static PI_F64: ReductionModulus<f64> = ReductionModulus {
    c: f64::from_bits(0x400921fb54442d18),
    cody_waite: CodyWaiteSplit {
        c1: f64::from_bits(0x400921fb54442d18),
        c2: f64::from_bits(0x3ca1a62633145c07),
        c3: f64::from_bits(0xb92f1976b7ed8fbc),
        r1: f64::from_bits(0x3fd45f306dc9c883),
        r2: f64::from_bits(0xbc76b01ec5417056),
        r3: f64::from_bits(0xb916447e493ad4ce),
    },
    boldo_daumas_li: BoldoDaumasLiSplit {
        c1: f64::from_bits(0x400921fb54442d18),
        c2: f64::from_bits(0x3ca1a62633145c00),
        r: f64::from_bits(0x3fd45f306dc9c883),
        n: 54,
        bias: 0.375,
    },
};

pub(crate) static TWO_PI_F64: ReductionModulus<f64> = ReductionModulus {
    c: f64::from_bits(0x401921fb54442d18),
    cody_waite: CodyWaiteSplit {
        c1: f64::from_bits(0x401921fb54442d18),
        c2: f64::from_bits(0x3cb1a62633145c07),
        c3: f64::from_bits(0xb93f1976b7ed8fbc),
        r1: f64::from_bits(0x3fc45f306dc9c883),
        r2: f64::from_bits(0xbc66b01ec5417056),
        r3: f64::from_bits(0xb906447e493ad4ce),
    },
    boldo_daumas_li: BoldoDaumasLiSplit {
        c1: f64::from_bits(0x401921fb54442d18),
        c2: f64::from_bits(0x3cb1a62633145c00),
        r: f64::from_bits(0x3fc45f306dc9c883),
        n: 54,
        bias: 0.375,
    },
};

pub(crate) static FRAC_PI_2_F64: ReductionModulus<f64> = ReductionModulus {
    c: f64::from_bits(0x3ff921fb54442d18),
    cody_waite: CodyWaiteSplit {
        c1: f64::from_bits(0x3ff921fb54442d18),
        c2: f64::from_bits(0x3c91a62633145c07),
        c3: f64::from_bits(0xb91f1976b7ed8fbc),
        r1: f64::from_bits(0x3fe45f306dc9c883),
        r2: f64::from_bits(0xbc86b01ec5417056),
        r3: f64::from_bits(0xb926447e493ad4ce),
    },
    boldo_daumas_li: BoldoDaumasLiSplit {
        c1: f64::from_bits(0x3ff921fb54442d18),
        c2: f64::from_bits(0x3c91a62633145c00),
        r: f64::from_bits(0x3fe45f306dc9c883),
        n: 54,
        bias: 0.375,
    },
};
