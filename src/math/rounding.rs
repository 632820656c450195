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
use std::hint::black_box;
use std::sync::Once;

macro_rules! probe_rounding {
    ($float: ty) => {{
        let one: $float = black_box(1.);
        let eps = black_box(<$float>::EPSILON);
        // Ties go to even and everything else to the nearest neighbour,
        // in both directions.
        one + 0.75 * eps == one + eps
            && -one - 0.75 * eps == -one - eps
            && one + 0.5 * eps == one
            && (one + eps) + 0.5 * eps == one + 2. * eps
            && -one - 0.5 * eps == -one
    }};
}

/// Probes whether the floating point environment rounds to nearest, ties to even.
///
/// Every exactness argument in this crate holds only in that mode.
pub fn is_round_to_nearest() -> bool {
    probe_rounding!(f64) && probe_rounding!(f32)
}

static ROUNDING_CHECK: Once = Once::new();

/// Verifies rounding mode once per process.
///
/// # Panics
///
/// If the environment does not round to nearest.
pub fn init() {
    ROUNDING_CHECK.call_once(|| {
        if !is_round_to_nearest() {
            log::error!("Floating point environment does not round to nearest, ties to even");
            panic!("Floating point environment does not round to nearest, ties to even");
        }
        log::debug!("Rounding to nearest, ties to even is active");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_rounds_to_nearest() {
        assert!(is_round_to_nearest());
        init();
        init();
    }
}
