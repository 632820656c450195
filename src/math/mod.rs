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
mod bdl;
mod cody_waite;
mod common;
mod constants;
mod dekker;
mod float;
mod kernel;
mod polynomial;
mod reduce;
mod rounding;
mod sincos;

pub use bdl::boldo_daumas_li_reduce;
pub use cody_waite::cody_waite_reduce;
pub use constants::{BoldoDaumasLiSplit, CodyWaiteSplit, Modulus, ReductionModulus};
pub use dekker::Dekker;
pub use float::TrigFloat;
pub use kernel::{cos_kernel, sin_kernel};
pub use polynomial::{compensated_horner, horner};
pub use reduce::{
    ArgumentReduction, BoldoDaumasLi, CodyWaite, NaiveReduction, ReductionResult, naive_reduce,
};
pub use rounding::{init, is_round_to_nearest};
pub use sincos::{
    cos, cos_array, cos_array_with, cos_with, f_cos, f_cosf, f_sin, f_sincos, f_sincosf, f_sinf,
    sin, sin_array, sin_array_with, sin_with, sincos, sincos_with,
};
