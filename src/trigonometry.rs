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
use crate::math::{
    ArgumentReduction, BoldoDaumasLi, CodyWaite, NaiveReduction, TrigFloat, cos_array_with, init,
    sin_array_with,
};
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

/// Element wise trigonometry executor.
pub trait TrigonometryExecutor<T: TrigFloat> {
    /// Count of samples always must match.
    fn sin(&self, src: &[T], dst: &mut [T]) -> Result<(), TrigError>;
    /// Count of samples always must match.
    fn cos(&self, src: &[T], dst: &mut [T]) -> Result<(), TrigError>;
}

/// Defines the argument reduction method.
///
/// All methods agree on small arguments, they differ in how far they stay exact.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum ReductionMethod {
    /// Single rounded multiple subtraction.
    /// Accurate only for arguments of a few periods.
    Naive,
    /// Three limb Cody-Waite reduction.
    #[default]
    CodyWaite,
    /// Two limb Boldo-Daumas-Li reduction.
    /// Faster, loses relative accuracy for results very close to zero.
    BoldoDaumasLi,
}

impl FromStr for ReductionMethod {
    type Err = TrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(ReductionMethod::Naive),
            "cw" | "cody-waite" => Ok(ReductionMethod::CodyWaite),
            "bdl" | "boldo-daumas-li" => Ok(ReductionMethod::BoldoDaumasLi),
            _ => Err(TrigError::UnknownReductionMethod(s.to_string())),
        }
    }
}

impl Display for ReductionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ReductionMethod::Naive => "naive",
            ReductionMethod::CodyWaite => "cody-waite",
            ReductionMethod::BoldoDaumasLi => "boldo-daumas-li",
        })
    }
}

/// Declares executor options
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct TrigonometryOptions {
    pub reduction_method: ReductionMethod,
}

struct TrigonometryExecutorImpl<T, R> {
    _phantom: PhantomData<(T, R)>,
}

impl<T: TrigFloat, R: ArgumentReduction<T> + Send + Sync> TrigonometryExecutor<T>
    for TrigonometryExecutorImpl<T, R>
{
    fn sin(&self, src: &[T], dst: &mut [T]) -> Result<(), TrigError> {
        sin_array_with::<T, R>(src, dst)
    }

    fn cos(&self, src: &[T], dst: &mut [T]) -> Result<(), TrigError> {
        cos_array_with::<T, R>(src, dst)
    }
}

pub type TrigonometryF32Executor = dyn TrigonometryExecutor<f32> + Send + Sync;
pub type TrigonometryF64Executor = dyn TrigonometryExecutor<f64> + Send + Sync;

fn make_executor<T: TrigFloat, R: ArgumentReduction<T> + Send + Sync + 'static>()
-> Box<dyn TrigonometryExecutor<T> + Send + Sync> {
    Box::new(TrigonometryExecutorImpl::<T, R> {
        _phantom: PhantomData,
    })
}

/// Creates an executor bound to the reduction method from `options`.
///
/// # Panics
///
/// If the floating point environment does not round to nearest.
pub fn create_trigonometry_executor<T: TrigFloat>(
    options: TrigonometryOptions,
) -> Box<dyn TrigonometryExecutor<T> + Send + Sync> {
    init();
    log::debug!(
        "Creating {} executor with {} reduction",
        std::any::type_name::<T>(),
        options.reduction_method
    );
    match options.reduction_method {
        ReductionMethod::Naive => make_executor::<T, NaiveReduction>(),
        ReductionMethod::CodyWaite => make_executor::<T, CodyWaite>(),
        ReductionMethod::BoldoDaumasLi => make_executor::<T, BoldoDaumasLi>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{f_cos, f_sinf};

    #[test]
    fn parses_reduction_methods() {
        assert_eq!("cw".parse(), Ok(ReductionMethod::CodyWaite));
        assert_eq!("Cody-Waite".parse(), Ok(ReductionMethod::CodyWaite));
        assert_eq!("bdl".parse(), Ok(ReductionMethod::BoldoDaumasLi));
        assert_eq!("naive".parse(), Ok(ReductionMethod::Naive));
        assert_eq!(
            "payne-hanek".parse::<ReductionMethod>(),
            Err(TrigError::UnknownReductionMethod("payne-hanek".to_string()))
        );
        for method in [
            ReductionMethod::Naive,
            ReductionMethod::CodyWaite,
            ReductionMethod::BoldoDaumasLi,
        ] {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[test]
    fn default_executor_matches_scalar() {
        let executor = create_trigonometry_executor::<f32>(TrigonometryOptions::default());
        let src = (0..256).map(|i| i as f32 * 0.37 - 40.).collect::<Vec<_>>();
        let mut dst = vec![0f32; src.len()];
        executor.sin(&src, &mut dst).unwrap();
        for (&x, &y) in src.iter().zip(dst.iter()) {
            assert_eq!(y, f_sinf(x));
        }
    }

    #[test]
    fn executors_agree() {
        let src = (0..256).map(|i| i as f64 * 0.011 - 1.3).collect::<Vec<_>>();
        let mut dst = vec![0f64; src.len()];
        for method in [
            ReductionMethod::Naive,
            ReductionMethod::CodyWaite,
            ReductionMethod::BoldoDaumasLi,
        ] {
            let executor = create_trigonometry_executor::<f64>(TrigonometryOptions {
                reduction_method: method,
            });
            executor.cos(&src, &mut dst).unwrap();
            for (&x, &y) in src.iter().zip(dst.iter()) {
                assert!((y - f_cos(x)).abs() <= 1e-15, "{method} cos({x})");
            }
            let mut short = vec![0f64; 3];
            assert!(executor.sin(&src, &mut short).is_err());
        }
    }
}
