/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use moxtrig::{
    BoldoDaumasLi, CodyWaite, Modulus, NaiveReduction, ReductionMethod, TrigFloat,
    TrigonometryOptions, boldo_daumas_li_reduce, cody_waite_reduce, create_trigonometry_executor,
    f_cos, f_cosf, f_sin, f_sinf, naive_reduce, sin_with,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sin(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("system: sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::sin(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_sin(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: sin BDL", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin_with::<f64, BoldoDaumasLi>(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: sin naive", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin_with::<f64, NaiveReduction>(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("libm::cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cos(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_cos(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("libm::sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sinf(i as f32 * 0.731));
            }
        })
    });

    c.bench_function("system: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::sin(i as f32 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_sinf(i as f32 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_cosf(i as f32 * 0.731));
            }
        })
    });

    c.bench_function("moxtrig: sin CW large", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin_with::<f64, CodyWaite>(i as f64 * 4503599627.370496));
            }
        })
    });

    let m = f64::modulus(Modulus::FracPi2);

    c.bench_function("moxtrig: reduce naive", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(naive_reduce(m, i as f64 * 1000.731));
            }
        })
    });

    c.bench_function("moxtrig: reduce Cody-Waite", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cody_waite_reduce(m, i as f64 * 1000.731));
            }
        })
    });

    c.bench_function("moxtrig: reduce Boldo-Daumas-Li", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(boldo_daumas_li_reduce(m, i as f64 * 1000.731));
            }
        })
    });

    let src = (1..4096).map(|i| i as f32 * 0.731).collect::<Vec<_>>();
    let mut dst = vec![0f32; src.len()];

    for method in [
        ReductionMethod::Naive,
        ReductionMethod::CodyWaite,
        ReductionMethod::BoldoDaumasLi,
    ] {
        let executor = create_trigonometry_executor::<f32>(TrigonometryOptions {
            reduction_method: method,
        });
        c.bench_function(&format!("moxtrig: sinf array {method}"), |b| {
            b.iter(|| {
                executor.sin(&src, &mut dst).unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
