use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pic_filter::{
    BuiltinFilter, Filter2d, ImageStore, ImageStoreMut, ParallelMethod, ThreadingPolicy,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (2048usize, 2048usize);
    let pixels = (0..width * height)
        .map(|i| (i.wrapping_mul(2654435761) >> 7) as i32 & 0xff)
        .collect::<Vec<_>>();
    let store = ImageStore::from_slice(&pixels, width, height).unwrap();

    for builtin in [
        BuiltinFilter::Laplacian3x3,
        BuiltinFilter::LaplacianOfGaussian9x9,
    ] {
        let mut group = c.benchmark_group(format!("{:?}", builtin));
        group.sample_size(10);
        for method in ParallelMethod::ALL {
            for threads in [1usize, 2, 4, 8] {
                if method == ParallelMethod::Sequential && threads > 1 {
                    continue;
                }
                let mut filter = Filter2d::new(builtin);
                filter.set_parallel_method(method);
                filter.set_threading_policy(ThreadingPolicy::Fixed(threads));
                // chunk follows the thread count
                filter.set_work_chunk(threads * 8);
                group.bench_with_input(
                    BenchmarkId::new(format!("{:?}", method), threads),
                    &filter,
                    |b, filter| {
                        let mut target = ImageStoreMut::alloc(width, height).unwrap();
                        b.iter(|| filter.apply(&store, &mut target).unwrap())
                    },
                );
            }
        }
        group.finish();
    }

    c.bench_function("WorkQueue chunk sweep, 4 threads", |b| {
        let mut target = ImageStoreMut::alloc(width, height).unwrap();
        let mut filter = Filter2d::new(BuiltinFilter::Laplacian5x5);
        filter.set_parallel_method(ParallelMethod::WorkQueue);
        filter.set_threading_policy(ThreadingPolicy::Fixed(4));
        b.iter(|| {
            for chunk in [1usize, 2, 4, 8, 16, 32] {
                filter.set_work_chunk(chunk);
                filter.apply(&store, &mut target).unwrap();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
