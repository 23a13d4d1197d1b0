use bench::apply_runtime_config_for_len;
use bench::default_rng;
use bench::random_chunks;
use bench::random_values;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use lazy_seq::Cap;
use lazy_seq::concatenate;
use lazy_seq::filter;
use lazy_seq::iterator;
use lazy_seq::map;
use lazy_seq::reduce;
use lazy_seq::sequence;
use lazy_seq::sort;
use lazy_seq::take;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;
const FILTER_STRIDES: [usize; 3] = [2, 64, 4_096];
const MAX_CHUNK: usize = 32;

fn bench_fold(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("lazy_seq/map_reduce");

    for &size in &SIZES {
        apply_runtime_config_for_len(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);

        group.bench_function(BenchmarkId::new("lazy_seq", size), |bencher| {
            bencher.iter(|| {
                let squares = map(iterator(black_box(&values)), |&x| x.wrapping_mul(x));
                black_box(reduce(squares, |x, acc: i64| acc.wrapping_add(x), 0, Cap::Unbounded))
            })
        });
        group.bench_function(BenchmarkId::new("std_iter", size), |bencher| {
            bencher.iter(|| {
                black_box(&values)
                    .iter()
                    .map(|&x| x.wrapping_mul(x))
                    .fold(0_i64, |acc, x| acc.wrapping_add(x))
            })
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_seq/filter_stride");
    let size = SIZES[1];
    apply_runtime_config_for_len(&mut group, size);

    for &stride in &FILTER_STRIDES {
        group.bench_function(BenchmarkId::new("lazy_seq", stride), |bencher| {
            bencher.iter(|| {
                let naturals = sequence(|i| i, Cap::Unbounded);
                let kept = filter(naturals, |i| i % black_box(stride) == 0);
                black_box(take(kept, Cap::Limit(size)))
            })
        });
        group.bench_function(BenchmarkId::new("std_iter", stride), |bencher| {
            bencher.iter(|| {
                (0_usize..)
                    .filter(|i| i % black_box(stride) == 0)
                    .take(size)
                    .collect::<Vec<_>>()
            })
        });
    }
    group.finish();
}

fn bench_concatenate(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("lazy_seq/concatenate");

    for &size in &SIZES {
        apply_runtime_config_for_len(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let chunks = random_chunks(&mut rng, &values, MAX_CHUNK);

        group.bench_function(BenchmarkId::new("lazy_seq", size), |bencher| {
            bencher.iter(|| {
                let joined = concatenate(black_box(&chunks).iter().map(iterator));
                black_box(reduce(joined, |&x, acc: i64| acc ^ x, 0, Cap::Unbounded))
            })
        });
        group.bench_function(BenchmarkId::new("std_iter", size), |bencher| {
            bencher.iter(|| black_box(&chunks).iter().flatten().fold(0_i64, |acc, &x| acc ^ x))
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("lazy_seq/sort_prefix");

    for &size in &SIZES {
        apply_runtime_config_for_len(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let prefix = size / 2;

        group.bench_function(BenchmarkId::new("lazy_seq", size), |bencher| {
            bencher.iter(|| {
                let items = iterator(black_box(&values).iter().copied());
                black_box(sort(items, |a, b| a < b, Cap::Limit(prefix)))
            })
        });
        group.bench_function(BenchmarkId::new("std_sort", size), |bencher| {
            bencher.iter(|| {
                let mut items = black_box(&values)[..prefix].to_vec();
                items.sort();
                black_box(items)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fold, bench_filter, bench_concatenate, bench_sort);
criterion_main!(benches);
