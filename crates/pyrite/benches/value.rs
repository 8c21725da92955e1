// Benchmarks for the hot paths of the value runtime:
// - string interning (hit vs miss)
// - validated bytes construction
// - equality over scalars and sequences

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pyrite::runtime::{Context, Value, convert, ops};

/// Interner hit: repeatedly constructing the same string.
fn bench_intern_hit(c: &mut Criterion) {
    let mut ctx = Context::new();
    let _warm = ctx.new_str("repeated_literal");

    c.bench_function("intern_hit", |b| {
        b.iter(|| black_box(ctx.new_str("repeated_literal")))
    });
}

/// Interner miss: every iteration constructs a unique string.
fn bench_intern_miss(c: &mut Criterion) {
    let mut ctx = Context::new();
    let mut counter = 0u64;

    c.bench_function("intern_miss", |b| {
        b.iter(|| {
            counter = counter.wrapping_add(1);
            let s = format!("unique_literal_{counter}");
            black_box(ctx.new_str(&s))
        })
    });
}

/// Validated bytes construction from value sequences of various lengths.
fn bench_bytes_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_construction");

    for len in [3usize, 64, 1024] {
        let source = Value::list((0..len).map(|i| Value::int((i % 256) as i64)).collect());
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| black_box(convert::bytes(Some(&source)).unwrap()))
        });
    }

    group.finish();
}

/// Equality over the kinds a conformance script compares.
fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");

    let a = Value::bytes(vec![7u8; 1024]);
    let b = Value::bytes(vec![7u8; 1024]);
    group.bench_function("bytes_1024", |bench| {
        bench.iter(|| black_box(&a) == black_box(&b))
    });

    let t1 = Value::tuple((0..64).map(Value::int).collect());
    let t2 = Value::tuple((0..64).map(Value::int).collect());
    group.bench_function("tuple_64", |bench| {
        bench.iter(|| black_box(&t1) == black_box(&t2))
    });

    let x = Value::int(1);
    let y = Value::float(1.0);
    group.bench_function("int_vs_float", |bench| {
        bench.iter(|| black_box(&x) == black_box(&y))
    });

    group.finish();
}

/// Arithmetic promotion path.
fn bench_arithmetic(c: &mut Criterion) {
    let a = Value::int(2);
    let b = Value::int(3);

    c.bench_function("true_division", |bench| {
        bench.iter(|| black_box(ops::div(&a, &b).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_intern_hit,
    bench_intern_miss,
    bench_bytes_construction,
    bench_equality,
    bench_arithmetic
);
criterion_main!(benches);
