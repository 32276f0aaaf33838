use asynczone::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn chain(depth: usize) -> Zone {
    let mut zone = Zone::root()
        .fork(ZoneSpec::new("zone_0").with_property("needle", 1))
        .unwrap();
    for level in 1..depth {
        zone = zone
            .fork(ZoneSpec::new(format!("zone_{level}")).with_property(format!("k{level}"), level))
            .unwrap();
    }
    zone
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for depth in [1, 8, 64] {
        let zone = chain(depth);
        group.bench_with_input(BenchmarkId::new("deepest_miss", depth), &zone, |b, zone| {
            b.iter(|| zone.get(black_box("missing")))
        });
        group.bench_with_input(BenchmarkId::new("root_hit", depth), &zone, |b, zone| {
            b.iter(|| zone.get(black_box("needle")))
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let zone = chain(4);
    c.bench_function("run", |b| b.iter(|| zone.run(|| black_box(current_value("k1")))));
}

fn bench_wrap(c: &mut Criterion) {
    let zone = chain(4);
    let wrapped = zone.bind(|n: u64| n + 1);
    c.bench_function("wrap_call", |b| b.iter(|| wrapped.call(black_box(1))));
    c.bench_function("wrap_create", |b| {
        b.iter(|| zone.wrap(Callback::new(|n: u64| n + 1)))
    });
}

criterion_group!(benches, bench_get, bench_run, bench_wrap);
criterion_main!(benches);
