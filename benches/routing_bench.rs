use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launchpad::routing::{decide, PathFilter, MAINTENANCE_PATH};

const PATHS: &[&str] = &[
    "/",
    "/pricing",
    MAINTENANCE_PATH,
    "/api/health",
    "/static/fonts/inter.woff2",
    "/some/deeply/nested/page/that/does/not/exist",
];

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing_policy");

    for maintenance_mode in [false, true] {
        group.bench_with_input(
            BenchmarkId::from_parameter(maintenance_mode),
            &maintenance_mode,
            |b, &flag| {
                b.iter(|| {
                    for path in PATHS {
                        black_box(decide(black_box(path), flag));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_path_filter(c: &mut Criterion) {
    let filter = PathFilter::default();

    c.bench_function("path_filter", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(filter.matches(black_box(path)));
            }
        });
    });
}

criterion_group!(benches, bench_decide, bench_path_filter);
criterion_main!(benches);
