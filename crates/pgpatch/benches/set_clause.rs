use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgpatch::{Fields, patch};

/// Build a source object with `n` camelCase fields and the matching whitelist.
fn build_row(n: usize) -> (Fields, Vec<String>) {
    let mut row = Fields::new();
    let mut names = Vec::with_capacity(n);
    for i in 0..n {
        let name = format!("fieldName{i}");
        row.insert(name.clone(), i as i64);
        names.push(name);
    }
    (row, names)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_clause/build");

    for n in [1, 5, 10, 50, 100] {
        let (row, names) = build_row(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(patch(&row, names.clone()).unwrap()));
        });
    }

    group.finish();
}

fn bench_build_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_clause/build_filtered");

    // Whitelist twice as long as the source: half the names miss.
    for n in [5, 10, 50] {
        let (row, _) = build_row(n);
        let names: Vec<String> = (0..n * 2).map(|i| format!("fieldName{i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(patch(&row, names.clone()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_build_filtered);
criterion_main!(benches);
