//! Benchmarks for the divide-and-conquer triangulation and its predicates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dc_delaunay::triangulation::{merge, sort_points, triangulate_recursive};
use dc_delaunay::{circumcircle, intersects, triangulate, Edge2, Point2};

/// Generates random points in a 100x100 square.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push(Point2::new(x, y));
    }

    points
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for count in [10, 100, 1000, 5000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, pts| {
            b.iter(|| triangulate(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_triangulate_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_recursive");

    for count in [100, 1000] {
        let points = sort_points(&generate_random_points(count, 54321));
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sorted", count), &points, |b, pts| {
            b.iter(|| triangulate_recursive(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for count in [100, 1000] {
        let points = sort_points(&generate_random_points(count, 777));
        let (left, right) = points.split_at(count / 2);
        let left_edges = triangulate_recursive(left).map(|t| t.into_parts().1);
        let right_edges = triangulate_recursive(right).map(|t| t.into_parts().1);
        let (Ok(left_edges), Ok(right_edges)) = (left_edges, right_edges) else {
            continue;
        };

        group.bench_function(BenchmarkId::new("halves", count), |b| {
            b.iter(|| {
                merge(
                    black_box(left),
                    black_box(right),
                    left_edges.clone(),
                    right_edges.clone(),
                )
            })
        });
    }

    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");

    let a = Point2::new(0.0_f64, 0.0);
    let b = Point2::new(10.0, 1.0);
    let p = Point2::new(3.0, 7.0);
    let q = Point2::new(8.0, -2.0);

    group.bench_function("circumcircle", |bench| {
        bench.iter(|| circumcircle(black_box(a), black_box(b), black_box(p)))
    });

    let e1 = Edge2::new(a, p);
    let e2 = Edge2::new(b, q);
    group.bench_function("intersects", |bench| {
        bench.iter(|| intersects(black_box(&e1), black_box(&e2)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_triangulate,
    bench_triangulate_presorted,
    bench_merge,
    bench_predicates
);
criterion_main!(benches);
