use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use flatgeom::{
    polygon::{PolygonArray, PolygonArraySource, PolygonBuildOptions},
    AABB,
};

/// Ring approximating a circle with `vertex_count` vertexes.
fn circle_ring(cx: f64, cy: f64, radius: f64, vertex_count: usize) -> Vec<f64> {
    (0..vertex_count)
        .flat_map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / vertex_count as f64;
            [cx + radius * angle.cos(), cy + radius * angle.sin()]
        })
        .collect()
}

/// Grid of `polygon_count` polygons, each a circle with one hole.
fn polygon_grid(polygon_count: usize, vertex_count: usize) -> PolygonArray {
    let side = (polygon_count as f64).sqrt().ceil() as usize;
    let polygons = (0..polygon_count).map(|i| {
        let cx = (i % side) as f64 * 3.0;
        let cy = (i / side) as f64 * 3.0;
        Some(vec![
            circle_ring(cx, cy, 1.0, vertex_count),
            circle_ring(cx, cy, 0.5, vertex_count),
        ])
    });
    PolygonArray::from_polygons(polygons, &PolygonBuildOptions::new()).unwrap()
}

fn bench_area(b: &mut Bencher, array: &PolygonArray) {
    b.iter(|| array.area())
}

fn bench_length(b: &mut Bencher, array: &PolygonArray) {
    b.iter(|| array.length())
}

fn bench_intersects_bounds(b: &mut Bencher, array: &PolygonArray, bounds: &AABB) {
    b.iter(|| array.intersects_bounds(bounds, None))
}

fn measures_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_array_measures");
    let polygon_counts = &[100, 1000, 10000];
    for &i in polygon_counts {
        let array = polygon_grid(i, 64);
        group.bench_with_input(BenchmarkId::new("area", i), &array, bench_area);
        group.bench_with_input(BenchmarkId::new("length", i), &array, bench_length);
    }

    group.finish();
}

fn intersects_bounds_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_array_intersects_bounds");
    let polygon_counts = &[100, 1000, 10000];
    for &i in polygon_counts {
        let array = polygon_grid(i, 64);
        let bounds = AABB::new(10.0, 10.0, 40.0, 40.0);
        group.bench_with_input(BenchmarkId::new("kernel", i), &array, |b, array| {
            bench_intersects_bounds(b, array, &bounds)
        });

        let index = array.create_aabb_index().unwrap();
        group.bench_with_input(BenchmarkId::new("indexed", i), &array, |b, array| {
            b.iter(|| index.intersects_bounds(array, &bounds))
        });
    }

    group.finish();
}

criterion_group!(polygon_array, measures_group, intersects_bounds_group);
criterion_main!(polygon_array);
