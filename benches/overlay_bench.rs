use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use quest_map_editor::overlay::grid_clusters;
use quest_map_editor::{ClusterOverlay, LatLng, MapViewport, MarkerList};
use std::hint::black_box;

fn build_synthetic_markers(count: usize) -> MarkerList {
    let mut markers = MarkerList::new();

    for index in 0..count {
        let column = (index % 100) as f64;
        let row = (index / 100) as f64;
        markers.create(LatLng::new(49.5 + row * 0.004, 23.7 + column * 0.006));
    }

    markers
}

fn viewport(zoom: f64) -> MapViewport {
    MapViewport::new(
        LatLng::new(49.84336818523409, 24.026482528084973),
        zoom,
        Vec2::new(1280.0, 700.0),
    )
}

fn bench_overlay_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_rebuild");

    for &count in &[1_000usize, 10_000usize] {
        let markers = build_synthetic_markers(count);
        let view = viewport(10.0);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut overlay = ClusterOverlay::new(60.0, 15.0);
            b.iter(|| {
                let diff = overlay.rebuild(black_box(&markers), Some(1), &view);
                black_box(diff.is_empty())
            })
        });
    }

    group.finish();
}

fn bench_grid_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_clusters");
    let markers = build_synthetic_markers(10_000);
    let mut overlay = ClusterOverlay::new(60.0, 15.0);
    overlay.rebuild(&markers, None, &viewport(10.0));

    for &zoom in &[6.0f64, 10.0, 14.0] {
        group.bench_with_input(BenchmarkId::from_parameter(zoom), &zoom, |b, &zoom| {
            b.iter(|| {
                let clusters = grid_clusters(overlay.visuals(), black_box(zoom), 60.0, 15.0);
                black_box(clusters.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_overlay_rebuild, bench_grid_clustering);
criterion_main!(benches);
