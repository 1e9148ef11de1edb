//! Benchmarks for properties container layout.
//!
//! These benchmarks measure:
//! - The pure width/count selection function
//! - A full resize notification through a viewport into several containers

use std::{hint::black_box, rc::Rc};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use floem_properties::{
    DisplayProperty, LayoutConfig, PropertiesContainer, RepaintReason, ResizeSource, Viewport,
};

// =============================================================================
// Selection
// =============================================================================

fn bench_select(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("select");

    for width in [800.0, 1200.0, 1600.0].iter() {
        group.bench_with_input(BenchmarkId::new("width", width), width, |b, &width| {
            b.iter(|| {
                for n in 0..64 {
                    black_box(config.select(black_box(width), n));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Resize fan-out
// =============================================================================

fn bench_resize_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_fan_out");

    for count in [1, 10, 50].iter() {
        group.bench_with_input(BenchmarkId::new("containers", count), count, |b, &count| {
            let viewport = Viewport::new(1400.0);
            let source: Rc<dyn ResizeSource> = Rc::new(viewport.clone());
            let containers: Vec<_> = (0..count)
                .map(|i| {
                    let container = PropertiesContainer::new(source.clone(), |_: RepaintReason| {});
                    container.init();
                    container.set_loading(false);
                    container.set_properties(
                        (0..i % 12).map(|p| DisplayProperty::new(format!("name {p}"), "value")),
                    );
                    container
                })
                .collect();

            let mut wide = false;
            b.iter(|| {
                wide = !wide;
                viewport.resize(if wide { 1400.0 } else { 900.0 });
            });

            black_box(containers);
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_resize_fan_out);
criterion_main!(benches);
