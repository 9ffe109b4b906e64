//! Criterion benchmarks for the slider hot paths.
//!
//! Benchmarks:
//! 1. Touch-to-value mapping (snap on every touch event)
//! 2. Tick layout iteration (walked once per draw)

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stepslider_core::{map_touch, SliderConfig, Style, TickLayout, TrackGeometry};

fn bench_map_touch(c: &mut Criterion) {
    let config = SliderConfig::default();
    let geometry = TrackGeometry::new(800.0, 5.0);

    c.bench_function("map_touch", |b| {
        let mut x = 0.0_f64;
        b.iter(|| {
            x = (x + 7.3) % 800.0;
            map_touch(black_box(geometry), black_box(&config), black_box(x))
        })
    });
}

fn bench_tick_layout(c: &mut Criterion) {
    let config = SliderConfig {
        minimum_value: 0.0,
        maximum_value: 1_000.0,
        value_interval: 5.0,
        ..Default::default()
    };
    let geometry = TrackGeometry::new(800.0, 5.0);

    c.bench_function("tick_layout_iter", |b| {
        b.iter(|| {
            let layout = TickLayout::new(
                black_box(geometry),
                &config,
                Style::Classic.params(),
                20.0,
            );
            layout.iter().map(|mark| mark.x).sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_map_touch, bench_tick_layout);
criterion_main!(benches);
