//! Benchmark for effect triggering.
//!
//! TARGET: a trigger (catalog + mixer + emitter admission) well under 10µs
//!
//! Run with: cargo bench --package starfx_effects --bench effects_benchmark

#![allow(missing_docs)]

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use starfx_audio::{NullAudioBackend, SoundManifest};
use starfx_effects::{EffectCategory, EffectsConfig, EffectsOrchestrator, ManualClock};

fn orchestrator(clock: ManualClock) -> EffectsOrchestrator<NullAudioBackend, ManualClock> {
    EffectsOrchestrator::new(
        &EffectsConfig::default(),
        SoundManifest::builtin(),
        NullAudioBackend::new(),
        clock,
    )
    .unwrap()
}

fn benchmark_trigger(c: &mut Criterion) {
    c.bench_function("trigger_critical_hit", |b| {
        b.iter_batched(
            || orchestrator(ManualClock::new()),
            |mut fx| {
                black_box(fx.trigger_effect(
                    black_box(EffectCategory::Combat),
                    black_box("critical_hit"),
                    [100.0, 100.0],
                    1.5,
                ));
                fx
            },
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_rejected(c: &mut Criterion) {
    // Clock never moves, so every repeat lands inside the spam window
    let mut fx = orchestrator(ManualClock::new());
    fx.trigger_ui_confirm([0.0, 0.0]);

    c.bench_function("trigger_suppressed", |b| {
        b.iter(|| black_box(fx.trigger_ui_confirm(black_box([0.0, 0.0]))));
    });

    c.bench_function("trigger_unknown", |b| {
        b.iter(|| black_box(fx.trigger_effect_by_name("combat", black_box("no_such_event"), [0.0, 0.0], 1.0)));
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let clock = ManualClock::new();
    let mut fx = orchestrator(clock.clone());
    for category in EffectCategory::ALL {
        for entry in starfx_effects::entries_in(category) {
            fx.trigger_effect(category, entry.name, [400.0, 300.0], 1.0);
        }
    }

    c.bench_function("orchestrator_update", |b| {
        b.iter(|| {
            clock.advance(Duration::from_micros(16_667));
            fx.update(black_box(1.0 / 60.0));
        });
    });
}

criterion_group!(benches, benchmark_trigger, benchmark_rejected, benchmark_frame);
criterion_main!(benches);
