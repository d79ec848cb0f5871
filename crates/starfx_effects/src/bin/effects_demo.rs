//! # Effects Demo
//!
//! Runs a scripted combat and trading sequence through the orchestrator at
//! 60 Hz and reports what fired.
//!
//! Usage: `cargo run -p starfx_effects --features demo --bin effects_demo [config.toml]`
//!
//! Logging follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use starfx_audio::{NullAudioBackend, SoundManifest};
use starfx_effects::{EffectsConfig, EffectsOrchestrator, EffectsResult, MonotonicClock};
use starfx_particles::{ParticleRenderer, ParticleResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Simulated frames (10 seconds).
const FRAMES: u32 = 600;
const DT: f32 = 1.0 / 60.0;

/// Renderer that only counts draw calls.
#[derive(Default)]
struct CountingRenderer {
    circles: u64,
    peak_frame: u64,
}

impl ParticleRenderer for CountingRenderer {
    fn draw_circle_filled(&mut self, _x: f32, _y: f32, _radius: f32, _color: [u8; 4]) -> ParticleResult<()> {
        self.circles += 1;
        Ok(())
    }
}

type DemoOrchestrator = EffectsOrchestrator<NullAudioBackend, MonotonicClock>;

/// Gameplay beats, keyed by frame.
fn script(fx: &mut DemoOrchestrator, frame: u32) {
    let player = [200.0, 400.0];
    let target = [600.0, 200.0];

    match frame {
        0 => {
            fx.trigger_combat_effect("combat_start", [400.0, 300.0], 1.0);
            fx.trigger_target_acquired(target);
        }
        f if f < 240 && f % 20 == 0 => {
            fx.trigger_player_fires(player, 1.0);
            fx.trigger_shield_hit(target, false, 1.0);
        }
        f if f < 240 && f % 30 == 10 => {
            fx.trigger_enemy_fires(target, 1.0);
            fx.trigger_hull_damage(player, true, 1.0);
        }
        240 => {
            fx.trigger_critical_hit(target, 1.5);
        }
        260 => {
            fx.trigger_special_weapon(target, 1.4);
        }
        300 => {
            fx.trigger_combat_victory([400.0, 300.0]);
        }
        360 => {
            fx.trigger_planet_docking([400.0, 300.0]);
        }
        400 | 420 => {
            fx.trigger_purchase([500.0, 350.0]);
        }
        440 => {
            fx.trigger_sale([500.0, 350.0]);
        }
        480 => {
            fx.trigger_contract_complete([400.0, 300.0]);
            fx.trigger_ui_confirm([400.0, 500.0]);
        }
        540 => {
            fx.trigger_jump([400.0, 300.0]);
        }
        _ => {}
    }
}

fn run(config_path: Option<String>) -> EffectsResult<()> {
    let config = match config_path {
        Some(path) => EffectsConfig::load(path)?,
        None => EffectsConfig::default(),
    };
    let manifest: SoundManifest = config.load_manifest()?;

    let mut fx = EffectsOrchestrator::new(&config, manifest, NullAudioBackend::new(), MonotonicClock::new())?;
    let mut renderer = CountingRenderer::default();
    let mut peak_particles = 0;

    for frame in 0..FRAMES {
        script(&mut fx, frame);
        fx.update(DT);

        let before = renderer.circles;
        fx.draw(&mut renderer);
        renderer.peak_frame = renderer.peak_frame.max(renderer.circles - before);

        let stats = fx.stats();
        peak_particles = peak_particles.max(stats.total_particles);
        if frame % 60 == 0 {
            info!(
                second = frame / 60,
                active_effects = stats.active_effects,
                emitters = stats.particle_emitters,
                particles = stats.total_particles,
                "frame stats"
            );
        }
    }

    let particle_stats = fx.particles().stats();
    info!(
        frames = FRAMES,
        circles_drawn = renderer.circles,
        peak_frame_circles = renderer.peak_frame,
        peak_particles,
        emitters_admitted = particle_stats.admitted_total,
        emitters_rejected = particle_stats.rejected_total,
        sounds_cached = fx.mixer().cached_sounds(),
        "demo complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "effects demo failed");
            ExitCode::FAILURE
        }
    }
}
