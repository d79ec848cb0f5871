//! # Particle Budget Integration Test
//!
//! Hammers the system with effects and checks the cap holds frame by frame.

use starfx_particles::{ParticleRecipe, ParticleSystem, RecordingRenderer};

const FRAME: f32 = 1.0 / 60.0;

/// 200 large explosions in one frame against a cap of 150.
#[test]
fn test_rapid_fire_never_exceeds_cap() {
    let mut system = ParticleSystem::new(150);

    let admitted = (0..200)
        .filter(|i| system.create_effect(ParticleRecipe::ExplosionLarge, *i as f32, 0.0, 1.0))
        .count();

    // 80 fits, a second 80 does not
    assert_eq!(admitted, 1);
    assert_eq!(system.stats().rejected_total, 199);

    for _ in 0..120 {
        system.update(FRAME);
        assert!(system.particle_count() <= system.max_particles());
    }
}

/// Continuous pressure: a new effect is attempted every frame for 10 seconds.
#[test]
fn test_sustained_pressure_respects_cap() {
    let mut system = ParticleSystem::with_seed(500, 42);
    let recipes = ParticleRecipe::ALL;
    let mut peak = 0;

    for frame in 0..600 {
        let recipe = recipes[frame % recipes.len()];
        system.create_effect(recipe, 400.0, 300.0, 1.0);
        system.create_effect(recipe, 200.0, 100.0, 1.3);
        system.update(FRAME);

        assert!(system.committed_particles() <= 500);
        peak = peak.max(system.particle_count());
    }

    let stats = system.stats();
    println!("Peak particles: {peak}");
    println!("Admitted: {} / Rejected: {}", stats.admitted_total, stats.rejected_total);

    assert!(peak > 0);
    assert!(stats.rejected_total > 0);
}

/// Once the scene drains, the budget is available again.
#[test]
fn test_budget_recovers_after_drain() {
    let mut system = ParticleSystem::new(100);
    assert!(system.create_effect(ParticleRecipe::ExplosionLarge, 0.0, 0.0, 1.0));
    assert!(!system.create_effect(ParticleRecipe::ExplosionLarge, 0.0, 0.0, 1.0));

    // 1.2s lifetime, drained well within 2s
    for _ in 0..120 {
        system.update(FRAME);
    }
    assert_eq!(system.emitter_count(), 0);
    assert!(system.create_effect(ParticleRecipe::ExplosionLarge, 0.0, 0.0, 1.0));
}

/// Every drawn disc matches a live particle and fades over time.
#[test]
fn test_draw_fades_with_age() {
    let mut system = ParticleSystem::new(1000);
    system.create_effect(ParticleRecipe::ExplosionSmall, 10.0, 10.0, 1.0);
    system.update(FRAME);

    let mut fresh = RecordingRenderer::new();
    system.draw(&mut fresh);
    let fresh_alpha = fresh.circles()[0].color[3];

    for _ in 0..24 {
        system.update(FRAME);
    }
    let mut aged = RecordingRenderer::new();
    system.draw(&mut aged);

    assert_eq!(aged.circles().len(), system.particle_count());
    assert!(aged.circles()[0].color[3] < fresh_alpha);
}
