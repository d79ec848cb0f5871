//! # Manifest File Integration Test
//!
//! Loads a sound manifest from disk and plays through it.

use std::io::Write;

use starfx_audio::{AudioChannel, AudioChannelMixer, RecordingAudioBackend, SoundManifest};

const MANIFEST: &str = r#"
[sounds.laser]
path = "sfx/laser.ogg"
category = "combat"
volume = 0.5
description = "Pew"

[sounds.drone]
path = "sfx/drone.ogg"
category = "ambient"
looping = true
"#;

fn write_manifest(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("starfx_{name}_{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(MANIFEST.as_bytes()).unwrap();
    path
}

/// A manifest file drives the mixer end to end.
#[test]
fn test_loaded_manifest_plays() {
    let path = write_manifest("plays");
    let manifest = SoundManifest::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(manifest.len(), 2);

    let mut mixer = AudioChannelMixer::new(RecordingAudioBackend::new(), manifest);
    assert!(mixer.play_effect_sound("laser", 1.0));
    assert!(mixer.play_effect_sound("drone", 1.0));
    assert!(!mixer.play_effect_sound("critical_hit", 1.0));

    let plays = mixer.backend().plays();
    assert_eq!(plays.len(), 2);
    // 0.5 × combat 0.8
    assert!((plays[0].volume - 0.4).abs() < 1e-6);
    // 1.0 default × ambient 0.3
    assert!((plays[1].volume - 0.3).abs() < 1e-6);
    assert!(plays[1].looping);
}

/// Channel changes only affect plays issued afterwards.
#[test]
fn test_channel_change_affects_future_plays() {
    let mut mixer = AudioChannelMixer::new(RecordingAudioBackend::new(), SoundManifest::builtin());

    assert!(mixer.play_effect_sound("combat_fire", 1.0));
    mixer.set_channel_volume(AudioChannel::Combat, 0.0);
    assert!(mixer.play_effect_sound("combat_fire", 1.0));

    let plays = mixer.backend().plays();
    assert!((plays[0].volume - 0.64).abs() < 1e-6);
    assert_eq!(plays[1].volume, 0.0);
}
