//! # STARFX Effects
//!
//! Turns semantic game events ("critical_hit", "purchase", "jump_execute")
//! into synchronized sound and particle feedback.
//!
//! ## Architecture
//!
//! ```text
//!                  ┌──────────────────────┐
//!  gameplay code ─►│ EffectsOrchestrator  │
//!                  └──────────┬───────────┘
//!          ┌──────────────────┼────────────────────┐
//!          ▼                  ▼                    ▼
//!   EffectCatalog     AudioChannelMixer     ParticleSystem
//!   (tables, spam,    (channels, cache,     (emitters, budget,
//!    active records)   AudioBackend)         ParticleRenderer)
//! ```
//!
//! ## Frame Loop
//!
//! ```rust,ignore
//! let mut fx = EffectsOrchestrator::with_backend(NullAudioBackend::new());
//! fx.trigger_critical_hit([100.0, 100.0], 1.5);
//!
//! // once per frame
//! fx.update(dt);
//! fx.draw(&mut renderer);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod category;
pub mod clock;
pub mod config;
pub mod error;
pub mod orchestrator;

pub use catalog::{
    entries_in, find_entry, get_effect_config, ActiveEffectRecord, EffectCatalog, EffectCatalogEntry, VisualSpec,
    DEFAULT_SPAM_WINDOW,
};
pub use category::EffectCategory;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::EffectsConfig;
pub use error::{EffectsError, EffectsResult};
pub use orchestrator::{EffectStats, EffectsOrchestrator, SharedOrchestrator};
