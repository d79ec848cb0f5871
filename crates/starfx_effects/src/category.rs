//! Effect categories. Each owns one catalog table and one trigger entry point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EffectsError;

/// Category of a semantic game event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectCategory {
    /// Weapons, impacts, battle outcomes.
    Combat,
    /// Market and contracts.
    Trading,
    /// Modules, engines, jumps, shields.
    Ship,
    /// Docking, scans, orbit.
    Planet,
    /// Warnings and notifications.
    Alert,
    /// Menus and buttons.
    Ui,
}

impl EffectCategory {
    /// Every category, in catalog lookup order.
    pub const ALL: [Self; 6] = [
        Self::Combat,
        Self::Trading,
        Self::Ship,
        Self::Planet,
        Self::Alert,
        Self::Ui,
    ];

    /// Lowercase category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Combat => "combat",
            Self::Trading => "trading",
            Self::Ship => "ship",
            Self::Planet => "planet",
            Self::Alert => "alert",
            Self::Ui => "ui",
        }
    }
}

impl fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectCategory {
    type Err = EffectsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| EffectsError::UnknownCategory(s.to_string()))
    }
}
