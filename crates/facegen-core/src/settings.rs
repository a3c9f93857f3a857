// crates/facegen-core/src/settings.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::defaults::default_settings;

/// Run-wide options. Every field falls back to `defaults::default_settings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub global_seed: u32,
    pub foundation: bool,
    pub makeup: bool,
    pub lipstick_light: ColorValue,
    pub lipstick_dark: ColorValue,
    pub settler_factions: Vec<String>,
    pub raider_factions: Vec<String>,
    pub atom_factions: Vec<String>,
    /// Head-part categories every gender must offer.
    pub required_head_parts: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        default_settings()
    }
}

/// Faction roles the tint pipeline branches on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactionFlags {
    pub settler: bool,
    pub raider: bool,
    pub children_of_atom: bool,
}

impl Settings {
    pub fn faction_flags(&self, memberships: &BTreeSet<String>) -> FactionFlags {
        let any = |ids: &[String]| ids.iter().any(|id| memberships.contains(id));
        FactionFlags {
            settler: any(&self.settler_factions),
            raider: any(&self.raider_factions),
            children_of_atom: any(&self.atom_factions),
        }
    }
}
