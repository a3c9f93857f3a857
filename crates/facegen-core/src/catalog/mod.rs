// crates/facegen-core/src/catalog/mod.rs
//
// Read-only trait catalog, grouped by gender and semantic target.
// Shared across every character pass; never mutated during generation.

pub mod classify;
pub mod fingerprint;
pub mod raw;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::LinearColor;
use crate::genetics::MorphPreset;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Semantic tint target a catalog entry paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Target {
    Skin,
    Eyebrows,
    Blemishes,
    Freckles,
    Moles,
    Lipstick,
    Lips,
    Dirt,
    Scars,
    /// Raider faction paint.
    Raiders,
    /// Children of Atom faction paint.
    ChildrenOfAtom,
}

impl Target {
    pub const ALL: [Target; 11] = [
        Target::Skin,
        Target::Eyebrows,
        Target::Blemishes,
        Target::Freckles,
        Target::Moles,
        Target::Lipstick,
        Target::Lips,
        Target::Dirt,
        Target::Scars,
        Target::Raiders,
        Target::ChildrenOfAtom,
    ];
}

/// One template color of a trait entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitColor {
    pub color: LinearColor,
    pub alpha: f64,
    pub index: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitEntry {
    pub index: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<TraitColor>>,
}

impl TraitEntry {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            colors: None,
        }
    }

    pub fn colors(&self) -> &[TraitColor] {
        self.colors.as_deref().unwrap_or(&[])
    }
}

/// A skin template color together with the entry that owns it.
#[derive(Clone, Copy, Debug)]
pub struct Swatch<'a> {
    pub entry: &'a TraitEntry,
    pub color: &'a TraitColor,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderCatalog {
    #[serde(default)]
    pub tints: BTreeMap<Target, Vec<TraitEntry>>,
    /// Head-part options keyed by category (hair, eyes, ...).
    #[serde(default)]
    pub head_parts: BTreeMap<String, Vec<TraitEntry>>,
    #[serde(default)]
    pub hair_colors: Vec<TraitEntry>,
    #[serde(default)]
    pub morphs: Vec<MorphPreset>,
}

impl GenderCatalog {
    pub fn tints(&self, target: Target) -> &[TraitEntry] {
        self.tints.get(&target).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_tint(&mut self, target: Target, entry: TraitEntry) {
        self.tints.entry(target).or_default().push(entry);
    }

    /// Every skin template color, in catalog order.
    pub fn skin_swatches(&self) -> Vec<Swatch<'_>> {
        self.tints(Target::Skin)
            .iter()
            .flat_map(|entry| entry.colors().iter().map(move |color| Swatch { entry, color }))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub male: GenderCatalog,
    #[serde(default)]
    pub female: GenderCatalog,
}

impl Catalog {
    pub fn gender(&self, g: Gender) -> &GenderCatalog {
        match g {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    pub fn gender_mut(&mut self, g: Gender) -> &mut GenderCatalog {
        match g {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }
}
