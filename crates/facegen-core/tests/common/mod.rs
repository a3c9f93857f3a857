#![allow(dead_code)]

use std::collections::BTreeSet;

use facegen_core::catalog::{GenderCatalog, TraitColor};
use facegen_core::color::{parse_color, ColorValue};
use facegen_core::genetics::MorphPreset;
use facegen_core::{Catalog, CharacterContext, Gender, Target, TraitEntry};

fn entries(prefix: &str, n: usize) -> Vec<TraitEntry> {
    (0..n).map(|i| TraitEntry::new(format!("{prefix}{i}"))).collect()
}

fn skin() -> TraitEntry {
    let colors = [0x2B3A5C_i64, 0x6F8DBF, 0xC8DDF2, 0x101820]
        .iter()
        .enumerate()
        .map(|(i, packed)| TraitColor {
            color: parse_color(&ColorValue::Packed(*packed), |m| panic!("{m}")).unwrap(),
            alpha: 1.0,
            index: format!("skin-c{i}"),
        })
        .collect();
    TraitEntry {
        index: "skin".into(),
        colors: Some(colors),
    }
}

fn morph(i: u32) -> MorphPreset {
    let v = i as f64;
    MorphPreset {
        index: format!("morph{i}"),
        regions: [(i, [v; 7]), (100, [1.0; 7])].into_iter().collect(),
        presets: [(format!("slot{i}"), v)].into_iter().collect(),
        values: [v; 5],
    }
}

pub fn gender_catalog() -> GenderCatalog {
    let mut gc = GenderCatalog::default();
    gc.tints.insert(Target::Skin, vec![skin()]);
    gc.tints.insert(Target::Eyebrows, entries("brow", 3));
    gc.tints.insert(Target::Blemishes, entries("blemish", 6));
    gc.tints.insert(Target::Freckles, entries("freckle", 2));
    gc.tints.insert(Target::Moles, entries("mole", 3));
    gc.tints.insert(Target::Lipstick, entries("lipstick", 2));
    gc.tints.insert(Target::Lips, entries("lips", 2));
    gc.tints.insert(Target::Dirt, entries("dirt", 4));
    gc.tints.insert(Target::Scars, entries("scar", 8));
    gc.tints.insert(Target::Raiders, entries("raider", 3));
    gc.tints.insert(Target::ChildrenOfAtom, entries("atom", 2));
    gc.head_parts.insert("Eyes".into(), entries("eyes", 3));
    gc.head_parts.insert("Hair".into(), entries("hair", 5));
    gc.hair_colors = entries("haircolor", 4);
    gc.morphs = (0..4).map(morph).collect();
    gc
}

pub fn catalog() -> Catalog {
    Catalog {
        male: gender_catalog(),
        female: gender_catalog(),
    }
}

pub fn character(id: &str, gender: Gender, factions: &[&str]) -> CharacterContext {
    CharacterContext {
        id: id.into(),
        gender,
        factions: factions.iter().map(|f| f.to_string()).collect::<BTreeSet<_>>(),
    }
}
