// crates/facegen-core/src/defaults.rs

use crate::color::ColorValue;
use crate::settings::Settings;

pub fn default_settings() -> Settings {
    Settings {
        global_seed: 0,

        // Settler women wear foundation + makeup unless turned off.
        foundation: true,
        makeup: true,

        // Pale skin blends toward the light shade, dark skin toward the deep one.
        lipstick_light: ColorValue::Text("rgb(201,104,112)".into()),
        lipstick_dark: ColorValue::Text("rgb(122,38,48)".into()),

        settler_factions: vec!["SettlerFaction".into()],
        raider_factions: vec!["RaiderFaction".into()],
        atom_factions: vec!["ChildrenOfAtomFaction".into()],

        required_head_parts: vec!["Eyes".into(), "Hair".into()],
    }
}
