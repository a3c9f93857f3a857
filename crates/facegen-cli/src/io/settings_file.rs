// crates/facegen-cli/src/io/settings_file.rs

use anyhow::{Context, Result};
use facegen_core::{CharacterContext, Settings};

/// Settings JSON; a missing path means built-in defaults.
pub fn load_settings(path: Option<&str>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("read settings {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("decode settings {path}"))
}

/// Character list: a JSON array of `{id, gender, factions}`.
pub fn load_characters(path: &str) -> Result<Vec<CharacterContext>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read characters {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("decode characters {path}"))
}
