// crates/facegen-cli/src/io/mod.rs

pub mod catalog_file;
pub mod jsonl;
pub mod settings_file;
