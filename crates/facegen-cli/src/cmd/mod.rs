// crates/facegen-cli/src/cmd/mod.rs

pub mod catalog;
pub mod color;
pub mod generate;
pub mod stream;
