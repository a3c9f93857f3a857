// crates/facegen-core/src/tint/mod.rs

pub mod compose;
pub mod op;
