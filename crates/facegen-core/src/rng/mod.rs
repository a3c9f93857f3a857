// crates/facegen-core/src/rng/mod.rs

pub mod pick;
pub mod stream;
