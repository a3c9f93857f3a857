// crates/facegen-core/src/genetics/mod.rs

pub mod convolve;
pub mod morph;

pub use convolve::{convolve, weighted, Blend, TraitMap};
pub use morph::{blend_morphs, MorphBlend, MorphPreset, MORPH_VALUES, REGION_FLOATS};
