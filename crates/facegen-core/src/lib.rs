pub mod error;
pub mod validate;

pub mod rng;
pub mod color;
pub mod genetics;
pub mod catalog;
pub mod tint;
pub mod generator;
pub mod settings;
pub mod defaults;

pub use crate::catalog::{Catalog, Gender, Target, TraitEntry};
pub use crate::color::LinearColor;
pub use crate::generator::{Appearance, CharacterContext, Generator, Sink};
pub use crate::settings::Settings;
pub use crate::rng::stream::Stream;
pub use crate::tint::op::{TintKind, TintOp};
