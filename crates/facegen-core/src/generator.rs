// crates/facegen-core/src/generator.rs
//
// One character pass: seed -> head parts -> hair color -> morph -> tints.
// Nothing crosses character boundaries except the read-only catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::fingerprint::catalog_id_hex;
use crate::catalog::{Catalog, Gender};
use crate::color::{parse_color, ColorValue, LinearColor};
use crate::error::{FaceGenError, Result};
use crate::genetics::{blend_morphs, MorphBlend};
use crate::rng::pick::sample_one;
use crate::rng::stream::Stream;
use crate::settings::Settings;
use crate::tint::compose::{compose, ComposeInput};
use crate::tint::op::TintOp;
use crate::validate::validate_catalog;

/// Per-character context supplied by the record loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterContext {
    pub id: String,
    pub gender: Gender,
    #[serde(default)]
    pub factions: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadPartChoice {
    pub category: String,
    pub index: String,
}

/// Everything generated for one character, in write order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Appearance {
    pub id: String,
    pub head_parts: Vec<HeadPartChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morph: Option<MorphBlend>,
    pub tints: Vec<TintOp>,
}

/// Write-only destination for generated appearances.
pub trait Sink {
    fn accept(&mut self, appearance: Appearance) -> Result<()>;
}

impl Sink for Vec<Appearance> {
    fn accept(&mut self, appearance: Appearance) -> Result<()> {
        self.push(appearance);
        Ok(())
    }
}

pub struct Generator<'c> {
    catalog: &'c Catalog,
    settings: Settings,
    lipstick: Option<(LinearColor, LinearColor)>,
}

impl<'c> Generator<'c> {
    /// Validates the catalog up front: a broken catalog never reaches a character.
    pub fn new(catalog: &'c Catalog, settings: Settings) -> Result<Self> {
        validate_catalog(catalog, &settings.required_head_parts)?;

        let shade = |which: &str, value: &ColorValue| {
            parse_color(value, |msg| warn!(shade = which, "lipstick color skipped: {msg}"))
        };
        let light = shade("light", &settings.lipstick_light);
        let dark = shade("dark", &settings.lipstick_dark);
        let lipstick = light.zip(dark);

        Ok(Self {
            catalog,
            settings,
            lipstick,
        })
    }

    pub fn generate(&self, ctx: &CharacterContext) -> Appearance {
        let gc = self.catalog.gender(ctx.gender);
        let mut stream = Stream::seed(&ctx.id, self.settings.global_seed);

        let mut head_parts = Vec::with_capacity(gc.head_parts.len());
        for (category, options) in &gc.head_parts {
            if let Some(part) = sample_one(options, &mut stream) {
                head_parts.push(HeadPartChoice {
                    category: category.clone(),
                    index: part.index.clone(),
                });
            }
        }

        let hair_color = sample_one(&gc.hair_colors, &mut stream).map(|e| e.index.clone());
        let morph = blend_morphs(&gc.morphs, &mut stream);

        let input = ComposeInput {
            catalog: gc,
            gender: ctx.gender,
            factions: self.settings.faction_flags(&ctx.factions),
            foundation: self.settings.foundation,
            makeup: self.settings.makeup,
            lipstick: self.lipstick,
        };
        let tints = compose(&input, &mut stream);

        debug!(id = %ctx.id, tints = tints.len(), concealer = input.concealer(), "generated appearance");

        Appearance {
            id: ctx.id.clone(),
            head_parts,
            hair_color,
            morph,
            tints,
        }
    }

    /// Generate every character in order and hand each result to `sink`.
    pub fn run<'a, I, S>(&self, characters: I, sink: &mut S) -> Result<usize>
    where
        I: IntoIterator<Item = &'a CharacterContext>,
        S: Sink,
    {
        let catalog_id = catalog_id_hex(self.catalog)?;
        info!(
            catalog_id = %catalog_id,
            global_seed = self.settings.global_seed,
            "generation started"
        );

        let mut n = 0usize;
        for ctx in characters {
            sink.accept(self.generate(ctx))
                .map_err(|e| FaceGenError::Sink(format!("{}: {e}", ctx.id)))?;
            n += 1;
        }

        info!(characters = n, "generation finished");
        Ok(n)
    }
}
