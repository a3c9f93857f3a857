// crates/facegen-core/src/catalog/raw.rs
//
// Raw catalog records as exported by the harvesting side, and their ingestion
// into the grouped Catalog. Unclassified records and unparseable colors are
// dropped with a warning; ingestion itself never fails.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::classify::{classify, Classification};
use crate::catalog::{Catalog, Gender, TraitColor, TraitEntry};
use crate::color::{parse_color, ColorValue};
use crate::genetics::MorphPreset;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub tints: Vec<RawTint>,
    #[serde(default)]
    pub head_parts: Vec<RawHeadPart>,
    #[serde(default)]
    pub hair_colors: Vec<RawHairColor>,
    #[serde(default)]
    pub morphs: Vec<RawMorph>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawTint {
    pub gender: Gender,
    pub group: String,
    pub option: String,
    pub index: String,
    /// The option carries usage conditions in the source data.
    #[serde(default)]
    pub conditioned: bool,
    #[serde(default)]
    pub colors: Option<Vec<RawColor>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawColor {
    pub color: ColorValue,
    #[serde(default = "full_alpha")]
    pub alpha: f64,
    pub index: String,
}

fn full_alpha() -> f64 {
    1.0
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawHeadPart {
    pub gender: Gender,
    pub category: String,
    pub index: String,
}

/// Hair color usable by one gender, or by both when `gender` is absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawHairColor {
    #[serde(default)]
    pub gender: Option<Gender>,
    pub index: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawMorph {
    pub gender: Gender,
    pub preset: MorphPreset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub tints_kept: usize,
    pub unclassified: usize,
    pub colors_dropped: usize,
}

impl RawCatalog {
    pub fn ingest(self) -> (Catalog, IngestReport) {
        let mut cat = Catalog::default();
        let mut report = IngestReport::default();

        for t in self.tints {
            let target = match classify(&t.group, &t.option, t.conditioned) {
                Classification::Target(target) => target,
                Classification::Unclassified => {
                    warn!(
                        group = %t.group,
                        option = %t.option,
                        index = %t.index,
                        "unclassified tint category; dropped"
                    );
                    report.unclassified += 1;
                    continue;
                }
            };

            let colors = t.colors.map(|raw| {
                raw.into_iter()
                    .filter_map(|c| {
                        let parsed = parse_color(&c.color, |msg| {
                            warn!(index = %t.index, color = %c.index, "{msg}");
                        });
                        if parsed.is_none() {
                            report.colors_dropped += 1;
                        }
                        parsed.map(|color| TraitColor {
                            color,
                            alpha: c.alpha,
                            index: c.index,
                        })
                    })
                    .collect()
            });

            cat.gender_mut(t.gender).push_tint(
                target,
                TraitEntry {
                    index: t.index,
                    colors,
                },
            );
            report.tints_kept += 1;
        }

        for hp in self.head_parts {
            cat.gender_mut(hp.gender)
                .head_parts
                .entry(hp.category)
                .or_default()
                .push(TraitEntry::new(hp.index));
        }

        for hc in self.hair_colors {
            let genders: &[Gender] = match hc.gender {
                Some(Gender::Male) => &[Gender::Male],
                Some(Gender::Female) => &[Gender::Female],
                None => &[Gender::Male, Gender::Female],
            };
            for g in genders {
                cat.gender_mut(*g).hair_colors.push(TraitEntry::new(hc.index.clone()));
            }
        }

        for m in self.morphs {
            cat.gender_mut(m.gender).morphs.push(m.preset);
        }

        (cat, report)
    }
}
