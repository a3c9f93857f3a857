// crates/facegen-core/src/genetics/morph.rs
//
// Face-morph blending between two distinct presets of the same gender.

use serde::{Deserialize, Serialize};

use crate::genetics::convolve::{weighted, Blend, TraitMap};
use crate::rng::stream::Stream;

/// Floats per morph region: position xyz, rotation xyz, scale.
pub const REGION_FLOATS: usize = 7;

/// Length of the named-value vector carried by every preset.
pub const MORPH_VALUES: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MorphPreset {
    pub index: String,
    #[serde(default)]
    pub regions: TraitMap<u32, [f64; REGION_FLOATS]>,
    #[serde(default)]
    pub presets: TraitMap<String, f64>,
    #[serde(default = "zero_values")]
    pub values: [f64; MORPH_VALUES],
}

fn zero_values() -> [f64; MORPH_VALUES] {
    [0.0; MORPH_VALUES]
}

/// Child morph data handed to the sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MorphBlend {
    /// Preset indices, first parent first.
    pub parents: [String; 2],
    /// Weight of the first parent.
    pub weight: f64,
    pub regions: TraitMap<u32, [f64; REGION_FLOATS]>,
    pub presets: TraitMap<String, f64>,
    pub values: [f64; MORPH_VALUES],
}

/// Pick two distinct presets and blend them with an approximately normal weight.
///
/// The second index is drawn from `n - 1` slots and bumped past the first,
/// so the pair is distinct without rejection. One preset blends with itself;
/// an empty list yields `None` and draws nothing.
pub fn blend_morphs(presets: &[MorphPreset], stream: &mut Stream) -> Option<MorphBlend> {
    let n = presets.len() as u32;
    if n == 0 {
        return None;
    }

    let i1 = stream.next_below(n);
    let i2 = if n == 1 {
        i1
    } else {
        let j = stream.next_below(n - 1);
        if j >= i1 {
            j + 1
        } else {
            j
        }
    };
    let w = stream.approx_gaussian();

    let a = &presets[i1 as usize];
    let b = &presets[i2 as usize];

    Some(MorphBlend {
        parents: [a.index.clone(), b.index.clone()],
        weight: w,
        regions: weighted(&a.regions, &b.regions, w),
        presets: weighted(&a.presets, &b.presets, w),
        values: <[f64; MORPH_VALUES]>::weighted(w, &a.values, &b.values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(index: &str, region: u32, v: f64) -> MorphPreset {
        MorphPreset {
            index: index.into(),
            regions: [(region, [v; REGION_FLOATS])].into_iter().collect(),
            presets: [(format!("{index}-slot"), v)].into_iter().collect(),
            values: [v; MORPH_VALUES],
        }
    }

    #[test]
    fn parents_are_distinct() {
        let presets: Vec<_> = (0..4).map(|i| preset(&format!("p{i}"), i, i as f64)).collect();
        for seed in 0..200 {
            let mut s = Stream::seed("morph", seed);
            let m = blend_morphs(&presets, &mut s).unwrap();
            assert_ne!(m.parents[0], m.parents[1]);
        }
    }

    #[test]
    fn child_has_union_of_regions() {
        let presets = vec![preset("a", 1, 1.0), preset("b", 2, 1.0)];
        let mut s = Stream::seed("union", 3);
        let m = blend_morphs(&presets, &mut s).unwrap();
        assert_eq!(m.regions.len(), 2);
        assert_eq!(m.presets.len(), 2);
        assert!((0.0..=1.0).contains(&m.weight));
    }

    #[test]
    fn single_preset_blends_with_itself() {
        let presets = vec![preset("only", 0, 0.5)];
        let mut s = Stream::seed("single", 0);
        let m = blend_morphs(&presets, &mut s).unwrap();
        assert_eq!(m.parents, ["only".to_string(), "only".to_string()]);
        for v in m.values {
            assert!((v - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_list_draws_nothing() {
        let mut s = Stream::seed("none", 0);
        let before = s.clone();
        assert!(blend_morphs(&[], &mut s).is_none());
        assert_eq!(s, before);
    }
}
