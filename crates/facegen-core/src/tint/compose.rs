// crates/facegen-core/src/tint/compose.rs
//
// Tint composition: blended trait data + context flags -> ordered tint ops.
//
// Draw order (one stream, fixed):
//   base     skin pair, skin weight, eyebrows
//   marks    blemishes, freckle/mole branch           (skipped under concealer)
//   surface  lipstick + gloss (concealer + makeup), dirt (non-settlers)
//   scars    settler: one faint; others: 1..=5 strong  (quartered under concealer)
//   paint    raider, children of atom
//
// Output order: base, blemish marks, scars, surface (lipstick, lips, dirt, paint).

use crate::catalog::{Gender, GenderCatalog, Swatch, Target, TraitEntry};
use crate::color::{linear_to_srgb, LinearColor};
use crate::rng::pick::{sample_n, sample_one};
use crate::rng::stream::Stream;
use crate::settings::FactionFlags;
use crate::tint::op::TintOp;

/// Intensity band for faint marks: blemishes, moles, dirt, settler scars.
const FAINT_MIN: f64 = 0.05;
const FAINT_SPAN: f64 = 0.2;

const SCAR_MIN: f64 = 0.2;
const SCAR_SPAN: f64 = 0.5;

const ATOM_MIN: f64 = 0.25;
const ATOM_SPAN: f64 = 0.5;

/// Concealer divides every scar intensity by this.
pub const CONCEALER_SCAR_DIVISOR: f64 = 4.0;

const FRECKLE_GATE: f64 = 0.25;
const MOLE_CHANCE: f64 = 0.1;

/// Per-character inputs to the pipeline.
#[derive(Clone, Copy, Debug)]
pub struct ComposeInput<'a> {
    pub catalog: &'a GenderCatalog,
    pub gender: Gender,
    pub factions: FactionFlags,
    pub foundation: bool,
    pub makeup: bool,
    /// Parsed (light, dark) lipstick shades; `None` when either failed to parse.
    pub lipstick: Option<(LinearColor, LinearColor)>,
}

impl ComposeInput<'_> {
    /// Female settlers wear foundation when the option is on.
    pub fn concealer(&self) -> bool {
        self.gender == Gender::Female && self.factions.settler && self.foundation
    }
}

/// Run the whole pipeline for one character.
pub fn compose(input: &ComposeInput<'_>, stream: &mut Stream) -> Vec<TintOp> {
    let gc = input.catalog;
    let concealer = input.concealer();

    let mut base = Vec::new();
    let lightness = base_layer(gc, stream, &mut base);

    let mut marks = Vec::new();
    if !concealer {
        blemish_layer(gc, stream, lightness, &mut marks);
    }

    let mut surface = Vec::new();
    if concealer && input.makeup {
        lipstick_layer(gc, stream, lightness, input.lipstick.as_ref(), &mut surface);
    }
    if !input.factions.settler {
        dirt_layer(gc, stream, &mut surface);
    }

    scar_layer(gc, stream, input.factions.settler, concealer, &mut marks);
    paint_layer(gc, stream, input.factions, &mut surface);

    base.extend(marks);
    base.extend(surface);
    base
}

/// Skin + eyebrows. Returns the blended skin lightness.
pub fn base_layer(gc: &GenderCatalog, stream: &mut Stream, out: &mut Vec<TintOp>) -> f64 {
    let swatches = gc.skin_swatches();
    let picked = sample_n(&swatches, 2, stream);

    let mut lightness = 0.0;
    if let Some(first) = picked.first() {
        let second = picked.get(1).unwrap_or(first);
        let w = stream.uniform();
        let (op, l) = blend_skin(**first, **second, w);
        out.push(op);
        lightness = l;
    }

    if let Some(brow) = sample_one(gc.tints(Target::Eyebrows), stream) {
        out.push(TintOp::value(Target::Eyebrows, &brow.index, 1.0));
    }

    lightness
}

/// Blend two skin swatches with weight `w` on the first.
///
/// `w <= 0.5` flips to `1 - w` and swaps the pair, so the emitted swatch is
/// always the dominant one. Returns the base op and its linear lightness.
pub fn blend_skin(first: Swatch<'_>, second: Swatch<'_>, w: f64) -> (TintOp, f64) {
    let (dom, sub, w) = if w <= 0.5 {
        (second, first, 1.0 - w)
    } else {
        (first, second, w)
    };

    let color = dom.color.color.mix(&sub.color.color, w);
    let alpha = w * dom.color.alpha + (1.0 - w) * sub.color.alpha;

    let op = TintOp::colored(
        Target::Skin,
        &dom.entry.index,
        alpha.clamp(0.0, 1.0),
        Some(dom.color.index.as_str()),
        color.to_srgb(),
    );
    (op, color.lightness())
}

/// Blemishes, then either freckles (pale skin) or rarely a mole or two.
pub fn blemish_layer(gc: &GenderCatalog, stream: &mut Stream, lightness: f64, out: &mut Vec<TintOp>) {
    let count = stream.next_below(5) as usize;
    for e in sample_n(gc.tints(Target::Blemishes), count, stream) {
        let v = faint(stream);
        out.push(TintOp::value(Target::Blemishes, &e.index, v));
    }

    if stream.uniform() * lightness >= FRECKLE_GATE {
        for e in gc.tints(Target::Freckles) {
            let v = stream.uniform() * (1.0 - lightness);
            out.push(TintOp::value(Target::Freckles, &e.index, v));
        }
    } else if stream.uniform() < MOLE_CHANCE {
        let count = stream.next_below(2) as usize + 1;
        for e in sample_n(gc.tints(Target::Moles), count, stream) {
            let v = faint(stream);
            out.push(TintOp::value(Target::Moles, &e.index, v));
        }
    }
}

/// Lipstick shade blended by skin lightness, then a gloss pass.
pub fn lipstick_layer(
    gc: &GenderCatalog,
    stream: &mut Stream,
    lightness: f64,
    shades: Option<&(LinearColor, LinearColor)>,
    out: &mut Vec<TintOp>,
) {
    let lipstick = sample_one(gc.tints(Target::Lipstick), stream);
    if let (Some(e), Some((light, dark))) = (lipstick, shades) {
        let color = light.mix(dark, lightness);
        let v = color.alpha.unwrap_or(1.0).clamp(0.0, 1.0);
        out.push(TintOp::colored(Target::Lipstick, &e.index, v, None, color.to_srgb()));
    }

    if let Some(e) = sample_one(gc.tints(Target::Lips), stream) {
        let v = stream.uniform();
        out.push(TintOp::value(Target::Lips, &e.index, v));
    }
}

/// One to three grime smudges in random colors.
pub fn dirt_layer(gc: &GenderCatalog, stream: &mut Stream, out: &mut Vec<TintOp>) {
    let count = stream.next_below(3) as usize + 1;
    for e in sample_n(gc.tints(Target::Dirt), count, stream) {
        let v = faint(stream);
        let rgb = [
            linear_to_srgb(stream.uniform()),
            linear_to_srgb(stream.uniform()),
            linear_to_srgb(stream.uniform()),
        ];
        out.push(TintOp::colored(Target::Dirt, &e.index, v, None, rgb));
    }
}

/// Settlers get one faint scar; everyone else one to five strong ones.
///
/// The count for the strong branch is its own draw, taken before the picks.
pub fn scar_layer(gc: &GenderCatalog, stream: &mut Stream, settler: bool, concealer: bool, out: &mut Vec<TintOp>) {
    let scars = gc.tints(Target::Scars);
    let (picked, min, span): (Vec<&TraitEntry>, f64, f64) = if settler {
        (sample_one(scars, stream).into_iter().collect(), FAINT_MIN, FAINT_SPAN)
    } else {
        let count = stream.next_below(5) as usize + 1;
        (sample_n(scars, count, stream), SCAR_MIN, SCAR_SPAN)
    };

    for e in picked {
        let mut v = min + stream.uniform() * span;
        if concealer {
            v /= CONCEALER_SCAR_DIVISOR;
        }
        out.push(TintOp::value(Target::Scars, &e.index, v));
    }
}

pub fn paint_layer(gc: &GenderCatalog, stream: &mut Stream, factions: FactionFlags, out: &mut Vec<TintOp>) {
    if factions.raider {
        if let Some(e) = sample_one(gc.tints(Target::Raiders), stream) {
            out.push(TintOp::value(Target::Raiders, &e.index, 1.0));
        }
    }
    if factions.children_of_atom {
        if let Some(e) = sample_one(gc.tints(Target::ChildrenOfAtom), stream) {
            let v = ATOM_MIN + stream.uniform() * ATOM_SPAN;
            out.push(TintOp::value(Target::ChildrenOfAtom, &e.index, v));
        }
    }
}

#[inline]
fn faint(stream: &mut Stream) -> f64 {
    FAINT_MIN + stream.uniform() * FAINT_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TraitColor;

    fn swatch_entry(index: &str, colors: &[(&str, f64, f64)]) -> TraitEntry {
        TraitEntry {
            index: index.into(),
            colors: Some(
                colors
                    .iter()
                    .map(|(ci, level, alpha)| TraitColor {
                        color: LinearColor { red: *level, green: *level, blue: *level, alpha: None },
                        alpha: *alpha,
                        index: (*ci).into(),
                    })
                    .collect(),
            ),
        }
    }

    #[test]
    fn low_weight_swaps_to_second_swatch() {
        let entry = swatch_entry("skin", &[("dark", 0.1, 1.0), ("pale", 0.9, 1.0)]);
        let colors = entry.colors();
        let first = Swatch { entry: &entry, color: &colors[0] };
        let second = Swatch { entry: &entry, color: &colors[1] };

        let (op, l) = blend_skin(first, second, 0.3);
        assert_eq!(op.template_color.as_deref(), Some("pale"));
        assert!((op.value - 1.0).abs() < 1e-12);

        // 0.7 * 0.9 + 0.3 * 0.1
        assert!((l - 0.66).abs() < 1e-9);
        let blended = colors[1].color.mix(&colors[0].color, 1.0 - 0.3);
        let [r, g, b] = blended.to_srgb();
        assert_eq!((op.red, op.green, op.blue), (Some(r), Some(g), Some(b)));
    }

    #[test]
    fn high_weight_keeps_first_swatch() {
        let entry = swatch_entry("skin", &[("a", 0.2, 0.5), ("b", 0.4, 1.0)]);
        let colors = entry.colors();
        let (op, _) = blend_skin(
            Swatch { entry: &entry, color: &colors[0] },
            Swatch { entry: &entry, color: &colors[1] },
            0.8,
        );
        assert_eq!(op.template_color.as_deref(), Some("a"));
        assert!((op.value - (0.8 * 0.5 + 0.2 * 1.0)).abs() < 1e-12);
    }

    #[test]
    fn freckles_need_light_skin() {
        let mut gc = GenderCatalog::default();
        gc.push_tint(Target::Freckles, TraitEntry::new("f1"));
        gc.push_tint(Target::Freckles, TraitEntry::new("f2"));

        // uniform() * 0 never reaches the gate.
        for seed in 0..50 {
            let mut s = Stream::seed("dark", seed);
            let mut out = Vec::new();
            blemish_layer(&gc, &mut s, 0.0, &mut out);
            assert!(out.iter().all(|op| op.target != Some(Target::Freckles)));
        }
    }

    #[test]
    fn blemish_branch_counts_and_bands() {
        let mut gc = GenderCatalog::default();
        for i in 0..6 {
            gc.push_tint(Target::Blemishes, TraitEntry::new(format!("b{i}")));
            gc.push_tint(Target::Moles, TraitEntry::new(format!("m{i}")));
        }
        gc.push_tint(Target::Freckles, TraitEntry::new("f1"));
        gc.push_tint(Target::Freckles, TraitEntry::new("f2"));

        let lightness = 0.9;
        let (mut freckled, mut moled) = (0, 0);
        for seed in 0..2000 {
            let mut s = Stream::seed("blemish", seed);
            let mut out = Vec::new();
            blemish_layer(&gc, &mut s, lightness, &mut out);

            let of = |t: Target| out.iter().filter(|op| op.target == Some(t)).collect::<Vec<_>>();
            let (blemishes, freckles, moles) = (of(Target::Blemishes), of(Target::Freckles), of(Target::Moles));

            assert!(blemishes.len() <= 4);
            for op in blemishes.iter().chain(&moles) {
                assert!((FAINT_MIN..=FAINT_MIN + FAINT_SPAN).contains(&op.value), "{}", op.value);
            }
            assert!(freckles.is_empty() || moles.is_empty());
            if !freckles.is_empty() {
                freckled += 1;
                assert_eq!(freckles.len(), 2);
                assert!(freckles.iter().all(|op| (0.0..=1.0 - lightness).contains(&op.value)));
            }
            if !moles.is_empty() {
                moled += 1;
                assert!((1..=2).contains(&moles.len()));
            }
        }
        assert!(freckled > 0 && moled > 0, "freckles {freckled}, moles {moled}");
    }

    #[test]
    fn raider_paint_is_full_intensity() {
        let mut gc = GenderCatalog::default();
        gc.push_tint(Target::Raiders, TraitEntry::new("r1"));
        let mut s = Stream::seed("raider", 1);
        let mut out = Vec::new();
        let flags = FactionFlags { raider: true, ..Default::default() };
        paint_layer(&gc, &mut s, flags, &mut out);
        assert_eq!(out, vec![TintOp::value(Target::Raiders, "r1", 1.0)]);
    }
}
