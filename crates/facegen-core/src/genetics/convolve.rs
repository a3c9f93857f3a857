// crates/facegen-core/src/genetics/convolve.rs
//
// Two-parent trait convolution.
// Presence is `contains_key`, never truthiness: a key mapped to 0.0 is present.

use std::collections::BTreeMap;

/// Parent or child trait map, keyed by region id or slot name.
pub type TraitMap<K, V> = BTreeMap<K, V>;

/// Merge two parents into a child holding every key of either side exactly once.
///
/// A key missing on one side is passed to `combine` as `default`, in that side's
/// argument position.
pub fn convolve<K, V, F>(
    parent_a: &TraitMap<K, V>,
    parent_b: &TraitMap<K, V>,
    default: &V,
    mut combine: F,
) -> TraitMap<K, V>
where
    K: Ord + Clone,
    F: FnMut(&K, &V, &V) -> V,
{
    let mut child = TraitMap::new();
    for (k, a) in parent_a {
        let b = parent_b.get(k).unwrap_or(default);
        child.insert(k.clone(), combine(k, a, b));
    }
    for (k, b) in parent_b {
        if !child.contains_key(k) {
            child.insert(k.clone(), combine(k, default, b));
        }
    }
    child
}

/// Values that can be weight-averaged.
pub trait Blend: Sized {
    /// The explicit "absent" value: 0 or an all-zero vector.
    fn zero() -> Self;

    /// `w * a + (1 - w) * b`.
    fn weighted(w: f64, a: &Self, b: &Self) -> Self;
}

impl Blend for f64 {
    fn zero() -> Self {
        0.0
    }

    fn weighted(w: f64, a: &Self, b: &Self) -> Self {
        w * a + (1.0 - w) * b
    }
}

impl<const N: usize> Blend for [f64; N] {
    fn zero() -> Self {
        [0.0; N]
    }

    fn weighted(w: f64, a: &Self, b: &Self) -> Self {
        let mut out = [0.0; N];
        for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b)) {
            *o = w * x + (1.0 - w) * y;
        }
        out
    }
}

/// Weighted-average convolution with the type's zero as the default.
pub fn weighted<K, V>(parent_a: &TraitMap<K, V>, parent_b: &TraitMap<K, V>, w: f64) -> TraitMap<K, V>
where
    K: Ord + Clone,
    V: Blend,
{
    convolve(parent_a, parent_b, &V::zero(), |_, a, b| V::weighted(w, a, b))
}
