// crates/facegen-core/src/rng/pick.rs
//
// Selection primitives driven by a Stream.
// None of them mutate the input slice.

use crate::rng::stream::Stream;

/// Visit one uniformly chosen item. Empty input draws nothing.
pub fn pick_one<'a, T, F>(items: &'a [T], stream: &mut Stream, mut visit: F)
where
    F: FnMut(&'a T),
{
    if items.is_empty() {
        return;
    }
    let k = stream.next_below(items.len() as u32) as usize;
    visit(&items[k]);
}

/// Visit `count` distinct items in their original relative order.
///
/// Order-statistics sampling: draw `count` values in `[0, len - count]`,
/// sort, then take `items[draw[i] + i]`. Ties become adjacent indices.
/// When `count >= len` every item is visited once and nothing is drawn.
pub fn pick_n<'a, T, F>(items: &'a [T], count: usize, stream: &mut Stream, mut visit: F)
where
    F: FnMut(&'a T),
{
    if count >= items.len() {
        items.iter().for_each(visit);
        return;
    }

    let span = (items.len() - count + 1) as u32;
    let mut draws: Vec<usize> = (0..count)
        .map(|_| stream.next_below(span) as usize)
        .collect();
    draws.sort_unstable();

    for (i, d) in draws.into_iter().enumerate() {
        visit(&items[d + i]);
    }
}

/// `pick_one` collected, for callers that draw again per chosen item.
pub fn sample_one<'a, T>(items: &'a [T], stream: &mut Stream) -> Option<&'a T> {
    let mut out = None;
    pick_one(items, stream, |t| out = Some(t));
    out
}

/// `pick_n` collected. Index draws all happen before the caller's per-item draws,
/// the same order a drawing visitor would see.
pub fn sample_n<'a, T>(items: &'a [T], count: usize, stream: &mut Stream) -> Vec<&'a T> {
    let mut out = Vec::with_capacity(count.min(items.len()));
    pick_n(items, count, stream, |t| out.push(t));
    out
}
