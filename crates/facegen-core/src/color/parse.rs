// crates/facegen-core/src/color/parse.rs
//
// Accepted shapes:
//   integer 0xBBGGRR (red in the low byte)
//   "rgba(r,g,b,a)"  alpha kept raw
//   "rgb(r,g,b)"
//   "#XXXXXX"        read as the packed integer above
//   bare hex digits  read as the packed integer above
// Any other JSON shape deserializes but never parses.

use serde::{Deserialize, Serialize};

use crate::color::transfer::srgb_to_linear;
use crate::color::LinearColor;

/// A color as it appears in source data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Packed(i64),
    Text(String),
    /// Floats, nulls, arrays, out-of-range integers: warned about and dropped.
    Other(serde_json::Value),
}

impl From<i64> for ColorValue {
    fn from(v: i64) -> Self {
        ColorValue::Packed(v)
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        ColorValue::Text(s.to_owned())
    }
}

/// Parse any accepted color shape into linear light.
///
/// Unrecognized input calls `on_warn` once and returns `None`; callers skip the tint.
pub fn parse_color<W>(input: &ColorValue, mut on_warn: W) -> Option<LinearColor>
where
    W: FnMut(&str),
{
    let parsed = match input {
        ColorValue::Packed(v) => packed(*v),
        ColorValue::Text(s) => text(s.trim()),
        ColorValue::Other(_) => None,
    };
    if parsed.is_none() {
        on_warn(&format!("unrecognized color value: {}", describe(input)));
    }
    parsed
}

fn describe(input: &ColorValue) -> String {
    match input {
        ColorValue::Packed(v) => format!("{v}"),
        ColorValue::Text(s) => format!("\"{s}\""),
        ColorValue::Other(v) => v.to_string(),
    }
}

fn packed(v: i64) -> Option<LinearColor> {
    if !(0..=0xFF_FFFF).contains(&v) {
        return None;
    }
    let v = v as u32;
    Some(LinearColor {
        red: srgb_to_linear((v & 0xFF) as u8),
        green: srgb_to_linear(((v >> 8) & 0xFF) as u8),
        blue: srgb_to_linear(((v >> 16) & 0xFF) as u8),
        alpha: None,
    })
}

fn text(s: &str) -> Option<LinearColor> {
    if let Some(body) = call_body(s, "rgba") {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return None;
        }
        let mut c = channels(&parts[..3])?;
        c.alpha = Some(parts[3].parse::<f64>().ok().filter(|a| a.is_finite())?);
        return Some(c);
    }
    if let Some(body) = call_body(s, "rgb") {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        return channels(&parts);
    }
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return hex_packed(hex);
    }

    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if hex.is_empty() || hex.len() > 6 {
        return None;
    }
    hex_packed(hex)
}

/// `name(` ... `)` with case-insensitive name.
fn call_body<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let open = name.len();
    if s.len() <= open + 1 || !s.is_char_boundary(open) {
        return None;
    }
    if !s[..open].eq_ignore_ascii_case(name) {
        return None;
    }
    s[open..].strip_prefix('(')?.strip_suffix(')')
}

fn channels(parts: &[&str]) -> Option<LinearColor> {
    let mut rgb = [0u8; 3];
    for (slot, p) in rgb.iter_mut().zip(parts) {
        *slot = p.parse::<u8>().ok()?;
    }
    Some(LinearColor {
        red: srgb_to_linear(rgb[0]),
        green: srgb_to_linear(rgb[1]),
        blue: srgb_to_linear(rgb[2]),
        alpha: None,
    })
}

fn hex_packed(hex: &str) -> Option<LinearColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let v = i64::from_str_radix(hex, 16).ok()?;
    packed(v)
}
