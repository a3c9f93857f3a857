// crates/facegen-core/src/color/mod.rs

pub mod parse;
pub mod transfer;

pub use parse::{parse_color, ColorValue};
pub use transfer::{lightness, linear_to_srgb, srgb_to_linear};

use serde::{Deserialize, Serialize};

/// Linear-light color used for all blending arithmetic.
///
/// Only `parse_color` and the blend helpers below produce these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl LinearColor {
    /// `w * self + (1 - w) * other` per channel.
    ///
    /// Alpha blends only when both sides carry one; otherwise it is dropped.
    pub fn mix(&self, other: &LinearColor, w: f64) -> LinearColor {
        let lerp = |a: f64, b: f64| w * a + (1.0 - w) * b;
        LinearColor {
            red: lerp(self.red, other.red),
            green: lerp(self.green, other.green),
            blue: lerp(self.blue, other.blue),
            alpha: match (self.alpha, other.alpha) {
                (Some(a), Some(b)) => Some(lerp(a, b)),
                _ => None,
            },
        }
    }

    #[inline]
    pub fn lightness(&self) -> f64 {
        lightness(self.red, self.green, self.blue)
    }

    /// Display-space `[r, g, b]`, floor-rounded.
    pub fn to_srgb(&self) -> [u8; 3] {
        [
            linear_to_srgb(self.red),
            linear_to_srgb(self.green),
            linear_to_srgb(self.blue),
        ]
    }
}
