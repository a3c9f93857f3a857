// crates/facegen-core/src/color/transfer.rs
//
// sRGB <-> linear transfer functions (IEC 61966-2-1).

/// Byte channel to linear light.
pub fn srgb_to_linear(byte: u8) -> f64 {
    let c = byte as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to a byte channel.
///
/// Floor-rounded, not round-to-nearest: existing catalogs were produced this way.
pub fn linear_to_srgb(linear: f64) -> u8 {
    let l = linear.clamp(0.0, 1.0);
    let v = if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Rec. 709 luminance of linear RGB.
#[inline]
pub fn lightness(red: f64, green: f64, blue: f64) -> f64 {
    0.2126 * red + 0.7152 * green + 0.0722 * blue
}
