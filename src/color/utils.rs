use crate::{color::Rgb, math8::scale_linear};

/// Scale every channel of a color by `brightness / 255`
///
/// Channels are truncated, so the result is never brighter than `color`.
#[inline]
pub const fn apply_brightness(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale_linear(color.r, brightness),
        g: scale_linear(color.g, brightness),
        b: scale_linear(color.b, brightness),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
