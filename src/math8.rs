/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Divides by 255 and truncates: `scale = 255` keeps the value,
/// `scale = 0` clears it.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_linear(value: u8, scale: u8) -> u8 {
    (value as u16 * scale as u16 / 255) as u8
}
