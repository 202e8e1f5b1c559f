mod utils;

use smart_leds::RGB8;

pub use utils::{apply_brightness, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const ORANGE: Rgb = Rgb { r: 255, g: 32, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Color used when the caller has no preference
pub const DEFAULT_COLOR: Rgb = BLUE;

/// Brightness used when the caller has no preference (out of 255)
pub const DEFAULT_BRIGHTNESS: u8 = 32;
