//! LED devices driven by the pattern engine
//!
//! The engine only knows [`LedDevice`]. Backends are picked by the caller
//! and handed to [`StatusLed::run`](crate::StatusLed::run).

mod addressable;
mod gpio;

pub use addressable::{AddressableLed, ChannelOrder};
pub use gpio::{GpioLed, OnLevel};

use crate::color::Rgb;

/// Abstract status LED
///
/// Implement this trait to support different hardware platforms.
/// Both calls render immediately and must not block for long.
pub trait LedDevice {
    /// Light the LED with the given color
    fn on(&mut self, color: Rgb);

    /// Switch the LED off
    fn off(&mut self);
}

impl<D: LedDevice + ?Sized> LedDevice for &mut D {
    fn on(&mut self, color: Rgb) {
        (**self).on(color);
    }

    fn off(&mut self) {
        (**self).off();
    }
}
