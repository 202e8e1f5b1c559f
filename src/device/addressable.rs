//! Single addressable RGB pixel (WS2812 and friends)

use core::fmt::Debug;
use core::iter;

use log::warn;
use smart_leds::SmartLedsWrite;

use super::LedDevice;
use crate::color::{BLACK, Rgb};

/// Order in which the pixel expects the red and green channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    /// Red and green are swapped on the wire
    Grb,
}

impl ChannelOrder {
    const fn arrange(self, color: Rgb) -> Rgb {
        match self {
            Self::Rgb => color,
            Self::Grb => Rgb {
                r: color.g,
                g: color.r,
                b: color.b,
            },
        }
    }
}

/// First pixel of a smart LED strip used as a status LED
///
/// The pixel is cleared when the device is dropped.
pub struct AddressableLed<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    writer: W,
    order: ChannelOrder,
}

impl<W> AddressableLed<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    /// Take over the strip and clear the pixel
    ///
    /// Fails if the strip cannot be written.
    pub fn new(writer: W, order: ChannelOrder) -> Result<Self, W::Error> {
        let mut led = Self { writer, order };
        led.write(BLACK)?;
        Ok(led)
    }

    fn write(&mut self, color: Rgb) -> Result<(), W::Error> {
        self.writer.write(iter::once(self.order.arrange(color)))
    }
}

impl<W> LedDevice for AddressableLed<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    fn on(&mut self, color: Rgb) {
        if let Err(err) = self.write(color) {
            warn!("[AddressableLed] failed to write pixel: {:?}", err);
        }
    }

    fn off(&mut self) {
        if let Err(err) = self.write(BLACK) {
            warn!("[AddressableLed] failed to clear pixel: {:?}", err);
        }
    }
}

impl<W> Drop for AddressableLed<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    fn drop(&mut self) {
        let _ = self.write(BLACK);
    }
}
