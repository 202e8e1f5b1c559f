//! Single-color LED on a GPIO pin

use embedded_hal::digital::OutputPin;
use log::warn;

use super::LedDevice;
use crate::color::{BLACK, Rgb};

/// What pin level turns the LED on (depends on wiring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnLevel {
    /// LED lights when the pin is high
    #[default]
    High,
    /// LED lights when the pin is low (inverted signal)
    Low,
}

/// On/off LED driven by a digital output
///
/// The color is ignored, except that black switches the LED off.
#[derive(Debug)]
pub struct GpioLed<P: OutputPin> {
    pin: P,
    on_level: OnLevel,
}

impl<P: OutputPin> GpioLed<P> {
    /// Take over the pin and switch the LED off
    ///
    /// Fails if the pin cannot be driven.
    pub fn new(pin: P, on_level: OnLevel) -> Result<Self, P::Error> {
        let mut led = Self { pin, on_level };
        led.set_lit(false)?;
        Ok(led)
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }

    fn set_lit(&mut self, lit: bool) -> Result<(), P::Error> {
        let high = lit == (self.on_level == OnLevel::High);
        if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

impl<P: OutputPin> LedDevice for GpioLed<P> {
    fn on(&mut self, color: Rgb) {
        if color == BLACK {
            self.off();
            return;
        }
        if let Err(err) = self.set_lit(true) {
            warn!("[GpioLed] failed to switch on: {:?}", err);
        }
    }

    fn off(&mut self) {
        if let Err(err) = self.set_lit(false) {
            warn!("[GpioLed] failed to switch off: {:?}", err);
        }
    }
}
