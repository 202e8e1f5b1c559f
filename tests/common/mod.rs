#![allow(dead_code)]

use myrtio_status_led::{LedDevice, Rgb};

/// Device call observed by [`RecordingLed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    On(Rgb),
    Off,
}

/// LED that remembers every call it receives
#[derive(Debug, Default)]
pub struct RecordingLed {
    pub events: Vec<Event>,
}

impl RecordingLed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedDevice for RecordingLed {
    fn on(&mut self, color: Rgb) {
        self.events.push(Event::On(color));
    }

    fn off(&mut self) {
        self.events.push(Event::Off);
    }
}
