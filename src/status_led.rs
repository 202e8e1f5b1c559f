//! Status LED front end
//!
//! Callers post patterns from any context, a background task renders them.
//!
//! ```ignore
//! static STATUS_LED: StatusLed = StatusLed::new();
//!
//! #[embassy_executor::task]
//! async fn status_led_task(mut device: GpioLed<Output<'static>>) {
//!     STATUS_LED.run(&mut device).await;
//! }
//!
//! STATUS_LED.blink(Duration::from_millis(50), Duration::from_millis(450), BLUE, 32);
//! ```

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::Duration;
use log::{debug, info};

use crate::color::{Rgb, apply_brightness};
use crate::command::{Command, CommandChannel};
use crate::device::LedDevice;
use crate::engine::PatternEngine;

/// Number of toggles in a flash burst when the caller has no preference
pub const DEFAULT_FLASH_COUNT: u16 = 1;

/// Non-blocking status LED
///
/// Owns the command queue and the lifetime of the pattern engine.
/// Every request is best effort: when the queue is full the request is
/// dropped and the LED keeps its current pattern.
pub struct StatusLed {
    commands: CommandChannel,
    shutdown: Signal<CriticalSectionRawMutex, ()>,
}

impl StatusLed {
    pub const fn new() -> Self {
        Self {
            commands: Channel::new(),
            shutdown: Signal::new(),
        }
    }

    /// Switch the LED off
    pub fn off(&self) {
        debug!("[StatusLed] switching off");
        self.send(Command::Off);
    }

    /// Keep the LED lit
    pub fn on(&self, color: Rgb, brightness: u8) {
        debug!("[StatusLed] switching on");
        self.send(Command::On {
            color: apply_brightness(color, brightness),
        });
    }

    /// Blink until the next request
    pub fn blink(&self, time_on: Duration, time_off: Duration, color: Rgb, brightness: u8) {
        debug!("[StatusLed] blinking");
        self.send(Command::Blink {
            color: apply_brightness(color, brightness),
            time_on,
            time_off,
        });
    }

    /// Flash `count` times, then resume the previous pattern
    ///
    /// A count of zero flashes once.
    pub fn flash(
        &self,
        time_on: Duration,
        time_off: Duration,
        count: u16,
        color: Rgb,
        brightness: u8,
    ) {
        debug!("[StatusLed] flashing {} times", count);
        self.send(Command::Flash {
            color: apply_brightness(color, brightness),
            time_on,
            time_off,
            count,
        });
    }

    /// Enqueue a prepared command without waiting
    pub fn send(&self, command: Command) {
        if self.commands.try_send(command).is_err() {
            debug!("[StatusLed] queue full, dropping {:?}", command);
        }
    }

    /// Number of commands waiting for the engine
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Render commands on `device` until [`stop`](Self::stop) is called
    ///
    /// This is the body of the background task. Pending commands are
    /// discarded once the engine stops.
    pub async fn run<D: LedDevice>(&self, device: &mut D) {
        let mut engine = PatternEngine::new(device);
        match select(self.shutdown.wait(), engine.run(self.commands.receiver())).await {
            Either::First(()) => info!("[StatusLed] engine stopped"),
            Either::Second(()) => {}
        }
        self.commands.clear();
    }

    /// Stop the engine, interrupting any pending wait
    pub fn stop(&self) {
        self.shutdown.signal(());
    }
}

impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}
