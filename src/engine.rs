//! Pattern engine
//!
//! Turns commands and elapsed time into device `on`/`off` calls. The engine
//! is the only consumer of the command channel and the only code touching
//! the device.

use embassy_time::{Duration, with_timeout};
use log::{debug, info};

use crate::command::{Command, CommandReceiver};
use crate::device::LedDevice;

/// How long the engine may block waiting for the next command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Steady state, nothing to do until a command arrives
    Forever,
    /// Next phase of the active pattern is due after this delay
    For(Duration),
}

impl Wait {
    /// Run the next step right away unless a command is already queued
    pub const IMMEDIATE: Self = Self::For(Duration::from_ticks(0));
}

/// Rendering state machine
///
/// Call [`apply`](Self::apply) for every received command and
/// [`tick`](Self::tick) whenever the returned [`Wait`] expires.
/// [`run`](Self::run) does both against a command channel.
pub struct PatternEngine<'d, D: LedDevice> {
    device: &'d mut D,
    active: Command,
    /// Restore target of a flash burst
    saved: Command,
    is_on: bool,
}

impl<'d, D: LedDevice> PatternEngine<'d, D> {
    /// Create an idle engine
    ///
    /// The device is not touched until the first command.
    pub fn new(device: &'d mut D) -> Self {
        Self {
            device,
            active: Command::Off,
            saved: Command::Off,
            is_on: false,
        }
    }

    /// Command currently being rendered
    pub const fn active(&self) -> Command {
        self.active
    }

    /// Command restored once the current flash burst ends
    pub const fn saved(&self) -> Command {
        self.saved
    }

    /// Whether the LED is lit in the current blink/flash phase
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Start rendering a newly received command
    ///
    /// The new command always replaces the active one, including an
    /// unfinished flash burst.
    pub fn apply(&mut self, command: Command) -> Wait {
        debug!("[PatternEngine] received {:?}", command);
        self.active = match command {
            Command::Off | Command::On { .. } => command,
            Command::Blink { .. } => {
                self.is_on = false;
                command
            }
            Command::Flash {
                color,
                time_on,
                time_off,
                count,
            } => {
                // Bursts do not nest: a flash during a flash keeps the first restore target
                if !self.active.is_flash() {
                    self.saved = self.active;
                }
                self.is_on = false;
                Command::Flash {
                    color,
                    time_on,
                    time_off,
                    count: count.max(1),
                }
            }
        };
        self.tick()
    }

    /// Advance the active pattern by one phase
    pub fn tick(&mut self) -> Wait {
        match self.active {
            Command::Off => {
                self.device.off();
                Wait::Forever
            }
            Command::On { color } => {
                self.device.on(color);
                Wait::Forever
            }
            Command::Blink {
                color,
                time_on,
                time_off,
            } => {
                if self.is_on {
                    self.device.off();
                    self.is_on = false;
                    Wait::For(time_off)
                } else {
                    self.device.on(color);
                    self.is_on = true;
                    Wait::For(time_on)
                }
            }
            Command::Flash {
                color,
                time_on,
                time_off,
                count,
            } => {
                if self.is_on {
                    self.device.off();
                    self.is_on = false;
                    self.active = Command::Flash {
                        color,
                        time_on,
                        time_off,
                        count: count.saturating_sub(1),
                    };
                    Wait::For(time_off)
                } else if count == 0 {
                    debug!("[PatternEngine] flash done, restoring {:?}", self.saved);
                    self.active = self.saved;
                    Wait::IMMEDIATE
                } else {
                    self.device.on(color);
                    self.is_on = true;
                    Wait::For(time_on)
                }
            }
        }
    }

    /// Consume commands forever
    ///
    /// A command that is already queued wins over an expired delay.
    pub async fn run(&mut self, commands: CommandReceiver<'_>) {
        info!("[PatternEngine] started");
        let mut wait = Wait::Forever;
        loop {
            let received = match wait {
                Wait::Forever => Some(commands.receive().await),
                Wait::For(delay) => with_timeout(delay, commands.receive()).await.ok(),
            };
            wait = match received {
                Some(command) => self.apply(command),
                None => self.tick(),
            };
        }
    }
}
