use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Duration;

use crate::color::Rgb;

/// Pattern requests rendered by the pattern engine
///
/// Colors are already brightness-scaled when the command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Keep the LED dark
    Off,
    /// Keep the LED lit
    On { color: Rgb },
    /// Toggle forever at the given cadence, starting lit
    Blink {
        color: Rgb,
        time_on: Duration,
        time_off: Duration,
    },
    /// Toggle `count` times, then go back to the pattern that was active before
    Flash {
        color: Rgb,
        time_on: Duration,
        time_off: Duration,
        count: u16,
    },
}

impl Command {
    pub const fn is_flash(&self) -> bool {
        matches!(self, Self::Flash { .. })
    }
}

pub const COMMAND_CHANNEL_SIZE: usize = 4;

/// Type alias for command sender
pub type CommandSender<'a> =
    Sender<'a, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for the command channel
pub type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;
