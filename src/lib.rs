#![no_std]

pub mod color;
pub mod command;
pub mod device;
pub mod engine;
pub mod math8;
pub mod status_led;

pub use color::{
    BLACK, BLUE, DEFAULT_BRIGHTNESS, DEFAULT_COLOR, GREEN, ORANGE, RED, Rgb, WHITE,
    apply_brightness,
};
pub use command::{
    COMMAND_CHANNEL_SIZE, Command, CommandChannel, CommandReceiver, CommandSender,
};
pub use device::{AddressableLed, ChannelOrder, GpioLed, LedDevice, OnLevel};
pub use engine::{PatternEngine, Wait};
pub use status_led::{DEFAULT_FLASH_COUNT, StatusLed};

pub use embassy_time::Duration;

/// Serial logger for ESP32 firmware
#[cfg(feature = "esp32-log")]
pub use esp_println::logger::init_logger;
