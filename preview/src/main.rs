//! Console preview for myrtio-status-led patterns
//!
//! Plays the reference status sequence on a simulated LED and logs every
//! change with its timestamp. Pass `gpio` to simulate a single-color LED
//! instead of an RGB pixel.

use std::convert::Infallible;
use std::env;

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{ErrorType, OutputPin};
use log::info;
use myrtio_status_led::color::{BLUE, GREEN, ORANGE, RED, WHITE};
use myrtio_status_led::{
    AddressableLed, ChannelOrder, GpioLed, LedDevice, OnLevel, Rgb, StatusLed,
};
use smart_leds::SmartLedsWrite;

/// Number of times the sequence is played
const ROUNDS: usize = 2;

/// Status LED shared between the sequence and the engine
static STATUS_LED: StatusLed = StatusLed::new();

/// RGB pixel that logs what it would display
struct ConsoleStrip {
    started: Instant,
}

impl SmartLedsWrite for ConsoleStrip {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for color in iterator {
            let color: Rgb = color.into();
            info!(
                "[{:>6} ms] pixel #{:02X}{:02X}{:02X}",
                self.started.elapsed().as_millis(),
                color.r,
                color.g,
                color.b
            );
        }
        Ok(())
    }
}

/// Output pin that logs its level
struct ConsolePin {
    started: Instant,
}

impl ErrorType for ConsolePin {
    type Error = Infallible;
}

impl OutputPin for ConsolePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        info!("[{:>6} ms] pin low", self.started.elapsed().as_millis());
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        info!("[{:>6} ms] pin high", self.started.elapsed().as_millis());
        Ok(())
    }
}

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Cycle through every pattern, then stop the engine
async fn play_sequence(status_led: &StatusLed) {
    for round in 1..=ROUNDS {
        info!("round {}/{}", round, ROUNDS);
        status_led.on(GREEN, 8);
        Timer::after(ms(2000)).await;
        status_led.blink(ms(50), ms(450), BLUE, 32);
        Timer::after(ms(2000)).await;
        status_led.on(ORANGE, 8);
        Timer::after(ms(1000)).await;
        status_led.flash(ms(50), ms(200), 3, WHITE, 32);
        Timer::after(ms(3000)).await;
        status_led.blink(ms(50), ms(50), WHITE, 32);
        Timer::after(ms(1000)).await;
        // Resumes the fast white blink once done
        status_led.flash(ms(50), ms(200), 3, RED, 32);
        Timer::after(ms(3000)).await;
    }
    status_led.stop();
}

fn play<D: LedDevice>(device: &mut D) {
    block_on(join(STATUS_LED.run(device), play_sequence(&STATUS_LED)));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let started = Instant::now();
    if env::args().nth(1).is_some_and(|arg| arg == "gpio") {
        let Ok(mut led) = GpioLed::new(ConsolePin { started }, OnLevel::High);
        play(&mut led);
    } else {
        let Ok(mut led) = AddressableLed::new(ConsoleStrip { started }, ChannelOrder::Rgb);
        play(&mut led);
    }
}
