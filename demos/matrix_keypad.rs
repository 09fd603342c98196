//! Keypad-driven 5×5 LED matrix firmware: polls the keypad and runs one matrix action per key.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};
use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Timer;
use matrix_keypad::{
    Result,
    config::Config,
    dispatch::{Action, Dispatcher, Outcome, action_for},
    keypad::{KEY_MAP_4X4, Keypad},
    led_matrix::{LAYOUT_5X5, MATRIX_LEN, renderer::FrameRenderer, ws2812::MatrixTransmitter},
    maintenance::UsbBoot,
    pio_claim::PioClaims,
};
use {defmt_rtt as _, panic_probe as _};

const CONFIG: Config = Config::DEFAULT;

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let mut claims = PioClaims::with_reserved(CONFIG.reserved_pio);
    let unit = claims.claim(CONFIG.preferred_pio)?;
    let transmitter = MatrixTransmitter::<MATRIX_LEN>::new(unit, p.PIO0, p.PIO1, p.DMA_CH0, p.PIN_7);
    let renderer = FrameRenderer::new(LAYOUT_5X5, transmitter);
    let mut dispatcher = Dispatcher::new(renderer, UsbBoot, CONFIG);

    let rows = [
        Output::new(p.PIN_22, Level::High),
        Output::new(p.PIN_26, Level::High),
        Output::new(p.PIN_27, Level::High),
        Output::new(p.PIN_28, Level::High),
    ];
    let columns = [
        Input::new(p.PIN_18, Pull::Up),
        Input::new(p.PIN_19, Pull::Up),
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
    ];
    let mut keypad = Keypad::new(rows, columns, KEY_MAP_4X4)?;

    info!("matrix_keypad: ready on {}", unit);

    loop {
        if let Some(key) = keypad.poll()? {
            info!("Key pressed: {}", key);
            if action_for(key) == Action::ShowLabel {
                info!("Playing label");
            }
            match dispatcher.dispatch(key).await? {
                Outcome::Unrecognized => warn!("Key {} not configured", key),
                Outcome::Reserved => debug!("Key {} reserved", key),
                outcome => info!("Key {}: {}", key, outcome),
            }
            Timer::after(CONFIG.key_repeat_guard).await;
        }
        Timer::after(CONFIG.poll_interval).await;
    }
}
