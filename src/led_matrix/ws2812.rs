//! WS2812 transmitter on a PIO state machine.
//!
//! Bit timing comes from embassy's `PioWs2812` program. Pixels go out in GRB order; after each
//! frame the line is held idle for [`RESET_DELAY`] so the LEDs latch it.

use defmt::info;
use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::{Common, Instance, Pio, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};
use embassy_time::{Duration, Timer};

use super::RGB8;
use super::renderer::{RESET_DELAY, Transmitter};
use crate::Result;
use crate::pio_claim::PioUnit;
use crate::pio_irqs::{Pio0Irqs, Pio1Irqs};

/// A [`Transmitter`] driving N WS2812 LEDs from state machine `S` of PIO unit `P`.
pub struct Ws2812Transmitter<'d, P: Instance, const S: usize, const N: usize> {
    driver: PioWs2812<'d, P, S, N, Grb>,
    // Held so the PIO unit stays claimed while the driver runs.
    _common: Common<'d, P>,
}

impl<'d, P: Instance, const S: usize, const N: usize> Ws2812Transmitter<'d, P, S, N> {
    /// Load the WS2812 program into `common` and start it on `sm`, driving `pin` through `dma`.
    pub fn new(
        mut common: Common<'d, P>,
        sm: StateMachine<'d, P, S>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = PioWs2812Program::new(&mut common);
        let driver = PioWs2812::new(&mut common, sm, dma, pin, &program);
        Self {
            driver,
            _common: common,
        }
    }
}

impl<P: Instance, const S: usize, const N: usize> Transmitter<N>
    for Ws2812Transmitter<'_, P, S, N>
{
    async fn transmit(&mut self, pixels: &[RGB8; N]) -> Result<()> {
        self.driver.write(pixels).await;
        Timer::after(RESET_DELAY).await;
        Ok(())
    }

    async fn hold(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}

/// The LED transmitter on whichever PIO unit was claimed for it.
pub enum MatrixTransmitter<'d, const N: usize> {
    /// Running on `PIO0`, state machine 0.
    Pio0(Ws2812Transmitter<'d, PIO0, 0, N>),
    /// Running on `PIO1`, state machine 0.
    Pio1(Ws2812Transmitter<'d, PIO1, 0, N>),
}

impl<'d, const N: usize> MatrixTransmitter<'d, N> {
    /// Start the transmitter on `unit`, as returned by [`PioClaims::claim`](crate::pio_claim::PioClaims::claim).
    ///
    /// Both PIO peripherals are taken so the choice can be made at run time; the unit not
    /// chosen is left untouched.
    pub fn new(
        unit: PioUnit,
        pio0: Peri<'d, PIO0>,
        pio1: Peri<'d, PIO1>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        info!("MatrixTransmitter::new: {} LEDs on {}", N, unit);
        match unit {
            PioUnit::Pio0 => {
                let Pio { common, sm0, .. } = Pio::new(pio0, Pio0Irqs);
                Self::Pio0(Ws2812Transmitter::new(common, sm0, dma, pin))
            }
            PioUnit::Pio1 => {
                let Pio { common, sm0, .. } = Pio::new(pio1, Pio1Irqs);
                Self::Pio1(Ws2812Transmitter::new(common, sm0, dma, pin))
            }
        }
    }
}

impl<const N: usize> Transmitter<N> for MatrixTransmitter<'_, N> {
    async fn transmit(&mut self, pixels: &[RGB8; N]) -> Result<()> {
        match self {
            Self::Pio0(transmitter) => transmitter.transmit(pixels).await,
            Self::Pio1(transmitter) => transmitter.transmit(pixels).await,
        }
    }

    async fn hold(&mut self, duration: Duration) {
        match self {
            Self::Pio0(transmitter) => transmitter.hold(duration).await,
            Self::Pio1(transmitter) => transmitter.hold(duration).await,
        }
    }
}
