//! Turning keypad symbols into matrix actions.
//!
//! | key | action |
//! |---|---|
//! | `8` | play the [`LABEL`] |
//! | `A` | clear the matrix |
//! | `B` | color: blue |
//! | `C` | color: dim red |
//! | `D` | color: dim green |
//! | `#` | color: dim white |
//! | `*` | reboot into the USB bootloader |
//! | `1`–`7`, `9` | reserved, nothing happens |
//! | anything else | not configured, nothing happens |
//!
//! [`Dispatcher`] owns everything an action touches (renderer, pixel buffer, current color and
//! the maintenance hook), so there is no global state.

use crate::Result;
use crate::config::Config;
use crate::label::LABEL;
use crate::led_matrix::renderer::{FrameRenderer, Transmitter};
use crate::led_matrix::{MATRIX_HEIGHT, MATRIX_LEN, MATRIX_WIDTH, PixelBuffer, RGB8};
use crate::maintenance::Maintenance;

/// Blue, full scale.
pub const COLOR_BLUE: RGB8 = RGB8::new(0, 0, 255);
/// Red at 0.8 of full scale.
pub const COLOR_DIM_RED: RGB8 = RGB8::new(204, 0, 0);
/// Green at 0.5 of full scale.
pub const COLOR_DIM_GREEN: RGB8 = RGB8::new(0, 127, 0);
/// White at 0.2 of full scale.
pub const COLOR_DIM_WHITE: RGB8 = RGB8::new(51, 51, 51);

/// What a key asks for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Play the label frames.
    ShowLabel,
    /// Blank the pixel buffer.
    Clear,
    /// Change the current color.
    SetColor(RGB8),
    /// Reboot into the USB bootloader.
    EnterBootloader,
    /// A digit kept free for a future action.
    Reserved,
    /// A symbol the table does not know.
    Unrecognized,
}

/// The command table.
#[must_use]
pub const fn action_for(key: char) -> Action {
    match key {
        '8' => Action::ShowLabel,
        'A' => Action::Clear,
        'B' => Action::SetColor(COLOR_BLUE),
        'C' => Action::SetColor(COLOR_DIM_RED),
        'D' => Action::SetColor(COLOR_DIM_GREEN),
        '#' => Action::SetColor(COLOR_DIM_WHITE),
        '*' => Action::EnterBootloader,
        '1'..='7' | '9' => Action::Reserved,
        _ => Action::Unrecognized,
    }
}

/// What [`Dispatcher::dispatch`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The label played to the end.
    LabelShown,
    /// The buffer was cleared and the dark matrix transmitted.
    Cleared,
    /// The current color changed; the buffer was not touched.
    ColorSet(RGB8),
    /// Reserved digit; nothing changed.
    Reserved,
    /// Unknown symbol; nothing changed.
    Unrecognized,
}

// RGB8 has no defmt impl, so the color is spelled out.
#[cfg(not(feature = "host"))]
impl defmt::Format for Outcome {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self {
            Self::LabelShown => defmt::write!(fmt, "LabelShown"),
            Self::Cleared => defmt::write!(fmt, "Cleared"),
            Self::ColorSet(color) => {
                defmt::write!(fmt, "ColorSet({}, {}, {})", color.r, color.g, color.b);
            }
            Self::Reserved => defmt::write!(fmt, "Reserved"),
            Self::Unrecognized => defmt::write!(fmt, "Unrecognized"),
        }
    }
}

/// Owns the matrix state and runs one action per key.
///
/// Actions run to completion before `dispatch` returns. While the label plays, no keys are
/// read, so presses during it are lost.
pub struct Dispatcher<T, M> {
    renderer: FrameRenderer<T, MATRIX_LEN, MATRIX_WIDTH, MATRIX_HEIGHT>,
    buffer: PixelBuffer<MATRIX_LEN>,
    current_color: RGB8,
    maintenance: M,
    config: Config,
}

impl<T, M> Dispatcher<T, M>
where
    T: Transmitter<MATRIX_LEN>,
    M: Maintenance,
{
    /// Start with a cleared buffer and black as the current color.
    #[must_use]
    pub const fn new(
        renderer: FrameRenderer<T, MATRIX_LEN, MATRIX_WIDTH, MATRIX_HEIGHT>,
        maintenance: M,
        config: Config,
    ) -> Self {
        Self {
            renderer,
            buffer: PixelBuffer::new(),
            current_color: RGB8::new(0, 0, 0),
            maintenance,
            config,
        }
    }

    /// The pixel buffer as it stands.
    #[must_use]
    pub const fn buffer(&self) -> &PixelBuffer<MATRIX_LEN> {
        &self.buffer
    }

    /// Mutable access to the pixel buffer, for writing LEDs directly.
    pub const fn buffer_mut(&mut self) -> &mut PixelBuffer<MATRIX_LEN> {
        &mut self.buffer
    }

    /// The color most recently chosen with `B`, `C`, `D` or `#`.
    #[must_use]
    pub const fn current_color(&self) -> RGB8 {
        self.current_color
    }

    /// The renderer, for inspecting its transmitter.
    #[must_use]
    pub const fn renderer(&self) -> &FrameRenderer<T, MATRIX_LEN, MATRIX_WIDTH, MATRIX_HEIGHT> {
        &self.renderer
    }

    /// Run the action for `key`.
    ///
    /// `*` does not return: it hands control to the [`Maintenance`] hook.
    ///
    /// # Errors
    ///
    /// Returns any error from rendering or transmitting.
    pub async fn dispatch(&mut self, key: char) -> Result<Outcome> {
        match action_for(key) {
            Action::ShowLabel => {
                self.renderer
                    .play(
                        &mut self.buffer,
                        &LABEL,
                        self.config.label_intensity,
                        self.config.label_frame_duration,
                    )
                    .await?;
                Ok(Outcome::LabelShown)
            }
            Action::Clear => {
                self.buffer.clear();
                self.renderer.show(&self.buffer).await?;
                Ok(Outcome::Cleared)
            }
            Action::SetColor(color) => {
                self.current_color = color;
                Ok(Outcome::ColorSet(color))
            }
            Action::EnterBootloader => self.maintenance.enter_bootloader(),
            Action::Reserved => Ok(Outcome::Reserved),
            Action::Unrecognized => Ok(Outcome::Unrecognized),
        }
    }
}
