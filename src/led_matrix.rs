//! A device abstraction for a small NeoPixel-style (WS2812) LED matrix.
//!
//! Drawing happens in `(x, y)` raster space on a [`MatrixFrame`]. The
//! [`FrameRenderer`](renderer::FrameRenderer) scales each frame by an [`Intensity`], writes it
//! into a [`PixelBuffer`] through a [`MatrixLayout`] (so the buffer is already in wiring order),
//! hands the buffer to a [`Transmitter`](renderer::Transmitter), holds it on screen, and clears it.
//!
//! # Example
//!
//! ```rust
//! use matrix_keypad::led_matrix::{LAYOUT_5X5, MatrixFrame, PixelBuffer, colors};
//!
//! let mut frame = MatrixFrame::<5, 5>::new();
//! frame[(0, 0)] = colors::BLUE; // top-left
//!
//! let mut buffer = PixelBuffer::<25>::new();
//! let index = LAYOUT_5X5.index(0, 0).unwrap();
//! buffer.set_led(index, 0, 0, 255).unwrap();
//! assert_eq!(index, 24); // the top-left LED is the last one on the wire
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used for every pixel.
pub use smart_leds::RGB8;

pub use embedded_graphics::pixelcolor::Rgb888;

pub mod layout;
pub mod renderer;
#[cfg(not(feature = "host"))]
pub mod ws2812;

pub use layout::MatrixLayout;

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut, Index, IndexMut},
};
use embedded_graphics::{Pixel, draw_target::DrawTarget, prelude::*};

use crate::{Error, Result};

/// Columns on the matrix board.
pub const MATRIX_WIDTH: usize = 5;
/// Rows on the matrix board.
pub const MATRIX_HEIGHT: usize = 5;
/// LEDs on the matrix board.
pub const MATRIX_LEN: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Wiring of the 5×5 board: serpentine rows, transmitted starting from the bottom-right LED.
pub const LAYOUT_5X5: MatrixLayout<MATRIX_LEN, MATRIX_WIDTH, MATRIX_HEIGHT> =
    MatrixLayout::serpentine_row_major_reversed();

/// A frame sized for the 5×5 board.
pub type Frame5x5 = MatrixFrame<MATRIX_WIDTH, MATRIX_HEIGHT>;

// ============================================================================
// Intensity
// ============================================================================

/// Uniform brightness scale applied to every channel of a frame.
///
/// Scaling multiplies and truncates toward zero: `floor(channel * intensity)`.
///
/// Values are meant to lie in `0.0..=1.0` and are not checked. Out-of-range values are the
/// caller's problem: the product goes through a 32-bit unsigned integer and keeps its low
/// 8 bits, so intensities above `1.0` wrap (`200 * 2.0` gives 144) and negative intensities
/// give 0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Intensity(pub f32);

impl Intensity {
    /// Full brightness; frames pass through unchanged.
    pub const FULL: Self = Self(1.0);
    /// Everything off.
    pub const OFF: Self = Self(0.0);

    /// Scale one 8-bit channel.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "truncating toward zero, then keeping the low byte, is the scaling rule"
    )]
    pub fn scale(self, channel: u8) -> u8 {
        (f32::from(channel) * self.0) as u32 as u8
    }

    /// Scale all three channels of a color.
    #[must_use]
    pub fn scale_rgb(self, color: RGB8) -> RGB8 {
        RGB8::new(self.scale(color.r), self.scale(color.g), self.scale(color.b))
    }
}

impl From<f32> for Intensity {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Per-LED color state, stored in transmission order.
///
/// Index 0 is the first LED on the wire. Nothing here translates coordinates:
/// callers pass indices already mapped through a [`MatrixLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize>([RGB8; N]);

impl<const N: usize> PixelBuffer<N> {
    /// Number of LEDs in this buffer.
    pub const LEN: usize = N;

    /// Create a new all-black buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Set every LED to black.
    pub fn clear(&mut self) {
        self.0 = [RGB8::new(0, 0, 0); N];
    }

    /// Overwrite the LED at `index` (transmission order) with `(r, g, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= N`.
    pub fn set_led(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<()> {
        let slot = self.0.get_mut(index).ok_or(Error::OutOfRange)?;
        *slot = RGB8::new(r, g, b);
        Ok(())
    }

    /// Read back the LED at `index` (transmission order).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= N`.
    pub fn get_led(&self, index: usize) -> Result<RGB8> {
        self.0.get(index).copied().ok_or(Error::OutOfRange)
    }

    /// The pixels in wire order, ready for a [`Transmitter`](renderer::Transmitter).
    #[must_use]
    pub const fn as_transmission_order(&self) -> &[RGB8; N] {
        &self.0
    }

    /// Whether every LED is black.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.0.iter().all(|color| *color == RGB8::new(0, 0, 0))
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MatrixFrame
// ============================================================================

/// A static image for the whole matrix, in `(x, y)` raster coordinates.
///
/// Stored as `[[RGB8; W]; H]`: the outer index is the row `y`, the inner index the column `x`,
/// the same way pixel-art literals are written out row by row.
///
/// Frames also implement [`DrawTarget`], so they can be drawn on with
/// [`embedded-graphics`](https://docs.rs/embedded-graphics).
///
/// ```rust
/// use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{Line, PrimitiveStyle}};
/// use matrix_keypad::led_matrix::Frame5x5;
///
/// let mut frame = Frame5x5::new();
/// Line::new(Point::new(0, 0), Point::new(4, 4))
///     .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
///     .draw(&mut frame)
///     .unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixFrame<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> MatrixFrame<W, H> {
    /// Frame width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of pixels (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    /// Build a frame from `[r, g, b]` triples written row by row.
    #[must_use]
    pub const fn from_rgb_rows(rows: [[[u8; 3]; W]; H]) -> Self {
        let mut frame = Self::new();
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let [r, g, b] = rows[y_index][x_index];
                frame.0[y_index][x_index] = RGB8::new(r, g, b);
                x_index += 1;
            }
            y_index += 1;
        }
        frame
    }
}

impl<const W: usize, const H: usize> Deref for MatrixFrame<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for MatrixFrame<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for MatrixFrame<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for MatrixFrame<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> From<[[RGB8; W]; H]> for MatrixFrame<W, H> {
    fn from(array: [[RGB8; W]; H]) -> Self {
        Self(array)
    }
}

impl<const W: usize, const H: usize> Default for MatrixFrame<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for MatrixFrame<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for MatrixFrame<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if let Some(slot) = self.0.get_mut(y_index).and_then(|row| row.get_mut(x_index)) {
                *slot = RGB8::new(color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }
}
