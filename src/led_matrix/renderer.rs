//! Frame composition and playback.
//!
//! See [`FrameRenderer`] for the render cycle and [`Transmitter`] for the hardware seam.

use embassy_time::Duration;

use super::{Intensity, MatrixFrame, MatrixLayout, PixelBuffer, RGB8};
use crate::Result;

/// Minimum time the data line must stay idle after a frame so the LEDs latch it.
pub const RESET_DELAY: Duration = Duration::from_micros(100);

/// Sends a pixel buffer to the LEDs and holds what is displayed.
///
/// The render loop is the only thing running, so awaiting these calls blocks the
/// firmware exactly as long as the hardware needs. Tests substitute a recording fake.
pub trait Transmitter<const N: usize> {
    /// Send `pixels` in wire order, then keep the line idle for at least [`RESET_DELAY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the hardware write fails.
    async fn transmit(&mut self, pixels: &[RGB8; N]) -> Result<()>;

    /// Wait for `duration` while the last transmitted frame stays on the LEDs.
    async fn hold(&mut self, duration: Duration);
}

/// Writes [`MatrixFrame`]s into a [`PixelBuffer`] through a [`MatrixLayout`] and plays them.
///
/// The renderer owns the [`Transmitter`]; the buffer stays with the caller so other code
/// (for example, clearing the matrix from a key press) can reach it between frames.
///
/// # Example
///
/// ```rust
/// use embassy_time::Duration;
/// use matrix_keypad::Result;
/// use matrix_keypad::led_matrix::{Frame5x5, Intensity, LAYOUT_5X5, PixelBuffer, RGB8, colors};
/// use matrix_keypad::led_matrix::renderer::{FrameRenderer, Transmitter};
///
/// struct Discard;
///
/// impl Transmitter<25> for Discard {
///     async fn transmit(&mut self, _pixels: &[RGB8; 25]) -> Result<()> {
///         Ok(())
///     }
///     async fn hold(&mut self, _duration: Duration) {}
/// }
///
/// let mut renderer = FrameRenderer::new(LAYOUT_5X5, Discard);
/// let mut buffer = PixelBuffer::new();
/// let frame = Frame5x5::filled(colors::BLUE);
///
/// embassy_futures::block_on(renderer.render(
///     &mut buffer,
///     &frame,
///     Intensity(0.5),
///     Duration::from_millis(10),
/// ))
/// .unwrap();
/// assert!(buffer.is_clear()); // cleared once the frame has been shown
/// ```
pub struct FrameRenderer<T, const N: usize, const W: usize, const H: usize> {
    layout: MatrixLayout<N, W, H>,
    transmitter: T,
}

impl<T, const N: usize, const W: usize, const H: usize> FrameRenderer<T, N, W, H>
where
    T: Transmitter<N>,
{
    /// Create a renderer for `layout` that sends through `transmitter`.
    #[must_use]
    pub const fn new(layout: MatrixLayout<N, W, H>, transmitter: T) -> Self {
        Self {
            layout,
            transmitter,
        }
    }

    /// The wiring this renderer maps frames through.
    #[must_use]
    pub const fn layout(&self) -> &MatrixLayout<N, W, H> {
        &self.layout
    }

    /// Borrow the transmitter.
    #[must_use]
    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Give back the transmitter.
    #[must_use]
    pub fn into_transmitter(self) -> T {
        self.transmitter
    }

    /// Scale `frame` by `intensity` and write every cell into `buffer` at its wiring index.
    ///
    /// Every cell of the buffer is overwritten; nothing is transmitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) only if the layout and buffer
    /// disagree, which the const generics rule out.
    pub fn compose(
        &self,
        buffer: &mut PixelBuffer<N>,
        frame: &MatrixFrame<W, H>,
        intensity: Intensity,
    ) -> Result<()> {
        for (y_index, row) in frame.iter().enumerate() {
            for (x_index, color) in row.iter().enumerate() {
                let led_index = self.layout.index(x_index, y_index)?;
                let scaled = intensity.scale_rgb(*color);
                buffer.set_led(led_index, scaled.r, scaled.g, scaled.b)?;
            }
        }
        Ok(())
    }

    /// Compose `frame`, transmit it, keep it displayed for `display_duration`, then clear
    /// `buffer`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`compose`](Self::compose) or the transmitter. The buffer is
    /// left as composed when transmission fails.
    pub async fn render(
        &mut self,
        buffer: &mut PixelBuffer<N>,
        frame: &MatrixFrame<W, H>,
        intensity: Intensity,
        display_duration: Duration,
    ) -> Result<()> {
        self.compose(buffer, frame, intensity)?;
        self.transmitter
            .transmit(buffer.as_transmission_order())
            .await?;
        self.transmitter.hold(display_duration).await;
        buffer.clear();
        Ok(())
    }

    /// [`render`](Self::render) each frame in turn, every one at the same intensity and for the
    /// same duration.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error.
    pub async fn play(
        &mut self,
        buffer: &mut PixelBuffer<N>,
        frames: &[MatrixFrame<W, H>],
        intensity: Intensity,
        display_duration: Duration,
    ) -> Result<()> {
        for frame in frames {
            self.render(buffer, frame, intensity, display_duration)
                .await?;
        }
        Ok(())
    }

    /// Transmit `buffer` as it stands, without holding or clearing it.
    ///
    /// # Errors
    ///
    /// Returns any error from the transmitter.
    pub async fn show(&mut self, buffer: &PixelBuffer<N>) -> Result<()> {
        self.transmitter
            .transmit(buffer.as_transmission_order())
            .await
    }
}
