//! Tuning constants for the keypad-driven matrix.
//!
//! Everything is fixed at compile time. Start from [`Config::DEFAULT`] and override fields with
//! struct update syntax:
//!
//! ```rust
//! use embassy_time::Duration;
//! use matrix_keypad::config::Config;
//!
//! const CONFIG: Config = Config {
//!     label_frame_duration: Duration::from_millis(500),
//!     ..Config::DEFAULT
//! };
//! ```

use embassy_time::Duration;

use crate::led_matrix::Intensity;
use crate::pio_claim::PioUnit;

/// Default brightness of the label frames.
pub const LABEL_INTENSITY_DEFAULT: Intensity = Intensity(0.8);

/// Default time each label frame stays on the matrix.
pub const LABEL_FRAME_DURATION_DEFAULT: Duration = Duration::from_millis(2000);

/// Default delay between keypad polls. Also the only debouncing the keypad gets.
pub const POLL_INTERVAL_DEFAULT: Duration = Duration::from_millis(100);

/// Default extra delay after a key has been handled, so one press is not read twice.
pub const KEY_REPEAT_GUARD_DEFAULT: Duration = Duration::from_millis(100);

/// Compile-time settings for the firmware loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Brightness applied to every label frame.
    pub label_intensity: Intensity,
    /// How long each label frame is displayed.
    pub label_frame_duration: Duration,
    /// Delay between keypad polls.
    pub poll_interval: Duration,
    /// Extra delay after a handled key press.
    pub key_repeat_guard: Duration,
    /// PIO unit the LED transmitter tries first.
    pub preferred_pio: PioUnit,
    /// PIO units kept free for other drivers.
    pub reserved_pio: &'static [PioUnit],
}

impl Config {
    /// The settings the board ships with.
    pub const DEFAULT: Self = Self {
        label_intensity: LABEL_INTENSITY_DEFAULT,
        label_frame_duration: LABEL_FRAME_DURATION_DEFAULT,
        poll_interval: POLL_INTERVAL_DEFAULT,
        key_repeat_guard: KEY_REPEAT_GUARD_DEFAULT,
        preferred_pio: PioUnit::Pio0,
        reserved_pio: &[],
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
