//! Crate-wide error type.

/// Errors returned by matrix, keypad and hardware setup operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Error {
    /// An LED index or `(x, y)` coordinate fell outside the matrix.
    #[display("index or coordinate out of range")]
    OutOfRange,

    /// No PIO unit was free to run the LED transmitter.
    #[display("no PIO state machine available for the LED matrix")]
    ResourceExhausted,

    /// A keypad pin reported an error.
    #[display("keypad GPIO error")]
    Gpio,
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = core::result::Result<T, E>;
