//! Choosing which PIO unit runs the LED transmitter.
//!
//! The LED program prefers one PIO unit and falls back to the other when the preferred one is
//! reserved for other drivers. When neither is free, setup fails with
//! [`Error::ResourceExhausted`] instead of hanging or silently sharing a unit.

use crate::{Error, Result};

/// Number of PIO units the transmitter may use.
pub const PIO_UNIT_COUNT: usize = 2;

/// A PIO unit that can host the LED program.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum PioUnit {
    /// `PIO0`
    Pio0,
    /// `PIO1`
    Pio1,
}

impl PioUnit {
    /// The unit to try when this one is unavailable.
    #[must_use]
    pub const fn fallback(self) -> Self {
        match self {
            Self::Pio0 => Self::Pio1,
            Self::Pio1 => Self::Pio0,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Pio0 => 0,
            Self::Pio1 => 1,
        }
    }
}

/// Tracks which PIO units are reserved or already claimed.
///
/// ```rust
/// use matrix_keypad::{Error, pio_claim::{PioClaims, PioUnit}};
///
/// let mut claims = PioClaims::with_reserved(&[PioUnit::Pio0]);
/// assert_eq!(claims.claim(PioUnit::Pio0), Ok(PioUnit::Pio1)); // falls back
/// assert_eq!(claims.claim(PioUnit::Pio0), Err(Error::ResourceExhausted));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PioClaims {
    taken: [bool; PIO_UNIT_COUNT],
}

impl PioClaims {
    /// Every unit free.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            taken: [false; PIO_UNIT_COUNT],
        }
    }

    /// Every unit free except those in `reserved`.
    #[must_use]
    pub const fn with_reserved(reserved: &[PioUnit]) -> Self {
        let mut taken = [false; PIO_UNIT_COUNT];
        let mut i = 0;
        while i < reserved.len() {
            taken[reserved[i].slot()] = true;
            i += 1;
        }
        Self { taken }
    }

    /// Whether `unit` can still be claimed.
    #[must_use]
    pub fn is_available(&self, unit: PioUnit) -> bool {
        self.taken.get(unit.slot()).is_some_and(|taken| !*taken)
    }

    /// Claim `preferred`, or its [`fallback`](PioUnit::fallback) if `preferred` is taken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] when both units are taken.
    pub fn claim(&mut self, preferred: PioUnit) -> Result<PioUnit> {
        for unit in [preferred, preferred.fallback()] {
            match self.taken.get_mut(unit.slot()) {
                Some(taken) if !*taken => {
                    *taken = true;
                    return Ok(unit);
                }
                _ => {}
            }
        }
        Err(Error::ResourceExhausted)
    }
}

impl Default for PioClaims {
    fn default() -> Self {
        Self::new()
    }
}
