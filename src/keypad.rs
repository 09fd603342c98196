//! A device abstraction for a passive matrix keypad (4×4 membrane style).
//!
//! Rows are driven outputs, idle high. Columns are inputs with pull-ups. A scan pulls one row
//! low at a time and reads every column: a low column means the key at that row and column is
//! down. There is no debouncing here; the caller's poll interval provides it.
//!
//! See [`Keypad`] for usage.

use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;

use crate::{Error, Result};

/// Most keys [`Keypad::pressed`] reports in one scan.
pub const MAX_PRESSED: usize = 16;

/// Symbols of the common 4×4 keypad, as `[row][column]`.
pub const KEY_MAP_4X4: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Row-strobed matrix keypad over `embedded-hal` pins.
///
/// # Example
///
/// On the board, rows are `embassy_rp::gpio::Output` pins created at `Level::High` and columns
/// are `Input` pins with `Pull::Up`; any `embedded-hal` pins work.
///
/// ```rust,no_run
/// use embedded_hal::digital::{InputPin, OutputPin};
/// use matrix_keypad::Result;
/// use matrix_keypad::keypad::{KEY_MAP_4X4, Keypad};
///
/// fn first_key<R: OutputPin, C: InputPin>(rows: [R; 4], columns: [C; 4]) -> Result<Option<char>> {
///     let mut keypad = Keypad::new(rows, columns, KEY_MAP_4X4)?;
///     keypad.poll()
/// }
/// ```
pub struct Keypad<R, C, const ROWS: usize, const COLS: usize> {
    rows: [R; ROWS],
    columns: [C; COLS],
    key_map: [[char; COLS]; ROWS],
}

impl<R, C, const ROWS: usize, const COLS: usize> Keypad<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin,
{
    /// Take ownership of the row and column pins and drive every row high (idle).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gpio`] if a row pin cannot be set.
    pub fn new(rows: [R; ROWS], columns: [C; COLS], key_map: [[char; COLS]; ROWS]) -> Result<Self> {
        let mut keypad = Self {
            rows,
            columns,
            key_map,
        };
        for row in &mut keypad.rows {
            row.set_high().map_err(|_| Error::Gpio)?;
        }
        Ok(keypad)
    }

    /// Scan every key once and return the first one down, in row-major order.
    ///
    /// The strobed row is back high before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gpio`] if a pin cannot be driven or read.
    pub fn poll(&mut self) -> Result<Option<char>> {
        for (row, symbols) in self.rows.iter_mut().zip(&self.key_map) {
            row.set_low().map_err(|_| Error::Gpio)?;
            let mut found = None;
            for (column, symbol) in self.columns.iter_mut().zip(symbols) {
                if column.is_low().map_err(|_| Error::Gpio)? {
                    found = Some(*symbol);
                    break;
                }
            }
            row.set_high().map_err(|_| Error::Gpio)?;
            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }

    /// Scan every key once and return all keys down, in row-major order.
    ///
    /// At most [`MAX_PRESSED`] keys are reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gpio`] if a pin cannot be driven or read.
    pub fn pressed(&mut self) -> Result<Vec<char, MAX_PRESSED>> {
        let mut keys = Vec::new();
        for (row, symbols) in self.rows.iter_mut().zip(&self.key_map) {
            row.set_low().map_err(|_| Error::Gpio)?;
            for (column, symbol) in self.columns.iter_mut().zip(symbols) {
                if column.is_low().map_err(|_| Error::Gpio)? {
                    // Full: drop the rest, the scan still has to restore the row.
                    keys.push(*symbol).ok();
                }
            }
            row.set_high().map_err(|_| Error::Gpio)?;
        }
        Ok(keys)
    }

    /// Give back the row and column pins.
    pub fn release(self) -> ([R; ROWS], [C; COLS]) {
        (self.rows, self.columns)
    }
}
