//! Compile-time description of matrix geometry and wiring.
//!
//! See [`MatrixLayout`] for the serpentine constructors and the checks every layout passes.

use crate::{Error, Result};

/// Compile-time description of matrix geometry and wiring.
///
/// `MatrixLayout` defines how a rectangular `(x, y)` matrix of LEDs maps to the linear
/// order in which pixel data is transmitted.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// `x` increases to the right, and `y` increases downward.
///
/// ## Constructing layouts
///
/// - [`serpentine_row_major`](Self::serpentine_row_major)
/// - [`serpentine_row_major_reversed`](Self::serpentine_row_major_reversed), the wiring of the
///   5×5 board this crate drives
/// - [`new`](Self::new), listing `(x, y)` for each LED in wiring order
///
/// ## Validation
///
/// Layouts built in `const` context are validated at **compile time**:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// so [`index`](Self::index) is always a bijection from cells onto `0..N`.
///
/// # Example
///
/// ```rust
/// use matrix_keypad::led_matrix::layout::MatrixLayout;
///
/// const REVERSED: MatrixLayout<6, 3, 2> = MatrixLayout::serpentine_row_major_reversed();
/// const EXPECTED: MatrixLayout<6, 3, 2> =
///     MatrixLayout::new([(0, 1), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0)]);
/// const _: () = assert!(REVERSED.equals(&EXPECTED)); // Compile-time assert
/// ```
///
/// ```text
/// Reversed serpentine 3×2:
///   LED5  LED4  LED3
///   LED0  LED1  LED2
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
    inverse: [u16; N],
}

impl<const N: usize, const W: usize, const H: usize> MatrixLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Return the raster-major table (`y * W + x`) of LED wiring indices.
    #[must_use]
    pub const fn xy_to_index(&self) -> &[u16; N] {
        &self.inverse
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`: layouts have at least one LED.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Transmission-order index of the LED at column `x`, row `y`.
    ///
    /// For the 5×5 board ([`serpentine_row_major_reversed`](Self::serpentine_row_major_reversed)):
    ///
    /// ```text
    ///   y even: 24 - (y*5 + x)
    ///   y odd:  24 - (y*5 + (4 - x))
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x >= W` or `y >= H`.
    pub fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= W || y >= H {
            return Err(Error::OutOfRange);
        }
        self.inverse
            .get(y * W + x)
            .map(|&led_index| usize::from(led_index))
            .ok_or(Error::OutOfRange)
    }

    /// Const equality helper for compile-time asserts.
    ///
    /// ```rust
    /// use matrix_keypad::led_matrix::layout::MatrixLayout;
    ///
    /// const SERPENTINE: MatrixLayout<4, 2, 2> = MatrixLayout::serpentine_row_major();
    /// const REVERSED: MatrixLayout<4, 2, 2> = SERPENTINE.reverse();
    ///
    /// const _: () = assert!(SERPENTINE.equals(&SERPENTINE));
    /// const _: () = assert!(!SERPENTINE.equals(&REVERSED));
    /// ```
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the mapping covers every cell of the W×H matrix exactly once.
    ///
    /// ```rust
    /// use matrix_keypad::led_matrix::layout::MatrixLayout;
    ///
    /// // 3×2 matrix wired row by row, both rows left to right
    /// const MAP: MatrixLayout<6, 3, 2> =
    ///     MatrixLayout::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics (at compile time in `const` context) when `W * H != N`, a coordinate is out
    /// of bounds, or a cell appears twice.
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for xy_to_index"
        );

        let mut seen = [false; N];
        let mut inverse = [0u16; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;
            inverse[cell] = i as u16;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map, inverse }
    }

    /// Serpentine row-major mapping (alternating left-to-right and right-to-left across rows).
    ///
    /// ```rust
    /// use matrix_keypad::led_matrix::layout::MatrixLayout;
    ///
    /// const MAP: MatrixLayout<6, 3, 2> = MatrixLayout::serpentine_row_major();
    /// const EXPECTED: MatrixLayout<6, 3, 2> =
    ///     MatrixLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
    /// const _: () = assert!(MAP.equals(&EXPECTED));
    /// ```
    ///
    /// ```text
    /// Strip snakes across rows (3×2 example):
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Serpentine row-major wiring fed from the far end: the last LED of
    /// [`serpentine_row_major`](Self::serpentine_row_major) is transmitted first.
    ///
    /// This is the wiring of the 5×5 matrix board; see [`LAYOUT_5X5`](super::LAYOUT_5X5).
    ///
    /// ```text
    /// 5×5 (LED index at each cell):
    ///   24 23 22 21 20
    ///   15 16 17 18 19
    ///   14 13 12 11 10
    ///    5  6  7  8  9
    ///    4  3  2  1  0
    /// ```
    #[must_use]
    pub const fn serpentine_row_major_reversed() -> Self {
        Self::serpentine_row_major().reverse()
    }

    /// Reverse the wiring order: LED `i` becomes LED `N - 1 - i`.
    ///
    /// ```rust
    /// use matrix_keypad::led_matrix::layout::MatrixLayout;
    ///
    /// const MAP: MatrixLayout<4, 4, 1> = MatrixLayout::serpentine_row_major().reverse();
    /// const EXPECTED: MatrixLayout<4, 4, 1> = MatrixLayout::new([(3, 0), (2, 0), (1, 0), (0, 0)]);
    /// const _: () = assert!(MAP.equals(&EXPECTED));
    /// ```
    #[must_use]
    pub const fn reverse(self) -> Self {
        let mut mapping = [(0_u16, 0_u16); N];
        let mut i = 0;
        while i < N {
            mapping[i] = self.map[N - 1 - i];
            i += 1;
        }
        Self::new(mapping)
    }
}
