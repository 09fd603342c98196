//! The pixel-art label shown by the `8` key: "C E P E D I" followed by a smiley, in blue.
//!
//! Frames are written row by row, top row first, exactly as they appear on the matrix.

use crate::led_matrix::Frame5x5;

const O: [u8; 3] = [0, 0, 0];
const B: [u8; 3] = [0, 0, 255];

/// Letter C.
pub const FRAME_C: Frame5x5 = Frame5x5::from_rgb_rows([
    [O, B, B, B, O],
    [O, B, O, O, O],
    [O, B, O, O, O],
    [O, B, O, O, O],
    [O, B, B, B, O],
]);

/// Letter E.
pub const FRAME_E: Frame5x5 = Frame5x5::from_rgb_rows([
    [O, B, B, B, O],
    [O, B, O, O, O],
    [O, B, B, B, O],
    [O, B, O, O, O],
    [O, B, B, B, O],
]);

/// Letter P.
pub const FRAME_P: Frame5x5 = Frame5x5::from_rgb_rows([
    [O, B, B, B, O],
    [O, B, O, B, O],
    [O, B, B, B, O],
    [O, B, O, O, O],
    [O, B, O, O, O],
]);

/// Letter D.
pub const FRAME_D: Frame5x5 = Frame5x5::from_rgb_rows([
    [O, B, B, B, O],
    [O, B, O, O, B],
    [O, B, O, O, B],
    [O, B, O, O, B],
    [O, B, B, B, O],
]);

/// Letter I, with a gap under the dot.
pub const FRAME_I: Frame5x5 = Frame5x5::from_rgb_rows([
    [O, O, B, O, O],
    [O, O, O, O, O],
    [O, O, B, O, O],
    [O, O, B, O, O],
    [O, O, B, O, O],
]);

/// Smiling face.
pub const FRAME_SMILEY: Frame5x5 = Frame5x5::from_rgb_rows([
    [O, O, O, O, O],
    [O, B, O, B, O],
    [O, O, O, O, O],
    [O, B, O, B, O],
    [O, B, B, B, O],
]);

/// The whole label, in display order.
pub const LABEL: [Frame5x5; 7] = [
    FRAME_C,
    FRAME_E,
    FRAME_P,
    FRAME_E,
    FRAME_D,
    FRAME_I,
    FRAME_SMILEY,
];
