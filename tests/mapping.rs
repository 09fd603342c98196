#![allow(missing_docs)]
//! Host-level tests for mapping primitives.

use matrix_keypad::Error;
use matrix_keypad::led_matrix::LAYOUT_5X5;
use matrix_keypad::led_matrix::layout::MatrixLayout;

#[test]
fn linear_single_row_matches_expected() {
    const LINEAR: MatrixLayout<4, 4, 1> = MatrixLayout::new([(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(LINEAR.index_to_xy(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(LINEAR.xy_to_index(), &[0, 1, 2, 3]);
}

#[test]
fn serpentine_row_major_3x2_matches_expected() {
    const MAP: MatrixLayout<6, 3, 2> = MatrixLayout::serpentine_row_major();
    assert_eq!(
        *MAP.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1),]
    );
}

#[test]
fn reverse_flips_transmission_order() {
    const MAP: MatrixLayout<6, 3, 2> = MatrixLayout::serpentine_row_major();
    let reversed = MAP.reverse();
    assert_eq!(
        *reversed.index_to_xy(),
        [(0, 1), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0),]
    );
    assert!(reversed.reverse().equals(&MAP));
}

#[test]
fn board_corners_match_wiring() {
    assert_eq!(LAYOUT_5X5.index(0, 0), Ok(24));
    assert_eq!(LAYOUT_5X5.index(4, 0), Ok(20));
    assert_eq!(LAYOUT_5X5.index(0, 1), Ok(15));
    assert_eq!(LAYOUT_5X5.index(4, 1), Ok(19));
    assert_eq!(LAYOUT_5X5.index(0, 4), Ok(4));
    assert_eq!(LAYOUT_5X5.index(4, 4), Ok(0));
}

#[test]
fn board_full_table_matches_wiring() {
    const EXPECTED: [[usize; 5]; 5] = [
        [24, 23, 22, 21, 20],
        [15, 16, 17, 18, 19],
        [14, 13, 12, 11, 10],
        [5, 6, 7, 8, 9],
        [4, 3, 2, 1, 0],
    ];
    for (y_index, row) in EXPECTED.iter().enumerate() {
        for (x_index, expected) in row.iter().enumerate() {
            assert_eq!(
                LAYOUT_5X5.index(x_index, y_index),
                Ok(*expected),
                "cell ({x_index}, {y_index})"
            );
        }
    }
}

#[test]
fn board_formula_holds_for_every_cell() {
    for y_index in 0..5 {
        for x_index in 0..5 {
            let expected = if y_index % 2 == 0 {
                24 - (y_index * 5 + x_index)
            } else {
                24 - (y_index * 5 + (4 - x_index))
            };
            assert_eq!(LAYOUT_5X5.index(x_index, y_index), Ok(expected));
        }
    }
}

#[test]
fn board_mapping_is_a_bijection() {
    let mut seen = [false; 25];
    for y_index in 0..5 {
        for x_index in 0..5 {
            let led_index = LAYOUT_5X5.index(x_index, y_index).unwrap();
            assert!(!seen[led_index], "LED {led_index} mapped twice");
            seen[led_index] = true;
        }
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn index_and_index_to_xy_agree() {
    for (led_index, (x_index, y_index)) in LAYOUT_5X5.index_to_xy().iter().enumerate() {
        assert_eq!(
            LAYOUT_5X5.index(usize::from(*x_index), usize::from(*y_index)),
            Ok(led_index)
        );
    }
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    assert_eq!(LAYOUT_5X5.index(5, 0), Err(Error::OutOfRange));
    assert_eq!(LAYOUT_5X5.index(0, 5), Err(Error::OutOfRange));
    assert_eq!(LAYOUT_5X5.index(usize::MAX, usize::MAX), Err(Error::OutOfRange));
}

#[test]
fn dimensions_are_reported() {
    assert_eq!(LAYOUT_5X5.width(), 5);
    assert_eq!(LAYOUT_5X5.height(), 5);
    assert_eq!(LAYOUT_5X5.len(), 25);
    assert!(!LAYOUT_5X5.is_empty());
}

#[test]
#[should_panic(expected = "duplicate (col,row) in mapping")]
fn duplicate_cell_panics() {
    let _layout = MatrixLayout::<4, 2, 2>::new([(0, 0), (0, 0), (1, 0), (1, 1)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn column_out_of_bounds_panics() {
    let _layout = MatrixLayout::<4, 2, 2>::new([(0, 0), (2, 0), (0, 1), (1, 1)]);
}

#[test]
#[should_panic(expected = "row out of bounds")]
fn row_out_of_bounds_panics() {
    let _layout = MatrixLayout::<4, 2, 2>::new([(0, 0), (1, 0), (0, 2), (1, 1)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn size_mismatch_panics() {
    let _layout = MatrixLayout::<3, 2, 2>::new([(0, 0), (1, 0), (0, 1)]);
}
