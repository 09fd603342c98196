#![allow(missing_docs)]
//! Host-level tests for keypad scanning, using simulated pins.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};
use matrix_keypad::Error;
use matrix_keypad::keypad::{KEY_MAP_4X4, Keypad};

#[derive(Debug)]
struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Simulated 4×4 membrane: row drive levels plus which switches are closed.
#[derive(Default)]
struct Board {
    row_high: [bool; 4],
    closed: [[bool; 4]; 4],
    faulty_column: Option<usize>,
    // Every row write, as (row, high).
    writes: Vec<(usize, bool)>,
}

impl Board {
    fn press(&mut self, row: usize, column: usize) {
        self.closed[row][column] = true;
    }
}

struct RowPin {
    row: usize,
    board: Rc<RefCell<Board>>,
}

impl ErrorType for RowPin {
    type Error = PinFault;
}

impl OutputPin for RowPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut board = self.board.borrow_mut();
        board.row_high[self.row] = false;
        board.writes.push((self.row, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut board = self.board.borrow_mut();
        board.row_high[self.row] = true;
        board.writes.push((self.row, true));
        Ok(())
    }
}

struct ColumnPin {
    column: usize,
    board: Rc<RefCell<Board>>,
}

impl ErrorType for ColumnPin {
    type Error = PinFault;
}

impl InputPin for ColumnPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    // Pulled up unless a closed switch connects it to a row driven low.
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let board = self.board.borrow();
        if board.faulty_column == Some(self.column) {
            return Err(PinFault);
        }
        Ok((0..4).any(|row| !board.row_high[row] && board.closed[row][self.column]))
    }
}

fn keypad(board: &Rc<RefCell<Board>>) -> Keypad<RowPin, ColumnPin, 4, 4> {
    let rows = [0, 1, 2, 3].map(|row| RowPin {
        row,
        board: Rc::clone(board),
    });
    let columns = [0, 1, 2, 3].map(|column| ColumnPin {
        column,
        board: Rc::clone(board),
    });
    Keypad::new(rows, columns, KEY_MAP_4X4).unwrap()
}

#[test]
fn new_drives_every_row_high() {
    let board = Rc::new(RefCell::new(Board::default()));
    let _keypad = keypad(&board);
    assert_eq!(board.borrow().row_high, [true; 4]);
}

#[test]
fn no_key_polls_none() {
    let board = Rc::new(RefCell::new(Board::default()));
    let mut keypad = keypad(&board);
    assert_eq!(keypad.poll(), Ok(None));
    assert!(keypad.pressed().unwrap().is_empty());
}

#[test]
fn every_key_maps_to_its_symbol() {
    for (row, symbols) in KEY_MAP_4X4.iter().enumerate() {
        for (column, symbol) in symbols.iter().enumerate() {
            let board = Rc::new(RefCell::new(Board::default()));
            board.borrow_mut().press(row, column);
            let mut keypad = keypad(&board);
            assert_eq!(keypad.poll(), Ok(Some(*symbol)), "row {row} column {column}");
        }
    }
}

#[test]
fn first_key_in_row_major_order_wins() {
    let board = Rc::new(RefCell::new(Board::default()));
    board.borrow_mut().press(3, 0); // '*'
    board.borrow_mut().press(1, 3); // 'B'
    board.borrow_mut().press(1, 2); // '6'
    let mut keypad = keypad(&board);
    assert_eq!(keypad.poll(), Ok(Some('6')));
}

#[test]
fn rows_are_back_high_after_poll() {
    let board = Rc::new(RefCell::new(Board::default()));
    board.borrow_mut().press(2, 1); // '8'
    let mut keypad = keypad(&board);
    board.borrow_mut().writes.clear();

    assert_eq!(keypad.poll(), Ok(Some('8')));

    let board = board.borrow();
    assert_eq!(board.row_high, [true; 4]);
    // Rows 0..=2 strobed in turn, scan stops at the hit.
    assert_eq!(
        board.writes,
        vec![
            (0, false),
            (0, true),
            (1, false),
            (1, true),
            (2, false),
            (2, true),
        ]
    );
}

#[test]
fn only_one_row_is_low_at_a_time() {
    let board = Rc::new(RefCell::new(Board::default()));
    let mut keypad = keypad(&board);
    board.borrow_mut().writes.clear();

    assert_eq!(keypad.poll(), Ok(None));

    let mut low_rows = 0_i32;
    for (_, high) in &board.borrow().writes {
        low_rows += if *high { -1 } else { 1 };
        assert!((0..=1).contains(&low_rows));
    }
    assert_eq!(low_rows, 0);
}

#[test]
fn pressed_reports_every_closed_switch() {
    let board = Rc::new(RefCell::new(Board::default()));
    board.borrow_mut().press(0, 3); // 'A'
    board.borrow_mut().press(3, 2); // '#'
    board.borrow_mut().press(2, 1); // '8'
    let mut keypad = keypad(&board);

    let keys = keypad.pressed().unwrap();
    assert_eq!(keys.as_slice(), &['A', '8', '#']);
    assert_eq!(board.borrow().row_high, [true; 4]);
}

#[test]
fn pin_fault_is_reported_as_gpio_error() {
    let board = Rc::new(RefCell::new(Board::default()));
    let mut keypad = keypad(&board);
    board.borrow_mut().faulty_column = Some(2);

    assert_eq!(keypad.poll(), Err(Error::Gpio));
    assert_eq!(keypad.pressed(), Err(Error::Gpio));
}

#[test]
fn release_returns_the_pins() {
    let board = Rc::new(RefCell::new(Board::default()));
    let keypad = keypad(&board);
    let (rows, columns) = keypad.release();
    assert_eq!(rows.map(|pin| pin.row), [0, 1, 2, 3]);
    assert_eq!(columns.map(|pin| pin.column), [0, 1, 2, 3]);
}
