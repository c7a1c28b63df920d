//! Simulated key matrix for tests.
//!
//! Column pins record the level they are driven to; a row pin reads the
//! active level if any closed key on it sits on a column driven active.

extern crate std;

use core::cell::RefCell;
use embedded_hal::digital::v2::{InputPin, OutputPin, PinState};
use heapless::Vec;
use std::rc::Rc;
use std::vec::Vec as StdVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug)]
pub struct Board {
    pub active: PinState,
    pub columns: StdVec<PinState>,
    pub closed: StdVec<(usize, usize)>,
    pub reads: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Board {
    /// Number of columns currently driven to the active level
    pub fn energized(&self) -> usize {
        self.columns.iter().filter(|c| **c == self.active).count()
    }

    pub fn is_energized(&self, column: usize) -> bool {
        self.columns[column] == self.active
    }
}

fn opposite(level: PinState) -> PinState {
    match level {
        PinState::Low => PinState::High,
        PinState::High => PinState::Low,
    }
}

pub type SharedBoard = Rc<RefCell<Board>>;

pub struct ColumnPin {
    board: SharedBoard,
    index: usize,
}

impl OutputPin for ColumnPin {
    type Error = MockError;

    fn set_low(&mut self) -> Result<(), MockError> {
        self.set(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), MockError> {
        self.set(PinState::High)
    }
}

impl ColumnPin {
    fn set(&mut self, level: PinState) -> Result<(), MockError> {
        let mut board = self.board.borrow_mut();
        if board.fail_writes {
            return Err(MockError);
        }
        board.columns[self.index] = level;
        Ok(())
    }
}

pub struct RowPin {
    board: SharedBoard,
    index: usize,
}

impl RowPin {
    fn level(&self) -> Result<PinState, MockError> {
        let mut board = self.board.borrow_mut();
        if board.fail_reads {
            return Err(MockError);
        }
        board.reads += 1;
        let closed = board
            .closed
            .iter()
            .any(|&(col, row)| row == self.index && board.columns[col] == board.active);
        Ok(if closed { board.active } else { opposite(board.active) })
    }
}

impl InputPin for RowPin {
    type Error = MockError;

    fn is_high(&self) -> Result<bool, MockError> {
        Ok(self.level()? == PinState::High)
    }

    fn is_low(&self) -> Result<bool, MockError> {
        Ok(self.level()? == PinState::Low)
    }
}

/// Builds a board plus its pins, every column initially left energized
pub fn board<const COLS: usize, const ROWS: usize>(
    active: PinState,
    columns: usize,
    rows: usize,
) -> (SharedBoard, Vec<ColumnPin, COLS>, Vec<RowPin, ROWS>) {
    let board = Rc::new(RefCell::new(Board {
        active,
        columns: std::vec![active; columns],
        closed: StdVec::new(),
        reads: 0,
        fail_reads: false,
        fail_writes: false,
    }));
    let mut column_pins = Vec::new();
    for index in 0..columns {
        let pin = ColumnPin {
            board: board.clone(),
            index,
        };
        if column_pins.push(pin).is_err() {
            panic!("more than {} columns", COLS);
        }
    }
    let mut row_pins = Vec::new();
    for index in 0..rows {
        let pin = RowPin {
            board: board.clone(),
            index,
        };
        if row_pins.push(pin).is_err() {
            panic!("more than {} rows", ROWS);
        }
    }
    (board, column_pins, row_pins)
}
