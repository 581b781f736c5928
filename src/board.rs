//! The Connect 4 grid and its gravity rules

use std::fmt;
use std::ops::Range;

use thiserror::Error;

use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, WINNING_COUNT};

/// The contents of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Checker {
    X,
    O,
    Empty,
}

impl Checker {
    pub fn is_empty(&self) -> bool {
        matches!(self, Checker::Empty)
    }

    /// Returns the opposing player's checker. `Empty` has no opponent and maps to itself
    pub fn other(self) -> Self {
        match self {
            Checker::X => Checker::O,
            Checker::O => Checker::X,
            Checker::Empty => Checker::Empty,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Checker::X => 'X',
            Checker::O => 'O',
            Checker::Empty => ' ',
        }
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors raised by board access and mutation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is out of bounds")]
    OutOfBounds { col: usize, row: usize },

    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is empty")]
    ColumnEmpty(usize),

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),
}

/// A gravity-filled Connect 4 board
///
/// Cells are stored row-major, top-to-bottom: row `0` is the top of the board
/// and row `height - 1` is where the first checker in a column lands.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Checker>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// Creates an empty board of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Checker::Empty; width * height],
        }
    }

    /// Creates a board by playing alternating checkers, starting with `X`
    pub fn from_moves<S: AsRef<str>>(width: usize, height: usize, moves: S) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height);
        board.set_board(moves, Checker::X)?;
        Ok(board)
    }

    pub fn num_columns(&self) -> usize {
        self.width
    }

    pub fn num_rows(&self) -> usize {
        self.height
    }

    fn index(&self, col: usize, row: usize) -> Result<usize, BoardError> {
        if col >= self.width || row >= self.height {
            return Err(BoardError::OutOfBounds { col, row });
        }
        Ok(row * self.width + col)
    }

    fn check_column(&self, col: usize) -> Result<(), BoardError> {
        if col >= self.width {
            return Err(BoardError::InvalidColumn(col));
        }
        Ok(())
    }

    pub fn set_cell(&mut self, col: usize, row: usize, checker: Checker) -> Result<(), BoardError> {
        let i = self.index(col, row)?;
        self.cells[i] = checker;
        Ok(())
    }

    pub fn get_cell(&self, col: usize, row: usize) -> Result<Checker, BoardError> {
        Ok(self.cells[self.index(col, row)?])
    }

    // unchecked access for the hot loops below, callers guarantee the bounds
    fn at(&self, col: usize, row: usize) -> Checker {
        self.cells[row * self.width + col]
    }

    /// The cells of column `n`, top to bottom
    pub fn column(&self, n: usize) -> Result<Vec<Checker>, BoardError> {
        if n >= self.width {
            return Err(BoardError::OutOfBounds { col: n, row: 0 });
        }
        Ok((0..self.height).map(|row| self.at(n, row)).collect())
    }

    /// The cells of row `n`, left to right
    pub fn row(&self, n: usize) -> Result<Vec<Checker>, BoardError> {
        if n >= self.height {
            return Err(BoardError::OutOfBounds { col: 0, row: n });
        }
        Ok(self.cells[n * self.width..(n + 1) * self.width].to_vec())
    }

    /// Every cell, column by column
    pub fn columns(&self) -> Vec<Checker> {
        (0..self.width)
            .flat_map(|col| (0..self.height).map(move |row| (col, row)))
            .map(|(col, row)| self.at(col, row))
            .collect()
    }

    /// Every cell, row by row
    pub fn rows(&self) -> Vec<Checker> {
        self.cells.clone()
    }

    pub fn is_column_empty(&self, col: usize) -> Result<bool, BoardError> {
        Ok(self.column(col)?.iter().all(Checker::is_empty))
    }

    pub fn is_column_full(&self, col: usize) -> Result<bool, BoardError> {
        Ok(!self.column(col)?.iter().any(Checker::is_empty))
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Checker::is_empty)
    }

    /// Places `checker` in the lowest empty cell of `col`
    pub fn drop_checker(&mut self, col: usize, checker: Checker) -> Result<(), BoardError> {
        self.check_column(col)?;
        let row = (0..self.height)
            .rev()
            .find(|&row| self.at(col, row).is_empty())
            .ok_or(BoardError::ColumnFull(col))?;
        self.cells[row * self.width + col] = checker;
        Ok(())
    }

    /// Clears the topmost checker of `col`, undoing the last drop into it
    pub fn remove_checker(&mut self, col: usize) -> Result<(), BoardError> {
        self.check_column(col)?;
        let row = (0..self.height)
            .find(|&row| !self.at(col, row).is_empty())
            .ok_or(BoardError::ColumnEmpty(col))?;
        self.cells[row * self.width + col] = Checker::Empty;
        Ok(())
    }

    /// Drops `checker` into `col`, runs `f` on the resulting board and takes the
    /// checker back out again, whatever `f` returned
    ///
    /// `f` must leave the board as it found it.
    pub fn try_drop<T, E, F>(&mut self, col: usize, checker: Checker, f: F) -> Result<T, E>
    where
        E: From<BoardError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        self.drop_checker(col, checker)?;
        match f(self) {
            Ok(value) => {
                self.remove_checker(col)?;
                Ok(value)
            }
            Err(err) => {
                // report the error from `f`, not a cleanup failure it caused
                let _ = self.remove_checker(col);
                Err(err)
            }
        }
    }

    /// Checks whether `checker` has `WINNING_COUNT` in a row anywhere on the board
    pub fn wins_for(&self, checker: Checker) -> bool {
        if checker.is_empty() {
            return false;
        }
        let run = |col: usize, row: usize, dc: isize, dr: isize| {
            (0..WINNING_COUNT as isize).all(|i| {
                let c = (col as isize + i * dc) as usize;
                let r = (row as isize + i * dr) as usize;
                self.at(c, r) == checker
            })
        };

        // horizontal
        for row in 0..self.height {
            for col in window_starts(self.width) {
                if run(col, row, 1, 0) {
                    return true;
                }
            }
        }

        // vertical
        for col in 0..self.width {
            for row in window_starts(self.height) {
                if run(col, row, 0, 1) {
                    return true;
                }
            }
        }

        // ascending diagonal, walking up and to the right from the lower end
        for row in window_starts(self.height) {
            for col in window_starts(self.width) {
                if run(col, row + WINNING_COUNT - 1, 1, -1) {
                    return true;
                }
            }
        }

        // descending diagonal
        for row in window_starts(self.height) {
            for col in window_starts(self.width) {
                if run(col, row, 1, 1) {
                    return true;
                }
            }
        }

        false
    }

    /// Plays the digits of `moves` as columns, alternating checkers starting with `start`
    ///
    /// Checkers placed before a failing move stay on the board.
    pub fn set_board<S: AsRef<str>>(&mut self, moves: S, start: Checker) -> Result<(), BoardError> {
        let mut current = start;
        for column_char in moves.as_ref().chars() {
            let col = column_char
                .to_digit(10)
                .ok_or(BoardError::InvalidMove(column_char))? as usize;
            self.drop_checker(col, current)?;
            current = current.other();
        }
        Ok(())
    }
}

/// The first index of every `WINNING_COUNT` wide window that fits in `extent`
fn window_starts(extent: usize) -> Range<usize> {
    0..(extent + 1).saturating_sub(WINNING_COUNT)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            write!(f, "|")?;
            for cell in row {
                write!(f, "{}|", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(self.width * 2 + 1))?;
        write!(f, " ")?;
        for col in 0..self.width {
            write!(f, "{} ", col)?;
        }
        writeln!(f)
    }
}
