//! The two kinds of participant in a game

use anyhow::{anyhow, Result};

use std::io::{self, BufRead, Write};

use crate::board::{Board, Checker};
use crate::search::MachinePlayer;

/// Anything that can choose a column to play
pub trait Player {
    /// The checker this player drops
    fn checker(&self) -> Checker;

    /// Returns a column that is not full
    ///
    /// The board may be used as scratch space but must be handed back unchanged.
    fn next_move(&mut self, board: &mut Board) -> Result<usize>;
}

impl Player for MachinePlayer {
    fn checker(&self) -> Checker {
        MachinePlayer::checker(self)
    }

    fn next_move(&mut self, board: &mut Board) -> Result<usize> {
        self.choose_move(board)?
            .ok_or_else(|| anyhow!("a board with no columns has no moves"))
    }
}

/// A player typing moves at a prompt
pub struct HumanPlayer<R, W> {
    checker: Checker,
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// A player reading from standard input
    ///
    /// Standard input stays locked until the player is dropped.
    pub fn stdio(checker: Checker) -> Self {
        Self::new(checker, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(checker: Checker, input: R, output: W) -> Self {
        Self {
            checker,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn checker(&self) -> Checker {
        self.checker
    }

    fn next_move(&mut self, board: &mut Board) -> Result<usize> {
        loop {
            write!(self.output, "{}'s choice: ", self.checker)?;
            self.output.flush()?;

            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(anyhow!("input closed before {} chose a move", self.checker));
            }

            let column = match buffer.trim().parse::<usize>() {
                Ok(column) => column,
                Err(_) => {
                    writeln!(self.output, "Invalid input: {}", buffer.trim())?;
                    continue;
                }
            };
            if column >= board.num_columns() {
                writeln!(self.output, "Not a valid column")?;
                continue;
            }
            if board.is_column_full(column)? {
                writeln!(self.output, "No room!")?;
                continue;
            }
            return Ok(column);
        }
    }
}
