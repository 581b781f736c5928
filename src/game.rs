//! The turn loop tying a board and two players together

use anyhow::{Context, Result};

use crate::board::{Board, Checker};
use crate::player::Player;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameOutcome {
    Won(Checker),
    Draw,
}

/// A game in progress between two players
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
}

impl Game {
    /// Creates a game on `board` where `first` moves first
    pub fn new(board: Board, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            board,
            players: [first, second],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the board is won or full
    ///
    /// `observer` is called with each move's checker and column after it has been played.
    pub fn play<F>(&mut self, mut observer: F) -> Result<GameOutcome>
    where
        F: FnMut(&Board, Checker, usize) -> Result<()>,
    {
        // the second player is treated as having moved last so the first player goes next
        let mut current = 1;
        loop {
            let last = self.players[current].checker();
            if self.board.wins_for(last) {
                return Ok(GameOutcome::Won(last));
            }
            if self.board.is_full() {
                return Ok(GameOutcome::Draw);
            }

            current = 1 - current;
            let player = &mut self.players[current];
            let checker = player.checker();
            let column = player.next_move(&mut self.board)?;
            self.board
                .drop_checker(column, checker)
                .with_context(|| format!("{} played an illegal move", checker))?;
            observer(&self.board, checker, column)?;
        }
    }
}
