//! A depth-bounded game tree search for choosing moves
//!
//! Every column is tried in turn by dropping a checker into the shared board,
//! asking an opponent searcher one ply shallower how well it can reply, and
//! then taking the checker back out. No position is ever cloned.

use tracing::{debug, trace};

use crate::board::{Board, BoardError, Checker};
use crate::tiebreak::TieBreak;

/// The value of a column to the player considering it
///
/// Variants are declared in ascending order, so comparisons follow the numeric weights.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Score {
    /// The column cannot be played
    Full = -1,
    Lose = 0,
    Draw = 50,
    Win = 100,
}

impl Score {
    /// The numeric weight of this score
    pub fn value(self) -> i32 {
        self as i32
    }
}

/// A computer player that looks `ply` moves ahead
#[derive(Clone, Debug)]
pub struct MachinePlayer {
    checker: Checker,
    tiebreak: TieBreak,
    ply: usize,

    /// The number of positions scored by this player so far (for diagnostics only)
    pub node_count: usize,
}

impl MachinePlayer {
    pub fn new(checker: Checker, tiebreak: TieBreak, ply: usize) -> Self {
        Self {
            checker,
            tiebreak,
            ply,
            node_count: 0,
        }
    }

    pub fn checker(&self) -> Checker {
        self.checker
    }

    /// Scores a board as it stands, without looking ahead
    pub fn score_one_board(&self, board: &Board) -> Score {
        if board.wins_for(self.checker) {
            Score::Win
        } else if board.wins_for(self.checker.other()) {
            Score::Lose
        } else {
            Score::Draw
        }
    }

    /// Whether the board is full or either player has already won
    pub fn is_game_over(&self, board: &Board) -> bool {
        board.is_full() || board.wins_for(self.checker) || board.wins_for(self.checker.other())
    }

    /// Scores every column of `board` from this player's point of view
    ///
    /// The board is mutated while searching but is always restored before
    /// returning. A `BoardError` here means a broken invariant, not a bad move.
    pub fn scores_for(&mut self, board: &mut Board) -> Result<Vec<Score>, BoardError> {
        let mut scores = Vec::with_capacity(board.num_columns());

        for column in 0..board.num_columns() {
            self.node_count += 1;

            if board.is_column_full(column)? {
                scores.push(Score::Full);
                continue;
            }

            // at the search horizon the board is scored without playing the column
            if self.ply == 0 || self.is_game_over(board) {
                scores.push(self.score_one_board(board));
                continue;
            }

            let score = board.try_drop(column, self.checker, |board| self.score_move(board))?;
            trace!(checker = %self.checker, ply = self.ply, column, ?score, "scored column");
            scores.push(score);
        }

        Ok(scores)
    }

    /// Scores a board on which this player has just moved
    fn score_move(&mut self, board: &mut Board) -> Result<Score, BoardError> {
        if self.is_game_over(board) {
            return Ok(self.score_one_board(board));
        }

        let mut opponent = MachinePlayer::new(self.checker.other(), self.tiebreak, self.ply - 1);
        let opponent_scores = opponent.scores_for(board)?;
        self.node_count += opponent.node_count;

        // a position with no legal replies is a dead end rather than a win
        let opponent_best = opponent_scores
            .into_iter()
            .filter(|&score| score != Score::Full)
            .max();

        Ok(match opponent_best {
            None => Score::Draw,
            Some(Score::Win) => Score::Lose,
            Some(Score::Lose) => Score::Win,
            Some(_) => Score::Draw,
        })
    }

    /// Chooses the column to play on `board` using the tie-break policy
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Option<usize>, BoardError> {
        let scores = self.scores_for(board)?;
        let column = self.tiebreak.select(&scores);
        debug!(
            checker = %self.checker,
            ply = self.ply,
            nodes = self.node_count,
            ?scores,
            ?column,
            "machine move"
        );
        Ok(column)
    }
}
