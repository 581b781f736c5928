//! A depth-limited agent for playing the board game 'Connect 4'
//!
//! The machine player scores each column by playing it on a shared board,
//! letting an opponent one ply shallower score its replies, and taking the
//! move back again. Ties between equally good columns are broken by a
//! configurable [`TieBreak`] policy.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_ply::{Board, Checker, MachinePlayer, Score, TieBreak};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // X has three in a row along the bottom
//! let mut board = Board::from_moves(7, 6, "06162")?;
//! let mut machine = MachinePlayer::new(Checker::X, TieBreak::Left, 1);
//!
//! let scores = machine.scores_for(&mut board)?;
//! assert_eq!(scores[3], Score::Win);
//! assert_eq!(machine.choose_move(&mut board)?, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod tiebreak;

pub mod search;

pub mod player;

pub mod game;

pub mod render;

pub mod config;


pub use board::{Board, BoardError, Checker};
pub use config::GameConfig;
pub use game::{Game, GameOutcome};
pub use player::{HumanPlayer, Player};
pub use search::{MachinePlayer, Score};
pub use tiebreak::TieBreak;

/// The default width of the game board in tiles
pub const DEFAULT_WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const DEFAULT_HEIGHT: usize = 6;

/// The number of checkers in a row needed to win
pub const WINNING_COUNT: usize = 4;

/// The deepest search the driver offers
pub const MAX_PLY: usize = 5;

// the default board must have room for a win in every direction
const_assert!(WINNING_COUNT <= DEFAULT_WIDTH && WINNING_COUNT <= DEFAULT_HEIGHT);
// a full column must never outscore a playable one
const_assert!((Score::Full as i32) < (Score::Lose as i32));
