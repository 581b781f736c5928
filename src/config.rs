//! Settings chosen by the driver before a game starts

use anyhow::{ensure, Result};

use crate::{tiebreak::TieBreak, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_PLY};

/// The widest board whose columns can all be named by a single digit
pub const MAX_WIDTH: usize = 10;

/// The tallest board offered
pub const MAX_HEIGHT: usize = 16;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// How many moves ahead the machine player looks
    pub ply: usize,
    pub tiebreak: TieBreak,
    pub human_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ply: 3,
            tiebreak: TieBreak::Left,
            human_first: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.ply <= MAX_PLY,
            "difficulty {} out of range, must be between 0 and {}",
            self.ply,
            MAX_PLY
        );
        ensure!(
            (1..=MAX_WIDTH).contains(&self.width),
            "board width {} out of range, must be between 1 and {}",
            self.width,
            MAX_WIDTH
        );
        ensure!(
            (1..=MAX_HEIGHT).contains(&self.height),
            "board height {} out of range, must be between 1 and {}",
            self.height,
            MAX_HEIGHT
        );
        Ok(())
    }
}
