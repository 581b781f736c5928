//! Policies for choosing between equally scored columns

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use rand::{seq::SliceRandom, thread_rng, Rng};

/// Picks one column out of all the columns sharing the highest score
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TieBreak {
    /// The leftmost of the best columns
    Left,
    /// The rightmost of the best columns
    Right,
    /// Any of the best columns, chosen uniformly
    Random,
}

impl TieBreak {
    /// Returns the index of one of the highest values in `scores`, or `None` if there are no scores
    pub fn select<T: Ord>(self, scores: &[T]) -> Option<usize> {
        self.select_with(scores, &mut thread_rng())
    }

    /// Like [`select`](TieBreak::select), drawing any randomness from `rng`
    pub fn select_with<T: Ord, R: Rng + ?Sized>(self, scores: &[T], rng: &mut R) -> Option<usize> {
        let high_score = scores.iter().max()?;
        let best: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, score)| *score == high_score)
            .map(|(i, _)| i)
            .collect();

        match self {
            TieBreak::Left => best.first().copied(),
            TieBreak::Right => best.last().copied(),
            TieBreak::Random => best.choose(rng).copied(),
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "left" => Ok(TieBreak::Left),
            "2" | "right" => Ok(TieBreak::Right),
            "3" | "random" => Ok(TieBreak::Random),
            other => Err(anyhow!("unknown tie-break strategy '{}'", other)),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TieBreak::Left => "leftmost",
            TieBreak::Right => "rightmost",
            TieBreak::Random => "random",
        };
        write!(f, "{}", name)
    }
}
