//! Splits the goal total of a match between the two sides, subject to the chosen outcome.
//!
//! A decisive match with at most two goals is forced to a clean sheet for the loser, with the
//! winner scoring at least once (a sampled 0 becomes 1-0). With three or more goals the loser's
//! share is drawn uniformly from `0..=total/2` and the winner takes the remainder. Nothing
//! re-checks that the winner ends up ahead: an even total split down the middle (e.g. 2-2 from
//! a total of 4) is reachable despite the decisive label. A drawn match rounds an odd total up
//! to the next even number and halves it.

use serde::{Deserialize, Serialize};

use crate::odds::Outcome;
use crate::uniform::UniformSource;

/// Goals per side.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Split {
    pub home: u16,
    pub away: u16,
}
impl Split {
    pub fn new(home: u16, away: u16) -> Self {
        Self { home, away }
    }

    pub fn total(&self) -> u32 {
        self.home as u32 + self.away as u32
    }

    /// The outcome implied by the scoreline itself.
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.home.cmp(&self.away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::AwayWin,
        }
    }

    fn from_winner(outcome: Outcome, winner: u16, loser: u16) -> Self {
        match outcome {
            Outcome::AwayWin => Self::new(loser, winner),
            _ => Self::new(winner, loser),
        }
    }
}

/// Goals per side in a decisive match, keyed by result rather than venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decisive {
    pub winner: u16,
    pub loser: u16,
}

pub fn allocate(total: u16, outcome: Outcome, source: &mut impl UniformSource) -> Split {
    match outcome {
        Outcome::Draw => {
            let each = draw_share(total);
            Split::new(each, each)
        }
        decisive => {
            let Decisive { winner, loser } = allocate_decisive(total, source);
            Split::from_winner(decisive, winner, loser)
        }
    }
}

#[inline]
pub fn allocate_decisive(total: u16, source: &mut impl UniformSource) -> Decisive {
    if total <= 2 {
        Decisive {
            winner: u16::max(total, 1),
            loser: 0,
        }
    } else {
        let bound = u64::max(1, total as u64 / 2 + 1);
        let loser = source.next_bounded(bound) as u16;
        Decisive {
            winner: total - loser,
            loser,
        }
    }
}

/// Each side's share of a drawn match, after rounding an odd total up to the next even number.
#[inline]
pub fn draw_share(total: u16) -> u16 {
    let even = total as u32 + total as u32 % 2;
    (even / 2) as u16
}

#[cfg(test)]
mod tests;
