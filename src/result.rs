//! The immutable record of a generated match.

use serde::{Deserialize, Serialize};

use crate::allocate::Split;
use crate::odds::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult<T, G> {
    home: T,
    away: T,
    home_goals: Vec<G>,
    away_goals: Vec<G>,
}
impl<T, G> MatchResult<T, G> {
    /// Assembles a result as given. The goal lists are taken at face value; their lengths are
    /// not checked against any sampled total.
    pub fn new(home: T, away: T, home_goals: Vec<G>, away_goals: Vec<G>) -> Self {
        Self {
            home,
            away,
            home_goals,
            away_goals,
        }
    }

    pub fn home(&self) -> &T {
        &self.home
    }

    pub fn away(&self) -> &T {
        &self.away
    }

    pub fn home_goals(&self) -> &[G] {
        &self.home_goals
    }

    pub fn away_goals(&self) -> &[G] {
        &self.away_goals
    }

    pub fn score(&self) -> Split {
        Split::new(self.home_goals.len() as u16, self.away_goals.len() as u16)
    }

    pub fn total_goals(&self) -> usize {
        self.home_goals.len() + self.away_goals.len()
    }

    pub fn outcome(&self) -> Outcome {
        self.score().outcome()
    }

    pub fn winner(&self) -> Option<&T> {
        match self.outcome() {
            Outcome::HomeWin => Some(&self.home),
            Outcome::Draw => None,
            Outcome::AwayWin => Some(&self.away),
        }
    }

    pub fn into_parts(self) -> (T, T, Vec<G>, Vec<G>) {
        (self.home, self.away, self.home_goals, self.away_goals)
    }
}
