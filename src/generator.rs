//! Generation of complete match results from team ratings.
//!
//! A single uniform draw against the rating-adjusted [Odds] decides the outcome. The goal total
//! is then sampled from the configured distribution, split between the sides by [allocate], and
//! each side's count is expanded into goal events by a [GoalEventFactory].
//!
//! Every random draw comes from the generator's own source, in a fixed order: the outcome draw,
//! then the loser's share (decisive matches with three or more goals only), then the goal events.
//! A decisive match with at most two sampled goals expands the winner's goals only; one with
//! three or more expands the loser's goals followed by the winner's; a draw expands home before
//! away. Two generators seeded alike and fed the same fixtures in the same order produce
//! identical results. The goal distribution keeps its own source and is sampled exactly once
//! per match.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinyrand::StdRand;
use tracing::debug;

use crate::allocate::{allocate, Split};
use crate::dist::{total_goals, Normal, RealDistribution};
use crate::goal::{GoalEventFactory, MinuteGoals};
use crate::odds::{Odds, Outcome};
use crate::result::MatchResult;
use crate::uniform::{seeded, seeded_aux, UniformSource};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{name} ({value}) outside of allowable range [0, 1]")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("combined home win and draw probability ({0}) exceeds 1")]
    Overbooked(f64),
}

const PROB_RANGE: RangeInclusive<f64> = 0.0..=1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Probability of a home win between equally rated teams.
    pub home_win_prob: f64,

    /// Width of the draw band, independent of the ratings.
    pub draw_prob: f64,
}
impl Config {
    /// Checks the base probabilities only. The bands derived from them are left unclamped once
    /// ratings come into play.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("home win probability", self.home_win_prob),
            ("draw probability", self.draw_prob),
        ] {
            if !PROB_RANGE.contains(&value) {
                return Err(ValidationError::OutOfRange { name, value });
            }
        }
        let combined = self.home_win_prob + self.draw_prob;
        if combined > 1.0 {
            return Err(ValidationError::Overbooked(combined));
        }
        Ok(())
    }

    pub fn odds(&self, home_rating: f64, away_rating: f64) -> Odds {
        Odds::from_ratings(self.home_win_prob, self.draw_prob, home_rating, away_rating)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_win_prob: 0.45,
            draw_prob: 0.25,
        }
    }
}

/// Diagnostics captured while generating a single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub odds: Odds,
    pub random: f64,
    pub outcome: Outcome,
    pub sampled_goals: u16,
    pub split: Split,
}

pub type Observer = Box<dyn FnMut(&Decision)>;

pub type StandardGenerator = MatchResultGenerator<StdRand, Normal<StdRand>, MinuteGoals>;

pub struct MatchResultGenerator<R, D, F> {
    config: Config,
    rand: R,
    dist: D,
    factory: F,
    observer: Option<Observer>,
}
impl<R: UniformSource, D: RealDistribution, F> MatchResultGenerator<R, D, F> {
    pub fn new(config: Config, rand: R, dist: D, factory: F) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            rand,
            dist,
            factory,
            observer: None,
        })
    }

    /// Installs a callback that receives the [Decision] behind every generated match.
    pub fn with_observer(mut self, observer: impl FnMut(&Decision) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generate<T>(
        &mut self,
        home: T,
        home_rating: f64,
        away: T,
        away_rating: f64,
    ) -> MatchResult<T, <F as GoalEventFactory<T>>::Goal>
    where
        F: GoalEventFactory<T>,
    {
        let odds = self.config.odds(home_rating, away_rating);
        let random = self.rand.next_uniform();
        let outcome = odds.pick(random);
        let sampled_goals = total_goals(&mut self.dist);
        let split = allocate(sampled_goals, outcome, &mut self.rand);

        let decision = Decision {
            odds,
            random,
            outcome,
            sampled_goals,
            split,
        };
        debug!(
            "home win odds={:.2}%, away win odds={:.2}%, random={:.2}%, outcome={outcome}, sampled goals={sampled_goals}, score={}-{}",
            odds.home_win * 100.0,
            odds.away_win() * 100.0,
            random * 100.0,
            split.home,
            split.away
        );
        if let Some(observer) = self.observer.as_mut() {
            observer(&decision);
        }

        // the loser of a low-scoring decisive match is never expanded
        let low_scoring = sampled_goals <= 2;
        let (home_goals, away_goals) = match outcome {
            Outcome::HomeWin => {
                let away_goals = if low_scoring {
                    Vec::new()
                } else {
                    self.factory.create_goals(&mut self.rand, split.away, &away)
                };
                let home_goals = self.factory.create_goals(&mut self.rand, split.home, &home);
                (home_goals, away_goals)
            }
            Outcome::AwayWin => {
                let home_goals = if low_scoring {
                    Vec::new()
                } else {
                    self.factory.create_goals(&mut self.rand, split.home, &home)
                };
                let away_goals = self.factory.create_goals(&mut self.rand, split.away, &away);
                (home_goals, away_goals)
            }
            Outcome::Draw => {
                let home_goals = self.factory.create_goals(&mut self.rand, split.home, &home);
                let away_goals = self.factory.create_goals(&mut self.rand, split.away, &away);
                (home_goals, away_goals)
            }
        };
        MatchResult::new(home, away, home_goals, away_goals)
    }
}

impl StandardGenerator {
    /// A generator with the default configuration, the default goal distribution and minute-
    /// stamped goals. The distribution draws from the auxiliary stream of `seed`.
    pub fn standard(seed: u64) -> Self {
        Self {
            config: Config::default(),
            rand: seeded(seed),
            dist: Normal::standard(seeded_aux(seed)),
            factory: MinuteGoals::default(),
            observer: None,
        }
    }
}
