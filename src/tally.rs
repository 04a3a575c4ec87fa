//! Aggregation of many generated results into outcome and scoreline frequencies.

use rustc_hash::FxHashMap;
use strum::EnumCount;

use crate::allocate::Split;
use crate::odds::Outcome;
use crate::result::MatchResult;

/// Outcomes are counted from the final scoreline, so a decisive draw that split evenly is
/// tallied as a draw.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    trials: u64,
    outcomes: [u64; Outcome::COUNT],
    scores: FxHashMap<Split, u64>,
    goals: u64,
}
impl Tally {
    pub fn record<T, G>(&mut self, result: &MatchResult<T, G>) {
        let score = result.score();
        self.trials += 1;
        self.outcomes[score.outcome().ordinal()] += 1;
        *self.scores.entry(score).or_default() += 1;
        self.goals += score.total() as u64;
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        self.outcomes[outcome.ordinal()]
    }

    pub fn prob(&self, outcome: Outcome) -> f64 {
        self.fraction(self.count(outcome))
    }

    pub fn mean_goals(&self) -> f64 {
        self.fraction(self.goals)
    }

    /// The `limit` most frequent scorelines with their relative frequencies, most frequent first.
    /// Ties are ordered by home goals, then away goals.
    pub fn top_scores(&self, limit: usize) -> Vec<(Split, f64)> {
        let mut scores = self.scores.iter().map(|(&split, &count)| (split, count)).collect::<Vec<_>>();
        scores.sort_by(|(a_split, a_count), (b_split, b_count)| {
            b_count.cmp(a_count).then_with(|| a_split.cmp(b_split))
        });
        scores
            .into_iter()
            .take(limit)
            .map(|(split, count)| (split, self.fraction(count)))
            .collect()
    }

    fn fraction(&self, count: u64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }
}
