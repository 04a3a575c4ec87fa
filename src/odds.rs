//! Maps the rating differential between two teams onto three probability bands and picks the
//! outcome of a match from a single uniform draw.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

/// Percentage points of home win probability gained per point of rating advantage.
pub const RATING_WEIGHT: f64 = 0.7;

#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumCount, EnumIter,
)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}
impl Outcome {
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Outcome::Draw)
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Cumulative thresholds over [0, 1): draws at or below `home_win` are home wins, draws
/// in (`home_win`, `draw_cutoff`] are draws, and everything above is an away win.
///
/// The bands are not clamped. For a large enough rating gap `home_win` exceeds 1 (no draws or
/// away wins are possible) or falls below 0, and the three probabilities no longer describe a
/// proper distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub home_win: f64,
    pub draw_cutoff: f64,
}
impl Odds {
    pub fn from_ratings(home_win_base: f64, draw: f64, home_rating: f64, away_rating: f64) -> Self {
        let home_win = home_win_base + modifier(home_rating - away_rating);
        Self {
            home_win,
            draw_cutoff: home_win + draw,
        }
    }

    #[inline]
    pub fn pick(&self, random: f64) -> Outcome {
        if random <= self.home_win {
            Outcome::HomeWin
        } else if random <= self.draw_cutoff {
            Outcome::Draw
        } else {
            Outcome::AwayWin
        }
    }

    pub fn draw(&self) -> f64 {
        self.draw_cutoff - self.home_win
    }

    pub fn away_win(&self) -> f64 {
        1.0 - self.draw_cutoff
    }
}

#[inline]
pub fn modifier(rating_diff: f64) -> f64 {
    (rating_diff * RATING_WEIGHT) / 100.0
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn equal_ratings_use_base() {
        let odds = Odds::from_ratings(0.45, 0.25, 75.0, 75.0);
        assert_float_absolute_eq!(0.45, odds.home_win);
        assert_float_absolute_eq!(0.70, odds.draw_cutoff);
        assert_float_absolute_eq!(0.25, odds.draw());
        assert_float_absolute_eq!(0.30, odds.away_win());
    }

    #[test]
    fn rating_gap_shifts_home_win() {
        let odds = Odds::from_ratings(0.45, 0.25, 80.0, 70.0);
        assert_float_absolute_eq!(0.52, odds.home_win);
        assert_float_absolute_eq!(0.77, odds.draw_cutoff);

        let odds = Odds::from_ratings(0.45, 0.25, 70.0, 80.0);
        assert_float_absolute_eq!(0.38, odds.home_win);
        assert_float_absolute_eq!(0.63, odds.draw_cutoff);
    }

    #[test]
    fn home_win_monotone_in_rating_diff() {
        let mut previous = f64::NEG_INFINITY;
        for diff in -200..=200 {
            let odds = Odds::from_ratings(0.45, 0.25, diff as f64 * 0.5, 0.0);
            assert!(odds.home_win >= previous, "not monotone at diff {diff}");
            previous = odds.home_win;
        }
    }

    #[test]
    fn pick_bands_inclusive_upper() {
        let odds = Odds::from_ratings(0.45, 0.25, 60.0, 60.0);
        assert_eq!(Outcome::HomeWin, odds.pick(0.0));
        assert_eq!(Outcome::HomeWin, odds.pick(0.45));
        assert_eq!(Outcome::Draw, odds.pick(0.450_001));
        assert_eq!(Outcome::Draw, odds.pick(0.50));
        assert_eq!(Outcome::AwayWin, odds.pick(0.71));
        assert_eq!(Outcome::AwayWin, odds.pick(0.999));
    }

    #[test]
    fn extreme_gap_is_not_clamped() {
        let odds = Odds::from_ratings(0.45, 0.25, 200.0, 0.0);
        assert_float_absolute_eq!(1.85, odds.home_win);
        assert!(odds.away_win() < 0.0);
        assert_eq!(Outcome::HomeWin, odds.pick(0.999));

        let odds = Odds::from_ratings(0.45, 0.25, 0.0, 200.0);
        assert_float_absolute_eq!(-0.95, odds.home_win);
        assert_float_absolute_eq!(-0.70, odds.draw_cutoff);
        assert_eq!(Outcome::AwayWin, odds.pick(0.0));
    }

    #[test]
    fn outcome_ordinals() {
        assert_eq!(3, Outcome::COUNT);
        let ordinals = Outcome::iter().map(|outcome| outcome.ordinal()).collect::<Vec<_>>();
        assert_eq!(vec![0, 1, 2], ordinals);
        assert!(Outcome::HomeWin.is_decisive());
        assert!(!Outcome::Draw.is_decisive());
        assert!(Outcome::AwayWin.is_decisive());
    }
}
