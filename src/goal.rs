//! Expansion of a per-side goal count into individual goal events.

use serde::{Deserialize, Serialize};

use crate::uniform::UniformSource;

/// Turns "`count` goals for `team`" into an ordered sequence of exactly `count` events. Any
/// randomness must be drawn from the supplied `source` so that a seeded generator reproduces
/// entire results, not just scorelines.
pub trait GoalEventFactory<T> {
    type Goal;

    fn create_goals(
        &mut self,
        source: &mut impl UniformSource,
        count: u16,
        team: &T,
    ) -> Vec<Self::Goal>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal<T> {
    pub team: T,
    pub minute: u8,
}

pub const REGULATION_MINUTES: u8 = 90;

/// Stamps each goal with a uniformly drawn minute in `1..=minutes`, ordering the events by minute.
#[derive(Debug, Clone)]
pub struct MinuteGoals {
    minutes: u8,
}
impl MinuteGoals {
    pub fn new(minutes: u8) -> Self {
        Self {
            minutes: u8::max(minutes, 1),
        }
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }
}

impl Default for MinuteGoals {
    fn default() -> Self {
        Self::new(REGULATION_MINUTES)
    }
}

impl<T: Clone> GoalEventFactory<T> for MinuteGoals {
    type Goal = Goal<T>;

    fn create_goals(
        &mut self,
        source: &mut impl UniformSource,
        count: u16,
        team: &T,
    ) -> Vec<Goal<T>> {
        let mut goals = (0..count)
            .map(|_| Goal {
                team: team.clone(),
                minute: source.next_bounded(self.minutes as u64) as u8 + 1,
            })
            .collect::<Vec<_>>();
        goals.sort_by_key(|goal| goal.minute);
        goals
    }
}

/// Events carrying nothing but the scoring team.
#[derive(Debug, Clone, Default)]
pub struct TeamGoals;

impl<T: Clone> GoalEventFactory<T> for TeamGoals {
    type Goal = T;

    fn create_goals(&mut self, _: &mut impl UniformSource, count: u16, team: &T) -> Vec<T> {
        vec![team.clone(); count as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Script;
    use crate::uniform::seeded;

    #[test]
    fn minute_goals_sorted_and_attributed() {
        let mut source = Script::bounded(vec![79, 4, 44]);
        let goals = MinuteGoals::default().create_goals(&mut source, 3, &"Arsenal");
        assert_eq!(
            vec![
                Goal { team: "Arsenal", minute: 5 },
                Goal { team: "Arsenal", minute: 45 },
                Goal { team: "Arsenal", minute: 80 },
            ],
            goals
        );
        assert_eq!(vec![90, 90, 90], source.bounds_seen);
        assert!(source.is_exhausted());
    }

    #[test]
    fn minute_goals_zero_count() {
        let mut source = Script::default();
        let goals = MinuteGoals::default().create_goals(&mut source, 0, &1u32);
        assert!(goals.is_empty());
        assert!(source.bounds_seen.is_empty());
    }

    #[test]
    fn minute_goals_within_regulation() {
        let mut source = seeded(17);
        let mut factory = MinuteGoals::default();
        for count in 0..20 {
            let goals = factory.create_goals(&mut source, count, &'h');
            assert_eq!(count as usize, goals.len());
            for goal in &goals {
                assert!((1..=REGULATION_MINUTES).contains(&goal.minute));
            }
            assert!(goals.windows(2).all(|pair| pair[0].minute <= pair[1].minute));
        }
    }

    #[test]
    fn minute_goals_minimum_one_minute() {
        assert_eq!(1, MinuteGoals::new(0).minutes());
    }

    #[test]
    fn team_goals_draw_nothing() {
        let mut source = Script::default();
        let goals = TeamGoals.create_goals(&mut source, 4, &"Everton");
        assert_eq!(vec!["Everton"; 4], goals);
    }
}
