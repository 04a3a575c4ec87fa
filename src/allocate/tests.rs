use super::*;
use crate::testing::Script;
use crate::uniform::seeded;

#[test]
fn home_win_two_goals_is_two_nil() {
    let mut source = Script::default();
    assert_eq!(Split::new(2, 0), allocate(2, Outcome::HomeWin, &mut source));
    assert!(source.bounds_seen.is_empty());
}

#[test]
fn away_win_one_goal_is_nil_one() {
    let mut source = Script::default();
    assert_eq!(Split::new(0, 1), allocate(1, Outcome::AwayWin, &mut source));
}

#[test]
fn decisive_nil_total_forced_to_one_nil() {
    let mut source = Script::default();
    assert_eq!(Split::new(1, 0), allocate(0, Outcome::HomeWin, &mut source));
    assert_eq!(Split::new(0, 1), allocate(0, Outcome::AwayWin, &mut source));
    assert!(source.bounds_seen.is_empty());
}

#[test]
fn decisive_low_totals() {
    let mut source = Script::default();
    for total in 0..=2 {
        let decisive = allocate_decisive(total, &mut source);
        assert_eq!(u16::max(total, 1), decisive.winner);
        assert_eq!(0, decisive.loser);
    }
}

#[test]
fn decisive_high_total_draws_loser_share() {
    let mut source = Script::bounded(vec![1]);
    assert_eq!(Split::new(4, 1), allocate(5, Outcome::HomeWin, &mut source));
    assert_eq!(vec![3], source.bounds_seen);

    let mut source = Script::bounded(vec![0]);
    assert_eq!(Split::new(0, 3), allocate(3, Outcome::AwayWin, &mut source));
    assert_eq!(vec![2], source.bounds_seen);
}

#[test]
fn decisive_even_total_can_tie() {
    let mut source = Script::bounded(vec![2]);
    let split = allocate(4, Outcome::HomeWin, &mut source);
    assert_eq!(Split::new(2, 2), split);
    assert_eq!(Outcome::Draw, split.outcome());
}

#[test]
fn decisive_high_totals_respect_bounds() {
    let mut source = seeded(11);
    for total in 3..=40 {
        for _ in 0..50 {
            let decisive = allocate_decisive(total, &mut source);
            assert_eq!(total, decisive.winner + decisive.loser);
            assert!(decisive.loser <= total / 2, "loser {} exceeds half of {total}", decisive.loser);
        }
    }
}

#[test]
fn draw_three_rounds_up_to_two_all() {
    let mut source = Script::default();
    assert_eq!(Split::new(2, 2), allocate(3, Outcome::Draw, &mut source));
}

#[test]
fn draws_are_level_and_even() {
    let mut source = Script::default();
    for total in 0..=30 {
        let split = allocate(total, Outcome::Draw, &mut source);
        assert_eq!(split.home, split.away);
        assert_eq!(0, split.total() % 2);
        assert!(split.total() >= total as u32);
        assert!(split.total() <= total as u32 + 1);
    }
    assert!(source.bounds_seen.is_empty());
}

#[test]
fn draw_share_at_limit() {
    assert_eq!(u16::MAX / 2 + 1, draw_share(u16::MAX));
    assert_eq!(0, draw_share(0));
}

#[test]
fn split_outcome() {
    assert_eq!(Outcome::HomeWin, Split::new(3, 1).outcome());
    assert_eq!(Outcome::Draw, Split::new(1, 1).outcome());
    assert_eq!(Outcome::AwayWin, Split::new(0, 2).outcome());
    assert_eq!(4, Split::new(3, 1).total());
}
