use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::odds::{Odds, Outcome};
use crate::tally::Tally;

fn modelled_prob(odds: &Odds, outcome: Outcome) -> f64 {
    match outcome {
        Outcome::HomeWin => odds.home_win,
        Outcome::Draw => odds.draw(),
        Outcome::AwayWin => odds.away_win(),
    }
}

pub fn tabulate_outcomes(odds: &Odds, tally: &Tally) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Outcome".into(),
                "Modelled".into(),
                "Simulated".into(),
                "Count".into(),
            ],
        ));
    for outcome in Outcome::iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{outcome}").into(),
                format!("{:.4}", modelled_prob(odds, outcome)).into(),
                format!("{:.4}", tally.prob(outcome)).into(),
                format!("{}", tally.count(outcome)).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_scores(tally: &Tally, limit: usize) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Score".into(), "Frequency".into()],
        ));
    for (split, freq) in tally.top_scores(limit) {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}-{}", split.home, split.away).into(),
                format!("{freq:.4}").into(),
            ],
        ));
    }
    table
}
