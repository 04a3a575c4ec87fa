//! Fixtures pairing two rated teams, as read from a JSON file of the form
//! `[{"home": {"name": "Arsenal", "rating": 82.0}, "away": {"name": "Everton", "rating": 74.5}}]`.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dist::RealDistribution;
use crate::file;
use crate::generator::MatchResultGenerator;
use crate::goal::GoalEventFactory;
use crate::result::MatchResult;
use crate::uniform::UniformSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub rating: f64,
}
impl Team {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: Team,
    pub away: Team,
}
impl Fixture {
    pub fn play<R, D, F>(
        &self,
        generator: &mut MatchResultGenerator<R, D, F>,
    ) -> MatchResult<String, <F as GoalEventFactory<String>>::Goal>
    where
        R: UniformSource,
        D: RealDistribution,
        F: GoalEventFactory<String>,
    {
        generator.generate(
            self.home.name.clone(),
            self.home.rating,
            self.away.name.clone(),
            self.away.rating,
        )
    }
}

pub fn read_fixtures(path: impl AsRef<Path>) -> Result<Vec<Fixture>, io::Error> {
    file::read_json(path)
}
