use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use tinyrand::StdRand;
use tracing::{debug, info};

use scoreline::dist::{Normal, NormalParams, Poisson, RealDistribution};
use scoreline::fixture::{read_fixtures, Fixture};
use scoreline::generator::{Config, MatchResultGenerator};
use scoreline::goal::{Goal, MinuteGoals};
use scoreline::result::MatchResult;
use scoreline::tally::Tally;
use scoreline::{file, print, uniform};

const TOP_SCORES: usize = 10;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the fixtures from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// file to write the fixture results to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,

    /// home team name
    #[clap(long, default_value = "Home")]
    home: String,

    /// away team name
    #[clap(long, default_value = "Away")]
    away: String,

    /// home team rating
    #[clap(long = "home-rating")]
    home_rating: Option<f64>,

    /// away team rating
    #[clap(long = "away-rating")]
    away_rating: Option<f64>,

    /// number of matches to simulate between the two teams
    #[clap(short = 'n', long, default_value = "10000")]
    trials: u64,

    /// seed for the random source; taken from the clock if omitted
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// base probability of a home win
    #[clap(long = "home-win-prob")]
    home_win_prob: Option<f64>,

    /// base probability of a draw
    #[clap(long = "draw-prob")]
    draw_prob: Option<f64>,

    /// mean of the normally distributed goal total
    #[clap(long)]
    mean: Option<f64>,

    /// standard deviation of the normally distributed goal total
    #[clap(long = "std-dev")]
    std_dev: Option<f64>,

    /// sample goal totals from a Poisson distribution with this rate instead
    #[clap(long)]
    poisson: Option<f64>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        let ratings = self.home_rating.is_some() || self.away_rating.is_some();
        if self.file.is_none() && !ratings || self.file.is_some() && ratings {
            bail!("either the -f flag or the team ratings must be specified");
        }
        if ratings && (self.home_rating.is_none() || self.away_rating.is_none()) {
            bail!("both --home-rating and --away-rating must be specified");
        }
        if self.out.is_some() && self.file.is_none() {
            bail!("the -o flag requires a fixtures file");
        }
        if self.poisson.is_some() && (self.mean.is_some() || self.std_dev.is_some()) {
            bail!("--poisson cannot be combined with --mean or --std-dev");
        }
        if self.trials == 0 {
            bail!("at least one trial is required");
        }
        Ok(())
    }

    fn config(&self) -> Config {
        let default = Config::default();
        Config {
            home_win_prob: self.home_win_prob.unwrap_or(default.home_win_prob),
            draw_prob: self.draw_prob.unwrap_or(default.draw_prob),
        }
    }

    fn dist(&self, rand: StdRand) -> anyhow::Result<Box<dyn RealDistribution>> {
        match self.poisson {
            Some(lambda) => Ok(Box::new(Poisson::new(lambda, rand)?)),
            None => {
                let default = NormalParams::default();
                let params = NormalParams {
                    mean: self.mean.unwrap_or(default.mean),
                    std_dev: self.std_dev.unwrap_or(default.std_dev),
                };
                Ok(Box::new(Normal::new(params, rand)?))
            }
        }
    }
}

type Generator = MatchResultGenerator<StdRand, Box<dyn RealDistribution>, MinuteGoals>;

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("seed: {seed}");
    let rand = uniform::seeded(seed);
    let dist = args.dist(uniform::seeded_aux(seed))?;
    let mut generator: Generator =
        MatchResultGenerator::new(args.config(), rand, dist, MinuteGoals::default())?;

    match &args.file {
        Some(path) => {
            let fixtures = read_fixtures(path)?;
            info!("read {} fixtures from {}", fixtures.len(), path.display());
            play_fixtures(&args, &fixtures, &mut generator)?;
        }
        None => simulate(&args, &mut generator),
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn simulate(args: &Args, generator: &mut Generator) {
    let (home_rating, away_rating) = (
        args.home_rating.unwrap_or_default(),
        args.away_rating.unwrap_or_default(),
    );
    let odds = generator.config().odds(home_rating, away_rating);
    info!(
        "{} ({home_rating}) vs {} ({away_rating}): home win odds={:.2}%, away win odds={:.2}%",
        args.home,
        args.away,
        odds.home_win * 100.0,
        odds.away_win() * 100.0
    );

    let start_time = Instant::now();
    let mut tally = Tally::default();
    for _ in 0..args.trials {
        let result = generator.generate(&args.home, home_rating, &args.away, away_rating);
        tally.record(&result);
    }
    let elapsed = start_time.elapsed();
    info!(
        "simulated {} matches in {:.3}s, mean goals: {:.3}",
        tally.trials(),
        elapsed.as_secs_f64(),
        tally.mean_goals()
    );

    println!(
        "Outcomes:\n{}",
        Console::default().render(&print::tabulate_outcomes(&odds, &tally))
    );
    println!(
        "Top scores:\n{}",
        Console::default().render(&print::tabulate_scores(&tally, TOP_SCORES))
    );
}

fn play_fixtures(
    args: &Args,
    fixtures: &[Fixture],
    generator: &mut Generator,
) -> anyhow::Result<()> {
    let results = fixtures
        .iter()
        .map(|fixture| fixture.play(generator))
        .collect::<Vec<_>>();
    println!("{}", Console::default().render(&tabulate_results(&results)));

    if let Some(out) = &args.out {
        file::write_json(out, &results)?;
        info!("wrote {} results to {}", results.len(), out.display());
    }
    Ok(())
}

fn tabulate_results(results: &[MatchResult<String, Goal<String>>]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(15)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(15)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Home".into(), "Score".into(), "Away".into(), "Goals".into()],
        ));
    for result in results {
        let score = result.score();
        let mut goals = result
            .home_goals()
            .iter()
            .chain(result.away_goals())
            .collect::<Vec<_>>();
        goals.sort_by_key(|goal| goal.minute);
        let goals = goals
            .iter()
            .map(|goal| format!("{}' {}", goal.minute, goal.team))
            .collect::<Vec<_>>()
            .join(", ");
        table.push_row(Row::new(
            Styles::default(),
            vec![
                result.home().clone().into(),
                format!("{}-{}", score.home, score.away).into(),
                result.away().clone().into(),
                goals.into(),
            ],
        ));
    }
    table
}
