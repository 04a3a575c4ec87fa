//! Real-valued distributions from which the combined goal total of a match is drawn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uniform::UniformSource;

/// A source of real-valued samples. The shape and parameters are a configuration concern;
/// callers only ever ask for the next sample.
pub trait RealDistribution {
    fn sample(&mut self) -> f64;
}

impl<D: RealDistribution + ?Sized> RealDistribution for Box<D> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DistError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("standard deviation cannot be negative, got {0}")]
    NegativeStdDev(f64),

    #[error("rate must lie in (0, 500], got {0}")]
    InvalidRate(f64),

    #[error("empirical distribution requires at least one observation")]
    NoObservations,
}

fn require_finite(name: &'static str, value: f64) -> Result<(), DistError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistError::NotFinite { name, value })
    }
}

/// Samples the distribution once and converts the draw into a goal total: floored, with
/// negative and non-finite draws mapped to zero and oversized draws saturating.
#[inline]
pub fn total_goals(dist: &mut impl RealDistribution) -> u16 {
    let sample = dist.sample();
    if !sample.is_finite() || sample < 0.0 {
        0
    } else {
        f64::min(sample.floor(), u16::MAX as f64) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub std_dev: f64,
}
impl NormalParams {
    pub fn validate(&self) -> Result<(), DistError> {
        require_finite("mean", self.mean)?;
        require_finite("std_dev", self.std_dev)?;
        if self.std_dev < 0.0 {
            return Err(DistError::NegativeStdDev(self.std_dev));
        }
        Ok(())
    }
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            mean: 2.5,
            std_dev: 1.5,
        }
    }
}

/// Gaussian distribution, sampled with the Box–Muller transform. Each transform yields a pair
/// of independent deviates; the second is held over for the following call.
#[derive(Debug)]
pub struct Normal<R: UniformSource> {
    params: NormalParams,
    rand: R,
    spare: Option<f64>,
}
impl<R: UniformSource> Normal<R> {
    pub fn new(params: NormalParams, rand: R) -> Result<Self, DistError> {
        params.validate()?;
        Ok(Self {
            params,
            rand,
            spare: None,
        })
    }

    /// The default goal-total distribution, driven by `rand`.
    pub fn standard(rand: R) -> Self {
        Self {
            params: NormalParams::default(),
            rand,
            spare: None,
        }
    }

    pub fn params(&self) -> &NormalParams {
        &self.params
    }

    fn deviate(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }
        // shifted onto (0, 1] so that ln never sees zero
        let u1 = 1.0 - self.rand.next_uniform();
        let u2 = self.rand.next_uniform();
        let radius = f64::sqrt(-2.0 * u1.ln());
        let theta = 2.0 * std::f64::consts::PI * u2;
        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }
}

impl<R: UniformSource> RealDistribution for Normal<R> {
    fn sample(&mut self) -> f64 {
        self.params.mean + self.params.std_dev * self.deviate()
    }
}

const MAX_LAMBDA: f64 = 500.0;

/// Poisson-distributed counts with rate `lambda`, sampled by inverting the CDF.
#[derive(Debug)]
pub struct Poisson<R: UniformSource> {
    lambda: f64,
    rand: R,
}
impl<R: UniformSource> Poisson<R> {
    pub fn new(lambda: f64, rand: R) -> Result<Self, DistError> {
        if !(lambda > 0.0 && lambda <= MAX_LAMBDA) {
            return Err(DistError::InvalidRate(lambda));
        }
        Ok(Self { lambda, rand })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl<R: UniformSource> RealDistribution for Poisson<R> {
    fn sample(&mut self) -> f64 {
        let random = self.rand.next_uniform();
        let mut k = 0u32;
        let mut prob = f64::exp(-self.lambda);
        let mut cumulative = prob;
        while random > cumulative && k < u16::MAX as u32 {
            k += 1;
            prob *= self.lambda / k as f64;
            if prob == 0.0 {
                break;
            }
            cumulative += prob;
        }
        k as f64
    }
}

/// Resamples a set of observations, interpolating linearly between adjacent order statistics.
#[derive(Debug)]
pub struct Empirical<R: UniformSource> {
    sorted: Vec<f64>,
    rand: R,
}
impl<R: UniformSource> Empirical<R> {
    pub fn new(mut observations: Vec<f64>, rand: R) -> Result<Self, DistError> {
        if observations.is_empty() {
            return Err(DistError::NoObservations);
        }
        for &observation in &observations {
            require_finite("observation", observation)?;
        }
        observations.sort_by(f64::total_cmp);
        Ok(Self {
            sorted: observations,
            rand,
        })
    }

    pub fn observations(&self) -> &[f64] {
        &self.sorted
    }
}

impl<R: UniformSource> RealDistribution for Empirical<R> {
    fn sample(&mut self) -> f64 {
        let last = self.sorted.len() - 1;
        let position = self.rand.next_uniform() * last as f64;
        let index = usize::min(position.floor() as usize, last);
        if index == last {
            return self.sorted[last];
        }
        let frac = position - index as f64;
        self.sorted[index] + frac * (self.sorted[index + 1] - self.sorted[index])
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed(pub f64);

impl RealDistribution for Fixed {
    fn sample(&mut self) -> f64 {
        self.0
    }
}
