//! Testing helpers.

use std::collections::VecDeque;

use crate::dist::RealDistribution;
use crate::uniform::UniformSource;

/// A [UniformSource] that replays pre-scripted draws, panicking once a script runs dry.
#[derive(Debug, Default)]
pub struct Script {
    uniforms: VecDeque<f64>,
    bounded: VecDeque<u64>,
    pub bounds_seen: Vec<u64>,
}
impl Script {
    pub fn new(uniforms: Vec<f64>, bounded: Vec<u64>) -> Self {
        Self {
            uniforms: uniforms.into(),
            bounded: bounded.into(),
            bounds_seen: vec![],
        }
    }

    pub fn uniforms(uniforms: Vec<f64>) -> Self {
        Self::new(uniforms, vec![])
    }

    pub fn bounded(bounded: Vec<u64>) -> Self {
        Self::new(vec![], bounded)
    }

    pub fn is_exhausted(&self) -> bool {
        self.uniforms.is_empty() && self.bounded.is_empty()
    }
}

impl UniformSource for Script {
    fn next_uniform(&mut self) -> f64 {
        self.uniforms.pop_front().expect("uniform script exhausted")
    }

    fn next_bounded(&mut self, bound: u64) -> u64 {
        self.bounds_seen.push(bound);
        let value = self.bounded.pop_front().expect("bounded script exhausted");
        assert!(
            value < u64::max(bound, 1),
            "scripted value {value} not below bound {bound}"
        );
        value
    }
}

/// A [RealDistribution] that replays pre-scripted samples.
#[derive(Debug, Default)]
pub struct Sequence {
    samples: VecDeque<f64>,
}
impl Sequence {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}

impl RealDistribution for Sequence {
    fn sample(&mut self) -> f64 {
        self.samples.pop_front().expect("sample script exhausted")
    }
}
