//! A seeded, probabilistic generator of football match results. The rating differential between
//! two teams skews the odds of a home win, draw or away win; a goal total is then sampled from a
//! configurable distribution and split between the sides in a way that agrees with the outcome.

pub mod allocate;
pub mod dist;
pub mod file;
pub mod fixture;
pub mod generator;
pub mod goal;
pub mod odds;
pub mod print;
pub mod result;
pub mod tally;
pub mod uniform;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
