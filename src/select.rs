//! Picking a cat. The random source is always passed in so a seeded
//! generator makes every draw reproducible.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cat::Cat;
use crate::types::CatKind;

/// Build the generator for a run. Without a seed it pulls from the OS.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => {
            debug!("seeding generator with {seed}");
            SmallRng::seed_from_u64(seed)
        }
        None => {
            debug!("seeding generator from os entropy");
            SmallRng::from_os_rng()
        }
    }
}

/// Uniform index over `0..len`, or `None` when there is nothing to pick from.
pub fn draw_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.random_range(0..len))
}

/// Where the next index comes from
pub enum Selector {
    Random(SmallRng),
    Fixed(CatKind),
}

impl Selector {
    pub fn new(seed: Option<u64>, fixed: Option<CatKind>) -> Self {
        match fixed {
            Some(kind) => Selector::Fixed(kind),
            None => Selector::Random(make_rng(seed)),
        }
    }

    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        match self {
            Selector::Random(rng) => draw_index(rng, len),
            Selector::Fixed(kind) => Some(kind.index()).filter(|&i| i < len),
        }
    }

    /// Pick one of `cats`, returning its index alongside it
    pub fn choose<'a>(&mut self, cats: &[&'a dyn Cat]) -> Option<(usize, &'a dyn Cat)> {
        let index = self.next_index(cats.len())?;
        debug!("drew index {index} of {}", cats.len());
        Some((index, cats[index]))
    }
}
