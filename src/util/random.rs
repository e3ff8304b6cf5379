//! Randomness seam shared by the dice and loot engines.
//!
//! Production code passes a `rand` generator; every `rand::Rng` is a [`RandomSource`]. Tests
//! use seeded `StdRng`s or the scripted source below to pin exact outcomes.

use rand::Rng;

/// Source of the three kinds of randomness the engines consume.
pub trait RandomSource {
    /// Uniform integer in `[1, sides]`. `sides` is never zero.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Uniform float in `[0, 1)`, used for categorical sampling.
    fn unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays fixed values in order; panics when a queue runs dry so tests notice extra draws.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedSource {
    dice: std::collections::VecDeque<u32>,
    units: std::collections::VecDeque<f64>,
    indices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dice(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.dice.extend(values);
        self
    }

    pub fn units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }

    pub fn indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = self.dice.pop_front().expect("scripted die rolls exhausted");
        assert!(value >= 1 && value <= sides, "scripted roll {value} outside d{sides}");
        value
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted unit draws exhausted")
    }

    fn index(&mut self, len: usize) -> usize {
        let value = self.indices.pop_front().unwrap_or(0);
        value % len
    }
}
