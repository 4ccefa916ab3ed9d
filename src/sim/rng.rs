//! Randomness for obstacle placement
//!
//! The simulation only ever asks for a unit sample in [0, 1). Live sessions use
//! the thread RNG; tests and reproducible runs plug in a seeded PCG or a fixed
//! sequence.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of unit samples used when an obstacle is regenerated
pub trait AngleSource {
    /// Next sample in [0, 1)
    fn next_unit(&mut self) -> f32;
}

/// Any `rand` generator as an angle source
#[derive(Debug, Clone)]
pub struct RandomAngles<R: Rng>(pub R);

impl<R: Rng> AngleSource for RandomAngles<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Un-seeded randomness, the default for live play
pub type SystemAngles = RandomAngles<ThreadRng>;

/// Seeded randomness for reproducible runs
pub type SeededAngles = RandomAngles<Pcg32>;

impl SystemAngles {
    pub fn system() -> Self {
        RandomAngles(rand::rng())
    }
}

impl Default for SystemAngles {
    fn default() -> Self {
        Self::system()
    }
}

impl SeededAngles {
    pub fn seeded(seed: u64) -> Self {
        RandomAngles(Pcg32::seed_from_u64(seed))
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedAngles {
    values: Vec<f32>,
    index: usize,
}

impl FixedAngles {
    /// Samples outside [0, 1) are clamped into range
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, index: 0 }
    }
}

impl AngleSource for FixedAngles {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_cycles() {
        let mut angles = FixedAngles::new(vec![0.25, 0.5]);
        assert_eq!(angles.next_unit(), 0.25);
        assert_eq!(angles.next_unit(), 0.5);
        assert_eq!(angles.next_unit(), 0.25);
    }

    #[test]
    fn test_fixed_clamps_and_handles_empty() {
        let mut angles = FixedAngles::new(vec![2.0, -1.0]);
        assert!(angles.next_unit() < 1.0);
        assert_eq!(angles.next_unit(), 0.0);
        assert_eq!(FixedAngles::new(Vec::new()).next_unit(), 0.0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededAngles::seeded(42);
        let mut b = SeededAngles::seeded(42);
        for _ in 0..16 {
            let (x, y) = (a.next_unit(), b.next_unit());
            assert_eq!(x, y);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_system_in_range() {
        let mut angles = SystemAngles::system();
        for _ in 0..16 {
            assert!((0.0..1.0).contains(&angles.next_unit()));
        }
    }
}
