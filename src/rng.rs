use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of independent uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn uniform01(&mut self) -> f64;

    /// Linearly maps a uniform draw onto `[lo, hi)`.
    #[inline]
    fn uniform_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.uniform01() * (hi - lo)
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn uniform01(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A generator seeded once from the operating system's entropy source.
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Replays a fixed sequence of draws, wrapping around at the end.
///
/// Useful to make a whole run reproducible independently of any generator.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `draws` is empty or contains a value outside `[0, 1)`.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "scripted source needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "scripted draws must lie in [0, 1)"
        );
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn uniform01(&mut self) -> f64 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
