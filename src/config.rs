use serde::{Deserialize, Serialize};

use crate::error::{PsoError, Result};

/// Parameters of a single optimization run. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub pop_size: usize,
    /// The amount of iterations to run the algorithm.
    pub max_iter: usize,
    /// The inertia weight `W`.
    pub inertia: f64,
    /// The cognitive parameter `C1`.
    pub cognitive: f64,
    /// The social parameter `C2`.
    pub social: f64,
    /// Lower bound of every coordinate.
    pub x_min: f64,
    /// Upper bound of every coordinate.
    pub x_max: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            pop_size: 10,
            max_iter: 200,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            x_min: -5.0,
            x_max: 5.0,
        }
    }
}

impl PsoConfig {
    /// Bound of the initial velocity draw, `x_max - x_min`.
    #[inline]
    pub fn vel_max(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn validate(&self) -> Result<()> {
        if self.pop_size == 0 {
            return Err(PsoError::EmptySwarm);
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
            ("x_min", self.x_min),
            ("x_max", self.x_max),
        ] {
            if !value.is_finite() {
                return Err(PsoError::NonFiniteParameter { name, value });
            }
        }
        if self.x_min >= self.x_max {
            return Err(PsoError::InvalidBounds {
                min: self.x_min,
                max: self.x_max,
            });
        }
        Ok(())
    }
}
