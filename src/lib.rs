//! Particle swarm optimization for single-objective minimization inside a
//! bounded box.
//!
//! ```no_run
//! use ackley_pso::{Ackley, Pso, PsoConfig};
//!
//! let pso = Pso::<_, 2>::new(PsoConfig::default(), Ackley).unwrap();
//! let report = pso.optimize();
//! println!("{:.8} at {:?}", report.best_fitness, report.best_position);
//! ```

mod config;
mod error;
mod observer;
mod optimizer;
mod particle;
mod problem;
mod rng;
mod swarm;

pub use config::PsoConfig;
pub use error::{PsoError, Result};
pub use observer::{BestHistory, ConsoleReporter, Observer};
pub use optimizer::{Pso, Report};
pub use particle::Particle;
pub use problem::{Ackley, Problem, Sphere};
pub use rng::{entropy_rng, ScriptedSource, UniformSource};
pub use swarm::Swarm;
