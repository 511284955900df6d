use log::{debug, info, trace};

use crate::config::PsoConfig;
use crate::error::Result;
use crate::observer::Observer;
use crate::problem::Problem;
use crate::rng::{entropy_rng, UniformSource};
use crate::swarm::Swarm;

/// The outcome of a run: the best point any particle ever visited.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<const D: usize> {
    pub best_position: [f64; D],
    pub best_fitness: f64,
    /// Number of iterations performed.
    pub iterations: usize,
}

/// Particle Swarm Optimization with a single global best.
pub struct Pso<P: Problem<D>, const D: usize> {
    config: PsoConfig,
    pub problem: P,
}

impl<P: Problem<D>, const D: usize> Pso<P, D> {
    pub fn new(config: PsoConfig, problem: P) -> Result<Self> {
        config.validate()?;
        Ok(Pso { config, problem })
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Runs the full optimization with a freshly seeded generator and no
    /// observer.
    pub fn optimize(&self) -> Report<D> {
        self.optimize_with(&mut entropy_rng(), &mut ())
    }

    /// Runs `max_iter` iterations, drawing randomness from `rng` and reporting
    /// checkpoints to `observer`. Always runs to completion.
    pub fn optimize_with<R, O>(&self, rng: &mut R, observer: &mut O) -> Report<D>
    where
        R: UniformSource + ?Sized,
        O: Observer<D> + ?Sized,
    {
        info!(
            "starting PSO: {} particles, {} iterations, {} dimensions",
            self.config.pop_size, self.config.max_iter, D
        );
        observer.on_start(&self.config);

        let mut swarm = Swarm::init(self.config, &self.problem, &mut *rng, &mut *observer);
        observer.on_initialized(&swarm);

        for iter in 1..=self.config.max_iter {
            if swarm.step(&self.problem, &mut *rng) {
                debug!(
                    "iteration {iter}: best fitness improved to {}",
                    swarm.best_fitness()
                );
            } else {
                trace!("iteration {iter}: no improvement");
            }
            observer.on_iteration(iter, &swarm);
        }

        let report = Report {
            best_position: *swarm.best_position(),
            best_fitness: swarm.best_fitness(),
            iterations: self.config.max_iter,
        };
        info!(
            "finished PSO: best fitness {} at {:?}",
            report.best_fitness, report.best_position
        );
        observer.on_finished(&report);
        report
    }
}
