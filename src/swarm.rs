use log::{debug, trace};

use crate::config::PsoConfig;
use crate::error::Result;
use crate::observer::Observer;
use crate::particle::Particle;
use crate::problem::Problem;
use crate::rng::UniformSource;

/// A fixed-size population of particles plus the swarm-wide best.
#[derive(Debug, Clone)]
pub struct Swarm<const D: usize> {
    particles: Vec<Particle<D>>,
    best_position: [f64; D],
    best_fitness: f64,
    config: PsoConfig,
}

impl<const D: usize> Swarm<D> {
    /// Scatters `config.pop_size` particles uniformly over the search box, with
    /// velocities drawn from `[-vel_max, vel_max)` per coordinate.
    ///
    /// Ties in the initial global best keep the lower-index particle.
    pub fn new<P, R, O>(config: PsoConfig, problem: &P, rng: &mut R, observer: &mut O) -> Result<Self>
    where
        P: Problem<D> + ?Sized,
        R: UniformSource + ?Sized,
        O: Observer<D> + ?Sized,
    {
        config.validate()?;
        Ok(Self::init(config, problem, rng, observer))
    }

    /// Initialization proper; `config` must already be validated.
    pub(crate) fn init<P, R, O>(config: PsoConfig, problem: &P, rng: &mut R, observer: &mut O) -> Self
    where
        P: Problem<D> + ?Sized,
        R: UniformSource + ?Sized,
        O: Observer<D> + ?Sized,
    {
        let vel_max = config.vel_max();
        let mut swarm = Swarm {
            particles: Vec::with_capacity(config.pop_size),
            best_position: [0.0; D],
            best_fitness: f64::INFINITY,
            config,
        };

        for index in 0..config.pop_size {
            let position: [f64; D] =
                std::array::from_fn(|_| rng.uniform_range(config.x_min, config.x_max));
            let velocity: [f64; D] = std::array::from_fn(|_| rng.uniform_range(-vel_max, vel_max));
            let particle = Particle::new(position, velocity, problem.objective(&position));

            if particle.best_fitness < swarm.best_fitness {
                swarm.best_fitness = particle.best_fitness;
                swarm.best_position = particle.best_position;
            }

            observer.on_particle_initialized(index, &particle);
            swarm.particles.push(particle);
        }

        debug!(
            "initialized {} particles, best fitness {}",
            swarm.particles.len(),
            swarm.best_fitness
        );
        swarm
    }

    /// Runs one iteration, moving every particle in order.
    ///
    /// Particles later in the order already see a global best improved by
    /// earlier ones in the same iteration. Returns true if the global best
    /// improved.
    pub fn step<P, R>(&mut self, problem: &P, rng: &mut R) -> bool
    where
        P: Problem<D> + ?Sized,
        R: UniformSource + ?Sized,
    {
        let PsoConfig {
            inertia: w,
            cognitive: c_1,
            social: c_2,
            x_min,
            x_max,
            ..
        } = self.config;
        let mut improved = false;

        for (index, particle) in self.particles.iter_mut().enumerate() {
            // One pair of draws per particle, shared by every coordinate.
            let r1 = rng.uniform01();
            let r2 = rng.uniform01();

            for d in 0..D {
                let p = particle.position[d];
                particle.velocity[d] = w * particle.velocity[d]
                    + c_1 * r1 * (particle.best_position[d] - p)
                    + c_2 * r2 * (self.best_position[d] - p);

                // Clamp position only; velocity keeps its value at the wall.
                let moved = p + particle.velocity[d];
                particle.position[d] = if moved < x_min {
                    x_min
                } else if moved > x_max {
                    x_max
                } else {
                    moved
                };
            }

            let fitness = problem.objective(&particle.position);
            if particle.update_pbest(fitness) && fitness < self.best_fitness {
                trace!("particle {index} improved global best to {fitness}");
                self.best_fitness = fitness;
                self.best_position = particle.position;
                improved = true;
            }
        }

        improved
    }

    pub fn particles(&self) -> &[Particle<D>] {
        &self.particles
    }

    /// The best position found by any particle so far.
    pub fn best_position(&self) -> &[f64; D] {
        &self.best_position
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }
}
