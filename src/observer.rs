use std::fmt;
use std::io::{self, Write};

use log::warn;

use crate::config::PsoConfig;
use crate::optimizer::Report;
use crate::particle::Particle;
use crate::swarm::Swarm;

/// Hooks invoked by the optimizer at fixed checkpoints of a run.
///
/// Every hook defaults to doing nothing; `()` is the silent observer.
pub trait Observer<const D: usize> {
    /// Called once before the swarm is created.
    fn on_start(&mut self, _config: &PsoConfig) {}

    /// Called for each particle in creation order.
    fn on_particle_initialized(&mut self, _index: usize, _particle: &Particle<D>) {}

    fn on_initialized(&mut self, _swarm: &Swarm<D>) {}

    /// Called after every iteration, `iter` counting from 1.
    fn on_iteration(&mut self, _iter: usize, _swarm: &Swarm<D>) {}

    fn on_finished(&mut self, _report: &Report<D>) {}
}

impl<const D: usize> Observer<D> for () {}

impl<O: Observer<D> + ?Sized, const D: usize> Observer<D> for &mut O {
    fn on_start(&mut self, config: &PsoConfig) {
        (**self).on_start(config)
    }

    fn on_particle_initialized(&mut self, index: usize, particle: &Particle<D>) {
        (**self).on_particle_initialized(index, particle)
    }

    fn on_initialized(&mut self, swarm: &Swarm<D>) {
        (**self).on_initialized(swarm)
    }

    fn on_iteration(&mut self, iter: usize, swarm: &Swarm<D>) {
        (**self).on_iteration(iter, swarm)
    }

    fn on_finished(&mut self, report: &Report<D>) {
        (**self).on_finished(report)
    }
}

impl<A: Observer<D>, B: Observer<D>, const D: usize> Observer<D> for (A, B) {
    fn on_start(&mut self, config: &PsoConfig) {
        self.0.on_start(config);
        self.1.on_start(config);
    }

    fn on_particle_initialized(&mut self, index: usize, particle: &Particle<D>) {
        self.0.on_particle_initialized(index, particle);
        self.1.on_particle_initialized(index, particle);
    }

    fn on_initialized(&mut self, swarm: &Swarm<D>) {
        self.0.on_initialized(swarm);
        self.1.on_initialized(swarm);
    }

    fn on_iteration(&mut self, iter: usize, swarm: &Swarm<D>) {
        self.0.on_iteration(iter, swarm);
        self.1.on_iteration(iter, swarm);
    }

    fn on_finished(&mut self, report: &Report<D>) {
        self.0.on_finished(report);
        self.1.on_finished(report);
    }
}

/// Records the global best fitness after initialization and after every
/// iteration.
#[derive(Debug, Clone, Default)]
pub struct BestHistory {
    pub fitness: Vec<f64>,
}

impl BestHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const D: usize> Observer<D> for BestHistory {
    fn on_initialized(&mut self, swarm: &Swarm<D>) {
        self.fitness.clear();
        self.fitness.push(swarm.best_fitness());
    }

    fn on_iteration(&mut self, _iter: usize, swarm: &Swarm<D>) {
        self.fitness.push(swarm.best_fitness());
    }
}

/// Prints human-readable progress: initial positions, a progress line on the
/// first and every tenth iteration, and a final summary.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // A broken output stream must not abort the run.
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args) {
            warn!("failed to write progress report: {err}");
        }
    }
}

/// Formats a point as `(a, b, ...)` with `precision` decimals.
fn point(p: &[f64], precision: usize) -> String {
    let coords: Vec<String> = p.iter().map(|x| format!("{x:.precision$}")).collect();
    format!("({})", coords.join(", "))
}

impl<W: Write, const D: usize> Observer<D> for ConsoleReporter<W> {
    fn on_start(&mut self, config: &PsoConfig) {
        self.emit(format_args!(
            "=== Random initial positions of {} particles ===\n",
            config.pop_size
        ));
    }

    fn on_particle_initialized(&mut self, index: usize, particle: &Particle<D>) {
        self.emit(format_args!(
            "Particle {:>2}: {}\n",
            index + 1,
            point(particle.position(), 6)
        ));
    }

    fn on_initialized(&mut self, swarm: &Swarm<D>) {
        self.emit(format_args!(
            "\n=======================================================\n\
             Init      | Best fitness: {:>12.6} | Best pos: {}\n",
            swarm.best_fitness(),
            point(swarm.best_position(), 6)
        ));
    }

    fn on_iteration(&mut self, iter: usize, swarm: &Swarm<D>) {
        if iter % 10 == 0 || iter == 1 {
            self.emit(format_args!(
                "Iter {:>4} | Best fitness: {:>12.6} | Best pos: {}\n",
                iter,
                swarm.best_fitness(),
                point(swarm.best_position(), 6)
            ));
        }
    }

    fn on_finished(&mut self, report: &Report<D>) {
        self.emit(format_args!(
            "\n=== Final result after {} iterations ===\n\
             Best fitness = {:.8}\n\
             Position: {}\n",
            report.iterations,
            report.best_fitness,
            point(&report.best_position, 8)
        ));
        if let Err(err) = self.out.flush() {
            warn!("failed to flush progress report: {err}");
        }
    }
}
