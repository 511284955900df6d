/// One candidate solution of the swarm.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle<const D: usize> {
    pub(crate) position: [f64; D],
    pub(crate) velocity: [f64; D],
    pub(crate) best_position: [f64; D],
    pub(crate) best_fitness: f64,
}

impl<const D: usize> Particle<D> {
    /// Creates a particle whose personal best is its starting position.
    pub fn new(position: [f64; D], velocity: [f64; D], fitness: f64) -> Self {
        Self {
            position,
            velocity,
            best_position: position,
            best_fitness: fitness,
        }
    }

    pub fn position(&self) -> &[f64; D] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64; D] {
        &self.velocity
    }

    /// The lowest-fitness position this particle has occupied.
    pub fn best_position(&self) -> &[f64; D] {
        &self.best_position
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Records `fitness` at the current position, returning true if it became
    /// the new personal best.
    #[inline]
    pub(crate) fn update_pbest(&mut self, fitness: f64) -> bool {
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position = self.position;
            true
        } else {
            false
        }
    }
}
