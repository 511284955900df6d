use std::f64::consts::{E, PI};

/// A trait that represents a single-objective minimization problem.
///
/// The dimensionality of the search space is declared by `D`.
pub trait Problem<const D: usize> {
    /// The objective function of the problem. Lower is better.
    fn objective(&self, p: &[f64; D]) -> f64;
}

impl<P: Problem<D> + ?Sized, const D: usize> Problem<D> for &P {
    #[inline]
    fn objective(&self, p: &[f64; D]) -> f64 {
        (**self).objective(p)
    }
}

/// The two-dimensional Ackley function. Global minimum `f(0, 0) = 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;

impl Ackley {
    pub fn evaluate(x: f64, y: f64) -> f64 {
        -20.0 * (-0.2 * (0.5 * (x * x + y * y)).sqrt()).exp()
            - (0.5 * ((2.0 * PI * x).cos() + (2.0 * PI * y).cos())).exp()
            + E
            + 20.0
    }
}

impl Problem<2> for Ackley {
    #[inline]
    fn objective(&self, p: &[f64; 2]) -> f64 {
        Self::evaluate(p[0], p[1])
    }
}

/// Sum of squares, minimum at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl<const D: usize> Problem<D> for Sphere {
    #[inline]
    fn objective(&self, p: &[f64; D]) -> f64 {
        p.iter().map(|x| x * x).sum()
    }
}
