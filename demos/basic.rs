use ackley_pso::{BestHistory, Problem, Pso, PsoConfig};

struct ShiftedBowl {
    center: [f64; 3],
}

impl Problem<3> for ShiftedBowl {
    fn objective(&self, p: &[f64; 3]) -> f64 {
        p.iter()
            .zip(self.center.iter())
            .map(|(x, c)| (x - c).powi(2))
            .sum()
    }
}

fn main() {
    let problem = ShiftedBowl {
        center: [1.0, -2.0, 0.5],
    };

    let config = PsoConfig {
        pop_size: 30,
        max_iter: 100,
        inertia: 0.7,
        cognitive: 1.5,
        social: 1.5,
        x_min: -10.0,
        x_max: 10.0,
    };

    let optimizer = Pso::<_, 3>::new(config, problem).expect("valid configuration");
    let mut history = BestHistory::new();
    let report = optimizer.optimize_with(&mut ackley_pso::entropy_rng(), &mut history);

    for (iter, fitness) in history.fitness.iter().enumerate().step_by(10) {
        println!("{iter:>4}: {fitness:.6}");
    }
    println!("{:?} -> {:.8}", report.best_position, report.best_fitness);
}
