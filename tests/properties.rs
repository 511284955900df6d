use ackley_pso::{
    Ackley, BestHistory, Observer, Particle, Problem, Pso, PsoConfig, Report, ScriptedSource,
    Sphere, Swarm,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Constant(f64);

impl Problem<2> for Constant {
    fn objective(&self, _p: &[f64; 2]) -> f64 {
        self.0
    }
}

/// Asserts the swarm invariants at every checkpoint of a run.
struct InvariantChecker<'a, P> {
    problem: &'a P,
    checkpoints: usize,
}

impl<'a, P: Problem<2>> InvariantChecker<'a, P> {
    fn new(problem: &'a P) -> Self {
        Self {
            problem,
            checkpoints: 0,
        }
    }

    fn check(&mut self, swarm: &Swarm<2>) {
        let config = swarm.config();
        let mut min_pbest = f64::INFINITY;
        for particle in swarm.particles() {
            for x in particle.position() {
                assert!(
                    (config.x_min..=config.x_max).contains(x),
                    "coordinate {x} left the search box"
                );
            }
            assert_eq!(
                particle.best_fitness(),
                self.problem.objective(particle.best_position())
            );
            assert!(swarm.best_fitness() <= particle.best_fitness());
            min_pbest = min_pbest.min(particle.best_fitness());
        }
        assert_eq!(swarm.best_fitness(), min_pbest);
        assert_eq!(
            swarm.best_fitness(),
            self.problem.objective(swarm.best_position())
        );
        self.checkpoints += 1;
    }
}

impl<P: Problem<2>> Observer<2> for InvariantChecker<'_, P> {
    fn on_initialized(&mut self, swarm: &Swarm<2>) {
        self.check(swarm);
    }

    fn on_iteration(&mut self, _iter: usize, swarm: &Swarm<2>) {
        self.check(swarm);
    }
}

/// Snapshots every particle after each checkpoint.
#[derive(Default)]
struct Trajectory {
    snapshots: Vec<Vec<Particle<2>>>,
}

impl Observer<2> for Trajectory {
    fn on_initialized(&mut self, swarm: &Swarm<2>) {
        self.snapshots.push(swarm.particles().to_vec());
    }

    fn on_iteration(&mut self, _iter: usize, swarm: &Swarm<2>) {
        self.snapshots.push(swarm.particles().to_vec());
    }
}

fn config(pop_size: usize, max_iter: usize) -> PsoConfig {
    PsoConfig {
        pop_size,
        max_iter,
        ..Default::default()
    }
}

#[test]
fn invariants_hold_throughout_ackley_run() {
    let pso = Pso::<_, 2>::new(PsoConfig::default(), Ackley).unwrap();
    let mut checker = InvariantChecker::new(&Ackley);
    let mut history = BestHistory::new();
    for seed in 0..5 {
        pso.optimize_with(
            &mut StdRng::seed_from_u64(seed),
            &mut (&mut checker, &mut history),
        );

        assert_eq!(history.fitness.len(), 201);
        assert!(history.fitness.windows(2).all(|w| w[1] <= w[0]));
    }
    assert_eq!(checker.checkpoints, 5 * 201);
}

#[test]
fn invariants_hold_with_walls_hit_often() {
    // Narrow box and strong pulls keep particles pinned to the bounds.
    let config = PsoConfig {
        pop_size: 8,
        max_iter: 50,
        inertia: 1.2,
        cognitive: 2.5,
        social: 2.5,
        x_min: -1.0,
        x_max: 0.5,
    };
    let pso = Pso::<_, 2>::new(config, Ackley).unwrap();
    let mut checker = InvariantChecker::new(&Ackley);
    pso.optimize_with(&mut StdRng::seed_from_u64(99), &mut checker);
    assert_eq!(checker.checkpoints, 51);
}

#[test]
fn scripted_draws_reproduce_the_whole_trajectory() {
    let script = vec![0.13, 0.92, 0.47, 0.05, 0.66, 0.31, 0.88, 0.24, 0.71];
    let pso = Pso::<_, 2>::new(config(4, 30), Ackley).unwrap();

    let mut first = Trajectory::default();
    let a = pso.optimize_with(&mut ScriptedSource::new(script.clone()), &mut first);
    let mut second = Trajectory::default();
    let b = pso.optimize_with(&mut ScriptedSource::new(script), &mut second);

    assert_eq!(a, b);
    assert_eq!(first.snapshots.len(), 31);
    assert_eq!(first.snapshots, second.snapshots);
}

#[test]
fn zero_iterations_report_initial_best() {
    let pso = Pso::<_, 2>::new(config(10, 0), Ackley).unwrap();
    let mut history = BestHistory::new();
    let report = pso.optimize_with(&mut StdRng::seed_from_u64(8), &mut history);

    assert_eq!(report.iterations, 0);
    assert_eq!(history.fitness, vec![report.best_fitness]);
}

#[test]
fn constant_surface_reports_the_constant() {
    for seed in 0..10 {
        let pso = Pso::<_, 2>::new(config(1, 25), Constant(7.0)).unwrap();
        let report: Report<2> = pso.optimize_with(&mut StdRng::seed_from_u64(seed), &mut ());
        assert_eq!(report.best_fitness, 7.0);
        assert!(report
            .best_position
            .iter()
            .all(|x| (-5.0..=5.0).contains(x)));
    }
}

#[test]
fn sphere_converges_to_origin() {
    let pso = Pso::<_, 2>::new(PsoConfig::default(), Sphere).unwrap();
    let converged = (0..20)
        .map(|seed| pso.optimize_with(&mut StdRng::seed_from_u64(seed), &mut ()))
        .filter(|report| report.best_fitness < 1e-3)
        .count();
    assert!(converged >= 18, "only {converged} of 20 runs converged");
}

#[test]
fn sphere_converges_in_higher_dimensions() {
    let pso = Pso::<_, 4>::new(config(20, 300), Sphere).unwrap();
    let report = pso.optimize_with(&mut StdRng::seed_from_u64(17), &mut ());
    assert!(report.best_fitness < 1e-2);
}
