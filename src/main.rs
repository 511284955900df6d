use ackley_pso::{entropy_rng, Ackley, ConsoleReporter, Pso, PsoConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let pso = Pso::<_, 2>::new(PsoConfig::default(), Ackley)?;
    let mut reporter = ConsoleReporter::stdout();
    pso.optimize_with(&mut entropy_rng(), &mut reporter);

    Ok(())
}
