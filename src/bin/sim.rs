use find_carrot::{
    init_logging, Field, GameEngine, RandomWalker, RecordingOutput, Session, MAX_DIMENSION,
    MIN_DIMENSION, DEFAULT_HOLE_PROBABILITY,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const MAX_TURNS: usize = 1000;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let rows = rng.random_range(MIN_DIMENSION..=MAX_DIMENSION);
    let cols = rng.random_range(MIN_DIMENSION..=MAX_DIMENSION);
    let field = Field::generate(rows, cols, DEFAULT_HOLE_PROBABILITY, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut engine = GameEngine::new(field);
    engine.start(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let walker = RandomWalker::new(SmallRng::seed_from_u64(seed.wrapping_add(1)), MAX_TURNS);
    let mut session = Session::new(engine, walker, RecordingOutput::new());
    let state = session.run()?;

    println!(
        "state={:?} turns={} rows={} cols={}",
        state,
        session.engine().turns(),
        rows,
        cols
    );
    Ok(())
}
