#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use find_carrot::{init_logging, Console, GameConfig, Session, DEFAULT_HOLE_PROBABILITY};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Find the carrot hidden in a field full of holes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Number of rows (4-20); asked interactively when omitted")]
    rows: Option<usize>,
    #[arg(long, help = "Number of columns (4-20); asked interactively when omitted")]
    cols: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_HOLE_PROBABILITY, help = "Chance for each cell to be a hole")]
    hole_probability: f64,
    #[arg(long, help = "Fix RNG seed for reproducible fields (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        rows: cli.rows,
        cols: cli.cols,
        hole_probability: cli.hole_probability,
    };
    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = Session::configure(&config, &mut rng, Console::new(), Console::new())?;
    session.run()?;
    Ok(())
}
