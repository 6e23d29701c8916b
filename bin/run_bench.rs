//! Benchmark runner: generate one random symmetric positive-semidefinite
//! system and time the three direct solvers on it.

use clap::Parser;
use dense_solvers::{Problem, report, solve_all};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "run_bench",
    about = "Time direct inversion, column-pivoted QR, and LDLT on the same random dense system"
)]
struct Cli {
    /// Problem size N (the system is N x N)
    #[arg(long, default_value_t = 50)]
    size: usize,

    /// Seed for the problem generator; omit for a fresh random draw
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let problem = Problem::generate(cli.size, &mut rng);
    log::info!("generated {0}x{0} symmetric positive-semidefinite system", cli.size);

    let results = match solve_all(&problem.a, &problem.b) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    report::print_report(&results);
}
