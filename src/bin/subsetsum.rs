//! subsetsum: console front end for the GA and swarm solvers.
//!
//! Items and target come from `--items`/`--target`, or from stdin as
//! `count, item_1 .. item_count, target`. Progress is logged through
//! `tracing`; pass `-v` or set `RUST_LOG=debug` to see every generation.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use u_subsetsum::ga::GaConfig;
use u_subsetsum::input::{instance_from_args, read_instance};
use u_subsetsum::pso::{PsoConfig, VelocityMode};
use u_subsetsum::{solve_genetic, solve_swarm, Result, Solution, SolverError};

#[derive(Parser)]
#[command(name = "subsetsum")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Items, separated by spaces or commas. Without `--items` and
    /// `--target` the instance is read from stdin.
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    items: Option<String>,

    /// Target sum. Must be given together with `--items`.
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    target: Option<String>,

    /// Random seed for a reproducible run.
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log every generation or sweep.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Genetic algorithm
    Ga {
        #[arg(long, default_value_t = 100)]
        population_size: usize,
        #[arg(long, default_value_t = 0.01)]
        mutation_rate: f64,
        #[arg(long, default_value_t = 1000)]
        generations: usize,
    },
    /// Binary particle swarm
    Pso {
        #[arg(long, default_value_t = 20)]
        swarm_size: usize,
        #[arg(long, default_value_t = 100)]
        iterations: usize,
        #[arg(long, default_value_t = 0.5)]
        inertia_weight: f64,
        #[arg(long, default_value_t = 2.0)]
        c1: f64,
        #[arg(long, default_value_t = 2.0)]
        c2: f64,
        /// Keep real-valued velocities between sweeps
        #[arg(long)]
        continuous: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let (items, target) = read_problem(&cli)?;

    match cli.command {
        Command::Ga {
            population_size,
            mutation_rate,
            generations,
        } => {
            let mut config = GaConfig::default()
                .with_population_size(population_size)
                .with_mutation_rate(mutation_rate)
                .with_max_generations(generations);
            config.seed = cli.seed;
            let solution = solve_genetic(items, target, &config)?;
            if solution.exact {
                println!("Perfect solution found!");
            }
            report(&solution);
        }
        Command::Pso {
            swarm_size,
            iterations,
            inertia_weight,
            c1,
            c2,
            continuous,
        } => {
            let mode = if continuous {
                VelocityMode::Continuous
            } else {
                VelocityMode::Rounded
            };
            let mut config = PsoConfig::default()
                .with_swarm_size(swarm_size)
                .with_max_iterations(iterations)
                .with_inertia_weight(inertia_weight)
                .with_coefficients(c1, c2)
                .with_velocity_mode(mode);
            config.seed = cli.seed;
            let solution = solve_swarm(items, target, &config)?;
            report(&solution);
        }
    }
    Ok(())
}

fn read_problem(cli: &Cli) -> Result<(Vec<i64>, i64)> {
    if let Some(instance) = instance_from_args(cli.items.as_deref(), cli.target.as_deref())? {
        return Ok(instance);
    }
    eprint!("Enter the number of integers, each integer, then the target sum: ");
    io::stderr()
        .flush()
        .map_err(|e| SolverError::MalformedInput(format!("failed to write prompt: {e}")))?;
    read_instance(io::stdin().lock())
}

fn report<F: std::fmt::Display>(solution: &Solution<F>) {
    println!("Best Solution Ever: Fitness = {}", solution.fitness);
    let subset: Vec<String> = solution.subset.iter().map(i64::to_string).collect();
    println!("Subset: {}", subset.join(" "));
    println!("Sum: {}", solution.sum);
}
