use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args, ValueEnum};
use courier_optimizer::{
    parsers::{city_map::CityMapParser, parser::DatasetParser},
    report::PlanReport,
    solver::{
        solver::Solver,
        solver_params::{DEFAULT_ITERATIONS, SolverParams, Threads},
    },
};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, warn};

use crate::file_utils::input_files;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct OptimizeArgs {
    /// The city map to optimize, or a folder of `.txt` city maps
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output file, or output folder receiving one `.out` file per input when the input is a folder
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// Number of random restarts (default: number of cities squared)
    #[arg(short = 'n', long, env = "COURIER_RESTARTS")]
    restarts: Option<usize>,

    /// Swap proposals per restart
    #[arg(long, env = "COURIER_ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Seed for reproducible runs, drawn from the OS when missing
    #[arg(short, long, env = "COURIER_SEED")]
    seed: Option<u64>,

    /// The number of threads running restarts, 0 for one per core (default: 1)
    #[arg(short, long, env = "COURIER_THREADS", default_value_t = 1)]
    threads: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl OptimizeArgs {
    fn solver_params(&self) -> SolverParams {
        SolverParams {
            iterations: self.iterations,
            restarts: self.restarts,
            threads: match self.threads {
                0 => Threads::Auto,
                1 => Threads::Single,
                threads => Threads::Multi(threads),
            },
        }
    }
}

pub fn run(args: OptimizeArgs) -> Result<(), anyhow::Error> {
    let paths = input_files(&args.input)
        .with_context(|| format!("Failed to list inputs in {}", args.input.display()))?;

    if paths.is_empty() {
        warn!("No .txt city map found in {}", args.input.display());
        return Ok(());
    }

    let into_folder = args.input.is_dir();
    if let (true, Some(out)) = (into_folder, &args.out) {
        fs::create_dir_all(out)
            .with_context(|| format!("Failed to create output folder {}", out.display()))?;
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    for path in paths {
        info!("Optimizing {:?}", path);

        let output = optimize_file(&path, &args, &mut rng)?;

        match &args.out {
            Some(out) if into_folder => {
                let file_name = path
                    .file_stem()
                    .map(|stem| Path::new(stem).with_extension("out"))
                    .with_context(|| format!("Invalid input file name {}", path.display()))?;
                let target = out.join(file_name);
                fs::write(&target, output)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
            }
            Some(out) => {
                fs::write(out, output)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
            }
            None => println!("{output}"),
        }
    }

    Ok(())
}

fn optimize_file(
    path: &Path,
    args: &OptimizeArgs,
    rng: &mut SmallRng,
) -> Result<String, anyhow::Error> {
    let problem = CityMapParser.parse(path)?;

    let mut solver = Solver::new(&problem, args.solver_params());
    solver.on_best_solution(|trial, solution| {
        info!(trial, cost = solution.cost(), "New best solution");
    });

    let start = jiff::Timestamp::now();
    let best = solver.solve(rng)?;
    let elapsed = jiff::Timestamp::now().duration_since(start);

    let report = PlanReport::new(problem.fleet(), &best);
    match report.cost {
        Some(cost) => info!("Finished in {:#}: cost = {}", elapsed, cost),
        None => warn!("Finished in {:#}: some deliveries cannot be reached", elapsed),
    }

    Ok(match args.format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    })
}
