use anyhow::{Context, Result};
use clap::Parser;
use lampyris_lib::app::App;
use lampyris_lib::model::config::AppConfig;
use lampyris_lib::model::metrics::init_logging;
use lampyris_lib::model::state::FunctionKey;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Objective function (michalewicz, rastrigin, rosenbrock, himmelblau, sphere)
    #[arg(short, long)]
    function: Option<FunctionKey>,

    /// Population size
    #[arg(short = 'n', long)]
    population: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<u64>,

    /// Print the final swarm snapshot instead of the summary
    #[arg(long)]
    snapshot: bool,
}

fn load_config(path: &str) -> Result<AppConfig> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    AppConfig::from_toml(&content).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(function) = args.function {
        config.swarm.function = function;
    }
    if let Some(n) = args.population {
        config.swarm.population = n;
    }
    if args.seed.is_some() {
        config.swarm.seed = args.seed;
    }
    if let Some(generations) = args.generations {
        config.clock.generations = generations;
    }

    let mut app = App::new(config)?;
    let stats = app.run()?;

    let out = if args.snapshot {
        serde_json::to_string_pretty(&app.snapshot())?
    } else {
        serde_json::to_string_pretty(&stats)?
    };
    println!("{out}");
    Ok(())
}
