//! Command-line entry point: reads a problem file and prints one route per
//! driver.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use load_router::config::PlannerConfig;
use load_router::constructive::GreedyPlanner;
use load_router::io::{read_problem, write_json, write_text};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One `[id1,id2,...]` line per route
    Text,
    /// A single JSON object with routes and totals
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "load-router",
    version,
    about = "Assigns loads to drivers under a round-trip distance cap"
)]
struct Args {
    /// Path to the problem file
    problem: PathBuf,

    /// JSON file with planner parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum distance of a multi-load route
    #[arg(long)]
    max_distance: Option<f64>,

    /// Fixed cost per driver
    #[arg(long)]
    driver_cost: Option<f64>,

    /// Weight of the depot-proximity bonus
    #[arg(long)]
    depot_weight: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Defaults, overlaid by `--config`, overlaid by individual flags.
    fn planner_config(&self) -> Result<PlannerConfig> {
        let base = match &self.config {
            Some(path) => PlannerConfig::from_json_file(path)?,
            None => PlannerConfig::default(),
        };
        let (max, cost, weight) = (self.max_distance, self.driver_cost, self.depot_weight);
        Ok(base.with_overrides(max, cost, weight)?)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("load_router={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.planner_config()?;
    let catalog = read_problem(&args.problem, config.depot())
        .with_context(|| format!("loading {}", args.problem.display()))?;
    let plan = GreedyPlanner::new(&catalog, &config).plan()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        Format::Text => write_text(&mut out, &plan)?,
        Format::Json => write_json(&mut out, &plan, config.driver_cost())?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid arguments")
    }

    fn write_config(tag: &str, contents: &str) -> PathBuf {
        let name = format!("load-router-cli-{tag}-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn test_missing_problem_is_usage_error() {
        assert!(Args::try_parse_from(["load-router"]).is_err());
    }

    #[test]
    fn test_defaults_only() {
        let config = args(&["load-router", "p.txt"])
            .planner_config()
            .expect("valid config");
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_config_file_alone() {
        let path = write_config("alone", r#"{"max_distance": 300.0, "driver_cost": 80.0}"#);
        let path_arg = path.to_string_lossy().into_owned();
        let argv = ["load-router", "p.txt", "--config", &path_arg];
        let config = args(&argv).planner_config();
        fs::remove_file(&path).expect("remove temp file");
        let config = config.expect("valid config");
        assert_eq!(config.max_distance(), 300.0);
        assert_eq!(config.driver_cost(), 80.0);
        assert_eq!(config.depot_weight(), 5.0);
    }

    #[test]
    fn test_flag_beats_config_file() {
        let path = write_config("flag", r#"{"max_distance": 300.0, "driver_cost": 80.0}"#);
        let path_arg = path.to_string_lossy().into_owned();
        let argv = [
            "load-router",
            "p.txt",
            "--config",
            &path_arg,
            "--max-distance",
            "450",
        ];
        let config = args(&argv).planner_config();
        fs::remove_file(&path).expect("remove temp file");
        let config = config.expect("valid config");
        assert_eq!(config.max_distance(), 450.0);
        assert_eq!(config.driver_cost(), 80.0);
    }

    #[test]
    fn test_nan_flag_is_rejected() {
        let parsed = args(&["load-router", "p.txt", "--depot-weight", "NaN"]);
        assert!(parsed.planner_config().is_err());
    }

    #[test]
    fn test_format_and_verbosity() {
        let parsed = args(&["load-router", "p.txt", "-f", "json", "-vv"]);
        assert!(matches!(parsed.format, Format::Json));
        assert_eq!(parsed.verbose, 2);
        assert_eq!(parsed.problem, PathBuf::from("p.txt"));
    }
}
