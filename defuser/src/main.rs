//! Maze-navigation helper CLI.
//!
//! Reads an indicator, start and target from the command line, selects the
//! matching maze from the catalog, and prints the moves to read out to the
//! operator.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use defuser::core::error::SolveError;
use defuser::core::types::Coordinate;
use defuser::exit_codes;
use defuser::io::config::{DefuserConfig, OutputFormat, load_user_config};
use defuser::logging;
use defuser::solve::MazeSolver;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "defuser",
    version,
    about = "Maze solver for guiding an operator cell by cell"
)]
struct Cli {
    /// Config file (TOML). Must exist when given.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog file to use instead of the embedded reference catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the moves from start to target.
    Solve(RouteArgs),
    /// Print the cells walked from start to target.
    Path(RouteArgs),
    /// List catalog variants and the indicators selecting them.
    Variants,
    /// Check the catalog against its invariants.
    Validate,
}

#[derive(Args)]
struct RouteArgs {
    /// Indicator position, as X,Y.
    #[arg(long)]
    indicator: Coordinate,

    /// Starting cell, as X,Y.
    #[arg(long)]
    start: Coordinate,

    /// Target cell, as X,Y.
    #[arg(long)]
    target: Coordinate,

    /// Override the configured output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        let code = err
            .downcast_ref::<SolveError>()
            .map(exit_codes::for_solve_error)
            .unwrap_or(exit_codes::INVALID);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_user_config(path).context("load config")?,
        None => DefuserConfig::default(),
    };
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
    let solver = MazeSolver::from_catalog_path(catalog_path.as_deref())?;

    match cli.command {
        Command::Solve(args) => cmd_solve(&solver, &args, &config),
        Command::Path(args) => cmd_path(&solver, &args, &config),
        Command::Variants => cmd_variants(&solver),
        Command::Validate => cmd_validate(&solver),
    }
}

fn cmd_solve(solver: &MazeSolver, args: &RouteArgs, config: &DefuserConfig) -> Result<()> {
    let instructions = solver.solve(args.indicator, args.start, args.target)?;
    let lines: Vec<String> = instructions.iter().map(ToString::to_string).collect();
    emit(&instructions, &lines, args.format.unwrap_or(config.format))
}

fn cmd_path(solver: &MazeSolver, args: &RouteArgs, config: &DefuserConfig) -> Result<()> {
    let path = solver.path(args.indicator, args.start, args.target)?;
    let lines: Vec<String> = path.iter().map(ToString::to_string).collect();
    emit(&path, &lines, args.format.unwrap_or(config.format))
}

fn cmd_variants(solver: &MazeSolver) -> Result<()> {
    for (index, variant) in solver.catalog().variants.iter().enumerate() {
        let indicators: Vec<String> = solver
            .indicators_for(index)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{}\t{}", variant.id, indicators.join(" "));
    }
    Ok(())
}

fn cmd_validate(solver: &MazeSolver) -> Result<()> {
    println!("ok: {} variants", solver.catalog().variants.len());
    Ok(())
}

/// Print `value` as a JSON array or `lines` one per line.
fn emit<T: Serialize>(value: &T, lines: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).context("serialize json")?);
        }
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}
