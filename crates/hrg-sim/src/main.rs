use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use hrg_gas::serde::particle_list_from_json;
use hrg_gas::{resolve_decay_probabilities, SpeciesCollection};
use hrg_sweep::{run_sweep, StatisticalModel, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "hrg-sim", about = "Hadron resonance gas sweep CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a (T, muB, muS) grid sweep and export the observables.
    Sweep(SweepArgs),
    /// Validate a particle list's decay graph and print a summary.
    Validate(ValidateArgs),
}

#[derive(ClapArgs, Debug)]
struct SweepArgs {
    /// JSON particle list describing the gas.
    #[arg(long)]
    particles: PathBuf,
    /// Optional YAML sweep configuration; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory for run artefacts.
    #[arg(long)]
    out: PathBuf,
}

#[derive(ClapArgs, Debug)]
struct ValidateArgs {
    /// JSON particle list describing the gas.
    #[arg(long)]
    particles: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sweep(args) => run_sweep_command(args),
        Command::Validate(args) => run_validate(args),
    }
}

fn load_collection(
    particles: &PathBuf,
    config: &SweepConfig,
) -> Result<SpeciesCollection, Box<dyn Error>> {
    let bytes = fs::read(particles)?;
    let inputs = particle_list_from_json(&bytes)?;
    Ok(SpeciesCollection::build(&inputs, &config.tolerances)?)
}

fn run_sweep_command(args: SweepArgs) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };
    let collection = load_collection(&args.particles, &config)?;
    let model = StatisticalModel::new(config.expansion_order)?;
    let report = run_sweep(&collection, &model, &config)?;
    report.write(&args.out)?;
    println!(
        "sweep complete: {} points ({} failed), observables hash {}",
        report.manifest.points_total,
        report.manifest.points_failed,
        report.manifest.observables_hash
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), Box<dyn Error>> {
    let config = SweepConfig::default();
    let collection = load_collection(&args.particles, &config)?;
    let probabilities = resolve_decay_probabilities(&collection)?;
    println!(
        "particle list ok: {} species, {} stable",
        collection.len(),
        collection.stable_count()
    );
    for (idx, record) in collection.all().iter().enumerate() {
        let reach: f64 = probabilities[idx].single().iter().sum();
        println!(
            "  {} {} -> total stable yield {:.6}",
            record.pdg(),
            record.name(),
            reach
        );
    }
    Ok(())
}
