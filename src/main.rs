mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::CfpError;
use crate::pipeline::resolve::{ResolveConfig, run_resolve, write_resolve};
use crate::pipeline::scale::{ScaleConfig, ScaleParams, run_scale, write_scale};
use crate::pipeline::sort::{SortConfig, run_sort, write_sort};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CfpError> {
    match command {
        Command::Resolve(args) => {
            let config = ResolveConfig::from(args);
            let output = run_resolve(&config)?;
            write_resolve(&config, &output)
        }
        Command::Scale(args) => {
            let config = ScaleConfig::from(args);
            let output = run_scale(&config)?;
            write_scale(&config, &output)
        }
        Command::Sort(args) => {
            let config = SortConfig::from(args);
            let ranked = run_sort(&config)?;
            write_sort(&config, &ranked)
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cfp-cutoffs", version)]
#[command(about = "Cut-off resolution and detection table ranking for carbon fixation pathways")]
struct Cli {
    /// Debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve key enzyme and pathway cut-offs per MAG (fixed or by completeness thresholds).
    Resolve(ResolveArgs),
    /// Scale default per-pathway cut-offs by each genome's completeness.
    Scale(ScaleArgs),
    /// Rank detected pathways per genome by completeness, highest first.
    Sort(SortArgs),
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Threshold table (MAG\tPWY\tEnzyme) or fixed "<key-enzyme>,<pathway>" cut-offs.
    #[arg(short = 'c', long, value_name = "FILE|KE,PWY")]
    cutoffs: String,
    /// MAG completeness table (<genome>\t<completeness>).
    #[arg(short = 'm', long, value_name = "FILE")]
    completeness: Option<PathBuf>,
    #[arg(short = 'o', long, value_name = "FILE")]
    out: PathBuf,
    /// Write a JSON run summary.
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
}

impl From<ResolveArgs> for ResolveConfig {
    fn from(args: ResolveArgs) -> Self {
        ResolveConfig {
            cutoffs: args.cutoffs,
            completeness: args.completeness,
            out: args.out,
            summary: args.summary,
        }
    }
}

#[derive(Debug, Args)]
struct ScaleArgs {
    /// Pathway to key enzyme table (Pwy\tKeyEnzyme\t<pwy cutoff>\t<key enzyme cutoff>).
    #[arg(short = 'p', long, value_name = "FILE")]
    pathways: PathBuf,
    /// MAG completeness table (<genome>\t<completeness>).
    #[arg(short = 'm', long, value_name = "FILE")]
    completeness: PathBuf,
    /// Only emit these genomes, one id per line.
    #[arg(short = 'g', long, value_name = "FILE")]
    genomes: Option<PathBuf>,
    #[arg(short = 'o', long, value_name = "FILE")]
    out: PathBuf,
    /// Keep default key enzyme cut-offs instead of scaling them.
    #[arg(long)]
    static_key_enzyme: bool,
    /// Keep default pathway cut-offs instead of scaling them.
    #[arg(long)]
    static_pathway: bool,
    /// Write a JSON run summary.
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
}

impl From<ScaleArgs> for ScaleConfig {
    fn from(args: ScaleArgs) -> Self {
        ScaleConfig {
            pathways: args.pathways,
            completeness: args.completeness,
            genomes: args.genomes,
            out: args.out,
            summary: args.summary,
            params: ScaleParams {
                dynamic_key_enzyme: !args.static_key_enzyme,
                dynamic_pathway: !args.static_pathway,
            },
        }
    }
}

#[derive(Debug, Args)]
struct SortArgs {
    /// Wide detection table with <pwy>__* column groups of three.
    #[arg(short = 'd', long, value_name = "FILE")]
    detections: PathBuf,
    #[arg(short = 'o', long, value_name = "FILE")]
    out: PathBuf,
}

impl From<SortArgs> for SortConfig {
    fn from(args: SortArgs) -> Self {
        SortConfig {
            detections: args.detections,
            out: args.out,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
