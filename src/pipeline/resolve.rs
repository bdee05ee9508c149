use std::path::{Path, PathBuf};

use crate::error::CfpError;
use crate::input::completeness::{GenomeCompleteness, read_completeness};
use crate::input::thresholds::read_cutoff_table;
use crate::model::thresholds::{CutoffPair, CutoffTable, parse_fixed_cutoffs};
use crate::report::json::{ResolveSummary, write_json};
use crate::report::tsv::write_genome_cutoffs;

/// Genome label used when fixed cut-offs are resolved without a completeness table.
pub const ANY_GENOME: &str = "*";

#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Threshold table path, or `"<key-enzyme>,<pathway>"`.
    pub cutoffs: String,
    pub completeness: Option<PathBuf>,
    pub out: PathBuf,
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CutoffMode {
    Fixed(CutoffPair),
    Dynamic {
        table: PathBuf,
        completeness: PathBuf,
    },
}

impl CutoffMode {
    pub fn label(&self) -> &'static str {
        match self {
            CutoffMode::Fixed(_) => "fixed",
            CutoffMode::Dynamic { .. } => "dynamic",
        }
    }
}

pub fn select_mode(setting: &str, completeness: Option<&Path>) -> Result<CutoffMode, CfpError> {
    let table = Path::new(setting);
    if table.is_file() {
        return match completeness {
            Some(cpl) if cpl.is_file() => Ok(CutoffMode::Dynamic {
                table: table.to_path_buf(),
                completeness: cpl.to_path_buf(),
            }),
            _ => Err(CfpError::Config(
                "MAG completeness file not provided, program exited!".to_string(),
            )),
        };
    }

    let pair = parse_fixed_cutoffs(setting)?;
    if completeness.is_some() {
        tracing::info!(
            "Cut-offs for key enzyme percentage and pathway completeness were fixed, MAG qualities will be ignored"
        );
    }
    Ok(CutoffMode::Fixed(pair))
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenomeCutoffs {
    pub genome_id: String,
    pub completeness: Option<f64>,
    pub cutoffs: CutoffPair,
}

#[derive(Debug, Clone)]
pub struct ResolveOutput {
    pub mode: CutoffMode,
    pub table: Option<CutoffTable>,
    pub genomes: Vec<GenomeCutoffs>,
    pub n_below_min_threshold: usize,
}

pub fn resolve_genomes(
    table: &CutoffTable,
    completeness: &GenomeCompleteness,
) -> (Vec<GenomeCutoffs>, usize) {
    let min_threshold = table.min_threshold();
    let mut below = 0usize;
    let mut out = Vec::with_capacity(completeness.len());

    for record in completeness.records() {
        if min_threshold.is_some_and(|t| record.completeness < t as f64) {
            below += 1;
            tracing::warn!(
                "genome {} completeness {} is below the lowest threshold; cut-offs default to 0",
                record.genome_id,
                record.completeness
            );
        }
        out.push(GenomeCutoffs {
            genome_id: record.genome_id.clone(),
            completeness: Some(record.completeness),
            cutoffs: table.resolve(record.completeness),
        });
    }

    (out, below)
}

pub fn run_resolve(config: &ResolveConfig) -> Result<ResolveOutput, CfpError> {
    let mode = select_mode(&config.cutoffs, config.completeness.as_deref())?;
    tracing::info!("cut-off mode: {}", mode.label());

    let (table, genomes, n_below_min_threshold) = match &mode {
        CutoffMode::Dynamic {
            table,
            completeness,
        } => {
            let cutoff_table = read_cutoff_table(table)?;
            let genome_completeness = read_completeness(completeness)?;
            let (genomes, below) = resolve_genomes(&cutoff_table, &genome_completeness);
            (Some(cutoff_table), genomes, below)
        }
        CutoffMode::Fixed(pair) => {
            let genomes = match &config.completeness {
                Some(path) if path.is_file() => fixed_genomes(&read_completeness(path)?, *pair),
                _ => vec![GenomeCutoffs {
                    genome_id: ANY_GENOME.to_string(),
                    completeness: None,
                    cutoffs: *pair,
                }],
            };
            (None, genomes, 0)
        }
    };

    Ok(ResolveOutput {
        mode,
        table,
        genomes,
        n_below_min_threshold,
    })
}

fn fixed_genomes(completeness: &GenomeCompleteness, pair: CutoffPair) -> Vec<GenomeCutoffs> {
    completeness
        .records()
        .iter()
        .map(|r| GenomeCutoffs {
            genome_id: r.genome_id.clone(),
            completeness: Some(r.completeness),
            cutoffs: pair,
        })
        .collect()
}

pub fn write_resolve(config: &ResolveConfig, output: &ResolveOutput) -> Result<(), CfpError> {
    write_genome_cutoffs(&config.out, &output.genomes).map_err(|source| CfpError::Output {
        path: config.out.display().to_string(),
        source,
    })?;
    tracing::info!(
        "wrote cut-offs for {} genomes to {}",
        output.genomes.len(),
        config.out.display()
    );

    if let Some(path) = &config.summary {
        write_json(path, &ResolveSummary::from_output(output))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/resolve.rs"]
mod tests;
