use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::CfpError;
use crate::input::InputError;
use crate::input::completeness::{GenomeCompleteness, read_completeness};
use crate::input::genomes::read_genome_list;
use crate::input::pathways::{PathwayDefinition, PathwayDefinitions, read_pathways};
use crate::model::composite::CompositeKey;
use crate::report::json::{ScaleSummary, write_json};
use crate::report::tsv::write_scaled_cutoffs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleParams {
    pub dynamic_key_enzyme: bool,
    pub dynamic_pathway: bool,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            dynamic_key_enzyme: true,
            dynamic_pathway: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaleConfig {
    pub pathways: PathBuf,
    pub completeness: PathBuf,
    pub genomes: Option<PathBuf>,
    pub out: PathBuf,
    pub summary: Option<PathBuf>,
    pub params: ScaleParams,
}

pub fn scale_cutoff(default_cutoff: f64, completeness: f64) -> f64 {
    default_cutoff * completeness / 100.0
}

/// Per-genome cut-offs for every composite key.
#[derive(Debug, Clone, Default)]
pub struct CutoffMatrix {
    genomes: Vec<String>,
    keys: Vec<CompositeKey>,
    genome_index: HashMap<String, usize>,
    key_index: HashMap<CompositeKey, usize>,
    values: Vec<Vec<f64>>,
}

impl CutoffMatrix {
    fn new(keys: Vec<CompositeKey>) -> Self {
        let key_index = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), i))
            .collect();
        Self {
            keys,
            key_index,
            ..Self::default()
        }
    }

    fn push_row(&mut self, genome_id: &str, row: Vec<f64>) {
        self.genome_index
            .insert(genome_id.to_string(), self.genomes.len());
        self.genomes.push(genome_id.to_string());
        self.values.push(row);
    }

    pub fn genomes(&self) -> &[String] {
        &self.genomes
    }

    pub fn keys(&self) -> &[CompositeKey] {
        &self.keys
    }

    pub fn n_entries(&self) -> usize {
        self.genomes.len() * self.keys.len()
    }

    pub fn row(&self, genome_id: &str) -> Result<&[f64], InputError> {
        self.genome_index
            .get(genome_id)
            .map(|&idx| self.values[idx].as_slice())
            .ok_or_else(|| InputError::MissingKey {
                table: "scaled cut-offs",
                key: genome_id.to_string(),
            })
    }

    pub fn get(&self, genome_id: &str, key: &CompositeKey) -> Result<f64, InputError> {
        let row = self.row(genome_id)?;
        self.key_index
            .get(key)
            .map(|&idx| row[idx])
            .ok_or_else(|| InputError::MissingKey {
                table: "pathway/key-enzyme combinations",
                key: key.to_string(),
            })
    }
}

#[derive(Debug, Clone)]
pub struct ScaledCutoffs {
    pub key_enzyme: CutoffMatrix,
    pub pathway: CutoffMatrix,
}

fn build_matrix(
    defs: &PathwayDefinitions,
    completeness: &GenomeCompleteness,
    genomes: &[String],
    dynamic: bool,
    default_of: fn(&PathwayDefinition) -> f64,
) -> Result<CutoffMatrix, InputError> {
    let mut matrix = CutoffMatrix::new(defs.keys());
    for genome_id in genomes {
        let genome_cpl = completeness.get(genome_id)?;
        let row = defs
            .definitions()
            .iter()
            .map(|def| {
                let default_cutoff = default_of(def);
                if dynamic {
                    scale_cutoff(default_cutoff, genome_cpl)
                } else {
                    default_cutoff
                }
            })
            .collect();
        matrix.push_row(genome_id, row);
    }
    Ok(matrix)
}

pub fn scale_cutoffs(
    defs: &PathwayDefinitions,
    completeness: &GenomeCompleteness,
    genomes: &[String],
    params: &ScaleParams,
) -> Result<ScaledCutoffs, InputError> {
    let key_enzyme = build_matrix(
        defs,
        completeness,
        genomes,
        params.dynamic_key_enzyme,
        |d| d.default_key_enzyme_cutoff,
    )?;
    let pathway = build_matrix(
        defs,
        completeness,
        genomes,
        params.dynamic_pathway,
        |d| d.default_pathway_cutoff,
    )?;
    Ok(ScaledCutoffs {
        key_enzyme,
        pathway,
    })
}

#[derive(Debug, Clone)]
pub struct ScaleOutput {
    pub pathways: PathwayDefinitions,
    pub scaled: ScaledCutoffs,
    pub params: ScaleParams,
}

pub fn run_scale(config: &ScaleConfig) -> Result<ScaleOutput, CfpError> {
    let pathways = read_pathways(&config.pathways)?;
    let completeness = read_completeness(&config.completeness)?;
    let genomes = match &config.genomes {
        Some(path) => read_genome_list(path)?,
        None => completeness.genome_ids().map(str::to_string).collect(),
    };

    let scaled = scale_cutoffs(&pathways, &completeness, &genomes, &config.params)?;
    tracing::info!(
        "scaled {} pathway/key-enzyme cut-offs for {} genomes",
        pathways.len(),
        genomes.len()
    );
    Ok(ScaleOutput {
        pathways,
        scaled,
        params: config.params,
    })
}

pub fn write_scale(config: &ScaleConfig, output: &ScaleOutput) -> Result<(), CfpError> {
    write_scaled_cutoffs(&config.out, &output.scaled).map_err(|source| CfpError::Output {
        path: config.out.display().to_string(),
        source,
    })?;
    tracing::info!(
        "wrote {} cut-off rows to {}",
        output.scaled.key_enzyme.n_entries(),
        config.out.display()
    );

    if let Some(path) = &config.summary {
        write_json(path, &ScaleSummary::from_output(output))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scale.rs"]
mod tests;
