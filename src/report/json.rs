use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::CfpError;
use crate::model::thresholds::CutoffPair;
use crate::pipeline::resolve::{CutoffMode, ResolveOutput};
use crate::pipeline::scale::ScaleOutput;

const TOOL_NAME: &str = "cfp-cutoffs";

#[derive(Debug, Serialize)]
pub struct ThresholdEntry {
    pub min_completeness: i64,
    pub cutoffs: CutoffPair,
}

#[derive(Debug, Serialize)]
pub struct ResolveSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<CutoffPair>,
    pub thresholds: Vec<ThresholdEntry>,
    pub n_genomes: usize,
    pub n_below_min_threshold: usize,
}

impl ResolveSummary {
    pub fn from_output(output: &ResolveOutput) -> Self {
        let fixed = match &output.mode {
            CutoffMode::Fixed(pair) => Some(*pair),
            CutoffMode::Dynamic { .. } => None,
        };
        let thresholds = output
            .table
            .iter()
            .flat_map(|t| t.rows())
            .map(|r| ThresholdEntry {
                min_completeness: r.threshold,
                cutoffs: r.cutoffs,
            })
            .collect();
        Self {
            tool: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
            mode: output.mode.label(),
            fixed,
            thresholds,
            n_genomes: output.genomes.len(),
            n_below_min_threshold: output.n_below_min_threshold,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PathwayAlternatives {
    pub pathway_id: String,
    pub key_enzyme_alternatives: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ScaleSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub dynamic_key_enzyme_cutoff: bool,
    pub dynamic_pathway_cutoff: bool,
    pub n_genomes: usize,
    pub n_combinations: usize,
    pub pathways: Vec<PathwayAlternatives>,
}

impl ScaleSummary {
    pub fn from_output(output: &ScaleOutput) -> Self {
        let mut pathways: Vec<PathwayAlternatives> = Vec::new();
        for def in output.pathways.definitions() {
            if pathways.iter().any(|p| p.pathway_id == def.pathway_id) {
                continue;
            }
            pathways.push(PathwayAlternatives {
                pathway_id: def.pathway_id.clone(),
                key_enzyme_alternatives: output
                    .pathways
                    .alternatives(&def.pathway_id)
                    .into_iter()
                    .map(|alt| alt.to_vec())
                    .collect(),
            });
        }
        Self {
            tool: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
            dynamic_key_enzyme_cutoff: output.params.dynamic_key_enzyme,
            dynamic_pathway_cutoff: output.params.dynamic_pathway,
            n_genomes: output.scaled.key_enzyme.genomes().len(),
            n_combinations: output.scaled.key_enzyme.keys().len(),
            pathways,
        }
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CfpError> {
    let json = serde_json::to_string_pretty(value)?;
    let io_err = |source| CfpError::Output {
        path: path.display().to_string(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(json.as_bytes()).map_err(io_err)?;
    w.write_all(b"\n").map_err(io_err)?;
    w.flush().map_err(io_err)
}
