use std::path::PathBuf;

use crate::error::CfpError;
use crate::input::detections::{DetectionRow, DetectionTable, read_detection_table};
use crate::input::{InputError, parse_f64};
use crate::report::tsv::write_ranked_genomes;

const DETECTED_FLAG: &str = "1";

#[derive(Debug, Clone)]
pub struct SortConfig {
    pub detections: PathBuf,
    pub out: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPathway {
    pub pathway_id: String,
    pub completeness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedGenome {
    pub genome_id: String,
    pub pathways: Vec<RankedPathway>,
}

fn cell<'a>(
    table: &DetectionTable,
    row: &'a DetectionRow,
    col: usize,
) -> Result<&'a str, InputError> {
    row.cells.get(col).map(String::as_str).ok_or_else(|| {
        InputError::parse(
            &table.path,
            row.line_no,
            format!("row has {} columns, expected column {}", row.cells.len(), col + 1),
        )
    })
}

/// Detected pathways of one genome, highest completeness first; ties keep header order.
pub fn rank_row(
    table: &DetectionTable,
    row: &DetectionRow,
) -> Result<Option<RankedGenome>, InputError> {
    let mut detected = Vec::new();
    for pathway in &table.pathways {
        if cell(table, row, pathway.detected_col)? != DETECTED_FLAG {
            continue;
        }
        let raw = cell(table, row, pathway.completeness_col)?;
        detected.push(RankedPathway {
            pathway_id: pathway.pathway_id.clone(),
            completeness: parse_f64(&table.path, row.line_no, raw, "pathway completeness")?,
        });
    }

    if detected.is_empty() {
        return Ok(None);
    }
    // Stable sort keeps column order within equal completeness values.
    detected.sort_by(|a, b| b.completeness.total_cmp(&a.completeness));

    Ok(Some(RankedGenome {
        genome_id: row.genome_id().trim().to_string(),
        pathways: detected,
    }))
}

pub fn sort_detections(table: &DetectionTable) -> Result<Vec<RankedGenome>, InputError> {
    let mut out = Vec::new();
    for row in &table.rows {
        if let Some(ranked) = rank_row(table, row)? {
            out.push(ranked);
        }
    }
    Ok(out)
}

pub fn run_sort(config: &SortConfig) -> Result<Vec<RankedGenome>, CfpError> {
    let table = read_detection_table(&config.detections)?;
    let ranked = sort_detections(&table)?;
    tracing::info!(
        "{} of {} genomes have at least one detected pathway",
        ranked.len(),
        table.rows.len()
    );
    Ok(ranked)
}

pub fn write_sort(config: &SortConfig, ranked: &[RankedGenome]) -> Result<(), CfpError> {
    write_ranked_genomes(&config.out, ranked).map_err(|source| CfpError::Output {
        path: config.out.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/sort.rs"]
mod tests;
