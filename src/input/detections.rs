use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::input::{InputError, for_each_line};

/// Columns per pathway group in the wide detection table.
pub const GROUP_STRIDE: usize = 3;
const FIRST_GROUP_COLUMN: usize = 1;
const PATHWAY_LABEL_SEPARATOR: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayColumns {
    pub pathway_id: String,
    pub completeness_col: usize,
    pub detected_col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRow {
    pub line_no: usize,
    pub cells: Vec<String>,
}

impl DetectionRow {
    pub fn genome_id(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct DetectionTable {
    pub path: PathBuf,
    pub pathways: Vec<PathwayColumns>,
    pub rows: Vec<DetectionRow>,
}

/// Infers pathway columns from the header using the fixed group stride.
pub fn parse_header(
    path: &Path,
    line_no: usize,
    line: &str,
) -> Result<Vec<PathwayColumns>, InputError> {
    let cols: Vec<&str> = line.trim().split('\t').collect();
    let mut seen = HashSet::new();
    let mut pathways = Vec::new();

    let mut n = FIRST_GROUP_COLUMN;
    while n < cols.len() {
        let pathway_id = cols[n]
            .split(PATHWAY_LABEL_SEPARATOR)
            .next()
            .unwrap_or("")
            .to_string();
        if !seen.insert(pathway_id.clone()) {
            return Err(InputError::parse(
                path,
                line_no,
                format!("duplicate pathway group {pathway_id:?} in header"),
            ));
        }
        pathways.push(PathwayColumns {
            pathway_id,
            completeness_col: n + 1,
            detected_col: n + 2,
        });
        n += GROUP_STRIDE;
    }

    Ok(pathways)
}

pub fn read_detection_table(path: &Path) -> Result<DetectionTable, InputError> {
    let mut pathways: Option<Vec<PathwayColumns>> = None;
    let mut rows = Vec::new();

    for_each_line(path, |line_no, line| {
        if pathways.is_none() {
            pathways = Some(parse_header(path, line_no, line)?);
            return Ok(());
        }
        rows.push(DetectionRow {
            line_no,
            cells: line.split('\t').map(str::to_string).collect(),
        });
        Ok(())
    })?;

    let pathways =
        pathways.ok_or_else(|| InputError::parse(path, 0, "detection table has no header"))?;

    tracing::debug!(
        "loaded {} pathway groups and {} genomes from {}",
        pathways.len(),
        rows.len(),
        path.display()
    );
    Ok(DetectionTable {
        path: path.to_path_buf(),
        pathways,
        rows,
    })
}
