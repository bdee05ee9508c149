use std::collections::HashMap;
use std::path::Path;

use crate::input::{InputError, for_each_line, parse_f64};
use crate::model::composite::CompositeKey;

const HEADER_PREFIX: &str = "Pwy\tKeyEnzyme";

/// One row of the pathway to key-enzyme table.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayDefinition {
    pub pathway_id: String,
    pub key_enzymes: Vec<String>,
    pub key_enzyme_str: String,
    pub default_pathway_cutoff: f64,
    pub default_key_enzyme_cutoff: f64,
}

impl PathwayDefinition {
    pub fn composite_key(&self) -> CompositeKey {
        CompositeKey::new(&self.pathway_id, &self.key_enzyme_str)
    }
}

/// Pathway definitions keyed by composite key, in file order.
#[derive(Debug, Clone, Default)]
pub struct PathwayDefinitions {
    defs: Vec<PathwayDefinition>,
    index: HashMap<CompositeKey, usize>,
}

impl PathwayDefinitions {
    /// Adds a definition. A repeated composite key replaces the earlier defaults in place.
    pub fn push(&mut self, def: PathwayDefinition) -> bool {
        let key = def.composite_key();
        if let Some(&idx) = self.index.get(&key) {
            self.defs[idx] = def;
            return false;
        }
        self.index.insert(key, self.defs.len());
        self.defs.push(def);
        true
    }

    pub fn definitions(&self) -> &[PathwayDefinition] {
        &self.defs
    }

    pub fn keys(&self) -> Vec<CompositeKey> {
        self.defs.iter().map(|d| d.composite_key()).collect()
    }

    /// Key-enzyme alternatives for one pathway, in file order.
    pub fn alternatives(&self, pathway_id: &str) -> Vec<&[String]> {
        self.defs
            .iter()
            .filter(|d| d.pathway_id == pathway_id)
            .map(|d| d.key_enzymes.as_slice())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }
}

impl FromIterator<PathwayDefinition> for PathwayDefinitions {
    fn from_iter<T: IntoIterator<Item = PathwayDefinition>>(iter: T) -> Self {
        let mut out = Self::default();
        for def in iter {
            out.push(def);
        }
        out
    }
}

pub fn parse_pathway_line(
    path: &Path,
    line_no: usize,
    line: &str,
) -> Result<PathwayDefinition, InputError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() < 4 {
        return Err(InputError::parse(
            path,
            line_no,
            format!("expected 4 columns, found {}", fields.len()),
        ));
    }
    let key_enzyme_str = fields[1].to_string();
    Ok(PathwayDefinition {
        pathway_id: fields[0].to_string(),
        key_enzymes: key_enzyme_str.split(',').map(str::to_string).collect(),
        key_enzyme_str,
        default_pathway_cutoff: parse_f64(path, line_no, fields[2], "pathway cutoff")?,
        default_key_enzyme_cutoff: parse_f64(path, line_no, fields[3], "key enzyme cutoff")?,
    })
}

pub fn read_pathways(path: &Path) -> Result<PathwayDefinitions, InputError> {
    let mut out = PathwayDefinitions::default();

    for_each_line(path, |line_no, line| {
        if line.starts_with(HEADER_PREFIX) {
            return Ok(());
        }
        let def = parse_pathway_line(path, line_no, line)?;
        let key = def.composite_key();
        if !out.push(def) {
            tracing::warn!(
                "duplicate pathway/key-enzyme entry {}; keeping last (line {})",
                key,
                line_no
            );
        }
        Ok(())
    })?;

    tracing::debug!(
        "loaded {} pathway/key-enzyme combinations from {}",
        out.len(),
        path.display()
    );
    Ok(out)
}
