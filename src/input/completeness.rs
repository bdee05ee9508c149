use std::collections::HashMap;
use std::path::Path;

use crate::input::{InputError, for_each_line, parse_f64};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessRecord {
    pub genome_id: String,
    pub completeness: f64,
}

/// Genome completeness percentages in file order.
#[derive(Debug, Clone, Default)]
pub struct GenomeCompleteness {
    records: Vec<CompletenessRecord>,
    index: HashMap<String, usize>,
}

impl GenomeCompleteness {
    /// Adds a record. A known genome keeps its position but takes the new value;
    /// returns false in that case.
    pub fn push(&mut self, record: CompletenessRecord) -> bool {
        if let Some(&idx) = self.index.get(&record.genome_id) {
            self.records[idx].completeness = record.completeness;
            return false;
        }
        self.index
            .insert(record.genome_id.clone(), self.records.len());
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[CompletenessRecord] {
        &self.records
    }

    pub fn genome_ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.genome_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, genome_id: &str) -> Result<f64, InputError> {
        self.index
            .get(genome_id)
            .map(|&idx| self.records[idx].completeness)
            .ok_or_else(|| InputError::MissingKey {
                table: "genome completeness table",
                key: genome_id.to_string(),
            })
    }
}

impl FromIterator<CompletenessRecord> for GenomeCompleteness {
    fn from_iter<T: IntoIterator<Item = CompletenessRecord>>(iter: T) -> Self {
        let mut out = Self::default();
        for record in iter {
            out.push(record);
        }
        out
    }
}

pub fn read_completeness(path: &Path) -> Result<GenomeCompleteness, InputError> {
    let mut out = GenomeCompleteness::default();

    for_each_line(path, |line_no, line| {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < 2 {
            return Err(InputError::parse(
                path,
                line_no,
                "expected <genome-id>\\t<completeness>",
            ));
        }
        let genome_id = fields[0].trim().to_string();
        let completeness = parse_f64(path, line_no, fields[1], "completeness")?;
        if !out.push(CompletenessRecord {
            genome_id: genome_id.clone(),
            completeness,
        }) {
            tracing::warn!(
                "duplicate genome in completeness table; keeping last (line {}, genome {})",
                line_no,
                genome_id
            );
        }
        Ok(())
    })?;

    tracing::debug!(
        "loaded completeness for {} genomes from {}",
        out.len(),
        path.display()
    );
    Ok(out)
}
