use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutoffPair {
    pub key_enzyme: f64,
    pub pathway: f64,
}

impl CutoffPair {
    /// Fallback for a completeness below every threshold.
    pub const ZERO: CutoffPair = CutoffPair {
        key_enzyme: 0.0,
        pathway: 0.0,
    };

    pub fn new(key_enzyme: f64, pathway: f64) -> Self {
        Self {
            key_enzyme,
            pathway,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid fixed cut-offs {0:?} (expected <key-enzyme>,<pathway>)")]
pub struct FixedCutoffError(pub String);

/// Parses `"<key-enzyme>,<pathway>"`. Exactly two numeric fields are accepted.
pub fn parse_fixed_cutoffs(text: &str) -> Result<CutoffPair, FixedCutoffError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 2 {
        return Err(FixedCutoffError(text.to_string()));
    }
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| FixedCutoffError(text.to_string()))
    };
    Ok(CutoffPair::new(parse(fields[0])?, parse(fields[1])?))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRow {
    pub threshold: i64,
    pub cutoffs: CutoffPair,
}

/// MAG completeness thresholds, kept sorted from highest to lowest.
#[derive(Debug, Clone, Default)]
pub struct CutoffTable {
    rows: Vec<ThresholdRow>,
}

impl CutoffTable {
    #[cfg(test)]
    pub fn from_rows(rows: impl IntoIterator<Item = ThresholdRow>) -> Self {
        let mut table = Self::default();
        for row in rows {
            table.insert(row);
        }
        table
    }

    /// Inserts a row, replacing any row with the same threshold. Returns the replaced pair.
    pub fn insert(&mut self, row: ThresholdRow) -> Option<CutoffPair> {
        match self
            .rows
            .binary_search_by(|probe| row.threshold.cmp(&probe.threshold))
        {
            Ok(idx) => {
                let old = self.rows[idx].cutoffs;
                self.rows[idx] = row;
                Some(old)
            }
            Err(idx) => {
                self.rows.insert(idx, row);
                None
            }
        }
    }

    pub fn rows(&self) -> &[ThresholdRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_threshold(&self) -> Option<i64> {
        self.rows.last().map(|r| r.threshold)
    }

    /// Cutoffs of the highest threshold `t` with `completeness >= t`, else [`CutoffPair::ZERO`].
    pub fn resolve(&self, completeness: f64) -> CutoffPair {
        self.rows
            .iter()
            .find(|row| completeness >= row.threshold as f64)
            .map(|row| row.cutoffs)
            .unwrap_or(CutoffPair::ZERO)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
