use std::path::Path;

use crate::input::{InputError, for_each_line};
use crate::model::thresholds::{CutoffPair, CutoffTable, ThresholdRow};

const HEADER_PREFIX: &str = "MAG\tPWY\tEnzyme";

/// Reads `<completeness> <key-enzyme-cutoff> <pathway-cutoff>` rows (whitespace separated).
pub fn read_cutoff_table(path: &Path) -> Result<CutoffTable, InputError> {
    let mut table = CutoffTable::default();

    for_each_line(path, |line_no, line| {
        if line.starts_with(HEADER_PREFIX) {
            return Ok(());
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(InputError::parse(
                path,
                line_no,
                format!("expected 3 columns, found {}", fields.len()),
            ));
        }
        let parse_int = |idx: usize, what: &str| {
            fields[idx].parse::<i64>().map_err(|_| {
                InputError::parse(path, line_no, format!("invalid {what}: {:?}", fields[idx]))
            })
        };
        let threshold = parse_int(0, "completeness threshold")?;
        let key_enzyme = parse_int(1, "key enzyme cutoff")?;
        let pathway = parse_int(2, "pathway cutoff")?;

        let row = ThresholdRow {
            threshold,
            cutoffs: CutoffPair::new(key_enzyme as f64, pathway as f64),
        };
        if table.insert(row).is_some() {
            tracing::warn!(
                "duplicate completeness threshold {} in {}; keeping last (line {})",
                threshold,
                path.display(),
                line_no
            );
        }
        Ok(())
    })?;

    if table.is_empty() {
        return Err(InputError::parse(path, 0, "cutoff table has no thresholds"));
    }

    tracing::debug!(
        "loaded {} completeness thresholds from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}
