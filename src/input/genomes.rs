use std::path::Path;

use crate::input::{InputError, for_each_line};

pub fn read_genome_list(path: &Path) -> Result<Vec<String>, InputError> {
    let mut genomes = Vec::new();
    for_each_line(path, |_, line| {
        genomes.push(line.trim().to_string());
        Ok(())
    })?;

    if genomes.is_empty() {
        return Err(InputError::parse(path, 0, "genome list is empty"));
    }

    Ok(genomes)
}
