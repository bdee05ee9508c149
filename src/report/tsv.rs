use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pipeline::resolve::GenomeCutoffs;
use crate::pipeline::scale::ScaledCutoffs;
use crate::pipeline::sort::RankedGenome;
use crate::report::format_float;

pub fn write_genome_cutoffs(path: &Path, genomes: &[GenomeCutoffs]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "genome\tcompleteness\tkey_enzyme_cutoff\tpathway_cutoff")?;
    for g in genomes {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            g.genome_id,
            g.completeness.map(format_float).as_deref().unwrap_or("NA"),
            format_float(g.cutoffs.key_enzyme),
            format_float(g.cutoffs.pathway)
        )?;
    }
    w.flush()
}

pub fn write_scaled_cutoffs(path: &Path, scaled: &ScaledCutoffs) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "genome\tpathway\tkey_enzymes\tkey_enzyme_cutoff\tpathway_cutoff"
    )?;

    for genome in scaled.key_enzyme.genomes() {
        for key in scaled.key_enzyme.keys() {
            let key_enzyme = scaled
                .key_enzyme
                .get(genome, key)
                .map_err(std::io::Error::other)?;
            let pathway = scaled
                .pathway
                .get(genome, key)
                .map_err(std::io::Error::other)?;
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}",
                genome,
                key.pathway_id(),
                key.key_enzymes(),
                format_float(key_enzyme),
                format_float(pathway)
            )?;
        }
    }
    w.flush()
}

/// One row per genome: `<genome>\t<pwy>\t<cpl>...`, no header.
pub fn write_ranked_genomes(path: &Path, ranked: &[RankedGenome]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for genome in ranked {
        let mut fields = Vec::with_capacity(1 + genome.pathways.len() * 2);
        fields.push(genome.genome_id.clone());
        for p in &genome.pathways {
            fields.push(p.pathway_id.clone());
            fields.push(format_float(p.completeness));
        }
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}
