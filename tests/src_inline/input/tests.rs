use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::InputError;
use super::completeness::read_completeness;
use super::detections::{PathwayColumns, read_detection_table};
use super::genomes::read_genome_list;
use super::pathways::read_pathways;
use super::thresholds::read_cutoff_table;
use crate::model::thresholds::CutoffPair;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("cfp_cutoffs_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_cutoff_table_skips_header() {
    let dir = make_temp_dir();
    let path = dir.join("cutoffs.txt");
    write_file(
        &path,
        "MAG\tPWY\tEnzyme\n50 1 10\n70\t2\t20\n\n90 3 30\n",
    );

    let table = read_cutoff_table(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.resolve(65.0), CutoffPair::new(1.0, 10.0));
    assert_eq!(table.resolve(90.0), CutoffPair::new(3.0, 30.0));
    assert_eq!(table.resolve(10.0), CutoffPair::ZERO);
}

#[test]
fn test_cutoff_table_rejects_non_integer() {
    let dir = make_temp_dir();
    let path = dir.join("cutoffs.txt");
    write_file(&path, "MAG\tPWY\tEnzyme\n50 1.5 10\n");

    let err = read_cutoff_table(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse { line: 2, .. }));
}

#[test]
fn test_cutoff_table_rejects_short_row_and_empty_table() {
    let dir = make_temp_dir();
    let short = dir.join("short.txt");
    write_file(&short, "50 1\n");
    assert!(matches!(
        read_cutoff_table(&short),
        Err(InputError::Parse { .. })
    ));

    let empty = dir.join("empty.txt");
    write_file(&empty, "MAG\tPWY\tEnzyme\n");
    assert!(matches!(
        read_cutoff_table(&empty),
        Err(InputError::Parse { .. })
    ));
}

#[test]
fn test_missing_file_is_missing_input() {
    let dir = make_temp_dir();
    let err = read_completeness(&dir.join("absent.txt")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_completeness_order_and_duplicates() {
    let dir = make_temp_dir();
    let path = dir.join("mag_cpl.txt");
    write_file(&path, "MAG_B\t72.5\nMAG_A\t100\nMAG_B\t10\n");

    let cpl = read_completeness(&path).unwrap();
    let ids: Vec<&str> = cpl.genome_ids().collect();
    assert_eq!(ids, vec!["MAG_B", "MAG_A"]);
    assert_eq!(cpl.get("MAG_B").unwrap(), 10.0);
    assert_eq!(cpl.len(), 2);
    assert_eq!(cpl.get("MAG_A").unwrap(), 100.0);
}

#[test]
fn test_completeness_missing_key_and_bad_value() {
    let dir = make_temp_dir();
    let path = dir.join("mag_cpl.txt");
    write_file(&path, "MAG_A\t55.1\n");
    let cpl = read_completeness(&path).unwrap();
    assert!(matches!(
        cpl.get("MAG_Z"),
        Err(InputError::MissingKey { .. })
    ));

    let bad = dir.join("bad.txt");
    write_file(&bad, "Genome\tCompleteness\nMAG_A\t55.1\n");
    assert!(matches!(
        read_completeness(&bad),
        Err(InputError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_completeness_gz() {
    let dir = make_temp_dir();
    let path = dir.join("mag_cpl.txt.gz");
    write_gz(&path, "MAG_A\t88.0\nMAG_B\t42.25\n");

    let cpl = read_completeness(&path).unwrap();
    assert_eq!(cpl.len(), 2);
    assert_eq!(cpl.get("MAG_B").unwrap(), 42.25);
}

#[test]
fn test_pathways_alternatives_and_keys() {
    let dir = make_temp_dir();
    let path = dir.join("pathways.txt");
    write_file(
        &path,
        "Pwy\tKeyEnzyme\tPwyCpl\tKeyEnzymeCpl\n\
         CBB\tK01601,K01602\t80\t100\n\
         rTCA\tK15230,K15231\t75\t50\n\
         rTCA\tK15232\t75\t100\n\
         DC_4HB\tK01601,K01602\t60\t40\n",
    );

    let defs = read_pathways(&path).unwrap();
    assert_eq!(defs.len(), 4);

    let alts = defs.alternatives("rTCA");
    assert_eq!(alts.len(), 2);
    assert_eq!(alts[0], ["K15230".to_string(), "K15231".to_string()]);
    assert_eq!(alts[1], ["K15232".to_string()]);

    let keys: Vec<String> = defs.keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys[0], "CBB__|__K01601,K01602");
    assert_eq!(keys[3], "DC_4HB__|__K01601,K01602");
    assert_eq!(defs.definitions()[3].default_pathway_cutoff, 60.0);
    assert_eq!(defs.definitions()[3].default_key_enzyme_cutoff, 40.0);
}

#[test]
fn test_pathways_rejects_short_row() {
    let dir = make_temp_dir();
    let path = dir.join("pathways.txt");
    write_file(&path, "CBB\tK01601\t80\n");
    assert!(matches!(
        read_pathways(&path),
        Err(InputError::Parse { .. })
    ));
}

#[test]
fn test_genome_list() {
    let dir = make_temp_dir();
    let path = dir.join("genomes.txt");
    write_file(&path, "MAG_A\n\nMAG_C \n");
    assert_eq!(
        read_genome_list(&path).unwrap(),
        vec!["MAG_A".to_string(), "MAG_C".to_string()]
    );
}

#[test]
fn test_detection_header_stride() {
    let dir = make_temp_dir();
    let path = dir.join("detections.txt");
    write_file(
        &path,
        "Genome\tCBB__a\tCBB__b\tCBB__c\trTCA__a\trTCA__b\trTCA__c\n\
         MAG_A\tx\t0.9\t1\tx\t0.5\t0\n\
         MAG_B\tx\t0.1\t0\tx\t0.2\t\n",
    );

    let table = read_detection_table(&path).unwrap();
    assert_eq!(
        table.pathways,
        vec![
            PathwayColumns {
                pathway_id: "CBB".to_string(),
                completeness_col: 2,
                detected_col: 3,
            },
            PathwayColumns {
                pathway_id: "rTCA".to_string(),
                completeness_col: 5,
                detected_col: 6,
            },
        ]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].genome_id(), "MAG_A");
    // Trailing empty cell is kept.
    assert_eq!(table.rows[1].cells.len(), 7);
    assert_eq!(table.rows[1].line_no, 3);
}

#[test]
fn test_detection_header_duplicate_pathway() {
    let dir = make_temp_dir();
    let path = dir.join("detections.txt");
    write_file(
        &path,
        "Genome\tCBB__a\tCBB__b\tCBB__c\tCBB__d\tCBB__e\tCBB__f\n",
    );
    assert!(matches!(
        read_detection_table(&path),
        Err(InputError::Parse { line: 1, .. })
    ));
}
