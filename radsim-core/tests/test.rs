use std::io::{BufRead, Write};
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::tempdir;

use radsim_core::output::{write_fragment_bed, write_fragment_fasta};
use radsim_core::utils::{get_dynamic_reader, get_dynamic_writer};
use radsim_core::{DigestError, Digestor, EnzymeCatalog, FastaRecord, Histogram, read_fasta};

#[fixture]
fn path_to_fasta() -> &'static str {
    "tests/data/digest.fa"
}

#[fixture]
fn path_to_bad_chars_fasta() -> &'static str {
    "tests/data/bad_chars.fa"
}

#[fixture]
fn path_to_non_utf8_fasta() -> &'static str {
    "tests/data/non_utf8.fa"
}

#[fixture]
fn path_to_catalog() -> &'static str {
    "tests/data/catalog.toml"
}

#[fixture]
fn digestor() -> Digestor {
    Digestor::from_catalog(&EnzymeCatalog::builtin(), "PstI", Some("EcoRV")).unwrap()
}

fn digest_to_bed(records: &[FastaRecord], digestor: &Digestor, mixed_ends: bool) -> Vec<String> {
    let mut buf = Vec::new();
    for record in records {
        for fragment in digestor
            .iter_fragments(&record.sequence, 1, 10000, mixed_ends)
            .unwrap()
        {
            write_fragment_bed(&mut buf, record, &fragment).unwrap();
        }
    }
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_read_fasta(path_to_fasta: &str) {
        let records: Vec<FastaRecord> = read_fasta(path_to_fasta)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["seq_pst1", "seq_pst1_ecorv", "no_sites"]);
        // wrapped sequence is joined back together
        assert_eq!(records[1].sequence, b"NNCTGCAGacgtaGATATCacgtCTGCAGNN");
    }

    #[rstest]
    fn test_digest_fasta_to_bed(path_to_fasta: &str, digestor: Digestor) {
        let records: Vec<FastaRecord> = read_fasta(path_to_fasta)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        let lines = digest_to_bed(&records, &digestor, false);
        assert_eq!(
            lines,
            vec![
                "seq_pst1\t2\t19\t2[PstI]_19[PstI]",
                "seq_pst1\t13\t29\t13[PstI]_29[PstI]",
                "seq_pst1_ecorv\t2\t19\t2[PstI]_19[EcoRV]",
                "seq_pst1_ecorv\t13\t29\t13[EcoRV]_29[PstI]",
            ]
        );
    }

    #[rstest]
    fn test_digest_fasta_ddrad(path_to_fasta: &str, digestor: Digestor) {
        let records: Vec<FastaRecord> = read_fasta(path_to_fasta)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        let lines = digest_to_bed(&records, &digestor, true);
        assert_eq!(
            lines,
            vec![
                "seq_pst1_ecorv\t2\t19\t2[PstI]_19[EcoRV]",
                "seq_pst1_ecorv\t13\t29\t13[EcoRV]_29[PstI]",
            ]
        );
    }

    #[rstest]
    fn test_bad_record_does_not_stop_digest(path_to_bad_chars_fasta: &str, digestor: Digestor) {
        let mut digested = Vec::new();
        let mut skipped = Vec::new();

        for record in read_fasta(path_to_bad_chars_fasta).unwrap() {
            let record = record.unwrap();
            match digestor.iter_fragments(&record.sequence, 1, 10000, false) {
                Ok(fragments) => digested.push((record.name.clone(), fragments.count())),
                Err(DigestError::InvalidSequence { position, .. }) => {
                    skipped.push((record.name.clone(), position))
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(
            digested,
            vec![("seq_pst1".to_string(), 2), ("seq_pst1_ecorv".to_string(), 2)]
        );
        assert_eq!(skipped, vec![("bad_chars".to_string(), 6)]);
    }

    #[rstest]
    fn test_non_utf8_record_does_not_stop_digest(
        path_to_non_utf8_fasta: &str,
        digestor: Digestor,
    ) {
        let mut digested = Vec::new();
        let mut skipped = Vec::new();

        for record in read_fasta(path_to_non_utf8_fasta).unwrap() {
            let record = record.unwrap();
            match digestor.iter_fragments(&record.sequence, 1, 10000, false) {
                Ok(fragments) => digested.push((record.name.clone(), fragments.count())),
                Err(DigestError::InvalidSequence {
                    position,
                    character,
                }) => skipped.push((record.name.clone(), position, character)),
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(digested, vec![("seq_pst1".to_string(), 2)]);
        assert_eq!(skipped, vec![("bad_utf8".to_string(), 6, '\u{ff}')]);
    }

    #[rstest]
    fn test_digest_gzipped_fasta_to_fasta(path_to_fasta: &str, digestor: Digestor) {
        let dir = tempdir().unwrap();

        // gzip the input
        let gz_input = dir.path().join("digest.fa.gz");
        {
            let mut writer = get_dynamic_writer(gz_input.to_str().unwrap()).unwrap();
            for line in get_dynamic_reader(Path::new(path_to_fasta)).unwrap().lines() {
                writeln!(writer, "{}", line.unwrap()).unwrap();
            }
            writer.finish().unwrap();
        }

        let output = dir.path().join("fragments.fa");
        {
            let mut writer = get_dynamic_writer(output.to_str().unwrap()).unwrap();
            for record in read_fasta(gz_input.to_str().unwrap()).unwrap() {
                let record = record.unwrap();
                for fragment in digestor
                    .iter_fragments(&record.sequence, 1, 10000, true)
                    .unwrap()
                {
                    write_fragment_fasta(&mut writer, &record, &fragment, 10).unwrap();
                }
            }
            writer.finish().unwrap();
        }

        let got = std::fs::read_to_string(output).unwrap();
        assert_eq!(
            got,
            ">seq_pst1_ecorv_2_19\nCTGCAGacgt\naGATATC\n>seq_pst1_ecorv_13_29\nGATATCacgt\nCTGCAG\n"
        );
    }

    #[rstest]
    fn test_catalog_file(path_to_catalog: &str) {
        let catalog = EnzymeCatalog::try_from(Path::new(path_to_catalog)).unwrap();
        assert_eq!(catalog.len(), 3);

        let digestor = Digestor::from_catalog(&catalog, "pstI", Some("ecorv")).unwrap();
        let seq = b"NNCTGCAGacgtaGATATCacgtCTGCAGNN";
        assert_eq!(digestor.iter_fragments(seq, 1, 100, true).unwrap().count(), 2);

        let missing = Digestor::from_catalog(&catalog, "PstI", Some("MspI"));
        assert!(matches!(missing, Err(DigestError::UnknownEnzyme(_))));
    }

    #[rstest]
    fn test_histogram_of_fragment_lengths(path_to_fasta: &str, digestor: Digestor) {
        let mut lengths = Vec::new();
        for record in read_fasta(path_to_fasta).unwrap() {
            let record = record.unwrap();
            lengths.extend(
                digestor
                    .iter_fragments(&record.sequence, 1, 10000, false)
                    .unwrap()
                    .map(|f| f.len()),
            );
        }

        let hist = Histogram::from_lengths(&lengths, 100);
        let mut buf = Vec::new();
        hist.write_tsv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1\t16-16\t2\n2\t17-17\t2\n");
    }
}
