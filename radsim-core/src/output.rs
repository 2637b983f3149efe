//! Text renderings of digestion results.
//!
//! All writers take any [`Write`] and emit complete lines, so records can be
//! streamed straight to a file or stdout as they are digested.

use std::io::{self, Write};

use crate::catalog::EnzymeCatalog;
use crate::fasta::FastaRecord;
use crate::fragment::Fragment;
use crate::sites::SiteOccurrence;

/// The name column of a fragment interval: `{lhs}[{lhs_enzyme}]_{rhs}[{rhs_enzyme}]`.
pub fn fragment_label(fragment: &Fragment) -> String {
    fragment.to_string()
}

///
/// Write a fragment as a FASTA record named `{record}_{lhs}_{rhs}`, wrapping the
/// sequence at `width` columns.
///
/// # Arguments
/// - writer: where to write
/// - record: the record the fragment was cut from
/// - fragment: the fragment
/// - width: line width of the sequence, `0` disables wrapping
pub fn write_fragment_fasta<W: Write>(
    writer: &mut W,
    record: &FastaRecord,
    fragment: &Fragment,
    width: usize,
) -> io::Result<()> {
    writeln!(writer, ">{}_{}_{}", record.name, fragment.lhs, fragment.rhs)?;

    let sequence = fragment.slice(&record.sequence);
    let width = if width == 0 { sequence.len().max(1) } else { width };
    for chunk in sequence.chunks(width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}

///
/// Write a fragment as a tab-separated interval line:
/// `record`, `lhs`, `rhs`, and the fragment label.
///
pub fn write_fragment_bed<W: Write>(
    writer: &mut W,
    record: &FastaRecord,
    fragment: &Fragment,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{}\t{}",
        record.name,
        fragment.lhs,
        fragment.rhs,
        fragment_label(fragment)
    )
}

///
/// Write a recognition site as a tab-separated interval line, padded by `window`
/// bases on each side and clamped to the record.
///
pub fn write_site_bed<W: Write>(
    writer: &mut W,
    record: &FastaRecord,
    site: &SiteOccurrence,
    window: usize,
) -> io::Result<()> {
    let start = site.position.saturating_sub(window);
    let end = site
        .site_end()
        .saturating_add(window)
        .min(record.sequence.len());

    writeln!(
        writer,
        "{}\t{}\t{}\t{}",
        record.name, start, end, site.enzyme
    )
}

/// Write every enzyme in the catalog as `name\tpattern`.
pub fn write_enzyme_list<W: Write>(writer: &mut W, catalog: &EnzymeCatalog) -> io::Result<()> {
    for enzyme in catalog.iter() {
        writeln!(writer, "{}\t{}", enzyme.name(), enzyme.pattern())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enzyme::EnzymeSpec;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn record() -> FastaRecord {
        FastaRecord {
            name: "chr1".to_string(),
            description: None,
            sequence: b"NNCTGCAGacgtaGATATCacgtCTGCAGNN".to_vec(),
        }
    }

    fn render<F: Fn(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[rstest]
    fn test_fragment_fasta(record: FastaRecord) {
        let pst1 = EnzymeSpec::new("PstI", "CTGCAG", 5).unwrap();
        let eco_rv = EnzymeSpec::new("EcoRV", "GATATC", 3).unwrap();
        let frag = Fragment {
            lhs: 2,
            rhs: 19,
            lhs_enzyme: &pst1,
            rhs_enzyme: &eco_rv,
        };

        let out = render(|w| write_fragment_fasta(w, &record, &frag, 80));
        assert_eq!(out, ">chr1_2_19\nCTGCAGacgtaGATATC\n");

        let out = render(|w| write_fragment_fasta(w, &record, &frag, 5));
        assert_eq!(out, ">chr1_2_19\nCTGCA\nGacgt\naGATA\nTC\n");

        let out = render(|w| write_fragment_fasta(w, &record, &frag, 0));
        assert_eq!(out, ">chr1_2_19\nCTGCAGacgtaGATATC\n");
    }

    #[rstest]
    fn test_fragment_bed(record: FastaRecord) {
        let pst1 = EnzymeSpec::new("PstI", "CTGCAG", 5).unwrap();
        let eco_rv = EnzymeSpec::new("EcoRV", "GATATC", 3).unwrap();
        let frag = Fragment {
            lhs: 13,
            rhs: 29,
            lhs_enzyme: &eco_rv,
            rhs_enzyme: &pst1,
        };

        let out = render(|w| write_fragment_bed(w, &record, &frag));
        assert_eq!(out, "chr1\t13\t29\t13[EcoRV]_29[PstI]\n");
    }

    #[rstest]
    #[case(0, "chr1\t2\t8\tPstI\n")]
    #[case(2, "chr1\t0\t10\tPstI\n")]
    fn test_site_bed_window(record: FastaRecord, #[case] window: usize, #[case] expected: &str) {
        let pst1 = EnzymeSpec::new("PstI", "CTGCAG", 5).unwrap();
        let site = SiteOccurrence {
            position: 2,
            enzyme: &pst1,
        };
        let out = render(|w| write_site_bed(w, &record, &site, window));
        assert_eq!(out, expected);
    }

    #[rstest]
    fn test_site_bed_clamped_to_record(record: FastaRecord) {
        let pst1 = EnzymeSpec::new("PstI", "CTGCAG", 5).unwrap();
        let site = SiteOccurrence {
            position: 23,
            enzyme: &pst1,
        };
        let out = render(|w| write_site_bed(w, &record, &site, 10));
        assert_eq!(out, "chr1\t13\t31\tPstI\n");
    }

    #[rstest]
    fn test_enzyme_list() {
        let catalog = EnzymeCatalog::builtin();
        let out = render(|w| write_enzyme_list(w, &catalog));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), catalog.len());
        assert!(lines.contains(&"PstI\tCTGCAG"));
        assert!(lines.contains(&"EcoRV\tGATATC"));
    }
}
