use std::io::BufRead;
use std::io::{BufReader, Read};

use anyhow::{Context, Result};

use crate::utils::get_dynamic_reader_w_stdin;

/// A single FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First word of the header line
    pub name: String,
    /// Remainder of the header line, if any
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

///
/// Streams records out of a FASTA file one at a time.
///
/// Sequence lines may be wrapped at any width; whitespace inside sequence
/// lines is dropped. Blank lines and `;` comment lines are skipped.
///
/// Sequence bytes are passed through as read, so non-nucleotide (or non-UTF-8)
/// bytes are left for the digest to reject one record at a time.
///
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    line_number: usize,
    next_header: Option<(String, usize)>,
    finished: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> FastaReader<R> {
        FastaReader {
            reader,
            line: Vec::new(),
            line_number: 0,
            next_header: None,
            finished: false,
        }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut self.line)
            .with_context(|| format!("Failed to read FASTA line {}", self.line_number + 1))?;
        self.line_number += 1;
        Ok(bytes_read > 0)
    }

    fn first_header(&mut self) -> Result<Option<(String, usize)>> {
        while self.read_line()? {
            let line = self.line.trim_ascii();
            if line.is_empty() || line.starts_with(b";") {
                continue;
            }
            match line.strip_prefix(b">") {
                Some(header) => {
                    return Ok(Some((
                        String::from_utf8_lossy(header).into_owned(),
                        self.line_number,
                    )));
                }
                None => anyhow::bail!(
                    "Invalid FASTA: expected a '>' header at line {}, found: {}",
                    self.line_number,
                    String::from_utf8_lossy(line)
                ),
            }
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<FastaRecord>> {
        let (header, header_line) = match self.next_header.take() {
            Some(header) => header,
            None => match self.first_header()? {
                Some(header) => header,
                None => return Ok(None),
            },
        };

        let mut sequence = Vec::new();
        loop {
            if !self.read_line()? {
                self.finished = true;
                break;
            }
            let line = self.line.trim_ascii_end();
            if let Some(next) = line.strip_prefix(b">") {
                self.next_header =
                    Some((String::from_utf8_lossy(next).into_owned(), self.line_number));
                break;
            }
            if line.starts_with(b";") {
                continue;
            }
            sequence.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
        }

        let header = header.trim();
        let mut parts = header.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_string();
        if name.is_empty() {
            anyhow::bail!("FASTA record at line {} is missing a name", header_line);
        }
        let description = parts
            .next()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Some(FastaRecord {
            name,
            description,
            sequence,
        }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                self.next_header = None;
                Some(Err(e))
            }
        }
    }
}

///
/// Open a FASTA file (optionally gzipped, or `-` for stdin) for streaming.
///
/// # Arguments
/// - file_path: path to the FASTA file
pub fn read_fasta(file_path: &str) -> Result<FastaReader<BufReader<Box<dyn Read>>>> {
    let reader = get_dynamic_reader_w_stdin(file_path)?;
    Ok(FastaReader::new(reader))
}
