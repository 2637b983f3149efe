//! Arguments and setup shared by the subcommands that digest sequences.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg, value_parser};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use radsim_core::consts::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use radsim_core::{DigestError, Digestor, EnzymeCatalog, FastaRecord, Fragment, read_fasta};

pub fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .help("FASTA file to digest (plain or .gz, '-' for stdin)")
}

pub fn enzyme_args() -> [Arg; 2] {
    [
        arg!(-e --enzyme <ENZYME>)
            .required(true)
            .help("Primary restriction enzyme"),
        arg!(-r --enzyme2 <ENZYME2>)
            .required(false)
            .help("Secondary restriction enzyme (double digest)"),
    ]
}

pub fn length_args() -> [Arg; 3] {
    [
        arg!(--min <MIN>)
            .required(false)
            .value_parser(value_parser!(usize))
            .help("Shortest fragment to report, inclusive [default: 1]"),
        arg!(--max <MAX>)
            .required(false)
            .value_parser(value_parser!(usize))
            .help("Longest fragment to report, inclusive [default: 10000]"),
        arg!(--ddrad "Only report fragments cut by a different enzyme at each end"),
    ]
}

///
/// The built-in enzymes, extended by the `--catalog` file if one was given.
///
pub fn load_catalog(matches: &ArgMatches) -> Result<EnzymeCatalog> {
    let mut catalog = EnzymeCatalog::builtin();

    if let Some(path) = matches.get_one::<String>("catalog") {
        let added = catalog.extend_from_file(Path::new(path))?;
        info!("Added {} enzymes from {}", added, path);
    }

    Ok(catalog)
}

pub fn build_digestor(matches: &ArgMatches, catalog: &EnzymeCatalog) -> Result<Digestor> {
    let primary = matches
        .get_one::<String>("enzyme")
        .context("A primary enzyme is required.")?;
    let secondary = matches.get_one::<String>("enzyme2").map(String::as_str);

    let digestor = Digestor::from_catalog(catalog, primary, secondary)
        .context("Could not set up the digest")?;

    match digestor.is_double_digest() {
        true => info!(
            "Double digest with {} ({}) and {} ({})",
            digestor.primary(),
            digestor.primary().pattern(),
            digestor.secondary(),
            digestor.secondary().pattern()
        ),
        false => info!(
            "Single digest with {} ({})",
            digestor.primary(),
            digestor.primary().pattern()
        ),
    }

    Ok(digestor)
}

/// Read `--min`/`--max` and reject an empty range up front.
pub fn length_range(matches: &ArgMatches) -> Result<(usize, usize)> {
    let min = *matches
        .get_one::<usize>("min")
        .unwrap_or(&DEFAULT_MIN_LENGTH);
    let max = *matches
        .get_one::<usize>("max")
        .unwrap_or(&DEFAULT_MAX_LENGTH);

    if min > max {
        return Err(DigestError::InvalidRange { min, max }.into());
    }

    Ok((min, max))
}

pub fn progress_spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({pos} records)")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message(message.to_string());
    Ok(spinner)
}

/// Counts collected over one pass through the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigestSummary {
    pub records: usize,
    pub skipped: usize,
    pub fragments: usize,
}

impl DigestSummary {
    pub fn log(&self) {
        info!(
            "{} fragments from {} records",
            self.fragments, self.records
        );
        if self.skipped > 0 {
            warn!(
                "Skipped {} records containing non-nucleotide characters",
                self.skipped
            );
        }
    }
}

///
/// Digest every record of `input`, handing each accepted fragment to `on_fragment`.
///
/// Records with characters outside the nucleotide alphabet are skipped with a
/// warning; any other error aborts the run.
///
/// # Arguments
/// - input: FASTA path, or `-` for stdin
/// - digestor: the configured digest
/// - min_length: shortest fragment to keep
/// - max_length: longest fragment to keep
/// - ddrad: only keep fragments with different enzymes at either end
/// - on_fragment: called once per fragment, in order
pub fn digest_records<F>(
    input: &str,
    digestor: &Digestor,
    min_length: usize,
    max_length: usize,
    ddrad: bool,
    mut on_fragment: F,
) -> Result<DigestSummary>
where
    F: FnMut(&FastaRecord, &Fragment) -> Result<()>,
{
    let mut summary = DigestSummary::default();
    let spinner = progress_spinner("Digesting records...")?;

    for record in read_fasta(input)? {
        let record = record?;
        spinner.inc(1);

        let fragments = match digestor.iter_fragments(&record.sequence, min_length, max_length, ddrad)
        {
            Ok(fragments) => fragments,
            Err(DigestError::InvalidSequence {
                position,
                character,
            }) => {
                warn!(
                    "Skipping {}: invalid character {:?} at position {}",
                    record.name, character, position
                );
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let mut count = 0;
        for fragment in fragments {
            on_fragment(&record, &fragment)?;
            count += 1;
        }

        debug!("{}: {} fragments", record.name, count);
        summary.records += 1;
        summary.fragments += count;
    }

    spinner.finish_and_clear();
    Ok(summary)
}
