use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use radsim_core::Histogram;
use radsim_core::consts::{DEFAULT_HIST_BINS, DEFAULT_OUT};
use radsim_core::utils::get_dynamic_writer;

use crate::common::{build_digestor, digest_records, length_range, load_catalog};

pub fn run_hist(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;

    let n_bins = *matches
        .get_one::<usize>("bins")
        .unwrap_or(&DEFAULT_HIST_BINS);

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let (min_length, max_length) = length_range(matches)?;
    let ddrad = matches.get_flag("ddrad");

    let catalog = load_catalog(matches)?;
    let digestor = build_digestor(matches, &catalog)?;

    let mut lengths: Vec<usize> = Vec::new();
    let summary = digest_records(
        input,
        &digestor,
        min_length,
        max_length,
        ddrad,
        |_, fragment| {
            lengths.push(fragment.len());
            Ok(())
        },
    )?;
    summary.log();

    let histogram = Histogram::from_lengths(&lengths, n_bins);
    if histogram.is_empty() {
        warn!("No fragments to bin");
    } else {
        info!(
            "{} fragments in {} bins",
            histogram.total(),
            histogram.bins().len()
        );
    }

    let mut writer = get_dynamic_writer(output)?;
    histogram.write_tsv(&mut writer)?;
    writer.finish().context("Failed to write histogram")?;

    Ok(())
}
