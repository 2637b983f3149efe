use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info, warn};

use radsim_core::DigestError;
use radsim_core::consts::{DEFAULT_OUT, DEFAULT_SITE_WINDOW};
use radsim_core::output::write_site_bed;
use radsim_core::read_fasta;
use radsim_core::utils::get_dynamic_writer;

use crate::common::{build_digestor, load_catalog, progress_spinner};

pub fn run_sites(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;

    let window = *matches
        .get_one::<usize>("window")
        .unwrap_or(&DEFAULT_SITE_WINDOW);

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let catalog = load_catalog(matches)?;
    let digestor = build_digestor(matches, &catalog)?;

    let mut writer = get_dynamic_writer(output)?;
    let spinner = progress_spinner("Scanning records...")?;

    let mut total = 0;
    let mut skipped = 0;
    for record in read_fasta(input)? {
        let record = record?;
        spinner.inc(1);

        let sites = match digestor.sites(&record.sequence) {
            Ok(sites) => sites,
            Err(DigestError::InvalidSequence {
                position,
                character,
            }) => {
                warn!(
                    "Skipping {}: invalid character {:?} at position {}",
                    record.name, character, position
                );
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for site in sites.iter() {
            write_site_bed(&mut writer, &record, site, window)?;
        }

        debug!("{}: {} sites", record.name, sites.len());
        total += sites.len();
    }

    spinner.finish_and_clear();
    writer.finish().context("Failed to write sites")?;

    info!("Found {} recognition sites", total);
    if skipped > 0 {
        warn!(
            "Skipped {} records containing non-nucleotide characters",
            skipped
        );
    }

    Ok(())
}
