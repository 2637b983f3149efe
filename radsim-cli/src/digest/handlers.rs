use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::warn;

use radsim_core::FragmentBounds;
use radsim_core::consts::DEFAULT_FASTA_WIDTH;
use radsim_core::output::{write_fragment_bed, write_fragment_fasta};
use radsim_core::utils::get_dynamic_writer;

use crate::common::{build_digestor, digest_records, length_range, load_catalog};

pub fn run_digest(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;

    let fasta_out = matches.get_one::<String>("fasta");
    let bed_out = matches.get_one::<String>("bed");

    match (fasta_out, bed_out) {
        (None, None) => bail!("No output requested: pass --fasta and/or --bed"),
        (Some(f), Some(b)) if f == "-" && b == "-" => {
            bail!("--fasta and --bed cannot both write to stdout")
        }
        _ => {}
    }

    let width = *matches
        .get_one::<usize>("width")
        .unwrap_or(&DEFAULT_FASTA_WIDTH);
    let (min_length, max_length) = length_range(matches)?;
    let ddrad = matches.get_flag("ddrad");
    let bounds = match matches.get_flag("cut-bounds") {
        true => FragmentBounds::Cuts,
        false => FragmentBounds::Sites,
    };

    let catalog = load_catalog(matches)?;
    let digestor = build_digestor(matches, &catalog)?.with_bounds(bounds);

    if ddrad && !digestor.is_double_digest() {
        warn!("--ddrad with a single enzyme: no fragment can have mixed ends");
    }

    let mut fasta_writer = fasta_out.map(|p| get_dynamic_writer(p)).transpose()?;
    let mut bed_writer = bed_out.map(|p| get_dynamic_writer(p)).transpose()?;

    let summary = digest_records(
        input,
        &digestor,
        min_length,
        max_length,
        ddrad,
        |record, fragment| {
            if let Some(writer) = fasta_writer.as_mut() {
                write_fragment_fasta(writer, record, fragment, width)?;
            }
            if let Some(writer) = bed_writer.as_mut() {
                write_fragment_bed(writer, record, fragment)?;
            }
            Ok(())
        },
    )?;

    if let Some(writer) = fasta_writer {
        writer.finish().context("Failed to write FASTA output")?;
    }
    if let Some(writer) = bed_writer {
        writer.finish().context("Failed to write interval output")?;
    }

    summary.log();

    Ok(())
}
