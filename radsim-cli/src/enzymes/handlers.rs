use anyhow::{Context, Result};
use clap::ArgMatches;

use radsim_core::consts::DEFAULT_OUT;
use radsim_core::output::write_enzyme_list;
use radsim_core::utils::get_dynamic_writer;

use crate::common::load_catalog;

pub fn run_enzymes(matches: &ArgMatches) -> Result<()> {
    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let catalog = load_catalog(matches)?;

    let mut writer = get_dynamic_writer(output)?;
    write_enzyme_list(&mut writer, &catalog)?;
    writer.finish().context("Failed to write enzyme list")?;

    Ok(())
}
