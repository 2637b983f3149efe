use clap::{Command, arg, value_parser};

pub use radsim_core::consts::SITES_CMD;

use crate::common::{enzyme_args, input_arg};

pub fn create_sites_cli() -> Command {
    Command::new(SITES_CMD)
        .about("List every recognition site of the chosen enzymes as intervals.")
        .arg(input_arg())
        .args(enzyme_args())
        .arg(
            arg!(--window <WINDOW>)
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Pad each site by this many bases on both sides [default: 0]"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
