use clap::{Command, arg, value_parser};

pub use radsim_core::consts::HIST_CMD;

use crate::common::{enzyme_args, input_arg, length_args};

pub fn create_hist_cli() -> Command {
    Command::new(HIST_CMD)
        .about("Print a histogram of fragment lengths for a digest.")
        .arg(input_arg())
        .args(enzyme_args())
        .args(length_args())
        .arg(
            arg!(--bins <BINS>)
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Number of bins [default: 100]"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
