use clap::{Arg, ArgAction, Command, arg, value_parser};

pub use radsim_core::consts::DIGEST_CMD;

use crate::common::{enzyme_args, input_arg, length_args};

pub fn create_digest_cli() -> Command {
    Command::new(DIGEST_CMD)
        .about("Digest every record of a FASTA file and write the resulting fragments.")
        .arg(input_arg())
        .args(enzyme_args())
        .args(length_args())
        .arg(
            arg!(--fasta <FASTA>)
                .required(false)
                .help("Write fragment sequences as FASTA to this path ('-' for stdout)"),
        )
        .arg(
            arg!(--bed <BED>)
                .required(false)
                .help("Write fragment intervals to this path ('-' for stdout)"),
        )
        .arg(
            arg!(--width <WIDTH>)
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Line width of FASTA output, 0 for one line per fragment [default: 80]"),
        )
        .arg(
            Arg::new("cut-bounds")
                .long("cut-bounds")
                .action(ArgAction::SetTrue)
                .help("Report fragments between the cut positions instead of the outer edges of the sites"),
        )
}
