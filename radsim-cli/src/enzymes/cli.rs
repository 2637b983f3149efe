use clap::{Command, arg};

pub use radsim_core::consts::ENZYMES_CMD;

pub fn create_enzymes_cli() -> Command {
    Command::new(ENZYMES_CMD)
        .about("List the available restriction enzymes and their recognition sites.")
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
