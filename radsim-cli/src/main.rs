mod common;
mod digest;
mod enzymes;
mod hist;
mod sites;

use anyhow::Result;
use clap::{Command, arg};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "radsim";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("In-silico restriction digestion for planning RAD-seq, GBS and ddRAD experiments.")
        .subcommand_required(true)
        .arg(
            arg!(--catalog <CATALOG>)
                .required(false)
                .global(true)
                .help("TOML file of extra enzymes (adds to or overrides the built-in table)"),
        )
        .subcommand(digest::cli::create_digest_cli())
        .subcommand(hist::cli::create_hist_cli())
        .subcommand(enzymes::cli::create_enzymes_cli())
        .subcommand(sites::cli::create_sites_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // DIGEST
        //
        Some((digest::cli::DIGEST_CMD, matches)) => {
            digest::handlers::run_digest(matches)?;
        }

        //
        // FRAGMENT LENGTH HISTOGRAM
        //
        Some((hist::cli::HIST_CMD, matches)) => {
            hist::handlers::run_hist(matches)?;
        }

        //
        // ENZYME LISTING
        //
        Some((enzymes::cli::ENZYMES_CMD, matches)) => {
            enzymes::handlers::run_enzymes(matches)?;
        }

        //
        // RECOGNITION SITES
        //
        Some((sites::cli::SITES_CMD, matches)) => {
            sites::handlers::run_sites(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_catalog_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["radsim", "enzymes", "--catalog", "extra.toml"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            sub.get_one::<String>("catalog").map(String::as_str),
            Some("extra.toml")
        );
    }

    #[test]
    fn test_digest_requires_enzyme() {
        let result = build_parser().try_get_matches_from(["radsim", "digest", "genome.fa"]);
        assert!(result.is_err());
    }
}
