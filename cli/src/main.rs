mod cli;

use anyhow::Result;
use clap::{App, Arg};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let matches = App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            Arg::new("nodes")
                .help("How many instances to launch, one per region in sorted order")
                .takes_value(true)
                .required(true)
                .value_name("COUNT"),
        )
        .arg(
            Arg::new("message-size")
                .help("--message-size handed to every runner, verbatim")
                .takes_value(true)
                .required(true)
                .value_name("SIZE"),
        )
        .arg(
            Arg::new("message-rate")
                .help("--message-rate handed to every runner, verbatim")
                .takes_value(true)
                .required(true)
                .value_name("RATE"),
        )
        .get_matches();

    cli::generate(&matches)
}
