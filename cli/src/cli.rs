use anyhow::{Context, Result};
use armada_lib::{regions::RegionTable, terraform};
use clap::ArgMatches;
use log::info;

pub(crate) fn generate(matches: &ArgMatches) -> Result<()> {
    let nodes: i64 = matches.value_of_t("nodes")?;
    let message_size: String = matches.value_of_t_or_exit("message-size");
    let message_rate: String = matches.value_of_t_or_exit("message-rate");

    let table = RegionTable::aws();
    info!(
        "generate {} for {} of {} regions",
        terraform::CONFIG_FILE,
        nodes.clamp(0, table.len() as i64),
        table.len()
    );

    let document = terraform::generate_config(&table, nodes, &message_size, &message_rate)
        .context("failed to assemble the terraform config")?;
    terraform::write_config(&document)?;
    Ok(())
}
