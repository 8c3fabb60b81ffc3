//! Assembles the fleet config: providers prelude plus one block per node.

use std::fs;

use log::info;

use crate::error::DeployError;
use crate::regions::RegionTable;
use crate::template::{NodeBlock, BENCH_PORT};

pub const PROVIDERS_FILE: &str = "providers.txt";
pub const CONFIG_FILE: &str = "main.tf";

/// Terraform list literal naming the instance of every region in the table.
///
/// The list spans the whole table, not the provisioned subset: a config
/// generated with fewer nodes than regions references instances that are
/// never created. Downstream tooling relies on this shape, so it stays.
pub fn depends_on(table: &RegionTable) -> String {
    let instances: Vec<String> = table
        .regions()
        .map(|region| format!("aws_instance.instance-{}", region))
        .collect();
    format!("[{}]", instances.join(", "))
}

/// Space-joined peer endpoints for `region`: every other region in the
/// table, again not limited to the provisioned subset. The addresses are
/// interpolations terraform resolves once the instances are up.
pub fn peers_addrs(table: &RegionTable, region: &str) -> String {
    table
        .regions()
        .filter(|other| *other != region)
        .map(|other| {
            format!(
                "${{aws_instance.instance-{}.public_ip}}:{}",
                other, BENCH_PORT
            )
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render the per-node blocks for the first `node_count` regions in sorted
/// order, assigning ids from 0. Counts past the table size are capped and
/// counts of zero or less render nothing.
pub fn render_nodes(
    table: &RegionTable,
    node_count: i64,
    message_size: &str,
    message_rate: &str,
) -> String {
    let depends_on = depends_on(table);
    let mut merged = String::new();

    for (id, &(region, ami)) in table.entries().iter().enumerate() {
        if id as i64 >= node_count {
            break;
        }
        let peers = peers_addrs(table, region);
        merged.push_str(
            &NodeBlock {
                region,
                ami,
                id,
                message_size,
                message_rate,
                depends_on: &depends_on,
                peers_addrs: &peers,
            }
            .to_string(),
        );
    }

    merged
}

/// Prelude bytes followed immediately by the rendered blocks, no separator.
pub fn assemble(prelude: Vec<u8>, blocks: &str) -> Vec<u8> {
    let mut document = prelude;
    document.extend_from_slice(blocks.as_bytes());
    document
}

/// Build the full config document, reading the providers prelude from
/// `providers.txt` in the working directory.
pub fn generate_config(
    table: &RegionTable,
    node_count: i64,
    message_size: &str,
    message_rate: &str,
) -> Result<Vec<u8>, DeployError> {
    info!("read prelude from {}", PROVIDERS_FILE);
    let prelude = fs::read(PROVIDERS_FILE).map_err(|source| DeployError::ReadPrelude {
        path: PROVIDERS_FILE,
        source,
    })?;

    let blocks = render_nodes(table, node_count, message_size, message_rate);
    Ok(assemble(prelude, &blocks))
}

/// Overwrite `main.tf` with the document. No append, no backup.
pub fn write_config(document: &[u8]) -> Result<(), DeployError> {
    info!("write {} ({} bytes)", CONFIG_FILE, document.len());
    fs::write(CONFIG_FILE, document).map_err(|source| DeployError::WriteConfig {
        path: CONFIG_FILE,
        source,
    })
}
