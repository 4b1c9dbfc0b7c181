//! Node inventory collection and console listing.

use crate::{
    ProxmoxClient,
    core::domain::{error::ProxmoxResult, model::cluster_resource::NodeResource},
    report::format_bytes,
};
use colored::Colorize;

/// Fetches the cluster's nodes, sorted lexicographically by name.
///
/// Every downstream consumer (aggregation, export) works off this order.
pub async fn collect_nodes(client: &ProxmoxClient) -> ProxmoxResult<Vec<NodeResource>> {
    let mut nodes = client.cluster_nodes().await?;
    nodes.sort_by(|a, b| a.node.cmp(&b.node));
    Ok(nodes)
}

/// Projects the node-name list out of a sorted node listing.
pub fn node_names(nodes: &[NodeResource]) -> Vec<String> {
    nodes.iter().map(|node| node.node.clone()).collect()
}

/// Prints the verbose per-node capacity listing.
pub fn print_inventory(nodes: &[NodeResource]) {
    println!("There are nodes in this cluster:");
    for node in nodes {
        println!(
            "\t{} --- {} CPU --- {}",
            node.node.green(),
            node.maxcpu.unwrap_or(0),
            format_bytes(node.maxmem.unwrap_or(0))
        );
    }
}
