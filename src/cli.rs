//! Command-line interface definition.

use clap::Parser;

/// Connects to a Proxmox cluster and reads node and VM characteristics
/// from the API. Use `--vminfo` to generate a spreadsheet from this data
/// and `-f` to point at the file you want written.
#[derive(Debug, Parser)]
#[command(name = "pve-inventory", version, about)]
pub struct Cli {
    /// Proxmox cluster name from the config file.
    #[arg(long, value_name = "CLUSTER")]
    pub cluster: String,

    /// Collect all VM info and generate a spreadsheet.
    #[arg(long)]
    pub vminfo: bool,

    /// File name to write the table to.
    #[arg(short = 'f', value_name = "example.xlsx", default_value = "vms.xlsx")]
    pub file: String,
}
