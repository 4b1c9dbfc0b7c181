use clap::{CommandFactory, Parser};
use colored::Colorize;
use pve_inventory::cli::Cli;
use pve_inventory::report::{SEPARATOR, export, inventory, utilization};
use pve_inventory::{ClusterCredentials, ProxmoxClient, ProxmoxResult};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    if std::env::args().len() < 2 {
        let mut command = Cli::command();
        let _ = command.write_long_help(&mut std::io::stderr());
        eprintln!();
        std::process::exit(127);
    }

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "error:".red(), err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> ProxmoxResult<()> {
    let credentials = ClusterCredentials::load(&cli.cluster)?;
    let client = ProxmoxClient::connect(&credentials).await?;

    let nodes = inventory::collect_nodes(&client).await?;
    let names = inventory::node_names(&nodes);

    if cli.vminfo {
        let rows = export::collect_rows(&client, &names).await?;
        export::write_workbook(&rows, Path::new(&cli.file))?;
        return Ok(());
    }

    inventory::print_inventory(&nodes);

    let vms = client.cluster_vms().await?;
    let allocations = utilization::allocated_by_node(&names, &vms);
    println!("\n{}\n", SEPARATOR.yellow());
    utilization::print_cpu_allocation(&allocations);
    println!("\n{}\n", SEPARATOR.yellow());
    utilization::print_ram_allocation(&allocations);
    Ok(())
}
