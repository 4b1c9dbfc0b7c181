//! Proxmox VE cluster inventory and utilization reporting.
//!
//! The crate connects to a cluster's management API, lists node capacity,
//! sums per-node allocation over running virtual machines, and can export
//! a per-VM spreadsheet.
//!
//! # Examples
//!
//! ```no_run
//! use pve_inventory::{ClusterCredentials, ProxmoxClient, ProxmoxResult, report};
//!
//! #[tokio::main]
//! async fn main() -> ProxmoxResult<()> {
//!     let credentials = ClusterCredentials::load("lab")?;
//!     let client = ProxmoxClient::connect(&credentials).await?;
//!
//!     let nodes = report::inventory::collect_nodes(&client).await?;
//!     report::inventory::print_inventory(&nodes);
//!     Ok(())
//! }
//! ```

mod auth;
mod core;

pub mod cli;
pub mod config;
pub mod report;

#[cfg(test)]
mod tests;

pub use crate::config::ClusterCredentials;
pub use crate::core::domain::error::{ProxmoxError, ProxmoxResult, ValidationError};
pub use crate::core::domain::model::{
    auth::Auth,
    cluster_resource::{NodeResource, VmResource},
    connection::Connection,
    guest_agent::{GuestInterface, GuestIpAddress, GuestNetworkInterfaces},
    vm_config::VmConfig,
};

use crate::core::infrastructure::api_client::ApiClient;

/// A client for the reporting queries this tool issues against one
/// Proxmox VE cluster.
pub struct ProxmoxClient {
    pub(crate) api: ApiClient,
}

impl ProxmoxClient {
    /// Connects and authenticates using configured cluster credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be resolved from the
    /// credentials, the server is unreachable, or authentication fails.
    pub async fn connect(credentials: &ClusterCredentials) -> ProxmoxResult<Self> {
        let connection = credentials.connection()?;
        let mut api = ApiClient::new(connection)?;
        api.login().await?;
        Ok(Self { api })
    }

    /// Returns `true` if the client holds a ticket.
    pub fn is_authenticated(&self) -> bool {
        self.api.is_authenticated()
    }

    /// Lists node resources cluster-wide.
    pub async fn cluster_nodes(&self) -> ProxmoxResult<Vec<NodeResource>> {
        self.api.get("cluster/resources?type=node").await
    }

    /// Lists VM resources cluster-wide.
    pub async fn cluster_vms(&self) -> ProxmoxResult<Vec<VmResource>> {
        self.api.get("cluster/resources?type=vm").await
    }

    /// Fetches one VM's configuration.
    pub async fn vm_config(&self, node: &str, vmid: u32) -> ProxmoxResult<VmConfig> {
        self.api
            .get(&format!("nodes/{node}/qemu/{vmid}/config"))
            .await
    }

    /// Queries the QEMU guest agent for the VM's network interfaces.
    ///
    /// # Errors
    ///
    /// Fails when the agent is not installed or not running inside the
    /// guest; callers decide whether that is fatal.
    pub async fn guest_network_interfaces(
        &self,
        node: &str,
        vmid: u32,
    ) -> ProxmoxResult<Vec<GuestInterface>> {
        let listing: GuestNetworkInterfaces = self
            .api
            .get(&format!("nodes/{node}/qemu/{vmid}/agent/network-get-interfaces"))
            .await?;
        Ok(listing.result)
    }
}
