//! Domain models for cluster-wide resource listings.
//!
//! The `/cluster/resources` endpoint returns a heterogeneous list filtered
//! by the `type` query parameter. Every query this crate issues passes an
//! explicit filter, so each listing deserializes into one concrete shape.

use serde::{Deserialize, Serialize};

/// A node as returned by `cluster/resources?type=node`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeResource {
    /// The node name (e.g., "pve1").
    pub node: String,
    /// Current node status (e.g., "online", "offline", "unknown").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// CPU usage percentage (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Maximum CPU count (number of cores/threads).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxcpu: Option<u32>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    /// Maximum memory in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
    /// Uptime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Unique resource identifier (e.g., "node/pve1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A QEMU virtual machine as returned by `cluster/resources?type=vm`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmResource {
    /// The VM identifier (unique per cluster).
    pub vmid: u32,
    /// Human-readable name (may be absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The node where this VM resides.
    pub node: String,
    /// Current status (e.g., "running", "stopped").
    pub status: String,
    /// CPU usage percentage (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Maximum CPU count allocated to the VM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxcpu: Option<u32>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    /// Maximum memory in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
    /// Uptime in seconds (if running).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Set to 1 for VM templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<u8>,
    /// Additional tags (if any).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl VmResource {
    /// True when the cluster reports the VM as powered on.
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}
