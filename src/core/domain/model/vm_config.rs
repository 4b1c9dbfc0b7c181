//! Domain model for per-VM configuration.

use serde::{Deserialize, Serialize};

/// VM configuration from `nodes/{node}/qemu/{vmid}/config`.
///
/// Disk attachments are free-text values in the form
/// `<storage>:<volume>,size=<value>[,<option>...]`, e.g.
/// `local-lvm:vm-100-disk-0,size=32G`. Every field is optional: the
/// endpoint only returns keys that are set on the VM.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmConfig {
    /// VM name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of CPU sockets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets: Option<u32>,
    /// Number of cores per socket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    /// OS type (e.g., "l26", "win10").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ostype: Option<String>,
    /// SCSI controller type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scsihw: Option<String>,
    /// Boot order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot: Option<String>,
    /// Primary disk attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scsi0: Option<String>,
    /// Secondary disk attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scsi1: Option<String>,
    /// Configuration digest (for updates).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}
