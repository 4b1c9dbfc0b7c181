//! Domain models for QEMU guest-agent queries.
//!
//! The agent endpoint answers only when the guest runs the agent daemon;
//! otherwise the API returns an error status that callers are expected to
//! absorb.

use serde::{Deserialize, Serialize};

/// Envelope of `nodes/{node}/qemu/{vmid}/agent/network-get-interfaces`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GuestNetworkInterfaces {
    /// The guest's interfaces, loopback first.
    #[serde(default)]
    pub result: Vec<GuestInterface>,
}

/// One network interface inside the guest.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GuestInterface {
    /// Interface name inside the guest (e.g., "lo", "eth0").
    pub name: String,
    /// Addresses bound to the interface.
    #[serde(default, rename = "ip-addresses")]
    pub ip_addresses: Vec<GuestIpAddress>,
    /// MAC address (if reported).
    #[serde(
        default,
        rename = "hardware-address",
        skip_serializing_if = "Option::is_none"
    )]
    pub hardware_address: Option<String>,
}

/// One address bound to a guest interface.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GuestIpAddress {
    /// The address itself.
    #[serde(rename = "ip-address")]
    pub ip_address: String,
    /// Address family ("ipv4" or "ipv6").
    #[serde(
        default,
        rename = "ip-address-type",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_address_type: Option<String>,
    /// Network prefix length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<u8>,
}
