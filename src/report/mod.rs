//! Console reporting and spreadsheet export over the cluster client.

pub mod disk;
pub mod export;
pub mod inventory;
pub mod utilization;

use humansize::{BINARY, format_size};

/// Console banner printed between report sections.
pub const SEPARATOR: &str = "##############################################";

/// Formats a byte count in IEC units ("16 GiB").
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}
