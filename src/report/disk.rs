//! Disk-attachment descriptor parsing.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Placeholder for an absent or unparseable disk attachment.
pub const NO_DISK: &str = "---";

static STORAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([\w-]+):").unwrap());
static SIZE_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"size=(\w+)").unwrap());

/// Extracts `"<storage> <size>"` from a raw disk attachment value such as
/// `local-lvm:vm-100-disk-0,size=32G`.
///
/// Returns [`NO_DISK`] when the attachment is absent or does not carry
/// both the leading storage token and a `size=` entry. The same routine
/// serves every disk slot.
pub fn disk_descriptor(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NO_DISK.to_string();
    };

    match (STORAGE_TOKEN.captures(raw), SIZE_VALUE.captures(raw)) {
        (Some(storage), Some(size)) => format!("{} {}", &storage[1], &size[1]),
        _ => {
            debug!(value = raw, "disk attachment did not match the expected format");
            NO_DISK.to_string()
        }
    }
}
