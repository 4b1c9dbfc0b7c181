//! Spreadsheet export of running-VM details.

use crate::{
    ProxmoxClient,
    core::domain::{
        error::ProxmoxResult,
        model::{cluster_resource::VmResource, guest_agent::GuestInterface},
    },
    report::{disk::disk_descriptor, format_bytes},
};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::debug;

/// Placeholder IP when the guest agent cannot be queried.
pub const AGENT_UNAVAILABLE: &str = "Agent disabled";

/// Sheet name in the exported workbook.
pub const SHEET_NAME: &str = "VMsList";

/// Column headers, in output order.
pub const HEADERS: [&str; 10] = [
    "VmID",
    "Hostname",
    "IP",
    "RAM",
    "CPU",
    "OS Storage",
    "Additional disk",
    "Status",
    "LA RAM",
    "LA CPU",
];

/// One exported row; field order matches [`HEADERS`].
#[derive(Debug, Clone, PartialEq)]
pub struct VmReportRow {
    pub vmid: u32,
    pub hostname: String,
    pub ip: String,
    /// Allocated memory, IEC-formatted.
    pub ram: String,
    /// Allocated CPU count.
    pub cpu: u32,
    pub os_disk: String,
    pub extra_disk: String,
    pub status: String,
    /// Current memory usage, IEC-formatted.
    pub mem_usage: String,
    /// Current CPU usage in percent.
    pub cpu_usage: f64,
}

/// Picks the reported guest address: first address of the second
/// interface. The first interface is the guest's loopback device.
pub fn primary_ip(interfaces: &[GuestInterface]) -> Option<String> {
    interfaces
        .get(1)
        .and_then(|interface| interface.ip_addresses.first())
        .map(|address| address.ip_address.clone())
}

/// Builds one row per running VM, visiting nodes in the given order.
///
/// Guest-agent failures (agent not installed, disabled, or reporting no
/// usable address) degrade to [`AGENT_UNAVAILABLE`]; a failing config
/// fetch propagates.
pub async fn collect_rows(
    client: &ProxmoxClient,
    node_names: &[String],
) -> ProxmoxResult<Vec<VmReportRow>> {
    let vms = client.cluster_vms().await?;
    let mut rows = Vec::new();
    for name in node_names {
        debug!(node = %name, "collecting virtual machines");
        for vm in vms.iter().filter(|vm| vm.node == *name && vm.is_running()) {
            rows.push(build_row(client, name, vm).await?);
        }
    }
    Ok(rows)
}

async fn build_row(
    client: &ProxmoxClient,
    node: &str,
    vm: &VmResource,
) -> ProxmoxResult<VmReportRow> {
    let ip = match client.guest_network_interfaces(node, vm.vmid).await {
        Ok(interfaces) => {
            primary_ip(&interfaces).unwrap_or_else(|| AGENT_UNAVAILABLE.to_string())
        }
        Err(err) => {
            debug!(vmid = vm.vmid, error = %err, "guest agent query failed");
            AGENT_UNAVAILABLE.to_string()
        }
    };

    let config = client.vm_config(node, vm.vmid).await?;

    Ok(VmReportRow {
        vmid: vm.vmid,
        hostname: vm.name.clone().unwrap_or_default(),
        ip,
        ram: format_bytes(vm.maxmem.unwrap_or(0)),
        cpu: vm.maxcpu.unwrap_or(0),
        os_disk: disk_descriptor(config.scsi0.as_deref()),
        extra_disk: disk_descriptor(config.scsi1.as_deref()),
        status: vm.status.clone(),
        mem_usage: format_bytes(vm.mem.unwrap_or(0)),
        cpu_usage: vm.cpu.unwrap_or(0.0) * 100.0,
    })
}

/// Writes the rows as a styled sheet: bold frozen header row, auto-fit
/// column widths, one-decimal CPU usage.
pub fn write_workbook(rows: &[VmReportRow], path: &Path) -> ProxmoxResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let one_decimal = Format::new().set_num_format("0.0");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = index as u32 + 1;
        worksheet.write_number(r, 0, row.vmid)?;
        worksheet.write_string(r, 1, row.hostname.as_str())?;
        worksheet.write_string(r, 2, row.ip.as_str())?;
        worksheet.write_string(r, 3, row.ram.as_str())?;
        worksheet.write_number(r, 4, row.cpu)?;
        worksheet.write_string(r, 5, row.os_disk.as_str())?;
        worksheet.write_string(r, 6, row.extra_disk.as_str())?;
        worksheet.write_string(r, 7, row.status.as_str())?;
        worksheet.write_string(r, 8, row.mem_usage.as_str())?;
        worksheet.write_number_with_format(r, 9, row.cpu_usage, &one_decimal)?;
    }

    worksheet.set_freeze_panes(1, 1)?;
    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}
