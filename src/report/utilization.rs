//! Per-node allocation sums over running virtual machines.

use crate::{core::domain::model::cluster_resource::VmResource, report::format_bytes};
use colored::Colorize;

/// CPU and memory allocated to running VMs on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAllocation {
    pub node: String,
    /// Sum of `maxcpu` over running VMs.
    pub cpu: u64,
    /// Sum of `maxmem` over running VMs, in bytes.
    pub mem: u64,
}

/// Sums allocated CPU and memory of running VMs per node, in node order.
///
/// Only VMs whose `node` matches and whose status is `running` count.
/// The nested scan is O(nodes x VMs), fine at reporting scale.
pub fn allocated_by_node(node_names: &[String], vms: &[VmResource]) -> Vec<NodeAllocation> {
    node_names
        .iter()
        .map(|name| {
            let mut cpu = 0u64;
            let mut mem = 0u64;
            for vm in vms.iter().filter(|vm| vm.node == *name && vm.is_running()) {
                cpu += u64::from(vm.maxcpu.unwrap_or(0));
                mem += vm.maxmem.unwrap_or(0);
            }
            NodeAllocation {
                node: name.clone(),
                cpu,
                mem,
            }
        })
        .collect()
}

/// Prints one allocated-CPU line per node.
pub fn print_cpu_allocation(allocations: &[NodeAllocation]) {
    for allocation in allocations {
        println!(
            "All allocated CPU on node {} is: {}",
            allocation.node.green(),
            allocation.cpu.to_string().red()
        );
    }
}

/// Prints one allocated-RAM line per node.
pub fn print_ram_allocation(allocations: &[NodeAllocation]) {
    for allocation in allocations {
        println!(
            "All allocated RAM on node {} is: {}",
            allocation.node.green(),
            format_bytes(allocation.mem).red()
        );
    }
}
