//! Worker sizing with availability-zone minimums
//!
//! Workers are sized from demand after headroom and overcommit, taking the
//! larger of the CPU-driven and RAM-driven counts, then floored to the
//! availability-zone count for multi-zone placements.

use super::demand::ResourceDemand;
use crate::models::{HadrConfig, NodeDistribution, NodeSpec, OvercommitSettings};

/// Worker count needed to carry `demand` on nodes of `worker_spec`.
///
/// Headroom inflates demand; overcommit deflates it. CPU and RAM are sized
/// independently and the larger count wins.
pub fn required_workers(
    demand: ResourceDemand,
    headroom_percent: f64,
    overcommit: &OvercommitSettings,
    worker_spec: &NodeSpec,
) -> u32 {
    if demand.is_zero() {
        return 0;
    }

    let headroom = 1.0 + headroom_percent / 100.0;
    let cpu_needed = demand.cpu * headroom / overcommit.cpu;
    let ram_needed = demand.ram_gb * headroom / overcommit.memory;

    let by_cpu = if worker_spec.cpu > 0.0 {
        (cpu_needed / worker_spec.cpu).ceil() as u32
    } else {
        0
    };
    let by_ram = if worker_spec.ram_gb > 0.0 {
        (ram_needed / worker_spec.ram_gb).ceil() as u32
    } else {
        0
    };

    by_cpu.max(by_ram)
}

/// Floor the worker count to the zone count for multi-zone placements.
///
/// Spreading across N zones needs at least N nodes for balanced placement;
/// a larger requested count is never reduced.
pub fn apply_az_minimum(requested: u32, hadr: Option<&HadrConfig>) -> u32 {
    match hadr {
        Some(h) if h.node_distribution != NodeDistribution::SingleAz => {
            requested.max(h.availability_zones)
        }
        _ => requested,
    }
}
