//! Control-plane and etcd topology resolution
//!
//! Decides master node counts from distribution capability and the requested
//! HA mode, and etcd quorum sizes for external-etcd topologies.

use crate::models::{ControlPlaneHa, HadrConfig};

/// Worker count at which the size-based default grows from 3 to 5 masters
pub const LARGE_CLUSTER_WORKER_THRESHOLD: u32 = 100;

const DEFAULT_HA_MASTERS: u32 = 3;
const LARGE_CLUSTER_MASTERS: u32 = 5;

/// Control-plane node count for one cluster.
///
/// A managed control plane always yields 0 masters, regardless of any HA
/// request: the tool cannot provision provider-hosted nodes. Without a
/// HA/DR config, and when `Managed` is requested on a distribution that
/// cannot host it, the standard quorum default applies (3 masters, 5 at or
/// above the large-cluster worker threshold).
pub fn master_nodes(
    worker_count: u32,
    has_managed_control_plane: bool,
    hadr: Option<&HadrConfig>,
) -> u32 {
    if has_managed_control_plane {
        return 0;
    }

    let Some(hadr) = hadr else {
        return size_based_default(worker_count);
    };

    match hadr.control_plane_ha {
        // Requested managed but the distribution cannot host it
        ControlPlaneHa::Managed => size_based_default(worker_count),
        ControlPlaneHa::Single => 1,
        // Explicit choice; no floor or ceiling applied here
        ControlPlaneHa::StackedHa | ControlPlaneHa::ExternalEtcd => hadr.control_plane_nodes,
    }
}

fn size_based_default(worker_count: u32) -> u32 {
    if worker_count >= LARGE_CLUSTER_WORKER_THRESHOLD {
        LARGE_CLUSTER_MASTERS
    } else {
        DEFAULT_HA_MASTERS
    }
}

/// Dedicated etcd node count.
///
/// Only an external-etcd topology gets dedicated nodes; every other mode
/// co-locates etcd with the masters or has none. The quorum is the nearest
/// odd size at least as large as the control plane it backs.
pub fn etcd_nodes(hadr: Option<&HadrConfig>) -> u32 {
    let Some(hadr) = hadr else {
        return 0;
    };
    if hadr.control_plane_ha != ControlPlaneHa::ExternalEtcd {
        return 0;
    }

    match hadr.control_plane_nodes {
        0..=3 => 3,
        4..=5 => 5,
        _ => 7,
    }
}
