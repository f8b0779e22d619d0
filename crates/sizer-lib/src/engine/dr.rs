//! Disaster-recovery capacity projection
//!
//! Maps the chosen DR pattern to a standby node count and a blended cost
//! multiplier. The multiplier is an output for downstream cost estimation;
//! nothing is priced here.

use crate::models::{DrPattern, HadrConfig};

/// Warm standby carries 30% of primary capacity
const WARM_STANDBY_CAPACITY: f64 = 0.30;

/// Hot standby carries near-full primary capacity
const HOT_STANDBY_CAPACITY: f64 = 0.85;

/// Warm standby keeps at least a quorum-sized footprint in the standby site
const MIN_WARM_STANDBY_NODES: u32 = 3;

const BACKUP_RESTORE_MULTIPLIER: f64 = 1.08;
const WARM_STANDBY_MULTIPLIER: f64 = 1.40;
const HOT_STANDBY_MULTIPLIER: f64 = 1.90;
const ACTIVE_ACTIVE_MULTIPLIER: f64 = 2.10;

/// Standby node count and cost multiplier for a primary site of
/// `primary_nodes` nodes.
pub fn dr_resources(primary_nodes: u32, hadr: Option<&HadrConfig>) -> (u32, f64) {
    let Some(hadr) = hadr else {
        return (0, 1.0);
    };

    match hadr.dr_pattern {
        DrPattern::None => (0, 1.0),
        // Storage-only backup overhead, no standby compute
        DrPattern::BackupRestore => (0, BACKUP_RESTORE_MULTIPLIER),
        DrPattern::WarmStandby => {
            let nodes = (WARM_STANDBY_CAPACITY * primary_nodes as f64).round() as u32;
            (nodes.max(MIN_WARM_STANDBY_NODES), WARM_STANDBY_MULTIPLIER)
        }
        DrPattern::HotStandby => {
            let nodes = (HOT_STANDBY_CAPACITY * primary_nodes as f64).floor() as u32;
            (nodes, HOT_STANDBY_MULTIPLIER)
        }
        // Full duplication plus global load-balancing overhead
        DrPattern::ActiveActive => (primary_nodes, ACTIVE_ACTIVE_MULTIPLIER),
    }
}
