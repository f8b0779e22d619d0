//! App-to-resource translation
//!
//! Converts an application mix into aggregate CPU/RAM demand using the
//! technology's per-tier demand table and the environment's replica factor.

use crate::models::{AppConfig, TechnologyTierProfile};

/// Aggregate CPU/RAM demand before headroom and overcommit
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceDemand {
    pub cpu: f64,
    pub ram_gb: f64,
}

impl ResourceDemand {
    pub fn is_zero(&self) -> bool {
        self.cpu <= 0.0 && self.ram_gb <= 0.0
    }
}

/// Raw demand = sum over tiers of (count x per-instance demand) x replicas
pub fn app_demand(
    apps: &AppConfig,
    tiers: &TechnologyTierProfile,
    replica_factor: u32,
) -> ResourceDemand {
    let counts = [
        (apps.small, tiers.small),
        (apps.medium, tiers.medium),
        (apps.large, tiers.large),
        (apps.xlarge, tiers.xlarge),
    ];

    let mut demand = ResourceDemand::default();
    for (count, tier) in counts {
        demand.cpu += count as f64 * tier.cpu;
        demand.ram_gb += count as f64 * tier.ram_gb;
    }
    demand.cpu *= replica_factor as f64;
    demand.ram_gb *= replica_factor as f64;
    demand
}
