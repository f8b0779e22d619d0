//! Sizing orchestrator
//!
//! Composes the demand, control-plane, worker, infra, and DR calculators
//! per environment and per cluster-topology mode. Pure and synchronous:
//! identical inputs always yield identical results.

mod control_plane;
mod demand;
mod dr;
mod infra;
mod workers;

pub use control_plane::{etcd_nodes, master_nodes, LARGE_CLUSTER_WORKER_THRESHOLD};
pub use demand::{app_demand, ResourceDemand};
pub use dr::dr_resources;
pub use infra::infra_nodes;
pub use workers::{apply_az_minimum, required_workers};

use std::sync::Arc;

use tracing::debug;

use crate::catalog::ResourceCatalog;
use crate::error::{Result, SizingError};
use crate::models::{
    AppConfig, ClusterMode, ControlPlaneHa, Environment, EnvironmentResult, GrandTotal,
    HadrConfig, K8sSizingInput, K8sSizingResult, NodeDistribution, ResourceProfile,
    TechnologyTierProfile,
};

/// Sizing calculation engine backed by a read-only catalog
pub struct SizingEngine {
    catalog: Arc<dyn ResourceCatalog>,
}

impl SizingEngine {
    pub fn new(catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self { catalog }
    }

    /// Run a full sizing calculation.
    ///
    /// Fails fast on structurally invalid input or unknown catalog ids;
    /// never returns a partial result.
    pub fn calculate(&self, input: &K8sSizingInput) -> Result<K8sSizingResult> {
        validate(input)?;

        let profile = self
            .catalog
            .resource_profile(&input.distribution)
            .ok_or_else(|| SizingError::UnknownDistribution(input.distribution.clone()))?;
        let tiers = self
            .catalog
            .technology_tiers(&input.technology)
            .ok_or_else(|| SizingError::UnknownTechnology(input.technology.clone()))?;

        if tiers.is_empty() {
            return Err(SizingError::invalid(
                "technology",
                format!("tier profile for '{}' has no resource demand", input.technology),
            ));
        }

        let environments = match input.cluster_mode {
            ClusterMode::MultiCluster => input
                .environments
                .iter()
                .map(|(env, apps)| size_environment(input, &profile, &tiers, *env, *apps))
                .collect(),
            ClusterMode::SharedCluster => {
                // One cluster carries the union of all enabled environments'
                // apps, labelled and governed by the most critical of them.
                let apps = input
                    .environments
                    .values()
                    .fold(AppConfig::default(), |acc, a| acc.merged(a));
                let env = *input
                    .environments
                    .keys()
                    .max()
                    .expect("validated non-empty");
                vec![size_environment(input, &profile, &tiers, env, apps)]
            }
            ClusterMode::PerEnvironment { environment } => {
                let apps = input.environments[&environment];
                vec![size_environment(input, &profile, &tiers, environment, apps)]
            }
        };

        let mut total = GrandTotal::default();
        for env in &environments {
            total.accumulate(env);
        }

        Ok(K8sSizingResult {
            distribution: input.distribution.clone(),
            technology: input.technology.clone(),
            cluster_mode: input.cluster_mode,
            environments,
            total,
        })
    }
}

/// Size a single cluster for one environment's (or the shared) app mix
fn size_environment(
    input: &K8sSizingInput,
    profile: &ResourceProfile,
    tiers: &TechnologyTierProfile,
    env: Environment,
    apps: AppConfig,
) -> EnvironmentResult {
    let is_prod = env.is_prod();
    let hadr = input.effective_hadr(env);

    let demand = app_demand(&apps, tiers, input.replicas.factor(is_prod));
    let overcommit = if is_prod {
        &input.prod_overcommit
    } else {
        &input.non_prod_overcommit
    };
    let worker_spec = profile.worker_spec(is_prod);

    let raw_workers = required_workers(
        demand,
        input.headroom.percent(is_prod),
        overcommit,
        &worker_spec,
    );
    let workers = apply_az_minimum(raw_workers, hadr);

    let masters = master_nodes(workers, profile.has_managed_control_plane, hadr);
    // A managed control plane hosts etcd too; no dedicated nodes either way.
    let etcd = if profile.has_managed_control_plane {
        0
    } else {
        etcd_nodes(hadr)
    };
    let infra = infra_nodes(apps.total(), is_prod, profile.has_infra_nodes);

    let primary = masters + etcd + infra + workers;
    let (dr_nodes, dr_cost_multiplier) = dr_resources(primary, hadr);

    let cp_spec = profile.control_plane_spec(is_prod);
    let infra_spec = profile.infra_spec(is_prod);

    // Dedicated etcd nodes run on control-plane-class hardware
    let cp_count = (masters + etcd) as f64;
    let total_cpu =
        cp_count * cp_spec.cpu + infra as f64 * infra_spec.cpu + workers as f64 * worker_spec.cpu;
    let total_ram_gb = cp_count * cp_spec.ram_gb
        + infra as f64 * infra_spec.ram_gb
        + workers as f64 * worker_spec.ram_gb;
    let total_disk_gb = cp_count * cp_spec.disk_gb
        + infra as f64 * infra_spec.disk_gb
        + workers as f64 * worker_spec.disk_gb;

    let availability_zones = match hadr {
        Some(h) if h.node_distribution != NodeDistribution::SingleAz => h.availability_zones,
        _ => 1,
    };

    debug!(
        environment = %env,
        masters,
        etcd,
        infra,
        workers,
        dr_nodes,
        "sized environment"
    );

    EnvironmentResult {
        environment: env,
        masters,
        etcd_nodes: etcd,
        infra,
        workers,
        dr_nodes,
        dr_cost_multiplier,
        availability_zones,
        total_cpu,
        total_ram_gb,
        total_disk_gb,
        total_nodes: primary + dr_nodes,
    }
}

fn validate(input: &K8sSizingInput) -> Result<()> {
    if input.environments.is_empty() {
        return Err(SizingError::invalid(
            "environments",
            "at least one environment must be enabled",
        ));
    }

    if let ClusterMode::PerEnvironment { environment } = input.cluster_mode {
        if !input.environments.contains_key(&environment) {
            return Err(SizingError::invalid(
                "cluster_mode.environment",
                format!("selected environment '{environment}' is not enabled"),
            ));
        }
    }

    for (field, value) in [
        ("prod_overcommit.cpu", input.prod_overcommit.cpu),
        ("prod_overcommit.memory", input.prod_overcommit.memory),
        ("non_prod_overcommit.cpu", input.non_prod_overcommit.cpu),
        ("non_prod_overcommit.memory", input.non_prod_overcommit.memory),
    ] {
        if !(value > 0.0) {
            return Err(SizingError::invalid(field, "overcommit ratio must be positive"));
        }
    }

    for (field, value) in [
        ("headroom.prod_percent", input.headroom.prod_percent),
        ("headroom.non_prod_percent", input.headroom.non_prod_percent),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(SizingError::invalid(field, "headroom must be between 0 and 100"));
        }
    }

    if input.replicas.prod < 1 || input.replicas.non_prod < 1 {
        return Err(SizingError::invalid("replicas", "replica factor must be at least 1"));
    }

    if let Some(hadr) = &input.hadr {
        validate_hadr("hadr", hadr)?;
    }
    for (env, hadr) in &input.hadr_overrides {
        if !input.environments.contains_key(env) {
            return Err(SizingError::invalid(
                "hadr_overrides",
                format!("override references disabled environment '{env}'"),
            ));
        }
        validate_hadr("hadr_overrides", hadr)?;
    }

    Ok(())
}

fn validate_hadr(field: &'static str, hadr: &HadrConfig) -> Result<()> {
    if hadr.availability_zones < 1 {
        return Err(SizingError::invalid(field, "availability_zones must be at least 1"));
    }
    if hadr.node_distribution != NodeDistribution::SingleAz && hadr.availability_zones < 2 {
        return Err(SizingError::invalid(
            field,
            "multi-zone distribution requires at least 2 availability zones",
        ));
    }
    if matches!(
        hadr.control_plane_ha,
        ControlPlaneHa::StackedHa | ControlPlaneHa::ExternalEtcd
    ) && hadr.control_plane_nodes < 1
    {
        return Err(SizingError::invalid(
            field,
            "control_plane_nodes must be at least 1 for a self-managed HA control plane",
        ));
    }
    Ok(())
}
