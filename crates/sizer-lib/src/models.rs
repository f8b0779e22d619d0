//! Core data models for the sizing engine

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Deployment environments a workload can be sized for.
///
/// Ordering matters: environments sort from least to most critical, and
/// shared-cluster sizing labels its result with the highest enabled one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    /// Whether prod-class sizing policy (replicas, headroom, overcommit) applies
    pub fn is_prod(&self) -> bool {
        matches!(self, Environment::Prod)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed per-node hardware spec for one node role
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub cpu: f64,
    pub ram_gb: f64,
    pub disk_gb: f64,
}

impl NodeSpec {
    pub const fn new(cpu: f64, ram_gb: f64, disk_gb: f64) -> Self {
        Self {
            cpu,
            ram_gb,
            disk_gb,
        }
    }
}

/// Per-distribution node specs and capability flags.
///
/// Managed roles carry zero specs (the provider hosts them); the engine
/// never provisions nodes for a role whose capability flag is off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceProfile {
    pub has_managed_control_plane: bool,
    pub has_infra_nodes: bool,
    pub prod_control_plane: NodeSpec,
    pub non_prod_control_plane: NodeSpec,
    pub prod_worker: NodeSpec,
    pub non_prod_worker: NodeSpec,
    pub prod_infra: NodeSpec,
    pub non_prod_infra: NodeSpec,
}

impl ResourceProfile {
    pub fn control_plane_spec(&self, is_prod: bool) -> NodeSpec {
        if is_prod {
            self.prod_control_plane
        } else {
            self.non_prod_control_plane
        }
    }

    pub fn worker_spec(&self, is_prod: bool) -> NodeSpec {
        if is_prod {
            self.prod_worker
        } else {
            self.non_prod_worker
        }
    }

    pub fn infra_spec(&self, is_prod: bool) -> NodeSpec {
        if is_prod {
            self.prod_infra
        } else {
            self.non_prod_infra
        }
    }
}

/// Application counts per size tier for one environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub small: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub large: u32,
    #[serde(default)]
    pub xlarge: u32,
}

impl AppConfig {
    pub fn total(&self) -> u32 {
        self.small + self.medium + self.large + self.xlarge
    }

    /// Combine two app mixes (used for shared-cluster sizing)
    pub fn merged(&self, other: &AppConfig) -> AppConfig {
        AppConfig {
            small: self.small + other.small,
            medium: self.medium + other.medium,
            large: self.large + other.large,
            xlarge: self.xlarge + other.xlarge,
        }
    }
}

/// Per-instance CPU/RAM demand for one application size tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierDemand {
    pub cpu: f64,
    pub ram_gb: f64,
}

impl TierDemand {
    pub const fn new(cpu: f64, ram_gb: f64) -> Self {
        Self { cpu, ram_gb }
    }
}

/// Per-technology demand-per-instance table, one entry per size tier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TechnologyTierProfile {
    pub small: TierDemand,
    pub medium: TierDemand,
    pub large: TierDemand,
    pub xlarge: TierDemand,
}

impl TechnologyTierProfile {
    /// A profile with no demand in any tier cannot drive sizing
    pub fn is_empty(&self) -> bool {
        [self.small, self.medium, self.large, self.xlarge]
            .iter()
            .all(|t| t.cpu <= 0.0 && t.ram_gb <= 0.0)
    }
}

/// Ratio by which raw demand is divided before sizing workers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OvercommitSettings {
    pub cpu: f64,
    pub memory: f64,
}

impl Default for OvercommitSettings {
    fn default() -> Self {
        // Memory is not overcommitted by default; CPU modestly is.
        Self {
            cpu: 2.0,
            memory: 1.0,
        }
    }
}

/// Spare-capacity percentage added to demand before sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadroomSettings {
    pub prod_percent: f64,
    pub non_prod_percent: f64,
}

impl Default for HeadroomSettings {
    fn default() -> Self {
        Self {
            prod_percent: 30.0,
            non_prod_percent: 20.0,
        }
    }
}

impl HeadroomSettings {
    pub fn percent(&self, is_prod: bool) -> f64 {
        if is_prod {
            self.prod_percent
        } else {
            self.non_prod_percent
        }
    }
}

/// Default replica multiplier applied to application instance counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaSettings {
    pub prod: u32,
    pub non_prod: u32,
}

impl Default for ReplicaSettings {
    fn default() -> Self {
        Self {
            prod: 3,
            non_prod: 1,
        }
    }
}

impl ReplicaSettings {
    pub fn factor(&self, is_prod: bool) -> u32 {
        if is_prod {
            self.prod
        } else {
            self.non_prod
        }
    }
}

/// Requested control-plane high-availability mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPlaneHa {
    /// Provider-hosted control plane (only honored if the distribution supports it)
    Managed,
    /// Single control-plane node, no HA
    Single,
    /// HA control plane with etcd co-located on the masters
    StackedHa,
    /// HA control plane backed by a dedicated etcd cluster
    ExternalEtcd,
}

/// How nodes are spread across failure domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeDistribution {
    SingleAz,
    DualAz,
    MultiAz,
    MultiRegion,
}

/// Disaster-recovery standby strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrPattern {
    None,
    BackupRestore,
    WarmStandby,
    HotStandby,
    ActiveActive,
}

/// HA and DR requirements for one environment.
///
/// `control_plane_nodes` is only meaningful for `StackedHa`/`ExternalEtcd`;
/// `availability_zones` only constrains placement when the distribution is
/// not `SingleAz`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HadrConfig {
    pub control_plane_ha: ControlPlaneHa,
    #[serde(default = "default_control_plane_nodes")]
    pub control_plane_nodes: u32,
    pub node_distribution: NodeDistribution,
    #[serde(default = "default_availability_zones")]
    pub availability_zones: u32,
    pub dr_pattern: DrPattern,
}

fn default_control_plane_nodes() -> u32 {
    3
}

fn default_availability_zones() -> u32 {
    3
}

impl Default for HadrConfig {
    fn default() -> Self {
        Self {
            control_plane_ha: ControlPlaneHa::StackedHa,
            control_plane_nodes: 3,
            node_distribution: NodeDistribution::MultiAz,
            availability_zones: 3,
            dr_pattern: DrPattern::None,
        }
    }
}

/// How enabled environments map onto clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ClusterMode {
    /// One independent cluster per enabled environment
    MultiCluster,
    /// One cluster carrying the union of all enabled environments' apps
    SharedCluster,
    /// Size exactly one selected environment
    PerEnvironment { environment: Environment },
}

impl Default for ClusterMode {
    fn default() -> Self {
        ClusterMode::MultiCluster
    }
}

/// Full input to a sizing calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct K8sSizingInput {
    pub distribution: String,
    pub technology: String,
    #[serde(default)]
    pub cluster_mode: ClusterMode,
    /// Enabled environments and their application mixes
    pub environments: BTreeMap<Environment, AppConfig>,
    #[serde(default)]
    pub headroom: HeadroomSettings,
    #[serde(default)]
    pub replicas: ReplicaSettings,
    #[serde(default)]
    pub prod_overcommit: OvercommitSettings,
    #[serde(default)]
    pub non_prod_overcommit: OvercommitSettings,
    /// Default HA/DR requirements; absent means size-based defaults apply
    #[serde(default)]
    pub hadr: Option<HadrConfig>,
    /// Per-environment HA/DR overrides, taking precedence over `hadr`
    #[serde(default)]
    pub hadr_overrides: BTreeMap<Environment, HadrConfig>,
}

impl K8sSizingInput {
    /// Resolve the effective HA/DR config for an environment: override first,
    /// then the default, then none.
    pub fn effective_hadr(&self, env: Environment) -> Option<&HadrConfig> {
        self.hadr_overrides.get(&env).or(self.hadr.as_ref())
    }
}

/// Sizing outcome for a single environment (or the shared cluster)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentResult {
    pub environment: Environment,
    pub masters: u32,
    pub etcd_nodes: u32,
    pub infra: u32,
    pub workers: u32,
    pub dr_nodes: u32,
    pub dr_cost_multiplier: f64,
    pub availability_zones: u32,
    pub total_cpu: f64,
    pub total_ram_gb: f64,
    pub total_disk_gb: f64,
    /// Primary nodes plus DR standby nodes
    pub total_nodes: u32,
}

/// Aggregate across all environment results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrandTotal {
    pub masters: u32,
    pub etcd_nodes: u32,
    pub infra: u32,
    /// Summed worker count, consumed by downstream cost estimators
    pub total_workers: u32,
    pub dr_nodes: u32,
    pub total_cpu: f64,
    pub total_ram_gb: f64,
    pub total_disk_gb: f64,
    pub total_nodes: u32,
}

impl GrandTotal {
    pub fn accumulate(&mut self, env: &EnvironmentResult) {
        self.masters += env.masters;
        self.etcd_nodes += env.etcd_nodes;
        self.infra += env.infra;
        self.total_workers += env.workers;
        self.dr_nodes += env.dr_nodes;
        self.total_cpu += env.total_cpu;
        self.total_ram_gb += env.total_ram_gb;
        self.total_disk_gb += env.total_disk_gb;
        self.total_nodes += env.total_nodes;
    }
}

/// Full output of a sizing calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct K8sSizingResult {
    pub distribution: String,
    pub technology: String,
    pub cluster_mode: ClusterMode,
    pub environments: Vec<EnvironmentResult>,
    pub total: GrandTotal,
}
