//! End-to-end tests for the sizing engine against the built-in catalog

use std::collections::BTreeMap;
use std::sync::Arc;

use sizer_lib::{
    AppConfig, ClusterMode, ControlPlaneHa, DrPattern, Environment, HadrConfig,
    HeadroomSettings, K8sSizingInput, K8sSizingResult, NodeDistribution, OvercommitSettings,
    ReplicaSettings, SizingEngine, StaticCatalog,
};

fn engine() -> SizingEngine {
    SizingEngine::new(Arc::new(StaticCatalog::builtin()))
}

fn prod_only(apps: AppConfig) -> BTreeMap<Environment, AppConfig> {
    let mut environments = BTreeMap::new();
    environments.insert(Environment::Prod, apps);
    environments
}

fn openshift_input() -> K8sSizingInput {
    K8sSizingInput {
        distribution: "openshift".to_string(),
        technology: "springboot".to_string(),
        cluster_mode: ClusterMode::MultiCluster,
        environments: prod_only(AppConfig {
            medium: 20,
            ..Default::default()
        }),
        headroom: HeadroomSettings::default(),
        replicas: ReplicaSettings::default(),
        prod_overcommit: OvercommitSettings::default(),
        non_prod_overcommit: OvercommitSettings::default(),
        hadr: Some(HadrConfig {
            control_plane_ha: ControlPlaneHa::StackedHa,
            control_plane_nodes: 5,
            node_distribution: NodeDistribution::MultiAz,
            availability_zones: 3,
            dr_pattern: DrPattern::WarmStandby,
        }),
        hadr_overrides: BTreeMap::new(),
    }
}

#[test]
fn openshift_prod_warm_standby_scenario() {
    let result = engine().calculate(&openshift_input()).unwrap();
    let env = &result.environments[0];

    // 20 medium springboot apps x 3 replicas = 60 cpu / 120 GB raw demand;
    // 30% headroom and 2x cpu overcommit land on 3 workers of 16c/64GB.
    assert_eq!(env.masters, 5);
    assert_eq!(env.etcd_nodes, 0);
    assert_eq!(env.workers, 3);
    assert_eq!(env.infra, 3);
    assert_eq!(env.availability_zones, 3);

    let primary = env.masters + env.etcd_nodes + env.infra + env.workers;
    assert_eq!(primary, 11);
    assert_eq!(env.dr_nodes, 3); // round(0.30 * 11) = 3
    assert_eq!(env.dr_cost_multiplier, 1.40);
    assert_eq!(env.total_nodes, 14);

    // 8 control-plane-class cores per master, 16 per worker, 8 per infra
    assert_eq!(env.total_cpu, 5.0 * 8.0 + 3.0 * 8.0 + 3.0 * 16.0);
    assert_eq!(env.total_ram_gb, 5.0 * 32.0 + 3.0 * 32.0 + 3.0 * 64.0);
}

#[test]
fn managed_distribution_has_no_control_plane_footprint() {
    let mut input = openshift_input();
    input.distribution = "eks".to_string();
    input.hadr.as_mut().unwrap().control_plane_ha = ControlPlaneHa::ExternalEtcd;

    let result = engine().calculate(&input).unwrap();
    let env = &result.environments[0];
    assert_eq!(env.masters, 0);
    assert_eq!(env.etcd_nodes, 0);
    assert_eq!(env.infra, 0); // EKS has no infra-node role
    assert!(env.workers >= 3);
}

#[test]
fn large_prod_estate_gets_bigger_floors() {
    let mut input = openshift_input();
    input.environments = prod_only(AppConfig {
        small: 30,
        medium: 30,
        ..Default::default()
    });
    input.hadr = None;

    let result = engine().calculate(&input).unwrap();
    let env = &result.environments[0];
    // 60 prod apps trip the large-production infra floor
    assert!(env.infra >= 5);
    // Size-based default control plane for a small worker pool
    assert_eq!(env.masters, 3);
}

#[test]
fn active_active_duplicates_the_primary_site() {
    let mut input = openshift_input();
    input.hadr.as_mut().unwrap().dr_pattern = DrPattern::ActiveActive;

    let result = engine().calculate(&input).unwrap();
    let env = &result.environments[0];
    let primary = env.masters + env.etcd_nodes + env.infra + env.workers;
    assert_eq!(env.dr_nodes, primary);
    assert_eq!(env.dr_cost_multiplier, 2.10);
}

#[test]
fn grand_total_sums_environments() {
    let mut input = openshift_input();
    input.environments.insert(
        Environment::Dev,
        AppConfig {
            small: 8,
            ..Default::default()
        },
    );
    input.environments.insert(
        Environment::Staging,
        AppConfig {
            medium: 4,
            ..Default::default()
        },
    );

    let result = engine().calculate(&input).unwrap();
    assert_eq!(result.environments.len(), 3);

    let masters: u32 = result.environments.iter().map(|e| e.masters).sum();
    let workers: u32 = result.environments.iter().map(|e| e.workers).sum();
    let cpu: f64 = result.environments.iter().map(|e| e.total_cpu).sum();
    assert_eq!(result.total.masters, masters);
    assert_eq!(result.total.total_workers, workers);
    assert_eq!(result.total.total_cpu, cpu);
}

#[test]
fn input_and_result_round_trip_json() {
    let input = openshift_input();
    let json = serde_json::to_string(&input).unwrap();
    let parsed: K8sSizingInput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, input);

    let result = engine().calculate(&input).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: K8sSizingResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn minimal_json_input_applies_defaults() {
    let json = r#"{
        "distribution": "kubeadm",
        "technology": "nodejs",
        "environments": { "prod": { "medium": 10 } }
    }"#;
    let input: K8sSizingInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.cluster_mode, ClusterMode::MultiCluster);
    assert!(input.hadr.is_none());

    let result = engine().calculate(&input).unwrap();
    let env = &result.environments[0];
    // No HA/DR config: size-based control-plane default, no DR, single zone
    assert_eq!(env.masters, 3);
    assert_eq!(env.dr_nodes, 0);
    assert_eq!(env.availability_zones, 1);
}

#[test]
fn repeated_calculations_are_bit_identical() {
    let input = openshift_input();
    let engine = engine();
    let first = serde_json::to_vec(&engine.calculate(&input).unwrap()).unwrap();
    let second = serde_json::to_vec(&engine.calculate(&input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn validation_error_names_the_field() {
    let mut input = openshift_input();
    input.headroom.prod_percent = 250.0;
    let err = engine().calculate(&input).unwrap_err();
    assert!(err.to_string().contains("headroom.prod_percent"), "{err}");
}

#[test]
fn lookup_miss_names_the_id() {
    let mut input = openshift_input();
    input.distribution = "tanzu".to_string();
    let err = engine().calculate(&input).unwrap_err();
    assert!(err.to_string().contains("tanzu"), "{err}");
}
