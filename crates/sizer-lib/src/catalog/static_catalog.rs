//! In-memory catalog adapter with a built-in set of distributions and
//! technology tier tables.

use std::collections::BTreeMap;

use super::ResourceCatalog;
use crate::models::{NodeSpec, ResourceProfile, TechnologyTierProfile, TierDemand};

/// In-memory `ResourceCatalog` backed by sorted maps
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    distributions: BTreeMap<String, ResourceProfile>,
    technologies: BTreeMap<String, TechnologyTierProfile>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-seeded with representative distributions and technologies
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        // Managed control plane, no dedicated infra role
        catalog.insert_distribution(
            "eks",
            ResourceProfile {
                has_managed_control_plane: true,
                has_infra_nodes: false,
                prod_control_plane: NodeSpec::default(),
                non_prod_control_plane: NodeSpec::default(),
                prod_worker: NodeSpec::new(8.0, 32.0, 100.0),
                non_prod_worker: NodeSpec::new(4.0, 16.0, 100.0),
                prod_infra: NodeSpec::default(),
                non_prod_infra: NodeSpec::default(),
            },
        );
        catalog.insert_distribution(
            "aks",
            ResourceProfile {
                has_managed_control_plane: true,
                has_infra_nodes: false,
                prod_control_plane: NodeSpec::default(),
                non_prod_control_plane: NodeSpec::default(),
                prod_worker: NodeSpec::new(8.0, 32.0, 128.0),
                non_prod_worker: NodeSpec::new(4.0, 16.0, 128.0),
                prod_infra: NodeSpec::default(),
                non_prod_infra: NodeSpec::default(),
            },
        );

        // Self-managed with a dedicated infra-node role
        catalog.insert_distribution(
            "openshift",
            ResourceProfile {
                has_managed_control_plane: false,
                has_infra_nodes: true,
                prod_control_plane: NodeSpec::new(8.0, 32.0, 120.0),
                non_prod_control_plane: NodeSpec::new(4.0, 16.0, 120.0),
                prod_worker: NodeSpec::new(16.0, 64.0, 200.0),
                non_prod_worker: NodeSpec::new(8.0, 32.0, 200.0),
                prod_infra: NodeSpec::new(8.0, 32.0, 300.0),
                non_prod_infra: NodeSpec::new(4.0, 16.0, 300.0),
            },
        );

        // Self-managed vanilla cluster, workers absorb platform services
        catalog.insert_distribution(
            "kubeadm",
            ResourceProfile {
                has_managed_control_plane: false,
                has_infra_nodes: false,
                prod_control_plane: NodeSpec::new(4.0, 16.0, 100.0),
                non_prod_control_plane: NodeSpec::new(2.0, 8.0, 100.0),
                prod_worker: NodeSpec::new(8.0, 32.0, 100.0),
                non_prod_worker: NodeSpec::new(4.0, 16.0, 100.0),
                prod_infra: NodeSpec::default(),
                non_prod_infra: NodeSpec::default(),
            },
        );

        catalog.insert_technology(
            "springboot",
            TechnologyTierProfile {
                small: TierDemand::new(0.5, 1.0),
                medium: TierDemand::new(1.0, 2.0),
                large: TierDemand::new(2.0, 4.0),
                xlarge: TierDemand::new(4.0, 8.0),
            },
        );
        catalog.insert_technology(
            "nodejs",
            TechnologyTierProfile {
                small: TierDemand::new(0.25, 0.5),
                medium: TierDemand::new(0.5, 1.0),
                large: TierDemand::new(1.0, 2.0),
                xlarge: TierDemand::new(2.0, 4.0),
            },
        );
        catalog.insert_technology(
            "dotnet",
            TechnologyTierProfile {
                small: TierDemand::new(0.5, 1.0),
                medium: TierDemand::new(1.0, 2.5),
                large: TierDemand::new(2.0, 5.0),
                xlarge: TierDemand::new(4.0, 10.0),
            },
        );
        catalog.insert_technology(
            "generic",
            TechnologyTierProfile {
                small: TierDemand::new(0.5, 1.0),
                medium: TierDemand::new(1.0, 2.0),
                large: TierDemand::new(2.0, 4.0),
                xlarge: TierDemand::new(4.0, 8.0),
            },
        );

        catalog
    }

    pub fn insert_distribution(&mut self, id: impl Into<String>, profile: ResourceProfile) {
        self.distributions.insert(id.into(), profile);
    }

    pub fn insert_technology(&mut self, id: impl Into<String>, tiers: TechnologyTierProfile) {
        self.technologies.insert(id.into(), tiers);
    }
}

impl ResourceCatalog for StaticCatalog {
    fn resource_profile(&self, distribution: &str) -> Option<ResourceProfile> {
        self.distributions.get(distribution).cloned()
    }

    fn technology_tiers(&self, technology: &str) -> Option<TechnologyTierProfile> {
        self.technologies.get(technology).copied()
    }

    fn distributions(&self) -> Vec<String> {
        self.distributions.keys().cloned().collect()
    }

    fn technologies(&self) -> Vec<String> {
        self.technologies.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_entries() {
        let catalog = StaticCatalog::builtin();
        assert!(!catalog.distributions().is_empty());
        assert!(!catalog.technologies().is_empty());
    }

    #[test]
    fn test_managed_distributions_have_zero_control_plane_specs() {
        let catalog = StaticCatalog::builtin();
        for id in catalog.distributions() {
            let profile = catalog.resource_profile(&id).unwrap();
            if profile.has_managed_control_plane {
                assert_eq!(profile.prod_control_plane.cpu, 0.0, "{id}");
                assert_eq!(profile.non_prod_control_plane.ram_gb, 0.0, "{id}");
            }
        }
    }

    #[test]
    fn test_unknown_ids_miss() {
        let catalog = StaticCatalog::builtin();
        assert!(catalog.resource_profile("no-such-distro").is_none());
        assert!(catalog.technology_tiers("no-such-tech").is_none());
    }

    #[test]
    fn test_listings_are_sorted() {
        let catalog = StaticCatalog::builtin();
        let distros = catalog.distributions();
        let mut sorted = distros.clone();
        sorted.sort();
        assert_eq!(distros, sorted);
    }
}
