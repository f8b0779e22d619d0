//! Infrastructure-node sizing
//!
//! Infra nodes carry platform services (ingress, monitoring, registries)
//! on distributions that split them out of the worker pool.

/// One infra node per this many applications
const APPS_PER_INFRA_NODE: u32 = 25;

/// Floor for any non-trivial deployment
const MIN_INFRA_NODES: u32 = 3;

/// Floor for production deployments at large scale
const LARGE_PROD_MIN_INFRA_NODES: u32 = 5;

/// App count at which the large-production floor kicks in
const LARGE_PROD_APP_THRESHOLD: u32 = 50;

/// Infra-node count for one cluster.
///
/// Zero when the distribution has no infra role or nothing is deployed;
/// otherwise scales with app count, floored at 3, and at 5 for production
/// clusters hosting 50 or more applications.
pub fn infra_nodes(app_count: u32, is_prod: bool, has_infra_nodes: bool) -> u32 {
    if !has_infra_nodes || app_count == 0 {
        return 0;
    }

    let mut nodes = app_count.div_ceil(APPS_PER_INFRA_NODE).max(MIN_INFRA_NODES);
    if is_prod && app_count >= LARGE_PROD_APP_THRESHOLD {
        nodes = nodes.max(LARGE_PROD_MIN_INFRA_NODES);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_infra_role_means_zero() {
        assert_eq!(infra_nodes(0, false, false), 0);
        assert_eq!(infra_nodes(500, true, false), 0);
    }

    #[test]
    fn test_empty_deployment_means_zero() {
        assert_eq!(infra_nodes(0, true, true), 0);
    }

    #[test]
    fn test_small_deployment_floor() {
        assert_eq!(infra_nodes(1, false, true), 3);
        assert_eq!(infra_nodes(25, false, true), 3);
        assert_eq!(infra_nodes(49, true, true), 3);
    }

    #[test]
    fn test_large_prod_floor() {
        assert_eq!(infra_nodes(50, true, true), 5);
        assert_eq!(infra_nodes(100, true, true), 5);
        // Non-prod at the same scale keeps the smaller floor
        assert_eq!(infra_nodes(50, false, true), 3);
    }

    #[test]
    fn test_scaling_beyond_floors() {
        // 200 apps -> ceil(200/25) = 8
        assert_eq!(infra_nodes(200, false, true), 8);
        assert_eq!(infra_nodes(200, true, true), 8);
        // 126 apps -> ceil rounds up
        assert_eq!(infra_nodes(126, true, true), 6);
    }
}
