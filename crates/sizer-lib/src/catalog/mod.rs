//! Distribution and technology catalogs
//!
//! The engine never reads catalog data from storage itself; it goes through
//! the read-only `ResourceCatalog` port so hosts can back it with whatever
//! store they like. `StaticCatalog` is the in-memory adapter used by the
//! bundled CLI and server.

mod static_catalog;

pub use static_catalog::StaticCatalog;

use crate::models::{ResourceProfile, TechnologyTierProfile};

/// Read-only lookup port for distribution and technology configuration
pub trait ResourceCatalog: Send + Sync {
    /// Per-node specs and capability flags for a distribution, if known
    fn resource_profile(&self, distribution: &str) -> Option<ResourceProfile>;

    /// Per-tier demand table for a technology, if known
    fn technology_tiers(&self, technology: &str) -> Option<TechnologyTierProfile>;

    /// Known distribution ids, sorted
    fn distributions(&self) -> Vec<String>;

    /// Known technology ids, sorted
    fn technologies(&self) -> Vec<String>;
}
