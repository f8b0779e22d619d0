//! Sizing and HA/DR resource calculation engine for Kubernetes-family
//! platforms
//!
//! This crate provides:
//! - App-mix to CPU/RAM demand translation
//! - Control-plane and etcd topology resolution
//! - AZ-aware worker and infra-node sizing
//! - DR standby capacity projection
//! - Per-environment orchestration with grand-total aggregation
//!
//! The engine is a pure function of its inputs: no I/O, no shared mutable
//! state, and bit-identical results for identical inputs.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod models;

pub use catalog::{ResourceCatalog, StaticCatalog};
pub use engine::SizingEngine;
pub use error::SizingError;
pub use models::*;
