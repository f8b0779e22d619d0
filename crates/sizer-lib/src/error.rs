//! Error taxonomy for the sizing engine
//!
//! Two failure classes exist: structurally invalid caller input, and
//! lookup misses against the distribution/technology catalog. Policy edge
//! cases (AZ minimum, infra floor, DR floor) are deterministic clamps, not
//! errors, and never surface here.

use thiserror::Error;

/// Errors returned by the sizing engine
#[derive(Debug, Error)]
pub enum SizingError {
    /// Caller-supplied input is structurally invalid; names the offending field
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// No resource profile exists for the requested distribution
    #[error("unknown distribution '{0}'")]
    UnknownDistribution(String),

    /// No tier profile exists for the requested technology
    #[error("unknown technology '{0}'")]
    UnknownTechnology(String),
}

impl SizingError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SizingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this is a catalog lookup miss rather than bad input shape
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            SizingError::UnknownDistribution(_) | SizingError::UnknownTechnology(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SizingError>;
