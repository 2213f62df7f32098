//! Error types for the mapping configuration API

use thiserror::Error;

/// Errors surfaced by mapping configuration calls
///
/// Read accessors never fail; they fall back to default values for unknown
/// devices. Out-of-range axis or button indices are programming errors and
/// panic instead of returning a variant here.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The bounded device table is full
    #[error("cannot add joystick '{name}': at most {max} joysticks are supported")]
    CapacityExceeded { name: String, max: usize },

    /// A mapping profile failed to parse
    #[error("invalid mapping profile: {0}")]
    Profile(#[from] serde_yaml::Error),
}
