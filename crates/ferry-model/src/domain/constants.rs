//! Well-known label keys.
//!
//! These keys are read by subsystems that consume the outgoing launch message
//! (quota enforcement, monitoring, log aggregation), so their values are part of the wire contract.

/// Label key carrying the task's tier.
pub const TIER_LABEL: &str = "org.apache.aurora.tier";

/// Prefix prepended to every task metadata key when exported as a label.
///
/// Keeps user metadata from colliding with labels produced elsewhere.
pub const METADATA_LABEL_PREFIX: &str = "org.apache.aurora.metadata.";

/// Executor label key carrying the instance source name (`role.environment.name.instance`).
pub const SOURCE_LABEL: &str = "source";
