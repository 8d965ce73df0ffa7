mod kv;
pub use kv::KeyValue;

mod metadata;
pub use metadata::Metadata;

mod job;
pub use job::JobKey;

mod constants;
pub use constants::{METADATA_LABEL_PREFIX, SOURCE_LABEL, TIER_LABEL};

/// Globally unique identifier of a single task assignment.
pub type TaskId = String;

/// Index of a task within its job.
///
/// Instances of the same job share a [`JobKey`] and differ only by this index.
pub type InstanceId = u32;
