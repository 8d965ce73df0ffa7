//! Pure conversions from domain values into wire values.
mod command;
mod labels;
mod resources;
mod volume;

pub use command::{credentials_uri, to_environment, to_fetcher_uri, to_kill_policy, to_parameters};
pub use labels::{source_labels, to_discovery_info, to_task_labels};
pub use resources::{
    CPUS, DISK_MB, PORTS, RAM_MB, from_milli, port_resource, scalar_resource, scalar_value,
    to_milli, to_ranges,
};
pub use volume::{image_volume, to_image, to_volume, to_volume_mode};
