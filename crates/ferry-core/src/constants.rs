//! Fixed values of the launch message.
//!
//! Consumers outside the scheduler (executors, containers, service discovery) read these verbatim.

/// In-container mount point of an image-backed task filesystem.
pub const TASK_FILESYSTEM_MOUNT_POINT: &str = "taskfs";

/// Protocol advertised for every discovery port.
pub const DEFAULT_PORT_PROTOCOL: &str = "TCP";

/// Registry credentials fetched into the sandbox of every legacy container.
pub const DOCKER_CREDENTIALS_URI: &str = "file:///root/.dockercfg";

/// Default prefix of externally visible executor ids.
pub const DEFAULT_TASK_PREFIX: &str = "thermos-";

/// Template replaced with the instance index when resolving command lines.
pub const INSTANCE_BINDING: &str = "{{mesos.instance}}";

pub const ENV_TASK_ID: &str = "AURORA_TASK_ID";
pub const ENV_TASK_INSTANCE: &str = "AURORA_TASK_INSTANCE";
pub const ENV_JOB_NAME: &str = "AURORA_JOB_NAME";
pub const ENV_CLUSTER: &str = "AURORA_CLUSTER";
