mod domain;
pub use domain::{InstanceId, JobKey, KeyValue, Metadata, TaskId};
pub use domain::{METADATA_LABEL_PREFIX, SOURCE_LABEL, TIER_LABEL};

mod error;
pub use error::{ModelError, ModelResult};

mod container;
pub use container::{Container, DockerContainer, Image, MesosContainer, Mode, Volume};

mod resources;
pub use resources::{ResourceBag, ResourceRequest};

mod task;
pub use task::{AssignedTask, ExecutorConfig, FetcherUri, TaskConfig};
