pub mod command;
pub mod constants;
pub mod encode;
pub mod error;
pub mod factory;
pub mod map;
pub mod metrics;
pub mod offer;
pub mod registry;

mod context;
pub use context::{FactoryContext, ServerInfo};

pub use error::{ConfigError, InsufficientResources, TranslateError};
pub use factory::TaskFactory;
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};

pub mod prelude {
    pub use crate::command::{CommandResolver, ProcessCommandResolver, ResolvedCommand};
    pub use crate::encode::{EncodeError, JsonPayloadEncoder, PayloadEncoder};
    pub use crate::error::{ConfigError, InsufficientResources, TranslateError};
    pub use crate::factory::TaskFactory;
    pub use crate::offer::{AcceptedOffer, OfferMatcher, OfferSlicer};
    pub use crate::registry::{ExecutorDescriptor, ExecutorRegistry, ExecutorSettings};
    pub use crate::{FactoryContext, ServerInfo};
}
