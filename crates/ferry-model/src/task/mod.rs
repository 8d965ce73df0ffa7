mod assigned;
pub use assigned::AssignedTask;

mod config;
pub use config::TaskConfig;

mod executor;
pub use executor::{ExecutorConfig, FetcherUri};
