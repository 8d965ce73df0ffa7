use serde::{Deserialize, Serialize};

/// Executor selection plus the executor-specific payload.
///
/// `data` is opaque to the scheduler and interpreted only by the named executor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorConfig {
    /// Executor name, used to look up executor settings.
    pub name: String,
    /// Opaque executor payload.
    #[serde(default)]
    pub data: String,
}

impl ExecutorConfig {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Remote artifact the agent downloads into the sandbox before launch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetcherUri {
    pub value: String,
    /// Unpack archives after download.
    #[serde(default = "default_extract")]
    pub extract: bool,
    /// Keep the artifact in the agent's fetcher cache.
    #[serde(default)]
    pub cache: bool,
}

fn default_extract() -> bool {
    true
}

impl FetcherUri {
    /// URI with default flags: extracted, not cached.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extract: default_extract(),
            cache: false,
        }
    }
}
