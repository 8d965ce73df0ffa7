use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricsHandle, noop_metrics};

/// Identity of the cluster this scheduler manages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    cluster_name: String,
}

impl ServerInfo {
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
        }
    }

    /// Cluster name; used as the discovery location and exported to legacy containers.
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }
}

/// Read-only dependencies shared by every translation call.
#[derive(Clone)]
pub struct FactoryContext {
    server: ServerInfo,
    metrics: MetricsHandle,
}

impl FactoryContext {
    pub fn new(server: ServerInfo, metrics: MetricsHandle) -> Self {
        Self { server, metrics }
    }

    pub fn server(&self) -> &ServerInfo {
        &self.server
    }

    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }
}

impl Default for FactoryContext {
    fn default() -> Self {
        Self {
            server: ServerInfo::default(),
            metrics: noop_metrics(),
        }
    }
}

impl fmt::Debug for FactoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryContext")
            .field("cluster", &self.server.cluster_name)
            .field("metrics", &"<handle>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_info_from_json() {
        let info: ServerInfo = serde_json::from_str(r#"{"clusterName":"devcluster"}"#).unwrap();
        assert_eq!(info.cluster_name(), "devcluster");
    }

    #[test]
    fn default_context_records_nowhere() {
        let ctx = FactoryContext::default();

        assert_eq!(ctx.server().cluster_name(), "");
        ctx.metrics().record_task_translated("mesos", 10);
    }

    #[test]
    fn accessors() {
        let ctx = FactoryContext::new(ServerInfo::new("west"), noop_metrics());

        assert_eq!(ctx.server().cluster_name(), "west");
        ctx.metrics().record_task_translated("mesos", 10);
    }

    #[test]
    fn debug_hides_metrics_backend() {
        let ctx = FactoryContext::new(ServerInfo::new("west"), noop_metrics());
        let s = format!("{ctx:?}");
        assert!(s.contains("west"));
        assert!(s.contains("<handle>"));
    }
}
