use ferry_model::{AssignedTask, METADATA_LABEL_PREFIX, SOURCE_LABEL, TIER_LABEL, TaskConfig};
use ferry_proto::{DiscoveryInfo, Label, Labels, Port, Ports, discovery_info};

use crate::constants::DEFAULT_PORT_PROTOCOL;

fn label(key: impl Into<String>, value: impl Into<String>) -> Label {
    Label {
        key: key.into(),
        value: Some(value.into()),
    }
}

/// Tier label (when a tier is declared) followed by one namespaced label per metadata entry, in input order.
pub fn to_task_labels(cfg: &TaskConfig) -> Labels {
    let tier = cfg.tier.iter().map(|t| label(TIER_LABEL, t.as_str()));
    let metadata = cfg
        .metadata
        .iter()
        .map(|kv| label(format!("{METADATA_LABEL_PREFIX}{}", kv.key()), kv.value()));

    Labels {
        labels: tier.chain(metadata).collect(),
    }
}

pub fn source_labels(source: &str) -> Labels {
    Labels {
        labels: vec![label(SOURCE_LABEL, source)],
    }
}

/// Cluster-wide discovery record with one entry per assigned port.
pub fn to_discovery_info(task: &AssignedTask, cluster: &str) -> DiscoveryInfo {
    let job = &task.task.job;
    let ports = task
        .assigned_ports
        .iter()
        .map(|(name, number)| Port {
            number: *number,
            name: Some(name.clone()),
            protocol: Some(DEFAULT_PORT_PROTOCOL.to_string()),
            ..Default::default()
        })
        .collect();

    DiscoveryInfo {
        visibility: discovery_info::Visibility::Cluster as i32,
        name: Some(job.discovery_name()),
        environment: Some(job.environment.clone()),
        location: Some(cluster.to_string()),
        ports: Some(Ports { ports }),
        ..Default::default()
    }
}
