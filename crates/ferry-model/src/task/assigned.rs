use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{InstanceId, TaskConfig, TaskId};

/// A task bound to an instance index, with ports picked by the scheduler.
///
/// This is the input of the translation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    pub task_id: TaskId,
    pub instance_id: InstanceId,
    pub task: TaskConfig,

    /// Declared port name -> assigned port number.
    ///
    /// Ordered by name so derived output is deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assigned_ports: BTreeMap<String, u32>,
}

impl AssignedTask {
    pub fn new(task_id: impl Into<TaskId>, instance_id: InstanceId, task: TaskConfig) -> Self {
        Self {
            task_id: task_id.into(),
            instance_id,
            task,
            assigned_ports: BTreeMap::new(),
        }
    }

    /// Assign a port number to a named port.
    pub fn with_port(mut self, name: impl Into<String>, number: u32) -> Self {
        self.assigned_ports.insert(name.into(), number);
        self
    }

    /// `role.environment.name.instance`.
    pub fn source_name(&self) -> String {
        self.task.job.instance_source_name(self.instance_id)
    }
}
