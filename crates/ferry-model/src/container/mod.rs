use serde::{Deserialize, Serialize};

use crate::KeyValue;

mod image;
pub use image::Image;

mod volume;
pub use volume::{Mode, Volume};

/// Container execution strategy for a task.
///
/// Exactly one strategy applies to a task; the two variants are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Container {
    /// Resource manager's native containerizer, driven by an executor.
    Mesos(MesosContainer),
    /// Legacy container runtime driven by an image name and a shell command.
    Docker(DockerContainer),
}

impl Container {
    /// Returns the container kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            Container::Mesos(_) => "mesos",
            Container::Docker(_) => "docker",
        }
    }
}

/// Native containerizer settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MesosContainer {
    /// Image providing the task filesystem. If `None`, the task runs on the host filesystem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Host paths mounted into the container, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}

/// Legacy container runtime settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerContainer {
    /// Image name (e.g., "nginx:latest").
    pub image: String,

    /// Launch parameters passed to the runtime.
    ///
    /// Order is significant to the runtime and is preserved end to end.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<KeyValue>,
}

impl DockerContainer {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a launch parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(KeyValue::new(key, value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(Container::Mesos(MesosContainer::default()).kind(), "mesos");
        assert_eq!(Container::Docker(DockerContainer::new("img")).kind(), "docker");
    }

    #[test]
    fn docker_parameters_keep_declaration_order() {
        let c = DockerContainer::new("busybox")
            .with_parameter("label", "b")
            .with_parameter("env", "X=1")
            .with_parameter("label", "a");

        let json = serde_json::to_string(&Container::Docker(c.clone())).unwrap();
        let back: Container = serde_json::from_str(&json).unwrap();

        match back {
            Container::Docker(d) => {
                let values: Vec<_> = d.parameters.iter().map(|p| p.value()).collect();
                assert_eq!(values, ["b", "X=1", "a"]);
            }
            other => panic!("expected docker container, got {other:?}"),
        }
    }

    #[test]
    fn mesos_container_deserializes_with_defaults() {
        let c: Container = serde_json::from_str(r#"{"mesos":{}}"#).unwrap();
        assert_eq!(c, Container::Mesos(MesosContainer::default()));
    }
}
