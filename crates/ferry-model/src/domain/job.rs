use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InstanceId;

/// Identity of a job: `role/environment/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobKey {
    pub role: String,
    pub environment: String,
    pub name: String,
}

impl JobKey {
    pub fn new(
        role: impl Into<String>,
        environment: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            environment: environment.into(),
            name: name.into(),
        }
    }

    /// Canonical `role/environment/name` form.
    pub fn canonical(&self) -> String {
        format!("{}/{}/{}", self.role, self.environment, self.name)
    }

    /// Dotted `role.environment.name` form used for source naming.
    pub fn source_name(&self) -> String {
        format!("{}.{}.{}", self.role, self.environment, self.name)
    }

    /// Source name of a single instance: `role.environment.name.instance`.
    ///
    /// Also consumed verbatim as the cluster aggregation name by legacy tooling.
    pub fn instance_source_name(&self, instance: InstanceId) -> String {
        format!("{}.{}", self.source_name(), instance)
    }

    /// Service-discovery name: `name.environment.role`.
    ///
    /// Component order is reversed relative to [`JobKey::source_name`]; discovery consumers depend on it.
    pub fn discovery_name(&self) -> String {
        format!("{}.{}.{}", self.name, self.environment, self.role)
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
