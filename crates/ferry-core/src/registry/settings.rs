use std::collections::BTreeMap;

use ferry_model::ResourceBag;
use ferry_proto::{CommandInfo, ExecutorId, ExecutorInfo, Resource, command_info, value};
use tracing::{debug, info};

use super::{
    ExecutorDescriptor, ExecutorRegistry,
    config::{CommandConfig, ExecutorEntryConfig, ExecutorSettingsConfig, ScalarConfig},
};
use crate::{
    error::ConfigError,
    map::{CPUS, DISK_MB, RAM_MB, to_volume},
};

/// Executors keyed by name, plus cluster-wide launch switches.
#[derive(Debug, Clone, Default)]
pub struct ExecutorSettings {
    executors: BTreeMap<String, ExecutorDescriptor>,
    default_executor: Option<String>,
    populate_discovery_info: bool,
}

impl ExecutorSettings {
    /// Create an empty registry.
    pub fn new(populate_discovery_info: bool) -> Self {
        Self {
            executors: BTreeMap::new(),
            default_executor: None,
            populate_discovery_info,
        }
    }

    /// Parse and validate a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: ExecutorSettingsConfig = serde_json::from_str(json)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: ExecutorSettingsConfig) -> Result<Self, ConfigError> {
        let mut settings = Self::new(cfg.populate_discovery_info);
        for entry in cfg.executors {
            let name = entry.executor.name.clone();
            settings.register(name, descriptor_from(entry)?)?;
        }
        if let Some(name) = cfg.default_executor {
            settings.set_default(name)?;
        }
        info!(
            executors = settings.executors.len(),
            default = settings.default_executor.as_deref(),
            discovery = settings.populate_discovery_info,
            "executor settings loaded"
        );
        Ok(settings)
    }

    /// Register an executor under `name`.
    ///
    /// Names are unique and every executor needs a non-empty task prefix.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: ExecutorDescriptor,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::Invalid("executor name is empty".into()));
        }
        if descriptor.task_prefix.is_empty() {
            return Err(ConfigError::EmptyTaskPrefix(name));
        }
        if self.executors.contains_key(&name) {
            return Err(ConfigError::DuplicateExecutor(name));
        }
        debug!(executor = %name, prefix = %descriptor.task_prefix, "executor registered");
        self.executors.insert(name, descriptor);
        Ok(())
    }

    /// Use the executor registered under `name` for tasks that name none.
    pub fn set_default(&mut self, name: impl Into<String>) -> Result<(), ConfigError> {
        let name = name.into();
        if !self.executors.contains_key(&name) {
            return Err(ConfigError::Invalid(format!(
                "default executor '{name}' is not configured"
            )));
        }
        self.default_executor = Some(name);
        Ok(())
    }
}

impl ExecutorRegistry for ExecutorSettings {
    fn by_name(&self, name: &str) -> Option<&ExecutorDescriptor> {
        self.executors.get(name)
    }

    fn default_executor(&self) -> Option<&ExecutorDescriptor> {
        self.default_executor
            .as_deref()
            .and_then(|name| self.executors.get(name))
    }

    fn discovery_enabled(&self) -> bool {
        self.populate_discovery_info
    }
}

fn descriptor_from(entry: ExecutorEntryConfig) -> Result<ExecutorDescriptor, ConfigError> {
    let template = entry.executor;
    let overhead = overhead_from(&template.name, &template.resources)?;

    let executor = ExecutorInfo {
        executor_id: ExecutorId {
            value: String::new(),
        },
        name: Some(template.name),
        command: command_from(template.command),
        resources: template.resources.iter().map(scalar_from).collect(),
        ..Default::default()
    };

    Ok(ExecutorDescriptor {
        executor,
        volume_mounts: entry.volume_mounts.iter().map(to_volume).collect(),
        task_prefix: entry.task_prefix,
        overhead,
    })
}

fn overhead_from(executor: &str, resources: &[ScalarConfig]) -> Result<ResourceBag, ConfigError> {
    let mut cpus = 0.0;
    let mut ram_mb = 0;
    let mut disk_mb = 0;

    for r in resources {
        if !r.value.is_finite() || r.value < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "executor '{executor}': resource '{}' must be >= 0, got {}",
                r.name, r.value
            )));
        }
        match r.name.as_str() {
            CPUS => cpus += r.value,
            RAM_MB => ram_mb += r.value.round() as u64,
            DISK_MB => disk_mb += r.value.round() as u64,
            other => {
                return Err(ConfigError::Invalid(format!(
                    "executor '{executor}': unsupported overhead resource '{other}'"
                )));
            }
        }
    }

    ResourceBag::new(cpus, ram_mb, disk_mb).map_err(|e| ConfigError::Invalid(e.to_string()))
}

fn scalar_from(r: &ScalarConfig) -> Resource {
    Resource {
        name: r.name.clone(),
        r#type: value::Type::Scalar as i32,
        scalar: Some(value::Scalar { value: r.value }),
        ..Default::default()
    }
}

fn command_from(cfg: CommandConfig) -> CommandInfo {
    let uris = cfg
        .uris
        .into_iter()
        .map(|u| command_info::Uri {
            value: u.value,
            executable: Some(u.executable),
            extract: Some(u.extract),
            cache: Some(u.cache),
            output_file: u.output_file,
        })
        .collect();

    CommandInfo {
        uris,
        shell: cfg.shell,
        value: cfg.value,
        arguments: cfg.arguments,
        ..Default::default()
    }
}
