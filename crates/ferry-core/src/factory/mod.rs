//! Task factory: turns a scheduled task plus an accepted offer into a launch message.
//!
//! The factory holds no mutable state. All collaborators are read-only and shared, so one
//! factory may serve any number of concurrent translation calls.
use std::{sync::Arc, time::Instant};

use ferry_model::{
    AssignedTask, Container, DockerContainer, MesosContainer, ResourceBag, TaskConfig,
};
use ferry_proto::{Offer, TaskId, TaskInfo};
use tracing::{debug, error, instrument, trace, warn};

use crate::{
    command::{CommandResolver, ProcessCommandResolver},
    context::FactoryContext,
    encode::{JsonPayloadEncoder, PayloadEncoder},
    error::TranslateError,
    map::{to_discovery_info, to_kill_policy, to_task_labels},
    offer::{OfferMatcher, OfferSlicer},
    registry::{ExecutorDescriptor, ExecutorRegistry},
};

mod container;
mod executor;

use container::{docker_command, docker_container, mesos_container};
use executor::build_executor;

/// Launch strategy selected for a task before any offer is consumed.
enum Launch<'a> {
    /// Native container driven by a configured executor.
    Executor {
        mesos: &'a MesosContainer,
        descriptor: &'a ExecutorDescriptor,
    },
    /// Legacy container run directly with a shell command.
    Legacy(&'a DockerContainer),
}

/// Builds resource-manager launch messages for assigned tasks.
pub struct TaskFactory {
    registry: Arc<dyn ExecutorRegistry>,
    matcher: Arc<dyn OfferMatcher>,
    resolver: Arc<dyn CommandResolver>,
    encoder: Arc<dyn PayloadEncoder>,
    ctx: FactoryContext,
}

impl TaskFactory {
    /// Create a factory with the default collaborators:
    /// [`OfferSlicer`], [`ProcessCommandResolver`] and [`JsonPayloadEncoder`].
    pub fn new(registry: Arc<dyn ExecutorRegistry>, ctx: FactoryContext) -> Self {
        Self {
            registry,
            matcher: Arc::new(OfferSlicer),
            resolver: Arc::new(ProcessCommandResolver),
            encoder: Arc::new(JsonPayloadEncoder),
            ctx,
        }
    }

    /// Replace the offer matcher.
    pub fn with_matcher(mut self, matcher: Arc<dyn OfferMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Replace the command resolver used for legacy containers.
    pub fn with_resolver(mut self, resolver: Arc<dyn CommandResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the task payload encoder.
    pub fn with_encoder(mut self, encoder: Arc<dyn PayloadEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Build the launch message for `task` on `offer`.
    ///
    /// `revocable` selects revocable cpus from the offer. On error nothing is produced and the
    /// offer is left untouched; retrying is up to the caller.
    pub fn create_from(
        &self,
        task: &AssignedTask,
        offer: &Offer,
        revocable: bool,
    ) -> Result<TaskInfo, TranslateError> {
        let started = Instant::now();
        let container = task.task.container_kind();
        let metrics = self.ctx.metrics();

        let res = self.translate(task, offer, revocable);
        match &res {
            Ok(_) => {
                let us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
                metrics.record_task_translated(container, us);
            }
            Err(e) => {
                debug!(task_id = %task.task_id, error = %e, "task translation failed");
                metrics.record_translation_failed(container, e.kind());
            }
        }
        res
    }

    #[instrument(
        level = "debug",
        skip(self, task, offer),
        fields(
            task_id = %task.task_id,
            job = %task.task.job,
            container = task.task.container_kind()
        )
    )]
    fn translate(
        &self,
        task: &AssignedTask,
        offer: &Offer,
        revocable: bool,
    ) -> Result<TaskInfo, TranslateError> {
        trace!(task = ?task, "translating task");
        let cfg = &task.task;

        let launch = self.launch_for(cfg)?;
        cfg.resources
            .validate()
            .map_err(|e| TranslateError::Descriptor(e.to_string()))?;
        let overhead = self.overhead(cfg);
        let accepted = self.matcher.accept(offer, task, &overhead, revocable)?;
        debug!(
            task_resources = accepted.task_resources.len(),
            executor_resources = accepted.executor_resources.len(),
            "offer accepted"
        );

        let cluster = self.ctx.server().cluster_name();
        let discovery = self
            .registry
            .discovery_enabled()
            .then(|| to_discovery_info(task, cluster));

        let base = TaskInfo {
            name: cfg.job.canonical(),
            task_id: TaskId {
                value: task.task_id.clone(),
            },
            slave_id: offer.slave_id.clone(),
            resources: accepted.task_resources,
            labels: Some(to_task_labels(cfg)),
            discovery,
            ..Default::default()
        };

        match launch {
            Launch::Executor { mesos, descriptor } => {
                let container = mesos_container(mesos, descriptor);
                debug!(image = container.is_some(), "launching through executor");

                let executor =
                    build_executor(descriptor, task, accepted.executor_resources, container);
                let data = self.encoder.encode(task).inspect_err(|e| {
                    error!(task_id = %task.task_id, error = %e, "unable to serialize task");
                })?;

                Ok(TaskInfo {
                    executor: Some(executor),
                    data: Some(data),
                    ..base
                })
            }
            Launch::Legacy(docker) => {
                if cfg.executor_config.is_none() {
                    warn!("legacy container has no executor config, running image entrypoint");
                }
                if !accepted.executor_resources.is_empty() {
                    debug!("legacy container runs without an executor, executor share unused");
                }
                let resolved = self.resolver.resolve(cfg, task.instance_id);

                Ok(TaskInfo {
                    container: Some(docker_container(docker, &resolved)),
                    command: Some(docker_command(task, &resolved, cluster)),
                    kill_policy: cfg.kill_grace_period_ms.map(to_kill_policy),
                    ..base
                })
            }
        }
    }

    fn launch_for<'a>(&'a self, cfg: &'a TaskConfig) -> Result<Launch<'a>, TranslateError> {
        match &cfg.container {
            Some(Container::Mesos(mesos)) => {
                let descriptor = match cfg.executor_name() {
                    Some(name) => self.registry.by_name(name).ok_or_else(|| {
                        TranslateError::Descriptor(format!("executor '{name}' is not configured"))
                    })?,
                    None => self.registry.default_executor().ok_or_else(|| {
                        TranslateError::Descriptor(
                            "native container names no executor and no default is configured"
                                .into(),
                        )
                    })?,
                };
                Ok(Launch::Executor { mesos, descriptor })
            }
            Some(Container::Docker(docker)) => Ok(Launch::Legacy(docker)),
            None => Err(TranslateError::Descriptor(
                "task had no supported container set".into(),
            )),
        }
    }

    /// Executor overhead; empty when the task names no executor or an unknown one.
    fn overhead(&self, cfg: &TaskConfig) -> ResourceBag {
        cfg.executor_name()
            .and_then(|name| self.registry.overhead_by_name(name))
            .unwrap_or(ResourceBag::EMPTY)
    }
}
