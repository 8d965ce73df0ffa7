use ferry_model::{AssignedTask, SOURCE_LABEL};
use ferry_proto::{ContainerInfo, ExecutorId, ExecutorInfo, Labels, Resource};

use crate::{
    map::{source_labels, to_fetcher_uri},
    registry::ExecutorDescriptor,
};

/// Executor launch descriptor for one task.
///
/// Starts from the configured template; identity, source, fetch list and resources are
/// task specific. Template labels are kept, except a template `source` label.
pub(super) fn build_executor(
    descriptor: &ExecutorDescriptor,
    task: &AssignedTask,
    resources: Vec<Resource>,
    container: Option<ContainerInfo>,
) -> ExecutorInfo {
    let template = &descriptor.executor;
    let source = task.source_name();

    let mut command = template.command.clone();
    command
        .uris
        .extend(task.task.fetcher_uris.iter().map(to_fetcher_uri));

    ExecutorInfo {
        executor_id: ExecutorId {
            value: format!("{}{}", descriptor.task_prefix, task.task_id),
        },
        command,
        container,
        resources,
        labels: Some(executor_labels(template.labels.as_ref(), &source)),
        source: Some(source),
        ..template.clone()
    }
}

fn executor_labels(template: Option<&Labels>, source: &str) -> Labels {
    let mut labels: Vec<_> = template
        .map(|t| t.labels.iter().filter(|l| l.key != SOURCE_LABEL).cloned().collect())
        .unwrap_or_default();
    labels.extend(source_labels(source).labels);
    Labels { labels }
}
