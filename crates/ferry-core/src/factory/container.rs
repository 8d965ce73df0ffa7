use ferry_model::{AssignedTask, DockerContainer, MesosContainer};
use ferry_proto::{CommandInfo, ContainerInfo, container_info};

use crate::{
    command::ResolvedCommand,
    map::{credentials_uri, image_volume, to_environment, to_image, to_parameters, to_volume},
    registry::ExecutorDescriptor,
};

/// Native container for an image-backed task; `None` when the task runs on the host filesystem.
///
/// Volumes: executor mounts, then task volumes, then the image mount.
pub(super) fn mesos_container(
    mesos: &MesosContainer,
    descriptor: &ExecutorDescriptor,
) -> Option<ContainerInfo> {
    let image = mesos.image.as_ref()?;

    let volumes = descriptor
        .volume_mounts
        .iter()
        .cloned()
        .chain(mesos.volumes.iter().map(to_volume))
        .chain(std::iter::once(image_volume(image)))
        .collect();

    Some(ContainerInfo {
        r#type: container_info::Type::Mesos as i32,
        volumes,
        mesos: Some(container_info::MesosInfo {
            image: Some(to_image(image)),
        }),
        ..Default::default()
    })
}

pub(super) fn docker_container(
    docker: &DockerContainer,
    resolved: &ResolvedCommand,
) -> ContainerInfo {
    ContainerInfo {
        r#type: container_info::Type::Docker as i32,
        docker: Some(container_info::DockerInfo {
            image: docker.image.clone(),
            parameters: to_parameters(&resolved.parameters),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Command for a legacy container.
///
/// An empty command line runs the image entrypoint unchanged.
pub(super) fn docker_command(
    task: &AssignedTask,
    resolved: &ResolvedCommand,
    cluster: &str,
) -> CommandInfo {
    let (shell, value) = if resolved.command_line.is_empty() {
        (false, None)
    } else {
        (true, Some(resolved.command_line.clone()))
    };

    CommandInfo {
        uris: vec![credentials_uri()],
        environment: Some(to_environment(task, cluster)),
        shell: Some(shell),
        value,
        ..Default::default()
    }
}
