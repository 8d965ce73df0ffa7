use ferry_model::{Image, Mode, Volume};
use ferry_proto::{image, volume};

use crate::constants::TASK_FILESYSTEM_MOUNT_POINT;

/// Map by name, never by ordinal: the two enumerations number their values differently.
pub fn to_volume_mode(m: Mode) -> volume::Mode {
    match m {
        Mode::Ro => volume::Mode::Ro,
        Mode::Rw => volume::Mode::Rw,
    }
}

pub fn to_volume(v: &Volume) -> ferry_proto::Volume {
    ferry_proto::Volume {
        mode: to_volume_mode(v.mode) as i32,
        container_path: v.container_path.clone(),
        host_path: Some(v.host_path.clone()),
        ..Default::default()
    }
}

pub fn to_image(i: &Image) -> ferry_proto::Image {
    match i {
        Image::Docker { name, tag } => ferry_proto::Image {
            r#type: image::Type::Docker as i32,
            docker: Some(image::Docker {
                name: format!("{name}:{tag}"),
            }),
            ..Default::default()
        },
        Image::Appc { name, image_id } => ferry_proto::Image {
            r#type: image::Type::Appc as i32,
            appc: Some(image::Appc {
                name: name.clone(),
                id: Some(image_id.clone()),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}

/// Read-only mount of `i` at the task filesystem mount point.
pub fn image_volume(i: &Image) -> ferry_proto::Volume {
    ferry_proto::Volume {
        mode: volume::Mode::Ro as i32,
        container_path: TASK_FILESYSTEM_MOUNT_POINT.to_string(),
        image: Some(to_image(i)),
        ..Default::default()
    }
}
