use serde::{Deserialize, Serialize};

/// Filesystem image backing a native container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Image {
    /// Tag-addressed image from a registry.
    #[serde(rename_all = "camelCase")]
    Docker { name: String, tag: String },
    /// Content-addressed image.
    #[serde(rename_all = "camelCase")]
    Appc { name: String, image_id: String },
}

impl Image {
    pub fn docker(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Image::Docker {
            name: name.into(),
            tag: tag.into(),
        }
    }

    pub fn appc(name: impl Into<String>, image_id: impl Into<String>) -> Self {
        Image::Appc {
            name: name.into(),
            image_id: image_id.into(),
        }
    }

    /// Returns the backend as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            Image::Docker { .. } => "docker",
            Image::Appc { .. } => "appc",
        }
    }
}
