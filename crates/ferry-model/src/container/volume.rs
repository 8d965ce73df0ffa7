use serde::{Deserialize, Serialize};

/// Access mode of a mounted volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Read-only mount.
    #[serde(alias = "RO")]
    Ro,
    /// Read-write mount.
    #[serde(alias = "RW")]
    Rw,
}

/// Host path mounted into a container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub container_path: String,
    pub host_path: String,
    pub mode: Mode,
}

impl Volume {
    pub fn new(container_path: impl Into<String>, host_path: impl Into<String>, mode: Mode) -> Self {
        Self {
            container_path: container_path.into(),
            host_path: host_path.into(),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_accepts_both_spellings() {
        let v: Volume =
            serde_json::from_str(r#"{"containerPath":"/c","hostPath":"/h","mode":"RO"}"#).unwrap();
        assert_eq!(v, Volume::new("/c", "/h", Mode::Ro));

        let json = serde_json::to_string(&Volume::new("/c", "/h", Mode::Rw)).unwrap();
        assert!(json.contains(r#""mode":"rw""#));

        assert!(
            serde_json::from_str::<Volume>(r#"{"containerPath":"/c","hostPath":"/h","mode":"rx"}"#)
                .is_err()
        );
    }
}
