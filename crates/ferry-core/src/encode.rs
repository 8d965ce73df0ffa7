//! Opaque task payload attached to launch messages that carry an executor.
use ferry_model::AssignedTask;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to encode task payload: {0}")]
pub struct EncodeError(pub String);

/// Serializes the assigned task for the destination executor.
///
/// The encoding is a contract between the scheduler and its executor only.
pub trait PayloadEncoder: Send + Sync {
    fn encode(&self, task: &AssignedTask) -> Result<Vec<u8>, EncodeError>;
}

/// JSON payload encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayloadEncoder;

impl PayloadEncoder for JsonPayloadEncoder {
    fn encode(&self, task: &AssignedTask) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(task).map_err(|e| EncodeError(e.to_string()))
    }
}
