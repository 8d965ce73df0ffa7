use thiserror::Error;

use crate::encode::EncodeError;

/// The offer cannot cover the task plus its executor overhead.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("insufficient {resource}: requested {requested}, available {available}")]
pub struct InsufficientResources {
    /// Resource name as it appears in the offer (`cpus`, `mem`, `disk`, `ports`).
    pub resource: String,
    pub requested: f64,
    pub available: f64,
}

/// Failure of a single translation call.
///
/// No partial message is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The task description cannot be expressed as a launch message.
    #[error("invalid task descriptor: {0}")]
    Descriptor(String),

    #[error("offer rejected: {0}")]
    InsufficientResources(#[from] InsufficientResources),

    /// The executor payload could not be serialized. Indicates a bug, not a transient condition.
    #[error("internal error: {0}")]
    Encoding(#[from] EncodeError),
}

impl TranslateError {
    /// Stable, low-cardinality label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::Descriptor(_) => "descriptor",
            TranslateError::InsufficientResources(_) => "insufficient_resources",
            TranslateError::Encoding(_) => "encoding",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse executor settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate executor name: '{0}' is already configured")]
    DuplicateExecutor(String),

    #[error("executor '{0}' has an empty task prefix")]
    EmptyTaskPrefix(String),

    #[error("invalid executor settings: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        let insufficient = InsufficientResources {
            resource: "cpus".into(),
            requested: 1.0,
            available: 0.0,
        };

        assert_eq!(TranslateError::Descriptor("x".into()).kind(), "descriptor");
        assert_eq!(
            TranslateError::from(insufficient).kind(),
            "insufficient_resources"
        );
        assert_eq!(
            TranslateError::from(EncodeError("boom".into())).kind(),
            "encoding"
        );
    }

    #[test]
    fn insufficient_message_names_resource() {
        let err = InsufficientResources {
            resource: "mem".into(),
            requested: 256.0,
            available: 128.0,
        };
        assert_eq!(
            err.to_string(),
            "insufficient mem: requested 256, available 128"
        );
    }
}
