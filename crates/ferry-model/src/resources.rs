use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Resources requested by a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequest {
    pub num_cpus: f64,
    pub ram_mb: u64,
    pub disk_mb: u64,
}

impl ResourceRequest {
    pub fn new(num_cpus: f64, ram_mb: u64, disk_mb: u64) -> Self {
        Self {
            num_cpus,
            ram_mb,
            disk_mb,
        }
    }

    /// Check that the request can be placed at all: cpus must be finite and non-negative.
    pub fn validate(&self) -> ModelResult<()> {
        ResourceBag::new(self.num_cpus, self.ram_mb, self.disk_mb).map(|_| ())
    }

    /// Request as a bag.
    pub fn bag(&self) -> ResourceBag {
        ResourceBag {
            cpus: self.num_cpus,
            ram_mb: self.ram_mb,
            disk_mb: self.disk_mb,
        }
    }
}

/// Plain bundle of scalar resources.
///
/// Used for executor overhead: the resources consumed by the executor process itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBag {
    pub cpus: f64,
    pub ram_mb: u64,
    pub disk_mb: u64,
}

impl ResourceBag {
    /// Bag with every quantity at zero.
    pub const EMPTY: ResourceBag = ResourceBag {
        cpus: 0.0,
        ram_mb: 0,
        disk_mb: 0,
    };

    /// Create a bag, rejecting negative or non-finite cpu values.
    pub fn new(cpus: f64, ram_mb: u64, disk_mb: u64) -> ModelResult<Self> {
        if !cpus.is_finite() || cpus < 0.0 {
            return Err(ModelError::Invalid(format!("cpus must be >= 0, got {cpus}")));
        }
        Ok(Self {
            cpus,
            ram_mb,
            disk_mb,
        })
    }

    /// Returns `true` if every quantity is zero.
    pub fn is_empty(&self) -> bool {
        self.cpus == 0.0 && self.ram_mb == 0 && self.disk_mb == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bag() {
        assert!(ResourceBag::EMPTY.is_empty());
        assert_eq!(ResourceBag::default(), ResourceBag::EMPTY);
        assert!(!ResourceBag::new(0.0, 1, 0).unwrap().is_empty());
    }

    #[test]
    fn new_rejects_negative_cpus() {
        assert!(ResourceBag::new(-0.5, 0, 0).is_err());
        assert!(ResourceBag::new(f64::NAN, 0, 0).is_err());
    }

    #[test]
    fn request_bag_matches_request() {
        let req = ResourceRequest::new(2.0, 256, 64);
        assert_eq!(req.bag(), ResourceBag::new(2.0, 256, 64).unwrap());
    }

    #[test]
    fn validate_rejects_unplaceable_cpus() {
        assert!(ResourceRequest::new(0.0, 1, 1).validate().is_ok());
        for cpus in [-2.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    ResourceRequest::new(cpus, 1, 1).validate(),
                    Err(ModelError::Invalid(_))
                ),
                "{cpus}"
            );
        }
    }
}
