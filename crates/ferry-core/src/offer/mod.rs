//! Offer acceptance: splitting an offer between a task and its executor.
use ferry_model::{AssignedTask, ResourceBag};
use ferry_proto::{Offer, Resource};

use crate::error::InsufficientResources;

mod slicer;
pub use slicer::OfferSlicer;

/// Partition of an offer's resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptedOffer {
    /// Resources reserved for the executor process.
    pub executor_resources: Vec<Resource>,
    /// Resources granted to the task itself, ports included.
    pub task_resources: Vec<Resource>,
}

/// Computes how much of an offer a task and its executor consume.
///
/// Implementations must be pure functions of their inputs: the factory may call them
/// concurrently and expects identical results for identical arguments.
pub trait OfferMatcher: Send + Sync {
    fn accept(
        &self,
        offer: &Offer,
        task: &AssignedTask,
        overhead: &ResourceBag,
        revocable: bool,
    ) -> Result<AcceptedOffer, InsufficientResources>;
}
