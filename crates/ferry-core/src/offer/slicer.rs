use std::collections::BTreeSet;

use ferry_model::{AssignedTask, ResourceBag};
use ferry_proto::{Offer, Resource};
use tracing::trace;

use super::{AcceptedOffer, OfferMatcher};
use crate::{
    error::InsufficientResources,
    map::{
        CPUS, DISK_MB, PORTS, RAM_MB, from_milli, port_resource, scalar_resource, scalar_value,
        to_milli,
    },
};

/// Default offer matcher.
///
/// Scalar resources (`cpus`, `mem`, `disk`) are carved out of the offer in offer order,
/// executor share first, keeping the role and revocability of each source resource.
/// When `revocable` is set, cpus come only from revocable resources; everything else
/// always comes from non-revocable resources. Assigned port numbers are taken from the
/// offered `ports` ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferSlicer;

struct Split {
    executor: Vec<Resource>,
    task: Vec<Resource>,
}

fn slice_scalar(
    name: &str,
    pool: &[&Resource],
    executor: f64,
    task: f64,
) -> Result<Split, InsufficientResources> {
    let available = pool
        .iter()
        .map(|r| to_milli(scalar_value(r)))
        .fold(0u64, u64::saturating_add);
    let insufficient = |requested: f64| InsufficientResources {
        resource: name.to_string(),
        requested,
        available: from_milli(available),
    };

    if !task.is_finite() || task < 0.0 {
        return Err(insufficient(task));
    }

    let mut executor_left = to_milli(executor);
    let mut task_left = to_milli(task);
    // a request past the fixed-point range can never be covered
    let requested = executor_left
        .checked_add(task_left)
        .ok_or_else(|| insufficient(executor + task))?;

    if available < requested {
        return Err(insufficient(from_milli(requested)));
    }

    let mut split = Split {
        executor: Vec::new(),
        task: Vec::new(),
    };
    for res in pool {
        let mut left = to_milli(scalar_value(res));

        let take = left.min(executor_left);
        if take > 0 {
            split.executor.push(scalar_resource(res, from_milli(take)));
            executor_left -= take;
            left -= take;
        }

        let take = left.min(task_left);
        if take > 0 {
            split.task.push(scalar_resource(res, from_milli(take)));
            task_left -= take;
        }
    }
    Ok(split)
}

fn take_ports(
    offer: &Offer,
    wanted: &BTreeSet<u64>,
) -> Result<Vec<Resource>, InsufficientResources> {
    let mut remaining = wanted.clone();
    let mut out = Vec::new();

    for res in offer
        .resources
        .iter()
        .filter(|r| r.name == PORTS && r.revocable.is_none())
    {
        let Some(ranges) = &res.ranges else {
            continue;
        };
        let taken: Vec<u64> = remaining
            .iter()
            .copied()
            .filter(|p| ranges.range.iter().any(|r| r.begin <= *p && *p <= r.end))
            .collect();
        if taken.is_empty() {
            continue;
        }
        for p in &taken {
            remaining.remove(p);
        }
        out.push(port_resource(res, &taken));
    }

    if !remaining.is_empty() {
        return Err(InsufficientResources {
            resource: PORTS.to_string(),
            requested: wanted.len() as f64,
            available: (wanted.len() - remaining.len()) as f64,
        });
    }
    Ok(out)
}

impl OfferMatcher for OfferSlicer {
    fn accept(
        &self,
        offer: &Offer,
        task: &AssignedTask,
        overhead: &ResourceBag,
        revocable: bool,
    ) -> Result<AcceptedOffer, InsufficientResources> {
        let request = task.task.resources.bag();
        let demands = [
            (CPUS, overhead.cpus, request.cpus, revocable),
            (RAM_MB, overhead.ram_mb as f64, request.ram_mb as f64, false),
            (DISK_MB, overhead.disk_mb as f64, request.disk_mb as f64, false),
        ];

        let mut accepted = AcceptedOffer::default();
        for (name, executor, wanted, from_revocable) in demands {
            let pool: Vec<&Resource> = offer
                .resources
                .iter()
                .filter(|r| r.name == name && r.scalar.is_some())
                .filter(|r| r.revocable.is_some() == from_revocable)
                .collect();

            let split = slice_scalar(name, &pool, executor, wanted)?;
            accepted.executor_resources.extend(split.executor);
            accepted.task_resources.extend(split.task);
        }

        let ports: BTreeSet<u64> = task.assigned_ports.values().map(|p| u64::from(*p)).collect();
        accepted.task_resources.extend(take_ports(offer, &ports)?);

        trace!(
            executor = accepted.executor_resources.len(),
            task = accepted.task_resources.len(),
            "offer sliced"
        );
        Ok(accepted)
    }
}
