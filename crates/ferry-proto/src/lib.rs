//! Wire types of the cluster resource manager.
//!
//! Generated by `prost` from `proto/mesos/mesos.proto`. The schema is an external
//! contract: field numbers and enumerations mirror the upstream definition exactly.
pub mod mesos {
    include!(concat!(env!("OUT_DIR"), "/mesos.rs"));
}

pub use mesos::*;
pub use prost::Message;
