//! Quote domain models, persistence-friendly types, and helpers.

#[allow(clippy::module_inception)]
pub mod budget;
pub mod parts;
pub mod service;

pub use budget::{Budget, ClientData};
pub use parts::{seed_services, FIXED_PARTS};
pub use service::{compute_total, ServiceSelection};
