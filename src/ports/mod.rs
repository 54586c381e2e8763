//! Capability traits consumed by the services.

pub mod packaging_policy;

pub use packaging_policy::PackagingPolicy;
