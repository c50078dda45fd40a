// crates/frontend-kernel/src/infrastructure/discovery/mod.rs

mod service_registry;

pub use service_registry::{Credentials, ServiceBinding, ServiceRegistry};

#[cfg(test)]
mod service_registry_test;
