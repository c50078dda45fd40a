// crates/frontend-kernel/src/infrastructure/mod.rs

pub mod discovery;

#[cfg(feature = "redis")]
pub mod redis;

#[cfg(feature = "redis")]
pub mod bootstrap;
