// crates/frontend-kernel/src/domain/mod.rs

pub mod ports;
