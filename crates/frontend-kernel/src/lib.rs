// crates/frontend-kernel/src/lib.rs

pub mod domain;
pub mod errors;
pub mod forms;
pub mod infrastructure;
pub mod web;
