// crates/frontend-kernel/src/infrastructure/bootstrap/mod.rs

mod session;

pub use session::{init_session_repository, SessionConfig};

#[cfg(test)]
mod session_test;
