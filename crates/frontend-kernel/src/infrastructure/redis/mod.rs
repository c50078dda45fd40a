// crates/frontend-kernel/src/infrastructure/redis/mod.rs

mod redis_session_repository;

pub use redis_session_repository::RedisSessionRepository;
