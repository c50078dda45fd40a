// crates/frontend-kernel/src/domain/ports/session_repository.rs

use crate::errors::AppResult;
use async_trait::async_trait;
use std::time::Duration;

/// Backend de sessions, partagé process-wide après le bootstrap.
/// Les valeurs sont du JSON déjà sérialisé (`&str`), comme pour le cache.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get(&self, session_id: &str) -> AppResult<Option<String>>;
    async fn set(&self, session_id: &str, value: &str, ttl: Option<Duration>) -> AppResult<()>;
    async fn delete(&self, session_id: &str) -> AppResult<()>;
}
