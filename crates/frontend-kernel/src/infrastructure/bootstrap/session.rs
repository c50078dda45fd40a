// crates/frontend-kernel/src/infrastructure/bootstrap/session.rs

use std::sync::Arc;
use std::time::Duration;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::discovery::ServiceRegistry;
use crate::infrastructure::redis::RedisSessionRepository;

pub struct SessionConfig {
    /// Nom du service redis dans le document de discovery.
    pub redis_service_name: String,
    pub max_clients: usize,
    pub default_ttl: Duration,
}

impl SessionConfig {
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            redis_service_name: std::env::var("SESSION_REDIS_SERVICE_NAME").map_err(|_| {
                AppError::new(
                    ErrorCode::InternalError,
                    "SESSION_REDIS_SERVICE_NAME must be set",
                )
            })?,
            max_clients: std::env::var("SESSION_REDIS_MAX_CLIENTS")
                .unwrap_or_else(|_| "16".to_string())
                .parse()
                .map_err(|_| {
                    AppError::new(ErrorCode::InternalError, "Invalid SESSION_REDIS_MAX_CLIENTS")
                })?,
            default_ttl: std::env::var("SESSION_TTL_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| {
                    AppError::new(ErrorCode::InternalError, "Invalid SESSION_TTL_SECONDS")
                })?,
        })
    }
}

/// Câblage one-shot du backend de sessions au démarrage du processus.
///
/// Si le service nommé est absent du document de discovery, l'erreur de
/// lookup remonte telle quelle et l'application ne doit pas démarrer.
pub async fn init_session_repository(
    registry: &ServiceRegistry,
    config: &SessionConfig,
) -> AppResult<Arc<RedisSessionRepository>> {
    let url = registry.url(&config.redis_service_name)?;

    tracing::info!(
        service = %config.redis_service_name,
        "Configuring redis-backed sessions"
    );

    let repository =
        RedisSessionRepository::new(url, config.max_clients, config.default_ttl).await?;

    Ok(Arc::new(repository))
}
