// crates/frontend-kernel/src/infrastructure/redis/redis_session_repository.rs

use async_trait::async_trait;
use fred::clients::Pool;
use fred::prelude::*;
use fred::types::{Builder, Expiration};
use std::time::Duration;

use crate::domain::ports::SessionRepository;
use crate::errors::{AppError, AppResult, ErrorCode};

const SESSION_KEY_PREFIX: &str = "session:";

/// Backend de sessions redis, construit une seule fois au démarrage
/// depuis l'URL du document de discovery.
pub struct RedisSessionRepository {
    pool: Pool,
    default_ttl: Duration,
}

impl RedisSessionRepository {
    pub async fn new(
        redis_url: &str,
        max_clients: usize,
        default_ttl: Duration,
    ) -> AppResult<Self> {
        let config = Config::from_url(redis_url)
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        let pool = Builder::from_config(config)
            .with_connection_config(|cfg| {
                cfg.connection_timeout = Duration::from_secs(5);
                cfg.internal_command_timeout = Duration::from_secs(5);
                cfg.max_command_attempts = 5;
            })
            .set_policy(ReconnectPolicy::new_exponential(0, 100, 1000, 2))
            .build_pool(max_clients)
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        pool.init()
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        // On attend que TOUS les clients du pool soient connectés
        pool.wait_for_connect()
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        Ok(Self { pool, default_ttl })
    }

    fn session_key(session_id: &str) -> String {
        format!("{SESSION_KEY_PREFIX}{session_id}")
    }

    fn map_expiration(ttl: Option<Duration>) -> Option<Expiration> {
        ttl.map(|d| {
            if d < Duration::from_secs(1) {
                Expiration::PX(d.as_millis() as i64)
            } else {
                Expiration::EX(d.as_secs() as i64)
            }
        })
    }
}

#[async_trait]
impl SessionRepository for RedisSessionRepository {
    async fn get(&self, session_id: &str) -> AppResult<Option<String>> {
        let value: Option<String> = self
            .pool
            .get(Self::session_key(session_id))
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        Ok(value)
    }

    async fn set(&self, session_id: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        let expiration = Self::map_expiration(ttl.or(Some(self.default_ttl)));

        self.pool
            .set::<(), _, _>(Self::session_key(session_id), value, expiration, None, false)
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        self.pool
            .del::<i64, _>(Self::session_key(session_id))
            .await
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        Ok(())
    }
}
