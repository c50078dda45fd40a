// crates/frontend-kernel/src/domain/ports/session_repository_stub.rs

use crate::domain::ports::SessionRepository;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub struct SessionRepositoryStub {
    pub storage: Mutex<HashMap<String, String>>,
    pub fail_all: bool,
}

impl Default for SessionRepositoryStub {
    fn default() -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
            fail_all: false,
        }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryStub {
    async fn get(&self, session_id: &str) -> AppResult<Option<String>> {
        if self.fail_all {
            return Err(AppError::new(ErrorCode::InfrastructureFailure, "Store Down"));
        }
        Ok(self.storage.lock().unwrap().get(session_id).cloned())
    }

    async fn set(&self, session_id: &str, value: &str, _ttl: Option<Duration>) -> AppResult<()> {
        if self.fail_all {
            return Err(AppError::new(ErrorCode::InfrastructureFailure, "Store Down"));
        }
        self.storage
            .lock()
            .unwrap()
            .insert(session_id.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        if self.fail_all {
            return Err(AppError::new(ErrorCode::InfrastructureFailure, "Store Down"));
        }
        self.storage.lock().unwrap().remove(session_id);
        Ok(())
    }
}
