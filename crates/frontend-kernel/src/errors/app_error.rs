// crates/frontend-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Template introuvable (récupérable en amont, fatal ici)
            DomainError::TemplateNotFound { path } => Self::new(
                ErrorCode::TemplateNotFound,
                format!("template '{path}' not found"),
            ),

            // 2. Cas : Échec de rendu (propagé tel quel)
            DomainError::Render { path, reason } => Self {
                code: ErrorCode::RenderFailed,
                message: format!("failed to render '{path}'"),
                details: Some(serde_json::json!({ "path": path, "reason": reason })),
            },

            // 3. Cas : Service absent du discovery (fatal au démarrage)
            DomainError::ServiceNotFound { name } => Self::new(
                ErrorCode::ServiceNotFound,
                format!("service '{name}' not found in the discovery document"),
            ),

            DomainError::Discovery { reason } => {
                Self::new(ErrorCode::InvalidDiscoveryDocument, reason)
            }

            // 4. Cas : Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 5. Cas : Erreurs techniques, on masque le détail au client
            DomainError::Infrastructure(_) | DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
